//! Logging statistics from simulation runs
mod display;

pub use display::DisplayLogger;

use enum_map::Enum;
use std::convert::From;
use std::io;
use thiserror::Error;

/// Simulation run events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum)]
pub enum Event {
    /// A single agent step.
    Step,
    /// A periodic snapshot of the agent state.
    Report,
}

/// A value that can be logged.
#[derive(Debug, Clone, PartialEq)]
pub enum Loggable {
    /// Nothing. No data to log.
    /// Logging Nothing data may still produce a placeholder entry for the name.
    Nothing,
    /// A scalar value. Aggregate by taking means.
    Scalar(f64),
    /// A sample from a distribution over 0 .. (size-1)
    IndexSample { value: usize, size: usize },
    /// A vector of values, one per action. Aggregate by keeping the latest.
    Vector(Vec<f64>),
}

impl Loggable {
    const fn kind(&self) -> &'static str {
        match self {
            Self::Nothing => "Nothing",
            Self::Scalar(_) => "Scalar",
            Self::IndexSample { .. } => "IndexSample",
            Self::Vector(_) => "Vector",
        }
    }
}

impl From<f64> for Loggable {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

impl From<Vec<f64>> for Loggable {
    fn from(values: Vec<f64>) -> Self {
        Self::Vector(values)
    }
}

impl From<&[f64]> for Loggable {
    fn from(values: &[f64]) -> Self {
        Self::Vector(values.to_vec())
    }
}

/// Log statistics from a simulation run.
pub trait Logger {
    /// Log a value.
    ///
    /// # Args
    /// * `event` - The event associated with this value.
    /// * `name` - The name that identifies this value.
    /// * `value` - The value to log.
    ///
    /// # Returns
    /// May return an error if the logged value is structurally incompatible
    /// with previous values logged under the same name,
    /// or if writing earlier output failed.
    fn log(&mut self, event: Event, name: &str, value: Loggable) -> Result<(), LogError>;

    /// Mark the end of an event.
    fn done(&mut self, event: Event);
}

/// Logger that does nothing
impl Logger for () {
    fn log(&mut self, _: Event, _: &str, _: Loggable) -> Result<(), LogError> {
        Ok(())
    }

    fn done(&mut self, _: Event) {}
}

impl<L: Logger + ?Sized> Logger for &mut L {
    fn log(&mut self, event: Event, name: &str, value: Loggable) -> Result<(), LogError> {
        L::log(self, event, name, value)
    }

    fn done(&mut self, event: Event) {
        L::done(self, event)
    }
}

/// Logger that prefixes every name with a scope, as `scope/name`.
#[derive(Debug)]
pub struct ScopedLogger<'a, L: ?Sized> {
    logger: &'a mut L,
    scope: String,
}

impl<'a, L: ?Sized> ScopedLogger<'a, L> {
    pub fn new<S: Into<String>>(logger: &'a mut L, scope: S) -> Self {
        Self {
            logger,
            scope: scope.into(),
        }
    }
}

impl<'a, L: Logger + ?Sized> Logger for ScopedLogger<'a, L> {
    fn log(&mut self, event: Event, name: &str, value: Loggable) -> Result<(), LogError> {
        self.logger
            .log(event, &format!("{}/{}", self.scope, name), value)
    }

    fn done(&mut self, event: Event) {
        self.logger.done(event)
    }
}

/// An error from logging a value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LogError {
    /// A value incompatible with the values previously logged under the same name.
    #[error("\"{name}\": incompatible value {value:?}, expected {expected}")]
    Incompatible {
        name: String,
        value: Loggable,
        expected: String,
    },
    /// Writing logged output failed.
    #[error("failed to write log output: {0}")]
    Write(String),
}

impl LogError {
    pub fn new(name: &str, value: Loggable, expected: String) -> Self {
        Self::Incompatible {
            name: name.into(),
            value,
            expected,
        }
    }

    /// Name of the log entry, if the error concerns one.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Incompatible { name, .. } => Some(name.as_str()),
            Self::Write(_) => None,
        }
    }
}

impl From<io::Error> for LogError {
    fn from(err: io::Error) -> Self {
        Self::Write(err.to_string())
    }
}
