//! Command-line logger
use super::{Event, LogError, Loggable, Logger};
use crate::utils::stats::OnlineMeanVariance;
use enum_map::{enum_map, EnumMap};
use std::collections::BTreeMap;
use std::fmt;
use std::io::{self, Write};
use yansi::Paint;

/// Logger that writes summaries to standard output (or another writer).
///
/// Values logged between reports are aggregated per name and displayed
/// each time an [`Event::Report`] completes, and once more on drop.
/// A write failure while displaying a report is returned by the next call to
/// [`Logger::log`].
pub struct DisplayLogger<W: Write = io::Stdout> {
    events: EnumMap<Event, EventLog>,
    writer: W,
    /// First write error not yet returned from `log`.
    write_error: Option<io::Error>,
}

impl DisplayLogger {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for DisplayLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> DisplayLogger<W> {
    pub fn with_writer(writer: W) -> Self {
        Self {
            events: enum_map! { _ => EventLog::default() },
            writer,
            write_error: None,
        }
    }

    /// Write the summary and clear all stored data.
    ///
    /// # Errors
    /// Returns any error from the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        for (event, event_log) in self.events.iter_mut() {
            let summary_size = event_log.index - event_log.summary_start_index;
            if summary_size == 0 {
                continue;
            }

            write!(self.writer, "==== ")?;
            if summary_size == 1 {
                write!(self.writer, "{:?} {}", event, event_log.index)?;
            } else {
                write!(
                    self.writer,
                    "{:?}s {} - {}",
                    event,
                    event_log.summary_start_index + 1,
                    event_log.index
                )?;
            }
            writeln!(self.writer, " ====")?;

            for (name, aggregator) in &event_log.aggregators {
                writeln!(self.writer, "{}: {}", Paint::fixed(35, name), aggregator)?;
            }
            event_log.aggregators.clear();
            event_log.summary_start_index = event_log.index;
        }
        self.writer.flush()
    }
}

impl<W: Write> Logger for DisplayLogger<W> {
    fn log(&mut self, event: Event, name: &str, value: Loggable) -> Result<(), LogError> {
        if let Some(err) = self.write_error.take() {
            return Err(err.into());
        }
        let aggregators = &mut self.events[event].aggregators;
        if let Some(aggregator) = aggregators.get_mut(name) {
            if let Err((value, expected)) = aggregator.update(value) {
                return Err(LogError::new(name, value, expected));
            }
        } else {
            aggregators.insert(name.into(), Aggregator::new(value));
        }
        Ok(())
    }

    fn done(&mut self, event: Event) {
        self.events[event].index += 1;
        if event == Event::Report {
            if let Err(err) = self.flush() {
                self.write_error.get_or_insert(err);
            }
        }
    }
}

impl<W: Write> Drop for DisplayLogger<W> {
    fn drop(&mut self) {
        // Ensure everything is flushed. Nowhere to report a failure from here.
        let _ = self.flush();
    }
}

#[derive(Debug, Default)]
struct EventLog {
    /// Number of completed events
    index: u64,
    /// Value of `index` at the start of this summary period
    summary_start_index: u64,
    /// An aggregator for each log entry.
    aggregators: BTreeMap<String, Aggregator>,
}

#[derive(Debug)]
enum Aggregator {
    /// Aggregates nothing
    Nothing,
    ScalarMean(OnlineMeanVariance<f64>),
    IndexDistribution(Vec<u64>),
    Latest(Vec<f64>),
}

impl Aggregator {
    fn new(value: Loggable) -> Self {
        let mut aggregator = match value {
            Loggable::Nothing => Self::Nothing,
            Loggable::Scalar(_) => Self::ScalarMean(OnlineMeanVariance::default()),
            Loggable::IndexSample { size, .. } => Self::IndexDistribution(vec![0; size]),
            Loggable::Vector(_) => Self::Latest(Vec::new()),
        };
        // A fresh aggregator accepts its own kind
        let _ = aggregator.update(value);
        aggregator
    }

    /// Add a value, or return it with the expected kind if incompatible.
    fn update(&mut self, value: Loggable) -> Result<(), (Loggable, String)> {
        match (self, value) {
            (Self::Nothing, Loggable::Nothing) => {}
            (Self::ScalarMean(stats), Loggable::Scalar(x)) => stats.push(x),
            (Self::IndexDistribution(counts), Loggable::IndexSample { value, size })
                if size == counts.len() && value < size =>
            {
                counts[value] += 1
            }
            (Self::Latest(latest), Loggable::Vector(values)) => *latest = values,
            (aggregator, value) => return Err((value, aggregator.expected())),
        }
        Ok(())
    }

    fn expected(&self) -> String {
        match self {
            Self::Nothing => Loggable::Nothing.kind().into(),
            Self::ScalarMean(_) => Loggable::Scalar(0.0).kind().into(),
            Self::IndexDistribution(counts) => format!(
                "{} with size {}",
                Loggable::IndexSample { value: 0, size: 0 }.kind(),
                counts.len()
            ),
            Self::Latest(_) => Loggable::Vector(Vec::new()).kind().into(),
        }
    }
}

impl fmt::Display for Aggregator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Nothing => Ok(()),
            Self::ScalarMean(stats) => {
                write!(f, "{:.3}", stats.mean())?;
                if stats.count() > 1 {
                    if let Some(variance) = stats.variance() {
                        write!(
                            f,
                            " {}",
                            Paint::fixed(8, format!("(σ {:.3})", variance.sqrt()))
                        )?;
                    }
                }
                Ok(())
            }
            Self::IndexDistribution(counts) => {
                let total: u64 = counts.iter().sum();
                write!(f, "[")?;
                for (i, count) in counts.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    #[allow(clippy::cast_precision_loss)]
                    let fraction = *count as f64 / total.max(1) as f64;
                    write!(f, "{:.2}", fraction)?;
                }
                write!(f, "]")
            }
            Self::Latest(values) => {
                write!(f, "[")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:.3}", Paint::fixed(111, value))?;
                }
                write!(f, "]")
            }
        }
    }
}
