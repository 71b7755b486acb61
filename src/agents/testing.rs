//! Agent testing utilities
use crate::agents::Agent;
use crate::envs::StationaryBandit;
use crate::logging::{Event, LogError, Loggable, Logger};
use enum_map::EnumMap;

/// A trivial deterministic bandit with two arms:
/// the first arm always gives 0 reward and the second 1.
pub fn deterministic_bandit() -> StationaryBandit {
    StationaryBandit::new(vec![0.0, 1.0], 0.0).unwrap()
}

/// Check that the agent can be trained to perform well on [`deterministic_bandit`].
///
/// After `num_train_steps` steps the agent must pick the second arm
/// on at least a `threshold` fraction of the next 1000 steps.
pub fn train_deterministic_bandit<'a, A>(agent: &mut A, num_train_steps: u64, threshold: f64)
where
    A: Agent<'a, StationaryBandit>,
{
    assert_eq!(agent.bandit().means(), &[0.0, 1.0]);
    agent.run_sequence(num_train_steps, None, &mut ()).unwrap();

    let num_eval_steps = 1000;
    let action_1_count = (0..num_eval_steps)
        .filter(|_| agent.step().unwrap().action == 1)
        .count();
    assert!(
        action_1_count as f64 >= num_eval_steps as f64 * threshold,
        "second arm chosen {} / {} times",
        action_1_count,
        num_eval_steps
    );
}

/// Logger that records everything logged to it.
#[derive(Debug, Default)]
pub struct RecordingLogger {
    entries: Vec<(Event, String, Loggable)>,
    done: EnumMap<Event, u64>,
}

impl RecordingLogger {
    /// All values logged under `name` for `event`, in order.
    pub fn values(&self, event: Event, name: &str) -> Vec<&Loggable> {
        self.entries
            .iter()
            .filter(|(e, n, _)| *e == event && n == name)
            .map(|(_, _, value)| value)
            .collect()
    }

    /// Number of times `event` has completed.
    pub fn num_done(&self, event: Event) -> u64 {
        self.done[event]
    }
}

impl Logger for RecordingLogger {
    fn log(&mut self, event: Event, name: &str, value: Loggable) -> Result<(), LogError> {
        self.entries.push((event, name.into(), value));
        Ok(())
    }

    fn done(&mut self, event: Event) {
        self.done[event] += 1;
    }
}
