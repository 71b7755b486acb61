//! Command-line options
use super::agent::AgentType;
use clap::Parser;
use std::num::NonZeroU64;

#[derive(Parser, Debug, Clone, PartialEq)]
#[clap(
    name = "kbandit",
    version,
    author,
    about = "Compare agents on a stationary k-armed bandit"
)]
pub struct Options {
    /// Number of bandit arms
    #[clap(short = 'k', long, default_value_t = 3, help_heading = Some("BANDIT OPTIONS"))]
    pub num_actions: usize,

    /// Lower bound (inclusive) of the integer arm means
    #[clap(long, default_value_t = 0, allow_hyphen_values = true, help_heading = Some("BANDIT OPTIONS"))]
    pub min: i64,

    /// Upper bound (exclusive) of the integer arm means
    #[clap(long, default_value_t = 10, allow_hyphen_values = true, help_heading = Some("BANDIT OPTIONS"))]
    pub max: i64,

    /// Standard deviation of each arm's reward
    #[clap(long, default_value_t = 1.0, help_heading = Some("BANDIT OPTIONS"))]
    pub spread: f64,

    /// Bandit random seed
    #[clap(long, help_heading = Some("BANDIT OPTIONS"))]
    pub env_seed: Option<u64>,

    /// Agent types to run. Defaults to all of them.
    #[clap(short, long, arg_enum, help_heading = Some("AGENT OPTIONS"))]
    pub agent: Vec<AgentType>,

    /// Exploration rate of the epsilon-greedy agent
    #[clap(long, default_value_t = 0.1, help_heading = Some("AGENT OPTIONS"))]
    pub epsilon: f64,

    /// Confidence interval scale of the UCB agent
    #[clap(long, default_value_t = 0.1, help_heading = Some("AGENT OPTIONS"))]
    pub confidence: f64,

    /// Initial estimate of the optimistic greedy agent [default: 2 * max]
    #[clap(long, allow_hyphen_values = true, help_heading = Some("AGENT OPTIONS"))]
    pub optimistic_value: Option<f64>,

    /// Agent random seed. Agent `i` uses `seed + i`, wrapping.
    #[clap(long, help_heading = Some("AGENT OPTIONS"))]
    pub seed: Option<u64>,

    /// Number of steps each agent takes
    #[clap(short = 'n', long, default_value_t = 1000)]
    pub steps: u64,

    /// Log a report of each agent's estimates every this many steps
    #[clap(long)]
    pub report_interval: Option<NonZeroU64>,

    /// Print results as JSON
    #[clap(long)]
    pub json: bool,

    /// Enable verbose output
    #[clap(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let opts = Options::try_parse_from(["kbandit"]).unwrap();
        assert_eq!(opts.num_actions, 3);
        assert_eq!(opts.min, 0);
        assert_eq!(opts.max, 10);
        assert_eq!(opts.spread, 1.0);
        assert_eq!(opts.steps, 1000);
        assert!(opts.agent.is_empty());
        assert_eq!(opts.optimistic_value, None);
        assert_eq!(opts.report_interval, None);
        assert!(!opts.json);
    }

    #[test]
    fn all_options() {
        let opts = Options::try_parse_from([
            "kbandit",
            "-k",
            "5",
            "--min",
            "-3",
            "--max",
            "4",
            "--spread",
            "0.5",
            "-n",
            "200",
            "--agent",
            "greedy",
            "--agent",
            "ucb",
            "--epsilon",
            "0.2",
            "--confidence",
            "2",
            "--optimistic-value",
            "20",
            "--report-interval",
            "50",
            "--seed",
            "7",
            "--env-seed",
            "8",
            "--json",
        ])
        .unwrap();
        assert_eq!(opts.num_actions, 5);
        assert_eq!(opts.min, -3);
        assert_eq!(opts.max, 4);
        assert_eq!(opts.spread, 0.5);
        assert_eq!(opts.steps, 200);
        assert_eq!(opts.agent, vec![AgentType::Greedy, AgentType::Ucb]);
        assert_eq!(opts.epsilon, 0.2);
        assert_eq!(opts.confidence, 2.0);
        assert_eq!(opts.optimistic_value, Some(20.0));
        assert_eq!(opts.report_interval, NonZeroU64::new(50));
        assert_eq!(opts.seed, Some(7));
        assert_eq!(opts.env_seed, Some(8));
        assert!(opts.json);
    }

    #[test]
    fn zero_report_interval_rejected() {
        assert!(Options::try_parse_from(["kbandit", "--report-interval", "0"]).is_err());
    }

    #[test]
    fn unknown_agent_rejected() {
        assert!(Options::try_parse_from(["kbandit", "--agent", "thompson"]).is_err());
    }
}
