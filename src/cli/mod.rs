//! Command-line interface
mod agent;
mod env;
mod options;

pub use agent::AgentType;
pub use options::Options;
