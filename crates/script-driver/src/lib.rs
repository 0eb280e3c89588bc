//! Scripted engine driver
//!
//! Spawns an interactive chess program and replays a fixed list of commands
//! into its stdin, echoing each one to the operator's terminal.

pub mod config;
pub mod driver;
pub mod error;
pub mod launch;
pub mod script;

pub use config::DriverConfig;
pub use driver::{DriverState, Pacing, RunSummary, ScriptedDriver};
pub use error::DriverError;
pub use launch::LaunchCommand;
pub use script::Script;
