pub mod config;
pub mod directory;
pub mod error;
pub mod inviter;
pub mod logging;
pub mod resolver;
pub mod runner;
pub mod slack;

pub use error::{InviterError, Result};
pub use runner::{RunOptions, RunSummary, run};
