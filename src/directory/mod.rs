//! Workspace directories: the name to ID tables every run starts from
//!
//! Both tables are fetched once, fully paginated, before any name is resolved,
//! and are read-only afterwards.

mod loader;
mod types;

pub use loader::{load_channels, load_users};
pub use types::{ChannelDirectory, UserDirectory};
