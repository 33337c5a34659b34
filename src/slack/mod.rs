mod api;
mod client;
#[cfg(test)]
pub(crate) mod fake;
mod pagination;
mod types;

pub use api::SlackApi;
pub use client::SlackClient;
pub use pagination::collect_pages;
pub use types::{BotIdentity, ChannelId, ChannelSummary, Cursor, Page, UserId, UserSummary};
