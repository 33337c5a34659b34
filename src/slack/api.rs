use crate::error::Result;
use crate::slack::{BotIdentity, ChannelId, ChannelSummary, Cursor, Page, UserId, UserSummary};
use async_trait::async_trait;

/// The subset of the Slack Web API the inviter talks to.
///
/// Allows swapping the real Slack client for an in-memory fake in tests.
#[async_trait]
pub trait SlackApi: Send + Sync {
    /// `auth.test`: who the token belongs to
    async fn auth_test(&self) -> Result<BotIdentity>;

    /// `conversations.list` over public and private, non-archived channels
    async fn list_channels(&self, cursor: Option<&Cursor>) -> Result<Page<ChannelSummary>>;

    /// `users.list`
    async fn list_users(&self, cursor: Option<&Cursor>) -> Result<Page<UserSummary>>;

    /// `conversations.members`
    async fn list_members(
        &self,
        channel: &ChannelId,
        cursor: Option<&Cursor>,
    ) -> Result<Page<UserId>>;

    /// `conversations.join`
    async fn join(&self, channel: &ChannelId) -> Result<()>;

    /// `conversations.invite`, all users in one call
    async fn invite(&self, channel: &ChannelId, users: &[UserId]) -> Result<()>;

    /// `conversations.leave`
    async fn leave(&self, channel: &ChannelId) -> Result<()>;
}
