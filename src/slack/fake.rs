//! In-memory Slack workspace for unit tests

use crate::error::{InviterError, Result};
use crate::slack::{
    BotIdentity, ChannelId, ChannelSummary, Cursor, Page, SlackApi, UserId, UserSummary,
};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

/// A call that reached the fake, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    AuthTest,
    ListChannels(Option<String>),
    ListUsers(Option<String>),
    ListMembers(String, Option<String>),
    Join(String),
    Invite(String, Vec<String>),
    Leave(String),
}

impl Call {
    pub fn is_mutation(&self) -> bool {
        matches!(self, Call::Join(_) | Call::Invite(..) | Call::Leave(_))
    }
}

pub struct FakeSlack {
    bot: BotIdentity,
    channels: Vec<ChannelSummary>,
    users: Vec<UserSummary>,
    members: Mutex<HashMap<ChannelId, Vec<UserId>>>,
    page_size: usize,
    failing_invites: HashSet<ChannelId>,
    failing_members: HashSet<ChannelId>,
    failing_joins: HashSet<ChannelId>,
    failing_leaves: HashSet<ChannelId>,
    calls: Mutex<Vec<Call>>,
}

impl FakeSlack {
    /// Workspace with the given `(name, id)` users and channels; the bot is `bot` / `UBOT`
    pub fn new(users: &[(&str, &str)], channels: &[(&str, &str)]) -> Self {
        Self {
            bot: BotIdentity {
                user_id: UserId::new("UBOT"),
                name: "bot".to_string(),
            },
            channels: channels
                .iter()
                .map(|(name, id)| ChannelSummary {
                    id: ChannelId::new(*id),
                    name: name.to_string(),
                })
                .collect(),
            users: users
                .iter()
                .map(|(name, id)| UserSummary {
                    id: UserId::new(*id),
                    name: name.to_string(),
                })
                .collect(),
            members: Mutex::new(HashMap::new()),
            page_size: usize::MAX,
            failing_invites: HashSet::new(),
            failing_members: HashSet::new(),
            failing_joins: HashSet::new(),
            failing_leaves: HashSet::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_members(self, channel: &str, members: &[&str]) -> Self {
        self.members.lock().unwrap().insert(
            ChannelId::new(channel),
            members.iter().map(|m| UserId::new(*m)).collect(),
        );
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_failing_invite(mut self, channel: &str) -> Self {
        self.failing_invites.insert(ChannelId::new(channel));
        self
    }

    pub fn with_failing_members(mut self, channel: &str) -> Self {
        self.failing_members.insert(ChannelId::new(channel));
        self
    }

    pub fn with_failing_join(mut self, channel: &str) -> Self {
        self.failing_joins.insert(ChannelId::new(channel));
        self
    }

    pub fn with_failing_leave(mut self, channel: &str) -> Self {
        self.failing_leaves.insert(ChannelId::new(channel));
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn mutations(&self) -> Vec<Call> {
        self.calls().into_iter().filter(Call::is_mutation).collect()
    }

    pub fn members_of(&self, channel: &str) -> Vec<String> {
        self.members
            .lock()
            .unwrap()
            .get(&ChannelId::new(channel))
            .map(|m| m.iter().map(|u| u.0.clone()).collect())
            .unwrap_or_default()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    /// Cursors are the stringified start offset of the next page
    fn paginate<T: Clone>(&self, items: &[T], cursor: Option<&Cursor>) -> Page<T> {
        let start: usize = cursor.map(|c| c.as_str().parse().unwrap()).unwrap_or(0);
        let end = start.saturating_add(self.page_size).min(items.len());
        let next = (end < items.len()).then(|| Cursor::new(end.to_string()));
        Page::new(items[start..end].to_vec(), next)
    }
}

fn cursor_str(cursor: Option<&Cursor>) -> Option<String> {
    cursor.map(|c| c.as_str().to_string())
}

#[async_trait]
impl SlackApi for FakeSlack {
    async fn auth_test(&self) -> Result<BotIdentity> {
        self.record(Call::AuthTest);
        Ok(self.bot.clone())
    }

    async fn list_channels(&self, cursor: Option<&Cursor>) -> Result<Page<ChannelSummary>> {
        self.record(Call::ListChannels(cursor_str(cursor)));
        Ok(self.paginate(&self.channels, cursor))
    }

    async fn list_users(&self, cursor: Option<&Cursor>) -> Result<Page<UserSummary>> {
        self.record(Call::ListUsers(cursor_str(cursor)));
        Ok(self.paginate(&self.users, cursor))
    }

    async fn list_members(
        &self,
        channel: &ChannelId,
        cursor: Option<&Cursor>,
    ) -> Result<Page<UserId>> {
        self.record(Call::ListMembers(channel.0.clone(), cursor_str(cursor)));
        if self.failing_members.contains(channel) {
            return Err(InviterError::SlackApi(
                "conversations.members: channel_not_found".to_string(),
            ));
        }
        let members = self
            .members
            .lock()
            .unwrap()
            .get(channel)
            .cloned()
            .unwrap_or_default();
        Ok(self.paginate(&members, cursor))
    }

    async fn join(&self, channel: &ChannelId) -> Result<()> {
        self.record(Call::Join(channel.0.clone()));
        if self.failing_joins.contains(channel) {
            return Err(InviterError::SlackApi(
                "conversations.join: is_archived".to_string(),
            ));
        }
        self.members
            .lock()
            .unwrap()
            .entry(channel.clone())
            .or_default()
            .push(self.bot.user_id.clone());
        Ok(())
    }

    async fn invite(&self, channel: &ChannelId, users: &[UserId]) -> Result<()> {
        self.record(Call::Invite(
            channel.0.clone(),
            users.iter().map(|u| u.0.clone()).collect(),
        ));
        if self.failing_invites.contains(channel) {
            return Err(InviterError::SlackApi(
                "conversations.invite: cant_invite".to_string(),
            ));
        }
        self.members
            .lock()
            .unwrap()
            .entry(channel.clone())
            .or_default()
            .extend(users.iter().cloned());
        Ok(())
    }

    async fn leave(&self, channel: &ChannelId) -> Result<()> {
        self.record(Call::Leave(channel.0.clone()));
        if self.failing_leaves.contains(channel) {
            return Err(InviterError::SlackApi(
                "conversations.leave: cant_leave_general".to_string(),
            ));
        }
        if let Some(members) = self.members.lock().unwrap().get_mut(channel) {
            members.retain(|m| *m != self.bot.user_id);
        }
        Ok(())
    }
}
