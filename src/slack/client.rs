use crate::config::SlackConfig;
use crate::error::{InviterError, Result};
use crate::slack::{
    BotIdentity, ChannelId, ChannelSummary, Cursor, Page, SlackApi, UserId, UserSummary,
};
use async_trait::async_trait;
use slack_morphism::prelude::*;
use std::sync::Arc;

/// Page size requested from the listing endpoints
const PAGE_LIMIT: u16 = 200;

pub struct SlackClient {
    client: Arc<SlackHyperClient>,
    token: SlackApiToken,
}

impl SlackClient {
    pub fn new(config: SlackConfig) -> Result<Self> {
        let connector = SlackClientHyperConnector::new()
            .map_err(|e| InviterError::SlackApi(e.to_string()))?;

        let client = Arc::new(slack_morphism::SlackClient::new(connector));
        let token = SlackApiToken::new(config.bot_token.into());

        Ok(Self { client, token })
    }
}

fn api_error(method: &str, err: impl std::fmt::Display) -> InviterError {
    InviterError::SlackApi(format!("{}: {}", method, err))
}

fn next_cursor(metadata: Option<SlackResponseMetadata>) -> Option<Cursor> {
    metadata
        .and_then(|m| m.next_cursor)
        .map(|c| Cursor::new(c.to_string()))
}

fn slack_cursor(cursor: Option<&Cursor>) -> Option<SlackCursorId> {
    cursor.map(|c| SlackCursorId(c.as_str().to_string()))
}

#[async_trait]
impl SlackApi for SlackClient {
    async fn auth_test(&self) -> Result<BotIdentity> {
        let session = self.client.open_session(&self.token);

        let response = session
            .auth_test()
            .await
            .map_err(|e| api_error("auth.test", e))?;

        let user_id = response.user_id.to_string();
        Ok(BotIdentity {
            name: response.user.unwrap_or_else(|| user_id.clone()),
            user_id: UserId::new(user_id),
        })
    }

    async fn list_channels(&self, cursor: Option<&Cursor>) -> Result<Page<ChannelSummary>> {
        let session = self.client.open_session(&self.token);

        let mut request = SlackApiConversationsListRequest::new()
            .with_exclude_archived(true)
            .with_limit(PAGE_LIMIT)
            .with_types(vec![
                SlackConversationType::Public,
                SlackConversationType::Private,
            ]);
        request.cursor = slack_cursor(cursor);

        let response = session
            .conversations_list(&request)
            .await
            .map_err(|e| api_error("conversations.list", e))?;

        let channels = response
            .channels
            .into_iter()
            .filter_map(|c| {
                let id = c.id.to_string();
                match c.name {
                    Some(name) => Some(ChannelSummary {
                        id: ChannelId::new(id),
                        name,
                    }),
                    None => {
                        tracing::debug!(channel_id = %id, "Skipping channel without a name");
                        None
                    }
                }
            })
            .collect();

        Ok(Page::new(channels, next_cursor(response.response_metadata)))
    }

    async fn list_users(&self, cursor: Option<&Cursor>) -> Result<Page<UserSummary>> {
        let session = self.client.open_session(&self.token);

        let mut request = SlackApiUsersListRequest::new().with_limit(PAGE_LIMIT);
        request.cursor = slack_cursor(cursor);

        let response = session
            .users_list(&request)
            .await
            .map_err(|e| api_error("users.list", e))?;

        let users = response
            .members
            .into_iter()
            .filter_map(|u| {
                let id = u.id.to_string();
                match u.name {
                    Some(name) => Some(UserSummary {
                        id: UserId::new(id),
                        name,
                    }),
                    None => {
                        tracing::debug!(user_id = %id, "Skipping user without a name");
                        None
                    }
                }
            })
            .collect();

        Ok(Page::new(users, next_cursor(response.response_metadata)))
    }

    async fn list_members(
        &self,
        channel: &ChannelId,
        cursor: Option<&Cursor>,
    ) -> Result<Page<UserId>> {
        let session = self.client.open_session(&self.token);

        let mut request = SlackApiConversationsMembersRequest::new()
            .with_channel(SlackChannelId(channel.as_str().to_string()))
            .with_limit(PAGE_LIMIT);
        request.cursor = slack_cursor(cursor);

        let response = session
            .conversations_members(&request)
            .await
            .map_err(|e| api_error("conversations.members", e))?;

        let members = response
            .members
            .into_iter()
            .map(|id| UserId::new(id.to_string()))
            .collect();

        Ok(Page::new(members, next_cursor(response.response_metadata)))
    }

    async fn join(&self, channel: &ChannelId) -> Result<()> {
        let session = self.client.open_session(&self.token);

        let request =
            SlackApiConversationsJoinRequest::new(SlackChannelId(channel.as_str().to_string()));

        session
            .conversations_join(&request)
            .await
            .map_err(|e| api_error("conversations.join", e))?;

        Ok(())
    }

    async fn invite(&self, channel: &ChannelId, users: &[UserId]) -> Result<()> {
        let session = self.client.open_session(&self.token);

        let request = SlackApiConversationsInviteRequest::new(
            SlackChannelId(channel.as_str().to_string()),
            users
                .iter()
                .map(|u| SlackUserId(u.as_str().to_string()))
                .collect(),
        );

        session
            .conversations_invite(&request)
            .await
            .map_err(|e| api_error("conversations.invite", e))?;

        Ok(())
    }

    async fn leave(&self, channel: &ChannelId) -> Result<()> {
        let session = self.client.open_session(&self.token);

        let request =
            SlackApiConversationsLeaveRequest::new(SlackChannelId(channel.as_str().to_string()));

        session
            .conversations_leave(&request)
            .await
            .map_err(|e| api_error("conversations.leave", e))?;

        Ok(())
    }
}
