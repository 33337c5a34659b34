//! Brings a channel's membership up to the requested set of users

use crate::error::Result;
use crate::resolver::{ResolvedChannel, ResolvedUser};
use crate::slack::{BotIdentity, SlackApi, UserId, collect_pages};
use std::collections::HashSet;

/// What happened to one channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InviteOutcome {
    /// Every requested user was already a member
    AlreadyPresent,
    Invited {
        /// Includes the bot when it joined as one of the requested users
        users: Vec<UserId>,
        /// The bot joined (and left again) only to send the invites
        joined: bool,
    },
}

pub struct Inviter<'a> {
    api: &'a dyn SlackApi,
    bot: &'a BotIdentity,
    dry_run: bool,
}

impl<'a> Inviter<'a> {
    pub fn new(api: &'a dyn SlackApi, bot: &'a BotIdentity, dry_run: bool) -> Self {
        Self { api, bot, dry_run }
    }

    pub async fn invite_users(
        &self,
        channel: &ResolvedChannel,
        users: &[ResolvedUser],
    ) -> Result<InviteOutcome> {
        let api = self.api;
        let members: HashSet<UserId> = collect_pages(|cursor| async move {
            api.list_members(&channel.id, cursor.as_ref()).await
        })
        .await?
        .into_iter()
        .collect();

        let bot_is_member = members.contains(&self.bot.user_id);
        if bot_is_member {
            tracing::debug!(
                bot = %self.bot.name,
                channel = %channel.name,
                channel_id = %channel.id,
                "Bot is already in the channel"
            );
        }

        let missing = missing_users(users, &members, &channel.name);
        if missing.is_empty() {
            tracing::info!(channel = %channel.name, "No users to invite");
            return Ok(InviteOutcome::AlreadyPresent);
        }

        // Joining is how the bot itself gets in; it cannot invite itself
        let bot_requested = missing.iter().any(|u| u.id == self.bot.user_id);
        let to_invite: Vec<&ResolvedUser> = missing
            .iter()
            .copied()
            .filter(|u| u.id != self.bot.user_id)
            .collect();

        let membership = if bot_is_member {
            None
        } else {
            let membership = TemporaryMembership::acquire(self, channel).await?;
            if bot_requested {
                membership.keep();
                None
            } else {
                Some(membership)
            }
        };

        // Captured, not propagated, so the membership is always released
        let invited = if to_invite.is_empty() {
            Ok(())
        } else {
            self.send_invites(channel, &to_invite).await
        };

        let joined = membership.is_some();
        if let Some(membership) = membership {
            let left = membership.release().await;
            if let (Err(_), Err(e)) = (&invited, &left) {
                // The invite error is the one reported
                tracing::warn!(
                    channel = %channel.name,
                    error = %e,
                    "Failed to leave channel after failed invite"
                );
            }
            invited?;
            left?;
        } else {
            invited?;
        }

        Ok(InviteOutcome::Invited {
            users: missing.into_iter().map(|u| u.id.clone()).collect(),
            joined,
        })
    }

    async fn send_invites(&self, channel: &ResolvedChannel, users: &[&ResolvedUser]) -> Result<()> {
        let names = users
            .iter()
            .map(|u| format!("{} ({})", u.name, u.id))
            .collect::<Vec<_>>()
            .join(", ");
        tracing::info!(
            users = %names,
            channel = %channel.name,
            channel_id = %channel.id,
            dry_run = self.dry_run,
            "Inviting users to channel"
        );

        if self.dry_run {
            return Ok(());
        }

        let ids: Vec<UserId> = users.iter().map(|u| u.id.clone()).collect();
        self.api.invite(&channel.id, &ids).await
    }
}

/// Requested users not yet in the channel, in requested order
fn missing_users<'u>(
    users: &'u [ResolvedUser],
    members: &HashSet<UserId>,
    channel: &str,
) -> Vec<&'u ResolvedUser> {
    users
        .iter()
        .filter(|user| {
            let present = members.contains(&user.id);
            tracing::debug!(
                user = %user.name,
                user_id = %user.id,
                channel = %channel,
                present,
                "Checked channel membership"
            );
            !present
        })
        .collect()
}

/// The bot's membership of a channel it joined only to send invites.
///
/// Must be given back with [`TemporaryMembership::release`] on every path once acquired.
#[must_use = "a temporary membership must be released"]
struct TemporaryMembership<'a> {
    inviter: &'a Inviter<'a>,
    channel: &'a ResolvedChannel,
}

impl<'a> TemporaryMembership<'a> {
    async fn acquire(inviter: &'a Inviter<'a>, channel: &'a ResolvedChannel) -> Result<Self> {
        tracing::debug!(
            bot = %inviter.bot.name,
            channel = %channel.name,
            channel_id = %channel.id,
            dry_run = inviter.dry_run,
            "Joining channel"
        );
        if !inviter.dry_run {
            inviter.api.join(&channel.id).await?;
        }
        Ok(Self { inviter, channel })
    }

    /// The bot is one of the requested users, so it stays
    fn keep(self) {
        tracing::info!(
            bot = %self.inviter.bot.name,
            channel = %self.channel.name,
            channel_id = %self.channel.id,
            "Bot is a requested member, staying in channel"
        );
    }

    async fn release(self) -> Result<()> {
        tracing::debug!(
            bot = %self.inviter.bot.name,
            channel = %self.channel.name,
            channel_id = %self.channel.id,
            dry_run = self.inviter.dry_run,
            "Leaving channel"
        );
        if self.inviter.dry_run {
            return Ok(());
        }
        self.inviter.api.leave(&self.channel.id).await
    }
}
