use crate::config::InviterConfig;
use crate::directory::{load_channels, load_users};
use crate::error::Result;
use crate::inviter::{InviteOutcome, Inviter};
use crate::resolver::{resolve_channels, resolve_users};
use crate::slack::SlackApi;

#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Resolve and report, but never join, invite or leave
    pub dry_run: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub channels: usize,
    pub unchanged: usize,
    pub invited: usize,
    pub temporary_joins: usize,
    pub dry_run: bool,
}

/// One full pass: load directories, resolve every name, then fix up each channel in turn.
///
/// Nothing is mutated until every channel and user has resolved. The first error ends the run.
pub async fn run(
    api: &dyn SlackApi,
    config: &InviterConfig,
    options: RunOptions,
) -> Result<RunSummary> {
    if options.dry_run {
        tracing::info!("Dry run, no changes will be made");
    }

    let bot = api.auth_test().await?;
    tracing::info!(bot = %bot.name, bot_id = %bot.user_id, "Authenticated");

    let user_directory = load_users(api).await?;
    let channel_directory = load_channels(api).await?;

    let channels = resolve_channels(&config.channels, &channel_directory)?;
    let users = resolve_users(&config.users, &user_directory)?;
    tracing::info!(
        channels = channels.len(),
        users = users.len(),
        "Resolved configuration"
    );

    let inviter = Inviter::new(api, &bot, options.dry_run);
    let mut summary = RunSummary {
        dry_run: options.dry_run,
        ..Default::default()
    };

    for channel in &channels {
        match inviter.invite_users(channel, &users).await? {
            InviteOutcome::AlreadyPresent => summary.unchanged += 1,
            InviteOutcome::Invited { users: invited, joined } => {
                summary.invited += invited.len();
                if joined {
                    summary.temporary_joins += 1;
                }
            }
        }
        summary.channels += 1;
    }

    Ok(summary)
}
