//! Builds the directories from the full Slack listings

use crate::directory::types::{ChannelDirectory, UserDirectory};
use crate::error::Result;
use crate::logging::Timer;
use crate::slack::{SlackApi, collect_pages};

/// Fetch every page of `users.list` and index users by handle
pub async fn load_users(api: &dyn SlackApi) -> Result<UserDirectory> {
    let _timer = Timer::new("load_users");
    tracing::info!("Getting user ID <=> name mapping");

    let users = collect_pages(|cursor| async move { api.list_users(cursor.as_ref()).await }).await?;

    let directory: UserDirectory = users
        .into_iter()
        .map(|user| {
            tracing::debug!(user = %user.name, user_id = %user.id, "Got user");
            (user.name, user.id)
        })
        .collect();

    tracing::info!(count = directory.len(), "User directory loaded");
    Ok(directory)
}

/// Fetch every page of `conversations.list` and index channels by name
pub async fn load_channels(api: &dyn SlackApi) -> Result<ChannelDirectory> {
    let _timer = Timer::new("load_channels");
    tracing::info!("Getting channel ID <=> name mapping");

    let channels =
        collect_pages(|cursor| async move { api.list_channels(cursor.as_ref()).await }).await?;

    let directory: ChannelDirectory = channels
        .into_iter()
        .map(|channel| {
            tracing::debug!(channel = %channel.name, channel_id = %channel.id, "Got channel");
            (channel.name, channel.id)
        })
        .collect();

    tracing::info!(count = directory.len(), "Channel directory loaded");
    Ok(directory)
}
