//! Turns configured names and patterns into concrete channel and user IDs

use crate::directory::{ChannelDirectory, UserDirectory};
use crate::error::{InviterError, Result};
use crate::slack::{ChannelId, UserId};
use regex::Regex;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedChannel {
    pub name: String,
    pub id: ChannelId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedUser {
    pub name: String,
    pub id: UserId,
}

/// Resolve channel tokens in order.
///
/// An exact name match wins outright. Otherwise the token is a regular expression
/// and every channel whose name it matches is selected, in name order. A channel
/// picked by several tokens is kept once, at its first position.
pub fn resolve_channels(
    tokens: &[String],
    directory: &ChannelDirectory,
) -> Result<Vec<ResolvedChannel>> {
    let mut resolved = Vec::new();
    let mut seen = HashSet::new();

    for token in tokens {
        let matches = match_channel(token, directory)?;
        if matches.is_empty() {
            return Err(InviterError::UnknownChannel(token.clone()));
        }

        for channel in matches {
            if seen.insert(channel.id.clone()) {
                resolved.push(channel);
            } else {
                tracing::debug!(channel = %channel.name, "Channel already selected");
            }
        }
    }

    Ok(resolved)
}

fn match_channel(token: &str, directory: &ChannelDirectory) -> Result<Vec<ResolvedChannel>> {
    if let Some(id) = directory.get(token) {
        return Ok(vec![ResolvedChannel {
            name: token.to_string(),
            id: id.clone(),
        }]);
    }

    tracing::debug!(
        pattern = %token,
        "Exact match not found, searching for a pattern match"
    );
    let pattern = Regex::new(token).map_err(|source| InviterError::InvalidPattern {
        pattern: token.to_string(),
        source,
    })?;

    Ok(directory
        .iter()
        .filter(|(name, _)| pattern.is_match(name))
        .map(|(name, id)| {
            tracing::debug!(pattern = %token, channel = %name, "Pattern matched channel");
            ResolvedChannel {
                name: name.to_string(),
                id: id.clone(),
            }
        })
        .collect())
}

/// Resolve user tokens in order; every token must be an exact user handle.
pub fn resolve_users(tokens: &[String], directory: &UserDirectory) -> Result<Vec<ResolvedUser>> {
    let mut resolved: Vec<ResolvedUser> = Vec::with_capacity(tokens.len());

    for token in tokens {
        let id = directory
            .get(token)
            .ok_or_else(|| InviterError::UnknownUser(token.clone()))?;

        if resolved.iter().any(|u| &u.id == id) {
            continue;
        }
        resolved.push(ResolvedUser {
            name: token.clone(),
            id: id.clone(),
        });
    }

    Ok(resolved)
}
