//! Read-only name to ID lookup tables

use crate::slack::{ChannelId, UserId};
use std::collections::BTreeMap;

/// User handle to user ID, for every user in the workspace
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    users: BTreeMap<String, UserId>,
}

impl UserDirectory {
    pub fn get(&self, name: &str) -> Option<&UserId> {
        self.users.get(name)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl FromIterator<(String, UserId)> for UserDirectory {
    fn from_iter<I: IntoIterator<Item = (String, UserId)>>(iter: I) -> Self {
        Self {
            users: iter.into_iter().collect(),
        }
    }
}

/// Channel name (without `#`) to channel ID, for public and private non-archived channels
#[derive(Debug, Clone, Default)]
pub struct ChannelDirectory {
    channels: BTreeMap<String, ChannelId>,
}

impl ChannelDirectory {
    pub fn get(&self, name: &str) -> Option<&ChannelId> {
        self.channels.get(name)
    }

    /// Entries in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ChannelId)> {
        self.channels.iter().map(|(name, id)| (name.as_str(), id))
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}

impl FromIterator<(String, ChannelId)> for ChannelDirectory {
    fn from_iter<I: IntoIterator<Item = (String, ChannelId)>>(iter: I) -> Self {
        Self {
            channels: iter.into_iter().collect(),
        }
    }
}
