use crate::error::{InviterError, Result};

pub const TOKEN_VAR: &str = "SLACK_TOKEN";
pub const CHANNELS_VAR: &str = "SLACK_CHANNELS";
pub const USERS_VAR: &str = "SLACK_CHANNEL_USERS";
pub const VERBOSE_VAR: &str = "INVITER_VERBOSE";

#[derive(Debug, Clone)]
pub struct Settings {
    pub slack: SlackConfig,
    pub inviter: InviterConfig,
}

#[derive(Debug, Clone)]
pub struct SlackConfig {
    pub bot_token: String,
}

#[derive(Debug, Clone)]
pub struct InviterConfig {
    /// Channel names or patterns, in the order they were configured
    pub channels: Vec<String>,
    /// User names, in the order they were configured
    pub users: Vec<String>,
}

pub fn load_settings() -> Result<Settings> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    Settings::from_lookup(|name| std::env::var(name).ok())
}

impl Settings {
    /// Build settings from any variable source, e.g. the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let slack = SlackConfig {
            bot_token: required(&lookup, TOKEN_VAR)?,
        };

        let channels = parse_list(&required(&lookup, CHANNELS_VAR)?);
        if channels.is_empty() {
            return Err(InviterError::Config(format!(
                "{} contains no channel names",
                CHANNELS_VAR
            )));
        }

        let users = parse_list(&required(&lookup, USERS_VAR)?);
        if users.is_empty() {
            return Err(InviterError::Config(format!(
                "{} contains no user names",
                USERS_VAR
            )));
        }

        let inviter = InviterConfig { channels, users };

        Ok(Settings { slack, inviter })
    }
}

/// Whether verbose logging was requested in the environment.
///
/// Read before the rest of the settings so logging is up before anything can fail.
pub fn verbose_from_env() -> bool {
    verbose_from_lookup(|name| std::env::var(name).ok())
}

fn verbose_from_lookup<F>(lookup: F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    is_truthy(lookup(VERBOSE_VAR).as_deref())
}

/// Split a comma separated list, trimming whitespace and dropping empty entries
pub fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn required<F>(lookup: &F, name: &str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(InviterError::Config(format!("No {} set", name))),
    }
}

fn is_truthy(value: Option<&str>) -> bool {
    matches!(
        value.map(|v| v.trim().to_ascii_lowercase()).as_deref(),
        Some("true" | "yes" | "1")
    )
}
