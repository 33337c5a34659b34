use thiserror::Error;

#[derive(Debug, Error)]
pub enum InviterError {
    #[error("Slack API error: {0}")]
    SlackApi(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0} is not a valid channel nor does it pattern match any channels")]
    UnknownChannel(String),

    #[error("{0} is not a valid user")]
    UnknownUser(String),

    #[error("Invalid channel pattern {pattern}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

impl InviterError {
    /// Configuration problems are the operator's to fix; everything else came from Slack.
    pub fn is_configuration(&self) -> bool {
        !matches!(self, Self::SlackApi(_))
    }
}

pub type Result<T> = std::result::Result<T, InviterError>;
