use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid station report: {0}")]
    InvalidReport(String),

    #[error("Upstream {resource} failed: {cause}")]
    Upstream { resource: String, cause: String },

    #[error("Relay delivery failed: {0}")]
    RelayDelivery(String),

    #[error("Unknown feed: {0}")]
    UnknownFeed(String),

    #[error("Relay queue is closed")]
    QueueClosed,

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl DomainError {
    pub fn upstream(resource: impl Into<String>, cause: impl ToString) -> Self {
        Self::Upstream {
            resource: resource.into(),
            cause: cause.to_string(),
        }
    }

    /// Malformed client input; surfaced as a 4xx and never retried.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidReport(_))
    }
}
