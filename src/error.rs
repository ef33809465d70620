use std::error::Error;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum SosError {
    #[error("Invalid dispatch endpoint {url}: {reason}")]
    InvalidEndpoint { url: String, reason: String },

    #[error("Failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("SOS request failed")]
    Transport(#[source] reqwest::Error),

    #[error("SOS request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Failed to parse SOS response as JSON")]
    Decode(#[from] serde_json::Error),

    #[error("SOS request cancelled")]
    Cancelled,
}

impl SosError {
    /// Failures that happened on the way to or from the server, as opposed
    /// to a response that arrived but could not be read as JSON.
    pub fn is_transport(&self) -> bool {
        matches!(self, SosError::Transport(_) | SosError::Timeout(_))
    }

    /// Full `source()` chain, one cause per line.
    pub fn chain(&self) -> String {
        let mut message = self.to_string();
        let mut source = self.source();
        while let Some(err) = source {
            message.push_str(&format!("\n  Caused by: {}", err));
            source = err.source();
        }
        message
    }
}
