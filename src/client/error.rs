//! Cart update errors.

use super::notify::Severity;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UpdateError {
    /// A response arrived but its status was not successful
    #[error("server error: {status}")]
    Rejected { status: u16 },

    /// The request never produced a response, or its body could not be read
    #[error("request failed")]
    Transport(#[source] reqwest::Error),

    /// The success response body was not JSON
    #[error("response body is not valid JSON")]
    Decode(#[source] serde_json::Error),
}

impl UpdateError {
    /// Channel the failure is reported on.
    ///
    /// Only server rejections reach the user; everything else is diagnostic.
    pub fn severity(&self) -> Severity {
        match self {
            Self::Rejected { .. } => Severity::User,
            Self::Transport(_) | Self::Decode(_) => Severity::Diagnostic,
        }
    }
}
