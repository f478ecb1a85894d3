//! Error types and retry classification for the sheets crate.

use thiserror::Error;

/// Errors that can occur while talking to the spreadsheet.
///
/// Each variant answers [`retryable`](Self::retryable), which the fetcher
/// uses to decide whether its single automatic retry applies.
#[derive(Error, Debug)]
pub enum SheetError {
    /// The request could not be sent or the connection dropped mid-flight.
    #[error("Request failed for tab '{tab}': {message}")]
    RequestFailed {
        /// The sheet tab being fetched
        tab: String,
        /// The underlying transport error
        message: String,
    },

    /// The export endpoint answered with a non-success status.
    #[error("Sheet endpoint returned HTTP {status} for tab '{tab}'")]
    BadStatus {
        /// The sheet tab being fetched
        tab: String,
        /// The HTTP status code returned
        status: u16,
    },

    /// The response body could not be read as text.
    #[error("Failed to read response body: {0}")]
    BodyRead(String),

    /// The webhook endpoint rejected a write.
    #[error("Webhook returned HTTP {status} for action '{action}'")]
    WebhookRejected {
        /// The action field of the envelope
        action: String,
        /// The HTTP status code returned
        status: u16,
    },

    /// The webhook request could not be sent at all.
    #[error("Webhook request failed for action '{action}': {message}")]
    WebhookFailed { action: String, message: String },

    /// No URL is configured for the requested operation.
    #[error("No endpoint configured: {0}")]
    NotConfigured(String),
}

impl SheetError {
    /// Whether the single automatic retry applies to this error.
    ///
    /// Transport failures and server-side statuses are worth one more
    /// attempt; a missing configuration or a client-side rejection is not.
    pub fn retryable(&self) -> bool {
        match self {
            SheetError::RequestFailed { .. } | SheetError::BodyRead(_) => true,
            SheetError::BadStatus { status, .. } => *status >= 500 || *status == 429,
            SheetError::WebhookRejected { .. } => false,
            SheetError::WebhookFailed { .. } => false,
            SheetError::NotConfigured(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retry_classification() {
        let transport = SheetError::RequestFailed {
            tab: "nasabah".into(),
            message: "connection reset".into(),
        };
        assert!(transport.retryable());

        let server = SheetError::BadStatus { tab: "nasabah".into(), status: 503 };
        assert!(server.retryable());

        let client = SheetError::BadStatus { tab: "nasabah".into(), status: 404 };
        assert!(!client.retryable());

        let config = SheetError::NotConfigured("webhook url".into());
        assert!(!config.retryable());
    }
}
