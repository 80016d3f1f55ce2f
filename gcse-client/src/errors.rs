use crate::models::exam_sessions::ExamSessionStatus;
use serde_json::Value;
use thiserror::Error as ThisError;

/// Status code reported for failures that never produced an HTTP response.
pub const NO_STATUS: u16 = 0;

#[derive(ThisError, Debug)]
pub enum Error {
    /// The request could not be completed (connection refused, DNS, timeout...)
    #[error("Network error: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered with a non-success status
    #[error("{message}")]
    Remote { status: u16, message: String, data: Value },

    /// A successful response carried a body we could not decode
    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// Request body could not be serialized
    #[error("Failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),

    /// Lookup against the mock sample set missed
    #[error("{resource} with ID {id} not found")]
    NotFound { resource: &'static str, id: String },

    /// A base URL that cannot carry path segments
    #[error("Invalid URL: {url}")]
    InvalidUrl { url: String },

    /// Exam session lifecycle check failed before any request was sent
    #[error("Cannot move exam session from {from} to {to}")]
    InvalidTransition { from: ExamSessionStatus, to: ExamSessionStatus },

    /// Credential store could not be read or written
    #[error("Credential storage error: {message}")]
    Storage { message: String },

    #[error("Invalid configuration: {message}")]
    Config { message: String },
}

impl Error {
    /// Numeric status for this failure. Failures without an HTTP response report `0`.
    pub fn status_code(&self) -> u16 {
        match self {
            Error::Remote { status, .. } => *status,
            Error::NotFound { .. } => 404,
            Error::Transport { .. }
            | Error::Decode { .. }
            | Error::Encode(_)
            | Error::InvalidUrl { .. }
            | Error::InvalidTransition { .. }
            | Error::Storage { .. }
            | Error::Config { .. } => NO_STATUS,
        }
    }

    /// Raw error body returned by the backend, for diagnostics
    pub fn data(&self) -> Option<&Value> {
        match self {
            Error::Remote { data, .. } => Some(data),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status_code() == 404
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status_code(), 401 | 403)
    }

    /// Message suitable for showing to a learner. Never empty.
    ///
    /// Pages render every failure through this one method instead of choosing between alerts
    /// and console logging on their own.
    pub fn user_message(&self) -> String {
        match self {
            Error::Transport { source } if source.is_timeout() => "The server took too long to respond. Please try again.".to_string(),
            Error::Transport { .. } => "Unable to reach the server. Check your connection and try again.".to_string(),
            Error::Remote { status: 401, .. } => "Your session has expired. Please log in again.".to_string(),
            Error::Remote { message, .. } => message.clone(),
            Error::Decode { .. } | Error::Encode(_) => "Unexpected response from the server".to_string(),
            Error::NotFound { resource, .. } => format!("{resource} not found"),
            Error::InvalidUrl { .. } | Error::Config { .. } => "The application is misconfigured".to_string(),
            Error::InvalidTransition { .. } => self.to_string(),
            Error::Storage { .. } => "Could not access stored credentials".to_string(),
        }
    }
}

/// Type alias for access-layer results
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_remote_error_keeps_status_and_body() {
        let err = Error::Remote {
            status: 422,
            message: "name is required".to_string(),
            data: json!({"message": "name is required", "field": "name"}),
        };

        assert_eq!(err.status_code(), 422);
        assert_eq!(err.to_string(), "name is required");
        assert_eq!(err.user_message(), "name is required");
        assert_eq!(err.data().unwrap()["field"], "name");
    }

    #[test]
    fn test_mock_not_found_reports_404() {
        let err = Error::NotFound {
            resource: "Subject",
            id: "42".to_string(),
        };

        assert_eq!(err.status_code(), 404);
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Subject with ID 42 not found");
        assert_eq!(err.user_message(), "Subject not found");
    }

    #[test]
    fn test_local_failures_report_status_zero() {
        let errors = [
            Error::InvalidUrl {
                url: "mailto:someone".to_string(),
            },
            Error::Storage {
                message: "read-only filesystem".to_string(),
            },
            Error::InvalidTransition {
                from: ExamSessionStatus::Completed,
                to: ExamSessionStatus::InProgress,
            },
        ];

        for err in errors {
            assert_eq!(err.status_code(), NO_STATUS, "{err}");
            assert!(!err.user_message().is_empty());
            assert!(err.data().is_none());
        }
    }

    #[test]
    fn test_unauthorized_message() {
        let err = Error::Remote {
            status: 401,
            message: "jwt expired".to_string(),
            data: json!({}),
        };

        assert!(err.is_unauthorized());
        assert_eq!(err.user_message(), "Your session has expired. Please log in again.");
    }

    #[test]
    fn test_invalid_transition_display() {
        let err = Error::InvalidTransition {
            from: ExamSessionStatus::Paused,
            to: ExamSessionStatus::Completed,
        };

        assert_eq!(err.to_string(), "Cannot move exam session from paused to completed");
    }
}
