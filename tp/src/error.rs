//! Error types for progress reporting

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur while producing a progress report
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Invalid employee id: {0}")]
    Usage(String),

    #[error("Unable to fetch data from {url}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Unable to fetch data from {url}: HTTP {status}")]
    HttpStatus { url: String, status: StatusCode },

    #[error("Invalid data received from {url}")]
    DataShape {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ReportError {
    /// Check if the HTTP exchange itself failed (network or non-2xx status)
    pub fn is_transport(&self) -> bool {
        matches!(self, ReportError::Transport { .. } | ReportError::HttpStatus { .. })
    }

    /// Check if the response arrived but its body had the wrong shape
    pub fn is_data_shape(&self) -> bool {
        matches!(self, ReportError::DataShape { .. })
    }

    /// Check if the caller supplied a bad argument
    pub fn is_usage(&self) -> bool {
        matches!(self, ReportError::Usage(_))
    }

    /// Get the HTTP status if the server answered with a non-success code
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ReportError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
