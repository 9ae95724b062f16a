//! Failure taxonomy for restaurant queries
//!
//! Pure classification of a failed discovery request into the four kinds
//! the results screen distinguishes, plus the message shown for each.

use serde::Serialize;

/// Status marker used when the request never produced an HTTP response
pub const NETWORK_ERROR_STATUS: &str = "CUSTOM_ERROR";

/// Error type for restaurant query operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum QueryError {
    #[error("No restaurants found for postcode {postcode}")]
    NotFound { postcode: String },

    #[error("Discovery service error: HTTP {status}")]
    Server { status: u16 },

    #[error("Network error: {message}")]
    Network { message: String },

    #[error("Unexpected query failure: {message}")]
    Unknown {
        status: Option<u16>,
        message: String,
    },
}

impl QueryError {
    /// Classify a non-success HTTP status for `postcode`
    pub fn from_status(status: u16, postcode: &str, body: Option<&str>) -> Self {
        match status {
            404 => QueryError::NotFound {
                postcode: postcode.to_string(),
            },
            s if s >= 500 => QueryError::Server { status: s },
            s => QueryError::Unknown {
                status: Some(s),
                message: body
                    .map(str::trim)
                    .filter(|b| !b.is_empty())
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("HTTP {s}")),
            },
        }
    }

    /// Transport failure before any response arrived
    pub fn network(message: impl Into<String>) -> Self {
        QueryError::Network {
            message: message.into(),
        }
    }

    /// Any failure that fits no other kind, e.g. an undecodable body
    pub fn unknown(message: impl Into<String>) -> Self {
        QueryError::Unknown {
            status: None,
            message: message.into(),
        }
    }

    /// HTTP status if one was received, otherwise the network marker
    pub fn status_label(&self) -> String {
        match self {
            QueryError::NotFound { .. } => "404".to_string(),
            QueryError::Server { status } => status.to_string(),
            QueryError::Network { .. } => NETWORK_ERROR_STATUS.to_string(),
            QueryError::Unknown { status, .. } => status
                .map(|s| s.to_string())
                .unwrap_or_else(|| "UNKNOWN".to_string()),
        }
    }

    /// Message shown to the user for this failure
    pub fn user_message(&self) -> String {
        match self {
            QueryError::NotFound { postcode } => {
                format!("No restaurants found for postcode {postcode}.")
            }
            QueryError::Server { .. } => {
                "The restaurant service is temporarily unavailable. Please try again later."
                    .to_string()
            }
            QueryError::Network { message } => message.clone(),
            QueryError::Unknown { .. } => "Could not fetch restaurants.".to_string(),
        }
    }
}
