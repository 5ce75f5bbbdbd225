use std::fmt;

use serde::{Deserialize, Serialize};

/// Message shown when a failed response carries no `message` field.
pub const FALLBACK_ERROR: &str = "Unknown error";

/// Message shown when a report endpoint answers with an empty or falsy body.
pub const EMPTY_RESPONSE_ERROR: &str = "Empty response from server";

/// Failure side of the tagged outcome decoded at the network boundary
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response (network error, refused connection).
    Transport(String),
    /// The body was not the JSON document the endpoint promises.
    Malformed(String),
    /// The device answered `success: false`, or sent no payload at all.
    Rejected(String),
    /// The body was empty or falsy where a report was expected.
    Empty,
}

impl ApiError {
    /// Builds a rejection from an optional server message.
    pub fn rejected(message: Option<&str>) -> Self {
        Self::Rejected(message.unwrap_or(FALLBACK_ERROR).to_string())
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(msg) | ApiError::Malformed(msg) | ApiError::Rejected(msg) => {
                f.write_str(msg)
            }
            ApiError::Empty => f.write_str(EMPTY_RESPONSE_ERROR),
        }
    }
}

/// Acknowledgement returned by the command endpoints (connect, NTP)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiAck {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
}
