//! Error types for the NFL standings parser

use thiserror::Error;

use crate::cli::types::Season;


pub type Result<T> = std::result::Result<T, StandingsError>;

#[derive(Error, Debug)]
pub enum StandingsError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse season: {0}")]
    InvalidSeason(#[from] std::num::ParseIntError),

    #[error("Invalid season range: {input}")]
    InvalidSeasonRange { input: String },

    #[error("Invalid selector `{selector}`: {message}")]
    Selector { selector: String, message: String },

    #[error("Malformed standings document: {reason}")]
    MalformedDocument { reason: String },

    #[error("Malformed standings row ({reason}): {text:?}")]
    MalformedRow { reason: String, text: String },

    #[error("Could not fetch season {season} after {attempts} attempts: {message}")]
    TransportFailure {
        season: Season,
        attempts: u32,
        message: String,
    },
}

impl StandingsError {
    pub(crate) fn malformed_document(reason: impl Into<String>) -> Self {
        StandingsError::MalformedDocument {
            reason: reason.into(),
        }
    }

    pub(crate) fn malformed_row(reason: impl Into<String>, text: impl Into<String>) -> Self {
        StandingsError::MalformedRow {
            reason: reason.into(),
            text: text.into(),
        }
    }
}
