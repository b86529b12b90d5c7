use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("JSON error: {source} {location}")]
    Json {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Invalid RFI status: {value} {location}")]
    InvalidRfiStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid assignment type: {value} {location}")]
    InvalidAssignmentType {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid deadline '{value}': {source} {location}")]
    InvalidDeadline {
        value: String,
        #[source]
        source: chrono::ParseError,
        location: ErrorLocation,
    },
}

impl From<serde_json::Error> for CoreError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        CoreError::Json {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
