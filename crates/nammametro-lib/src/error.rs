use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the Namma Metro library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a station name could not be resolved against the network.
    #[error("unknown station name: {name}{}", format_suggestions(.suggestions))]
    UnknownStation {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when neither endpoint of a route query could be resolved.
    #[error("unknown station names: {from} and {to}")]
    UnknownStations { from: String, to: String },

    /// Raised when no route could be found between two stations.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: String, goal: String },

    /// Raised when a report is requested for a route without stations.
    #[error("route plan was empty")]
    EmptyRoutePlan,

    /// Raised when line definitions fail validation.
    #[error("invalid line data: {message}")]
    InvalidLineData { message: String },

    /// Line data file could not be located at the resolved path.
    #[error("line data not found at {path}")]
    LineDataNotFound { path: PathBuf },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON parsing errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_station_without_suggestions_has_plain_message() {
        let err = Error::UnknownStation {
            name: "Atlantis".to_string(),
            suggestions: Vec::new(),
        };
        assert_eq!(err.to_string(), "unknown station name: Atlantis");
    }

    #[test]
    fn unknown_station_lists_multiple_suggestions() {
        let err = Error::UnknownStation {
            name: "majestik".to_string(),
            suggestions: vec!["majestic".to_string(), "Magadi Road".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "unknown station name: majestik. Did you mean one of: 'majestic', 'Magadi Road'?"
        );
    }
}
