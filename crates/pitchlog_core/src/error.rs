use thiserror::Error;

use crate::models::Ground;

#[derive(Error, Debug)]
pub enum DeserializationError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed {document} document: {reason}")]
    MalformedDocument { document: &'static str, reason: String },

    #[error("Could not find lineup for the {side} team")]
    RosterNotFound { side: Ground },

    #[error("Event {event_id} references unknown team {team_id}")]
    UnknownTeam { event_id: String, team_id: String },

    #[error("Event {event_id} has unrecognized half {half}")]
    UnrecognizedHalf { event_id: String, half: String },

    #[error("Period {period_id} has no start instant (event {event_id})")]
    UnresolvedPeriodStart { period_id: u8, event_id: String },

    #[error("Invalid value {value:?} for attribute {attribute} on {element}")]
    InvalidAttribute { element: String, attribute: &'static str, value: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl DeserializationError {
    /// Row-level conditions: the row is skipped and deserialization continues.
    pub fn is_recoverable(&self) -> bool {
        match self {
            DeserializationError::UnrecognizedHalf { .. } => true,
            DeserializationError::InvalidAttribute { .. } => true,
            DeserializationError::Io(_) => false,
            DeserializationError::MalformedDocument { .. } => false,
            DeserializationError::RosterNotFound { .. } => false,
            DeserializationError::UnknownTeam { .. } => false,
            DeserializationError::UnresolvedPeriodStart { .. } => false,
            DeserializationError::InvalidConfig(_) => false,
        }
    }

    pub(crate) fn malformed(document: &'static str, reason: impl ToString) -> Self {
        DeserializationError::MalformedDocument { document, reason: reason.to_string() }
    }
}

pub type Result<T> = std::result::Result<T, DeserializationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_row_level_errors_are_recoverable() {
        let half = DeserializationError::UnrecognizedHalf {
            event_id: "1".to_string(),
            half: "3".to_string(),
        };
        assert!(half.is_recoverable());

        let team = DeserializationError::UnknownTeam {
            event_id: "1".to_string(),
            team_id: "999".to_string(),
        };
        assert!(!team.is_recoverable());
        assert!(!DeserializationError::RosterNotFound { side: Ground::Away }.is_recoverable());
    }

    #[test]
    fn test_error_messages() {
        let err = DeserializationError::RosterNotFound { side: Ground::Home };
        assert_eq!(err.to_string(), "Could not find lineup for the home team");

        let err = DeserializationError::malformed("lineup", "unexpected end of stream");
        assert_eq!(err.to_string(), "Malformed lineup document: unexpected end of stream");
    }
}
