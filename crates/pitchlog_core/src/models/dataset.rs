use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Event, EventType, PitchDimensions, Player, Team};
use crate::coordinates::{CoordinateSystem, Provider};
use crate::error::{DeserializationError, Result};

/// One half of the match with its own zeroed clock.
///
/// `start_timestamp` is a raw vendor instant. It stays `None` until a
/// half-start marker is seen; it is never defaulted to zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Period {
    pub id: u8,
    pub start_timestamp: Option<f64>,
    pub end_timestamp: Option<f64>,
}

impl Period {
    pub fn new(id: u8) -> Self {
        Self { id, start_timestamp: None, end_timestamp: None }
    }

    pub fn is_resolved(&self) -> bool {
        self.start_timestamp.is_some()
    }

    /// Seconds between the period start and `raw_instant`.
    pub fn relative_timestamp(&self, raw_instant: f64, event_id: &str) -> Result<f64> {
        match self.start_timestamp {
            Some(start) => Ok(raw_instant - start),
            None => Err(DeserializationError::UnresolvedPeriodStart {
                period_id: self.id,
                event_id: event_id.to_string(),
            }),
        }
    }

    pub fn duration(&self) -> Option<f64> {
        match (self.start_timestamp, self.end_timestamp) {
            (Some(start), Some(end)) => Some(end - start),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Score {
    pub home: u32,
    pub away: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Coordinates are expressed from the point of view of the team executing the action.
    ActionExecutingTeam,
    HomeTeam,
    AwayTeam,
    FixedHomeAway,
    FixedAwayHome,
}

/// Auxiliary facts a dataset is known to carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DatasetFlag {
    BallOwningTeam,
    BallState,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Metadata {
    /// Home team first, away team second.
    pub teams: [Team; 2],
    pub periods: Vec<Period>,
    pub pitch_dimensions: PitchDimensions,
    pub score: Score,
    pub frame_rate: Option<f64>,
    pub orientation: Orientation,
    pub flags: Vec<DatasetFlag>,
    pub provider: Provider,
    pub coordinate_system: CoordinateSystem,
}

impl Metadata {
    pub fn home_team(&self) -> &Team {
        &self.teams[0]
    }

    pub fn away_team(&self) -> &Team {
        &self.teams[1]
    }

    pub fn has_flag(&self, flag: DatasetFlag) -> bool {
        self.flags.contains(&flag)
    }

    pub fn period(&self, id: u8) -> Option<&Period> {
        self.periods.iter().find(|p| p.id == id)
    }
}

/// Metadata plus events in document order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EventDataset {
    metadata: Metadata,
    records: Vec<Event>,
}

impl EventDataset {
    pub fn new(metadata: Metadata, records: Vec<Event>) -> Self {
        Self { metadata, records }
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn events(&self) -> &[Event] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn find_team(&self, team_id: &str) -> Option<&Team> {
        self.metadata.teams.iter().find(|t| t.team_id == team_id)
    }

    pub fn find_player(&self, team_id: &str, player_id: &str) -> Option<&Player> {
        self.find_team(team_id)?.get_player_by_id(player_id)
    }

    pub fn filter(&self, event_type: EventType) -> impl Iterator<Item = &Event> {
        self.records.iter().filter(move |e| e.event_type() == event_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unresolved_period_fails_loudly() {
        let period = Period::new(2);
        let err = period.relative_timestamp(1_600_000_000.0, "77").unwrap_err();
        assert!(matches!(
            err,
            DeserializationError::UnresolvedPeriodStart { period_id: 2, ref event_id } if event_id == "77"
        ));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_relative_timestamp_and_duration() {
        let period = Period {
            id: 1,
            start_timestamp: Some(1_600_000_000.0),
            end_timestamp: Some(1_600_002_760.0),
        };
        assert_eq!(period.relative_timestamp(1_600_000_065.5, "1").unwrap(), 65.5);
        assert_eq!(period.duration(), Some(2760.0));
        assert_eq!(Period::new(1).duration(), None);
    }
}
