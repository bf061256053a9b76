use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::{FormationType, Point};

/// Canonical event taxonomy shared by every vendor adapter.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum EventType {
    Generic,
    Pass,
    Shot,
    TakeOn,
    Card,
    FoulCommitted,
    Recovery,
    BallOut,
    FormationChange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum BallState {
    Alive,
    Dead,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PassResult {
    Complete,
    Incomplete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShotResult {
    Goal,
    OwnGoal,
    Blocked,
    Post,
    Saved,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TakeOnResult {
    Complete,
    Incomplete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardType {
    FirstYellow,
    SecondYellow,
    Red,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PassType {
    Cross,
    Assist,
    Assist2,
}

/// Tagged annotation attached to an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "qualifier", content = "value", rename_all = "snake_case")]
pub enum Qualifier {
    Card(CardType),
    Pass(PassType),
}

/// Variant-specific payload of an [`Event`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "event_type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventKind {
    Pass {
        result: Option<PassResult>,
        receiver_coordinates: Option<Point>,
        receiver_player_id: Option<String>,
        receive_timestamp: Option<f64>,
    },
    Shot {
        result: Option<ShotResult>,
    },
    TakeOn {
        result: Option<TakeOnResult>,
    },
    Card {
        card_type: Option<CardType>,
    },
    FoulCommitted,
    Recovery,
    BallOut,
    FormationChange {
        formation_type: Option<FormationType>,
    },
    Generic {
        name: String,
    },
}

impl EventKind {
    pub fn event_type(&self) -> EventType {
        match self {
            EventKind::Pass { .. } => EventType::Pass,
            EventKind::Shot { .. } => EventType::Shot,
            EventKind::TakeOn { .. } => EventType::TakeOn,
            EventKind::Card { .. } => EventType::Card,
            EventKind::FoulCommitted => EventType::FoulCommitted,
            EventKind::Recovery => EventType::Recovery,
            EventKind::BallOut => EventType::BallOut,
            EventKind::FormationChange { .. } => EventType::FormationChange,
            EventKind::Generic { .. } => EventType::Generic,
        }
    }
}

/// Attributes of the vendor row an event was built from, kept verbatim.
pub type RawEvent = BTreeMap<String, String>;

/// One canonical event.
///
/// Teams and players are referenced by id; resolve them through
/// [`EventDataset::find_team`](super::EventDataset::find_team) and
/// [`EventDataset::find_player`](super::EventDataset::find_player).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Event {
    pub event_id: String,
    pub period_id: u8,
    /// Seconds since the start of `period_id`.
    pub timestamp: f64,
    pub team_id: String,
    pub player_id: Option<String>,
    pub ball_owning_team: Option<String>,
    pub ball_state: BallState,
    /// Target coordinate system.
    pub coordinates: Point,
    pub qualifiers: Vec<Qualifier>,
    #[serde(flatten)]
    pub kind: EventKind,
    pub raw_event: RawEvent,
}

impl Event {
    pub fn event_type(&self) -> EventType {
        self.kind.event_type()
    }

    /// Result code of the variant, if the variant has one and it is known.
    pub fn result_code(&self) -> Option<&'static str> {
        match &self.kind {
            EventKind::Pass { result, .. } => result.map(|r| match r {
                PassResult::Complete => "COMPLETE",
                PassResult::Incomplete => "INCOMPLETE",
            }),
            EventKind::Shot { result } => result.map(|r| match r {
                ShotResult::Goal => "GOAL",
                ShotResult::OwnGoal => "OWN_GOAL",
                ShotResult::Blocked => "BLOCKED",
                ShotResult::Post => "POST",
                ShotResult::Saved => "SAVED",
            }),
            EventKind::TakeOn { result } => result.map(|r| match r {
                TakeOnResult::Complete => "COMPLETE",
                TakeOnResult::Incomplete => "INCOMPLETE",
            }),
            _ => None,
        }
    }

    pub fn card_type(&self) -> Option<CardType> {
        match &self.kind {
            EventKind::Card { card_type } => *card_type,
            _ => None,
        }
    }

    pub fn is_goal(&self) -> bool {
        matches!(self.kind, EventKind::Shot { result: Some(ShotResult::Goal) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn sample(kind: EventKind) -> Event {
        Event {
            event_id: "42".to_string(),
            period_id: 1,
            timestamp: 12.5,
            team_id: "1".to_string(),
            player_id: None,
            ball_owning_team: Some("1".to_string()),
            ball_state: BallState::Alive,
            coordinates: Point::new(0.5, 0.5),
            qualifiers: Vec::new(),
            kind,
            raw_event: RawEvent::new(),
        }
    }

    #[test]
    fn test_event_type_names_round_trip_through_strings() {
        for event_type in EventType::iter() {
            let name = event_type.to_string();
            assert_eq!(name.parse::<EventType>().unwrap(), event_type);
            assert_eq!(name.to_lowercase().parse::<EventType>().unwrap(), event_type);
        }
        assert!("TACKLE".parse::<EventType>().is_err());
    }

    #[test]
    fn test_result_code_per_variant() {
        let shot = sample(EventKind::Shot { result: Some(ShotResult::OwnGoal) });
        assert_eq!(shot.result_code(), Some("OWN_GOAL"));
        assert!(!shot.is_goal());

        let foul = sample(EventKind::FoulCommitted);
        assert_eq!(foul.result_code(), None);
        assert_eq!(foul.event_type(), EventType::FoulCommitted);
    }

    #[test]
    fn test_event_serializes_with_flat_variant_tag() {
        let mut card = sample(EventKind::Card { card_type: Some(CardType::Red) });
        card.qualifiers.push(Qualifier::Card(CardType::Red));

        let value = serde_json::to_value(&card).unwrap();
        assert_eq!(value["event_type"], "CARD");
        assert_eq!(value["card_type"], "RED");
        assert_eq!(value["qualifiers"][0]["qualifier"], "card");
        assert_eq!(value["qualifiers"][0]["value"], "RED");
        assert_eq!(card.card_type(), Some(CardType::Red));
    }
}
