use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::Point;

/// Which side of the fixture a team is listed on.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Ground {
    Home,
    Away,
}

/// Team formation, e.g. `4-4-2`.
///
/// Uncommon digit groups are kept verbatim in `Other` so a vendor label never
/// gets rejected just because the formation is unusual.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum FormationType {
    F442,
    F433,
    F4411,
    F4321,
    F4222,
    F451,
    F352,
    F3421,
    F3412,
    F532,
    F4231,
    F4141,
    F4312,
    F4132,
    F343,
    F541,
    F3511,
    Other(String),
}

impl FormationType {
    /// Canonical formation code string (e.g., "4-3-3").
    pub fn code(&self) -> &str {
        match self {
            FormationType::F442 => "4-4-2",
            FormationType::F433 => "4-3-3",
            FormationType::F4411 => "4-4-1-1",
            FormationType::F4321 => "4-3-2-1",
            FormationType::F4222 => "4-2-2-2",
            FormationType::F451 => "4-5-1",
            FormationType::F352 => "3-5-2",
            FormationType::F3421 => "3-4-2-1",
            FormationType::F3412 => "3-4-1-2",
            FormationType::F532 => "5-3-2",
            FormationType::F4231 => "4-2-3-1",
            FormationType::F4141 => "4-1-4-1",
            FormationType::F4312 => "4-3-1-2",
            FormationType::F4132 => "4-1-3-2",
            FormationType::F343 => "3-4-3",
            FormationType::F541 => "5-4-1",
            FormationType::F3511 => "3-5-1-1",
            FormationType::Other(code) => code,
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code {
            "4-4-2" => FormationType::F442,
            "4-3-3" => FormationType::F433,
            "4-4-1-1" => FormationType::F4411,
            "4-3-2-1" => FormationType::F4321,
            "4-2-2-2" => FormationType::F4222,
            "4-5-1" => FormationType::F451,
            "3-5-2" => FormationType::F352,
            "3-4-2-1" => FormationType::F3421,
            "3-4-1-2" => FormationType::F3412,
            "5-3-2" => FormationType::F532,
            "4-2-3-1" => FormationType::F4231,
            "4-1-4-1" => FormationType::F4141,
            "4-3-1-2" => FormationType::F4312,
            "4-1-3-2" => FormationType::F4132,
            "3-4-3" => FormationType::F343,
            "5-4-1" => FormationType::F541,
            "3-5-1-1" => FormationType::F3511,
            other => FormationType::Other(other.to_string()),
        }
    }

    /// Builds a formation from a free-text tactic label such as
    /// `"4-2-3-1 (defensive)"` or `"3 5 2"`: every run of digits becomes one
    /// line, everything else is dropped, so `"433"` is a single line.
    /// `None` when the label has no digits.
    pub fn from_label(label: &str) -> Option<Self> {
        let groups: Vec<&str> = label
            .split(|c: char| !c.is_ascii_digit())
            .filter(|group| !group.is_empty())
            .collect();
        if groups.is_empty() {
            return None;
        }
        Some(Self::from_code(&groups.join("-")))
    }

    /// Outfield players across all lines.
    pub fn outfield_players(&self) -> u32 {
        self.code().split('-').filter_map(|line| line.parse::<u32>().ok()).sum()
    }
}

impl From<FormationType> for String {
    fn from(formation: FormationType) -> Self {
        formation.code().to_string()
    }
}

impl From<String> for FormationType {
    fn from(code: String) -> Self {
        FormationType::from_code(&code)
    }
}

impl std::fmt::Display for FormationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl JsonSchema for FormationType {
    fn schema_name() -> String {
        "FormationType".to_string()
    }

    fn json_schema(gen: &mut schemars::gen::SchemaGenerator) -> schemars::schema::Schema {
        <String as JsonSchema>::json_schema(gen)
    }
}

/// Starting slot of a player as named by the vendor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Position {
    pub position_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Point>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Player {
    pub player_id: String,
    /// Owning team, by id. Teams own players, not the other way round.
    pub team_id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jersey_no: Option<u32>,
    pub starting: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

impl Player {
    pub fn full_name(&self) -> String {
        match (self.first_name.is_empty(), self.last_name.is_empty()) {
            (false, false) => format!("{} {}", self.first_name, self.last_name),
            (true, _) => self.last_name.clone(),
            (_, true) => self.first_name.clone(),
        }
    }
}

/// A team with its complete roster. Immutable once built: the roster is
/// handed over at construction time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Team {
    pub team_id: String,
    pub name: String,
    pub ground: Ground,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_formation: Option<FormationType>,
    pub players: Vec<Player>,
}

impl Team {
    pub fn new(
        team_id: impl Into<String>,
        name: impl Into<String>,
        ground: Ground,
        starting_formation: Option<FormationType>,
        players: Vec<Player>,
    ) -> Self {
        Self {
            team_id: team_id.into(),
            name: name.into(),
            ground,
            starting_formation,
            players,
        }
    }

    pub fn get_player_by_id(&self, player_id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.player_id == player_id)
    }

    pub fn get_player_by_jersey_number(&self, jersey_no: u32) -> Option<&Player> {
        self.players.iter().find(|p| p.jersey_no == Some(jersey_no))
    }

    pub fn starting_players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.starting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formation_from_label() {
        assert_eq!(FormationType::from_label("4-4-2"), Some(FormationType::F442));
        assert_eq!(FormationType::from_label("4-2-3-1 (attacking)"), Some(FormationType::F4231));
        assert_eq!(FormationType::from_label("3 5 2"), Some(FormationType::F352));
        assert_eq!(
            FormationType::from_label("433"),
            Some(FormationType::Other("433".to_string()))
        );
        assert_eq!(
            FormationType::from_label("4-6-0"),
            Some(FormationType::Other("4-6-0".to_string()))
        );
        assert_eq!(FormationType::from_label("classic"), None);
        assert_eq!(FormationType::from_label(""), None);
    }

    #[test]
    fn test_formation_serializes_as_code() {
        let json = serde_json::to_string(&FormationType::F433).unwrap();
        assert_eq!(json, "\"4-3-3\"");
        let back: FormationType = serde_json::from_str("\"3-5-1-1\"").unwrap();
        assert_eq!(back, FormationType::F3511);
        assert_eq!(FormationType::F4231.outfield_players(), 10);
    }

    #[test]
    fn test_ground_parsing() {
        assert_eq!("HOME".parse::<Ground>().unwrap(), Ground::Home);
        assert_eq!(Ground::Away.to_string(), "away");
    }

    #[test]
    fn test_team_player_lookup() {
        let player = Player {
            player_id: "7".to_string(),
            team_id: "1".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            jersey_no: Some(10),
            starting: true,
            position: None,
        };
        let team = Team::new("1", "Analysts FC", Ground::Home, None, vec![player]);

        assert_eq!(team.get_player_by_id("7").map(|p| p.full_name()), Some("Ada Lovelace".to_string()));
        assert!(team.get_player_by_jersey_number(10).is_some());
        assert!(team.get_player_by_id("8").is_none());
        assert_eq!(team.starting_players().count(), 1);
    }
}
