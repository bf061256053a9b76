//! Roster parsing from the InStat lineup document.
//!
//! ```text
//! <data>
//!   <first_team id=".." name="..">
//!     <lineup>
//!       <main starting_tactic="4-4-2 (classic)">
//!         <player id=".." firstname=".." lastname=".." num=".." starting_lineup="1"
//!                 starting_position_id=".." starting_position_name=".."/>
//! ```

use roxmltree::Node;
use tracing::warn;

use crate::error::{DeserializationError, Result};
use crate::models::{FormationType, Ground, Player, Position, Team};

const STARTING_TACTIC: &str = "starting_tactic";

fn side_tag(side: Ground) -> &'static str {
    match side {
        Ground::Home => "first_team",
        Ground::Away => "second_team",
    }
}

fn child<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|n| n.has_tag_name(tag))
}

fn required_attr<'a>(node: Node<'a, '_>, name: &str) -> Result<&'a str> {
    node.attribute(name)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| {
            DeserializationError::malformed(
                "lineup",
                format!("<{}> has no {name} attribute", node.tag_name().name()),
            )
        })
}

fn optional_attr<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    node.attribute(name).map(str::trim).filter(|value| !value.is_empty())
}

/// Parses one side of the lineup document into a complete [`Team`].
pub fn parse_team(root: Node, side: Ground) -> Result<Team> {
    let tag = side_tag(side);
    let team_node = root
        .descendants()
        .find(|n| n.has_tag_name(tag))
        .ok_or(DeserializationError::RosterNotFound { side })?;
    let main = child(team_node, "lineup")
        .and_then(|lineup| child(lineup, "main"))
        .ok_or(DeserializationError::RosterNotFound { side })?;

    let team_id = required_attr(team_node, "id")?;
    let name = optional_attr(team_node, "name").unwrap_or(team_id);
    let starting_formation = optional_attr(main, STARTING_TACTIC).and_then(FormationType::from_label);

    let players = main
        .children()
        .filter(|n| n.has_tag_name("player"))
        .map(|player| parse_player(player, team_id))
        .collect::<Result<Vec<_>>>()?;

    Ok(Team::new(team_id, name, side, starting_formation, players))
}

fn parse_player(node: Node, team_id: &str) -> Result<Player> {
    let player_id = required_attr(node, "id")?;

    let jersey_no = optional_attr(node, "num").and_then(|num| match num.parse::<u32>() {
        Ok(n) => Some(n),
        Err(_) => {
            warn!(player_id, num, "ignoring unparsable shirt number");
            None
        }
    });

    let position = optional_attr(node, "starting_position_id").map(|position_id| Position {
        position_id: position_id.to_string(),
        name: optional_attr(node, "starting_position_name").unwrap_or_default().to_string(),
        coordinates: None,
    });

    Ok(Player {
        player_id: player_id.to_string(),
        team_id: team_id.to_string(),
        first_name: optional_attr(node, "firstname").unwrap_or_default().to_string(),
        last_name: optional_attr(node, "lastname").unwrap_or_default().to_string(),
        jersey_no,
        starting: optional_attr(node, "starting_lineup") == Some("1"),
        position,
    })
}
