//! Builds canonical events from one log row.

use tracing::warn;

use super::classify::{self, ActionContext, Classified};
use super::codes::{self, ActionCategory};
use super::row::{self, Row};
use super::scan::period_index;
use crate::coordinates::Transformer;
use crate::error::{DeserializationError, Result};
use crate::models::{BallState, Event, Period, Point, Team};

pub struct EventAssembler<'a> {
    home: &'a Team,
    away: &'a Team,
    periods: &'a [Period],
    transformer: &'a Transformer,
}

impl<'a> EventAssembler<'a> {
    pub fn new(
        home: &'a Team,
        away: &'a Team,
        periods: &'a [Period],
        transformer: &'a Transformer,
    ) -> Self {
        Self { home, away, periods, transformer }
    }

    /// Events for one row, in emission order: the primary variant first,
    /// then the card the row books, if any.
    ///
    /// Rows that cannot be attributed (no possession marker, no team, no
    /// position, period markers) yield no events. Row-level problems come
    /// back as recoverable errors; an unknown team or an unresolved period
    /// start is fatal.
    pub fn assemble(&self, row: &Row) -> Result<Vec<Event>> {
        if !row.has_possession() {
            return Ok(Vec::new());
        }
        let Some(code) = row.action_code()? else {
            return Ok(Vec::new());
        };

        let period = self.period_for(row)?;
        let Some(team_id) = row.team_id() else {
            return Ok(Vec::new());
        };
        let team = self.resolve_team(team_id).ok_or_else(|| DeserializationError::UnknownTeam {
            event_id: row.id().to_string(),
            team_id: team_id.to_string(),
        })?;
        let Some(position) = row.position()? else {
            return Ok(Vec::new());
        };
        let Some(raw_instant) = row.raw_instant()? else {
            return Ok(Vec::new());
        };

        let ctx = ActionContext {
            receiver_coordinates: self.receiver_coordinates(code, row),
            formation_label: row.formation_label(),
        };
        let Some(primary) = classify::classify(code, ctx) else {
            return Ok(Vec::new());
        };

        let timestamp = period.relative_timestamp(raw_instant, row.id())?;
        if timestamp < 0.0 {
            return Err(DeserializationError::InvalidAttribute {
                element: format!("row {}", row.id()),
                attribute: row::SECOND,
                value: format!("{raw_instant} (before period {} start)", period.id),
            });
        }

        let common = CommonFields {
            event_id: row.id().to_string(),
            period_id: period.id,
            timestamp,
            team_id: team.team_id.clone(),
            player_id: self.resolve_player(team, row),
            ball_owning_team: Some(
                row.possession_team_id()
                    .and_then(|id| self.resolve_team(id))
                    .unwrap_or(team)
                    .team_id
                    .clone(),
            ),
            ball_state: if codes::is_dead_ball(code) { BallState::Dead } else { BallState::Alive },
            coordinates: self.transformer.transform_point(position),
        };

        let mut events = vec![common.build(primary, row)];
        if let Some(card) = classify::classify_card(code) {
            events.push(common.build(card, row));
        }
        Ok(events)
    }

    /// Only passes read the destination; a bad one drops the receiver, not the pass.
    fn receiver_coordinates(&self, code: u32, row: &Row) -> Option<Point> {
        if ActionCategory::from_code(code) != ActionCategory::Pass {
            return None;
        }
        match row.destination() {
            Ok(destination) => destination.map(|p| self.transformer.transform_point(p)),
            Err(err) => {
                warn!(event_id = row.id(), %err, "ignoring pass destination");
                None
            }
        }
    }

    fn period_for(&self, row: &Row) -> Result<&'a Period> {
        let half = row.half().unwrap_or("");
        period_index(half).and_then(|idx| self.periods.get(idx)).ok_or_else(|| {
            DeserializationError::UnrecognizedHalf {
                event_id: row.id().to_string(),
                half: half.to_string(),
            }
        })
    }

    fn resolve_team(&self, team_id: &str) -> Option<&'a Team> {
        [self.home, self.away].into_iter().find(|t| t.team_id == team_id)
    }

    fn resolve_player(&self, team: &Team, row: &Row) -> Option<String> {
        let player_id = row.player_id()?;
        match team.get_player_by_id(player_id) {
            Some(player) => Some(player.player_id.clone()),
            None => {
                warn!(event_id = row.id(), player_id, team = %team.name, "player not in roster");
                None
            }
        }
    }
}

struct CommonFields {
    event_id: String,
    period_id: u8,
    timestamp: f64,
    team_id: String,
    player_id: Option<String>,
    ball_owning_team: Option<String>,
    ball_state: BallState,
    coordinates: Point,
}

impl CommonFields {
    fn build(&self, classified: Classified, row: &Row) -> Event {
        Event {
            event_id: self.event_id.clone(),
            period_id: self.period_id,
            timestamp: self.timestamp,
            team_id: self.team_id.clone(),
            player_id: self.player_id.clone(),
            ball_owning_team: self.ball_owning_team.clone(),
            ball_state: self.ball_state,
            coordinates: self.coordinates,
            qualifiers: classified.qualifiers,
            kind: classified.kind,
            raw_event: row.raw_event(),
        }
    }
}
