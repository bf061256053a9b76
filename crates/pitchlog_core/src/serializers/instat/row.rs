//! Typed access to one `<row>` of the InStat event log.

use chrono::{NaiveDateTime, TimeZone, Utc};
use roxmltree::Node;

use crate::error::{DeserializationError, Result};
use crate::models::{Point, RawEvent};

pub const ID: &str = "id";
pub const ACTION_ID: &str = "action_id";
pub const HALF: &str = "half";
pub const SECOND: &str = "second";
pub const TEAM_ID: &str = "team_id";
pub const PLAYER_ID: &str = "player_id";
pub const POS_X: &str = "pos_x";
pub const POS_Y: &str = "pos_y";
pub const POS_DEST_X: &str = "pos_dest_x";
pub const POS_DEST_Y: &str = "pos_dest_y";
/// Presence alone gates event emission.
pub const POSSESSION_ID: &str = "possession_id";
pub const POSSESSION_TEAM_ID: &str = "possession_team_id";
pub const FORMATION: &str = "formation";

const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

#[derive(Debug, Clone, Copy)]
pub struct Row<'a, 'input> {
    node: Node<'a, 'input>,
}

impl<'a, 'input> Row<'a, 'input> {
    pub fn new(node: Node<'a, 'input>) -> Self {
        Self { node }
    }

    /// Attribute value, with blank values treated as absent.
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.node
            .attribute(name)
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }

    pub fn id(&self) -> &'a str {
        self.attr(ID).unwrap_or("")
    }

    pub fn action_code(&self) -> Result<Option<u32>> {
        self.parse_attr(ACTION_ID)
    }

    pub fn half(&self) -> Option<&'a str> {
        self.attr(HALF)
    }

    pub fn team_id(&self) -> Option<&'a str> {
        self.attr(TEAM_ID)
    }

    pub fn player_id(&self) -> Option<&'a str> {
        self.attr(PLAYER_ID)
    }

    pub fn has_possession(&self) -> bool {
        self.node.has_attribute(POSSESSION_ID)
    }

    pub fn possession_team_id(&self) -> Option<&'a str> {
        self.attr(POSSESSION_TEAM_ID)
    }

    /// Raw instant in seconds: either decimal seconds or a UTC datetime.
    pub fn raw_instant(&self) -> Result<Option<f64>> {
        let Some(value) = self.attr(SECOND) else {
            return Ok(None);
        };
        match value.parse::<f64>() {
            Ok(seconds) if seconds.is_finite() => return Ok(Some(seconds)),
            Ok(_) => return Err(self.invalid(SECOND, value)),
            Err(_) => {}
        }
        let naive = NaiveDateTime::parse_from_str(value, DATETIME_FORMAT)
            .map_err(|_| self.invalid(SECOND, value))?;
        let micros = Utc.from_utc_datetime(&naive).timestamp_micros();
        Ok(Some(micros as f64 / 1_000_000.0))
    }

    pub fn position(&self) -> Result<Option<Point>> {
        self.point(POS_X, POS_Y)
    }

    pub fn destination(&self) -> Result<Option<Point>> {
        self.point(POS_DEST_X, POS_DEST_Y)
    }

    pub fn formation_label(&self) -> Option<&'a str> {
        self.attr(FORMATION)
    }

    pub fn raw_event(&self) -> RawEvent {
        self.node
            .attributes()
            .map(|a| (a.name().to_string(), a.value().to_string()))
            .collect()
    }

    fn point(&self, x_attr: &'static str, y_attr: &'static str) -> Result<Option<Point>> {
        match (self.parse_finite(x_attr)?, self.parse_finite(y_attr)?) {
            (Some(x), Some(y)) => Ok(Some(Point::new(x, y))),
            _ => Ok(None),
        }
    }

    fn parse_attr<T: std::str::FromStr>(&self, name: &'static str) -> Result<Option<T>> {
        match self.attr(name) {
            None => Ok(None),
            Some(value) => value.parse::<T>().map(Some).map_err(|_| self.invalid(name, value)),
        }
    }

    /// Like `parse_attr::<f64>`, but `NaN` and infinities are invalid too.
    fn parse_finite(&self, name: &'static str) -> Result<Option<f64>> {
        let Some(raw) = self.attr(name) else {
            return Ok(None);
        };
        match raw.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Some(value)),
            _ => Err(self.invalid(name, raw)),
        }
    }

    fn invalid(&self, attribute: &'static str, value: &str) -> DeserializationError {
        DeserializationError::InvalidAttribute {
            element: format!("row {}", self.id()),
            attribute,
            value: value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_row<F: FnOnce(Row)>(xml: &str, f: F) {
        let doc = roxmltree::Document::parse(xml).unwrap();
        f(Row::new(doc.root_element()));
    }

    #[test]
    fn test_numeric_and_datetime_instants() {
        with_row(r#"<row id="1" second="1650.25"/>"#, |row| {
            assert_eq!(row.raw_instant().unwrap(), Some(1650.25));
        });
        with_row(r#"<row id="2" second="2021-05-01T18:00:01.500"/>"#, |row| {
            assert_eq!(row.raw_instant().unwrap(), Some(1_619_892_001.5));
        });
        with_row(r#"<row id="3"/>"#, |row| {
            assert_eq!(row.raw_instant().unwrap(), None);
        });
        with_row(r#"<row id="4" second="soon"/>"#, |row| {
            let err = row.raw_instant().unwrap_err();
            assert!(err.is_recoverable());
        });
    }

    #[test]
    fn test_non_finite_numbers_are_invalid() {
        with_row(r#"<row id="5" second="NaN" pos_x="inf" pos_y="1"/>"#, |row| {
            let err = row.raw_instant().unwrap_err();
            assert!(err.is_recoverable());
            assert!(matches!(err, DeserializationError::InvalidAttribute { attribute: SECOND, .. }));

            let err = row.position().unwrap_err();
            assert!(matches!(err, DeserializationError::InvalidAttribute { attribute: POS_X, .. }));
        });
        with_row(r#"<row id="6" second="-infinity" pos_dest_x="1" pos_dest_y="NaN"/>"#, |row| {
            assert!(row.raw_instant().is_err());
            assert!(row.destination().is_err());
        });
    }

    #[test]
    fn test_position_needs_both_axes() {
        with_row(r#"<row pos_x="10.5" pos_y="20"/>"#, |row| {
            assert_eq!(row.position().unwrap(), Some(Point::new(10.5, 20.0)));
            assert_eq!(row.destination().unwrap(), None);
        });
        with_row(r#"<row pos_x="10.5"/>"#, |row| {
            assert_eq!(row.position().unwrap(), None);
        });
    }

    #[test]
    fn test_possession_marker_presence() {
        with_row(r#"<row possession_id=""/>"#, |row| assert!(row.has_possession()));
        with_row(r#"<row team_id="1"/>"#, |row| assert!(!row.has_possession()));
    }

    #[test]
    fn test_blank_attributes_are_absent() {
        with_row(r#"<row id="9" player_id="  " action_id="1011"/>"#, |row| {
            assert_eq!(row.player_id(), None);
            assert_eq!(row.action_code().unwrap(), Some(1011));
            assert_eq!(row.raw_event().get("action_id").map(String::as_str), Some("1011"));
        });
    }
}
