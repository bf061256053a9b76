//! Whole-stream scans that run before events are built: period boundaries
//! and the running score.

use tracing::{debug, warn};

use super::codes;
use super::row::Row;
use crate::models::{Period, Score};

/// Period index for a vendor half number (`"1"` -> 0, `"2"` -> 1).
pub fn period_index(half: &str) -> Option<usize> {
    match half {
        "1" => Some(0),
        "2" => Some(1),
        _ => None,
    }
}

pub fn empty_periods() -> Vec<Period> {
    vec![Period::new(1), Period::new(2)]
}

/// Fixes each period's start (and end, when present) from the marker rows.
///
/// The first marker wins; later duplicates are ignored.
pub fn detect_periods(rows: &[Row]) -> Vec<Period> {
    let mut periods = empty_periods();

    for row in rows {
        let code = match row.action_code() {
            Ok(Some(code)) => code,
            _ => continue,
        };
        let is_start = matches!(code, codes::FIRST_HALF_START | codes::SECOND_HALF_START);
        let is_end = matches!(code, codes::FIRST_HALF_END | codes::SECOND_HALF_END);
        if !is_start && !is_end {
            continue;
        }

        let half = row.half().unwrap_or("");
        let Some(period) = period_index(half).and_then(|idx| periods.get_mut(idx)) else {
            warn!(event_id = row.id(), half, code, "period marker with unrecognized half, skipping");
            continue;
        };
        let instant = match row.raw_instant() {
            Ok(Some(instant)) => instant,
            Ok(None) => {
                warn!(event_id = row.id(), code, "period marker without instant, skipping");
                continue;
            }
            Err(err) => {
                warn!(event_id = row.id(), %err, "skipping period marker");
                continue;
            }
        };

        let slot = if is_start { &mut period.start_timestamp } else { &mut period.end_timestamp };
        if let Some(existing) = *slot {
            debug!(event_id = row.id(), existing, ignored = instant, "duplicate period marker");
        } else {
            *slot = Some(instant);
        }
    }

    periods
}

/// Counts goal rows per team. Rows without a team id are skipped.
pub fn parse_score(rows: &[Row], home_team_id: &str, away_team_id: &str) -> Score {
    let mut score = Score::default();

    for row in rows {
        if !matches!(row.action_code(), Ok(Some(codes::GOAL))) {
            continue;
        }
        match row.team_id() {
            Some(team_id) if team_id == home_team_id => score.home += 1,
            Some(team_id) if team_id == away_team_id => score.away += 1,
            _ => {}
        }
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows_of<'a, 'input>(doc: &'a roxmltree::Document<'input>) -> Vec<Row<'a, 'input>> {
        doc.root_element().children().filter(|n| n.has_tag_name("row")).map(Row::new).collect()
    }

    #[test]
    fn test_first_marker_wins() {
        let doc = roxmltree::Document::parse(
            r#"<data>
                <row id="1" action_id="18010" half="1" second="100.0"/>
                <row id="2" action_id="18010" half="1" second="160.0"/>
                <row id="3" action_id="18020" half="2" second="3000.0"/>
                <row id="4" action_id="18030" half="1" second="2900.0"/>
            </data>"#,
        )
        .unwrap();
        let periods = detect_periods(&rows_of(&doc));

        assert_eq!(periods[0].start_timestamp, Some(100.0));
        assert_eq!(periods[0].end_timestamp, Some(2900.0));
        assert_eq!(periods[1].start_timestamp, Some(3000.0));
        assert_eq!(periods[1].end_timestamp, None);
    }

    #[test]
    fn test_unrecognized_half_does_not_set_a_period() {
        let doc = roxmltree::Document::parse(
            r#"<data><row id="1" action_id="18010" half="3" second="100.0"/></data>"#,
        )
        .unwrap();
        let periods = detect_periods(&rows_of(&doc));
        assert!(periods.iter().all(|p| !p.is_resolved()));
    }

    #[test]
    fn test_no_marker_leaves_periods_unset() {
        let doc = roxmltree::Document::parse(
            r#"<data><row id="1" action_id="1011" half="1" second="100.0"/></data>"#,
        )
        .unwrap();
        let periods = detect_periods(&rows_of(&doc));
        assert_eq!(periods.len(), 2);
        assert_eq!(periods[0].start_timestamp, None);
    }

    #[test]
    fn test_score_counts_goal_rows_per_team() {
        let doc = roxmltree::Document::parse(
            r#"<data>
                <row action_id="8010" team_id="1"/>
                <row action_id="8010" team_id="1"/>
                <row action_id="8010"/>
                <row action_id="8010" team_id="3"/>
                <row action_id="8020" team_id="2"/>
                <row action_id="1011" team_id="2"/>
            </data>"#,
        )
        .unwrap();
        assert_eq!(parse_score(&rows_of(&doc), "1", "2"), Score { home: 2, away: 0 });
        assert_eq!(parse_score(&[], "1", "2"), Score { home: 0, away: 0 });
    }
}
