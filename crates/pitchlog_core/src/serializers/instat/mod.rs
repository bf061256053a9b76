//! InStat XML adapter: lineup document + event log document -> [`EventDataset`].

pub mod assemble;
pub mod classify;
pub mod codes;
pub mod lineup;
pub mod row;
pub mod scan;


use std::io::Read;
use std::time::Instant;

use roxmltree::Document;
use tracing::{debug, info, warn};

use self::assemble::EventAssembler;
use self::row::Row;
use crate::config::DeserializerConfig;
use crate::coordinates::{field, Provider};
use crate::error::{DeserializationError, Result};
use crate::models::{DatasetFlag, EventDataset, Ground, Metadata, Orientation};
use crate::serializers::EventDataDeserializer;

/// The two already-open documents of one match.
pub struct InStatInputs {
    pub lineup_data: Box<dyn Read>,
    pub events_data: Box<dyn Read>,
}

impl InStatInputs {
    pub fn new(lineup_data: impl Read + 'static, events_data: impl Read + 'static) -> Self {
        Self {
            lineup_data: Box::new(lineup_data),
            events_data: Box::new(events_data),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct InStatDeserializer {
    config: DeserializerConfig,
}

impl InStatDeserializer {
    pub fn new(config: DeserializerConfig) -> Self {
        Self { config }
    }
}

fn read_document(mut reader: impl Read, document: &'static str) -> Result<String> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    String::from_utf8(bytes).map_err(|err| DeserializationError::malformed(document, err))
}

fn parse_document<'input>(text: &'input str, document: &'static str) -> Result<Document<'input>> {
    Document::parse(text).map_err(|err| DeserializationError::malformed(document, err))
}

impl EventDataDeserializer for InStatDeserializer {
    const PROVIDER: Provider = Provider::InStat;

    type Inputs = InStatInputs;

    fn config(&self) -> &DeserializerConfig {
        &self.config
    }

    fn deserialize(&self, inputs: Self::Inputs) -> Result<EventDataset> {
        let started = Instant::now();

        let InStatInputs { lineup_data, events_data } = inputs;
        let lineup_text = read_document(lineup_data, "lineup")?;
        let events_text = read_document(events_data, "events")?;
        let lineup_doc = parse_document(&lineup_text, "lineup")?;
        let events_doc = parse_document(&events_text, "events")?;
        debug!(elapsed_ms = started.elapsed().as_millis() as u64, "parsed documents");

        let home = lineup::parse_team(lineup_doc.root_element(), Ground::Home)?;
        let away = lineup::parse_team(lineup_doc.root_element(), Ground::Away)?;

        let rows: Vec<Row> = events_doc
            .root_element()
            .descendants()
            .filter(|n| n.has_tag_name("row"))
            .map(Row::new)
            .collect();
        let periods = scan::detect_periods(&rows);
        let score = scan::parse_score(&rows, &home.team_id, &away.team_id);
        debug!(rows = rows.len(), elapsed_ms = started.elapsed().as_millis() as u64, "scanned event log");

        let transformer = self.get_transformer(field::LENGTH_M, field::WIDTH_M);
        let assembler = EventAssembler::new(&home, &away, &periods, &transformer);

        let mut events = Vec::new();
        let mut skipped = 0usize;
        for row in &rows {
            match assembler.assemble(row) {
                Ok(built) => events.extend(built.into_iter().filter(|e| self.should_include_event(e))),
                Err(err) if err.is_recoverable() => {
                    warn!(%err, "skipping row");
                    skipped += 1;
                }
                Err(err) => return Err(err),
            }
        }

        info!(
            home = %home.name,
            away = %away.name,
            events = events.len(),
            skipped,
            home_goals = score.home,
            away_goals = score.away,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "deserialized InStat match"
        );

        let metadata = Metadata {
            teams: [home, away],
            periods,
            pitch_dimensions: transformer.to_pitch_dimensions(),
            score,
            frame_rate: None,
            orientation: Orientation::ActionExecutingTeam,
            flags: vec![DatasetFlag::BallOwningTeam, DatasetFlag::BallState],
            provider: Provider::InStat,
            coordinate_system: *transformer.to_coordinate_system(),
        };

        Ok(EventDataset::new(metadata, events))
    }
}
