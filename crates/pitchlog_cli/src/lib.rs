//! Pitchlog CLI library
//!
//! EventDataset -> JSON | CSV | MessagePack+LZ4, with a SHA256 checksum of
//! the written file. Batch runs over a YAML manifest live in [`batch`].

pub mod batch;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use pitchlog_core::{DeserializerConfig, Event, EventDataset};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::info;

pub use batch::{run_batch, BatchManifest, BatchOutcome, MatchEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum ExportFormat {
    Json,
    Csv,
    MsgpackLz4,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::MsgpackLz4 => "msgpack.lz4",
        }
    }
}

/// Export metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub format: ExportFormat,
    /// SHA256 of the written file (hex)
    pub checksum: String,
    /// RFC3339
    pub created_at: String,
    pub size_bytes: u64,
    pub event_count: usize,
}

/// One CSV line per event.
#[derive(Debug, Serialize)]
struct EventRow<'a> {
    event_id: &'a str,
    period_id: u8,
    timestamp: f64,
    event_type: String,
    result: Option<&'static str>,
    team_id: &'a str,
    player_id: Option<&'a str>,
    ball_owning_team: Option<&'a str>,
    ball_state: &'static str,
    x: f64,
    y: f64,
    qualifiers: String,
}

impl<'a> From<&'a Event> for EventRow<'a> {
    fn from(event: &'a Event) -> Self {
        let qualifiers = event
            .qualifiers
            .iter()
            .filter_map(|q| serde_json::to_value(q).ok())
            .filter_map(|v| v.get("value").and_then(|v| v.as_str()).map(str::to_string))
            .collect::<Vec<_>>()
            .join("|");

        EventRow {
            event_id: &event.event_id,
            period_id: event.period_id,
            timestamp: event.timestamp,
            event_type: event.event_type().to_string(),
            result: event.result_code(),
            team_id: &event.team_id,
            player_id: event.player_id.as_deref(),
            ball_owning_team: event.ball_owning_team.as_deref(),
            ball_state: match event.ball_state {
                pitchlog_core::models::BallState::Alive => "alive",
                pitchlog_core::models::BallState::Dead => "dead",
            },
            x: event.coordinates.x,
            y: event.coordinates.y,
            qualifiers,
        }
    }
}

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

fn encode_csv(dataset: &EventDataset) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for event in dataset.events() {
        writer
            .serialize(EventRow::from(event))
            .with_context(|| format!("Failed to write CSV row for event {}", event.event_id))?;
    }
    writer.into_inner().context("Failed to flush CSV")
}

fn encode_msgpack_lz4(dataset: &EventDataset) -> Result<Vec<u8>> {
    let value = serde_json::to_value(dataset).context("Failed to convert dataset to JSON")?;
    let msgpack_bytes = rmp_serde::to_vec(&value).context("Failed to serialize to MessagePack")?;
    Ok(lz4_flex::compress_prepend_size(&msgpack_bytes))
}

/// Encodes `dataset` in `format` and writes it to `out`.
pub fn export_dataset(
    dataset: &EventDataset,
    format: ExportFormat,
    out: &Path,
) -> Result<ExportMetadata> {
    let bytes = match format {
        ExportFormat::Json => {
            serde_json::to_vec_pretty(dataset).context("Failed to serialize to JSON")?
        }
        ExportFormat::Csv => encode_csv(dataset)?,
        ExportFormat::MsgpackLz4 => encode_msgpack_lz4(dataset)?,
    };

    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }
    fs::write(out, &bytes)
        .with_context(|| format!("Failed to write output file: {}", out.display()))?;

    info!(path = %out.display(), ?format, size = bytes.len(), "exported dataset");

    Ok(ExportMetadata {
        format,
        checksum: sha256_hex(&bytes),
        created_at: chrono::Utc::now().to_rfc3339(),
        size_bytes: bytes.len() as u64,
        event_count: dataset.len(),
    })
}

/// Without an output file only plain JSON can go to stdout, and there is
/// nothing to checksum.
pub fn ensure_stdout_export(format: ExportFormat, verify: bool) -> Result<()> {
    if format != ExportFormat::Json {
        anyhow::bail!("--format {} needs --out", format.extension());
    }
    if verify {
        anyhow::bail!("--verify needs --out");
    }
    Ok(())
}

/// Checks an exported file against its recorded checksum.
pub fn verify_export(path: &Path, expected_checksum: &str) -> Result<bool> {
    let bytes = fs::read(path)
        .with_context(|| format!("Failed to read export file: {}", path.display()))?;
    Ok(sha256_hex(&bytes) == expected_checksum)
}

/// Reads back a MessagePack+LZ4 export.
pub fn load_msgpack_lz4(path: &Path) -> Result<EventDataset> {
    let compressed = fs::read(path)
        .with_context(|| format!("Failed to read export file: {}", path.display()))?;
    let msgpack_bytes =
        lz4_flex::decompress_size_prepended(&compressed).context("Failed to decompress LZ4")?;
    let value: serde_json::Value =
        rmp_serde::from_slice(&msgpack_bytes).context("Failed to deserialize MessagePack")?;
    serde_json::from_value(value).context("Export does not contain an event dataset")
}

/// Config file (YAML) first, then command-line names on top.
pub fn resolve_config(
    config_file: Option<&Path>,
    event_types: &[String],
    coordinates: Option<&str>,
) -> Result<DeserializerConfig> {
    let mut config = match config_file {
        Some(path) => {
            let yaml = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            DeserializerConfig::from_yaml_str(&yaml)
                .with_context(|| format!("Invalid config file: {}", path.display()))?
        }
        None => DeserializerConfig::default(),
    };

    let overrides = DeserializerConfig::from_names(Some(event_types), coordinates)?;
    if !event_types.is_empty() {
        config.event_types = overrides.event_types;
    }
    if coordinates.is_some() {
        config.coordinate_system = overrides.coordinate_system;
    }
    Ok(config)
}

/// JSON schema of [`EventDataset`].
pub fn dataset_schema() -> Result<String> {
    let schema = schemars::schema_for!(EventDataset);
    serde_json::to_string_pretty(&schema).context("Failed to serialize schema")
}


#[cfg(test)]
mod tests {
    use super::*;
    use pitchlog_core::io::FileLike;
    use pitchlog_core::models::EventType;
    use pitchlog_core::providers::instat;
    use tempfile::tempdir;

    fn sample_dataset() -> EventDataset {
        instat::load::<&str>(
            &FileLike::from(fixtures::LINEUP.as_bytes()),
            &FileLike::from(fixtures::EVENTS.as_bytes()),
            None,
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_msgpack_export_round_trip_and_verify() -> Result<()> {
        let dataset = sample_dataset();
        let dir = tempdir()?;
        let out = dir.path().join("nested").join("match.msgpack.lz4");

        let meta = export_dataset(&dataset, ExportFormat::MsgpackLz4, &out)?;
        assert_eq!(meta.event_count, 4);
        assert_eq!(meta.size_bytes, fs::metadata(&out)?.len());
        assert!(verify_export(&out, &meta.checksum)?);
        assert!(!verify_export(&out, "0000")?);

        assert_eq!(load_msgpack_lz4(&out)?, dataset);
        Ok(())
    }

    #[test]
    fn test_csv_export_has_one_line_per_event() -> Result<()> {
        let dataset = sample_dataset();
        let dir = tempdir()?;
        let out = dir.path().join("match.csv");
        export_dataset(&dataset, ExportFormat::Csv, &out)?;

        let mut reader = csv::Reader::from_path(&out)?;
        let headers = reader.headers()?.clone();
        assert_eq!(&headers[3], "event_type");

        let records = reader.records().collect::<std::result::Result<Vec<_>, _>>()?;
        assert_eq!(records.len(), dataset.len());
        assert_eq!(&records[0][3], "PASS");
        assert_eq!(&records[0][4], "COMPLETE");
        assert_eq!(&records[2][3], "CARD");
        assert_eq!(&records[2][11], "FIRST_YELLOW");
        Ok(())
    }

    #[test]
    fn test_json_export_is_the_dataset() -> Result<()> {
        let dataset = sample_dataset();
        let dir = tempdir()?;
        let out = dir.path().join("match.json");
        export_dataset(&dataset, ExportFormat::Json, &out)?;

        let loaded: EventDataset = serde_json::from_slice(&fs::read(&out)?)?;
        assert_eq!(loaded.metadata().score.home, 1);
        assert_eq!(loaded.filter(EventType::Shot).count(), 1);
        Ok(())
    }

    #[test]
    fn test_flags_override_config_file() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("config.yaml");
        fs::write(&path, "event_types: [pass, shot]\ncoordinate_system: opta\n")?;

        let config = resolve_config(Some(path.as_path()), &[], None)?;
        assert_eq!(config.event_types, vec![EventType::Pass, EventType::Shot]);

        let config = resolve_config(Some(path.as_path()), &["card".to_string()], Some("kloppy"))?;
        assert_eq!(config.event_types, vec![EventType::Card]);
        assert_eq!(config.coordinate_system, pitchlog_core::Provider::Kloppy);

        assert!(resolve_config(None, &["nonsense".to_string()], None).is_err());
        Ok(())
    }

    #[test]
    fn test_stdout_accepts_only_unverified_json() {
        assert!(ensure_stdout_export(ExportFormat::Json, false).is_ok());
        assert!(ensure_stdout_export(ExportFormat::Csv, false).is_err());
        assert!(ensure_stdout_export(ExportFormat::MsgpackLz4, false).is_err());
        assert!(ensure_stdout_export(ExportFormat::Json, true).is_err());
    }

    #[test]
    fn test_schema_names_the_dataset() -> Result<()> {
        let schema = dataset_schema()?;
        assert!(schema.contains("\"EventDataset\""));
        Ok(())
    }
}
