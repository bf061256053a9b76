//! Batch deserialization over a YAML manifest of document pairs.
//!
//! ```yaml
//! config:
//!   event_types: [pass, shot]
//!   coordinate_system: kloppy
//! matches:
//!   - name: zenit-spartak
//!     lineup: zenit-spartak/lineup.xml
//!     events: zenit-spartak/events.xml
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use pitchlog_core::io::FileLike;
use pitchlog_core::providers::instat;
use pitchlog_core::DeserializerConfig;
use rayon::prelude::*;
use serde::Deserialize;
use tracing::{info, warn};

use crate::{export_dataset, ExportFormat, ExportMetadata};

#[derive(Debug, Clone, Deserialize)]
pub struct MatchEntry {
    pub name: String,
    pub lineup: PathBuf,
    pub events: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BatchManifest {
    #[serde(default)]
    pub config: DeserializerConfig,
    pub matches: Vec<MatchEntry>,
}

impl BatchManifest {
    /// Reads a manifest; relative document paths resolve against its directory.
    pub fn from_path(path: &Path) -> Result<Self> {
        let yaml = fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest: {}", path.display()))?;
        let mut manifest: BatchManifest = serde_yaml::from_str(&yaml)
            .with_context(|| format!("Failed to parse manifest: {}", path.display()))?;

        if let Some(base) = path.parent() {
            for entry in &mut manifest.matches {
                entry.lineup = base.join(&entry.lineup);
                entry.events = base.join(&entry.events);
            }
        }
        Ok(manifest)
    }
}

#[derive(Debug)]
pub struct BatchOutcome {
    pub name: String,
    pub output: PathBuf,
    pub result: Result<ExportMetadata>,
}

fn process(
    entry: &MatchEntry,
    config: &DeserializerConfig,
    out: &Path,
    format: ExportFormat,
) -> Result<ExportMetadata> {
    let dataset = instat::load_with_config(
        &FileLike::from(entry.lineup.clone()),
        &FileLike::from(entry.events.clone()),
        config.clone(),
    )
    .with_context(|| format!("Failed to deserialize match {}", entry.name))?;
    export_dataset(&dataset, format, out)
}

/// Deserializes and exports every match in parallel. A failing match is
/// reported in its outcome and does not stop the others.
pub fn run_batch(
    manifest: &BatchManifest,
    out_dir: &Path,
    format: ExportFormat,
) -> Vec<BatchOutcome> {
    let outcomes: Vec<BatchOutcome> = manifest
        .matches
        .par_iter()
        .map(|entry| {
            let output = out_dir.join(format!("{}.{}", entry.name, format.extension()));
            let result = process(entry, &manifest.config, &output, format);
            if let Err(err) = &result {
                warn!(name = %entry.name, "{err:#}");
            }
            BatchOutcome { name: entry.name.clone(), output, result }
        })
        .collect();

    let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
    info!(total = outcomes.len(), failed, "batch finished");
    outcomes
}
