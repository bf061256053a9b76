//! Pitchlog CLI
//!
//! Vendor event logs -> canonical EventDataset -> JSON / CSV / MsgPack+LZ4

#[cfg(feature = "cli")]
use anyhow::Result;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use pitchlog_cli::{ExportFormat, ExportMetadata};
#[cfg(feature = "cli")]
use std::path::{Path, PathBuf};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "pitchlog")]
#[command(about = "Deserialize soccer event logs into a canonical dataset", long_about = None)]
struct Cli {
    /// Debug logging (overrides RUST_LOG)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Deserialize one InStat match
    Instat {
        /// Lineup XML file
        #[arg(long)]
        lineup: PathBuf,

        /// Event log XML file
        #[arg(long)]
        events: PathBuf,

        /// Event types to keep (e.g. "shot,pass")
        #[arg(long, value_delimiter = ',')]
        event_types: Vec<String>,

        /// Target coordinate system (e.g. "kloppy", "opta")
        #[arg(long)]
        coordinates: Option<String>,

        /// YAML deserializer config; flags override its values
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output file (JSON to stdout when omitted; then only `--format json`, no `--verify`)
        #[arg(long)]
        out: Option<PathBuf>,

        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Verify the written file's checksum
        #[arg(long, default_value = "false")]
        verify: bool,
    },

    /// Deserialize every match listed in a YAML manifest, in parallel
    Batch {
        #[arg(long)]
        manifest: PathBuf,

        #[arg(long, default_value = "out")]
        out_dir: PathBuf,

        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,
    },

    /// Print the JSON schema of the dataset
    Schema {
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[cfg(feature = "cli")]
fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Instat {
            lineup,
            events,
            event_types,
            coordinates,
            config,
            out,
            format,
            verify,
        } => {
            if out.is_none() {
                pitchlog_cli::ensure_stdout_export(format, verify)?;
            }
            let config = pitchlog_cli::resolve_config(
                config.as_deref(),
                &event_types,
                coordinates.as_deref(),
            )?;
            let dataset = pitchlog_core::providers::instat::load_with_config(
                &lineup.into(),
                &events.into(),
                config,
            )?;

            match out {
                Some(out) => {
                    let meta = pitchlog_cli::export_dataset(&dataset, format, &out)?;
                    print_metadata(&out, &meta);
                    if verify {
                        verify_export_integrity(&out, &meta.checksum)?;
                    }
                }
                None => println!("{}", serde_json::to_string_pretty(&dataset)?),
            }
        }

        Commands::Batch { manifest, out_dir, format } => {
            let manifest = pitchlog_cli::BatchManifest::from_path(&manifest)?;
            let outcomes = pitchlog_cli::run_batch(&manifest, &out_dir, format);

            let mut failed = 0;
            for outcome in &outcomes {
                match &outcome.result {
                    Ok(meta) => print_metadata(&outcome.output, meta),
                    Err(err) => {
                        failed += 1;
                        eprintln!("❌ {}: {err:#}", outcome.name);
                    }
                }
            }
            if failed > 0 {
                anyhow::bail!("{failed} of {} matches failed", outcomes.len());
            }
        }

        Commands::Schema { out } => {
            let schema = pitchlog_cli::dataset_schema()?;
            match out {
                Some(path) => std::fs::write(&path, schema)?,
                None => println!("{schema}"),
            }
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn print_metadata(path: &Path, meta: &ExportMetadata) {
    println!("\n✅ Exported {}", path.display());
    println!("   Events:   {}", meta.event_count);
    println!(
        "   Size:     {} bytes ({:.2} KB)",
        meta.size_bytes,
        meta.size_bytes as f64 / 1024.0
    );
    println!("   Checksum: {}", meta.checksum);
    println!("   Created:  {}", meta.created_at);
}

#[cfg(feature = "cli")]
fn verify_export_integrity(path: &Path, checksum: &str) -> Result<()> {
    println!("\n🔍 Verifying export integrity...");
    if pitchlog_cli::verify_export(path, checksum)? {
        println!("✅ Export verification passed");
        Ok(())
    } else {
        anyhow::bail!("❌ Export verification failed - checksum mismatch!")
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("pitchlog CLI is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
