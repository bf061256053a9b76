//! # pitchlog_core - Soccer event logs to a canonical event dataset
//!
//! Vendor adapters turn a lineup document and an event-log document into an
//! [`EventDataset`]: team rosters, periods, score and an ordered sequence of
//! typed events in a configurable coordinate system.
//!
//! ## Features
//! - InStat XML adapter (rosters, score, period boundaries, action codes)
//! - Closed event model (pass, shot, take-on, card, foul, recovery, ball out)
//! - Coordinate transformer between vendor pitch systems
//! - Events reference teams and players by id
//!
//! ```no_run
//! use pitchlog_core::io::FileLike;
//! use pitchlog_core::providers::instat;
//!
//! let dataset = instat::load(
//!     &FileLike::from(std::path::PathBuf::from("lineup.xml")),
//!     &FileLike::from(std::path::PathBuf::from("events.xml")),
//!     Some(&["shot"][..]),
//!     None,
//! )?;
//! println!("{} shots", dataset.len());
//! # Ok::<(), pitchlog_core::DeserializationError>(())
//! ```

pub mod config;
pub mod coordinates;
pub mod error;
pub mod io;
pub mod models;
pub mod providers;
pub mod serializers;

pub use config::DeserializerConfig;
pub use coordinates::{build_coordinate_system, CoordinateSystem, Provider, Transformer};
pub use error::{DeserializationError, Result};
pub use models::{Event, EventDataset, EventKind, EventType, Metadata, Team};
pub use serializers::{EventDataDeserializer, InStatDeserializer, InStatInputs};
