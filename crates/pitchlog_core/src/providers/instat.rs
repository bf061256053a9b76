use tracing::debug;

use crate::config::DeserializerConfig;
use crate::error::Result;
use crate::io::{open_as_file, FileLike};
use crate::models::EventDataset;
use crate::serializers::{EventDataDeserializer, InStatDeserializer, InStatInputs};

/// Loads one InStat match.
///
/// `event_types` and `coordinates` are names as accepted by
/// [`DeserializerConfig::from_names`]; `None` keeps every event and the
/// canonical coordinate system.
pub fn load<S: AsRef<str>>(
    lineup_data: &FileLike,
    events_data: &FileLike,
    event_types: Option<&[S]>,
    coordinates: Option<&str>,
) -> Result<EventDataset> {
    let config = DeserializerConfig::from_names(event_types, coordinates)?;
    load_with_config(lineup_data, events_data, config)
}

pub fn load_with_config(
    lineup_data: &FileLike,
    events_data: &FileLike,
    config: DeserializerConfig,
) -> Result<EventDataset> {
    debug!(?config, "loading InStat match");
    let inputs = InStatInputs {
        lineup_data: open_as_file(lineup_data)?,
        events_data: open_as_file(events_data)?,
    };
    InStatDeserializer::new(config).deserialize(inputs)
}
