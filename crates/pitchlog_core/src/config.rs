//! Per-deserializer configuration.
//!
//! Names are matched case-insensitively, so `"shot"`, `"Shot"` and `"SHOT"`
//! all select [`EventType::Shot`].

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::coordinates::Provider;
use crate::error::{DeserializationError, Result};
use crate::models::{Event, EventType};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeserializerConfig {
    /// Event types to keep. Empty keeps everything.
    #[serde(default, deserialize_with = "names_to_event_types")]
    pub event_types: Vec<EventType>,
    /// Target coordinate system.
    #[serde(default, deserialize_with = "name_to_provider")]
    pub coordinate_system: Provider,
}

impl DeserializerConfig {
    pub fn new(event_types: Vec<EventType>, coordinate_system: Provider) -> Self {
        Self { event_types, coordinate_system }
    }

    /// Builds a config from user-facing names; `None` means "use the default".
    pub fn from_names<S: AsRef<str>>(
        event_types: Option<&[S]>,
        coordinate_system: Option<&str>,
    ) -> Result<Self> {
        let event_types = event_types
            .unwrap_or_default()
            .iter()
            .map(|name| parse_name::<EventType>(name.as_ref(), "event type"))
            .collect::<Result<Vec<_>>>()?;

        let coordinate_system = match coordinate_system {
            Some(name) if !name.trim().is_empty() => {
                parse_name::<Provider>(name, "coordinate system")?
            }
            _ => Provider::default(),
        };

        Ok(Self { event_types, coordinate_system })
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|err| DeserializationError::InvalidConfig(err.to_string()))
    }

    /// Whether a fully built event survives the optional type filter.
    pub fn should_include_event(&self, event: &Event) -> bool {
        self.event_types.is_empty() || self.event_types.contains(&event.event_type())
    }
}

fn parse_name<T: FromStr>(name: &str, what: &str) -> Result<T> {
    name.trim()
        .parse::<T>()
        .map_err(|_| DeserializationError::InvalidConfig(format!("unknown {what} {name:?}")))
}

fn names_to_event_types<'de, D>(deserializer: D) -> std::result::Result<Vec<EventType>, D::Error>
where
    D: Deserializer<'de>,
{
    let names = Vec::<String>::deserialize(deserializer)?;
    names
        .iter()
        .map(|name| parse_name::<EventType>(name, "event type"))
        .collect::<Result<Vec<_>>>()
        .map_err(serde::de::Error::custom)
}

fn name_to_provider<'de, D>(deserializer: D) -> std::result::Result<Provider, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    parse_name::<Provider>(&name, "coordinate system").map_err(serde::de::Error::custom)
}
