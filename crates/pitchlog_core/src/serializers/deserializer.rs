//! Contract shared by every vendor event adapter.
//!
//! To add a vendor, implement [`EventDataDeserializer`]: declare the
//! provider, expose the config and write `deserialize`. Filtering and the
//! coordinate transformer come for free.

use crate::config::DeserializerConfig;
use crate::coordinates::{build_coordinate_system, Provider, Transformer};
use crate::error::Result;
use crate::models::{Event, EventDataset};

pub trait EventDataDeserializer {
    /// Vendor whose native coordinate system the raw documents use.
    const PROVIDER: Provider;

    /// Documents one `deserialize` call consumes.
    type Inputs;

    fn config(&self) -> &DeserializerConfig;

    fn deserialize(&self, inputs: Self::Inputs) -> Result<EventDataset>;

    fn provider(&self) -> Provider {
        Self::PROVIDER
    }

    fn should_include_event(&self, event: &Event) -> bool {
        self.config().should_include_event(event)
    }

    /// Vendor-native system for a `length` x `width` pitch -> configured target.
    fn get_transformer(&self, length: f64, width: f64) -> Transformer {
        Transformer::new(
            build_coordinate_system(Self::PROVIDER, length, width),
            build_coordinate_system(self.config().coordinate_system, length, width),
        )
    }
}
