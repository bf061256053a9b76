pub mod deserializer;
pub mod instat;

pub use deserializer::EventDataDeserializer;
pub use instat::{InStatDeserializer, InStatInputs};
