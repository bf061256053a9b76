pub mod dataset;
pub mod events;
pub mod pitch;
pub mod team;

pub use dataset::{DatasetFlag, EventDataset, Metadata, Orientation, Period, Score};
pub use events::{
    BallState, CardType, Event, EventKind, EventType, PassResult, PassType, Qualifier, RawEvent,
    ShotResult, TakeOnResult,
};
pub use pitch::{Dimension, PitchDimensions, Point};
pub use team::{FormationType, Ground, Player, Position, Team};
