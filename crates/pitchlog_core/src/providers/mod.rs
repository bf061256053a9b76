//! Thin per-vendor entry points: open sources, configure, deserialize.

pub mod instat;
