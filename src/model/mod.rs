//! Decoded project entities.

pub mod effects;
pub mod eq;
pub mod project;
pub mod track;

pub use effects::{EffectsSettings, PatchSelection};
pub use eq::{EqBand, EqBandKind, EqSettings};
pub use project::{merge, ExtraInfo, Project, TrackExtra, TrackLookup};
pub use track::{MasterTrack, Track};
