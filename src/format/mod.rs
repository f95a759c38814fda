//! Binary format knowledge: where fields live and how their values read.

pub mod display;
pub mod layout;
pub mod revision;
pub mod scalar;

pub use display::EqBandKind;
pub use layout::{
    EffectsLayout, FieldSpec, ProjectLayout, EFFECTS_LAYOUT, PROJECT_LAYOUT, TRACK_COUNT,
};
pub use revision::{BitPolarity, DecoderRules, FormatRevision, PanScale};
