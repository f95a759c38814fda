//! Decoded record capability set.
//!
//! The assemblers in [`crate::model`] only see these traits. The built-in
//! implementation in [`raw`] reads fixed offsets from the file bytes; any
//! other decoder (a typed-record library, a test double, a different
//! recorder model) plugs in by implementing the same accessors.

pub mod memory;
pub mod raw;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::format::layout::TRACK_COUNT;

pub use memory::{EffectsSnapshot, ProjectSnapshot, TrackSnapshot};
pub use raw::{RawEffectsData, RawProjectData};

/// Number of 32-bit words in one track's EQ record.
pub const EQ_WORDS: usize = 12;

/// 1-based track number in `1..=16`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct TrackIndex(u8);

impl TrackIndex {
    /// Returns `None` outside `1..=16`.
    pub fn new(number: u8) -> Option<Self> {
        (1..=TRACK_COUNT as u8)
            .contains(&number)
            .then_some(TrackIndex(number))
    }

    /// The 1-based track number.
    pub fn number(self) -> u8 {
        self.0
    }

    /// Zero-based slot used for offset arithmetic and mask bits.
    pub fn slot(self) -> usize {
        usize::from(self.0 - 1)
    }

    /// Tracks 1 through 16 in order.
    pub fn all() -> impl Iterator<Item = TrackIndex> {
        (1..=TRACK_COUNT as u8).map(TrackIndex)
    }
}

impl TryFrom<u8> for TrackIndex {
    type Error = String;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        TrackIndex::new(value).ok_or_else(|| format!("track number {} outside 1..=16", value))
    }
}

impl From<TrackIndex> for u8 {
    fn from(index: TrackIndex) -> u8 {
        index.0
    }
}

impl fmt::Display for TrackIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The two send effects shared by all tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SendEffect {
    Reverb,
    Chorus,
}

impl fmt::Display for SendEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SendEffect::Reverb => write!(f, "reverb"),
            SendEffect::Chorus => write!(f, "chorus"),
        }
    }
}

/// Typed access to the fields of a decoded project file.
///
/// Values are raw: display conversion and bit polarity are applied by the
/// assemblers according to the selected [`crate::format::DecoderRules`].
pub trait ProjectRecord {
    fn project_name(&self) -> Result<String>;

    /// Linked audio file name; empty for an unused track.
    fn file_name(&self, track: TrackIndex) -> Result<String>;

    fn fader(&self, track: TrackIndex) -> Result<i32>;

    fn pan(&self, track: TrackIndex) -> Result<i32>;

    /// Send level, stored regardless of whether the send is enabled.
    fn send_level(&self, effect: SendEffect, track: TrackIndex) -> Result<i32>;

    /// Raw state of the track's bit in the effect's enable mask.
    fn send_bit(&self, effect: SendEffect, track: TrackIndex) -> Result<bool>;

    /// High, mid and low groups of (enable, frequency, q factor, gain).
    fn eq_words(&self, track: TrackIndex) -> Result<[i32; EQ_WORDS]>;

    /// Whether the track is set to play. Sources without a status flag
    /// return `None`.
    fn play_status(&self, _track: TrackIndex) -> Result<Option<bool>> {
        Ok(None)
    }

    fn master_file_name(&self) -> Result<String>;

    /// Master fader level, when the source knows where it lives.
    fn master_fader(&self) -> Result<Option<i32>> {
        Ok(None)
    }
}

/// Typed access to the fields of a decoded effects file.
pub trait EffectsRecord {
    /// Raw state of the effect's bit in the enable byte.
    fn enable_bit(&self, effect: SendEffect) -> Result<bool>;

    fn patch_number(&self, effect: SendEffect) -> Result<i32>;

    fn patch_name(&self, effect: SendEffect) -> Result<String>;
}
