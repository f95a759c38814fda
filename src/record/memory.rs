//! In-memory records.
//!
//! Used when the fields were decoded elsewhere (for example by a
//! typed-record library that also knows the play status and master fader)
//! and only need to flow through the assemblers.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ZoomrError};
use crate::format::layout::TRACK_COUNT;

use super::{EffectsRecord, ProjectRecord, SendEffect, TrackIndex, EQ_WORDS};

/// Raw fields of one track.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackSnapshot {
    pub file_name: String,
    pub fader: i32,
    pub pan: i32,
    pub reverb_send: i32,
    pub reverb_bit: bool,
    pub chorus_send: i32,
    pub chorus_bit: bool,
    pub eq: [i32; EQ_WORDS],
    pub playing: Option<bool>,
}

/// Raw fields of a whole project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSnapshot {
    pub name: String,
    pub tracks: Vec<TrackSnapshot>,
    pub master_file_name: String,
    pub master_fader: Option<i32>,
}

impl ProjectSnapshot {
    /// A project with sixteen empty tracks.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            tracks: vec![TrackSnapshot::default(); TRACK_COUNT],
            master_file_name: String::new(),
            master_fader: None,
        }
    }

    pub fn track_mut(&mut self, track: TrackIndex) -> Option<&mut TrackSnapshot> {
        self.tracks.get_mut(track.slot())
    }

    fn track(&self, track: TrackIndex) -> Result<&TrackSnapshot> {
        self.tracks
            .get(track.slot())
            .ok_or_else(|| ZoomrError::format(format!("Snapshot has no track {}", track)))
    }
}

impl ProjectRecord for ProjectSnapshot {
    fn project_name(&self) -> Result<String> {
        Ok(self.name.clone())
    }

    fn file_name(&self, track: TrackIndex) -> Result<String> {
        Ok(self.track(track)?.file_name.clone())
    }

    fn fader(&self, track: TrackIndex) -> Result<i32> {
        Ok(self.track(track)?.fader)
    }

    fn pan(&self, track: TrackIndex) -> Result<i32> {
        Ok(self.track(track)?.pan)
    }

    fn send_level(&self, effect: SendEffect, track: TrackIndex) -> Result<i32> {
        let snapshot = self.track(track)?;
        Ok(match effect {
            SendEffect::Reverb => snapshot.reverb_send,
            SendEffect::Chorus => snapshot.chorus_send,
        })
    }

    fn send_bit(&self, effect: SendEffect, track: TrackIndex) -> Result<bool> {
        let snapshot = self.track(track)?;
        Ok(match effect {
            SendEffect::Reverb => snapshot.reverb_bit,
            SendEffect::Chorus => snapshot.chorus_bit,
        })
    }

    fn eq_words(&self, track: TrackIndex) -> Result<[i32; EQ_WORDS]> {
        Ok(self.track(track)?.eq)
    }

    fn play_status(&self, track: TrackIndex) -> Result<Option<bool>> {
        Ok(self.track(track)?.playing)
    }

    fn master_file_name(&self) -> Result<String> {
        Ok(self.master_file_name.clone())
    }

    fn master_fader(&self) -> Result<Option<i32>> {
        Ok(self.master_fader)
    }
}

/// Raw fields of an effects file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectsSnapshot {
    pub reverb_bit: bool,
    pub reverb_number: i32,
    pub reverb_name: String,
    pub chorus_bit: bool,
    pub chorus_number: i32,
    pub chorus_name: String,
}

impl EffectsRecord for EffectsSnapshot {
    fn enable_bit(&self, effect: SendEffect) -> Result<bool> {
        Ok(match effect {
            SendEffect::Reverb => self.reverb_bit,
            SendEffect::Chorus => self.chorus_bit,
        })
    }

    fn patch_number(&self, effect: SendEffect) -> Result<i32> {
        Ok(match effect {
            SendEffect::Reverb => self.reverb_number,
            SendEffect::Chorus => self.chorus_number,
        })
    }

    fn patch_name(&self, effect: SendEffect) -> Result<String> {
        Ok(match effect {
            SendEffect::Reverb => self.reverb_name.clone(),
            SendEffect::Chorus => self.chorus_name.clone(),
        })
    }
}
