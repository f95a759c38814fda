//! Track and master track assembly.

use std::fmt;

use log::debug;
use serde::Serialize;

use crate::error::Result;
use crate::format::display::pan_display;
use crate::format::revision::DecoderRules;
use crate::record::{ProjectRecord, SendEffect, TrackIndex};

use super::eq::EqSettings;

/// Characters of the file name that make up the short track name.
pub const SHORT_NAME_LEN: usize = 8;

/// First eight characters of a file name.
pub fn short_name(file_name: &str) -> String {
    file_name.chars().take(SHORT_NAME_LEN).collect()
}

/// One of the sixteen recorder tracks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Track {
    pub track_num: TrackIndex,
    pub file_name: String,
    pub track_name: String,
    pub pan: String,
    pub eq_info: EqSettings,
    pub fader: i32,
    pub reverb_send: i32,
    pub reverb_send_on_off: bool,
    pub chorus_send: i32,
    pub chorus_send_on_off: bool,
    /// Supplied by the extra info file, never by the recorder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bars_used: Option<u32>,
    #[serde(skip)]
    pub pan_raw: i32,
    /// Play status, for record sources that carry one.
    #[serde(skip)]
    pub playing: Option<bool>,
}

impl Track {
    /// Assemble track `index` from a record.
    ///
    /// Unused tracks still get every numeric field from whatever bytes
    /// occupy their slots; check [`Track::is_used`] before trusting them.
    pub fn decode(
        record: &dyn ProjectRecord,
        index: TrackIndex,
        rules: &DecoderRules,
    ) -> Result<Self> {
        let file_name = record.file_name(index)?;
        let pan_raw = record.pan(index)?;

        let playing = if rules.play_status {
            record.play_status(index)?
        } else {
            None
        };

        let eq_info = EqSettings::decode(&record.eq_words(index)?, playing.unwrap_or(true), rules)?;

        let track = Self {
            track_num: index,
            track_name: short_name(&file_name),
            file_name,
            pan: pan_display(pan_raw, rules.pan),
            eq_info,
            fader: record.fader(index)?,
            reverb_send: record.send_level(SendEffect::Reverb, index)?,
            reverb_send_on_off: rules
                .send_polarity
                .enabled(record.send_bit(SendEffect::Reverb, index)?),
            chorus_send: record.send_level(SendEffect::Chorus, index)?,
            chorus_send_on_off: rules
                .send_polarity
                .enabled(record.send_bit(SendEffect::Chorus, index)?),
            bars_used: None,
            pan_raw,
            playing,
        };

        if !track.is_used() {
            debug!("Track {} unused", index);
        }

        Ok(track)
    }

    /// A track is in use when it links an audio file.
    pub fn is_used(&self) -> bool {
        !self.file_name.is_empty()
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_used() {
            return Ok(());
        }

        write!(
            f,
            "Track #{}: file_name={}, track_name={}, pan={}, eq_info={}, fader={}, \
             reverb_send={} (On={}), chorus_send={} (On={})",
            self.track_num,
            self.file_name,
            self.track_name,
            self.pan,
            self.eq_info,
            self.fader,
            self.reverb_send,
            self.reverb_send_on_off,
            self.chorus_send,
            self.chorus_send_on_off
        )
    }
}

/// The stereo mixdown; not one of the sixteen tracks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MasterTrack {
    pub name: String,
    pub file: String,
    pub fader: Option<i32>,
}

impl MasterTrack {
    pub fn decode(record: &dyn ProjectRecord) -> Result<Self> {
        let file = record.master_file_name()?;
        Ok(Self {
            name: short_name(&file),
            file,
            fader: record.master_fader()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::FormatRevision;
    use crate::record::ProjectSnapshot;

    fn track(n: u8) -> TrackIndex {
        TrackIndex::new(n).unwrap()
    }

    fn snapshot() -> ProjectSnapshot {
        let mut project = ProjectSnapshot::new("SONG");
        let t = project.track_mut(track(1)).unwrap();
        t.file_name = "GUITAR01.WAV".to_string();
        t.pan = 49;
        t.fader = 100;
        t.reverb_send = 40;
        t.reverb_bit = true;
        t.chorus_send = 10;
        t.chorus_bit = false;
        t.eq = [0, 0, 0, 12, 1, 14, 4, 12, 0, 0, 0, 12];
        project.master_file_name = "MASTER01.WAV".to_string();
        project
    }

    #[test]
    fn test_decode_used_track() {
        let rules = FormatRevision::V2.rules();
        let t = Track::decode(&snapshot(), track(1), &rules).unwrap();
        assert!(t.is_used());
        assert_eq!(t.track_name, "GUITAR01");
        assert_eq!(t.pan, "L2");
        assert_eq!(t.pan_raw, 49);
        assert!(t.reverb_send_on_off);
        assert!(!t.chorus_send_on_off);
        assert_eq!(
            t.to_string(),
            "Track #1: file_name=GUITAR01.WAV, track_name=GUITAR01, pan=L2, \
             eq_info=[mid=<gain=0, freq=1.0k, q_factor=0.5>], fader=100, \
             reverb_send=40 (On=true), chorus_send=10 (On=false)"
        );
    }

    #[test]
    fn test_send_polarity_follows_rules() {
        let rules = FormatRevision::V1.rules();
        let t = Track::decode(&snapshot(), track(1), &rules).unwrap();
        assert!(!t.reverb_send_on_off);
        assert!(t.chorus_send_on_off);
    }

    #[test]
    fn test_unused_track_keeps_numeric_fields() {
        let mut project = snapshot();
        project.track_mut(track(2)).unwrap().fader = 55;
        let t = Track::decode(&project, track(2), &FormatRevision::V2.rules()).unwrap();
        assert!(!t.is_used());
        assert_eq!(t.fader, 55);
        assert_eq!(t.to_string(), "");
    }

    #[test]
    fn test_play_status_only_with_capability() {
        let mut project = snapshot();
        project.track_mut(track(1)).unwrap().playing = Some(false);

        let v3 = Track::decode(&project, track(1), &FormatRevision::V3.rules());
        // V3 reads Hz, so the enumerated index 14 is 14 Hz; still decodes.
        let v3 = v3.unwrap();
        assert_eq!(v3.playing, Some(false));
        assert!(v3.eq_info.is_off());
        assert!(v3.is_used());

        let v2 = Track::decode(&project, track(1), &FormatRevision::V2.rules()).unwrap();
        assert_eq!(v2.playing, None);
        assert!(!v2.eq_info.is_off());
    }

    #[test]
    fn test_master_track() {
        let mut project = snapshot();
        project.master_fader = Some(90);
        let master = MasterTrack::decode(&project).unwrap();
        assert_eq!(master.name, "MASTER01");
        assert_eq!(master.file, "MASTER01.WAV");
        assert_eq!(master.fader, Some(90));
    }

    #[test]
    fn test_short_name() {
        assert_eq!(short_name("ABCDEFGHIJ.WAV"), "ABCDEFGH");
        assert_eq!(short_name("ABC"), "ABC");
        assert_eq!(short_name(""), "");
    }
}
