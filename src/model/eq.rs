//! Three-band track equalizer.

use std::fmt;

use serde::Serialize;

use crate::error::Result;
use crate::format::display::{frequency_display, gain_display, q_factor_display};
use crate::format::revision::DecoderRules;
use crate::record::EQ_WORDS;

pub use crate::format::display::EqBandKind;

/// Words of one band group, in record order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BandWords {
    pub enable: i32,
    pub frequency: i32,
    pub q_factor: i32,
    pub gain: i32,
}

impl BandWords {
    fn from_group(group: &[i32]) -> Self {
        Self {
            enable: group[0],
            frequency: group[1],
            q_factor: group[2],
            gain: group[3],
        }
    }
}

/// One decoded EQ band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EqBand {
    pub band: EqBandKind,
    pub on_off: bool,
    pub gain: String,
    pub freq: String,
    /// Mid band only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q_factor: Option<String>,
    #[serde(skip)]
    pub raw: BandWords,
}

impl EqBand {
    /// Decode a band. `enabled` already accounts for anything beyond the
    /// band's own enable word (such as a stopped track).
    pub fn decode(
        band: EqBandKind,
        raw: BandWords,
        enabled: bool,
        rules: &DecoderRules,
    ) -> Result<Self> {
        Ok(Self {
            band,
            on_off: enabled,
            gain: gain_display(raw.gain, rules.gain),
            freq: frequency_display(band, raw.frequency, rules.frequency)?,
            q_factor: q_factor_display(band, raw.q_factor, rules.q_factor),
            raw,
        })
    }
}

impl fmt::Display for EqBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.on_off {
            return write!(f, "off");
        }

        match &self.q_factor {
            Some(q_factor) => write!(
                f,
                "<gain={}, freq={}, q_factor={}>",
                self.gain, self.freq, q_factor
            ),
            None => write!(f, "<gain={}, freq={}>", self.gain, self.freq),
        }
    }
}

/// High, mid and low bands of one track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EqSettings {
    pub hi_band: EqBand,
    pub mid_band: EqBand,
    pub lo_band: EqBand,
}

impl EqSettings {
    /// Decode a track's 12-word EQ record. When `playing` is false every
    /// band reports off.
    pub fn decode(words: &[i32; EQ_WORDS], playing: bool, rules: &DecoderRules) -> Result<Self> {
        let mut groups = words.chunks_exact(4).map(BandWords::from_group);
        let mut next = |band: EqBandKind| -> Result<EqBand> {
            let raw = groups.next().unwrap_or_default();
            EqBand::decode(band, raw, playing && raw.enable != 0, rules)
        };

        Ok(Self {
            hi_band: next(EqBandKind::High)?,
            mid_band: next(EqBandKind::Mid)?,
            lo_band: next(EqBandKind::Low)?,
        })
    }

    /// Bands in high, mid, low order.
    pub fn bands(&self) -> [&EqBand; 3] {
        [&self.hi_band, &self.mid_band, &self.lo_band]
    }

    /// True when no band is enabled.
    pub fn is_off(&self) -> bool {
        self.bands().iter().all(|band| !band.on_off)
    }
}

impl fmt::Display for EqSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let enabled: Vec<String> = self
            .bands()
            .iter()
            .filter(|band| band.on_off)
            .map(|band| format!("{}={}", band.band.label(), band))
            .collect();

        if enabled.is_empty() {
            write!(f, "off")
        } else {
            write!(f, "[{}]", enabled.join(", "))
        }
    }
}
