//! Global send-effect patches from the effects file.

use serde::Serialize;

use crate::error::Result;
use crate::format::revision::DecoderRules;
use crate::record::{EffectsRecord, SendEffect};

/// Patch selected for one send effect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PatchSelection {
    /// Two-digit patch number; empty when disabled.
    pub number: String,
    /// Patch name; empty when disabled.
    pub name: String,
    pub enabled: bool,
}

impl PatchSelection {
    /// Read one effect's patch. Disabled effects report empty strings no
    /// matter what the patch bytes hold.
    pub fn decode(
        record: &dyn EffectsRecord,
        effect: SendEffect,
        rules: &DecoderRules,
    ) -> Result<Self> {
        let enabled = rules.effects_polarity.enabled(record.enable_bit(effect)?);
        if !enabled {
            return Ok(Self::default());
        }

        Ok(Self {
            number: format!("{:02}", record.patch_number(effect)?),
            name: record.patch_name(effect)?,
            enabled,
        })
    }

    /// `(number, name)` pair.
    pub fn info(&self) -> (&str, &str) {
        (&self.number, &self.name)
    }
}

/// Reverb and chorus settings of a project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EffectsSettings {
    pub reverb: PatchSelection,
    pub chorus: PatchSelection,
}

impl EffectsSettings {
    pub fn decode(record: &dyn EffectsRecord, rules: &DecoderRules) -> Result<Self> {
        Ok(Self {
            reverb: PatchSelection::decode(record, SendEffect::Reverb, rules)?,
            chorus: PatchSelection::decode(record, SendEffect::Chorus, rules)?,
        })
    }

    pub fn reverb_info(&self) -> (&str, &str) {
        self.reverb.info()
    }

    pub fn chorus_info(&self) -> (&str, &str) {
        self.chorus.info()
    }
}
