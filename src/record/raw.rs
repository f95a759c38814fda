//! Layout-backed records reading fixed offsets from whole-file buffers.

use log::debug;

use crate::error::{Result, ZoomrError};
use crate::format::layout::{
    EffectsLayout, ProjectLayout, EFFECTS_LAYOUT, PROJECT_LAYOUT, TRACK_COUNT,
};
use crate::format::scalar::{bit, decode_ascii, decode_int, read_ascii, read_int, slice};

use super::{EffectsRecord, ProjectRecord, SendEffect, TrackIndex, EQ_WORDS};

/// Bytes of a PRJDATA file plus the table that locates its fields.
#[derive(Debug, Clone)]
pub struct RawProjectData {
    bytes: Vec<u8>,
    layout: ProjectLayout,
}

impl RawProjectData {
    /// Wrap project bytes using the standard layout.
    pub fn new(bytes: Vec<u8>) -> Result<Self> {
        Self::with_layout(bytes, PROJECT_LAYOUT)
    }

    /// Wrap project bytes with an explicit layout.
    pub fn with_layout(bytes: Vec<u8>, layout: ProjectLayout) -> Result<Self> {
        if bytes.len() < layout.min_len() {
            return Err(ZoomrError::format(format!(
                "Project file too short: {} bytes, expected at least {}",
                bytes.len(),
                layout.min_len()
            )));
        }

        debug!("Project data: {} bytes", bytes.len());
        Ok(Self { bytes, layout })
    }

    fn file_name_slot(&self, slot: usize) -> Result<String> {
        read_ascii(&self.bytes, &self.layout.file_names, slot, self.layout.file_name_width)
    }
}

impl ProjectRecord for RawProjectData {
    fn project_name(&self) -> Result<String> {
        let field = &self.layout.project_name;
        read_ascii(&self.bytes, field, 0, field.item_size)
    }

    fn file_name(&self, track: TrackIndex) -> Result<String> {
        self.file_name_slot(track.slot())
    }

    fn fader(&self, track: TrackIndex) -> Result<i32> {
        read_int(&self.bytes, &self.layout.fader, track.slot())
    }

    fn pan(&self, track: TrackIndex) -> Result<i32> {
        read_int(&self.bytes, &self.layout.pan, track.slot())
    }

    fn send_level(&self, effect: SendEffect, track: TrackIndex) -> Result<i32> {
        let field = match effect {
            SendEffect::Reverb => &self.layout.reverb_send,
            SendEffect::Chorus => &self.layout.chorus_send,
        };
        read_int(&self.bytes, field, track.slot())
    }

    fn send_bit(&self, effect: SendEffect, track: TrackIndex) -> Result<bool> {
        let field = match effect {
            SendEffect::Reverb => &self.layout.reverb_enable_mask,
            SendEffect::Chorus => &self.layout.chorus_enable_mask,
        };
        let mask = read_int(&self.bytes, field, 0)?;
        Ok(bit(mask, track.slot() as u32))
    }

    fn eq_words(&self, track: TrackIndex) -> Result<[i32; EQ_WORDS]> {
        let field = &self.layout.eq;
        let record = slice(&self.bytes, field.address(track.slot()), field.item_size)?;

        let mut words = [0i32; EQ_WORDS];
        for (word, chunk) in words.iter_mut().zip(record.chunks_exact(4)) {
            *word = decode_int(chunk)?;
        }
        Ok(words)
    }

    fn master_file_name(&self) -> Result<String> {
        self.file_name_slot(TRACK_COUNT)
    }
}

/// Bytes of an EFXDATA file whose header has been verified.
#[derive(Debug, Clone)]
pub struct RawEffectsData {
    bytes: Vec<u8>,
    layout: EffectsLayout,
}

impl RawEffectsData {
    /// Verify the header and wrap the bytes.
    ///
    /// A header mismatch is fatal: nothing else in the file can be trusted.
    pub fn new(bytes: Vec<u8>) -> Result<Self> {
        Self::with_layout(bytes, EFFECTS_LAYOUT)
    }

    pub fn with_layout(bytes: Vec<u8>, layout: EffectsLayout) -> Result<Self> {
        let header_end = layout.header.end().min(bytes.len());
        let header_text = decode_ascii(&bytes[layout.header.offset.min(header_end)..header_end]);

        if header_text != layout.header_text {
            return Err(ZoomrError::format(format!(
                "Unexpected Effects File [header_text=\"{}\"]",
                header_text
            )));
        }

        debug!("Effects data: {} bytes, header ok", bytes.len());
        Ok(Self { bytes, layout })
    }
}

impl EffectsRecord for RawEffectsData {
    fn enable_bit(&self, effect: SendEffect) -> Result<bool> {
        let flags = read_int(&self.bytes, &self.layout.enable_flags, 0)?;
        let position = match effect {
            SendEffect::Reverb => self.layout.reverb_enable_bit,
            SendEffect::Chorus => self.layout.chorus_enable_bit,
        };
        Ok(bit(flags, position))
    }

    fn patch_number(&self, effect: SendEffect) -> Result<i32> {
        let field = match effect {
            SendEffect::Reverb => &self.layout.reverb_patch_number,
            SendEffect::Chorus => &self.layout.chorus_patch_number,
        };
        read_int(&self.bytes, field, 0)
    }

    fn patch_name(&self, effect: SendEffect) -> Result<String> {
        let field = match effect {
            SendEffect::Reverb => &self.layout.reverb_patch_name,
            SendEffect::Chorus => &self.layout.chorus_patch_name,
        };
        read_ascii(&self.bytes, field, 0, field.item_size)
    }
}
