//! Binary layout tables for PRJDATA.ZDT and EFXDATA.ZDT.
//!
//! The project file is a sequence of fixed-size sections. Each section's
//! offset is the end of the previous one, so the table is built by
//! cumulative addition in `const` context and checked by the tests below.

/// How the bytes of a field are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// Signed little-endian integer.
    SignedInt,
    /// NUL-terminated ASCII text.
    Ascii,
    /// 32-bit word holding one bit per track (bit = track index - 1).
    BitMask,
    /// Bytes whose meaning is not known; never decoded.
    Reserved,
}

/// Location of one field (or array of fields) inside a binary file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub offset: usize,
    pub item_size: usize,
    pub item_count: usize,
    pub encoding: Encoding,
}

impl FieldSpec {
    /// A single field at a fixed offset.
    pub const fn single(offset: usize, size: usize, encoding: Encoding) -> Self {
        Self {
            offset,
            item_size: size,
            item_count: 1,
            encoding,
        }
    }

    /// A section that starts where `previous` ends.
    pub const fn after(
        previous: &FieldSpec,
        item_size: usize,
        item_count: usize,
        encoding: Encoding,
    ) -> Self {
        Self {
            offset: previous.end(),
            item_size,
            item_count,
            encoding,
        }
    }

    /// Total length of the section in bytes.
    pub const fn len(&self) -> usize {
        self.item_size * self.item_count
    }

    /// First byte past the section.
    pub const fn end(&self) -> usize {
        self.offset + self.len()
    }

    /// Byte address of the item at a zero-based index.
    pub const fn address(&self, index: usize) -> usize {
        self.offset + index * self.item_size
    }
}

/// Number of regular tracks in a project.
pub const TRACK_COUNT: usize = 16;

/// File-name slots: 16 tracks followed by the master track.
pub const FILE_NAME_SLOTS: usize = TRACK_COUNT + 1;

/// Section table of the project file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectLayout {
    pub header: FieldSpec,
    /// Project name, stored inside the header.
    pub project_name: FieldSpec,
    pub fader: FieldSpec,
    pub pan: FieldSpec,
    pub chorus_send: FieldSpec,
    pub reverb_send: FieldSpec,
    pub reserved1: FieldSpec,
    /// 48 bytes per track: 12 signed 32-bit words (high, mid, low groups).
    pub eq: FieldSpec,
    pub reserved2: FieldSpec,
    pub file_names: FieldSpec,
    /// Bytes of each file-name slot that hold the name; the rest are unused.
    pub file_name_width: usize,
    pub reserved3: FieldSpec,
    pub chorus_enable_mask: FieldSpec,
    pub reverb_enable_mask: FieldSpec,
}

impl ProjectLayout {
    /// Layout shared by every known revision of the 16-track recorder.
    pub const fn r16() -> Self {
        let header = FieldSpec::single(0, 96, Encoding::Reserved);
        let fader = FieldSpec::after(&header, 4, TRACK_COUNT, Encoding::SignedInt);
        let pan = FieldSpec::after(&fader, 4, TRACK_COUNT, Encoding::SignedInt);
        let chorus_send = FieldSpec::after(&pan, 4, TRACK_COUNT, Encoding::SignedInt);
        let reverb_send = FieldSpec::after(&chorus_send, 4, TRACK_COUNT, Encoding::SignedInt);
        let reserved1 = FieldSpec::after(&reverb_send, 4, TRACK_COUNT, Encoding::Reserved);
        let eq = FieldSpec::after(&reserved1, 48, TRACK_COUNT, Encoding::SignedInt);
        let reserved2 = FieldSpec::after(&eq, 1, 8, Encoding::Reserved);
        let file_names = FieldSpec::after(&reserved2, 16, FILE_NAME_SLOTS, Encoding::Ascii);
        let reserved3 = FieldSpec::after(&file_names, 4, 1, Encoding::Reserved);
        let chorus_enable_mask = FieldSpec::after(&reserved3, 4, 1, Encoding::BitMask);
        let reverb_enable_mask = FieldSpec::after(&chorus_enable_mask, 4, 1, Encoding::BitMask);

        Self {
            header,
            project_name: FieldSpec::single(0x34, 8, Encoding::Ascii),
            fader,
            pan,
            chorus_send,
            reverb_send,
            reserved1,
            eq,
            reserved2,
            file_names,
            file_name_width: 12,
            reserved3,
            chorus_enable_mask,
            reverb_enable_mask,
        }
    }

    /// Smallest file that holds every section.
    pub const fn min_len(&self) -> usize {
        self.reverb_enable_mask.end()
    }
}

/// Fixed offsets inside the effects file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectsLayout {
    pub header: FieldSpec,
    pub header_text: &'static str,
    /// One byte: bit 1 = reverb, bit 0 = chorus.
    pub enable_flags: FieldSpec,
    pub reverb_enable_bit: u32,
    pub chorus_enable_bit: u32,
    pub chorus_patch_number: FieldSpec,
    pub reverb_patch_number: FieldSpec,
    pub chorus_patch_name: FieldSpec,
    pub reverb_patch_name: FieldSpec,
}

impl EffectsLayout {
    pub const fn r16() -> Self {
        Self {
            header: FieldSpec::single(0, 30, Encoding::Ascii),
            header_text: "ZOOM R-16  EFFECT DATA VER0001",
            enable_flags: FieldSpec::single(0x62, 1, Encoding::BitMask),
            reverb_enable_bit: 1,
            chorus_enable_bit: 0,
            chorus_patch_number: FieldSpec::single(0x58, 4, Encoding::SignedInt),
            reverb_patch_number: FieldSpec::single(0x5c, 4, Encoding::SignedInt),
            chorus_patch_name: FieldSpec::single(0xe8, 8, Encoding::Ascii),
            reverb_patch_name: FieldSpec::single(0x106, 8, Encoding::Ascii),
        }
    }
}

pub const PROJECT_LAYOUT: ProjectLayout = ProjectLayout::r16();
pub const EFFECTS_LAYOUT: EffectsLayout = EffectsLayout::r16();
