//! Shared fixtures: binary file writers and throwaway project directories.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use zoomr_report::format::{EFFECTS_LAYOUT, PROJECT_LAYOUT};
use zoomr_report::project_dir::{AUDIO_DIR_NAME, EFFECTS_FILE_NAME, PROJECT_FILE_NAME};

/// Builds a project file field by field.
pub struct ProjectFileBuilder {
    bytes: Vec<u8>,
}

impl ProjectFileBuilder {
    pub fn new(name: &str) -> Self {
        let mut builder = Self {
            bytes: vec![0u8; PROJECT_LAYOUT.min_len()],
        };
        builder.put(PROJECT_LAYOUT.project_name.offset, name.as_bytes());
        builder
    }

    /// Continue editing an already built file.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    fn put(&mut self, offset: usize, data: &[u8]) {
        self.bytes[offset..offset + data.len()].copy_from_slice(data);
    }

    fn put_i32(&mut self, offset: usize, value: i32) {
        self.put(offset, &value.to_le_bytes());
    }

    fn slot(track: u8) -> usize {
        usize::from(track) - 1
    }

    pub fn file_name(mut self, track: u8, name: &str) -> Self {
        self.put(PROJECT_LAYOUT.file_names.address(Self::slot(track)), name.as_bytes());
        self
    }

    pub fn master_file_name(mut self, name: &str) -> Self {
        self.put(PROJECT_LAYOUT.file_names.address(16), name.as_bytes());
        self
    }

    pub fn fader(mut self, track: u8, value: i32) -> Self {
        self.put_i32(PROJECT_LAYOUT.fader.address(Self::slot(track)), value);
        self
    }

    pub fn pan(mut self, track: u8, value: i32) -> Self {
        self.put_i32(PROJECT_LAYOUT.pan.address(Self::slot(track)), value);
        self
    }

    pub fn reverb_send(mut self, track: u8, value: i32) -> Self {
        self.put_i32(PROJECT_LAYOUT.reverb_send.address(Self::slot(track)), value);
        self
    }

    pub fn chorus_send(mut self, track: u8, value: i32) -> Self {
        self.put_i32(PROJECT_LAYOUT.chorus_send.address(Self::slot(track)), value);
        self
    }

    /// All twelve EQ words of a track, in record order.
    pub fn eq(mut self, track: u8, words: [i32; 12]) -> Self {
        let base = PROJECT_LAYOUT.eq.address(Self::slot(track));
        for (i, word) in words.iter().enumerate() {
            self.put_i32(base + i * 4, *word);
        }
        self
    }

    pub fn reverb_mask(mut self, mask: u32) -> Self {
        self.put(PROJECT_LAYOUT.reverb_enable_mask.offset, &mask.to_le_bytes());
        self
    }

    pub fn chorus_mask(mut self, mask: u32) -> Self {
        self.put(PROJECT_LAYOUT.chorus_enable_mask.offset, &mask.to_le_bytes());
        self
    }

    /// Overwrite every field that belongs to `track`: its per-track words
    /// with `fill`, its file name, its EQ record (with in-table values)
    /// and its bit in both send enable masks.
    pub fn scramble_track(mut self, track: u8, fill: u8) -> Self {
        let slot = Self::slot(track);
        let l = PROJECT_LAYOUT;
        for field in [l.fader, l.pan, l.chorus_send, l.reverb_send] {
            let at = field.address(slot);
            self.put(at, &[fill; 4]);
        }
        let at = l.file_names.address(slot);
        self.put(at, &[b'X'; 12]);

        for mask in [l.chorus_enable_mask, l.reverb_enable_mask] {
            let at = mask.offset;
            let mut word = [0u8; 4];
            word.copy_from_slice(&self.bytes[at..at + 4]);
            let flipped = u32::from_le_bytes(word) ^ (1 << slot);
            self.put(at, &flipped.to_le_bytes());
        }

        self.eq(track, [1, 5, 3, 15, 1, 20, 9, 10, 1, 7, 2, 14])
    }

    pub fn build(self) -> Vec<u8> {
        self.bytes
    }
}

/// Builds an effects file with a valid header.
pub struct EffectsFileBuilder {
    bytes: Vec<u8>,
}

impl EffectsFileBuilder {
    pub fn new() -> Self {
        let mut bytes = vec![0u8; 0x120];
        let header = EFFECTS_LAYOUT.header_text.as_bytes();
        bytes[..header.len()].copy_from_slice(header);
        Self { bytes }
    }

    fn put(&mut self, offset: usize, data: &[u8]) {
        self.bytes[offset..offset + data.len()].copy_from_slice(data);
    }

    pub fn enable_flags(mut self, flags: u8) -> Self {
        self.put(EFFECTS_LAYOUT.enable_flags.offset, &[flags]);
        self
    }

    pub fn reverb(mut self, number: i32, name: &str) -> Self {
        self.put(EFFECTS_LAYOUT.reverb_patch_number.offset, &number.to_le_bytes());
        self.put(EFFECTS_LAYOUT.reverb_patch_name.offset, name.as_bytes());
        self
    }

    pub fn chorus(mut self, number: i32, name: &str) -> Self {
        self.put(EFFECTS_LAYOUT.chorus_patch_number.offset, &number.to_le_bytes());
        self.put(EFFECTS_LAYOUT.chorus_patch_name.offset, name.as_bytes());
        self
    }

    pub fn corrupt_header(mut self) -> Self {
        self.put(0, b"ZOOM R-24");
        self
    }

    pub fn build(self) -> Vec<u8> {
        self.bytes
    }
}

/// Write a `PROJnnn` directory under a fresh temp dir.
pub fn write_project_dir(
    dir_name: &str,
    project: &[u8],
    effects: &[u8],
    audio_files: &[&str],
) -> (TempDir, PathBuf) {
    let root = tempfile::tempdir().unwrap();
    let path = root.path().join(dir_name);
    let audio = path.join(AUDIO_DIR_NAME);
    fs::create_dir_all(&audio).unwrap();

    fs::write(path.join(PROJECT_FILE_NAME), project).unwrap();
    fs::write(path.join(EFFECTS_FILE_NAME), effects).unwrap();
    for name in audio_files {
        fs::write(audio.join(name), b"RIFF").unwrap();
    }

    (root, path)
}

/// A two-track project with reverb enabled and chorus disabled (v2 polarity).
pub fn sample_project() -> Vec<u8> {
    ProjectFileBuilder::new("MYSONG")
        .file_name(1, "MONO-000.WAV")
        .file_name(2, "STE-001.WAV")
        .master_file_name("MASTR000.WAV")
        .fader(1, 100)
        .fader(2, 90)
        .pan(1, 50)
        .pan(2, 45)
        .reverb_send(1, 20)
        .chorus_send(2, 7)
        .reverb_mask(0b01)
        .chorus_mask(0b10)
        // hi off, mid on (1.0k, Q 0.5, +3), lo off
        .eq(1, [0, 3, 0, 12, 1, 14, 4, 15, 0, 0, 0, 12])
        .build()
}

/// Effects with reverb on and chorus off for the v1/v2 enable polarity.
pub fn sample_effects() -> Vec<u8> {
    EffectsFileBuilder::new()
        .enable_flags(0b01)
        .reverb(3, "Hall")
        .chorus(5, "Chorus")
        .build()
}

pub fn read_to_string(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}
