//! Project aggregate and the extra-info annotation step.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ZoomrError};

use super::effects::EffectsSettings;
use super::track::{MasterTrack, Track};

/// A fully decoded project directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    /// Three digits taken from the `PROJnnn` directory name.
    pub project_number: String,
    pub project_name: String,
    /// Exactly sixteen tracks, in track-number order.
    pub track_info: Vec<Track>,
    pub master: MasterTrack,
    pub effects: EffectsSettings,
    /// Audio files referenced by no track and not by the master, sorted.
    pub extra_audio_files: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name_full: Option<String>,
}

/// Ways to find a track within a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackLookup<'a> {
    Number(u8),
    TrackName(&'a str),
    FileName(&'a str),
}

impl Project {
    /// First track matching the lookup, in track-number order.
    pub fn find_track(&self, lookup: TrackLookup<'_>) -> Option<&Track> {
        self.track_info.iter().find(|track| match lookup {
            TrackLookup::Number(number) => track.track_num.number() == number,
            TrackLookup::TrackName(name) => track.track_name == name,
            TrackLookup::FileName(name) => track.file_name == name,
        })
    }

    fn find_used_track_mut(&mut self, track_name: &str) -> Option<&mut Track> {
        self.track_info
            .iter_mut()
            .find(|track| track.is_used() && track.track_name == track_name)
    }

    /// Tracks that link an audio file.
    pub fn used_tracks(&self) -> impl Iterator<Item = &Track> {
        self.track_info.iter().filter(|track| track.is_used())
    }

    /// Every file name referenced by a track or by the master.
    pub fn referenced_files(&self) -> BTreeSet<&str> {
        self.used_tracks()
            .map(|track| track.file_name.as_str())
            .chain(std::iter::once(self.master.file.as_str()))
            .filter(|name| !name.is_empty())
            .collect()
    }

    /// Consume the project and return it annotated with extra info.
    pub fn with_extra_info(self, extra: &ExtraInfo) -> Self {
        merge(self, extra)
    }
}

/// Annotations supplied alongside a project directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtraInfo {
    pub card_name: Option<String>,
    pub project_name_full: Option<String>,
    /// Keyed by track short name.
    pub tracks: BTreeMap<String, TrackExtra>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackExtra {
    pub bars_used: Option<u32>,
}

impl ExtraInfo {
    /// Load extra info from a JSON file.
    ///
    /// A missing file is reported as [`ZoomrError::MissingOptionalInput`]
    /// so the caller can warn and carry on.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ZoomrError::MissingOptionalInput {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path).map_err(|e| ZoomrError::FileReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let extra = serde_json::from_str(&content).map_err(|e| ZoomrError::InvalidExtraInfo {
            path: path.to_path_buf(),
            source: e,
        })?;

        info!("Loaded extra info from {}", path.display());
        Ok(extra)
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|s| !s.is_empty()).cloned()
}

/// Apply extra info to a project.
///
/// Empty strings leave the project's values alone. Track entries are
/// matched by short name against used tracks; unmatched names are ignored.
pub fn merge(mut project: Project, extra: &ExtraInfo) -> Project {
    if let Some(card_name) = non_empty(&extra.card_name) {
        project.card_name = Some(card_name);
    }

    if let Some(full_name) = non_empty(&extra.project_name_full) {
        project.project_name_full = Some(full_name);
    }

    for (track_name, track_extra) in &extra.tracks {
        match project.find_used_track_mut(track_name) {
            Some(track) => {
                if let Some(bars_used) = track_extra.bars_used {
                    track.bars_used = Some(bars_used);
                }
            }
            None => debug!("Extra info names unknown track '{}', ignored", track_name),
        }
    }

    project
}
