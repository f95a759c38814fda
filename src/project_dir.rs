//! Project directory validation and reconciliation.
//!
//! A project directory looks like:
//!
//! ```text
//! PROJ042/
//!   PRJDATA.ZDT   track mix settings and file names
//!   EFXDATA.ZDT   send effect patches
//!   AUDIO/        recorded audio files
//! ```
//!
//! The three sources are decoded independently and then reconciled into a
//! single [`Project`]. Nothing is published until every stage succeeds.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use walkdir::WalkDir;

use crate::error::{Result, ZoomrError};
use crate::format::revision::DecoderRules;
use crate::model::{EffectsSettings, MasterTrack, Project, Track};
use crate::record::{EffectsRecord, ProjectRecord, RawEffectsData, RawProjectData, TrackIndex};

pub const PROJECT_FILE_NAME: &str = "PRJDATA.ZDT";
pub const EFFECTS_FILE_NAME: &str = "EFXDATA.ZDT";
pub const AUDIO_DIR_NAME: &str = "AUDIO";

const DIR_PREFIX: &str = "PROJ";
const DIR_DIGITS: usize = 3;

/// Extract the project number from a `PROJnnn` directory name.
pub fn parse_project_number(dir_name: &str) -> Option<String> {
    let digits = dir_name.strip_prefix(DIR_PREFIX)?;
    (digits.len() == DIR_DIGITS && digits.bytes().all(|b| b.is_ascii_digit()))
        .then(|| digits.to_string())
}

/// A validated project directory with its raw inputs read into memory.
#[derive(Debug, Clone)]
pub struct ProjectDirectory {
    pub path: PathBuf,
    pub project_number: String,
    pub project_bytes: Vec<u8>,
    pub effects_bytes: Vec<u8>,
    /// Audio file names, sorted.
    pub audio_files: Vec<String>,
}

impl ProjectDirectory {
    /// Validate the directory and read its three artifacts.
    pub fn scan(path: &Path) -> Result<Self> {
        info!("Reading {}", path.display());

        if !path.is_dir() {
            return Err(ZoomrError::invalid_directory(
                path,
                format!("Directory does not exist: {}", path.display()),
            ));
        }

        let dir_name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();

        let project_number = parse_project_number(&dir_name).ok_or_else(|| {
            ZoomrError::invalid_directory(path, format!("Unexpected directory name: {}", dir_name))
        })?;

        let project_file = path.join(PROJECT_FILE_NAME);
        let effects_file = path.join(EFFECTS_FILE_NAME);
        let audio_dir = path.join(AUDIO_DIR_NAME);

        if !project_file.is_file() || !effects_file.is_file() || !audio_dir.is_dir() {
            return Err(ZoomrError::invalid_directory(
                path,
                "Invalid project directory: missing project file, effects file or audio directory!",
            ));
        }

        let audio_files = list_audio_files(&audio_dir)?;
        if audio_files.is_empty() {
            warn!("Audio directory {} is empty", audio_dir.display());
        }

        Ok(Self {
            path: path.to_path_buf(),
            project_number,
            project_bytes: read_whole(&project_file)?,
            effects_bytes: read_whole(&effects_file)?,
            audio_files,
        })
    }

    /// Project file + effects file + audio files.
    pub fn file_count(&self) -> usize {
        2 + self.audio_files.len()
    }
}

fn read_whole(path: &Path) -> Result<Vec<u8>> {
    let bytes = fs::read(path).map_err(|e| ZoomrError::FileReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    debug!("Read {} ({} bytes)", path.display(), bytes.len());
    Ok(bytes)
}

fn list_audio_files(audio_dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();

    for entry in WalkDir::new(audio_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| ZoomrError::FileReadError {
            path: audio_dir.to_path_buf(),
            source: e.into(),
        })?;

        if entry.file_type().is_file() {
            names.push(entry.file_name().to_string_lossy().to_string());
        }
    }

    Ok(names)
}

/// Combine decoded records and an audio listing into a project.
///
/// `extra_audio_files` is the listing minus every used track's file and
/// the master's file, sorted and without duplicates.
pub fn reconcile(
    project_number: &str,
    project: &dyn ProjectRecord,
    effects: &dyn EffectsRecord,
    audio_files: &[String],
    rules: &DecoderRules,
) -> Result<Project> {
    let track_info = TrackIndex::all()
        .map(|index| Track::decode(project, index, rules))
        .collect::<Result<Vec<_>>>()?;

    let mut decoded = Project {
        project_number: project_number.to_string(),
        project_name: project.project_name()?,
        track_info,
        master: MasterTrack::decode(project)?,
        effects: EffectsSettings::decode(effects, rules)?,
        extra_audio_files: Vec::new(),
        card_name: None,
        project_name_full: None,
    };

    let referenced = decoded.referenced_files();
    let extra: BTreeSet<&str> = audio_files
        .iter()
        .map(String::as_str)
        .filter(|name| !referenced.contains(name))
        .collect();
    let extra_audio_files: Vec<String> = extra.into_iter().map(str::to_string).collect();

    decoded.extra_audio_files = extra_audio_files;
    Ok(decoded)
}

/// A decoded project and how many files went into it.
#[derive(Debug, Clone)]
pub struct LoadedProject {
    pub project: Project,
    pub file_count: usize,
}

/// Validate, decode and reconcile one project directory.
pub fn load_project(path: &Path, rules: &DecoderRules) -> Result<LoadedProject> {
    let dir = ProjectDirectory::scan(path)?;

    let file_count = dir.file_count();
    let ProjectDirectory {
        project_number,
        project_bytes,
        effects_bytes,
        audio_files,
        ..
    } = dir;

    let project_record = RawProjectData::new(project_bytes)?;
    let effects_record = RawEffectsData::new(effects_bytes)?;

    let project = reconcile(
        &project_number,
        &project_record,
        &effects_record,
        &audio_files,
        rules,
    )?;

    info!(
        "Decoded project {} \"{}\": {} used tracks, {} extra audio files",
        project.project_number,
        project.project_name,
        project.used_tracks().count(),
        project.extra_audio_files.len()
    );

    Ok(LoadedProject {
        project,
        file_count,
    })
}
