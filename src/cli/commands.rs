//! CLI Command Implementations
//!
//! Implements the actual logic for each CLI command.

use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::error::Result;
use crate::format::revision::DecoderRules;
use crate::model::{merge, ExtraInfo, Project};
use crate::probe::probe_files;
use crate::project_dir::load_project;
use crate::report::{self, JinjaTemplate};

/// Decode a project directory and merge in the extra info, if present.
fn load_and_annotate(
    project_dir: &Path,
    extra_info: &Path,
    rules: &DecoderRules,
) -> Result<Project> {
    let loaded = load_project(project_dir, rules)?;
    println!(
        "OK [{} files in Project \"{}\"]",
        loaded.file_count, loaded.project.project_name
    );

    let extra = match ExtraInfo::load(extra_info) {
        Ok(extra) => extra,
        Err(e) if e.is_ignorable() => {
            warn!("{}", e);
            println!("Error [{}]", e);
            ExtraInfo::default()
        }
        Err(e) => return Err(e),
    };

    Ok(merge(loaded.project, &extra))
}

/// Write the project's JSON document.
pub fn generate_json(
    project_dir: &Path,
    extra_info: &Path,
    output: &Path,
    rules: &DecoderRules,
) -> Result<()> {
    info!("Generating JSON for {}", project_dir.display());

    let project = load_and_annotate(project_dir, extra_info, rules)?;
    report::write_json(&project, output)?;

    println!("JSON written: {}", output.display());
    Ok(())
}

/// Render the project through an HTML template.
pub fn generate_html(
    project_dir: &Path,
    extra_info: &Path,
    output: &Path,
    template: &Path,
    rules: &DecoderRules,
) -> Result<()> {
    info!(
        "Generating HTML for {} using {}",
        project_dir.display(),
        template.display()
    );

    let project = load_and_annotate(project_dir, extra_info, rules)?;
    let html = report::render_html(&project, template, &JinjaTemplate)?;
    report::write_text(output, &html)?;

    println!("HTML written: {}", output.display());
    Ok(())
}

/// Print a human-readable summary of a project.
pub fn inspect(project_dir: &Path, rules: &DecoderRules) -> Result<()> {
    let loaded = load_project(project_dir, rules)?;
    let project = &loaded.project;

    println!(
        "Project {} \"{}\" ({} files)",
        project.project_number, project.project_name, loaded.file_count
    );

    for track in project.used_tracks() {
        println!("{}", track);
    }

    if !project.master.file.is_empty() {
        println!("Master: {} ({})", project.master.name, project.master.file);
    }

    let (reverb_number, reverb_name) = project.effects.reverb_info();
    let (chorus_number, chorus_name) = project.effects.chorus_info();
    println!("Reverb: {} {}", reverb_number, reverb_name);
    println!("Chorus: {} {}", chorus_number, chorus_name);

    if !project.extra_audio_files.is_empty() {
        println!("Extra audio files: {}", project.extra_audio_files.join(", "));
    }

    Ok(())
}

/// Print the bytes at `offset` for every file, then group files by value.
pub fn peek(files: &[PathBuf], exclude: &[PathBuf], offset: usize, length: usize) -> Result<()> {
    let report = probe_files(files, exclude, offset, length)?;

    for (path, value) in &report.values {
        match value {
            Some(hex) => println!(
                "{}: {} byte(s) at Offset {:#x}: 0x{}",
                path.display(),
                report.length,
                report.offset,
                hex
            ),
            None => println!(
                "{}: Offset {:#x} is past the end of the file",
                path.display(),
                report.offset
            ),
        }
    }

    if report.groups.is_empty() {
        println!("No files processed.");
        return Ok(());
    }

    println!("\nValues at File Offset {:#x}:", report.offset);
    for (hex, paths) in &report.groups {
        println!("\nValue: 0x{} ({} file(s))", hex, paths.len());
        for path in paths {
            println!(" * {}", path.display());
        }
    }

    Ok(())
}
