//! Compare the same byte range across many binary files.
//!
//! Used to locate unknown fields: record a setting on the recorder, save
//! several projects, and group them by the bytes at a candidate offset.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{Result, ZoomrError};

/// Parse an offset given as decimal or as `0x`-prefixed hex.
pub fn parse_offset(text: &str) -> std::result::Result<usize, String> {
    let parsed = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => usize::from_str_radix(hex, 16),
        None => text.parse::<usize>(),
    };
    parsed.map_err(|e| format!("invalid offset '{}': {}", text, e))
}

/// Bytes at the probed range, or `None` when the file is too short.
pub fn hex_at(bytes: &[u8], offset: usize, length: usize) -> Option<String> {
    let range = bytes.get(offset..offset.checked_add(length)?)?;
    Some(range.iter().map(|b| format!("{:02x}", b)).collect())
}

/// Files grouped by the hex value found at one offset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeReport {
    pub offset: usize,
    pub length: usize,
    /// Per-file value in input order; `None` when out of range.
    pub values: Vec<(PathBuf, Option<String>)>,
    /// Hex value to the files holding it.
    pub groups: BTreeMap<String, Vec<PathBuf>>,
}

/// Read every file not in `exclude` and group them by the probed bytes.
pub fn probe_files(
    files: &[PathBuf],
    exclude: &[PathBuf],
    offset: usize,
    length: usize,
) -> Result<ProbeReport> {
    let mut report = ProbeReport {
        offset,
        length,
        ..ProbeReport::default()
    };

    for path in files {
        if exclude.contains(path) {
            debug!("{}: Excluding...", path.display());
            continue;
        }

        let value = hex_at(&read_file(path)?, offset, length);
        if let Some(hex) = &value {
            report.groups.entry(hex.clone()).or_default().push(path.clone());
        }
        report.values.push((path.clone(), value));
    }

    Ok(report)
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| ZoomrError::FileReadError {
        path: path.to_path_buf(),
        source: e,
    })
}
