//! Zoomr Report - recorder project directory decoder
//!
//! Reads a `PROJnnn` directory written by a 16-track recorder and turns it
//! into a [`Project`]:
//! - `PRJDATA.ZDT`: per-track fader, pan, sends, EQ and file names
//! - `EFXDATA.ZDT`: the global reverb and chorus patches
//! - `AUDIO/`: the recorded files, used to find unreferenced audio
//!
//! # Architecture
//!
//! Decoding runs in three steps:
//! - [`record`]: fixed-offset field access behind capability traits
//! - [`model`]: display-ready values, driven by a [`DecoderRules`] set
//! - [`project_dir`]: directory validation and reconciliation
//!
//! Annotation ([`merge`]) and emission ([`report`]) operate on the decoded
//! value only.

pub mod cli;
pub mod error;
pub mod format;
pub mod model;
pub mod probe;
pub mod project_dir;
pub mod record;
pub mod report;

pub use error::{Result, ZoomrError};
pub use format::{DecoderRules, FormatRevision};
pub use model::{merge, ExtraInfo, Project};
pub use project_dir::{load_project, LoadedProject};
