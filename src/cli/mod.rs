//! CLI Module
//!
//! Command-line interface for decoding recorder project directories.

pub mod commands;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::format::revision::{BitPolarity, DecoderRules, FormatRevision, PanScale};
use crate::probe::parse_offset;

/// Zoomr Report - decode recorder project directories into JSON and HTML
#[derive(Parser, Debug)]
#[command(name = "zoomr-report")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Decoder selection shared by every command that reads a project.
#[derive(Args, Debug, Clone)]
pub struct DecodeArgs {
    /// Format revision the files were written by
    #[arg(short, long, value_enum)]
    pub revision: FormatRevision,

    /// Override the polarity of the per-track send enable masks
    #[arg(long, value_enum)]
    pub send_polarity: Option<BitPolarity>,

    /// Override the polarity of the effects file enable byte
    #[arg(long, value_enum)]
    pub effects_polarity: Option<BitPolarity>,

    /// Override how pan distance from center is scaled
    #[arg(long, value_enum)]
    pub pan_scale: Option<PanScale>,
}

impl DecodeArgs {
    /// The revision's ruleset with any overrides applied.
    pub fn rules(&self) -> DecoderRules {
        let mut rules = self.revision.rules();
        if let Some(polarity) = self.send_polarity {
            rules.send_polarity = polarity;
        }
        if let Some(polarity) = self.effects_polarity {
            rules.effects_polarity = polarity;
        }
        if let Some(scale) = self.pan_scale {
            rules.pan.scale = scale;
        }
        rules
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Decode a project directory and write its JSON document
    #[command(name = "json")]
    Json {
        /// PROJnnn directory
        project_dir: PathBuf,

        /// Extra info JSON (missing file is ignored)
        extra_info: PathBuf,

        /// Output JSON file
        output: PathBuf,

        #[command(flatten)]
        decode: DecodeArgs,
    },

    /// Decode a project directory and render it through an HTML template
    #[command(name = "html")]
    Html {
        /// PROJnnn directory
        project_dir: PathBuf,

        /// Extra info JSON (missing file is ignored)
        extra_info: PathBuf,

        /// Output HTML file
        output: PathBuf,

        /// Jinja2 template; the project JSON is its context
        #[arg(short, long, default_value = "template.html")]
        template: PathBuf,

        #[command(flatten)]
        decode: DecodeArgs,
    },

    /// Print a per-track summary of a project directory
    #[command(name = "inspect")]
    Inspect {
        /// PROJnnn directory
        project_dir: PathBuf,

        #[command(flatten)]
        decode: DecodeArgs,
    },

    /// Show the bytes at one offset across several files
    #[command(name = "peek")]
    Peek {
        /// Files to read
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Offset, decimal or 0x-prefixed hex
        #[arg(short, long, value_parser = parse_offset)]
        offset: usize,

        /// Number of bytes to read
        #[arg(short, long, default_value_t = 1)]
        length: usize,

        /// Files to skip
        #[arg(long, num_args = 1..)]
        exclude: Vec<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_requires_three_positionals() {
        let missing = Cli::try_parse_from(["zoomr-report", "json", "PROJ001", "--revision", "v2"]);
        assert!(missing.is_err());

        let cli = Cli::try_parse_from([
            "zoomr-report", "json", "PROJ001", "extra.json", "out.json", "--revision", "v2",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::Json { .. }));
    }

    #[test]
    fn test_revision_is_required() {
        assert!(Cli::try_parse_from(["zoomr-report", "inspect", "PROJ001"]).is_err());
    }

    #[test]
    fn test_overrides_apply_to_rules() {
        let cli = Cli::try_parse_from([
            "zoomr-report",
            "inspect",
            "PROJ001",
            "-r",
            "v3",
            "--send-polarity",
            "set-means-disabled",
            "--pan-scale",
            "direct",
        ])
        .unwrap();

        let Commands::Inspect { decode, .. } = cli.command else {
            panic!("expected inspect");
        };
        let rules = decode.rules();
        assert_eq!(rules.send_polarity, BitPolarity::SetMeansDisabled);
        assert_eq!(rules.pan.scale, PanScale::Direct);
        assert_eq!(rules.effects_polarity, FormatRevision::V3.rules().effects_polarity);
    }

    #[test]
    fn test_peek_accepts_hex_offset() {
        let cli = Cli::try_parse_from([
            "zoomr-report", "peek", "a.zdt", "b.zdt", "--offset", "0x62", "--exclude", "b.zdt",
        ])
        .unwrap();

        let Commands::Peek { offset, length, files, exclude } = cli.command else {
            panic!("expected peek");
        };
        assert_eq!(offset, 0x62);
        assert_eq!(length, 1);
        assert_eq!(files.len(), 2);
        assert_eq!(exclude, vec![PathBuf::from("b.zdt")]);
    }
}
