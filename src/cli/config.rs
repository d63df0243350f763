// CLI configuration
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::cli::OutputFormat;

/// oggwave - inspect Ogg Vorbis files as engine sound waves
#[derive(Parser, Debug)]
#[command(name = "oggwave")]
#[command(about = "Read Ogg Vorbis headers the way the sound wave loader does", long_about = None)]
#[command(version)]
pub struct Config {
    /// Output format
    #[arg(short, long, value_enum, default_value = "pretty", global = true)]
    pub format: OutputFormat,

    /// Quiet mode (suppress progress messages)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show channels, sample rate, duration, PCM size and comments
    Info {
        /// Audio file path(s)
        #[arg(value_name = "FILE")]
        files: Vec<PathBuf>,
    },

    /// Detect whether files are Ogg Vorbis
    Detect {
        /// Audio file path(s)
        #[arg(value_name = "FILE")]
        files: Vec<PathBuf>,
    },

    /// Show info for every matching file in a directory
    Scan {
        /// Directory path
        #[arg(short, long)]
        directory: String,

        /// File pattern (e.g., "*.ogg"); without wildcards, matched recursively
        #[arg(short, long, default_value = "*.ogg")]
        pattern: String,
    },

    /// Load a file as a sound wave and write the asset as JSON
    Export {
        /// Audio file path
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output JSON path
        #[arg(short, long)]
        output: PathBuf,
    },
}

impl Config {
    /// Default log filter when RUST_LOG is unset
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "oggwave=debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Config::command().debug_assert();
    }

    #[test]
    fn parses_global_flags_after_subcommand() {
        let config = Config::try_parse_from(["oggwave", "info", "a.ogg", "b.ogg", "-f", "json", "-v"]).unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.verbose);
        assert_eq!(config.log_filter(), "oggwave=debug");
        match config.command {
            Commands::Info { files } => assert_eq!(files.len(), 2),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn scan_pattern_defaults_to_ogg() {
        let config = Config::try_parse_from(["oggwave", "scan", "-d", "sounds"]).unwrap();
        assert_eq!(config.log_filter(), "warn");
        match &config.command {
            Commands::Scan { directory, pattern } => {
                assert_eq!(directory, "sounds");
                assert_eq!(pattern, "*.ogg");
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        assert!(Config::try_parse_from(["oggwave", "-q", "-v", "detect", "a.ogg"]).is_err());
    }
}
