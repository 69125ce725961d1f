//! CLI argument parsing with clap

use crate::builder::step::Track;
use crate::config::AppConfig;
use clap::Parser;
use std::path::PathBuf;

/// Output format of a replayed session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Localized text
    #[default]
    Text,
    /// Structured JSON report
    Json,
}

/// Project Builder - two-track project questionnaire
///
/// Guides a visitor through web development or cloud services questions,
/// summarizes the answers and closes with a tailored message. Without
/// `--replay` the wizard runs as an interactive terminal UI.
#[derive(Parser, Debug)]
#[command(name = "project-builder")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to configuration file (TOML format)
    ///
    /// Settings from the config file are used as defaults.
    /// CLI arguments override config file settings.
    #[arg(short = 'C', long)]
    pub config: Option<PathBuf>,

    /// Interface language (nl or en)
    #[arg(short, long, env = "PROJECT_BUILDER_LOCALE")]
    pub locale: Option<String>,

    /// Replay a JSON script of wizard events instead of starting the UI
    #[arg(short, long)]
    pub replay: Option<PathBuf>,

    /// Output format for --replay
    #[arg(short, long, value_enum, default_value_t)]
    pub format: OutputFormat,

    /// Open the interactive wizard directly on a track
    #[arg(short, long, value_enum)]
    pub track: Option<Track>,

    /// Delay before the next step opens after a choice, in milliseconds
    #[arg(long)]
    pub select_delay: Option<u64>,

    /// Print a documented sample configuration and exit
    #[arg(long)]
    pub sample_config: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output log format as JSON
    #[arg(long)]
    pub json_log: bool,
}

impl Cli {
    /// Get config file name (without extension) for log naming
    pub fn config_name(&self) -> Option<String> {
        self.config.as_ref().and_then(|p| {
            p.file_stem()
                .and_then(|s| s.to_str())
                .map(|s| s.to_string())
        })
    }

    /// Whether the terminal UI should run
    pub fn is_interactive(&self) -> bool {
        self.replay.is_none() && !self.sample_config
    }

    /// Merge CLI arguments with config from file
    /// CLI arguments take precedence over config file settings
    pub fn merge_with_config(&self, mut config: AppConfig) -> AppConfig {
        if let Some(ref locale) = self.locale {
            config.locale = Some(locale.clone());
        }
        if let Some(select_delay) = self.select_delay {
            config.select_delay_ms = select_delay;
        }
        if self.verbose {
            config.verbose = true;
        }

        config
    }

    /// Convert CLI arguments to a config when no config file is used
    pub fn to_config(&self) -> AppConfig {
        self.merge_with_config(AppConfig::default())
    }
}
