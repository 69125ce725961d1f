use crate::builder::controller::Timing;
use crate::builder::tooltip::TooltipRules;
use crate::contact::SubmitTiming;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Delay between choosing a single-select option and opening the next step (ms)
    pub select_delay_ms: u64,

    /// Delay between starting a track and opening its first step (ms)
    pub start_delay_ms: u64,

    /// Simulated sending time of the contact form (ms)
    pub submit_sending_ms: u64,

    /// Time the success message is shown before the form is cleared (ms)
    pub submit_reset_ms: u64,

    /// Time until the cleared form is shown again (ms)
    pub submit_reshow_ms: u64,

    /// UI locale ("nl" or "en"); detected from the system when unset
    pub locale: Option<String>,

    /// Cells between an info icon and its tooltip
    pub tooltip_gap: i32,

    /// Minimum cells between a tooltip and the screen edge
    pub tooltip_margin: i32,

    /// Verbose logging
    pub verbose: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            select_delay_ms: 500,
            start_delay_ms: 500,
            submit_sending_ms: 2000,
            submit_reset_ms: 1000,
            submit_reshow_ms: 5000,
            locale: None,
            tooltip_gap: 1,
            tooltip_margin: 1,
            verbose: false,
        }
    }
}

impl AppConfig {
    /// Delays of the wizard's scheduled transitions
    pub fn timing(&self) -> Timing {
        Timing {
            select_delay: Duration::from_millis(self.select_delay_ms),
            start_delay: Duration::from_millis(self.start_delay_ms),
        }
    }

    pub fn submit_timing(&self) -> SubmitTiming {
        SubmitTiming {
            sending: Duration::from_millis(self.submit_sending_ms),
            reset: Duration::from_millis(self.submit_reset_ms),
            reshow: Duration::from_millis(self.submit_reshow_ms),
        }
    }

    pub fn tooltip_rules(&self) -> TooltipRules {
        TooltipRules {
            gap: self.tooltip_gap,
            margin: self.tooltip_margin,
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: AppConfig = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Write {
                path: path.to_path_buf(),
                source: e,
            })?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize {
            source: e,
        })?;

        fs::write(path, content).map_err(|e| ConfigError::Write {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(())
    }

    /// Generate a sample configuration file content
    pub fn sample_config() -> String {
        r#"# Project Builder Configuration File
# This file uses TOML format (https://toml.io)

# Pause after choosing an option before the next step opens (milliseconds)
select_delay_ms = 500

# Pause after starting a track before its first step opens (milliseconds)
start_delay_ms = 500

# Contact form: simulated sending time, time until the form is cleared,
# and time until the cleared form is shown again (milliseconds)
submit_sending_ms = 2000
submit_reset_ms = 1000
submit_reshow_ms = 5000

# Interface language: "nl" or "en"
# Leave unset to follow the system language
# locale = "nl"

# Tooltip spacing in terminal cells
tooltip_gap = 1
tooltip_margin = 1

# Verbose logging
verbose = false
"#
        .to_string()
    }
}

/// Config file errors, each naming the file involved
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("config file '{}' is not valid TOML: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("cannot write config file '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot encode config as TOML: {source}")]
    Serialize { source: toml::ser::Error },
}
