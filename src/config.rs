// src/config.rs
//! Local configuration (`trailmark.toml`).

use std::fs;
use std::path::Path;

use serde::Deserialize;

/// How reports are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

/// Runtime options: defaults, overridden by `trailmark.toml`, overridden by
/// CLI flags.
#[derive(Debug, Clone)]
pub struct Config {
    pub format: OutputFormat,
    pub show_trail: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            show_trail: true,
        }
    }
}

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config and applies `trailmark.toml` from the current
    /// directory when present. Unreadable or invalid files are ignored.
    #[must_use]
    pub fn load() -> Self {
        let mut config = Self::new();
        config.apply_file(Path::new("trailmark.toml"));
        config
    }

    pub fn apply_file(&mut self, path: &Path) {
        let Ok(raw) = fs::read_to_string(path) else {
            return;
        };
        self.apply_toml(&raw);
    }

    pub fn apply_toml(&mut self, raw: &str) {
        let Ok(parsed) = toml::from_str::<ConfigToml>(raw) else {
            return;
        };
        if let Some(format) = parsed.output.format {
            self.format = format;
        }
        if let Some(show_trail) = parsed.output.show_trail {
            self.show_trail = show_trail;
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigToml {
    #[serde(default)]
    output: OutputToml,
}

#[derive(Debug, Default, Deserialize)]
struct OutputToml {
    format: Option<OutputFormat>,
    show_trail: Option<bool>,
}
