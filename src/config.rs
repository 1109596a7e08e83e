#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::Level;

use crate::{
    constants::{LOG_LEVEL_ENV, SCALE_FILE_ENV, STRICT_GRADES_ENV},
    engine::UnknownGradePolicy,
    scale::GradeScale,
};

/// Settings for one run, read from the environment and overridden by command
/// line flags.
#[derive(Debug, Clone)]
pub struct Config {
    /// Grade scale used for lookups.
    scale:      GradeScale,
    /// Where the scale came from, `None` for the built-in default.
    scale_file: Option<PathBuf>,
    /// What happens to grades not on the scale.
    policy:     UnknownGradePolicy,
    /// Log level for the tracing subscriber.
    log_level:  Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scale:      GradeScale::default(),
            scale_file: None,
            policy:     UnknownGradePolicy::default(),
            log_level:  Level::INFO,
        }
    }
}

impl Config {
    /// Reads `CGPA_SCALE_FILE`, `CGPA_STRICT_GRADES` and `CGPA_LOG`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`Config::from_env`], but `scale_file` takes the place of
    /// `CGPA_SCALE_FILE`, which is then not read at all.
    pub fn from_env_with_scale(scale_file: Option<&Path>) -> Result<Self> {
        Self::from_lookup_with_scale(|key| std::env::var(key).ok(), scale_file)
    }

    /// Builds a config from any key lookup, so it can be driven without
    /// touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_lookup_with_scale(lookup, None)
    }

    /// Builds a config from a key lookup, preferring `scale_file` over the
    /// looked up `CGPA_SCALE_FILE`.
    pub fn from_lookup_with_scale<F>(lookup: F, scale_file: Option<&Path>) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = scale_file {
            config = config.with_scale_file(path)?;
        } else if let Some(path) = lookup(SCALE_FILE_ENV)
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty())
        {
            config = config
                .with_scale_file(Path::new(&path))
                .with_context(|| format!("Could not use {SCALE_FILE_ENV}"))?;
        }

        if read_bool(lookup(STRICT_GRADES_ENV), false) {
            config.policy = UnknownGradePolicy::Reject;
        }

        config.log_level = parse_level(lookup(LOG_LEVEL_ENV));
        tracing::debug!("Loaded config: {config:?}");

        Ok(config)
    }

    /// Replaces the grade scale with the one in `path`.
    pub fn with_scale_file(mut self, path: &Path) -> Result<Self> {
        self.scale = GradeScale::load(path)?;
        self.scale_file = Some(path.to_path_buf());
        Ok(self)
    }

    /// Switches to rejecting unknown grades when `strict` is set; leaves the
    /// current policy otherwise.
    pub fn with_strict(mut self, strict: bool) -> Self {
        if strict {
            self.policy = UnknownGradePolicy::Reject;
        }
        self
    }

    /// Returns the grade scale.
    pub fn scale(&self) -> &GradeScale {
        &self.scale
    }

    /// Returns the path of the scale file in use, if any.
    pub fn scale_file(&self) -> Option<&Path> {
        self.scale_file.as_deref()
    }

    /// Returns the unknown-grade policy.
    pub fn policy(&self) -> UnknownGradePolicy {
        self.policy
    }

    /// Whether grades not on the scale are rejected.
    pub fn strict(&self) -> bool {
        self.policy == UnknownGradePolicy::Reject
    }

    /// Returns the log level.
    pub fn log_level(&self) -> Level {
        self.log_level
    }
}

/// Log level from `CGPA_LOG`, without loading anything else.
pub fn log_level_from_env() -> Level {
    parse_level(std::env::var(LOG_LEVEL_ENV).ok())
}

/// Reads `true/1/yes/on` and `false/0/no/off`, case-insensitively, falling
/// back to `default` for anything else.
fn read_bool(value: Option<String>, default: bool) -> bool {
    match value
        .map(|s| s.trim().to_ascii_lowercase())
        .as_deref()
    {
        Some("true" | "1" | "yes" | "on") => true,
        Some("false" | "0" | "no" | "off") => false,
        _ => default,
    }
}

/// Parses a log level, defaulting to `INFO` when unset or unrecognised.
fn parse_level(value: Option<String>) -> Level {
    value
        .and_then(|s| s.trim().parse::<Level>().ok())
        .unwrap_or(Level::INFO)
}
