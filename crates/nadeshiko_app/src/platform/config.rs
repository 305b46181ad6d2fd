//! Panel configuration, read from a RON file and adjusted by CLI flags.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use nadeshiko_core::{AutoUpdate, InFlightPolicy, PanelSettings};
use nadeshiko_engine::{RecompilePolicy, TranslatorSettings, DEFAULT_ENTRY_CLASS, DEFAULT_PARSER_JAR};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_CONFIG_FILENAME: &str = ".nadeshiko_panel.ron";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Where the effective configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOrigin {
    Defaults,
    File(PathBuf),
    /// The default config file exists but could not be used.
    DefaultsAfterError { path: PathBuf, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum InFlightSetting {
    #[default]
    Cancel,
    Coalesce,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RecompileSetting {
    #[default]
    Always,
    Once,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    pub base_dir: PathBuf,
    pub classpath: Vec<PathBuf>,
    pub entry_class: String,
    pub javac: PathBuf,
    pub java: PathBuf,
    pub recompile: RecompileSetting,
    pub timeout_ms: u64,
    pub temp_dir: Option<PathBuf>,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            classpath: vec![PathBuf::from("."), PathBuf::from(DEFAULT_PARSER_JAR)],
            entry_class: DEFAULT_ENTRY_CLASS.to_string(),
            javac: PathBuf::from("javac"),
            java: PathBuf::from("java"),
            recompile: RecompileSetting::Always,
            timeout_ms: 30_000,
            temp_dir: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    pub debounce_ms: u64,
    pub auto_update: bool,
    pub in_flight: InFlightSetting,
    pub log_file: PathBuf,
    pub translator: TranslatorConfig,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 1000,
            auto_update: true,
            in_flight: InFlightSetting::Cancel,
            log_file: PathBuf::from("./nadeshiko_panel.log"),
            translator: TranslatorConfig::default(),
        }
    }
}

/// CLI values that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub base_dir: Option<PathBuf>,
    pub debounce_ms: Option<u64>,
    pub no_auto_update: bool,
    pub coalesce: bool,
}

impl PanelConfig {
    pub fn apply_overrides(&mut self, overrides: &Overrides) {
        if let Some(base_dir) = &overrides.base_dir {
            self.translator.base_dir.clone_from(base_dir);
        }
        if let Some(debounce_ms) = overrides.debounce_ms {
            self.debounce_ms = debounce_ms;
        }
        if overrides.no_auto_update {
            self.auto_update = false;
        }
        if overrides.coalesce {
            self.in_flight = InFlightSetting::Coalesce;
        }
    }

    pub fn panel_settings(&self) -> PanelSettings {
        PanelSettings {
            debounce: Duration::from_millis(self.debounce_ms),
            auto_update: AutoUpdate::from_enabled(self.auto_update),
            in_flight: match self.in_flight {
                InFlightSetting::Cancel => InFlightPolicy::Cancel,
                InFlightSetting::Coalesce => InFlightPolicy::Coalesce,
            },
        }
    }

    pub fn translator_settings(&self) -> TranslatorSettings {
        let translator = &self.translator;
        TranslatorSettings {
            base_dir: translator.base_dir.clone(),
            classpath: translator.classpath.clone(),
            entry_class: translator.entry_class.clone(),
            javac: translator.javac.clone(),
            java: translator.java.clone(),
            recompile: match translator.recompile {
                RecompileSetting::Always => RecompilePolicy::Always,
                RecompileSetting::Once => RecompilePolicy::Once,
            },
            stage_timeout: Duration::from_millis(translator.timeout_ms),
            temp_dir: translator.temp_dir.clone(),
        }
    }
}

/// Loads the config from `explicit`, or from the default file in the working directory.
///
/// An explicit path must exist and parse. The default file is optional, and a
/// broken one falls back to defaults so the panel still starts.
pub fn load(explicit: Option<&Path>) -> Result<(PanelConfig, ConfigOrigin), ConfigError> {
    match explicit {
        Some(path) => {
            let config = read_config(path)?;
            Ok((config, ConfigOrigin::File(path.to_path_buf())))
        }
        None => Ok(load_default(Path::new(DEFAULT_CONFIG_FILENAME))),
    }
}

fn load_default(path: &Path) -> (PanelConfig, ConfigOrigin) {
    match read_config(path) {
        Ok(config) => (config, ConfigOrigin::File(path.to_path_buf())),
        Err(ConfigError::Read { source, .. })
            if source.kind() == std::io::ErrorKind::NotFound =>
        {
            (PanelConfig::default(), ConfigOrigin::Defaults)
        }
        Err(err) => (
            PanelConfig::default(),
            ConfigOrigin::DefaultsAfterError {
                path: path.to_path_buf(),
                message: err.to_string(),
            },
        ),
    }
}

fn read_config(path: &Path) -> Result<PanelConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    ron::from_str(&content).map_err(|err| ConfigError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}
