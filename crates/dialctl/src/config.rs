use config::ConfigBuilder;
use config::builder::DefaultState;
use derive_more::{AsRef, Deref, Display, From, Into};
use directories::ProjectDirs;
use rotor::{ContinuousRotary, DiscreteRotary, RangeConfig, SelectionConfig};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use strum::Display as StrumDisplay;
use thiserror::Error;

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct DialName(String);

rotor::impl_string_newtype!(DialName);

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, StrumDisplay)]
#[serde(tag = "kind", rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DialKind {
    Range(RangeConfig),
    Selector(SelectionConfig),
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DialConfig {
    pub name: DialName,
    #[serde(flatten)]
    pub kind: DialKind,
}

#[derive(Debug, Clone)]
pub enum Dial {
    Range(ContinuousRotary),
    Selector(DiscreteRotary),
}

impl DialConfig {
    pub fn build(&self) -> Result<Dial, DialConfigError> {
        let invalid = |source| DialConfigError::Invalid {
            name: self.name.clone(),
            source,
        };
        match &self.kind {
            DialKind::Range(range) => ContinuousRotary::new(*range)
                .map(Dial::Range)
                .map_err(invalid),
            DialKind::Selector(selection) => DiscreteRotary::new(selection.clone())
                .map(Dial::Selector)
                .map_err(invalid),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub dials: Vec<DialConfig>,
}

impl Config {
    pub fn validate(&self) -> Result<(), DialConfigError> {
        let mut seen = HashSet::new();
        for dial in &self.dials {
            if !seen.insert(&dial.name) {
                return Err(DialConfigError::DuplicateDial(dial.name.clone()));
            }
            dial.build()?;
        }
        Ok(())
    }

    pub fn dial(&self, name: &str) -> Result<Dial, DialConfigError> {
        self.dials
            .iter()
            .find(|d| d.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| DialConfigError::UnknownDial(name.to_string()))?
            .build()
    }
}

#[derive(Error, Debug)]
pub enum DialConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Dial '{name}': {source}")]
    Invalid {
        name: DialName,
        #[source]
        source: rotor::ConfigError,
    },
    #[error("Dial '{0}' is declared more than once")]
    DuplicateDial(DialName),
    #[error("No dial named '{0}'")]
    UnknownDial(String),
}

pub fn get_config_path() -> Result<PathBuf, DialConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "rotor", "dialctl").ok_or(DialConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Config, DialConfigError> {
    let config: Config = builder.build()?.try_deserialize()?;
    config.validate()?;
    Ok(config)
}

pub fn parse_config(toml: &str) -> Result<Config, DialConfigError> {
    finish(
        config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml)),
    )
}

/// Reads `path`, or the user config file. A missing user config falls back to
/// the built-in dials; a missing explicit path is an error.
pub fn load_config(path: Option<&Path>) -> Result<Config, DialConfigError> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => {
            let p = get_config_path()?;
            if !p.exists() {
                log::info!("No config at {}, using built-in dials", p.display());
                return parse_config(DEFAULT_CONFIG);
            }
            p
        }
    };

    finish(
        config::Config::builder()
            .add_source(config::File::from(path).required(true))
            .add_source(config::Environment::with_prefix("DIALCTL")),
    )
}

pub fn write_default_config() -> std::io::Result<PathBuf> {
    let path =
        get_config_path().map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e))?;
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_CONFIG)?;
    }
    Ok(path)
}

pub const DEFAULT_CONFIG: &str = include_str!("default_config.toml");
