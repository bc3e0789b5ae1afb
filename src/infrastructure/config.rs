//! Configuration management

use crate::domain::LinkWords;
use crate::error::{MarkgoneError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when none is given
pub const CONFIG_FILE_NAME: &str = "markgone.toml";

/// Environment variable naming a config file
pub const CONFIG_ENV_VAR: &str = "MARKGONE_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Extension of document files picked up from directories
    pub input_extension: String,

    /// Extension given to rendered HTML files
    pub output_extension: String,

    /// Link-words mapping handed to the body formatter
    pub words: LinkWords,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input_extension: "txt".to_string(),
            output_extension: "html".to_string(),
            words: LinkWords::new(),
        }
    }
}

impl Config {
    /// Load config from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                MarkgoneError::Config(format!("Config file not found: {}", path.display()))
            } else {
                MarkgoneError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the config to use.
    ///
    /// An explicit path (argument, then `MARKGONE_CONFIG`) must exist. Otherwise
    /// `markgone.toml` in `dir` is used if present, and defaults if not.
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        let from_env = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
        if let Some(path) = explicit.map(Path::to_path_buf).or(from_env) {
            tracing::debug!(path = %path.display(), "loading config");
            return Self::load_from_file(&path);
        }

        let implicit = dir.join(CONFIG_FILE_NAME);
        if implicit.is_file() {
            tracing::debug!(path = %implicit.display(), "loading config");
            Self::load_from_file(&implicit)
        } else {
            Ok(Self::default())
        }
    }

    fn validate(&self) -> Result<()> {
        for (key, ext) in [
            ("input_extension", &self.input_extension),
            ("output_extension", &self.output_extension),
        ] {
            if ext.is_empty() || ext.contains(['.', '/', '\\']) {
                return Err(MarkgoneError::Config(format!(
                    "Invalid {}: '{}' (expected a bare extension like \"txt\")",
                    key, ext
                )));
            }
        }

        if self.input_extension == self.output_extension {
            return Err(MarkgoneError::Config(
                "input_extension and output_extension must differ".to_string(),
            ));
        }

        Ok(())
    }
}
