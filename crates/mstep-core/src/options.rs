//! Executor configuration.
//!
//! Options are plain serde structs so they can be embedded in a larger
//! settings file or loaded on their own from TOML:
//!
//! ```toml
//! allow_overwrite = true
//!
//! [reference_syntax]
//! prefix = "reference:"
//! suffix = ""
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid reference syntax: {message}")]
    InvalidSyntax { message: String },
}

/// Shape of a reference placeholder inside a match specification.
///
/// A string scalar is a placeholder when it is exactly
/// `prefix + identifier + suffix` with a non-empty identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceSyntax {
    pub prefix: String,
    pub suffix: String,
}

impl Default for ReferenceSyntax {
    fn default() -> Self {
        Self {
            prefix: "@".to_string(),
            suffix: "@".to_string(),
        }
    }
}

impl ReferenceSyntax {
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    /// Returns the identifier named by `text`, if it is a placeholder.
    pub fn parse<'a>(&self, text: &'a str) -> Option<&'a str> {
        let identifier = text
            .strip_prefix(self.prefix.as_str())?
            .strip_suffix(self.suffix.as_str())?;
        (!identifier.is_empty()).then_some(identifier)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.prefix.is_empty() {
            return Err(ConfigError::InvalidSyntax {
                message: "prefix must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutorOptions {
    pub reference_syntax: ReferenceSyntax,
    /// When false, `overwrite: true` on a reference definition is ignored.
    pub allow_overwrite: bool,
}

impl Default for ExecutorOptions {
    fn default() -> Self {
        Self {
            reference_syntax: ReferenceSyntax::default(),
            allow_overwrite: true,
        }
    }
}

impl ExecutorOptions {
    #[must_use]
    pub fn with_reference_syntax(mut self, syntax: ReferenceSyntax) -> Self {
        self.reference_syntax = syntax;
        self
    }

    #[must_use]
    pub fn with_allow_overwrite(mut self, allow: bool) -> Self {
        self.allow_overwrite = allow;
        self
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads options from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// placeholder prefix is empty.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let options = Self::from_toml_str(&content).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })?;
        options.reference_syntax.validate()?;
        tracing::debug!(path = %path.display(), "loaded executor options");
        Ok(options)
    }
}
