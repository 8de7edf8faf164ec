//! Configuration for snippet output
//!
//! Snippet bodies use a tab per indentation unit. The only tunable is the line
//! separator, which defaults to the platform convention and can be pinned from
//! a TOML file:
//!
//! ```toml
//! line_ending = "lf"
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// Line separator written between snippet lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    /// `\n`
    Lf,
    /// `\r\n`
    CrLf,
    /// Whatever the host platform uses
    #[default]
    Native,
}

impl LineEnding {
    /// The separator text for this line ending
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
            LineEnding::Native => {
                if cfg!(windows) {
                    "\r\n"
                } else {
                    "\n"
                }
            }
        }
    }
}

impl std::str::FromStr for LineEnding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lf" => Ok(LineEnding::Lf),
            "crlf" => Ok(LineEnding::CrLf),
            "native" => Ok(LineEnding::Native),
            other => Err(format!(
                "invalid line ending '{}': expected lf, crlf or native",
                other
            )),
        }
    }
}

/// Configuration options for snippet assembly
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SnippetConfig {
    /// Separator placed between lines of a snippet body
    #[serde(default)]
    pub line_ending: LineEnding,
}

impl SnippetConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the line ending
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_str(&content)?;
        tracing::debug!(path = %path.display(), line_ending = ?config.line_ending, "loaded snippet config");
        Ok(config)
    }

    /// Load configuration from a TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}
