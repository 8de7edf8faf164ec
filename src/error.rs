//! Error types for loading configuration and component manifests
//!
//! Snippet assembly itself cannot fail; errors only arise at the edges where
//! files are read and parsed.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading a [`SnippetConfig`](crate::SnippetConfig)
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Errors that can occur when loading a component manifest
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Failed to read component manifest {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse component manifest TOML: {0}")]
    Toml(#[from] toml::de::Error),
    /// Two components share the same reference key
    #[error("duplicate component key: {key}")]
    DuplicateKey { key: String },
}

/// A template name that does not match any catalog entry
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown snippet template: {name} (expected one of: {expected})")]
pub struct UnknownTemplate {
    pub name: String,
    pub expected: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_key_message() {
        let err = ManifestError::DuplicateKey {
            key: "comp1".to_string(),
        };
        assert_eq!(err.to_string(), "duplicate component key: comp1");
    }

    #[test]
    fn test_unknown_template_message() {
        let err = UnknownTemplate {
            name: "cel".to_string(),
            expected: "component, cell-image".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unknown snippet template: cel (expected one of: component, cell-image)"
        );
    }
}
