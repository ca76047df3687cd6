//! Index configuration
//!
//! Configuration is a plain value: build it in code, or parse it from TOML
//! (typically a `rindex.toml` shipped next to the service that embeds the
//! index). Every field has a default, so an empty file is valid.

use rindex_core::{Error, KeyNamespace, Result, DEFAULT_KEY_PREFIX};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Conventional config file name
pub const CONFIG_FILE_NAME: &str = "rindex.toml";

/// Default number of keys examined per scan call (Redis' own SCAN default)
pub const DEFAULT_SCAN_COUNT: usize = 10;

/// How `match_prefix` interprets its input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PrefixMode {
    /// Trim and lowercase the whole input; use it as one literal prefix
    #[default]
    Literal,
    /// Tokenize the input; match each token as a prefix and union the results
    Tokenized,
}

/// Configuration for an `Indexer`.
///
/// # Example
///
/// ```toml
/// key_prefix = "ri:"
/// scan_count = 10
/// prefix_mode = "literal"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Prefix of every key this index writes
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,
    /// COUNT hint passed to each scan call; must be greater than zero
    #[serde(default = "default_scan_count")]
    pub scan_count: usize,
    /// Interpretation of `match_prefix` input
    #[serde(default)]
    pub prefix_mode: PrefixMode,
}

fn default_key_prefix() -> String {
    DEFAULT_KEY_PREFIX.to_string()
}

fn default_scan_count() -> usize {
    DEFAULT_SCAN_COUNT
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            key_prefix: default_key_prefix(),
            scan_count: default_scan_count(),
            prefix_mode: PrefixMode::default(),
        }
    }
}

impl IndexConfig {
    /// Set the key prefix
    pub fn with_key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = prefix.into();
        self
    }

    /// Set the scan COUNT hint
    pub fn with_scan_count(mut self, count: usize) -> Self {
        self.scan_count = count;
        self
    }

    /// Set the prefix-match mode
    pub fn with_prefix_mode(mut self, mode: PrefixMode) -> Self {
        self.prefix_mode = mode;
        self
    }

    /// Key namespace derived from `key_prefix`
    pub fn namespace(&self) -> KeyNamespace {
        KeyNamespace::new(self.key_prefix.clone())
    }

    /// Check field values.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if `scan_count` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.scan_count == 0 {
            return Err(Error::invalid_config(
                "scan_count must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Parse and validate a TOML document.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the document cannot be parsed or fails
    /// validation.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: IndexConfig = toml::from_str(content)
            .map_err(|e| Error::invalid_config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a config file.
    ///
    /// # Errors
    ///
    /// Returns `IoError` if the file cannot be read and `InvalidConfig` if it
    /// cannot be parsed or fails validation.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|e| match e {
            Error::InvalidConfig(msg) => {
                Error::invalid_config(format!("{} ({})", msg, path.display()))
            }
            other => other,
        })
    }

    /// Serialize to TOML
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if serialization fails.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::invalid_config(format!("Failed to serialize config: {}", e)))
    }

    /// Default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# rindex configuration
#
# Prefix of every key the index writes. Posting sets live under
# "<prefix>kw:<keyword>", document keyword sets under "<prefix>doc:<id>".
key_prefix = "ri:"

# Keys examined per scan call during prefix matching (must be > 0).
scan_count = 10

# Prefix matching mode:
#   "literal"   = trimmed, lowercased input used as one prefix (default)
#   "tokenized" = input tokenized; each token matched as a prefix
prefix_mode = "literal"
"#
    }
}
