//! Configuration types for Ordinal.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from
//! external sources. Every field has a default, an empty document is a
//! valid configuration.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining the sections below.
//! - [`InputConfig`] - Where position directives are read from.
//! - [`OutputConfig`] - How output paths are built.
//! - [`DiagnosticsConfig`] - How malformed directives are treated.
//!
//! # Example
//!
//! ```
//! # use ordinal::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.input().meta_key(), "__meta");
//! assert_eq!(config.input().position_key(), "position");
//! ```

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    input: InputConfig,

    #[serde(default)]
    output: OutputConfig,

    #[serde(default)]
    diagnostics: DiagnosticsConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(input: InputConfig, output: OutputConfig, diagnostics: DiagnosticsConfig) -> Self {
        Self {
            input,
            output,
            diagnostics,
        }
    }

    pub fn input(&self) -> &InputConfig {
        &self.input
    }

    pub fn output(&self) -> &OutputConfig {
        &self.output
    }

    pub fn diagnostics(&self) -> &DiagnosticsConfig {
        &self.diagnostics
    }

    /// Returns a copy of this configuration with a different base path.
    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.output.base_path = base_path.into();
        self
    }
}

/// Where directives live inside a sub-element.
///
/// A sub-element carries its directive at `<meta_key>.<position_key>`.
/// Keys listed in `ignore` are never ordered or rendered.
#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    #[serde(default = "default_meta_key")]
    meta_key: String,

    #[serde(default = "default_position_key")]
    position_key: String,

    #[serde(default)]
    ignore: Vec<String>,
}

impl InputConfig {
    /// Creates a new [`InputConfig`].
    ///
    /// # Arguments
    ///
    /// * `meta_key` - Name of the table holding sub-element metadata.
    /// * `position_key` - Name of the directive entry inside that table.
    /// * `ignore` - Keys excluded from ordering.
    pub fn new(
        meta_key: impl Into<String>,
        position_key: impl Into<String>,
        ignore: Vec<String>,
    ) -> Self {
        Self {
            meta_key: meta_key.into(),
            position_key: position_key.into(),
            ignore,
        }
    }

    pub fn meta_key(&self) -> &str {
        &self.meta_key
    }

    pub fn position_key(&self) -> &str {
        &self.position_key
    }

    pub fn ignore(&self) -> &[String] {
        &self.ignore
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self::new(default_meta_key(), default_position_key(), Vec::new())
    }
}

fn default_meta_key() -> String {
    "__meta".to_string()
}

fn default_position_key() -> String {
    "position".to_string()
}

/// Output path settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    /// Prefix joined with every key as `<base_path>/<key>`.
    #[serde(default)]
    base_path: String,
}

impl OutputConfig {
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }
}

/// Diagnostics settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DiagnosticsConfig {
    /// Fail instead of falling back to the default placement when a
    /// directive cannot be parsed.
    #[serde(default)]
    deny_malformed: bool,
}

impl DiagnosticsConfig {
    pub fn new(deny_malformed: bool) -> Self {
        Self { deny_malformed }
    }

    pub fn deny_malformed(&self) -> bool {
        self.deny_malformed
    }
}
