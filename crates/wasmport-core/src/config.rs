//! Plugin configuration.
//!
//! Configuration is an explicit struct with documented defaults,
//! constructed once at plugin-initialization time and passed by reference
//! to every operation. The `sync` option is a tagged union decided at
//! configuration-parse time; the shape dispatch happens exactly once.
//!
//! # Examples
//!
//! ```
//! use wasmport_core::{PluginConfig, SyncOption};
//!
//! let config = PluginConfig::default();
//! assert_eq!(config.include, vec!["**/*.wasm".to_string()]);
//! assert!(config.exclude.is_empty());
//! assert_eq!(config.sync, SyncOption::All(false));
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default include pattern: every `.wasm` file.
pub const DEFAULT_INCLUDE: &str = "**/*.wasm";

/// Configuration for the wasmport plugin.
///
/// Host bundlers typically deliver options as JSON; use
/// [`PluginConfig::from_json`] to parse them with shape validation.
///
/// # Examples
///
/// ```
/// use wasmport_core::{PluginConfig, SyncOption};
/// use serde_json::json;
///
/// let config = PluginConfig::from_json(json!({
///     "include": ["src/**/*.wasm"],
///     "sync": "**/*.sync.wasm",
/// })).unwrap();
///
/// assert_eq!(config.include, vec!["src/**/*.wasm".to_string()]);
/// assert_eq!(config.sync, SyncOption::Pattern("**/*.sync.wasm".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginConfig {
    /// Glob patterns selecting the files this plugin processes.
    ///
    /// Default: `["**/*.wasm"]`. An empty list matches every file.
    #[serde(default = "default_include")]
    pub include: Vec<String>,

    /// Glob patterns excluding files from processing.
    ///
    /// Default: empty (nothing excluded). Exclusion wins over inclusion.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Which files receive a synchronous (inline) loader.
    ///
    /// Default: [`SyncOption::All(false)`], meaning every module loads
    /// asynchronously.
    #[serde(default)]
    pub sync: SyncOption,
}

fn default_include() -> Vec<String> {
    vec![DEFAULT_INCLUDE.to_string()]
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            include: default_include(),
            exclude: Vec::new(),
            sync: SyncOption::default(),
        }
    }
}

impl PluginConfig {
    /// Parses a configuration from a JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] when a field has an unsupported
    /// shape, notably a `sync` value that is neither a boolean, a glob
    /// pattern string, nor an include/exclude object.
    ///
    /// # Examples
    ///
    /// ```
    /// use wasmport_core::PluginConfig;
    /// use serde_json::json;
    ///
    /// assert!(PluginConfig::from_json(json!({ "sync": true })).is_ok());
    /// assert!(PluginConfig::from_json(json!({ "sync": 42 })).is_err());
    /// ```
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| Error::ConfigError {
            message: format!("invalid plugin options: {e}"),
        })
    }
}

/// The `sync` option: which files get a synchronous inline loader.
///
/// Hosts may supply a boolean (apply uniformly), a glob pattern string
/// (matching files are synchronous), or a structured include/exclude
/// pair. Any other shape is a configuration error. The decision of how
/// to interpret the value is made here, once, at parse time.
///
/// # Examples
///
/// ```
/// use wasmport_core::SyncOption;
/// use serde_json::json;
///
/// let uniform: SyncOption = serde_json::from_value(json!(true)).unwrap();
/// assert_eq!(uniform, SyncOption::All(true));
///
/// let pattern: SyncOption = serde_json::from_value(json!("**/*.inline.wasm")).unwrap();
/// assert_eq!(pattern, SyncOption::Pattern("**/*.inline.wasm".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SyncOption {
    /// Apply one mode uniformly: `true` = every file synchronous,
    /// `false` = every file asynchronous.
    All(bool),
    /// Files matching this glob pattern are synchronous.
    Pattern(String),
    /// Files matching `include` (and not `exclude`) are synchronous.
    Filtered {
        /// Glob patterns selecting synchronous files.
        #[serde(default)]
        include: Vec<String>,
        /// Glob patterns excluding files from synchronous loading.
        #[serde(default)]
        exclude: Vec<String>,
    },
}

impl Default for SyncOption {
    fn default() -> Self {
        Self::All(false)
    }
}
