//! Domain types for wasmport.
//!
//! Newtypes over primitives keep asset tokens from being confused with
//! ordinary strings, and the loader mode is an explicit tagged choice
//! rather than a boolean.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque reference token returned by the host bundler's asset-emission
/// API (newtype over `String`).
///
/// The plugin hands raw binary bytes to the host and receives one of
/// these back; the code generator later turns it into a URL expression
/// in the emitted loader. The token's contents are host-defined (a file
/// name, a placeholder id) and are never interpreted here.
///
/// # Examples
///
/// ```
/// use wasmport_core::AssetReference;
///
/// let asset = AssetReference::new("assets/module-b3f1.wasm");
/// assert_eq!(asset.as_str(), "assets/module-b3f1.wasm");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetReference(String);

impl AssetReference {
    /// Creates a new asset reference from a host-supplied token.
    #[inline]
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the token as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the reference and returns the inner `String`.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for AssetReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for AssetReference {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for AssetReference {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Loading strategy for a generated ES module.
///
/// Decided per source file by the plugin's sync predicate.
///
/// - [`LoaderMode::Sync`]: the binary is embedded inline as base64 and
///   instantiated eagerly; exports are available synchronously on first
///   evaluation.
/// - [`LoaderMode::Async`]: the binary is emitted as a separate asset
///   and fetched/instantiated via the streaming path; the module's only
///   export is a default promise resolving to the exports namespace.
///
/// # Examples
///
/// ```
/// use wasmport_core::LoaderMode;
///
/// let mode = LoaderMode::Sync;
/// assert_eq!(mode.to_string(), "sync");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoaderMode {
    /// Inline base64 embedding, synchronous instantiation.
    Sync,
    /// External asset, streaming fetch and instantiation.
    Async,
}

impl LoaderMode {
    /// Returns `true` for [`LoaderMode::Sync`].
    #[must_use]
    pub const fn is_sync(self) -> bool {
        matches!(self, Self::Sync)
    }
}

impl fmt::Display for LoaderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sync => write!(f, "sync"),
            Self::Async => write!(f, "async"),
        }
    }
}
