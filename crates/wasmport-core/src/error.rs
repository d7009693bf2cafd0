//! Error types for wasmport.
//!
//! This module provides the error hierarchy used across all crates in the
//! workspace. Three scopes exist: configuration errors (raised at plugin
//! construction, before any file is processed), file-scoped errors (abort
//! processing of a single module), and decoder errors (propagated from the
//! WebAssembly parser without reinterpretation).
//!
//! # Examples
//!
//! ```
//! use wasmport_core::{Error, Result};
//!
//! fn check_patterns(patterns: &[String]) -> Result<()> {
//!     if patterns.iter().any(String::is_empty) {
//!         return Err(Error::ConfigError {
//!             message: "glob pattern cannot be empty".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//!
//! let err = check_patterns(&[String::new()]).unwrap_err();
//! assert!(err.is_config_error());
//! ```

use thiserror::Error;

/// Main error type for wasmport.
///
/// All fallible operations in the workspace use this type, providing
/// consistent error handling across crates.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error.
    ///
    /// Raised at plugin construction when the configuration is invalid:
    /// a malformed include/exclude glob, or a `sync` option of an
    /// unsupported shape. Nothing is processed after this error.
    #[error("configuration error: {message}")]
    ConfigError {
        /// Description of the configuration problem
        message: String,
    },

    /// Unsupported WebAssembly binary format version.
    ///
    /// The binary carries the wasm magic number but declares a version
    /// other than 1. Processing of this file aborts; other files are
    /// unaffected.
    #[error("only binary format version 1 is supported, but {path} uses version {version}")]
    UnsupportedVersion {
        /// Path of the offending module
        path: String,
        /// Version field found in the binary header
        version: u32,
    },

    /// Malformed binary reported by the WebAssembly decoder.
    ///
    /// The decoder's error is carried as the source without translation;
    /// callers surface it as a build failure.
    #[error("failed to decode WebAssembly module")]
    DecodeError {
        /// Underlying decoder error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Template registration or rendering failure.
    #[error("failed to render template '{template}': {message}")]
    RenderError {
        /// Name of the template involved
        template: String,
        /// Description of the failure
        message: String,
    },

    /// Binary read failure.
    #[error("failed to read {path}")]
    IoError {
        /// Path that could not be read
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Returns `true` if this is a configuration error.
    ///
    /// # Examples
    ///
    /// ```
    /// use wasmport_core::Error;
    ///
    /// let err = Error::ConfigError {
    ///     message: "bad glob".to_string(),
    /// };
    /// assert!(err.is_config_error());
    /// ```
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::ConfigError { .. })
    }

    /// Returns `true` if this is an unsupported-version error.
    ///
    /// # Examples
    ///
    /// ```
    /// use wasmport_core::Error;
    ///
    /// let err = Error::UnsupportedVersion {
    ///     path: "lib/add.wasm".to_string(),
    ///     version: 2,
    /// };
    /// assert!(err.is_unsupported_version());
    /// ```
    #[must_use]
    pub const fn is_unsupported_version(&self) -> bool {
        matches!(self, Self::UnsupportedVersion { .. })
    }

    /// Returns `true` if this is a decoder error.
    #[must_use]
    pub const fn is_decode_error(&self) -> bool {
        matches!(self, Self::DecodeError { .. })
    }

    /// Returns `true` if this is a template rendering error.
    #[must_use]
    pub const fn is_render_error(&self) -> bool {
        matches!(self, Self::RenderError { .. })
    }

    /// Returns `true` if this is an I/O error.
    #[must_use]
    pub const fn is_io_error(&self) -> bool {
        matches!(self, Self::IoError { .. })
    }
}

/// Result type alias for wasmport operations.
///
/// # Examples
///
/// ```
/// use wasmport_core::{Error, Result};
///
/// fn parse_version(raw: u32) -> Result<u32> {
///     if raw == 1 {
///         Ok(raw)
///     } else {
///         Err(Error::UnsupportedVersion {
///             path: "module.wasm".to_string(),
///             version: raw,
///         })
///     }
/// }
///
/// assert!(parse_version(1).is_ok());
/// assert!(parse_version(2).is_err());
/// ```
pub type Result<T> = std::result::Result<T, Error>;
