//! Host bundler abstraction.

use wasmport_core::{AssetReference, Result};

/// The surface of a host bundler, as seen by the plugin.
///
/// The host is a black box: it stores binary blobs and hands back opaque
/// reference tokens, and it owns the build's diagnostics channel. How
/// either is implemented (in-memory asset graph, files on disk) is the
/// host's business.
///
/// # Examples
///
/// ```
/// use wasmport_core::{AssetReference, Result};
/// use wasmport_plugin::BundlerHost;
///
/// /// Host that numbers assets without storing them.
/// #[derive(Debug, Default)]
/// struct CountingHost(usize);
///
/// impl BundlerHost for CountingHost {
///     fn emit_asset(&mut self, _file_name: &str, _bytes: &[u8]) -> Result<AssetReference> {
///         self.0 += 1;
///         Ok(AssetReference::new(format!("asset-{}", self.0)))
///     }
///
///     fn warn(&mut self, _message: &str) {}
/// }
/// ```
pub trait BundlerHost {
    /// Stores a binary blob and returns an opaque reference token.
    ///
    /// Called once per module converted in async mode, before generation
    /// completes. `file_name` is advisory; hosts may rename.
    ///
    /// # Errors
    ///
    /// Hosts report their own storage failures.
    fn emit_asset(&mut self, file_name: &str, bytes: &[u8]) -> Result<AssetReference>;

    /// Reports a non-fatal diagnostic tied to the current build.
    fn warn(&mut self, message: &str);
}
