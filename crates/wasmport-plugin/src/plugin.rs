//! The plugin itself: configuration compilation and the load pipeline.

use crate::filter::{FileFilter, SyncPredicate};
use crate::host::BundlerHost;
use std::path::Path;
use wasmport_analyzer::{analyze, check_header, HeaderCheck};
use wasmport_codegen::{LoaderGenerator, LoaderPayload};
use wasmport_core::{Error, LoaderMode, PluginConfig, Result};

/// Advisory file name passed to the host when emitting a binary asset.
pub const DEFAULT_ASSET_NAME: &str = "module.wasm";

/// Warning reported when a filtered-in file is not a WebAssembly module.
pub const NOT_WASM_WARNING: &str = "Not a WebAssembly module. Either your include pattern is \
     too liberal or the module was not generated properly.";

/// The WebAssembly-to-ES-module plugin.
///
/// Construction compiles the configuration (include/exclude globs and
/// the sync predicate) so every configuration error surfaces before any
/// file is processed. After construction the plugin is immutable; each
/// conversion is independent and callers may run them in parallel.
///
/// # Examples
///
/// ```
/// use wasmport_core::PluginConfig;
/// use wasmport_plugin::WasmPlugin;
///
/// let plugin = WasmPlugin::new(&PluginConfig::default()).unwrap();
/// assert!(plugin.handles("pkg/lib.wasm"));
/// assert!(!plugin.handles("pkg/lib.js"));
/// ```
#[derive(Debug)]
pub struct WasmPlugin {
    filter: FileFilter,
    sync: SyncPredicate,
    generator: LoaderGenerator<'static>,
}

impl WasmPlugin {
    /// Builds a plugin from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] for malformed globs or an invalid
    /// `sync` option; nothing is processed after a configuration error.
    pub fn new(config: &PluginConfig) -> Result<Self> {
        let filter = FileFilter::new(&config.include, &config.exclude)?;
        let sync = SyncPredicate::compile(&config.sync)?;
        let generator = LoaderGenerator::new()?;

        Ok(Self {
            filter,
            sync,
            generator,
        })
    }

    /// Returns `true` when the include/exclude filter selects this path.
    #[must_use]
    pub fn handles(&self, path: impl AsRef<Path>) -> bool {
        self.filter.matches(path)
    }

    /// The loading strategy the sync predicate assigns to this path.
    #[must_use]
    pub fn mode_for(&self, path: impl AsRef<Path>) -> LoaderMode {
        self.sync.mode_for(path)
    }

    /// Loads and converts one file.
    ///
    /// Returns `Ok(None)` when the file is not applicable: filtered out,
    /// or lacking the WebAssembly magic (the latter also warns through
    /// the host, so an over-liberal include pattern is visible).
    ///
    /// # Errors
    ///
    /// - [`Error::IoError`] when the file cannot be read.
    /// - [`Error::UnsupportedVersion`] for a wasm binary of a version
    ///   other than 1 (file-scoped; other files are unaffected).
    /// - [`Error::DecodeError`] when the decoder rejects the binary.
    pub async fn load(
        &self,
        host: &mut dyn BundlerHost,
        path: impl AsRef<Path> + Send,
    ) -> Result<Option<String>> {
        let path = path.as_ref();
        if !self.handles(path) {
            return Ok(None);
        }

        let bytes = tokio::fs::read(path).await.map_err(|e| Error::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        self.transform(host, path, &bytes)
    }

    /// Converts already-read bytes into ES module source.
    ///
    /// Same contract as [`WasmPlugin::load`] minus the filter and the
    /// read; exposed for hosts that own file I/O themselves.
    ///
    /// # Errors
    ///
    /// See [`WasmPlugin::load`].
    pub fn transform(
        &self,
        host: &mut dyn BundlerHost,
        path: &Path,
        bytes: &[u8],
    ) -> Result<Option<String>> {
        match check_header(bytes) {
            HeaderCheck::NotWasm => {
                tracing::warn!(path = %path.display(), "skipping non-wasm input");
                host.warn(NOT_WASM_WARNING);
                return Ok(None);
            }
            HeaderCheck::UnsupportedVersion(version) => {
                return Err(Error::UnsupportedVersion {
                    path: path.display().to_string(),
                    version,
                });
            }
            HeaderCheck::Valid => {}
        }

        let interface = analyze(bytes)?;
        let mode = self.sync.mode_for(path);
        tracing::debug!(path = %path.display(), %mode, "converting module");

        let source = match mode {
            LoaderMode::Sync => self
                .generator
                .generate(&interface, &LoaderPayload::Embedded(bytes))?,
            LoaderMode::Async => {
                let asset = host.emit_asset(DEFAULT_ASSET_NAME, bytes)?;
                self.generator
                    .generate(&interface, &LoaderPayload::Asset(&asset))?
            }
        };

        Ok(Some(source))
    }
}
