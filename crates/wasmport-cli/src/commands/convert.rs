//! `wasmport convert` - generate an ES module loader for a `.wasm` file.

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use wasmport_core::{AssetReference, PluginConfig, SyncOption};
use wasmport_plugin::{BundlerHost, WasmPlugin};

/// Host backed by the local filesystem.
///
/// Emitted assets land in a directory as `<output stem>.wasm`; the
/// returned token is the bare file name, which the default loader
/// resolves relative to the generated module's own URL.
#[derive(Debug)]
struct FileSystemHost {
    asset_dir: PathBuf,
    asset_name: String,
    emitted: Vec<PathBuf>,
}

impl FileSystemHost {
    fn new(asset_dir: PathBuf, asset_name: String) -> Self {
        Self {
            asset_dir,
            asset_name,
            emitted: Vec::new(),
        }
    }
}

impl BundlerHost for FileSystemHost {
    fn emit_asset(
        &mut self,
        _file_name: &str,
        bytes: &[u8],
    ) -> wasmport_core::Result<AssetReference> {
        let path = self.asset_dir.join(&self.asset_name);
        std::fs::write(&path, bytes).map_err(|e| wasmport_core::Error::IoError {
            path: path.display().to_string(),
            source: e,
        })?;
        self.emitted.push(path);
        Ok(AssetReference::new(self.asset_name.clone()))
    }

    fn warn(&mut self, message: &str) {
        tracing::warn!("{message}");
    }
}

/// Runs the convert command.
pub async fn run(
    file: &Path,
    output: Option<PathBuf>,
    sync: bool,
    asset_dir: Option<PathBuf>,
) -> Result<()> {
    let output = output.unwrap_or_else(|| file.with_extension("js"));
    let asset_dir = asset_dir
        .or_else(|| output.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));

    let stem = output
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("module");
    let asset_name = format!("{stem}.wasm");

    let config = PluginConfig {
        // The file was named explicitly; no pattern gate.
        include: Vec::new(),
        sync: SyncOption::All(sync),
        ..PluginConfig::default()
    };
    let plugin = WasmPlugin::new(&config)?;
    let mut host = FileSystemHost::new(asset_dir, asset_name);

    let Some(source) = plugin.load(&mut host, file).await? else {
        bail!("{} is not a WebAssembly module", file.display());
    };

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }
    tokio::fs::write(&output, source)
        .await
        .with_context(|| format!("failed to write {}", output.display()))?;

    println!("wrote {}", output.display());
    for asset in &host.emitted {
        println!("wrote {}", asset.display());
    }

    Ok(())
}
