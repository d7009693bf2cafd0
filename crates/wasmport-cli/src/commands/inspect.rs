//! `wasmport inspect` - print a module's import/export surface.

use crate::commands::OutputFormat;
use anyhow::{bail, Context, Result};
use std::path::Path;
use wasmport_analyzer::{analyze, check_header, HeaderCheck, ModuleInterface};

/// Runs the inspect command.
pub async fn run(file: &Path, format: OutputFormat) -> Result<()> {
    let bytes = tokio::fs::read(file)
        .await
        .with_context(|| format!("failed to read {}", file.display()))?;

    match check_header(&bytes) {
        HeaderCheck::NotWasm => bail!("{} is not a WebAssembly module", file.display()),
        HeaderCheck::UnsupportedVersion(version) => bail!(
            "only binary format version 1 is supported, but {} uses version {version}",
            file.display()
        ),
        HeaderCheck::Valid => {}
    }

    let interface = analyze(&bytes)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&interface)?),
        OutputFormat::Text => print_text(file, &interface),
    }

    Ok(())
}

fn print_text(file: &Path, interface: &ModuleInterface) {
    println!("{}", file.display());

    if interface.imports().is_empty() {
        println!("  imports: (none)");
    } else {
        println!("  imports:");
        for (module, names) in interface.imports() {
            println!("    {module}: {}", names.join(", "));
        }
    }

    if interface.exports().is_empty() {
        println!("  exports: (none)");
    } else {
        println!("  exports: {}", interface.exports().join(", "));
    }
}
