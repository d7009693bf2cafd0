//! Single-pass interface extraction.

use crate::interface::ModuleInterface;
use wasmport_core::{Error, Result};
use wasmparser::{Parser, Payload};

/// Extracts the import/export surface of a WebAssembly binary.
///
/// Walks the decoded module once, recording every import under its
/// originating module name and every export in declaration order. This is
/// a pure function of the input bytes: no validation beyond what the
/// decoder itself performs, no side effects.
///
/// # Errors
///
/// Returns [`Error::DecodeError`] when the decoder rejects the binary as
/// malformed; the decoder's error is carried as the source without
/// reinterpretation.
///
/// # Examples
///
/// ```
/// use wasmport_analyzer::analyze;
///
/// let wasm = wat::parse_str(r#"
///     (module
///         (import "env" "log" (func (param i32)))
///         (func (export "add") (param i32 i32) (result i32)
///             local.get 0
///             local.get 1
///             i32.add))
/// "#).unwrap();
///
/// let interface = analyze(&wasm).unwrap();
/// assert_eq!(interface.imports()["env"], vec!["log"]);
/// assert_eq!(interface.exports(), ["add"]);
/// ```
pub fn analyze(bytes: &[u8]) -> Result<ModuleInterface> {
    let mut interface = ModuleInterface::new();

    for payload in Parser::new(0).parse_all(bytes) {
        match payload.map_err(decode_error)? {
            Payload::ImportSection(section) => {
                for entry in section.into_imports() {
                    let import = entry.map_err(decode_error)?;
                    interface.record_import(import.module, import.name);
                }
            }
            Payload::ExportSection(section) => {
                for entry in section {
                    let export = entry.map_err(decode_error)?;
                    interface.record_export(export.name);
                }
            }
            _ => {}
        }
    }

    tracing::debug!(
        import_modules = interface.import_count(),
        exports = interface.export_count(),
        "analyzed module interface"
    );

    Ok(interface)
}

fn decode_error(source: wasmparser::BinaryReaderError) -> Error {
    Error::DecodeError {
        source: Box::new(source),
    }
}
