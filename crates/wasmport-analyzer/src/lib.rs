//! WebAssembly module introspection.
//!
//! Walks a binary module's import and export sections and produces a
//! structured description of its interface for code generation. Decoding
//! is delegated to `wasmparser`; no validation or interpretation of the
//! module happens here beyond the name listing the generator needs.

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod analyze;
mod header;
mod interface;

pub use analyze::analyze;
pub use header::{check_header, HeaderCheck, SUPPORTED_VERSION, WASM_MAGIC};
pub use interface::ModuleInterface;
