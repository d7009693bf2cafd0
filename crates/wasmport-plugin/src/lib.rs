//! Bundler-facing load pipeline.
//!
//! Wires the analyzer and code generator into the shape a host bundler
//! consumes: an include/exclude file filter, a per-file sync/async
//! decision, and a `load` operation that turns a `.wasm` path into ES
//! module source. The host itself (asset storage, diagnostics) sits
//! behind the [`BundlerHost`] trait.

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod filter;
mod host;
mod plugin;

pub use filter::{FileFilter, SyncPredicate};
pub use host::BundlerHost;
pub use plugin::{WasmPlugin, DEFAULT_ASSET_NAME, NOT_WASM_WARNING};
