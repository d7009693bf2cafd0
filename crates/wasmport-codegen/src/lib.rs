//! ES-module loader generation.
//!
//! Turns the import/export surface of a WebAssembly module into the
//! source text of an ES module that instantiates it, either eagerly
//! from an inline base64 payload or asynchronously from an emitted
//! asset via streaming instantiation. Rendering goes through Handlebars
//! templates with named slots so each piece of the output is testable
//! on its own.

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod js;
mod generator;
mod template_engine;

pub use generator::{AssetUrlStyle, LoaderGenerator, LoaderPayload};
pub use template_engine::TemplateEngine;
