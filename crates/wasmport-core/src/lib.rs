//! Core types, errors, and configuration for wasmport.
//!
//! This crate provides the foundational types shared by the analyzer,
//! code generator, and plugin layers.
//!
//! # Architecture
//!
//! The core consists of:
//! - Domain types (`AssetReference`, `LoaderMode`)
//! - Error hierarchy with contextual information
//! - Plugin configuration with documented defaults

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod config;
mod error;
mod types;

pub use config::{PluginConfig, SyncOption, DEFAULT_INCLUDE};
pub use error::{Error, Result};
pub use types::{AssetReference, LoaderMode};
