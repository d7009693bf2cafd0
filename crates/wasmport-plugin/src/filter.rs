//! Compiled file filters.
//!
//! Glob patterns from the configuration are compiled exactly once, at
//! plugin construction; afterwards every per-file decision is a matcher
//! lookup with no re-inspection of the configuration shape.

use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::Path;
use wasmport_core::{Error, LoaderMode, Result, SyncOption};

fn build_glob_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|e| Error::ConfigError {
            message: format!("invalid glob pattern '{pattern}': {e}"),
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|e| Error::ConfigError {
        message: format!("failed to compile glob patterns: {e}"),
    })
}

/// Include/exclude filter selecting which files the plugin processes.
///
/// An empty include list matches every path; exclusion always wins.
///
/// # Examples
///
/// ```
/// use wasmport_plugin::FileFilter;
///
/// let filter = FileFilter::new(
///     &["**/*.wasm".to_string()],
///     &["vendor/**".to_string()],
/// ).unwrap();
///
/// assert!(filter.matches("src/lib/add.wasm"));
/// assert!(!filter.matches("vendor/dep.wasm"));
/// assert!(!filter.matches("src/main.rs"));
/// ```
#[derive(Debug)]
pub struct FileFilter {
    include: GlobSet,
    include_all: bool,
    exclude: GlobSet,
}

impl FileFilter {
    /// Compiles include/exclude patterns into a filter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] for malformed glob patterns.
    pub fn new(include: &[String], exclude: &[String]) -> Result<Self> {
        Ok(Self {
            include: build_glob_set(include)?,
            include_all: include.is_empty(),
            exclude: build_glob_set(exclude)?,
        })
    }

    /// Returns `true` when the plugin should process this path.
    #[must_use]
    pub fn matches(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        (self.include_all || self.include.is_match(path)) && !self.exclude.is_match(path)
    }
}

/// Per-file loader-mode decision, compiled from [`SyncOption`] once.
///
/// # Examples
///
/// ```
/// use wasmport_core::{LoaderMode, SyncOption};
/// use wasmport_plugin::SyncPredicate;
///
/// let predicate = SyncPredicate::compile(
///     &SyncOption::Pattern("**/*.inline.wasm".to_string()),
/// ).unwrap();
///
/// assert_eq!(predicate.mode_for("ui/menu.inline.wasm"), LoaderMode::Sync);
/// assert_eq!(predicate.mode_for("ui/menu.wasm"), LoaderMode::Async);
/// ```
#[derive(Debug)]
pub struct SyncPredicate(Inner);

#[derive(Debug)]
enum Inner {
    Always(LoaderMode),
    Globs { include: GlobSet, exclude: GlobSet },
}

impl SyncPredicate {
    /// Compiles a `sync` option into a predicate.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] for malformed glob patterns.
    pub fn compile(option: &SyncOption) -> Result<Self> {
        let inner = match option {
            SyncOption::All(true) => Inner::Always(LoaderMode::Sync),
            SyncOption::All(false) => Inner::Always(LoaderMode::Async),
            SyncOption::Pattern(pattern) => Inner::Globs {
                include: build_glob_set(std::slice::from_ref(pattern))?,
                exclude: GlobSet::empty(),
            },
            SyncOption::Filtered { include, exclude } => Inner::Globs {
                include: build_glob_set(include)?,
                exclude: build_glob_set(exclude)?,
            },
        };
        Ok(Self(inner))
    }

    /// The loading strategy for one file.
    #[must_use]
    pub fn mode_for(&self, path: impl AsRef<Path>) -> LoaderMode {
        let path = path.as_ref();
        match &self.0 {
            Inner::Always(mode) => *mode,
            Inner::Globs { include, exclude } => {
                if include.is_match(path) && !exclude.is_match(path) {
                    LoaderMode::Sync
                } else {
                    LoaderMode::Async
                }
            }
        }
    }
}
