//! The structured import/export surface of a module.

use indexmap::IndexMap;
use serde::Serialize;

/// Import and export surface of a WebAssembly module.
///
/// `imports` maps each originating module name to the names imported from
/// it, in declaration order; the map itself iterates in first-seen module
/// order. `exports` lists exported names in declaration order. Both
/// orderings are load-bearing: the generator preserves them so identical
/// input bytes always produce identical output text.
///
/// Built once per analyzed binary and not mutated afterwards.
///
/// # Examples
///
/// ```
/// use wasmport_analyzer::ModuleInterface;
///
/// let mut interface = ModuleInterface::new();
/// interface.record_import("env", "log");
/// interface.record_export("add");
///
/// assert_eq!(interface.import_count(), 1);
/// assert_eq!(interface.exports(), ["add"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModuleInterface {
    /// Imported names grouped by originating module, first-seen order.
    imports: IndexMap<String, Vec<String>>,
    /// Exported names in declaration order.
    exports: Vec<String>,
}

impl ModuleInterface {
    /// Creates an empty interface description.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an imported name under its originating module, creating
    /// the module key on first occurrence.
    pub fn record_import(&mut self, module: impl Into<String>, name: impl Into<String>) {
        self.imports.entry(module.into()).or_default().push(name.into());
    }

    /// Appends an exported name in declaration order.
    pub fn record_export(&mut self, name: impl Into<String>) {
        self.exports.push(name.into());
    }

    /// Imported names grouped by module, in first-seen module order.
    #[inline]
    #[must_use]
    pub const fn imports(&self) -> &IndexMap<String, Vec<String>> {
        &self.imports
    }

    /// Exported names in declaration order.
    #[inline]
    #[must_use]
    pub fn exports(&self) -> &[String] {
        &self.exports
    }

    /// Number of distinct modules imported from.
    #[inline]
    #[must_use]
    pub fn import_count(&self) -> usize {
        self.imports.len()
    }

    /// Number of exported names.
    #[inline]
    #[must_use]
    pub fn export_count(&self) -> usize {
        self.exports.len()
    }

    /// Returns `true` when the module neither imports nor exports.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.imports.is_empty() && self.exports.is_empty()
    }
}
