//! Plugin load error taxonomy.
//!
//! Every variant is fatal to the plugin it names and to nothing else: the
//! host logs the failure and continues with its remaining plugins. Absence
//! of an optional capability symbol is deliberately not represented here;
//! it is recorded as an empty slot in the capability table and surfaces as
//! the operation's negative result at dispatch time.

use std::path::PathBuf;

/// Result type for plugin operations.
pub type Result<T> = std::result::Result<T, PluginError>;

/// Errors raised while loading a plugin.
#[derive(Debug, thiserror::Error)]
pub enum PluginError {
    /// The shared library could not be mapped into the process.
    #[error("failed to load plugin library {path:?}: {reason}")]
    LoadFailed {
        /// Path of the library that failed to load.
        path: PathBuf,
        /// Platform diagnostic reported by the dynamic loader.
        reason: String,
    },

    /// The library does not export the plugin entry symbol.
    #[error("plugin does not export entry symbol `{0}`")]
    EntrySymbolMissing(&'static str),

    /// The entry symbol returned a null descriptor pointer.
    #[error("plugin entry symbol returned a null descriptor")]
    InvalidDescriptor,

    /// The plugin was built against a different API version.
    #[error("unsupported plugin API version {found:#06x} (host expects {expected:#06x})")]
    VersionMismatch {
        /// The host's compiled-in version constant.
        expected: u16,
        /// The version the plugin's descriptor declared.
        found: u16,
    },

    /// The descriptor carries a category code outside the closed set.
    #[error("unknown plugin category code {0}")]
    UnsupportedCategory(u16),

    /// No loaded plugin matches the given path.
    #[error("no plugin loaded from {0:?}")]
    NotLoaded(PathBuf),
}
