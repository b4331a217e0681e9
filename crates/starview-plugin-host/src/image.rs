//! Library image abstraction.
//!
//! Hides the platform divergence in dynamic-loading primitives behind one
//! `open`/`symbol`/close contract. The production implementation lives in
//! [`crate::native`]; [`crate::fake`] provides an in-memory implementation
//! for exercising error paths without real shared libraries.

use std::path::Path;

use crate::error::Result;

/// Raw address of a resolved symbol.
pub type RawSymbol = *const ();

/// An OS-level mapped shared library.
///
/// The mapping is released when the image is dropped. Each image has exactly
/// one owner at a time, so release happens at most once by construction.
pub trait LibraryImage: Send {
    /// Look up a named exported symbol.
    ///
    /// Returns `None` when the symbol is absent. Absence is not a failure:
    /// resolution of optional capabilities depends on it being non-fatal.
    fn symbol(&self, name: &str) -> Option<RawSymbol>;
}

/// Opens shared library images by path.
pub trait ImageLoader {
    /// Map the shared library at `path` into the process.
    ///
    /// Fails with [`crate::PluginError::LoadFailed`] on a missing file,
    /// format mismatch, or missing transitive dependencies, carrying the
    /// platform diagnostic.
    fn open(&self, path: &Path) -> Result<Box<dyn LibraryImage>>;
}
