//! Native image loader backed by `libloading`.
//!
//! `libloading` normalizes the two platform loading paths — `LoadLibraryW` /
//! `GetProcAddress` on Windows and `dlopen(RTLD_NOW)` / `dlsym` with
//! per-call `dlerror` retrieval elsewhere — to the single contract in
//! [`crate::image`].

use std::path::Path;

use libloading::Library;

use crate::error::{PluginError, Result};
use crate::image::{ImageLoader, LibraryImage, RawSymbol};

/// Loader for real shared libraries (.so, .dylib, .dll).
#[derive(Debug, Default)]
pub struct NativeLoader;

impl NativeLoader {
    /// Create a new native loader.
    pub fn new() -> Self {
        Self
    }
}

impl ImageLoader for NativeLoader {
    fn open(&self, path: &Path) -> Result<Box<dyn LibraryImage>> {
        let library = unsafe {
            Library::new(path).map_err(|e| PluginError::LoadFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?
        };

        Ok(Box::new(NativeImage { library }))
    }
}

/// A mapped shared library; the mapping is released when this is dropped.
struct NativeImage {
    library: Library,
}

impl LibraryImage for NativeImage {
    fn symbol(&self, name: &str) -> Option<RawSymbol> {
        unsafe {
            self.library
                .get::<RawSymbol>(name.as_bytes())
                .ok()
                .map(|sym| *sym)
        }
    }
}
