//! In-memory image loader for tests.
//!
//! Stands in for the platform loader so tests can exercise the full load
//! pipeline — including open failures, missing symbols, and release
//! accounting — without building real shared libraries. Symbols are
//! registered as raw addresses, typically of in-process `extern "C"`
//! functions.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::error::{PluginError, Result};
use crate::image::{ImageLoader, LibraryImage, RawSymbol};

/// Counts image opens and releases across a [`FakeLoader`]'s lifetime.
#[derive(Debug, Default)]
pub struct LoadCounters {
    opens: AtomicUsize,
    closes: AtomicUsize,
}

impl LoadCounters {
    /// Number of successful opens so far.
    pub fn opens(&self) -> usize {
        self.opens.load(Ordering::SeqCst)
    }

    /// Number of image releases so far.
    pub fn closes(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }
}

/// Symbol table for one registered fake image.
#[derive(Debug, Clone, Default)]
pub struct FakeImageSpec {
    // Addresses are stored as usize so the spec stays Send.
    symbols: HashMap<String, usize>,
}

impl FakeImageSpec {
    /// Create an image spec with no exported symbols.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an exported symbol at the given address.
    pub fn with_symbol(mut self, name: impl Into<String>, address: RawSymbol) -> Self {
        self.symbols.insert(name.into(), address as usize);
        self
    }
}

/// Loader over a map of registered in-memory images.
#[derive(Debug, Default)]
pub struct FakeLoader {
    images: Mutex<HashMap<PathBuf, FakeImageSpec>>,
    counters: Arc<LoadCounters>,
}

impl FakeLoader {
    /// Create an empty fake loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an image that [`ImageLoader::open`] will hand out for `path`.
    pub fn register(&self, path: impl Into<PathBuf>, spec: FakeImageSpec) {
        self.images
            .lock()
            .expect("fake loader image map poisoned")
            .insert(path.into(), spec);
    }

    /// Handle to the open/close counters, valid across moves of the loader.
    pub fn counters(&self) -> Arc<LoadCounters> {
        Arc::clone(&self.counters)
    }
}

impl ImageLoader for FakeLoader {
    fn open(&self, path: &Path) -> Result<Box<dyn LibraryImage>> {
        let spec = self
            .images
            .lock()
            .expect("fake loader image map poisoned")
            .get(path)
            .cloned()
            .ok_or_else(|| PluginError::LoadFailed {
                path: path.to_path_buf(),
                reason: "no such image registered".to_string(),
            })?;

        self.counters.opens.fetch_add(1, Ordering::SeqCst);

        Ok(Box::new(FakeImage {
            symbols: spec.symbols,
            counters: Arc::clone(&self.counters),
        }))
    }
}

struct FakeImage {
    symbols: HashMap<String, usize>,
    counters: Arc<LoadCounters>,
}

impl LibraryImage for FakeImage {
    fn symbol(&self, name: &str) -> Option<RawSymbol> {
        self.symbols.get(name).map(|&addr| addr as RawSymbol)
    }
}

impl Drop for FakeImage {
    fn drop(&mut self) {
        self.counters.closes.fetch_add(1, Ordering::SeqCst);
    }
}
