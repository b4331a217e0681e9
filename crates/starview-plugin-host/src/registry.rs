//! Host-side plugin registry.
//!
//! Owns every loaded [`PluginHandle`] on the host's control thread. Loading
//! and unloading are not designed for concurrent use; dispatch into handles
//! happens through the registry's borrows with whatever external
//! synchronization the host supplies.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use starview_plugin_sdk::PluginCategory;

use crate::error::{PluginError, Result};
use crate::handle::PluginHandle;
use crate::image::ImageLoader;
use crate::native::NativeLoader;

/// Registry configuration, typically deserialized from the host config file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistrySettings {
    /// Directories scanned by [`PluginRegistry::discover`].
    #[serde(default)]
    pub search_paths: Vec<PathBuf>,
}

/// Serializable summary of a loaded plugin, for host status surfaces.
#[derive(Debug, Clone, Serialize)]
pub struct LoadedPluginInfo {
    /// Path the plugin was loaded from.
    pub path: PathBuf,
    /// Validated plugin category.
    pub category: PluginCategory,
    /// Negotiated API version.
    pub api_version: u16,
}

/// Registry of loaded plugins.
pub struct PluginRegistry {
    loader: Box<dyn ImageLoader>,
    search_paths: Vec<PathBuf>,
    plugins: Vec<PluginHandle>,
}

impl PluginRegistry {
    /// Create a registry backed by the native platform loader.
    pub fn new() -> Self {
        Self::with_loader(Box::new(NativeLoader::new()))
    }

    /// Create a registry with a custom image loader.
    pub fn with_loader(loader: Box<dyn ImageLoader>) -> Self {
        Self {
            loader,
            search_paths: Vec::new(),
            plugins: Vec::new(),
        }
    }

    /// Create a registry from settings, backed by the native loader.
    pub fn from_settings(settings: &RegistrySettings) -> Self {
        let mut registry = Self::new();
        registry.search_paths.clone_from(&settings.search_paths);
        registry
    }

    /// Add a directory to scan during [`Self::discover`].
    pub fn add_search_path(&mut self, path: impl AsRef<Path>) -> &mut Self {
        self.search_paths.push(path.as_ref().to_path_buf());
        self
    }

    /// Configured search paths.
    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    /// Load the plugin at `path` and register it.
    ///
    /// On failure nothing is registered and the registry is unchanged.
    pub fn load(&mut self, path: &Path) -> Result<&PluginHandle> {
        let handle = PluginHandle::load(self.loader.as_ref(), path)?;
        let index = self.plugins.len();
        self.plugins.push(handle);
        Ok(&self.plugins[index])
    }

    /// Scan the search paths and load every plugin candidate found.
    ///
    /// A file that fails to load is logged and skipped; the scan continues.
    /// Returns the number of plugins loaded by this call.
    pub fn discover(&mut self) -> usize {
        let mut candidates = Vec::new();

        for search_path in &self.search_paths {
            let Ok(entries) = std::fs::read_dir(search_path) else {
                tracing::warn!(path = %search_path.display(), "plugin search path unreadable");
                continue;
            };

            for entry in entries.flatten() {
                let path = entry.path();
                if is_plugin_library(&path) {
                    candidates.push(path);
                }
            }
        }

        let mut loaded = 0;
        for path in candidates {
            match self.load(&path) {
                Ok(_) => loaded += 1,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping plugin");
                }
            }
        }

        loaded
    }

    /// Unload the plugin loaded from `path`, releasing its library image.
    pub fn unload(&mut self, path: &Path) -> Result<()> {
        let index = self
            .plugins
            .iter()
            .position(|p| p.path() == path)
            .ok_or_else(|| PluginError::NotLoaded(path.to_path_buf()))?;

        let handle = self.plugins.remove(index);
        tracing::info!(path = %path.display(), category = %handle.category(), "unloading plugin");
        drop(handle);
        Ok(())
    }

    /// All loaded plugins.
    pub fn plugins(&self) -> &[PluginHandle] {
        &self.plugins
    }

    /// Number of loaded plugins.
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// Whether no plugins are loaded.
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// The first loaded plugin of the given category, if any.
    pub fn find_by_category(&self, category: PluginCategory) -> Option<&PluginHandle> {
        self.plugins.iter().find(|p| p.category() == category)
    }

    /// Summaries of every loaded plugin.
    pub fn list(&self) -> Vec<LoadedPluginInfo> {
        self.plugins
            .iter()
            .map(|p| LoadedPluginInfo {
                path: p.path().to_path_buf(),
                category: p.category(),
                api_version: p.api_version(),
            })
            .collect()
    }
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether a file carries this platform's shared-library extension.
fn is_plugin_library(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| ext == std::env::consts::DLL_EXTENSION)
}
