//! Owning handle for a loaded plugin.
//!
//! A `PluginHandle` exists only after the open, negotiate, and resolve
//! stages have all succeeded; any intermediate failure drops the opened
//! image on the way out. The handle is move-only — its single ownership of
//! the library image is what guarantees the image is released exactly once,
//! when the handle is dropped.

use std::fmt::{self, Display, Formatter};
use std::os::raw::c_char;
use std::path::{Path, PathBuf};

use starview_plugin_sdk::capabilities::opaque::{
    AppCore, HostConfig, Orbit, ParameterSet, ProgressNotifier, Renderer, RotationModel, Script,
};
use starview_plugin_sdk::PluginCategory;

use crate::capability::{self, CapabilityTable};
use crate::error::Result;
use crate::image::{ImageLoader, LibraryImage};
use crate::negotiate;

/// A loaded, negotiated, and capability-resolved plugin.
pub struct PluginHandle {
    /// The mapped library, kept alive so capability addresses stay valid.
    /// Released exactly once when the handle is dropped.
    _image: Box<dyn LibraryImage>,
    path: PathBuf,
    api_version: u16,
    capabilities: CapabilityTable,
}

impl PluginHandle {
    /// Run the full load pipeline: open, negotiate, resolve capabilities.
    ///
    /// On any failure the opened image (if any) is released before the
    /// error is returned; no partial registration occurs.
    pub fn load(loader: &dyn ImageLoader, path: &Path) -> Result<Self> {
        let image = loader.open(path)?;

        let descriptor = negotiate::negotiate(image.as_ref())?;
        let capabilities = capability::resolve(image.as_ref(), descriptor.category_code)?;

        tracing::info!(
            path = %path.display(),
            category = %capabilities.category(),
            api_version = descriptor.api_version,
            "loaded plugin"
        );

        Ok(Self {
            _image: image,
            path: path.to_path_buf(),
            api_version: descriptor.api_version,
            capabilities,
        })
    }

    /// Path the plugin was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The negotiated API version (always the host's compiled-in constant).
    pub fn api_version(&self) -> u16 {
        self.api_version
    }

    /// The plugin's validated category.
    pub fn category(&self) -> PluginCategory {
        self.capabilities.category()
    }

    /// The resolved capability table.
    pub fn capabilities(&self) -> &CapabilityTable {
        &self.capabilities
    }

    /// Whether the script-environment capability is available.
    pub fn has_script_environment(&self) -> bool {
        self.capabilities
            .scripting()
            .is_some_and(|caps| caps.create_script_environment.is_some())
    }

    /// Set up the plugin's script environment inside the host.
    ///
    /// Returns `false` without any foreign call when the capability is
    /// absent (including on non-scripting plugins).
    ///
    /// # Safety
    /// The pointers must be valid for the duration of the call; the foreign
    /// code is trusted and may block indefinitely.
    pub unsafe fn create_script_environment(
        &self,
        app: *mut AppCore,
        config: *const HostConfig,
        notifier: *mut ProgressNotifier,
    ) -> bool {
        match self
            .capabilities
            .scripting()
            .and_then(|caps| caps.create_script_environment)
        {
            Some(f) => f(app, config, notifier),
            None => false,
        }
    }

    /// Create a script instance. Null when the capability is absent.
    ///
    /// # Safety
    /// `app` must be a valid host core pointer.
    pub unsafe fn create_script(&self, app: *mut AppCore) -> *mut Script {
        match self.capabilities.scripting().and_then(|caps| caps.create_script) {
            Some(f) => f(app),
            None => std::ptr::null_mut(),
        }
    }

    /// Create a scripted rotation model. Null when the capability is absent.
    ///
    /// # Safety
    /// `module` and `function` must be valid NUL-terminated strings and
    /// `parameters` a valid parameter set for the duration of the call.
    pub unsafe fn create_scripted_rotation(
        &self,
        module: *const c_char,
        function: *const c_char,
        parameters: *mut ParameterSet,
    ) -> *mut RotationModel {
        match self
            .capabilities
            .scripting()
            .and_then(|caps| caps.create_scripted_rotation)
        {
            Some(f) => f(module, function, parameters),
            None => std::ptr::null_mut(),
        }
    }

    /// Create a scripted orbit. Null when the capability is absent.
    ///
    /// # Safety
    /// Same contract as [`Self::create_scripted_rotation`].
    pub unsafe fn create_scripted_orbit(
        &self,
        module: *const c_char,
        function: *const c_char,
        parameters: *mut ParameterSet,
    ) -> *mut Orbit {
        match self
            .capabilities
            .scripting()
            .and_then(|caps| caps.create_scripted_orbit)
        {
            Some(f) => f(module, function, parameters),
            None => std::ptr::null_mut(),
        }
    }

    /// Create the plugin's renderer. Null when the capability is absent.
    ///
    /// # Safety
    /// The returned renderer is owned by the caller and must not outlive
    /// this handle.
    pub unsafe fn create_renderer(&self) -> *mut Renderer {
        match self.capabilities.renderer().and_then(|caps| caps.create_renderer) {
            Some(f) => f(),
            None => std::ptr::null_mut(),
        }
    }

}

impl Display for PluginHandle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} plugin from {} (api {:#06x})",
            self.category(),
            self.path.display(),
            self.api_version
        )
    }
}
