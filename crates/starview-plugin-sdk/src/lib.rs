//! Starview Plugin SDK
//!
//! The shared ABI contract between the Starview host and independently
//! compiled native plugins. Plugins link this crate to export a descriptor
//! the host can negotiate against, plus whichever optional capability
//! symbols their category defines.
//!
//! # Quick Start
//!
//! ```rust
//! use starview_plugin_sdk::prelude::*;
//!
//! declare_plugin!(PluginCategory::Scripting);
//!
//! #[no_mangle]
//! pub extern "C" fn starview_create_script_environment(
//!     _app: *mut AppCore,
//!     _config: *const HostConfig,
//!     _notifier: *mut ProgressNotifier,
//! ) -> bool {
//!     true
//! }
//! ```

pub mod capabilities;
pub mod descriptor;
#[macro_use]
pub mod macros;

pub use capabilities::{
    CreateRendererFn, CreateScriptEnvironmentFn, CreateScriptFn, CreateScriptedOrbitFn,
    CreateScriptedRotationFn,
};
pub use descriptor::{
    PluginCategory, PluginDescriptor, PluginEntryFn, PLUGIN_API_VERSION, PLUGIN_ENTRY_SYMBOL,
};

/// Re-exports commonly used by plugin crates.
pub mod prelude {
    pub use crate::capabilities::opaque::{
        AppCore, HostConfig, Orbit, ParameterSet, ProgressNotifier, Renderer, RotationModel,
        Script,
    };
    pub use crate::capabilities::{
        CreateRendererFn, CreateScriptEnvironmentFn, CreateScriptFn, CreateScriptedOrbitFn,
        CreateScriptedRotationFn,
    };
    pub use crate::declare_plugin;
    pub use crate::descriptor::{
        PluginCategory, PluginDescriptor, PLUGIN_API_VERSION, PLUGIN_ENTRY_SYMBOL,
    };
}
