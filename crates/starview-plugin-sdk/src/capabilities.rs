//! Per-category capability symbol names and signatures.
//!
//! After version negotiation the host probes each of these exported names;
//! a missing symbol degrades the corresponding capability without failing the
//! load. The function signatures are part of the frozen ABI: changing any of
//! them requires bumping [`crate::PLUGIN_API_VERSION`].

use std::os::raw::c_char;

/// Opaque handles to host and plugin objects that cross the plugin boundary.
///
/// The host hands these out (or receives them) as raw pointers and never
/// inspects their contents; their internals belong to the renderer, texture
/// manager, console, and capture subsystems, which are out of scope here.
pub mod opaque {
    macro_rules! opaque_type {
        ($(#[$meta:meta])* $name:ident) => {
            $(#[$meta])*
            #[repr(C)]
            pub struct $name {
                _private: [u8; 0],
            }
        };
    }

    opaque_type!(
        /// The host application core.
        AppCore
    );
    opaque_type!(
        /// The host configuration object.
        HostConfig
    );
    opaque_type!(
        /// Progress reporting sink used during long-running initialization.
        ProgressNotifier
    );
    opaque_type!(
        /// A script instance created by a scripting plugin.
        Script
    );
    opaque_type!(
        /// A rotation model driven by plugin script code.
        RotationModel
    );
    opaque_type!(
        /// An orbit driven by plugin script code.
        Orbit
    );
    opaque_type!(
        /// A key/value parameter set passed through to script constructors.
        ParameterSet
    );
    opaque_type!(
        /// A renderer implementation supplied by a renderer-provider plugin.
        Renderer
    );
}

use opaque::{AppCore, HostConfig, Orbit, ParameterSet, ProgressNotifier, Renderer, RotationModel, Script};

/// Scripting capability symbol names.
pub mod scripting {
    /// Initializes the plugin's script environment inside the host.
    pub const CREATE_SCRIPT_ENVIRONMENT: &str = "starview_create_script_environment";
    /// Creates a script instance bound to the host core.
    pub const CREATE_SCRIPT: &str = "starview_create_script";
    /// Creates a rotation model backed by a named script function.
    pub const CREATE_SCRIPTED_ROTATION: &str = "starview_create_scripted_rotation";
    /// Creates an orbit backed by a named script function.
    pub const CREATE_SCRIPTED_ORBIT: &str = "starview_create_scripted_orbit";
}

/// Renderer-provider capability symbol names.
pub mod renderer {
    /// Creates the plugin's renderer implementation.
    pub const CREATE_RENDERER: &str = "starview_create_renderer";
}

/// `starview_create_script_environment` signature.
///
/// Returns `true` when the environment was set up successfully.
pub type CreateScriptEnvironmentFn = unsafe extern "C" fn(
    app: *mut AppCore,
    config: *const HostConfig,
    notifier: *mut ProgressNotifier,
) -> bool;

/// `starview_create_script` signature. Returns null on failure.
pub type CreateScriptFn = unsafe extern "C" fn(app: *mut AppCore) -> *mut Script;

/// `starview_create_scripted_rotation` signature.
///
/// `module` and `function` are NUL-terminated script entry point names.
/// Returns null on failure.
pub type CreateScriptedRotationFn = unsafe extern "C" fn(
    module: *const c_char,
    function: *const c_char,
    parameters: *mut ParameterSet,
) -> *mut RotationModel;

/// `starview_create_scripted_orbit` signature. Returns null on failure.
pub type CreateScriptedOrbitFn = unsafe extern "C" fn(
    module: *const c_char,
    function: *const c_char,
    parameters: *mut ParameterSet,
) -> *mut Orbit;

/// `starview_create_renderer` signature. Returns null on failure.
pub type CreateRendererFn = unsafe extern "C" fn() -> *mut Renderer;
