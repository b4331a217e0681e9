//! Dispatcher forwarding tests.
//!
//! Verifies that a present capability slot forwards arguments unchanged and
//! returns the plugin's value unmodified, and that absent slots never reach
//! foreign code. The "plugin" here is a set of in-process `extern "C"`
//! functions that record what they receive.

use std::ffi::CString;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use starview_plugin_host::fake::{FakeImageSpec, FakeLoader};
use starview_plugin_host::{
    PluginDescriptor, PluginHandle, RawSymbol, PLUGIN_API_VERSION, PLUGIN_ENTRY_SYMBOL,
};
use starview_plugin_sdk::capabilities::{renderer, scripting};
use starview_plugin_sdk::prelude::*;

static ENV_CALLS: AtomicUsize = AtomicUsize::new(0);
static SEEN_APP: AtomicUsize = AtomicUsize::new(0);
static SEEN_MODULE: AtomicUsize = AtomicUsize::new(0);
static SEEN_FUNCTION: AtomicUsize = AtomicUsize::new(0);
static SEEN_PARAMETERS: AtomicUsize = AtomicUsize::new(0);

const ROTATION_SENTINEL: usize = 0x5eed;
const RENDERER_SENTINEL: usize = 0xbeef;

extern "C" fn scripting_entry() -> *const PluginDescriptor {
    static DESCRIPTOR: PluginDescriptor = PluginDescriptor {
        api_version: PLUGIN_API_VERSION,
        category: 1,
    };
    &DESCRIPTOR
}

extern "C" fn renderer_entry() -> *const PluginDescriptor {
    static DESCRIPTOR: PluginDescriptor = PluginDescriptor {
        api_version: PLUGIN_API_VERSION,
        category: 2,
    };
    &DESCRIPTOR
}

extern "C" fn record_environment(
    app: *mut AppCore,
    _config: *const HostConfig,
    _notifier: *mut ProgressNotifier,
) -> bool {
    ENV_CALLS.fetch_add(1, Ordering::SeqCst);
    SEEN_APP.store(app as usize, Ordering::SeqCst);
    true
}

extern "C" fn record_rotation(
    module: *const std::os::raw::c_char,
    function: *const std::os::raw::c_char,
    parameters: *mut ParameterSet,
) -> *mut RotationModel {
    SEEN_MODULE.store(module as usize, Ordering::SeqCst);
    SEEN_FUNCTION.store(function as usize, Ordering::SeqCst);
    SEEN_PARAMETERS.store(parameters as usize, Ordering::SeqCst);
    ROTATION_SENTINEL as *mut RotationModel
}

extern "C" fn make_renderer() -> *mut Renderer {
    RENDERER_SENTINEL as *mut Renderer
}

fn load_scripting_plugin() -> PluginHandle {
    let loader = FakeLoader::new();
    loader.register(
        "scripting.so",
        FakeImageSpec::new()
            .with_symbol(PLUGIN_ENTRY_SYMBOL, scripting_entry as RawSymbol)
            .with_symbol(
                scripting::CREATE_SCRIPT_ENVIRONMENT,
                record_environment as RawSymbol,
            )
            .with_symbol(
                scripting::CREATE_SCRIPTED_ROTATION,
                record_rotation as RawSymbol,
            ),
    );
    PluginHandle::load(&loader, Path::new("scripting.so")).unwrap()
}

#[test]
fn test_script_environment_forwards_arguments() {
    let handle = load_scripting_plugin();

    let app = 0x1000 as *mut AppCore;
    let ok = unsafe {
        handle.create_script_environment(app, std::ptr::null(), std::ptr::null_mut())
    };

    assert!(ok);
    assert_eq!(ENV_CALLS.load(Ordering::SeqCst), 1);
    assert_eq!(SEEN_APP.load(Ordering::SeqCst), 0x1000);
}

#[test]
fn test_scripted_rotation_round_trip() {
    let handle = load_scripting_plugin();

    let module = CString::new("orbits").unwrap();
    let function = CString::new("spin").unwrap();
    let parameters = 0x2000 as *mut ParameterSet;

    let rotation = unsafe {
        handle.create_scripted_rotation(module.as_ptr(), function.as_ptr(), parameters)
    };

    assert_eq!(rotation as usize, ROTATION_SENTINEL);
    assert_eq!(SEEN_MODULE.load(Ordering::SeqCst), module.as_ptr() as usize);
    assert_eq!(
        SEEN_FUNCTION.load(Ordering::SeqCst),
        function.as_ptr() as usize
    );
    assert_eq!(SEEN_PARAMETERS.load(Ordering::SeqCst), 0x2000);
}

#[test]
fn test_absent_slots_return_negative_results() {
    let handle = load_scripting_plugin();

    // Not exported by this plugin.
    let script = unsafe { handle.create_script(std::ptr::null_mut()) };
    assert!(script.is_null());

    let orbit = unsafe {
        handle.create_scripted_orbit(std::ptr::null(), std::ptr::null(), std::ptr::null_mut())
    };
    assert!(orbit.is_null());

    // Wrong category entirely.
    let r = unsafe { handle.create_renderer() };
    assert!(r.is_null());
}

#[test]
fn test_renderer_provider_dispatch() {
    let loader = FakeLoader::new();
    loader.register(
        "renderer.so",
        FakeImageSpec::new()
            .with_symbol(PLUGIN_ENTRY_SYMBOL, renderer_entry as RawSymbol)
            .with_symbol(renderer::CREATE_RENDERER, make_renderer as RawSymbol),
    );
    let handle = PluginHandle::load(&loader, Path::new("renderer.so")).unwrap();

    let r = unsafe { handle.create_renderer() };
    assert_eq!(r as usize, RENDERER_SENTINEL);

    // Scripting calls on a renderer plugin are absent, not errors.
    let ok = unsafe {
        handle.create_script_environment(
            std::ptr::null_mut(),
            std::ptr::null(),
            std::ptr::null_mut(),
        )
    };
    assert!(!ok);
}
