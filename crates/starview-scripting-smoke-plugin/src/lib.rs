//! Minimal scripting plugin for smoke-testing the host loader.
//!
//! Exports the entry symbol with the current API version and a single
//! scripting capability. Build as a `cdylib` and point the host's plugin
//! search path at the artifact to exercise the native loading path end to
//! end; the remaining scripting symbols are intentionally left unexported
//! so absent-capability dispatch is covered too.

use starview_plugin_sdk::prelude::*;

declare_plugin!(PluginCategory::Scripting);

/// Pretends to set up a script environment; always succeeds.
#[no_mangle]
pub extern "C" fn starview_create_script_environment(
    _app: *mut AppCore,
    _config: *const HostConfig,
    _notifier: *mut ProgressNotifier,
) -> bool {
    true
}
