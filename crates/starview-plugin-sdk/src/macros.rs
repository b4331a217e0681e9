//! Declarative macros for plugin authors.

/// Export the plugin entry symbol with a static descriptor.
///
/// Generates the `starview_plugin_entry` export the host resolves during
/// version negotiation. Capability symbols (for example
/// `starview_create_script_environment`) are exported separately by the
/// plugin as plain `#[no_mangle] extern "C"` functions; every one of them is
/// optional.
///
/// # Example
///
/// ```rust
/// use starview_plugin_sdk::prelude::*;
///
/// declare_plugin!(PluginCategory::Scripting);
/// ```
#[macro_export]
macro_rules! declare_plugin {
    ($category:expr) => {
        $crate::declare_plugin!($category, $crate::descriptor::PLUGIN_API_VERSION);
    };
    ($category:expr, $api_version:expr) => {
        /// Entry symbol resolved by the Starview host.
        #[no_mangle]
        pub extern "C" fn starview_plugin_entry() -> *const $crate::descriptor::PluginDescriptor {
            static DESCRIPTOR: $crate::descriptor::PluginDescriptor =
                $crate::descriptor::PluginDescriptor {
                    api_version: $api_version,
                    category: ($category).code(),
                };
            &DESCRIPTOR
        }
    };
}
