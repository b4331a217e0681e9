//! The frozen plugin descriptor ABI.
//!
//! Every Starview plugin exports a single well-known entry symbol that returns
//! a pointer to a [`PluginDescriptor`]. The layout is a raw memory contract
//! between independently compiled binaries: it has no optional or extensible
//! fields, and any additive change requires bumping [`PLUGIN_API_VERSION`].

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Compiled-in plugin API version.
///
/// The host accepts a plugin only if its descriptor carries exactly this
/// value. There is no compatibility range: a drift in either direction
/// invalidates the assumed struct layouts and calling conventions.
pub const PLUGIN_API_VERSION: u16 = 0x0107;

/// Name of the entry symbol every plugin must export.
///
/// The symbol is an `extern "C"` function taking no arguments and returning
/// `*const PluginDescriptor` (see [`PluginEntryFn`]).
pub const PLUGIN_ENTRY_SYMBOL: &str = "starview_plugin_entry";

/// Descriptor exported by every plugin library.
///
/// Produced once by the entry symbol at load time and immutable thereafter.
/// The `category` field carries one of the [`category`] codes; an
/// unrecognized code causes the host to reject the whole plugin.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct PluginDescriptor {
    /// Plugin API version, compared bit-for-bit against [`PLUGIN_API_VERSION`].
    pub api_version: u16,

    /// Plugin category code (see [`category`]).
    pub category: u16,
}

/// Entry symbol signature.
pub type PluginEntryFn = unsafe extern "C" fn() -> *const PluginDescriptor;

/// Wire codes for the closed set of plugin categories.
pub mod category {
    /// Diagnostic/self-test plugin.
    pub const DIAGNOSTIC: u16 = 0;
    /// Scripting environment provider.
    pub const SCRIPTING: u16 = 1;
    /// Alternative renderer provider.
    pub const RENDERER_PROVIDER: u16 = 2;
}

/// The closed set of plugin categories understood by the host.
///
/// Each category defines a fixed list of optional capability symbols the host
/// probes for after version negotiation. A descriptor carrying a code outside
/// this set is rejected outright, because the host cannot know what contract,
/// if any, the plugin intends to honor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PluginCategory {
    /// Diagnostic plugin; defines no capability symbols.
    Diagnostic,
    /// Scripting plugin: script environments, scripted rotations and orbits.
    Scripting,
    /// Renderer provider plugin.
    RendererProvider,
}

impl PluginCategory {
    /// Map a descriptor category code to a known category.
    pub fn from_code(code: u16) -> Option<Self> {
        match code {
            category::DIAGNOSTIC => Some(PluginCategory::Diagnostic),
            category::SCRIPTING => Some(PluginCategory::Scripting),
            category::RENDERER_PROVIDER => Some(PluginCategory::RendererProvider),
            _ => None,
        }
    }

    /// The wire code for this category.
    pub const fn code(&self) -> u16 {
        match self {
            PluginCategory::Diagnostic => category::DIAGNOSTIC,
            PluginCategory::Scripting => category::SCRIPTING,
            PluginCategory::RendererProvider => category::RENDERER_PROVIDER,
        }
    }

    /// String representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            PluginCategory::Diagnostic => "diagnostic",
            PluginCategory::Scripting => "scripting",
            PluginCategory::RendererProvider => "renderer_provider",
        }
    }
}

impl Display for PluginCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
