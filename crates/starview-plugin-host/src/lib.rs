//! Runtime plugin loading and versioned-capability dispatch for Starview.
//!
//! The host discovers, validates, and calls into independently compiled
//! native modules without being recompiled. Loading a plugin runs a fixed
//! pipeline:
//!
//! 1. **Open** — map the shared library ([`image::ImageLoader`]).
//! 2. **Negotiate** — invoke the well-known entry symbol and require an
//!    exact API version match ([`negotiate`]).
//! 3. **Resolve** — probe the category's closed set of optional capability
//!    symbols into a typed table ([`capability`]).
//!
//! Success yields a move-only [`PluginHandle`] whose dispatch methods guard
//! every slot: an absent capability returns its defined negative result
//! instead of a foreign call. The loaded module is fully trusted; there is
//! no sandboxing, timeout, or cancellation.

pub mod capability;
pub mod error;
pub mod fake;
pub mod handle;
pub mod image;
pub mod native;
pub mod negotiate;
pub mod registry;

pub use capability::{CapabilityTable, RendererCapabilities, ScriptingCapabilities};
pub use error::{PluginError, Result};
pub use handle::PluginHandle;
pub use image::{ImageLoader, LibraryImage, RawSymbol};
pub use native::NativeLoader;
pub use negotiate::NegotiatedDescriptor;
pub use registry::{LoadedPluginInfo, PluginRegistry, RegistrySettings};

// The ABI surface plugins are built against.
pub use starview_plugin_sdk::{PluginCategory, PluginDescriptor, PLUGIN_API_VERSION, PLUGIN_ENTRY_SYMBOL};
