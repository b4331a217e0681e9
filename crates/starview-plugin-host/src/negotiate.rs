//! API version negotiation.
//!
//! Before any other plugin memory is touched, the host resolves the fixed
//! entry symbol, invokes it, and validates the returned descriptor against
//! the compiled-in [`PLUGIN_API_VERSION`]. The match is exact in both
//! directions: the descriptor and capability-table layouts are raw memory
//! contracts, so any version drift invalidates them.

use starview_plugin_sdk::{PluginEntryFn, PLUGIN_API_VERSION, PLUGIN_ENTRY_SYMBOL};

use crate::error::{PluginError, Result};
use crate::image::LibraryImage;

/// Descriptor fields copied out of plugin memory after a successful
/// negotiation. The category code is still unvalidated at this point; the
/// capability resolver rejects unknown codes.
#[derive(Debug, Clone, Copy)]
pub struct NegotiatedDescriptor {
    /// The plugin's declared API version (always equal to
    /// [`PLUGIN_API_VERSION`] on this type).
    pub api_version: u16,

    /// Raw category code from the descriptor.
    pub category_code: u16,
}

/// Resolve and invoke the entry symbol, then validate the descriptor.
///
/// Failure conditions, all terminal for this load attempt:
/// missing entry symbol, null descriptor pointer, or a version other than
/// the host's compiled-in constant.
pub fn negotiate(image: &dyn LibraryImage) -> Result<NegotiatedDescriptor> {
    let address = image
        .symbol(PLUGIN_ENTRY_SYMBOL)
        .ok_or(PluginError::EntrySymbolMissing(PLUGIN_ENTRY_SYMBOL))?;

    // SAFETY: the entry symbol's signature is fixed by the plugin ABI; a
    // plugin exporting it under any other signature is outside the trust
    // model, the same as any other ABI violation.
    let descriptor = unsafe {
        let entry = std::mem::transmute::<*const (), PluginEntryFn>(address);
        let ptr = entry();
        if ptr.is_null() {
            return Err(PluginError::InvalidDescriptor);
        }
        *ptr
    };

    if descriptor.api_version != PLUGIN_API_VERSION {
        return Err(PluginError::VersionMismatch {
            expected: PLUGIN_API_VERSION,
            found: descriptor.api_version,
        });
    }

    Ok(NegotiatedDescriptor {
        api_version: descriptor.api_version,
        category_code: descriptor.category,
    })
}
