//! Per-category capability tables.
//!
//! Each category has one fixed table shape; every slot is an optional typed
//! function pointer. The resolver probes the category's closed symbol list
//! once and records what it finds. A tagged variant takes the place of
//! shared base classes here: host and plugin are compiled independently and
//! cannot safely share virtual-table layouts.

use starview_plugin_sdk::capabilities::{renderer, scripting};
use starview_plugin_sdk::{
    CreateRendererFn, CreateScriptEnvironmentFn, CreateScriptFn, CreateScriptedOrbitFn,
    CreateScriptedRotationFn, PluginCategory,
};

use crate::error::{PluginError, Result};
use crate::image::{LibraryImage, RawSymbol};

/// Resolved capability slots of a scripting plugin.
#[derive(Default)]
pub struct ScriptingCapabilities {
    pub create_script_environment: Option<CreateScriptEnvironmentFn>,
    pub create_script: Option<CreateScriptFn>,
    pub create_scripted_rotation: Option<CreateScriptedRotationFn>,
    pub create_scripted_orbit: Option<CreateScriptedOrbitFn>,
}

/// Resolved capability slots of a renderer-provider plugin.
#[derive(Default)]
pub struct RendererCapabilities {
    pub create_renderer: Option<CreateRendererFn>,
}

/// Capability table, tagged by the plugin's category.
///
/// Diagnostic plugins define no capability symbols; their table carries no
/// slots but still records the recognized category.
pub enum CapabilityTable {
    Diagnostic,
    Scripting(ScriptingCapabilities),
    RendererProvider(RendererCapabilities),
}

impl CapabilityTable {
    /// The category this table was resolved for.
    pub fn category(&self) -> PluginCategory {
        match self {
            CapabilityTable::Diagnostic => PluginCategory::Diagnostic,
            CapabilityTable::Scripting(_) => PluginCategory::Scripting,
            CapabilityTable::RendererProvider(_) => PluginCategory::RendererProvider,
        }
    }

    /// Scripting slots, if this is a scripting plugin's table.
    pub fn scripting(&self) -> Option<&ScriptingCapabilities> {
        match self {
            CapabilityTable::Scripting(caps) => Some(caps),
            _ => None,
        }
    }

    /// Renderer slots, if this is a renderer provider's table.
    pub fn renderer(&self) -> Option<&RendererCapabilities> {
        match self {
            CapabilityTable::RendererProvider(caps) => Some(caps),
            _ => None,
        }
    }
}

/// Probe one optional capability symbol and cast it to its typed slot.
///
/// # Safety
/// `F` must be the fn-pointer type the ABI assigns to `name`.
unsafe fn resolve_slot<F: Copy>(image: &dyn LibraryImage, name: &'static str) -> Option<F> {
    match image.symbol(name) {
        Some(address) => Some(std::mem::transmute_copy::<RawSymbol, F>(&address)),
        None => {
            tracing::debug!(symbol = name, "optional capability not exported");
            None
        }
    }
}

/// Resolve the capability table for a validated descriptor's category code.
///
/// An unrecognized code rejects the whole plugin; an absent optional symbol
/// only leaves its slot empty.
pub fn resolve(image: &dyn LibraryImage, category_code: u16) -> Result<CapabilityTable> {
    let category = PluginCategory::from_code(category_code)
        .ok_or(PluginError::UnsupportedCategory(category_code))?;

    let table = match category {
        PluginCategory::Diagnostic => CapabilityTable::Diagnostic,
        PluginCategory::Scripting => unsafe {
            CapabilityTable::Scripting(ScriptingCapabilities {
                create_script_environment: resolve_slot(image, scripting::CREATE_SCRIPT_ENVIRONMENT),
                create_script: resolve_slot(image, scripting::CREATE_SCRIPT),
                create_scripted_rotation: resolve_slot(image, scripting::CREATE_SCRIPTED_ROTATION),
                create_scripted_orbit: resolve_slot(image, scripting::CREATE_SCRIPTED_ORBIT),
            })
        },
        PluginCategory::RendererProvider => unsafe {
            CapabilityTable::RendererProvider(RendererCapabilities {
                create_renderer: resolve_slot(image, renderer::CREATE_RENDERER),
            })
        },
    };

    Ok(table)
}
