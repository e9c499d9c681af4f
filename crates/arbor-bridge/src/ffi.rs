//! C symbols exported to embedding hosts.
//!
//! Hosts that link symbols directly, rather than going through the registered
//! entry table, see the same two operations under the same external names.
//! Both symbols are zero-argument, read the same once-initialized module
//! state, and never unwind across the boundary.

use crate::bridge::AbiVersion;
use crate::registry;
use arbor_grammar::GrammarDescriptor;

/// C symbol `languageDescriptor`: address of the static grammar descriptor.
///
/// Null when the grammar provider reports no descriptor. The referent is
/// owned by the grammar library; callers must not free or mutate it.
#[export_name = "languageDescriptor"]
pub extern "C" fn language_descriptor() -> *const GrammarDescriptor {
    registry::language_descriptor().as_raw()
}

/// C symbol `languageAbiVersion`: the descriptor's embedded ABI version,
/// widened to 64 bits, or `u64::MAX` when the descriptor is absent.
#[export_name = "languageAbiVersion"]
pub extern "C" fn language_abi_version() -> AbiVersion {
    registry::language_abi_version()
}
