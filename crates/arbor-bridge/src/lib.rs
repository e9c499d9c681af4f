//! Host embedding bridge for a statically compiled grammar.
//!
//! This crate is responsible for:
//! - Wrapping the grammar provider's descriptor into an opaque, non-owning
//!   [`LanguageHandle`]
//! - Reporting the descriptor's embedded ABI version as a host-native integer
//! - Publishing exactly two named operations to the host through a closed
//!   [`EntryTable`], with no fallback symbol lookup
//! - Exporting the same two operations as C symbols for hosts that link
//!   directly
//!
//! The bridge only reports. It never parses, never interprets the
//! descriptor's tables, and never judges whether the host supports the
//! reported layout revision; compatibility policy stays on the host side.
//!
//! All state is captured once, before the first operation is reachable, and
//! is immutable afterwards, so every operation is safe to call concurrently
//! from any number of threads.

mod bridge;
mod error;
mod handle;
mod registry;

pub mod ffi;

pub use bridge::{AbiVersion, LanguageBridge, ABI_VERSION_UNAVAILABLE};
pub use error::BridgeError;
pub use handle::LanguageHandle;
pub use registry::{
    initialize, language_abi_version, language_descriptor, EntryPoint, EntryTable, EntryValue,
    ABI_VERSION_ENTRY_POINT, DESCRIPTOR_ENTRY_POINT,
};

pub use arbor_grammar::{GrammarDescriptor, GrammarProvider};
