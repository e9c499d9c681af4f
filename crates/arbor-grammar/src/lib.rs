//! Grammar descriptor provider seam for the Arbor embedding bridge.
//!
//! This crate is responsible for:
//! - Naming the opaque, externally owned grammar descriptor type
//! - Pinning down the one piece of descriptor layout the bridge relies on,
//!   the ABI-version header at structural offset zero
//! - Wrapping the external descriptor-reporting function in a
//!   [`GrammarProvider`] value, including the misbuilt case where no
//!   descriptor exists
//! - Binding the statically linked C grammar as the production provider
//!
//! Everything behind the seam belongs to the external grammar library: the
//! descriptor's parse tables are never interpreted here, and descriptor
//! memory is never owned, mutated, or freed here.

mod descriptor;
mod provider;

pub use descriptor::{descriptor_abi_version, DescriptorHeader, GrammarDescriptor};
pub use provider::{c_language, GrammarProvider, RawGrammarFn};
