//! Raw descriptor layout shared between the provider and the bridge.

use std::ptr::NonNull;

/// A compiled grammar descriptor owned by the external grammar library.
///
/// Values of this type are never constructed in Rust. They exist only behind
/// pointers reported by a [`GrammarProvider`](crate::GrammarProvider), stay at
/// the same address for the rest of the process, and are never mutated or
/// freed. The internal parse tables are opaque; their layout is identified by
/// the version field in the leading [`DescriptorHeader`] and is otherwise
/// none of this crate's business.
#[repr(C)]
pub struct GrammarDescriptor {
    _opaque: [u8; 0],
}

/// Leading bytes of every compiled grammar descriptor.
///
/// The grammar toolchain emits the ABI version as the first field of the
/// descriptor, so it can be read without knowing anything else about the
/// layout that follows. This header is the entire layout contract between the
/// provider and the bridge.
#[repr(C)]
pub struct DescriptorHeader {
    /// Binary-layout revision of the parse tables that follow the header.
    pub abi_version: u32,
}

impl DescriptorHeader {
    /// Views a process-static header as a full descriptor reference.
    ///
    /// This is how synthetic descriptors are built in tests: a `static`
    /// header satisfies the same immutable-for-the-process contract as a
    /// descriptor emitted by the grammar toolchain.
    pub fn as_descriptor(&'static self) -> NonNull<GrammarDescriptor> {
        NonNull::from(self).cast()
    }
}

/// Reads the ABI version embedded at the head of `descriptor`.
///
/// Constant-time: a single field read at offset zero, independent of the
/// descriptor's internal tables.
pub fn descriptor_abi_version(descriptor: NonNull<GrammarDescriptor>) -> u32 {
    // Descriptor references only originate from a provider or from a static
    // header, so the referent is immutable, lives for the rest of the
    // process, and starts with a DescriptorHeader.
    unsafe { descriptor.cast::<DescriptorHeader>().as_ref() }.abi_version
}
