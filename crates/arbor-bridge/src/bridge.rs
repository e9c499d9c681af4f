//! The two operations: descriptor export and ABI version reporting.

use crate::handle::LanguageHandle;
use arbor_grammar::{descriptor_abi_version, GrammarProvider};

/// Host-native integer carrying a descriptor's embedded ABI version.
pub type AbiVersion = u64;

/// Reported when the bridge was bound without a descriptor.
///
/// Descriptors embed 32-bit versions, so the widened value can never collide
/// with this sentinel. The host checks for it before trusting the version.
pub const ABI_VERSION_UNAVAILABLE: AbiVersion = AbiVersion::MAX;

/// Bridge over one bound grammar descriptor.
///
/// Binding captures the provider's descriptor reference exactly once; both
/// operations afterwards are pure reads of that immutable state and are safe
/// to call concurrently from any number of threads.
#[derive(Debug, Clone, Copy)]
pub struct LanguageBridge {
    handle: LanguageHandle,
}

impl LanguageBridge {
    /// Captures the descriptor the provider currently reports.
    ///
    /// A provider without a descriptor is not an error here: the bridge binds
    /// an absent handle and leaves detection to the host.
    pub fn bind(provider: &GrammarProvider) -> Self {
        let handle = LanguageHandle::wrap(provider.descriptor());
        if handle.is_absent() {
            log::warn!("Language bridge: provider reports no grammar descriptor");
        } else {
            log::debug!("Language bridge: bound grammar descriptor at {:p}", handle.as_raw());
        }
        Self { handle }
    }

    /// The bound descriptor wrapped as an opaque handle.
    ///
    /// Never fails; an absent handle means the grammar is unavailable.
    pub fn descriptor(&self) -> LanguageHandle {
        self.handle
    }

    /// The descriptor's embedded ABI version, widened to host width.
    ///
    /// Returns [`ABI_VERSION_UNAVAILABLE`] instead of reading through an
    /// absent descriptor. No compatibility judgement is made here; whether
    /// the reported layout revision is supported is the host's decision.
    pub fn abi_version(&self) -> AbiVersion {
        match self.handle.descriptor() {
            Some(descriptor) => AbiVersion::from(descriptor_abi_version(descriptor)),
            None => ABI_VERSION_UNAVAILABLE,
        }
    }
}
