//! Provider handle over an externally owned grammar descriptor.

use crate::descriptor::GrammarDescriptor;
use std::ptr::NonNull;
use tree_sitter_language::LanguageFn;

/// Signature of the external function that reports a grammar descriptor.
///
/// Mirrors the C declaration `const TSLanguage *tree_sitter_<name>(void)`
/// emitted by the grammar toolchain.
pub type RawGrammarFn = unsafe extern "C" fn() -> *const ();

/// Handle over the external provider of a grammar descriptor.
///
/// The provider exclusively owns the descriptor memory; this handle only
/// reports its address. A provider may legitimately report no descriptor at
/// all, which is how a misbuilt grammar surfaces.
#[derive(Clone, Copy, Debug)]
pub struct GrammarProvider {
    fetch: Option<RawGrammarFn>,
}

impl GrammarProvider {
    /// Wraps a raw descriptor-reporting function.
    ///
    /// # Safety
    ///
    /// `fetch` must return either a null pointer or a pointer to memory that
    /// begins with a [`DescriptorHeader`](crate::DescriptorHeader), never
    /// moves or mutates, and is never freed for the rest of the process.
    pub const unsafe fn from_raw(fetch: RawGrammarFn) -> Self {
        Self { fetch: Some(fetch) }
    }

    /// Wraps the descriptor function published by a grammar crate.
    pub const fn from_language_fn(language: LanguageFn) -> Self {
        // LanguageFn construction already asserts the descriptor contract.
        Self {
            fetch: Some(language.into_raw()),
        }
    }

    /// A provider that reports no descriptor.
    pub const fn absent() -> Self {
        Self { fetch: None }
    }

    /// The descriptor the provider currently reports, if any.
    ///
    /// The same provider always reports the same address: the descriptor is
    /// compiled in and never relocated.
    pub fn descriptor(&self) -> Option<NonNull<GrammarDescriptor>> {
        let fetch = self.fetch?;
        let raw = unsafe { fetch() };
        NonNull::new(raw.cast_mut().cast::<GrammarDescriptor>())
    }
}

/// Provider backed by the statically linked C grammar.
pub const fn c_language() -> GrammarProvider {
    GrammarProvider::from_language_fn(tree_sitter_c::LANGUAGE)
}
