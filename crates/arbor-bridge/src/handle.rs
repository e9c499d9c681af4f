//! Opaque handle crossing the host boundary.

use arbor_grammar::GrammarDescriptor;
use std::fmt;
use std::ptr::{self, NonNull};

/// Non-owning, opaque reference to the static grammar descriptor.
///
/// A handle carries the descriptor's identity and nothing else: it can be
/// copied, compared, and handed back across the boundary, but it exposes no
/// way to read, mutate, or free the referent. Two handles compare equal
/// exactly when they wrap the same descriptor address, and a handle wrapping
/// no descriptor is a well-defined value, not an error.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct LanguageHandle {
    raw: *const GrammarDescriptor,
}

impl LanguageHandle {
    /// The handle that wraps no descriptor.
    pub const ABSENT: Self = Self { raw: ptr::null() };

    pub(crate) fn wrap(descriptor: Option<NonNull<GrammarDescriptor>>) -> Self {
        match descriptor {
            Some(descriptor) => Self {
                raw: descriptor.as_ptr(),
            },
            None => Self::ABSENT,
        }
    }

    pub(crate) fn descriptor(&self) -> Option<NonNull<GrammarDescriptor>> {
        NonNull::new(self.raw.cast_mut())
    }

    /// Whether this handle wraps no descriptor.
    pub fn is_absent(&self) -> bool {
        self.raw.is_null()
    }

    /// Address of the wrapped descriptor, for handing across the C boundary.
    ///
    /// The referent must not be read, written, or freed through this value;
    /// it exists so a host can pass the descriptor on to the grammar library
    /// that understands it.
    pub fn as_raw(&self) -> *const GrammarDescriptor {
        self.raw
    }
}

// The referent is immutable and lives for the rest of the process, so a
// handle can move freely between threads.
unsafe impl Send for LanguageHandle {}
unsafe impl Sync for LanguageHandle {}

impl fmt::Debug for LanguageHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_absent() {
            f.write_str("LanguageHandle(absent)")
        } else {
            write!(f, "LanguageHandle({:p})", self.raw)
        }
    }
}
