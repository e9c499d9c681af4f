//! Entry-point registration and closed-name dispatch.
//!
//! The host reaches the bridge only through names registered here. The table
//! is statically enumerated, registered once at module initialization, and
//! deliberately has no fallback lookup: a name that was never registered is
//! an explicit error, never a silently resolved symbol.

use crate::bridge::{AbiVersion, LanguageBridge};
use crate::error::BridgeError;
use crate::handle::LanguageHandle;
use arbor_grammar::c_language;
use std::fmt;
use std::sync::OnceLock;

/// External name of the descriptor-exporting operation.
pub const DESCRIPTOR_ENTRY_POINT: &str = "languageDescriptor";

/// External name of the ABI-version-reporting operation.
pub const ABI_VERSION_ENTRY_POINT: &str = "languageAbiVersion";

/// Value produced by a registered operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryValue {
    Descriptor(LanguageHandle),
    AbiVersion(AbiVersion),
}

/// One name-to-operation binding published to the host.
#[derive(Clone, Copy)]
pub struct EntryPoint {
    name: &'static str,
    arity: u8,
    invoke: fn(&LanguageBridge) -> EntryValue,
}

impl EntryPoint {
    /// Stable external name the host calls this operation by.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Number of arguments the operation takes. Always zero for this module.
    pub fn arity(&self) -> u8 {
        self.arity
    }
}

fn export_descriptor(bridge: &LanguageBridge) -> EntryValue {
    EntryValue::Descriptor(bridge.descriptor())
}

fn report_abi_version(bridge: &LanguageBridge) -> EntryValue {
    EntryValue::AbiVersion(bridge.abi_version())
}

/// The operations this module publishes. Nothing else is callable.
static ENTRY_POINTS: [EntryPoint; 2] = [
    EntryPoint {
        name: DESCRIPTOR_ENTRY_POINT,
        arity: 0,
        invoke: export_descriptor,
    },
    EntryPoint {
        name: ABI_VERSION_ENTRY_POINT,
        arity: 0,
        invoke: report_abi_version,
    },
];

/// Closed table of registered operations over one bridge.
pub struct EntryTable {
    bridge: LanguageBridge,
    entries: &'static [EntryPoint],
}

impl EntryTable {
    /// Registers the module's two operations over `bridge`.
    ///
    /// Registration validates every binding before publishing any of them; a
    /// rejected binding fails the whole table and, at module initialization,
    /// the module load itself. Registration is never retried.
    pub fn register(bridge: LanguageBridge) -> Result<Self, BridgeError> {
        Self::register_entries(bridge, &ENTRY_POINTS)
    }

    fn register_entries(
        bridge: LanguageBridge,
        entries: &'static [EntryPoint],
    ) -> Result<Self, BridgeError> {
        for (index, entry) in entries.iter().enumerate() {
            if !is_external_name(entry.name) {
                return Err(BridgeError::MalformedEntryPoint {
                    name: entry.name.to_string(),
                });
            }
            if entry.arity != 0 {
                return Err(BridgeError::UnsupportedArity {
                    name: entry.name.to_string(),
                    arity: entry.arity,
                });
            }
            if entries[..index].iter().any(|prior| prior.name == entry.name) {
                return Err(BridgeError::DuplicateEntryPoint {
                    name: entry.name.to_string(),
                });
            }
        }
        log::debug!(
            "Entry-point registrar: published {} operations: {:?}",
            entries.len(),
            entries.iter().map(|entry| entry.name).collect::<Vec<_>>()
        );
        Ok(Self { bridge, entries })
    }

    /// Invokes the operation registered under `name`.
    ///
    /// Only registered names resolve. Anything else is
    /// [`BridgeError::UnknownEntryPoint`]; there is no fallback lookup.
    pub fn call(&self, name: &str) -> Result<EntryValue, BridgeError> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| (entry.invoke)(&self.bridge))
            .ok_or_else(|| BridgeError::UnknownEntryPoint {
                name: name.to_string(),
            })
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.name)
    }

    /// Number of registered operations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The bridge the table dispatches into.
    pub fn bridge(&self) -> &LanguageBridge {
        &self.bridge
    }
}

impl fmt::Debug for EntryTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntryTable")
            .field("entries", &self.names().collect::<Vec<_>>())
            .field("bridge", &self.bridge)
            .finish()
    }
}

fn is_external_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|byte| byte.is_ascii_alphanumeric() || byte == b'_')
}

static MODULE_TABLE: OnceLock<EntryTable> = OnceLock::new();

/// Registers the module's entry points over the statically linked C grammar.
///
/// Runs once per process; later calls return the already-registered table.
/// The host's loader invokes this when the module is loaded and treats an
/// error as fatal to the load.
pub fn initialize() -> Result<&'static EntryTable, BridgeError> {
    if let Some(table) = MODULE_TABLE.get() {
        return Ok(table);
    }
    let table = EntryTable::register(LanguageBridge::bind(&c_language()))?;
    // Two racing initializers both bind the same static descriptor, so the
    // table that loses the race is observably identical to the one kept.
    Ok(MODULE_TABLE.get_or_init(|| table))
}

fn module_table() -> &'static EntryTable {
    // The built-in table has static, distinct, zero-arity names, so
    // registration cannot be rejected; a failure here means the module itself
    // is malformed and loading must not proceed.
    initialize().expect("entry-point registration failed at module load")
}

/// Opaque handle wrapping the module's grammar descriptor.
///
/// Repeated calls return equal handles for the life of the process. An
/// absent handle means the grammar was misbuilt; the host checks before use.
pub fn language_descriptor() -> LanguageHandle {
    module_table().bridge().descriptor()
}

/// ABI version embedded in the module's grammar descriptor.
///
/// Constant for the life of the process;
/// [`ABI_VERSION_UNAVAILABLE`](crate::ABI_VERSION_UNAVAILABLE) when the
/// descriptor is absent.
pub fn language_abi_version() -> AbiVersion {
    module_table().bridge().abi_version()
}
