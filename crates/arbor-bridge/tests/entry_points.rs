use arbor_bridge::{
    initialize, language_abi_version, language_descriptor, BridgeError, EntryTable, EntryValue,
    LanguageBridge, ABI_VERSION_ENTRY_POINT, ABI_VERSION_UNAVAILABLE, DESCRIPTOR_ENTRY_POINT,
};
use arbor_grammar::{DescriptorHeader, GrammarProvider};

// Helper to build a registered table over an arbitrary provider.
fn table_over(provider: &GrammarProvider) -> EntryTable {
    EntryTable::register(LanguageBridge::bind(provider)).expect("registration should succeed")
}

static VERSION_ZERO: DescriptorHeader = DescriptorHeader { abi_version: 0 };
static VERSION_MAX: DescriptorHeader = DescriptorHeader {
    abi_version: u32::MAX,
};
static VERSION_FOURTEEN: DescriptorHeader = DescriptorHeader { abi_version: 14 };

extern "C" fn version_zero_grammar() -> *const () {
    VERSION_ZERO.as_descriptor().as_ptr() as *const ()
}

extern "C" fn version_max_grammar() -> *const () {
    VERSION_MAX.as_descriptor().as_ptr() as *const ()
}

extern "C" fn version_fourteen_grammar() -> *const () {
    VERSION_FOURTEEN.as_descriptor().as_ptr() as *const ()
}

#[test]
fn module_initialization_publishes_exactly_two_operations() {
    let table = initialize().expect("module initialization should succeed");
    assert_eq!(table.len(), 2);
    assert_eq!(
        table.names().collect::<Vec<_>>(),
        vec![DESCRIPTOR_ENTRY_POINT, ABI_VERSION_ENTRY_POINT]
    );

    // Re-initialization returns the same table rather than registering again.
    let again = initialize().expect("repeated initialization should succeed");
    assert!(std::ptr::eq(table, again));
}

#[test]
fn repeated_exports_return_equal_handles() {
    let first = language_descriptor();
    let second = language_descriptor();
    assert_eq!(first, second);
    assert_eq!(first.as_raw(), second.as_raw());
    assert!(!first.is_absent());
}

#[test]
fn reported_version_is_constant_within_the_process() {
    let first = language_abi_version();
    for _ in 0..100 {
        assert_eq!(language_abi_version(), first);
    }
}

#[test]
fn reported_version_matches_the_embedding_library() {
    let language = tree_sitter::Language::new(tree_sitter_c::LANGUAGE);
    assert_eq!(language_abi_version(), language.abi_version() as u64);
}

#[test]
fn table_dispatch_and_direct_calls_agree() {
    let table = initialize().expect("module initialization should succeed");
    assert_eq!(
        table.call(DESCRIPTOR_ENTRY_POINT),
        Ok(EntryValue::Descriptor(language_descriptor()))
    );
    assert_eq!(
        table.call(ABI_VERSION_ENTRY_POINT),
        Ok(EntryValue::AbiVersion(language_abi_version()))
    );
}

#[test]
fn version_zero_round_trips_without_truncation() {
    let provider = unsafe { GrammarProvider::from_raw(version_zero_grammar) };
    let table = table_over(&provider);
    assert_eq!(table.call(ABI_VERSION_ENTRY_POINT), Ok(EntryValue::AbiVersion(0)));
}

#[test]
fn version_u32_max_round_trips_without_sign_inversion() {
    let provider = unsafe { GrammarProvider::from_raw(version_max_grammar) };
    let table = table_over(&provider);
    assert_eq!(
        table.call(ABI_VERSION_ENTRY_POINT),
        Ok(EntryValue::AbiVersion(u64::from(u32::MAX)))
    );
    // The widened maximum stays distinct from the unavailable sentinel.
    assert_ne!(u64::from(u32::MAX), ABI_VERSION_UNAVAILABLE);
}

#[test]
fn embedded_version_fourteen_is_reported_as_fourteen() {
    let provider = unsafe { GrammarProvider::from_raw(version_fourteen_grammar) };
    let bridge = LanguageBridge::bind(&provider);
    assert_eq!(bridge.abi_version(), 14);
}

#[test]
fn a_misbuilt_provider_yields_inert_values_not_failures() {
    let table = table_over(&GrammarProvider::absent());
    match table.call(DESCRIPTOR_ENTRY_POINT) {
        Ok(EntryValue::Descriptor(handle)) => assert!(handle.is_absent()),
        other => panic!("expected an absent descriptor handle, got {other:?}"),
    }
    assert_eq!(
        table.call(ABI_VERSION_ENTRY_POINT),
        Ok(EntryValue::AbiVersion(ABI_VERSION_UNAVAILABLE))
    );
}

#[test]
fn unregistered_names_fail_explicitly() {
    let table = initialize().expect("module initialization should succeed");
    for name in ["parse", "languageVersion", "ffi_language", ""] {
        assert_eq!(
            table.call(name),
            Err(BridgeError::UnknownEntryPoint {
                name: name.to_string()
            })
        );
    }
}

#[test]
fn concurrent_callers_observe_the_sequential_results() {
    let expected_handle = language_descriptor();
    let expected_version = language_abi_version();

    std::thread::scope(|scope| {
        let mut workers = Vec::new();
        for _ in 0..16 {
            workers.push(scope.spawn(|| {
                let table = initialize().expect("initialization should succeed on any thread");
                for _ in 0..500 {
                    assert_eq!(language_descriptor(), expected_handle);
                    assert_eq!(language_abi_version(), expected_version);
                    assert_eq!(
                        table.call(DESCRIPTOR_ENTRY_POINT),
                        Ok(EntryValue::Descriptor(expected_handle))
                    );
                    assert_eq!(
                        table.call(ABI_VERSION_ENTRY_POINT),
                        Ok(EntryValue::AbiVersion(expected_version))
                    );
                }
            }));
        }
        for worker in workers {
            worker.join().expect("worker should not panic");
        }
    });
}

#[test]
fn c_symbols_agree_with_the_registered_operations() {
    assert_eq!(
        arbor_bridge::ffi::language_descriptor(),
        language_descriptor().as_raw()
    );
    assert_eq!(arbor_bridge::ffi::language_abi_version(), language_abi_version());
}
