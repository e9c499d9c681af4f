use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Clone, Error, Diagnostic, PartialEq, Eq)]
pub enum BridgeError {
    #[error("Entry-point registration error: name `{name}` is already bound")]
    #[diagnostic(code(arbor_bridge::duplicate_entry_point))]
    DuplicateEntryPoint { name: String },

    #[error("Entry-point registration error: `{name}` is not a valid external name")]
    #[diagnostic(code(arbor_bridge::malformed_entry_point))]
    #[help("external names must be non-empty ASCII identifiers")]
    MalformedEntryPoint { name: String },

    #[error("Entry-point registration error: `{name}` declares arity {arity}")]
    #[diagnostic(code(arbor_bridge::unsupported_arity))]
    #[help("only zero-argument operations can be published to the host")]
    UnsupportedArity { name: String, arity: u8 },

    #[error("No entry point named `{name}`")]
    #[diagnostic(code(arbor_bridge::unknown_entry_point))]
    #[help("dynamic symbol lookup is disabled; only registered entry points are callable")]
    UnknownEntryPoint { name: String },
}
