use thiserror::Error;

/// Errors produced while turning a raw mapping into a field tree.
///
/// Parsing is fail-fast: the first structural error aborts the whole
/// locale and no partial tree is returned.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A signature type keyword was identifier-shaped but is not one of
    /// `int`, `str`, `float`, `bool`.
    #[error("unknown argument type `{0}`")]
    UnknownArgumentType(String),

    /// A key of the shape `name(...)` whose parenthesized part is not a
    /// non-empty, comma-separated list of `ident: type` pairs with
    /// pairwise-distinct argument names.
    #[error("malformed complex field signature `{0}`")]
    MalformedComplexSignature(String),

    /// The value under a complex key must be the template string.
    #[error("value of complex field `{0}` is not a string")]
    NonStringTemplate(String),

    /// Field names are unique within their namespace; lookup and checking
    /// rely on it.
    #[error("duplicate field `{name}` in namespace `{namespace}`")]
    DuplicateField { name: String, namespace: String },

    /// Values must be scalars or nested mappings; nulls and arrays have no
    /// field representation.
    #[error("unsupported value under key `{0}`")]
    UnsupportedValue(String),
}

/// A by-name lookup found no matching child in a namespace.
///
/// Distinct from the checker's `MissingField` diagnostic: this is a
/// caller-driven query error, not a compatibility classification.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("no field named `{name}` in namespace `{namespace}`")]
pub struct NotFound {
    pub namespace: String,
    pub name: String,
}
