//! Structural compatibility checking for translation catalogs.
//!
//! A catalog ("locale") is parsed from a raw nested mapping into an
//! immutable field tree. Every other locale is then structurally diffed
//! against one designated reference locale: same nested grouping, same
//! field names, and identical ordered argument signatures on
//! parameterized fields. Translated values themselves are never compared.

pub mod check;
pub mod error;
pub mod field;
pub mod locale;
pub mod parse;
pub mod registry;
pub mod table;

pub use check::{check, ArgumentDiff, CompatibilityReport, Diagnostic};
pub use error::{NotFound, ParseError};
pub use field::{ArgumentDefinition, ArgumentType, Field, FieldKind, FieldVariant};
pub use locale::Locale;
pub use parse::parse;
pub use registry::Registry;
pub use table::{FieldRef, FieldTable};
