use std::fmt;

use crate::table::FieldRef;

/// Declared type of a complex field's argument.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ArgumentType {
    Int,
    Str,
    Float,
    Bool,
}

impl ArgumentType {
    /// Resolves a signature type keyword. Returns `None` for anything that
    /// is not exactly one of `int`, `str`, `float`, `bool`.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "int" => Some(Self::Int),
            "str" => Some(Self::Str),
            "float" => Some(Self::Float),
            "bool" => Some(Self::Bool),
            _ => None,
        }
    }

    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Str => "str",
            Self::Float => "float",
            Self::Bool => "bool",
        }
    }
}

impl fmt::Display for ArgumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// One `name: type` pair in a complex field's signature. Argument order is
/// declaration order and is significant for compatibility.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArgumentDefinition {
    pub name: String,
    pub ty: ArgumentType,
}

/// Variety of a [`Field`], used by compatibility diagnostics.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FieldVariant {
    Namespace,
    Simple,
    Complex,
}

impl fmt::Display for FieldVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Namespace => "namespace",
            Self::Simple => "simple",
            Self::Complex => "complex",
        })
    }
}

/// The three shapes a catalog field can take. Closed set; the checker and
/// the traversal match on it exhaustively.
#[derive(Clone, Debug)]
pub enum FieldKind {
    /// An ordered group of child fields. Order follows the input mapping
    /// and matters for generated output, not for compatibility.
    Namespace { children: Vec<FieldRef> },
    /// A plain translated string.
    Simple { value: String },
    /// A parameterized template with a declared argument signature.
    Complex {
        arguments: Vec<ArgumentDefinition>,
        template: String,
    },
}

/// A node in a locale's field tree.
#[derive(Clone, Debug)]
pub struct Field {
    pub name: String,
    /// Enclosing namespace; `None` for a locale's root.
    pub parent: Option<FieldRef>,
    pub kind: FieldKind,
}

impl Field {
    pub fn variant(&self) -> FieldVariant {
        match self.kind {
            FieldKind::Namespace { .. } => FieldVariant::Namespace,
            FieldKind::Simple { .. } => FieldVariant::Simple,
            FieldKind::Complex { .. } => FieldVariant::Complex,
        }
    }

    pub fn is_namespace(&self) -> bool {
        matches!(self.kind, FieldKind::Namespace { .. })
    }

    pub fn is_simple(&self) -> bool {
        matches!(self.kind, FieldKind::Simple { .. })
    }

    pub fn is_complex(&self) -> bool {
        matches!(self.kind, FieldKind::Complex { .. })
    }

    /// Child refs, if this is a namespace.
    pub fn children(&self) -> Option<&[FieldRef]> {
        match &self.kind {
            FieldKind::Namespace { children } => Some(children),
            _ => None,
        }
    }

    /// The translated string, if this is a simple field.
    pub fn value(&self) -> Option<&str> {
        match &self.kind {
            FieldKind::Simple { value } => Some(value),
            _ => None,
        }
    }

    /// The declared argument signature, if this is a complex field.
    pub fn arguments(&self) -> Option<&[ArgumentDefinition]> {
        match &self.kind {
            FieldKind::Complex { arguments, .. } => Some(arguments),
            _ => None,
        }
    }

    /// The template string, if this is a complex field.
    pub fn template(&self) -> Option<&str> {
        match &self.kind {
            FieldKind::Complex { template, .. } => Some(template),
            _ => None,
        }
    }
}
