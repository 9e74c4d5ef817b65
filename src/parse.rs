use lazy_static::lazy_static;
use regex::Regex;
use serde_json::{Map, Value};

use crate::error::ParseError;
use crate::field::{ArgumentDefinition, ArgumentType, Field, FieldKind};
use crate::locale::Locale;
use crate::table::{FieldRef, FieldTable};

lazy_static! {
    /// Gate for the complex-field key shape `name(...)`. A key that does
    /// not match is a namespace or simple field; a key that does is
    /// committed to the signature grammar, so anything malformed between
    /// the parens is an error rather than a fallback to a simple field.
    static ref COMPLEX_KEY: Regex = Regex::new(r"^(\w+)\((.*)\)$").unwrap();
}

/// Builds a [`Locale`] from an already-deserialized catalog mapping.
///
/// Keys are field names (or complex-field signatures); values are scalars,
/// or nested mappings which become namespaces. The root namespace is named
/// `Locale_<locale_name>`.
pub fn parse(input: &Map<String, Value>, locale_name: &str) -> Result<Locale, ParseError> {
    let mut fields = FieldTable::new();
    let root = parse_namespace(&mut fields, input, format!("Locale_{locale_name}"), None)?;
    Ok(Locale::new(locale_name.to_string(), root, fields))
}

fn parse_namespace(
    fields: &mut FieldTable,
    input: &Map<String, Value>,
    name: String,
    parent: Option<FieldRef>,
) -> Result<FieldRef, ParseError> {
    // Children carry the namespace's ref, so its slot is reserved up front
    // and only filled once all of them exist.
    let ns = fields.reserve();
    let mut children: Vec<FieldRef> = Vec::with_capacity(input.len());
    for (key, value) in input {
        let child = parse_entry(fields, key, value, ns)?;
        let child_name = fields.get(child).name.clone();
        if children
            .iter()
            .any(|&sibling| fields.get(sibling).name == child_name)
        {
            return Err(ParseError::DuplicateField {
                name: child_name,
                namespace: name,
            });
        }
        children.push(child);
    }
    Ok(fields.insert(
        ns,
        Field {
            name,
            parent,
            kind: FieldKind::Namespace { children },
        },
    ))
}

fn parse_entry(
    fields: &mut FieldTable,
    key: &str,
    value: &Value,
    parent: FieldRef,
) -> Result<FieldRef, ParseError> {
    if let Some(captures) = COMPLEX_KEY.captures(key) {
        let name = captures[1].to_string();
        let arguments = parse_signature(key, &captures[2])?;
        let template = match value {
            Value::String(template) => template.clone(),
            _ => return Err(ParseError::NonStringTemplate(name)),
        };
        return Ok(fields.create(Field {
            name,
            parent: Some(parent),
            kind: FieldKind::Complex {
                arguments,
                template,
            },
        }));
    }

    let simple = |value: String| Field {
        name: key.to_string(),
        parent: Some(parent),
        kind: FieldKind::Simple { value },
    };
    match value {
        Value::Object(mapping) => parse_namespace(fields, mapping, key.to_string(), Some(parent)),
        Value::String(text) => Ok(fields.create(simple(text.clone()))),
        // Catalogs carry bare numbers and booleans; they stringify.
        Value::Number(number) => Ok(fields.create(simple(number.to_string()))),
        Value::Bool(flag) => Ok(fields.create(simple(flag.to_string()))),
        Value::Null | Value::Array(_) => Err(ParseError::UnsupportedValue(key.to_string())),
    }
}

/// Parses the text between the parens of a complex key: one or more
/// comma-separated `ident: type-keyword` pairs, left to right.
fn parse_signature(key: &str, args: &str) -> Result<Vec<ArgumentDefinition>, ParseError> {
    let malformed = || ParseError::MalformedComplexSignature(key.to_string());
    if args.trim().is_empty() {
        return Err(malformed());
    }

    let mut arguments: Vec<ArgumentDefinition> = Vec::new();
    for pair in args.split(',') {
        let (name, keyword) = pair.split_once(':').ok_or_else(malformed)?;
        let name = name.trim();
        let keyword = keyword.trim();
        if !is_identifier(name) || !is_identifier(keyword) {
            return Err(malformed());
        }
        if arguments.iter().any(|argument| argument.name == name) {
            return Err(malformed());
        }
        let ty = ArgumentType::from_keyword(keyword)
            .ok_or_else(|| ParseError::UnknownArgumentType(keyword.to_string()))?;
        arguments.push(ArgumentDefinition {
            name: name.to_string(),
            ty,
        });
    }
    Ok(arguments)
}

fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    matches!(chars.next(), Some(c) if c == '_' || c.is_ascii_alphabetic())
        && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}
