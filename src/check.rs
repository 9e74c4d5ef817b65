use std::fmt;

use crate::field::{ArgumentDefinition, ArgumentType, FieldKind, FieldVariant};
use crate::locale::Locale;
use crate::table::FieldRef;

/// One structural incompatibility between the reference and a candidate.
/// The path always names the reference field, dot-joined from its root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Diagnostic {
    /// No candidate field of any variant shares this reference field's name.
    MissingField { path: String },
    /// A same-named candidate field exists, but with a different shape.
    VariantMismatch {
        path: String,
        expected: FieldVariant,
        found: FieldVariant,
    },
    /// Same-named complex fields whose argument signatures differ.
    ArgumentMismatch {
        path: String,
        diffs: Vec<ArgumentDiff>,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField { path } => write!(f, "missing field `{path}`"),
            Self::VariantMismatch {
                path,
                expected,
                found,
            } => write!(
                f,
                "variant mismatch at `{path}`: expected {expected}, found {found}"
            ),
            Self::ArgumentMismatch { path, diffs } => {
                write!(f, "argument mismatch at `{path}`:")?;
                for diff in diffs {
                    write!(f, " [{diff}]")?;
                }
                Ok(())
            }
        }
    }
}

/// Per-argument detail of an [`ArgumentMismatch`](Diagnostic::ArgumentMismatch).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArgumentDiff {
    /// Declared on both sides with differing types.
    TypeMismatch {
        name: String,
        expected: ArgumentType,
        found: ArgumentType,
    },
    /// Declared by the reference only.
    Missing { name: String, expected: ArgumentType },
    /// Declared by the candidate only.
    Unexpected { name: String, found: ArgumentType },
    /// Same name/type pairs on both sides, declared in a different order.
    OrderMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },
}

impl fmt::Display for ArgumentDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeMismatch {
                name,
                expected,
                found,
            } => write!(f, "expected {name}:{expected} / found {name}:{found}"),
            Self::Missing { name, expected } => {
                write!(f, "expected {name}:{expected} / found nothing")
            }
            Self::Unexpected { name, found } => {
                write!(f, "expected nothing / found {name}:{found}")
            }
            Self::OrderMismatch { expected, found } => write!(
                f,
                "expected order ({}) / found order ({})",
                expected.join(", "),
                found.join(", ")
            ),
        }
    }
}

/// Aggregated outcome of one checking pass over a reference/candidate pair.
///
/// The checker never aborts mid-walk; every reference field is visited and
/// every incompatibility lands here, so one run lists everything a
/// translator forgot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompatibilityReport {
    pub diagnostics: Vec<Diagnostic>,
}

impl fmt::Display for CompatibilityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, diagnostic) in self.diagnostics.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{diagnostic}")?;
        }
        Ok(())
    }
}

impl std::error::Error for CompatibilityReport {}

/// Structurally checks `candidate` against `reference`, starting at both
/// roots. Root names are not compared; each locale's root is named after
/// the locale itself.
pub fn check(reference: &Locale, candidate: &Locale) -> Result<(), CompatibilityReport> {
    let mut diagnostics = Vec::new();
    check_namespace(
        reference,
        reference.root(),
        candidate,
        candidate.root(),
        &mut diagnostics,
    );
    if diagnostics.is_empty() {
        Ok(())
    } else {
        Err(CompatibilityReport { diagnostics })
    }
}

fn check_namespace(
    reference: &Locale,
    ref_ns: FieldRef,
    candidate: &Locale,
    cand_ns: FieldRef,
    diagnostics: &mut Vec<Diagnostic>,
) {
    let ref_children = reference.field(ref_ns).children().unwrap_or(&[]);
    let cand_children = candidate.field(cand_ns).children().unwrap_or(&[]);

    for &ref_child in ref_children {
        let ref_field = reference.field(ref_child);

        // Existential search: candidate child order is irrelevant. Names
        // are unique per namespace (enforced at parse time), so at most
        // one candidate child can match.
        let Some(cand_child) = cand_children
            .iter()
            .copied()
            .find(|&c| candidate.field(c).name == ref_field.name)
        else {
            diagnostics.push(Diagnostic::MissingField {
                path: reference.full_name(ref_child),
            });
            continue;
        };
        let cand_field = candidate.field(cand_child);

        match (&ref_field.kind, &cand_field.kind) {
            (FieldKind::Namespace { .. }, FieldKind::Namespace { .. }) => {
                check_namespace(reference, ref_child, candidate, cand_child, diagnostics);
            }
            (FieldKind::Simple { .. }, FieldKind::Simple { .. }) => {
                // Values are translations; they legitimately differ.
            }
            (
                FieldKind::Complex {
                    arguments: expected,
                    ..
                },
                FieldKind::Complex {
                    arguments: found, ..
                },
            ) => {
                if expected != found {
                    diagnostics.push(Diagnostic::ArgumentMismatch {
                        path: reference.full_name(ref_child),
                        diffs: diff_arguments(expected, found),
                    });
                }
            }
            _ => {
                diagnostics.push(Diagnostic::VariantMismatch {
                    path: reference.full_name(ref_child),
                    expected: ref_field.variant(),
                    found: cand_field.variant(),
                });
            }
        }
    }
}

fn diff_arguments(expected: &[ArgumentDefinition], found: &[ArgumentDefinition]) -> Vec<ArgumentDiff> {
    let mut diffs = Vec::new();
    for argument in expected {
        match found.iter().find(|f| f.name == argument.name) {
            Some(other) if other.ty != argument.ty => diffs.push(ArgumentDiff::TypeMismatch {
                name: argument.name.clone(),
                expected: argument.ty,
                found: other.ty,
            }),
            Some(_) => {}
            None => diffs.push(ArgumentDiff::Missing {
                name: argument.name.clone(),
                expected: argument.ty,
            }),
        }
    }
    for argument in found {
        if !expected.iter().any(|e| e.name == argument.name) {
            diffs.push(ArgumentDiff::Unexpected {
                name: argument.name.clone(),
                found: argument.ty,
            });
        }
    }
    if diffs.is_empty() {
        // Same name/type pairs on both sides; only the order differs.
        diffs.push(ArgumentDiff::OrderMismatch {
            expected: expected.iter().map(|a| a.name.clone()).collect(),
            found: found.iter().map(|a| a.name.clone()).collect(),
        });
    }
    diffs
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;
    use crate::parse::parse;

    fn locale(name: &str, value: Value) -> Locale {
        let Value::Object(map) = value else {
            panic!("test input must be a mapping");
        };
        parse(&map, name).unwrap()
    }

    #[test]
    fn a_locale_is_compatible_with_itself() {
        let reference = locale(
            "en",
            json!({
                "greet(user: str, count: int)": "Hello {user} x{count}",
                "menu": { "open": "Open", "close": "Close" },
                "plain": "text",
            }),
        );
        assert_eq!(check(&reference, &reference), Ok(()));
    }

    #[test]
    fn differing_root_names_do_not_matter() {
        let reference = locale("en", json!({ "hello": "Hello" }));
        let candidate = locale("fr", json!({ "hello": "Bonjour" }));
        assert_eq!(check(&reference, &candidate), Ok(()));
    }

    #[test]
    fn candidate_key_order_is_irrelevant() {
        let reference = locale(
            "en",
            json!({
                "a": "one",
                "b": { "c": "two", "d(n: int)": "{n}" },
            }),
        );
        let permuted = locale(
            "de",
            json!({
                "b": { "d(n: int)": "{n}", "c": "zwei" },
                "a": "eins",
            }),
        );
        assert_eq!(check(&reference, &permuted), Ok(()));
    }

    #[test]
    fn missing_field_names_the_full_path() {
        let reference = locale(
            "X",
            json!({
                "name(family: str)": "John {family}",
                "age": "30",
            }),
        );
        let candidate = locale(
            "fr",
            json!({
                "name(family: str)": "Jean {family}",
            }),
        );
        let report = check(&reference, &candidate).unwrap_err();
        assert_eq!(
            report.diagnostics,
            [Diagnostic::MissingField {
                path: "Locale_X.age".to_string(),
            }]
        );
    }

    #[test]
    fn argument_type_drift_is_reported_per_argument() {
        let reference = locale("en", json!({ "greet(user: str, count: int)": "x" }));
        let candidate = locale("fr", json!({ "greet(user: str, count: str)": "y" }));
        let report = check(&reference, &candidate).unwrap_err();
        assert_eq!(
            report.diagnostics,
            [Diagnostic::ArgumentMismatch {
                path: "Locale_en.greet".to_string(),
                diffs: vec![ArgumentDiff::TypeMismatch {
                    name: "count".to_string(),
                    expected: ArgumentType::Int,
                    found: ArgumentType::Str,
                }],
            }]
        );
    }

    #[test]
    fn argument_presence_drift_is_reported_per_argument() {
        let reference = locale("en", json!({ "greet(user: str, count: int)": "x" }));
        let candidate = locale("fr", json!({ "greet(user: str, extra: bool)": "y" }));
        let report = check(&reference, &candidate).unwrap_err();
        assert_eq!(
            report.diagnostics,
            [Diagnostic::ArgumentMismatch {
                path: "Locale_en.greet".to_string(),
                diffs: vec![
                    ArgumentDiff::Missing {
                        name: "count".to_string(),
                        expected: ArgumentType::Int,
                    },
                    ArgumentDiff::Unexpected {
                        name: "extra".to_string(),
                        found: ArgumentType::Bool,
                    },
                ],
            }]
        );
    }

    #[test]
    fn argument_order_is_significant() {
        let reference = locale("en", json!({ "greet(user: str, count: int)": "x" }));
        let candidate = locale("fr", json!({ "greet(count: int, user: str)": "y" }));
        let report = check(&reference, &candidate).unwrap_err();
        assert_eq!(
            report.diagnostics,
            [Diagnostic::ArgumentMismatch {
                path: "Locale_en.greet".to_string(),
                diffs: vec![ArgumentDiff::OrderMismatch {
                    expected: vec!["user".to_string(), "count".to_string()],
                    found: vec!["count".to_string(), "user".to_string()],
                }],
            }]
        );
    }

    #[test]
    fn same_name_different_variant_is_a_variant_mismatch() {
        let reference = locale("en", json!({ "menu": { "open": "Open" } }));
        let candidate = locale("fr", json!({ "menu": "Menu" }));
        let report = check(&reference, &candidate).unwrap_err();
        assert_eq!(
            report.diagnostics,
            [Diagnostic::VariantMismatch {
                path: "Locale_en.menu".to_string(),
                expected: FieldVariant::Namespace,
                found: FieldVariant::Simple,
            }]
        );
    }

    #[test]
    fn every_miss_is_reported_not_just_the_first() {
        let reference = locale(
            "en",
            json!({
                "first": "1",
                "second": "2",
                "nested": { "third": "3" },
            }),
        );
        let candidate = locale("fr", json!({ "nested": {} }));
        let report = check(&reference, &candidate).unwrap_err();
        assert_eq!(
            report.diagnostics,
            [
                Diagnostic::MissingField {
                    path: "Locale_en.first".to_string(),
                },
                Diagnostic::MissingField {
                    path: "Locale_en.second".to_string(),
                },
                Diagnostic::MissingField {
                    path: "Locale_en.nested.third".to_string(),
                },
            ]
        );
    }

    #[test]
    fn extra_candidate_fields_are_allowed() {
        let reference = locale("en", json!({ "hello": "Hello" }));
        let candidate = locale("fr", json!({ "hello": "Bonjour", "bonus": "Extra" }));
        assert_eq!(check(&reference, &candidate), Ok(()));
    }

    #[test]
    fn report_renders_one_line_per_diagnostic() {
        let reference = locale("en", json!({ "a": "1", "b": "2" }));
        let candidate = locale("fr", json!({}));
        let report = check(&reference, &candidate).unwrap_err();
        assert_eq!(
            report.to_string(),
            "missing field `Locale_en.a`\nmissing field `Locale_en.b`"
        );
    }

    #[test]
    fn type_diff_renders_expected_and_found() {
        let diff = ArgumentDiff::TypeMismatch {
            name: "count".to_string(),
            expected: ArgumentType::Int,
            found: ArgumentType::Str,
        };
        assert_eq!(diff.to_string(), "expected count:int / found count:str");
    }
}
