use crate::check::{check, CompatibilityReport};
use crate::locale::Locale;

/// Holds the reference locale plus every candidate that passed checking,
/// in insertion order.
pub struct Registry {
    reference: Locale,
    locales: Vec<Locale>,
}

impl Registry {
    pub fn new(reference: Locale) -> Self {
        Self {
            reference,
            locales: Vec::new(),
        }
    }

    /// The authoritative schema all inserted locales were checked against.
    pub fn reference(&self) -> &Locale {
        &self.reference
    }

    pub fn locales(&self) -> &[Locale] {
        &self.locales
    }

    /// Checks `candidate` against the reference and keeps it on success.
    /// An incompatible candidate is dropped and its report returned.
    pub fn insert(&mut self, candidate: Locale) -> Result<&Locale, CompatibilityReport> {
        check(&self.reference, &candidate)?;
        self.locales.push(candidate);
        Ok(self.locales.last().expect("candidate was just inserted"))
    }
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
    fn compatible_candidates_are_kept_in_order() {
        let mut registry = Registry::new(locale("en", json!({ "hello": "Hello" })));
        registry.insert(locale("fr", json!({ "hello": "Bonjour" }))).unwrap();
        registry.insert(locale("de", json!({ "hello": "Hallo" }))).unwrap();
        let names: Vec<_> = registry.locales().iter().map(Locale::name).collect();
        assert_eq!(names, ["fr", "de"]);
        assert_eq!(registry.reference().name(), "en");
    }

    #[test]
    fn incompatible_candidates_are_dropped() {
        let mut registry = Registry::new(locale("en", json!({ "hello": "Hello" })));
        let report = registry.insert(locale("fr", json!({}))).unwrap_err();
        assert_eq!(report.diagnostics.len(), 1);
        assert!(registry.locales().is_empty());
    }
}
