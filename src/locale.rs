use crate::error::NotFound;
use crate::field::{Field, FieldKind};
use crate::table::{FieldRef, FieldTable};

/// One parsed catalog: a named, immutable field tree.
///
/// The root is a namespace named `Locale_<name>`. Trees of different
/// locales are entirely independent; a [`FieldRef`] is only meaningful
/// against the locale it came from.
#[derive(Debug)]
pub struct Locale {
    name: String,
    root: FieldRef,
    fields: FieldTable,
}

impl Locale {
    pub(crate) fn new(name: String, root: FieldRef, fields: FieldTable) -> Self {
        Self { name, root, fields }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn root(&self) -> FieldRef {
        self.root
    }

    pub fn field(&self, ref_: FieldRef) -> &Field {
        self.fields.get(ref_)
    }

    /// Looks up a direct child of the namespace `ns` by name.
    ///
    /// Passing a simple or complex field as `ns` yields [`NotFound`] as
    /// well, since a leaf has no children to search.
    pub fn get_field(&self, ns: FieldRef, name: &str) -> Result<FieldRef, NotFound> {
        let not_found = || NotFound {
            namespace: self.full_name(ns),
            name: name.to_string(),
        };
        let children = self.fields.get(ns).children().ok_or_else(not_found)?;
        children
            .iter()
            .copied()
            .find(|&child| self.fields.get(child).name == name)
            .ok_or_else(not_found)
    }

    /// Dot-joined path from the root to `ref_`, root name included.
    pub fn full_name(&self, ref_: FieldRef) -> String {
        let mut names = Vec::new();
        let mut current = Some(ref_);
        while let Some(r) = current {
            let field = self.fields.get(r);
            names.push(field.name.as_str());
            current = field.parent;
        }
        names.reverse();
        names.join(".")
    }

    /// Every descendant namespace of the root (the root itself and leaf
    /// fields excluded), in containment post-order: namespaces nested
    /// inside `N` appear strictly before `N`. Consumers that emit one
    /// shape per namespace rely on inner shapes being defined first.
    pub fn all_namespace_fields(&self) -> Vec<FieldRef> {
        let mut out = Vec::new();
        if let FieldKind::Namespace { children } = &self.fields.get(self.root).kind {
            for &child in children {
                self.collect_namespaces(child, &mut out);
            }
        }
        out
    }

    fn collect_namespaces(&self, ref_: FieldRef, out: &mut Vec<FieldRef>) {
        if let FieldKind::Namespace { children } = &self.fields.get(ref_).kind {
            for &child in children {
                self.collect_namespaces(child, out);
            }
            out.push(ref_);
        }
    }
}
