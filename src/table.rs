use std::fmt;
use std::num::{NonZeroU32, NonZeroUsize};

use crate::field::Field;

/// A reference to a [`Field`] stored in a [`FieldTable`].
///
/// Parent back-references and namespace children are stored as refs rather
/// than borrows, which sidesteps the ownership cycle between a namespace
/// and its children.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct FieldRef(NonZeroU32);

impl FieldRef {
    const fn from_inner(inner: NonZeroU32) -> Self {
        Self(inner)
    }

    fn index(self) -> usize {
        let size: NonZeroUsize = self
            .0
            .try_into()
            .expect("Could not convert field reference to usize index");
        usize::from(size) - 1
    }

    pub fn get(self, table: &FieldTable) -> &Field {
        table.get(self)
    }
}

impl fmt::Debug for FieldRef {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<field #{}>", self.0)
    }
}

/// Arena holding every field of one locale tree.
///
/// The slots are `Option`s since children carry their parent's ref, and
/// thus are constructed after the parent's `Ref` but before its value.
#[derive(Default, Debug)]
pub struct FieldTable {
    fields: Vec<Option<Field>>,
}

impl FieldTable {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Creates a [`FieldRef`] which points to an absent, reserved slot in the table.
    pub(crate) fn reserve(&mut self) -> FieldRef {
        // Reserve a slot by inserting None
        self.fields.push(None);

        // We use the size for the ref's ID, which is non-zero after the push
        let size = NonZeroUsize::new(self.fields.len()).unwrap();
        let id: NonZeroU32 = size.try_into().expect("ID did not fit into 32-bit integer");

        FieldRef::from_inner(id)
    }

    /// Inserts the `value` into the slot pointed to by `ref_`. Returns `ref_` for convenience.
    pub(crate) fn insert(&mut self, ref_: FieldRef, value: Field) -> FieldRef {
        let slot = self
            .fields
            .get_mut(ref_.index())
            .expect("Invalid field reference (out-of-bounds)");

        *slot = Some(value);

        ref_
    }

    /// Shorthand for `insert(reserve(), value)`
    pub(crate) fn create(&mut self, value: Field) -> FieldRef {
        let ref_ = self.reserve();
        self.insert(ref_, value)
    }

    /// Retrieves a field's value by reference. Every ref handed out by a
    /// finished parse points to a present slot.
    pub fn get(&self, ref_: FieldRef) -> &Field {
        self.fields
            .get(ref_.index())
            .expect("Invalid field reference (out-of-bounds)")
            .as_ref()
            .expect("Field is not present")
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
