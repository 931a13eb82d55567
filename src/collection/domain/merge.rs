//! Typed shallow-merge contract for partial record updates.

/// Applies a typed patch onto a record in place.
///
/// The patch carries the same fields as the record, each optional; absent
/// fields leave the record untouched. This replaces the dynamic object
/// spread a schemaless store would use, keeping field-level updates checked
/// at compile time.
pub trait Merge {
    /// Partial-record type applied by [`Merge::merge`].
    type Patch;

    /// Shallow-merges `patch` onto `self`, field by field.
    fn merge(&mut self, patch: &Self::Patch);
}
