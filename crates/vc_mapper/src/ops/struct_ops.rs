use alloc::boxed::Box;
use core::any::Any;
use core::iter::FusedIterator;

use crate::ops::FieldInfo;
use crate::value::Value;

// -----------------------------------------------------------------------------
// Struct trait

/// A value with named fields and optional zero-argument accessors.
///
/// This is the shape the mapper discovers on both sides of a mapping: field
/// descriptors in declaration order, field values by name, and accessors
/// keyed by the field name they provide (`get_full_name` provides
/// `full_name`).
///
/// Usually implemented through [`#[derive(Mappable)]`](crate::derive::Mappable)
/// or by building a [`DynamicStruct`](crate::ops::DynamicStruct).
///
/// # Examples
///
/// ```
/// use vc_mapper::{Mappable, Struct};
///
/// #[derive(Mappable, Clone)]
/// #[mapper(accessor = "full_name")]
/// struct Person {
///     first: String,
///     last: String,
/// }
///
/// impl Person {
///     fn get_full_name(&self) -> String {
///         format!("{} {}", self.first, self.last)
///     }
/// }
///
/// let person = Person { first: "Ann".into(), last: "Lee".into() };
/// let view: &dyn Struct = &person;
///
/// assert_eq!(view.field_len(), 2);
/// assert_eq!(view.field_info_at(1).unwrap().name(), "last");
/// assert_eq!(view.field_as::<String>("first").unwrap(), "Ann");
///
/// let full = view.call_accessor("full_name").unwrap();
/// assert_eq!(full.downcast_ref::<String>().unwrap(), "Ann Lee");
/// ```
pub trait Struct: Value {
    /// Returns the value of the readable field `name`.
    fn field(&self, name: &str) -> Option<&dyn Value>;

    /// Returns the value of the writable field `name`.
    fn field_mut(&mut self, name: &str) -> Option<&mut dyn Value>;

    /// Returns the number of visible fields.
    fn field_len(&self) -> usize;

    /// Returns the descriptor of the field at `index`, in declaration order.
    fn field_info_at(&self, index: usize) -> Option<FieldInfo<'_>>;

    /// Invokes the accessor registered for the field `name`.
    ///
    /// Returns `None` when no accessor provides `name`.
    fn call_accessor(&self, name: &str) -> Option<Box<dyn Value>>;

    /// Returns `true` if an accessor is registered for `name`.
    fn has_accessor(&self, name: &str) -> bool;

    /// Returns the descriptor of the field `name`.
    ///
    /// Field names are compared exactly (case-sensitive), in declaration order.
    fn field_info(&self, name: &str) -> Option<FieldInfo<'_>> {
        (0..self.field_len())
            .filter_map(|index| self.field_info_at(index))
            .find(|info| info.name() == name)
    }

    /// Returns an iterator over the field descriptors in declaration order.
    #[inline]
    fn field_infos(&self) -> FieldInfoIter<'_>
    where
        Self: Sized,
    {
        FieldInfoIter::new(self)
    }
}

impl dyn Struct {
    /// Returns an iterator over the field descriptors in declaration order.
    #[inline]
    pub fn field_infos(&self) -> FieldInfoIter<'_> {
        FieldInfoIter::new(self)
    }

    /// Returns the readable field `name` downcast to `T`.
    #[inline]
    pub fn field_as<T: Any>(&self, name: &str) -> Option<&T> {
        self.field(name)?.downcast_ref::<T>()
    }

    /// Returns the writable field `name` downcast to `T`.
    #[inline]
    pub fn field_mut_as<T: Any>(&mut self, name: &str) -> Option<&mut T> {
        self.field_mut(name)?.downcast_mut::<T>()
    }
}

// -----------------------------------------------------------------------------
// FieldInfoIter

/// Iterator over the [`FieldInfo`]s of a [`Struct`].
pub struct FieldInfoIter<'a> {
    target: &'a dyn Struct,
    index: usize,
}

impl<'a> FieldInfoIter<'a> {
    /// Creates an iterator starting at the first field.
    #[inline]
    pub fn new(target: &'a dyn Struct) -> Self {
        Self { target, index: 0 }
    }
}

impl<'a> Iterator for FieldInfoIter<'a> {
    type Item = FieldInfo<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let info = self.target.field_info_at(self.index);
        if info.is_some() {
            self.index += 1;
        }
        info
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.target.field_len().saturating_sub(self.index);
        (len, Some(len))
    }
}

impl ExactSizeIterator for FieldInfoIter<'_> {}

impl FusedIterator for FieldInfoIter<'_> {}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;

    use crate::ops::{DynamicStruct, FieldAccess, FieldInfo, Struct};

    fn row() -> DynamicStruct {
        let mut row = DynamicStruct::new()
            .with("id", 3_u32)
            .with("name", String::from("Ann"));
        row.insert_with_access("created", 10_u64, FieldAccess::READ);
        row
    }

    #[test]
    fn field_infos_follow_declaration_order() {
        let row = row();
        let names: Vec<&str> = row.field_infos().map(|info| info.name()).collect();
        assert_eq!(names, ["id", "name", "created"]);

        let erased: &dyn Struct = &row;
        let mut infos = erased.field_infos();
        assert_eq!(infos.len(), 3);
        infos.next();
        assert_eq!(infos.len(), 2);
        assert_eq!(
            infos.last(),
            Some(FieldInfo::new("created", FieldAccess::READ))
        );
    }

    #[test]
    fn field_iter_is_fused() {
        let row = row();
        let mut infos = row.field_infos();
        assert_eq!(infos.by_ref().count(), 3);
        assert!(infos.next().is_none());
        assert_eq!(infos.size_hint(), (0, Some(0)));
    }

    #[test]
    fn typed_field_access_respects_flags() {
        let mut row = row();
        let erased: &mut dyn Struct = &mut row;

        *erased.field_mut_as::<String>("name").unwrap() = String::from("Bea");
        assert_eq!(erased.field_as::<String>("name").unwrap(), "Bea");

        assert!(erased.field_mut_as::<u32>("name").is_none());
        assert!(erased.field_mut_as::<u64>("created").is_none());
        assert_eq!(erased.field_as::<u64>("created"), Some(&10));
    }
}
