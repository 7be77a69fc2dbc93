use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::any::Any;
use core::fmt;

use crate::ops::{FieldAccess, FieldInfo, Struct};
use crate::utils::{DebugName, HashMap};
use crate::value::{AssignError, Value, assign_by_clone};

type AccessorFn = Arc<dyn Fn(&DynamicStruct) -> Box<dyn Value> + Send + Sync>;

struct DynamicField {
    name: Cow<'static, str>,
    access: FieldAccess,
    value: Box<dyn Value>,
}

impl Clone for DynamicField {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            access: self.access,
            value: self.value.clone_value(),
        }
    }
}

// -----------------------------------------------------------------------------
// DynamicStruct

/// A struct whose fields and accessors are assembled at runtime.
///
/// Fields keep insertion order, which is the declaration order seen by the
/// mapper. Inserting an existing name replaces the value in place.
///
/// Useful for shapes only known at runtime (rows, decoded documents) and for
/// sources that expose computed values through accessors.
///
/// # Examples
///
/// ```
/// use vc_mapper::{DynamicStruct, Struct};
///
/// let mut person = DynamicStruct::new();
/// person.insert("first", String::from("Ann"));
/// person.insert("last", String::from("Lee"));
/// person.insert_accessor("full_name", |this| {
///     format!(
///         "{} {}",
///         this.get::<String>("first").unwrap(),
///         this.get::<String>("last").unwrap(),
///     )
/// });
///
/// assert_eq!(person.field_len(), 2);
/// assert_eq!(person.index_of("last"), Some(1));
///
/// let full = person.call_accessor("full_name").unwrap();
/// assert_eq!(full.downcast_ref::<String>().unwrap(), "Ann Lee");
/// ```
#[derive(Default, Clone)]
pub struct DynamicStruct {
    fields: Vec<DynamicField>,
    field_indices: HashMap<Cow<'static, str>, usize>,
    accessors: HashMap<Cow<'static, str>, AccessorFn>,
}

impl DynamicStruct {
    /// Creates an empty `DynamicStruct`.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty `DynamicStruct` with room for `capacity` fields.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
            field_indices: HashMap::with_capacity_and_hasher(capacity, Default::default()),
            accessors: HashMap::default(),
        }
    }

    /// Inserts a boxed value with explicit access flags.
    ///
    /// If the field already exists, its value and flags are replaced and its
    /// position is kept.
    pub fn insert_boxed_with_access(
        &mut self,
        name: impl Into<Cow<'static, str>>,
        value: Box<dyn Value>,
        access: FieldAccess,
    ) {
        let name = name.into();
        if let Some(&index) = self.field_indices.get(&name) {
            let field = &mut self.fields[index];
            field.value = value;
            field.access = access;
        } else {
            self.field_indices.insert(name.clone(), self.fields.len());
            self.fields.push(DynamicField {
                name,
                access,
                value,
            });
        }
    }

    /// Inserts a boxed value as a read-write field.
    #[inline]
    pub fn insert_boxed(&mut self, name: impl Into<Cow<'static, str>>, value: Box<dyn Value>) {
        self.insert_boxed_with_access(name, value, FieldAccess::READ_WRITE);
    }

    /// Inserts a value as a read-write field.
    #[inline]
    pub fn insert<T: Value>(&mut self, name: impl Into<Cow<'static, str>>, value: T) {
        self.insert_boxed(name, Box::new(value));
    }

    /// Inserts a value with explicit access flags.
    #[inline]
    pub fn insert_with_access<T: Value>(
        &mut self,
        name: impl Into<Cow<'static, str>>,
        value: T,
        access: FieldAccess,
    ) {
        self.insert_boxed_with_access(name, Box::new(value), access);
    }

    /// Builder flavour of [`insert`](Self::insert).
    #[inline]
    pub fn with<T: Value>(mut self, name: impl Into<Cow<'static, str>>, value: T) -> Self {
        self.insert(name, value);
        self
    }

    /// Registers the zero-argument accessor providing the field `name`.
    ///
    /// Replaces a previous accessor for the same name.
    pub fn insert_accessor<T, F>(&mut self, name: impl Into<Cow<'static, str>>, accessor: F)
    where
        T: Value,
        F: Fn(&DynamicStruct) -> T + Send + Sync + 'static,
    {
        let accessor: AccessorFn = Arc::new(move |this: &DynamicStruct| -> Box<dyn Value> {
            Box::new(accessor(this))
        });
        self.accessors.insert(name.into(), accessor);
    }

    /// Builder flavour of [`insert_accessor`](Self::insert_accessor).
    #[inline]
    pub fn with_accessor<T, F>(mut self, name: impl Into<Cow<'static, str>>, accessor: F) -> Self
    where
        T: Value,
        F: Fn(&DynamicStruct) -> T + Send + Sync + 'static,
    {
        self.insert_accessor(name, accessor);
        self
    }

    /// Removes the field `name`, returning its value.
    ///
    /// Later fields shift down by one position.
    pub fn remove(&mut self, name: &str) -> Option<Box<dyn Value>> {
        let removed = self.field_indices.remove(name)?;
        let field = self.fields.remove(removed);
        for index in self.field_indices.values_mut() {
            if *index > removed {
                *index -= 1;
            }
        }
        Some(field.value)
    }

    /// Returns the position of the field `name`.
    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.field_indices.get(name).copied()
    }

    /// Returns the field `name` downcast to `T`, ignoring access flags.
    #[inline]
    pub fn get<T: Any>(&self, name: &str) -> Option<&T> {
        let index = self.index_of(name)?;
        self.fields[index].value.downcast_ref::<T>()
    }

    /// Returns the field `name` mutably downcast to `T`, ignoring access flags.
    #[inline]
    pub fn get_mut<T: Any>(&mut self, name: &str) -> Option<&mut T> {
        let index = self.index_of(name)?;
        self.fields[index].value.downcast_mut::<T>()
    }

    /// Returns `true` if the struct has no fields.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn visible(&self, name: &str, access: FieldAccess) -> Option<usize> {
        let index = self.index_of(name)?;
        self.fields[index].access.contains(access).then_some(index)
    }
}

impl Value for DynamicStruct {
    #[inline]
    fn debug_name(&self) -> DebugName {
        DebugName::type_name::<Self>()
    }

    #[inline]
    fn clone_value(&self) -> Box<dyn Value> {
        Box::new(self.clone())
    }

    #[inline]
    fn assign(&mut self, value: &dyn Value) -> Result<(), AssignError> {
        assign_by_clone(self, value)
    }

    #[inline]
    fn as_struct(&self) -> Option<&dyn Struct> {
        Some(self)
    }
}

impl Struct for DynamicStruct {
    fn field(&self, name: &str) -> Option<&dyn Value> {
        let index = self.visible(name, FieldAccess::READ)?;
        Some(self.fields[index].value.as_ref())
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut dyn Value> {
        let index = self.visible(name, FieldAccess::WRITE)?;
        Some(self.fields[index].value.as_mut())
    }

    #[inline]
    fn field_len(&self) -> usize {
        self.fields.len()
    }

    fn field_info_at(&self, index: usize) -> Option<FieldInfo<'_>> {
        let field = self.fields.get(index)?;
        Some(FieldInfo::new(&field.name, field.access))
    }

    fn call_accessor(&self, name: &str) -> Option<Box<dyn Value>> {
        let accessor = self.accessors.get(name)?;
        Some(accessor(self))
    }

    #[inline]
    fn has_accessor(&self, name: &str) -> bool {
        self.accessors.contains_key(name)
    }
}

impl fmt::Debug for DynamicStruct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("DynamicStruct");
        for field in &self.fields {
            debug.field(&field.name, &field.value.debug_name());
        }
        debug.finish_non_exhaustive()
    }
}

impl<N: Into<Cow<'static, str>>> FromIterator<(N, Box<dyn Value>)> for DynamicStruct {
    fn from_iter<T: IntoIterator<Item = (N, Box<dyn Value>)>>(fields: T) -> Self {
        let mut dynamic = DynamicStruct::new();
        for (name, value) in fields {
            dynamic.insert_boxed(name, value);
        }
        dynamic
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;

    use super::DynamicStruct;
    use crate::ops::{FieldAccess, Struct};
    use crate::value::Value;

    #[test]
    fn insert_keeps_position_on_replace() {
        let mut row = DynamicStruct::new()
            .with("id", 1_u32)
            .with("name", String::from("Ann"));
        row.insert("id", 2_u32);

        assert_eq!(row.field_len(), 2);
        assert_eq!(row.field_info_at(0).unwrap().name(), "id");
        assert_eq!(row.get::<u32>("id"), Some(&2));
    }

    #[test]
    fn access_flags_gate_field_lookup() {
        let mut row = DynamicStruct::new();
        row.insert_with_access("created", 10_u64, FieldAccess::READ);
        row.insert_with_access("secret", 20_u64, FieldAccess::WRITE);

        assert!(row.field("created").is_some());
        assert!(row.field_mut("created").is_none());
        assert!(row.field("secret").is_none());
        assert!(row.field_mut("secret").is_some());
        assert!(!row.field_info("secret").unwrap().is_readable());
    }

    #[test]
    fn remove_shifts_later_fields() {
        let mut row = DynamicStruct::new()
            .with("a", 1_i32)
            .with("b", 2_i32)
            .with("c", 3_i32);

        let removed = row.remove("a").unwrap();
        assert_eq!(removed.downcast_ref::<i32>(), Some(&1));
        assert_eq!(row.index_of("b"), Some(0));
        assert_eq!(row.index_of("c"), Some(1));
        assert_eq!(row.get::<i32>("c"), Some(&3));
        assert!(row.remove("a").is_none());
    }

    #[test]
    fn clone_copies_fields_and_accessors() {
        let row = DynamicStruct::new()
            .with("n", 4_i32)
            .with_accessor("twice", |this| this.get::<i32>("n").copied().unwrap_or(0) * 2);

        let copy = row.clone_value();
        let copy = copy.as_struct().unwrap();

        assert_eq!(copy.field_as::<i32>("n"), Some(&4));
        assert!(copy.has_accessor("twice"));
        let twice = copy.call_accessor("twice").unwrap();
        assert_eq!(twice.downcast_ref::<i32>(), Some(&8));
    }

    #[test]
    fn collects_from_pairs() {
        let row: DynamicStruct = [
            ("x", Box::new(1.5_f32) as Box<dyn Value>),
            ("y", Box::new(2.5_f32) as Box<dyn Value>),
        ]
        .into_iter()
        .collect();

        assert_eq!(row.field_len(), 2);
        assert_eq!(row.get::<f32>("y"), Some(&2.5));
    }
}
