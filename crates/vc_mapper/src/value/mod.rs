//! The value capability: what a field holds and how it is copied.
//!
//! - [`Value`]: object-safe trait implemented by everything that can live in a
//!   mapped field.
//! - [`AssignError`]: returned when a value cannot be written into a field of
//!   another type.
//! - [`assign_by_clone`]: the standard `assign` implementation for `Clone`
//!   types.

// -----------------------------------------------------------------------------
// Modules

mod assign_error;
mod impls;

// -----------------------------------------------------------------------------
// Exports

pub use assign_error::AssignError;

use alloc::boxed::Box;
use core::any::Any;

use crate::ops::Struct;
use crate::utils::DebugName;

// -----------------------------------------------------------------------------
// Value

/// A type-erased field value.
///
/// Implemented for primitives, strings, `Option<T>`, `Vec<T>`,
/// [`DynamicStruct`](crate::ops::DynamicStruct) and every type using
/// [`#[derive(Mappable)]`](crate::derive::Mappable).
///
/// # Examples
///
/// ```
/// use vc_mapper::Value;
///
/// let mut target: Option<u32> = None;
/// let source: Box<dyn Value> = Box::new(7_u32);
///
/// target.assign(source.as_ref()).unwrap();
/// assert_eq!(target, Some(7));
///
/// assert!(String::new().assign(&7_u32).is_err());
/// ```
pub trait Value: Any + Send + Sync {
    /// Returns the label of the concrete type.
    fn debug_name(&self) -> DebugName;

    /// Returns a deep copy of `self`.
    fn clone_value(&self) -> Box<dyn Value>;

    /// Overwrites `self` with a copy of `value`.
    ///
    /// Fails when `value` has a type that cannot be stored in `Self`.
    fn assign(&mut self, value: &dyn Value) -> Result<(), AssignError>;

    /// Returns `self` as a [`Struct`] if it carries named fields.
    ///
    /// `Option<T>` forwards to its payload, so an empty option is not a struct.
    #[inline]
    fn as_struct(&self) -> Option<&dyn Struct> {
        None
    }
}

impl dyn Value {
    /// Returns `true` if the concrete type is `T`.
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        let any: &dyn Any = self;
        any.is::<T>()
    }

    /// Downcasts to `&T`.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        let any: &dyn Any = self;
        any.downcast_ref::<T>()
    }

    /// Downcasts to `&mut T`.
    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        let any: &mut dyn Any = self;
        any.downcast_mut::<T>()
    }
}

impl core::fmt::Debug for dyn Value {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "dyn Value({})", self.debug_name())
    }
}

/// The [`Value::assign`] implementation for types that are `Clone`.
///
/// Succeeds only when `value` is exactly `T`.
///
/// # Examples
///
/// ```
/// use vc_mapper::value::assign_by_clone;
///
/// let mut name = String::from("old");
/// assign_by_clone(&mut name, &String::from("new")).unwrap();
/// assert_eq!(name, "new");
///
/// assert!(assign_by_clone(&mut name, &1_i64).is_err());
/// ```
pub fn assign_by_clone<T: Value + Clone>(target: &mut T, value: &dyn Value) -> Result<(), AssignError> {
    match value.downcast_ref::<T>() {
        Some(value) => {
            target.clone_from(value);
            Ok(())
        }
        None => Err(AssignError::new::<T>(value)),
    }
}
