use thiserror::Error;

use crate::utils::DebugName;
use crate::value::Value;

/// A value could not be written into a field of another type.
#[derive(Debug, Error, Clone, Copy)]
#[error("cannot assign a value of type `{from}` to `{to}`")]
pub struct AssignError {
    /// Type of the value that was offered.
    pub from: DebugName,
    /// Type of the receiving field.
    pub to: DebugName,
}

impl AssignError {
    /// Creates an error for assigning `value` into a `T`.
    #[inline]
    pub fn new<T: ?Sized>(value: &dyn Value) -> Self {
        Self {
            from: value.debug_name(),
            to: DebugName::type_name::<T>(),
        }
    }
}
