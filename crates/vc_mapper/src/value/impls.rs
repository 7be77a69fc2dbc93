use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use crate::ops::Struct;
use crate::utils::DebugName;
use crate::value::{AssignError, Value, assign_by_clone};

// -----------------------------------------------------------------------------
// Scalars

macro_rules! impl_simple_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Value for $ty {
                #[inline]
                fn debug_name(&self) -> DebugName {
                    DebugName::type_name::<Self>()
                }

                #[inline]
                fn clone_value(&self) -> Box<dyn Value> {
                    Box::new(Clone::clone(self))
                }

                #[inline]
                fn assign(&mut self, value: &dyn Value) -> Result<(), AssignError> {
                    assign_by_clone(self, value)
                }
            }
        )*
    };
}

impl_simple_value!(
    (),
    bool,
    char,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    f32,
    f64,
    String,
    &'static str,
    Cow<'static, str>,
);

// -----------------------------------------------------------------------------
// Containers

impl<T: Value + Clone> Value for Option<T> {
    #[inline]
    fn debug_name(&self) -> DebugName {
        DebugName::type_name::<Self>()
    }

    #[inline]
    fn clone_value(&self) -> Box<dyn Value> {
        Box::new(self.clone())
    }

    /// Accepts both `Option<T>` and a bare `T`.
    fn assign(&mut self, value: &dyn Value) -> Result<(), AssignError> {
        if let Some(value) = value.downcast_ref::<Self>() {
            self.clone_from(value);
            return Ok(());
        }
        match value.downcast_ref::<T>() {
            Some(value) => {
                *self = Some(value.clone());
                Ok(())
            }
            None => Err(AssignError::new::<Self>(value)),
        }
    }

    #[inline]
    fn as_struct(&self) -> Option<&dyn Struct> {
        self.as_ref().and_then(Value::as_struct)
    }
}

impl<T: Value + Clone> Value for Vec<T> {
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
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::{String, ToString};
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::value::Value;

    #[test]
    fn scalar_assign_requires_same_type() {
        let mut id = 0_u32;
        id.assign(&42_u32).unwrap();
        assert_eq!(id, 42);

        let err = id.assign(&42_u64).unwrap_err();
        assert!(err.to_string().contains("u64"));
        assert_eq!(id, 42);
    }

    #[test]
    fn option_accepts_payload_and_option() {
        let mut nick: Option<String> = None;
        nick.assign(&String::from("ann")).unwrap();
        assert_eq!(nick.as_deref(), Some("ann"));

        nick.assign(&Option::<String>::None).unwrap();
        assert_eq!(nick, None);

        assert!(nick.assign(&1_i32).is_err());
    }

    #[test]
    fn clone_value_is_deep() {
        let tags = vec![String::from("a"), String::from("b")];
        let copy: Box<dyn Value> = tags.clone_value();
        assert_eq!(copy.downcast_ref::<Vec<String>>(), Some(&tags));
        assert!(copy.is::<Vec<String>>());
        assert!(!copy.is::<String>());
    }

    #[test]
    fn scalars_are_not_structs() {
        assert!(5_u8.as_struct().is_none());
        assert!(Some(5_u8).as_struct().is_none());
    }
}
