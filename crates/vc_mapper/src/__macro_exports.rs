//! Items referenced by code generated from `#[derive(Mappable)]`.
//!
//! The calling crate may not have `extern crate alloc`, so everything the
//! generated code needs is routed through here.

pub use alloc::boxed::Box;
pub use core::any::Any;
pub use core::clone::Clone;
pub use core::marker::{Send, Sync};
pub use core::option::Option;
pub use core::result::Result;

pub use crate::ops::{FieldAccess, FieldInfo, Struct};
pub use crate::utils::DebugName;
pub use crate::value::{AssignError, Value, assign_by_clone};
