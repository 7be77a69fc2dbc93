//! The struct capability: named fields and accessors that the mapper can
//! discover at runtime.
//!
//! - [`Struct`]: implemented by `#[derive(Mappable)]` types and
//!   [`DynamicStruct`].
//! - [`FieldInfo`] / [`FieldAccess`]: the per-field descriptor, name plus
//!   read/write capability.
//! - [`DynamicStruct`]: a struct whose fields and accessors are assembled at
//!   runtime.

// -----------------------------------------------------------------------------
// Modules

mod dynamic_struct;
mod field_info;
mod struct_ops;

// -----------------------------------------------------------------------------
// Exports

pub use dynamic_struct::DynamicStruct;
pub use field_info::{FieldAccess, FieldInfo};
pub use struct_ops::{FieldInfoIter, Struct};
