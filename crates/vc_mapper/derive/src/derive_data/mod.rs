//! Parsing of the derive input into a [`MappableStruct`].

// -----------------------------------------------------------------------------
// Modules

mod field_attributes;
mod mappable_struct;
mod type_attributes;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use field_attributes::{FieldAccess, FieldAttributes};
pub(crate) use mappable_struct::MappableStruct;
pub(crate) use type_attributes::{AccessorTarget, TypeAttributes};
