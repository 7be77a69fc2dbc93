#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Extern Self

// The derive macro emits `::vc_mapper::...` paths, this alias lets the crate
// use its own derive (mainly in tests).
extern crate self as vc_mapper;

// -----------------------------------------------------------------------------
// no_std support

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

pub mod map;
pub mod ops;
pub mod utils;
pub mod value;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use map::{MapError, Mapper, Overrides};
pub use map::{map_entities, map_entities_with, map_sequence};
pub use ops::{DynamicStruct, FieldAccess, FieldInfo, Struct};
pub use value::{AssignError, Value};

pub use vc_mapper_derive as derive;
pub use vc_mapper_derive::Mappable;
