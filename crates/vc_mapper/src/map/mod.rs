//! Field resolution and the mapping entry points.
//!
//! [`Mapper`] resolves every writable destination field against the source,
//! trying, in order, an [`Overrides`] entry, an exact name, a child field and
//! a registered accessor.

mod error;
mod mapper;
mod naming;
mod overrides;
mod resolve;

pub use error::{BoxedError, MapError};
pub use mapper::{Mapper, map_entities, map_entities_with, map_sequence};
pub use naming::split_child_name;
pub use overrides::Overrides;

pub(crate) use resolve::resolve_field;
