//! Small helpers shared by the capability layer and the mapper.

// -----------------------------------------------------------------------------
// Modules

mod debug_name;
mod hash;

// -----------------------------------------------------------------------------
// Exports

pub use debug_name::DebugName;
pub use hash::{FixedHashState, FixedHasher, HashMap};
