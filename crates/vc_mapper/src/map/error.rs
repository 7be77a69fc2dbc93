use alloc::boxed::Box;
use alloc::string::String;
use core::error::Error as CoreError;

use thiserror::Error;

use crate::utils::DebugName;
use crate::value::AssignError;

/// Boxed error returned by a destination factory.
pub type BoxedError = Box<dyn CoreError + Send + Sync>;

// -----------------------------------------------------------------------------
// Error

/// Failure of a mapping call.
///
/// "No strategy matched" is not an error: such fields keep their value.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MapError {
    /// A field named by an override, or discovered through a field
    /// descriptor, could not be found on `owner`.
    #[error("member `{member}` was not found on `{owner}`")]
    MissingMember { owner: DebugName, member: String },

    /// The resolved value cannot be stored in the destination field.
    #[error("cannot assign `{from}` to field `{field}` of type `{to}` on `{owner}`")]
    MismatchedTypes {
        owner: DebugName,
        field: String,
        from: DebugName,
        to: DebugName,
    },

    /// The destination factory failed while mapping a sequence.
    #[error("failed to construct `{destination}` for element {index}")]
    ConstructionFailure {
        destination: DebugName,
        index: usize,
        #[source]
        source: BoxedError,
    },
}

impl MapError {
    #[inline]
    pub(crate) fn missing_member(owner: DebugName, member: &str) -> Self {
        Self::MissingMember {
            owner,
            member: String::from(member),
        }
    }

    #[inline]
    pub(crate) fn mismatched_types(owner: DebugName, field: &str, error: AssignError) -> Self {
        Self::MismatchedTypes {
            owner,
            field: String::from(field),
            from: error.from,
            to: error.to,
        }
    }

    /// Returns the member name for [`MissingMember`](Self::MissingMember).
    #[inline]
    pub fn missing_member_name(&self) -> Option<&str> {
        match self {
            Self::MissingMember { member, .. } => Some(member),
            _ => None,
        }
    }
}
