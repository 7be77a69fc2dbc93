use alloc::boxed::Box;
use core::fmt;

use crate::map::{MapError, Overrides, split_child_name};
use crate::ops::Struct;
use crate::value::Value;

// -----------------------------------------------------------------------------
// Strategy

/// The strategy that resolved a destination field.
///
/// Strategies are tried in declaration order; the first match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Strategy {
    /// An [`Overrides`] entry named the source field.
    Override,
    /// A source field with exactly the same name.
    ExactName,
    /// A field of a child struct, `address_street` → `address.street`.
    ChildField,
    /// A zero-argument accessor registered for the field name.
    Accessor,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Override => "override",
            Self::ExactName => "exact name",
            Self::ChildField => "child field",
            Self::Accessor => "accessor",
        })
    }
}

// -----------------------------------------------------------------------------
// Resolution

enum Resolved<'a> {
    Borrowed(&'a dyn Value),
    Owned(Box<dyn Value>),
}

/// The value found for a destination field.
pub(crate) struct Resolution<'a> {
    strategy: Strategy,
    value: Resolved<'a>,
}

impl<'a> Resolution<'a> {
    #[inline]
    fn borrowed(strategy: Strategy, value: &'a dyn Value) -> Self {
        Self {
            strategy,
            value: Resolved::Borrowed(value),
        }
    }

    #[inline]
    pub(crate) fn strategy(&self) -> Strategy {
        self.strategy
    }

    #[inline]
    pub(crate) fn value(&self) -> &dyn Value {
        match &self.value {
            Resolved::Borrowed(value) => *value,
            Resolved::Owned(value) => value.as_ref(),
        }
    }
}

/// Finds the value for the destination field `field`.
///
/// `Ok(None)` means no strategy matched.
pub(crate) fn resolve_field<'a>(
    source: &'a dyn Struct,
    field: &str,
    overrides: &Overrides,
) -> Result<Option<Resolution<'a>>, MapError> {
    if let Some(source_field) = overrides.get(field) {
        return match read_field(source, source_field)? {
            Some(value) => Ok(Some(Resolution::borrowed(Strategy::Override, value))),
            None => Err(MapError::missing_member(source.debug_name(), source_field)),
        };
    }

    if let Some(value) = read_field(source, field)? {
        return Ok(Some(Resolution::borrowed(Strategy::ExactName, value)));
    }

    if let Some(value) = read_child_field(source, field)? {
        return Ok(Some(Resolution::borrowed(Strategy::ChildField, value)));
    }

    if let Some(value) = source.call_accessor(field) {
        return Ok(Some(Resolution {
            strategy: Strategy::Accessor,
            value: Resolved::Owned(value),
        }));
    }

    Ok(None)
}

/// Reads the readable field `name` of `owner`.
///
/// A descriptor that cannot be followed by a value is reported as
/// [`MapError::MissingMember`].
fn read_field<'a>(owner: &'a dyn Struct, name: &str) -> Result<Option<&'a dyn Value>, MapError> {
    match owner.field_info(name) {
        Some(info) if info.is_readable() => match owner.field(name) {
            Some(value) => Ok(Some(value)),
            None => Err(MapError::missing_member(owner.debug_name(), name)),
        },
        _ => Ok(None),
    }
}

/// One level of child traversal, `{child}{Rest}` or `{child}_{rest}`.
fn read_child_field<'a>(source: &'a dyn Struct, field: &str) -> Result<Option<&'a dyn Value>, MapError> {
    let Some((child, rest)) = split_child_name(field) else {
        return Ok(None);
    };
    let Some(child_value) = read_field(source, child)? else {
        return Ok(None);
    };
    // Empty options and scalars have no fields.
    let Some(child_struct) = child_value.as_struct() else {
        return Ok(None);
    };
    read_field(child_struct, rest)
}
