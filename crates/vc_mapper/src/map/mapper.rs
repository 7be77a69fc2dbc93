use alloc::string::String;
use alloc::vec::Vec;
use core::convert::Infallible;

use crate::map::{BoxedError, MapError, Overrides, resolve_field};
use crate::ops::Struct;
use crate::utils::DebugName;

// -----------------------------------------------------------------------------
// Mapper

/// Copies fields from a source struct into a destination struct.
///
/// For every writable destination field `D` the first matching strategy
/// provides the value:
///
/// 1. an [`Overrides`] entry `D → S` reads the source field `S`, which must exist;
/// 2. a readable source field named exactly `D`;
/// 3. a child field: `D` split as `{child}{Rest}` or `{child}_{rest}` (see
///    [`split_child_name`](crate::map::split_child_name)) reads
///    `source.child.rest`, one level deep, skipping empty options;
/// 4. the source accessor registered for `D` (`get_d` by convention).
///
/// Fields without a match keep their current value.
///
/// A `Mapper` only holds its overrides. It is immutable, cheap to share and
/// can be reused for any number of calls.
///
/// # Examples
///
/// ```
/// use vc_mapper::{Mappable, Mapper, Overrides};
///
/// #[derive(Mappable, Clone, Default)]
/// #[mapper(accessor = "age")]
/// struct Person {
///     id: u32,
///     name: String,
///     address: Address,
/// }
///
/// impl Person {
///     fn get_age(&self) -> u32 {
///         30
///     }
/// }
///
/// #[derive(Mappable, Clone, Default)]
/// struct Address {
///     street: String,
/// }
///
/// #[derive(Mappable, Clone, Default, Debug, PartialEq)]
/// struct PersonView {
///     id: u32,
///     display_name: String,
///     address_street: String,
///     age: u32,
/// }
///
/// let person = Person {
///     id: 1,
///     name: "Ann".into(),
///     address: Address { street: "Oak".into() },
/// };
///
/// let mapper = Mapper::with_overrides(Overrides::new().with("display_name", "name"));
/// let mut view = PersonView::default();
/// mapper.map_entities(&person, &mut view).unwrap();
///
/// assert_eq!(
///     view,
///     PersonView {
///         id: 1,
///         display_name: "Ann".into(),
///         address_street: "Oak".into(),
///         age: 30,
///     }
/// );
/// ```
#[derive(Clone, Default, Debug)]
pub struct Mapper {
    overrides: Overrides,
}

impl Mapper {
    /// Creates a mapper without overrides.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mapper using `overrides` for every call.
    #[inline]
    pub fn with_overrides(overrides: Overrides) -> Self {
        Self { overrides }
    }

    #[inline]
    pub fn overrides(&self) -> &Overrides {
        &self.overrides
    }

    /// Maps `source` into the existing `destination`.
    ///
    /// On error, fields processed before the failing one keep their new
    /// values.
    pub fn map_entities(
        &self,
        source: &dyn Struct,
        destination: &mut dyn Struct,
    ) -> Result<(), MapError> {
        let owner = destination.debug_name();
        let mut writable = 0_usize;
        let mut mapped = 0_usize;

        for index in 0..destination.field_len() {
            let name = match destination.field_info_at(index) {
                Some(info) if info.is_writable() => String::from(info.name()),
                _ => continue,
            };
            writable += 1;

            let Some(resolution) = resolve_field(source, &name, &self.overrides)? else {
                log::trace!("`{owner}.{name}` unresolved, left untouched");
                continue;
            };

            let target = destination
                .field_mut(&name)
                .ok_or_else(|| MapError::missing_member(owner, &name))?;
            target
                .assign(resolution.value())
                .map_err(|error| MapError::mismatched_types(owner, &name, error))?;

            log::trace!("`{owner}.{name}` <- {}", resolution.strategy());
            mapped += 1;
        }

        log::debug!(
            "mapped `{}` into `{owner}`: {mapped}/{writable} fields resolved",
            source.debug_name(),
        );
        Ok(())
    }

    /// Maps every element of `sources` into a new `D::default()`.
    ///
    /// See [`map_sequence_with`](Self::map_sequence_with).
    #[inline]
    pub fn map_sequence<'a, I, S, D>(&self, sources: I) -> Result<Vec<D>, MapError>
    where
        I: IntoIterator<Item = &'a S>,
        S: Struct + 'a,
        D: Struct + Default,
    {
        self.map_sequence_with(sources, || Ok::<D, Infallible>(D::default()))
    }

    /// Maps every element of `sources` into a destination built by `construct`.
    ///
    /// The output has one destination per source, in iteration order. The
    /// first failing element aborts the whole call, either with the factory
    /// error as [`MapError::ConstructionFailure`] or with the mapping error.
    ///
    /// # Examples
    ///
    /// ```
    /// use vc_mapper::{DynamicStruct, Mapper};
    ///
    /// let rows = [
    ///     DynamicStruct::new().with("id", 1_u32),
    ///     DynamicStruct::new().with("id", 2_u32),
    /// ];
    ///
    /// let out = Mapper::new()
    ///     .map_sequence_with(&rows, || {
    ///         Ok::<_, std::io::Error>(DynamicStruct::new().with("id", 0_u32))
    ///     })
    ///     .unwrap();
    ///
    /// let ids: Vec<u32> = out.iter().map(|row| *row.get::<u32>("id").unwrap()).collect();
    /// assert_eq!(ids, [1, 2]);
    /// ```
    pub fn map_sequence_with<'a, I, S, D, F, E>(
        &self,
        sources: I,
        mut construct: F,
    ) -> Result<Vec<D>, MapError>
    where
        I: IntoIterator<Item = &'a S>,
        S: Struct + 'a,
        D: Struct,
        F: FnMut() -> Result<D, E>,
        E: Into<BoxedError>,
    {
        let sources = sources.into_iter();
        let mut output = Vec::with_capacity(sources.size_hint().0);

        for (index, source) in sources.enumerate() {
            let mut destination = construct().map_err(|error| MapError::ConstructionFailure {
                destination: DebugName::type_name::<D>(),
                index,
                source: error.into(),
            })?;

            if let Err(error) = self.map_entities(source, &mut destination) {
                log::debug!("sequence mapping aborted at element {index}: {error}");
                return Err(error);
            }
            output.push(destination);
        }

        log::debug!(
            "mapped {} elements into `{}`",
            output.len(),
            DebugName::type_name::<D>(),
        );
        Ok(output)
    }

    /// Maps every element of `sources` and appends the results to `output`.
    ///
    /// `output` is only extended once every element succeeded.
    pub fn map_sequence_into<'a, I, S, D>(
        &self,
        sources: I,
        output: &mut Vec<D>,
    ) -> Result<(), MapError>
    where
        I: IntoIterator<Item = &'a S>,
        S: Struct + 'a,
        D: Struct + Default,
    {
        let mapped: Vec<D> = self.map_sequence(sources)?;
        output.extend(mapped);
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// Free functions

/// Maps `source` into `destination` without overrides.
///
/// Shorthand for `Mapper::new().map_entities(source, destination)`.
#[inline]
pub fn map_entities(source: &dyn Struct, destination: &mut dyn Struct) -> Result<(), MapError> {
    map_entities_with(source, destination, &Overrides::new())
}

/// Maps `source` into `destination` using `overrides`.
pub fn map_entities_with(
    source: &dyn Struct,
    destination: &mut dyn Struct,
    overrides: &Overrides,
) -> Result<(), MapError> {
    Mapper::with_overrides(overrides.clone()).map_entities(source, destination)
}

/// Maps every element of `sources` into a new `D::default()`, without
/// overrides.
#[inline]
pub fn map_sequence<'a, I, S, D>(sources: I) -> Result<Vec<D>, MapError>
where
    I: IntoIterator<Item = &'a S>,
    S: Struct + 'a,
    D: Struct + Default,
{
    Mapper::new().map_sequence(sources)
}
