use alloc::borrow::Cow;

use crate::utils::HashMap;

/// Explicit `destination field → source field` pairs.
///
/// An override wins over every automatic strategy for its destination field.
/// The table is immutable once handed to a [`Mapper`](crate::Mapper) and is
/// never modified by a mapping call. Adding a destination that is already
/// present replaces its source.
///
/// With the `serde` feature the table (de)serializes as a plain string map,
/// so it can be loaded from configuration.
///
/// # Examples
///
/// ```
/// use vc_mapper::Overrides;
///
/// let overrides = Overrides::new()
///     .with("display_name", "name")
///     .with("street", "address_line");
///
/// assert_eq!(overrides.get("display_name"), Some("name"));
/// assert_eq!(overrides.get("name"), None);
/// assert_eq!(overrides.len(), 2);
///
/// let same: Overrides = [("display_name", "name"), ("street", "address_line")].into();
/// assert_eq!(same, overrides);
/// ```
#[derive(Clone, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Overrides {
    pairs: HashMap<Cow<'static, str>, Cow<'static, str>>,
}

impl Overrides {
    /// Creates an empty table.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the table with `destination` mapped from `source`.
    #[inline]
    pub fn with(
        mut self,
        destination: impl Into<Cow<'static, str>>,
        source: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.pairs.insert(destination.into(), source.into());
        self
    }

    /// Returns the source field overriding `destination`.
    #[inline]
    pub fn get(&self, destination: &str) -> Option<&str> {
        self.pairs.get(destination).map(|source| source.as_ref())
    }

    /// Returns `true` if `destination` is overridden.
    #[inline]
    pub fn contains(&self, destination: &str) -> bool {
        self.pairs.contains_key(destination)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterates over `(destination, source)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.pairs
            .iter()
            .map(|(destination, source)| (destination.as_ref(), source.as_ref()))
    }
}

impl<D, S> FromIterator<(D, S)> for Overrides
where
    D: Into<Cow<'static, str>>,
    S: Into<Cow<'static, str>>,
{
    fn from_iter<T: IntoIterator<Item = (D, S)>>(pairs: T) -> Self {
        let pairs = pairs
            .into_iter()
            .map(|(destination, source)| (destination.into(), source.into()))
            .collect();
        Self { pairs }
    }
}

impl<D, S, const N: usize> From<[(D, S); N]> for Overrides
where
    D: Into<Cow<'static, str>>,
    S: Into<Cow<'static, str>>,
{
    #[inline]
    fn from(pairs: [(D, S); N]) -> Self {
        pairs.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;

    use super::Overrides;

    #[test]
    fn later_pair_replaces_earlier() {
        let overrides = Overrides::new().with("name", "first").with("name", "last");
        assert_eq!(overrides.len(), 1);
        assert_eq!(overrides.get("name"), Some("last"));
    }

    #[test]
    fn collects_owned_and_borrowed_names() {
        let overrides: Overrides = [
            (String::from("title"), "heading"),
            (String::from("body"), "content"),
        ]
        .into_iter()
        .collect();

        let mut pairs: Vec<_> = overrides.iter().collect();
        pairs.sort();
        assert_eq!(pairs, [("body", "content"), ("title", "heading")]);
        assert!(overrides.contains("body"));
        assert!(!overrides.contains("content"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn loads_from_json() {
        let overrides: Overrides =
            serde_json::from_str(r#"{ "display_name": "name", "zip": "postal_code" }"#).unwrap();
        assert_eq!(overrides.get("zip"), Some("postal_code"));

        let json = serde_json::to_string(&Overrides::new().with("a", "b")).unwrap();
        assert_eq!(json, r#"{"a":"b"}"#);
    }
}
