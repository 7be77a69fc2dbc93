use core::fmt;

const ANONYMOUS_NAME: &str = "_unknown_";

// -----------------------------------------------------------------------------
// DebugName

/// A type label carried by mapping errors and log lines.
///
/// With `debug_assertions` or the `debug` feature, it stores the type name
/// and prints it collapsed (`my_app::dto::PersonView` → `PersonView`,
/// `Option<alloc::string::String>` → `Option<String>`).
/// Otherwise it is zero-sized and prints `_unknown_`.
///
/// # Examples
///
/// ```
/// use vc_mapper::utils::DebugName;
///
/// let name = DebugName::type_name::<Option<String>>();
/// # #[cfg(any(debug_assertions, feature = "debug"))]
/// assert_eq!(name.to_string(), "Option<String>");
///
/// assert_eq!(DebugName::anonymous().to_string(), "_unknown_");
/// ```
#[derive(Clone, Copy)]
pub struct DebugName {
    #[cfg(any(debug_assertions, feature = "debug"))]
    name: fn() -> &'static str,
}

impl DebugName {
    /// Creates a label for `T`.
    #[inline(always)]
    pub const fn type_name<T: ?Sized>() -> Self {
        #[cfg(any(debug_assertions, feature = "debug"))]
        {
            Self {
                name: core::any::type_name::<T>,
            }
        }
        #[cfg(not(any(debug_assertions, feature = "debug")))]
        {
            Self {}
        }
    }

    /// Creates a label that always prints `_unknown_`.
    #[inline(always)]
    pub const fn anonymous() -> Self {
        #[cfg(any(debug_assertions, feature = "debug"))]
        {
            Self {
                name: || ANONYMOUS_NAME,
            }
        }
        #[cfg(not(any(debug_assertions, feature = "debug")))]
        {
            Self {}
        }
    }

    /// Returns the full, uncollapsed type name when it is available.
    #[inline]
    pub fn full_name(&self) -> Option<&'static str> {
        #[cfg(any(debug_assertions, feature = "debug"))]
        {
            Some((self.name)())
        }
        #[cfg(not(any(debug_assertions, feature = "debug")))]
        {
            None
        }
    }
}

/// Writes `full_name` with every path segment collapsed to its last part.
///
/// `<`, `>`, `,` and the other separators are kept so generic arguments stay
/// readable.
#[inline(never)]
#[cfg(any(debug_assertions, feature = "debug"))]
fn collapsed_fmt(full_name: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fn collapse(segment: &str) -> &str {
        let mut parts = segment.rsplit("::");
        let last = parts.next().unwrap_or(segment);

        // Keep `Enum::Variant` style pairs, uppercase heuristic.
        if let Some(second_last) = parts.next()
            && second_last.starts_with(char::is_uppercase)
        {
            let index = segment.len() - last.len() - second_last.len() - 2;
            &segment[index..]
        } else {
            last
        }
    }

    const SEPARATORS: [char; 9] = [' ', '<', '>', '(', ')', '[', ']', ',', ';'];

    let mut rest = full_name;

    while let Some(index) = rest.find(|c| SEPARATORS.contains(&c)) {
        f.write_str(collapse(&rest[..index]))?;
        f.write_str(&rest[index..=index])?;
        rest = &rest[(index + 1)..];
    }

    f.write_str(collapse(rest))
}

impl fmt::Display for DebugName {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        #[cfg(any(debug_assertions, feature = "debug"))]
        {
            collapsed_fmt((self.name)(), f)
        }
        #[cfg(not(any(debug_assertions, feature = "debug")))]
        {
            f.write_str(ANONYMOUS_NAME)
        }
    }
}

impl fmt::Debug for DebugName {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
#[cfg(any(debug_assertions, feature = "debug"))]
mod tests {
    use alloc::string::ToString;
    use alloc::vec::Vec;

    use super::DebugName;

    struct PersonView;

    #[test]
    fn collapses_module_paths() {
        assert_eq!(DebugName::type_name::<PersonView>().to_string(), "PersonView");
        assert_eq!(
            DebugName::type_name::<Vec<Option<PersonView>>>().to_string(),
            "Vec<Option<PersonView>>"
        );
        assert_eq!(
            DebugName::type_name::<(u8, alloc::string::String)>().to_string(),
            "(u8, String)"
        );
    }

    #[test]
    fn full_name_is_uncollapsed() {
        let name = DebugName::type_name::<PersonView>();
        assert!(name.full_name().unwrap().ends_with("::PersonView"));
        assert_eq!(DebugName::anonymous().full_name(), Some("_unknown_"));
    }
}
