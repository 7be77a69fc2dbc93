//! Name conventions used by the resolution strategies.

/// Splits a destination field name into `(child, rest)` for child-field
/// matching.
///
/// The boundary is the first position, after at least one lowercase letter
/// has been seen, where either
/// - an uppercase letter starts (`AddressStreet` → `Address` + `Street`,
///   `addressStreet` → `address` + `Street`), or
/// - a `_` is followed by more characters (`address_street` → `address` +
///   `street`); the separator belongs to neither part.
///
/// Returns `None` when there is no such boundary.
///
/// # Examples
///
/// ```
/// use vc_mapper::map::split_child_name;
///
/// assert_eq!(split_child_name("AddressStreet"), Some(("Address", "Street")));
/// assert_eq!(split_child_name("address_zip_code"), Some(("address", "zip_code")));
/// assert_eq!(split_child_name("Name"), None);
/// ```
pub fn split_child_name(name: &str) -> Option<(&str, &str)> {
    let mut seen_lowercase = false;

    for (index, ch) in name.char_indices() {
        if seen_lowercase {
            if ch.is_uppercase() {
                return Some((&name[..index], &name[index..]));
            }
            if ch == '_' {
                let rest = &name[(index + 1)..];
                if rest.is_empty() {
                    return None;
                }
                return Some((&name[..index], rest));
            }
        }
        if ch.is_lowercase() {
            seen_lowercase = true;
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::split_child_name;

    #[test]
    fn camel_case_boundary() {
        assert_eq!(split_child_name("AddressStreet"), Some(("Address", "Street")));
        assert_eq!(split_child_name("addressStreetName"), Some(("address", "StreetName")));
        // Leading capitals are part of the child name.
        assert_eq!(split_child_name("URLPath"), None);
        assert_eq!(split_child_name("HTTPsProxy"), Some(("HTTPs", "Proxy")));
    }

    #[test]
    fn snake_case_boundary() {
        assert_eq!(split_child_name("address_street"), Some(("address", "street")));
        assert_eq!(split_child_name("owner_first_name"), Some(("owner", "first_name")));
        assert_eq!(split_child_name("id2_value"), Some(("id2", "value")));
    }

    #[test]
    fn no_boundary() {
        assert_eq!(split_child_name(""), None);
        assert_eq!(split_child_name("name"), None);
        assert_eq!(split_child_name("Name"), None);
        assert_eq!(split_child_name("_private"), None);
        assert_eq!(split_child_name("trailing_"), None);
        assert_eq!(split_child_name("ID_NUMBER"), None);
    }

    #[test]
    fn non_ascii_names() {
        assert_eq!(split_child_name("straßeNummer"), Some(("straße", "Nummer")));
    }
}
