/// Canonical identifier form of a raw icon name.
///
/// ASCII letters are uppercased, every run of other characters becomes a
/// single `_`, separators at either end are dropped, and a name starting with
/// a digit gets a leading `_`. Returns `None` when nothing alphanumeric is left.
///
/// # Example
/// ```
/// use ift_core::naming::canonicalize;
/// assert_eq!(canonicalize("amazon-pay").as_deref(), Some("AMAZON_PAY"));
/// assert_eq!(canonicalize("42.group").as_deref(), Some("_42_GROUP"));
/// assert_eq!(canonicalize("--"), None);
/// ```
#[must_use]
pub fn canonicalize(raw: &str) -> Option<String> {
    let mut out = String::with_capacity(raw.len() + 1);
    let mut pending_sep = false;

    for ch in raw.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_sep && !out.is_empty() {
                out.push('_');
            }
            pending_sep = false;
            out.push(ch.to_ascii_uppercase());
        } else {
            pending_sep = true;
        }
    }

    if out.is_empty() {
        return None;
    }
    if out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert(0, '_');
    }
    Some(out)
}

/// Key used to match a lookup query against canonical names: the query's own
/// canonical form, so `amazon-pay`, `AMAZON_PAY` and `Amazon Pay` meet on the
/// same entry. `None` when the query has no canonical form.
///
/// # Example
/// ```
/// use ift_core::naming::lookup_key;
/// assert_eq!(lookup_key("42-group").as_deref(), Some("_42_GROUP"));
/// assert_eq!(lookup_key("github").as_deref(), Some("GITHUB"));
/// assert_eq!(lookup_key("--"), None);
/// ```
#[inline]
#[must_use]
pub fn lookup_key(query: &str) -> Option<String> {
    canonicalize(query)
}

/// True if `name` is already in canonical form.
///
/// # Example
/// ```
/// use ift_core::naming::is_canonical;
/// assert!(is_canonical("GITHUB_ALT"));
/// assert!(!is_canonical("github-alt"));
/// ```
#[must_use]
pub fn is_canonical(name: &str) -> bool {
    canonicalize(name).is_some_and(|c| c == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_separator_runs() {
        assert_eq!(canonicalize("square--x  twitter").as_deref(), Some("SQUARE_X_TWITTER"));
    }

    #[test]
    fn trims_edge_separators() {
        assert_eq!(canonicalize("-github-").as_deref(), Some("GITHUB"));
        assert_eq!(canonicalize("_github").as_deref(), Some("GITHUB"));
    }

    #[test]
    fn leading_digit_gets_underscore() {
        assert_eq!(canonicalize("500px").as_deref(), Some("_500PX"));
    }

    #[test]
    fn non_ascii_is_a_separator() {
        assert_eq!(canonicalize("café-bar").as_deref(), Some("CAF_BAR"));
    }

    #[test]
    fn empty_or_symbols_only_rejected() {
        assert_eq!(canonicalize(""), None);
        assert_eq!(canonicalize(" .-"), None);
    }

    #[test]
    fn canonical_names_are_fixed_points() {
        for raw in ["font-awesome", "42-group", "x twitter", "ButtonL1"] {
            let once = canonicalize(raw).unwrap();
            assert_eq!(canonicalize(&once).as_deref(), Some(once.as_str()));
            assert!(is_canonical(&once));
        }
    }

    #[test]
    fn lookup_key_matches_canonical_form() {
        assert_eq!(lookup_key("github").as_deref(), Some("GITHUB"));
        assert_eq!(lookup_key("square github").as_deref(), Some("SQUARE_GITHUB"));
        assert_eq!(lookup_key("_42_GROUP"), lookup_key("42-group"));
        assert_eq!(lookup_key(""), None);
    }
}
