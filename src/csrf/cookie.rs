//! Cookie String Parsing
//!
//! Reads single values out of a `Cookie`-style string
//! (`"a=1; b=2; csrftoken=abc"`).

/// Returns the percent-decoded value of the first cookie entry that starts
/// with `name`, or `None` when the cookie string is empty or nothing matches.
///
/// # Behaviour
///
/// * Entries are separated by `;` and trimmed before comparison.
/// * Matching is a **prefix** comparison: looking up `"csrf"` in
///   `"csrftoken=X"` yields `"X"`. Callers relying on exact keys must pick
///   names that are not prefixes of other cookies.
/// * The value is everything after `name` and one delimiter character.
/// * A value that does not decode to UTF-8 is treated as absent.
pub fn read_cookie(cookies: &str, name: &str) -> Option<String> {
    if cookies.is_empty() {
        return None;
    }

    let entry = cookies
        .split(';')
        .map(str::trim)
        .find(|entry| entry.starts_with(name))?;

    // Skip the name and the delimiter that follows it
    let mut rest = entry[name.len()..].chars();
    rest.next();

    match urlencoding::decode(rest.as_str()) {
        Ok(value) => Some(value.into_owned()),
        Err(e) => {
            tracing::warn!(cookie = name, "cookie value is not valid UTF-8: {e}");
            None
        }
    }
}
