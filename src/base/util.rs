/// Terminal width below which tables stop shrinking.
pub const MIN_TERM_WIDTH: usize = 60;

/// Compares two strings for equality, ignoring case. Exact match, not
/// substring.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// Returns the number of characters in `s`.
pub fn charlen(s: &str) -> usize {
    s.chars().count()
}
