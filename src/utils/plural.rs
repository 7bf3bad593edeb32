//! Pluralization utilities for log lines.

/// Return "s" suffix for plural counts
///
/// # Examples
///
/// - `plural_s(0)` -> `"s"` (0 sites)
/// - `plural_s(1)` -> `""` (1 site)
#[inline]
pub fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Format count with noun, handling regular pluralization
///
/// - `plural_count(0, "site")` -> `"0 sites"`
/// - `plural_count(1, "site")` -> `"1 site"`
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, plural_s(count))
}

/// Format count with an explicit plural form (`category` / `categories`).
#[inline]
pub fn plural_count_with(count: usize, singular: &str, plural: &str) -> String {
    format!("{} {}", count, if count == 1 { singular } else { plural })
}
