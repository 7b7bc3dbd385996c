//! Token parsing shared by the backends.

/// `true` only for the literal `true`, case-insensitive, surrounding whitespace ignored.
pub fn parse_strict_bool(raw: &str) -> bool {
    raw.trim().eq_ignore_ascii_case("true")
}

/// `true` for `true`, `1` or `yes`, case-insensitive, surrounding whitespace ignored.
pub fn parse_lenient_bool(raw: &str) -> bool {
    let value = raw.trim().to_ascii_lowercase();
    matches!(value.as_str(), "true" | "1" | "yes")
}

/// Base-10 integer with surrounding whitespace ignored.
pub fn parse_int(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}
