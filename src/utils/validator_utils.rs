use once_cell::sync::Lazy;
use regex::Regex;

// local@domain.tld shape only; deliverability is never checked.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Form values count as present only when non-empty. Whitespace is kept as-is.
pub fn is_present(value: Option<&str>) -> bool {
    matches!(value, Some(v) if !v.is_empty())
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}
