// crates/kbri-core/src/text.rs

/// Convert a string into a folded key suitable for indexing and comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Łódź` -> `Lodz`)
/// 2\) Normalize to lowercase
/// 3\) Trim surrounding whitespace
///
/// # Examples
///
/// ```rust
/// use kbri_core::text::fold_key;
///
/// assert_eq!(fold_key("Łódź"), "lodz");
/// assert_eq!(fold_key("  São Paulo "), "sao paulo");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s.trim()).to_lowercase()
}

/// Parses an optional cell into an `f64`, trimming whitespace.
///
/// Returns `None` for missing, blank or unparsable input.
pub fn parse_opt_f64(s: Option<&str>) -> Option<f64> {
    s.and_then(|v| v.trim().parse::<f64>().ok())
}

/// Parses an optional population cell.
///
/// Accepts plain integers and the float form some exports write
/// (`"2148000.0"`). Negative or non-finite values are treated as missing.
pub fn parse_opt_population(s: Option<&str>) -> Option<u64> {
    let v = s?.trim();
    if v.is_empty() {
        return None;
    }
    if let Ok(n) = v.parse::<u64>() {
        return Some(n);
    }
    match v.parse::<f64>() {
        Ok(f) if f.is_finite() && f >= 0.0 => Some(f as u64),
        _ => None,
    }
}
