//! Display formatting for measurements and labels.

/// `value` rounded to two decimals, without unit or locale.
pub fn format_value(value: f64) -> String {
    format_value_with(value, 2)
}

pub fn format_value_with(value: f64, decimals: usize) -> String {
    let s = format!("{:.*}", decimals, value);
    // Values that round to zero from below would print as "-0.00".
    match s.strip_prefix('-') {
        Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_string(),
        _ => s,
    }
}

/// Lower-case `s`, then upper-case its first character: `"POLYGON"` → `"Polygon"`.
pub fn capitalise(s: &str) -> String {
    let lower = s.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
