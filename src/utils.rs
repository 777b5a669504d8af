/// Placeholder for any value the page did not provide.
pub const NOT_AVAILABLE: &str = "n/a";

/// Title-case a free-text value: "ACME FREIGHT  LLC" → "Acme Freight Llc".
///
/// The `"n/a"` sentinel passes through untouched.
pub fn start_case(text: &str) -> String {
    if text == NOT_AVAILABLE {
        return text.to_string();
    }
    text.split_whitespace()
        .map(capitalize_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Treat empty or missing values as `"n/a"`.
pub fn or_na(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}
