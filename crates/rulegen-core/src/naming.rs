//! Table name normalization.

/// Convert a raw table identifier to camelCase.
///
/// Words are separated by `_`, `-` or spaces. Each word gets its first ASCII
/// letter upper-cased, the rest of the word is kept as is, and the first
/// character of the result is lower-cased: `user_profiles` becomes
/// `userProfiles`, `Order-Items` becomes `orderItems`.
pub fn camel_case(raw: &str) -> String {
    let mut studly = String::with_capacity(raw.len());
    for word in raw.split(['_', '-', ' ']) {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            studly.push(first.to_ascii_uppercase());
            studly.push_str(chars.as_str());
        }
    }

    let mut chars = studly.chars();
    match chars.next() {
        Some(first) => {
            let mut camel = String::with_capacity(studly.len());
            camel.push(first.to_ascii_lowercase());
            camel.push_str(chars.as_str());
            camel
        }
        None => studly,
    }
}
