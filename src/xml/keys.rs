//! Key normalization between FedEx element names and canonical keys.
//!
//! FedEx names elements in capitalized-word style (`RateReplyDetails`).
//! Response trees are exposed with snake_case keys (`rate_reply_details`),
//! and free-form request bags are written with snake_case keys that are
//! converted back when the XML is emitted.

/// Converts an element name to its canonical snake_case key.
///
/// A word boundary is placed before an uppercase letter that follows a
/// lowercase letter or digit, and before the last uppercase letter of an
/// acronym run when a lowercase letter follows it. Hyphens become
/// underscores.
///
/// # Example
///
/// ```rust
/// use fedex_api::xml::to_canonical;
///
/// assert_eq!(to_canonical("RateReplyDetails"), "rate_reply_details");
/// assert_eq!(to_canonical("HTTPHeader"), "http_header");
/// ```
#[must_use]
pub fn to_canonical(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    let mut out = String::with_capacity(key.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(char::is_ascii_lowercase);
            let after_word = prev.is_ascii_lowercase() || prev.is_ascii_digit();
            let ends_acronym = (prev.is_ascii_uppercase() || prev.is_ascii_digit()) && next_is_lower;
            if after_word || ends_acronym {
                out.push('_');
            }
        }
        if c == '-' {
            out.push('_');
        } else {
            out.push(c.to_ascii_lowercase());
        }
    }

    out
}

/// Converts a canonical snake_case key to a FedEx element name.
///
/// The first character and every character following an underscore are
/// uppercased; the underscores are dropped. Characters that are already
/// uppercase are kept, so an element name passes through unchanged.
///
/// # Example
///
/// ```rust
/// use fedex_api::xml::to_external;
///
/// assert_eq!(to_external("customs_value"), "CustomsValue");
/// assert_eq!(to_external("CustomsValue"), "CustomsValue");
/// ```
#[must_use]
pub fn to_external(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut upper_next = true;

    for c in key.chars() {
        if c == '_' {
            upper_next = true;
            continue;
        }
        if upper_next {
            out.push(c.to_ascii_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }

    out
}
