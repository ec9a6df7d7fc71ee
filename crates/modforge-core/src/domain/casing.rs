//! Identifier case conversion.
//!
//! These follow the generator's own naming rules rather than a general
//! word-splitting algorithm: only underscores mark word boundaries for
//! Pascal/camel, and only a lower-to-upper transition marks one for kebab.
//! Inputs without those patterns come back unchanged.

/// ASCII word character (`[A-Za-z0-9_]`).
pub(crate) fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Convert to PascalCase.
///
/// Upper-cases the first character and the character following each
/// underscore, dropping that underscore.
///
/// | Input          | Output        |
/// |----------------|---------------|
/// | `user_profile` | `UserProfile` |
/// | `user`         | `User`        |
/// | `UserProfile`  | `UserProfile` |
pub fn to_pascal_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());
    let mut i = 0;

    if let Some(&first) = chars.first() {
        if is_word_char(first) {
            // A leading underscore is consumed, not upper-cased.
            if first != '_' {
                out.extend(first.to_uppercase());
            }
            i = 1;
        }
    }

    while i < chars.len() {
        let c = chars[i];
        match chars.get(i + 1) {
            Some(&next) if c == '_' && is_word_char(next) => {
                if next == '_' {
                    out.push('_');
                } else {
                    out.extend(next.to_uppercase());
                }
                i += 2;
            }
            _ => {
                out.push(c);
                i += 1;
            }
        }
    }

    out
}

/// Convert to camelCase.
///
/// Like [`to_pascal_case`] except the very first character is lower-cased.
pub fn to_camel_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c == '_' {
            match chars.next() {
                Some(next) => out.extend(next.to_uppercase()),
                None => out.push(c),
            }
        } else {
            out.push(c);
        }
    }

    let mut result = out.chars();
    match result.next() {
        Some(first) if is_word_char(first) => {
            let mut lowered: String = first.to_lowercase().collect();
            lowered.push_str(result.as_str());
            lowered
        }
        _ => out,
    }
}

/// Convert to kebab-case.
///
/// Inserts `-` between a lowercase letter and a following uppercase letter,
/// then lower-cases everything. Underscores are left alone.
pub fn to_kebab_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        out.push(c);
        if c.is_ascii_lowercase() && chars.peek().is_some_and(char::is_ascii_uppercase) {
            out.push('-');
        }
    }

    out.to_lowercase()
}
