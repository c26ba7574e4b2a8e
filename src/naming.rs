//! # Naming Utilities
//!
//! Case conversion and English pluralization shared by configuration processing,
//! template rendering and the linter.
//!
//! Word boundaries are detected the same way everywhere:
//!
//! - any non-alphanumeric character (`_`, `-`, space, `.`) separates words
//! - a lowercase letter or digit followed by an uppercase letter starts a new word
//! - inside a run of capitals, the last capital starts a new word when it is followed
//!   by a lowercase letter (`HTTPServer` → `http`, `server`)
//!
//! ```rust
//! use standardize::naming::{pluralize, to_pascal_case, to_snake_case};
//!
//! assert_eq!(to_snake_case("UserProfile"), "user_profile");
//! assert_eq!(to_pascal_case("user_profile"), "UserProfile");
//! assert_eq!(pluralize("category"), "categories");
//! ```

use std::ops::Range;

/// Byte ranges of the words of an identifier.
fn word_spans(s: &str) -> Vec<Range<usize>> {
    let chars: Vec<(usize, char)> = s.char_indices().collect();
    let mut spans = Vec::new();
    let mut start: Option<usize> = None;

    for (i, &(at, ch)) in chars.iter().enumerate() {
        if !ch.is_alphanumeric() {
            if let Some(begin) = start.take() {
                spans.push(begin..at);
            }
            continue;
        }
        if let Some(begin) = start {
            if ch.is_uppercase() {
                let prev = chars[i - 1].1;
                let next_is_lower = chars.get(i + 1).is_some_and(|(_, c)| c.is_lowercase());
                if prev.is_lowercase()
                    || prev.is_ascii_digit()
                    || (prev.is_uppercase() && next_is_lower)
                {
                    spans.push(begin..at);
                    start = Some(at);
                }
            }
        } else {
            start = Some(at);
        }
    }
    if let Some(begin) = start {
        spans.push(begin..s.len());
    }
    spans
}

/// Split an identifier into lowercase words.
fn words(s: &str) -> Vec<String> {
    word_spans(s)
        .into_iter()
        .map(|span| s[span].to_lowercase())
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Convert an identifier to `snake_case`.
///
/// `UserProfile` → `user_profile`, `createdAt` → `created_at`, `UserID` → `user_id`.
pub fn to_snake_case(s: &str) -> String {
    words(s).join("_")
}

/// Convert an identifier to `PascalCase`.
///
/// Words are joined wherever splitting would not separate them again after
/// capitalization, so the output is stable under another snake/Pascal round trip
/// (`a_b_cde` → `AbCde`, not `ABCde`; `b_z9` → `Bz9`).
pub fn to_pascal_case(s: &str) -> String {
    let mut merged: Vec<String> = Vec::new();
    for word in words(s) {
        match merged.last_mut() {
            Some(last) if !splits_after(last, &word) => last.push_str(&word),
            _ => merged.push(word),
        }
    }
    merged.iter().map(|w| capitalize(w)).collect()
}

/// Whether `capitalize(prev) + capitalize(word)` is split between the two when read back.
///
/// A lone capital followed by another capital only starts a new word when a lowercase
/// letter comes next, and a one-letter `word` is always followed by a capital, a digit or
/// nothing.
fn splits_after(prev: &str, word: &str) -> bool {
    let mut chars = word.chars();
    if !chars.next().is_some_and(char::is_alphabetic) {
        return false;
    }
    let mut prev_chars = prev.chars();
    let prev_is_capital = prev_chars.next().is_some_and(char::is_alphabetic)
        && prev_chars.next().is_none();
    !prev_is_capital || chars.next().is_some_and(char::is_lowercase)
}

/// Convert an identifier to `camelCase`.
pub fn to_camel_case(s: &str) -> String {
    let pascal = to_pascal_case(s);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

const IRREGULAR: &[(&str, &str)] = &[
    ("person", "people"),
    ("child", "children"),
    ("man", "men"),
    ("woman", "women"),
    ("mouse", "mice"),
    ("goose", "geese"),
    ("tooth", "teeth"),
    ("foot", "feet"),
    ("ox", "oxen"),
];

const UNCOUNTABLE: &[&str] = &[
    "data",
    "equipment",
    "fish",
    "information",
    "metadata",
    "news",
    "series",
    "sheep",
    "species",
];

/// Words ending in `f`/`fe` that take a plain `s`.
const F_EXCEPTIONS: &[&str] = &["belief", "chef", "chief", "cliff", "proof", "roof", "safe"];

fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Pluralize an English noun, preserving the casing of the input.
///
/// Only the last word of a compound identifier is inflected
/// (`user_category` → `user_categories`, `SalesPerson` → `SalesPeople`). Characters after
/// the last word, such as a trailing `_`, are kept as they are.
pub fn pluralize(word: &str) -> String {
    let Some(span) = word_spans(word).pop() else {
        return word.to_string();
    };
    let (head, rest) = word.split_at(span.start);
    let (stem, tail) = rest.split_at(span.end - span.start);
    format!("{head}{}{tail}", pluralize_word(stem))
}

/// Pluralize a single word without separators.
fn pluralize_word(word: &str) -> String {
    let lower = word.to_lowercase();
    if UNCOUNTABLE.contains(&lower.as_str()) {
        return word.to_string();
    }
    if let Some((_, plural)) = IRREGULAR.iter().find(|(s, _)| *s == lower) {
        return if word.starts_with(char::is_uppercase) {
            capitalize(plural)
        } else {
            (*plural).to_string()
        };
    }

    let upper_tail = word.chars().last().is_some_and(char::is_uppercase);
    let suffix = |s: &str| if upper_tail { s.to_uppercase() } else { s.to_string() };

    if lower.ends_with('s')
        || lower.ends_with('x')
        || lower.ends_with('z')
        || lower.ends_with("ch")
        || lower.ends_with("sh")
    {
        return format!("{word}{}", suffix("es"));
    }

    let mut rev = lower.chars().rev();
    let last_char = rev.next();
    let before_last = rev.next();

    if last_char == Some('y') && before_last.is_some_and(|c| !is_vowel(c)) {
        return format!("{}{}", &word[..word.len() - 1], suffix("ies"));
    }
    if !F_EXCEPTIONS.contains(&lower.as_str()) {
        if lower.ends_with("fe") {
            return format!("{}{}", &word[..word.len() - 2], suffix("ves"));
        }
        if last_char == Some('f') && before_last != Some('f') {
            return format!("{}{}", &word[..word.len() - 1], suffix("ves"));
        }
    }
    format!("{word}{}", suffix("s"))
}
