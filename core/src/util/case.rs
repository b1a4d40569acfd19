//! ASCII case conversion between camelCase, snake_case and slug-case.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref MATCH_FIRST_CAP: Regex =
        Regex::new("(.)([A-Z][a-z]+)").expect("MATCH_FIRST_CAP is valid");
    static ref MATCH_ALL_CAP: Regex =
        Regex::new("([a-z0-9])([A-Z])").expect("MATCH_ALL_CAP is valid");
    static ref MATCH_UNDERSCORE: Regex = Regex::new("_+").expect("MATCH_UNDERSCORE is valid");
    static ref MATCH_DASH: Regex = Regex::new("-+").expect("MATCH_DASH is valid");
    static ref MATCH_SPACE: Regex = Regex::new(r"\s+").expect("MATCH_SPACE is valid");
}

fn split_words(s: &str, replacement: &str) -> String {
    let slug = MATCH_FIRST_CAP.replace_all(s, replacement);
    let slug = MATCH_ALL_CAP.replace_all(&slug, replacement);
    slug.to_lowercase()
}

/// Lowercase `s`, inserting `sep` at every camel-case word boundary.
pub fn slugify(s: &str, sep: &str) -> String {
    // `$` is the capture-group sigil in replacement strings.
    let replacement = format!("${{1}}{}${{2}}", sep.replace('$', "$$"));
    split_words(s, &replacement)
}

pub fn camel_to_snake(s: &str) -> String {
    split_words(s, "${1}_${2}")
}

pub fn camel_to_slug(s: &str) -> String {
    split_words(s, "${1}-${2}")
}

pub fn snake_to_camel(s: &str, capital: bool) -> String {
    camelize(s, capital, &MATCH_UNDERSCORE)
}

pub fn slug_to_camel(s: &str, capital: bool) -> String {
    camelize(s, capital, &MATCH_DASH)
}

fn camelize(s: &str, capital: bool, separators: &Regex) -> String {
    let spaced = separators.replace_all(s, " ");
    let titled = title_case(spaced.trim());
    let joined = MATCH_SPACE.replace_all(&titled, "");

    let mut chars = joined.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut out = String::with_capacity(joined.len());
    if capital {
        out.extend(first.to_uppercase());
    } else {
        out.extend(first.to_lowercase());
    }
    out.push_str(chars.as_str());
    out
}

/// Uppercase the first letter of every word.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut word_start = true;
    for c in s.chars() {
        if word_start {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        word_start = is_separator(c);
    }
    out
}

fn is_separator(c: char) -> bool {
    if c.is_ascii() {
        return !(c.is_ascii_alphanumeric() || c == '_');
    }
    if c.is_alphanumeric() {
        return false;
    }
    c.is_whitespace()
}
