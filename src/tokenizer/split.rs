/// Character classes that identifier splitting distinguishes.
/// A token boundary falls wherever the class changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Upper,
    Lower,
    Digit,
    /// letters without case (CJK, etc.)
    OtherLetter,
    Space,
    Underscore,
    Punct,
}

#[inline]
fn char_class(c: char) -> CharClass {
    if c.is_uppercase() {
        CharClass::Upper
    } else if c.is_lowercase() {
        CharClass::Lower
    } else if c.is_numeric() {
        CharClass::Digit
    } else if c.is_alphabetic() {
        CharClass::OtherLetter
    } else if c.is_whitespace() {
        CharClass::Space
    } else if c == '_' {
        CharClass::Underscore
    } else {
        CharClass::Punct
    }
}

/// Split a lemma at identifier-style boundaries.
///
/// Boundaries are character-class changes, with one exception: when an
/// uppercase run is followed by a lowercase letter, the last uppercase letter
/// starts the next part (`"MAXNumber"` -> `"MAX"`, `"Number"`).
/// Case is preserved and every input character lands in exactly one part.
///
/// # Examples
/// ```
/// use source_similarity::tokenizer::split::split_identifier;
/// assert_eq!(split_identifier("camelCase"), vec!["camel", "Case"]);
/// assert_eq!(split_identifier("top1Results"), vec!["top", "1", "Results"]);
/// ```
pub fn split_identifier(lemma: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut chars = lemma.char_indices();
    let Some((_, first)) = chars.next() else {
        return parts;
    };

    let mut start = 0;
    let mut prev_idx = 0;
    let mut current = char_class(first);
    for (idx, c) in chars {
        let class = char_class(c);
        if class == current {
            prev_idx = idx;
            continue;
        }
        if class == CharClass::Lower && current == CharClass::Upper {
            // "Camel": a single leading capital stays with its word
            if prev_idx != start {
                parts.push(&lemma[start..prev_idx]);
                start = prev_idx;
            }
        } else {
            parts.push(&lemma[start..idx]);
            start = idx;
        }
        current = class;
        prev_idx = idx;
    }
    parts.push(&lemma[start..]);
    parts
}

/// Whether `token` could name a variable: non-empty, only letters, digits and
/// underscores, and not starting with a digit.
#[inline]
pub fn is_identifier(token: &str) -> bool {
    let mut chars = token.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {
            chars.all(|c| c.is_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
