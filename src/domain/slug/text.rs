// src/domain/slug/text.rs

/// Cut `text` to at most `max` code points without splitting a character.
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// True when `current` is `title_slug` itself or `title_slug`, one separator and
/// one or more ASCII digits. An empty `title_slug` never matches.
pub fn is_numbered_variant(current: &str, title_slug: &str, separator: &str) -> bool {
    if title_slug.is_empty() || separator.is_empty() {
        return false;
    }
    let Some(rest) = current.strip_prefix(title_slug) else {
        return false;
    };
    if rest.is_empty() {
        return true;
    }
    rest.strip_prefix(separator)
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}
