// src/infrastructure/transliteration.rs
//! Language specific transliteration overrides applied before generic ASCII folding.

use std::collections::HashMap;

use once_cell::sync::Lazy;

type Table = HashMap<char, &'static str>;

static GERMAN: &[(char, &str)] = &[
    ('ä', "ae"),
    ('ö', "oe"),
    ('ü', "ue"),
    ('Ä', "Ae"),
    ('Ö', "Oe"),
    ('Ü', "Ue"),
];

static DANISH_NORWEGIAN: &[(char, &str)] = &[
    ('æ', "ae"),
    ('ø', "oe"),
    ('å', "aa"),
    ('Æ', "Ae"),
    ('Ø', "Oe"),
    ('Å', "Aa"),
];

static TABLES: Lazy<HashMap<&'static str, Table>> = Lazy::new(|| {
    let build = |pairs: &[(char, &'static str)]| pairs.iter().copied().collect::<Table>();
    let mut tables = HashMap::new();
    tables.insert("de", build(GERMAN));
    tables.insert("da", build(DANISH_NORWEGIAN));
    tables.insert("nb", build(DANISH_NORWEGIAN));
    tables.insert("no", build(DANISH_NORWEGIAN));
    tables
});

/// `de-AT`, `de_CH` and `DE` all resolve to `de`.
fn primary_subtag(language: &str) -> String {
    language
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

/// Apply the table for `language`, returning the input unchanged when there is none.
pub fn apply_language_table(input: &str, language: &str) -> String {
    let Some(table) = TABLES.get(primary_subtag(language).as_str()) else {
        return input.to_string();
    };

    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match table.get(&ch) {
            Some(replacement) => out.push_str(replacement),
            None => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has_table(language: &str) -> bool {
        TABLES.contains_key(primary_subtag(language).as_str())
    }

    #[test]
    fn german_expands_umlauts() {
        assert_eq!(apply_language_table("Güte Öl", "de"), "Guete Oel");
    }

    #[test]
    fn region_subtags_resolve_to_language() {
        assert!(has_table("de-AT"));
        assert!(has_table("DA"));
        assert!(has_table("nb_NO"));
        assert!(!has_table("en"));
    }

    #[test]
    fn unknown_language_is_identity() {
        assert_eq!(apply_language_table("Güte", "en"), "Güte");
        assert_eq!(apply_language_table("Güte", ""), "Güte");
    }

    #[test]
    fn danish_letters() {
        assert_eq!(apply_language_table("Ærø Å", "da"), "Aeroe Aa");
    }
}
