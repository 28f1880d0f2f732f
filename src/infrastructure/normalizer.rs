// src/infrastructure/normalizer.rs
use crate::application::ports::util::{SlugGenerator, SlugStyle};
use crate::domain::slug::options::Script;
use crate::infrastructure::transliteration::apply_language_table;
use slug::slugify;
use unicode_segmentation::UnicodeSegmentation;

#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str, style: &SlugStyle<'_>) -> String {
        match style.script {
            Script::Ascii => ascii_slug(input, style.separator, style.language),
            Script::Preserve => script_aware_slug(input, style.separator, style.language),
        }
    }
}

fn prepare(input: &str, language: &str) -> String {
    apply_language_table(input, language).replace('@', " at ")
}

fn ascii_slug(input: &str, separator: &str, language: &str) -> String {
    let folded = slugify(prepare(input, language));
    if separator == "-" {
        folded
    } else {
        // slugify only emits [a-z0-9-]
        folded.replace('-', separator)
    }
}

fn is_latin(c: char) -> bool {
    matches!(
        c as u32,
        0x00C0..=0x024F | 0x1E00..=0x1EFF | 0x2C60..=0x2C7F | 0xA720..=0xA7FF
    )
}

struct SlugWriter<'a> {
    out: String,
    separator: &'a str,
    pending_separator: bool,
}

impl<'a> SlugWriter<'a> {
    fn new(capacity: usize, separator: &'a str) -> Self {
        Self {
            out: String::with_capacity(capacity),
            separator,
            pending_separator: false,
        }
    }

    fn push(&mut self, text: &str) {
        if self.pending_separator && !self.out.is_empty() {
            self.out.push_str(self.separator);
        }
        self.pending_separator = false;
        self.out.extend(text.chars().flat_map(char::to_lowercase));
    }

    fn push_ascii(&mut self, text: &str) -> bool {
        let kept: String = text.chars().filter(char::is_ascii_alphanumeric).collect();
        if kept.is_empty() {
            return false;
        }
        self.push(&kept);
        true
    }

    fn separate(&mut self) {
        self.pending_separator = true;
    }

    fn finish(self) -> String {
        self.out
    }
}

/// Like the ASCII fold for Latin letters and symbols, but keeps letters of
/// other scripts untouched. Works on grapheme clusters so combining marks
/// (harakat, viramas, vowel signs) stay with their base letter.
fn script_aware_slug(input: &str, separator: &str, language: &str) -> String {
    let prepared = prepare(input, language);
    let mut writer = SlugWriter::new(prepared.len(), separator);

    for grapheme in prepared.graphemes(true) {
        let Some(base) = grapheme.chars().next() else {
            continue;
        };
        if base.is_ascii_alphanumeric() {
            // drops marks decomposed onto ASCII letters
            writer.push_ascii(grapheme);
        } else if base.is_ascii() || base.is_whitespace() {
            writer.separate();
        } else if !is_latin(base) && base.is_alphanumeric() {
            writer.push(grapheme);
        } else if !writer.push_ascii(&deunicode::deunicode(grapheme)) {
            // Latin letters fold to ASCII, symbols expand (`€` -> `eur`)
            writer.separate();
        }
    }

    writer.finish()
}
