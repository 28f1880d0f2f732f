// tests/support/mocks/util.rs
use sluggable_core::application::ports::util::{SlugGenerator, SlugStyle};

/// 区切り文字だけを置き換え、大文字化するダミーのスラッグ生成器
pub struct UppercaseSlug;

impl SlugGenerator for UppercaseSlug {
    fn slugify(&self, input: &str, style: &SlugStyle<'_>) -> String {
        input
            .split_whitespace()
            .map(str::to_uppercase)
            .collect::<Vec<_>>()
            .join(style.separator)
    }
}
