// tests/support/builders.rs
use sluggable_core::domain::slug::{Locale, SlugOptions};
use sluggable_core::infrastructure::record::Record;

pub fn locale(code: &str) -> Locale {
    Locale::new(code).unwrap()
}

/// `name` から `url` へ生成する基本設定
pub fn title_options() -> SlugOptions {
    SlugOptions::create()
        .generate_slugs_from(["name"])
        .save_slugs_to("url")
}

/// ロケールごとの `slug` フィールドへ生成する設定
pub fn translatable_options() -> SlugOptions {
    SlugOptions::create()
        .generate_slugs_from(["name"])
        .save_slugs_to("slug")
        .translatable()
}

/// 別テーブルに保存する共有スラッグ設定
pub fn shared_options() -> SlugOptions {
    translatable_options().shared_translatable()
}

pub fn model(name: &str) -> Record {
    Record::new().with("name", name)
}

/// ロケールごとの値を持つレコードを組み立てる
pub struct TranslatableModelBuilder {
    record: Record,
}

impl TranslatableModelBuilder {
    pub fn new() -> Self {
        Self {
            record: Record::new().with_translatable(["name", "other_field", "slug"]),
        }
    }

    pub fn name(mut self, code: &str, value: &str) -> Self {
        self.record.set_translation("name", &locale(code), value);
        self
    }

    pub fn other(mut self, code: &str, value: &str) -> Self {
        self.record.set_translation("other_field", &locale(code), value);
        self
    }

    pub fn slug(mut self, code: &str, value: &str) -> Self {
        self.record.set_translation("slug", &locale(code), value);
        self
    }

    pub fn plain(mut self, field: &str, value: &str) -> Self {
        self.record.put(field, value);
        self
    }

    pub fn fallback(mut self, code: &str) -> Self {
        self.record = self.record.with_fallback_locale(locale(code));
        self
    }

    pub fn build(self) -> Record {
        self.record
    }
}
