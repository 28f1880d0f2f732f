// src/domain/slug/options.rs
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::application::ports::entity::FieldAccessor;
use crate::application::ports::util::SlugStyle;
use crate::config::SlugDefaults;
use crate::domain::errors::InvalidOption;
use crate::domain::slug::value_objects::Locale;

pub const DEFAULT_SEPARATOR: &str = "-";
pub const DEFAULT_MAX_LENGTH: usize = 250;
pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_SUFFIX_START: u64 = 1;

pub type SourceFn = Arc<dyn Fn(&dyn FieldAccessor, Option<&Locale>) -> String + Send + Sync>;
pub type SuffixFn = Arc<dyn Fn(&str, u64) -> String + Send + Sync>;
pub type ScopeFn = Arc<dyn Fn(&dyn FieldAccessor) -> BTreeMap<String, String> + Send + Sync>;
pub type SkipFn = Arc<dyn Fn(&dyn FieldAccessor) -> bool + Send + Sync>;

#[derive(Clone)]
pub enum SlugSource {
    Fields(Vec<String>),
    Computed(SourceFn),
}

impl SlugSource {
    pub fn is_computed(&self) -> bool {
        matches!(self, Self::Computed(_))
    }
}

impl fmt::Debug for SlugSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fields(fields) => f.debug_tuple("Fields").field(fields).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Uniqueness {
    #[default]
    Unique,
    AllowDuplicates,
}

/// How letters outside the Latin script are treated by the normalizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Script {
    /// Fold everything to ASCII.
    #[default]
    Ascii,
    /// Keep non-Latin letters (Arabic, Cyrillic, ...) verbatim.
    Preserve,
}

/// Where the slug lives and how manual overrides are recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlugMode {
    #[default]
    Single,
    Translatable,
    /// Per-locale slugs kept in a separate slug store keyed by owner and locale.
    SharedTranslatable,
}

impl SlugMode {
    pub fn is_localized(self) -> bool {
        !matches!(self, Self::Single)
    }
}

/// Per entity-type slug configuration. Build it once and reuse it.
#[derive(Clone)]
pub struct SlugOptions {
    pub(crate) source: SlugSource,
    pub(crate) slug_field: String,
    pub(crate) separator: String,
    pub(crate) language: String,
    pub(crate) script: Script,
    pub(crate) max_length: usize,
    pub(crate) uniqueness: Uniqueness,
    pub(crate) suffix_start: u64,
    pub(crate) suffix_generator: Option<SuffixFn>,
    pub(crate) suffix_on_first_occurrence: bool,
    pub(crate) generate_on_create: bool,
    pub(crate) generate_on_update: bool,
    pub(crate) prevent_overwrite: bool,
    pub(crate) extra_scope: Option<ScopeFn>,
    pub(crate) skip_when: Option<SkipFn>,
    pub(crate) mode: SlugMode,
    pub(crate) locales: Vec<Locale>,
}

impl Default for SlugOptions {
    fn default() -> Self {
        Self {
            source: SlugSource::Fields(Vec::new()),
            slug_field: String::new(),
            separator: DEFAULT_SEPARATOR.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            script: Script::Ascii,
            max_length: DEFAULT_MAX_LENGTH,
            uniqueness: Uniqueness::Unique,
            suffix_start: DEFAULT_SUFFIX_START,
            suffix_generator: None,
            suffix_on_first_occurrence: false,
            generate_on_create: true,
            generate_on_update: true,
            prevent_overwrite: false,
            extra_scope: None,
            skip_when: None,
            mode: SlugMode::Single,
            locales: Vec::new(),
        }
    }
}

impl SlugOptions {
    pub fn create() -> Self {
        Self::default()
    }

    /// Options for a computed source in a locale mode; the locales cannot be discovered from fields.
    pub fn create_with_locales<I>(locales: I) -> Self
    where
        I: IntoIterator<Item = Locale>,
    {
        Self {
            locales: locales.into_iter().collect(),
            mode: SlugMode::Translatable,
            ..Self::default()
        }
    }

    pub fn generate_slugs_from<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.source = SlugSource::Fields(fields.into_iter().map(Into::into).collect());
        self
    }

    pub fn generate_slugs_with<F>(mut self, source: F) -> Self
    where
        F: Fn(&dyn FieldAccessor, Option<&Locale>) -> String + Send + Sync + 'static,
    {
        self.source = SlugSource::Computed(Arc::new(source));
        self
    }

    pub fn save_slugs_to(mut self, field: impl Into<String>) -> Self {
        self.slug_field = field.into();
        self
    }

    pub fn using_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn using_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn preserve_non_latin_scripts(mut self) -> Self {
        self.script = Script::Preserve;
        self
    }

    pub fn slugs_should_be_no_longer_than(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn allow_duplicate_slugs(mut self) -> Self {
        self.uniqueness = Uniqueness::AllowDuplicates;
        self
    }

    pub fn starting_suffix_from(mut self, start: u64) -> Self {
        self.suffix_start = start;
        self
    }

    pub fn using_suffix_generator<F>(mut self, generator: F) -> Self
    where
        F: Fn(&str, u64) -> String + Send + Sync + 'static,
    {
        self.suffix_generator = Some(Arc::new(generator));
        self
    }

    pub fn use_suffix_on_first_occurrence(mut self) -> Self {
        self.suffix_on_first_occurrence = true;
        self
    }

    pub fn do_not_generate_slugs_on_create(mut self) -> Self {
        self.generate_on_create = false;
        self
    }

    pub fn do_not_generate_slugs_on_update(mut self) -> Self {
        self.generate_on_update = false;
        self
    }

    pub fn prevent_overwrite(mut self) -> Self {
        self.prevent_overwrite = true;
        self
    }

    pub fn extra_scope<F>(mut self, scope: F) -> Self
    where
        F: Fn(&dyn FieldAccessor) -> BTreeMap<String, String> + Send + Sync + 'static,
    {
        self.extra_scope = Some(Arc::new(scope));
        self
    }

    /// Narrow uniqueness to records sharing the current values of `fields`.
    pub fn unique_within<I, S>(self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fields: Vec<String> = fields.into_iter().map(Into::into).collect();
        self.extra_scope(move |entity| {
            fields
                .iter()
                .map(|field| (field.clone(), entity.get(field, None).unwrap_or_default()))
                .collect()
        })
    }

    pub fn skip_generate_when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&dyn FieldAccessor) -> bool + Send + Sync + 'static,
    {
        self.skip_when = Some(Arc::new(predicate));
        self
    }

    pub fn translatable(mut self) -> Self {
        self.mode = SlugMode::Translatable;
        self
    }

    pub fn shared_translatable(mut self) -> Self {
        self.mode = SlugMode::SharedTranslatable;
        self
    }

    pub fn with_locales<I>(mut self, locales: I) -> Self
    where
        I: IntoIterator<Item = Locale>,
    {
        self.locales = locales.into_iter().collect();
        self
    }

    /// Apply environment-level defaults. Call before the per-type setters so those win.
    pub fn with_defaults(mut self, defaults: &SlugDefaults) -> Self {
        self.separator = defaults.separator().to_string();
        self.language = defaults.language().to_string();
        self.max_length = defaults.max_length();
        self.suffix_start = defaults.suffix_start();
        if defaults.preserve_scripts() {
            self.script = Script::Preserve;
        }
        self
    }

    pub fn validate(&self) -> Result<(), InvalidOption> {
        match &self.source {
            SlugSource::Fields(fields) if fields.iter().all(|f| f.trim().is_empty()) => {
                return Err(InvalidOption::MissingFromField);
            }
            SlugSource::Computed(_) if self.mode.is_localized() && self.locales.is_empty() => {
                return Err(InvalidOption::MissingLocales);
            }
            _ => {}
        }

        if self.slug_field.trim().is_empty() {
            return Err(InvalidOption::MissingSlugField);
        }

        if self.max_length == 0 {
            return Err(InvalidOption::InvalidMaximumLength);
        }

        if self.separator.is_empty() {
            return Err(InvalidOption::EmptySeparator);
        }

        Ok(())
    }

    pub fn source(&self) -> &SlugSource {
        &self.source
    }

    pub fn slug_field(&self) -> &str {
        &self.slug_field
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn script(&self) -> Script {
        self.script
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn uniqueness(&self) -> Uniqueness {
        self.uniqueness
    }

    pub fn suffix_start(&self) -> u64 {
        self.suffix_start
    }

    pub fn suffix_on_first_occurrence(&self) -> bool {
        self.suffix_on_first_occurrence
    }

    pub fn generates_on_create(&self) -> bool {
        self.generate_on_create
    }

    pub fn generates_on_update(&self) -> bool {
        self.generate_on_update
    }

    pub fn prevents_overwrite(&self) -> bool {
        self.prevent_overwrite
    }

    pub fn mode(&self) -> SlugMode {
        self.mode
    }

    pub fn locales(&self) -> &[Locale] {
        &self.locales
    }

    pub fn style(&self) -> SlugStyle<'_> {
        SlugStyle {
            separator: &self.separator,
            language: &self.language,
            script: self.script,
        }
    }

    /// Suffix for the `iteration`-th collision of `base`.
    pub fn suffix(&self, base: &str, iteration: u64) -> String {
        match &self.suffix_generator {
            Some(generator) => generator(base, iteration),
            None => iteration.to_string(),
        }
    }

    pub fn extra_scope_for(&self, entity: &dyn FieldAccessor) -> BTreeMap<String, String> {
        self.extra_scope
            .as_ref()
            .map(|scope| scope(entity))
            .unwrap_or_default()
    }

    pub fn should_skip(&self, entity: &dyn FieldAccessor) -> bool {
        self.skip_when
            .as_ref()
            .is_some_and(|predicate| predicate(entity))
    }
}

impl fmt::Debug for SlugOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlugOptions")
            .field("source", &self.source)
            .field("slug_field", &self.slug_field)
            .field("separator", &self.separator)
            .field("language", &self.language)
            .field("script", &self.script)
            .field("max_length", &self.max_length)
            .field("uniqueness", &self.uniqueness)
            .field("suffix_start", &self.suffix_start)
            .field("custom_suffix", &self.suffix_generator.is_some())
            .field("suffix_on_first_occurrence", &self.suffix_on_first_occurrence)
            .field("generate_on_create", &self.generate_on_create)
            .field("generate_on_update", &self.generate_on_update)
            .field("prevent_overwrite", &self.prevent_overwrite)
            .field("extra_scope", &self.extra_scope.is_some())
            .field("skip_when", &self.skip_when.is_some())
            .field("mode", &self.mode)
            .field("locales", &self.locales)
            .finish()
    }
}
