//! Label storage: the [`Catalog`] seam and the in-memory [`LabelCatalog`].
//!
//! # Invariants
//!
//! 1. **Exact lookup**: `lookup` answers only for the `(locale, key)` pair
//!    it is given; fallback policy belongs to the caller.
//!
//! 2. **Immutable once shared**: stores are populated before they are handed
//!    out behind an `Arc` and never mutated afterwards, so `LabelCatalog` is
//!    `Send + Sync`.
//!
//! 3. **Binds are the only validation point**: `lookup` never errors; only
//!    [`Catalog::bind_locale`] rejects a locale, and the in-memory store
//!    does so only in strict mode.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Missing key | Key not in the locale's table | `lookup` returns `None` |
//! | Missing locale | No table for the locale | `lookup` returns `None` |
//! | Strict bind miss | Strict store without the locale | `Err(InvalidLocaleError)` |
//! | Empty store | No tables added | All lookups return `None` |

use std::collections::HashMap;

use crate::labels;
use crate::locale::{Locale, languages};

/// A locale rejected by a catalog at bind time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidLocaleError {
    /// The locale the catalog refused.
    pub locale: Locale,
}

impl std::fmt::Display for InvalidLocaleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid locale: {}", self.locale)
    }
}

impl std::error::Error for InvalidLocaleError {}

/// Read access to a label store.
///
/// Implementations are shared across threads behind an `Arc`, hence the
/// `Send + Sync` bounds. A store answers exact questions; which locales get
/// tried in which order is the caller's policy.
pub trait Catalog: Send + Sync {
    /// Validate a locale before a provider binds to it.
    ///
    /// Called once per provider construction. The default accepts anything;
    /// stores that can enumerate their locales may reject unknown ones here.
    fn bind_locale(&self, _locale: &Locale) -> Result<(), InvalidLocaleError> {
        Ok(())
    }

    /// Exact `(locale, key)` lookup. `None` on miss.
    fn lookup(&self, locale: &Locale, key: &str) -> Option<&str>;
}

/// Labels for a single locale.
#[derive(Debug, Clone, Default)]
pub struct LocaleLabels {
    labels: HashMap<String, String>,
}

impl LocaleLabels {
    /// Create an empty label table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert display text for a key, replacing any previous text.
    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.labels.insert(key.into(), text.into());
    }

    /// Look up display text by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.labels.get(key).map(String::as_str)
    }

    /// Number of labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the table has no labels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterate over all keys in this table.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.labels.keys().map(String::as_str)
    }
}

/// In-memory label store keyed by locale.
///
/// # Example
///
/// ```
/// use phrasebook_catalog::{Catalog, LabelCatalog, Locale, LocaleLabels};
///
/// let mut es = LocaleLabels::new();
/// es.insert("Greeting", "Hola");
///
/// let mut catalog = LabelCatalog::new();
/// catalog.add_locale(Locale::new("es-ES"), es);
///
/// assert_eq!(catalog.lookup(&Locale::new("es-ES"), "Greeting"), Some("Hola"));
/// assert_eq!(catalog.lookup(&Locale::new("es-ES"), "Farewell"), None);
/// assert_eq!(catalog.lookup(&Locale::new("fr-FR"), "Greeting"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LabelCatalog {
    locales: HashMap<Locale, LocaleLabels>,
    strict_locales: bool,
}

impl LabelCatalog {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in label set: every canonical key in every supported locale.
    #[must_use]
    pub fn builtin() -> Self {
        let mut en = LocaleLabels::new();
        en.insert(labels::APPLICATION_START, "Application started.");
        en.insert(labels::APPLICATION_EXIT, "Application exited.");
        en.insert(labels::OPERATION_COMPLETED, "Operation completed.");
        en.insert(labels::OPERATION_FAILED, "Operation failed.");
        en.insert(labels::UNKNOWN_ERROR, "An unknown error occurred.");

        let mut es = LocaleLabels::new();
        es.insert(labels::APPLICATION_START, "Programa iniciado.");
        es.insert(labels::APPLICATION_EXIT, "Programa finalizado.");
        es.insert(labels::OPERATION_COMPLETED, "Operación completada.");
        es.insert(labels::OPERATION_FAILED, "La operación ha fallado.");
        es.insert(labels::UNKNOWN_ERROR, "Se ha producido un error desconocido.");

        let mut catalog = Self::new();
        catalog.add_locale(languages::ENGLISH_UNITED_STATES, en);
        catalog.add_locale(languages::SPANISH_SPAIN, es);
        catalog
    }

    /// Add a label table for a locale, replacing any previous table.
    pub fn add_locale(&mut self, locale: Locale, labels: LocaleLabels) {
        self.locales.insert(locale, labels);
    }

    /// Reject binds for locales without a table.
    ///
    /// Off by default: a lenient store accepts any bind and lets the
    /// caller's fallback policy do the work.
    pub fn set_strict_locales(&mut self, strict: bool) {
        self.strict_locales = strict;
    }

    /// Whether a table exists for the locale.
    #[must_use]
    pub fn has_locale(&self, locale: &Locale) -> bool {
        self.locales.contains_key(locale)
    }

    /// All locales with a table, sorted by tag.
    #[must_use]
    pub fn locales(&self) -> Vec<&Locale> {
        let mut locales: Vec<&Locale> = self.locales.keys().collect();
        locales.sort();
        locales
    }

    /// Reference keys missing from a locale's table, in reference order.
    ///
    /// A locale without a table is missing every reference key.
    #[must_use]
    pub fn missing_keys<'a>(&self, locale: &Locale, reference: &[&'a str]) -> Vec<&'a str> {
        reference
            .iter()
            .filter(|key| self.lookup(locale, key).is_none())
            .copied()
            .collect()
    }
}

impl Catalog for LabelCatalog {
    fn bind_locale(&self, locale: &Locale) -> Result<(), InvalidLocaleError> {
        if self.strict_locales && !self.has_locale(locale) {
            return Err(InvalidLocaleError {
                locale: locale.clone(),
            });
        }
        Ok(())
    }

    fn lookup(&self, locale: &Locale, key: &str) -> Option<&str> {
        self.locales.get(locale).and_then(|labels| labels.get(key))
    }
}
