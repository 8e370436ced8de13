//! The shared provider handle.

use std::fmt;
use std::sync::Arc;

use phrasebook_catalog::{Catalog, Locale};

use crate::error::ProviderError;

/// A label provider bound to one locale for its whole lifetime.
///
/// Handles are shared through `Arc`; every holder observes the same bound
/// locale. Resolution walks the bound locale, then the default locale
/// captured at construction. A miss on both is an error, never empty text;
/// rendering the raw key instead is the separate, explicit
/// [`label_or_key`](Self::label_or_key) tier.
pub struct LabelProvider {
    locale: Locale,
    fallback: Locale,
    catalog: Arc<dyn Catalog>,
}

impl fmt::Debug for LabelProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LabelProvider")
            .field("locale", &self.locale)
            .field("fallback", &self.fallback)
            .finish_non_exhaustive()
    }
}

impl LabelProvider {
    pub(crate) fn new(locale: Locale, fallback: Locale, catalog: Arc<dyn Catalog>) -> Self {
        Self {
            locale,
            fallback,
            catalog,
        }
    }

    /// The locale this provider was constructed with. Never changes.
    #[must_use]
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Resolve a label key to display text.
    ///
    /// Tries the bound locale, then the fallback locale when it differs.
    pub fn label(&self, key: &str) -> Result<&str, ProviderError> {
        if let Some(text) = self.catalog.lookup(&self.locale, key) {
            return Ok(text);
        }
        if self.fallback != self.locale {
            if let Some(text) = self.catalog.lookup(&self.fallback, key) {
                return Ok(text);
            }
        }
        Err(ProviderError::LabelNotFound {
            locale: self.locale.clone(),
            key: key.to_string(),
        })
    }

    /// [`label`](Self::label), with the raw key as the final fallback tier.
    ///
    /// For surfaces that must always render something. Missing translations
    /// are invisible here; prefer `label` where a miss should be handled.
    #[must_use]
    pub fn label_or_key<'a>(&'a self, key: &'a str) -> &'a str {
        self.label(key).unwrap_or(key)
    }
}
