//! Errors from provider construction and label resolution.

use phrasebook_catalog::{InvalidLocaleError, Locale};

/// Errors from the provider lifecycle and label resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The fallback chain was exhausted without finding the key.
    LabelNotFound {
        /// Locale the provider is bound to.
        locale: Locale,
        /// Key that failed to resolve.
        key: String,
    },
    /// The catalog rejected the locale at construction time.
    InvalidLocale(InvalidLocaleError),
    /// A strict acquire asked for a locale other than the bound one.
    LocaleConflict {
        /// Locale of the live provider.
        bound: Locale,
        /// Locale the caller asked for.
        requested: Locale,
    },
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LabelNotFound { locale, key } => {
                write!(f, "no label '{key}' for locale '{locale}' or its fallback")
            }
            Self::InvalidLocale(err) => write!(f, "cannot bind locale '{}'", err.locale),
            Self::LocaleConflict { bound, requested } => {
                write!(f, "provider already bound to '{bound}', requested '{requested}'")
            }
        }
    }
}

impl std::error::Error for ProviderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidLocale(err) => Some(err),
            _ => None,
        }
    }
}

impl From<InvalidLocaleError> for ProviderError {
    fn from(err: InvalidLocaleError) -> Self {
        Self::InvalidLocale(err)
    }
}
