//! Effective-locale decision logic.
//!
//! Resolution is pure: a requested locale passes through byte-for-byte
//! unchanged, an absent request resolves to the resolver's default. Nothing
//! here validates tags or mutates process state; reading the environment is
//! an explicit constructor, not an ambient lookup at resolve time.

use phrasebook_catalog::{Locale, languages};

/// The fixed process-wide default locale.
pub const DEFAULT_LOCALE: Locale = languages::ENGLISH_UNITED_STATES;

/// Maps an optional requested locale to the effective one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CultureResolver {
    default_locale: Locale,
}

impl Default for CultureResolver {
    fn default() -> Self {
        Self::new(DEFAULT_LOCALE)
    }
}

impl CultureResolver {
    /// Resolver with an explicit default locale.
    #[must_use]
    pub const fn new(default_locale: Locale) -> Self {
        Self { default_locale }
    }

    /// Resolver defaulting to the locale named by the environment.
    ///
    /// `LC_ALL` wins over `LANG`; values carrying no locale information
    /// (unset, empty, `C`, `POSIX`) fall through to [`DEFAULT_LOCALE`].
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_lookup(|name| std::env::var(name).ok())
    }

    fn from_env_lookup<F>(get_env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let detected = ["LC_ALL", "LANG"]
            .iter()
            .find_map(|name| get_env(name).as_deref().and_then(Locale::from_posix));
        Self::new(detected.unwrap_or(DEFAULT_LOCALE))
    }

    /// The effective locale for a request.
    ///
    /// `Some` passes through unchanged; `None` resolves to the default.
    #[must_use]
    pub fn resolve(&self, requested: Option<Locale>) -> Locale {
        requested.unwrap_or_else(|| self.default_locale.clone())
    }

    /// The locale used when a request names none.
    #[must_use]
    pub fn default_locale(&self) -> &Locale {
        &self.default_locale
    }
}
