//! Locale identifiers and the named languages shipped with the built-in
//! label set.
//!
//! A [`Locale`] is an opaque, case-sensitive tag (`"en-US"`). Nothing here
//! validates tags against a registry; whether a locale is usable is the
//! catalog's business, decided at bind time.

use std::borrow::Cow;
use std::fmt;

/// An immutable locale tag, compared byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Locale(Cow<'static, str>);

impl Locale {
    /// Locale from any string-ish tag.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self(Cow::Owned(tag.into()))
    }

    /// Locale from a static tag, usable in constants.
    #[must_use]
    pub const fn from_static(tag: &'static str) -> Self {
        Self(Cow::Borrowed(tag))
    }

    /// Parse a POSIX locale value (`"es_ES.UTF-8"`, `"fr_FR@euro"`).
    ///
    /// Drops the `.codeset` / `@modifier` suffixes and maps `_` to `-`.
    /// Returns `None` for values carrying no locale information: empty
    /// strings and the `C` / `POSIX` locales (case-insensitive).
    #[must_use]
    pub fn from_posix(raw: &str) -> Option<Self> {
        let tag = match raw.find(['.', '@']) {
            Some(cut) => &raw[..cut],
            None => raw,
        };
        let tag = tag.trim();
        if tag.is_empty() || tag.eq_ignore_ascii_case("C") || tag.eq_ignore_ascii_case("POSIX") {
            return None;
        }
        Some(Self(Cow::Owned(tag.replace('_', "-"))))
    }

    /// The tag as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Locale {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Locale {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Locale {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

/// Named languages with built-in label tables.
pub mod languages {
    use super::Locale;

    /// English as used in the United States (`en-US`).
    pub const ENGLISH_UNITED_STATES: Locale = Locale::from_static("en-US");

    /// Spanish as used in Spain (`es-ES`).
    pub const SPANISH_SPAIN: Locale = Locale::from_static("es-ES");

    /// Every locale the built-in catalog ships a table for.
    pub const SUPPORTED: &[Locale] = &[ENGLISH_UNITED_STATES, SPANISH_SPAIN];
}
