#![forbid(unsafe_code)]

//! Locale vocabulary and label storage for phrasebook.
//!
//! Defines the [`Locale`] identifier, the [`Catalog`] seam label stores
//! implement, the in-memory [`LabelCatalog`], and the canonical built-in
//! label set. Lifecycle and fallback policy live in `phrasebook-provider`;
//! this crate is the vocabulary both sides share.

pub mod catalog;
pub mod labels;
pub mod locale;

pub use catalog::{Catalog, InvalidLocaleError, LabelCatalog, LocaleLabels};
pub use locale::{Locale, languages};
