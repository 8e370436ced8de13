#![forbid(unsafe_code)]

//! Process-wide, locale-bound label provider.
//!
//! One provider lives per lifecycle cell, constructed lazily on first
//! acquire and bound to its locale until [`reset`] ends the epoch. The free
//! functions here drive a single process-wide [`ProviderCell`] loaded with
//! the built-in catalog; embedders and tests needing isolation construct
//! their own cell instead.
//!
//! ```
//! use phrasebook_catalog::{labels, languages};
//!
//! let provider = phrasebook_provider::acquire(Some(languages::SPANISH_SPAIN))?;
//! assert_eq!(provider.label(labels::APPLICATION_START)?, "Programa iniciado.");
//! # phrasebook_provider::reset();
//! # Ok::<(), phrasebook_provider::ProviderError>(())
//! ```

pub mod error;
pub mod lifecycle;
pub mod provider;
pub mod resolver;

pub use error::ProviderError;
pub use lifecycle::ProviderCell;
pub use provider::LabelProvider;
pub use resolver::{CultureResolver, DEFAULT_LOCALE};

use std::sync::{Arc, OnceLock};

use phrasebook_catalog::{LabelCatalog, Locale};

static PROCESS_CELL: OnceLock<ProviderCell> = OnceLock::new();

fn process_cell() -> &'static ProviderCell {
    PROCESS_CELL.get_or_init(|| ProviderCell::new(Arc::new(LabelCatalog::builtin())))
}

/// Acquire from the process-wide cell. See [`ProviderCell::acquire`].
pub fn acquire(requested: Option<Locale>) -> Result<Arc<LabelProvider>, ProviderError> {
    process_cell().acquire(requested)
}

/// Strict acquire from the process-wide cell. See
/// [`ProviderCell::acquire_strict`].
pub fn acquire_strict(requested: Option<Locale>) -> Result<Arc<LabelProvider>, ProviderError> {
    process_cell().acquire_strict(requested)
}

/// Reset the process-wide cell. See [`ProviderCell::reset`].
pub fn reset() {
    process_cell().reset();
}

/// The live process-wide provider, if any.
#[must_use]
pub fn current() -> Option<Arc<LabelProvider>> {
    process_cell().current()
}

/// The process-wide ambient locale, if any construction has happened.
#[must_use]
pub fn ambient_locale() -> Option<Locale> {
    process_cell().ambient_locale()
}
