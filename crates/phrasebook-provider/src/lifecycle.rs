//! Single-instance provider lifecycle.
//!
//! # Invariants
//!
//! 1. **One live provider per cell**: between construction and [`reset`],
//!    every acquire observes the same `Arc` (pointer-identical handles).
//!
//! 2. **Bind once**: a provider's locale is fixed at construction. On a
//!    bound cell, [`acquire`] ignores a differing request and logs it;
//!    [`acquire_strict`] turns it into an error.
//!
//! 3. **Failed construction leaves no trace**: the slot and the ambient
//!    locale are written only after the catalog accepts the locale, so a
//!    failed acquire can simply be retried.
//!
//! 4. **Reset ends the epoch, not the context**: [`reset`] clears the slot;
//!    the ambient locale stays readable until the next construction
//!    replaces it.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Invalid locale | Strict catalog without the locale | `Err(InvalidLocale)`, slot untouched |
//! | Conflicting request | `acquire_strict` on a differently-bound cell | `Err(LocaleConflict)` |
//! | Ignored request | `acquire` on a differently-bound cell | Existing handle, `warn!` event |
//! | Poisoned guard | Panic on another thread while locked | Guard recovered; see below |
//!
//! State is only ever replaced whole (an `Arc` swap after successful
//! construction), so a guard poisoned by another thread's panic still
//! protects a consistent value; every lock site recovers it.
//!
//! [`acquire`]: ProviderCell::acquire
//! [`acquire_strict`]: ProviderCell::acquire_strict
//! [`reset`]: ProviderCell::reset

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::{debug, warn};

use phrasebook_catalog::{Catalog, Locale};

use crate::error::ProviderError;
use crate::provider::LabelProvider;
use crate::resolver::CultureResolver;

#[derive(Debug, Default)]
struct CellState {
    slot: Option<Arc<LabelProvider>>,
    ambient: Option<Locale>,
}

/// A guarded single-provider slot with its resolver and catalog.
///
/// The process-wide surface in the crate root wraps one of these; embedders
/// and tests needing isolation construct their own. All methods take
/// `&self` and may be called from any thread.
pub struct ProviderCell {
    state: RwLock<CellState>,
    resolver: CultureResolver,
    catalog: Arc<dyn Catalog>,
}

impl fmt::Debug for ProviderCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderCell")
            .field("resolver", &self.resolver)
            .field("bound", &self.current().is_some())
            .finish_non_exhaustive()
    }
}

impl ProviderCell {
    /// Cell with the default resolver.
    #[must_use]
    pub fn new(catalog: Arc<dyn Catalog>) -> Self {
        Self::with_resolver(CultureResolver::default(), catalog)
    }

    /// Cell with an explicit resolver.
    #[must_use]
    pub fn with_resolver(resolver: CultureResolver, catalog: Arc<dyn Catalog>) -> Self {
        Self {
            state: RwLock::new(CellState::default()),
            resolver,
            catalog,
        }
    }

    /// The live provider, constructing it on first use.
    ///
    /// Only the construction that wins the race consumes `requested`; on a
    /// bound cell a differing request is ignored and logged. Use
    /// [`acquire_strict`](Self::acquire_strict) to make that an error.
    pub fn acquire(&self, requested: Option<Locale>) -> Result<Arc<LabelProvider>, ProviderError> {
        // Shared-guard fast path: steady state is a bound cell.
        {
            let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(provider) = &state.slot {
                note_ignored_request(provider, requested.as_ref());
                return Ok(Arc::clone(provider));
            }
        }

        // Exclusive guard, then re-check: another thread may have
        // constructed between the two guards.
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(provider) = &state.slot {
            note_ignored_request(provider, requested.as_ref());
            return Ok(Arc::clone(provider));
        }

        self.construct(&mut state, requested)
    }

    /// [`acquire`](Self::acquire), except a request that conflicts with the
    /// bound locale fails with [`ProviderError::LocaleConflict`].
    ///
    /// `None` and a request matching the bound locale behave like `acquire`.
    pub fn acquire_strict(
        &self,
        requested: Option<Locale>,
    ) -> Result<Arc<LabelProvider>, ProviderError> {
        {
            let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(provider) = &state.slot {
                return strict_handle(provider, requested.as_ref());
            }
        }

        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(provider) = &state.slot {
            return strict_handle(provider, requested.as_ref());
        }

        self.construct(&mut state, requested)
    }

    /// Drop the live provider, if any. Idempotent, never fails.
    ///
    /// The ambient locale is left in place: context outlives the epoch
    /// until the next construction replaces it. Existing handles keep
    /// working; only the cell forgets them.
    pub fn reset(&self) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        if state.slot.take().is_some() {
            debug!("label provider reset");
        }
    }

    /// The live provider without constructing one.
    #[must_use]
    pub fn current(&self) -> Option<Arc<LabelProvider>> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .slot
            .clone()
    }

    /// The locale bound by the most recent construction in this cell.
    ///
    /// Survives [`reset`](Self::reset); replaced by the next construction.
    #[must_use]
    pub fn ambient_locale(&self) -> Option<Locale> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .ambient
            .clone()
    }

    fn construct(
        &self,
        state: &mut CellState,
        requested: Option<Locale>,
    ) -> Result<Arc<LabelProvider>, ProviderError> {
        let locale = self.resolver.resolve(requested);
        self.catalog.bind_locale(&locale)?;

        let provider = Arc::new(LabelProvider::new(
            locale.clone(),
            self.resolver.default_locale().clone(),
            Arc::clone(&self.catalog),
        ));
        debug!(locale = %locale, "label provider constructed");
        state.ambient = Some(locale);
        state.slot = Some(Arc::clone(&provider));
        Ok(provider)
    }
}

fn note_ignored_request(provider: &LabelProvider, requested: Option<&Locale>) {
    if let Some(requested) = requested {
        if requested != provider.locale() {
            warn!(
                bound = %provider.locale(),
                requested = %requested,
                "locale request ignored; provider already bound"
            );
        }
    }
}

fn strict_handle(
    provider: &Arc<LabelProvider>,
    requested: Option<&Locale>,
) -> Result<Arc<LabelProvider>, ProviderError> {
    match requested {
        Some(requested) if requested != provider.locale() => Err(ProviderError::LocaleConflict {
            bound: provider.locale().clone(),
            requested: requested.clone(),
        }),
        _ => Ok(Arc::clone(provider)),
    }
}
