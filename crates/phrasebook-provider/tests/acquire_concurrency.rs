//! Concurrency tests for the provider lifecycle: racing first acquires
//! must construct exactly once, and acquire/reset interleavings must stay
//! consistent.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

use phrasebook_catalog::{Catalog, InvalidLocaleError, LabelCatalog, Locale, labels, languages};
use phrasebook_provider::ProviderCell;

/// Counts `bind_locale` calls; exactly one happens per construction.
struct CountingCatalog {
    inner: LabelCatalog,
    binds: AtomicUsize,
}

impl CountingCatalog {
    fn builtin() -> Self {
        Self {
            inner: LabelCatalog::builtin(),
            binds: AtomicUsize::new(0),
        }
    }

    fn strict_builtin() -> Self {
        let mut inner = LabelCatalog::builtin();
        inner.set_strict_locales(true);
        Self {
            inner,
            binds: AtomicUsize::new(0),
        }
    }

    fn bind_count(&self) -> usize {
        self.binds.load(Ordering::SeqCst)
    }
}

impl Catalog for CountingCatalog {
    fn bind_locale(&self, locale: &Locale) -> Result<(), InvalidLocaleError> {
        self.binds.fetch_add(1, Ordering::SeqCst);
        self.inner.bind_locale(locale)
    }

    fn lookup(&self, locale: &Locale, key: &str) -> Option<&str> {
        self.inner.lookup(locale, key)
    }
}

#[test]
fn racing_first_acquires_construct_exactly_once() {
    const THREADS: usize = 16;

    let catalog = Arc::new(CountingCatalog::builtin());
    let cell = ProviderCell::new(catalog.clone());
    let barrier = Barrier::new(THREADS);

    let handles = thread::scope(|s| {
        let workers: Vec<_> = (0..THREADS)
            .map(|_| {
                s.spawn(|| {
                    barrier.wait();
                    cell.acquire(Some(languages::SPANISH_SPAIN))
                        .expect("acquire")
                })
            })
            .collect();
        workers
            .into_iter()
            .map(|w| w.join().expect("worker panicked"))
            .collect::<Vec<_>>()
    });

    assert_eq!(catalog.bind_count(), 1);
    let first = &handles[0];
    assert_eq!(first.locale().as_str(), "es-ES");
    for handle in &handles {
        assert!(Arc::ptr_eq(first, handle));
    }
}

#[test]
fn losers_of_the_race_get_the_winning_locale() {
    const THREADS: usize = 8;

    let cell = ProviderCell::new(Arc::new(LabelCatalog::builtin()));
    let barrier = Barrier::new(THREADS);

    let locales = thread::scope(|s| {
        let workers: Vec<_> = (0..THREADS)
            .map(|i| {
                // Threads race with different requests; only one may win.
                let requested = if i % 2 == 0 {
                    languages::ENGLISH_UNITED_STATES
                } else {
                    languages::SPANISH_SPAIN
                };
                let barrier = &barrier;
                let cell = &cell;
                s.spawn(move || {
                    barrier.wait();
                    let provider = cell.acquire(Some(requested)).expect("acquire");
                    provider.locale().clone()
                })
            })
            .collect();
        workers
            .into_iter()
            .map(|w| w.join().expect("worker panicked"))
            .collect::<Vec<_>>()
    });

    let winner = &locales[0];
    for locale in &locales {
        assert_eq!(locale, winner);
    }
}

#[test]
fn failed_construction_retries_construct_exactly_once() {
    const THREADS: usize = 8;

    let catalog = Arc::new(CountingCatalog::strict_builtin());
    let cell = ProviderCell::new(catalog.clone());

    // The first bind fails and must leave the slot empty.
    assert!(cell.acquire(Some(Locale::new("fr-FR"))).is_err());
    assert!(cell.current().is_none());

    let barrier = Barrier::new(THREADS);
    let handles = thread::scope(|s| {
        let workers: Vec<_> = (0..THREADS)
            .map(|_| {
                s.spawn(|| {
                    barrier.wait();
                    cell.acquire(Some(languages::SPANISH_SPAIN)).expect("retry")
                })
            })
            .collect();
        workers
            .into_iter()
            .map(|w| w.join().expect("worker panicked"))
            .collect::<Vec<_>>()
    });

    // One failed bind, then exactly one successful construction.
    assert_eq!(catalog.bind_count(), 2);
    let first = &handles[0];
    assert_eq!(first.locale().as_str(), "es-ES");
    for handle in &handles {
        assert!(Arc::ptr_eq(first, handle));
    }
}

#[test]
fn acquire_and_reset_interleavings_stay_consistent() {
    const WORKERS: usize = 4;
    const ROUNDS: usize = 200;

    let catalog = Arc::new(CountingCatalog::builtin());
    let cell = ProviderCell::new(catalog.clone());

    thread::scope(|s| {
        for _ in 0..WORKERS {
            s.spawn(|| {
                for _ in 0..ROUNDS {
                    let provider = cell.acquire(None).expect("acquire");
                    assert_eq!(provider.locale().as_str(), "en-US");
                    assert_eq!(
                        provider.label(labels::APPLICATION_START),
                        Ok("Application started.")
                    );
                }
            });
        }
        s.spawn(|| {
            for _ in 0..ROUNDS {
                cell.reset();
            }
        });
    });

    // Every construction bound the same locale; at least the first
    // acquire constructed, and never more than once per reset epoch.
    let binds = catalog.bind_count();
    assert!(binds >= 1);
    assert!(binds <= WORKERS * ROUNDS + 1);

    let survivor = cell.acquire(None).expect("acquire after churn");
    assert_eq!(survivor.locale().as_str(), "en-US");
}

#[test]
fn handles_resolve_labels_from_any_thread() {
    let cell = ProviderCell::new(Arc::new(LabelCatalog::builtin()));
    let provider = cell.acquire(Some(languages::SPANISH_SPAIN)).expect("acquire");

    thread::scope(|s| {
        for _ in 0..4 {
            let provider = Arc::clone(&provider);
            s.spawn(move || {
                assert_eq!(
                    provider.label(labels::APPLICATION_START),
                    Ok("Programa iniciado.")
                );
            });
        }
    });
}
