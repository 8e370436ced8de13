//! Canonical label keys.
//!
//! Key strings are the published vocabulary: stable PascalCase identifiers
//! passed to label lookups. [`LabelCatalog::builtin`] ships every key in
//! every supported locale; [`ALL`] is the reference list coverage checks
//! run against.
//!
//! [`LabelCatalog::builtin`]: crate::catalog::LabelCatalog::builtin

/// Announces that the host application finished starting.
pub const APPLICATION_START: &str = "ApplicationStart";

/// Announces that the host application is shutting down.
pub const APPLICATION_EXIT: &str = "ApplicationExit";

/// Generic success notice for a finished operation.
pub const OPERATION_COMPLETED: &str = "OperationCompleted";

/// Generic failure notice for an operation.
pub const OPERATION_FAILED: &str = "OperationFailed";

/// Last-resort error notice.
pub const UNKNOWN_ERROR: &str = "UnknownError";

/// Every canonical key.
pub const ALL: &[&str] = &[
    APPLICATION_START,
    APPLICATION_EXIT,
    OPERATION_COMPLETED,
    OPERATION_FAILED,
    UNKNOWN_ERROR,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_keys_are_unique() {
        let mut keys: Vec<&str> = ALL.to_vec();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), ALL.len());
    }

    #[test]
    fn all_lists_every_canonical_key() {
        assert_eq!(ALL.len(), 5);
        assert!(ALL.contains(&APPLICATION_START));
        assert!(ALL.contains(&APPLICATION_EXIT));
        assert!(ALL.contains(&OPERATION_COMPLETED));
        assert!(ALL.contains(&OPERATION_FAILED));
        assert!(ALL.contains(&UNKNOWN_ERROR));
    }
}
