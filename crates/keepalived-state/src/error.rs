//! Errors returned by the snapshot collector.

use common::Error as SourceError;
use thiserror::Error;

/// Reasons a collection cycle produced no snapshot.
#[derive(Debug, Error)]
pub enum CollectorError {
    /// The state source failed; passed through as-is.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// Data and counters were dumped with a different number of instances.
    #[error("keepalived.data and keepalived.stats are not synced ({data} data entries, {stats} stats entries)")]
    NotSynced { data: usize, stats: usize },

    /// An instance present in the data has no counters.
    #[error("no stats found for instance {instance}")]
    MissingStats { instance: String },
}

impl CollectorError {
    /// True when data and counters disagree, as opposed to a source failure.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            CollectorError::NotSynced { .. } | CollectorError::MissingStats { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_error_is_transparent() {
        let err = CollectorError::from(SourceError::signal("kill: no such process"));
        assert_eq!(err.to_string(), "Signal error: kill: no such process");
        assert!(!err.is_structural());
    }

    #[test]
    fn test_structural_errors() {
        let not_synced = CollectorError::NotSynced { data: 2, stats: 1 };
        assert!(not_synced.is_structural());
        assert!(not_synced.to_string().contains("2 data entries"));

        let missing = CollectorError::MissingStats {
            instance: "VI_2".to_string(),
        };
        assert!(missing.is_structural());
        assert!(missing.to_string().contains("VI_2"));
    }
}
