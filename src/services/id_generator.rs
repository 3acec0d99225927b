//! Record id generation.
//!
//! Ids are Unix-millisecond timestamps, bumped when needed so that every id
//! issued is strictly greater than the previous one and than every id
//! already in the catalog. Two creates in the same millisecond, a clock that
//! steps backwards, or imported records carrying future timestamps can
//! therefore never produce a collision.

use crate::current_timestamp_millis;
use crate::models::{Record, RecordId};
use std::collections::HashSet;

/// Monotonic, timestamp-derived id source.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    last_issued: Option<i64>,
    clock: fn() -> i64,
}

impl IdGenerator {
    /// Creates a generator backed by the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(current_timestamp_millis)
    }

    /// Creates a generator backed by a custom millisecond clock.
    #[must_use]
    pub const fn with_clock(clock: fn() -> i64) -> Self {
        Self {
            last_issued: None,
            clock,
        }
    }

    /// Issues an id distinct from every id in `existing`.
    pub fn next_id(&mut self, existing: &[Record]) -> RecordId {
        let max_existing = existing.iter().map(|r| r.id.get()).max();

        let mut candidate = (self.clock)();
        if let Some(last) = self.last_issued {
            candidate = candidate.max(last.saturating_add(1));
        }
        if let Some(max) = max_existing {
            candidate = candidate.max(max.saturating_add(1));
        }

        // Only reachable once ids saturate at i64::MAX.
        let taken: HashSet<i64> = existing.iter().map(|r| r.id.get()).collect();
        while taken.contains(&candidate) {
            candidate = candidate.saturating_sub(1);
        }

        self.last_issued = Some(candidate);
        RecordId::new(candidate)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::seed_records;

    fn frozen_clock() -> i64 {
        1_700_000_000_000
    }

    #[test]
    fn test_uses_clock() {
        let mut generator = IdGenerator::with_clock(frozen_clock);
        assert_eq!(generator.next_id(&seed_records()).get(), 1_700_000_000_000);
    }

    #[test]
    fn test_same_millisecond_is_monotonic() {
        let mut generator = IdGenerator::with_clock(frozen_clock);
        let first = generator.next_id(&[]);
        let second = generator.next_id(&[]);
        assert!(second > first);
    }

    #[test]
    fn test_skips_past_existing_future_ids() {
        let mut generator = IdGenerator::with_clock(frozen_clock);
        let existing = vec![Record::new(1_800_000_000_000, "Future", "import")];
        assert_eq!(generator.next_id(&existing).get(), 1_800_000_000_001);
    }

    #[test]
    fn test_saturated_ids_still_distinct() {
        let mut generator = IdGenerator::with_clock(frozen_clock);
        let existing = vec![Record::new(i64::MAX, "Max", "id")];
        let id = generator.next_id(&existing);
        assert_ne!(id.get(), i64::MAX);
    }
}
