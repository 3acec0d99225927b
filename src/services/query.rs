//! Catalog search.
//!
//! A stateless, case-insensitive substring filter. It is cheap enough to run
//! on every keystroke and never touches storage.

use crate::models::Record;

/// Returns every record whose title or text contains `query`.
///
/// Matching is case-insensitive. An empty query matches everything. Results
/// keep the catalog's own order; there is no ranking.
#[must_use]
pub fn filter<'a>(records: &'a [Record], query: &str) -> Vec<&'a Record> {
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| record.matches_lowercase(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::seed_records;
    use test_case::test_case;

    #[test_case("", 3 ; "empty query matches all")]
    #[test_case("wifi", 1 ; "title match")]
    #[test_case("WIFI", 1 ; "case insensitive")]
    #[test_case("duplicate", 1 ; "text match")]
    #[test_case("please", 3 ; "common word")]
    #[test_case("printer", 0 ; "no match")]
    fn test_filter_seed(query: &str, expected: usize) {
        let seed = seed_records();
        assert_eq!(filter(&seed, query).len(), expected);
    }

    #[test]
    fn test_filter_preserves_order() {
        let records = vec![
            Record::new(3, "Zeta note", "alpha"),
            Record::new(1, "Alpha note", "beta"),
            Record::new(2, "Other", "nothing"),
        ];
        let ids: Vec<i64> = filter(&records, "ALPHA").iter().map(|r| r.id.get()).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn test_filter_is_substring_not_word() {
        let records = vec![Record::new(1, "Reset", "desynchronized display")];
        assert_eq!(filter(&records, "sync").len(), 1);
        assert_eq!(filter(&records, "set").len(), 1);
    }
}
