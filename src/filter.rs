//! Record selection
//!
//! Predicates are plain closures over `&Record`. Conditions compose
//! by filtering the output of a previous `filter` again.

use crate::record::{DaysPeriod, Record};

/// Records for which `predicate` holds, in their original order
pub fn filter<P>(records: &[Record], predicate: P) -> Vec<Record>
where P: Fn(&Record) -> bool {
    records
        .iter()
        .filter(|rec| predicate(*rec))
        .cloned()
        .collect()
}

/// Selects records whose day falls within `period` (bounds included)
pub fn by_days_period(period: DaysPeriod) -> impl Fn(&Record) -> bool {
    move |rec: &Record| period.contains(rec.day)
}

/// Selects records of exactly `category` (case-sensitive)
pub fn by_category(category: &str) -> impl Fn(&Record) -> bool + '_ {
    move |rec: &Record| rec.category == category
}
