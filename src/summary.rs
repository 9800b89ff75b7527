use std::collections::BTreeMap;
use std::ops;

use crate::{
    error::{Error, Result},
    filter::{by_category, by_days_period, filter},
    record::{DaysPeriod, Record},
};

fn sum(records: &[Record]) -> f64 {
    records.iter().map(|rec| rec.amount).sum()
}

/// Total amount spent within `period`
///
/// An empty selection totals to `0`.
pub fn total_by_period(records: &[Record], period: DaysPeriod) -> f64 {
    let selected = filter(records, by_days_period(period));
    tracing::trace!(%period, matched = selected.len(), "total by period");
    sum(&selected)
}

/// Total amount spent on `category` within `period`
///
/// Fails only if `category` does not occur anywhere in `records`:
/// a known category with nothing inside `period` totals to `0`.
pub fn category_expenses(records: &[Record], category: &str, period: DaysPeriod) -> Result<f64> {
    let in_category = filter(records, by_category(category));
    if in_category.is_empty() {
        tracing::debug!(category, "no records for category");
        return Err(Error::NoSuchCategory(category.to_string()));
    }
    let selected = filter(&in_category, by_days_period(period));
    tracing::trace!(category, %period, matched = selected.len(), "category expenses");
    Ok(sum(&selected))
}

/// Per-category breakdown of the records within a period
#[derive(Debug, Clone)]
pub struct Summary {
    period: DaysPeriod,
    total: f64,
    categories: BTreeMap<String, f64>,
}

impl Summary {
    pub fn new(period: DaysPeriod) -> Self {
        Self {
            period,
            total: 0.0,
            categories: BTreeMap::new(),
        }
    }

    pub fn from_records(records: &[Record], period: DaysPeriod) -> Self {
        let mut summary = Self::new(period);
        for rec in records {
            summary += rec;
        }
        summary
    }

    pub fn period(&self) -> DaysPeriod {
        self.period
    }

    /// Amount spent on `category`, `0` if none was recorded
    pub fn query(&self, category: &str) -> f64 {
        self.categories.get(category).copied().unwrap_or(0.0)
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    /// Categories seen within the period, in alphabetical order
    pub fn categories(&self) -> impl Iterator<Item = (&str, f64)> {
        self.categories.iter().map(|(cat, amount)| (cat.as_str(), *amount))
    }
}

impl ops::AddAssign<&Record> for Summary {
    fn add_assign(&mut self, rec: &Record) {
        if self.period.contains(rec.day) {
            *self.categories.entry(rec.category.clone()).or_insert(0.0) += rec.amount;
            self.total += rec.amount;
        }
    }
}
