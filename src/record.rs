//! Expense entries and the day ranges used to select them

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single expense: how much, on which day, for what
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Record {
    pub day: i32,
    pub amount: f64,
    pub category: String,
}

impl Record {
    pub fn new<S>(day: i32, amount: f64, category: S) -> Self
    where S: ToString {
        Self {
            day,
            amount,
            category: category.to_string(),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "day {}: {:.2} ({})", self.day, self.amount, self.category)
    }
}

/// Inclusive range of days `from..=to`
///
/// Bounds are taken as given: a period with `from > to`
/// is not reordered and simply contains no day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DaysPeriod {
    pub from: i32,
    pub to: i32,
}

impl DaysPeriod {
    pub fn new(from: i32, to: i32) -> Self {
        Self { from, to }
    }

    /// Period spanning exactly one day
    pub fn day(day: i32) -> Self {
        Self::new(day, day)
    }

    pub fn contains(&self, day: i32) -> bool {
        self.from <= day && day <= self.to
    }
}

impl fmt::Display for DaysPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.from == self.to {
            write!(f, "{}", self.from)
        } else {
            write!(f, "{}..{}", self.from, self.to)
        }
    }
}
