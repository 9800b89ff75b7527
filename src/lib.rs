//! Totals over dated, categorized expense records
//!
//! Records are selected with predicates (by day range, by category)
//! and the selection is summed.
//!
//! ```rust
//! use expenses::{category_expenses, total_by_period, DaysPeriod, Record};
//!
//! let records = vec![
//!     Record::new(1, 12.49, "Food"),
//!     Record::new(15, 30.0, "Transport"),
//!     Record::new(20, 10.0, "Food"),
//! ];
//! let first_half = DaysPeriod::new(1, 15);
//! assert!((total_by_period(&records, first_half) - 42.49).abs() < 1e-9);
//! assert!(category_expenses(&records, "Leisure", first_half).is_err());
//! ```

pub mod error;
pub mod filter;
pub mod record;
pub mod summary;

pub use error::{Error, Result};
pub use filter::{by_category, by_days_period, filter};
pub use record::{DaysPeriod, Record};
pub use summary::{category_expenses, total_by_period, Summary};
