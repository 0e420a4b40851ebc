//! Calendar month a recurring income belongs to.
//!
//! A payday is stored as the `" MM/YYYY"` suffix of an auto-income entry's
//! description so databases stay readable by every edition of the program.
//! `encode_description` and `from_description` are the only places that
//! know this format.

use std::fmt;

use chrono::{Datelike, NaiveDate};

/// A (month, year) pair. Ordered chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Payday {
    // Field order drives the derived `Ord`.
    year: i32,
    month: u32,
}

impl Payday {
    /// Create a payday, returning `None` for a month outside 1..=12.
    pub fn new(month: u32, year: i32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// The payday containing the given date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// The calendar month before this one.
    pub fn previous(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Suffix appended to an auto-income description, e.g. `" 04/2023"`.
    pub fn suffix(&self) -> String {
        format!(" {}", self)
    }

    /// Description for this payday's auto-income entry.
    pub fn encode_description(&self, income_description: &str) -> String {
        format!("{}{}", income_description, self.suffix())
    }

    /// Recover the payday encoded at the end of a description.
    pub fn from_description(description: &str) -> Option<Self> {
        let (_, encoded) = description.rsplit_once(' ')?;
        let (month, year) = encoded.split_once('/')?;
        if month.len() != 2 || year.len() < 4 {
            return None;
        }
        Self::new(month.parse().ok()?, year.parse().ok()?)
    }
}

impl fmt::Display for Payday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{}", self.month, self.year)
    }
}
