//! Criteria types for querying the Munro tables.
//!
//! Filters and sort keys are plain tagged data. The pipeline interprets
//! them, and each one can be evaluated on its own.

use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::data::munro::{Category, Munro};
use crate::error::MunroError;

/// A single predicate over a record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Filter {
    /// Height at least this many metres
    MinHeight(f64),
    /// Height at most this many metres
    MaxHeight(f64),
    /// Exactly this category
    Category(Category),
}

impl Filter {
    /// Check whether a record satisfies this predicate.
    pub fn matches(&self, munro: &Munro) -> bool {
        match *self {
            Filter::MinHeight(min) => munro.height() >= min,
            Filter::MaxHeight(max) => munro.height() <= max,
            Filter::Category(category) => munro.category() == category,
        }
    }
}

/// Field to sort results by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortField {
    /// Height in metres
    Height,
    /// Name, case-sensitive
    Name,
}

impl FromStr for SortField {
    type Err = MunroError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "height" | "h" => Ok(SortField::Height),
            "name" | "n" => Ok(SortField::Name),
            _ => Err(MunroError::UnknownSortField(s.to_string())),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    /// Smallest / A first
    #[default]
    Ascending,
    /// Largest / Z first
    Descending,
}

impl SortDirection {
    pub fn from_ascending(ascending: bool) -> Self {
        if ascending {
            SortDirection::Ascending
        } else {
            SortDirection::Descending
        }
    }
}

/// One link in a sort chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKey {
    /// Field to compare
    pub field: SortField,
    /// Direction of the comparison
    pub direction: SortDirection,
}

impl SortKey {
    /// Sort by height ascending
    pub fn height() -> Self {
        Self {
            field: SortField::Height,
            direction: SortDirection::Ascending,
        }
    }

    /// Sort by name ascending
    pub fn name() -> Self {
        Self {
            field: SortField::Name,
            direction: SortDirection::Ascending,
        }
    }

    /// Set sort direction to ascending
    pub fn ascending(mut self) -> Self {
        self.direction = SortDirection::Ascending;
        self
    }

    /// Set sort direction to descending
    pub fn descending(mut self) -> Self {
        self.direction = SortDirection::Descending;
        self
    }

    /// Compare two records on this key alone.
    pub fn compare(&self, a: &Munro, b: &Munro) -> Ordering {
        let ordering = match self.field {
            SortField::Height => a.height().total_cmp(&b.height()),
            SortField::Name => a.name().cmp(b.name()),
        };

        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Parses `field` or `field:direction`, e.g. `height:desc` or `name`.
impl FromStr for SortKey {
    type Err = MunroError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, direction) = match s.split_once(':') {
            Some((field, direction)) => (field, Some(direction)),
            None => (s, None),
        };

        let field = SortField::from_str(field.trim())?;
        let direction = match direction.map(|d| d.trim().to_lowercase()) {
            None => SortDirection::Ascending,
            Some(d) if d == "asc" || d == "ascending" => SortDirection::Ascending,
            Some(d) if d == "desc" || d == "descending" => SortDirection::Descending,
            Some(d) => return Err(MunroError::UnknownSortDirection(d)),
        };

        Ok(Self { field, direction })
    }
}
