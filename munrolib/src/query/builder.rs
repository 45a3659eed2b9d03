//! Query construction.
//!
//! A [`Query`] is an immutable bundle of filter, sort, and limit criteria.
//! It can only be obtained through [`QueryBuilder`], which checks the height
//! bounds as they are supplied so a built query is always satisfiable.
//!
//! ```rust
//! use munrolib::{Category, Query};
//!
//! let query = Query::builder()
//!     .with_min_height(900.0)?
//!     .with_max_height(1100.0)?
//!     .with_category(Category::Munro)
//!     .sort_by_height(false)
//!     .sort_by_name(true)
//!     .limit(10)
//!     .build();
//!
//! assert_eq!(query.sort_keys().len(), 2);
//! # Ok::<(), munrolib::MunroError>(())
//! ```

use serde::Serialize;

use crate::data::munro::Category;
use crate::error::MunroError;
use crate::Result;

use super::options::{Filter, SortDirection, SortField, SortKey};

/// Filter, sort, and limit criteria for one search.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Query {
    min_height: Option<f64>,
    max_height: Option<f64>,
    category: Option<Category>,
    sort: Vec<SortKey>,
    limit: Option<usize>,
}

impl Query {
    /// Start building a query.
    pub fn builder() -> QueryBuilder {
        QueryBuilder::new()
    }

    /// A query with no criteria: every record, in load order.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn min_height(&self) -> Option<f64> {
        self.min_height
    }

    pub fn max_height(&self) -> Option<f64> {
        self.max_height
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    /// Sort keys, primary first.
    pub fn sort_keys(&self) -> &[SortKey] {
        &self.sort
    }

    /// Maximum number of results, `None` for unlimited.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// The predicates a record must all satisfy, in a fixed order.
    pub fn filters(&self) -> Vec<Filter> {
        let mut filters = Vec::with_capacity(3);
        if let Some(min) = self.min_height {
            filters.push(Filter::MinHeight(min));
        }
        if let Some(max) = self.max_height {
            filters.push(Filter::MaxHeight(max));
        }
        if let Some(category) = self.category {
            filters.push(Filter::Category(category));
        }
        filters
    }

    /// True when the query neither filters, sorts, nor limits.
    pub fn is_empty(&self) -> bool {
        self.min_height.is_none()
            && self.max_height.is_none()
            && self.category.is_none()
            && self.sort.is_empty()
            && self.limit.is_none()
    }
}

/// Fluent builder for [`Query`].
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    query: Query,
}

impl QueryBuilder {
    /// Create a builder with no criteria.
    pub fn new() -> Self {
        Self::default()
    }

    /// Only keep records at least `height` metres high.
    ///
    /// Fails if a maximum below `height` is already set.
    pub fn with_min_height(mut self, height: f64) -> Result<Self> {
        check_finite(height)?;
        if let Some(max) = self.query.max_height {
            check_range(height, max)?;
        }
        self.query.min_height = Some(height);
        Ok(self)
    }

    /// Only keep records at most `height` metres high.
    ///
    /// Fails if a minimum above `height` is already set.
    pub fn with_max_height(mut self, height: f64) -> Result<Self> {
        check_finite(height)?;
        if let Some(min) = self.query.min_height {
            check_range(min, height)?;
        }
        self.query.max_height = Some(height);
        Ok(self)
    }

    /// Only keep records of this category. Replaces any earlier category.
    pub fn with_category(mut self, category: Category) -> Self {
        self.query.category = Some(category);
        self
    }

    /// Append height as the next sort key.
    pub fn sort_by_height(self, ascending: bool) -> Self {
        self.sort_by(SortKey {
            field: SortField::Height,
            direction: SortDirection::from_ascending(ascending),
        })
    }

    /// Append name as the next sort key.
    pub fn sort_by_name(self, ascending: bool) -> Self {
        self.sort_by(SortKey {
            field: SortField::Name,
            direction: SortDirection::from_ascending(ascending),
        })
    }

    /// Append a sort key. Earlier keys take precedence.
    pub fn sort_by(mut self, key: SortKey) -> Self {
        self.query.sort.push(key);
        self
    }

    /// Return at most `n` records. Zero means no limit.
    pub fn limit(mut self, n: usize) -> Self {
        self.query.limit = (n > 0).then_some(n);
        self
    }

    pub fn build(self) -> Query {
        self.query
    }
}

impl From<QueryBuilder> for Query {
    fn from(builder: QueryBuilder) -> Self {
        builder.build()
    }
}

fn check_finite(height: f64) -> Result<()> {
    if height.is_finite() {
        Ok(())
    } else {
        Err(MunroError::InvalidHeight(height))
    }
}

fn check_range(min: f64, max: f64) -> Result<()> {
    if min > max {
        Err(MunroError::InvalidRange { min, max })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query() {
        let query = Query::builder().build();

        assert!(query.is_empty());
        assert_eq!(query, Query::all());
        assert!(query.filters().is_empty());
        assert!(query.sort_keys().is_empty());
        assert_eq!(query.limit(), None);
    }

    #[test]
    fn test_height_bounds() {
        let query = Query::builder()
            .with_min_height(900.0)
            .unwrap()
            .with_max_height(1100.0)
            .unwrap()
            .build();

        assert_eq!(query.min_height(), Some(900.0));
        assert_eq!(query.max_height(), Some(1100.0));
        assert_eq!(
            query.filters(),
            vec![Filter::MinHeight(900.0), Filter::MaxHeight(1100.0)]
        );
    }

    #[test]
    fn test_min_above_max_is_rejected() {
        let result = Query::builder()
            .with_max_height(900.0)
            .unwrap()
            .with_min_height(1000.0);

        match result {
            Err(MunroError::InvalidRange { min, max }) => {
                assert_eq!(min, 1000.0);
                assert_eq!(max, 900.0);
            }
            other => panic!("Expected InvalidRange, got {other:?}"),
        }
    }

    #[test]
    fn test_max_below_min_is_rejected() {
        let result = Query::builder()
            .with_min_height(1000.0)
            .unwrap()
            .with_max_height(900.0);

        assert!(matches!(
            result,
            Err(MunroError::InvalidRange { min, max }) if min == 1000.0 && max == 900.0
        ));
    }

    #[test]
    fn test_equal_bounds_are_valid() {
        let query = Query::builder()
            .with_min_height(1000.0)
            .unwrap()
            .with_max_height(1000.0)
            .unwrap()
            .build();

        assert_eq!(query.min_height(), query.max_height());
    }

    #[test]
    fn test_replacing_a_bound_is_checked_against_the_other() {
        let builder = Query::builder()
            .with_min_height(900.0)
            .unwrap()
            .with_max_height(1000.0)
            .unwrap();

        assert!(builder.clone().with_min_height(950.0).is_ok());
        assert!(builder.with_min_height(1001.0).is_err());
    }

    #[test]
    fn test_non_finite_bounds_are_rejected() {
        assert!(matches!(
            Query::builder().with_min_height(f64::NAN),
            Err(MunroError::InvalidHeight(_))
        ));
        assert!(matches!(
            Query::builder().with_max_height(f64::INFINITY),
            Err(MunroError::InvalidHeight(_))
        ));
    }

    #[test]
    fn test_last_category_wins() {
        let query = Query::builder()
            .with_category(Category::Munro)
            .with_category(Category::Top)
            .build();

        assert_eq!(query.category(), Some(Category::Top));
        assert_eq!(query.filters(), vec![Filter::Category(Category::Top)]);
    }

    #[test]
    fn test_sort_keys_accumulate_in_order() {
        let query = Query::builder()
            .sort_by_height(false)
            .sort_by_name(true)
            .build();

        assert_eq!(
            query.sort_keys(),
            &[SortKey::height().descending(), SortKey::name()]
        );
    }

    #[test]
    fn test_builder_converts_into_query() {
        let builder = Query::builder().sort_by_height(false).limit(2);
        let expected = builder.clone().build();
        let query: Query = builder.into();

        assert_eq!(query, expected);
        assert_eq!(query.sort_keys(), &[SortKey::height().descending()]);
    }

    #[test]
    fn test_limit_zero_means_unlimited() {
        assert_eq!(Query::builder().limit(5).build().limit(), Some(5));
        assert_eq!(Query::builder().limit(0).build().limit(), None);
        assert_eq!(Query::builder().limit(5).limit(0).build().limit(), None);
    }

    #[test]
    fn test_query_serializes_its_criteria() {
        let query = Query::builder()
            .with_min_height(950.0)
            .unwrap()
            .with_category(Category::Top)
            .sort_by_name(false)
            .limit(3)
            .build();

        let value = serde_json::to_value(&query).unwrap();

        assert_eq!(value["min_height"], 950.0);
        assert!(value["max_height"].is_null());
        assert_eq!(value["category"], "TOP");
        assert_eq!(value["sort"][0]["field"], "Name");
        assert_eq!(value["sort"][0]["direction"], "Descending");
        assert_eq!(value["limit"], 3);
    }
}
