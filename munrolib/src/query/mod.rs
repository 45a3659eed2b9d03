//! Query processing: build criteria, then filter, sort, and limit records.
//!
//! This module is the heart of the library. It provides:
//!
//! - **Options**: Criteria as data (`Filter`, `SortKey`, `SortField`, `SortDirection`)
//! - **Builder**: The immutable `Query` and its validating `QueryBuilder`
//! - **Pipeline**: Evaluation of a `Query` over a record slice
//!
//! ## Example
//!
//! ```rust
//! use munrolib::query::{evaluate, Query};
//! use munrolib::{Category, Munro};
//!
//! let munros = vec![
//!     Munro::new("Ben Chonzie", 931.0, "NN773308", Category::Munro),
//!     Munro::new("Ben Nevis", 1345.0, "NN166712", Category::Munro),
//! ];
//!
//! let query = Query::builder().sort_by_height(false).limit(1).build();
//! let results = evaluate(&munros, &query);
//! assert_eq!(results[0].name(), "Ben Nevis");
//! ```

pub mod builder;
pub mod options;
pub mod pipeline;

pub use builder::{Query, QueryBuilder};
pub use options::{Filter, SortDirection, SortField, SortKey};
pub use pipeline::evaluate;
