//! # munrolib
//!
//! A read-only lookup library over the Munro tables, the list of Scottish
//! mountains over 3000 feet and their subsidiary tops.
//!
//! ## Overview
//!
//! The tables are loaded once from CSV into an immutable dataset. Callers
//! build a [`Query`] describing what they want and hand it to a
//! [`MunroFinder`], which runs it through a fixed pipeline:
//!
//! - **Filter**: minimum height, maximum height, category (all optional, ANDed)
//! - **Sort**: any chain of height/name keys, each ascending or descending
//! - **Limit**: keep the first `n` results
//!
//! Results come back as borrowed records or as a JSON array.
//!
//! ## Features
//!
//! - **Validated queries**: a minimum above a maximum is rejected when built
//! - **Deterministic**: stable sorting, no hash-ordered state
//! - **Criteria as data**: filters and sort keys are inspectable and serializable
//! - **Thread safe**: the dataset is never mutated after load
//!
//! ## Example
//!
//! ```rust
//! use munrolib::{Category, Munro, MunroFinder, Query};
//!
//! let finder = MunroFinder::new(vec![
//!     Munro::new("Ben Chonzie", 931.0, "NN773308", Category::Munro),
//!     Munro::new("Ben Vorlich", 985.0, "NN629189", Category::Munro),
//!     Munro::new("Stuc a' Chroin", 975.0, "NN617174", Category::Munro),
//! ]);
//!
//! let query = Query::builder()
//!     .with_min_height(950.0)?
//!     .sort_by_height(true)
//!     .build();
//!
//! let found = finder.find(&query);
//! assert_eq!(found[0].name(), "Stuc a' Chroin");
//!
//! let json = finder.search_with(&query)?;
//! assert!(json.starts_with(r#"[{"name":"Stuc a' Chroin""#));
//! # Ok::<(), munrolib::MunroError>(())
//! ```

pub mod data;
pub mod error;
pub mod finder;
pub mod output;
pub mod query;

pub use data::{
    load, load_from_reader, load_with_summary, Category, LoadSummary, LoaderOptions, Munro,
};
pub use error::MunroError;
pub use finder::MunroFinder;
pub use output::{to_json, MunroTable, TableRow};
pub use query::{Filter, Query, QueryBuilder, SortDirection, SortField, SortKey};

/// Result type for munrolib operations
pub type Result<T> = std::result::Result<T, MunroError>;
