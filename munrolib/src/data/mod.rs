//! Data layer: the Munro record and the CSV loader that produces it.
//!
//! Loading happens once; everything downstream works on an immutable
//! `Vec<Munro>`.
//!
//! ## Example
//!
//! ```rust,ignore
//! use munrolib::data::{load, LoaderOptions};
//!
//! let munros = load("munrotab_v6.2.csv", &LoaderOptions::default())?;
//! ```

pub mod loader;
pub mod munro;

pub use loader::{load, load_from_reader, load_with_summary, LoadSummary, LoaderOptions};
pub use munro::{Category, Munro};
