//! The finder service: a loaded dataset plus query evaluation.
//!
//! A [`MunroFinder`] owns the records for its whole lifetime and never
//! changes them. Every search borrows the dataset and works on the query it
//! is given, so one finder can serve any number of searches, from any
//! number of threads.

use std::io::Read;
use std::path::Path;

use crate::data::loader::{self, LoaderOptions};
use crate::data::munro::Munro;
use crate::output::to_json;
use crate::query::{evaluate, Query};
use crate::Result;

/// Lookup service over the Munro tables.
#[derive(Debug, Clone)]
pub struct MunroFinder {
    munros: Vec<Munro>,
}

impl MunroFinder {
    /// Wrap an already loaded dataset. Order is preserved as given.
    pub fn new(munros: Vec<Munro>) -> Self {
        Self { munros }
    }

    /// Load the dataset from a CSV file in the default column layout.
    ///
    /// Fails if the file cannot be read; a finder never starts with a
    /// partial dataset.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_path_with(path, &LoaderOptions::default())
    }

    /// Load the dataset from a CSV file with a custom column layout.
    pub fn from_path_with(path: impl AsRef<Path>, options: &LoaderOptions) -> Result<Self> {
        loader::load(path, options).map(Self::new)
    }

    /// Load the dataset from any CSV byte source.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let (munros, _) = loader::load_from_reader(reader, &LoaderOptions::default())?;
        Ok(Self::new(munros))
    }

    /// The full dataset, in load order.
    pub fn munros(&self) -> &[Munro] {
        &self.munros
    }

    pub fn len(&self) -> usize {
        self.munros.len()
    }

    pub fn is_empty(&self) -> bool {
        self.munros.is_empty()
    }

    /// Evaluate a query and return the matching records.
    pub fn find(&self, query: &Query) -> Vec<&Munro> {
        evaluate(&self.munros, query)
    }

    /// Every record, unfiltered and in load order, as a JSON array.
    pub fn search(&self) -> Result<String> {
        let all: Vec<&Munro> = self.munros.iter().collect();
        to_json(&all, false)
    }

    /// Evaluate a query and return the results as a JSON array.
    pub fn search_with(&self, query: &Query) -> Result<String> {
        to_json(&self.find(query), false)
    }
}

impl From<Vec<Munro>> for MunroFinder {
    fn from(munros: Vec<Munro>) -> Self {
        Self::new(munros)
    }
}
