//! The Munro record and its category.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MunroError;

/// Classification of an entry in the Munro tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// A Munro proper
    #[serde(rename = "MUN")]
    Munro,
    /// A subsidiary top of a Munro
    #[serde(rename = "TOP")]
    Top,
}

impl Category {
    /// The literal used by the tables and in serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Munro => "MUN",
            Category::Top => "TOP",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = MunroError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mun" | "munro" => Ok(Category::Munro),
            "top" => Ok(Category::Top),
            _ => Err(MunroError::UnknownCategory(s.to_string())),
        }
    }
}

/// A single entry of the Munro tables.
///
/// Records are immutable once built. The loader only produces fully
/// populated records; rows missing any field never make it into a dataset.
/// Deserialized records go through the same checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawMunro")]
pub struct Munro {
    name: String,
    height: f64,
    grid_reference: String,
    category: Category,
}

impl Munro {
    pub fn new(
        name: impl Into<String>,
        height: f64,
        grid_reference: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            name: name.into(),
            height,
            grid_reference: grid_reference.into(),
            category,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Height in metres.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// OS grid reference, kept as the opaque text from the tables.
    pub fn grid_reference(&self) -> &str {
        &self.grid_reference
    }

    pub fn category(&self) -> Category {
        self.category
    }
}

/// Wire shape of a record, before validation.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMunro {
    name: String,
    height: f64,
    grid_reference: String,
    category: Category,
}

impl TryFrom<RawMunro> for Munro {
    type Error = MunroError;

    fn try_from(raw: RawMunro) -> Result<Self, Self::Error> {
        if raw.name.trim().is_empty() {
            return Err(MunroError::InvalidRecord("blank name".to_string()));
        }
        if raw.grid_reference.trim().is_empty() {
            return Err(MunroError::InvalidRecord(format!(
                "blank grid reference for {}",
                raw.name
            )));
        }
        if !raw.height.is_finite() || raw.height <= 0.0 {
            return Err(MunroError::InvalidRecord(format!(
                "height {} for {} is not a positive number of metres",
                raw.height, raw.name
            )));
        }

        Ok(Munro::new(
            raw.name,
            raw.height,
            raw.grid_reference,
            raw.category,
        ))
    }
}
