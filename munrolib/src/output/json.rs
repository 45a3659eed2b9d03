//! JSON rendering of search results.

use crate::data::munro::Munro;
use crate::Result;

/// Render results as a JSON array of record objects.
///
/// Each object carries `name`, `height`, `gridReference`, and `category`,
/// with the category as its symbolic literal (`MUN` or `TOP`).
pub fn to_json(munros: &[&Munro], pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(munros)?
    } else {
        serde_json::to_string(munros)?
    };
    Ok(json)
}
