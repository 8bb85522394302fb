//! Writes a resolved [`Document`] as TOML.

use confl_core::Document;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TomlOutputError {
    #[error("cannot represent the document as TOML: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Serialize `document` to TOML text, keeping declaration order.
///
/// Top-level scalars and arrays become `key = value` lines, records become
/// `[table]` sections, and arrays of records become `[[array]]` tables.
pub fn to_toml_string(document: &Document) -> Result<String, TomlOutputError> {
    Ok(toml::to_string(document)?)
}
