use std::collections::BTreeMap;

use serde::Deserialize;
use tracing::debug;

use super::ThaanaTables;
use crate::legacy::LegacyMap;
use crate::translit::{TranslitTable, MAX_FRAGMENT_LEN};
use crate::MAX_CODEPOINT;

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TablesConfig {
    legacy: BTreeMap<String, u32>,
    latin: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[{0}] table is empty")]
    Empty(&'static str),
    #[error("legacy key must be a single ASCII character: {0:?}")]
    InvalidLegacyKey(String),
    #[error("legacy key {0:?} appears more than once")]
    DuplicateLegacyKey(char),
    #[error("codepoint {codepoint} for legacy key {key:?} is outside the Basic Multilingual Plane")]
    CodepointOutOfRange { key: String, codepoint: u32 },
    #[error("codepoint {codepoint} is mapped by both {first:?} and {second:?}")]
    NotBijective {
        codepoint: u16,
        first: char,
        second: char,
    },
    #[error("latin key must be 1-4 lowercase ASCII characters: {0:?}")]
    InvalidLatinKey(String),
    #[error("empty or non-ASCII value for latin key: {0}")]
    InvalidLatinValue(String),
    #[error("conversion tables already initialized")]
    AlreadyInitialized,
}

/// Parse TOML text into validated tables, deriving both inverses.
///
/// Latin keys are visited in byte order, so when several spellings share a
/// legacy fragment the one that sorts last becomes its reverse spelling.
pub fn parse_tables_toml(toml_str: &str) -> Result<ThaanaTables, TableError> {
    let config: TablesConfig =
        toml::from_str(toml_str).map_err(|e| TableError::Parse(e.to_string()))?;

    if config.legacy.is_empty() {
        return Err(TableError::Empty("legacy"));
    }
    if config.latin.is_empty() {
        return Err(TableError::Empty("latin"));
    }

    let mut legacy_pairs = Vec::with_capacity(config.legacy.len());
    for (key, &codepoint) in &config.legacy {
        let byte = match key.as_bytes() {
            [b] if b.is_ascii() => *b,
            _ => return Err(TableError::InvalidLegacyKey(key.clone())),
        };
        if codepoint > MAX_CODEPOINT {
            return Err(TableError::CodepointOutOfRange {
                key: key.clone(),
                codepoint,
            });
        }
        legacy_pairs.push((byte, codepoint as u16));
    }
    let legacy = LegacyMap::from_pairs(legacy_pairs)?;

    let mut latin_pairs = Vec::with_capacity(config.latin.len());
    for (key, value) in config.latin {
        let valid_key = (1..=MAX_FRAGMENT_LEN).contains(&key.len())
            && key.is_ascii()
            && !key.bytes().any(|b| b.is_ascii_uppercase());
        if !valid_key {
            return Err(TableError::InvalidLatinKey(key));
        }
        if value.is_empty() || !value.is_ascii() {
            return Err(TableError::InvalidLatinValue(key));
        }
        latin_pairs.push((key.into_bytes(), value.into_bytes()));
    }
    let (latin_to_legacy, legacy_to_latin) = TranslitTable::with_inverse(&latin_pairs);

    debug!(
        legacy = legacy.len(),
        latin = latin_to_legacy.len(),
        latin_reverse = legacy_to_latin.len(),
        "built conversion tables"
    );

    Ok(ThaanaTables {
        legacy,
        latin_to_legacy,
        legacy_to_latin,
    })
}
