//! The fixed conversion tables and their TOML source.
//!
//! - `default_tables()` builds the tables embedded via `include_str!("default_tables.toml")`
//! - `parse_tables_toml()` builds tables from any document with the same layout
//! - both inverse tables are derived once, at build time

mod config;

pub use config::{parse_tables_toml, TableError};

use crate::legacy::LegacyMap;
use crate::translit::TranslitTable;
use crate::Codepoint;

pub const DEFAULT_TABLES_TOML: &str = include_str!("default_tables.toml");

/// Returns the embedded default tables TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_TABLES_TOML
}

/// Immutable lookup tables shared by every conversion.
#[derive(Debug, Clone)]
pub struct ThaanaTables {
    pub(crate) legacy: LegacyMap,
    pub(crate) latin_to_legacy: TranslitTable,
    pub(crate) legacy_to_latin: TranslitTable,
}

impl ThaanaTables {
    pub fn default_tables() -> Self {
        parse_tables_toml(DEFAULT_TABLES_TOML).expect("embedded tables TOML must be valid")
    }

    pub fn legacy(&self) -> &LegacyMap {
        &self.legacy
    }

    pub fn legacy_len(&self) -> usize {
        self.legacy.len()
    }

    pub fn latin_len(&self) -> usize {
        self.latin_to_legacy.len()
    }

    pub fn legacy_codepoint(&self, byte: u8) -> Option<u16> {
        self.legacy.codepoint(byte)
    }

    pub fn legacy_byte(&self, codepoint: Codepoint) -> Option<u8> {
        self.legacy.byte(codepoint)
    }

    /// Legacy fragment for a Latin spelling.
    pub fn latin_fragment(&self, latin: &str) -> Option<&[u8]> {
        self.latin_to_legacy.get(latin.as_bytes())
    }

    /// The Latin spelling chosen for a legacy fragment.
    pub fn latin_spelling(&self, legacy: &[u8]) -> Option<&[u8]> {
        self.legacy_to_latin.get(legacy)
    }
}
