//! The fourteen public conversions, each a fixed composition of the codecs.
//!
//! Text inputs accept anything byte-like; text outputs are byte vectors
//! because entity and legacy output may carry raw bytes above 127 that are
//! not valid UTF-8 on their own.

#[cfg(test)]
mod tests;

use std::sync::OnceLock;

use tracing::debug_span;

use crate::error::ConvertError;
use crate::tables::{parse_tables_toml, TableError, ThaanaTables};
use crate::{entity, utf8, Codepoint};

static INSTANCE: OnceLock<Converter> = OnceLock::new();

/// A conversion engine over one immutable set of tables.
///
/// Safe to share across threads; no conversion mutates it.
#[derive(Debug, Clone)]
pub struct Converter {
    tables: ThaanaTables,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

impl Converter {
    /// A converter over the embedded default tables.
    pub fn new() -> Self {
        Self::with_tables(ThaanaTables::default_tables())
    }

    pub fn with_tables(tables: ThaanaTables) -> Self {
        Converter { tables }
    }

    /// Install `toml_content` as the tables behind [`global`](Self::global).
    ///
    /// The TOML is parsed before anything is installed. Fails with
    /// `AlreadyInitialized` once the global converter exists, whether it was
    /// built from custom tables or from the defaults.
    pub fn init_custom(toml_content: String) -> Result<(), TableError> {
        let tables = parse_tables_toml(&toml_content)?;
        INSTANCE
            .set(Converter { tables })
            .map_err(|_| TableError::AlreadyInitialized)
    }

    /// The process-wide converter, built from the default tables unless
    /// [`init_custom`](Self::init_custom) got there first.
    pub fn global() -> &'static Converter {
        INSTANCE.get_or_init(Converter::new)
    }

    pub fn tables(&self) -> &ThaanaTables {
        &self.tables
    }

    // --- UTF-8 ---

    pub fn utf8_to_codepoints(&self, input: impl AsRef<[u8]>) -> Vec<Codepoint> {
        let input = input.as_ref();
        let _span = debug_span!("utf8_to_codepoints", len = input.len()).entered();
        utf8::decode(input)
    }

    pub fn utf8_to_legacy(&self, input: impl AsRef<[u8]>) -> Vec<u8> {
        let input = input.as_ref();
        let _span = debug_span!("utf8_to_legacy", len = input.len()).entered();
        self.tables.legacy.encode(&utf8::decode(input))
    }

    pub fn utf8_to_entities(&self, input: impl AsRef<[u8]>) -> Vec<u8> {
        let input = input.as_ref();
        let _span = debug_span!("utf8_to_entities", len = input.len()).entered();
        entity::encode(&utf8::decode(input))
    }

    // --- Codepoints ---

    pub fn codepoints_to_utf8(&self, codepoints: &[Codepoint]) -> Result<Vec<u8>, ConvertError> {
        let _span = debug_span!("codepoints_to_utf8", len = codepoints.len()).entered();
        utf8::encode(codepoints)
    }

    pub fn codepoints_to_entities(&self, codepoints: &[Codepoint]) -> Vec<u8> {
        let _span = debug_span!("codepoints_to_entities", len = codepoints.len()).entered();
        entity::encode(codepoints)
    }

    /// Unmapped codepoints keep only their low byte.
    pub fn codepoints_to_legacy(&self, codepoints: &[Codepoint]) -> Vec<u8> {
        let _span = debug_span!("codepoints_to_legacy", len = codepoints.len()).entered();
        self.tables.legacy.encode(codepoints)
    }

    /// Single-codepoint form of [`codepoints_to_utf8`](Self::codepoints_to_utf8).
    pub fn codepoint_to_utf8(&self, codepoint: Codepoint) -> Result<Vec<u8>, ConvertError> {
        let mut out = Vec::with_capacity(3);
        utf8::push_codepoint(codepoint, &mut out)?;
        Ok(out)
    }

    /// Single-codepoint form of [`codepoints_to_entities`](Self::codepoints_to_entities).
    pub fn codepoint_to_entity(&self, codepoint: Codepoint) -> Vec<u8> {
        let mut out = Vec::new();
        entity::push_entity(codepoint, &mut out);
        out
    }

    // --- Entities ---

    pub fn entities_to_codepoints(
        &self,
        input: impl AsRef<[u8]>,
    ) -> Result<Vec<Codepoint>, ConvertError> {
        let input = input.as_ref();
        let _span = debug_span!("entities_to_codepoints", len = input.len()).entered();
        entity::decode_to_codepoints(input)
    }

    pub fn entities_to_utf8(&self, input: impl AsRef<[u8]>) -> Result<Vec<u8>, ConvertError> {
        let input = input.as_ref();
        let _span = debug_span!("entities_to_utf8", len = input.len()).entered();
        entity::decode_to_utf8(input)
    }

    /// Substitutes legacy bytes for entities, then reverses numeric runs.
    pub fn entities_to_legacy(&self, input: impl AsRef<[u8]>) -> Vec<u8> {
        let input = input.as_ref();
        let _span = debug_span!("entities_to_legacy", len = input.len()).entered();
        entity::decode_to_legacy(input, &self.tables.legacy)
    }

    // --- Legacy ---

    /// Decodes and reverses character order for right-to-left display.
    pub fn legacy_to_utf8(&self, input: impl AsRef<[u8]>) -> Vec<u8> {
        let input = input.as_ref();
        let _span = debug_span!("legacy_to_utf8", len = input.len()).entered();
        self.tables.legacy.decode_to_utf8(input)
    }

    pub fn legacy_to_entities(&self, input: impl AsRef<[u8]>) -> Vec<u8> {
        let input = input.as_ref();
        let _span = debug_span!("legacy_to_entities", len = input.len()).entered();
        entity::encode(&self.legacy_to_codepoints(input))
    }

    pub fn legacy_to_codepoints(&self, input: impl AsRef<[u8]>) -> Vec<Codepoint> {
        let input = input.as_ref();
        let _span = debug_span!("legacy_to_codepoints", len = input.len()).entered();
        self.tables
            .legacy
            .decode(input)
            .into_iter()
            .map(Codepoint::from)
            .collect()
    }

    // --- Latin ---

    /// Input is lower-cased first; output case comes from the table.
    pub fn latin_to_legacy(&self, input: impl AsRef<[u8]>) -> Vec<u8> {
        let input = input.as_ref();
        let _span = debug_span!("latin_to_legacy", len = input.len()).entered();
        self.tables
            .latin_to_legacy
            .transliterate(&input.to_ascii_lowercase())
    }

    pub fn legacy_to_latin(&self, input: impl AsRef<[u8]>) -> Vec<u8> {
        let input = input.as_ref();
        let _span = debug_span!("legacy_to_latin", len = input.len()).entered();
        self.tables.legacy_to_latin.transliterate(input)
    }
}
