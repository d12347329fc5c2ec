//! The legacy "Ascii Thaana" encoding: one keyboard byte per Thaana glyph.
//!
//! The byte-to-codepoint table is a bijection, so the reverse direction is
//! derived by flipping it. Unmapped values fall back asymmetrically: an
//! unmapped byte decodes to its own value, while an unmapped codepoint is
//! truncated to its low byte when encoding.

use std::collections::HashMap;

use tracing::debug;

use crate::tables::TableError;
use crate::utf8;
use crate::Codepoint;

#[derive(Debug, Clone, Default)]
pub struct LegacyMap {
    to_codepoint: HashMap<u8, u16>,
    to_byte: HashMap<u16, u8>,
}

impl LegacyMap {
    /// Build the map and its inverse. Fails if two bytes share a codepoint or
    /// a byte appears twice.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (u8, u16)>,
    {
        let mut map = LegacyMap::default();
        for (byte, codepoint) in pairs {
            if map.to_codepoint.insert(byte, codepoint).is_some() {
                return Err(TableError::DuplicateLegacyKey(char::from(byte)));
            }
            if let Some(other) = map.to_byte.insert(codepoint, byte) {
                return Err(TableError::NotBijective {
                    codepoint,
                    first: char::from(other),
                    second: char::from(byte),
                });
            }
        }
        Ok(map)
    }

    pub fn len(&self) -> usize {
        self.to_codepoint.len()
    }

    pub fn is_empty(&self) -> bool {
        self.to_codepoint.is_empty()
    }

    pub fn codepoint(&self, byte: u8) -> Option<u16> {
        self.to_codepoint.get(&byte).copied()
    }

    pub fn byte(&self, codepoint: Codepoint) -> Option<u8> {
        let bmp = u16::try_from(codepoint).ok()?;
        self.to_byte.get(&bmp).copied()
    }

    /// Map a codepoint to its legacy byte, truncating unmapped values to the
    /// low byte. Codepoints above 255 lose information here.
    pub fn encode_one(&self, codepoint: Codepoint) -> u8 {
        self.byte(codepoint).unwrap_or_else(|| {
            if codepoint > 0xFF {
                debug!(codepoint, "truncating unmapped codepoint to one byte");
            }
            codepoint as u8
        })
    }

    pub fn encode(&self, codepoints: &[Codepoint]) -> Vec<u8> {
        codepoints.iter().map(|&cp| self.encode_one(cp)).collect()
    }

    /// Decode legacy bytes. Unmapped bytes become the codepoint of equal value.
    pub fn decode(&self, bytes: &[u8]) -> Vec<u16> {
        bytes
            .iter()
            .map(|&b| self.codepoint(b).unwrap_or(u16::from(b)))
            .collect()
    }

    /// Decode legacy bytes straight to UTF-8, reversing character order.
    ///
    /// Legacy text stores right-to-left glyphs back-to-front; this path is the
    /// only one that flips the whole string.
    pub fn decode_to_utf8(&self, bytes: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(bytes.len() * 2);
        for cp in self.decode(bytes).into_iter().rev() {
            utf8::push_bmp(cp, &mut out);
        }
        out
    }
}
