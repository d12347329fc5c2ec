//! Conversions between the representations Thaana (Dhivehi) text has taken on
//! the web: UTF-8 bytes, codepoint sequences, HTML numeric entities, the legacy
//! single-byte "Ascii Thaana" keyboard encoding, and Latin transliteration.
//!
//! Every conversion is a pure function of its input and a set of immutable
//! tables built once per [`Converter`].

pub mod converter;
pub mod entity;
pub mod error;
pub mod legacy;
pub(crate) mod numeric;
pub mod tables;
pub mod translit;
pub mod utf8;

pub use converter::Converter;
pub use error::ConvertError;
pub use tables::{TableError, ThaanaTables};

/// A Unicode codepoint. Only the Basic Multilingual Plane is supported.
pub type Codepoint = u32;

/// Largest codepoint the UTF-8 codec can encode (three-byte sequences).
pub const MAX_CODEPOINT: Codepoint = 0xFFFF;
