//! HTML numeric character references (`&#N;`).
//!
//! Encoding escapes only codepoints above 255; Latin-1 values are written as
//! the raw byte. Decoding scans for `&#<digits>;` and hands each reference to
//! a replacement routine, copying all other bytes through.

use std::convert::Infallible;

use crate::error::ConvertError;
use crate::legacy::LegacyMap;
use crate::numeric::reverse_numerics;
use crate::{utf8, Codepoint, MAX_CODEPOINT};

/// The decimal digits of one `&#N;` reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityRef<'a> {
    digits: &'a [u8],
}

impl EntityRef<'_> {
    /// The referenced value, or `None` if it does not fit in a `u32`.
    pub fn value(&self) -> Option<u32> {
        self.digits.iter().try_fold(0u32, |acc, &d| {
            acc.checked_mul(10)?.checked_add(u32::from(d - b'0'))
        })
    }

    /// The value modulo 256, defined even when [`value`](Self::value) overflows.
    pub fn low_byte(&self) -> u8 {
        self.digits
            .iter()
            .fold(0u8, |acc, &d| acc.wrapping_mul(10).wrapping_add(d - b'0'))
    }

    pub fn digits(&self) -> &str {
        // Only ASCII digits are ever captured.
        std::str::from_utf8(self.digits).unwrap_or_default()
    }
}

/// Match `&#<digits>;` at the start of `input`, returning the digits and the
/// total length of the reference.
fn match_entity(input: &[u8]) -> Option<(EntityRef<'_>, usize)> {
    let rest = input.strip_prefix(b"&#")?;
    let digit_count = rest.iter().take_while(|b| b.is_ascii_digit()).count();
    if digit_count == 0 || rest.get(digit_count) != Some(&b';') {
        return None;
    }
    let entity = EntityRef {
        digits: &rest[..digit_count],
    };
    Some((entity, digit_count + 3))
}

/// Replace every entity in `input` using `replace`, which writes its output
/// directly into the buffer.
pub fn substitute<E, F>(input: &[u8], mut replace: F) -> Result<Vec<u8>, E>
where
    F: FnMut(EntityRef<'_>, &mut Vec<u8>) -> Result<(), E>,
{
    let mut out = Vec::with_capacity(input.len());
    let mut pos = 0;
    while pos < input.len() {
        if input[pos] == b'&' {
            if let Some((entity, len)) = match_entity(&input[pos..]) {
                replace(entity, &mut out)?;
                pos += len;
                continue;
            }
        }
        out.push(input[pos]);
        pos += 1;
    }
    Ok(out)
}

/// Append one codepoint in entity form.
pub fn push_entity(codepoint: Codepoint, out: &mut Vec<u8>) {
    if codepoint < 256 {
        out.push(codepoint as u8);
    } else {
        out.extend_from_slice(format!("&#{codepoint};").as_bytes());
    }
}

pub fn encode(codepoints: &[Codepoint]) -> Vec<u8> {
    let mut out = Vec::with_capacity(codepoints.len() * 7);
    for &cp in codepoints {
        push_entity(cp, &mut out);
    }
    out
}

/// Replace entities with their UTF-8 encoding.
pub fn decode_to_utf8(input: &[u8]) -> Result<Vec<u8>, ConvertError> {
    substitute(input, |entity, out| match entity.value() {
        Some(cp) if cp <= MAX_CODEPOINT => utf8::push_codepoint(cp, out),
        _ => Err(ConvertError::EntityOutOfRange(entity.digits().to_string())),
    })
}

pub fn decode_to_codepoints(input: &[u8]) -> Result<Vec<Codepoint>, ConvertError> {
    decode_to_utf8(input).map(|bytes| utf8::decode(&bytes))
}

/// Replace entities with legacy bytes, then repair digit order.
///
/// A codepoint with no legacy byte is written as its low byte.
pub fn decode_to_legacy(input: &[u8], legacy: &LegacyMap) -> Vec<u8> {
    let substituted = substitute::<Infallible, _>(input, |entity, out| {
        let byte = entity
            .value()
            .and_then(|cp| legacy.byte(cp))
            .unwrap_or_else(|| entity.low_byte());
        out.push(byte);
        Ok(())
    });
    match substituted {
        Ok(bytes) => reverse_numerics(bytes),
        Err(never) => match never {},
    }
}
