//! UTF-8 codec limited to one-, two- and three-byte sequences.
//!
//! Decoding is lax: continuation bytes are not validated and payload bits are
//! taken with modulo arithmetic, so malformed input still yields codepoints.
//! ASCII bytes found in the middle of a multi-byte sequence are emitted
//! immediately and the sequence keeps collecting its remaining bytes.

use tracing::debug;

use crate::error::ConvertError;
use crate::Codepoint;

/// Decode UTF-8 bytes into codepoints.
///
/// A lead byte below 0xE0 opens a two-byte sequence, anything above opens a
/// three-byte one. A sequence left incomplete at the end of input is dropped.
pub fn decode(input: &[u8]) -> Vec<Codepoint> {
    let mut output = Vec::with_capacity(input.len());
    let mut pending = [0u8; 3];
    let mut pending_len = 0;
    let mut expected = 1;

    for &byte in input {
        if byte < 0x80 {
            output.push(Codepoint::from(byte));
            continue;
        }

        if pending_len == 0 {
            expected = if byte < 0xE0 { 2 } else { 3 };
        }
        pending[pending_len] = byte;
        pending_len += 1;

        if pending_len == expected {
            let codepoint = if expected == 2 {
                decode_pair(pending[0], pending[1])
            } else {
                decode_triple(pending[0], pending[1], pending[2])
            };
            output.push(codepoint);
            pending_len = 0;
        }
    }

    if pending_len > 0 {
        debug!(pending_len, "dropping truncated multi-byte sequence");
    }
    output
}

fn decode_pair(b0: u8, b1: u8) -> Codepoint {
    Codepoint::from(b0 % 32) * 64 + Codepoint::from(b1 % 64)
}

fn decode_triple(b0: u8, b1: u8, b2: u8) -> Codepoint {
    Codepoint::from(b0 % 16) * 4096 + Codepoint::from(b1 % 64) * 64 + Codepoint::from(b2 % 64)
}

/// Append the UTF-8 encoding of a BMP codepoint.
pub fn push_bmp(codepoint: u16, out: &mut Vec<u8>) {
    let cp = u32::from(codepoint);
    if cp < 0x80 {
        out.push(cp as u8);
    } else if cp < 0x800 {
        out.push((0xC0 + cp / 64) as u8);
        out.push((0x80 + cp % 64) as u8);
    } else {
        out.push((0xE0 + cp / 4096) as u8);
        out.push((0x80 + (cp % 4096) / 64) as u8);
        out.push((0x80 + cp % 64) as u8);
    }
}

/// Append the UTF-8 encoding of `codepoint`, rejecting anything above U+FFFF.
pub fn push_codepoint(codepoint: Codepoint, out: &mut Vec<u8>) -> Result<(), ConvertError> {
    let bmp =
        u16::try_from(codepoint).map_err(|_| ConvertError::CodepointOutOfRange(codepoint))?;
    push_bmp(bmp, out);
    Ok(())
}

/// Encode a codepoint sequence as UTF-8.
pub fn encode(codepoints: &[Codepoint]) -> Result<Vec<u8>, ConvertError> {
    let mut out = Vec::with_capacity(codepoints.len() * 3);
    for &cp in codepoints {
        push_codepoint(cp, &mut out)?;
    }
    Ok(out)
}
