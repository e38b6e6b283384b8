//! Z85 (ZeroMQ RFC 32): 4-byte big-endian words <-> 5 base-85 digits.

use super::alphabet::AlphabetTable;
use super::core::Encoding;
use super::error::{CodecError, Direction, alloc_output};

pub const BLOCK_BYTES: usize = 4;
pub const BLOCK_SYMBOLS: usize = 5;

pub fn encode(data: &[u8], alphabet: &AlphabetTable) -> Result<Vec<u8>, CodecError> {
    if !data.len().is_multiple_of(BLOCK_BYTES) {
        return Err(CodecError::InvalidLength {
            encoding: Encoding::Z85,
            direction: Direction::Encoding,
            len: data.len(),
            multiple: BLOCK_BYTES,
        });
    }

    let mut result = alloc_output(data.len() / BLOCK_BYTES * BLOCK_SYMBOLS)?;
    for chunk in data.chunks_exact(BLOCK_BYTES) {
        let mut value = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        let mut chars = [0u8; BLOCK_SYMBOLS];
        for c in chars.iter_mut().rev() {
            *c = alphabet.symbol((value % 85) as u8);
            value /= 85;
        }
        result.extend_from_slice(&chars);
    }
    Ok(result)
}

pub fn decode(text: &[u8], alphabet: &AlphabetTable) -> Result<Vec<u8>, CodecError> {
    if !text.len().is_multiple_of(BLOCK_SYMBOLS) {
        return Err(CodecError::InvalidLength {
            encoding: Encoding::Z85,
            direction: Direction::Decoding,
            len: text.len(),
            multiple: BLOCK_SYMBOLS,
        });
    }

    let mut result = alloc_output(text.len() / BLOCK_SYMBOLS * BLOCK_BYTES)?;
    for (g, block) in text.chunks_exact(BLOCK_SYMBOLS).enumerate() {
        // Five digits can exceed u32 ("#####" is 85^5 - 1); such words wrap mod 2^32.
        let mut value = 0u64;
        for (k, &c) in block.iter().enumerate() {
            let Some(v) = alphabet.value(c) else {
                return Err(CodecError::InvalidSymbol {
                    encoding: Encoding::Z85,
                    byte: c,
                    position: g * BLOCK_SYMBOLS + k,
                });
            };
            value = value * 85 + u64::from(v);
        }
        result.extend_from_slice(&(value as u32).to_be_bytes());
    }
    Ok(result)
}
