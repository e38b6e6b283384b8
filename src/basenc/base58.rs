//! Base58: the whole buffer is one big-endian number, converted digit by
//! digit with schoolbook carry propagation. Quadratic in input length.

use super::alphabet::AlphabetTable;
use super::core::Encoding;
use super::error::{CodecError, alloc_output};

/// Upper bound on base-58 digits per input byte: log(256)/log(58) ~= 1.366.
const DIGITS_PER_BYTE: (usize, usize) = (138, 100);

/// Upper bound on bytes per base-58 digit: log(58)/log(256) ~= 0.732.
const BYTES_PER_DIGIT: (usize, usize) = (733, 1000);

/// Scratch size for `n` units scaled by `ratio`, plus one spare slot.
fn scratch_len(n: usize, ratio: (usize, usize)) -> Result<usize, CodecError> {
    n.checked_mul(ratio.0)
        .map(|v| v / ratio.1 + 1)
        .ok_or(CodecError::AllocationFailure { bytes: usize::MAX })
}

fn zeroed(len: usize) -> Result<Vec<u8>, CodecError> {
    let mut buf = alloc_output(len)?;
    buf.resize(len, 0);
    Ok(buf)
}

pub fn encode(data: &[u8], alphabet: &AlphabetTable) -> Result<Vec<u8>, CodecError> {
    // Each leading zero byte maps to one leading zero digit ('1').
    let zeros = data.iter().take_while(|&&b| b == 0).count();
    let rest = &data[zeros..];

    let size = scratch_len(rest.len(), DIGITS_PER_BYTE)?;
    let mut digits = zeroed(size)?;
    // Count of low-order digits currently in use, from the end of `digits`.
    let mut high = 0usize;

    for &byte in rest {
        let mut carry = u32::from(byte);
        let mut used = 0usize;
        for digit in digits.iter_mut().rev() {
            if carry == 0 && used >= high {
                break;
            }
            carry += 256 * u32::from(*digit);
            *digit = (carry % 58) as u8;
            carry /= 58;
            used += 1;
        }
        debug_assert_eq!(carry, 0, "base58 scratch buffer too small");
        high = used;
    }

    let start = digits.iter().take_while(|&&d| d == 0).count();
    let mut result = alloc_output(zeros + (size - start))?;
    result.resize(zeros, alphabet.symbol(0));
    result.extend(digits[start..].iter().map(|&d| alphabet.symbol(d)));
    Ok(result)
}

pub fn decode(
    text: &[u8],
    encoding: Encoding,
    alphabet: &AlphabetTable,
) -> Result<Vec<u8>, CodecError> {
    let zero_symbol = alphabet.symbol(0);
    let zeros = text.iter().take_while(|&&c| c == zero_symbol).count();
    let rest = &text[zeros..];

    let size = scratch_len(rest.len(), BYTES_PER_DIGIT)?;
    let mut bytes = zeroed(size)?;
    let mut high = 0usize;

    for (i, &c) in rest.iter().enumerate() {
        let Some(value) = alphabet.value(c) else {
            return Err(CodecError::InvalidSymbol {
                encoding,
                byte: c,
                position: zeros + i,
            });
        };

        let mut carry = u32::from(value);
        let mut used = 0usize;
        for byte in bytes.iter_mut().rev() {
            if carry == 0 && used >= high {
                break;
            }
            carry += 58 * u32::from(*byte);
            *byte = (carry % 256) as u8;
            carry /= 256;
            used += 1;
        }
        debug_assert_eq!(carry, 0, "base58 scratch buffer too small");
        high = used;
    }

    // Leading zero bytes of the scratch buffer are slack, not data; only the
    // explicit '1' prefix produces zero bytes in the output.
    let start = bytes.iter().take_while(|&&b| b == 0).count();
    let mut result = alloc_output(zeros + (size - start))?;
    result.resize(zeros, 0);
    result.extend_from_slice(&bytes[start..]);
    Ok(result)
}
