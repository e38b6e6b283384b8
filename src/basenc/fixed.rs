//! Codec for the power-of-two alphabets that map a fixed number of input
//! bytes onto a fixed number of symbols (Base64, Base32, Base16, Base2).

use super::alphabet::AlphabetTable;
use super::core::Encoding;
use super::error::{CodecError, Direction, alloc_output};

/// Order in which the bits of each input byte are laid out in the group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitOrder {
    MsbFirst,
    LsbFirst,
}

/// Shape of one symbol group. A group packs at most 40 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupLayout {
    pub bits_per_symbol: u32,
    pub group_bytes: usize,
    pub group_symbols: usize,
    pub pad: Option<u8>,
    pub bit_order: BitOrder,
}

impl GroupLayout {
    pub const BASE64: GroupLayout = GroupLayout {
        bits_per_symbol: 6,
        group_bytes: 3,
        group_symbols: 4,
        pad: Some(b'='),
        bit_order: BitOrder::MsbFirst,
    };

    pub const BASE32: GroupLayout = GroupLayout {
        bits_per_symbol: 5,
        group_bytes: 5,
        group_symbols: 8,
        pad: Some(b'='),
        bit_order: BitOrder::MsbFirst,
    };

    pub const BASE16: GroupLayout = GroupLayout {
        bits_per_symbol: 4,
        group_bytes: 1,
        group_symbols: 2,
        pad: None,
        bit_order: BitOrder::MsbFirst,
    };

    pub const BASE2_MSBF: GroupLayout = GroupLayout {
        bits_per_symbol: 1,
        group_bytes: 1,
        group_symbols: 8,
        pad: None,
        bit_order: BitOrder::MsbFirst,
    };

    pub const BASE2_LSBF: GroupLayout = GroupLayout {
        bits_per_symbol: 1,
        group_bytes: 1,
        group_symbols: 8,
        pad: None,
        bit_order: BitOrder::LsbFirst,
    };

    #[inline]
    fn group_bits(&self) -> u32 {
        self.group_bytes as u32 * 8
    }

    #[inline]
    fn symbol_mask(&self) -> u64 {
        (1u64 << self.bits_per_symbol) - 1
    }

    /// Symbols carrying data for a final group holding `bytes` input bytes.
    #[inline]
    fn data_symbols(&self, bytes: usize) -> usize {
        (bytes * 8).div_ceil(self.bits_per_symbol as usize)
    }

    /// Exact encoded length of `n` bytes, `None` on overflow.
    pub fn encoded_len(&self, n: usize) -> Option<usize> {
        n.div_ceil(self.group_bytes).checked_mul(self.group_symbols)
    }

    #[inline]
    fn orient(&self, byte: u8) -> u8 {
        match self.bit_order {
            BitOrder::MsbFirst => byte,
            BitOrder::LsbFirst => byte.reverse_bits(),
        }
    }
}

/// Encode `data` into whole symbol groups, padding the last one if the layout has a pad symbol.
pub fn encode(
    data: &[u8],
    layout: &GroupLayout,
    alphabet: &AlphabetTable,
) -> Result<Vec<u8>, CodecError> {
    let out_len = layout
        .encoded_len(data.len())
        .ok_or(CodecError::AllocationFailure { bytes: usize::MAX })?;
    let mut result = alloc_output(out_len)?;

    let group_bits = layout.group_bits();
    let mask = layout.symbol_mask();
    let full_end = (data.len() / layout.group_bytes) * layout.group_bytes;

    // Full groups: every symbol carries data.
    for chunk in data[..full_end].chunks_exact(layout.group_bytes) {
        let acc = pack(chunk, layout);
        for i in 1..=layout.group_symbols as u32 {
            let shift = group_bits - i * layout.bits_per_symbol;
            result.push(alphabet.symbol(((acc >> shift) & mask) as u8));
        }
    }

    // Last partial group: zero-fill the missing bytes, then replace the
    // symbols that only cover the fill with the pad character.
    let rest = &data[full_end..];
    if !rest.is_empty() {
        let acc = pack(rest, layout) << ((layout.group_bytes - rest.len()) * 8);
        let data_syms = layout.data_symbols(rest.len());
        for i in 1..=layout.group_symbols as u32 {
            if i as usize <= data_syms {
                let shift = group_bits - i * layout.bits_per_symbol;
                result.push(alphabet.symbol(((acc >> shift) & mask) as u8));
            } else if let Some(pad) = layout.pad {
                result.push(pad);
            }
        }
    }

    Ok(result)
}

/// Decode whole symbol groups. Pad symbols contribute zero bits and shorten
/// the byte count of their group; their placement within the group is not
/// checked.
pub fn decode(
    text: &[u8],
    encoding: Encoding,
    layout: &GroupLayout,
    alphabet: &AlphabetTable,
) -> Result<Vec<u8>, CodecError> {
    if !text.len().is_multiple_of(layout.group_symbols) {
        return Err(CodecError::InvalidLength {
            encoding,
            direction: Direction::Decoding,
            len: text.len(),
            multiple: layout.group_symbols,
        });
    }

    let mut result = alloc_output(text.len() / layout.group_symbols * layout.group_bytes)?;
    let group_bits = layout.group_bits();

    for (g, group) in text.chunks_exact(layout.group_symbols).enumerate() {
        let mut acc = 0u64;
        let mut valid_bits = group_bits;

        for (k, &c) in group.iter().enumerate() {
            if layout.pad == Some(c) {
                acc <<= layout.bits_per_symbol;
                valid_bits -= layout.bits_per_symbol;
                continue;
            }
            match alphabet.value(c) {
                Some(v) => acc = (acc << layout.bits_per_symbol) | u64::from(v),
                None => {
                    return Err(CodecError::InvalidSymbol {
                        encoding,
                        byte: c,
                        position: g * layout.group_symbols + k,
                    });
                }
            }
        }

        for b in 0..(valid_bits / 8) {
            let byte = (acc >> (group_bits - (b + 1) * 8)) as u8;
            result.push(layout.orient(byte));
        }
    }

    Ok(result)
}

/// Pack up to `group_bytes` bytes into a big-endian integer, bit order applied per byte.
#[inline]
fn pack(bytes: &[u8], layout: &GroupLayout) -> u64 {
    bytes
        .iter()
        .fold(0u64, |acc, &b| (acc << 8) | u64::from(layout.orient(b)))
}
