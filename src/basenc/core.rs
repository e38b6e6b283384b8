use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use base64_simd::AsOut;

use super::alphabet::{self, AlphabetTable};
use super::error::{CodecError, UnknownEncoding, alloc_output};
use super::fixed::GroupLayout;
use super::garbage::{strip_garbage, strip_newlines, unstripped_offset};
use super::wrap::wrap_lines;
use super::{base58, fixed, z85};

/// SIMD-accelerated base64 engine (standard alphabet with padding).
const B64_STANDARD: &base64_simd::Base64 = &base64_simd::STANDARD;
/// SIMD-accelerated base64 engine (URL-safe alphabet with padding).
const B64_URL_SAFE: &base64_simd::Base64 = &base64_simd::URL_SAFE;

/// Default `--wrap` column.
pub const DEFAULT_WRAP: usize = 76;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    Base64,
    Base64Url,
    Base58,
    Base32,
    Base32Hex,
    Base16,
    Base2Msbf,
    Base2Lsbf,
    Z85,
}

/// How an encoding maps bytes to symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    /// Fixed bit groups, processed independently.
    Fixed(GroupLayout),
    /// One arbitrary-precision number over the whole buffer.
    BigRadix,
    /// Fixed blocks of `bytes` bytes <-> `symbols` base-85 digits.
    Block { bytes: usize, symbols: usize },
}

impl Encoding {
    pub const ALL: [Encoding; 9] = [
        Encoding::Base64,
        Encoding::Base64Url,
        Encoding::Base58,
        Encoding::Base32,
        Encoding::Base32Hex,
        Encoding::Base16,
        Encoding::Base2Msbf,
        Encoding::Base2Lsbf,
        Encoding::Z85,
    ];

    /// Identifier as accepted on the command line (without the leading `--`).
    pub fn name(self) -> &'static str {
        match self {
            Encoding::Base64 => "base64",
            Encoding::Base64Url => "base64url",
            Encoding::Base58 => "base58",
            Encoding::Base32 => "base32",
            Encoding::Base32Hex => "base32hex",
            Encoding::Base16 => "base16",
            Encoding::Base2Msbf => "base2msbf",
            Encoding::Base2Lsbf => "base2lsbf",
            Encoding::Z85 => "z85",
        }
    }

    pub fn alphabet(self) -> &'static AlphabetTable {
        match self {
            Encoding::Base64 => &alphabet::BASE64,
            Encoding::Base64Url => &alphabet::BASE64URL,
            Encoding::Base58 => &alphabet::BASE58,
            Encoding::Base32 => &alphabet::BASE32,
            Encoding::Base32Hex => &alphabet::BASE32HEX,
            Encoding::Base16 => &alphabet::BASE16,
            Encoding::Base2Msbf | Encoding::Base2Lsbf => &alphabet::BASE2,
            Encoding::Z85 => &alphabet::Z85,
        }
    }

    pub fn scheme(self) -> Scheme {
        match self {
            Encoding::Base64 | Encoding::Base64Url => Scheme::Fixed(GroupLayout::BASE64),
            Encoding::Base32 | Encoding::Base32Hex => Scheme::Fixed(GroupLayout::BASE32),
            Encoding::Base16 => Scheme::Fixed(GroupLayout::BASE16),
            Encoding::Base2Msbf => Scheme::Fixed(GroupLayout::BASE2_MSBF),
            Encoding::Base2Lsbf => Scheme::Fixed(GroupLayout::BASE2_LSBF),
            Encoding::Base58 => Scheme::BigRadix,
            Encoding::Z85 => Scheme::Block {
                bytes: z85::BLOCK_BYTES,
                symbols: z85::BLOCK_SYMBOLS,
            },
        }
    }

    /// Padding symbol, if the scheme pads partial groups.
    pub fn pad(self) -> Option<u8> {
        match self.scheme() {
            Scheme::Fixed(layout) => layout.pad,
            Scheme::BigRadix | Scheme::Block { .. } => None,
        }
    }

    /// Exact encoded length of `n` input bytes. `None` when the length is
    /// data-dependent (Base58), undefined (Z85 with `n % 4 != 0`), or overflows.
    pub fn encoded_len(self, n: usize) -> Option<usize> {
        match self.scheme() {
            Scheme::Fixed(layout) => layout.encoded_len(n),
            Scheme::BigRadix => None,
            Scheme::Block { bytes, symbols } => {
                if n.is_multiple_of(bytes) {
                    (n / bytes).checked_mul(symbols)
                } else {
                    None
                }
            }
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Encoding {
    type Err = UnknownEncoding;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.strip_prefix("--").unwrap_or(s);
        Encoding::ALL
            .into_iter()
            .find(|e| e.name() == name)
            .ok_or_else(|| UnknownEncoding(s.to_string()))
    }
}

/// Encode `data` as one unwrapped run of symbols.
pub fn encode(data: &[u8], encoding: Encoding) -> Result<Vec<u8>, CodecError> {
    // Fast path: SIMD-accelerated base64/base64url encoding
    match encoding {
        Encoding::Base64 => return encode_base64_simd(data, B64_STANDARD),
        Encoding::Base64Url => return encode_base64_simd(data, B64_URL_SAFE),
        _ => {}
    }
    encode_portable(data, encoding)
}

/// Decode `text` as a whole. With `ignore_garbage`, bytes outside the
/// alphabet (and padding) are dropped first; otherwise any such byte fails
/// the call.
pub fn decode(
    text: &[u8],
    encoding: Encoding,
    ignore_garbage: bool,
) -> Result<Vec<u8>, CodecError> {
    if ignore_garbage {
        let clean = strip_garbage(text, encoding);
        return decode_clean(&clean, encoding);
    }
    decode_clean(text, encoding)
}

fn decode_clean(text: &[u8], encoding: Encoding) -> Result<Vec<u8>, CodecError> {
    let alphabet = encoding.alphabet();
    match encoding.scheme() {
        Scheme::Fixed(layout) => fixed::decode(text, encoding, &layout, alphabet),
        Scheme::BigRadix => base58::decode(text, encoding, alphabet),
        Scheme::Block { .. } => z85::decode(text, alphabet),
    }
}

/// Table-driven encode for every scheme, without the SIMD base64 path.
pub fn encode_portable(data: &[u8], encoding: Encoding) -> Result<Vec<u8>, CodecError> {
    let alphabet = encoding.alphabet();
    match encoding.scheme() {
        Scheme::Fixed(layout) => fixed::encode(data, &layout, alphabet),
        Scheme::BigRadix => base58::encode(data, alphabet),
        Scheme::Block { .. } => z85::encode(data, alphabet),
    }
}

/// SIMD base64 encode into an exactly sized buffer.
fn encode_base64_simd(
    data: &[u8],
    engine: &base64_simd::Base64,
) -> Result<Vec<u8>, CodecError> {
    let enc_len = engine.encoded_length(data.len());
    let mut buf = alloc_output(enc_len)?;
    buf.resize(enc_len, 0);
    let written = engine.encode(data, buf[..].as_out()).len();
    debug_assert_eq!(written, enc_len);
    Ok(buf)
}

/// Encode, wrap at `wrap` columns and write. Wrapped non-empty output ends
/// with a newline; `wrap == 0` writes a single line with no terminator.
pub fn encode_to_writer(
    data: &[u8],
    encoding: Encoding,
    wrap: usize,
    out: &mut impl Write,
) -> io::Result<()> {
    let encoded = encode(data, encoding).map_err(into_io)?;
    if encoded.is_empty() {
        return Ok(());
    }
    if wrap == 0 {
        return out.write_all(&encoded);
    }
    let wrapped = wrap_lines(&encoded, wrap).map_err(into_io)?;
    out.write_all(&wrapped)?;
    out.write_all(b"\n")
}

/// Decode and write. Without `ignore_garbage`, line breaks are still
/// accepted and removed before decoding.
pub fn decode_to_writer(
    data: &[u8],
    encoding: Encoding,
    ignore_garbage: bool,
    out: &mut impl Write,
) -> io::Result<()> {
    let decoded = if ignore_garbage {
        decode(data, encoding, true)
    } else {
        // Report symbol offsets against the caller's bytes, line breaks included.
        decode(&strip_newlines(data), encoding, false).map_err(|e| match e {
            CodecError::InvalidSymbol {
                encoding,
                byte,
                position,
            } => CodecError::InvalidSymbol {
                encoding,
                byte,
                position: unstripped_offset(data, position),
            },
            other => other,
        })
    }
    .map_err(into_io)?;
    out.write_all(&decoded)
}

/// Carry a codec error through an `io::Result`; recover it with
/// `io::Error::get_ref` + `downcast_ref::<CodecError>()`.
fn into_io(e: CodecError) -> io::Error {
    let kind = match e {
        CodecError::AllocationFailure { .. } => io::ErrorKind::OutOfMemory,
        _ => io::ErrorKind::InvalidData,
    };
    io::Error::new(kind, e)
}
