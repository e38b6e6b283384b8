use thiserror::Error;

use super::core::Encoding;

/// Failure of a single encode or decode call. No partial output accompanies it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Input length is not a multiple of the scheme's group width.
    #[error("invalid input (length must be a multiple of {multiple} for {encoding} {direction})")]
    InvalidLength {
        encoding: Encoding,
        direction: Direction,
        len: usize,
        multiple: usize,
    },

    /// A decode-path byte is neither an alphabet symbol nor accepted padding.
    #[error("invalid input (invalid character {} at offset {position})", printable(.byte))]
    InvalidSymbol {
        encoding: Encoding,
        byte: u8,
        position: usize,
    },

    /// The output buffer could not be sized or reserved.
    #[error("memory exhausted (cannot allocate {bytes} bytes)")]
    AllocationFailure { bytes: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encoding,
    Decoding,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Direction::Encoding => "encoding",
            Direction::Decoding => "decoding",
        })
    }
}

/// Encoding identifier that names none of the supported schemes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown encoding '{0}'")]
pub struct UnknownEncoding(pub String);

/// Quote a byte for a diagnostic: printable ASCII as-is, anything else as hex.
struct Printable(u8);

fn printable(byte: &u8) -> Printable {
    Printable(*byte)
}

impl std::fmt::Display for Printable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_ascii_graphic() {
            write!(f, "'{}'", self.0 as char)
        } else {
            write!(f, "0x{:02x}", self.0)
        }
    }
}

/// Reserve an output buffer of exactly `len` bytes, reporting failure as a typed error.
pub(crate) fn alloc_output(len: usize) -> Result<Vec<u8>, CodecError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| CodecError::AllocationFailure { bytes: len })?;
    Ok(buf)
}
