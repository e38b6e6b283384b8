mod alphabet;
mod base58;
mod core;
mod error;
mod fixed;
mod garbage;
mod wrap;
mod z85;


pub use self::alphabet::AlphabetTable;
pub use self::core::{
    DEFAULT_WRAP, Encoding, Scheme, decode, decode_to_writer, encode, encode_portable,
    encode_to_writer,
};
pub use self::error::{CodecError, Direction, UnknownEncoding};
pub use self::fixed::{BitOrder, GroupLayout};
pub use self::garbage::{strip_garbage, strip_newlines};
pub use self::wrap::wrap_lines;
