/// Sentinel for the 7-bit alphabets: every valid value is below 0x80.
pub(crate) const INVALID_7BIT: u8 = 0x80;

/// Sentinel for Z85, whose alphabet reaches into the high printable range.
pub(crate) const INVALID_FULL: u8 = 0xFF;

/// Forward alphabet (value -> symbol) plus its 256-entry inverse table.
///
/// Tables are built by a `const fn`, so each one exists exactly once as
/// read-only static data and is handed out by reference.
pub struct AlphabetTable {
    symbols: &'static [u8],
    decode: [u8; 256],
    invalid: u8,
}

impl AlphabetTable {
    /// Build the table for `symbols`. With `fold_case`, the lowercase form of
    /// every uppercase letter in the alphabet decodes to the same value.
    pub const fn new(symbols: &'static [u8], invalid: u8, fold_case: bool) -> Self {
        let mut decode = [invalid; 256];
        let mut i = 0;
        while i < symbols.len() {
            let sym = symbols[i];
            decode[sym as usize] = i as u8;
            if fold_case && sym.is_ascii_uppercase() {
                decode[sym.to_ascii_lowercase() as usize] = i as u8;
            }
            i += 1;
        }
        Self {
            symbols,
            decode,
            invalid,
        }
    }

    /// Number of distinct symbol values.
    #[inline]
    pub fn radix(&self) -> usize {
        self.symbols.len()
    }

    /// The ordered output alphabet.
    #[inline]
    pub fn symbols(&self) -> &'static [u8] {
        self.symbols
    }

    /// Symbol for a digit value. `value` must be below `radix()`.
    #[inline]
    pub fn symbol(&self, value: u8) -> u8 {
        self.symbols[value as usize]
    }

    /// Digit value for an input byte, or `None` if the byte is not in the alphabet.
    #[inline]
    pub fn value(&self, byte: u8) -> Option<u8> {
        let v = self.decode_table()[byte as usize];
        if v == self.invalid_marker() { None } else { Some(v) }
    }

    #[inline]
    pub fn contains(&self, byte: u8) -> bool {
        self.decode_table()[byte as usize] != self.invalid_marker()
    }

    /// Raw inverse table, sentinel entries included.
    #[inline]
    pub(crate) fn decode_table(&self) -> &[u8; 256] {
        &self.decode
    }

    #[inline]
    pub(crate) fn invalid_marker(&self) -> u8 {
        self.invalid
    }
}

pub static BASE64: AlphabetTable = AlphabetTable::new(
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/",
    INVALID_7BIT,
    false,
);

pub static BASE64URL: AlphabetTable = AlphabetTable::new(
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_",
    INVALID_7BIT,
    false,
);

/// No `0`, `O`, `I` or `l`: visually ambiguous glyphs are left out.
pub static BASE58: AlphabetTable = AlphabetTable::new(
    b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz",
    INVALID_7BIT,
    false,
);

pub static BASE32: AlphabetTable =
    AlphabetTable::new(b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567", INVALID_7BIT, true);

pub static BASE32HEX: AlphabetTable =
    AlphabetTable::new(b"0123456789ABCDEFGHIJKLMNOPQRSTUV", INVALID_7BIT, true);

pub static BASE16: AlphabetTable = AlphabetTable::new(b"0123456789ABCDEF", INVALID_7BIT, true);

/// Shared by both bit orders; the order lives in the group layout, not here.
pub static BASE2: AlphabetTable = AlphabetTable::new(b"01", INVALID_7BIT, false);

pub static Z85: AlphabetTable = AlphabetTable::new(
    b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ.-:+=^!/*?&<>()[]{}@%$#",
    INVALID_FULL,
    false,
);
