use super::core::Encoding;

/// Keep only the bytes `encoding` can decode: alphabet symbols plus its pad
/// character. Membership comes from the same table the decoder uses.
pub fn strip_garbage(input: &[u8], encoding: Encoding) -> Vec<u8> {
    let alphabet = encoding.alphabet();
    let pad = encoding.pad();
    input
        .iter()
        .copied()
        .filter(|&b| alphabet.contains(b) || pad == Some(b))
        .collect()
}

/// Remove line breaks (`\n`, `\r`) left by wrapped output. Borrows when there are none.
pub fn strip_newlines(input: &[u8]) -> std::borrow::Cow<'_, [u8]> {
    use std::borrow::Cow;

    if memchr::memchr2(b'\n', b'\r', input).is_none() {
        return Cow::Borrowed(input);
    }

    let mut clean = Vec::with_capacity(input.len());
    let mut last = 0;
    for pos in memchr::memchr2_iter(b'\n', b'\r', input) {
        if pos > last {
            clean.extend_from_slice(&input[last..pos]);
        }
        last = pos + 1;
    }
    if last < input.len() {
        clean.extend_from_slice(&input[last..]);
    }
    Cow::Owned(clean)
}

/// Offset in `input` of the byte found at `pos` in `strip_newlines(input)`.
pub(crate) fn unstripped_offset(input: &[u8], pos: usize) -> usize {
    let mut offset = pos;
    for nl in memchr::memchr2_iter(b'\n', b'\r', input) {
        if nl > offset {
            break;
        }
        offset += 1;
    }
    offset
}
