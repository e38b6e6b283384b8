use super::error::{CodecError, alloc_output};

/// Insert a line break after every `width` symbols. Lines are joined by a
/// single `\n` with none after the last line; `width == 0` returns the text
/// unchanged.
pub fn wrap_lines(encoded: &[u8], width: usize) -> Result<Vec<u8>, CodecError> {
    if width == 0 || encoded.len() <= width {
        let mut out = alloc_output(encoded.len())?;
        out.extend_from_slice(encoded);
        return Ok(out);
    }

    let breaks = (encoded.len() - 1) / width;
    let mut out = alloc_output(encoded.len() + breaks)?;

    let mut rp = 0;
    while rp + width < encoded.len() {
        out.extend_from_slice(&encoded[rp..rp + width]);
        out.push(b'\n');
        rp += width;
    }
    out.extend_from_slice(&encoded[rp..]);

    Ok(out)
}
