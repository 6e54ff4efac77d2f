//! Nibble encoding for 7-bit SysEx transport
//!
//! Each byte becomes two data bytes: low nibble first, then high nibble.
//! Both are below 0x10, so they are always valid MIDI data bytes.

/// Split every byte into a (low, high) nibble pair
pub fn nibblize(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(bytes.len() * 2);
    nibblize_into(bytes, &mut out);
    out
}

/// Append the nibblized form of `bytes` to `out`
pub fn nibblize_into(bytes: &[u8], out: &mut Vec<u8>) {
    out.reserve(bytes.len() * 2);
    for &b in bytes {
        out.push(b & 0x0F);
        out.push((b >> 4) & 0x0F);
    }
}
