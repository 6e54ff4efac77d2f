//! Variable-length quantities
//!
//! Big-endian base-128: seven payload bits per byte, the high bit set on
//! every byte except the last. At most four bytes, so the largest encodable
//! value is 0x0FFFFFFF.

use crate::error::{Result, SmfError};

/// Largest value a 4-byte VLQ can hold
pub const VLQ_MAX: u32 = 0x0FFF_FFFF;

/// Encode `value` as a standalone VLQ
pub fn encode_vlq(value: u32) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(4);
    write_vlq(&mut out, value)?;
    Ok(out)
}

/// Append the VLQ encoding of `value` to `out`
pub fn write_vlq(out: &mut Vec<u8>, value: u32) -> Result<()> {
    if value > VLQ_MAX {
        return Err(SmfError::VlqOutOfRange(value as u64));
    }

    // Groups are produced least-significant first, then emitted in reverse
    let mut groups = [0u8; 4];
    let mut count = 0;
    let mut rest = value;
    loop {
        groups[count] = (rest & 0x7F) as u8;
        count += 1;
        rest >>= 7;
        if rest == 0 {
            break;
        }
    }

    for (i, group) in groups[..count].iter().enumerate().rev() {
        let continuation = if i > 0 { 0x80 } else { 0x00 };
        out.push(group | continuation);
    }

    Ok(())
}

/// Length-prefix helper for meta-event payloads
pub(crate) fn write_vlq_len(out: &mut Vec<u8>, len: usize) -> Result<()> {
    let len = u32::try_from(len).map_err(|_| SmfError::VlqOutOfRange(len as u64))?;
    write_vlq(out, len)
}
