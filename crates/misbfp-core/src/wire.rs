// crates/misbfp-core/src/wire.rs
//
// Big-endian integer fields, 1..=8 bytes, MSB first.

use crate::error::{FpError, Result};

const MAX_FIELD_BYTES: usize = 8;

/// Write the low `out.len()` bytes of `code` into `out`, most significant first.
///
/// Bits above the field are dropped, so a code one past the field's range wraps.
pub fn write_be(code: u64, out: &mut [u8]) -> Result<()> {
    validate_len(out.len())?;
    let full = code.to_be_bytes();
    out.copy_from_slice(&full[MAX_FIELD_BYTES - out.len()..]);
    Ok(())
}

/// Read `bytes` as an unsigned big-endian integer.
pub fn read_be(bytes: &[u8]) -> Result<u64> {
    validate_len(bytes.len())?;
    Ok(bytes.iter().fold(0u64, |acc, &b| (acc << 8) | b as u64))
}

#[inline]
fn validate_len(len: usize) -> Result<()> {
    if len == 0 || len > MAX_FIELD_BYTES {
        return Err(FpError::InvalidFieldWidth { width: len as i64 });
    }
    Ok(())
}
