//! Host/network 16-bit conversions
//!
//! Every multi-byte field of the RPCID record is big-endian.

/// Convert a host-order value to network order
pub const fn hton16(value: u16) -> u16 {
    value.to_be()
}

/// Convert a network-order value to host order
pub const fn ntoh16(value: u16) -> u16 {
    u16::from_be(value)
}

/// Read a big-endian u16 at `offset`, or `None` if the slice is too short
pub fn read_u16_be(bytes: &[u8], offset: usize) -> Option<u16> {
    let end = offset.checked_add(2)?;
    let field = bytes.get(offset..end)?;
    Some(u16::from_be_bytes([field[0], field[1]]))
}

/// Write `value` big-endian at `offset`
///
/// Returns `false` without writing if the slice is too short.
pub fn write_u16_be(bytes: &mut [u8], offset: usize, value: u16) -> bool {
    match offset
        .checked_add(2)
        .and_then(|end| bytes.get_mut(offset..end))
    {
        Some(field) => {
            field.copy_from_slice(&value.to_be_bytes());
            true
        }
        None => false,
    }
}
