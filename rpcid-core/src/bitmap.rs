//! OS capability bitmap
//!
//! One bit per registry capability: bit `k` lives at bit `k % 8` of byte
//! `k / 8`.

use crate::format::constants::bitmap::*;
use crate::{Result, RpcidError};

/// Set one bit per index in a zeroed bitmap
///
/// Fails without a usable result if any index falls past byte 119.
pub fn set_os_syscap_bitmap(out: &mut [u8; OS_SYSCAP_BYTES], indices: &[u16]) -> Result<()> {
    for &index in indices {
        let sector = index as usize / 8;
        let pos = index % 8;
        let byte = out
            .get_mut(sector)
            .ok_or(RpcidError::BitIndexOutOfRange { index })?;
        *byte |= 1 << pos;
    }
    Ok(())
}

/// Fixed 960-bit set of registry capabilities
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OsCapabilityBitmap {
    bits: [u8; OS_SYSCAP_BYTES],
}

impl OsCapabilityBitmap {
    /// Create an empty bitmap
    pub const fn new() -> Self {
        Self {
            bits: [0; OS_SYSCAP_BYTES],
        }
    }

    /// Build a bitmap from registry bit indices
    pub fn from_indices(indices: &[u16]) -> Result<Self> {
        let mut bitmap = Self::new();
        set_os_syscap_bitmap(&mut bitmap.bits, indices)?;
        Ok(bitmap)
    }

    /// Whether bit `index` is set
    pub fn contains(&self, index: u16) -> bool {
        self.bits
            .get(index as usize / 8)
            .is_some_and(|byte| byte & (1 << (index % 8)) != 0)
    }

    /// Number of set bits
    pub fn count(&self) -> usize {
        self.bits.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Raw bitmap bytes
    pub fn bytes(&self) -> &[u8; OS_SYSCAP_BYTES] {
        &self.bits
    }

    /// The bitmap reinterpreted as 32-bit words in host byte order
    pub fn words(&self) -> [u32; OS_SYSCAP_WORDS] {
        bytemuck::cast(self.bits)
    }
}

impl Default for OsCapabilityBitmap {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_bits() {
        let mut out = [0u8; OS_SYSCAP_BYTES];
        assert_eq!(set_os_syscap_bitmap(&mut out, &[0, 9, 959]), Ok(()));
        assert_eq!(out[0], 0b0000_0001);
        assert_eq!(out[1], 0b0000_0010);
        assert_eq!(out[119], 0b1000_0000);
        assert!(out[2..119].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_out_of_range() {
        let mut out = [0u8; OS_SYSCAP_BYTES];
        assert_eq!(
            set_os_syscap_bitmap(&mut out, &[3, 960]),
            Err(RpcidError::BitIndexOutOfRange { index: 960 })
        );
        assert_eq!(
            OsCapabilityBitmap::from_indices(&[u16::MAX]),
            Err(RpcidError::BitIndexOutOfRange { index: u16::MAX })
        );
    }

    #[test]
    fn test_bitmap_queries() {
        let bitmap = OsCapabilityBitmap::from_indices(&[5, 5, 38, 900]).unwrap();
        assert!(bitmap.contains(5));
        assert!(bitmap.contains(38));
        assert!(bitmap.contains(900));
        assert!(!bitmap.contains(6));
        assert!(!bitmap.contains(2000));
        assert_eq!(bitmap.count(), 3);
    }

    #[test]
    fn test_words_native_order() {
        let bitmap = OsCapabilityBitmap::from_indices(&[0, 8, 32]).unwrap();
        let words = bitmap.words();
        assert_eq!(words[0], u32::from_ne_bytes([0x01, 0x01, 0x00, 0x00]));
        assert_eq!(words[1], u32::from_ne_bytes([0x01, 0x00, 0x00, 0x00]));
        assert!(words[2..].iter().all(|&w| w == 0));
    }
}
