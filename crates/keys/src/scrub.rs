//! Scrubbed-key detection.

use subtle::ConstantTimeEq;

/// Constant-time check that a byte slice is empty or all zero.
///
/// A scrubbed key reads back as zeros (or as an emptied buffer once zeroize
/// has cleared it); either form must refuse serialization.
pub(crate) fn ct_is_zero(b: &[u8]) -> bool {
    let mut acc = 0u8;
    for byte in b {
        acc |= byte;
    }
    acc.ct_eq(&0u8).into()
}
