//! DER-encoded bit strings.
//!
//! This is a private module. Its public items are re-exported by the parent.

use crate::decode::ContentError;


//------------ BitString -----------------------------------------------------

/// The content of a bit string value.
///
/// Bit strings are a sequence of bits that does not need to contain a
/// multiple of eight bits.
///
/// # DER Encoding
///
/// Only the primitive encoding is allowed in DER. The first octet of the
/// content contains the number of unused bits in the last octet and the
/// following octets contain the bits with the first bit in the most
/// significant bit of the octet. The number of unused bits must be between
/// 0 and 7.
///
/// We don’t check that the unused bits are zero or that an empty bit
/// string has no unused bits. Both are shown as they are.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BitString<'a> {
    /// The number of unused bits in the last byte.
    unused: u8,

    /// The bytes of the bit string.
    bits: &'a [u8],
}

impl<'a> BitString<'a> {
    /// Parses the content octets of a bit string value.
    pub fn from_content(content: &'a [u8]) -> Result<Self, ContentError> {
        let (&unused, bits) = content.split_first().ok_or_else(|| {
            ContentError::malformed("bit string had no padding byte")
        })?;
        if unused > 7 {
            return Err(ContentError::malformed(format!(
                "bit string padding has illegal value {}", unused
            )))
        }
        Ok(BitString { unused, bits })
    }

    /// Returns the number of unused bits in the last octet.
    pub fn unused(&self) -> u8 {
        self.unused
    }

    /// Returns the octets of the bit string.
    pub fn octets(&self) -> &'a [u8] {
        self.bits
    }

    /// Returns the number of bits in the bit string.
    pub fn bit_len(&self) -> usize {
        (self.bits.len() << 3).saturating_sub(usize::from(self.unused))
    }
}


//============ Tests =========================================================
