//! The length octets.
//!
//! This is a private module. The [`Length`] defined herein is re-exported
//! by the parent.

use crate::decode::{DecodeError, SliceSource};


//------------ Length -------------------------------------------------------

/// The length octets of an encoded value.
///
/// # Encoding
///
/// The length can be encoded in one of two basic ways. Which one is used is
/// determined by the most significant bit of the first octet. If it is not
/// set, the length octets is one octet long and the remaining bits of this
/// first octet provide the length. Thus, if the first octet is less than
/// 128, it provides the length already.
///
/// If the most significant bit is set, the remaining bits of the first
/// octet specify the number of octets that follow to encode the actual
/// length. Those following octets give the big-endian encoding of the
/// length of the content octets.
///
/// # Limitations
///
/// The indefinite form of BER, signalled by a first octet of 0x80, is not
/// detected. It announces zero following octets and thus simply decodes
/// as a length of zero. DER never uses it.
///
/// Neither do we insist on the minimal encoding required by DER. Any
/// length that fits into a `usize` is accepted.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Length(usize);

impl Length {
    /// Creates a new length value.
    pub fn new(len: usize) -> Self {
        Length(len)
    }

    /// Returns the length as a `usize`.
    pub fn to_usize(self) -> usize {
        self.0
    }

    /// Parses a length from the beginning of a source.
    ///
    /// Upon success, the source has been advanced past the length octets.
    pub fn take_from(source: &mut SliceSource) -> Result<Self, DecodeError> {
        let pos = source.pos();
        let count = match FirstOctet::from_u8(source.take_u8()?) {
            FirstOctet::Single(res) => return Ok(res),
            FirstOctet::Multi(count) => count,
        };
        let octets = source.take_opt(count).ok_or_else(|| {
            DecodeError::truncated(
                format!(
                    "can't satisfy request to read {} bytes to get length, \
                     have {}",
                    count, source.len()
                ),
                pos
            )
        })?;
        let mut res = 0usize;
        for &octet in octets {
            res = res.checked_mul(256).and_then(|res| {
                res.checked_add(usize::from(octet))
            }).ok_or_else(|| {
                DecodeError::malformed("excessive length", pos)
            })?;
        }
        Ok(Length(res))
    }

    /// Parses a length from the beginning of a slice.
    ///
    /// Returns the length and the remainder of the slice following the
    /// length octets.
    pub fn split_from(data: &[u8]) -> Result<(Self, &[u8]), DecodeError> {
        let mut source = SliceSource::new(data);
        let res = Self::take_from(&mut source)?;
        Ok((res, source.remaining()))
    }
}

impl From<Length> for usize {
    fn from(len: Length) -> usize {
        len.0
    }
}


//------------ FirstOctet ---------------------------------------------------

/// The first octet of the encoded length.
enum FirstOctet {
    /// The first octet is a length in and of itself.
    Single(Length),

    /// The first octet indicates the number of octets to follow.
    Multi(usize),
}

impl FirstOctet {
    /// Look at the first octet and check what it means.
    fn from_u8(octet: u8) -> Self {
        match octet {
            // Bit 7 clear: single.
            n if (n & 0x80) == 0 => Self::Single(Length(usize::from(n))),

            // anything else: clear left bit, number of octets.
            n => Self::Multi(usize::from(n & 0x7F))
        }
    }
}


//============ Tests =========================================================
