//! DER encoded integers.
//!
//! This is a private module. Its public items are re-exported by the parent.


//------------ Integer -------------------------------------------------------

/// The content of an INTEGER or ENUMERATED value.
///
/// In DER, an INTEGER is encoded as a primitive value with the content
/// octets providing a variable-length, big-endian, two‘s complement byte
/// sequence of that integer. Thus, the most-significant bit of the first
/// octet serves as the sign bit.
///
/// For display purposes, we only convert small non-negative values into a
/// native integer. Everything else is shown as its content octets.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Integer<'a>(&'a [u8]);

impl<'a> Integer<'a> {
    /// The largest number of content octets we convert.
    ///
    /// Seven octets of a non-negative value always fit into an `i64`.
    pub const MAX_DISPLAY_LEN: usize = 7;

    /// Creates a new integer from its content octets.
    pub fn new(content: &'a [u8]) -> Self {
        Integer(content)
    }

    /// Returns the content octets.
    pub fn as_slice(self) -> &'a [u8] {
        self.0
    }

    /// Returns whether the sign bit is set.
    ///
    /// Empty content is considered to not be negative.
    pub fn is_negative(self) -> bool {
        self.0.first().map_or(false, |first| first & 0x80 != 0)
    }

    /// Returns the value as an `i64` if it is suitable for display.
    ///
    /// This is the case if there are between one and
    /// [`MAX_DISPLAY_LEN`][Self::MAX_DISPLAY_LEN] content octets and the
    /// value is not negative. Negative values and long values are never
    /// converted, even if they would fit.
    pub fn display_value(self) -> Option<i64> {
        if self.0.is_empty()
            || self.0.len() > Self::MAX_DISPLAY_LEN
            || self.is_negative()
        {
            return None
        }
        Some(self.0.iter().fold(0i64, |res, &octet| {
            (res << 8) | i64::from(octet)
        }))
    }
}


//============ Tests =========================================================
