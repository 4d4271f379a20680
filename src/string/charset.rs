//! Character sets of restricted strings.
//!
//! This is a private module. Its public items are re-exported by the parent.

use std::borrow::Cow;
use crate::decode::ContentError;


//------------ CharSet -------------------------------------------------------

/// The character set of a restricted character string type.
///
/// The trait converts the content octets of a string into the octets that
/// are shown. For most string types, this is the content itself. Strings
/// with a wider encoding are converted into UTF-8.
pub trait CharSet {
    /// Converts the content octets of a string into the octets to show.
    fn decode(content: &[u8]) -> Result<Cow<'_, [u8]>, ContentError>;
}


//------------ Verbatim ------------------------------------------------------

/// Content that is shown as is.
///
/// This is used for all single-octet string types. The content is not
/// checked at all.
pub struct Verbatim;

impl CharSet for Verbatim {
    fn decode(content: &[u8]) -> Result<Cow<'_, [u8]>, ContentError> {
        Ok(Cow::Borrowed(content))
    }
}


//------------ Bmp -----------------------------------------------------------

/// The character set of a BMPString.
///
/// The content is UTF-16 in big-endian byte order. Surrogate pairs are
/// combined. A byte order mark is not interpreted and passed on as a
/// character.
pub struct Bmp;

impl CharSet for Bmp {
    fn decode(content: &[u8]) -> Result<Cow<'_, [u8]>, ContentError> {
        if content.len() % 2 != 0 {
            return Err(ContentError::charset(
                "UTF-16 content has an odd number of octets"
            ))
        }
        let units = content.chunks_exact(2).map(|chunk| {
            u16::from_be_bytes([chunk[0], chunk[1]])
        });
        let mut res = String::with_capacity(content.len());
        for ch in char::decode_utf16(units) {
            let ch = ch.map_err(|err| {
                ContentError::charset(format!(
                    "unpaired surrogate {:#06x} in UTF-16 content",
                    err.unpaired_surrogate()
                ))
            })?;
            res.push(ch);
        }
        Ok(Cow::Owned(res.into_bytes()))
    }
}


//------------ Universal -----------------------------------------------------

/// The character set of a UniversalString.
///
/// The content is UTF-32 in big-endian byte order.
pub struct Universal;

impl CharSet for Universal {
    fn decode(content: &[u8]) -> Result<Cow<'_, [u8]>, ContentError> {
        if content.len() % 4 != 0 {
            return Err(ContentError::charset(
                "UTF-32 content length is not a multiple of four"
            ))
        }
        let mut res = String::with_capacity(content.len());
        for chunk in content.chunks_exact(4) {
            let value = u32::from_be_bytes(
                [chunk[0], chunk[1], chunk[2], chunk[3]]
            );
            let ch = char::from_u32(value).ok_or_else(|| {
                ContentError::charset(format!(
                    "invalid code point {:#x} in UTF-32 content", value
                ))
            })?;
            res.push(ch);
        }
        Ok(Cow::Owned(res.into_bytes()))
    }
}


//============ Tests =========================================================
