//! Rendering string and octet content.
//!
//! This module provides the pieces used to turn the content octets of the
//! various string types into text.
//!
//! There are two types of strings for binary data. Octet strings and all
//! other types we can’t interpret are shown through [`HexOctets`]. A
//! [`BitString`] additionally carries the number of unused bits in its last
//! octet.
//!
//! Restricted character strings are shown as text. Most of them are passed
//! through verbatim. The two that use a wider encoding, BMPString and
//! UniversalString, are converted to UTF-8 first through a [`CharSet`]. In
//! either case, line breaks are escaped via [`Escaped`] so a value always
//! stays on a single line.
//!
//! Finally, [`UtcTime`] derives a human readable comment from the content
//! of a UTCTime value.

//--- Re-exports

pub use self::bit::BitString;
pub use self::charset::{Bmp, CharSet, Universal, Verbatim};
pub use self::octet::{Escaped, HexOctets};
pub use self::time::UtcTime;

//--- Private modules

mod bit;
mod charset;
mod octet;
mod time;
