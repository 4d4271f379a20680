//! Showing data encoded in Distinguished Encoding Rules as text.
//!
//! This crate turns DER encoded data, such as X.509 certificates, keys, or
//! PKCS structures, into an indented, line-by-line text rendering. It does
//! so without any knowledge of the ASN.1 modules describing the data. Each
//! value is shown with its class, its form, and its content as far as the
//! content can be interpreted from the universal type alone. The content of
//! constructed values is shown one level deeper.
//!
//! For example, the DER encoding of a SEQUENCE containing the integers 1
//! and 2 is shown as
//!
//! ```text
//! UNIVERSAL COMPOSED SEQUENCE
//!  UNIVERSAL PRIMITIVE INTEGER 1
//!  UNIVERSAL PRIMITIVE INTEGER 2
//! ```
//!
//! # Using the Crate
//!
//! Text is collected in an [`Output`]. Decoding writes to it through an
//! [`Indenter`] which keeps track of the nesting level:
//!
//! ```
//! use der2text::Output;
//!
//! let mut out = Output::new();
//! der2text::parse(
//!     &mut out.indenter(), b"\x30\x06\x02\x01\x01\x02\x01\x02"
//! ).unwrap();
//! assert_eq!(
//!     out.as_slice(),
//!     b"UNIVERSAL COMPOSED SEQUENCE\n \
//!       UNIVERSAL PRIMITIVE INTEGER 1\n \
//!       UNIVERSAL PRIMITIVE INTEGER 2\n".as_ref()
//! );
//! ```
//!
//! The [`parse`] function uses the default settings. A [`Decoder`] allows
//! changing [`Options`] such as the maximum nesting level and replacing
//! the two collaborators: the [`Hint`] that comments on content that can
//! only be shown as hex octets and the [`OidNames`] that provide names for
//! object identifiers.
//!
//! Decoding stops at the first problem with a [`DecodeError`]. Whatever
//! has been written to the output up to that point remains there.
//!
//! # Limitations
//!
//! Only the low tag number form is supported. Tag numbers of 31 and above
//! result in an error. The indefinite length form of BER is not detected
//! and decodes as a length of zero.
//!
//! # Feature Flags
//!
//! * `pem`: enables the [`pem`] module for reading PEM armoured data.
//! * `cli`: enables the `der2text` command line tool. This is the default.

pub use self::decode::{parse, DecodeError, Decoder, ErrorKind, Options};
pub use self::hint::{DefaultHint, Hint, NoHint};
pub use self::ident::{Class, Ident, Tag};
pub use self::int::Integer;
pub use self::length::Length;
pub use self::names::{KnownOids, NoNames, OidNames};
pub use self::oid::Oid;
pub use self::output::{Indenter, Output};

pub mod decode;
pub mod oid;
pub mod string;

#[cfg(feature = "pem")]
pub mod pem;

mod hint;
mod ident;
mod int;
mod length;
mod names;
mod output;
