//! ASN.1 Object Identifiers.
//!
//! This module contains the [`Oid`] type that represents the decoded
//! components of an OBJECT IDENTIFIER or RELATIVE-OID value. The type is
//! also re-exported at the top-level.

use std::fmt;
use smallvec::SmallVec;
use crate::decode::ContentError;


//------------ Oid -----------------------------------------------------------

/// A decoded object identifer.
///
/// Object identifiers are globally unique, hierarchical values that are used
/// to identify objects or their type. When written, they are presented as a
/// sequence of integers separated by dots such as ‘1.3.6.1.5.5.7.1’. This
/// is what the `Display` implementation produces.
///
/// Relative object identifiers are only the tail end of such a sequence,
/// relative to some identifier known from context.
///
/// # Encoding
///
/// Each component is encoded as an unsigned integer in base 128, most
/// significant digit first. The most significant bit of each octet is set
/// if more octets follow. For an absolute identifier, the first two
/// components share the first octet which holds `40 * first + second`.
///
/// # Limitations
///
/// Components are kept as `u128`, which is enough for UUID based
/// identifiers below ‘2.25’. Longer components are rejected.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Oid {
    /// The components.
    arcs: SmallVec<[u128; 10]>,
}

impl Oid {
    /// Decodes the content octets of an OBJECT IDENTIFIER value.
    ///
    /// The first two components are derived from the first octet only. The
    /// remaining octets are decoded into one component each.
    pub fn from_content(content: &[u8]) -> Result<Self, ContentError> {
        let (&first, tail) = content.split_first().ok_or_else(|| {
            ContentError::malformed("OID doesn't have content")
        })?;
        let mut arcs = SmallVec::new();
        arcs.push(u128::from(first / 40));
        arcs.push(u128::from(first % 40));
        for arc in Iter::new(tail) {
            arcs.push(arc?);
        }
        Ok(Oid { arcs })
    }

    /// Decodes the content octets of a RELATIVE-OID value.
    pub fn from_relative_content(
        content: &[u8]
    ) -> Result<Self, ContentError> {
        if content.is_empty() {
            return Err(ContentError::malformed(
                "relative OID doesn't have content"
            ))
        }
        Ok(Oid { arcs: Iter::new(content).collect::<Result<_, _>>()? })
    }

    /// Returns the components.
    pub fn arcs(&self) -> &[u128] {
        self.arcs.as_ref()
    }
}


//--- Display

impl fmt::Display for Oid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut arcs = self.arcs.iter();
        if let Some(first) = arcs.next() {
            write!(f, "{}", first)?;
        }
        for arc in arcs {
            write!(f, ".{}", arc)?;
        }
        Ok(())
    }
}


//------------ Iter ----------------------------------------------------------

/// An iterator over the encoded components of an object identifier.
///
/// The iterator returns an error and stops if a component doesn’t fit
/// into a `u128` or if the last octet still has the continuation bit set.
pub struct Iter<'a> {
    /// The remainder of the encoded octets.
    slice: &'a [u8],
}

impl<'a> Iter<'a> {
    /// The largest value that can be shifted by seven bits without loss.
    const MAX_SHIFTABLE: u128 = u128::MAX >> 7;

    /// Creates a new iterator.
    pub fn new(slice: &'a [u8]) -> Self {
        Iter { slice }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = Result<u128, ContentError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.slice.is_empty() {
            return None
        }
        let slice = self.slice;
        let mut res = 0u128;
        for (i, &octet) in slice.iter().enumerate() {
            if res > Self::MAX_SHIFTABLE {
                self.slice = &[];
                return Some(Err(ContentError::malformed(
                    "OID component too large"
                )))
            }
            res = (res << 7) | u128::from(octet & 0x7F);
            if octet & 0x80 == 0 {
                self.slice = &slice[i + 1..];
                return Some(Ok(res))
            }
        }
        self.slice = &[];
        Some(Err(ContentError::malformed(
            "OID ends in the middle of a component"
        )))
    }
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use crate::decode::ErrorKind;
    use super::*;

    #[test]
    fn absolute() {
        assert_eq!(
            Oid::from_content(b"\x2a\x86\x48\x86\xf7\x0d")
                .unwrap().to_string(),
            "1.2.840.113549"
        );
        assert_eq!(
            Oid::from_content(b"\x2a\x86\x48\x86\xf7\x0d\x01\x01\x0b")
                .unwrap().to_string(),
            "1.2.840.113549.1.1.11"
        );
        assert_eq!(
            Oid::from_content(b"\x55\x04\x03").unwrap().to_string(),
            "2.5.4.3"
        );
        assert_eq!(Oid::from_content(b"\x00").unwrap().to_string(), "0.0");
        assert_eq!(
            Oid::from_content(b"\x2b\x06\x01\x05\x05\x07\x03\x01")
                .unwrap().arcs(),
            &[1, 3, 6, 1, 5, 5, 7, 3, 1]
        );
    }

    #[test]
    fn relative() {
        assert_eq!(
            Oid::from_relative_content(b"\x86\x48\x01").unwrap().to_string(),
            "840.1"
        );
        assert_eq!(
            Oid::from_relative_content(b"\x2a").unwrap().to_string(), "42"
        );
    }

    #[test]
    fn large_components() {
        // 2.25.329800735698586629295641978511506172918, a UUID based OID.
        let content = [
            0x69, 0x83, 0xf0, 0x9d, 0xa7, 0xeb, 0xcf, 0xde, 0xe0, 0xc7,
            0xa1, 0xa7, 0xb2, 0xc0, 0x94, 0x8c, 0xc8, 0xf9, 0xd7, 0x76
        ];
        let oid = Oid::from_content(&content).unwrap();
        assert_eq!(
            oid.to_string(),
            "2.25.329800735698586629295641978511506172918"
        );

        let mut content = vec![0x2a];
        content.extend_from_slice(&[0xff; 20]);
        content.push(0x7f);
        assert_eq!(
            Oid::from_content(&content).unwrap_err().kind(),
            ErrorKind::Malformed
        );
    }

    #[test]
    fn malformed() {
        assert!(Oid::from_content(b"").is_err());
        assert!(Oid::from_relative_content(b"").is_err());
        assert!(Oid::from_content(b"\x2a\x86").is_err());
        assert!(Oid::from_relative_content(b"\x01\x81").is_err());
    }
}
