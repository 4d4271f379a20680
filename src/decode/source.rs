//! The data being decoded.
//!
//! This is a private module. Its public content is being re-exported by the
//! parent module.

use super::error::{DecodeError, Pos};


//------------ SliceSource ---------------------------------------------------

/// The not yet consumed remainder of a byte slice.
///
/// Besides the remaining octets, the source keeps track of its position
/// relative to the start of the top-level input so errors can point to
/// where things went wrong. The remainder only ever shrinks.
#[derive(Clone, Copy, Debug)]
pub struct SliceSource<'s> {
    data: &'s [u8],
    pos: usize,
}

impl<'s> SliceSource<'s> {
    /// Creates a new source starting at position zero.
    pub fn new(data: &'s [u8]) -> Self {
        Self::with_pos(data, 0.into())
    }

    /// Creates a new source for data that starts at the given position.
    ///
    /// This is used for the content of constructed values so that errors
    /// inside them still refer to the top-level input.
    pub fn with_pos(data: &'s [u8], pos: Pos) -> Self {
        Self { data, pos: pos.into() }
    }

    /// Returns the current position.
    pub fn pos(&self) -> Pos {
        self.pos.into()
    }

    /// Returns the remaining data.
    pub fn remaining(&self) -> &'s [u8] {
        self.data
    }

    /// Returns the number of remaining octets.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns whether all data has been consumed.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Takes a single octet from the source.
    ///
    /// If there aren’t any more octets available from the source, returns
    /// a truncation error.
    pub fn take_u8(&mut self) -> Result<u8, DecodeError> {
        let data = self.data;
        let (&first, tail) = data.split_first().ok_or_else(|| {
            DecodeError::truncated("unexpected end of data", self.pos())
        })?;
        self.data = tail;
        self.pos += 1;
        Ok(first)
    }

    /// Takes exactly `len` octets from the source.
    ///
    /// Returns `None` without consuming anything if there are fewer than
    /// `len` octets left.
    pub fn take_opt(&mut self, len: usize) -> Option<&'s [u8]> {
        if self.data.len() < len {
            return None
        }
        let (head, tail) = self.data.split_at(len);
        self.data = tail;
        self.pos += len;
        Some(head)
    }
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn take() {
        let mut src = SliceSource::new(b"\x01\x02\x03\x04");
        assert_eq!(src.take_u8().unwrap(), 1);
        assert_eq!(usize::from(src.pos()), 1);
        assert_eq!(src.take_opt(2), Some(b"\x02\x03".as_ref()));
        assert_eq!(src.take_opt(2), None);
        assert_eq!(src.len(), 1);
        assert_eq!(src.take_opt(1), Some(b"\x04".as_ref()));
        assert!(src.is_empty());
        assert!(src.take_u8().is_err());
        assert_eq!(usize::from(src.pos()), 4);
    }

    #[test]
    fn positions_are_absolute() {
        let mut src = SliceSource::with_pos(b"\x05", 10.into());
        assert_eq!(usize::from(src.pos()), 10);
        src.take_u8().unwrap();
        let err = src.take_u8().unwrap_err();
        assert_eq!(usize::from(err.pos()), 11);
    }
}
