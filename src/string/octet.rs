//! Showing octet sequences.
//!
//! This is a private module. Its public items are re-exported by the parent.

use std::fmt;


//------------ HexOctets -----------------------------------------------------

/// Displays a sequence of octets as hex digits.
///
/// The output starts with a single colon followed by two upper case hex
/// digits per octet without any separators. An empty sequence is shown as
/// just the colon.
#[derive(Clone, Copy, Debug)]
pub struct HexOctets<'a>(pub &'a [u8]);

impl<'a> fmt::Display for HexOctets<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(":")?;
        for octet in self.0 {
            write!(f, "{:02X}", octet)?;
        }
        Ok(())
    }
}


//------------ Escaped -------------------------------------------------------

/// An iterator over the escaped pieces of string content.
///
/// Line feeds and carriage returns are replaced by the two-character
/// sequences `\n` and `\r`. All other octets are returned verbatim in runs
/// as long as possible. No attempt is made to check the content for any
/// character set.
#[derive(Clone, Debug)]
pub struct Escaped<'a> {
    slice: &'a [u8],
}

impl<'a> Escaped<'a> {
    pub fn new(slice: &'a [u8]) -> Self {
        Escaped { slice }
    }
}

impl<'a> Iterator for Escaped<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let slice = self.slice;
        let (&first, tail) = slice.split_first()?;
        match first {
            b'\n' => {
                self.slice = tail;
                Some(b"\\n")
            }
            b'\r' => {
                self.slice = tail;
                Some(b"\\r")
            }
            _ => {
                let end = slice.iter().position(|&ch| {
                    ch == b'\n' || ch == b'\r'
                }).unwrap_or(slice.len());
                let (head, tail) = slice.split_at(end);
                self.slice = tail;
                Some(head)
            }
        }
    }
}


//============ Tests =========================================================
