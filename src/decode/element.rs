//! Reading the header of a single encoded value.
//!
//! This is a private module. Its public items are re-exported by the parent.

use crate::ident::Ident;
use crate::length::Length;
use crate::output::Indenter;
use super::error::{DecodeError, Pos};
use super::source::SliceSource;


//------------ Element -------------------------------------------------------

/// A single encoded value with its content split off.
///
/// An element is taken from the beginning of a source via
/// [`take_from`][Self::take_from]. The content is not interpreted at all
/// at this point.
#[derive(Clone, Copy, Debug)]
pub struct Element<'s> {
    /// The identifier octet.
    ident: Ident,

    /// The position of the identifier octet.
    start: Pos,

    /// The content octets.
    content: &'s [u8],

    /// The position of the first content octet.
    content_start: Pos,
}

impl<'s> Element<'s> {
    /// Takes the next element from the beginning of the source.
    ///
    /// As soon as the identifier octet has been read, the class and form
    /// labels are printed to `out`. They stay there even if the rest of
    /// the element turns out to be broken.
    ///
    /// Upon success, the source has been advanced past the element.
    pub fn take_from(
        source: &mut SliceSource<'s>, out: &mut Indenter
    ) -> Result<Self, DecodeError> {
        let start = source.pos();
        if source.len() < 2 {
            return Err(DecodeError::truncated(
                format!(
                    "short DER read, need at least two bytes, got {}",
                    source.len()
                ),
                start
            ))
        }
        let octet = source.take_u8()?;
        let ident = Ident::from_u8(octet).ok_or_else(|| {
            DecodeError::unsupported(
                "long form DER types not implemented", start
            )
        })?;
        out.print_str(ident.class().label());
        out.print_str(" ");
        out.print_str(ident.form_label());
        out.print_str(" ");

        let length = Length::take_from(source)?.to_usize();
        let content_start = source.pos();
        let content = source.take_opt(length).ok_or_else(|| {
            DecodeError::truncated(
                format!(
                    "short content, need {} bytes but have {}",
                    length, source.len()
                ),
                content_start
            )
        })?;
        log::trace!(
            "element {:#04x} with {} content octets at {}",
            octet, length, start
        );
        Ok(Element { ident, start, content, content_start })
    }

    /// Returns the identifier octet.
    pub fn ident(&self) -> Ident {
        self.ident
    }

    /// Returns the position where the element starts.
    pub fn start(&self) -> Pos {
        self.start
    }

    /// Returns the content octets.
    pub fn content(&self) -> &'s [u8] {
        self.content
    }

    /// Returns the position of the first content octet.
    pub fn content_start(&self) -> Pos {
        self.content_start
    }

    /// Returns a source for the content octets.
    ///
    /// Positions in this source are still relative to the top-level input.
    pub fn content_source(&self) -> SliceSource<'s> {
        SliceSource::with_pos(self.content, self.content_start)
    }
}


//============ Tests =========================================================
