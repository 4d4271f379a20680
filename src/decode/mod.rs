//! Decoding DER data into text.
//!
//! The central type of this module is the [`Decoder`]. It walks over a
//! sequence of DER encoded values and prints a line for each of them to
//! an [`Indenter`]. The content of constructed values is printed one level
//! deeper. How a decoder behaves is defined by its [`Options`] and two
//! collaborators: a [`Hint`] that may add a comment to content the decoder
//! can only show as hex octets, and an [`OidNames`] that provides names
//! for object identifiers.
//!
//! If you only want the default behaviour, the [`parse`] function is all
//! you need.
//!
//! Decoding stops at the first error. Whatever has been printed up to
//! that point stays in the output.

pub use self::content::Kind;
pub use self::element::Element;
pub use self::error::{ContentError, DecodeError, ErrorKind, Pos};
pub use self::source::SliceSource;

use crate::hint::{DefaultHint, Hint};
use crate::names::{KnownOids, OidNames};
use crate::output::Indenter;

mod content;
mod element;
mod error;
mod source;

mod test;


//------------ parse ---------------------------------------------------------

/// Decodes `data` using the default decoder.
///
/// This prints all values contained in `data` to `out`.
pub fn parse(out: &mut Indenter, data: &[u8]) -> Result<(), DecodeError> {
    Decoder::default().parse(out, data)
}


//------------ Options -------------------------------------------------------

/// The options for decoding.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Options {
    /// The maximum nesting level of constructed values.
    max_depth: Option<usize>,

    /// Whether the hint is asked about opaque content.
    hints: bool,

    /// Whether names of object identifiers are printed.
    oid_names: bool,
}

impl Options {
    /// The default maximum nesting level.
    pub const DEFAULT_MAX_DEPTH: usize = 128;

    /// Sets the maximum nesting level of constructed values.
    ///
    /// Values at the top level are at level zero. If the content of a
    /// constructed value at the maximum level contains anything, decoding
    /// fails. If the limit is `None`, nesting is unlimited and recursion
    /// depth is bounded only by the input.
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets whether the hint is asked about opaque content.
    pub fn with_hints(mut self, hints: bool) -> Self {
        self.hints = hints;
        self
    }

    /// Sets whether names of object identifiers are printed.
    pub fn with_oid_names(mut self, oid_names: bool) -> Self {
        self.oid_names = oid_names;
        self
    }

    /// Returns the maximum nesting level.
    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Returns whether the hint is asked about opaque content.
    pub fn hints(&self) -> bool {
        self.hints
    }

    /// Returns whether names of object identifiers are printed.
    pub fn oid_names(&self) -> bool {
        self.oid_names
    }
}

impl Default for Options {
    fn default() -> Self {
        Options {
            max_depth: Some(Self::DEFAULT_MAX_DEPTH),
            hints: true,
            oid_names: true,
        }
    }
}


//------------ Decoder -------------------------------------------------------

/// A decoder turning DER encoded data into text.
///
/// The decoder doesn’t keep any state between runs. The same decoder can
/// be used for any number of inputs and the output only ever depends on
/// the input octets.
#[derive(Clone, Copy)]
pub struct Decoder<'a> {
    options: Options,
    hint: &'a dyn Hint,
    names: &'a dyn OidNames,
}

impl Decoder<'static> {
    /// Creates a decoder with the given options and default collaborators.
    ///
    /// These are [`DefaultHint`] and [`KnownOids`].
    pub fn new(options: Options) -> Self {
        Decoder { options, hint: &DefaultHint, names: &KnownOids }
    }
}

impl<'a> Decoder<'a> {
    /// Creates a decoder with the given options and collaborators.
    pub fn with_collaborators(
        options: Options, hint: &'a dyn Hint, names: &'a dyn OidNames
    ) -> Self {
        Decoder { options, hint, names }
    }

    /// Returns the options of the decoder.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Returns the hint.
    pub fn hint(&self) -> &'a dyn Hint {
        self.hint
    }

    /// Returns the OID names.
    pub fn names(&self) -> &'a dyn OidNames {
        self.names
    }

    /// Decodes all values in `data`.
    ///
    /// The values are printed at the level of `out`.
    pub fn parse(
        &self, out: &mut Indenter, data: &[u8]
    ) -> Result<(), DecodeError> {
        self.parse_level(out, SliceSource::new(data), 0)
    }

    /// Decodes all values remaining in `source` at nesting level `level`.
    pub(crate) fn parse_level(
        &self, out: &mut Indenter, mut source: SliceSource, level: usize
    ) -> Result<(), DecodeError> {
        if !source.is_empty() {
            if let Some(limit) = self.options.max_depth {
                if level > limit {
                    return Err(DecodeError::too_deep(limit, source.pos()))
                }
            }
        }
        while !source.is_empty() {
            let element = Element::take_from(&mut source, out)?;
            Kind::from_ident(element.ident()).render(
                self, out, &element, level
            )?;
        }
        Ok(())
    }
}

impl Default for Decoder<'static> {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

impl<'a> std::fmt::Debug for Decoder<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("Decoder").field("options", &self.options).finish()
    }
}
