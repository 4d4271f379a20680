//! Error Handling.
//!
//! This is a private module. Its public content is being re-exported by the
//! parent module.

use std::{error, fmt, ops};
use std::borrow::Cow;


//------------ DecodeError ---------------------------------------------------

/// An error happened while decoding data.
///
/// All errors are fatal to the decoding run that produced them. Any text
/// already written to the output at that point is left in place so it can
/// serve as a trail leading up to the problem.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DecodeError {
    /// What kind of problem was encountered.
    kind: ErrorKind,

    /// A human readable description of the problem.
    msg: Cow<'static, str>,

    /// The position in the input where the offending field starts.
    pos: Pos,
}

impl DecodeError {
    /// Creates a new error.
    pub fn new(
        kind: ErrorKind, msg: impl Into<Cow<'static, str>>, pos: Pos
    ) -> Self {
        let res = Self { kind, msg: msg.into(), pos };
        log::debug!("decode error: {}", res);
        res
    }

    /// Creates an error for data that ended too early.
    pub fn truncated(msg: impl Into<Cow<'static, str>>, pos: Pos) -> Self {
        Self::new(ErrorKind::Truncated, msg, pos)
    }

    /// Creates an error for a correct encoding we don’t support.
    pub fn unsupported(msg: impl Into<Cow<'static, str>>, pos: Pos) -> Self {
        Self::new(ErrorKind::Unsupported, msg, pos)
    }

    /// Creates an error for content that doesn’t follow the rules.
    pub fn malformed(msg: impl Into<Cow<'static, str>>, pos: Pos) -> Self {
        Self::new(ErrorKind::Malformed, msg, pos)
    }

    /// Creates an error for string content in the wrong character set.
    pub fn charset(msg: impl Into<Cow<'static, str>>, pos: Pos) -> Self {
        Self::new(ErrorKind::Charset, msg, pos)
    }

    /// Creates an error for values nested deeper than permitted.
    pub fn too_deep(limit: usize, pos: Pos) -> Self {
        Self::new(
            ErrorKind::TooDeep,
            format!("nesting exceeds the limit of {} levels", limit),
            pos
        )
    }

    /// Returns the kind of error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the position where the offending field starts.
    pub fn pos(&self) -> Pos {
        self.pos
    }

    /// Returns the description of the error.
    pub fn message(&self) -> &str {
        self.msg.as_ref()
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} (at offset {})", self.msg, self.pos)
    }
}

impl error::Error for DecodeError { }


//------------ ContentError -------------------------------------------------

/// An error in the content of a value.
///
/// This is a decoding error that doesn’t know yet where it happened. It
/// is used by the parts that only ever see the content octets of a value.
/// It is turned into a [`DecodeError`] via [`at`][Self::at] by whoever
/// knows the position.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContentError {
    kind: ErrorKind,
    msg: Cow<'static, str>,
}

impl ContentError {
    /// Creates a content error for malformed content.
    pub fn malformed(msg: impl Into<Cow<'static, str>>) -> Self {
        ContentError { kind: ErrorKind::Malformed, msg: msg.into() }
    }

    /// Creates a content error for a failed character set conversion.
    pub fn charset(msg: impl Into<Cow<'static, str>>) -> Self {
        ContentError { kind: ErrorKind::Charset, msg: msg.into() }
    }

    /// Returns the kind of error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Converts the content error into a decode error at `pos`.
    pub fn at(self, pos: Pos) -> DecodeError {
        DecodeError::new(self.kind, self.msg, pos)
    }
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.msg)
    }
}

impl error::Error for ContentError { }


//------------ ErrorKind -----------------------------------------------------

/// The kind of a decoding error.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorKind {
    /// Fewer octets were available than a field requires.
    Truncated,

    /// The data uses an encoding we don’t support.
    ///
    /// This currently only is the high tag number form.
    Unsupported,

    /// A field doesn’t follow the encoding rules.
    Malformed,

    /// A string could not be converted from its character set.
    Charset,

    /// Values are nested deeper than the configured limit.
    TooDeep,
}


//------------ Pos -----------------------------------------------------------

/// The logical position within the decoded input.
///
/// Values of this type can only be used for diagnostics.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Pos(usize);

impl From<usize> for Pos {
    fn from(pos: usize) -> Pos {
        Pos(pos)
    }
}

impl From<Pos> for usize {
    fn from(pos: Pos) -> usize {
        pos.0
    }
}

impl ops::Add<usize> for Pos {
    type Output = Self;

    fn add(self, rhs: usize) -> Self {
        Pos(self.0 + rhs)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.fmt(f)
    }
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display() {
        let err = DecodeError::truncated("unexpected end of data", 12.into());
        assert_eq!(err.kind(), ErrorKind::Truncated);
        assert_eq!(usize::from(err.pos()), 12);
        assert_eq!(err.to_string(), "unexpected end of data (at offset 12)");

        let err = DecodeError::too_deep(4, Pos::default() + 3);
        assert_eq!(err.kind(), ErrorKind::TooDeep);
        assert_eq!(err.message(), "nesting exceeds the limit of 4 levels");
    }

    #[test]
    fn content_error_at() {
        let err = ContentError::charset("invalid UTF-16").at(7.into());
        assert_eq!(err.kind(), ErrorKind::Charset);
        assert_eq!(err.to_string(), "invalid UTF-16 (at offset 7)");
    }
}
