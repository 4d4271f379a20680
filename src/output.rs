//! Collecting the rendered text.
//!
//! This is a private module. Its public items are re-exported by the parent.

use std::fmt;
use bytes::{Bytes, BytesMut};


//------------ Output --------------------------------------------------------

/// A buffer collecting rendered text.
///
/// The buffer is written to through an [`Indenter`] obtained via
/// [`indenter`][Self::indenter]. It collects octets rather than a string
/// since the content of string values is passed through verbatim and may
/// not be valid UTF-8.
#[derive(Clone, Debug)]
pub struct Output {
    /// The collected text.
    buf: BytesMut,

    /// The number of spaces to indent each level with.
    indent: usize,
}

impl Output {
    /// The default number of spaces per indentation level.
    pub const DEFAULT_INDENT: usize = 1;

    /// Creates a new, empty output using the default indentation.
    pub fn new() -> Self {
        Self::with_indent(Self::DEFAULT_INDENT)
    }

    /// Creates a new, empty output indenting each level by `indent` spaces.
    pub fn with_indent(indent: usize) -> Self {
        Output { buf: BytesMut::new(), indent }
    }

    /// Returns an indenter writing at the outermost level.
    pub fn indenter(&mut self) -> Indenter<'_> {
        Indenter { buf: &mut self.buf, indent: self.indent, depth: 0 }
    }

    /// Returns the text collected so far.
    pub fn as_slice(&self) -> &[u8] {
        self.buf.as_ref()
    }

    /// Returns the number of octets collected so far.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns whether nothing has been collected yet.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Removes and returns everything collected so far.
    pub fn split(&mut self) -> Bytes {
        self.buf.split().freeze()
    }

    /// Converts the output into the collected text.
    pub fn into_bytes(self) -> Bytes {
        self.buf.freeze()
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}


//------------ Indenter ------------------------------------------------------

/// A view of an [`Output`] at a certain nesting depth.
///
/// Whenever text starts a new line, the indenter first inserts the
/// indentation for its depth. A view for the next deeper level is
/// obtained via [`next_level`][Self::next_level]. It borrows the same
/// buffer, so the parent view can only be used again once the child has
/// been dropped.
#[derive(Debug)]
pub struct Indenter<'a> {
    buf: &'a mut BytesMut,
    indent: usize,
    depth: usize,
}

impl<'a> Indenter<'a> {
    /// Returns the nesting depth of this view.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Returns a view for the next deeper level.
    pub fn next_level(&mut self) -> Indenter<'_> {
        Indenter {
            buf: &mut *self.buf,
            indent: self.indent,
            depth: self.depth + 1,
        }
    }

    /// Appends octets.
    ///
    /// Line feeds in `data` end the current line. The text following them
    /// is indented again.
    pub fn print(&mut self, mut data: &[u8]) {
        while !data.is_empty() {
            if self.at_line_start() && data[0] != b'\n' {
                self.write_indent();
            }
            let end = match data.iter().position(|&ch| ch == b'\n') {
                Some(idx) => idx + 1,
                None => data.len()
            };
            let (line, tail) = data.split_at(end);
            self.buf.extend_from_slice(line);
            data = tail;
        }
    }

    /// Appends a string.
    pub fn print_str(&mut self, s: &str) {
        self.print(s.as_bytes())
    }

    /// Appends formatted text.
    pub fn printf(&mut self, args: fmt::Arguments) {
        // Writing into memory can’t fail.
        let _ = fmt::Write::write_fmt(self, args);
    }

    /// Appends a string and ends the line.
    pub fn println(&mut self, s: &str) {
        self.print_str(s);
        self.newline();
    }

    /// Ends the current line.
    pub fn newline(&mut self) {
        self.buf.extend_from_slice(b"\n")
    }

    fn at_line_start(&self) -> bool {
        self.buf.last().map_or(true, |&ch| ch == b'\n')
    }

    fn write_indent(&mut self) {
        let len = self.indent * self.depth;
        self.buf.extend(std::iter::repeat(b' ').take(len));
    }
}

impl<'a> fmt::Write for Indenter<'a> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.print_str(s);
        Ok(())
    }
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    fn text(out: &Output) -> &str {
        std::str::from_utf8(out.as_slice()).unwrap()
    }

    #[test]
    fn nested_levels() {
        let mut out = Output::new();
        {
            let mut top = out.indenter();
            top.println("SEQUENCE");
            {
                let mut inner = top.next_level();
                assert_eq!(inner.depth(), 1);
                inner.print_str("INTEGER ");
                inner.println("1");
                inner.next_level().println("deeper");
            }
            top.println("NULL");
        }
        assert_eq!(
            text(&out),
            "SEQUENCE\n INTEGER 1\n  deeper\nNULL\n"
        );
    }

    #[test]
    fn wider_indent() {
        let mut out = Output::with_indent(4);
        out.indenter().next_level().print(b"a\nb\n\nc");
        assert_eq!(text(&out), "    a\n    b\n\n    c");
    }

    #[test]
    fn printf_and_split() {
        let mut out = Output::new();
        out.indenter().printf(format_args!("PAD={} ", 3));
        assert_eq!(out.split().as_ref(), b"PAD=3 ");
        assert!(out.is_empty());
    }

    #[test]
    fn raw_octets() {
        let mut out = Output::default();
        out.indenter().print(b"\xff\xfe");
        assert_eq!(out.into_bytes().as_ref(), b"\xff\xfe");
    }
}
