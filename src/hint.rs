//! Guessing at the meaning of opaque content.
//!
//! This is a private module. Its public items are re-exported by the parent.

use crate::decode::{Decoder, Options};
use crate::names::NoNames;
use crate::output::{Indenter, Output};


//------------ Hint ----------------------------------------------------------

/// A type that adds a comment about opaque content.
///
/// The decoder hands the content of every value it can only show as hex
/// octets to a hint. The hint may print a comment line to `out` if it
/// thinks it can tell what the content is. It must either print complete
/// lines or nothing at all.
pub trait Hint {
    /// Prints a hint about `content`, if there is one.
    fn hint(&self, out: &mut Indenter, content: &[u8]);
}

impl<T: Hint + ?Sized> Hint for &T {
    fn hint(&self, out: &mut Indenter, content: &[u8]) {
        (**self).hint(out, content)
    }
}


//------------ NoHint --------------------------------------------------------

/// A hint that never has anything to say.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoHint;

impl Hint for NoHint {
    fn hint(&self, _out: &mut Indenter, _content: &[u8]) { }
}


//------------ DefaultHint ---------------------------------------------------

/// The hint used by default.
///
/// It recognizes two things. Content that is itself a complete sequence of
/// DER encoded values gets `# contains DER`. This is common for octet
/// strings wrapping extension values and for keys. Failing that, content
/// consisting only of printable ASCII characters is shown as a quoted
/// string.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultHint;

impl DefaultHint {
    /// Returns whether the content can be decoded completely.
    ///
    /// The content is decoded into a scratch buffer without hints so
    /// nested content isn’t checked again and again.
    pub fn is_der(content: &[u8]) -> bool {
        if content.is_empty() {
            return false
        }
        let decoder = Decoder::with_collaborators(
            Options::default().with_hints(false).with_oid_names(false),
            &NoHint, &NoNames
        );
        let mut scratch = Output::new();
        decoder.parse(&mut scratch.indenter(), content).is_ok()
    }

    /// Returns whether the content is non-empty printable ASCII.
    pub fn is_printable(content: &[u8]) -> bool {
        !content.is_empty()
            && content.iter().all(|&ch| (0x20..=0x7e).contains(&ch))
    }
}

impl Hint for DefaultHint {
    fn hint(&self, out: &mut Indenter, content: &[u8]) {
        if Self::is_der(content) {
            out.println("# contains DER");
        }
        else if Self::is_printable(content) {
            out.print_str("# \"");
            out.print(content);
            out.println("\"");
        }
    }
}


//============ Tests =========================================================
