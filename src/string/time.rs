//! The content of UTCTime values.
//!
//! This is a private module. Its public items are re-exported by the parent.

use crate::output::Indenter;


//------------ UtcTime -------------------------------------------------------

/// The content of a UTCTime value in one of the two forms we understand.
///
/// These are `YYMMDDHHMMSSZ` and `YYMMDDHHMMZ`. In the latter, seconds are
/// assumed to be zero. Time zone offsets aren’t supported.
///
/// The digits are not checked. They are taken as they are and only
/// rearranged.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct UtcTime<'a> {
    /// The fields of the time: year, month, day, hour, minute, second.
    fields: [&'a [u8]; 6],
}

impl<'a> UtcTime<'a> {
    /// Takes the time apart if the content has one of the known forms.
    pub fn from_content(content: &'a [u8]) -> Option<Self> {
        let seconds: &'a [u8] = match content.len() {
            13 if content[12] == b'Z' => &content[10..12],
            11 if content[10] == b'Z' => b"00",
            _ => return None
        };
        Some(UtcTime {
            fields: [
                &content[0..2], &content[2..4], &content[4..6],
                &content[6..8], &content[8..10], seconds,
            ]
        })
    }

    /// Returns the two digits of the year.
    pub fn year(&self) -> &'a [u8] {
        self.fields[0]
    }

    /// Returns the two digits of the seconds.
    pub fn second(&self) -> &'a [u8] {
        self.fields[5]
    }

    /// Prints the time as a comment line.
    ///
    /// The line has the form `# 20YY-MM-DD HH:MM:SS GMT`. Years are always
    /// placed in this century.
    pub fn print(&self, out: &mut Indenter) {
        let [year, month, day, hour, minute, second] = self.fields;
        out.print(b"# 20");
        out.print(year);
        for (sep, field) in [
            (b"-", month), (b"-", day), (b" ", hour),
            (b":", minute), (b":", second)
        ] {
            out.print(sep);
            out.print(field);
        }
        out.println(" GMT");
    }
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use crate::output::Output;
    use super::*;

    fn comment(content: &[u8]) -> Option<String> {
        let time = UtcTime::from_content(content)?;
        let mut out = Output::new();
        time.print(&mut out.indenter());
        Some(String::from_utf8(out.into_bytes().to_vec()).unwrap())
    }

    #[test]
    fn with_seconds() {
        assert_eq!(
            comment(b"190425123456Z").unwrap(),
            "# 2019-04-25 12:34:56 GMT\n"
        );
        assert_eq!(UtcTime::from_content(b"190425123456Z").unwrap().year(),
            b"19"
        );
    }

    #[test]
    fn without_seconds() {
        assert_eq!(
            comment(b"4912310000Z").unwrap(),
            "# 2049-12-31 00:00:00 GMT\n"
        );
        assert_eq!(
            UtcTime::from_content(b"4912310000Z").unwrap().second(), b"00"
        );
    }

    #[test]
    fn unknown_forms() {
        assert!(comment(b"").is_none());
        assert!(comment(b"190425123456").is_none());
        assert!(comment(b"190425123456+0100").is_none());
        assert!(comment(b"1904251234Z0").is_none());
        assert!(comment(b"190425123456ZZ").is_none());
    }

    #[test]
    fn digits_are_not_checked() {
        assert_eq!(
            comment(b"ab0425123456Z").unwrap(),
            "# 20ab-04-25 12:34:56 GMT\n"
        );
    }
}
