#![cfg(test)]

use crate::hint::{Hint, NoHint};
use crate::names::{NoNames, OidNames};
use crate::output::Output;
use super::*;

fn render_with(
    decoder: &Decoder, data: &[u8]
) -> (String, Result<(), DecodeError>) {
    let mut out = Output::new();
    let res = decoder.parse(&mut out.indenter(), data);
    (String::from_utf8(out.into_bytes().to_vec()).unwrap(), res)
}

fn render(data: &[u8]) -> String {
    let (text, res) = render_with(&Decoder::default(), data);
    res.unwrap();
    text
}

fn render_plain(data: &[u8]) -> String {
    let decoder = Decoder::new(Options::default().with_hints(false));
    let (text, res) = render_with(&decoder, data);
    res.unwrap();
    text
}

fn render_err(data: &[u8]) -> (String, DecodeError) {
    let (text, res) = render_with(&Decoder::default(), data);
    (text, res.unwrap_err())
}

/// Wraps content into a value with the given identifier octet.
fn wrap(ident: u8, content: &[u8]) -> Vec<u8> {
    let mut res = vec![ident];
    let len = content.len();
    if len < 0x80 {
        res.push(len as u8);
    }
    else {
        let octets = len.to_be_bytes();
        let skip = octets.iter().take_while(|&&x| x == 0).count();
        res.push(0x80 | (octets.len() - skip) as u8);
        res.extend_from_slice(&octets[skip..]);
    }
    res.extend_from_slice(content);
    res
}


//------------ Simple Values -------------------------------------------------

#[test]
fn booleans() {
    assert_eq!(render(b"\x01\x01\x00"), "UNIVERSAL PRIMITIVE BOOLEAN FALSE\n");
    assert_eq!(render(b"\x01\x01\x01"), "UNIVERSAL PRIMITIVE BOOLEAN TRUE\n");
    assert_eq!(render(b"\x01\x01\xff"), "UNIVERSAL PRIMITIVE BOOLEAN TRUE\n");

    let (text, err) = render_err(b"\x01\x00");
    assert_eq!(text, "UNIVERSAL PRIMITIVE ");
    assert_eq!(err.kind(), ErrorKind::Malformed);
    assert_eq!(err.message(), "boolean had unexpected length 0");

    let (_, err) = render_err(b"\x01\x02\x00\x00");
    assert_eq!(err.message(), "boolean had unexpected length 2");
}

#[test]
fn integers() {
    assert_eq!(render(b"\x02\x01\x01"), "UNIVERSAL PRIMITIVE INTEGER 1\n");
    assert_eq!(render(b"\x02\x01\x00"), "UNIVERSAL PRIMITIVE INTEGER 0\n");
    assert_eq!(
        render(b"\x02\x02\x00\xff"), "UNIVERSAL PRIMITIVE INTEGER 255\n"
    );
    assert_eq!(
        render(b"\x02\x07\x7f\xff\xff\xff\xff\xff\xff"),
        "UNIVERSAL PRIMITIVE INTEGER 36028797018963967\n"
    );
    assert_eq!(
        render(b"\x0a\x01\x03"), "UNIVERSAL PRIMITIVE ENUMERATED 3\n"
    );
}

#[test]
fn integers_shown_as_octets() {
    // Negative values are never converted. This is intentional.
    assert_eq!(render(b"\x02\x01\xff"), "UNIVERSAL PRIMITIVE INTEGER :FF\n");
    assert_eq!(
        render_plain(b"\x02\x02\x80\x00"),
        "UNIVERSAL PRIMITIVE INTEGER :8000\n"
    );
    assert_eq!(render(b"\x02\x00"), "UNIVERSAL PRIMITIVE INTEGER :\n");
    assert_eq!(
        render(b"\x02\x08\x01\x00\x00\x00\x00\x00\x00\x00"),
        "UNIVERSAL PRIMITIVE INTEGER :0100000000000000\n"
    );
    assert_eq!(
        render(b"\x0a\x01\x80"), "UNIVERSAL PRIMITIVE ENUMERATED :80\n"
    );
}

#[test]
fn end_of_content_and_null() {
    assert_eq!(render(b"\x00\x00"), "UNIVERSAL PRIMITIVE END-OF-CONTENT\n");
    assert_eq!(render(b"\x05\x00"), "UNIVERSAL PRIMITIVE NULL\n");

    let (text, err) = render_err(b"\x00\x01\x00");
    assert_eq!(text, "UNIVERSAL PRIMITIVE ");
    assert_eq!(err.message(), "end-of-content had unexpected length 1");

    let (text, err) = render_err(b"\x05\x01\x00");
    assert_eq!(text, "UNIVERSAL PRIMITIVE ");
    assert_eq!(err.kind(), ErrorKind::Malformed);
    assert_eq!(err.message(), "null has non-zero content");
    assert_eq!(usize::from(err.pos()), 2);
}

#[test]
fn bit_strings() {
    assert_eq!(
        render(b"\x03\x03\x06\x6e\x5d"),
        "UNIVERSAL PRIMITIVE BITSTRING PAD=6 :6E5D\n"
    );
    assert_eq!(
        render(b"\x03\x01\x00"), "UNIVERSAL PRIMITIVE BITSTRING PAD=0 :\n"
    );

    let (_, err) = render_err(b"\x03\x00");
    assert_eq!(err.message(), "bit string had no padding byte");
    let (_, err) = render_err(b"\x03\x02\x08\x00");
    assert_eq!(err.kind(), ErrorKind::Malformed);
    assert_eq!(err.message(), "bit string padding has illegal value 8");
}


//------------ Object Identifiers --------------------------------------------

#[test]
fn oids() {
    assert_eq!(
        render(b"\x06\x06\x2a\x86\x48\x86\xf7\x0d"),
        "UNIVERSAL PRIMITIVE OID 1.2.840.113549\n"
    );
    assert_eq!(
        render(b"\x06\x09\x2a\x86\x48\x86\xf7\x0d\x01\x01\x0b"),
        "UNIVERSAL PRIMITIVE OID 1.2.840.113549.1.1.11\n\
         # sha256WithRSAEncryption\n"
    );
    assert_eq!(
        render(b"\x0d\x03\x86\x48\x01"),
        "UNIVERSAL PRIMITIVE RELATIVEOID 840.1\n"
    );
}

#[test]
fn oid_names_disabled() {
    let decoder = Decoder::new(Options::default().with_oid_names(false));
    let (text, res) = render_with(&decoder, b"\x06\x03\x55\x04\x03");
    res.unwrap();
    assert_eq!(text, "UNIVERSAL PRIMITIVE OID 2.5.4.3\n");
}

#[test]
fn bad_oids() {
    let (text, err) = render_err(b"\x06\x00");
    assert_eq!(text, "UNIVERSAL PRIMITIVE ");
    assert_eq!(err.message(), "OID doesn't have content");

    let (_, err) = render_err(b"\x0d\x00");
    assert_eq!(err.kind(), ErrorKind::Malformed);

    let (_, err) = render_err(b"\x06\x02\x2a\x86");
    assert_eq!(err.message(), "OID ends in the middle of a component");
}


//------------ Strings -------------------------------------------------------

#[test]
fn literal_strings() {
    assert_eq!(
        render(b"\x0c\x05a\nb\rc"),
        "UNIVERSAL PRIMITIVE UTF8STRING a\\nb\\rc\n"
    );
    assert_eq!(
        render(b"\x13\x07Example"),
        "UNIVERSAL PRIMITIVE PRINTABLESTRING Example\n"
    );
    assert_eq!(
        render(b"\x12\x03123"), "UNIVERSAL PRIMITIVE NUMERICSTRING 123\n"
    );
    assert_eq!(
        render(b"\x16\x0duser@test.net"),
        "UNIVERSAL PRIMITIVE IA5STRING user@test.net\n"
    );
    assert_eq!(
        render(b"\x1a\x01x"), "UNIVERSAL PRIMITIVE VISIBLESTRING x\n"
    );
    assert_eq!(
        render(b"\x18\x0f20190425123456Z"),
        "UNIVERSAL PRIMITIVE GENERALIZEDTIME 20190425123456Z\n"
    );
}

#[test]
fn literal_strings_are_not_checked() {
    let mut out = Output::new();
    parse(&mut out.indenter(), b"\x0c\x02\xff\xfe").unwrap();
    assert_eq!(
        out.as_slice(), b"UNIVERSAL PRIMITIVE UTF8STRING \xff\xfe\n".as_ref()
    );
}

#[test]
fn wide_strings() {
    assert_eq!(
        render(b"\x1e\x06\x00h\x00\xe9\x00\n"),
        "UNIVERSAL PRIMITIVE BMPSTRING hé\\n\n"
    );
    assert_eq!(
        render(b"\x1c\x08\x00\x00\x00A\x00\x01\xf6\x00"),
        "UNIVERSAL PRIMITIVE UNIVERSALSTRING A\u{1F600}\n"
    );

    let (text, err) = render_err(b"\x1e\x03\x00h\x00");
    assert_eq!(text, "UNIVERSAL PRIMITIVE ");
    assert_eq!(err.kind(), ErrorKind::Charset);

    let (_, err) = render_err(b"\x1c\x04\x00\x11\x00\x00");
    assert_eq!(err.kind(), ErrorKind::Charset);
    assert_eq!(usize::from(err.pos()), 2);
}

#[test]
fn opaque_strings() {
    assert_eq!(
        render_plain(b"\x04\x03\x01\x02\x03"),
        "UNIVERSAL PRIMITIVE OCTETSTRING :010203\n"
    );
    assert_eq!(
        render_plain(b"\x14\x02hi"), "UNIVERSAL PRIMITIVE T61STRING :6869\n"
    );
    assert_eq!(
        render_plain(b"\x15\x00"), "UNIVERSAL PRIMITIVE VIDEOTEXSTRING :\n"
    );
    assert_eq!(
        render_plain(b"\x19\x01\x00"),
        "UNIVERSAL PRIMITIVE GRAPHICSTRING :00\n"
    );
    assert_eq!(
        render_plain(b"\x1b\x01\x00"),
        "UNIVERSAL PRIMITIVE GENERALSTRING :00\n"
    );
    assert_eq!(
        render_plain(b"\x1d\x01\x00"),
        "UNIVERSAL PRIMITIVE CHARACTERSTRING :00\n"
    );
    assert_eq!(
        render_plain(b"\x07\x01\x00"),
        "UNIVERSAL PRIMITIVE OBJECTDESCRIPTION :00\n"
    );
    assert_eq!(
        render_plain(b"\x09\x01\x00"), "UNIVERSAL PRIMITIVE REAL :00\n"
    );
    assert_eq!(
        render_plain(b"\x28\x02\x05\x00"),
        "UNIVERSAL COMPOSED EXTERNAL :0500\n"
    );
    assert_eq!(
        render_plain(b"\x2b\x01\xab"),
        "UNIVERSAL COMPOSED EMBEDDED-PDV :AB\n"
    );
}

#[test]
fn hints() {
    assert_eq!(
        render(b"\x04\x05\x30\x03\x02\x01\x07"),
        "UNIVERSAL PRIMITIVE OCTETSTRING :3003020107\n# contains DER\n"
    );
    assert_eq!(
        render(b"\x04\x03abc"),
        "UNIVERSAL PRIMITIVE OCTETSTRING :616263\n# \"abc\"\n"
    );
    assert_eq!(
        render(b"\x30\x05\x04\x03abc"),
        "UNIVERSAL COMPOSED SEQUENCE\n \
         UNIVERSAL PRIMITIVE OCTETSTRING :616263\n \
         # \"abc\"\n"
    );
}


//------------ Times ---------------------------------------------------------

#[test]
fn utc_time_with_seconds() {
    assert_eq!(
        render_plain(b"\x17\x0d190425123456Z"),
        "UNIVERSAL PRIMITIVE UTCTIME :3139303432353132333435365A\n\
         # 2019-04-25 12:34:56 GMT\n"
    );
}

#[test]
fn utc_time_without_seconds() {
    assert_eq!(
        render_plain(b"\x17\x0b4912310000Z"),
        "UNIVERSAL PRIMITIVE UTCTIME :343931323331303030305A\n\
         # 2049-12-31 00:00:00 GMT\n"
    );
}

#[test]
fn utc_time_other_forms() {
    assert_eq!(
        render_plain(b"\x17\x0c190425123456"),
        "UNIVERSAL PRIMITIVE UTCTIME :313930343235313233343536\n"
    );
    assert_eq!(
        render_plain(b"\x17\x00"), "UNIVERSAL PRIMITIVE UTCTIME :\n"
    );
}

#[test]
fn utc_time_hint_comes_first() {
    assert_eq!(
        render(b"\x17\x0d190425123456Z"),
        "UNIVERSAL PRIMITIVE UTCTIME :3139303432353132333435365A\n\
         # \"190425123456Z\"\n\
         # 2019-04-25 12:34:56 GMT\n"
    );
}


//------------ Constructed Values --------------------------------------------

#[test]
fn sequence_of_integers() {
    assert_eq!(
        render(b"\x30\x06\x02\x01\x01\x02\x01\x02"),
        "UNIVERSAL COMPOSED SEQUENCE\n \
         UNIVERSAL PRIMITIVE INTEGER 1\n \
         UNIVERSAL PRIMITIVE INTEGER 2\n"
    );
}

#[test]
fn nested_values() {
    assert_eq!(
        render(b"\x30\x06\x31\x02\x05\x00\x05\x00"),
        "UNIVERSAL COMPOSED SEQUENCE\n \
         UNIVERSAL COMPOSED SET\n  \
         UNIVERSAL PRIMITIVE NULL\n \
         UNIVERSAL PRIMITIVE NULL\n"
    );
    assert_eq!(
        render(b"\x30\x00\x31\x00"),
        "UNIVERSAL COMPOSED SEQUENCE\nUNIVERSAL COMPOSED SET\n"
    );
}

#[test]
fn algorithm_identifier() {
    assert_eq!(
        render(
            b"\x30\x0d\x06\x09\x2a\x86\x48\x86\xf7\x0d\x01\x01\x0b\x05\x00"
        ),
        "UNIVERSAL COMPOSED SEQUENCE\n \
         UNIVERSAL PRIMITIVE OID 1.2.840.113549.1.1.11\n \
         # sha256WithRSAEncryption\n \
         UNIVERSAL PRIMITIVE NULL\n"
    );
}

#[test]
fn wider_indent() {
    let mut out = Output::with_indent(4);
    parse(&mut out.indenter(), b"\x30\x04\x30\x02\x05\x00").unwrap();
    assert_eq!(
        out.as_slice(),
        b"UNIVERSAL COMPOSED SEQUENCE\n    \
          UNIVERSAL COMPOSED SEQUENCE\n        \
          UNIVERSAL PRIMITIVE NULL\n".as_ref()
    );
}

#[test]
fn multiple_top_level_values() {
    assert_eq!(
        render(b"\x05\x00\x01\x01\x00"),
        "UNIVERSAL PRIMITIVE NULL\nUNIVERSAL PRIMITIVE BOOLEAN FALSE\n"
    );
}


//------------ Other Classes -------------------------------------------------

#[test]
fn context_specific() {
    assert_eq!(
        render(b"\x80\x01\x05"),
        "CONTEXT-SPECIFIC PRIMITIVE UNHANDLED-TAG=00 :05\n"
    );
    assert_eq!(
        render(b"\xa0\x03\x02\x01\x02"),
        "CONTEXT-SPECIFIC COMPOSED UNHANDLED-TAG=00 :020102\n\
         # contains DER\n"
    );
    assert_eq!(
        render_plain(b"\x82\x0bexample.com"),
        "CONTEXT-SPECIFIC PRIMITIVE UNHANDLED-TAG=02 :6578616D706C652E636F6D\n"
    );
    assert_eq!(
        render(b"\xb0\x03\x02\x01\x05"),
        "CONTEXT-SPECIFIC COMPOSED SEQUENCE\n UNIVERSAL PRIMITIVE INTEGER 5\n"
    );
}

#[test]
fn application_and_private() {
    assert_eq!(
        render(b"\x70\x03\x02\x01\x05"),
        "APPLICATION COMPOSED SEQUENCE\n UNIVERSAL PRIMITIVE INTEGER 5\n"
    );
    assert_eq!(
        render(b"\xf1\x02\x05\x00"),
        "PRIVATE COMPOSED SET\n UNIVERSAL PRIMITIVE NULL\n"
    );
    assert_eq!(
        render_plain(b"\x5e\x01\x00"),
        "APPLICATION PRIMITIVE UNHANDLED-TAG=1e :00\n"
    );
}

#[test]
fn unhandled_universal() {
    assert_eq!(
        render_plain(b"\x0e\x01\xaa"),
        "UNIVERSAL PRIMITIVE UNHANDLED-TAG=0e :AA\n"
    );
    assert_eq!(
        render_plain(b"\x24\x03\x04\x01\x00"),
        "UNIVERSAL COMPOSED UNHANDLED-TAG=04 :040100\n"
    );
    assert_eq!(
        render_plain(b"\x10\x00"),
        "UNIVERSAL PRIMITIVE UNHANDLED-TAG=10 :\n"
    );
}


//------------ Errors --------------------------------------------------------

#[test]
fn short_reads() {
    let (text, err) = render_err(b"\x05");
    assert!(text.is_empty());
    assert_eq!(err.kind(), ErrorKind::Truncated);
    assert_eq!(
        err.message(), "short DER read, need at least two bytes, got 1"
    );

    let (text, err) = render_err(b"\x05\x00\x05");
    assert_eq!(text, "UNIVERSAL PRIMITIVE NULL\n");
    assert_eq!(usize::from(err.pos()), 2);
}

#[test]
fn short_content() {
    let (text, err) = render_err(b"\x30\x05\x02\x01");
    assert_eq!(text, "UNIVERSAL COMPOSED ");
    assert_eq!(err.kind(), ErrorKind::Truncated);
    assert_eq!(err.message(), "short content, need 5 bytes but have 2");
}

#[test]
fn short_content_nested() {
    let (text, err) = render_err(b"\x30\x03\x02\x02\x01");
    assert_eq!(text, "UNIVERSAL COMPOSED SEQUENCE\n UNIVERSAL PRIMITIVE ");
    assert_eq!(err.kind(), ErrorKind::Truncated);
    assert_eq!(err.message(), "short content, need 2 bytes but have 1");
    assert_eq!(usize::from(err.pos()), 4);
}

#[test]
fn short_length() {
    let (text, err) = render_err(b"\x04\x82\x01");
    assert_eq!(text, "UNIVERSAL PRIMITIVE ");
    assert_eq!(err.kind(), ErrorKind::Truncated);
    assert_eq!(usize::from(err.pos()), 1);
}

#[test]
fn long_form_tag() {
    let (text, err) = render_err(b"\x1f\x22\x01\x00");
    assert!(text.is_empty());
    assert_eq!(err.kind(), ErrorKind::Unsupported);

    let (text, err) = render_err(b"\x30\x03\xbf\x01\x00");
    assert_eq!(text, "UNIVERSAL COMPOSED SEQUENCE\n");
    assert_eq!(err.kind(), ErrorKind::Unsupported);
    assert_eq!(usize::from(err.pos()), 2);
}

#[test]
fn indefinite_length_is_empty() {
    assert_eq!(
        render(b"\x30\x80\x05\x00"),
        "UNIVERSAL COMPOSED SEQUENCE\nUNIVERSAL PRIMITIVE NULL\n"
    );
}


//------------ Nesting Limit -------------------------------------------------

#[test]
fn max_depth() {
    let data = b"\x30\x04\x30\x02\x05\x00";
    let limited = |depth| {
        Decoder::new(Options::default().with_max_depth(Some(depth)))
    };

    let (_, res) = render_with(&limited(2), data);
    res.unwrap();

    let (text, res) = render_with(&limited(1), data);
    let err = res.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TooDeep);
    assert_eq!(usize::from(err.pos()), 4);
    assert_eq!(
        text,
        "UNIVERSAL COMPOSED SEQUENCE\n UNIVERSAL COMPOSED SEQUENCE\n"
    );

    // Empty constructed values don’t count.
    let (_, res) = render_with(&limited(0), b"\x30\x00");
    res.unwrap();
}

#[test]
fn deep_nesting() {
    let mut data = b"\x05\x00".to_vec();
    for _ in 0..200 {
        data = wrap(0x30, &data);
    }

    let (_, err) = render_err(&data);
    assert_eq!(err.kind(), ErrorKind::TooDeep);

    let decoder = Decoder::new(Options::default().with_max_depth(None));
    let (text, res) = render_with(&decoder, &data);
    res.unwrap();
    assert_eq!(text.lines().count(), 201);
    assert_eq!(
        text.lines().last().unwrap(),
        format!("{}UNIVERSAL PRIMITIVE NULL", " ".repeat(200))
    );
}


//------------ Collaborators -------------------------------------------------

struct LengthHint;

impl Hint for LengthHint {
    fn hint(&self, out: &mut crate::output::Indenter, content: &[u8]) {
        out.printf(format_args!("# {} octets\n", content.len()));
    }
}

struct EverythingIsFoo;

impl OidNames for EverythingIsFoo {
    fn name(&self, _oid: &str) -> Option<&str> {
        Some("foo")
    }
}

#[test]
fn custom_collaborators() {
    let decoder = Decoder::with_collaborators(
        Options::default(), &LengthHint, &EverythingIsFoo
    );
    let (text, res) = render_with(
        &decoder, b"\x30\x08\x04\x01\x00\x0d\x03\x86\x48\x01"
    );
    res.unwrap();
    assert_eq!(
        text,
        "UNIVERSAL COMPOSED SEQUENCE\n \
         UNIVERSAL PRIMITIVE OCTETSTRING :00\n \
         # 1 octets\n \
         UNIVERSAL PRIMITIVE RELATIVEOID 840.1\n \
         # foo\n"
    );

    let decoder = Decoder::with_collaborators(
        Options::default(), &NoHint, &NoNames
    );
    let (text, res) = render_with(&decoder, b"\x04\x01a\x06\x01\x2a");
    res.unwrap();
    assert_eq!(
        text,
        "UNIVERSAL PRIMITIVE OCTETSTRING :61\nUNIVERSAL PRIMITIVE OID 1.2\n"
    );
}

#[test]
fn deterministic() {
    let data = b"\x30\x0d\x06\x09\x2a\x86\x48\x86\xf7\x0d\x01\x01\x0b\x05\x00\
                 \x04\x03abc\x17\x0b4912310000Z";
    let decoder = Decoder::default();
    let first = render_with(&decoder, data);
    let second = render_with(&decoder, data);
    assert_eq!(first, second);
    assert!(first.1.is_ok());
}
