//! Interpreting the content of values.
//!
//! This is a private module. Its public items are re-exported by the parent.

use crate::ident::{Ident, Tag};
use crate::int::Integer;
use crate::oid::Oid;
use crate::output::Indenter;
use crate::string::{
    BitString, Bmp, CharSet, Escaped, HexOctets, Universal, UtcTime, Verbatim
};
use super::Decoder;
use super::element::Element;
use super::error::DecodeError;


//------------ Kind ----------------------------------------------------------

/// How the content of a value is to be shown.
///
/// The kind is determined from the identifier octet alone via
/// [`from_ident`][Self::from_ident]. Universal values are recognized by
/// their tag and form. Of all other values, only constructed ones with the
/// tag numbers of SEQUENCE and SET are looked into. Everything else is
/// [`Unhandled`][Self::Unhandled] and shown as hex octets.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Kind {
    /// An end-of-contents marker. It must be empty.
    EndOfContent,

    /// A BOOLEAN. It must have exactly one octet.
    Boolean,

    /// An INTEGER or ENUMERATED with the given label.
    Integer(&'static str),

    /// A BIT STRING.
    BitString,

    /// A NULL. It must be empty.
    Null,

    /// An OBJECT IDENTIFIER.
    Oid,

    /// A RELATIVE-OID.
    RelativeOid,

    /// A value shown as hex octets with the given label.
    Opaque(&'static str),

    /// A UTCTime, shown as hex octets plus a comment.
    UtcTime,

    /// A string shown verbatim with the given label.
    Text(&'static str),

    /// A BMPString, converted from UTF-16.
    BmpString,

    /// A UniversalString, converted from UTF-32.
    UniversalString,

    /// A SEQUENCE or SET with the given label.
    Constructed(&'static str),

    /// Anything else with the given tag number.
    Unhandled(u8),
}

impl Kind {
    /// Determines the kind of a value from its identifier octet.
    pub fn from_ident(ident: Ident) -> Self {
        match (ident.tag(), ident.is_constructed()) {
            (Tag::END_OF_CONTENTS, false) => Kind::EndOfContent,
            (Tag::BOOLEAN, false) => Kind::Boolean,
            (Tag::INTEGER, false) => Kind::Integer("INTEGER"),
            (Tag::BIT_STRING, false) => Kind::BitString,
            (Tag::OCTET_STRING, false) => Kind::Opaque("OCTETSTRING"),
            (Tag::NULL, false) => Kind::Null,
            (Tag::OID, false) => Kind::Oid,
            (Tag::OBJECT_DESCRIPTOR, false) => {
                Kind::Opaque("OBJECTDESCRIPTION")
            }
            (Tag::EXTERNAL, true) => Kind::Opaque("EXTERNAL"),
            (Tag::REAL, false) => Kind::Opaque("REAL"),
            (Tag::ENUMERATED, false) => Kind::Integer("ENUMERATED"),
            (Tag::EMBEDDED_PDV, true) => Kind::Opaque("EMBEDDED-PDV"),
            (Tag::UTF8_STRING, false) => Kind::Text("UTF8STRING"),
            (Tag::RELATIVE_OID, false) => Kind::RelativeOid,
            (Tag::SEQUENCE, true) => Kind::Constructed("SEQUENCE"),
            (Tag::SET, true) => Kind::Constructed("SET"),
            (Tag::NUMERIC_STRING, false) => Kind::Text("NUMERICSTRING"),
            (Tag::PRINTABLE_STRING, false) => Kind::Text("PRINTABLESTRING"),
            (Tag::TELETEX_STRING, false) => Kind::Opaque("T61STRING"),
            (Tag::VIDEOTEX_STRING, false) => Kind::Opaque("VIDEOTEXSTRING"),
            (Tag::IA5_STRING, false) => Kind::Text("IA5STRING"),
            (Tag::UTC_TIME, false) => Kind::UtcTime,
            (Tag::GENERALIZED_TIME, false) => Kind::Text("GENERALIZEDTIME"),
            (Tag::GRAPHIC_STRING, false) => Kind::Opaque("GRAPHICSTRING"),
            (Tag::VISIBLE_STRING, false) => Kind::Text("VISIBLESTRING"),
            (Tag::GENERAL_STRING, false) => Kind::Opaque("GENERALSTRING"),
            (Tag::UNIVERSAL_STRING, false) => Kind::UniversalString,
            (Tag::CHARACTER_STRING, false) => {
                Kind::Opaque("CHARACTERSTRING")
            }
            (Tag::BMP_STRING, false) => Kind::BmpString,
            (tag, true) if !tag.is_universal() => {
                match tag.number() {
                    16 => Kind::Constructed("SEQUENCE"),
                    17 => Kind::Constructed("SET"),
                    number => Kind::Unhandled(number),
                }
            }
            (tag, _) => Kind::Unhandled(tag.number()),
        }
    }

    /// Prints the content of `element`.
    ///
    /// The class and form labels have already been printed by the time
    /// this is called, so this finishes the line and adds any comment
    /// lines or nested values.
    pub fn render(
        self,
        decoder: &Decoder,
        out: &mut Indenter,
        element: &Element,
        level: usize,
    ) -> Result<(), DecodeError> {
        let content = element.content();
        let pos = element.content_start();
        match self {
            Kind::EndOfContent => {
                if !content.is_empty() {
                    return Err(DecodeError::malformed(
                        format!(
                            "end-of-content had unexpected length {}",
                            content.len()
                        ),
                        pos
                    ))
                }
                out.println("END-OF-CONTENT");
            }
            Kind::Boolean => {
                match *content {
                    [0] => out.println("BOOLEAN FALSE"),
                    [_] => out.println("BOOLEAN TRUE"),
                    _ => {
                        return Err(DecodeError::malformed(
                            format!(
                                "boolean had unexpected length {}",
                                content.len()
                            ),
                            pos
                        ))
                    }
                }
            }
            Kind::Integer(label) => {
                match Integer::new(content).display_value() {
                    Some(value) => {
                        out.printf(format_args!("{} {}\n", label, value))
                    }
                    None => print_opaque(decoder, out, label, content),
                }
            }
            Kind::BitString => {
                let bits = BitString::from_content(content).map_err(|err| {
                    err.at(pos)
                })?;
                out.printf(format_args!(
                    "BITSTRING PAD={} {}\n",
                    bits.unused(), HexOctets(bits.octets())
                ));
            }
            Kind::Null => {
                if !content.is_empty() {
                    return Err(DecodeError::malformed(
                        "null has non-zero content", pos
                    ))
                }
                out.println("NULL");
            }
            Kind::Oid => {
                let oid = Oid::from_content(content).map_err(|err| {
                    err.at(pos)
                })?;
                print_oid(decoder, out, "OID", &oid);
            }
            Kind::RelativeOid => {
                let oid = Oid::from_relative_content(content).map_err(|err| {
                    err.at(pos)
                })?;
                print_oid(decoder, out, "RELATIVEOID", &oid);
            }
            Kind::Opaque(label) => {
                print_opaque(decoder, out, label, content);
            }
            Kind::UtcTime => {
                print_opaque(decoder, out, "UTCTIME", content);
                if let Some(time) = UtcTime::from_content(content) {
                    time.print(out);
                }
            }
            Kind::Text(label) => {
                print_text::<Verbatim>(out, label, element)?;
            }
            Kind::BmpString => {
                print_text::<Bmp>(out, "BMPSTRING", element)?;
            }
            Kind::UniversalString => {
                print_text::<Universal>(out, "UNIVERSALSTRING", element)?;
            }
            Kind::Constructed(label) => {
                out.println(label);
                decoder.parse_level(
                    &mut out.next_level(), element.content_source(), level + 1
                )?;
            }
            Kind::Unhandled(number) => {
                print_opaque(
                    decoder, out,
                    &format!("UNHANDLED-TAG={:02x}", number),
                    content
                );
            }
        }
        Ok(())
    }
}


//------------ Helper Functions ----------------------------------------------

/// Prints content as hex octets followed by the hint.
fn print_opaque(
    decoder: &Decoder, out: &mut Indenter, label: &str, content: &[u8]
) {
    out.printf(format_args!("{} {}\n", label, HexOctets(content)));
    if decoder.options().hints() {
        decoder.hint().hint(out, content);
    }
}

/// Prints an object identifier followed by its name.
fn print_oid(decoder: &Decoder, out: &mut Indenter, label: &str, oid: &Oid) {
    let oid = oid.to_string();
    out.printf(format_args!("{} {}\n", label, oid));
    if decoder.options().oid_names() {
        if let Some(name) = decoder.names().name(&oid) {
            out.printf(format_args!("# {}\n", name));
        }
    }
}

/// Prints a string in character set `C` with line breaks escaped.
fn print_text<C: CharSet>(
    out: &mut Indenter, label: &str, element: &Element
) -> Result<(), DecodeError> {
    let text = C::decode(element.content()).map_err(|err| {
        err.at(element.content_start())
    })?;
    out.print_str(label);
    out.print_str(" ");
    for chunk in Escaped::new(&text) {
        out.print(chunk);
    }
    out.newline();
    Ok(())
}


//============ Tests =========================================================
