//! The identifier octet of a DER encoded value.
//!
//! This is a private module. The relevant items are re-exported by the
//! parent.

use std::fmt;


//------------ Tag -----------------------------------------------------------

/// The tag of a value.
///
/// In ASN.1, tags are used to identify the type of a value. Tags consist of
/// one of four classes, represented by the [`Class`] enum, and a number
/// within this class.
///
/// # Limitations
///
/// Only the low tag number form is supported, i.e., tag numbers between 0
/// and 30 that fit into the identifier octet itself. The high tag number
/// form signalled by all five number bits being set is rejected when
/// reading the identifier.
//
//  Internally, we store the tag as the identifier octet of a primitive value
//  with the same tag.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Tag(u8);

impl Tag {
    /// The mask for the tag number bits.
    const NUMBER_MASK: u8 = 0x1f;

    /// Creates a tag from a class and number.
    ///
    /// Only the lowest five bits of `number` are used.
    pub const fn new(class: Class, number: u8) -> Self {
        Self(class.into_u8() | (number & Self::NUMBER_MASK))
    }

    /// Creates a new tag in class “context specific” with the given number.
    pub const fn ctx(number: u8) -> Self {
        Self::new(Class::Context, number)
    }

    /// Returns the class of the tag.
    pub const fn class(self) -> Class {
        Class::from_u8(self.0)
    }

    /// Returns the number of the tag.
    pub const fn number(self) -> u8 {
        self.0 & Self::NUMBER_MASK
    }

    /// Returns whether the tag is of the universal class.
    pub const fn is_universal(self) -> bool {
        matches!(self.class(), Class::Universal)
    }
}

/// # Constants for universal tags.
///
/// See clause 8.4 of ITU Recommendation X.690.
///
impl Tag {
    /// The tag marking the end-of-contents, UNIVERSAL 0.
    pub const END_OF_CONTENTS: Self = Self::new(Class::Universal, 0);

    /// The tag for the BOOLEAN type, UNIVERSAL 1.
    pub const BOOLEAN: Self = Self::new(Class::Universal, 1);

    /// The tag for the INTEGER type, UNIVERSAL 2.
    pub const INTEGER: Self = Self::new(Class::Universal, 2);

    /// The tag for the BIT STRING type, UNIVERSAL 3.
    pub const BIT_STRING: Self = Self::new(Class::Universal, 3);

    /// The tag for the OCTET STRING type, UNIVERSAL 4.
    pub const OCTET_STRING: Self = Self::new(Class::Universal, 4);

    /// The tag for the NULL type, UNIVERSAL 5.
    pub const NULL: Self = Self::new(Class::Universal, 5);

    /// The tag for the OBJECT IDENTIFIER type, UNIVERSAL 6.
    pub const OID: Self = Self::new(Class::Universal, 6);

    /// The tag for the ObjectDescriptor type, UNIVERSAL 7.
    pub const OBJECT_DESCRIPTOR: Self = Self::new(Class::Universal, 7);

    /// The tag for the EXTERNAL and Instance-of types, UNIVERSAL 8.
    pub const EXTERNAL: Self = Self::new(Class::Universal, 8);

    /// The tag for the REAL type, UNIVERSAL 9.
    pub const REAL: Self = Self::new(Class::Universal, 9);

    /// The tag for the ENUMERATED type, UNIVERSAL 10.
    pub const ENUMERATED: Self = Self::new(Class::Universal, 10);

    /// The tag for the EMBEDDED PDV type, UNIVERSAL 11.
    pub const EMBEDDED_PDV: Self = Self::new(Class::Universal, 11);

    /// The tag for the UTF8String type, UNIVERSAL 12
    pub const UTF8_STRING: Self = Self::new(Class::Universal, 12);

    /// The tag for the RELATIVE-OID type, UNIVERSAL 13.
    pub const RELATIVE_OID: Self = Self::new(Class::Universal, 13);

    /// The tag for the SEQUENCE and SEQUENCE OF types, UNIVERSAL 16.
    pub const SEQUENCE: Self = Self::new(Class::Universal, 16);

    /// The tag for the SET and SET OF types, UNIVERSAL 17.
    pub const SET: Self = Self::new(Class::Universal, 17);

    /// The tag for the NumericString type, UNIVERSAL 18.
    pub const NUMERIC_STRING: Self = Self::new(Class::Universal, 18);

    /// The tag for the PrintableString type, UNIVERSAL 19.
    pub const PRINTABLE_STRING: Self = Self::new(Class::Universal, 19);

    /// The tag for the TeletexString type, UNIVERSAL 20.
    pub const TELETEX_STRING: Self = Self::new(Class::Universal, 20);

    /// The tag for the VideotexString type, UNIVERSAL 21.
    pub const VIDEOTEX_STRING: Self = Self::new(Class::Universal, 21);

    /// The tag for the IA5String type, UNIVERSAL 22.
    pub const IA5_STRING: Self = Self::new(Class::Universal, 22);

    /// The tag for the UTCTime type, UNIVERSAL 23.
    pub const UTC_TIME: Self = Self::new(Class::Universal, 23);

    /// The tag for the GeneralizedType type, UNIVERSAL 24.
    pub const GENERALIZED_TIME: Self = Self::new(Class::Universal, 24);

    /// The tag for the GraphicString type, UNIVERSAL 25.
    pub const GRAPHIC_STRING: Self = Self::new(Class::Universal, 25);

    /// The tag for the VisibleString type, UNIVERSAL 26.
    pub const VISIBLE_STRING: Self = Self::new(Class::Universal, 26);

    /// The tag for the GeneralString type, UNIVERSAL 27.
    pub const GENERAL_STRING: Self = Self::new(Class::Universal, 27);

    /// The tag for the UniversalString type, UNIVERSAL 28.
    pub const UNIVERSAL_STRING: Self = Self::new(Class::Universal, 28);

    /// The tag for the CHARACTER STRING type, UNIVERSAL 29.
    pub const CHARACTER_STRING: Self = Self::new(Class::Universal, 29);

    /// The tag for the BMPString type, UNIVERSAL 30.
    pub const BMP_STRING: Self = Self::new(Class::Universal, 30);
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Tag({:#04x})", self.0)
    }
}


//------------ Ident ---------------------------------------------------------

/// The identifier octet of an encoded value.
///
/// The octet combines the [`Tag`] of the value with a bit signalling
/// whether the value is primitive or constructed (“composed”).
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Ident(u8);

impl Ident {
    /// The mask for the constructed bit.
    const CONSTRUCTED_MASK: u8 = 0x20;

    /// The number bits signalling a high tag number form.
    const LONG_FORM: u8 = 0x1f;

    /// Creates identifier octets from a tag.
    pub const fn from_tag(tag: Tag, constructed: bool) -> Self {
        if constructed {
            Self(tag.0 | Self::CONSTRUCTED_MASK)
        }
        else {
            Self(tag.0)
        }
    }

    /// Creates the identifier from its encoded octet.
    ///
    /// Returns `None` if the octet announces the high tag number form,
    /// which we don’t support.
    pub const fn from_u8(octet: u8) -> Option<Self> {
        if octet & Self::LONG_FORM == Self::LONG_FORM {
            None
        }
        else {
            Some(Self(octet))
        }
    }

    /// Returns the encoded octet.
    pub const fn to_u8(self) -> u8 {
        self.0
    }

    /// Returns the tag for the identifier octet.
    pub const fn tag(self) -> Tag {
        Tag(self.0 & !Self::CONSTRUCTED_MASK)
    }

    /// Returns the class of the identifier octet.
    pub const fn class(self) -> Class {
        Class::from_u8(self.0)
    }

    /// Returns whether the value is a constructed value.
    pub const fn is_constructed(self) -> bool {
        self.0 & Self::CONSTRUCTED_MASK != 0
    }

    /// Returns the number of the tag.
    pub const fn number(self) -> u8 {
        self.tag().number()
    }

    /// Returns the label for the encoding form.
    pub const fn form_label(self) -> &'static str {
        if self.is_constructed() {
            "COMPOSED"
        }
        else {
            "PRIMITIVE"
        }
    }
}

impl fmt::Debug for Ident {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Ident({:#04x})", self.0)
    }
}


//------------ Class ---------------------------------------------------------

/// The class of a tag.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Class {
    Universal,
    Application,
    Context,
    Private,
}

impl Class {
    const fn from_u8(octet: u8) -> Self {
        match octet {
            0x00..=0x3F => Self::Universal,
            0x40..=0x7F => Self::Application,
            0x80..=0xBF => Self::Context,
            0xC0..=0xFF => Self::Private
        }
    }

    const fn into_u8(self) -> u8 {
        match self {
            Self::Universal => 0x00,
            Self::Application => 0x40,
            Self::Context => 0x80,
            Self::Private => 0xC0,
        }
    }

    /// Returns the label used in the text rendering.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Universal => "UNIVERSAL",
            Self::Application => "APPLICATION",
            Self::Context => "CONTEXT-SPECIFIC",
            Self::Private => "PRIVATE",
        }
    }
}


//============ Tests =========================================================
