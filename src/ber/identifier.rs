use crate::error::*;
use crate::oid::OidKind;
use core::fmt;
use nom::{Err, Needed};

/// Class of an identifier octet (bits 8 and 7)
///
/// Both OID types are UNIVERSAL, the other classes are only recognized to be rejected.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[repr(u8)]
pub enum Class {
    Universal = 0b00,
    Application = 0b01,
    ContextSpecific = 0b10,
    Private = 0b11,
}

impl Class {
    /// Class encoded in the two high bits of an identifier octet
    #[inline]
    pub fn of_octet(b: u8) -> Class {
        match b >> 6 {
            0b00 => Class::Universal,
            0b01 => Class::Application,
            0b10 => Class::ContextSpecific,
            _ => Class::Private,
        }
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Class::Universal => "UNIVERSAL",
            Class::Application => "APPLICATION",
            Class::ContextSpecific => "CONTEXT-SPECIFIC",
            Class::Private => "PRIVATE",
        };
        f.write_str(s)
    }
}

/// UNIVERSAL tag number (X.680 section 8.4)
///
/// Only the two OID types are understood here.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Tag(pub u8);

newtype_enum! {
impl debug Tag {
    Oid = 0x06,
    RelativeOid = 0x0d,
}
}

/// Bit 6 of the identifier octet
const CONSTRUCTED: u8 = 0b0010_0000;

/// Tag number field of the identifier octet; 0x1f announces a multi-octet tag number
const TAG_MASK: u8 = 0b0001_1111;

impl From<OidKind> for Tag {
    fn from(kind: OidKind) -> Self {
        match kind {
            OidKind::Absolute => Tag::Oid,
            OidKind::Relative => Tag::RelativeOid,
        }
    }
}

/// Build the identifier octet for an OID kind: UNIVERSAL, primitive
#[inline]
pub fn encode_identifier(kind: OidKind) -> u8 {
    ((Class::Universal as u8) << 6) | Tag::from(kind).0
}

/// Read the identifier octet, returning the kind of OID it announces
///
/// Checks are done in the order of the bits: class, then primitive/constructed, then tag number.
pub fn parse_identifier(i: &[u8]) -> OidResult<OidKind> {
    if i.is_empty() {
        return Err(Err::Incomplete(Needed::new(1)));
    }
    let b = i[0];
    custom_check!(i, Class::of_octet(b) != Class::Universal, OidError::InvalidClass)?;
    custom_check!(i, b & CONSTRUCTED != 0, OidError::NotPrimitive)?;
    let kind = match Tag(b & TAG_MASK) {
        Tag::Oid => OidKind::Absolute,
        Tag::RelativeOid => OidKind::Relative,
        _ => return Err(Err::Error(OidError::UnsupportedTag)),
    };
    Ok((&i[1..], kind))
}
