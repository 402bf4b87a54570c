//! Object ID (OID) representations.
//!
//! An [`Oid`](struct.Oid.html) is an ordered sequence of arcs, tagged as absolute
//! (OBJECT IDENTIFIER) or relative (RELATIVE-OID). No range rule is enforced when building one:
//! the encoder checks them, so that text like `3.1` can be parsed and then rejected with a precise
//! error.

use crate::arc::{parse_arc, OidArc};
use crate::error::OidError;
use nom::branch::alt;
use nom::bytes::complete::tag_no_case;
use nom::character::complete::char;
use nom::combinator::{all_consuming, opt, value};
use nom::multi::separated_list1;
use nom::IResult;
use std::fmt;
use std::slice;

/// Kind of OID, selected by the UNIVERSAL tag number
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OidKind {
    /// OBJECT IDENTIFIER, tag 0x06: the first two arcs are encoded jointly
    Absolute,
    /// RELATIVE-OID, tag 0x0D: every arc is encoded on its own
    Relative,
}

impl fmt::Display for OidKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OidKind::Absolute => f.write_str("ABSOLUTE"),
            OidKind::Relative => f.write_str("RELATIVE"),
        }
    }
}

/// Object ID (OID) representation
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Oid {
    kind: OidKind,
    arcs: Vec<OidArc>,
}

impl Oid {
    /// Build an OID from its kind and arcs
    pub fn new(kind: OidKind, arcs: Vec<OidArc>) -> Oid {
        Oid { kind, arcs }
    }

    /// Build an absolute OID from `u64` arcs
    pub fn absolute(s: &[u64]) -> Oid {
        Oid::new(OidKind::Absolute, s.iter().map(|&a| OidArc::from(a)).collect())
    }

    /// Build a relative OID from `u64` arcs
    pub fn relative(s: &[u64]) -> Oid {
        Oid::new(OidKind::Relative, s.iter().map(|&a| OidArc::from(a)).collect())
    }

    /// Parse the dotted notation, e.g. `2.999.1` or `RELATIVE.3.8571`
    ///
    /// A case-insensitive `ABSOLUTE.` or `RELATIVE.` prefix selects the kind, otherwise `default` is
    /// used. Leading and trailing whitespace is ignored.
    pub fn parse_dotted(s: &str, default: OidKind) -> Result<Oid, OidError> {
        all_consuming(|i| parse_dotted(i, default))(s.trim())
            .map(|(_, oid)| oid)
            .map_err(|_| OidError::InvalidArc)
    }

    pub fn kind(&self) -> OidKind {
        self.kind
    }

    pub fn is_relative(&self) -> bool {
        self.kind == OidKind::Relative
    }

    pub fn arcs(&self) -> &[OidArc] {
        &self.arcs
    }

    pub fn iter(&self) -> slice::Iter<'_, OidArc> {
        self.arcs.iter()
    }

    pub fn len(&self) -> usize {
        self.arcs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }

    /// Return a copy of this OID with an arc appended
    pub fn child<A: Into<OidArc>>(&self, arc: A) -> Oid {
        let mut arcs = self.arcs.clone();
        arcs.push(arc.into());
        Oid::new(self.kind, arcs)
    }

    /// Build the dotted notation (without label)
    pub fn to_id_string(&self) -> String {
        let mut s = String::new();
        for (idx, arc) in self.arcs.iter().enumerate() {
            if idx > 0 {
                s.push('.');
            }
            s += &arc.to_string();
        }
        s
    }

    /// Render the OID with its kind, as in `ABSOLUTE OID 2.999`
    pub fn labelled(&self) -> String {
        format!("{} OID {}", self.kind, self.to_id_string())
    }

    /// Encode this OID, see [`encode_oid`](../encoder/fn.encode_oid.html)
    pub fn to_ber(&self) -> Result<Vec<u8>, OidError> {
        crate::encoder::encode_oid(self)
    }

    /// Decode an OID, see [`decode_oid`](../decoder/fn.decode_oid.html)
    pub fn from_ber(bytes: &[u8]) -> Result<Oid, OidError> {
        crate::decoder::decode_oid(bytes)
    }
}

impl fmt::Display for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_id_string())
    }
}

impl fmt::Debug for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            OidKind::Absolute => write!(f, "OID({})", self.to_id_string()),
            OidKind::Relative => write!(f, "RelativeOID({})", self.to_id_string()),
        }
    }
}

fn parse_kind_prefix(i: &str) -> IResult<&str, Option<OidKind>, OidError> {
    opt(alt((
        value(OidKind::Absolute, tag_no_case("ABSOLUTE.")),
        value(OidKind::Relative, tag_no_case("RELATIVE.")),
    )))(i)
}

fn parse_dotted(i: &str, default: OidKind) -> IResult<&str, Oid, OidError> {
    let (i, kind) = parse_kind_prefix(i)?;
    let (i, arcs) = separated_list1(char('.'), parse_arc)(i)?;
    Ok((i, Oid::new(kind.unwrap_or(default), arcs)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;

    #[test]
    fn test_oid_fmt() {
        let oid = Oid::absolute(&[1, 2, 840, 113_549, 1, 1, 5]);
        assert_eq!(format!("{}", oid), "1.2.840.113549.1.1.5".to_owned());
        assert_eq!(format!("{:?}", oid), "OID(1.2.840.113549.1.1.5)".to_owned());
        let rel = Oid::relative(&[8571, 3, 2]);
        assert_eq!(format!("{:?}", rel), "RelativeOID(8571.3.2)".to_owned());
        assert_eq!(rel.labelled(), "RELATIVE OID 8571.3.2");
    }

    #[test]
    fn test_parse_dotted() {
        assert_eq!(
            Oid::parse_dotted("2.999.1", OidKind::Absolute),
            Ok(Oid::absolute(&[2, 999, 1]))
        );
        assert_eq!(
            Oid::parse_dotted("2.999.1", OidKind::Relative),
            Ok(Oid::relative(&[2, 999, 1]))
        );
        assert_eq!(
            Oid::parse_dotted("RELATIVE.3.8571", OidKind::Absolute),
            Ok(Oid::relative(&[3, 8571]))
        );
        assert_eq!(
            Oid::parse_dotted("absolute.2.999", OidKind::Relative),
            Ok(Oid::absolute(&[2, 999]))
        );
        assert_eq!(
            Oid::parse_dotted(" 1.3.6.1\n", OidKind::Absolute),
            Ok(Oid::absolute(&[1, 3, 6, 1]))
        );
    }

    #[test]
    fn test_parse_dotted_bigint() {
        let oid = Oid::parse_dotted(
            "2.25.329800735698586629295641978511506172918",
            OidKind::Absolute,
        )
        .expect("parsing failed");
        let expected: BigUint = "329800735698586629295641978511506172918"
            .parse()
            .expect("bigint");
        assert_eq!(oid.arcs()[2].value(), &expected);
    }

    #[test]
    fn test_parse_dotted_invalid() {
        for s in &[
            "", ".2.999", "2.999.", "2..999", "2.9a9", "-0.0", "x", "RELATIVE.", "ABSOLUTE",
            "2 999",
        ] {
            assert_eq!(
                Oid::parse_dotted(s, OidKind::Absolute),
                Err(OidError::InvalidArc),
                "input {:?}",
                s
            );
        }
    }

    #[test]
    fn test_oid_child() {
        let oid = Oid::absolute(&[1, 3, 6, 1]);
        assert_eq!(oid.child(4u64), Oid::absolute(&[1, 3, 6, 1, 4]));
        assert_eq!(oid.len(), 4);
        assert!(!oid.is_relative());
    }
}
