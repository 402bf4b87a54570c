//! BER encoding to dotted notation
//!
//! Decoding runs through the fields in order, stopping at the first error:
//!
//! ```text
//! identifier -> length -> [joint first subidentifier, absolute only] -> subidentifiers -> done
//! ```

use crate::arc::OidArc;
use crate::ber::{check_length, parse_base128, parse_identifier, parse_length};
use crate::error::*;
use crate::hex::parse_hex;
use crate::oid::{Oid, OidKind};
use num_bigint::BigUint;
use tracing::{debug, trace};

/// Decode a complete BER-encoded OID or RELATIVE-OID
///
/// The length octets must announce exactly the number of content octets that follow.
///
/// ```rust
/// use oid_converter::decoder::decode_oid;
/// use oid_converter::oid::Oid;
///
/// let oid = decode_oid(&[0x06, 0x02, 0x88, 0x37]).expect("decoding failed");
/// assert_eq!(oid, Oid::absolute(&[2, 999]));
/// ```
pub fn decode_oid(bytes: &[u8]) -> Result<Oid, OidError> {
    parse_oid(bytes).map(|(_, oid)| oid).map_err(flatten)
}

/// Read hex text (plain, C array or C string) and decode it
///
/// See [`parse_hex`](../hex/fn.parse_hex.html) for the accepted text.
pub fn decode_hex(s: &str) -> Result<Oid, OidError> {
    let bytes = parse_hex(s)?;
    decode_oid(&bytes)
}

/// Parse a BER-encoded OID or RELATIVE-OID
///
/// Returns `Incomplete` if the input ends inside the length octets or inside a subidentifier.
pub fn parse_oid(i: &[u8]) -> OidResult {
    let (i, kind) = parse_identifier(i)?;
    let (i, len) = parse_length(i)?;
    let (i, _) = check_length(i, &len)?;
    trace!(?kind, %len, "parsed OID header");
    let (i, oid) = parse_oid_content(i, kind)?;
    debug!(oid = ?oid, "decoded OID");
    Ok((i, oid))
}

/// Parse the content octets of an OID of the given kind
///
/// All of `i` is consumed.
pub fn parse_oid_content(i: &[u8], kind: OidKind) -> OidResult {
    let mut arcs = Vec::new();
    let mut rem = i;
    if kind == OidKind::Absolute {
        let (i, joint) = parse_base128(rem)?;
        let (first, second) = split_joint(joint.into_value());
        arcs.push(first);
        arcs.push(second);
        rem = i;
    }
    while !rem.is_empty() {
        let (i, arc) = parse_base128(rem)?;
        arcs.push(arc);
        rem = i;
    }
    Ok((rem, Oid::new(kind, arcs)))
}

/// Split the first subidentifier of an absolute OID into its two arcs (X.690 8.19.4)
///
/// Values from 80 up all belong to root arc 2, whose second arc is unbounded.
fn split_joint(v: BigUint) -> (OidArc, OidArc) {
    let eighty = BigUint::from(80u32);
    if v < eighty {
        let forty = BigUint::from(40u32);
        (OidArc::new(&v / &forty), OidArc::new(&v % &forty))
    } else {
        (OidArc::from(2u32), OidArc::new(v - eighty))
    }
}
