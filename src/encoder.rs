//! Dotted notation to BER encoding

use crate::arc::OidArc;
use crate::ber::{encode_base128, encode_identifier, encode_length};
use crate::error::OidError;
use crate::oid::{Oid, OidKind};
use cookie_factory::bytes::be_u8;
use cookie_factory::combinator::slice;
use cookie_factory::gen_simple;
use cookie_factory::sequence::tuple;
use num_bigint::BigUint;
use tracing::debug;

/// Encode an OID: identifier octet, length octets and content octets
///
/// The content is fully built before the length is computed, so nothing is produced for an OID
/// that fails validation.
///
/// ```rust
/// use oid_converter::encoder::encode_oid;
/// use oid_converter::oid::Oid;
///
/// let bytes = encode_oid(&Oid::absolute(&[2, 999])).expect("encoding failed");
/// assert_eq!(bytes, vec![0x06, 0x02, 0x88, 0x37]);
/// ```
pub fn encode_oid(oid: &Oid) -> Result<Vec<u8>, OidError> {
    let content = encode_content(oid)?;
    let length = encode_length(content.len())?;
    let out = gen_simple(
        tuple((
            be_u8(encode_identifier(oid.kind())),
            slice(&length),
            slice(&content),
        )),
        Vec::with_capacity(1 + length.len() + content.len()),
    )?;
    debug!(oid = ?oid, len = out.len(), "encoded OID");
    Ok(out)
}

/// Parse the dotted notation and encode it
///
/// See [`Oid::parse_dotted`](../oid/struct.Oid.html#method.parse_dotted) for the accepted text.
pub fn encode_dotted(s: &str, default: OidKind) -> Result<Vec<u8>, OidError> {
    let oid = Oid::parse_dotted(s, default)?;
    encode_oid(&oid)
}

/// Encode the content octets of an OID (X.690 8.19 and 8.20)
pub fn encode_content(oid: &Oid) -> Result<Vec<u8>, OidError> {
    let mut content = Vec::new();
    match oid.kind() {
        OidKind::Relative => {
            for arc in oid.iter() {
                encode_base128(arc.value(), &mut content);
            }
        }
        OidKind::Absolute => {
            let arcs = oid.arcs();
            let joint = joint_subidentifier(arcs)?;
            encode_base128(&joint, &mut content);
            for arc in &arcs[2..] {
                encode_base128(arc.value(), &mut content);
            }
        }
    }
    Ok(content)
}

/// Combine the first two arcs of an absolute OID into `40 * X + Y` (X.690 8.19.4)
///
/// Checks run in arc order, so the error reported is the one for the first offending arc.
/// The result fits one octet except under root arc 2, where `Y` is unbounded.
fn joint_subidentifier(arcs: &[OidArc]) -> Result<BigUint, OidError> {
    let top = match arcs.get(0) {
        Some(arc) => arc.value(),
        None => return Err(OidError::MinimumDepthViolation),
    };
    if *top > BigUint::from(2u32) {
        return Err(OidError::TopArcOutOfRange);
    }
    let second = match arcs.get(1) {
        Some(arc) => arc.value(),
        None => return Err(OidError::MinimumDepthViolation),
    };
    if *top < BigUint::from(2u32) && *second > BigUint::from(39u32) {
        return Err(OidError::SecondArcOutOfRange);
    }
    Ok(top * 40u32 + second)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_joint() {
        assert_eq!(encode_oid(&Oid::absolute(&[0, 0])), Ok(vec![0x06, 0x01, 0x00]));
        assert_eq!(encode_oid(&Oid::absolute(&[1, 39])), Ok(vec![0x06, 0x01, 0x4f]));
        assert_eq!(encode_oid(&Oid::absolute(&[2, 0])), Ok(vec![0x06, 0x01, 0x50]));
        // last single-octet value under 2
        assert_eq!(encode_oid(&Oid::absolute(&[2, 47])), Ok(vec![0x06, 0x01, 0x7f]));
        assert_eq!(
            encode_oid(&Oid::absolute(&[2, 48])),
            Ok(vec![0x06, 0x02, 0x81, 0x00])
        );
        assert_eq!(
            encode_oid(&Oid::absolute(&[2, 999])),
            Ok(vec![0x06, 0x02, 0x88, 0x37])
        );
    }

    #[test]
    fn test_encode_relative() {
        assert_eq!(encode_oid(&Oid::relative(&[3])), Ok(vec![0x0d, 0x01, 0x03]));
        assert_eq!(
            encode_oid(&Oid::relative(&[8571, 3, 2])),
            Ok(vec![0x0d, 0x04, 0xc2, 0x7b, 0x03, 0x02])
        );
        // no joint encoding, no range limit on the first arcs
        assert_eq!(
            encode_oid(&Oid::relative(&[3, 40])),
            Ok(vec![0x0d, 0x02, 0x03, 0x28])
        );
        // tolerated: empty content
        assert_eq!(encode_oid(&Oid::relative(&[])), Ok(vec![0x0d, 0x00]));
    }

    #[test]
    fn test_encode_errors() {
        assert_eq!(
            encode_oid(&Oid::absolute(&[3, 1])),
            Err(OidError::TopArcOutOfRange)
        );
        assert_eq!(
            encode_oid(&Oid::absolute(&[3])),
            Err(OidError::TopArcOutOfRange)
        );
        assert_eq!(
            encode_oid(&Oid::absolute(&[1, 40])),
            Err(OidError::SecondArcOutOfRange)
        );
        assert_eq!(
            encode_oid(&Oid::absolute(&[0, 40, 1])),
            Err(OidError::SecondArcOutOfRange)
        );
        assert_eq!(
            encode_oid(&Oid::absolute(&[2])),
            Err(OidError::MinimumDepthViolation)
        );
        assert_eq!(
            encode_oid(&Oid::absolute(&[])),
            Err(OidError::MinimumDepthViolation)
        );
    }

    #[test]
    fn test_encode_dotted() {
        assert_eq!(
            encode_dotted("RELATIVE.3", OidKind::Absolute),
            Ok(vec![0x0d, 0x01, 0x03])
        );
        assert_eq!(
            encode_dotted("3.1", OidKind::Absolute),
            Err(OidError::TopArcOutOfRange)
        );
        assert_eq!(
            encode_dotted("3.1", OidKind::Relative),
            Ok(vec![0x0d, 0x02, 0x03, 0x01])
        );
        assert_eq!(encode_dotted("2.x", OidKind::Absolute), Err(OidError::InvalidArc));
    }

    #[test]
    fn test_encode_long_form_length() {
        // 130 arcs of value 1 under 1.3: 131 content octets
        let mut arcs = vec![1, 3];
        arcs.extend(std::iter::repeat(1).take(130));
        let bytes = encode_oid(&Oid::absolute(&arcs)).expect("encoding failed");
        assert_eq!(&bytes[..4], &[0x06, 0x81, 0x83, 0x2b]);
        assert_eq!(bytes.len(), 3 + 131);
    }
}
