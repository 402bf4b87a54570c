use crate::arc::OidArc;
use crate::error::*;
use nom::{Err, Needed};
use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

/// Append the base-128 encoding of `value` to `out` (X.690 8.19.2)
///
/// Groups of 7 bits are written most significant first, every octet but the last one having bit 8
/// set. The encoding is always minimal, so the first octet is never 0x80.
pub fn encode_base128(value: &BigUint, out: &mut Vec<u8>) {
    let mut v = value.clone();
    let mut groups = Vec::new();
    loop {
        let low = (&v % 128u32).to_u8().unwrap_or(0);
        groups.push(low);
        v /= 128u32;
        if v.is_zero() {
            break;
        }
    }
    // groups are collected least significant first
    let last = groups.len() - 1;
    out.extend(groups.iter().rev().enumerate().map(|(idx, &g)| {
        if idx == last {
            g
        } else {
            0x80 | g
        }
    }));
}

/// Read one base-128 subidentifier
///
/// A group starting with 0x80 is not minimal and rejected with `IllegalPadding`. If the input ends
/// before an octet with bit 8 cleared, `Incomplete` is returned.
pub fn parse_base128(i: &[u8]) -> OidResult<OidArc> {
    if i.is_empty() {
        return Err(Err::Incomplete(Needed::new(1)));
    }
    custom_check!(i, i[0] == 0x80, OidError::IllegalPadding)?;
    let mut acc = BigUint::zero();
    for (idx, &b) in i.iter().enumerate() {
        acc = acc * 128u32 + u32::from(b & 0x7f);
        if b & 0x80 == 0 {
            return Ok((&i[idx + 1..], OidArc::new(acc)));
        }
    }
    Err(Err::Incomplete(Needed::new(1)))
}
