use crate::error::*;
use nom::{Err, Needed};
use num_bigint::BigUint;
use num_traits::Zero;

/// Length octet of the indefinite form (X.690 8.1.3.6)
const INDEFINITE: u8 = 0x80;
/// Length octet reserved for future extensions (X.690 8.1.3.5)
const RESERVED: u8 = 0xff;

/// Read the length octets (X.690 8.1.3)
///
/// The value is returned as a `BigUint`: the long form can announce up to 126 length octets, which
/// is more than any native integer holds. Compare it with the actual content size using
/// [`check_length`](fn.check_length.html).
pub fn parse_length(i: &[u8]) -> OidResult<BigUint> {
    if i.is_empty() {
        return Err(Err::Incomplete(Needed::new(1)));
    }
    let b = i[0];
    let i = &i[1..];
    custom_check!(i, b == 0x00, OidError::ZeroLength)?;
    custom_check!(i, b == INDEFINITE, OidError::IndefiniteLength)?;
    custom_check!(i, b == RESERVED, OidError::ReservedLength)?;
    if b & 0x80 == 0 {
        // short form
        return Ok((i, BigUint::from(b)));
    }
    // long form: big-endian length in the next n octets
    let n = usize::from(b & 0x7f);
    if i.len() < n {
        return Err(Err::Incomplete(Needed::new(n - i.len())));
    }
    let len = i[..n]
        .iter()
        .fold(BigUint::from(0u32), |acc, &o| acc * 0x100u32 + u32::from(o));
    let i = &i[n..];
    // a zero length is invalid in both forms
    custom_check!(i, len.is_zero(), OidError::ZeroLength)?;
    Ok((i, len))
}

/// Check that the declared length is exactly the number of remaining octets
pub fn check_length<'a>(i: &'a [u8], len: &BigUint) -> OidResult<'a, ()> {
    if *len != BigUint::from(i.len()) {
        return Err(Err::Error(OidError::LengthMismatch {
            declared: len.to_string(),
            actual: i.len(),
        }));
    }
    Ok((i, ()))
}

/// Build the length octets for `len` content octets
///
/// Lengths up to 127 use the short form. Longer ones use the long form with the minimal number of
/// big-endian octets.
pub fn encode_length(len: usize) -> Result<Vec<u8>, OidError> {
    if len <= 0x7f {
        return Ok(vec![len as u8]);
    }
    let bytes = len.to_be_bytes();
    let skip = bytes.iter().take_while(|&&b| b == 0).count();
    let octets = &bytes[skip..];
    // 0xff would be read back as the reserved value
    if octets.len() >= 0x7f {
        return Err(OidError::LengthUnencodable);
    }
    let mut v = Vec::with_capacity(1 + octets.len());
    v.push(0x80 | octets.len() as u8);
    v.extend_from_slice(octets);
    Ok(v)
}
