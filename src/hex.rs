//! Hex text input
//!
//! Encoded OIDs are usually given as text: plain hex (`06 02 88 37`), a C array literal
//! (`{ 0x06, 0x02, 0x88, 0x37 }`) or a C string literal (`"\x06\x02\x88\x37"`). All three are
//! accepted, separators and C notation are dropped before the digits are read.

use crate::error::{flatten, OidError};
use nom::branch::alt;
use nom::bytes::complete::{tag, tag_no_case};
use nom::character::complete::{anychar, one_of};
use nom::combinator::{map, value};
use nom::multi::many0;
use nom::IResult;

/// Characters ignored anywhere in hex input
const SEPARATORS: &str = " \t\r\n.:,{}\"";

fn hex_token(i: &str) -> IResult<&str, Option<char>, OidError> {
    alt((
        value(None, one_of(SEPARATORS)),
        value(None, tag("\\x")),
        value(None, tag_no_case("0x")),
        map(anychar, Some),
    ))(i)
}

/// Remove separators and C notation, keeping every other character
///
/// Characters that are not hex digits are kept so that they are reported by
/// [`parse_hex`](fn.parse_hex.html), after the length checks.
pub fn strip_hex_notation(s: &str) -> Result<Vec<char>, OidError> {
    let (_, tokens) = many0(hex_token)(s).map_err(flatten)?;
    Ok(tokens.into_iter().flatten().collect())
}

/// Read hex text into bytes
///
/// After [`strip_hex_notation`](fn.strip_hex_notation.html), the remaining characters must be an
/// even number (`OddLength`) of at least 4 (`TooShort`: an identifier and a length octet) hex
/// digits (`InvalidHexDigit`). Checks are done in that order.
pub fn parse_hex(s: &str) -> Result<Vec<u8>, OidError> {
    let digits = strip_hex_notation(s)?;
    if digits.len() % 2 != 0 {
        return Err(OidError::OddLength);
    }
    if digits.len() < 4 {
        return Err(OidError::TooShort);
    }
    digits
        .chunks(2)
        .map(|pair| match (pair[0].to_digit(16), pair[1].to_digit(16)) {
            (Some(hi), Some(lo)) => Ok((hi * 16 + lo) as u8),
            _ => Err(OidError::InvalidHexDigit),
        })
        .collect()
}
