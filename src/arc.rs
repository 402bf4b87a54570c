//! Arbitrary-precision OID arcs

use crate::error::OidError;
use nom::character::complete::digit1;
use nom::combinator::all_consuming;
use nom::IResult;
use num_bigint::BigUint;
use num_traits::{Num, ToPrimitive, Zero};
use std::fmt;
use std::str::FromStr;

/// One component of an Object Identifier
///
/// Arcs are non-negative integers of unbounded magnitude: UUID-based arcs (`2.25.x`) already need
/// 128 bits, and nothing in X.660 bounds them further.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OidArc(BigUint);

impl OidArc {
    /// Build an arc from its value
    pub fn new(value: BigUint) -> OidArc {
        OidArc(value)
    }

    /// Get the value of this arc
    pub fn value(&self) -> &BigUint {
        &self.0
    }

    /// Consume this arc, returning its value
    pub fn into_value(self) -> BigUint {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Try to get the value of this arc as a `u64`
    ///
    /// Returns `None` if the arc does not fit.
    pub fn to_u64(&self) -> Option<u64> {
        self.0.to_u64()
    }
}

impl From<u64> for OidArc {
    fn from(v: u64) -> Self {
        OidArc(BigUint::from(v))
    }
}

impl From<u32> for OidArc {
    fn from(v: u32) -> Self {
        OidArc(BigUint::from(v))
    }
}

impl From<BigUint> for OidArc {
    fn from(v: BigUint) -> Self {
        OidArc(v)
    }
}

impl FromStr for OidArc {
    type Err = OidError;

    /// Parse the decimal text form of an arc
    ///
    /// Only ASCII digits are accepted: no sign, no whitespace, no empty string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        all_consuming(parse_arc)(s)
            .map(|(_, arc)| arc)
            .map_err(|_| OidError::InvalidArc)
    }
}

impl fmt::Display for OidArc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Parse a decimal arc
pub(crate) fn parse_arc(i: &str) -> IResult<&str, OidArc, OidError> {
    let (rem, digits) = digit1(i)?;
    let value =
        BigUint::from_str_radix(digits, 10).map_err(|_| nom::Err::Error(OidError::InvalidArc))?;
    Ok((rem, OidArc(value)))
}
