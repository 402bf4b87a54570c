//! Basic Encoding Rules (BER) primitives for OBJECT IDENTIFIER and RELATIVE-OID
//!
//! Only what both OID types need is implemented: the single identifier octet, the definite length
//! forms, and base-128 subidentifiers.

mod base128;
mod identifier;
mod length;

pub use crate::ber::base128::*;
pub use crate::ber::identifier::*;
pub use crate::ber::length::*;
