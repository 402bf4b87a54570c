//! # OID converter
//!
//! Conversion of Object Identifiers between the dotted notation (`2.999.1`) and their Basic
//! Encoding Rules (BER [[X.690]]) encoding, in both directions, for both OBJECT IDENTIFIER and
//! RELATIVE-OID. Parsers are implemented with the [nom](https://github.com/Geal/nom) parser
//! combinator framework.
//!
//! Arcs have unbounded magnitude: they are stored as [`BigUint`](num_bigint::BigUint), so UUID
//! based OIDs like `2.25.329800735698586629295641978511506172918` are not truncated.
//!
//! # Encoding
//!
//! ```rust
//! use oid_converter::{encode_dotted, OidKind};
//!
//! let bytes = encode_dotted("2.999", OidKind::Absolute).expect("encoding failed");
//! assert_eq!(bytes, vec![0x06, 0x02, 0x88, 0x37]);
//!
//! // a prefix overrides the default kind
//! let bytes = encode_dotted("RELATIVE.3", OidKind::Absolute).expect("encoding failed");
//! assert_eq!(bytes, vec![0x0d, 0x01, 0x03]);
//! ```
//!
//! # Decoding
//!
//! ```rust
//! use oid_converter::{decode_hex, decode_oid, Oid};
//!
//! let oid = decode_oid(&[0x06, 0x02, 0x88, 0x37]).expect("decoding failed");
//! assert_eq!(oid, Oid::absolute(&[2, 999]));
//!
//! // hex text, plain or in C notation
//! let oid = decode_hex("{ 0x0D, 0x01, 0x03 }").expect("decoding failed");
//! assert_eq!(oid.labelled(), "RELATIVE OID 3");
//! ```
//!
//! All conversions return a [`Result`] with an [`OidError`](error/enum.OidError.html) naming the
//! precise rule that was violated. Errors are never partial: no bytes are returned for an OID that
//! cannot be encoded.
//!
//! # Notes
//!
//! - Decoding follows BER: long-form lengths need not be minimal. Subidentifiers must be minimal
//!   (no leading 0x80 octet, X.690 8.19.2), including the first one of an absolute OID.
//! - Under root arcs 0 and 1, the second arc is limited to 0..39. Under root arc 2 it is unbounded,
//!   so the first subidentifier of `2.999` spans two octets.
//!
//! # References
//!
//! - [[X.690]] ASN.1 encoding rules: Specification of Basic Encoding Rules (BER), Canonical
//!   Encoding Rules (CER) and Distinguished Encoding Rules (DER).
//!
//! [X.690]: https://www.itu.int/rec/T-REC-X.690/en "ASN.1 encoding rules: Specification of
//!   Basic Encoding Rules (BER), Canonical Encoding Rules (CER) and Distinguished Encoding Rules
//!   (DER)."

#![deny(/*missing_docs,*/unsafe_code,
        unstable_features,
        unused_import_braces, unused_qualifications)]

#[macro_use]
extern crate rusticata_macros;

pub mod arc;
pub mod ber;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod hex;
pub mod oid;
pub mod print;

pub use arc::OidArc;
pub use decoder::{decode_hex, decode_oid, parse_oid};
pub use encoder::{encode_dotted, encode_oid};
pub use error::OidError;
pub use oid::{Oid, OidKind};
