//! Error type and constants

use nom::error::{ErrorKind, ParseError};
use nom::IResult;
use std::error::Error;
use std::fmt;

/// Holds the result of parsing functions
///
/// `O` is the output type, and defaults to an [`Oid`](../oid/struct.Oid.html).
///
/// Note that this type is also a `Result`, so usual functions (`map`, `unwrap` etc.) are available.
pub type OidResult<'a, O = crate::oid::Oid> = IResult<&'a [u8], O, OidError>;

/// Error for OID conversion
///
/// Every variant is a deterministic, input-dependent failure: retrying the same conversion always
/// fails the same way.
#[derive(Clone, Debug, PartialEq)]
pub enum OidError {
    /// An arc of the dotted notation is not a non-negative decimal number
    InvalidArc,

    /// Hex input contains a character that is not a hex digit
    InvalidHexDigit,
    /// Hex input has an odd number of digits
    OddLength,
    /// Hex input is shorter than an identifier octet and a length octet
    TooShort,

    /// Identifier octet is not of the UNIVERSAL class
    InvalidClass,
    /// Identifier octet has the constructed bit set
    NotPrimitive,
    /// Tag number is neither OBJECT IDENTIFIER (0x06) nor RELATIVE-OID (0x0D)
    UnsupportedTag,

    /// Length octet 0x80 (indefinite form) is invalid for primitive encodings
    IndefiniteLength,
    /// Length octet 0xFF is reserved (X.690 8.1.3.5)
    ReservedLength,
    /// Length octet 0x00: an OID has at least one content octet
    ZeroLength,
    /// Declared length does not match the number of content octets
    LengthMismatch {
        /// Length announced by the length octets
        declared: String,
        /// Number of content octets actually present
        actual: usize,
    },

    /// Subidentifier starts with a 0x80 octet (X.690 8.19.2)
    IllegalPadding,
    /// Content ends inside a subidentifier, or length octets are truncated
    MalformedEncoding,

    /// First arc of an absolute OID is greater than 2
    TopArcOutOfRange,
    /// Second arc is greater than 39 under root arcs 0 and 1
    SecondArcOutOfRange,
    /// Absolute OIDs have at least two arcs
    MinimumDepthViolation,
    /// Content is too long for its length to be encoded
    LengthUnencodable,

    /// Serializer failed while writing the encoding
    Serialize,

    NomError(ErrorKind),
}

impl OidError {
    /// Stable process exit code for this error
    ///
    /// Every condition maps to its own code, so that scripts wrapping the command line tool can
    /// tell them apart.
    pub fn exit_code(&self) -> i32 {
        match self {
            OidError::InvalidHexDigit => 2,
            OidError::LengthMismatch { .. } => 3,
            OidError::MalformedEncoding => 4,
            OidError::TopArcOutOfRange => 5,
            OidError::InvalidClass => 6,
            OidError::IndefiniteLength => 7,
            OidError::LengthUnencodable => 8,
            OidError::Serialize => 9,
            OidError::InvalidArc => 10,
            // 11 is reserved for unreadable input files
            OidError::OddLength => 12,
            OidError::TooShort => 13,
            OidError::IllegalPadding => 14,
            OidError::SecondArcOutOfRange => 15,
            OidError::MinimumDepthViolation => 16,
            OidError::NotPrimitive => 17,
            OidError::UnsupportedTag => 18,
            OidError::ReservedLength => 19,
            OidError::ZeroLength => 20,
            OidError::NomError(_) => 21,
        }
    }
}

impl fmt::Display for OidError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OidError::InvalidArc => f.write_str("Arcs must be non-negative decimal numbers"),
            OidError::InvalidHexDigit => f.write_str("Must have hex digits only"),
            OidError::OddLength => f.write_str("Encoded OID must have even number of hex digits"),
            OidError::TooShort => f.write_str("Encoded OID must have at least two bytes"),
            OidError::InvalidClass => {
                f.write_str("The OID tags are only defined as UNIVERSAL class tags")
            }
            OidError::NotPrimitive => f.write_str("OIDs must be primitive, not constructed"),
            OidError::UnsupportedTag => f.write_str(
                "The tag number is neither an absolute OID (0x06) nor a relative OID (0x0D)",
            ),
            OidError::IndefiniteLength => f.write_str(
                "Length value 0x80 is invalid (\"indefinite length\") for primitive types",
            ),
            OidError::ReservedLength => {
                f.write_str("Length value 0xFF is reserved for further extensions")
            }
            OidError::ZeroLength => f.write_str("Length value 0x00 is invalid for an OID"),
            OidError::LengthMismatch { declared, actual } => write!(
                f,
                "Invalid length ({} declared, but {} content bytes present)",
                declared, actual
            ),
            OidError::IllegalPadding => f.write_str(
                "Encoding error. Illegal 0x80 paddings. (See Rec. ITU-T X.690, clause 8.19.2)",
            ),
            OidError::MalformedEncoding => {
                f.write_str("Encoding error. The OID is not constructed properly")
            }
            OidError::TopArcOutOfRange => {
                f.write_str("Encoding error. The top arc is limited to 0, 1 and 2")
            }
            OidError::SecondArcOutOfRange => f.write_str(
                "Encoding error. The second arc is limited to 0..39 for root arcs 0 and 1",
            ),
            OidError::MinimumDepthViolation => f.write_str(
                "Encoding error. The minimum depth of an encodeable absolute OID is 2 (e.g. 2.999)",
            ),
            OidError::LengthUnencodable => f.write_str("The length cannot be encoded"),
            OidError::Serialize => f.write_str("Serialization failed"),
            OidError::NomError(kind) => write!(f, "Parser error: {:?}", kind),
        }
    }
}

impl Error for OidError {}

impl<I> ParseError<I> for OidError {
    fn from_error_kind(_input: I, kind: ErrorKind) -> Self {
        OidError::NomError(kind)
    }
    fn append(_input: I, kind: ErrorKind, _other: Self) -> Self {
        OidError::NomError(kind)
    }
}

impl From<cookie_factory::GenError> for OidError {
    fn from(_e: cookie_factory::GenError) -> Self {
        OidError::Serialize
    }
}

/// Flatten a nom error into an `OidError`
///
/// `Incomplete` means the input ended in the middle of a field, which is a malformed encoding
/// once the whole input has been provided.
pub(crate) fn flatten(e: nom::Err<OidError>) -> OidError {
    match e {
        nom::Err::Error(e) | nom::Err::Failure(e) => e,
        nom::Err::Incomplete(_) => OidError::MalformedEncoding,
    }
}
