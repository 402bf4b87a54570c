//! Text output of encoded OIDs

use std::fmt;

/// Output style for encoded bytes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HexStyle {
    /// `06 02 88 37`
    Plain,
    /// `{ 0x06, 0x02, 0x88, 0x37 }`
    CArray,
    /// `"\x06\x02\x88\x37"`
    CString,
}

impl Default for HexStyle {
    fn default() -> Self {
        HexStyle::Plain
    }
}

/// Formatter for encoded bytes, see [`HexStyle`](enum.HexStyle.html)
///
/// ```rust
/// use oid_converter::print::{HexDisplay, HexStyle};
///
/// let bytes = [0x0d, 0x01, 0x03];
/// assert_eq!(HexDisplay::new(&bytes, HexStyle::CArray).to_string(), "{ 0x0D, 0x01, 0x03 }");
/// ```
pub struct HexDisplay<'a> {
    bytes: &'a [u8],
    style: HexStyle,
}

impl<'a> HexDisplay<'a> {
    pub fn new(bytes: &'a [u8], style: HexStyle) -> HexDisplay<'a> {
        HexDisplay { bytes, style }
    }
}

impl<'a> fmt::Display for HexDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.style {
            HexStyle::Plain => {
                for (idx, b) in self.bytes.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{:02X}", b)?;
                }
                Ok(())
            }
            HexStyle::CArray => {
                f.write_str("{ ")?;
                for (idx, b) in self.bytes.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "0x{:02X}", b)?;
                }
                f.write_str(" }")
            }
            HexStyle::CString => {
                f.write_str("\"")?;
                for b in self.bytes {
                    write!(f, "\\x{:02X}", b)?;
                }
                f.write_str("\"")
            }
        }
    }
}
