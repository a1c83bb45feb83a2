//! Fixed-size account addresses.
//!
//! An address is exactly 16 raw bytes. On the wire it is written without a
//! length prefix.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;
use crate::limits::ADDRESS_LENGTH;

/// A 16-byte account address.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Address([u8; ADDRESS_LENGTH]);

impl Address {
    /// The all-zero address.
    pub const ZERO: Address = Address([0u8; ADDRESS_LENGTH]);

    /// `0x1`, the address that hosts the core modules.
    pub const ONE: Address = Address::from_u8_suffix(1);

    /// Creates an address from its raw bytes.
    pub const fn new(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }

    const fn from_u8_suffix(last: u8) -> Self {
        let mut bytes = [0u8; ADDRESS_LENGTH];
        bytes[ADDRESS_LENGTH - 1] = last;
        Self(bytes)
    }

    /// Creates an address from a slice, which must be exactly 16 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, ValueError> {
        if bytes.len() != ADDRESS_LENGTH {
            return Err(ValueError::InvalidLength {
                what: "address",
                expected: ADDRESS_LENGTH,
                actual: bytes.len(),
            });
        }
        let mut out = [0u8; ADDRESS_LENGTH];
        out.copy_from_slice(bytes);
        Ok(Self(out))
    }

    /// Parses a `0x`-prefixed hex literal. Short forms such as `0x1` are
    /// left-padded with zeros.
    pub fn from_hex_literal(literal: &str) -> Result<Self, ValueError> {
        let digits = literal.strip_prefix("0x").ok_or_else(|| ValueError::InvalidHex {
            input: literal.to_string(),
        })?;
        Self::from_hex_digits(digits, literal)
    }

    /// Parses hex digits (with or without `0x`), left-padding short input.
    pub fn from_hex(s: &str) -> Result<Self, ValueError> {
        Self::from_hex_digits(s.strip_prefix("0x").unwrap_or(s), s)
    }

    fn from_hex_digits(digits: &str, input: &str) -> Result<Self, ValueError> {
        let invalid = || ValueError::InvalidHex {
            input: input.to_string(),
        };
        if digits.is_empty() {
            return Err(invalid());
        }
        if digits.len() > ADDRESS_LENGTH * 2 {
            return Err(ValueError::InvalidLength {
                what: "address",
                expected: ADDRESS_LENGTH,
                actual: digits.len().div_ceil(2),
            });
        }

        let mut padded = [b'0'; ADDRESS_LENGTH * 2];
        padded[ADDRESS_LENGTH * 2 - digits.len()..].copy_from_slice(digits.as_bytes());

        let mut bytes = [0u8; ADDRESS_LENGTH];
        for (i, pair) in padded.chunks_exact(2).enumerate() {
            let hi = hex_digit(pair[0]).ok_or_else(invalid)?;
            let lo = hex_digit(pair[1]).ok_or_else(invalid)?;
            bytes[i] = (hi << 4) | lo;
        }
        Ok(Self(bytes))
    }

    /// Returns the raw bytes.
    pub fn as_bytes(&self) -> &[u8; ADDRESS_LENGTH] {
        &self.0
    }

    /// Consumes the address, returning the raw bytes.
    pub fn into_bytes(self) -> [u8; ADDRESS_LENGTH] {
        self.0
    }

    /// Formats as 32 lowercase hex digits, no prefix.
    pub fn to_hex(&self) -> String {
        let mut s = String::with_capacity(ADDRESS_LENGTH * 2);
        for byte in &self.0 {
            s.push_str(&format!("{:02x}", byte));
        }
        s
    }

    /// Formats as a `0x` literal with leading zeros stripped (`0x1`).
    pub fn to_hex_literal(&self) -> String {
        let hex = self.to_hex();
        let trimmed = hex.trim_start_matches('0');
        if trimmed.is_empty() {
            "0x0".to_string()
        } else {
            format!("0x{}", trimmed)
        }
    }
}

fn hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl From<[u8; ADDRESS_LENGTH]> for Address {
    fn from(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for Address {
    type Error = ValueError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(bytes)
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for Address {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.to_hex())
    }
}

impl fmt::LowerHex for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_hex_literal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_is_fifteen_zeros_then_one() {
        let mut expected = [0u8; 16];
        expected[15] = 1;
        assert_eq!(Address::ONE.into_bytes(), expected);
        assert_eq!(Address::ONE.to_hex_literal(), "0x1");
        assert_eq!(Address::ZERO.to_hex_literal(), "0x0");
    }

    #[test]
    fn test_from_slice_length() {
        assert!(Address::from_slice(&[0u8; 16]).is_ok());
        assert_eq!(
            Address::from_slice(&[0u8; 15]),
            Err(ValueError::InvalidLength {
                what: "address",
                expected: 16,
                actual: 15,
            })
        );
        assert!(matches!(
            Address::from_slice(&[0u8; 17]),
            Err(ValueError::InvalidLength { actual: 17, .. })
        ));
    }

    #[test]
    fn test_hex_roundtrip() {
        let addr = Address::new([
            0x55, 0x0e, 0x84, 0x00, 0xe2, 0x9b, 0x41, 0xd4, 0xa7, 0x16, 0x44, 0x66, 0x55, 0x44,
            0x00, 0x00,
        ]);
        let formatted = addr.to_string();
        assert_eq!(formatted, "0x550e8400e29b41d4a716446655440000");
        assert_eq!(formatted.parse::<Address>().unwrap(), addr);
        assert_eq!(Address::from_hex(&addr.to_hex()).unwrap(), addr);
        assert_eq!(format!("{:#x}", addr), formatted);
    }

    #[test]
    fn test_short_literal() {
        assert_eq!(Address::from_hex_literal("0x1").unwrap(), Address::ONE);
        assert_eq!(Address::from_hex_literal("0x01").unwrap(), Address::ONE);
        assert!(Address::from_hex_literal("1").is_err());
        assert!(Address::from_hex_literal("0x").is_err());
        assert!(Address::from_hex_literal("0xzz").is_err());
    }

    #[test]
    fn test_too_long_literal() {
        let long = format!("0x{}", "1".repeat(34));
        assert!(matches!(
            Address::from_hex_literal(&long),
            Err(ValueError::InvalidLength { actual: 17, .. })
        ));
    }
}
