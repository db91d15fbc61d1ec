//! Hex text codec.
//!
//! Parsing accepts an optional `0x`/`0X` prefix, both digit cases and odd
//! digit counts. This path is variable-time: hex input is treated as public
//! (the prefix check alone already leaks its presence), so readable
//! match-based decoding is preferred over branch-free tricks. Formatting
//! always emits the full zero-padded width, `2 + 2·⌈B/8⌉` characters, so
//! output length reveals nothing about the value.

use alloc::{
    string::String,
    vec,
};
use core::fmt::{self, Debug, Display};

use zeroize::Zeroize;

use crate::{
    arithmetic::uint::Uint,
    codec::{error::ParseError, Endianness},
};

const fn decode_nibble(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}

const fn encode_nibble(nibble: u8) -> u8 {
    // '0'..'9' then 'a'..'f', computed instead of looked up so formatting
    // performs no value-indexed table accesses.
    b'0' + nibble + (nibble >= 10) as u8 * (b'a' - b'0' - 10)
}

impl<const B: usize, const N: usize> Uint<B, N> {
    /// Parses a `0x…` hex string into an integer.
    ///
    /// The prefix is optional and the digits are read big-endian: an odd
    /// digit count means an implicit leading `0` nibble. Shorter strings
    /// decode to smaller values; more than `2·⌈B/8⌉` digits is an error.
    ///
    /// # Errors
    ///
    /// * [`ParseError::InputTooLong`] if the digits cannot fit the width.
    /// * [`ParseError::InvalidDigit`] on any non-hex character.
    ///
    /// # Example
    ///
    /// ```
    /// use bigint_codec::U64;
    ///
    /// let x = U64::from_hex("0x2a").unwrap();
    /// assert_eq!(x, U64::from(42u64));
    /// assert_eq!(x, U64::from_hex("2A").unwrap());
    /// ```
    pub fn from_hex(s: &str) -> Result<Self, ParseError> {
        let digits = s.as_bytes();
        let digits = digits
            .strip_prefix(b"0x")
            .or_else(|| digits.strip_prefix(b"0X"))
            .unwrap_or(digits);
        if digits.len() > 2 * Self::BYTES {
            return Err(ParseError::InputTooLong);
        }

        let mut staging = vec![0u8; Self::BYTES];
        let mut out_idx = staging.len();
        let mut low_nibble = true;
        for &digit in digits.iter().rev() {
            let Some(value) = decode_nibble(digit) else {
                staging.zeroize();
                return Err(ParseError::InvalidDigit);
            };
            if low_nibble {
                out_idx -= 1;
                staging[out_idx] = value;
            } else {
                staging[out_idx] |= value << 4;
            }
            low_nibble = !low_nibble;
        }

        let mut out = Self::ZERO;
        out.set_from_bytes(&staging, Endianness::Big);
        staging.zeroize();
        Ok(out)
    }

    /// Formats `self` as a canonical lower-case `0x…` hex string.
    ///
    /// The output is always `2 + 2·⌈B/8⌉` characters; leading zeros are
    /// kept, so the length carries no information about the value.
    #[must_use]
    pub fn to_hex(&self) -> String {
        let mut out = String::with_capacity(2 + 2 * Self::BYTES);
        self.append_hex(&mut out, Endianness::Big);
        out
    }

    /// Appends the hex rendering of `self` in the given byte order to `out`.
    pub fn append_hex(&self, out: &mut String, endianness: Endianness) {
        let mut staging = vec![0u8; Self::BYTES];
        self.write_bytes(&mut staging, endianness);
        out.push_str("0x");
        for &byte in &staging {
            out.push(char::from(encode_nibble(byte >> 4)));
            out.push(char::from(encode_nibble(byte & 0x0f)));
        }
        staging.zeroize();
    }
}

impl<const B: usize, const N: usize> Display for Uint<B, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl<const B: usize, const N: usize> Debug for Uint<B, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uint<{B}>({})", self.to_hex())
    }
}
