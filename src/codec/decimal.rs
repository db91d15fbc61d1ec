//! Decimal text codec.
//!
//! Parsing runs in constant time with respect to the characters: the loop
//! visits every input position exactly once, evaluates both range
//! comparisons for every character, and folds validity into a running
//! [`SecretBool`] instead of exiting early. Only the up-front length check
//! branches, and it sees nothing but the public string length and bit
//! width.
//!
//! Formatting peels digits with the engine's constant-divisor `div10`; the
//! digit count is a public constant of the width, so leading zeros are
//! emitted rather than trimmed.

use alloc::{string::String, vec};

use zeroize::Zeroize;

use crate::{
    arithmetic::{uint::Uint, Limb},
    bitlen::{decimal_length, has_enough_bits_for_decimal},
    codec::error::ParseError,
    ct::{SecretBool, SecretWord},
};

impl<const B: usize, const N: usize> Uint<B, N> {
    /// Length of the decimal rendering of any `B`-bit integer.
    pub const DECIMAL_LENGTH: usize = decimal_length(B);

    /// Replaces `self` with the integer written in `s`, in constant time.
    ///
    /// Every character is processed regardless of validity; the returned
    /// [`SecretBool`] is true iff all of them were ASCII digits. On a false
    /// return the contents of `self` are unspecified and must be discarded.
    /// Inputs longer than the width can possibly accommodate are refused up
    /// front based only on their public length.
    ///
    /// # Example
    ///
    /// ```
    /// use bigint_codec::U256;
    ///
    /// let mut x = U256::ZERO;
    /// assert!(x.set_from_decimal("1193046").declassify());
    /// assert_eq!(x, U256::from_hex("0x123456").unwrap());
    /// ```
    #[must_use = "on a false result the destination holds garbage"]
    pub fn set_from_decimal(&mut self, s: &str) -> SecretBool {
        self.set_zero();
        if !has_enough_bits_for_decimal(B, s.len()) {
            return SecretBool::from(false);
        }

        let mut ok = SecretBool::from(true);
        let digits = s.as_bytes();
        for (i, &c) in digits.iter().enumerate() {
            let digit = SecretWord::from(c);
            ok &= digit.ct_ge(Limb::from(b'0'));
            ok &= digit.ct_le(Limb::from(b'9'));
            self.ct_add_assign_word(digit.wrapping_sub(SecretWord::from(b'0')));
            // The last digit enters at weight 1, so no trailing scale.
            if i != digits.len() - 1 {
                self.ct_mul_assign_word(10);
            }
        }
        ok
    }

    /// Parses a decimal string into a fresh integer.
    ///
    /// A convenience wrapper over [`Self::set_from_decimal`] that trades the
    /// branch-free result for a plain `Result`. The error is chosen from
    /// public facts only (input length, digit validity) and carries nothing
    /// derived from the input.
    ///
    /// # Errors
    ///
    /// * [`ParseError::InputTooLong`] if the length pre-check refuses `s`.
    /// * [`ParseError::InvalidDigit`] if any character is not an ASCII
    ///   digit.
    pub fn from_decimal(s: &str) -> Result<Self, ParseError> {
        if !has_enough_bits_for_decimal(B, s.len()) {
            return Err(ParseError::InputTooLong);
        }
        let mut out = Self::ZERO;
        if out.set_from_decimal(s).declassify() {
            Ok(out)
        } else {
            out.zeroize();
            Err(ParseError::InvalidDigit)
        }
    }

    /// Formats `self` as decimal text of exactly [`Self::DECIMAL_LENGTH`]
    /// characters, leading zeros included.
    ///
    /// The digit loop count is a public constant of the width and `div10`
    /// is constant-time, so the running time is independent of the value.
    #[must_use]
    #[allow(clippy::missing_panics_doc)] // the digit buffer is ASCII by construction
    pub fn to_decimal(&self) -> String {
        let mut scratch = *self;
        let mut digits = vec![0u8; Self::DECIMAL_LENGTH];
        for slot in digits.iter_mut().rev() {
            *slot = b'0' + scratch.div10_assign();
        }
        scratch.zeroize();
        String::from_utf8(digits).expect("decimal digits are ASCII")
    }
}

#[cfg(test)]
mod test {
    use alloc::string::String;

    use proptest::prelude::*;

    use super::*;
    use crate::arithmetic::uint::{U128, U256, U32, U64};

    #[test]
    fn parses_the_largest_256_bit_integer() {
        // 2^256 - 1.
        let s = "115792089237316195423570985008687907853269984665640564039457584007913129639935";
        assert_eq!(s.len(), U256::DECIMAL_LENGTH);

        let mut x = U256::ZERO;
        assert!(x.set_from_decimal(s).declassify());
        assert_eq!(x.to_hex(), alloc::format!("0x{}", "ff".repeat(32)));
        assert_eq!(x.to_decimal(), s);
    }

    #[test]
    fn rejects_non_digit_characters() {
        let mut x = U32::ZERO;
        assert!(!x.set_from_decimal("12A4").declassify());
        assert!(!x.set_from_decimal("12a4").declassify());
        assert!(!x.set_from_decimal(" 124").declassify());
        assert!(!x.set_from_decimal("12/4").declassify());
        assert!(!x.set_from_decimal("12:4").declassify());
        assert_eq!(U32::from_decimal("12A4"), Err(ParseError::InvalidDigit));
    }

    #[test]
    fn rejects_over_long_inputs_by_length_alone() {
        // 40 nines cannot fit in 128 bits, digits are never inspected.
        let mut x = U128::ZERO;
        assert!(!x.set_from_decimal(&"9".repeat(40)).declassify());
        assert_eq!(
            U128::from_decimal(&"9".repeat(40)),
            Err(ParseError::InputTooLong)
        );
        // Content is irrelevant to the pre-check.
        assert_eq!(
            U128::from_decimal(&"x".repeat(40)),
            Err(ParseError::InputTooLong)
        );
    }

    #[test]
    fn admits_full_width_strings() {
        let mut x = U256::ZERO;
        assert!(x
            .set_from_decimal(&"9".repeat(U256::DECIMAL_LENGTH))
            .declassify());
    }

    #[test]
    fn empty_input_parses_to_zero() {
        let mut x = U64::ZERO;
        assert!(x.set_from_decimal("").declassify());
        assert_eq!(x, U64::ZERO);
    }

    #[test]
    fn formats_with_leading_zeros() {
        assert_eq!(U64::from(12345u64).to_decimal(), "00000000000000012345");
        assert_eq!(U64::ZERO.to_decimal(), "0".repeat(20));
        assert_eq!(U256::from(1u64).to_decimal().len(), 78);
    }

    #[test]
    fn zero_width_formats_as_a_single_zero() {
        type U0 = Uint<0, 0>;
        assert_eq!(U0::ZERO.to_decimal(), "0");
    }

    #[test]
    fn roundtrip_left_pads_the_input() {
        proptest!(|(digits in "[0-9]{1,70}")| {
            let x = U256::from_decimal(&digits).unwrap();
            let mut expected = String::new();
            for _ in 0..(U256::DECIMAL_LENGTH - digits.len()) {
                expected.push('0');
            }
            expected.push_str(&digits);
            prop_assert_eq!(x.to_decimal(), expected);
        });
    }

    #[test]
    fn agrees_with_num_bigint() {
        use num_bigint::BigUint;

        proptest!(|(digits in "[0-9]{1,38}")| {
            let x = U128::from_decimal(&digits).unwrap();
            let oracle = BigUint::parse_bytes(digits.as_bytes(), 10).unwrap();
            let mut le = oracle.to_bytes_le();
            le.resize(U128::BYTES, 0);
            prop_assert_eq!(x.to_bytes(crate::codec::Endianness::Little), le);
        });
    }

    #[test]
    fn garbage_destination_is_discarded_by_the_wrapper() {
        assert_eq!(U64::from_decimal("1x3"), Err(ParseError::InvalidDigit));
        assert_eq!(U64::from_decimal("184467"), Ok(U64::from(184_467u64)));
    }
}
