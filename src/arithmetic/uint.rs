//! The [`Uint`] fixed-width unsigned big integer, together with aliases for
//! the widths common in elliptic-curve and pairing-based settings ([`U256`],
//! [`U381`] and so on).
//!
//! [`Uint`] deliberately implements only the operations the canonical
//! codecs consume: zeroing, the two constant-time in-place combinators used
//! by decimal parsing, the constant-divisor `div10` used by decimal
//! formatting, and constant-time equality. It is not a general arithmetic
//! library.

use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroize;

use crate::{
    arithmetic::{carrying_add, carrying_mul_add, Limb, Limbs, WideLimb},
    bitlen::{byte_len, words_required},
    ct::{SecretBool, SecretWord},
};

/// Stack-allocated unsigned integer of `B` bits held in `N` limbs.
///
/// `N` must equal `words_required(B, Limb::BITS)`; instantiating the type
/// with any other limb count fails to compile on first use. Use the
/// width aliases ([`U64`], [`U256`], …) or [`declare_num!`](macro@crate::declare_num)
/// instead of spelling `N` by hand.
#[derive(Copy, Clone, Zeroize)]
pub struct Uint<const B: usize, const N: usize> {
    pub(crate) limbs: Limbs<N>,
}

/// Declare a [`Uint`] alias for a bit width.
#[macro_export]
macro_rules! declare_num {
    ($num:ident, $bits:expr) => {
        #[doc = "Unsigned integer with "]
        #[doc = stringify!($bits)]
        #[doc = " bits size."]
        pub type $num = $crate::arithmetic::uint::Uint<
            $bits,
            {
                $crate::bitlen::words_required(
                    $bits,
                    $crate::arithmetic::Limb::BITS as usize,
                )
            },
        >;
    };
}

declare_num!(U32, 32);
declare_num!(U64, 64);
declare_num!(U128, 128);
declare_num!(U255, 255);
declare_num!(U256, 256);
declare_num!(U381, 381);
declare_num!(U384, 384);
declare_num!(U448, 448);
declare_num!(U512, 512);

impl<const B: usize, const N: usize> Uint<B, N> {
    const LIMB_COUNT_OK: () = assert!(
        N == words_required(B, Limb::BITS as usize),
        "limb count does not match the bit width"
    );

    /// The value `0`.
    pub const ZERO: Self = {
        let () = Self::LIMB_COUNT_OK;
        Self { limbs: [0; N] }
    };

    /// Width of the integer in bits.
    pub const BITS: usize = B;

    /// Length of the canonical byte encoding, `⌈B / 8⌉`.
    pub const BYTES: usize = byte_len(B);

    /// Number of limbs backing the integer.
    pub const NUM_LIMBS: usize = N;

    /// Create a new [`Uint`] from the provided `limbs` (constant).
    #[must_use]
    pub const fn new(limbs: Limbs<N>) -> Self {
        let () = Self::LIMB_COUNT_OK;
        Self { limbs }
    }

    /// Returns a reference to the inner [`Limbs`] array (constant).
    #[must_use]
    pub const fn as_limbs(&self) -> &Limbs<N> {
        &self.limbs
    }

    /// Sets `self` to zero.
    pub fn set_zero(&mut self) {
        self.limbs = [0; N];
    }

    /// Adds a single secret word to `self` in place, wrapping on overflow.
    ///
    /// The carry ripples through every limb unconditionally, so the running
    /// time is independent of the operand values.
    pub fn ct_add_assign_word(&mut self, value: SecretWord) {
        let mut carry = value.value();
        for limb in &mut self.limbs {
            (*limb, carry) = carrying_add(*limb, carry, 0);
        }
    }

    /// Multiplies `self` in place by a small public constant, wrapping on
    /// overflow.
    ///
    /// The multiplier is public; the limb values stay secret. Every limb is
    /// visited exactly once.
    pub fn ct_mul_assign_word(&mut self, multiplier: Limb) {
        let mut carry = 0;
        for limb in &mut self.limbs {
            (*limb, carry) = carrying_mul_add(*limb, multiplier, carry);
        }
    }

    /// Divides `self` in place by 10 and returns the remainder.
    ///
    /// Division by the literal 10 compiles to a multiply-by-reciprocal
    /// sequence, so the limb loop has no data-dependent control flow. The
    /// remainder is a public digit by the decimal formatting contract.
    #[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
    pub fn div10_assign(&mut self) -> u8 {
        let mut rem: Limb = 0;
        for limb in self.limbs.iter_mut().rev() {
            let wide = ((rem as WideLimb) << Limb::BITS) | *limb as WideLimb;
            *limb = (wide / 10) as Limb;
            rem = (wide % 10) as Limb;
        }
        rem as u8
    }

    /// Constant-time equality.
    #[must_use]
    pub fn ct_eq(&self, rhs: &Self) -> SecretBool {
        let mut acc = Choice::from(1);
        for (a, b) in self.limbs.iter().zip(rhs.limbs.iter()) {
            acc &= a.ct_eq(b);
        }
        SecretBool::from_choice(acc)
    }
}

impl<const B: usize, const N: usize> Default for Uint<B, N> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const B: usize, const N: usize> PartialEq for Uint<B, N> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).declassify()
    }
}

impl<const B: usize, const N: usize> Eq for Uint<B, N> {}
