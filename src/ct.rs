//! Branch-free secret value types.
//!
//! [`SecretWord`] and [`SecretBool`] tag values derived from potentially
//! secret input. The only operations they expose are constant-time:
//! bitwise combination, comparisons against public bounds built on the
//! [`subtle`] traits, and wrapping arithmetic. Neither type implements
//! `PartialOrd`, and [`SecretWord`] implements no equality at all, so the
//! type system keeps tagged values out of variable-time comparisons.
//!
//! Crossing back into plain `bool` is an explicit, deliberately noisy step:
//! [`SecretBool::declassify`].

use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

use subtle::{Choice, ConstantTimeEq, ConstantTimeGreater};
use zeroize::Zeroize;

use crate::arithmetic::Limb;

/// A limb-sized value tagged as secret.
#[derive(Clone, Copy, Zeroize)]
pub struct SecretWord(Limb);

impl SecretWord {
    /// Wraps a raw limb value.
    #[must_use]
    pub const fn new(value: Limb) -> Self {
        Self(value)
    }

    /// Returns the raw limb value, dropping the secret tag.
    pub(crate) const fn value(self) -> Limb {
        self.0
    }

    /// Constant-time `self >= bound` for a public bound.
    #[must_use]
    pub fn ct_ge(self, bound: Limb) -> SecretBool {
        SecretBool(!bound.ct_gt(&self.0))
    }

    /// Constant-time `self <= bound` for a public bound.
    #[must_use]
    pub fn ct_le(self, bound: Limb) -> SecretBool {
        SecretBool(!self.0.ct_gt(&bound))
    }

    /// Constant-time `self == bound` for a public bound.
    #[must_use]
    pub fn ct_eq(self, bound: Limb) -> SecretBool {
        SecretBool(self.0.ct_eq(&bound))
    }

    /// Wrapping subtraction.
    #[must_use]
    pub const fn wrapping_sub(self, rhs: Self) -> Self {
        Self(self.0.wrapping_sub(rhs.0))
    }
}

impl From<u8> for SecretWord {
    fn from(byte: u8) -> Self {
        Self(Limb::from(byte))
    }
}

/// A branch-free boolean.
#[derive(Clone, Copy)]
pub struct SecretBool(Choice);

impl SecretBool {
    pub(crate) fn from_choice(choice: Choice) -> Self {
        Self(choice)
    }

    /// Converts to a plain `bool`.
    ///
    /// This is the single escape hatch out of the branch-free world; call it
    /// only once the value is allowed to influence control flow.
    #[must_use]
    pub fn declassify(self) -> bool {
        self.0.into()
    }
}

impl From<bool> for SecretBool {
    fn from(value: bool) -> Self {
        Self(Choice::from(u8::from(value)))
    }
}

impl BitAnd for SecretBool {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self(self.0 & rhs.0)
    }
}

impl BitAndAssign for SecretBool {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl BitOr for SecretBool {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for SecretBool {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl Not for SecretBool {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self(!self.0)
    }
}
