//! Canonical encodings of [`Uint`]: octet strings in either endianness,
//! `0x…` hex text and decimal text.
//!
//! The byte-oriented entry points below are allocation-free and dispatch to
//! the repacker in [`bytes`] at the full limb width. The text codecs live in
//! [`hex`] and [`decimal`].

pub mod bytes;
pub mod decimal;
pub mod error;
pub mod hex;

use alloc::{vec, vec::Vec};

use crate::arithmetic::{uint::Uint, Limb};

/// Byte order of a canonical octet string.
///
/// Endianness is a property of an encoding, not of an integer; every entry
/// point taking bytes takes one of these alongside.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endianness {
    /// Least significant byte first.
    Little,
    /// Most significant byte first.
    Big,
}

impl<const B: usize, const N: usize> Uint<B, N> {
    /// Replaces `self` with the integer encoded by `bytes`.
    ///
    /// A source shorter than [`Self::BYTES`] is an encoding of a small
    /// value; a longer one has its extra most-significant bytes ignored.
    /// For a zero-width integer this is a no-op.
    pub fn set_from_bytes(&mut self, bytes: &[u8], endianness: Endianness) {
        match endianness {
            Endianness::Little => bytes::unpack_le::<{ Limb::BITS }>(&mut self.limbs, bytes),
            Endianness::Big => bytes::unpack_be::<{ Limb::BITS }>(&mut self.limbs, bytes),
        }
    }

    /// Returns the integer encoded by `bytes`.
    #[must_use]
    pub fn from_bytes(bytes: &[u8], endianness: Endianness) -> Self {
        let mut out = Self::ZERO;
        out.set_from_bytes(bytes, endianness);
        out
    }

    /// Writes the canonical encoding of `self` into `dst`.
    ///
    /// A destination longer than [`Self::BYTES`] is padded with zero bytes
    /// on the most significant side: the high indices for little-endian,
    /// the low indices for big-endian.
    pub fn write_bytes(&self, dst: &mut [u8], endianness: Endianness) {
        debug_assert!(
            dst.len() >= Self::BYTES,
            "destination shorter than the canonical byte length"
        );
        match endianness {
            Endianness::Little => bytes::pack_le::<{ Limb::BITS }>(dst, &self.limbs),
            Endianness::Big => bytes::pack_be::<{ Limb::BITS }>(dst, &self.limbs),
        }
    }

    /// Returns the canonical encoding of `self`, [`Self::BYTES`] bytes long.
    #[must_use]
    pub fn to_bytes(&self, endianness: Endianness) -> Vec<u8> {
        let mut out = vec![0u8; Self::BYTES];
        self.write_bytes(&mut out, endianness);
        out
    }

    /// Replaces `self` with the value of a public machine scalar.
    ///
    /// The scalar's in-memory bytes are reinterpreted in host byte order;
    /// no constant-time contract applies here.
    pub fn set_from_uint(&mut self, value: u64) {
        #[cfg(target_endian = "little")]
        self.set_from_bytes(&value.to_ne_bytes(), Endianness::Little);
        #[cfg(target_endian = "big")]
        self.set_from_bytes(&value.to_ne_bytes(), Endianness::Big);
    }

    /// Replaces `self` with the value of a public `u128` scalar.
    ///
    /// See [`Self::set_from_uint`].
    pub fn set_from_u128(&mut self, value: u128) {
        #[cfg(target_endian = "little")]
        self.set_from_bytes(&value.to_ne_bytes(), Endianness::Little);
        #[cfg(target_endian = "big")]
        self.set_from_bytes(&value.to_ne_bytes(), Endianness::Big);
    }
}

/// `From` conversions for public machine scalars.
macro_rules! impl_from_primitive {
    ($int:ty) => {
        impl<const B: usize, const N: usize> From<$int> for Uint<B, N> {
            #[inline]
            #[allow(clippy::cast_lossless, clippy::unnecessary_cast)]
            fn from(value: $int) -> Self {
                let mut out = Self::ZERO;
                out.set_from_uint(value as u64);
                out
            }
        }
    };
}

impl_from_primitive!(u8);
impl_from_primitive!(u16);
impl_from_primitive!(u32);
impl_from_primitive!(u64);
impl_from_primitive!(usize);

impl<const B: usize, const N: usize> From<u128> for Uint<B, N> {
    #[inline]
    fn from(value: u128) -> Self {
        let mut out = Self::ZERO;
        out.set_from_u128(value);
        out
    }
}
