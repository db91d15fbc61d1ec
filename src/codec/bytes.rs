//! Octet ↔ limb repacking.
//!
//! The four primitives convert between byte strings and arrays of limbs
//! carrying `W` value bits each, where `W` is a compile-time width in
//! `1..=Limb::BITS`. Sub-width limbs serve backends that reserve the top
//! bits of every word, e.g. to compensate for a missing add-with-carry.
//!
//! Control flow in this module depends only on `src.len()`, `dst.len()` and
//! `W` — never on byte or limb values. Oversized sources are truncated and
//! oversized destinations are zero-filled, so no call can read or write out
//! of bounds.

use crate::arithmetic::{Limb, WideLimb};

const fn width_mask(width: u32) -> Limb {
    if width == Limb::BITS {
        Limb::MAX
    } else {
        (1 << width) - 1
    }
}

/// Packs little-endian `src` bytes into limbs of `W` bits each.
///
/// Limbs past the consumed input are zero-filled; each produced limb has its
/// high `Limb::BITS - W` bits clear.
pub fn unpack_le<const W: u32>(dst: &mut [Limb], src: &[u8]) {
    const {
        assert!(1 <= W && W <= Limb::BITS, "word bit width out of range");
    }
    let mask = width_mask(W);
    let mut acc: Limb = 0;
    let mut acc_len: u32 = 0;
    let mut dst_idx = 0;
    for &byte in src {
        // `acc` holds `acc_len` bits; bits shifted past the top are
        // recovered from `byte` after each emission.
        acc |= Limb::from(byte) << acc_len;
        acc_len += 8;
        while acc_len >= W {
            if dst_idx < dst.len() {
                dst[dst_idx] = acc & mask;
                dst_idx += 1;
            }
            acc_len -= W;
            acc = Limb::from(byte) >> (8 - acc_len);
        }
    }
    if dst_idx < dst.len() {
        dst[dst_idx] = acc & mask;
        dst_idx += 1;
    }
    for limb in &mut dst[dst_idx..] {
        *limb = 0;
    }
}

/// Packs big-endian `src` bytes into limbs of `W` bits each.
///
/// Identical to [`unpack_le`] on the reversed byte string.
pub fn unpack_be<const W: u32>(dst: &mut [Limb], src: &[u8]) {
    const {
        assert!(1 <= W && W <= Limb::BITS, "word bit width out of range");
    }
    let mask = width_mask(W);
    let mut acc: Limb = 0;
    let mut acc_len: u32 = 0;
    let mut dst_idx = 0;
    for &byte in src.iter().rev() {
        acc |= Limb::from(byte) << acc_len;
        acc_len += 8;
        while acc_len >= W {
            if dst_idx < dst.len() {
                dst[dst_idx] = acc & mask;
                dst_idx += 1;
            }
            acc_len -= W;
            acc = Limb::from(byte) >> (8 - acc_len);
        }
    }
    if dst_idx < dst.len() {
        dst[dst_idx] = acc & mask;
        dst_idx += 1;
    }
    for limb in &mut dst[dst_idx..] {
        *limb = 0;
    }
}

/// Unpacks limbs of `W` bits each into little-endian `dst` bytes.
///
/// Destination bytes past the packed value are zero; excess value bits are
/// dropped.
#[allow(clippy::cast_possible_truncation)]
pub fn pack_le<const W: u32>(dst: &mut [u8], src: &[Limb]) {
    const {
        assert!(1 <= W && W <= Limb::BITS, "word bit width out of range");
    }
    let mask = width_mask(W);
    let mut acc: WideLimb = 0;
    let mut acc_len: u32 = 0;
    let mut src_idx = 0;
    for byte in dst.iter_mut() {
        while acc_len < 8 {
            let limb = if src_idx < src.len() { src[src_idx] } else { 0 };
            src_idx += 1;
            acc |= WideLimb::from(limb & mask) << acc_len;
            acc_len += W;
        }
        *byte = acc as u8;
        acc >>= 8;
        acc_len -= 8;
    }
}

/// Unpacks limbs of `W` bits each into big-endian `dst` bytes.
///
/// Identical to [`pack_le`] writing the byte string in reverse, so the most
/// significant byte lands at `dst[0]` and padding occupies the low indices.
#[allow(clippy::cast_possible_truncation)]
pub fn pack_be<const W: u32>(dst: &mut [u8], src: &[Limb]) {
    const {
        assert!(1 <= W && W <= Limb::BITS, "word bit width out of range");
    }
    let mask = width_mask(W);
    let mut acc: WideLimb = 0;
    let mut acc_len: u32 = 0;
    let mut src_idx = 0;
    for byte in dst.iter_mut().rev() {
        while acc_len < 8 {
            let limb = if src_idx < src.len() { src[src_idx] } else { 0 };
            src_idx += 1;
            acc |= WideLimb::from(limb & mask) << acc_len;
            acc_len += W;
        }
        *byte = acc as u8;
        acc >>= 8;
        acc_len -= 8;
    }
}

#[cfg(test)]
mod test {
    use alloc::vec;

    use proptest::prelude::*;

    use super::*;
    use crate::bitlen::words_required;

    fn le_roundtrip<const W: u32>(bytes: &[u8]) {
        let limb_count = words_required(bytes.len() * 8, W as usize);
        let mut limbs = vec![0; limb_count];
        unpack_le::<W>(&mut limbs, bytes);
        for &limb in &limbs {
            assert_eq!(limb & !width_mask(W), 0, "stray bits above width {W}");
        }
        let mut out = vec![0u8; bytes.len()];
        pack_le::<W>(&mut out, &limbs);
        assert_eq!(out, bytes);
    }

    fn be_roundtrip<const W: u32>(bytes: &[u8]) {
        let limb_count = words_required(bytes.len() * 8, W as usize);
        let mut limbs = vec![0; limb_count];
        unpack_be::<W>(&mut limbs, bytes);
        for &limb in &limbs {
            assert_eq!(limb & !width_mask(W), 0, "stray bits above width {W}");
        }
        let mut out = vec![0u8; bytes.len()];
        pack_be::<W>(&mut out, &limbs);
        assert_eq!(out, bytes);
    }

    #[test]
    fn single_set_bit_lands_in_limb_zero() {
        let mut le_src = [0u8; 32];
        le_src[0] = 0x01;
        let mut be_src = [0u8; 32];
        be_src[31] = 0x01;

        let mut limbs = [0; words_required(256, Limb::BITS as usize)];
        unpack_le::<{ Limb::BITS }>(&mut limbs, &le_src);
        assert_eq!(limbs[0], 1);
        assert!(limbs[1..].iter().all(|&limb| limb == 0));

        unpack_be::<{ Limb::BITS }>(&mut limbs, &be_src);
        assert_eq!(limbs[0], 1);
        assert!(limbs[1..].iter().all(|&limb| limb == 0));
    }

    #[test]
    fn short_source_zero_fills_the_tail() {
        let mut limbs = [Limb::MAX; 4];
        unpack_le::<{ Limb::BITS }>(&mut limbs, &[0xab]);
        assert_eq!(limbs[0], 0xab);
        assert!(limbs[1..].iter().all(|&limb| limb == 0));

        unpack_le::<{ Limb::BITS }>(&mut limbs, &[]);
        assert!(limbs.iter().all(|&limb| limb == 0));
    }

    #[test]
    fn sub_width_splits_a_byte() {
        // 0xff at width 7: low seven bits, then the top bit.
        let mut limbs = [0; 2];
        unpack_le::<7>(&mut limbs, &[0xff]);
        assert_eq!(limbs, [0x7f, 0x01]);

        let mut byte = [0u8; 1];
        pack_le::<7>(&mut byte, &limbs);
        assert_eq!(byte, [0xff]);
    }

    #[test]
    fn sub_width_roundtrips() {
        let bytes: [u8; 13] = [
            0x01, 0xfe, 0x80, 0x7f, 0x55, 0xaa, 0x00, 0xff, 0x13, 0x37, 0xc0, 0x0d, 0x42,
        ];
        le_roundtrip::<1>(&bytes);
        le_roundtrip::<7>(&bytes);
        le_roundtrip::<13>(&bytes);
        le_roundtrip::<31>(&bytes);
        le_roundtrip::<{ Limb::BITS - 1 }>(&bytes);
        le_roundtrip::<{ Limb::BITS }>(&bytes);
        be_roundtrip::<1>(&bytes);
        be_roundtrip::<7>(&bytes);
        be_roundtrip::<13>(&bytes);
        be_roundtrip::<31>(&bytes);
        be_roundtrip::<{ Limb::BITS - 1 }>(&bytes);
        be_roundtrip::<{ Limb::BITS }>(&bytes);
    }

    #[test]
    fn oversized_destination_pads_with_zeros() {
        let limbs = [0x0012_3456];
        let mut le = [0xffu8; 8];
        pack_le::<{ Limb::BITS }>(&mut le, &limbs);
        assert_eq!(le, [0x56, 0x34, 0x12, 0, 0, 0, 0, 0]);

        let mut be = [0xffu8; 8];
        pack_be::<{ Limb::BITS }>(&mut be, &limbs);
        assert_eq!(be, [0, 0, 0, 0, 0, 0x12, 0x34, 0x56]);
    }

    #[test]
    fn undersized_destination_keeps_the_low_bytes() {
        let limbs = [0x0012_3456];
        let mut le = [0u8; 2];
        pack_le::<{ Limb::BITS }>(&mut le, &limbs);
        assert_eq!(le, [0x56, 0x34]);

        let mut be = [0u8; 2];
        pack_be::<{ Limb::BITS }>(&mut be, &limbs);
        assert_eq!(be, [0x34, 0x56]);
    }

    #[test]
    fn big_endian_is_the_reverse_of_little_endian() {
        proptest!(|(bytes in proptest::collection::vec(any::<u8>(), 0..64))| {
            let limb_count = words_required(bytes.len() * 8, Limb::BITS as usize);
            let mut limbs = vec![0; limb_count];
            unpack_le::<{ Limb::BITS }>(&mut limbs, &bytes);

            let mut le = vec![0u8; bytes.len()];
            pack_le::<{ Limb::BITS }>(&mut le, &limbs);
            let mut be = vec![0u8; bytes.len()];
            pack_be::<{ Limb::BITS }>(&mut be, &limbs);

            le.reverse();
            prop_assert_eq!(le, be);
        });
    }

    #[test]
    fn random_roundtrips_at_every_width() {
        proptest!(|(bytes in proptest::collection::vec(any::<u8>(), 0..64))| {
            le_roundtrip::<7>(&bytes);
            le_roundtrip::<13>(&bytes);
            le_roundtrip::<31>(&bytes);
            le_roundtrip::<{ Limb::BITS }>(&bytes);
            be_roundtrip::<7>(&bytes);
            be_roundtrip::<13>(&bytes);
            be_roundtrip::<31>(&bytes);
            be_roundtrip::<{ Limb::BITS }>(&bytes);
        });
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn full_width_agrees_with_num_bigint() {
        use num_bigint::BigUint;

        proptest!(|(bytes in proptest::collection::vec(any::<u8>(), 0..100))| {
            let limb_count = words_required(bytes.len() * 8, Limb::BITS as usize);

            let mut limbs = vec![0; limb_count];
            unpack_le::<{ Limb::BITS }>(&mut limbs, &bytes);
            while limbs.last() == Some(&0) {
                limbs.pop();
            }
            prop_assert_eq!(limbs, BigUint::from_bytes_le(&bytes).to_u64_digits());

            let mut limbs = vec![0; limb_count];
            unpack_be::<{ Limb::BITS }>(&mut limbs, &bytes);
            while limbs.last() == Some(&0) {
                limbs.pop();
            }
            prop_assert_eq!(limbs, BigUint::from_bytes_be(&bytes).to_u64_digits());
        });
    }
}
