//! Limb-level building blocks for the big-integer engine.
//!
//! Big integers are held as arrays of CPU-word-sized limbs, least
//! significant limb first. All carrying primitives here widen into
//! [`WideLimb`] instead of branching on overflow flags, so none of them has
//! data-dependent control flow.

pub mod uint;

/// One machine word of big-integer storage.
#[cfg(target_pointer_width = "32")]
pub type Limb = u32;
/// One machine word of big-integer storage.
#[cfg(target_pointer_width = "64")]
pub type Limb = u64;

/// A double-width limb, wide enough for any single-limb sum or product.
#[cfg(target_pointer_width = "32")]
pub type WideLimb = u64;
/// A double-width limb, wide enough for any single-limb sum or product.
#[cfg(target_pointer_width = "64")]
pub type WideLimb = u128;

#[cfg(not(any(target_pointer_width = "32", target_pointer_width = "64")))]
compile_error!("bigint-codec supports 32-bit and 64-bit targets only");

/// An array of limbs, least significant first.
pub type Limbs<const N: usize> = [Limb; N];

/// Computes `a + b + carry`, returning the low limb and the carry out.
#[inline(always)]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn carrying_add(a: Limb, b: Limb, carry: Limb) -> (Limb, Limb) {
    let wide = a as WideLimb + b as WideLimb + carry as WideLimb;
    (wide as Limb, (wide >> Limb::BITS) as Limb)
}

/// Computes `a * b + carry`, returning the low limb and the carry out.
#[inline(always)]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn carrying_mul_add(a: Limb, b: Limb, carry: Limb) -> (Limb, Limb) {
    let wide = (a as WideLimb) * (b as WideLimb) + carry as WideLimb;
    (wide as Limb, (wide >> Limb::BITS) as Limb)
}
