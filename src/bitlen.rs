//! Bit-length arithmetic used to size limb arrays, byte buffers and decimal
//! text buffers.
//!
//! Everything in this module operates on public quantities (bit widths and
//! buffer lengths), so plain integer arithmetic and early returns are fine
//! here.

/// Ceiling division, `⌈numerator / divisor⌉`.
///
/// # Panics
///
/// * If `divisor` is zero.
#[must_use]
pub const fn ceil_div(numerator: usize, divisor: usize) -> usize {
    assert!(divisor != 0, "division by zero");
    numerator / divisor + (numerator % divisor != 0) as usize
}

/// Number of words of `word_bit_width` bits needed to hold `bits` bits.
#[must_use]
pub const fn words_required(bits: usize, word_bit_width: usize) -> usize {
    ceil_div(bits, word_bit_width)
}

/// Number of bytes needed to hold `bits` bits.
#[must_use]
pub const fn byte_len(bits: usize) -> usize {
    ceil_div(bits, 8)
}

/// Number of decimal characters needed to render any `bits`-bit integer.
///
/// `12655 / 42039` is a continued-fraction convergent of log₁₀(2), so
/// `bits * 12655 / 42039` underestimates `bits · log₁₀(2)` by less than one;
/// the leading `1 +` absorbs the worst-case rounding.
///
/// # Panics
///
/// * If `bits` is large enough to overflow the estimate. Evaluated in a
///   const context (as every caller in this crate does), the panic is a
///   compile error.
#[must_use]
pub const fn decimal_length(bits: usize) -> usize {
    assert!(
        bits < usize::MAX / 12655,
        "bit width overflows the decimal length estimate"
    );
    1 + bits * 12655 / 42039
}

/// Whether a decimal string of `decimal_len` characters fits in `bits` bits.
///
/// `42039 / 12655` is a continued-fraction convergent of log₂(10). The
/// leading digit is excluded from the bound because it may carry fewer bits
/// than a full digit (a 381-bit number can render as 115 digits starting
/// with either `4` or `5`), so a string of up to one character more than
/// [`decimal_length`] may be admitted; such a string can wrap and range
/// checking stays with the caller.
///
/// Returns `false` on any input large enough to overflow the estimate.
#[must_use]
pub const fn has_enough_bits_for_decimal(bits: usize, decimal_len: usize) -> bool {
    if bits >= usize::MAX / 42039 {
        return false;
    }
    let weighted = match decimal_len.saturating_sub(1).checked_mul(42039) {
        Some(weighted) => weighted,
        None => return false,
    };
    bits >= weighted / 12655
}
