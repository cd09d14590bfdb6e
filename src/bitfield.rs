//! Bit-array atomics over caller-owned words.
//!
//! This is the dense alternative to an array of boolean cells: one word holds
//! `usize::BITS` independently addressable flags, and a single-bit update is
//! one fetch-OR / fetch-AND on the containing word, so bits sharing a word
//! never tear each other.

use crate::cell::AtomicUint;

/// A borrowed view of a region of memory as an atomic bit array.
///
/// Bit `i` lives in word `i / W` at in-word position `i % W`,
/// least-significant bit first, where `W` is `usize::BITS`. The view owns
/// nothing; the caller owns the words and decides their extent.
///
/// The checked operations panic on an out-of-range index. The `_unchecked`
/// variants skip the check; sizing the region to cover every index used
/// against it is then the caller's contract.
#[derive(Clone, Copy)]
pub struct BitField<'a> {
    words: &'a [AtomicUint],
}

impl<'a> BitField<'a> {
    /// Creates a view over `words`.
    #[inline(always)]
    pub fn new(words: &'a [AtomicUint]) -> Self {
        Self { words }
    }

    /// Number of addressable bits (`words.len() * usize::BITS`).
    #[inline(always)]
    pub fn len_bits(&self) -> usize {
        self.words.len() * usize::BITS as usize
    }

    /// Number of words a region needs to address `bits` bits.
    #[inline(always)]
    pub fn words_for_bits(bits: usize) -> usize {
        bits.div_ceil(usize::BITS as usize)
    }

    /// Returns whether `bit` is currently set.
    ///
    /// # Panics
    /// Panics if `bit >= len_bits()`.
    #[inline(always)]
    pub fn test(&self, bit: usize) -> bool {
        assert!(bit < self.len_bits());
        let (word, mask) = bit_word_mask(bit);
        (self.words[word].get() & mask) != 0
    }

    /// Atomically sets `bit`, returning its value *before* the operation.
    ///
    /// # Panics
    /// Panics if `bit >= len_bits()`.
    #[inline(always)]
    pub fn test_and_set(&self, bit: usize) -> bool {
        assert!(bit < self.len_bits());
        // SAFETY: index checked above.
        unsafe { self.test_and_set_unchecked(bit) }
    }

    /// Atomically clears `bit`, returning its value *before* the operation.
    ///
    /// # Panics
    /// Panics if `bit >= len_bits()`.
    #[inline(always)]
    pub fn test_and_reset(&self, bit: usize) -> bool {
        assert!(bit < self.len_bits());
        // SAFETY: index checked above.
        unsafe { self.test_and_reset_unchecked(bit) }
    }

    /// Sets `bit` without a range check, returning its previous value.
    ///
    /// # Safety
    /// Caller must ensure `bit < len_bits()`.
    #[inline(always)]
    pub unsafe fn test_and_set_unchecked(&self, bit: usize) -> bool {
        let (word, mask) = bit_word_mask(bit);
        // SAFETY: word index derived from an in-range bit.
        let prev = self.words.get_unchecked(word).or(mask);
        (prev & mask) != 0
    }

    /// Clears `bit` without a range check, returning its previous value.
    ///
    /// # Safety
    /// Caller must ensure `bit < len_bits()`.
    #[inline(always)]
    pub unsafe fn test_and_reset_unchecked(&self, bit: usize) -> bool {
        let (word, mask) = bit_word_mask(bit);
        // SAFETY: word index derived from an in-range bit.
        let prev = self.words.get_unchecked(word).and(!mask);
        (prev & mask) != 0
    }
}

#[inline(always)]
fn bit_word_mask(bit: usize) -> (usize, usize) {
    // `usize::BITS` is a power of two (32 or 64), so shifts and masks do.
    // This is on the hot path for flag sweeps.
    #[cfg(target_pointer_width = "64")]
    {
        let word = bit >> 6;
        let shift = bit & 63;
        return (word, 1usize << shift);
    }
    #[cfg(target_pointer_width = "32")]
    {
        let word = bit >> 5;
        let shift = bit & 31;
        return (word, 1usize << shift);
    }
}
