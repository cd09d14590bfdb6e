use plinth::{AtomicUint, BitField};

fn region(words: usize) -> Vec<AtomicUint> {
    (0..words).map(|_| AtomicUint::new(0)).collect()
}

#[test]
fn set_reset_cycle_on_second_word() {
    // Bit 70 lives in word 1 on 64-bit targets, word 2 on 32-bit ones;
    // three words cover it everywhere.
    let words = region(3);
    let bits = BitField::new(&words);

    assert!(!bits.test_and_set(70));
    assert!(bits.test(70));
    assert!(bits.test_and_set(70));

    assert!(bits.test_and_reset(70));
    assert!(!bits.test(70));
    assert!(!bits.test_and_reset(70));
    assert!(!bits.test_and_set(70));
}

#[test]
fn word_boundaries() {
    let w = usize::BITS as usize;
    let words = region(2);
    let bits = BitField::new(&words);
    assert_eq!(bits.len_bits(), 2 * w);

    for bit in [0, 1, w - 1, w, w + 1, 2 * w - 1] {
        assert!(!bits.test_and_set(bit), "bit {bit} started set");
        assert!(bits.test(bit), "bit {bit} did not stick");
    }

    // Low-endian within each word: bit 0 is the least significant bit and
    // bit W lands in the next word, not the high end of the first.
    assert_eq!(words[0].get() & 0b11, 0b11);
    assert_eq!(words[1].get() & 0b11, 0b11);
}

#[test]
fn neighboring_bits_do_not_interfere() {
    let words = region(1);
    let bits = BitField::new(&words);

    bits.test_and_set(3);
    bits.test_and_set(4);
    assert!(bits.test_and_reset(3));
    assert!(bits.test(4));
    assert!(!bits.test(3));
    assert!(!bits.test(2));
}

#[test]
fn reset_clears_only_target_bit() {
    let words = region(1);
    let bits = BitField::new(&words);
    words[0].set(usize::MAX);

    assert!(bits.test_and_reset(7));
    assert_eq!(words[0].get(), usize::MAX & !(1 << 7));
}

#[test]
fn unchecked_matches_checked() {
    let words = region(2);
    let bits = BitField::new(&words);

    // SAFETY: indices are within the two-word region.
    unsafe {
        assert!(!bits.test_and_set_unchecked(9));
        assert!(bits.test_and_set_unchecked(9));
        assert!(bits.test_and_reset_unchecked(9));
        assert!(!bits.test_and_reset_unchecked(9));
    }
}

#[test]
#[should_panic]
fn out_of_range_index_panics() {
    let words = region(1);
    let bits = BitField::new(&words);
    bits.test_and_set(usize::BITS as usize);
}

#[test]
fn view_is_copy() {
    let words = region(1);
    let bits = BitField::new(&words);
    let alias = bits;
    assert!(!bits.test_and_set(5));
    assert!(alias.test(5));
}
