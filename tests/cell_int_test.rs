use plinth::{AtomicInt, AtomicUint};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn cells_are_send_sync() {
    assert_send_sync::<AtomicInt>();
    assert_send_sync::<AtomicUint>();
}

#[test]
fn get_set_round_trip() {
    let a = AtomicInt::new(0);
    for v in [0, 1, -1, 42, isize::MIN, isize::MAX] {
        a.set(v);
        assert_eq!(a.get(), v);
    }

    let u = AtomicUint::new(0);
    for v in [0, 1, 42, usize::MAX] {
        u.set(v);
        assert_eq!(u.get(), v);
    }
}

#[test]
fn inc_dec_are_symmetric() {
    let a = AtomicInt::new(5);
    a.inc();
    assert_eq!(a.get(), 6);
    assert_eq!(a.dec(), 5);
    assert_eq!(a.get(), 5);

    let u = AtomicUint::new(1);
    u.inc();
    assert_eq!(u.get(), 2);
    assert_eq!(u.dec(), 1);
}

#[test]
fn dec_returns_post_value() {
    let a = AtomicInt::new(1);
    assert_eq!(a.dec(), 0);
    assert_eq!(a.dec(), -1);
    assert_eq!(a.dec(), -2);
}

#[test]
fn dec_and_test_true_only_at_zero() {
    // Decrementing from 1 lands exactly on zero.
    let a = AtomicInt::new(1);
    assert!(a.dec_and_test());
    assert_eq!(a.get(), 0);

    // From 0 the post-value is -1.
    assert!(!a.dec_and_test());
    assert_eq!(a.get(), -1);

    // From negative values it never fires.
    let b = AtomicInt::new(-5);
    assert!(!b.dec_and_test());
    assert_eq!(b.get(), -6);

    let c = AtomicInt::new(3);
    assert!(!c.dec_and_test());
    assert!(!c.dec_and_test());
    assert!(c.dec_and_test());
}

#[test]
fn exchange_returns_previous() {
    let a = AtomicInt::new(7);
    assert_eq!(a.exchange(-3), 7);
    assert_eq!(a.exchange(0), -3);
    assert_eq!(a.get(), 0);
}

#[test]
fn fetch_ops_return_pre_value() {
    let a = AtomicInt::new(5);
    assert_eq!(a.add(3), 5);
    assert_eq!(a.get(), 8);
    assert_eq!(a.add(-10), 8);
    assert_eq!(a.get(), -2);

    let u = AtomicUint::new(0b1100);
    assert_eq!(u.or(0b0011), 0b1100);
    assert_eq!(u.get(), 0b1111);
    assert_eq!(u.and(0b1010), 0b1111);
    assert_eq!(u.get(), 0b1010);
    assert_eq!(u.xor(0b0110), 0b1010);
    assert_eq!(u.get(), 0b1100);
}

#[test]
fn add_wraps() {
    let u = AtomicUint::new(usize::MAX);
    assert_eq!(u.add(1), usize::MAX);
    assert_eq!(u.get(), 0);

    let a = AtomicInt::new(isize::MAX);
    a.inc();
    assert_eq!(a.get(), isize::MIN);
}

#[test]
fn compare_and_exchange_is_strong() {
    let a = AtomicInt::new(10);

    // Matching expectation stores and reports success.
    assert!(a.compare_and_exchange(10, 20));
    assert_eq!(a.get(), 20);

    // Mismatched expectation leaves the cell untouched.
    let expected = 10;
    assert!(!a.compare_and_exchange(expected, 99));
    assert_eq!(a.get(), 20);
    assert_eq!(expected, 10);

    // CAS to the same value still counts as a store.
    assert!(a.compare_and_exchange(20, 20));
    assert_eq!(a.get(), 20);
}

#[test]
fn exclusive_access_bypasses_atomics() {
    let mut a = AtomicUint::new(3);
    *a.get_mut() += 4;
    assert_eq!(a.into_inner(), 7);
}
