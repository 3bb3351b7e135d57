use super::*;

#[test]
fn fnv_seeded_hash_is_stable() {
    let mut a = Fnv1a64::new_default();
    a.write_bytes(b"pixelseq");
    let mut b = Fnv1a64::new_default();
    b.write_u8(b'p');
    b.write_bytes(b"ixelseq");
    assert_eq!(a.finish(), b.finish());
}

#[test]
fn seeds_differ_by_id_and_salt() {
    assert_eq!(seed_for("countdown-1", 1), seed_for("countdown-1", 1));
    assert_ne!(seed_for("countdown-1", 1), seed_for("countdown-1", 2));
    assert_ne!(seed_for("countdown-1", 1), seed_for("countdown-2", 1));
}

#[test]
fn rng_is_deterministic() {
    let mut a = Rng64::new(123);
    let mut b = Rng64::new(123);
    for _ in 0..10 {
        assert_eq!(a.next_u64(), b.next_u64());
    }
}

#[test]
fn rng_helpers_stay_in_range() {
    let mut rng = Rng64::new(9);
    for _ in 0..200 {
        let v = rng.next_f64_01();
        assert!((0.0..1.0).contains(&v));
        assert!(rng.next_index(3) < 3);
    }
    assert_eq!(rng.next_index(0), 0);
    assert!(!rng.chance(0.0));
    assert!(rng.chance(1.0));
}

#[test]
fn noise_is_stable_per_coordinate() {
    assert_eq!(noise01(5, 3, 4), noise01(5, 3, 4));
    assert_ne!(noise01(5, 3, 4), noise01(5, 4, 3));
    assert!((0.0..1.0).contains(&noise01(5, -2, 7)));
}

#[test]
fn rounding_matches_half_up_rule() {
    assert_eq!(round_half_up(2.5), 3.0);
    assert_eq!(round_half_up(-2.5), -2.0);
    assert_eq!(round_i32(1.49), 1);
}
