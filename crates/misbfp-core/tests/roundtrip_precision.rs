// crates/misbfp-core/tests/roundtrip_precision.rs

use misbfp_core::{FieldWidth, FpCodec};

fn lcg_next(x: &mut u64) -> u64 {
    // deterministic, not crypto
    *x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
    *x
}

fn unit(x: &mut u64) -> f64 {
    (lcg_next(x) >> 11) as f64 / (1u64 << 53) as f64
}

#[test]
fn pi_vector_width4() {
    let c = FpCodec::with_precision(0.0, 1e5, 1e-4).unwrap();
    assert_eq!(c.field_width(), FieldWidth::Four);

    let encoded = c.encode(std::f64::consts::PI).unwrap();
    assert_eq!(encoded.len(), 4);

    let decoded = c.decode(&encoded).unwrap();
    assert!(
        (decoded - std::f64::consts::PI).abs() <= 1e-4,
        "decoded={decoded}"
    );
}

#[test]
fn coarse_precision_still_picks_width4() {
    // 17 bits -> 3 bytes -> rounded up to 4
    let c = FpCodec::with_precision(0.0, 1e5, 2.0).unwrap();
    assert_eq!(c.field_width(), FieldWidth::Four);

    let decoded = c.decode(&c.encode(std::f64::consts::PI).unwrap()).unwrap();
    assert!((decoded - std::f64::consts::PI).abs() <= 1e-4);
}

#[test]
fn sampled_values_roundtrip_within_precision() {
    let mut seed: u64 = 0x1201_0003_dead_beef;

    let cases: &[(f64, f64, f64)] = &[
        (0.0, 100.0, 1.0),
        (0.0, 1000.0, 0.5),
        (-900.0, 19_000.0, 0.1),
        (-90.0, 90.0, 1e-6),
        (-180.0, 180.0, 1e-9),
        (0.0, 1e5, 1e-4),
        (-0.3, 1.0, 0.01),
    ];

    for &(a, b, p) in cases {
        let c = FpCodec::with_precision(a, b, p).unwrap();
        for _ in 0..2_000 {
            let v = a + unit(&mut seed) * (b - a);
            let bytes = c.encode(v).unwrap();
            assert_eq!(bytes.len(), c.field_width().bytes());

            let Ok(back) = c.decode(&bytes) else {
                // values within one grid step of `a` can land below it
                // when the grid is shifted for zero
                assert!(c.zero_offset() > 0.0 && v - a < c.resolution());
                continue;
            };
            let slack = p + c.resolution();
            assert!(
                (back - v).abs() <= slack,
                "range=[{a},{b}] p={p} v={v} back={back}"
            );
        }
    }
}

#[test]
fn zero_is_exact_when_range_straddles_zero() {
    let c = FpCodec::new(-100.0, 100.0, 4).unwrap();
    assert_eq!(c.decode(&c.encode(0.0).unwrap()).unwrap(), 0.0);

    for w in FieldWidth::ALL {
        let c = FpCodec::with_width(-100.0, 100.0, w);
        let back = c.decode(&c.encode(0.0).unwrap()).unwrap();
        assert!(back.abs() <= f64::EPSILON, "width={w} back={back}");
    }
}

#[test]
fn zero_offset_pulls_zero_onto_the_grid() {
    // scale_forward * min = -19.2, so an unshifted grid would miss zero
    let c = FpCodec::new(-0.3, 1.0, 1).unwrap();
    let back = c.decode(&c.encode(0.0).unwrap()).unwrap();
    assert!(back.abs() < 1e-12, "back={back}");
}
