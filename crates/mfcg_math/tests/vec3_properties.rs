//! Algebraic properties of `Vec3` checked over seeded random inputs

use approx::{assert_abs_diff_eq, assert_relative_eq};
use mfcg_math::foundation::logging;
use mfcg_math::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SAMPLES: usize = 256;

fn random_vec3f(rng: &mut StdRng) -> Vec3f {
    Vec3f::new(
        rng.gen_range(-100.0..100.0),
        rng.gen_range(-100.0..100.0),
        rng.gen_range(-100.0..100.0),
    )
}

fn random_vec3d(rng: &mut StdRng) -> Vec3d {
    Vec3d::new(
        rng.gen_range(-100.0..100.0),
        rng.gen_range(-100.0..100.0),
        rng.gen_range(-100.0..100.0),
    )
}

fn random_vec3i(rng: &mut StdRng) -> Vec3i {
    Vec3i::new(
        rng.gen_range(-100..100),
        rng.gen_range(-100..100),
        rng.gen_range(-100..100),
    )
}

#[test]
fn add_is_componentwise() {
    let mut rng = StdRng::seed_from_u64(0x5eed_0001);
    for _ in 0..SAMPLES {
        let a = random_vec3i(&mut rng);
        let b = random_vec3i(&mut rng);
        assert_eq!(add(&a, &b), Vec3i::new(a.x + b.x, a.y + b.y, a.z + b.z));
        assert_eq!(sub(&a, &b), Vec3i::new(a.x - b.x, a.y - b.y, a.z - b.z));
    }
}

#[test]
fn sqr_magnitude_equals_self_dot() {
    let mut rng = StdRng::seed_from_u64(0x5eed_0002);
    for _ in 0..SAMPLES {
        let a = random_vec3i(&mut rng);
        assert_eq!(sqr_magnitude(&a), dot(&a, &a));

        let f = random_vec3d(&mut rng);
        assert_eq!(sqr_magnitude(&f), dot(&f, &f));
    }
}

#[test]
fn magnitude_is_root_of_sqr_magnitude() {
    let mut rng = StdRng::seed_from_u64(0x5eed_0003);
    for _ in 0..SAMPLES {
        let a = random_vec3d(&mut rng);
        assert_relative_eq!(magnitude(&a), sqr_magnitude(&a).sqrt(), epsilon = 1e-12);
    }
}

#[test]
fn normalize_yields_unit_length() {
    logging::init();
    let mut rng = StdRng::seed_from_u64(0x5eed_0004);
    for _ in 0..SAMPLES {
        let mut a = random_vec3f(&mut rng);
        if a.sqr_magnitude() == 0.0 {
            continue;
        }
        normalize(&mut a);
        assert_relative_eq!(magnitude(&a), 1.0, epsilon = 1e-5);

        let mut d = random_vec3d(&mut rng);
        let expected = Vec3d::new(d.x / d.magnitude(), d.y / d.magnitude(), d.z / d.magnitude());
        d.normalize();
        assert_relative_eq!(d, expected, epsilon = 1e-12);
    }
}

#[test]
fn normalize_zero_vector_is_noop() {
    logging::init();

    let mut f = Vec3f::zero();
    normalize(&mut f);
    assert_eq!(f, Vec3f::new(0.0, 0.0, 0.0));

    let mut i = Vec3i::default();
    i.normalize();
    assert_eq!(i, Vec3i::new(0, 0, 0));
}

#[test]
fn cross_is_anti_commutative() {
    let mut rng = StdRng::seed_from_u64(0x5eed_0005);
    for _ in 0..SAMPLES {
        let a = random_vec3d(&mut rng);
        let b = random_vec3d(&mut rng);
        assert_relative_eq!(cross(&a, &b), scale(&cross(&b, &a), -1.0), epsilon = 1e-9);
        assert_eq!(-cross(&a, &b), cross(&b, &a));
    }
}

#[test]
fn cross_is_orthogonal_to_operands() {
    let mut rng = StdRng::seed_from_u64(0x5eed_0006);
    for _ in 0..SAMPLES {
        let a = random_vec3d(&mut rng);
        let b = random_vec3d(&mut rng);
        let c = cross(&a, &b);

        // Rounding error grows with the size of the summed products.
        let tolerance = 1e-12 * a.magnitude() * b.magnitude() * (a.magnitude() + b.magnitude());
        assert_abs_diff_eq!(dot(&a, &c), 0.0, epsilon = tolerance);
        assert_abs_diff_eq!(dot(&b, &c), 0.0, epsilon = tolerance);

        let ai = random_vec3i(&mut rng);
        let bi = random_vec3i(&mut rng);
        let ci = cross(&ai, &bi);
        assert_eq!(dot(&ai, &ci), 0);
        assert_eq!(dot(&bi, &ci), 0);
    }
}

#[test]
fn unit_axes_example() {
    let a = Vec3f::new(1.0, 0.0, 0.0);
    let b = Vec3f::new(0.0, 1.0, 0.0);

    assert_eq!(cross(&a, &b), Vec3f::new(0.0, 0.0, 1.0));
    assert_eq!(dot(&a, &b), 0.0);
    assert_eq!(magnitude(&a), 1.0);
}

#[test]
fn three_four_five_example() {
    let mut a = Vec3f::new(3.0, 4.0, 0.0);
    assert_eq!(magnitude(&a), 5.0);
    assert_eq!(sqr_magnitude(&a), 25.0);

    normalize(&mut a);
    assert_relative_eq!(a, Vec3f::new(0.6, 0.8, 0.0), epsilon = 1e-6);
}

#[test]
fn one_two_three_example() {
    let a = Vec3f::new(1.0, 2.0, 3.0);
    let b = Vec3f::new(4.0, 5.0, 6.0);

    assert_eq!(add(&a, &b), Vec3f::new(5.0, 7.0, 9.0));
    assert_eq!(sub(&a, &b), Vec3f::new(-3.0, -3.0, -3.0));
    assert_eq!(dot(&a, &b), 32.0);
    assert_eq!(cross(&a, &b), Vec3f::new(-3.0, 6.0, -3.0));
}

#[test]
fn operations_leave_operands_untouched() {
    let a = Vec3d::new(1.0, 2.0, 3.0);
    let b = Vec3d::new(-4.0, 0.5, 9.0);
    let (a_before, b_before) = (a, b);

    let _ = (add(&a, &b), sub(&a, &b), scale(&a, 2.0), dot(&a, &b), cross(&a, &b));
    let _ = (a.dot(&b), a.cross(&b), a.scale(-1.0), a.normalized());

    assert_eq!(a, a_before);
    assert_eq!(b, b_before);
}
