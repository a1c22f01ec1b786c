//! Multi-scalar multiplication over G1 and G2.
//!
//! Small inputs use the naive sum of individual scalar multiplications;
//! larger inputs switch to a windowed bucket (Pippenger) accumulation.
//! Scalars are full 256-bit integers and are never reduced.

use alloc::vec;

use crate::g1::G1Projective;
use crate::g2::G2Projective;
use crate::scalar::Scalar;

/// The group operations Pippenger accumulation needs, implemented by both
/// projective point types.
trait CurvePoint: Copy {
    fn identity() -> Self;
    fn double(&self) -> Self;
    fn add(&self, rhs: &Self) -> Self;
    fn mul(&self, scalar: &Scalar) -> Self;
}

impl CurvePoint for G1Projective {
    fn identity() -> Self {
        G1Projective::identity()
    }
    fn double(&self) -> Self {
        G1Projective::double(self)
    }
    fn add(&self, rhs: &Self) -> Self {
        G1Projective::add(self, rhs)
    }
    fn mul(&self, scalar: &Scalar) -> Self {
        G1Projective::mul(self, scalar)
    }
}

impl CurvePoint for G2Projective {
    fn identity() -> Self {
        G2Projective::identity()
    }
    fn double(&self) -> Self {
        G2Projective::double(self)
    }
    fn add(&self, rhs: &Self) -> Self {
        G2Projective::add(self, rhs)
    }
    fn mul(&self, scalar: &Scalar) -> Self {
        G2Projective::mul(self, scalar)
    }
}

/// Window width as a function of the number of terms.
fn window_size(n: usize) -> usize {
    match n {
        0..=31 => 3,
        32..=255 => 5,
        256..=1023 => 7,
        _ => 9,
    }
}

fn naive<P: CurvePoint>(points: &[P], scalars: &[Scalar]) -> P {
    points
        .iter()
        .zip(scalars)
        .fold(P::identity(), |acc, (p, s)| acc.add(&p.mul(s)))
}

fn pippenger<P: CurvePoint>(points: &[P], scalars: &[Scalar]) -> P {
    let c = window_size(points.len());
    let windows = 256_usize.div_ceil(c);

    let mut acc = P::identity();
    for w in (0..windows).rev() {
        for _ in 0..c {
            acc = acc.double();
        }

        let mut buckets = vec![P::identity(); (1 << c) - 1];
        for (point, scalar) in points.iter().zip(scalars) {
            let idx = scalar.window(w * c, c);
            if idx > 0 {
                buckets[idx - 1] = buckets[idx - 1].add(point);
            }
        }

        // Running-sum trick: summing suffix sums weights bucket j by j.
        let mut running = P::identity();
        for bucket in buckets.iter().rev() {
            running = running.add(bucket);
            acc = acc.add(&running);
        }
    }
    acc
}

fn msm<P: CurvePoint>(points: &[P], scalars: &[Scalar]) -> P {
    debug_assert_eq!(points.len(), scalars.len());
    if points.len() < 8 {
        naive(points, scalars)
    } else {
        pippenger(points, scalars)
    }
}

/// Computes `sum_i scalars[i] * points[i]` over G1. Both slices must have
/// the same length; an empty input yields the identity.
pub fn msm_g1(points: &[G1Projective], scalars: &[Scalar]) -> G1Projective {
    msm(points, scalars)
}

/// Computes `sum_i scalars[i] * points[i]` over G2.
pub fn msm_g2(points: &[G2Projective], scalars: &[Scalar]) -> G2Projective {
    msm(points, scalars)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn scalar(n: u64) -> Scalar {
        let mut b = [0u8; 32];
        b[24..].copy_from_slice(&n.to_be_bytes());
        Scalar::from_be_bytes(b)
    }

    /// Deterministic point/scalar pairs: points are small multiples of
    /// the generator, scalars a fixed arithmetic-ish sequence.
    fn g1_inputs(n: usize) -> (Vec<G1Projective>, Vec<Scalar>) {
        let g = G1Projective::generator();
        let mut points = Vec::with_capacity(n);
        let mut scalars = Vec::with_capacity(n);
        let mut p = g;
        for i in 0..n {
            points.push(p);
            scalars.push(scalar(3 * i as u64 + 7));
            p = p.add(&g);
        }
        (points, scalars)
    }

    #[test]
    fn empty_input_yields_identity() {
        assert_eq!(msm_g1(&[], &[]), G1Projective::identity());
        assert_eq!(msm_g2(&[], &[]), G2Projective::identity());
    }

    #[test]
    fn single_pair_matches_scalar_mul() {
        let g = G1Projective::generator();
        let s = scalar(12345);
        assert_eq!(msm_g1(&[g], &[s]), g.mul(&s));
    }

    #[test]
    fn pippenger_matches_naive_g1() {
        let (points, scalars) = g1_inputs(20);
        assert_eq!(
            pippenger(&points, &scalars),
            naive(&points, &scalars)
        );
    }

    #[test]
    fn pippenger_matches_naive_g2() {
        let g = G2Projective::generator();
        let mut points = Vec::new();
        let mut scalars = Vec::new();
        let mut p = g;
        for i in 0..12 {
            points.push(p);
            scalars.push(scalar(1000 + 17 * i));
            p = p.double();
        }
        assert_eq!(pippenger(&points, &scalars), naive(&points, &scalars));
    }

    #[test]
    fn term_order_does_not_matter() {
        // The accumulation must agree with the sequential fold for any
        // permutation of the terms.
        let (points, scalars) = g1_inputs(20);
        let expected = naive(&points, &scalars);

        let rev_points: Vec<_> = points.iter().rev().copied().collect();
        let rev_scalars: Vec<_> = scalars.iter().rev().copied().collect();
        assert_eq!(msm_g1(&rev_points, &rev_scalars), expected);

        // An interleaved permutation: odd-indexed terms first.
        let perm: Vec<usize> = (0..points.len())
            .filter(|i| i % 2 == 1)
            .chain((0..points.len()).filter(|i| i % 2 == 0))
            .collect();
        let perm_points: Vec<_> = perm.iter().map(|&i| points[i]).collect();
        let perm_scalars: Vec<_> = perm.iter().map(|&i| scalars[i]).collect();
        assert_eq!(msm_g1(&perm_points, &perm_scalars), expected);

        let g = G2Projective::generator();
        let g2_points: Vec<_> = (0..10)
            .scan(g, |p, _| {
                let cur = *p;
                *p = p.add(&g);
                Some(cur)
            })
            .collect();
        let g2_scalars: Vec<_> = (0..10).map(|i| scalar(29 * i + 5)).collect();
        let g2_rev_points: Vec<_> = g2_points.iter().rev().copied().collect();
        let g2_rev_scalars: Vec<_> = g2_scalars.iter().rev().copied().collect();
        assert_eq!(
            msm_g2(&g2_rev_points, &g2_rev_scalars),
            msm_g2(&g2_points, &g2_scalars)
        );
    }

    #[test]
    fn unreduced_scalars_are_handled() {
        // The group order r plus one, as big-endian bytes: multiplying a
        // subgroup point by it must equal the point itself.
        let r_plus_1 = [
            0x73, 0xed, 0xa7, 0x53, 0x29, 0x9d, 0x7d, 0x48, 0x33, 0x39, 0xd8, 0x08, 0x09, 0xa1,
            0xd8, 0x05, 0x53, 0xbd, 0xa4, 0x02, 0xff, 0xfe, 0x5b, 0xfe, 0xff, 0xff, 0xff, 0xff,
            0x00, 0x00, 0x00, 0x02,
        ];
        let g = G1Projective::generator();
        assert_eq!(msm_g1(&[g], &[Scalar::from_be_bytes(r_plus_1)]), g);
    }

    #[test]
    fn pippenger_with_max_window_bits() {
        // Scalars with every byte set exercise the top windows and the
        // tail window that runs past bit 255.
        let (points, _) = g1_inputs(9);
        let scalars: Vec<Scalar> = (0..9)
            .map(|i| {
                let mut b = [0xffu8; 32];
                b[0] = 0x80 + i as u8;
                Scalar::from_be_bytes(b)
            })
            .collect();
        assert_eq!(pippenger(&points, &scalars), naive(&points, &scalars));
    }
}
