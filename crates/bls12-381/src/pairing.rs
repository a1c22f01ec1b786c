//! The optimal ate pairing: Miller loop over the twist and final
//! exponentiation into the order-r subgroup of `Fp12`.

use crate::fp::Fp;
use crate::fp12::Fp12;
use crate::fp2::Fp2;
use crate::fp6::Fp6;
use crate::g1::G1Affine;
use crate::g2::{G2Affine, X_ABS};

/// `|x| + 1`
const X_ABS_PLUS_1: u64 = 0xd201_0000_0001_0001;
/// `(|x| + 1) / 3`
const X_ABS_PLUS_1_DIV_3: u64 = 0x4600_5555_5555_aaab;

fn inv0_fp2(a: &Fp2) -> Fp2 {
    Option::<Fp2>::from(a.invert()).unwrap_or(Fp2::zero())
}

/// Evaluates the line through the current Miller loop point at the G1
/// argument, already moved through the untwist: with slope `lam` and
/// intercept `mu` on the twist, the value is `xi*(py - lam*px/w -
/// mu/w^3)`, laid out on the `1`, `w^3` and `w^5` basis slots. The
/// stray `xi` factor lies in a proper subfield, so the final
/// exponentiation kills it.
fn line(lam: &Fp2, mu: &Fp2, px: &Fp, py: &Fp) -> Fp12 {
    let xi_py = Fp2 {
        c0: *py,
        c1: *py,
    };
    Fp12 {
        c0: Fp6 {
            c0: xi_py,
            c1: Fp2::zero(),
            c2: Fp2::zero(),
        },
        c1: Fp6 {
            c0: Fp2::zero(),
            c1: -mu,
            c2: -lam.mul_by_fp(px),
        },
    }
}

/// The Miller loop for a single pair; neither point may be the identity.
/// The running point stays affine on the twist, which keeps the line
/// coefficients sparse at the cost of one `Fp2` inversion per step.
fn miller_loop(p: &G1Affine, q: &G2Affine) -> Fp12 {
    let px = p.x();
    let py = p.y();
    let qx = q.x();
    let qy = q.y();

    let mut tx = qx;
    let mut ty = qy;
    let mut f = Fp12::one();

    // MSB-first over |x|, skipping the leading bit.
    for i in (0..63).rev() {
        // Doubling step: lam = 3x^2 / 2y, mu = y - lam*x. The running
        // point is a nonzero multiple of a subgroup point of odd order r,
        // so 2y never vanishes.
        let tx2 = tx.square();
        let lam = (tx2 + tx2 + tx2) * inv0_fp2(&(ty + ty));
        let mu = ty - lam * tx;
        f = f.square() * line(&lam, &mu, &px, &py);

        let x3 = lam.square() - tx - tx;
        ty = lam * (tx - x3) - ty;
        tx = x3;

        if (X_ABS >> i) & 1 == 1 {
            // Addition step with the base point: the running multiple is
            // strictly between 1 and r - 1, so tx != qx.
            let lam = (qy - ty) * inv0_fp2(&(qx - tx));
            let mu = ty - lam * tx;
            f = f * line(&lam, &mu, &px, &py);

            let x3 = lam.square() - tx - qx;
            ty = lam * (tx - x3) - ty;
            tx = x3;
        }
    }

    // The BLS parameter is negative, which conjugates the result.
    f.conjugate()
}

/// Computes the product of Miller loops over all pairs, skipping any pair
/// in which either point is the identity. The empty product is one.
pub fn multi_miller_loop(pairs: &[(G1Affine, G2Affine)]) -> Fp12 {
    pairs
        .iter()
        .filter(|(p, q)| !bool::from(p.is_identity()) && !bool::from(q.is_identity()))
        .fold(Fp12::one(), |f, (p, q)| f * miller_loop(p, q))
}

/// Raises a Miller loop output to `(p^12 - 1) / r`.
pub fn final_exponentiation(f: &Fp12) -> Fp12 {
    // Easy part: f^((p^6 - 1)(p^2 + 1)). Miller outputs are nonzero, so
    // the inversion cannot fail.
    let inv = Option::<Fp12>::from(f.invert()).unwrap_or(Fp12::one());
    let easy = f.conjugate() * inv;
    let m = easy.frobenius_map().frobenius_map() * easy;

    // Hard part, an addition chain in the (positive) curve parameter.
    // After the easy part the element is unitary, so conjugation is
    // inversion and all exponents can be taken positive.
    let f = m.pow_vartime(X_ABS_PLUS_1_DIV_3);
    let f = f.pow_vartime(X_ABS_PLUS_1);
    let f = f.frobenius_map() * f.conjugate().pow_vartime(X_ABS);
    f.pow_vartime(X_ABS).pow_vartime(X_ABS)
        * f.frobenius_map().frobenius_map()
        * f.conjugate()
        * m
}

/// Returns whether the product of pairings over all pairs equals the
/// identity of the target group. Pairs containing the identity contribute
/// the neutral factor, and the empty product passes.
pub fn pairing_check(pairs: &[(G1Affine, G2Affine)]) -> bool {
    final_exponentiation(&multi_miller_loop(pairs)) == Fp12::one()
}

/// The pairing of a single pair of points, for callers that need the
/// target group element itself.
pub fn pairing(p: &G1Affine, q: &G2Affine) -> Fp12 {
    if bool::from(p.is_identity()) || bool::from(q.is_identity()) {
        return Fp12::one();
    }
    final_exponentiation(&miller_loop(p, q))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::g1::G1Projective;
    use crate::g2::G2Projective;
    use crate::scalar::Scalar;

    fn scalar(n: u64) -> Scalar {
        let mut b = [0u8; 32];
        b[24..].copy_from_slice(&n.to_be_bytes());
        Scalar::from_be_bytes(b)
    }

    fn g1(n: u64) -> G1Affine {
        G1Affine::from(G1Projective::generator().mul(&scalar(n)))
    }

    fn g2(n: u64) -> G2Affine {
        G2Affine::from(G2Projective::generator().mul(&scalar(n)))
    }

    #[test]
    fn generator_pairing_is_nontrivial() {
        let e = pairing(&G1Affine::generator(), &G2Affine::generator());
        assert_ne!(e, Fp12::one());
        // The output has order dividing r.
        assert!(!bool::from(e.is_zero()));
    }

    #[test]
    fn pairing_with_identity_is_one() {
        assert_eq!(
            pairing(&G1Affine::identity(), &G2Affine::generator()),
            Fp12::one()
        );
        assert_eq!(
            pairing(&G1Affine::generator(), &G2Affine::identity()),
            Fp12::one()
        );
    }

    #[test]
    fn inverse_pairs_cancel() {
        let p = G1Affine::generator();
        let q = G2Affine::generator();
        assert!(pairing_check(&[(p, q), (-p, q)]));
        assert!(pairing_check(&[(p, q), (p, -q)]));
        assert!(!pairing_check(&[(p, q)]));
    }

    #[test]
    fn bilinearity() {
        // e([2]P, [3]Q) * e([6]P, -Q) == 1
        assert!(pairing_check(&[(g1(2), g2(3)), (g1(6), -g2(1))]));
        // e([2]P, [3]Q) == e(P, [6]Q)
        assert_eq!(pairing(&g1(2), &g2(3)), pairing(&g1(1), &g2(6)));
    }

    #[test]
    fn empty_and_identity_only_products_pass() {
        assert!(pairing_check(&[]));
        assert!(pairing_check(&[(G1Affine::identity(), g2(5))]));
        assert!(pairing_check(&[(g1(5), G2Affine::identity())]));
    }
}
