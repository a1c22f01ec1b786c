//! The G1 group: points on `y^2 = x^3 + 4` over the base field.

use core::fmt;
use core::ops::Neg;

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use crate::fp::Fp;
use crate::scalar::Scalar;

/// A G1 point in affine coordinates, with an explicit point-at-infinity
/// flag.
#[derive(Copy, Clone)]
pub struct G1Affine {
    pub(crate) x: Fp,
    pub(crate) y: Fp,
    infinity: Choice,
}

impl fmt::Debug for G1Affine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if bool::from(self.infinity) {
            write!(f, "Infinity")
        } else {
            write!(f, "({:?}, {:?})", self.x, self.y)
        }
    }
}

impl ConstantTimeEq for G1Affine {
    fn ct_eq(&self, other: &G1Affine) -> Choice {
        // Coordinates of the identity are not observable.
        (self.infinity & other.infinity)
            | ((!self.infinity)
                & (!other.infinity)
                & self.x.ct_eq(&other.x)
                & self.y.ct_eq(&other.y))
    }
}

impl Eq for G1Affine {}
impl PartialEq for G1Affine {
    fn eq(&self, other: &G1Affine) -> bool {
        bool::from(self.ct_eq(other))
    }
}

/// `x` coordinate of the standard generator.
const G1_GEN_X: Fp = Fp([
    0x5cb3_8790_fd53_0c16,
    0x7817_fc67_9976_fff5,
    0x154f_95c7_143b_a1c1,
    0xf0ae_6acd_f3d0_e747,
    0xedce_6ecc_21db_f440,
    0x1201_7741_9e0b_fb75,
]);

/// `y` coordinate of the standard generator.
const G1_GEN_Y: Fp = Fp([
    0xbaac_93d5_0ce7_2271,
    0x8c22_631a_7918_fd8e,
    0xdd59_5f13_5707_25ce,
    0x51ac_5829_5040_5194,
    0x0e1c_8c3f_ad00_59c0,
    0x0bbc_3efc_5008_a26a,
]);

/// The curve constant `b = 4`.
const B_COEFF: Fp = Fp([
    0xaa27_0000_000c_fff3,
    0x53cc_0032_fc34_000a,
    0x478f_e97a_6b0a_807f,
    0xb1d3_7ebe_e6ba_24d7,
    0x8ec9_733b_bf78_ab2f,
    0x09d6_4551_3d83_de7e,
]);

/// A primitive cube root of unity, defining the endomorphism
/// `(x, y) -> (beta*x, y)` used for the subgroup check.
const BETA: Fp = Fp([
    0xcd03_c9e4_8671_f071,
    0x5dab_2246_1fcd_a5d2,
    0x5870_42af_d385_1b95,
    0x8eb6_0ebe_01ba_cb9e,
    0x03f9_7d6e_83d0_50d2,
    0x18f0_2065_5463_8741,
]);

/// `x^2 - 1` for the BLS parameter `x`, as little-endian limbs. The
/// endomorphism eigenvalue on the r-torsion.
const X_SQ_MINUS_1: [u64; 2] = [0x0000_0000_ffff_ffff, 0xac45_a401_0001_a402];

/// The effective G1 cofactor `1 - x`. Multiplying by it maps any curve
/// point into the order-r subgroup, so the full cofactor `(x - 1)^2 / 3`
/// is never needed.
const ONE_MINUS_X: [u64; 1] = [0xd201_0000_0001_0001];

impl G1Affine {
    pub fn identity() -> G1Affine {
        G1Affine {
            x: Fp::zero(),
            y: Fp::zero(),
            infinity: Choice::from(1u8),
        }
    }

    pub fn generator() -> G1Affine {
        G1Affine {
            x: G1_GEN_X,
            y: G1_GEN_Y,
            infinity: Choice::from(0u8),
        }
    }

    /// Builds a point from coordinates without validity checks. The caller
    /// is responsible for checking `is_on_curve` (and `is_torsion_free`
    /// where required) before using the point.
    pub fn from_raw_unchecked(x: Fp, y: Fp, infinity: bool) -> G1Affine {
        G1Affine {
            x,
            y,
            infinity: Choice::from(infinity as u8),
        }
    }

    pub fn x(&self) -> Fp {
        self.x
    }

    pub fn y(&self) -> Fp {
        self.y
    }

    pub fn is_identity(&self) -> Choice {
        self.infinity
    }

    pub fn is_on_curve(&self) -> Choice {
        // y^2 - x^3 = b, with the identity accepted unconditionally
        (self.y.square() - self.x.square() * self.x).ct_eq(&B_COEFF) | self.infinity
    }

    /// Checks membership in the order-r subgroup using the untwisted
    /// endomorphism: `P` is torsion free iff `[x^2 - 1]P == (beta*x_P, y_P)`.
    pub fn is_torsion_free(&self) -> Choice {
        let lhs = G1Projective::from(self).mul_by_limbs(&X_SQ_MINUS_1);
        let endo = G1Affine {
            x: self.x * BETA,
            y: self.y,
            infinity: self.infinity,
        };
        lhs.ct_eq(&G1Projective::from(endo))
    }
}

impl<'a> Neg for &'a G1Affine {
    type Output = G1Affine;

    fn neg(self) -> G1Affine {
        G1Affine {
            x: self.x,
            y: Fp::conditional_select(&-self.y, &Fp::zero(), self.infinity),
            infinity: self.infinity,
        }
    }
}

impl Neg for G1Affine {
    type Output = G1Affine;

    fn neg(self) -> G1Affine {
        -&self
    }
}

impl From<&G1Affine> for G1Projective {
    fn from(p: &G1Affine) -> G1Projective {
        G1Projective {
            x: p.x,
            y: Fp::conditional_select(&p.y, &Fp::one(), p.infinity),
            z: Fp::conditional_select(&Fp::one(), &Fp::zero(), p.infinity),
        }
    }
}

impl From<G1Affine> for G1Projective {
    fn from(p: G1Affine) -> G1Projective {
        G1Projective::from(&p)
    }
}

/// A G1 point in Jacobian coordinates `(X/Z^2, Y/Z^3)`; the identity is
/// any point with `Z = 0`.
#[derive(Copy, Clone)]
pub struct G1Projective {
    pub(crate) x: Fp,
    pub(crate) y: Fp,
    pub(crate) z: Fp,
}

impl fmt::Debug for G1Projective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        G1Affine::from(self).fmt(f)
    }
}

impl ConstantTimeEq for G1Projective {
    fn ct_eq(&self, other: &G1Projective) -> Choice {
        // (X1/Z1^2, Y1/Z1^3) == (X2/Z2^2, Y2/Z2^3) after clearing
        // denominators, with either Z being zero meaning the identity.
        let z1z1 = self.z.square();
        let z2z2 = other.z.square();

        let this_id = self.z.is_zero();
        let other_id = other.z.is_zero();

        let x_eq = (self.x * z2z2).ct_eq(&(other.x * z1z1));
        let y_eq = (self.y * z2z2 * other.z).ct_eq(&(other.y * z1z1 * self.z));

        (this_id & other_id) | ((!this_id) & (!other_id) & x_eq & y_eq)
    }
}

impl Eq for G1Projective {}
impl PartialEq for G1Projective {
    fn eq(&self, other: &G1Projective) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl G1Projective {
    pub fn identity() -> G1Projective {
        G1Projective {
            x: Fp::one(),
            y: Fp::one(),
            z: Fp::zero(),
        }
    }

    pub fn generator() -> G1Projective {
        G1Affine::generator().into()
    }

    pub fn is_identity(&self) -> Choice {
        self.z.is_zero()
    }

    pub fn double(&self) -> G1Projective {
        // dbl-2009-l: no 2-torsion exists on this curve, so the formula
        // is complete away from the identity, and the identity maps to
        // itself via Z3 = 0.
        let a = self.x.square();
        let b = self.y.square();
        let c = b.square();
        let d = (self.x + b).square() - a - c;
        let d = d + d;
        let e = a + a + a;
        let f = e.square();

        let x3 = f - (d + d);
        let c8 = c + c;
        let c8 = c8 + c8;
        let c8 = c8 + c8;
        let y3 = e * (d - x3) - c8;
        let z3 = (self.y * self.z) + (self.y * self.z);

        G1Projective {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    pub fn add(&self, rhs: &G1Projective) -> G1Projective {
        // add-2007-bl with explicit handling of the identity and the
        // doubling case.
        if bool::from(self.is_identity()) {
            return *rhs;
        }
        if bool::from(rhs.is_identity()) {
            return *self;
        }

        let z1z1 = self.z.square();
        let z2z2 = rhs.z.square();
        let u1 = self.x * z2z2;
        let u2 = rhs.x * z1z1;
        let s1 = self.y * z2z2 * rhs.z;
        let s2 = rhs.y * z1z1 * self.z;

        if u1 == u2 {
            if s1 == s2 {
                return self.double();
            }
            return G1Projective::identity();
        }

        let h = u2 - u1;
        let i = (h + h).square();
        let j = h * i;
        let r = (s2 - s1) + (s2 - s1);
        let v = u1 * i;

        let x3 = r.square() - j - (v + v);
        let y3 = r * (v - x3) - (s1 * j + s1 * j);
        let z3 = ((self.z + rhs.z).square() - z1z1 - z2z2) * h;

        G1Projective {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    pub fn add_affine(&self, rhs: &G1Affine) -> G1Projective {
        self.add(&G1Projective::from(rhs))
    }

    /// Variable-time scalar multiplication by a little-endian limb slice.
    pub(crate) fn mul_by_limbs(&self, limbs: &[u64]) -> G1Projective {
        let mut acc = G1Projective::identity();
        let mut started = false;
        for limb in limbs.iter().rev() {
            for i in (0..64).rev() {
                if started {
                    acc = acc.double();
                }
                if (limb >> i) & 1 == 1 {
                    acc = acc.add(self);
                    started = true;
                }
            }
        }
        acc
    }

    /// Variable-time multiplication by a full 256-bit scalar, which is
    /// treated as a plain integer rather than reduced modulo the group
    /// order.
    pub fn mul(&self, scalar: &Scalar) -> G1Projective {
        let mut acc = G1Projective::identity();
        for bit in scalar.bits() {
            acc = acc.double();
            if bit {
                acc = acc.add(self);
            }
        }
        acc
    }

    /// Multiplies by `1 - x`, mapping any curve point into the order-r
    /// subgroup.
    pub fn clear_cofactor(&self) -> G1Projective {
        self.mul_by_limbs(&ONE_MINUS_X)
    }

    pub fn neg(&self) -> G1Projective {
        G1Projective {
            x: self.x,
            y: -self.y,
            z: self.z,
        }
    }
}

impl<'a> Neg for &'a G1Projective {
    type Output = G1Projective;

    fn neg(self) -> G1Projective {
        self.neg()
    }
}

impl Neg for G1Projective {
    type Output = G1Projective;

    fn neg(self) -> G1Projective {
        -&self
    }
}

impl From<&G1Projective> for G1Affine {
    fn from(p: &G1Projective) -> G1Affine {
        // A single inversion per conversion; callers batching conversions
        // are expected to stay projective until the end.
        match Option::<Fp>::from(p.z.invert()) {
            None => G1Affine::identity(),
            Some(zinv) => {
                let zinv2 = zinv.square();
                G1Affine {
                    x: p.x * zinv2,
                    y: p.y * zinv2 * zinv,
                    infinity: Choice::from(0u8),
                }
            }
        }
    }
}

impl From<G1Projective> for G1Affine {
    fn from(p: G1Projective) -> G1Affine {
        G1Affine::from(&p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// On the curve (`2^2 = 0^3 + 4`) but outside the order-r subgroup.
    fn low_order_point() -> G1Affine {
        G1Affine::from_raw_unchecked(Fp::zero(), Fp::from(2), false)
    }

    #[test]
    fn generator_is_valid() {
        let g = G1Affine::generator();
        assert!(bool::from(g.is_on_curve()));
        assert!(bool::from(g.is_torsion_free()));
        assert!(!bool::from(g.is_identity()));
    }

    #[test]
    fn identity_is_valid() {
        let id = G1Affine::identity();
        assert!(bool::from(id.is_on_curve()));
        assert!(bool::from(id.is_torsion_free()));
        assert!(bool::from(G1Projective::identity().is_identity()));
    }

    #[test]
    fn doubling_matches_addition() {
        let g = G1Projective::generator();
        assert_eq!(g.double(), g.add(&g));
        assert_eq!(G1Projective::identity().double(), G1Projective::identity());
    }

    #[test]
    fn addition_laws() {
        let g = G1Projective::generator();
        let id = G1Projective::identity();
        assert_eq!(g.add(&id), g);
        assert_eq!(id.add(&g), g);
        assert_eq!(g.add(&g.neg()), id);

        // (2G + G) == (G + 2G)
        let two_g = g.double();
        assert_eq!(two_g.add(&g), g.add(&two_g));
    }

    #[test]
    fn scalar_multiplication() {
        let g = G1Projective::generator();
        let mut five = [0u8; 32];
        five[31] = 5;
        let expected = g.double().double().add(&g);
        assert_eq!(g.mul(&Scalar::from_be_bytes(five)), expected);
        assert_eq!(g.mul(&Scalar::ZERO), G1Projective::identity());
    }

    #[test]
    fn subgroup_check_rejects_low_order_point() {
        let p = low_order_point();
        assert!(bool::from(p.is_on_curve()));
        assert!(!bool::from(p.is_torsion_free()));
    }

    #[test]
    fn cofactor_clearing_lands_in_subgroup() {
        let p = G1Projective::from(low_order_point()).clear_cofactor();
        let affine = G1Affine::from(p);
        assert!(bool::from(affine.is_on_curve()));
        assert!(bool::from(affine.is_torsion_free()));
    }

    #[test]
    fn affine_projective_roundtrip() {
        let g = G1Projective::generator().double().double();
        let affine = G1Affine::from(g);
        assert_eq!(G1Projective::from(affine), g);
        assert_eq!(
            G1Affine::from(G1Projective::identity()),
            G1Affine::identity()
        );
    }
}
