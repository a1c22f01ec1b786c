//! The quadratic extension `Fp2 = Fp[u] / (u^2 + 1)`.

use core::fmt;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use crate::fp::Fp;

#[derive(Copy, Clone, Default)]
pub struct Fp2 {
    pub c0: Fp,
    pub c1: Fp,
}

impl fmt::Debug for Fp2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} + {:?}*u", self.c0, self.c1)
    }
}

impl From<Fp> for Fp2 {
    fn from(f: Fp) -> Fp2 {
        Fp2 {
            c0: f,
            c1: Fp::zero(),
        }
    }
}

impl ConstantTimeEq for Fp2 {
    fn ct_eq(&self, other: &Fp2) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1)
    }
}

impl Eq for Fp2 {}
impl PartialEq for Fp2 {
    fn eq(&self, other: &Fp2) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl ConditionallySelectable for Fp2 {
    fn conditional_select(a: &Fp2, b: &Fp2, choice: Choice) -> Fp2 {
        Fp2 {
            c0: Fp::conditional_select(&a.c0, &b.c0, choice),
            c1: Fp::conditional_select(&a.c1, &b.c1, choice),
        }
    }
}

impl Fp2 {
    pub const fn zero() -> Fp2 {
        Fp2 {
            c0: Fp::zero(),
            c1: Fp::zero(),
        }
    }

    pub const fn one() -> Fp2 {
        Fp2 {
            c0: Fp::one(),
            c1: Fp::zero(),
        }
    }

    pub fn is_zero(&self) -> Choice {
        self.c0.is_zero() & self.c1.is_zero()
    }

    /// Multiplies by the sextic nonresidue `1 + u`.
    pub fn mul_by_nonresidue(&self) -> Fp2 {
        // (c0 + c1*u)(1 + u) = (c0 - c1) + (c0 + c1)*u
        Fp2 {
            c0: self.c0 - self.c1,
            c1: self.c0 + self.c1,
        }
    }

    /// The sign of a field element per RFC 9380, extended
    /// lexicographically to the quadratic extension.
    pub fn sgn0(&self) -> Choice {
        let sign_0 = self.c0.sgn0();
        let zero_0 = self.c0.is_zero();
        let sign_1 = self.c1.sgn0();
        sign_0 | (zero_0 & sign_1)
    }

    pub fn conjugate(&self) -> Fp2 {
        Fp2 {
            c0: self.c0,
            c1: -self.c1,
        }
    }

    /// Raises this element to `p`. For `Fp2` the Frobenius endomorphism is
    /// simply conjugation.
    pub fn frobenius_map(&self) -> Fp2 {
        self.conjugate()
    }

    pub fn square(&self) -> Fp2 {
        // (a + b*u)^2 = (a + b)(a - b) + 2ab*u
        let a = self.c0 + self.c1;
        let b = self.c0 - self.c1;
        let c = self.c0 + self.c0;

        Fp2 {
            c0: a * b,
            c1: c * self.c1,
        }
    }

    pub fn mul(&self, rhs: &Fp2) -> Fp2 {
        // Karatsuba with the u^2 = -1 reduction folded in:
        //   c0 = a0*b0 - a1*b1
        //   c1 = (a0 + a1)(b0 + b1) - a0*b0 - a1*b1
        let t0 = self.c0 * rhs.c0;
        let t1 = self.c1 * rhs.c1;
        let t2 = (self.c0 + self.c1) * (rhs.c0 + rhs.c1);

        Fp2 {
            c0: t0 - t1,
            c1: t2 - t0 - t1,
        }
    }

    pub fn add(&self, rhs: &Fp2) -> Fp2 {
        Fp2 {
            c0: self.c0 + rhs.c0,
            c1: self.c1 + rhs.c1,
        }
    }

    pub fn sub(&self, rhs: &Fp2) -> Fp2 {
        Fp2 {
            c0: self.c0 - rhs.c0,
            c1: self.c1 - rhs.c1,
        }
    }

    pub fn neg(&self) -> Fp2 {
        Fp2 {
            c0: -self.c0,
            c1: -self.c1,
        }
    }

    /// Scales both coefficients by a base field element.
    pub fn mul_by_fp(&self, f: &Fp) -> Fp2 {
        Fp2 {
            c0: self.c0 * f,
            c1: self.c1 * f,
        }
    }

    pub fn invert(&self) -> CtOption<Fp2> {
        // 1 / (a + b*u) = (a - b*u) / (a^2 + b^2)
        (self.c0.square() + self.c1.square()).invert().map(|t| Fp2 {
            c0: self.c0 * t,
            c1: -(self.c1 * t),
        })
    }

    pub fn pow_vartime(&self, by: &[u64; 6]) -> Fp2 {
        let mut res = Fp2::one();
        for e in by.iter().rev() {
            for i in (0..64).rev() {
                res = res.square();
                if ((*e >> i) & 1) == 1 {
                    res *= self;
                }
            }
        }
        res
    }

    /// Computes a square root of this element, if one exists.
    pub fn sqrt(&self) -> CtOption<Fp2> {
        // Algorithm 9 of https://eprint.iacr.org/2012/685.pdf, valid since
        // p = 3 (mod 4). The result is verified, so a nonresidue yields
        // `None` rather than garbage.

        // (p - 3) / 4
        let a1 = self.pow_vartime(&[
            0xee7f_bfff_ffff_eaaa,
            0x07aa_ffff_ac54_ffff,
            0xd9cc_34a8_3dac_3d89,
            0xd91d_d2e1_3ce1_44af,
            0x92c6_e9ed_90d2_eb35,
            0x0680_447a_8e5f_f9a6,
        ]);
        let x0 = a1 * self;
        let alpha = a1 * x0;

        let sqrt_when_neg_one = x0
            * Fp2 {
                c0: Fp::zero(),
                c1: Fp::one(),
            };
        // (p - 1) / 2
        let sqrt_otherwise = x0
            * (alpha + Fp2::one()).pow_vartime(&[
                0xdcff_7fff_ffff_d555,
                0x0f55_ffff_58a9_ffff,
                0xb398_6950_7b58_7b12,
                0xb23b_a5c2_79c2_895f,
                0x258d_d3db_21a5_d66b,
                0x0d00_88f5_1cbf_f34d,
            ]);

        let x = Fp2::conditional_select(
            &sqrt_otherwise,
            &sqrt_when_neg_one,
            alpha.ct_eq(&Fp2::one().neg()),
        );

        CtOption::new(x, x.square().ct_eq(self))
    }
}

impl<'a> Neg for &'a Fp2 {
    type Output = Fp2;

    fn neg(self) -> Fp2 {
        self.neg()
    }
}

impl Neg for Fp2 {
    type Output = Fp2;

    fn neg(self) -> Fp2 {
        -&self
    }
}

impl<'a, 'b> Add<&'b Fp2> for &'a Fp2 {
    type Output = Fp2;

    fn add(self, rhs: &'b Fp2) -> Fp2 {
        self.add(rhs)
    }
}

impl<'a, 'b> Sub<&'b Fp2> for &'a Fp2 {
    type Output = Fp2;

    fn sub(self, rhs: &'b Fp2) -> Fp2 {
        self.sub(rhs)
    }
}

impl<'a, 'b> Mul<&'b Fp2> for &'a Fp2 {
    type Output = Fp2;

    fn mul(self, rhs: &'b Fp2) -> Fp2 {
        self.mul(rhs)
    }
}

impl_binops_additive!(Fp2, Fp2);
impl_binops_multiplicative!(Fp2, Fp2);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_and_zero() {
        assert_eq!(Fp2::zero(), Fp2::zero());
        assert_ne!(Fp2::zero(), Fp2::one());
        assert!(bool::from(Fp2::zero().is_zero()));
        assert!(!bool::from(Fp2::one().is_zero()));
    }

    #[test]
    fn squaring_matches_multiplication() {
        let a = Fp2 {
            c0: Fp::from(7),
            c1: Fp::from(11),
        };
        assert_eq!(a.square(), a * a);

        let u = Fp2 {
            c0: Fp::zero(),
            c1: Fp::one(),
        };
        // u^2 = -1
        assert_eq!(u.square(), -Fp2::one());
    }

    #[test]
    fn nonresidue_multiplication() {
        let a = Fp2 {
            c0: Fp::from(2),
            c1: Fp::from(3),
        };
        let xi = Fp2 {
            c0: Fp::one(),
            c1: Fp::one(),
        };
        assert_eq!(a.mul_by_nonresidue(), a * xi);
    }

    #[test]
    fn inversion() {
        let a = Fp2 {
            c0: Fp::from(13),
            c1: Fp::from(29),
        };
        let inv = a.invert().unwrap();
        assert_eq!(a * inv, Fp2::one());

        assert!(bool::from(Fp2::zero().invert().is_none()));
    }

    #[test]
    fn sqrt_roundtrip() {
        let a = Fp2 {
            c0: Fp::from(5),
            c1: Fp::from(17),
        };
        let sq = a.square();
        let r = sq.sqrt().unwrap();
        assert!(r == a || r == -a);

        // 2 + u has nonresidue norm 5, so it has no square root.
        let nonsquare = Fp2 {
            c0: Fp::from(2),
            c1: Fp::one(),
        };
        assert!(bool::from(nonsquare.sqrt().is_none()));
    }

    #[test]
    fn conjugation() {
        let a = Fp2 {
            c0: Fp::from(3),
            c1: Fp::from(4),
        };
        // a * conj(a) is the norm, which lies in the base field.
        let n = a * a.conjugate();
        assert!(bool::from(n.c1.is_zero()));
        assert_eq!(a.frobenius_map(), a.conjugate());
    }

    #[test]
    fn sgn0_rules() {
        let a = Fp2 {
            c0: Fp::from(2),
            c1: Fp::from(1),
        };
        assert!(!bool::from(a.sgn0()));
        let b = Fp2 {
            c0: Fp::zero(),
            c1: Fp::from(1),
        };
        assert!(bool::from(b.sgn0()));
        assert!(!bool::from(Fp2::zero().sgn0()));
    }
}
