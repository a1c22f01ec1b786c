//! The degree-twelve extension `Fp12 = Fp6[w] / (w^2 - v)`, the target
//! group field of the pairing.

use core::fmt;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use crate::fp::Fp;
use crate::fp2::Fp2;
use crate::fp6::Fp6;

#[derive(Copy, Clone, Default)]
pub struct Fp12 {
    pub c0: Fp6,
    pub c1: Fp6,
}

impl fmt::Debug for Fp12 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} + ({:?})*w", self.c0, self.c1)
    }
}

impl From<Fp6> for Fp12 {
    fn from(f: Fp6) -> Fp12 {
        Fp12 {
            c0: f,
            c1: Fp6::zero(),
        }
    }
}

impl From<Fp2> for Fp12 {
    fn from(f: Fp2) -> Fp12 {
        Fp12 {
            c0: Fp6::from(f),
            c1: Fp6::zero(),
        }
    }
}

impl ConstantTimeEq for Fp12 {
    fn ct_eq(&self, other: &Fp12) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1)
    }
}

impl Eq for Fp12 {}
impl PartialEq for Fp12 {
    fn eq(&self, other: &Fp12) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl ConditionallySelectable for Fp12 {
    fn conditional_select(a: &Fp12, b: &Fp12, choice: Choice) -> Fp12 {
        Fp12 {
            c0: Fp6::conditional_select(&a.c0, &b.c0, choice),
            c1: Fp6::conditional_select(&a.c1, &b.c1, choice),
        }
    }
}

/// `(1 + u)^((p - 1) / 6)`
const FROBENIUS_COEFF_C1: Fp2 = Fp2 {
    c0: Fp([
        0x0708_9552_b319_d465,
        0xc669_5f92_b50a_8313,
        0x97e8_3ccc_d117_228f,
        0xa35b_aeca_b2dc_29ee,
        0x1ce3_93ea_5daa_ce4d,
        0x08f2_220f_b0fb_66eb,
    ]),
    c1: Fp([
        0xb2f6_6aad_4ce5_d646,
        0x5842_a06b_fc49_7cec,
        0xcf48_95d4_2599_d394,
        0xc11b_9cba_40a8_e8d0,
        0x2e38_13cb_e5a0_de89,
        0x110e_efda_8884_7faf,
    ]),
};

impl Fp12 {
    pub const fn zero() -> Fp12 {
        Fp12 {
            c0: Fp6::zero(),
            c1: Fp6::zero(),
        }
    }

    pub const fn one() -> Fp12 {
        Fp12 {
            c0: Fp6::one(),
            c1: Fp6::zero(),
        }
    }

    pub fn is_zero(&self) -> Choice {
        self.c0.is_zero() & self.c1.is_zero()
    }

    /// Conjugation over `Fp6`, which for unitary elements (such as Miller
    /// loop outputs after the easy part of the final exponentiation)
    /// coincides with inversion and with raising to `p^6`.
    pub fn conjugate(&self) -> Fp12 {
        Fp12 {
            c0: self.c0,
            c1: -self.c1,
        }
    }

    /// Raises this element to `p`.
    pub fn frobenius_map(&self) -> Fp12 {
        Fp12 {
            c0: self.c0.frobenius_map(),
            c1: self.c1.frobenius_map().mul_by_fp2(&FROBENIUS_COEFF_C1),
        }
    }

    pub fn square(&self) -> Fp12 {
        // Complex squaring over Fp6 with w^2 = v:
        //   c0' = (c0 + c1)(c0 + v*c1) - c0*c1 - v*c0*c1
        //   c1' = 2*c0*c1
        let ab = self.c0 * self.c1;
        let c0c1 = self.c0 + self.c1;
        let t = (self.c1.mul_by_nonresidue() + self.c0) * c0c1 - ab;

        Fp12 {
            c0: t - ab.mul_by_nonresidue(),
            c1: ab + ab,
        }
    }

    pub fn mul(&self, rhs: &Fp12) -> Fp12 {
        let aa = self.c0 * rhs.c0;
        let bb = self.c1 * rhs.c1;
        let o = rhs.c0 + rhs.c1;

        Fp12 {
            c0: bb.mul_by_nonresidue() + aa,
            c1: (self.c1 + self.c0) * o - aa - bb,
        }
    }

    pub fn add(&self, rhs: &Fp12) -> Fp12 {
        Fp12 {
            c0: self.c0 + rhs.c0,
            c1: self.c1 + rhs.c1,
        }
    }

    pub fn sub(&self, rhs: &Fp12) -> Fp12 {
        Fp12 {
            c0: self.c0 - rhs.c0,
            c1: self.c1 - rhs.c1,
        }
    }

    pub fn neg(&self) -> Fp12 {
        Fp12 {
            c0: -self.c0,
            c1: -self.c1,
        }
    }

    pub fn invert(&self) -> CtOption<Fp12> {
        // 1 / (a + b*w) = (a - b*w) / (a^2 - v*b^2)
        (self.c0.square() - self.c1.square().mul_by_nonresidue())
            .invert()
            .map(|t| Fp12 {
                c0: self.c0 * t,
                c1: -(self.c1 * t),
            })
    }

    /// Variable-time exponentiation by a 64-bit exponent. Used only with
    /// fixed public exponents derived from the curve parameter.
    pub fn pow_vartime(&self, by: u64) -> Fp12 {
        let mut res = Fp12::one();
        for i in (0..64).rev() {
            res = res.square();
            if ((by >> i) & 1) == 1 {
                res *= self;
            }
        }
        res
    }
}

impl<'a> Neg for &'a Fp12 {
    type Output = Fp12;

    fn neg(self) -> Fp12 {
        self.neg()
    }
}

impl Neg for Fp12 {
    type Output = Fp12;

    fn neg(self) -> Fp12 {
        -&self
    }
}

impl<'a, 'b> Add<&'b Fp12> for &'a Fp12 {
    type Output = Fp12;

    fn add(self, rhs: &'b Fp12) -> Fp12 {
        self.add(rhs)
    }
}

impl<'a, 'b> Sub<&'b Fp12> for &'a Fp12 {
    type Output = Fp12;

    fn sub(self, rhs: &'b Fp12) -> Fp12 {
        self.sub(rhs)
    }
}

impl<'a, 'b> Mul<&'b Fp12> for &'a Fp12 {
    type Output = Fp12;

    fn mul(self, rhs: &'b Fp12) -> Fp12 {
        self.mul(rhs)
    }
}

impl_binops_additive!(Fp12, Fp12);
impl_binops_multiplicative!(Fp12, Fp12);
