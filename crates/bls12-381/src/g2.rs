//! The G2 group: points on the twist `y^2 = x^3 + 4(1 + u)` over `Fp2`.

use core::fmt;
use core::ops::Neg;

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use crate::fp::Fp;
use crate::fp2::Fp2;
use crate::scalar::Scalar;

/// A G2 point in affine coordinates, with an explicit point-at-infinity
/// flag.
#[derive(Copy, Clone)]
pub struct G2Affine {
    pub(crate) x: Fp2,
    pub(crate) y: Fp2,
    infinity: Choice,
}

impl fmt::Debug for G2Affine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if bool::from(self.infinity) {
            write!(f, "Infinity")
        } else {
            write!(f, "({:?}, {:?})", self.x, self.y)
        }
    }
}

impl ConstantTimeEq for G2Affine {
    fn ct_eq(&self, other: &G2Affine) -> Choice {
        (self.infinity & other.infinity)
            | ((!self.infinity)
                & (!other.infinity)
                & self.x.ct_eq(&other.x)
                & self.y.ct_eq(&other.y))
    }
}

impl Eq for G2Affine {}
impl PartialEq for G2Affine {
    fn eq(&self, other: &G2Affine) -> bool {
        bool::from(self.ct_eq(other))
    }
}

const G2_GEN_X: Fp2 = Fp2 {
    c0: Fp([
        0xf5f2_8fa2_0294_0a10,
        0xb3f5_fb26_87b4_961a,
        0xa1a8_93b5_3e2a_e580,
        0x9894_999d_1a3c_aee9,
        0x6f67_b763_1863_366b,
        0x0581_9192_4350_bcd7,
    ]),
    c1: Fp([
        0xa5a9_c075_9e23_f606,
        0xaaa0_c59d_bccd_60c3,
        0x3bb1_7e18_e286_7806,
        0x1b1a_b6cc_8541_b367,
        0xc2b6_ed0e_f215_8547,
        0x1192_2a09_7360_edf3,
    ]),
};

const G2_GEN_Y: Fp2 = Fp2 {
    c0: Fp([
        0x4c73_0af8_6049_4c4a,
        0x597c_fa1f_5e36_9c5a,
        0xe7e6_856c_aa0a_635a,
        0xbbef_b5e9_6e0d_495f,
        0x07d3_a975_f0ef_25a2,
        0x0083_fd8e_7e80_dae5,
    ]),
    c1: Fp([
        0xadc0_fc92_df64_b05d,
        0x18aa_270a_2b14_61dc,
        0x86ad_ac6a_3be4_eba0,
        0x7949_5c4e_c93d_a33a,
        0xe717_5850_a43c_caed,
        0x0b2b_c2a1_63de_1bf2,
    ]),
};

/// The twist constant `b' = 4(1 + u)`.
const B2_COEFF: Fp2 = Fp2 {
    c0: Fp([
        0xaa27_0000_000c_fff3,
        0x53cc_0032_fc34_000a,
        0x478f_e97a_6b0a_807f,
        0xb1d3_7ebe_e6ba_24d7,
        0x8ec9_733b_bf78_ab2f,
        0x09d6_4551_3d83_de7e,
    ]),
    c1: Fp([
        0xaa27_0000_000c_fff3,
        0x53cc_0032_fc34_000a,
        0x478f_e97a_6b0a_807f,
        0xb1d3_7ebe_e6ba_24d7,
        0x8ec9_733b_bf78_ab2f,
        0x09d6_4551_3d83_de7e,
    ]),
};

/// `x` coefficient of the twisting endomorphism psi:
/// `1 / (1 + u)^((p - 1) / 3)`
const PSI_X_COEFF: Fp2 = Fp2 {
    c0: Fp([
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
    ]),
    c1: Fp([
        0x890d_c9e4_8675_45c3,
        0x2af3_2253_3285_a5d5,
        0x5088_0866_309b_7e2c,
        0xa20d_1b8c_7e88_1024,
        0x14e4_f04f_e2db_9068,
        0x14e5_6d3f_1564_853a,
    ]),
};

/// `y` coefficient of psi: `1 / (1 + u)^((p - 1) / 2)`
const PSI_Y_COEFF: Fp2 = Fp2 {
    c0: Fp([
        0x3e2f_585d_a55c_9ad1,
        0x4294_213d_86c1_8183,
        0x3828_44c8_8b62_3732,
        0x92ad_2afd_1910_3e18,
        0x1d79_4e4f_ac7c_f0b9,
        0x0bd5_92fc_7d82_5ec8,
    ]),
    c1: Fp([
        0x7bcf_a7a2_5aa3_0fda,
        0xdc17_dec1_2a92_7e7c,
        0x2f08_8dd8_6b4e_bef1,
        0xd1ca_2087_da74_d4a7,
        0x2da2_5966_96ce_bc1d,
        0x0e2b_7eed_bbfd_87d2,
    ]),
};

/// `x` coefficient of psi^2, an element of the base field.
const PSI2_X_COEFF: Fp2 = Fp2 {
    c0: Fp([
        0xcd03_c9e4_8671_f071,
        0x5dab_2246_1fcd_a5d2,
        0x5870_42af_d385_1b95,
        0x8eb6_0ebe_01ba_cb9e,
        0x03f9_7d6e_83d0_50d2,
        0x18f0_2065_5463_8741,
    ]),
    c1: Fp([
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
        0x0000_0000_0000_0000,
    ]),
};

/// Absolute value of the BLS parameter `x` (the parameter itself is
/// negative).
pub(crate) const X_ABS: u64 = 0xd201_0000_0001_0000;

impl G2Affine {
    pub fn identity() -> G2Affine {
        G2Affine {
            x: Fp2::zero(),
            y: Fp2::zero(),
            infinity: Choice::from(1u8),
        }
    }

    pub fn generator() -> G2Affine {
        G2Affine {
            x: G2_GEN_X,
            y: G2_GEN_Y,
            infinity: Choice::from(0u8),
        }
    }

    /// Builds a point from coordinates without validity checks. The caller
    /// is responsible for checking `is_on_curve` (and `is_torsion_free`
    /// where required) before using the point.
    pub fn from_raw_unchecked(x: Fp2, y: Fp2, infinity: bool) -> G2Affine {
        G2Affine {
            x,
            y,
            infinity: Choice::from(infinity as u8),
        }
    }

    pub fn x(&self) -> Fp2 {
        self.x
    }

    pub fn y(&self) -> Fp2 {
        self.y
    }

    pub fn is_identity(&self) -> Choice {
        self.infinity
    }

    pub fn is_on_curve(&self) -> Choice {
        // y^2 - x^3 = b', with the identity accepted unconditionally
        (self.y.square() - self.x.square() * self.x).ct_eq(&B2_COEFF) | self.infinity
    }

    /// Checks membership in the order-r subgroup: `P` is torsion free iff
    /// `psi(P) == [-x]P`, where psi is the twisting endomorphism.
    pub fn is_torsion_free(&self) -> Choice {
        let lhs = G2Projective::from(self.psi());
        let rhs = G2Projective::from(self).mul_by_limbs(&[X_ABS]).neg();
        lhs.ct_eq(&rhs)
    }

    /// The twisting endomorphism `psi = untwist . frobenius . twist`.
    pub(crate) fn psi(&self) -> G2Affine {
        G2Affine {
            x: self.x.conjugate() * PSI_X_COEFF,
            y: self.y.conjugate() * PSI_Y_COEFF,
            infinity: self.infinity,
        }
    }

    /// `psi` applied twice, which only touches the `x` coordinate sign
    /// structure: `psi^2(x, y) = (c * x, -y)`.
    pub(crate) fn psi2(&self) -> G2Affine {
        G2Affine {
            x: self.x * PSI2_X_COEFF,
            y: -self.y,
            infinity: self.infinity,
        }
    }
}

impl<'a> Neg for &'a G2Affine {
    type Output = G2Affine;

    fn neg(self) -> G2Affine {
        G2Affine {
            x: self.x,
            y: Fp2::conditional_select(&-self.y, &Fp2::zero(), self.infinity),
            infinity: self.infinity,
        }
    }
}

impl Neg for G2Affine {
    type Output = G2Affine;

    fn neg(self) -> G2Affine {
        -&self
    }
}

impl From<&G2Affine> for G2Projective {
    fn from(p: &G2Affine) -> G2Projective {
        G2Projective {
            x: p.x,
            y: Fp2::conditional_select(&p.y, &Fp2::one(), p.infinity),
            z: Fp2::conditional_select(&Fp2::one(), &Fp2::zero(), p.infinity),
        }
    }
}

impl From<G2Affine> for G2Projective {
    fn from(p: G2Affine) -> G2Projective {
        G2Projective::from(&p)
    }
}

/// A G2 point in Jacobian coordinates; the identity is any point with
/// `Z = 0`.
#[derive(Copy, Clone)]
pub struct G2Projective {
    pub(crate) x: Fp2,
    pub(crate) y: Fp2,
    pub(crate) z: Fp2,
}

impl fmt::Debug for G2Projective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        G2Affine::from(self).fmt(f)
    }
}

impl ConstantTimeEq for G2Projective {
    fn ct_eq(&self, other: &G2Projective) -> Choice {
        let z1z1 = self.z.square();
        let z2z2 = other.z.square();

        let this_id = self.z.is_zero();
        let other_id = other.z.is_zero();

        let x_eq = (self.x * z2z2).ct_eq(&(other.x * z1z1));
        let y_eq = (self.y * z2z2 * other.z).ct_eq(&(other.y * z1z1 * self.z));

        (this_id & other_id) | ((!this_id) & (!other_id) & x_eq & y_eq)
    }
}

impl Eq for G2Projective {}
impl PartialEq for G2Projective {
    fn eq(&self, other: &G2Projective) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl G2Projective {
    pub fn identity() -> G2Projective {
        G2Projective {
            x: Fp2::one(),
            y: Fp2::one(),
            z: Fp2::zero(),
        }
    }

    pub fn generator() -> G2Projective {
        G2Affine::generator().into()
    }

    pub fn is_identity(&self) -> Choice {
        self.z.is_zero()
    }

    pub fn double(&self) -> G2Projective {
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

        G2Projective {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    pub fn add(&self, rhs: &G2Projective) -> G2Projective {
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
            return G2Projective::identity();
        }

        let h = u2 - u1;
        let i = (h + h).square();
        let j = h * i;
        let r = (s2 - s1) + (s2 - s1);
        let v = u1 * i;

        let x3 = r.square() - j - (v + v);
        let y3 = r * (v - x3) - (s1 * j + s1 * j);
        let z3 = ((self.z + rhs.z).square() - z1z1 - z2z2) * h;

        G2Projective {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    pub fn add_affine(&self, rhs: &G2Affine) -> G2Projective {
        self.add(&G2Projective::from(rhs))
    }

    /// Variable-time scalar multiplication by a little-endian limb slice.
    pub(crate) fn mul_by_limbs(&self, limbs: &[u64]) -> G2Projective {
        let mut acc = G2Projective::identity();
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

    /// Variable-time multiplication by a full 256-bit scalar, treated as a
    /// plain integer.
    pub fn mul(&self, scalar: &Scalar) -> G2Projective {
        let mut acc = G2Projective::identity();
        for bit in scalar.bits() {
            acc = acc.double();
            if bit {
                acc = acc.add(self);
            }
        }
        acc
    }

    /// Maps any curve point into the order-r subgroup using the
    /// Budroni-Pintore psi chain, which replaces a multiplication by the
    /// large G2 cofactor with a handful of small multiplications and
    /// endomorphism applications.
    pub fn clear_cofactor(&self) -> G2Projective {
        let p = *self;
        let p_affine = G2Affine::from(&p);

        // t1 = [x]P, with the negative BLS parameter x = -|x|
        let t1 = p.mul_by_limbs(&[X_ABS]).neg();
        // t2 = psi(P)
        let t2 = G2Projective::from(p_affine.psi());
        // t3 = psi^2(2P) - t2
        let double_affine = G2Affine::from(p.double());
        let t3 = G2Projective::from(double_affine.psi2()).add(&t2.neg());
        // t2 = [x](t1 + t2)
        let t2 = t1.add(&t2).mul_by_limbs(&[X_ABS]).neg();
        // t3 + t2 - t1 - P
        t3.add(&t2).add(&t1.neg()).add(&p.neg())
    }

    pub fn neg(&self) -> G2Projective {
        G2Projective {
            x: self.x,
            y: -self.y,
            z: self.z,
        }
    }
}

impl<'a> Neg for &'a G2Projective {
    type Output = G2Projective;

    fn neg(self) -> G2Projective {
        self.neg()
    }
}

impl Neg for G2Projective {
    type Output = G2Projective;

    fn neg(self) -> G2Projective {
        -&self
    }
}

impl From<&G2Projective> for G2Affine {
    fn from(p: &G2Projective) -> G2Affine {
        match Option::<Fp2>::from(p.z.invert()) {
            None => G2Affine::identity(),
            Some(zinv) => {
                let zinv2 = zinv.square();
                G2Affine {
                    x: p.x * zinv2,
                    y: p.y * zinv2 * zinv,
                    infinity: Choice::from(0u8),
                }
            }
        }
    }
}

impl From<G2Projective> for G2Affine {
    fn from(p: G2Projective) -> G2Affine {
        G2Affine::from(&p)
    }
}
