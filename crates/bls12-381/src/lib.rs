//! # bls12-381-core
//!
//! Self-contained arithmetic for the BLS12-381 pairing-friendly elliptic
//! curve construction: the base field and its extension tower, the G1 and
//! G2 groups, multi-scalar multiplication, the simplified SWU map to both
//! groups, and the optimal ate pairing.
//!
//! Field arithmetic is constant-time (Montgomery form, `subtle` for
//! selects and comparisons). Group-level routines branch only on data that
//! is public in the intended use, such as point validity and encoded
//! inputs.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

#[macro_use]
mod util;

mod fp;
mod fp12;
mod fp2;
mod fp6;
mod g1;
mod g2;
mod map;
mod msm;
mod pairing;
mod scalar;

pub use fp::Fp;
pub use fp12::Fp12;
pub use fp2::Fp2;
pub use fp6::Fp6;
pub use g1::{G1Affine, G1Projective};
pub use g2::{G2Affine, G2Projective};
pub use map::{map_to_g1, map_to_g2};
pub use msm::{msm_g1, msm_g2};
pub use pairing::{final_exponentiation, multi_miller_loop, pairing, pairing_check};
pub use scalar::Scalar;
