//! Conversions between EIP-2537 byte strings and the curve types.
//!
//! Field elements travel as 48 big-endian bytes (padded to 64 by the
//! callers, stripped before reaching this module) and must be canonical,
//! i.e. strictly below the field modulus. The all-zero coordinate
//! encoding denotes the point at infinity and bypasses the curve
//! equation.

use bls12_381::{Fp, Fp2, G1Affine, G2Affine, Scalar};

use crate::consts::{
    FP_LENGTH, PADDED_FP_LENGTH, PADDED_G1_LENGTH, PADDED_G2_LENGTH, PADDING_LENGTH, SCALAR_LENGTH,
};
use crate::PrecompileError;

/// Decodes a canonical base field element.
pub(crate) fn read_fp(bytes: &[u8; FP_LENGTH]) -> Result<Fp, PrecompileError> {
    Option::<Fp>::from(Fp::from_bytes(bytes)).ok_or(PrecompileError::InvalidEncoding)
}

/// Decodes a canonical `Fp2` element from its two components.
pub(crate) fn read_fp2(
    c0: &[u8; FP_LENGTH],
    c1: &[u8; FP_LENGTH],
) -> Result<Fp2, PrecompileError> {
    Ok(Fp2 {
        c0: read_fp(c0)?,
        c1: read_fp(c1)?,
    })
}

/// Decodes a G1 point. The all-zero encoding is the point at infinity;
/// anything else must be a canonical on-curve pair. The subgroup check is
/// the caller's choice: additions skip it, MSM and pairing require it.
pub(crate) fn read_g1(
    x: &[u8; FP_LENGTH],
    y: &[u8; FP_LENGTH],
    subgroup_check: bool,
) -> Result<G1Affine, PrecompileError> {
    if x.iter().all(|&b| b == 0) && y.iter().all(|&b| b == 0) {
        return Ok(G1Affine::identity());
    }

    let point = G1Affine::from_raw_unchecked(read_fp(x)?, read_fp(y)?, false);
    if !bool::from(point.is_on_curve()) {
        return Err(PrecompileError::InvalidPoint);
    }
    if subgroup_check && !bool::from(point.is_torsion_free()) {
        return Err(PrecompileError::InvalidPoint);
    }
    Ok(point)
}

/// Decodes a G2 point from its four coordinate components, in the order
/// `x.c0, x.c1, y.c0, y.c1`.
pub(crate) fn read_g2(
    x_0: &[u8; FP_LENGTH],
    x_1: &[u8; FP_LENGTH],
    y_0: &[u8; FP_LENGTH],
    y_1: &[u8; FP_LENGTH],
    subgroup_check: bool,
) -> Result<G2Affine, PrecompileError> {
    let is_zero = |b: &[u8; FP_LENGTH]| b.iter().all(|&v| v == 0);
    if is_zero(x_0) && is_zero(x_1) && is_zero(y_0) && is_zero(y_1) {
        return Ok(G2Affine::identity());
    }

    let point = G2Affine::from_raw_unchecked(read_fp2(x_0, x_1)?, read_fp2(y_0, y_1)?, false);
    if !bool::from(point.is_on_curve()) {
        return Err(PrecompileError::InvalidPoint);
    }
    if subgroup_check && !bool::from(point.is_torsion_free()) {
        return Err(PrecompileError::InvalidPoint);
    }
    Ok(point)
}

/// Decodes a multiplication scalar. Scalars are plain 256-bit integers
/// and are deliberately not reduced modulo the group order.
pub(crate) fn read_scalar(bytes: &[u8]) -> Result<Scalar, PrecompileError> {
    let bytes: &[u8; SCALAR_LENGTH] = bytes
        .try_into()
        .map_err(|_| PrecompileError::InvalidInputLength)?;
    Ok(Scalar::from_be_bytes(*bytes))
}

fn write_fp(out: &mut [u8], fp: &Fp) {
    debug_assert_eq!(out.len(), PADDED_FP_LENGTH);
    out[PADDING_LENGTH..].copy_from_slice(&fp.to_bytes());
}

/// Encodes a G1 point as two padded field elements. The identity encodes
/// as all zeros.
pub(crate) fn encode_g1(point: &G1Affine) -> [u8; PADDED_G1_LENGTH] {
    let mut out = [0u8; PADDED_G1_LENGTH];
    if !bool::from(point.is_identity()) {
        write_fp(&mut out[..PADDED_FP_LENGTH], &point.x());
        write_fp(&mut out[PADDED_FP_LENGTH..], &point.y());
    }
    out
}

/// Encodes a G2 point as four padded field elements.
pub(crate) fn encode_g2(point: &G2Affine) -> [u8; PADDED_G2_LENGTH] {
    let mut out = [0u8; PADDED_G2_LENGTH];
    if !bool::from(point.is_identity()) {
        let x = point.x();
        let y = point.y();
        write_fp(&mut out[..PADDED_FP_LENGTH], &x.c0);
        write_fp(&mut out[PADDED_FP_LENGTH..2 * PADDED_FP_LENGTH], &x.c1);
        write_fp(&mut out[2 * PADDED_FP_LENGTH..3 * PADDED_FP_LENGTH], &y.c0);
        write_fp(&mut out[3 * PADDED_FP_LENGTH..], &y.c1);
    }
    out
}
