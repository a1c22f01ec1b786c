//! Pairing check operation.

use alloc::vec::Vec;

use bls12_381::{pairing_check, G1Affine, G2Affine};

use crate::codec::{read_g1, read_g2};
use crate::consts::{
    PADDED_G1_LENGTH, PAIRING_INPUT_LENGTH, PAIRING_MULTIPLIER_BASE, PAIRING_OFFSET_BASE,
    PAIRING_OUTPUT_LENGTH,
};
use crate::utils::{remove_g1_padding, remove_g2_padding};
use crate::{PrecompileError, PrecompileOutput, PrecompileResult};

/// [EIP-2537](https://eips.ethereum.org/EIPS/eip-2537#abi-for-pairing-check)
/// BLS12_PAIRING_CHECK operation.
///
/// Takes `k` pairs of a padded G1 point and a padded G2 point (384 bytes
/// per pair) and returns a 32-byte word whose last byte is one when
/// `prod_i e(P_i, Q_i)` is the identity of the target group, zero
/// otherwise. Every point must be on its curve and in the order-r
/// subgroup. An empty input is an error.
pub fn pairing(input: &[u8], gas_limit: u64) -> PrecompileResult {
    let input_len = input.len();
    if input_len == 0 || input_len % PAIRING_INPUT_LENGTH != 0 {
        return Err(PrecompileError::InvalidInputLength);
    }

    let k = (input_len / PAIRING_INPUT_LENGTH) as u64;
    let required_gas = PAIRING_MULTIPLIER_BASE * k + PAIRING_OFFSET_BASE;
    if required_gas > gas_limit {
        return Err(PrecompileError::OutOfGas);
    }

    let mut pairs: Vec<(G1Affine, G2Affine)> = Vec::with_capacity(k as usize);
    for pair in input.chunks_exact(PAIRING_INPUT_LENGTH) {
        let [p_x, p_y] = remove_g1_padding(&pair[..PADDED_G1_LENGTH])?;
        let [q_x_0, q_x_1, q_y_0, q_y_1] = remove_g2_padding(&pair[PADDED_G1_LENGTH..])?;

        let p = read_g1(p_x, p_y, true)?;
        let q = read_g2(q_x_0, q_x_1, q_y_0, q_y_1, true)?;
        pairs.push((p, q));
    }

    let mut out = [0u8; PAIRING_OUTPUT_LENGTH];
    out[PAIRING_OUTPUT_LENGTH - 1] = pairing_check(&pairs) as u8;

    Ok(PrecompileOutput::new(required_gas, out.into()))
}
