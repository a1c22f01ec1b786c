//! G2 addition operation.

use bls12_381::{G2Affine, G2Projective};

use crate::codec::{encode_g2, read_g2};
use crate::consts::{G2_ADD_BASE_GAS_FEE, G2_ADD_INPUT_LENGTH, PADDED_G2_LENGTH};
use crate::utils::remove_g2_padding;
use crate::{PrecompileError, PrecompileOutput, PrecompileResult};

/// [EIP-2537](https://eips.ethereum.org/EIPS/eip-2537#abi-for-g2-addition)
/// BLS12_G2ADD operation.
///
/// Takes two padded G2 points (256 bytes each) and returns their sum.
/// Inputs must be on the twist curve but are not required to be in the
/// order-r subgroup.
pub fn g2_add(input: &[u8], gas_limit: u64) -> PrecompileResult {
    if G2_ADD_BASE_GAS_FEE > gas_limit {
        return Err(PrecompileError::OutOfGas);
    }

    if input.len() != G2_ADD_INPUT_LENGTH {
        return Err(PrecompileError::InvalidInputLength);
    }

    let [a_x_0, a_x_1, a_y_0, a_y_1] = remove_g2_padding(&input[..PADDED_G2_LENGTH])?;
    let [b_x_0, b_x_1, b_y_0, b_y_1] = remove_g2_padding(&input[PADDED_G2_LENGTH..])?;

    let a = read_g2(a_x_0, a_x_1, a_y_0, a_y_1, false)?;
    let b = read_g2(b_x_0, b_x_1, b_y_0, b_y_1, false)?;

    let sum = G2Affine::from(G2Projective::from(a).add_affine(&b));

    Ok(PrecompileOutput::new(
        G2_ADD_BASE_GAS_FEE,
        encode_g2(&sum).into(),
    ))
}
