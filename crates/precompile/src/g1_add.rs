//! G1 addition operation.

use bls12_381::{G1Affine, G1Projective};

use crate::codec::{encode_g1, read_g1};
use crate::consts::{G1_ADD_BASE_GAS_FEE, G1_ADD_INPUT_LENGTH, PADDED_G1_LENGTH};
use crate::utils::remove_g1_padding;
use crate::{PrecompileError, PrecompileOutput, PrecompileResult};

/// [EIP-2537](https://eips.ethereum.org/EIPS/eip-2537#abi-for-g1-addition)
/// BLS12_G1ADD operation.
///
/// Takes two padded G1 points (128 bytes each) and returns their sum as a
/// padded G1 point. Inputs must be on the curve but are not required to be
/// in the order-r subgroup.
pub fn g1_add(input: &[u8], gas_limit: u64) -> PrecompileResult {
    if G1_ADD_BASE_GAS_FEE > gas_limit {
        return Err(PrecompileError::OutOfGas);
    }

    if input.len() != G1_ADD_INPUT_LENGTH {
        return Err(PrecompileError::InvalidInputLength);
    }

    let [a_x, a_y] = remove_g1_padding(&input[..PADDED_G1_LENGTH])?;
    let [b_x, b_y] = remove_g1_padding(&input[PADDED_G1_LENGTH..])?;

    // Addition does not require the inputs to be in the subgroup.
    let a = read_g1(a_x, a_y, false)?;
    let b = read_g1(b_x, b_y, false)?;

    let sum = G1Affine::from(G1Projective::from(a).add_affine(&b));

    Ok(PrecompileOutput::new(
        G1_ADD_BASE_GAS_FEE,
        encode_g1(&sum).into(),
    ))
}
