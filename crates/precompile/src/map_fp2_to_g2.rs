//! Map-to-G2 operation.

use bls12_381::map_to_g2;

use crate::codec::{encode_g2, read_fp2};
use crate::consts::{MAP_FP2_TO_G2_BASE_GAS_FEE, PADDED_FP2_LENGTH, PADDED_FP_LENGTH};
use crate::utils::remove_padding;
use crate::{PrecompileError, PrecompileOutput, PrecompileResult};

/// [EIP-2537](https://eips.ethereum.org/EIPS/eip-2537#abi-for-mapping-fp2-element-to-g2-point)
/// BLS12_MAP_FP2_TO_G2 operation.
///
/// Maps a canonical quadratic extension field element to a G2 point
/// via the simplified SWU map followed by cofactor clearing. The
/// output is always in the order-r subgroup.
pub fn map_fp2_to_g2(input: &[u8], gas_limit: u64) -> PrecompileResult {
    if MAP_FP2_TO_G2_BASE_GAS_FEE > gas_limit {
        return Err(PrecompileError::OutOfGas);
    }

    if input.len() != PADDED_FP2_LENGTH {
        return Err(PrecompileError::InvalidInputLength);
    }

    let input_p0_x = remove_padding(&input[..PADDED_FP_LENGTH])?;
    let input_p0_y = remove_padding(&input[PADDED_FP_LENGTH..PADDED_FP2_LENGTH])?;
    let fp2 = read_fp2(input_p0_x, input_p0_y)?;
    let p = map_to_g2(&fp2);

    Ok(PrecompileOutput::new(
        MAP_FP2_TO_G2_BASE_GAS_FEE,
        encode_g2(&p).into(),
    ))
}
