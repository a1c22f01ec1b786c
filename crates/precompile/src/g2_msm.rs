//! G2 multi-scalar multiplication operation.

use alloc::vec::Vec;

use bls12_381::{msm_g2, G2Affine, G2Projective, Scalar};

use crate::codec::{encode_g2, read_g2, read_scalar};
use crate::consts::{
    DISCOUNT_TABLE_G2_MSM, G2_MSM_BASE_GAS_FEE, G2_MSM_INPUT_LENGTH, PADDED_G2_LENGTH,
    SCALAR_LENGTH,
};
use crate::utils::{msm_required_gas, remove_g2_padding};
use crate::{PrecompileError, PrecompileOutput, PrecompileResult};

/// [EIP-2537](https://eips.ethereum.org/EIPS/eip-2537#abi-for-g2-multiexponentiation)
/// BLS12_G2MSM operation.
///
/// Takes `k` terms of a padded G2 point followed by a 32-byte scalar (288
/// bytes per term) and returns `sum_i scalars[i] * points[i]`. Every
/// point must be in the order-r subgroup. An empty input is an error.
pub fn g2_msm(input: &[u8], gas_limit: u64) -> PrecompileResult {
    let input_len = input.len();
    if input_len == 0 || input_len % G2_MSM_INPUT_LENGTH != 0 {
        return Err(PrecompileError::InvalidInputLength);
    }

    let k = input_len / G2_MSM_INPUT_LENGTH;
    let required_gas = msm_required_gas(k, &DISCOUNT_TABLE_G2_MSM, G2_MSM_BASE_GAS_FEE);
    if required_gas > gas_limit {
        return Err(PrecompileError::OutOfGas);
    }

    let mut points: Vec<G2Projective> = Vec::with_capacity(k);
    let mut scalars: Vec<Scalar> = Vec::with_capacity(k);
    for term in input.chunks_exact(G2_MSM_INPUT_LENGTH) {
        let [x_0, x_1, y_0, y_1] = remove_g2_padding(&term[..PADDED_G2_LENGTH])?;
        let point = read_g2(x_0, x_1, y_0, y_1, true)?;
        let scalar = read_scalar(&term[PADDED_G2_LENGTH..PADDED_G2_LENGTH + SCALAR_LENGTH])?;

        if bool::from(point.is_identity()) || scalar.is_zero() {
            continue;
        }
        points.push(point.into());
        scalars.push(scalar);
    }

    let result = G2Affine::from(msm_g2(&points, &scalars));

    Ok(PrecompileOutput::new(required_gas, encode_g2(&result).into()))
}

#[cfg(test)]
mod test {
    use super::*;
    use primitives::hex;

    #[test]
    fn single_term_doubles_the_generator() {
        let input = hex!(
            "00000000000000000000000000000000024aa2b2f08f0a91260805272dc51051c6e47ad4fa403b02b4510b647ae3d1770bac0326a805bbefd48056c8c121bdb80000000000000000000000000000000013e02b6052719f607dacd3a088274f65596bd0d09920b61ab5da61bbdc7f5049334cf11213945d57e5ac7d055d042b7e000000000000000000000000000000000ce5d527727d6e118cc9cdc6da2e351aadfd9baa8cbdd3a76d429a695160d12c923ac9cc3baca289e193548608b82801000000000000000000000000000000000606c4a02ea734cc32acd2b02bc28b99cb3e287e85a763af267492ab572e99ab3f370d275cec1da1aaa9075ff05f79be0000000000000000000000000000000000000000000000000000000000000002"
        );
        let expected = hex!(
            "000000000000000000000000000000001638533957d540a9d2370f17cc7ed5863bc0b995b8825e0ee1ea1e1e4d00dbae81f14b0bf3611b78c952aacab827a053000000000000000000000000000000000a4edef9c1ed7f729f520e47730a124fd70662a904ba1074728114d1031e1572c6c886f6b57ec72a6178288c47c33577000000000000000000000000000000000468fb440d82b0630aeb8dca2b5256789a66da69bf91009cbfe6bd221e47aa8ae88dece9764bf3bd999d95d71e4c9899000000000000000000000000000000000f6d4552fa65dd2638b361543f887136a43253d9c66c411697003f7a13c308f5422e1aa0a59c8967acdefd8b6e36ccf3"
        );

        let out = g2_msm(&input, G2_MSM_BASE_GAS_FEE).unwrap();
        assert_eq!(out.gas_used, G2_MSM_BASE_GAS_FEE);
        assert_eq!(out.bytes.as_ref(), expected);
    }

    #[test]
    fn two_terms_combine() {
        // 5 * G + 3 * (2G) == 11 * G
        let input = hex!(
            "00000000000000000000000000000000024aa2b2f08f0a91260805272dc51051c6e47ad4fa403b02b4510b647ae3d1770bac0326a805bbefd48056c8c121bdb80000000000000000000000000000000013e02b6052719f607dacd3a088274f65596bd0d09920b61ab5da61bbdc7f5049334cf11213945d57e5ac7d055d042b7e000000000000000000000000000000000ce5d527727d6e118cc9cdc6da2e351aadfd9baa8cbdd3a76d429a695160d12c923ac9cc3baca289e193548608b82801000000000000000000000000000000000606c4a02ea734cc32acd2b02bc28b99cb3e287e85a763af267492ab572e99ab3f370d275cec1da1aaa9075ff05f79be0000000000000000000000000000000000000000000000000000000000000005000000000000000000000000000000001638533957d540a9d2370f17cc7ed5863bc0b995b8825e0ee1ea1e1e4d00dbae81f14b0bf3611b78c952aacab827a053000000000000000000000000000000000a4edef9c1ed7f729f520e47730a124fd70662a904ba1074728114d1031e1572c6c886f6b57ec72a6178288c47c33577000000000000000000000000000000000468fb440d82b0630aeb8dca2b5256789a66da69bf91009cbfe6bd221e47aa8ae88dece9764bf3bd999d95d71e4c9899000000000000000000000000000000000f6d4552fa65dd2638b361543f887136a43253d9c66c411697003f7a13c308f5422e1aa0a59c8967acdefd8b6e36ccf30000000000000000000000000000000000000000000000000000000000000003"
        );
        let expected = hex!(
            "0000000000000000000000000000000009303f04d568e289a35102b6df883d5ed620355c0eb5d02236718cdaf99fba6e19ef5cee2996268eb9a53ae1ee09bce3000000000000000000000000000000000190be857d602284393305bfe0a29e29a6982ed3f04ccaabafb7e59cdc7eda85c22bc3e8690355c7a0fb7590ae40f1b00000000000000000000000000000000016efd497a0c5c6b59a1fdf2b590eb67a7da8cbe72f49084e7050783ff12a783cad1859e1a0b0ec8ff784c703617670330000000000000000000000000000000017a957ea4d53f4fc8412cb015ae91b38445cdb3e7078d875c465c941e0d9a852c78d90b31b6b6010efe8bd5117e83163"
        );

        let gas = msm_required_gas(2, &DISCOUNT_TABLE_G2_MSM, G2_MSM_BASE_GAS_FEE);
        let out = g2_msm(&input, gas).unwrap();
        assert_eq!(out.bytes.as_ref(), expected);
    }

    #[test]
    fn not_in_subgroup_is_rejected() {
        let point = hex!(
            "00000000000000000000000000000000114141c2426a44be058d9eb8b296e75a2be05c30af5f5ce48db8de76a5cff8da0161bd5cf6f9d340b4942c27c0b544ed00000000000000000000000000000000054cd67b9132f5e5105b9809fd84ec2ea14450afe318f9d58a58d6ad0dce2632b9b1f7e0969b3b28121ca6e77eb5d6e60000000000000000000000000000000017ef30339e1ce41b11ff371a2ed0e64b4e9e40972fac1b114f249cb4e526e277280cc3645f46e21527da1e5fe599584b00000000000000000000000000000000118c28d7bb24f3dac11f3540a31afe0f7030c568bc835d28795875d0436ebd061470699374282ad152c5eb63919b57b5"
        );
        let mut input = [0u8; G2_MSM_INPUT_LENGTH];
        input[..PADDED_G2_LENGTH].copy_from_slice(&point);
        assert_eq!(
            g2_msm(&input, G2_MSM_BASE_GAS_FEE).unwrap_err(),
            PrecompileError::InvalidPoint
        );
    }

    #[test]
    fn empty_and_misaligned_inputs_are_rejected() {
        assert_eq!(
            g2_msm(&[], G2_MSM_BASE_GAS_FEE).unwrap_err(),
            PrecompileError::InvalidInputLength
        );
        assert_eq!(
            g2_msm(&[0u8; G2_MSM_INPUT_LENGTH + 1], G2_MSM_BASE_GAS_FEE).unwrap_err(),
            PrecompileError::InvalidInputLength
        );
    }

    #[test]
    fn insufficient_gas() {
        let input = [0u8; G2_MSM_INPUT_LENGTH];
        assert_eq!(
            g2_msm(&input, G2_MSM_BASE_GAS_FEE - 1).unwrap_err(),
            PrecompileError::OutOfGas
        );
    }
}
