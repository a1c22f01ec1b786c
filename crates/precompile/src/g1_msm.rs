//! G1 multi-scalar multiplication operation.

use alloc::vec::Vec;

use bls12_381::{msm_g1, G1Affine, G1Projective, Scalar};

use crate::codec::{encode_g1, read_g1, read_scalar};
use crate::consts::{
    DISCOUNT_TABLE_G1_MSM, G1_MSM_BASE_GAS_FEE, G1_MSM_INPUT_LENGTH, PADDED_G1_LENGTH,
    SCALAR_LENGTH,
};
use crate::utils::{msm_required_gas, remove_g1_padding};
use crate::{PrecompileError, PrecompileOutput, PrecompileResult};

/// [EIP-2537](https://eips.ethereum.org/EIPS/eip-2537#abi-for-g1-multiexponentiation)
/// BLS12_G1MSM operation.
///
/// Takes `k` terms of a padded G1 point followed by a 32-byte scalar (160
/// bytes per term) and returns `sum_i scalars[i] * points[i]`. Every
/// point must be in the order-r subgroup; scalars are full 256-bit
/// integers. An empty input is an error.
pub fn g1_msm(input: &[u8], gas_limit: u64) -> PrecompileResult {
    let input_len = input.len();
    if input_len == 0 || input_len % G1_MSM_INPUT_LENGTH != 0 {
        return Err(PrecompileError::InvalidInputLength);
    }

    let k = input_len / G1_MSM_INPUT_LENGTH;
    let required_gas = msm_required_gas(k, &DISCOUNT_TABLE_G1_MSM, G1_MSM_BASE_GAS_FEE);
    if required_gas > gas_limit {
        return Err(PrecompileError::OutOfGas);
    }

    let mut points: Vec<G1Projective> = Vec::with_capacity(k);
    let mut scalars: Vec<Scalar> = Vec::with_capacity(k);
    for term in input.chunks_exact(G1_MSM_INPUT_LENGTH) {
        let [x, y] = remove_g1_padding(&term[..PADDED_G1_LENGTH])?;
        // Every term is validated before any is skipped, so an invalid
        // point fails the call even when paired with a zero scalar.
        let point = read_g1(x, y, true)?;
        let scalar = read_scalar(&term[PADDED_G1_LENGTH..PADDED_G1_LENGTH + SCALAR_LENGTH])?;

        if bool::from(point.is_identity()) || scalar.is_zero() {
            continue;
        }
        points.push(point.into());
        scalars.push(scalar);
    }

    let result = G1Affine::from(msm_g1(&points, &scalars));

    Ok(PrecompileOutput::new(required_gas, encode_g1(&result).into()))
}

#[cfg(test)]
mod test {
    use super::*;
    use primitives::hex;

    #[test]
    fn single_term_doubles_the_generator() {
        let input = hex!(
            "0000000000000000000000000000000017f1d3a73197d7942695638c4fa9ac0fc3688c4f9774b905a14e3a3f171bac586c55e83ff97a1aeffb3af00adb22c6bb0000000000000000000000000000000008b3f481e3aaa0f1a09e30ed741d8ae4fcf5e095d5d00af600db18cb2c04b3edd03cc744a2888ae40caa232946c5e7e10000000000000000000000000000000000000000000000000000000000000002"
        );
        let expected = hex!(
            "000000000000000000000000000000000572cbea904d67468808c8eb50a9450c9721db309128012543902d0ac358a62ae28f75bb8f1c7c42c39a8c5529bf0f4e00000000000000000000000000000000166a9d8cabc673a322fda673779d8e3822ba3ecb8670e461f73bb9021d5fd76a4c56d9d4cd16bd1bba86881979749d28"
        );

        let out = g1_msm(&input, G1_MSM_BASE_GAS_FEE).unwrap();
        assert_eq!(out.gas_used, G1_MSM_BASE_GAS_FEE);
        assert_eq!(out.bytes.as_ref(), expected);
    }

    #[test]
    fn two_terms_combine() {
        // 5 * G + 3 * (2G) == 11 * G
        let input = hex!(
            "0000000000000000000000000000000017f1d3a73197d7942695638c4fa9ac0fc3688c4f9774b905a14e3a3f171bac586c55e83ff97a1aeffb3af00adb22c6bb0000000000000000000000000000000008b3f481e3aaa0f1a09e30ed741d8ae4fcf5e095d5d00af600db18cb2c04b3edd03cc744a2888ae40caa232946c5e7e10000000000000000000000000000000000000000000000000000000000000005000000000000000000000000000000000572cbea904d67468808c8eb50a9450c9721db309128012543902d0ac358a62ae28f75bb8f1c7c42c39a8c5529bf0f4e00000000000000000000000000000000166a9d8cabc673a322fda673779d8e3822ba3ecb8670e461f73bb9021d5fd76a4c56d9d4cd16bd1bba86881979749d280000000000000000000000000000000000000000000000000000000000000003"
        );
        let expected = hex!(
            "0000000000000000000000000000000000fd75ebcc0a21649e3177bcce15426da0e4f25d6828fbf4038d4d7ed3bd4421de3ef61d70f794687b12b2d571971a550000000000000000000000000000000004523f5a3915fc57ee889cdb057e3e76109112d125217546ccfe26810c99b130d1b27820595ad61c7527dc5bbb132a90"
        );

        let gas = msm_required_gas(2, &DISCOUNT_TABLE_G1_MSM, G1_MSM_BASE_GAS_FEE);
        let out = g1_msm(&input, gas).unwrap();
        assert_eq!(out.gas_used, gas);
        assert_eq!(out.bytes.as_ref(), expected);

        // Swapping the two terms must not change the accumulation.
        let mut swapped = [0u8; 2 * G1_MSM_INPUT_LENGTH];
        swapped[..G1_MSM_INPUT_LENGTH].copy_from_slice(&input[G1_MSM_INPUT_LENGTH..]);
        swapped[G1_MSM_INPUT_LENGTH..].copy_from_slice(&input[..G1_MSM_INPUT_LENGTH]);
        let out = g1_msm(&swapped, gas).unwrap();
        assert_eq!(out.bytes.as_ref(), expected);
    }

    #[test]
    fn scalars_are_not_reduced() {
        // The scalar is the group order plus one, so the result is the
        // point itself.
        let input = hex!(
            "0000000000000000000000000000000017f1d3a73197d7942695638c4fa9ac0fc3688c4f9774b905a14e3a3f171bac586c55e83ff97a1aeffb3af00adb22c6bb0000000000000000000000000000000008b3f481e3aaa0f1a09e30ed741d8ae4fcf5e095d5d00af600db18cb2c04b3edd03cc744a2888ae40caa232946c5e7e173eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000002"
        );

        let out = g1_msm(&input, G1_MSM_BASE_GAS_FEE).unwrap();
        assert_eq!(out.bytes.as_ref(), &input[..128]);
    }

    #[test]
    fn zero_scalar_yields_infinity() {
        let input = hex!(
            "0000000000000000000000000000000017f1d3a73197d7942695638c4fa9ac0fc3688c4f9774b905a14e3a3f171bac586c55e83ff97a1aeffb3af00adb22c6bb0000000000000000000000000000000008b3f481e3aaa0f1a09e30ed741d8ae4fcf5e095d5d00af600db18cb2c04b3edd03cc744a2888ae40caa232946c5e7e10000000000000000000000000000000000000000000000000000000000000000"
        );

        let out = g1_msm(&input, G1_MSM_BASE_GAS_FEE).unwrap();
        assert_eq!(out.bytes.as_ref(), [0u8; 128]);
    }

    #[test]
    fn infinity_point_yields_infinity() {
        let input = hex!(
            "00000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000007"
        );

        let out = g1_msm(&input, G1_MSM_BASE_GAS_FEE).unwrap();
        assert_eq!(out.bytes.as_ref(), [0u8; 128]);
    }

    #[test]
    fn not_in_subgroup_is_rejected() {
        // On the curve but outside the subgroup, with a zero scalar: the
        // point must still be validated.
        let point = hex!(
            "0000000000000000000000000000000016c5f47d99ffff8a7abc0af6db6347c0bb972bdd98bf7a05d2b5f25b9a2c50ced825e5a3c6ee82700a7b82d641dbafb600000000000000000000000000000000062911058ec8e40a47e5ec9bae09fe94e5c2efa42437deec64c49a15b8956489255834e48816f5ea13731bf5653c16c2"
        );
        let mut input = [0u8; G1_MSM_INPUT_LENGTH];
        input[..128].copy_from_slice(&point);
        assert_eq!(
            g1_msm(&input, G1_MSM_BASE_GAS_FEE).unwrap_err(),
            PrecompileError::InvalidPoint
        );
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(
            g1_msm(&[], G1_MSM_BASE_GAS_FEE).unwrap_err(),
            PrecompileError::InvalidInputLength
        );
    }

    #[test]
    fn insufficient_gas() {
        let input = [0u8; G1_MSM_INPUT_LENGTH];
        assert_eq!(
            g1_msm(&input, G1_MSM_BASE_GAS_FEE - 1).unwrap_err(),
            PrecompileError::OutOfGas
        );
    }
}
