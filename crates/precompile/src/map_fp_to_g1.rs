//! Map-to-G1 operation.

use bls12_381::map_to_g1;

use crate::codec::{encode_g1, read_fp};
use crate::consts::{MAP_FP_TO_G1_BASE_GAS_FEE, PADDED_FP_LENGTH};
use crate::utils::remove_padding;
use crate::{PrecompileError, PrecompileOutput, PrecompileResult};

/// [EIP-2537](https://eips.ethereum.org/EIPS/eip-2537#abi-for-mapping-fp-element-to-g1-point)
/// BLS12_MAP_FP_TO_G1 operation.
///
/// Maps a canonical base field element to a G1 point via the
/// simplified SWU map followed by cofactor clearing. The output is
/// always in the order-r subgroup.
pub fn map_fp_to_g1(input: &[u8], gas_limit: u64) -> PrecompileResult {
    if MAP_FP_TO_G1_BASE_GAS_FEE > gas_limit {
        return Err(PrecompileError::OutOfGas);
    }

    if input.len() != PADDED_FP_LENGTH {
        return Err(PrecompileError::InvalidInputLength);
    }

    let input_p0 = remove_padding(input)?;
    let fp = read_fp(input_p0)?;
    let p = map_to_g1(&fp);

    Ok(PrecompileOutput::new(
        MAP_FP_TO_G1_BASE_GAS_FEE,
        encode_g1(&p).into(),
    ))
}

#[cfg(test)]
mod test {
    use super::*;
    use primitives::hex;

    #[test]
    fn map_zero() {
        let input = [0u8; PADDED_FP_LENGTH];
        let expected = hex!(
            "0000000000000000000000000000000011a9a0372b8f332d5c30de9ad14e50372a73fa4c45d5f2fa5097f2d6fb93bcac592f2e1711ac43db0519870c7d0ea41500000000000000000000000000000000092c0f994164a0719f51c24ba3788de240ff926b55f58c445116e8bc6a47cd63392fd4e8e22bdf9feaa96ee773222133"
        );

        let out = map_fp_to_g1(&input, MAP_FP_TO_G1_BASE_GAS_FEE).unwrap();
        assert_eq!(out.gas_used, MAP_FP_TO_G1_BASE_GAS_FEE);
        assert_eq!(out.bytes.as_ref(), expected);
    }

    #[test]
    fn map_small_element() {
        let input = hex!(
            "00000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000005"
        );
        let expected = hex!(
            "0000000000000000000000000000000003a76914689fb401b446b4227e7b0d4d4872d8fc6d39e2b2b28fa19ef0eb6a0a13093e5654d4dc679d79e1a560e2d113000000000000000000000000000000001844f38a9c17150dfada3a0fe4de5aa8f5392e913c2ab01ad841c786696b4c2006cf4edd48a0be20eac01a9c68224f29"
        );

        let out = map_fp_to_g1(&input, MAP_FP_TO_G1_BASE_GAS_FEE).unwrap();
        assert_eq!(out.bytes.as_ref(), expected);
    }

    #[test]
    fn map_large_element() {
        // p - 1
        let input = hex!(
            "000000000000000000000000000000001a0111ea397fe69a4b1ba7b6434bacd764774b84f38512bf6730d2a0f6b0f6241eabfffeb153ffffb9feffffffffaaaa"
        );
        let expected = hex!(
            "000000000000000000000000000000001073311196f8ef19477219ccee3a48035ff432295aa9419eed45d186027d88b90832e14c4f0e2aa4d15f54d1c3ed0f930000000000000000000000000000000016b3a3b2e3dddf6a11459ddaf657fde21c4f10282a56029d9b55ab3ce1f41e1cf39ad27e0ea35823c7d3250e81ff3d66"
        );

        let out = map_fp_to_g1(&input, MAP_FP_TO_G1_BASE_GAS_FEE).unwrap();
        assert_eq!(out.bytes.as_ref(), expected);
    }

    #[test]
    fn non_canonical_element_is_rejected() {
        // The field modulus itself is not a valid encoding.
        let input = hex!(
            "000000000000000000000000000000001a0111ea397fe69a4b1ba7b6434bacd764774b84f38512bf6730d2a0f6b0f6241eabfffeb153ffffb9feffffffffaaab"
        );
        assert_eq!(
            map_fp_to_g1(&input, MAP_FP_TO_G1_BASE_GAS_FEE).unwrap_err(),
            PrecompileError::InvalidEncoding
        );
    }

    #[test]
    fn nonzero_padding_is_rejected() {
        let mut input = [0u8; PADDED_FP_LENGTH];
        input[0] = 1;
        assert_eq!(
            map_fp_to_g1(&input, MAP_FP_TO_G1_BASE_GAS_FEE).unwrap_err(),
            PrecompileError::InvalidEncoding
        );
    }

    #[test]
    fn wrong_length_is_rejected() {
        let input = [0u8; PADDED_FP_LENGTH - 1];
        assert_eq!(
            map_fp_to_g1(&input, MAP_FP_TO_G1_BASE_GAS_FEE).unwrap_err(),
            PrecompileError::InvalidInputLength
        );
    }

    #[test]
    fn insufficient_gas() {
        let input = [0u8; PADDED_FP_LENGTH];
        assert_eq!(
            map_fp_to_g1(&input, MAP_FP_TO_G1_BASE_GAS_FEE - 1).unwrap_err(),
            PrecompileError::OutOfGas
        );
    }
}
