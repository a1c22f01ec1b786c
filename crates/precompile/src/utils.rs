//! Input padding handling and the MSM gas schedule.

use crate::consts::{
    FP_LENGTH, MSM_MULTIPLIER, PADDED_FP_LENGTH, PADDED_G1_LENGTH, PADDED_G2_LENGTH,
    PADDING_LENGTH,
};
use crate::PrecompileError;

/// Removes the 16 zero bytes each field element is left-padded with.
/// Non-zero padding is an encoding error.
pub(crate) fn remove_padding(input: &[u8]) -> Result<&[u8; FP_LENGTH], PrecompileError> {
    if input.len() != PADDED_FP_LENGTH {
        return Err(PrecompileError::InvalidInputLength);
    }
    let (padding, unpadded) = input.split_at(PADDING_LENGTH);
    if !padding.iter().all(|&b| b == 0) {
        return Err(PrecompileError::InvalidEncoding);
    }
    // Length is checked above.
    unpadded
        .try_into()
        .map_err(|_| PrecompileError::InvalidInputLength)
}

/// Strips the padding from a serialized G1 point, yielding its two
/// coordinate byte strings.
pub(crate) fn remove_g1_padding(input: &[u8]) -> Result<[&[u8; FP_LENGTH]; 2], PrecompileError> {
    if input.len() != PADDED_G1_LENGTH {
        return Err(PrecompileError::InvalidInputLength);
    }
    let x = remove_padding(&input[..PADDED_FP_LENGTH])?;
    let y = remove_padding(&input[PADDED_FP_LENGTH..])?;
    Ok([x, y])
}

/// Strips the padding from a serialized G2 point, yielding the four
/// coordinate components `[x.c0, x.c1, y.c0, y.c1]`.
pub(crate) fn remove_g2_padding(input: &[u8]) -> Result<[&[u8; FP_LENGTH]; 4], PrecompileError> {
    if input.len() != PADDED_G2_LENGTH {
        return Err(PrecompileError::InvalidInputLength);
    }
    let mut out = [&[0u8; FP_LENGTH]; 4];
    for (i, part) in out.iter_mut().enumerate() {
        let start = i * PADDED_FP_LENGTH;
        *part = remove_padding(&input[start..start + PADDED_FP_LENGTH])?;
    }
    Ok(out)
}

/// Implements the gas schedule for G1/G2 multi-scalar multiplication,
/// assuming 30 MGas/second, see also:
/// <https://eips.ethereum.org/EIPS/eip-2537#g1g2-multiexponentiation>
#[inline]
pub fn msm_required_gas(k: usize, discount_table: &[u16], multiplication_cost: u64) -> u64 {
    if k == 0 {
        return 0;
    }

    let index = core::cmp::min(k - 1, discount_table.len() - 1);
    let discount = discount_table[index] as u64;

    (k as u64 * discount * multiplication_cost) / MSM_MULTIPLIER
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::consts::{DISCOUNT_TABLE_G1_MSM, G1_MSM_BASE_GAS_FEE, PADDED_FP2_LENGTH};

    #[test]
    fn padding_is_stripped() {
        let mut input = [0u8; PADDED_FP_LENGTH];
        input[PADDING_LENGTH] = 0x1a;
        input[PADDED_FP_LENGTH - 1] = 0xab;
        let unpadded = remove_padding(&input).unwrap();
        assert_eq!(unpadded[0], 0x1a);
        assert_eq!(unpadded[FP_LENGTH - 1], 0xab);
    }

    #[test]
    fn nonzero_padding_is_rejected() {
        let mut input = [0u8; PADDED_FP_LENGTH];
        input[3] = 1;
        assert_eq!(
            remove_padding(&input).unwrap_err(),
            PrecompileError::InvalidEncoding
        );
    }

    #[test]
    fn wrong_length_is_rejected() {
        let input = [0u8; PADDED_FP_LENGTH - 1];
        assert_eq!(
            remove_padding(&input).unwrap_err(),
            PrecompileError::InvalidInputLength
        );
        assert!(remove_g1_padding(&[0u8; PADDED_G1_LENGTH - 2]).is_err());
        assert!(remove_g2_padding(&[0u8; PADDED_FP2_LENGTH]).is_err());
    }

    #[test]
    fn msm_gas_schedule() {
        // Single term: full price.
        assert_eq!(
            msm_required_gas(1, &DISCOUNT_TABLE_G1_MSM, G1_MSM_BASE_GAS_FEE),
            G1_MSM_BASE_GAS_FEE
        );
        // Two terms at the k = 2 discount of 949.
        assert_eq!(
            msm_required_gas(2, &DISCOUNT_TABLE_G1_MSM, G1_MSM_BASE_GAS_FEE),
            2 * 949 * G1_MSM_BASE_GAS_FEE / 1000
        );
        // Beyond the table the last discount applies.
        assert_eq!(
            msm_required_gas(256, &DISCOUNT_TABLE_G1_MSM, G1_MSM_BASE_GAS_FEE),
            256 * 519 * G1_MSM_BASE_GAS_FEE / 1000
        );
    }
}
