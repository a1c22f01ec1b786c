//! # bls12-381-precompile
//!
//! Implementations of the [EIP-2537](https://eips.ethereum.org/EIPS/eip-2537)
//! BLS12-381 precompiled contracts.
//!
//! The seven operations are exposed two ways: as free functions
//! ([`g1_add`], [`g1_msm`], [`g2_add`], [`g2_msm`], [`pairing`],
//! [`map_fp_to_g1`], [`map_fp2_to_g2`]) and through the closed
//! [`Operation`] enum, which carries the selector, gas schedule and
//! dispatch for each contract.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod codec;
pub mod consts;
mod g1_add;
mod g1_msm;
mod g2_add;
mod g2_msm;
pub mod interface;
mod map_fp2_to_g2;
mod map_fp_to_g1;
mod pairing;
mod utils;

pub use g1_add::g1_add;
pub use g1_msm::g1_msm;
pub use g2_add::g2_add;
pub use g2_msm::g2_msm;
pub use interface::*;
pub use map_fp2_to_g2::map_fp2_to_g2;
pub use map_fp_to_g1::map_fp_to_g1;
pub use pairing::pairing;
pub use utils::msm_required_gas;

use crate::consts::{
    G1_ADD_SELECTOR, G1_MSM_SELECTOR, G2_ADD_SELECTOR, G2_MSM_SELECTOR, MAP_FP2_TO_G2_SELECTOR,
    MAP_FP_TO_G1_SELECTOR, PADDED_G1_LENGTH, PADDED_G2_LENGTH, PAIRING_OUTPUT_LENGTH,
    PAIRING_SELECTOR,
};

/// The EIP-2537 precompiled contracts.
///
/// Each variant corresponds to one contract address on the range
/// `0x0b..=0x11`. The set is closed: callers match on the variant
/// rather than looking contracts up in a table, so adding a contract
/// is a compile-time event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    /// G1 point addition (address `0x0b`).
    G1Add,
    /// G1 multi-scalar multiplication (address `0x0c`).
    G1Msm,
    /// G2 point addition (address `0x0d`).
    G2Add,
    /// G2 multi-scalar multiplication (address `0x0e`).
    G2Msm,
    /// Pairing check (address `0x0f`).
    Pairing,
    /// Map a base field element to G1 (address `0x10`).
    MapFpToG1,
    /// Map a quadratic extension field element to G2 (address `0x11`).
    MapFp2ToG2,
}

impl Operation {
    /// All seven operations in selector order.
    pub const ALL: [Self; 7] = [
        Self::G1Add,
        Self::G1Msm,
        Self::G2Add,
        Self::G2Msm,
        Self::Pairing,
        Self::MapFpToG1,
        Self::MapFp2ToG2,
    ];

    /// Returns the operation with the given contract address, if any.
    pub const fn from_selector(selector: u64) -> Option<Self> {
        match selector {
            G1_ADD_SELECTOR => Some(Self::G1Add),
            G1_MSM_SELECTOR => Some(Self::G1Msm),
            G2_ADD_SELECTOR => Some(Self::G2Add),
            G2_MSM_SELECTOR => Some(Self::G2Msm),
            PAIRING_SELECTOR => Some(Self::Pairing),
            MAP_FP_TO_G1_SELECTOR => Some(Self::MapFpToG1),
            MAP_FP2_TO_G2_SELECTOR => Some(Self::MapFp2ToG2),
            _ => None,
        }
    }

    /// The contract address of this operation.
    pub const fn selector(self) -> u64 {
        match self {
            Self::G1Add => G1_ADD_SELECTOR,
            Self::G1Msm => G1_MSM_SELECTOR,
            Self::G2Add => G2_ADD_SELECTOR,
            Self::G2Msm => G2_MSM_SELECTOR,
            Self::Pairing => PAIRING_SELECTOR,
            Self::MapFpToG1 => MAP_FP_TO_G1_SELECTOR,
            Self::MapFp2ToG2 => MAP_FP2_TO_G2_SELECTOR,
        }
    }

    /// The EIP-2537 name of this operation.
    pub const fn name(self) -> &'static str {
        match self {
            Self::G1Add => "BLS12_G1ADD",
            Self::G1Msm => "BLS12_G1MSM",
            Self::G2Add => "BLS12_G2ADD",
            Self::G2Msm => "BLS12_G2MSM",
            Self::Pairing => "BLS12_PAIRING_CHECK",
            Self::MapFpToG1 => "BLS12_MAP_FP_TO_G1",
            Self::MapFp2ToG2 => "BLS12_MAP_FP2_TO_G2",
        }
    }

    /// Length in bytes of a successful output.
    pub const fn output_len(self) -> usize {
        match self {
            Self::G1Add | Self::G1Msm | Self::MapFpToG1 => PADDED_G1_LENGTH,
            Self::G2Add | Self::G2Msm | Self::MapFp2ToG2 => PADDED_G2_LENGTH,
            Self::Pairing => PAIRING_OUTPUT_LENGTH,
        }
    }

    /// Runs this operation on `input` with the given gas limit.
    pub fn execute(self, input: &[u8], gas_limit: u64) -> PrecompileResult {
        match self {
            Self::G1Add => g1_add(input, gas_limit),
            Self::G1Msm => g1_msm(input, gas_limit),
            Self::G2Add => g2_add(input, gas_limit),
            Self::G2Msm => g2_msm(input, gas_limit),
            Self::Pairing => pairing(input, gas_limit),
            Self::MapFpToG1 => map_fp_to_g1(input, gas_limit),
            Self::MapFp2ToG2 => map_fp2_to_g2(input, gas_limit),
        }
    }

    /// Runs this operation and writes the result into `output`,
    /// returning the gas used.
    ///
    /// Fails with [`PrecompileError::OutputBufferTooSmall`] when
    /// `output` is shorter than [`Self::output_len`].
    pub fn call_into(
        self,
        input: &[u8],
        gas_limit: u64,
        output: &mut [u8],
    ) -> Result<u64, PrecompileError> {
        let result = self.execute(input, gas_limit)?;
        let bytes = result.bytes.as_ref();
        if output.len() < bytes.len() {
            return Err(PrecompileError::OutputBufferTooSmall);
        }
        output[..bytes.len()].copy_from_slice(bytes);
        Ok(result.gas_used)
    }
}
