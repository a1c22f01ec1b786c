//! Result, output and error types shared by all operations.

use core::fmt;

use primitives::Bytes;

/// An operation result: either the output with the gas it consumed, or an
/// error.
pub type PrecompileResult = Result<PrecompileOutput, PrecompileError>;

/// Successful execution output.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PrecompileOutput {
    /// Gas consumed by the operation
    pub gas_used: u64,
    /// Output bytes
    pub bytes: Bytes,
}

impl PrecompileOutput {
    /// Returns a new output with the given gas used and output bytes.
    pub fn new(gas_used: u64, bytes: Bytes) -> Self {
        Self { gas_used, bytes }
    }
}

/// Errors an operation can return. Any error consumes the entire gas
/// limit; the variants only describe what went wrong.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PrecompileError {
    /// The gas limit does not cover the operation's cost
    OutOfGas,
    /// The input length does not match the operation's requirements
    InvalidInputLength,
    /// A field element is non-canonical or its padding is non-zero
    InvalidEncoding,
    /// A point is not on the curve, or fails a required subgroup check
    InvalidPoint,
    /// An internal division hit a zero denominator
    DivisionByZero,
    /// The caller-provided output buffer is shorter than the operation's
    /// output
    OutputBufferTooSmall,
}

impl PrecompileError {
    /// Returns `true` if the error is out of gas.
    pub fn is_oog(&self) -> bool {
        matches!(self, Self::OutOfGas)
    }
}

impl core::error::Error for PrecompileError {}

impl fmt::Display for PrecompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::OutOfGas => "out of gas",
            Self::InvalidInputLength => "invalid input length",
            Self::InvalidEncoding => "invalid field element encoding",
            Self::InvalidPoint => "point not on curve or not in subgroup",
            Self::DivisionByZero => "division by zero",
            Self::OutputBufferTooSmall => "output buffer too small",
        };
        f.write_str(s)
    }
}
