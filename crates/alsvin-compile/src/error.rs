//! Error types for the compilation crate.

use alsvin_ir::{Gate, IrError};
use thiserror::Error;

/// Errors that can occur during compilation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CompileError {
    /// The source circuit contains a gate outside the translatable
    /// vocabulary.
    #[error("circuit contains the unsupported gate: {}", .gate.name())]
    UnsupportedGate {
        /// The offending gate kind.
        gate: Gate,
    },

    /// The requested optimization level does not exist.
    #[error("optimization level must be 0, 1, 2 or 3, got {level}")]
    InvalidOptimizationLevel {
        /// The level that was requested.
        level: u8,
    },

    /// An IR invariant was violated while rebuilding a circuit.
    #[error(transparent)]
    Ir(#[from] IrError),
}

/// Result type for compilation operations.
pub type CompileResult<T> = Result<T, CompileError>;
