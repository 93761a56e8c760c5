//! Error types for the compile crate.

use thiserror::Error;

/// Errors produced by decomposition passes.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CompileError {
    /// Circuit builder returned an error.
    #[error("circuit IR error: {0}")]
    Ir(#[from] embla_ir::IrError),
}

/// Result type for compilation passes.
pub type CompileResult<T> = Result<T, CompileError>;
