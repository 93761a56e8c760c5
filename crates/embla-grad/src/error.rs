//! Error types for gradient construction.

use embla_ir::BinaryOp;
use thiserror::Error;

/// Errors produced while building a gradient.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GradError {
    /// The derivative table was asked for an argument slot it does not have.
    #[error("no derivative of '{op}' with respect to argument {argnum} (operators are binary)")]
    UnsupportedOperation {
        /// The binary operator being differentiated.
        op: BinaryOp,
        /// The requested argument index.
        argnum: usize,
    },

    /// The chain-rule evaluator was handed something it cannot recurse into.
    #[error("invalid operand in chain rule: {0}")]
    InvalidOperand(String),

    /// The gate is differentiable in principle, but no rule is implemented.
    #[error("gradient for gate '{gate}' is not implemented")]
    NotImplemented {
        /// Name of the offending gate.
        gate: String,
    },

    /// The gate carries a parameter but admits no shift rule, and no
    /// compilation pass lowered it to one that does.
    #[error("cannot differentiate parameterized gate '{gate}'; compile it to rotations first")]
    UnsupportedGateKind {
        /// Name of the offending gate.
        gate: String,
    },

    /// The value handed to the dispatcher is not differentiable.
    #[error("cannot differentiate a {given}; wrap it in an expectation value or objective")]
    UnsupportedType {
        /// Description of what was given.
        given: String,
    },

    /// Circuit rewriting failed.
    #[error("circuit IR error: {0}")]
    Ir(#[from] embla_ir::IrError),

    /// A pre-differentiation compilation pass failed.
    #[error("compilation error: {0}")]
    Compile(#[from] embla_compile::CompileError),
}

/// Result type for gradient construction.
pub type GradResult<T> = Result<T, GradError>;
