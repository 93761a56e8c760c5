//! Partial derivatives of the binary parameter operators.
//!
//! For each [`BinaryOp`] `f(x, y)` this module provides the exact partial
//! with respect to either argument as a plain numeric function. The chain
//! rule in [`crate::chain`] evaluates these at the current values of the
//! operand subtrees.

use embla_ir::BinaryOp;

use crate::error::{GradError, GradResult};

/// Look up `∂f/∂x` (`argnum == 0`) or `∂f/∂y` (`argnum == 1`) for the
/// operator `f(x, y)`.
///
/// Any other `argnum` is rejected with
/// [`GradError::UnsupportedOperation`].
pub fn partial(op: BinaryOp, argnum: usize) -> GradResult<fn(f64, f64) -> f64> {
    let f: fn(f64, f64) -> f64 = match (op, argnum) {
        (BinaryOp::Add, 0) => |_, _| 1.0,
        (BinaryOp::Add, 1) => |_, _| 1.0,

        (BinaryOp::Sub, 0) => |_, _| 1.0,
        (BinaryOp::Sub, 1) => |_, _| -1.0,

        (BinaryOp::Mul, 0) => |_, y| y,
        (BinaryOp::Mul, 1) => |x, _| x,

        (BinaryOp::Div, 0) => |_, y| 1.0 / y,
        (BinaryOp::Div, 1) => |x, y| -x / (y * y),

        // d(x^y)/dx = y·x^(y-1), d(x^y)/dy = x^y·ln(x)
        (BinaryOp::Pow, 0) => |x, y| y * x.powf(y - 1.0),
        (BinaryOp::Pow, 1) => |x, y| x.powf(y) * x.ln(),

        (op, argnum) => return Err(GradError::UnsupportedOperation { op, argnum }),
    };
    Ok(f)
}
