//! Chain-rule evaluation of parameter expressions.
//!
//! Computes the numeric derivative of an angle expression with respect to
//! one named variable, at the values currently bound to the expression's
//! leaves. This is the chain factor that multiplies the ±π/2 shift terms of
//! each rotation gate.

use embla_ir::ParameterExpression;

use crate::error::{GradError, GradResult};
use crate::partials::partial;

/// The derivative `∂ expr / ∂ variable`, evaluated at the currently bound
/// leaf values.
///
/// Subtrees that do not mention `variable` contribute zero without being
/// recursed into. Calling this on a bare constant is an error: a constant is
/// not a function of anything, and a caller holding one has already lost
/// track of what it is differentiating.
pub fn derivative(expr: &ParameterExpression, variable: &str) -> GradResult<f64> {
    match expr {
        ParameterExpression::Constant(value) => Err(GradError::InvalidOperand(format!(
            "constant {value} has no dependence to differentiate"
        ))),
        ParameterExpression::Variable(v) => Ok(if v.name == variable { 1.0 } else { 0.0 }),
        ParameterExpression::Transform(t) => {
            if !expr.has_variable(variable) {
                return Ok(0.0);
            }
            let args = t.args();
            let x = args[0].evaluate();
            let y = args[1].evaluate();
            let mut total = 0.0;
            for (argnum, arg) in args.iter().enumerate() {
                if !arg.has_variable(variable) {
                    continue;
                }
                total += partial(t.op(), argnum)?(x, y) * derivative(arg, variable)?;
            }
            Ok(total)
        }
    }
}
