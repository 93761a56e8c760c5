//! The analytic parameter-shift rule for one expectation value.
//!
//! For a rotation gate `R(θ)` whose generator has eigenvalues ±1/2, the
//! derivative of `⟨H⟩` with respect to the angle is
//!
//!   d⟨H⟩/dθ = 1/2 · (⟨H⟩|θ+π/2 − ⟨H⟩|θ−π/2)
//!
//! exact at finite shift. When the angle is itself an expression over named
//! variables, each shifted pair is weighted by the chain factor
//! `∂ angle / ∂ variable` from [`crate::chain`].

use std::f64::consts::FRAC_PI_2;

use embla_ir::{Gate, Instruction, ParameterExpression};
use embla_objective::{ExpectationValue, Objective};
use tracing::{debug, trace};

use crate::chain::derivative;
use crate::error::{GradError, GradResult};

/// Differentiate one expectation value with respect to `variable`.
///
/// Returns the derivative as a new [`Objective`]: a weighted sum of
/// expectation values over angle-shifted copies of the circuit. Every
/// unfrozen parameterized rotation contributes a pair, including gates
/// whose angle only mentions other variables (their chain factor is zero).
/// Returns `None` only when the circuit has no unfrozen parameterized gate
/// at all, which callers read as an exact zero.
///
/// The circuit must already be lowered to shift-compatible gates. A single
/// parameterized gate without a plain rotation angle aborts the whole
/// gradient, regardless of which variable was requested.
pub fn grad_expectation(
    expectation: &ExpectationValue,
    variable: &str,
) -> GradResult<Option<Objective>> {
    let circuit = expectation.circuit();
    let mut total: Option<Objective> = None;

    for (position, instruction) in circuit.instructions().iter().enumerate() {
        let gate = &instruction.gate;
        if gate.is_frozen() || !gate.is_parameterized() {
            continue;
        }

        if gate.kind.angle().is_none() {
            return Err(match gate.name() {
                "power" => GradError::NotImplemented {
                    gate: gate.name().to_string(),
                },
                _ => GradError::UnsupportedGateKind {
                    gate: gate.name().to_string(),
                },
            });
        }

        let contribution = shift_contribution(expectation, position, instruction, variable)?;
        total = Some(match total {
            None => contribution,
            Some(acc) => acc + contribution,
        });
    }

    debug!(
        variable,
        gates = circuit.len(),
        terms = total.as_ref().map_or(0, Objective::len),
        "differentiated expectation value"
    );
    Ok(total)
}

/// The weighted shift pair for a single rotation at `position`.
fn shift_contribution(
    expectation: &ExpectationValue,
    position: usize,
    instruction: &Instruction,
    variable: &str,
) -> GradResult<Objective> {
    let gate = &instruction.gate;
    // Checked by the caller.
    let Some(angle) = gate.kind.angle() else {
        return Err(GradError::UnsupportedGateKind {
            gate: gate.name().to_string(),
        });
    };

    let weight = 0.5 * derivative(angle, variable)?;
    trace!(position, variable, weight, "building shift pair");

    let plus = shifted_expectation(expectation, position, instruction, gate, FRAC_PI_2)?;
    let minus = shifted_expectation(expectation, position, instruction, gate, -FRAC_PI_2)?;

    Ok(weight * Objective::from_expectation(plus)
        + (-weight) * Objective::from_expectation(minus))
}

/// Copy the circuit with the gate at `position` replaced by a frozen copy
/// whose angle is shifted by `shift`.
///
/// Freezing keeps the shifted copy out of any later differentiation pass.
fn shifted_expectation(
    expectation: &ExpectationValue,
    position: usize,
    instruction: &Instruction,
    gate: &Gate,
    shift: f64,
) -> GradResult<ExpectationValue> {
    let Some(angle) = gate.kind.angle() else {
        return Err(GradError::UnsupportedGateKind {
            gate: gate.name().to_string(),
        });
    };
    let shifted_angle = angle.clone() + ParameterExpression::constant(shift);
    let Some(shifted_gate) = gate.with_angle(shifted_angle) else {
        return Err(GradError::UnsupportedGateKind {
            gate: gate.name().to_string(),
        });
    };
    let replacement = Instruction::new(shifted_gate.frozen(), instruction.qubits.clone());
    let circuit = expectation
        .circuit()
        .replace_gate(position, vec![replacement])?;
    Ok(expectation.with_circuit(circuit))
}
