//! Gradient dispatch over differentiable values.
//!
//! Ties the pieces together: lower the circuits to shift-compatible gates,
//! differentiate each expectation value with the parameter-shift rule, and
//! chain through the objective's scalar transformation. The result is again
//! an [`Objective`] per variable, so gradients nest.

use embla_compile::compile_circuit;
use embla_ir::Circuit;
use embla_objective::{ExpectationValue, Objective};
use tracing::debug;

use crate::error::{GradError, GradResult};
use crate::shift::grad_expectation;

/// A value handed to [`grad`] for differentiation.
#[derive(Debug, Clone)]
pub enum Differentiable {
    /// A full objective.
    Objective(Objective),
    /// A bare expectation value, treated as the identity objective over it.
    Expectation(ExpectationValue),
    /// A bare circuit. Accepted by the compilation passes but rejected by
    /// [`grad`]: a circuit alone has no scalar to differentiate.
    Circuit(Circuit),
}

impl Differentiable {
    /// The free variable names of the underlying value, in first-occurrence
    /// order.
    pub fn extract_variables(&self) -> Vec<String> {
        match self {
            Differentiable::Objective(o) => o.extract_variables(),
            Differentiable::Expectation(ev) => ev.extract_variables(),
            Differentiable::Circuit(c) => c.extract_variables(),
        }
    }
}

impl From<Objective> for Differentiable {
    fn from(objective: Objective) -> Self {
        Differentiable::Objective(objective)
    }
}

impl From<ExpectationValue> for Differentiable {
    fn from(expectation: ExpectationValue) -> Self {
        Differentiable::Expectation(expectation)
    }
}

impl From<Circuit> for Differentiable {
    fn from(circuit: Circuit) -> Self {
        Differentiable::Circuit(circuit)
    }
}

/// The result of [`grad`]: one derivative objective, or one per variable.
///
/// `None` entries are exact zeros: the value being differentiated has no
/// unfrozen parameterized gate at all. A variable that merely does not
/// occur still yields a zero-weighted objective.
#[derive(Debug, Clone)]
pub enum Gradient {
    /// The derivative with respect to one requested variable.
    Single(Option<Objective>),
    /// Derivatives keyed by variable name, in first-occurrence order.
    ByVariable(Vec<(String, Option<Objective>)>),
}

impl Gradient {
    /// Unpack a single-variable gradient.
    pub fn into_single(self) -> Option<Objective> {
        match self {
            Gradient::Single(objective) => objective,
            Gradient::ByVariable(mut entries) => {
                entries.drain(..).next().and_then(|(_, objective)| objective)
            }
        }
    }
}

/// Differentiate `target` with respect to `variable`, or with respect to
/// every free variable when `variable` is `None`.
///
/// Unless `no_compile` is set, every circuit is first lowered by
/// [`embla_compile::compile_circuit`] so that generator exponentials and
/// controlled rotations become plain rotations the shift rule handles.
///
/// Asking for a variable the target does not contain is not an error; the
/// result carries zero chain weights throughout.
pub fn grad(
    target: impl Into<Differentiable>,
    variable: Option<&str>,
    no_compile: bool,
) -> GradResult<Gradient> {
    let objective = lower(target.into(), no_compile)?;

    match variable {
        Some(name) => {
            debug!(variable = name, "building gradient");
            Ok(Gradient::Single(grad_objective(&objective, name)?))
        }
        None => {
            let variables = objective.extract_variables();
            debug!(n_variables = variables.len(), "building full gradient");
            let mut entries = Vec::with_capacity(variables.len());
            for name in variables {
                let derivative = grad_objective(&objective, &name)?;
                entries.push((name, derivative));
            }
            Ok(Gradient::ByVariable(entries))
        }
    }
}

/// Differentiate `target` with respect to an explicit list of variables.
///
/// Unlike [`grad`] with `variable = None`, the names need not occur in the
/// target; absent names yield zero-weighted objectives.
pub fn grad_selected(
    target: impl Into<Differentiable>,
    variables: &[&str],
    no_compile: bool,
) -> GradResult<Vec<(String, Option<Objective>)>> {
    let objective = lower(target.into(), no_compile)?;
    let mut entries = Vec::with_capacity(variables.len());
    for &name in variables {
        let derivative = grad_objective(&objective, name)?;
        entries.push((name.to_string(), derivative));
    }
    Ok(entries)
}

/// Reject non-differentiable targets and lower the circuits.
fn lower(target: Differentiable, no_compile: bool) -> GradResult<Objective> {
    let objective = match target {
        Differentiable::Objective(o) => o,
        Differentiable::Expectation(ev) => Objective::from_expectation(ev),
        Differentiable::Circuit(_) => {
            return Err(GradError::UnsupportedType {
                given: "bare circuit".to_string(),
            });
        }
    };
    if no_compile {
        return Ok(objective);
    }
    let compiled = objective
        .expectation_values()
        .iter()
        .map(|ev| Ok(ev.with_circuit(compile_circuit(ev.circuit())?)))
        .collect::<GradResult<Vec<_>>>()?;
    Ok(Objective::new(compiled, objective.transformation().clone()))
}

/// Chain the objective's transformation through the expectation-value
/// derivatives:
///
///   dO/dv = Σᵢ (∂f/∂Eᵢ) · dEᵢ/dv
///
/// The outer factor `∂f/∂Eᵢ` is always an objective over the *original*
/// expectation-value list, even when it simplifies to a constant; the inner
/// factor is the shift-rule derivative of the i-th one. Only terms whose
/// inner derivative is `None` (no unfrozen parameterized gate) drop out.
pub fn grad_objective(objective: &Objective, variable: &str) -> GradResult<Option<Objective>> {
    let mut total: Option<Objective> = None;

    for (index, expectation) in objective.expectation_values().iter().enumerate() {
        let Some(inner) = grad_expectation(expectation, variable)? else {
            continue;
        };

        let outer = objective.transformation().derivative(index);
        let outer_objective = Objective::new(objective.expectation_values().to_vec(), outer);
        let contribution = outer_objective * inner;

        total = Some(match total {
            None => contribution,
            Some(acc) => acc + contribution,
        });
    }

    Ok(total)
}
