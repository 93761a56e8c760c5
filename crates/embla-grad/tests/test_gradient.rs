//! End-to-end tests for parameter-shift gradient construction.
//!
//! No circuit is ever simulated here. Where a numeric check is wanted, the
//! known closed form of a one-qubit expectation value is fed into the
//! derivative objective's transformation: after `Rx(θ)` on |0⟩, the value
//! of ⟨Z⟩ is cos θ, so the shift-rule combination must reproduce −sin θ.

use std::f64::consts::FRAC_PI_2;

use embla_grad::{derivative, grad, grad_expectation, GradError, Gradient};
use embla_ir::{Circuit, ParameterExpression, PauliOp, PauliString, PowerBase, QubitId, Variable};
use embla_objective::{ExpectationValue, Hamiltonian, Objective};

fn rx_objective(angle: impl Into<ParameterExpression>) -> Objective {
    let mut circuit = Circuit::new("ansatz", 1);
    circuit.rx(angle, QubitId(0)).unwrap();
    Objective::from_expectation(ExpectationValue::new(circuit, Hamiltonian::z(0)))
}

/// Evaluate a derivative objective assuming every circuit is `Rx(angle)` on
/// one qubit measured in Z, i.e. each expectation value is cos(angle).
fn evaluate_as_rx_z(objective: &Objective) -> f64 {
    let values: Vec<f64> = objective
        .expectation_values()
        .iter()
        .map(|ev| {
            ev.circuit()
                .instructions()
                .iter()
                .filter_map(|inst| inst.gate.kind.angle())
                .map(ParameterExpression::evaluate)
                .sum::<f64>()
                .cos()
        })
        .collect();
    objective.transform_values(&values).unwrap()
}

// ---------------------------------------------------------------------------
// Chain-rule factors
// ---------------------------------------------------------------------------

#[test]
fn chain_factor_of_scaled_angle() {
    let theta = ParameterExpression::variable("theta", 0.7);
    let expr = ParameterExpression::constant(2.0) * theta;
    assert_eq!(derivative(&expr, "theta").unwrap(), 2.0);
}

#[test]
fn chain_factor_of_sum_splits_per_variable() {
    let expr = ParameterExpression::variable("theta", 0.1)
        + ParameterExpression::variable("phi", 0.2);
    assert_eq!(derivative(&expr, "theta").unwrap(), 1.0);
    assert_eq!(derivative(&expr, "phi").unwrap(), 1.0);
}

// ---------------------------------------------------------------------------
// Shift rule, numerically
// ---------------------------------------------------------------------------

#[test]
fn rx_gradient_matches_negative_sine() {
    for theta in [0.0, 0.3, 1.0, -2.2] {
        let objective = rx_objective(Variable::new("theta", theta));
        let d = grad(objective, Some("theta"), false)
            .unwrap()
            .into_single()
            .unwrap();
        // d cos(θ)/dθ = −sin θ
        assert!((evaluate_as_rx_z(&d) - (-theta.sin())).abs() < 1e-12);
    }
}

#[test]
fn doubled_angle_gradient_picks_up_chain_factor() {
    let theta = 0.4_f64;
    let angle = ParameterExpression::constant(2.0)
        * ParameterExpression::Variable(Variable::new("theta", theta));
    let d = grad(rx_objective(angle), Some("theta"), false)
        .unwrap()
        .into_single()
        .unwrap();
    // d cos(2θ)/dθ = −2 sin(2θ)
    assert!((evaluate_as_rx_z(&d) - (-2.0 * (2.0 * theta).sin())).abs() < 1e-12);
}

#[test]
fn shift_pair_angles_are_plus_minus_half_pi() {
    let d = grad(
        rx_objective(Variable::new("theta", 0.25)),
        Some("theta"),
        false,
    )
    .unwrap()
    .into_single()
    .unwrap();
    // Original expectation value followed by the shifted pair.
    assert_eq!(d.len(), 3);
    let angles: Vec<f64> = d
        .expectation_values()
        .iter()
        .map(|ev| {
            ev.circuit().instructions()[0]
                .gate
                .kind
                .angle()
                .unwrap()
                .evaluate()
        })
        .collect();
    assert!((angles[0] - 0.25).abs() < 1e-12);
    assert!((angles[1] - (0.25 + FRAC_PI_2)).abs() < 1e-12);
    assert!((angles[2] - (0.25 - FRAC_PI_2)).abs() < 1e-12);
}

#[test]
fn gradient_linearity_over_objective_sum() {
    let theta = 0.8_f64;
    let a = rx_objective(Variable::new("theta", theta));
    let b = rx_objective(Variable::new("theta", theta));
    let d = grad(a + b, Some("theta"), false)
        .unwrap()
        .into_single()
        .unwrap();
    // d(cos θ + cos θ)/dθ = −2 sin θ
    assert!((evaluate_as_rx_z(&d) - (-2.0 * theta.sin())).abs() < 1e-12);
}

#[test]
fn product_objective_gradient_uses_product_rule() {
    let theta = 0.6_f64;
    let phi = 1.1_f64;
    let a = rx_objective(Variable::new("theta", theta));
    let b = rx_objective(Variable::new("phi", phi));
    let d = grad(a * b, Some("theta"), false)
        .unwrap()
        .into_single()
        .unwrap();
    // d(cos θ · cos φ)/dθ = −sin θ · cos φ
    assert!((evaluate_as_rx_z(&d) - (-theta.sin() * phi.cos())).abs() < 1e-12);
}

// ---------------------------------------------------------------------------
// Zero derivatives
// ---------------------------------------------------------------------------

#[test]
fn absent_variable_yields_zero_weighted_pair() {
    let gradient = grad(
        rx_objective(Variable::new("theta", 0.2)),
        Some("phi"),
        false,
    )
    .unwrap();
    // The shift pair is still constructed; every chain weight is zero.
    let d = gradient.into_single().unwrap();
    assert_eq!(d.len(), 3);
    assert_eq!(evaluate_as_rx_z(&d), 0.0);
}

#[test]
fn frozen_only_circuit_gives_none() {
    let mut circuit = Circuit::new("ansatz", 1);
    circuit.rx(Variable::new("theta", 0.2), QubitId(0)).unwrap();
    let frozen = embla_ir::Instruction::new(
        circuit.instructions()[0].gate.clone().frozen(),
        circuit.instructions()[0].qubits.clone(),
    );
    let circuit = circuit.replace_gate(0, vec![frozen]).unwrap();
    let objective =
        Objective::from_expectation(ExpectationValue::new(circuit, Hamiltonian::z(0)));
    assert!(grad(objective, Some("theta"), false)
        .unwrap()
        .into_single()
        .is_none());
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

#[test]
fn full_gradient_is_keyed_by_all_free_variables() {
    let mut circuit = Circuit::new("ansatz", 2);
    circuit
        .rx(Variable::new("theta", 0.1), QubitId(0))
        .unwrap()
        .cx(QubitId(0), QubitId(1))
        .unwrap()
        .ry(Variable::new("phi", 0.2), QubitId(1))
        .unwrap();
    let objective =
        Objective::from_expectation(ExpectationValue::new(circuit, Hamiltonian::z(1)));

    let Gradient::ByVariable(entries) = grad(objective, None, false).unwrap() else {
        panic!("expected by-variable gradient");
    };
    let names: Vec<_> = entries.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, vec!["theta", "phi"]);
    assert!(entries.iter().all(|(_, d)| d.is_some()));
}

#[test]
fn bare_circuit_is_rejected() {
    let mut circuit = Circuit::new("ansatz", 1);
    circuit.rx(Variable::new("theta", 0.1), QubitId(0)).unwrap();
    assert!(matches!(
        grad(circuit, None, false),
        Err(GradError::UnsupportedType { .. })
    ));
}

// ---------------------------------------------------------------------------
// Compilation interplay
// ---------------------------------------------------------------------------

#[test]
fn controlled_rotation_gradient_comes_from_half_angles() {
    let theta = 0.9_f64;
    let mut circuit = Circuit::new("ansatz", 2);
    circuit
        .crz(Variable::new("theta", theta), QubitId(0), QubitId(1))
        .unwrap();
    let objective =
        Objective::from_expectation(ExpectationValue::new(circuit, Hamiltonian::z(1)));

    let d = grad(objective, Some("theta"), false)
        .unwrap()
        .into_single()
        .unwrap();
    // The compiled original plus a shift pair per expanded rotation.
    assert_eq!(d.len(), 5);
    // Exactly one gate per shifted circuit is the frozen replacement; the
    // carried original has none.
    let frozen_counts: Vec<usize> = d
        .expectation_values()
        .iter()
        .map(|ev| {
            ev.circuit()
                .instructions()
                .iter()
                .filter(|inst| inst.gate.is_frozen())
                .count()
        })
        .collect();
    assert_eq!(frozen_counts, vec![0, 1, 1, 1, 1]);
}

#[test]
fn generator_exponential_gradient_flows_through_rotation() {
    let t = 0.35_f64;
    let mut circuit = Circuit::new("ansatz", 2);
    circuit
        .exp_pauli(
            PauliString::from_ops([(0, PauliOp::Z), (1, PauliOp::Z)]),
            0.5,
            Variable::new("t", t),
        )
        .unwrap();
    let objective =
        Objective::from_expectation(ExpectationValue::new(circuit, Hamiltonian::z(0)));

    let d = grad(objective, Some("t"), false)
        .unwrap()
        .into_single()
        .unwrap();
    // One expanded rotation with angle 2·0.5·t, so one shift pair whose
    // chain factor is 1/2 · d(t)/dt · 2·0.5 = 1/2, next to the original.
    assert_eq!(d.len(), 3);
    assert_eq!(d.transform_values(&[0.0, 1.0, 0.0]).unwrap(), 0.5);
}

#[test]
fn uncompiled_generator_exponential_is_an_error() {
    let mut circuit = Circuit::new("ansatz", 1);
    circuit
        .exp_pauli(
            PauliString::from_ops([(0, PauliOp::Z)]),
            1.0,
            Variable::new("t", 0.5),
        )
        .unwrap();
    let ev = ExpectationValue::new(circuit, Hamiltonian::z(0));
    assert!(matches!(
        grad_expectation(&ev, "t"),
        Err(GradError::UnsupportedGateKind { .. })
    ));
}

#[test]
fn power_gate_gradient_is_not_implemented() {
    let mut circuit = Circuit::new("ansatz", 1);
    circuit
        .power(PowerBase::X, Variable::new("t", 0.5), QubitId(0))
        .unwrap();
    let objective =
        Objective::from_expectation(ExpectationValue::new(circuit, Hamiltonian::z(0)));
    assert!(matches!(
        grad(objective, Some("t"), false),
        Err(GradError::NotImplemented { .. })
    ));
}

#[test]
fn power_gate_aborts_gradient_of_other_variables_too() {
    let mut circuit = Circuit::new("ansatz", 2);
    circuit
        .rx(Variable::new("theta", 0.2), QubitId(0))
        .unwrap()
        .power(PowerBase::X, Variable::new("t", 0.5), QubitId(1))
        .unwrap();
    let objective =
        Objective::from_expectation(ExpectationValue::new(circuit, Hamiltonian::z(0)));
    // One undifferentiable gate poisons the whole expectation value, even
    // for a variable it never mentions.
    assert!(matches!(
        grad(objective, Some("theta"), false),
        Err(GradError::NotImplemented { .. })
    ));
}

// ---------------------------------------------------------------------------
// Nesting
// ---------------------------------------------------------------------------

#[test]
fn gradient_of_gradient_is_zero_weighted() {
    let first = grad(
        rx_objective(Variable::new("theta", 0.5)),
        Some("theta"),
        false,
    )
    .unwrap()
    .into_single()
    .unwrap();
    // The shifted replacement gates are frozen, so only the carried
    // original is differentiated again, and its outer factor is the
    // derivative of a constant-weight transformation: zero. Chain weights
    // are numbers, not expressions, so no −cos θ term survives.
    let second = grad(first, Some("theta"), false)
        .unwrap()
        .into_single()
        .unwrap();
    assert_eq!(evaluate_as_rx_z(&second), 0.0);
}
