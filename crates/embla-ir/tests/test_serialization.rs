//! Serde round-trip tests for the IR types.
//!
//! Circuits and their parameter expressions cross process boundaries as
//! JSON, so structural equality must survive a round trip.

use embla_ir::{Circuit, ParameterExpression, PauliOp, PauliString, QubitId, Variable};

#[test]
fn parameter_expression_roundtrip() {
    let theta = ParameterExpression::Variable(Variable::new("theta", 0.25));
    let expr = (ParameterExpression::constant(2.0) * theta).pow(3.0);

    let json = serde_json::to_string(&expr).unwrap();
    let back: ParameterExpression = serde_json::from_str(&json).unwrap();
    assert_eq!(back, expr);
    assert_eq!(back.evaluate(), expr.evaluate());
}

#[test]
fn circuit_roundtrip_preserves_structure() {
    let mut circuit = Circuit::new("ansatz", 3);
    circuit
        .h(QubitId(0))
        .unwrap()
        .rx(Variable::new("theta", 0.4), QubitId(1))
        .unwrap()
        .crz(Variable::new("phi", 1.2), QubitId(0), QubitId(2))
        .unwrap()
        .exp_pauli(
            PauliString::from_ops([(0, PauliOp::X), (2, PauliOp::Z)]),
            0.5,
            Variable::new("t", 0.1),
        )
        .unwrap();

    let json = serde_json::to_string(&circuit).unwrap();
    let back: Circuit = serde_json::from_str(&json).unwrap();
    assert_eq!(back, circuit);
    assert_eq!(back.extract_variables(), circuit.extract_variables());
}

#[test]
fn frozen_flag_survives_roundtrip() {
    let mut circuit = Circuit::new("ansatz", 1);
    circuit.ry(Variable::new("theta", 0.0), QubitId(0)).unwrap();
    let frozen = embla_ir::Instruction::new(
        circuit.instructions()[0].gate.clone().frozen(),
        circuit.instructions()[0].qubits.clone(),
    );
    let circuit = circuit.replace_gate(0, vec![frozen]).unwrap();

    let json = serde_json::to_string(&circuit).unwrap();
    let back: Circuit = serde_json::from_str(&json).unwrap();
    assert!(back.instructions()[0].gate.is_frozen());
}
