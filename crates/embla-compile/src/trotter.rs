//! Trotterized-gate expansion.
//!
//! Expands every generator exponential `exp(-i · coeff · time · P)` into
//! explicit gates using the circuit identity
//!
//!   exp(-i θ/2 · Z⊗Z⊗...⊗Z) = CNOT_ladder · Rz(θ) · CNOT_ladder†
//!
//! with basis rotations applied before/after to handle X and Y factors:
//!   X → H · Z · H
//!   Y → Sdg · H · Z · H · S
//!   Z → identity
//!
//! The Rz angle stays symbolic (`2·coeff·time`), so differentiation flows
//! through the expanded rotation via the chain rule.

use embla_ir::{
    Circuit, Gate, GateKind, Instruction, ParameterExpression, PauliOp, PauliString, QubitId,
};
use tracing::debug;

use crate::error::CompileResult;

/// Expand all `ExpPauli` gates; every other instruction is kept as-is.
///
/// A frozen generator exponential produces a frozen rotation, so it stays
/// excluded from differentiation after expansion.
pub fn compile_trotterized_gate(circuit: &Circuit) -> CompileResult<Circuit> {
    let mut out = Circuit::new(circuit.name().to_string(), circuit.num_qubits());
    for inst in circuit.instructions() {
        match &inst.gate.kind {
            GateKind::ExpPauli { pauli, coeff, time } => {
                debug!(
                    gate = inst.name(),
                    n_factors = pauli.ops().len(),
                    coeff,
                    "expanding generator exponential"
                );
                expand_exp_pauli(&mut out, pauli, *coeff, time, inst.gate.is_frozen())?;
            }
            _ => {
                out.apply(inst.clone())?;
            }
        }
    }
    Ok(out)
}

/// Append the expansion of `exp(-i · coeff · time · P)` to `circuit`.
///
/// An identity Pauli string is a pure global phase and expands to nothing.
fn expand_exp_pauli(
    circuit: &mut Circuit,
    pauli: &PauliString,
    coeff: f64,
    time: &ParameterExpression,
    frozen: bool,
) -> CompileResult<()> {
    let ops = pauli.ops();
    if ops.is_empty() {
        return Ok(());
    }

    // θ = 2 · coeff · time  (Rz(θ) implements exp(-i θ/2 Z))
    let theta = ParameterExpression::constant(2.0 * coeff) * time.clone();

    basis_change(circuit, ops, false)?;

    let qubits: Vec<u32> = ops.iter().map(|(q, _)| *q).collect();
    for window in qubits.windows(2) {
        circuit.cx(QubitId(window[0]), QubitId(window[1]))?;
    }

    let target = QubitId(qubits[qubits.len() - 1]);
    let mut rz = Gate::new(GateKind::Rz(theta));
    if frozen {
        rz = rz.frozen();
    }
    circuit.apply(Instruction::new(rz, [target]))?;

    for window in qubits.windows(2).rev() {
        circuit.cx(QubitId(window[0]), QubitId(window[1]))?;
    }
    basis_change(circuit, ops, true)?;

    Ok(())
}

/// Apply basis-change gates for each Pauli factor.
///
/// Forward pass (`undo = false`): X → H, Y → Sdg·H, Z → nothing.
/// Reverse pass (`undo = true`): X → H, Y → H·S, Z → nothing.
fn basis_change(circuit: &mut Circuit, ops: &[(u32, PauliOp)], undo: bool) -> CompileResult<()> {
    for &(q, op) in ops {
        let qid = QubitId(q);
        match (op, undo) {
            (PauliOp::X, _) => {
                circuit.h(qid)?;
            }
            (PauliOp::Y, false) => {
                circuit.sdg(qid)?;
                circuit.h(qid)?;
            }
            (PauliOp::Y, true) => {
                circuit.h(qid)?;
                circuit.s(qid)?;
            }
            (PauliOp::Z | PauliOp::I, _) => {}
        }
    }
    Ok(())
}
