//! Controlled-rotation expansion.
//!
//! The ±π/2 parameter-shift rule only holds for plain rotations, whose
//! generators have eigenvalues ±1/2. Controlled rotations are therefore
//! rewritten before differentiation using the standard identities
//!
//!   CRz(θ) = Rz(θ/2)·CX · Rz(−θ/2)·CX
//!   CRy(θ) = Ry(θ/2)·CX · Ry(−θ/2)·CX
//!   CRx(θ) = Rx(θ/2)·CZ · Rx(−θ/2)·CZ
//!
//! (rotations on the target qubit). The half angles are kept symbolic, so
//! each expanded rotation contributes the chain-rule factor ½.

use embla_ir::{Circuit, Gate, GateKind, Instruction, ParameterExpression, QubitId};
use tracing::debug;

use crate::error::CompileResult;

/// Expand all controlled rotations; every other instruction is kept as-is.
///
/// A frozen controlled rotation expands into frozen rotations.
pub fn compile_controlled_rotation(circuit: &Circuit) -> CompileResult<Circuit> {
    let mut out = Circuit::new(circuit.name().to_string(), circuit.num_qubits());
    for inst in circuit.instructions() {
        match &inst.gate.kind {
            GateKind::CRx(theta) | GateKind::CRy(theta) | GateKind::CRz(theta) => {
                debug!(gate = inst.name(), "expanding controlled rotation");
                expand_controlled_rotation(
                    &mut out,
                    &inst.gate.kind,
                    theta,
                    inst.qubits[0],
                    inst.qubits[1],
                    inst.gate.is_frozen(),
                )?;
            }
            _ => {
                out.apply(inst.clone())?;
            }
        }
    }
    Ok(out)
}

fn expand_controlled_rotation(
    circuit: &mut Circuit,
    kind: &GateKind,
    theta: &ParameterExpression,
    control: QubitId,
    target: QubitId,
    frozen: bool,
) -> CompileResult<()> {
    let half = theta.clone() / ParameterExpression::constant(2.0);
    let neg_half = -(half.clone());

    let rotation = |angle: ParameterExpression| -> Gate {
        let kind = match kind {
            GateKind::CRx(_) => GateKind::Rx(angle),
            GateKind::CRy(_) => GateKind::Ry(angle),
            _ => GateKind::Rz(angle),
        };
        let gate = Gate::new(kind);
        if frozen { gate.frozen() } else { gate }
    };

    circuit.apply(Instruction::new(rotation(half), [target]))?;
    entangler(circuit, kind, control, target)?;
    circuit.apply(Instruction::new(rotation(neg_half), [target]))?;
    entangler(circuit, kind, control, target)?;

    Ok(())
}

/// CRx conjugates with CZ (Z·X·Z = −X); CRy and CRz use CX.
fn entangler(
    circuit: &mut Circuit,
    kind: &GateKind,
    control: QubitId,
    target: QubitId,
) -> CompileResult<()> {
    match kind {
        GateKind::CRx(_) => circuit.cz(control, target)?,
        _ => circuit.cx(control, target)?,
    };
    Ok(())
}
