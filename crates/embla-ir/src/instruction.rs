//! Circuit instructions combining gates with their operand qubits.

use serde::{Deserialize, Serialize};

use crate::gate::{Gate, GateKind};
use crate::qubit::QubitId;

/// A gate applied to an ordered list of qubits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    /// The gate being applied.
    pub gate: Gate,
    /// Qubits this instruction operates on.
    pub qubits: Vec<QubitId>,
}

impl Instruction {
    /// Create an instruction from a gate and its qubits.
    pub fn new(gate: impl Into<Gate>, qubits: impl IntoIterator<Item = QubitId>) -> Self {
        Self {
            gate: gate.into(),
            qubits: qubits.into_iter().collect(),
        }
    }

    /// Create a single-qubit gate instruction.
    pub fn single_qubit_gate(kind: GateKind, qubit: QubitId) -> Self {
        Self::new(kind, [qubit])
    }

    /// Create a two-qubit gate instruction.
    pub fn two_qubit_gate(kind: GateKind, q1: QubitId, q2: QubitId) -> Self {
        Self::new(kind, [q1, q2])
    }

    /// Get the name of the instruction's gate.
    pub fn name(&self) -> &'static str {
        self.gate.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameter::ParameterExpression;

    #[test]
    fn test_single_qubit_instruction() {
        let inst = Instruction::single_qubit_gate(GateKind::H, QubitId(0));
        assert_eq!(inst.qubits, vec![QubitId(0)]);
        assert_eq!(inst.name(), "h");
        assert!(!inst.gate.is_frozen());
    }

    #[test]
    fn test_frozen_gate_instruction() {
        let gate = Gate::new(GateKind::Rz(ParameterExpression::variable("phi", 0.0))).frozen();
        let inst = Instruction::new(gate, [QubitId(1)]);
        assert!(inst.gate.is_frozen());
        assert_eq!(inst.name(), "rz");
    }
}
