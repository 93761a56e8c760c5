//! High-level circuit builder API.
//!
//! A [`Circuit`] is an ordered, immutable-once-built list of gate
//! instructions. Gradient construction relies on [`Circuit::replace_gate`]
//! producing a *new* circuit value: the original is never mutated, so the
//! gate loop in the gradient builder can iterate the original instruction
//! list while producing shifted replacements.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::gate::{GateKind, PowerBase};
use crate::instruction::Instruction;
use crate::parameter::ParameterExpression;
use crate::pauli::PauliString;
use crate::qubit::QubitId;

/// A quantum circuit: an ordered sequence of gate instructions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    /// Name of the circuit.
    name: String,
    /// Number of qubits.
    num_qubits: u32,
    /// The instruction list, in application order.
    instructions: Vec<Instruction>,
}

impl Circuit {
    /// Create a new empty circuit with the given width.
    pub fn new(name: impl Into<String>, num_qubits: u32) -> Self {
        Self {
            name: name.into(),
            num_qubits,
            instructions: vec![],
        }
    }

    /// Append an instruction, checking qubit bounds and duplicates.
    pub fn apply(&mut self, instruction: Instruction) -> IrResult<&mut Self> {
        let expected = instruction.gate.kind.num_qubits();
        let got = instruction.qubits.len() as u32;
        if expected != got {
            return Err(IrError::QubitCountMismatch {
                gate_name: instruction.name().to_string(),
                expected,
                got,
            });
        }
        let mut seen = FxHashSet::default();
        for &qubit in &instruction.qubits {
            if qubit.0 >= self.num_qubits {
                return Err(IrError::QubitOutOfRange {
                    qubit,
                    num_qubits: self.num_qubits,
                    gate_name: Some(instruction.name().to_string()),
                });
            }
            if !seen.insert(qubit) {
                return Err(IrError::DuplicateQubit {
                    qubit,
                    gate_name: Some(instruction.name().to_string()),
                });
            }
        }
        self.instructions.push(instruction);
        Ok(self)
    }

    // =========================================================================
    // Fixed gates
    // =========================================================================

    /// Apply Hadamard gate.
    pub fn h(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(GateKind::H, qubit))
    }

    /// Apply Pauli-X gate.
    pub fn x(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(GateKind::X, qubit))
    }

    /// Apply Pauli-Y gate.
    pub fn y(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(GateKind::Y, qubit))
    }

    /// Apply Pauli-Z gate.
    pub fn z(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(GateKind::Z, qubit))
    }

    /// Apply S gate.
    pub fn s(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(GateKind::S, qubit))
    }

    /// Apply S-dagger gate.
    pub fn sdg(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(GateKind::Sdg, qubit))
    }

    /// Apply CNOT (CX) gate.
    pub fn cx(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::two_qubit_gate(GateKind::CX, control, target))
    }

    /// Apply CZ gate.
    pub fn cz(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::two_qubit_gate(GateKind::CZ, control, target))
    }

    /// Apply SWAP gate.
    pub fn swap(&mut self, q1: QubitId, q2: QubitId) -> IrResult<&mut Self> {
        self.apply(Instruction::two_qubit_gate(GateKind::Swap, q1, q2))
    }

    // =========================================================================
    // Rotations
    // =========================================================================

    /// Apply Rx rotation gate.
    pub fn rx(
        &mut self,
        theta: impl Into<ParameterExpression>,
        qubit: QubitId,
    ) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(
            GateKind::Rx(theta.into()),
            qubit,
        ))
    }

    /// Apply Ry rotation gate.
    pub fn ry(
        &mut self,
        theta: impl Into<ParameterExpression>,
        qubit: QubitId,
    ) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(
            GateKind::Ry(theta.into()),
            qubit,
        ))
    }

    /// Apply Rz rotation gate.
    pub fn rz(
        &mut self,
        theta: impl Into<ParameterExpression>,
        qubit: QubitId,
    ) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(
            GateKind::Rz(theta.into()),
            qubit,
        ))
    }

    /// Apply controlled-Rx gate.
    pub fn crx(
        &mut self,
        theta: impl Into<ParameterExpression>,
        control: QubitId,
        target: QubitId,
    ) -> IrResult<&mut Self> {
        self.apply(Instruction::two_qubit_gate(
            GateKind::CRx(theta.into()),
            control,
            target,
        ))
    }

    /// Apply controlled-Ry gate.
    pub fn cry(
        &mut self,
        theta: impl Into<ParameterExpression>,
        control: QubitId,
        target: QubitId,
    ) -> IrResult<&mut Self> {
        self.apply(Instruction::two_qubit_gate(
            GateKind::CRy(theta.into()),
            control,
            target,
        ))
    }

    /// Apply controlled-Rz gate.
    pub fn crz(
        &mut self,
        theta: impl Into<ParameterExpression>,
        control: QubitId,
        target: QubitId,
    ) -> IrResult<&mut Self> {
        self.apply(Instruction::two_qubit_gate(
            GateKind::CRz(theta.into()),
            control,
            target,
        ))
    }

    // =========================================================================
    // Parameterized non-rotation gates
    // =========================================================================

    /// Apply a power gate `base^exponent`.
    pub fn power(
        &mut self,
        base: PowerBase,
        exponent: impl Into<ParameterExpression>,
        qubit: QubitId,
    ) -> IrResult<&mut Self> {
        self.apply(Instruction::single_qubit_gate(
            GateKind::Power {
                base,
                exponent: exponent.into(),
            },
            qubit,
        ))
    }

    /// Apply a generator exponential `exp(-i · coeff · time · P)`.
    ///
    /// The instruction operates on the qubits of the Pauli string, in
    /// ascending index order.
    pub fn exp_pauli(
        &mut self,
        pauli: PauliString,
        coeff: f64,
        time: impl Into<ParameterExpression>,
    ) -> IrResult<&mut Self> {
        let qubits: Vec<QubitId> = pauli.qubits().map(QubitId).collect();
        self.apply(Instruction::new(
            GateKind::ExpPauli {
                pauli,
                coeff,
                time: time.into(),
            },
            qubits,
        ))
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the circuit name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// The instruction list, in application order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Number of instructions.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// True if the circuit has no instructions.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    // =========================================================================
    // Structural operations
    // =========================================================================

    /// Return a new circuit with the instruction at `position` replaced by
    /// the given instruction list.
    ///
    /// The original circuit is unmodified. An empty replacement list removes
    /// the instruction.
    pub fn replace_gate(&self, position: usize, gates: Vec<Instruction>) -> IrResult<Circuit> {
        if position >= self.instructions.len() {
            return Err(IrError::PositionOutOfRange {
                position,
                len: self.instructions.len(),
            });
        }
        let mut replaced = Circuit::new(self.name.clone(), self.num_qubits);
        replaced
            .instructions
            .reserve(self.instructions.len() + gates.len());
        for inst in &self.instructions[..position] {
            replaced.apply(inst.clone())?;
        }
        for inst in gates {
            replaced.apply(inst)?;
        }
        for inst in &self.instructions[position + 1..] {
            replaced.apply(inst.clone())?;
        }
        Ok(replaced)
    }

    /// All variable names appearing in gate parameters, in first-occurrence
    /// order, deduplicated.
    pub fn extract_variables(&self) -> Vec<String> {
        let mut seen = FxHashSet::default();
        let mut out = vec![];
        for inst in &self.instructions {
            if let Some(parameter) = inst.gate.parameter() {
                for name in parameter.variables() {
                    if seen.insert(name.clone()) {
                        out.push(name);
                    }
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameter::Variable;
    use std::f64::consts::PI;

    #[test]
    fn test_new_circuit() {
        let circuit = Circuit::new("test", 2);
        assert_eq!(circuit.name(), "test");
        assert_eq!(circuit.num_qubits(), 2);
        assert!(circuit.is_empty());
    }

    #[test]
    fn test_fluent_api() {
        let mut circuit = Circuit::new("test", 2);
        circuit
            .h(QubitId(0))
            .unwrap()
            .cx(QubitId(0), QubitId(1))
            .unwrap()
            .rx(PI / 2.0, QubitId(1))
            .unwrap();
        assert_eq!(circuit.len(), 3);
    }

    #[test]
    fn test_qubit_out_of_range() {
        let mut circuit = Circuit::new("test", 1);
        assert!(matches!(
            circuit.h(QubitId(1)),
            Err(IrError::QubitOutOfRange { .. })
        ));
    }

    #[test]
    fn test_duplicate_qubit() {
        let mut circuit = Circuit::new("test", 2);
        assert!(matches!(
            circuit.cx(QubitId(0), QubitId(0)),
            Err(IrError::DuplicateQubit { .. })
        ));
    }

    #[test]
    fn test_replace_gate_is_pure() {
        let theta = Variable::new("theta", 0.5);
        let mut circuit = Circuit::new("test", 1);
        circuit.rx(theta, QubitId(0)).unwrap();

        let replacement = Instruction::single_qubit_gate(
            GateKind::Rx(ParameterExpression::constant(PI)),
            QubitId(0),
        );
        let replaced = circuit.replace_gate(0, vec![replacement]).unwrap();

        // Original still carries the symbolic angle.
        assert!(circuit.instructions()[0].gate.is_parameterized());
        assert!(!replaced.instructions()[0].gate.is_parameterized());
        assert_eq!(replaced.len(), 1);
    }

    #[test]
    fn test_replace_gate_with_list_and_removal() {
        let mut circuit = Circuit::new("test", 2);
        circuit.h(QubitId(0)).unwrap().cx(QubitId(0), QubitId(1)).unwrap();

        let expansion = vec![
            Instruction::single_qubit_gate(GateKind::H, QubitId(1)),
            Instruction::two_qubit_gate(GateKind::CZ, QubitId(0), QubitId(1)),
            Instruction::single_qubit_gate(GateKind::H, QubitId(1)),
        ];
        let expanded = circuit.replace_gate(1, expansion).unwrap();
        assert_eq!(expanded.len(), 4);
        assert_eq!(circuit.len(), 2);

        let removed = circuit.replace_gate(0, vec![]).unwrap();
        assert_eq!(removed.len(), 1);
        assert_eq!(removed.instructions()[0].name(), "cx");
    }

    #[test]
    fn test_replace_gate_position_out_of_range() {
        let circuit = Circuit::new("test", 1);
        assert!(matches!(
            circuit.replace_gate(0, vec![]),
            Err(IrError::PositionOutOfRange { .. })
        ));
    }

    #[test]
    fn test_extract_variables_order() {
        let theta = Variable::new("theta", 0.1);
        let phi = Variable::new("phi", 0.2);
        let mut circuit = Circuit::new("test", 2);
        circuit
            .ry(phi.clone(), QubitId(0))
            .unwrap()
            .rz(
                ParameterExpression::from(theta) + ParameterExpression::from(phi),
                QubitId(1),
            )
            .unwrap();
        assert_eq!(
            circuit.extract_variables(),
            vec!["phi".to_string(), "theta".to_string()]
        );
    }

    #[test]
    fn test_exp_pauli_qubits() {
        use crate::pauli::{PauliOp, PauliString};
        let mut circuit = Circuit::new("test", 3);
        let t = Variable::new("t", 1.0);
        circuit
            .exp_pauli(
                PauliString::from_ops([(2, PauliOp::Z), (0, PauliOp::X)]),
                0.5,
                t,
            )
            .unwrap();
        assert_eq!(
            circuit.instructions()[0].qubits,
            vec![QubitId(0), QubitId(2)]
        );
        assert!(circuit.instructions()[0].gate.is_parameterized());
    }
}
