//! Parameterized ansatz circuits used by the demo binaries.

use embla_ir::{Circuit, PauliString, QubitId, Variable};
use embla_objective::{ExpectationValue, Hamiltonian, HamiltonianTerm, Objective};
use rand::Rng;

/// A hardware-efficient ansatz: alternating layers of per-qubit Ry
/// rotations and a CX chain. Parameters are named `theta_<layer>_<qubit>`
/// and initialized to random angles in [0, 2π).
pub fn layered_ansatz(num_qubits: u32, layers: u32, rng: &mut impl Rng) -> Circuit {
    let mut circuit = Circuit::new("layered", num_qubits);
    for layer in 0..layers {
        for q in 0..num_qubits {
            let value = rng.gen_range(0.0..std::f64::consts::TAU);
            circuit
                .ry(Variable::new(format!("theta_{layer}_{q}"), value), QubitId(q))
                .expect("qubit indices are in range by construction");
        }
        for q in 0..num_qubits - 1 {
            circuit
                .cx(QubitId(q), QubitId(q + 1))
                .expect("qubit indices are in range by construction");
        }
    }
    circuit
}

/// An Ising-style circuit mixing generator exponentials and controlled
/// rotations, to exercise the compilation passes.
pub fn ising_evolution(num_qubits: u32) -> Circuit {
    let mut circuit = Circuit::new("ising", num_qubits);
    for q in 0..num_qubits {
        circuit
            .h(QubitId(q))
            .expect("qubit indices are in range by construction");
    }
    for q in 0..num_qubits - 1 {
        circuit
            .exp_pauli(
                PauliString::zz([q, q + 1]),
                0.5,
                Variable::new(format!("t_{q}"), 0.2),
            )
            .expect("qubit indices are in range by construction");
    }
    circuit
        .crz(Variable::new("gamma", 0.7), QubitId(0), QubitId(num_qubits - 1))
        .expect("qubit indices are in range by construction");
    circuit
}

/// A transverse-field Ising Hamiltonian on a line of qubits.
pub fn ising_hamiltonian(num_qubits: u32, coupling: f64, field: f64) -> Hamiltonian {
    let mut terms = vec![];
    for q in 0..num_qubits - 1 {
        terms.push(HamiltonianTerm::zz(q, q + 1, coupling));
    }
    for q in 0..num_qubits {
        terms.push(HamiltonianTerm::x(q, field));
    }
    Hamiltonian::from_terms(terms)
}

/// Pair the ansatz with the Hamiltonian as an energy objective.
pub fn energy_objective(circuit: Circuit, hamiltonian: Hamiltonian) -> Objective {
    Objective::from_expectation(ExpectationValue::new(circuit, hamiltonian))
}
