//! Expectation values: a circuit paired with an observable.

use embla_ir::Circuit;
use serde::{Deserialize, Serialize};

use crate::observable::Hamiltonian;

/// The expectation value `⟨0| U† H U |0⟩` as a symbolic pairing.
///
/// This crate never estimates the value numerically; an expectation value
/// is a structural object that gradient construction rewrites into weighted
/// sums over shifted circuits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpectationValue {
    circuit: Circuit,
    hamiltonian: Hamiltonian,
}

impl ExpectationValue {
    /// Pair a circuit with an observable.
    pub fn new(circuit: Circuit, hamiltonian: Hamiltonian) -> Self {
        Self {
            circuit,
            hamiltonian,
        }
    }

    /// The circuit `U`.
    pub fn circuit(&self) -> &Circuit {
        &self.circuit
    }

    /// The observable `H`.
    pub fn hamiltonian(&self) -> &Hamiltonian {
        &self.hamiltonian
    }

    /// Replace the circuit, keeping the observable.
    #[must_use]
    pub fn with_circuit(&self, circuit: Circuit) -> Self {
        Self {
            circuit,
            hamiltonian: self.hamiltonian.clone(),
        }
    }

    /// The free variable names of the underlying circuit, in
    /// first-occurrence order.
    pub fn extract_variables(&self) -> Vec<String> {
        self.circuit.extract_variables()
    }
}
