//! Pauli strings: tensor products of single-qubit Pauli operators.
//!
//! Used both as generators for exponential gates and as observable terms.

use serde::{Deserialize, Serialize};

/// Single-qubit Pauli operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PauliOp {
    /// Identity; contributes a global phase and is omitted from storage.
    I,
    /// Pauli-X.
    X,
    /// Pauli-Y.
    Y,
    /// Pauli-Z.
    Z,
}

/// A tensor product of Pauli operators on indexed qubits.
///
/// Stored as a sorted `Vec<(qubit_index, PauliOp)>` with identity factors
/// omitted. Qubits not listed are implicitly I.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PauliString {
    /// Non-identity factors, sorted by qubit index ascending.
    ops: Vec<(u32, PauliOp)>,
}

impl PauliString {
    /// Construct from an iterator of (qubit, op) pairs.
    ///
    /// Identity operators are dropped; the rest are sorted by qubit.
    pub fn from_ops(ops: impl IntoIterator<Item = (u32, PauliOp)>) -> Self {
        let mut v: Vec<(u32, PauliOp)> = ops
            .into_iter()
            .filter(|(_, op)| *op != PauliOp::I)
            .collect();
        v.sort_by_key(|(q, _)| *q);
        Self { ops: v }
    }

    /// Construct a Z⊗Z⊗...⊗Z string spanning the given qubits.
    pub fn zz(qubits: impl IntoIterator<Item = u32>) -> Self {
        Self::from_ops(qubits.into_iter().map(|q| (q, PauliOp::Z)))
    }

    /// The non-identity (qubit, op) pairs, sorted by qubit index.
    pub fn ops(&self) -> &[(u32, PauliOp)] {
        &self.ops
    }

    /// The qubit indices this string acts on, ascending.
    pub fn qubits(&self) -> impl Iterator<Item = u32> + '_ {
        self.ops.iter().map(|(q, _)| *q)
    }

    /// True if there are no non-identity factors (pure global phase).
    pub fn is_identity(&self) -> bool {
        self.ops.is_empty()
    }

    /// The highest qubit index referenced, or `None` for an identity string.
    pub fn max_qubit(&self) -> Option<u32> {
        self.ops.last().map(|(q, _)| *q)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_dropped_and_sorted() {
        let p = PauliString::from_ops([(2, PauliOp::X), (0, PauliOp::Z), (1, PauliOp::I)]);
        assert_eq!(p.ops(), &[(0, PauliOp::Z), (2, PauliOp::X)]);
        assert_eq!(p.max_qubit(), Some(2));
    }

    #[test]
    fn test_identity_string() {
        let p = PauliString::from_ops([(0, PauliOp::I)]);
        assert!(p.is_identity());
        assert_eq!(p.max_qubit(), None);
    }

    #[test]
    fn test_zz_shorthand() {
        let p = PauliString::zz([1, 0]);
        assert_eq!(p.ops(), &[(0, PauliOp::Z), (1, PauliOp::Z)]);
    }
}
