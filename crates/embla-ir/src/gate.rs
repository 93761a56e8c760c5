//! Quantum gate types.

use serde::{Deserialize, Serialize};

use crate::parameter::ParameterExpression;
use crate::pauli::PauliString;

/// Base gate for power gates (`B^t` for a symbolic exponent `t`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerBase {
    /// Pauli-X base.
    X,
    /// Pauli-Y base.
    Y,
    /// Pauli-Z base.
    Z,
    /// Hadamard base.
    H,
}

impl PowerBase {
    /// Get the name of the base gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            PowerBase::X => "x",
            PowerBase::Y => "y",
            PowerBase::Z => "z",
            PowerBase::H => "h",
        }
    }
}

/// The supported gate kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GateKind {
    // Fixed single-qubit gates
    /// Hadamard gate.
    H,
    /// Pauli-X gate.
    X,
    /// Pauli-Y gate.
    Y,
    /// Pauli-Z gate.
    Z,
    /// S gate (sqrt(Z)).
    S,
    /// S-dagger gate.
    Sdg,

    // Fixed two-qubit gates
    /// Controlled-X (CNOT) gate.
    CX,
    /// Controlled-Z gate.
    CZ,
    /// SWAP gate.
    Swap,

    // Single-qubit rotations
    /// Rotation around X axis.
    Rx(ParameterExpression),
    /// Rotation around Y axis.
    Ry(ParameterExpression),
    /// Rotation around Z axis.
    Rz(ParameterExpression),

    // Controlled rotations
    /// Controlled rotation around X.
    CRx(ParameterExpression),
    /// Controlled rotation around Y.
    CRy(ParameterExpression),
    /// Controlled rotation around Z.
    CRz(ParameterExpression),

    /// A base gate raised to a symbolic power.
    Power {
        /// The base gate.
        base: PowerBase,
        /// The exponent expression.
        exponent: ParameterExpression,
    },

    /// Generator exponential `exp(-i · coeff · time · P)` for a Pauli
    /// string P. Expanded by the trotterized-gate compilation pass.
    ExpPauli {
        /// The Pauli string generator.
        pauli: PauliString,
        /// Fixed real coefficient of the generator.
        coeff: f64,
        /// Evolution-time expression.
        time: ParameterExpression,
    },
}

impl GateKind {
    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            GateKind::H => "h",
            GateKind::X => "x",
            GateKind::Y => "y",
            GateKind::Z => "z",
            GateKind::S => "s",
            GateKind::Sdg => "sdg",
            GateKind::CX => "cx",
            GateKind::CZ => "cz",
            GateKind::Swap => "swap",
            GateKind::Rx(_) => "rx",
            GateKind::Ry(_) => "ry",
            GateKind::Rz(_) => "rz",
            GateKind::CRx(_) => "crx",
            GateKind::CRy(_) => "cry",
            GateKind::CRz(_) => "crz",
            GateKind::Power { .. } => "power",
            GateKind::ExpPauli { .. } => "exp_pauli",
        }
    }

    /// Get the number of qubits this gate operates on.
    pub fn num_qubits(&self) -> u32 {
        match self {
            GateKind::H
            | GateKind::X
            | GateKind::Y
            | GateKind::Z
            | GateKind::S
            | GateKind::Sdg
            | GateKind::Rx(_)
            | GateKind::Ry(_)
            | GateKind::Rz(_)
            | GateKind::Power { .. } => 1,

            GateKind::CX
            | GateKind::CZ
            | GateKind::Swap
            | GateKind::CRx(_)
            | GateKind::CRy(_)
            | GateKind::CRz(_) => 2,

            GateKind::ExpPauli { pauli, .. } => pauli.ops().len() as u32,
        }
    }

    /// The parameter expression of this gate, if it has one.
    pub fn parameter(&self) -> Option<&ParameterExpression> {
        match self {
            GateKind::Rx(p)
            | GateKind::Ry(p)
            | GateKind::Rz(p)
            | GateKind::CRx(p)
            | GateKind::CRy(p)
            | GateKind::CRz(p)
            | GateKind::Power { exponent: p, .. }
            | GateKind::ExpPauli { time: p, .. } => Some(p),

            _ => None,
        }
    }

    /// The rotation angle, if this is an angle-based gate.
    pub fn angle(&self) -> Option<&ParameterExpression> {
        match self {
            GateKind::Rx(p)
            | GateKind::Ry(p)
            | GateKind::Rz(p)
            | GateKind::CRx(p)
            | GateKind::CRy(p)
            | GateKind::CRz(p) => Some(p),

            _ => None,
        }
    }

    /// Check if this gate carries a symbolic parameter.
    pub fn is_parameterized(&self) -> bool {
        self.parameter().is_some_and(ParameterExpression::is_symbolic)
    }

    /// Build the same gate kind with the angle overridden.
    ///
    /// Returns `None` for gates without an angle.
    #[must_use]
    pub fn with_angle(&self, angle: ParameterExpression) -> Option<GateKind> {
        match self {
            GateKind::Rx(_) => Some(GateKind::Rx(angle)),
            GateKind::Ry(_) => Some(GateKind::Ry(angle)),
            GateKind::Rz(_) => Some(GateKind::Rz(angle)),
            GateKind::CRx(_) => Some(GateKind::CRx(angle)),
            GateKind::CRy(_) => Some(GateKind::CRy(angle)),
            GateKind::CRz(_) => Some(GateKind::CRz(angle)),
            _ => None,
        }
    }
}

/// A gate together with its differentiation status.
///
/// A frozen gate is excluded from differentiation and treated as a constant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gate {
    /// The kind of gate.
    pub kind: GateKind,
    /// If true, the gate is excluded from differentiation.
    pub frozen: bool,
}

impl Gate {
    /// Create a new (unfrozen) gate.
    pub fn new(kind: GateKind) -> Self {
        Self {
            kind,
            frozen: false,
        }
    }

    /// Mark the gate as frozen.
    #[must_use]
    pub fn frozen(mut self) -> Self {
        self.frozen = true;
        self
    }

    /// Check if the gate is frozen.
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Check if the gate carries a symbolic parameter.
    pub fn is_parameterized(&self) -> bool {
        self.kind.is_parameterized()
    }

    /// The parameter expression of the gate, if any.
    pub fn parameter(&self) -> Option<&ParameterExpression> {
        self.kind.parameter()
    }

    /// Get the name of this gate.
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Build a new gate value with the angle overridden, keeping the
    /// frozen flag. Returns `None` for gates without an angle.
    #[must_use]
    pub fn with_angle(&self, angle: ParameterExpression) -> Option<Gate> {
        Some(Gate {
            kind: self.kind.with_angle(angle)?,
            frozen: self.frozen,
        })
    }
}

impl From<GateKind> for Gate {
    fn from(kind: GateKind) -> Self {
        Gate::new(kind)
    }
}
