//! Embla Circuit Intermediate Representation
//!
//! This crate provides the core data structures for representing
//! parameterized quantum circuits in Embla. It forms the foundation of the
//! gradient-construction stack.
//!
//! # Overview
//!
//! Circuits are ordered instruction lists over gates whose angles may be
//! symbolic [`ParameterExpression`] trees. All structural operations are
//! pure: [`Circuit::replace_gate`] returns a new circuit value and never
//! mutates the original, which is what makes parameter-shift gradient
//! construction safe.
//!
//! # Core Components
//!
//! - **Parameters**: [`Variable`] leaves and [`Transform`] nodes composed
//!   into [`ParameterExpression`] trees
//! - **Gates**: [`GateKind`] for fixed gates, rotations, power gates and
//!   generator exponentials; [`Gate`] adds the `frozen` differentiation flag
//! - **Instructions**: [`Instruction`] combining gates with their qubits
//! - **Circuits**: [`Circuit`] fluent builder plus `replace_gate` /
//!   `extract_variables`
//! - **Pauli strings**: [`PauliString`] generators shared with observables
//!
//! # Example: Parameterized Circuit
//!
//! ```rust
//! use embla_ir::{Circuit, QubitId, Variable, ParameterExpression};
//!
//! let theta = Variable::new("theta", 0.5);
//!
//! let mut circuit = Circuit::new("ansatz", 2);
//! circuit.h(QubitId(0)).unwrap();
//! // Angle 2·theta: the chain rule contributes the factor 2.
//! circuit
//!     .ry(
//!         ParameterExpression::constant(2.0) * theta.into(),
//!         QubitId(0),
//!     )
//!     .unwrap();
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//!
//! assert_eq!(circuit.extract_variables(), vec!["theta".to_string()]);
//! ```

pub mod circuit;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod parameter;
pub mod pauli;
pub mod qubit;

pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use gate::{Gate, GateKind, PowerBase};
pub use instruction::Instruction;
pub use parameter::{BinaryOp, ParameterExpression, Transform, Variable};
pub use pauli::{PauliOp, PauliString};
pub use qubit::QubitId;
