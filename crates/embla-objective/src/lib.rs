//! `embla-objective`: expectation values and composable scalar objectives.
//!
//! An [`ExpectationValue`] pairs a circuit with an observable; an
//! [`Objective`] combines an ordered list of expectation values with a
//! scalar [`Transformation`] over their (future) values. Objectives compose
//! under addition and multiplication, producing new objectives. This is the
//! algebra the gradient core uses to express parameter-shift derivatives
//! symbolically.
//!
//! Numeric estimation of expectation values is deliberately out of scope:
//! an external evaluator consumes the structures built here.
//!
//! # Quick start
//!
//! ```rust
//! use embla_ir::{Circuit, QubitId, Variable};
//! use embla_objective::{ExpectationValue, Hamiltonian, Objective};
//!
//! let mut circuit = Circuit::new("ansatz", 1);
//! circuit.rx(Variable::new("theta", 0.5), QubitId(0)).unwrap();
//!
//! let ev = ExpectationValue::new(circuit, Hamiltonian::z(0));
//! let objective = 2.0 * Objective::from_expectation(ev);
//! assert_eq!(objective.extract_variables(), vec!["theta".to_string()]);
//! ```

pub mod error;
pub mod expectation;
pub mod objective;
pub mod observable;
pub mod transformation;

pub use error::{ObjectiveError, ObjectiveResult};
pub use expectation::ExpectationValue;
pub use objective::Objective;
pub use observable::{Hamiltonian, HamiltonianTerm};
pub use transformation::Transformation;
