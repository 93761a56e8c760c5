//! `embla-grad`: analytic parameter-shift gradients.
//!
//! Differentiates [`embla_objective::Objective`] values with respect to
//! named circuit parameters, symbolically: the gradient of an objective is
//! again an objective, built from ±π/2 angle-shifted copies of the circuits
//! weighted by exact chain-rule factors. No numeric estimation happens here;
//! the caller evaluates the resulting objectives however it evaluates the
//! original.
//!
//! # Quick start
//!
//! ```rust
//! use embla_grad::grad;
//! use embla_ir::{Circuit, QubitId, Variable};
//! use embla_objective::{ExpectationValue, Hamiltonian, Objective};
//!
//! let mut circuit = Circuit::new("ansatz", 1);
//! circuit.rx(Variable::new("theta", 0.5), QubitId(0)).unwrap();
//! let objective = Objective::from_expectation(ExpectationValue::new(
//!     circuit,
//!     Hamiltonian::z(0),
//! ));
//!
//! let derivative = grad(objective, Some("theta"), false)
//!     .unwrap()
//!     .into_single()
//!     .unwrap();
//! // d⟨Z⟩/dθ = (⟨Z⟩|θ+π/2 − ⟨Z⟩|θ−π/2) / 2, carried alongside the
//! // original expectation value.
//! assert_eq!(derivative.len(), 3);
//! ```

pub mod chain;
pub mod error;
pub mod gradient;
pub mod partials;
pub mod shift;

pub use chain::derivative;
pub use error::{GradError, GradResult};
pub use gradient::{grad, grad_objective, grad_selected, Differentiable, Gradient};
pub use partials::partial;
pub use shift::grad_expectation;
