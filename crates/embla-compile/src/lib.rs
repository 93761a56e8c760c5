//! `embla-compile`: gate-decomposition passes.
//!
//! Rewrites circuits into the gate set the parameter-shift rule can
//! differentiate: generator exponentials become explicit rotation + CNOT
//! ladders, controlled rotations become plain rotations conjugated with
//! entanglers. Both passes are pure functions `&Circuit -> Circuit`; the
//! input is never modified.
//!
//! # Quick start
//!
//! ```rust
//! use embla_compile::compile_circuit;
//! use embla_ir::{Circuit, QubitId, Variable};
//!
//! let mut circuit = Circuit::new("ansatz", 2);
//! circuit
//!     .crz(Variable::new("theta", 0.5), QubitId(0), QubitId(1))
//!     .unwrap();
//!
//! let compiled = compile_circuit(&circuit).unwrap();
//! assert_eq!(compiled.len(), 4); // Rz · CX · Rz · CX
//! ```

pub mod controlled;
pub mod error;
pub mod trotter;

pub use controlled::compile_controlled_rotation;
pub use error::{CompileError, CompileResult};
pub use trotter::compile_trotterized_gate;

use embla_ir::Circuit;

/// Run the full pre-differentiation pipeline: trotterized-gate expansion,
/// then controlled-rotation expansion.
pub fn compile_circuit(circuit: &Circuit) -> CompileResult<Circuit> {
    let expanded = compile_trotterized_gate(circuit)?;
    compile_controlled_rotation(&expanded)
}
