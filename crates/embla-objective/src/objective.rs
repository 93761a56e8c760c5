//! Composable scalar objectives over expectation values.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::error::{ObjectiveError, ObjectiveResult};
use crate::expectation::ExpectationValue;
use crate::transformation::Transformation;

/// An ordered list of expectation values plus a scalar transformation
/// mapping the vector of their values to one number.
///
/// Objectives compose: addition and multiplication concatenate the
/// expectation-value lists and splice the transformations together, always
/// producing a new value. Scalar multiplication only rescales the
/// transformation. This is what lets the gradient core express a derivative
/// as `Σ wᵢ · ⟨H⟩_{Uᵢ}` without ever evaluating anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Objective {
    expectation_values: Vec<ExpectationValue>,
    transformation: Transformation,
}

impl Objective {
    /// Create an objective from an expectation-value list and a
    /// transformation over their values.
    pub fn new(expectation_values: Vec<ExpectationValue>, transformation: Transformation) -> Self {
        Self {
            expectation_values,
            transformation,
        }
    }

    /// Wrap a single expectation value with the identity transformation.
    pub fn from_expectation(expectation: ExpectationValue) -> Self {
        Self::new(vec![expectation], Transformation::identity())
    }

    /// The ordered expectation-value list.
    pub fn expectation_values(&self) -> &[ExpectationValue] {
        &self.expectation_values
    }

    /// The scalar transformation.
    pub fn transformation(&self) -> &Transformation {
        &self.transformation
    }

    /// Number of expectation values.
    pub fn len(&self) -> usize {
        self.expectation_values.len()
    }

    /// True if the objective holds no expectation values.
    pub fn is_empty(&self) -> bool {
        self.expectation_values.is_empty()
    }

    /// The free variable names across all expectation values, in
    /// first-occurrence order, deduplicated.
    pub fn extract_variables(&self) -> Vec<String> {
        let mut seen = FxHashSet::default();
        let mut out = vec![];
        for ev in &self.expectation_values {
            for name in ev.extract_variables() {
                if seen.insert(name.clone()) {
                    out.push(name);
                }
            }
        }
        out
    }

    /// Apply only the transformation to externally supplied expectation
    /// values (their numeric estimation is out of scope for this crate).
    pub fn transform_values(&self, values: &[f64]) -> ObjectiveResult<f64> {
        if values.len() != self.expectation_values.len() {
            return Err(ObjectiveError::ValueCountMismatch {
                expected: self.expectation_values.len(),
                got: values.len(),
            });
        }
        self.transformation.evaluate(values)
    }

    fn compose(self, rhs: Objective, join: fn(Transformation, Transformation) -> Transformation) -> Objective {
        let offset = self.expectation_values.len();
        let mut expectation_values = self.expectation_values;
        expectation_values.extend(rhs.expectation_values);
        let transformation = join(self.transformation, rhs.transformation.shift_args(offset));
        Objective {
            expectation_values,
            transformation,
        }
    }
}

impl From<ExpectationValue> for Objective {
    fn from(expectation: ExpectationValue) -> Self {
        Objective::from_expectation(expectation)
    }
}

impl std::ops::Add for Objective {
    type Output = Objective;

    fn add(self, rhs: Objective) -> Objective {
        self.compose(rhs, |a, b| Transformation::Add(Box::new(a), Box::new(b)))
    }
}

impl std::ops::Sub for Objective {
    type Output = Objective;

    fn sub(self, rhs: Objective) -> Objective {
        self.compose(rhs, |a, b| Transformation::Sub(Box::new(a), Box::new(b)))
    }
}

impl std::ops::Mul for Objective {
    type Output = Objective;

    fn mul(self, rhs: Objective) -> Objective {
        self.compose(rhs, |a, b| Transformation::Mul(Box::new(a), Box::new(b)))
    }
}

impl std::ops::Mul<f64> for Objective {
    type Output = Objective;

    fn mul(self, weight: f64) -> Objective {
        Objective {
            expectation_values: self.expectation_values,
            transformation: Transformation::Mul(
                Box::new(Transformation::Constant(weight)),
                Box::new(self.transformation),
            ),
        }
    }
}

impl std::ops::Mul<Objective> for f64 {
    type Output = Objective;

    fn mul(self, objective: Objective) -> Objective {
        objective * self
    }
}
