//! Scalar post-processing transformations over expectation values.
//!
//! A [`Transformation`] maps the vector of an objective's expectation
//! values to a single scalar. It is represented as a closed expression tree
//! over argument indices, which makes it composable (objectives add and
//! multiply by splicing trees together) and differentiable:
//! [`Transformation::derivative`] produces the exact partial with respect to
//! one argument as a new transformation of the same arity.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ObjectiveError, ObjectiveResult};

/// A scalar function over an argument vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Transformation {
    /// The i-th argument.
    Arg(usize),
    /// A constant.
    Constant(f64),
    /// Negation.
    Neg(Box<Transformation>),
    /// Natural logarithm.
    Ln(Box<Transformation>),
    /// Addition.
    Add(Box<Transformation>, Box<Transformation>),
    /// Subtraction.
    Sub(Box<Transformation>, Box<Transformation>),
    /// Multiplication.
    Mul(Box<Transformation>, Box<Transformation>),
    /// Division.
    Div(Box<Transformation>, Box<Transformation>),
    /// Power.
    Pow(Box<Transformation>, Box<Transformation>),
}

impl Transformation {
    /// The identity transformation on a single value.
    pub fn identity() -> Self {
        Transformation::Arg(0)
    }

    /// The sum of the first `n` arguments.
    pub fn sum(n: usize) -> Self {
        let mut terms = (0..n).map(Transformation::Arg);
        match terms.next() {
            None => Transformation::Constant(0.0),
            Some(first) => terms.fold(first, |acc, t| {
                Transformation::Add(Box::new(acc), Box::new(t))
            }),
        }
    }

    /// Evaluate at the given argument values.
    pub fn evaluate(&self, values: &[f64]) -> ObjectiveResult<f64> {
        match self {
            Transformation::Arg(i) => {
                values
                    .get(*i)
                    .copied()
                    .ok_or(ObjectiveError::ArgumentOutOfRange {
                        index: *i,
                        len: values.len(),
                    })
            }
            Transformation::Constant(v) => Ok(*v),
            Transformation::Neg(e) => Ok(-e.evaluate(values)?),
            Transformation::Ln(e) => Ok(e.evaluate(values)?.ln()),
            Transformation::Add(a, b) => Ok(a.evaluate(values)? + b.evaluate(values)?),
            Transformation::Sub(a, b) => Ok(a.evaluate(values)? - b.evaluate(values)?),
            Transformation::Mul(a, b) => Ok(a.evaluate(values)? * b.evaluate(values)?),
            Transformation::Div(a, b) => Ok(a.evaluate(values)? / b.evaluate(values)?),
            Transformation::Pow(a, b) => Ok(a.evaluate(values)?.powf(b.evaluate(values)?)),
        }
    }

    /// One past the highest argument index referenced, or 0 for a constant
    /// transformation.
    pub fn arity(&self) -> usize {
        match self {
            Transformation::Arg(i) => i + 1,
            Transformation::Constant(_) => 0,
            Transformation::Neg(e) | Transformation::Ln(e) => e.arity(),
            Transformation::Add(a, b)
            | Transformation::Sub(a, b)
            | Transformation::Mul(a, b)
            | Transformation::Div(a, b)
            | Transformation::Pow(a, b) => a.arity().max(b.arity()),
        }
    }

    /// Rewrite every `Arg(i)` as `Arg(i + offset)`.
    ///
    /// Used when concatenating the argument lists of two objectives.
    #[must_use]
    pub fn shift_args(&self, offset: usize) -> Self {
        match self {
            Transformation::Arg(i) => Transformation::Arg(i + offset),
            Transformation::Constant(v) => Transformation::Constant(*v),
            Transformation::Neg(e) => Transformation::Neg(Box::new(e.shift_args(offset))),
            Transformation::Ln(e) => Transformation::Ln(Box::new(e.shift_args(offset))),
            Transformation::Add(a, b) => Transformation::Add(
                Box::new(a.shift_args(offset)),
                Box::new(b.shift_args(offset)),
            ),
            Transformation::Sub(a, b) => Transformation::Sub(
                Box::new(a.shift_args(offset)),
                Box::new(b.shift_args(offset)),
            ),
            Transformation::Mul(a, b) => Transformation::Mul(
                Box::new(a.shift_args(offset)),
                Box::new(b.shift_args(offset)),
            ),
            Transformation::Div(a, b) => Transformation::Div(
                Box::new(a.shift_args(offset)),
                Box::new(b.shift_args(offset)),
            ),
            Transformation::Pow(a, b) => Transformation::Pow(
                Box::new(a.shift_args(offset)),
                Box::new(b.shift_args(offset)),
            ),
        }
    }

    /// The exact partial derivative with respect to argument `argnum`, as a
    /// new transformation of the same arity.
    #[must_use]
    pub fn derivative(&self, argnum: usize) -> Self {
        self.derive(argnum).simplified()
    }

    fn derive(&self, argnum: usize) -> Self {
        use Transformation::{Add, Arg, Constant, Div, Ln, Mul, Neg, Pow, Sub};
        match self {
            Arg(i) => Constant(if *i == argnum { 1.0 } else { 0.0 }),
            Constant(_) => Constant(0.0),
            Neg(e) => Neg(Box::new(e.derive(argnum))),
            // d ln(a) = da / a
            Ln(a) => Div(Box::new(a.derive(argnum)), a.clone()),
            Add(a, b) => Add(Box::new(a.derive(argnum)), Box::new(b.derive(argnum))),
            Sub(a, b) => Sub(Box::new(a.derive(argnum)), Box::new(b.derive(argnum))),
            // product rule
            Mul(a, b) => Add(
                Box::new(Mul(Box::new(a.derive(argnum)), b.clone())),
                Box::new(Mul(a.clone(), Box::new(b.derive(argnum)))),
            ),
            // quotient rule
            Div(a, b) => Div(
                Box::new(Sub(
                    Box::new(Mul(Box::new(a.derive(argnum)), b.clone())),
                    Box::new(Mul(a.clone(), Box::new(b.derive(argnum)))),
                )),
                Box::new(Mul(b.clone(), b.clone())),
            ),
            // d(a^b) = a^b · (db·ln(a) + b·da/a)
            Pow(a, b) => Mul(
                Box::new(Pow(a.clone(), b.clone())),
                Box::new(Add(
                    Box::new(Mul(Box::new(b.derive(argnum)), Box::new(Ln(a.clone())))),
                    Box::new(Div(
                        Box::new(Mul(b.clone(), Box::new(a.derive(argnum)))),
                        a.clone(),
                    )),
                )),
            ),
        }
    }

    fn as_constant(&self) -> Option<f64> {
        match self {
            Transformation::Constant(v) => Some(*v),
            _ => None,
        }
    }

    /// Fold constant subexpressions and elide arithmetic identities.
    #[must_use]
    pub fn simplified(&self) -> Self {
        use Transformation::{Add, Constant, Div, Ln, Mul, Neg, Pow, Sub};
        match self {
            Transformation::Arg(_) | Constant(_) => self.clone(),
            Neg(e) => match e.simplified() {
                Constant(v) => Constant(-v),
                e => Neg(Box::new(e)),
            },
            Ln(e) => match e.simplified() {
                Constant(v) => Constant(v.ln()),
                e => Ln(Box::new(e)),
            },
            Add(a, b) => match (a.simplified(), b.simplified()) {
                (Constant(x), Constant(y)) => Constant(x + y),
                (Constant(x), e) if x == 0.0 => e,
                (e, Constant(y)) if y == 0.0 => e,
                (a, b) => Add(Box::new(a), Box::new(b)),
            },
            Sub(a, b) => match (a.simplified(), b.simplified()) {
                (Constant(x), Constant(y)) => Constant(x - y),
                (e, Constant(y)) if y == 0.0 => e,
                (a, b) => Sub(Box::new(a), Box::new(b)),
            },
            Mul(a, b) => match (a.simplified(), b.simplified()) {
                (Constant(x), Constant(y)) => Constant(x * y),
                (Constant(x), _) | (_, Constant(x)) if x == 0.0 => Constant(0.0),
                (Constant(x), e) if x == 1.0 => e,
                (e, Constant(y)) if y == 1.0 => e,
                (a, b) => Mul(Box::new(a), Box::new(b)),
            },
            Div(a, b) => match (a.simplified(), b.simplified()) {
                (Constant(x), Constant(y)) if y != 0.0 => Constant(x / y),
                (e, Constant(y)) if y == 1.0 => e,
                (a, b) => Div(Box::new(a), Box::new(b)),
            },
            Pow(a, b) => match (a.simplified(), b.simplified()) {
                (Constant(x), Constant(y)) => Constant(x.powf(y)),
                (e, Constant(y)) if y == 1.0 => e,
                (a, b) => Pow(Box::new(a), Box::new(b)),
            },
        }
    }
}

impl fmt::Display for Transformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transformation::Arg(i) => write!(f, "E[{i}]"),
            Transformation::Constant(v) => write!(f, "{v}"),
            Transformation::Neg(e) => write!(f, "-({e})"),
            Transformation::Ln(e) => write!(f, "ln({e})"),
            Transformation::Add(a, b) => write!(f, "({a} + {b})"),
            Transformation::Sub(a, b) => write!(f, "({a} - {b})"),
            Transformation::Mul(a, b) => write!(f, "({a} * {b})"),
            Transformation::Div(a, b) => write!(f, "({a} / {b})"),
            Transformation::Pow(a, b) => write!(f, "({a} ^ {b})"),
        }
    }
}
