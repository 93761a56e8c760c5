//! Parameter expressions for parameterized circuits.
//!
//! A gate angle is either a plain number, a named [`Variable`], or a
//! [`Transform`]: one of five binary arithmetic operators applied to two
//! sub-expressions. Expressions are immutable trees; the constructors only
//! ever nest existing values, so no cycles can occur.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named scalar parameter with its currently bound value.
///
/// Identity is the name: two variables with the same name refer to the same
/// parameter regardless of the values they carry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variable {
    /// The parameter name.
    pub name: String,
    /// The currently bound numeric value.
    pub value: f64,
}

impl Variable {
    /// Create a variable with a bound value.
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The binary operators supported in parameter expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOp {
    /// Addition.
    Add,
    /// Subtraction.
    Sub,
    /// Multiplication.
    Mul,
    /// Division.
    Div,
    /// Power.
    Pow,
}

impl BinaryOp {
    /// Get the name of this operator.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            BinaryOp::Add => "add",
            BinaryOp::Sub => "sub",
            BinaryOp::Mul => "mul",
            BinaryOp::Div => "truediv",
            BinaryOp::Pow => "pow",
        }
    }

    /// Apply the operator to two numeric operands.
    #[inline]
    pub fn apply(&self, x: f64, y: f64) -> f64 {
        match self {
            BinaryOp::Add => x + y,
            BinaryOp::Sub => x - y,
            BinaryOp::Mul => x * y,
            BinaryOp::Div => x / y,
            BinaryOp::Pow => x.powf(y),
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A binary operation applied to an ordered pair of sub-expressions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    op: BinaryOp,
    args: Box<[ParameterExpression; 2]>,
}

impl Transform {
    /// Create a transform from an operator and its two operands.
    pub fn new(op: BinaryOp, lhs: ParameterExpression, rhs: ParameterExpression) -> Self {
        Self {
            op,
            args: Box::new([lhs, rhs]),
        }
    }

    /// The operator tag.
    pub fn op(&self) -> BinaryOp {
        self.op
    }

    /// The ordered argument list.
    pub fn args(&self) -> &[ParameterExpression] {
        &self.args[..]
    }

    /// Evaluate at the values currently bound to the leaf variables.
    pub fn evaluate(&self) -> f64 {
        self.op.apply(self.args[0].evaluate(), self.args[1].evaluate())
    }
}

/// A symbolic or concrete parameter expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParameterExpression {
    /// A constant numeric value.
    Constant(f64),
    /// A named leaf parameter.
    Variable(Variable),
    /// A binary operation over sub-expressions.
    Transform(Transform),
}

impl ParameterExpression {
    /// Create a constant expression.
    pub fn constant(value: f64) -> Self {
        ParameterExpression::Constant(value)
    }

    /// Create a variable leaf with a bound value.
    pub fn variable(name: impl Into<String>, value: f64) -> Self {
        ParameterExpression::Variable(Variable::new(name, value))
    }

    /// Check if this expression contains any variable.
    pub fn is_symbolic(&self) -> bool {
        match self {
            ParameterExpression::Constant(_) => false,
            ParameterExpression::Variable(_) => true,
            ParameterExpression::Transform(t) => t.args().iter().any(Self::is_symbolic),
        }
    }

    /// Check if this expression contains the named variable anywhere in its
    /// subtree.
    pub fn has_variable(&self, name: &str) -> bool {
        match self {
            ParameterExpression::Constant(_) => false,
            ParameterExpression::Variable(v) => v.name == name,
            ParameterExpression::Transform(t) => t.args().iter().any(|a| a.has_variable(name)),
        }
    }

    /// All variable names in this expression, in first-occurrence order.
    pub fn variables(&self) -> Vec<String> {
        let mut seen = FxHashSet::default();
        let mut out = vec![];
        self.collect_variables(&mut seen, &mut out);
        out
    }

    fn collect_variables(&self, seen: &mut FxHashSet<String>, out: &mut Vec<String>) {
        match self {
            ParameterExpression::Constant(_) => {}
            ParameterExpression::Variable(v) => {
                if seen.insert(v.name.clone()) {
                    out.push(v.name.clone());
                }
            }
            ParameterExpression::Transform(t) => {
                for arg in t.args() {
                    arg.collect_variables(seen, out);
                }
            }
        }
    }

    /// Evaluate at the values currently bound to the leaf variables.
    pub fn evaluate(&self) -> f64 {
        match self {
            ParameterExpression::Constant(v) => *v,
            ParameterExpression::Variable(v) => v.value,
            ParameterExpression::Transform(t) => t.evaluate(),
        }
    }

    /// Raise this expression to a power.
    #[must_use]
    pub fn pow(self, exponent: impl Into<ParameterExpression>) -> Self {
        ParameterExpression::Transform(Transform::new(BinaryOp::Pow, self, exponent.into()))
    }
}

impl fmt::Display for ParameterExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterExpression::Constant(v) => write!(f, "{v}"),
            ParameterExpression::Variable(v) => write!(f, "{v}"),
            ParameterExpression::Transform(t) => {
                let symbol = match t.op() {
                    BinaryOp::Add => "+",
                    BinaryOp::Sub => "-",
                    BinaryOp::Mul => "*",
                    BinaryOp::Div => "/",
                    BinaryOp::Pow => "^",
                };
                write!(f, "({} {symbol} {})", t.args()[0], t.args()[1])
            }
        }
    }
}

impl From<f64> for ParameterExpression {
    fn from(value: f64) -> Self {
        ParameterExpression::Constant(value)
    }
}

impl From<i32> for ParameterExpression {
    fn from(value: i32) -> Self {
        ParameterExpression::Constant(f64::from(value))
    }
}

impl From<Variable> for ParameterExpression {
    fn from(variable: Variable) -> Self {
        ParameterExpression::Variable(variable)
    }
}

impl std::ops::Add for ParameterExpression {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        ParameterExpression::Transform(Transform::new(BinaryOp::Add, self, rhs))
    }
}

impl std::ops::Sub for ParameterExpression {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        ParameterExpression::Transform(Transform::new(BinaryOp::Sub, self, rhs))
    }
}

impl std::ops::Mul for ParameterExpression {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        ParameterExpression::Transform(Transform::new(BinaryOp::Mul, self, rhs))
    }
}

impl std::ops::Div for ParameterExpression {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        ParameterExpression::Transform(Transform::new(BinaryOp::Div, self, rhs))
    }
}

impl std::ops::Neg for ParameterExpression {
    type Output = Self;

    // Expressed as (-1)·x so the derivative table covers it.
    fn neg(self) -> Self::Output {
        ParameterExpression::Transform(Transform::new(
            BinaryOp::Mul,
            ParameterExpression::Constant(-1.0),
            self,
        ))
    }
}
