//! Property-based tests for parameter expressions.

use embla_ir::{ParameterExpression, Variable};
use proptest::prelude::*;

/// A random expression over up to three named variables with bounded
/// operand magnitudes, avoiding pow (whose domain restrictions would
/// dominate the generator).
fn arb_expression() -> impl Strategy<Value = ParameterExpression> {
    let leaf = prop_oneof![
        (-10.0_f64..10.0).prop_map(ParameterExpression::constant),
        (0_usize..3, -10.0_f64..10.0).prop_map(|(i, v)| {
            ParameterExpression::Variable(Variable::new(format!("v{i}"), v))
        }),
    ];
    leaf.prop_recursive(4, 32, 2, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(a, b)| a + b),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| a - b),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| a * b),
        ]
    })
}

proptest! {
    #[test]
    fn variables_are_deduplicated(expr in arb_expression()) {
        let names = expr.variables();
        let mut sorted = names.clone();
        sorted.sort();
        sorted.dedup();
        prop_assert_eq!(names.len(), sorted.len());
    }

    #[test]
    fn symbolic_iff_some_variable(expr in arb_expression()) {
        prop_assert_eq!(expr.is_symbolic(), !expr.variables().is_empty());
    }

    #[test]
    fn has_variable_agrees_with_variable_list(expr in arb_expression()) {
        for name in expr.variables() {
            prop_assert!(expr.has_variable(&name));
        }
        prop_assert!(!expr.has_variable("absent"));
    }

    #[test]
    fn evaluation_is_finite_for_bounded_operands(expr in arb_expression()) {
        prop_assert!(expr.evaluate().is_finite());
    }

    #[test]
    fn serde_roundtrip(expr in arb_expression()) {
        let json = serde_json::to_string(&expr).unwrap();
        let back: ParameterExpression = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, expr);
    }
}
