use crate::ast::ASTNode;
use crate::error::EvalError;
use crate::store::VariableStore;

/// Reduces `node` to a value. Operands are evaluated left then right, so
/// assignments inside an expression take effect in source order.
pub fn evaluate(node: &ASTNode, store: &mut VariableStore) -> Result<f64, EvalError> {
    match node {
        ASTNode::Number(value) => Ok(*value),
        ASTNode::Variable(name) => store
            .get(name)
            .ok_or_else(|| EvalError::UnknownIdentifier { name: name.clone() }),
        ASTNode::BinaryOperation { op, left, right } => {
            let left_val = evaluate(left, store)?;
            let right_val = evaluate(right, store)?;
            match op {
                '+' => Ok(left_val + right_val),
                '-' => Ok(left_val - right_val),
                '*' => Ok(left_val * right_val),
                '/' => {
                    if right_val == 0.0 {
                        Err(EvalError::DivisionByZero)
                    } else {
                        Ok(left_val / right_val)
                    }
                }
                _ => Err(EvalError::InvalidOperator(*op)),
            }
        }
        ASTNode::Assignment {
            variable_name,
            expression,
        } => {
            let val = evaluate(expression, store)?;
            store.set(variable_name.as_str(), val);
            Ok(val)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(val: f64) -> ASTNode {
        ASTNode::Number(val)
    }

    fn eval(node: &ASTNode) -> Result<f64, EvalError> {
        evaluate(node, &mut VariableStore::new())
    }

    #[test]
    fn test_evaluate_number() {
        assert_eq!(eval(&num(42.0)), Ok(42.0));
    }

    #[test]
    fn test_evaluate_arithmetic() {
        assert_eq!(eval(&ASTNode::binary('+', num(2.0), num(3.0))), Ok(5.0));
        assert_eq!(eval(&ASTNode::binary('-', num(10.0), num(3.0))), Ok(7.0));
        assert_eq!(eval(&ASTNode::binary('*', num(4.0), num(5.0))), Ok(20.0));
        assert_eq!(eval(&ASTNode::binary('/', num(7.0), num(2.0))), Ok(3.5));
    }

    #[test]
    fn test_evaluate_division_by_zero() {
        let node = ASTNode::binary('/', num(10.0), num(0.0));
        assert_eq!(eval(&node), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn test_evaluate_division_by_negative_zero() {
        let node = ASTNode::binary('/', num(1.0), num(-0.0));
        assert_eq!(eval(&node), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn test_evaluate_division_by_tiny_value() {
        let node = ASTNode::binary('/', num(1.0), num(1e-300));
        assert!(eval(&node).unwrap() > 1e299);
    }

    #[test]
    fn test_evaluate_invalid_operator() {
        let node = ASTNode::binary('%', num(1.0), num(2.0));
        assert_eq!(eval(&node), Err(EvalError::InvalidOperator('%')));
    }

    #[test]
    fn test_evaluate_assignment() {
        let mut store = VariableStore::new();
        let node = ASTNode::assignment("x", num(42.0));
        assert_eq!(evaluate(&node, &mut store), Ok(42.0));
        assert_eq!(store.get("x"), Some(42.0));
    }

    #[test]
    fn test_evaluate_variable() {
        let mut store = VariableStore::new();
        store.set("x", 42.0);
        assert_eq!(evaluate(&ASTNode::variable("x"), &mut store), Ok(42.0));
    }

    #[test]
    fn test_evaluate_undefined_variable() {
        assert_eq!(
            eval(&ASTNode::variable("undefined")),
            Err(EvalError::UnknownIdentifier {
                name: "undefined".to_string()
            })
        );
    }

    #[test]
    fn test_evaluate_left_before_right() {
        let mut store = VariableStore::new();
        let node = ASTNode::binary(
            '+',
            ASTNode::assignment("a", num(1.0)),
            ASTNode::assignment("a", num(2.0)),
        );
        assert_eq!(evaluate(&node, &mut store), Ok(3.0));
        assert_eq!(store.get("a"), Some(2.0));
    }

    #[test]
    fn test_evaluate_right_side_runs_before_division_check() {
        let mut store = VariableStore::new();
        let node = ASTNode::binary('/', num(1.0), ASTNode::assignment("z", num(0.0)));
        assert_eq!(evaluate(&node, &mut store), Err(EvalError::DivisionByZero));
        assert_eq!(store.get("z"), Some(0.0));
    }

    #[test]
    fn test_evaluate_failed_left_skips_right() {
        let mut store = VariableStore::new();
        let node = ASTNode::binary(
            '+',
            ASTNode::variable("missing"),
            ASTNode::assignment("b", num(1.0)),
        );
        assert!(evaluate(&node, &mut store).is_err());
        assert!(!store.contains("b"));
    }

    #[test]
    fn test_evaluate_chained_assignment() {
        let mut store = VariableStore::new();
        let node = ASTNode::assignment("a", ASTNode::assignment("b", num(3.0)));
        assert_eq!(evaluate(&node, &mut store), Ok(3.0));
        assert_eq!(store.get("a"), Some(3.0));
        assert_eq!(store.get("b"), Some(3.0));
    }
}
