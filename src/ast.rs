use std::fmt;

/// Operators `BinaryOperation` may carry.
pub const OPERATORS: [char; 4] = ['+', '-', '*', '/'];

#[derive(Debug, Clone, PartialEq)]
pub enum ASTNode {
    Number(f64),
    Variable(String),
    BinaryOperation {
        op: char,
        left: Box<ASTNode>,
        right: Box<ASTNode>,
    },
    Assignment {
        variable_name: String,
        expression: Box<ASTNode>,
    },
}

impl ASTNode {
    pub fn binary(op: char, left: ASTNode, right: ASTNode) -> Self {
        ASTNode::BinaryOperation {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn assignment(variable_name: impl Into<String>, expression: ASTNode) -> Self {
        ASTNode::Assignment {
            variable_name: variable_name.into(),
            expression: Box::new(expression),
        }
    }

    pub fn variable(name: impl Into<String>) -> Self {
        ASTNode::Variable(name.into())
    }
}

// Canonical, fully parenthesized form. `printer::render` checks operators first.
impl fmt::Display for ASTNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ASTNode::Number(value) => write!(f, "{value}"),
            ASTNode::Variable(name) => f.write_str(name),
            ASTNode::BinaryOperation { op, left, right } => write!(f, "({left} {op} {right})"),
            ASTNode::Assignment {
                variable_name,
                expression,
            } => write!(f, "({variable_name} = {expression})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let node = ASTNode::binary('+', ASTNode::Number(1.0), ASTNode::variable("x"));
        assert_eq!(
            node,
            ASTNode::BinaryOperation {
                op: '+',
                left: Box::new(ASTNode::Number(1.0)),
                right: Box::new(ASTNode::Variable("x".to_string())),
            }
        );
    }

    #[test]
    fn test_display_nested() {
        let node = ASTNode::assignment(
            "a",
            ASTNode::binary('*', ASTNode::Number(2.5), ASTNode::Number(4.0)),
        );
        assert_eq!(node.to_string(), "(a = (2.5 * 4))");
    }
}
