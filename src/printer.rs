use crate::ast::{ASTNode, OPERATORS};
use crate::error::RenderError;

/// Renders `node` in canonical, fully parenthesized infix form.
///
/// Numbers use `f64`'s `Display`, the shortest text that parses back to the
/// same value (`5.0` renders as `5`).
pub fn render(node: &ASTNode) -> Result<String, RenderError> {
    check(node)?;
    Ok(node.to_string())
}

fn check(node: &ASTNode) -> Result<(), RenderError> {
    match node {
        ASTNode::Number(_) | ASTNode::Variable(_) => Ok(()),
        ASTNode::BinaryOperation { op, left, right } => {
            if !OPERATORS.contains(op) {
                return Err(RenderError::InvalidNode { op: *op });
            }
            check(left)?;
            check(right)
        }
        ASTNode::Assignment { expression, .. } => check(expression),
    }
}
