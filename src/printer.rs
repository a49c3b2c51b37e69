use std::fmt::{self, Write};

use crate::ast::{Ast, ExprKind, NodeId};

const INDENT: &str = "    ";

/// Renders the tree in the layout of the classic LET tree dump:
///
/// ```text
/// LetExp (
///     VarExp (
///           "x"
///     ),
///     ConstExp (
///           5
///     )
///     ...
/// )
/// ```
///
/// Each node that has been evaluated under a non-empty environment is
/// followed by `-> Env [(name, value), ...]`. Call it before evaluation for
/// the plain tree and after evaluation to see the environments.
impl fmt::Display for Ast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(f, self, self.root(), 0)
    }
}

fn write_node(f: &mut fmt::Formatter<'_>, tree: &Ast, id: NodeId, depth: usize) -> fmt::Result {
    let node = tree.node(id);
    let indent = INDENT.repeat(depth);
    let label = node.kind().label();

    write!(f, "{indent}{label}")?;
    if let Some(environment) = node.environment()
       && !environment.is_empty()
    {
        write!(f, " -> Env {environment}")?;
    }
    f.write_str(" (\n")?;

    for (position, child) in node.children().iter().enumerate() {
        write_node(f, tree, *child, depth + 1)?;
        if needs_separator(node.kind(), position) {
            f.write_char(',')?;
        }
        f.write_char('\n')?;
    }

    // Leaf literals sit two columns left of the label's end.
    let pad = " ".repeat(label.len().saturating_sub(2));
    match node.kind() {
        ExprKind::Identifier(name) => writeln!(f, "{indent}{pad}\"{name}\"")?,
        ExprKind::Integer(n) => writeln!(f, "{indent}{pad}{n}")?,
        _ => {},
    }

    write!(f, "{indent})")
}

/// `minus` separates its two operands and `let` its bound expression from the
/// body.
const fn needs_separator(kind: &ExprKind, position: usize) -> bool {
    matches!((kind, position), (ExprKind::Minus, 0) | (ExprKind::Let, 1))
}
