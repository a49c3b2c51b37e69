use crate::interpreter::evaluator::environment::Environment;

/// The syntactic form of an expression node.
///
/// Leaf forms carry their literal; the other forms get their operands from the
/// node's children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprKind {
    /// An integer literal such as `42`. Always a leaf.
    Integer(i64),
    /// A variable reference such as `x`. Always a leaf.
    Identifier(String),
    /// `minus(left, right)`. Exactly two children.
    Minus,
    /// `iszero(operand)`. Exactly one child.
    IsZero,
    /// `if predicate then consequent else alternative`. Exactly three children.
    If,
    /// `let name = bound in body`. Exactly three children: the bound
    /// identifier leaf, the bound expression and the body.
    Let,
}

impl ExprKind {
    /// The number of children a node of this kind owns.
    #[must_use]
    pub const fn arity(&self) -> usize {
        match self {
            Self::Integer(_) | Self::Identifier(_) => 0,
            Self::IsZero => 1,
            Self::Minus => 2,
            Self::If | Self::Let => 3,
        }
    }

    /// The name the tree printer uses for this kind.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Integer(_) => "ConstExp",
            Self::Identifier(_) => "VarExp",
            Self::Minus => "DiffExp",
            Self::IsZero => "IsZeroExp",
            Self::If => "IfExp",
            Self::Let => "LetExp",
        }
    }
}

/// Index of a node inside an [`Ast`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// The position of the node in the arena.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// One node of the expression tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AstNode {
    kind:        ExprKind,
    line:        usize,
    children:    Vec<NodeId>,
    parent:      Option<NodeId>,
    environment: Option<Environment>,
}

impl AstNode {
    #[must_use]
    pub const fn kind(&self) -> &ExprKind {
        &self.kind
    }

    /// The source line of the token that started this expression.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Children in surface left-to-right order.
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// The enclosing node, or `None` for the root. Diagnostic use only.
    #[must_use]
    pub const fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// The environment this node was last evaluated under, if it has been
    /// evaluated at all.
    #[must_use]
    pub const fn environment(&self) -> Option<&Environment> {
        self.environment.as_ref()
    }

    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        self.kind.arity() == 0
    }
}

/// A parsed program: an arena of nodes and the index of the root.
///
/// Nodes own their children through indices into the same arena, and point
/// back to their parent the same way, so the tree has no shared or cyclic
/// ownership. The structure is fixed once the parser returns; evaluation only
/// writes each node's environment snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ast {
    nodes: Vec<AstNode>,
    root:  NodeId,
}

impl Ast {
    #[must_use]
    pub const fn root(&self) -> NodeId {
        self.root
    }

    /// Returns the node stored at `id`.
    ///
    /// # Panics
    /// Panics if `id` was not produced by this tree.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &AstNode {
        &self.nodes[id.0]
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates over all nodes in creation (pre-order) order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &AstNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (NodeId(index), node))
    }

    /// Records the environment a node is being evaluated under.
    pub(crate) fn record_environment(&mut self, id: NodeId, environment: &Environment) {
        self.nodes[id.0].environment = Some(environment.clone());
    }

    /// Forgets every recorded environment.
    pub fn clear_environments(&mut self) {
        for node in &mut self.nodes {
            node.environment = None;
        }
    }
}

/// Incrementally builds an [`Ast`] in pre-order.
///
/// Used by the parser: a node is pushed when its first token is consumed and
/// its children are attached once they have been parsed.
#[derive(Debug, Default)]
pub(crate) struct AstBuilder {
    nodes: Vec<AstNode>,
}

impl AstBuilder {
    pub(crate) const fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Adds a childless node and returns its index.
    pub(crate) fn push(&mut self, kind: ExprKind, line: usize) -> NodeId {
        self.nodes.push(AstNode { kind,
                                  line,
                                  children: Vec::with_capacity(3),
                                  parent: None,
                                  environment: None });
        NodeId(self.nodes.len() - 1)
    }

    /// Attaches `children`, in order, to `parent`.
    pub(crate) fn attach(&mut self, parent: NodeId, children: &[NodeId]) {
        for child in children {
            self.nodes[child.0].parent = Some(parent);
        }
        self.nodes[parent.0].children.extend_from_slice(children);
    }

    pub(crate) fn finish(self, root: NodeId) -> Ast {
        Ast { nodes: self.nodes,
              root }
    }
}
