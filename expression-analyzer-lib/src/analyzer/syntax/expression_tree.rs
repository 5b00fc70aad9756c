use crate::analyzer::operator::{BinaryOperator, Function, UnaryOperator};
use crate::analyzer::syntax::syntax_visitor::{
    walk_argument, walk_binary_expression, SyntaxVisitor,
};
use ptree::{write_tree, TreeBuilder};
use std::fmt;
use std::fmt::{Display, Formatter};

/// A node of the abstract syntax tree. Every non-leaf node owns its children.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Node {
    // Terminal symbols (leaves)
    NumberLiteral(String),
    // Non-terminal symbols (non-leaves)
    BinaryExpression {
        operator: BinaryOperator,
        left: Box<Node>,
        right: Box<Node>,
    },
    UnaryExpression {
        operator: UnaryOperator,
        argument: Box<Node>,
    },
    FunctionCall {
        function: Function,
        argument: Box<Node>,
    },
}

impl Node {
    pub fn new_number_literal(value: impl Into<String>) -> Node {
        Node::NumberLiteral(value.into())
    }

    pub fn new_binary_expression(operator: BinaryOperator, left: Node, right: Node) -> Node {
        Node::BinaryExpression {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn new_factorial(argument: Node) -> Node {
        Node::UnaryExpression {
            operator: UnaryOperator::Factorial,
            argument: Box::new(argument),
        }
    }

    pub fn new_function_call(function: Function, argument: Node) -> Node {
        Node::FunctionCall {
            function,
            argument: Box::new(argument),
        }
    }

    /// The direct children of this node, left to right.
    pub fn children(&self) -> Vec<&Node> {
        match self {
            Node::NumberLiteral(_) => Vec::new(),
            Node::BinaryExpression { left, right, .. } => vec![&**left, &**right],
            Node::UnaryExpression { argument, .. } | Node::FunctionCall { argument, .. } => {
                vec![&**argument]
            }
        }
    }

    /// The literal text, operator symbol or function name this node is labelled with.
    pub fn label(&self) -> String {
        match self {
            Node::NumberLiteral(value) => value.clone(),
            Node::BinaryExpression { operator, .. } => operator.to_string(),
            Node::UnaryExpression { operator, .. } => operator.to_string(),
            Node::FunctionCall { function, .. } => function.name().to_string(),
        }
    }

    /// The number of nodes in the tree rooted at this node.
    pub fn size(&self) -> usize {
        let mut pending = vec![self];
        let mut count = 0;
        while let Some(node) = pending.pop() {
            count += 1;
            pending.extend(node.children());
        }
        count
    }

    /// Moves the children out of this node, leaving empty literals in their place.
    fn detach_children(&mut self) -> Vec<Node> {
        let placeholder = || Node::NumberLiteral(String::new());
        match self {
            Node::NumberLiteral(_) => Vec::new(),
            Node::BinaryExpression { left, right, .. } => vec![
                std::mem::replace(&mut **left, placeholder()),
                std::mem::replace(&mut **right, placeholder()),
            ],
            Node::UnaryExpression { argument, .. } | Node::FunctionCall { argument, .. } => {
                vec![std::mem::replace(&mut **argument, placeholder())]
            }
        }
    }

    /// Calls the correct visitor method for the node variant on the given visitor.
    pub(crate) fn accept(&self, visitor: &mut impl SyntaxVisitor) {
        match self {
            Node::NumberLiteral(value) => visitor.visit_number_literal(value),
            Node::BinaryExpression {
                operator,
                left,
                right,
            } => visitor.visit_binary_expression(operator, left, right),
            Node::UnaryExpression { operator, argument } => {
                visitor.visit_unary_expression(operator, argument)
            }
            Node::FunctionCall { function, argument } => {
                visitor.visit_function_call(function, argument)
            }
        }
    }

    fn format_tree(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut visitor = TreeBuilderVisitor {
            builder: TreeBuilder::new("expression".into()),
        };
        self.accept(&mut visitor);

        let mut buffer: Vec<u8> = Vec::new();
        match write_tree(&visitor.builder.build(), &mut buffer) {
            Ok(_) => {}
            Err(_) => return Err(fmt::Error),
        }
        let text = match std::str::from_utf8(&buffer) {
            Ok(text) => text,
            Err(_) => return Err(fmt::Error),
        };
        f.write_str(text)
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.format_tree(f)
    }
}

// Children are freed from a worklist so that a left-leaning chain of any length
// does not recurse once per level.
impl Drop for Node {
    fn drop(&mut self) {
        let mut detached = self.detach_children();
        while let Some(mut node) = detached.pop() {
            detached.append(&mut node.detach_children());
        }
    }
}

struct TreeBuilderVisitor {
    builder: TreeBuilder,
}

impl SyntaxVisitor for TreeBuilderVisitor {
    fn visit_number_literal(&mut self, value: &str) {
        self.builder.add_empty_child(value.to_string());
    }
    fn visit_binary_expression(&mut self, operator: &BinaryOperator, left: &Node, right: &Node) {
        self.builder.begin_child(format!("{}", operator));
        walk_binary_expression(self, left, right);
        self.builder.end_child();
    }
    fn visit_unary_expression(&mut self, operator: &UnaryOperator, argument: &Node) {
        self.builder.begin_child(format!("{}", operator));
        walk_argument(self, argument);
        self.builder.end_child();
    }
    fn visit_function_call(&mut self, function: &Function, argument: &Node) {
        self.builder.begin_child(format!("{}", function));
        walk_argument(self, argument);
        self.builder.end_child();
    }
}
