use crate::analyzer::operator::{BinaryOperator, Function, UnaryOperator};
use crate::analyzer::syntax::expression_tree::Node;

/// If a method is not implemented, the default implementation will continue in a pre-order
/// traversal of the tree.
pub(crate) trait SyntaxVisitor: Sized {
    fn visit_number_literal(&mut self, _value: &str) {}
    fn visit_binary_expression(&mut self, _operator: &BinaryOperator, left: &Node, right: &Node) {
        walk_binary_expression(self, left, right)
    }
    fn visit_unary_expression(&mut self, _operator: &UnaryOperator, argument: &Node) {
        walk_argument(self, argument)
    }
    fn visit_function_call(&mut self, _function: &Function, argument: &Node) {
        walk_argument(self, argument)
    }
}

pub(crate) fn walk_binary_expression(visitor: &mut impl SyntaxVisitor, left: &Node, right: &Node) {
    left.accept(visitor);
    right.accept(visitor);
}

pub(crate) fn walk_argument(visitor: &mut impl SyntaxVisitor, argument: &Node) {
    argument.accept(visitor);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn create_complex_tree() -> Node {
        // sin(1 + 2)! * 3
        let one = Node::new_number_literal("1");
        let two = Node::new_number_literal("2");
        let three = Node::new_number_literal("3");
        let plus = Node::new_binary_expression(BinaryOperator::Add, one, two);
        let sine = Node::new_function_call(Function::Sin, plus);
        let factorial = Node::new_factorial(sine);
        Node::new_binary_expression(BinaryOperator::Multiply, factorial, three)
    }

    struct PrePostPrintVisitor {
        prints: Vec<String>,
    }

    impl SyntaxVisitor for PrePostPrintVisitor {
        fn visit_number_literal(&mut self, value: &str) {
            self.prints.push(value.to_string())
        }
        fn visit_binary_expression(&mut self, operator: &BinaryOperator, left: &Node, right: &Node) {
            self.prints.push(format!("{:?}", operator));
            walk_binary_expression(self, left, right);
            self.prints.push(format!("exit {:?}", operator));
        }
        fn visit_unary_expression(&mut self, operator: &UnaryOperator, argument: &Node) {
            self.prints.push(format!("{:?}", operator));
            walk_argument(self, argument);
            self.prints.push(format!("exit {:?}", operator));
        }
        fn visit_function_call(&mut self, function: &Function, argument: &Node) {
            self.prints.push(format!("{:?}", function));
            walk_argument(self, argument);
            self.prints.push(format!("exit {:?}", function));
        }
    }

    #[test]
    fn walk_tree_prints_all_nodes_in_tree_in_pre_and_post_orders() {
        let root = create_complex_tree();
        let mut visitor = PrePostPrintVisitor { prints: vec![] };
        root.accept(&mut visitor);
        assert_eq!(
            visitor.prints,
            [
                "Multiply",
                "Factorial",
                "Sin",
                "Add",
                "1",
                "2",
                "exit Add",
                "exit Sin",
                "exit Factorial",
                "3",
                "exit Multiply",
            ]
        )
    }

    struct LeafCollector {
        leaves: Vec<String>,
    }

    impl SyntaxVisitor for LeafCollector {
        fn visit_number_literal(&mut self, value: &str) {
            self.leaves.push(value.to_string())
        }
    }

    #[test]
    fn default_walk_reaches_every_leaf_from_left_to_right() {
        let root = create_complex_tree();
        let mut visitor = LeafCollector { leaves: vec![] };
        root.accept(&mut visitor);
        assert_eq!(visitor.leaves, ["1", "2", "3"])
    }
}
