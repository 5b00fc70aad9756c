pub mod expression_tree;
pub mod render_tree;
pub(crate) mod syntax_visitor;
