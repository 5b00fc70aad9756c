use crate::analyzer::syntax::expression_tree::Node;
use ptree::{write_tree, Style, TreeItem};
use std::borrow::Cow;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::io;

/// Name of the placeholder tree returned when an expression is invalid.
pub const ERROR_NODE_NAME: &str = "Error";

/// A generic named tree that mirrors the shape of an abstract syntax tree,
/// for display purposes only.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RenderTree {
    pub name: String,
    pub children: Vec<RenderTree>,
}

impl RenderTree {
    pub fn new(name: impl Into<String>, children: Vec<RenderTree>) -> RenderTree {
        RenderTree {
            name: name.into(),
            children,
        }
    }

    pub fn leaf(name: impl Into<String>) -> RenderTree {
        Self::new(name, Vec::new())
    }

    pub fn error() -> RenderTree {
        Self::leaf(ERROR_NODE_NAME)
    }

    /// Names of the direct children, in order.
    pub fn child_names(&self) -> Vec<&str> {
        self.children.iter().map(|child| child.name.as_str()).collect()
    }
}

/// Converts with an explicit stack: each node is expanded on the way down and
/// assembled from its finished children on the way back up.
impl From<&Node> for RenderTree {
    fn from(root: &Node) -> RenderTree {
        enum Visit<'a> {
            Enter(&'a Node),
            Exit(&'a Node),
        }

        let mut pending = vec![Visit::Enter(root)];
        let mut finished: Vec<RenderTree> = Vec::new();
        while let Some(visit) = pending.pop() {
            match visit {
                Visit::Enter(node) => {
                    pending.push(Visit::Exit(node));
                    pending.extend(node.children().into_iter().rev().map(Visit::Enter));
                }
                Visit::Exit(node) => {
                    let arity = node.children().len();
                    let children = finished.split_off(finished.len() - arity);
                    finished.push(RenderTree::new(node.label(), children));
                }
            }
        }

        debug_assert_eq!(finished.len(), 1);
        finished.pop().unwrap_or_else(RenderTree::error)
    }
}

impl Drop for RenderTree {
    fn drop(&mut self) {
        let mut detached = std::mem::take(&mut self.children);
        while let Some(mut tree) = detached.pop() {
            detached.append(&mut tree.children);
        }
    }
}

impl TreeItem for RenderTree {
    type Child = Self;

    fn write_self<W: io::Write>(&self, f: &mut W, style: &Style) -> io::Result<()> {
        write!(f, "{}", style.paint(&self.name))
    }

    fn children(&self) -> Cow<[Self::Child]> {
        Cow::from(&self.children[..])
    }
}

impl Display for RenderTree {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut buffer: Vec<u8> = Vec::new();
        if write_tree(self, &mut buffer).is_err() {
            return Err(fmt::Error);
        }
        match std::str::from_utf8(&buffer) {
            Ok(text) => f.write_str(text),
            Err(_) => Err(fmt::Error),
        }
    }
}
