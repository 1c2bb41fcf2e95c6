//! NodeArena access methods.

use super::base::NodeIndex;
use super::node::{FunctionData, Node, NodeArena, NodeData};
use jsl_common::limits::MAX_TREE_WALK_ITERATIONS;

impl NodeArena {
    #[inline]
    pub fn get(&self, index: NodeIndex) -> Option<&Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get(index.0 as usize)
        }
    }

    #[inline]
    pub fn get_mut(&mut self, index: NodeIndex) -> Option<&mut Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get_mut(index.0 as usize)
        }
    }

    #[inline]
    pub fn get_data(&self, index: NodeIndex) -> Option<&NodeData> {
        self.get(index).map(|node| &node.data)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Parent of a node; `NodeIndex::NONE` for the root or an unknown index.
    #[inline]
    pub fn parent_of(&self, index: NodeIndex) -> NodeIndex {
        self.get(index).map_or(NodeIndex::NONE, |node| node.parent)
    }

    /// 1-based line of a node, 0 for an unknown index.
    #[inline]
    pub fn line_of(&self, index: NodeIndex) -> u32 {
        self.get(index).map_or(0, |node| node.line)
    }

    pub fn jsdoc_of(&self, index: NodeIndex) -> Option<&str> {
        self.get(index).and_then(Node::jsdoc)
    }

    pub fn get_function(&self, index: NodeIndex) -> Option<&FunctionData> {
        match self.get_data(index)? {
            NodeData::Function(func) => Some(func),
            _ => None,
        }
    }

    pub fn is_function(&self, index: NodeIndex) -> bool {
        self.get_function(index).is_some()
    }

    pub fn is_this(&self, index: NodeIndex) -> bool {
        matches!(self.get_data(index), Some(NodeData::This))
    }

    pub fn identifier_text(&self, index: NodeIndex) -> Option<&str> {
        match self.get_data(index)? {
            NodeData::Identifier { text } => Some(text),
            _ => None,
        }
    }

    /// Strip any number of enclosing parentheses.
    pub fn skip_parens(&self, mut index: NodeIndex) -> NodeIndex {
        for _ in 0..MAX_TREE_WALK_ITERATIONS {
            match self.get_data(index) {
                Some(NodeData::Paren { expression }) => index = *expression,
                _ => break,
            }
        }
        index
    }

    /// Dotted name of a node.
    ///
    /// Identifiers and `this` render as themselves, property access chains
    /// are joined with `.`, string literals render their value and numeric
    /// literals their text. Anything else, or a chain rooted in anything
    /// else, renders as the empty string.
    pub fn get_name(&self, index: NodeIndex) -> String {
        let mut parts: Vec<&str> = Vec::new();
        let mut current = index;
        for _ in 0..MAX_TREE_WALK_ITERATIONS {
            match self.get_data(current) {
                Some(NodeData::PropertyAccess { expression, name }) => {
                    match self.identifier_text(*name) {
                        Some(text) => parts.push(text),
                        None => return String::new(),
                    }
                    current = *expression;
                }
                Some(NodeData::Identifier { text }) => {
                    parts.push(text);
                    break;
                }
                Some(NodeData::This) => {
                    parts.push("this");
                    break;
                }
                Some(NodeData::StringLiteral { value }) if parts.is_empty() => {
                    return value.clone();
                }
                Some(NodeData::NumericLiteral { text }) if parts.is_empty() => {
                    return text.clone();
                }
                _ => return String::new(),
            }
        }
        parts.reverse();
        parts.join(".")
    }

    /// Walk parent links starting at (and excluding) `index`.
    pub fn ancestors(&self, index: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        let mut current = self.parent_of(index);
        let mut steps = 0usize;
        std::iter::from_fn(move || {
            if current.is_none() || steps >= MAX_TREE_WALK_ITERATIONS {
                return None;
            }
            steps += 1;
            let found = current;
            current = self.parent_of(found);
            Some(found)
        })
    }

    /// All node indices in pre-order (document order) starting at `root`.
    pub fn preorder(&self, root: NodeIndex) -> Vec<NodeIndex> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![root];
        while let Some(index) = stack.pop() {
            let Some(node) = self.get(index) else {
                continue;
            };
            order.push(index);
            let mut children = Vec::new();
            node.data.for_each_child(|child| children.push(child));
            stack.extend(children.into_iter().rev());
        }
        order
    }
}
