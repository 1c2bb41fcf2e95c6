//! NodeArena creation methods.

use super::base::NodeIndex;
use super::node::{Node, NodeArena, NodeData};

impl NodeArena {
    /// Maximum pre-allocation to avoid capacity overflow in huge files.
    const MAX_NODE_PREALLOC: usize = 1_000_000;

    pub fn new() -> NodeArena {
        NodeArena::default()
    }

    /// Create an arena with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> NodeArena {
        NodeArena {
            nodes: Vec::with_capacity(capacity.min(Self::MAX_NODE_PREALLOC)),
        }
    }

    /// Add a node and link its children back to it.
    ///
    /// Children are always created before their parent, so every child
    /// index passed in `data` already exists.
    pub fn add(&mut self, data: NodeData, pos: u32, end: u32, line: u32) -> NodeIndex {
        let index = NodeIndex(self.nodes.len() as u32);
        let mut children = Vec::new();
        data.for_each_child(|child| children.push(child));
        for child in children {
            if let Some(node) = self.nodes.get_mut(child.0 as usize) {
                node.parent = index;
            }
        }
        self.nodes.push(Node {
            data,
            pos,
            end,
            line,
            parent: NodeIndex::NONE,
            jsdoc: None,
        });
        index
    }

    /// Attach a documentation comment. An existing comment is kept.
    pub fn set_jsdoc(&mut self, index: NodeIndex, jsdoc: Option<String>) {
        if let (Some(node), Some(text)) = (self.get_mut(index), jsdoc) {
            if node.jsdoc.is_none() {
                node.jsdoc = Some(text);
            }
        }
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }
}
