use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::rail_node::RailNode;

/// All nodes of one spreadsheet snapshot, keyed by id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct World {
    nodes: IndexMap<String, RailNode>,
}

impl World {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node, replacing any earlier node with the same id.
    /// The replacement keeps the position of the first node with that id.
    pub(crate) fn insert(&mut self, node: RailNode) -> Option<RailNode> {
        self.nodes.insert(node.id.clone(), node)
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&RailNode> {
        self.nodes.get(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in a stable order (first appearance of each id in the source)
    pub fn nodes(&self) -> impl Iterator<Item = &RailNode> {
        self.nodes.values()
    }

    pub fn stations(&self) -> impl Iterator<Item = &RailNode> {
        self.nodes().filter(|node| node.is_station())
    }
}

impl FromIterator<RailNode> for World {
    fn from_iter<I: IntoIterator<Item = RailNode>>(iter: I) -> Self {
        let mut world = Self::new();
        for node in iter {
            world.insert(node);
        }
        world
    }
}
