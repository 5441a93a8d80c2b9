use std::collections::BTreeMap;

use crate::{EdgeKey, Graph, InvalidConfig, Role};

/// The partial assignment of roles to nodes, plus the edges derived from it.
///
/// An edge is colored if and only if both of its endpoints are colored by the
/// same role. Node colors never change once set; a new move produces a new
/// `Coloring` rather than modifying this one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Coloring {
    nodes: BTreeMap<usize, Role>,
    /// Cached, so scoring does not need to look at the node colors.
    edges: BTreeMap<EdgeKey, Role>,
}

impl Coloring {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the coloring of the given nodes, deriving the edge colors.
    pub fn from_nodes(graph: &Graph, nodes: &BTreeMap<usize, Role>) -> Result<Self, InvalidConfig> {
        let mut coloring = Self::new();
        for (&node, &role) in nodes {
            if !graph.contains_node(node) {
                return Err(InvalidConfig::ColoredNodeOutOfRange {
                    node,
                    node_count: graph.node_count(),
                });
            }
            coloring.insert(graph, node, role);
        }
        Ok(coloring)
    }

    pub fn node(&self, node: usize) -> Option<Role> {
        self.nodes.get(&node).copied()
    }

    pub fn edge(&self, edge: EdgeKey) -> Option<Role> {
        self.edges.get(&edge).copied()
    }

    pub fn is_colored(&self, node: usize) -> bool {
        self.nodes.contains_key(&node)
    }

    /// The number of colored nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Colored nodes in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = (usize, Role)> + '_ {
        self.nodes.iter().map(|(&node, &role)| (node, role))
    }

    /// Colored edges in ascending key order.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeKey, Role)> + '_ {
        self.edges.iter().map(|(&edge, &role)| (edge, role))
    }

    /// Returns a copy of this coloring with `node` colored by `role`.
    ///
    /// The node must exist and must not be colored yet.
    pub(crate) fn with_node(&self, graph: &Graph, node: usize, role: Role) -> Self {
        let mut coloring = self.clone();
        coloring.insert(graph, node, role);
        coloring
    }

    fn insert(&mut self, graph: &Graph, node: usize, role: Role) {
        self.nodes.insert(node, role);
        for neighbor in graph.neighbors(node) {
            if self.nodes.get(&neighbor) == Some(&role) {
                self.edges.insert(EdgeKey::new(node, neighbor), role);
            }
        }
    }
}
