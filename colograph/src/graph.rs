mod generator;

use std::collections::BTreeSet;
use std::str::FromStr;

pub use generator::*;
use serde::{Deserialize, Serialize};

use crate::InvalidConfig;

/// The decoration of a node. Edges between nodes of the same shape are scored
/// differently from edges between nodes of different shapes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Circle,
    Triangle,
    Square,
    Star,
    Pentagon,
    Hexagon,
}

/// All shapes, in the order in which random games draw from them.
pub const SHAPE_PALETTE: [Shape; 6] = [
    Shape::Circle,
    Shape::Triangle,
    Shape::Square,
    Shape::Star,
    Shape::Pentagon,
    Shape::Hexagon,
];

impl Shape {
    pub fn name(self) -> &'static str {
        match self {
            Shape::Circle => "circle",
            Shape::Triangle => "triangle",
            Shape::Square => "square",
            Shape::Star => "star",
            Shape::Pentagon => "pentagon",
            Shape::Hexagon => "hexagon",
        }
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The error type for the [`FromStr`] instance of [`Shape`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownShape(pub String);

impl std::error::Error for UnknownShape {}

impl std::fmt::Display for UnknownShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown shape '{}'", self.0)
    }
}

impl FromStr for Shape {
    type Err = UnknownShape;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SHAPE_PALETTE
            .into_iter()
            .find(|shape| shape.name() == s)
            .ok_or_else(|| UnknownShape(String::from(s)))
    }
}

/// Identifies an undirected edge.
///
/// The smaller node index always comes first, so `EdgeKey::new(a, b)` and
/// `EdgeKey::new(b, a)` are the same key.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EdgeKey(usize, usize);

impl EdgeKey {
    pub fn new(n1: usize, n2: usize) -> Self {
        Self(n1.min(n2), n1.max(n2))
    }

    pub fn low(self) -> usize {
        self.0
    }

    pub fn high(self) -> usize {
        self.1
    }
}

impl std::fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

/// The static graph a match is played on.
///
/// Nodes are the indices `0..node_count()`. Every node has a shape, no edge
/// points out of range, and there are no self-loops.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph {
    /// The adjacency list exactly as it was given. An edge may be listed under
    /// either of its endpoints, or under both.
    adjacency: Vec<Vec<usize>>,
    shapes: Vec<Shape>,
    /// Derived from `adjacency`: the neighbors of each node in both directions.
    neighbors: Vec<BTreeSet<usize>>,
    /// Derived from `adjacency`, deduplicated.
    edges: BTreeSet<EdgeKey>,
}

impl Graph {
    pub fn new(adjacency: Vec<Vec<usize>>, shapes: Vec<Shape>) -> Result<Self, InvalidConfig> {
        let node_count = adjacency.len();
        if node_count == 0 {
            return Err(InvalidConfig::EmptyGraph);
        }
        if shapes.len() != node_count {
            return Err(InvalidConfig::ShapeCountMismatch {
                nodes: node_count,
                shapes: shapes.len(),
            });
        }

        for (node, adjs) in adjacency.iter().enumerate() {
            for &neighbor in adjs {
                if neighbor >= node_count {
                    return Err(InvalidConfig::NeighborOutOfRange {
                        node,
                        neighbor,
                        node_count,
                    });
                }
                if neighbor == node {
                    return Err(InvalidConfig::SelfLoop { node });
                }
            }
        }

        Ok(Self::build(adjacency, shapes))
    }

    /// Derives the lookup tables. The input must already be known to be valid.
    pub(crate) fn build(adjacency: Vec<Vec<usize>>, shapes: Vec<Shape>) -> Self {
        debug_assert_eq!(adjacency.len(), shapes.len());
        let mut neighbors = vec![BTreeSet::new(); adjacency.len()];
        let mut edges = BTreeSet::new();
        for (node, adjs) in adjacency.iter().enumerate() {
            for &neighbor in adjs {
                neighbors[node].insert(neighbor);
                neighbors[neighbor].insert(node);
                edges.insert(EdgeKey::new(node, neighbor));
            }
        }

        Self {
            adjacency,
            shapes,
            neighbors,
            edges,
        }
    }

    pub fn node_count(&self) -> usize {
        self.shapes.len()
    }

    pub fn nodes(&self) -> std::ops::Range<usize> {
        0..self.node_count()
    }

    pub fn contains_node(&self, node: usize) -> bool {
        node < self.node_count()
    }

    /// The adjacency list this graph was built from.
    pub fn adjacency(&self) -> &[Vec<usize>] {
        &self.adjacency
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Panics if the node does not exist.
    pub fn shape(&self, node: usize) -> Shape {
        self.shapes[node]
    }

    /// All nodes adjacent to `node`, regardless of which endpoint lists the edge.
    ///
    /// Panics if the node does not exist.
    pub fn neighbors(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self.neighbors[node].iter().copied()
    }

    pub fn are_adjacent(&self, n1: usize, n2: usize) -> bool {
        self.neighbors
            .get(n1)
            .is_some_and(|adjs| adjs.contains(&n2))
    }

    /// Every edge once, in ascending key order.
    pub fn edges(&self) -> impl Iterator<Item = EdgeKey> + '_ {
        self.edges.iter().copied()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether both endpoints of the edge carry the same shape.
    pub fn is_same_shape(&self, edge: EdgeKey) -> bool {
        self.shapes[edge.low()] == self.shapes[edge.high()]
    }
}
