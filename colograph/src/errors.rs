use crate::Role;

/// The error type for [`GameState::apply_move()`](crate::GameState::apply_move)
/// and [`GameState::next()`](crate::GameState::next).
#[derive(Debug, PartialEq, Eq)]
pub enum IllegalMove {
    /// A role tried to move while it was not its turn.
    IllegalRole { expected: Role, actual: Role },
    /// The node does not exist in the graph.
    InvalidMove { node: usize, node_count: usize },
    AlreadyColored { node: usize, owner: Role },
    /// Chance outcomes were supplied, but Colograph has no random events.
    UnsupportedFeature,
    /// The submitted moves contain nothing for the role whose turn it is.
    MissingMove { role: Role },
}

impl std::error::Error for IllegalMove {}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMove::IllegalRole { expected, actual } => write!(
                f,
                "{} tried to move, but it is {}'s turn",
                actual, expected
            ),
            IllegalMove::InvalidMove { node, node_count } => write!(
                f,
                "Node {} does not exist in a graph with {} nodes",
                node, node_count
            ),
            IllegalMove::AlreadyColored { node, owner } => {
                write!(f, "Node {} has already been colored by {}", node, owner)
            }
            IllegalMove::UnsupportedFeature => {
                write!(f, "Haps were supplied, but the game has no chance events")
            }
            IllegalMove::MissingMove { role } => {
                write!(f, "No move was submitted for the active role {}", role)
            }
        }
    }
}

/// The error type for building a [`GameState`](crate::GameState) from a
/// configuration or a snapshot.
#[derive(Debug, PartialEq, Eq)]
pub enum InvalidConfig {
    EmptyGraph,
    ShapeCountMismatch {
        nodes: usize,
        shapes: usize,
    },
    NeighborOutOfRange {
        node: usize,
        neighbor: usize,
        node_count: usize,
    },
    SelfLoop {
        node: usize,
    },
    ColoredNodeOutOfRange {
        node: usize,
        node_count: usize,
    },
}

impl std::error::Error for InvalidConfig {}

impl std::fmt::Display for InvalidConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidConfig::EmptyGraph => write!(f, "The graph has no nodes"),
            InvalidConfig::ShapeCountMismatch { nodes, shapes } => write!(
                f,
                "The graph has {} nodes, but {} shapes were given",
                nodes, shapes
            ),
            InvalidConfig::NeighborOutOfRange {
                node,
                neighbor,
                node_count,
            } => write!(
                f,
                "Node {} lists neighbor {}, but the graph only has {} nodes",
                node, neighbor, node_count
            ),
            InvalidConfig::SelfLoop { node } => write!(f, "Node {} is its own neighbor", node),
            InvalidConfig::ColoredNodeOutOfRange { node, node_count } => write!(
                f,
                "Node {} is colored, but the graph only has {} nodes",
                node, node_count
            ),
        }
    }
}
