use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{Coloring, GameState, Graph, InvalidConfig, Role, Shape};

/// A plain representation of a [`GameState`], for storing or logging it.
///
/// Only node colors are kept; edge colors are derived again when restoring.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub active_role: Role,
    pub coloring: BTreeMap<usize, Role>,
    pub edges: Vec<Vec<usize>>,
    pub shapes: Vec<Shape>,
    pub score_same_shape: i32,
    pub score_different_shape: i32,
}

impl GameState {
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            active_role: self.active_role(),
            coloring: self.coloring().nodes().collect(),
            edges: self.graph().adjacency().to_vec(),
            shapes: self.graph().shapes().to_vec(),
            score_same_shape: self.score_same_shape(),
            score_different_shape: self.score_different_shape(),
        }
    }

    /// Rebuilds a state from a snapshot, validating the graph and the coloring.
    pub fn from_snapshot(snapshot: GameSnapshot) -> Result<Self, InvalidConfig> {
        let graph = Graph::new(snapshot.edges, snapshot.shapes)?;
        let coloring = Coloring::from_nodes(&graph, &snapshot.coloring)?;
        Ok(GameState::from_parts(
            snapshot.active_role,
            graph,
            coloring,
            snapshot.score_same_shape,
            snapshot.score_different_shape,
        ))
    }
}

impl TryFrom<GameSnapshot> for GameState {
    type Error = InvalidConfig;

    fn try_from(snapshot: GameSnapshot) -> Result<Self, Self::Error> {
        GameState::from_snapshot(snapshot)
    }
}
