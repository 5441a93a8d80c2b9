use std::sync::Arc;

use crate::{
    Coloring, GameConfig, Graph, Haps, IllegalMove, InvalidConfig, MatchResult, Moves, Role,
    Score, TurnMoves,
};

/// One position of a Colograph match.
///
/// A `GameState` is never modified: every move produces a new state. The graph
/// is shared between all states of a match, since it does not change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    active_role: Role,
    graph: Arc<Graph>,
    coloring: Coloring,
    score_same_shape: i32,
    score_different_shape: i32,
}

impl GameState {
    /// Validates the configuration and creates the initial position.
    pub fn new(config: GameConfig) -> Result<Self, InvalidConfig> {
        let GameConfig {
            edges,
            shapes,
            score_same_shape,
            score_different_shape,
            active_role,
        } = config;
        let graph = Graph::new(edges, shapes)?;
        Ok(Self {
            active_role: active_role.unwrap_or(Role::First),
            ..Self::initial(graph, score_same_shape, score_different_shape)
        })
    }

    /// The initial position on `graph`: nothing colored, `First` to move.
    pub fn initial(
        graph: impl Into<Arc<Graph>>,
        score_same_shape: i32,
        score_different_shape: i32,
    ) -> Self {
        Self {
            active_role: Role::First,
            graph: graph.into(),
            coloring: Coloring::new(),
            score_same_shape,
            score_different_shape,
        }
    }

    pub(crate) fn from_parts(
        active_role: Role,
        graph: Graph,
        coloring: Coloring,
        score_same_shape: i32,
        score_different_shape: i32,
    ) -> Self {
        Self {
            active_role,
            graph: Arc::new(graph),
            coloring,
            score_same_shape,
            score_different_shape,
        }
    }

    pub fn active_role(&self) -> Role {
        self.active_role
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn coloring(&self) -> &Coloring {
        &self.coloring
    }

    pub fn score_same_shape(&self) -> i32 {
        self.score_same_shape
    }

    pub fn score_different_shape(&self) -> i32 {
        self.score_different_shape
    }

    pub fn node_color(&self, node: usize) -> Option<Role> {
        self.coloring.node(node)
    }

    /// True when every node is colored. Equivalent to `legal_moves()` returning `None`.
    pub fn is_terminal(&self) -> bool {
        self.coloring.len() == self.graph.node_count()
    }

    /// Every uncolored node is a possible move for the active role.
    ///
    /// Returns `None` when all nodes are colored, i.e. the match is over.
    pub fn legal_moves(&self) -> Option<Moves> {
        let nodes: Vec<usize> = self
            .graph
            .nodes()
            .filter(|&node| !self.coloring.is_colored(node))
            .collect();
        (!nodes.is_empty()).then_some(Moves {
            role: self.active_role,
            nodes,
        })
    }

    /// Colors `node` with `role` and hands the turn to the opponent.
    ///
    /// Each neighbor already colored by `role` also colors the edge joining it
    /// to `node`.
    pub fn apply_move(&self, role: Role, node: usize) -> Result<Self, IllegalMove> {
        if role != self.active_role {
            return Err(IllegalMove::IllegalRole {
                expected: self.active_role,
                actual: role,
            });
        }
        if !self.graph.contains_node(node) {
            return Err(IllegalMove::InvalidMove {
                node,
                node_count: self.graph.node_count(),
            });
        }
        if let Some(owner) = self.coloring.node(node) {
            return Err(IllegalMove::AlreadyColored { node, owner });
        }

        Ok(Self {
            active_role: role.opponent(),
            graph: Arc::clone(&self.graph),
            coloring: self.coloring.with_node(&self.graph, node, role),
            score_same_shape: self.score_same_shape,
            score_different_shape: self.score_different_shape,
        })
    }

    /// Applies the moves of one turn, as submitted by a match driver.
    ///
    /// `moves` must hold exactly one entry, for the active role. Colograph has
    /// no chance events, so `haps` must be `None`.
    pub fn next(&self, moves: &TurnMoves, haps: Option<&Haps>) -> Result<Self, IllegalMove> {
        if haps.is_some() {
            return Err(IllegalMove::UnsupportedFeature);
        }
        if let Some(&other) = moves.0.keys().find(|&&role| role != self.active_role) {
            return Err(IllegalMove::IllegalRole {
                expected: self.active_role,
                actual: other,
            });
        }
        let &node = moves.0.get(&self.active_role).ok_or(IllegalMove::MissingMove {
            role: self.active_role,
        })?;
        self.apply_move(self.active_role, node)
    }

    /// Both roles start with one point per node. Every colored edge then adds
    /// `score_same_shape` or `score_different_shape` to its owner, depending
    /// on the shapes of its endpoints.
    pub fn score(&self) -> Score {
        let mut score = Score::uniform(self.graph.node_count() as i64);
        for (edge, owner) in self.coloring.edges() {
            let points = if self.graph.is_same_shape(edge) {
                self.score_same_shape
            } else {
                self.score_different_shape
            };
            score.add(owner, points);
        }
        score
    }

    /// The outcome of the match, or `None` while there are moves left.
    ///
    /// The match is won by the role with the greater score.
    pub fn result(&self) -> Option<MatchResult> {
        if self.legal_moves().is_some() {
            return None;
        }
        let margin = self.score().difference(Role::First);
        Some(MatchResult::zero_sum(margin, Role::First))
    }

    /// The color of the edge between `n1` and `n2`: the role that colored both
    /// endpoints, if they are adjacent and have the same color.
    pub fn edge_color(&self, n1: usize, n2: usize) -> Option<Role> {
        if !self.graph.are_adjacent(n1, n2) {
            return None;
        }
        let color = self.coloring.node(n1)?;
        (self.coloring.node(n2) == Some(color)).then_some(color)
    }
}
