use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::Role;

/// The moves available in a position. Only the active role ever has moves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Moves {
    pub role: Role,
    /// Uncolored nodes, in ascending order. Never empty.
    pub nodes: Vec<usize>,
}

/// The moves submitted for one turn, keyed by the role making them.
///
/// Only one role moves per turn, so a valid `TurnMoves` has exactly one entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnMoves(pub BTreeMap<Role, usize>);

impl TurnMoves {
    pub fn single(role: Role, node: usize) -> Self {
        Self(BTreeMap::from([(role, node)]))
    }
}

/// Outcomes of chance events, keyed by event name.
///
/// Colograph is deterministic, so supplying any haps is an error.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Haps(pub BTreeMap<String, usize>);
