//! Evaluation functions for search algorithms that play Colograph.

use crate::{GameState, Role};

/// The score difference from `role`'s point of view, scaled by the number of
/// nodes so that games on graphs of different sizes give comparable values.
pub fn score_difference(state: &GameState, role: Role) -> f64 {
    let difference = state.score().difference(role);
    difference as f64 / (2.0 * state.graph().node_count() as f64)
}
