use colograph::heuristics::score_difference;
use colograph::{GameState, Moves};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::trace;

/// The built-in strategies.
#[derive(Copy, Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum PlayerKind {
    /// Colors a uniformly random uncolored node.
    Random,
    /// Colors the node that maximizes the score difference right after the move.
    Greedy,
}

impl std::fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerKind::Random => write!(f, "random"),
            PlayerKind::Greedy => write!(f, "greedy"),
        }
    }
}

/// Something that can pick moves in a match.
pub trait Player {
    fn name(&self) -> &str;

    /// Picks one of `moves.nodes`. Returning anything else is an illegal move.
    fn choose_move(&mut self, state: &GameState, moves: &Moves) -> usize;
}

/// Creates a player of the given kind. Random players get their own RNG,
/// seeded from `rng`.
pub fn new_player(kind: PlayerKind, name: String, rng: &mut StdRng) -> Box<dyn Player> {
    match kind {
        PlayerKind::Random => Box::new(RandomPlayer {
            name,
            rng: StdRng::seed_from_u64(rng.gen()),
        }),
        PlayerKind::Greedy => Box::new(GreedyPlayer { name }),
    }
}

pub struct RandomPlayer {
    name: String,
    rng: StdRng,
}

impl Player for RandomPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&mut self, _state: &GameState, moves: &Moves) -> usize {
        moves.nodes[self.rng.gen_range(0..moves.nodes.len())]
    }
}

/// Looks a single move ahead, using the normalized score difference.
///
/// Ties go to the smallest node.
pub struct GreedyPlayer {
    name: String,
}

impl Player for GreedyPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&mut self, state: &GameState, moves: &Moves) -> usize {
        let mut best_node = moves.nodes[0];
        let mut best_value = f64::NEG_INFINITY;
        for &node in &moves.nodes {
            let Ok(next) = state.apply_move(moves.role, node) else {
                continue;
            };
            let value = score_difference(&next, moves.role);
            if value > best_value {
                best_node = node;
                best_value = value;
            }
        }
        trace!(player = %self.name, node = best_node, value = best_value, "Greedy choice");
        best_node
    }
}
