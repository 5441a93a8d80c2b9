use quickcheck::{Arbitrary, Gen};

use crate::{GameConfig, GameState, Role, Shape, SHAPE_PALETTE};

impl Arbitrary for Role {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&Role::ALL).unwrap()
    }
}

impl Arbitrary for Shape {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&SHAPE_PALETTE).unwrap()
    }
}

/// A valid configuration with up to ten nodes.
///
/// Edges are listed under either endpoint, sometimes under both.
impl Arbitrary for GameConfig {
    fn arbitrary(g: &mut Gen) -> Self {
        let node_count = 1 + usize::from(u8::arbitrary(g) % 10);
        let mut edges = vec![Vec::new(); node_count];
        for (n1, adjs) in edges.iter_mut().enumerate() {
            for n2 in 0..node_count {
                if n1 != n2 && u8::arbitrary(g) % 4 == 0 {
                    adjs.push(n2);
                }
            }
        }
        let shapes = (0..node_count).map(|_| Shape::arbitrary(g)).collect();

        GameConfig {
            edges,
            shapes,
            score_same_shape: i32::from(i8::arbitrary(g) % 5),
            score_different_shape: i32::from(i8::arbitrary(g) % 5),
            active_role: Option::<Role>::arbitrary(g),
        }
    }
}

/// A match played to the end with arbitrary moves.
#[derive(Clone, Debug)]
pub struct Playout {
    pub config: GameConfig,
    /// Which of the legal moves to pick at each turn, modulo their number.
    pub choices: Vec<u8>,
}

impl Arbitrary for Playout {
    fn arbitrary(g: &mut Gen) -> Self {
        Playout {
            config: GameConfig::arbitrary(g),
            choices: Vec::<u8>::arbitrary(g),
        }
    }
}

impl Playout {
    /// All states of the match, from the initial one to the terminal one.
    pub fn states(&self) -> Vec<GameState> {
        let mut state = GameState::new(self.config.clone()).unwrap();
        let mut choices = self.choices.iter().copied().cycle();
        let mut states = vec![state.clone()];
        while let Some(moves) = state.legal_moves() {
            let choice = usize::from(choices.next().unwrap_or(0));
            let node = moves.nodes[choice % moves.nodes.len()];
            state = state.apply_move(moves.role, node).unwrap();
            states.push(state.clone());
        }
        states
    }
}
