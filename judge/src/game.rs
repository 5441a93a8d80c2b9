use colograph::{GameState, IllegalMove, Role};
use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, trace};

use crate::player::Player;
use crate::recording::Recorder;
use crate::visualization::describe_state;

pub enum GameResult {
    WonByPlayer { player_idx: usize, margin: i64 },
    Tie,
    IllegalMoveByPlayer { player_idx: usize, err: IllegalMove },
}

/// Plays one match from `initial` until every node is colored.
///
/// Returns an error only on recording failure, not when an illegal move is
/// played.
pub fn play_game(
    rng: &mut StdRng,
    initial: &GameState,
    mut players: [&mut dyn Player; 2],
    recorder: &mut Option<Recorder>,
) -> anyhow::Result<GameResult> {
    // Randomly pick which player plays First. seats[role.index()] is a player index.
    let seats: [usize; 2] = if rng.gen::<bool>() { [1, 0] } else { [0, 1] };
    debug!(
        first = players[seats[0]].name(),
        second = players[seats[1]].name(),
        nodes = initial.graph().node_count(),
        edges = initial.graph().edge_count(),
        "New game"
    );

    if let Some(rec) = recorder {
        let names = Role::ALL.map(|role| String::from(players[seats[role.index()]].name()));
        rec.start_game(initial, names);
    }

    let mut state = initial.clone();
    while let Some(moves) = state.legal_moves() {
        let player_idx = seats[moves.role.index()];
        let node = players[player_idx].choose_move(&state, &moves);
        trace!(player = players[player_idx].name(), role = %moves.role, node, "Move");
        if let Some(rec) = recorder {
            rec.store_move(moves.role, node);
        }
        state = match state.apply_move(moves.role, node) {
            Ok(next) => next,
            Err(err) => return Ok(GameResult::IllegalMoveByPlayer { player_idx, err }),
        };
    }

    let Some(result) = state.result() else {
        anyhow::bail!("Match has no moves left, but no result either");
    };
    debug!("Final position:\n{}", describe_state(&state));

    if let Some(rec) = recorder {
        let path = rec.write_game_recording(&state, result)?;
        trace!(path = %path.display(), "Recorded game");
    }

    let game_result = match result.winner() {
        Some(role) => GameResult::WonByPlayer {
            player_idx: seats[role.index()],
            margin: result.payoff(role),
        },
        None => GameResult::Tie,
    };
    Ok(game_result)
}

#[cfg(test)]
mod tests {
    use colograph::{random_game, GameConfig, Moves, RandomGameParams};
    use rand::SeedableRng;

    use super::*;
    use crate::player::{new_player, PlayerKind};

    /// Always plays node 0.
    struct Stubborn;

    impl Player for Stubborn {
        fn name(&self) -> &str {
            "stubborn"
        }

        fn choose_move(&mut self, _state: &GameState, _moves: &Moves) -> usize {
            0
        }
    }

    #[test]
    fn games_run_to_completion() {
        let mut rng = StdRng::seed_from_u64(17);
        let mut random = new_player(PlayerKind::Random, String::from("random"), &mut rng);
        let mut greedy = new_player(PlayerKind::Greedy, String::from("greedy"), &mut rng);
        for _ in 0..20 {
            let initial = random_game(RandomGameParams::default(), &mut rng);
            let result = play_game(
                &mut rng,
                &initial,
                [random.as_mut(), greedy.as_mut()],
                &mut None,
            )
            .unwrap();
            match result {
                GameResult::WonByPlayer { player_idx, margin } => {
                    assert!(player_idx < 2);
                    assert!(margin > 0);
                }
                GameResult::Tie => {}
                GameResult::IllegalMoveByPlayer { .. } => {
                    panic!("Built-in players play legal moves")
                }
            }
        }
    }

    #[test]
    fn repeated_node_is_an_illegal_move() {
        let mut rng = StdRng::seed_from_u64(2);
        let initial = GameState::new(GameConfig::default()).unwrap();
        let (mut a, mut b) = (Stubborn, Stubborn);
        let result = play_game(&mut rng, &initial, [&mut a, &mut b], &mut None).unwrap();
        match result {
            GameResult::IllegalMoveByPlayer { err, .. } => {
                assert_eq!(
                    err,
                    IllegalMove::AlreadyColored {
                        node: 0,
                        owner: Role::First
                    }
                );
                assert_eq!(err.to_string(), "Node 0 has already been colored by First");
            }
            _ => panic!("Expected an illegal move"),
        }
    }
}
