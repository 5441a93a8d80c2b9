use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use colograph::{GameSnapshot, GameState, MatchResult, Role, Score};
use serde::{Deserialize, Serialize};

/// Writes every finished game into its own JSON file.
pub struct Recorder {
    num: usize,
    directory: PathBuf,
    current: Option<GameRecording>,
}

impl Recorder {
    pub fn new(directory: PathBuf) -> anyhow::Result<Self> {
        if !directory.is_dir() {
            anyhow::bail!("Directory '{}' does not exist", directory.display());
        }
        Ok(Self {
            num: 1,
            directory,
            current: None,
        })
    }

    /// Starts recording a new game, dropping any unfinished one.
    pub fn start_game(&mut self, initial: &GameState, players: [String; 2]) {
        self.current = Some(GameRecording {
            players,
            initial: initial.snapshot(),
            moves: Vec::new(),
            final_score: None,
            margin: None,
        });
    }

    pub fn store_move(&mut self, role: Role, node: usize) {
        if let Some(recording) = &mut self.current {
            recording.moves.push(RecordedMove { role, node });
        }
    }

    /// Writes the current game and returns the path of the file.
    pub fn write_game_recording(
        &mut self,
        end: &GameState,
        result: MatchResult,
    ) -> anyhow::Result<PathBuf> {
        let Some(mut recording) = self.current.take() else {
            anyhow::bail!("No game is being recorded");
        };
        recording.final_score = Some(end.score());
        recording.margin = Some(result.margin());

        let filepath = self.directory.join(format!("game_{:0>6}.json", self.num));
        let writer = BufWriter::new(File::create(&filepath)?);
        serde_json::to_writer_pretty(writer, &recording)?;
        self.num += 1;
        Ok(filepath)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GameRecording {
    /// Player names, indexed by role.
    pub players: [String; 2],
    pub initial: GameSnapshot,
    pub moves: Vec<RecordedMove>,
    pub final_score: Option<Score>,
    /// From the first player's point of view.
    pub margin: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RecordedMove {
    pub role: Role,
    pub node: usize,
}

#[cfg(test)]
mod tests {
    use colograph::GameConfig;

    use super::*;

    #[test]
    fn recording_replays_to_the_same_result() {
        let directory = std::env::temp_dir().join(format!("judge-recorder-{}", std::process::id()));
        std::fs::create_dir_all(&directory).unwrap();
        let mut recorder = Recorder::new(directory.clone()).unwrap();

        let initial = GameState::new(GameConfig::default()).unwrap();
        recorder.start_game(&initial, [String::from("a"), String::from("b")]);
        let mut state = initial.clone();
        for node in [3, 0, 1, 2] {
            recorder.store_move(state.active_role(), node);
            state = state.apply_move(state.active_role(), node).unwrap();
        }
        let path = recorder
            .write_game_recording(&state, state.result().unwrap())
            .unwrap();

        let recording: GameRecording =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        let mut replayed = GameState::from_snapshot(recording.initial).unwrap();
        for RecordedMove { role, node } in recording.moves {
            replayed = replayed.apply_move(role, node).unwrap();
        }
        assert_eq!(replayed, state);
        assert_eq!(recording.final_score, Some(state.score()));
        assert_eq!(recording.margin, Some(state.result().unwrap().margin()));
        assert!(path.ends_with("game_000001.json"));

        std::fs::remove_dir_all(&directory).unwrap();
    }

    #[test]
    fn missing_directory() {
        assert!(Recorder::new(PathBuf::from("/does/not/exist/at/all")).is_err());
    }
}
