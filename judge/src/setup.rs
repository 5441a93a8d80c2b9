use std::path::Path;

use anyhow::Context;
use colograph::{random_game, GameConfig, GameState, RandomGameParams};
use rand::rngs::StdRng;

/// Where the games of a tournament come from.
pub enum GameSource {
    /// Every game is played on the same, fixed graph.
    Fixed(GameState),
    /// Every game gets a freshly generated graph.
    Random(RandomGameParams),
}

impl GameSource {
    /// Reads a [`GameConfig`] from a JSON file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read game config '{}'", path.display()))?;
        Self::parse(&contents)
            .with_context(|| format!("Invalid game config '{}'", path.display()))
    }

    pub fn parse(json: &str) -> anyhow::Result<Self> {
        let config: GameConfig = serde_json::from_str(json)?;
        Ok(Self::Fixed(GameState::new(config)?))
    }

    pub fn new_game(&self, rng: &mut StdRng) -> GameState {
        match self {
            GameSource::Fixed(state) => state.clone(),
            GameSource::Random(params) => random_game(*params, rng),
        }
    }
}
