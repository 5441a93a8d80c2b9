use std::collections::HashMap;
use std::path::PathBuf;

use clap::Parser;
use colograph::{RandomGameParams, DEFAULT_EDGE_COUNT, DEFAULT_NODE_COUNT, DEFAULT_SHAPE_COUNT};
use itertools::Itertools;
use judge::{new_player, play_game, GameResult, GameSource, Player, PlayerKind, Recorder};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// Kinds of the players; every pair of them plays a match
    #[clap(num_args(2..), value_delimiter = ' ', value_enum)]
    players: Vec<PlayerKind>,

    /// How many games to play per match
    #[arg(
        short,
        long,
        default_value_t = 100,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    num_games: usize,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Play every game on the graph in this JSON file instead of on random graphs
    #[arg(short, long)]
    game: Option<PathBuf>,

    /// Number of nodes of random graphs
    #[arg(long, default_value_t = DEFAULT_NODE_COUNT)]
    node_count: usize,

    /// Number of edges of random graphs
    #[arg(long, default_value_t = DEFAULT_EDGE_COUNT)]
    edge_count: usize,

    /// Number of different shapes in random graphs
    #[arg(long, default_value_t = DEFAULT_SHAPE_COUNT)]
    shape_count: usize,

    /// Points for a colored edge between nodes of the same shape, in random graphs
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    score_same_shape: i32,

    /// Points for a colored edge between nodes of different shapes, in random graphs
    #[arg(long, default_value_t = -1, allow_negative_numbers = true)]
    score_different_shape: i32,

    /// Stop the tournament as soon as one player makes an illegal move
    #[arg(short, long, default_value_t = false)]
    stop_on_illegal_move: bool,

    /// Record the games as JSON files into this directory
    #[arg(short, long)]
    record_games_to_directory: Option<PathBuf>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

#[derive(Default)]
struct MatchScore {
    wins: [usize; 2],
    illegal_moves: [usize; 2],
    ties: usize,
    /// Sum of the winning margins of each player.
    margins: [i64; 2],
}

impl MatchScore {
    /// Win percentages of both players and the tie percentage, or `None` if
    /// no game was completed.
    fn percentages(&self) -> Option<[f32; 3]> {
        let num_games = self.wins[0] + self.wins[1] + self.ties;
        if num_games == 0 {
            return None;
        }
        let percentage = |count: usize| count as f32 / num_games as f32 * 100.0;
        Some([
            percentage(self.wins[0]),
            percentage(self.wins[1]),
            percentage(self.ties),
        ])
    }
}

fn play_matchup(
    player_1: &mut dyn Player,
    player_2: &mut dyn Player,
    source: &GameSource,
    num_games: usize,
    rng: &mut StdRng,
    stop_on_illegal_move: bool,
    recorder: &mut Option<Recorder>,
) -> anyhow::Result<MatchScore> {
    let player_names = [player_1.name().to_owned(), player_2.name().to_owned()];
    let mut match_score = MatchScore::default();

    for game_idx in 0..num_games {
        let initial = source.new_game(rng);
        match play_game(rng, &initial, [&mut *player_1, &mut *player_2], recorder)? {
            GameResult::WonByPlayer { player_idx, margin } => {
                debug!(winner = player_names[player_idx], margin, game_idx);
                match_score.wins[player_idx] += 1;
                match_score.margins[player_idx] += margin;
            }
            GameResult::Tie => {
                debug!(game_idx, "Tie");
                match_score.ties += 1;
            }
            GameResult::IllegalMoveByPlayer { player_idx, err } => {
                info!(
                    player = player_names[player_idx],
                    game_idx,
                    %err,
                    "Illegal move by player"
                );
                if stop_on_illegal_move {
                    break;
                } else {
                    match_score.wins[1 - player_idx] += 1;
                    match_score.illegal_moves[player_idx] += 1;
                }
            }
        }
    }

    let paren_1 = if match_score.illegal_moves[1] > 0 {
        format!(
            " ({} through illegal moves by player 2)",
            match_score.illegal_moves[1]
        )
    } else {
        String::new()
    };
    let paren_2 = if match_score.illegal_moves[0] > 0 {
        format!(
            " ({} through illegal moves by player 1)",
            match_score.illegal_moves[0]
        )
    } else {
        String::new()
    };
    eprintln!(
        "End result:\n- {} wins by {}{} (total margin {})\n- {} wins by {}{} (total margin {})\n- {} ties",
        match_score.wins[0],
        player_names[0],
        paren_1,
        match_score.margins[0],
        match_score.wins[1],
        player_names[1],
        paren_2,
        match_score.margins[1],
        match_score.ties
    );

    Ok(match_score)
}

// prints an upper triangular matrix of the results of the tournament
fn print_tournament_results(
    player_names: &[String],
    match_results: &HashMap<(usize, usize), MatchScore>,
) {
    println!("\nTournament results (p1 win %, p2 win %, tie %):\n");
    print!(" {:19} |", "p1 ↓           p2 →");
    for j in (0..player_names.len()).rev() {
        print!(" {:19} |", player_names[j]);
    }
    println!();
    for i in 0..player_names.len() {
        for _ in 0..player_names.len() - i + 1 {
            print!("---------------------|");
        }
        println!();
        print!(" {:19} |", player_names[i]);
        for j in (0..player_names.len()).rev() {
            if i >= j {
                print!("    ");
            } else if let Some([win_1, win_2, tie]) = match_results
                .get(&(i, j))
                .and_then(MatchScore::percentages)
            {
                print!("{:5.1}% {:5.1}% {:5.1}% |", win_1, win_2, tie);
            } else {
                print!(" {:19} |", "N/A");
            }
        }
        println!();
    }
    println!("---------------------|");
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let source = match &args.game {
        Some(path) => GameSource::load(path)?,
        None => GameSource::Random(RandomGameParams {
            node_count: args.node_count,
            edge_count: args.edge_count,
            shape_count: args.shape_count,
            score_same_shape: args.score_same_shape,
            score_different_shape: args.score_different_shape,
        }),
    };

    let mut recorder = if let Some(dir_path) = args.record_games_to_directory {
        Some(Recorder::new(dir_path)?)
    } else {
        None
    };

    let player_names: Vec<String> = args
        .players
        .iter()
        .enumerate()
        .map(|(idx, kind)| format!("{}-{}", kind, idx + 1))
        .collect();

    let matchups: Vec<(usize, usize)> = (0..args.players.len()).tuple_combinations().collect();

    let mut match_results: HashMap<(usize, usize), MatchScore> = HashMap::new();
    for (i1, i2) in matchups {
        let mut player_1 = new_player(args.players[i1], player_names[i1].clone(), &mut rng);
        let mut player_2 = new_player(args.players[i2], player_names[i2].clone(), &mut rng);

        let match_score = play_matchup(
            player_1.as_mut(),
            player_2.as_mut(),
            &source,
            args.num_games,
            &mut rng,
            args.stop_on_illegal_move,
            &mut recorder,
        )?;

        match_results.insert((i1, i2), match_score);
    }

    if args.players.len() > 2 {
        print_tournament_results(&player_names, &match_results);
    }

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_games_is_rejected() {
        assert!(Args::try_parse_from(["judge", "random", "greedy", "-n", "0"]).is_err());
        let args = Args::try_parse_from(["judge", "random", "greedy", "-n", "3"]).unwrap();
        assert_eq!(args.num_games, 3);
        assert_eq!(args.players, vec![PlayerKind::Random, PlayerKind::Greedy]);
    }

    #[test]
    fn percentages_without_games() {
        assert_eq!(MatchScore::default().percentages(), None);
        let score = MatchScore {
            wins: [1, 2],
            ties: 1,
            ..MatchScore::default()
        };
        assert_eq!(score.percentages(), Some([25.0, 50.0, 25.0]));
    }
}
