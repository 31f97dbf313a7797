use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use connect_four_ai::ai::{GreedyPlayer, RandomPlayer, ScoringPlayer, Strategy};
use connect_four_ai::config::AppConfig;
use connect_four_ai::game::{GameOutcome, GameState, Player};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StrategyKind {
    Random,
    Scoring,
    Greedy,
}

/// Run Connect Four games between AI strategies, or play one yourself.
#[derive(Parser)]
#[command(name = "connect-four-ai", about = "Connect Four AI match runner")]
struct Cli {
    /// Strategy for Player One
    #[arg(long, value_enum, default_value = "greedy")]
    player_one: StrategyKind,

    /// Strategy for Player Two
    #[arg(long, value_enum, default_value = "random")]
    player_two: StrategyKind,

    /// Override the number of games in the series
    #[arg(long)]
    games: Option<usize>,

    /// Override the greedy search depth
    #[arg(long)]
    depth: Option<usize>,

    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Print the final board of every game
    #[arg(long)]
    show_boards: bool,

    /// Play against the greedy AI on the console
    #[arg(long)]
    interactive: bool,

    /// In interactive mode, let the AI move first
    #[arg(long)]
    ai_first: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(depth) = cli.depth {
        config.engine.search_depth = depth;
    }
    if let Some(games) = cli.games {
        config.series.games = games;
    }
    config.validate()?;

    if cli.interactive {
        run_interactive(&config, cli.ai_first)
    } else {
        run_series(&cli, &config)
    }
}

fn build_strategy(kind: StrategyKind, player: Player, depth: usize) -> Box<dyn Strategy> {
    match kind {
        StrategyKind::Random => Box::new(RandomPlayer::new(player)),
        StrategyKind::Scoring => Box::new(ScoringPlayer::new(player)),
        StrategyKind::Greedy => Box::new(GreedyPlayer::new(player, depth)),
    }
}

fn run_series(cli: &Cli, config: &AppConfig) -> Result<()> {
    let depth = config.engine.search_depth;
    // [Player One wins, Player Two wins, draws]
    let mut tallies = [0usize; 3];

    for game_number in 1..=config.series.games {
        // Fresh strategies per game: greedy trees must not outlive a game
        let mut one = build_strategy(cli.player_one, Player::One, depth);
        let mut two = build_strategy(cli.player_two, Player::Two, depth);
        let mut state = GameState::initial();

        while !state.is_terminal() {
            let column = match state.current_player() {
                Player::One => one.choose_column(&state),
                Player::Two => two.choose_column(&state),
            };
            state = state.apply(column)?;
        }

        match state.winner() {
            Some(GameOutcome::Winner(Player::One)) => {
                tallies[0] += 1;
                println!("game {game_number}: {} ({}) wins", Player::One.name(), one.name());
            }
            Some(GameOutcome::Winner(Player::Two)) => {
                tallies[1] += 1;
                println!("game {game_number}: {} ({}) wins", Player::Two.name(), two.name());
            }
            _ => {
                tallies[2] += 1;
                println!("game {game_number}: draw");
            }
        }
        if cli.show_boards {
            println!("{state}\n");
        }
    }

    println!(
        "\n{} games: Player One {} wins, Player Two {} wins, {} draws",
        config.series.games, tallies[0], tallies[1], tallies[2]
    );
    Ok(())
}

fn run_interactive(config: &AppConfig, ai_first: bool) -> Result<()> {
    let human = if ai_first { Player::Two } else { Player::One };
    let mut ai = GreedyPlayer::new(human.other(), config.engine.search_depth);
    let mut state = GameState::initial();

    println!("You are {} ({}).", human.name(), if human == Player::One { "X" } else { "O" });
    println!("Enter a column (0-6), or 'h' for a hint.\n");
    println!("{state}\n");

    while !state.is_terminal() {
        if state.current_player() == human {
            let Some(column) = read_human_column(&mut ai, &state)? else {
                continue;
            };
            match state.apply(column) {
                Ok(next) => state = next,
                Err(err) => {
                    println!("{err}, choose another column");
                    continue;
                }
            }
        } else {
            let column = ai.choose_column(&state);
            println!("AI plays column {column}");
            state = state.apply(column)?;
        }
        println!("{state}\n");
    }

    match state.winner() {
        Some(GameOutcome::Winner(winner)) if winner == human => println!("You win!"),
        Some(GameOutcome::Winner(_)) => println!("AI wins!"),
        _ => println!("Tie!"),
    }
    Ok(())
}

/// Read one command from stdin: a column number, or a hint request
/// (which prints the suggestion and returns `None`).
fn read_human_column(ai: &mut GreedyPlayer, state: &GameState) -> Result<Option<usize>> {
    print!("your move: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line).context("reading move")?;
    let input = line.trim();

    if input.eq_ignore_ascii_case("h") || input.eq_ignore_ascii_case("hint") {
        println!("hint: column {}", ai.hint_opponent(state));
        return Ok(None);
    }

    match input.parse::<usize>() {
        Ok(column) => Ok(Some(column)),
        Err(_) => {
            println!("please enter a number between 0 and 6, or 'h'");
            Ok(None)
        }
    }
}
