use std::io;
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::Rng;
use ratatui::{backend::CrosstermBackend, Terminal};

use connect_four::ai::{Agent, MinimaxAgent};
use connect_four::config::AppConfig;
use connect_four::game::{Difficulty, GameMode, GameOutcome, GameState, Player};
use connect_four::ui::App;

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect4", about = "Connect Four with a minimax AI opponent")]
struct Cli {
    /// Game mode: pvp, pvai, or aivai (skips the menu)
    #[arg(long)]
    mode: Option<String>,

    /// AI difficulty: easy, medium, or hard
    #[arg(long, default_value = "medium")]
    difficulty: String,

    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Play an AI vs AI game on stdout, without the TUI
    #[arg(long)]
    headless: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    let difficulty = match cli.difficulty.as_str() {
        "easy" => Difficulty::Easy,
        "medium" => Difficulty::Medium,
        "hard" => Difficulty::Hard,
        other => bail!("unknown difficulty '{}' (expected 'easy', 'medium', or 'hard')", other),
    };

    if cli.headless {
        return run_headless(&config, difficulty);
    }

    let mode = match cli.mode.as_deref() {
        None => None,
        Some("pvp") => Some(GameMode::HumanVsHuman),
        Some("pvai") => Some(GameMode::HumanVsAi),
        Some("aivai") => Some(GameMode::AiVsAi),
        Some(other) => bail!("unknown mode '{}' (expected 'pvp', 'pvai', or 'aivai')", other),
    };

    let mut app = match mode {
        Some(mode) => App::with_mode(config, mode, difficulty),
        None => App::new(config),
    };

    run_tui(&mut app).context("running the terminal UI")
}

fn run_tui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res.map_err(Into::into)
}

/// Two minimax agents play each other, printing the board after each move.
fn run_headless(config: &AppConfig, difficulty: Difficulty) -> Result<()> {
    let depth = difficulty.depth(&config.ai);
    let mut agents = [MinimaxAgent::new(depth), MinimaxAgent::new(depth)];

    let starter = if config.game.random_start && rand::rng().random_bool(0.5) {
        Player::Yellow
    } else {
        Player::Red
    };
    let mut state = GameState::with_starting_player(starter);

    println!("{} starts (search depth {})", starter.name(), depth);
    println!("{}", state.board());

    while !state.is_terminal() {
        let player = state.current_player();
        let column = agents[player.index()].select_action(&state);
        state
            .apply_move_mut(column)
            .map_err(|e| anyhow!("agent played an illegal move: {e:?}"))?;

        println!("{} plays column {}", player.name(), column + 1);
        println!("{}", state.board());
    }

    match state.outcome() {
        Some(GameOutcome::Winner(player)) => println!("{} wins!", player.name()),
        Some(GameOutcome::Draw) => println!("Draw!"),
        None => unreachable!("terminal game has an outcome"),
    }

    Ok(())
}
