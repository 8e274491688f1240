//! Memory Game - terminal front end
//!
//! Reads clicks and commands from stdin and draws the board as text.

use std::io::{self, BufRead, Write};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use memory_game::{
    core::config::default_set_count, render::TITLE, CardIndex, ClickOutcome, GameConfig,
    IgnoreReason, MemoryGame, TextRenderer, MAX_SETS,
};
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "memory")]
#[command(about = "Memory Game - match pairs of face-down cards", long_about = None)]
struct Cli {
    /// Number of card sets (pairs) on the board
    #[arg(long, short = 's', default_value_t = default_set_count(MAX_SETS) as u16,
          value_parser = clap::value_parser!(u16).range(1..=MAX_SETS as i64))]
    sets: u16,

    /// Random seed for deterministic decks (default: random)
    #[arg(long)]
    seed: Option<u64>,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

/// One line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Click(i32, i32),
    Card(u16),
    NewGame(Option<usize>),
    Wait,
    Help,
    Quit,
}

impl std::str::FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> std::result::Result<Self, Self::Err> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let number = |s: &str| s.parse::<i64>().map_err(|_| format!("not a number: '{s}'"));

        match words.as_slice() {
            ["q" | "quit"] => Ok(Command::Quit),
            ["h" | "help" | "?"] => Ok(Command::Help),
            ["w" | "wait"] => Ok(Command::Wait),
            ["n" | "new"] => Ok(Command::NewGame(None)),
            ["n" | "new", sets] => {
                let sets = usize::try_from(number(*sets)?).map_err(|_| "set count must be positive".to_string())?;
                Ok(Command::NewGame(Some(sets)))
            }
            ["c" | "card", index] => {
                let index = u16::try_from(number(*index)?).map_err(|_| format!("no card '{index}'"))?;
                Ok(Command::Card(index))
            }
            [x, y] => {
                let x = i32::try_from(number(*x)?).map_err(|_| format!("x out of range: '{x}'"))?;
                let y = i32::try_from(number(*y)?).map_err(|_| format!("y out of range: '{y}'"))?;
                Ok(Command::Click(x, y))
            }
            _ => Err(format!("unknown command '{}' (try 'help')", line.trim())),
        }
    }
}

const HELP: &str = "\
Commands:
  <x> <y>      click the play surface at pixel (x, y)
  card <i>     click card number i (c <i>)
  new [sets]   start a new game (n)
  wait         let pending animations finish (w)
  quit         leave the game (q)";

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let seed = cli.seed.unwrap_or_else(rand::random);
    let config = GameConfig::new(usize::from(cli.sets));
    let renderer = TextRenderer::new(config.layout.cards_per_row);
    let mut game = MemoryGame::new(config, seed, renderer).context("failed to start game")?;
    info!(seed, sets = cli.sets, "starting");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    writeln!(stdout, "{TITLE} (seed {seed}) - type 'help' for commands")?;
    writeln!(stdout, "{}", game.renderer().frame())?;

    let mut last_tick = Instant::now();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read input")?;
        if line.trim().is_empty() {
            continue;
        }

        let now = Instant::now();
        game.advance(now - last_tick);
        last_tick = now;

        match line.parse::<Command>() {
            Ok(command) => run_command(&mut game, command, &mut stdout)?,
            Err(message) => writeln!(stdout, "{message}")?,
        }
        if !game.is_running() {
            break;
        }

        settle(&mut game);
        last_tick = Instant::now();

        for message in game.renderer_mut().take_messages() {
            writeln!(stdout, "\n{TITLE}\n{message}\n")?;
        }
        writeln!(stdout, "{}", game.renderer().frame())?;
        stdout.flush()?;
    }

    Ok(())
}

fn run_command(game: &mut MemoryGame<TextRenderer>, command: Command, out: &mut impl Write) -> Result<()> {
    debug!(?command, "input");
    match command {
        Command::Click(x, y) => {
            let outcome = game.click(x, y);
            report(outcome, out)?;
        }
        Command::Card(index) => {
            let outcome = game.select(CardIndex::new(index));
            report(outcome, out)?;
        }
        Command::NewGame(sets) => {
            let sets = sets.unwrap_or(game.config().set_count);
            if let Err(err) = game.new_game(sets) {
                writeln!(out, "{err}")?;
            }
        }
        Command::Wait => {}
        Command::Help => writeln!(out, "{HELP}")?,
        Command::Quit => game.quit(),
    }
    Ok(())
}

fn report(outcome: ClickOutcome, out: &mut impl Write) -> Result<()> {
    match outcome {
        ClickOutcome::Ignored(IgnoreReason::OffBoard) => writeln!(out, "That is not a card.")?,
        ClickOutcome::Ignored(IgnoreReason::AlreadyRevealed) => writeln!(out, "That card is already face up.")?,
        ClickOutcome::Ignored(IgnoreReason::Stopped) => writeln!(out, "The game is over.")?,
        ClickOutcome::FirstGuess { index, value } => writeln!(out, "{index} shows {value}.")?,
        ClickOutcome::Pair(pair) if pair.matched => {
            writeln!(out, "{} and {} both show {}. Match!", pair.first, pair.second, pair.first_value)?
        }
        ClickOutcome::Pair(pair) => writeln!(
            out,
            "{} shows {}, {} shows {}. No match.",
            pair.first, pair.first_value, pair.second, pair.second_value
        )?,
    }
    Ok(())
}

/// Wait out pending deferred effects so the next frame shows them.
fn settle(game: &mut MemoryGame<TextRenderer>) {
    while let Some(due) = game.next_due_in() {
        std::thread::sleep(due);
        game.advance(due);
    }
}
