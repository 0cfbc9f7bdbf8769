use std::io;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use lines_of_action::{Game, GameConfig, MoveOutcome, MoveRules, Side};
use lines_of_action::config::DEFAULT_SEED;

/// Play Lines of Action in the terminal.
#[derive(Parser, Debug)]
#[command(name = "loa")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Board width
    #[arg(long, default_value_t = 8)]
    width: i32,

    /// Board height
    #[arg(long, default_value_t = 8)]
    height: i32,

    /// Forbid moves that jump over enemy pieces
    #[arg(long)]
    block_paths: bool,

    /// Forbid landing on a piece of the mover's own side
    #[arg(long)]
    protect_own: bool,

    /// Seed for the board hash table
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = GameConfig {
        width: cli.width,
        height: cli.height,
        rules: MoveRules {
            block_paths: cli.block_paths,
            protect_own: cli.protect_own,
        },
        zobrist_seed: cli.seed,
    };
    let mut game = Game::new(config)?;
    info!(?config, "starting");

    println!("Welcome to Lines of Action!\n");
    println!("Enter moves in the following format:");
    println!("start_x start_y end_x end_y");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();
    loop {
        println!();
        game.display();
        println!(
            "A: {} pieces, B: {} pieces",
            game.piece_count(Side::A),
            game.piece_count(Side::B)
        );

        let Some((origin, destination, outcome)) = game.human_move(&mut input, &mut stdout)? else {
            break;
        };
        match outcome {
            MoveOutcome::Capture { captured } => {
                println!("{} -> {}: captured piece {}", origin, destination, captured)
            }
            _ => println!("{} -> {}", origin, destination),
        }
    }

    println!("\nGoodbye!");
    Ok(())
}
