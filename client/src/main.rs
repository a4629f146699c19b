use std::{io, time::Duration};

use anyhow::Context;
use args::{Args, BoardSource};
use clap::Parser;
use liblife::{Game, GameConfig, board::GameBoard};
use log::info;
use renderer::{TerminalRenderer, sleeper::Sleeper};
use simple_logger::SimpleLogger;

mod args;
mod cli;
mod renderer;
mod ticker;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    SimpleLogger::new()
        .with_level(args.log_level())
        .init()
        .context("Couldn't initialize logger")?;

    let board = load_board(args.board_source())?;
    info!(
        "Starting with a {0}x{0} board, {1} alive",
        board.side_len(),
        board.alive_count()
    );

    let mut game = Game::new(
        board,
        GameConfig {
            trace_fates: args.debug,
        },
    );

    let mut renderer = TerminalRenderer::new(io::stdout());
    let mut sleeper = Sleeper::new(Duration::from_millis(args.interval_ms));

    ticker::run(&mut game, &mut renderer, &mut sleeper, args.generations)
}

fn load_board(source: BoardSource) -> anyhow::Result<GameBoard> {
    match source {
        BoardSource::Interactive => {
            let mut input = io::stdin().lock();
            cli::interactive_create_board(&mut input, &mut io::stdout())
        }
        BoardSource::Random {
            side_len,
            alive_cells,
        } => Ok(GameBoard::new_random(side_len, alive_cells)?),
        BoardSource::File(path) => GameBoard::load(&path)
            .with_context(|| format!("Loading board from {}", path.display())),
    }
}
