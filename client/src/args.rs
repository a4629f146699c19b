use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

/// Plays Conway's Game of Life in the terminal.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Interactively create a board.
    #[arg(short, long, conflicts_with = "random")]
    pub create_board: bool,

    /// Path to a JSON file holding the board as nested boolean arrays.
    #[arg(short, long, value_name = "PATH", default_value = "boards/glider.json")]
    pub board_json: PathBuf,

    /// Start from a random board with this many alive cells.
    #[arg(short, long, value_name = "ALIVE")]
    pub random: Option<usize>,

    /// Side length of a random board.
    #[arg(short, long, default_value_t = 20)]
    pub side: usize,

    /// Time between generations.
    #[arg(short, long, value_name = "MS", default_value_t = 100)]
    pub interval_ms: u64,

    /// Stop after this many generations instead of running forever.
    #[arg(short, long)]
    pub generations: Option<u64>,

    /// Log debug output, including every scheduled birth and death.
    #[arg(short, long)]
    pub debug: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardSource {
    Interactive,
    Random { side_len: usize, alive_cells: usize },
    File(PathBuf),
}

impl Args {
    pub fn board_source(&self) -> BoardSource {
        if self.create_board {
            BoardSource::Interactive
        } else if let Some(alive_cells) = self.random {
            BoardSource::Random {
                side_len: self.side,
                alive_cells,
            }
        } else {
            BoardSource::File(self.board_json.clone())
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        if self.debug {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}
