use std::io::{BufRead, Write};

use anyhow::{Context, bail};
use colored::Colorize;
use liblife::{
    board::{GameBoard, TileState},
    error::BoardError,
    pos::Position,
};
use log::info;

/// Builds a board from line input: a side length, then live cell addresses, then
/// an optional save path.
pub fn interactive_create_board<R, W>(input: &mut R, output: &mut W) -> anyhow::Result<GameBoard>
where
    R: BufRead,
    W: Write,
{
    let mut board = loop {
        write!(output, "How many lines on each side is this board: ")?;
        output.flush()?;

        let Some(line) = read_line(input)? else {
            bail!("No board size given");
        };

        let side_len = match line.parse::<usize>() {
            Ok(side_len) => side_len,
            Err(e) => {
                writeln!(output, "{}", format!("! {line:?} isn't a size: {e}").red())?;
                continue;
            }
        };

        match GameBoard::try_new(side_len) {
            Ok(board) => break board,
            Err(e) => writeln!(output, "{}", format!("! {e}").red())?,
        }
    };
    let side_len = board.side_len();

    writeln!(
        output,
        "Add \"live\" cell addresses in the form \"a, b\" in the range {side_len}x{side_len} (non-inclusive)"
    )?;
    writeln!(output, "(Enter -1 or a blank to continue)")?;

    while let Some(line) = read_line(input)? {
        if line.is_empty() || line == "-1" {
            break;
        }

        let address = match parse_address(&line) {
            Ok(address) => address,
            Err(e) => {
                writeln!(output, "{}", format!("! {e:#}").red())?;
                continue;
            }
        };

        let Some(pos) = to_position(address) else {
            writeln!(output, "{}", range_message(side_len).yellow())?;
            continue;
        };

        match board.set(pos, TileState::Alive) {
            Ok(TileState::Alive) => {
                writeln!(output, "{}", format!("{pos} is already alive!").yellow())?
            }
            Ok(TileState::Dead) => write!(output, "{board}")?,
            Err(BoardError::OutOfBounds { .. }) => {
                writeln!(output, "{}", range_message(side_len).yellow())?
            }
            Err(e) => return Err(e.into()),
        }
    }

    loop {
        write!(output, "Where should this board be saved? (blank for no save): ")?;
        output.flush()?;

        let Some(save_path) = read_line(input)?.filter(|path| !path.is_empty()) else {
            break;
        };

        match board.save(&save_path) {
            Ok(()) => {
                info!("Saved board to {save_path}");
                break;
            }
            Err(e) => writeln!(
                output,
                "{}",
                format!("! Couldn't save to {save_path}: {e:#}").red()
            )?,
        }
    }

    Ok(board)
}

/// Reads one trimmed line, `None` at end of input.
fn read_line<R>(input: &mut R) -> anyhow::Result<Option<String>>
where
    R: BufRead,
{
    let mut buffer = String::new();

    if input.read_line(&mut buffer).context("Unable to read line")? == 0 {
        return Ok(None);
    }

    Ok(Some(buffer.trim().to_owned()))
}

fn parse_address(line: &str) -> anyhow::Result<[isize; 2]> {
    let (row, col) = line
        .split_once(',')
        .context("Addresses take the form \"a, b\"")?;

    let row = row.trim().parse().context("Invalid row")?;
    let col = col.trim().parse().context("Invalid column")?;

    Ok([row, col])
}

fn to_position([row, col]: [isize; 2]) -> Option<Position> {
    Some(Position {
        row: usize::try_from(row).ok()?,
        col: usize::try_from(col).ok()?,
    })
}

fn range_message(side_len: usize) -> String {
    format!("Addresses must be in the range [0, {side_len} - 1]!")
}
