use std::io::Write;

use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use liblife::Game;

pub mod sleeper;

/// The board followed by a status line.
pub fn render(game: &Game) -> String {
    format!(
        "{}generation {} | {} alive\n",
        game.board,
        game.generation(),
        game.board.alive_count()
    )
}

pub struct TerminalRenderer<W>
where
    W: Write,
{
    out: W,
}

impl<W> TerminalRenderer<W>
where
    W: Write,
{
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Clears the terminal and draws the current generation from the top left.
    pub fn draw(&mut self, game: &Game) -> anyhow::Result<()> {
        queue!(self.out, MoveTo(0, 0), Clear(ClearType::All))?;
        self.out.write_all(render(game).as_bytes())?;
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
