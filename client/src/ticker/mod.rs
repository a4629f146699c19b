use std::io::Write;

use liblife::Game;
use log::debug;

use crate::renderer::{TerminalRenderer, sleeper::Sleeper};

/// Draws and steps the game until `generation_limit` is reached, or forever without one.
pub fn run<W>(
    game: &mut Game,
    renderer: &mut TerminalRenderer<W>,
    sleeper: &mut Sleeper,
    generation_limit: Option<u64>,
) -> anyhow::Result<()>
where
    W: Write,
{
    loop {
        renderer.draw(game)?;

        if generation_limit.is_some_and(|limit| game.generation() >= limit) {
            return Ok(());
        }

        let summary = game.step();
        debug!(
            "Generation {}: {} born, {} died",
            game.generation(),
            summary.born,
            summary.died
        );

        if !sleeper.sleep() {
            debug!("Generation {} ran over its frame time", game.generation());
        }
    }
}
