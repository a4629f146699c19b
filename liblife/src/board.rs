use std::{fmt, fs, path::Path};

use anyhow::Context;
use itertools::Itertools;

use crate::{error::BoardError, pos::Position};

pub const ALIVE_GLYPH: &str = "▣";
pub const DEAD_GLYPH: &str = ".";

/// A square board of cells stored row-major in a single buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameBoard {
    side_len: usize,
    tiles: Vec<TileState>,
}

impl GameBoard {
    /// Largest number of tiles a board may hold.
    pub const MAX_TILES: usize = 1 << 24;

    /// A blank board. Panics if `side_len` is over the size limit, use [`GameBoard::try_new`]
    /// for sizes that come from user input.
    pub fn new(side_len: usize) -> Self {
        match Self::try_new(side_len) {
            Ok(board) => board,
            Err(e) => panic!("{e}"),
        }
    }

    pub fn try_new(side_len: usize) -> Result<Self, BoardError> {
        let tile_count = side_len
            .checked_mul(side_len)
            .filter(|&tile_count| tile_count <= Self::MAX_TILES)
            .ok_or(BoardError::TooLarge {
                side_len,
                max_tiles: Self::MAX_TILES,
            })?;

        Ok(Self {
            side_len,
            tiles: vec![TileState::default(); tile_count],
        })
    }

    pub fn new_random(side_len: usize, alive_cells: usize) -> Result<Self, BoardError> {
        let mut board = Self::try_new(side_len)?;

        let mut free_positions = (0..side_len)
            .cartesian_product(0..side_len)
            .map(|(row, col)| Position { row, col })
            .collect_vec();

        if alive_cells > free_positions.len() {
            return Err(BoardError::TooManyCells {
                requested: alive_cells,
                available: free_positions.len(),
            });
        }

        for _ in 0..alive_cells {
            let picked = free_positions.swap_remove(rand::random_range(0..free_positions.len()));
            board.set(picked, TileState::Alive)?;
        }

        Ok(board)
    }

    /// Builds a board from a row-major boolean matrix, rejecting anything that isn't square.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, BoardError> {
        let side_len = rows.len();

        if let Some(first_row) = rows.first()
            && first_row.len() != side_len
        {
            return Err(BoardError::NotSquare {
                rows: side_len,
                cols: first_row.len(),
            });
        }

        if let Some((row, cells)) = rows.iter().find_position(|cells| cells.len() != side_len) {
            return Err(BoardError::Ragged {
                row,
                len: cells.len(),
                expected: side_len,
            });
        }

        let tiles = rows.into_iter().flatten().map(TileState::from).collect();
        Ok(Self { side_len, tiles })
    }

    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        if self.side_len == 0 {
            return Vec::new();
        }

        self.tiles
            .chunks_exact(self.side_len)
            .map(|row| row.iter().map(|tile| tile.is_alive()).collect())
            .collect()
    }

    pub fn load<P>(path: P) -> anyhow::Result<Self>
    where
        P: AsRef<Path>,
    {
        let board_serialized = fs::read(path).context("Couldn't read board")?;
        let rows: Vec<Vec<bool>> =
            serde_json::from_slice(&board_serialized).context("Couldn't deserialize board")?;

        Ok(Self::from_rows(rows)?)
    }

    pub fn save<P>(&self, path: P) -> anyhow::Result<()>
    where
        P: AsRef<Path>,
    {
        let board_serialized =
            serde_json::to_string(&self.to_rows()).context("Couldn't serialize board")?;

        let path = path.as_ref();
        if let Some(parent_path) = path.parent()
            && !parent_path.as_os_str().is_empty()
        {
            fs::create_dir_all(parent_path).context("Couldn't create board directory")?;
        }

        fs::write(path, board_serialized).context("Couldn't write board")?;
        Ok(())
    }

    pub fn side_len(&self) -> usize {
        self.side_len
    }

    pub fn tile<P>(&self, pos: P) -> Option<&TileState>
    where
        P: Into<Position>,
    {
        self.index_of(pos.into()).map(|index| &self.tiles[index])
    }

    pub fn tile_mut<P>(&mut self, pos: P) -> Option<&mut TileState>
    where
        P: Into<Position>,
    {
        self.index_of(pos.into()).map(|index| &mut self.tiles[index])
    }

    /// Off-board positions read as dead.
    pub fn is_alive<P>(&self, pos: P) -> bool
    where
        P: Into<Position>,
    {
        self.tile(pos).is_some_and(|tile| tile.is_alive())
    }

    /// Sets a tile, returning its previous state.
    pub fn set<P>(&mut self, pos: P, state: TileState) -> Result<TileState, BoardError>
    where
        P: Into<Position>,
    {
        let pos = pos.into();
        let side_len = self.side_len;

        let tile = self
            .tile_mut(pos)
            .ok_or(BoardError::OutOfBounds { pos, side_len })?;

        Ok(std::mem::replace(tile, state))
    }

    pub fn clear(&mut self) {
        self.tiles.fill(TileState::Dead);
    }

    pub fn alive_count(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.is_alive()).count()
    }

    pub fn enumerate_tiles(&self) -> impl Iterator<Item = (Position, &TileState)> {
        let side_len = self.side_len;

        self.tiles
            .iter()
            .enumerate()
            .map(move |(index, tile)| (index_to_pos(index, side_len), tile))
    }

    pub fn enumerate_tiles_mut(&mut self) -> impl Iterator<Item = (Position, &mut TileState)> {
        let side_len = self.side_len;

        self.tiles
            .iter_mut()
            .enumerate()
            .map(move |(index, tile)| (index_to_pos(index, side_len), tile))
    }

    fn index_of(&self, Position { row, col }: Position) -> Option<usize> {
        (row < self.side_len && col < self.side_len).then(|| row * self.side_len + col)
    }
}

fn index_to_pos(index: usize, side_len: usize) -> Position {
    Position {
        row: index / side_len,
        col: index % side_len,
    }
}

impl fmt::Display for GameBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.side_len == 0 {
            return Ok(());
        }

        for row in self.tiles.chunks_exact(self.side_len) {
            for tile in row {
                write!(f, "{}  ", tile.glyph())?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TileState {
    Alive,

    #[default]
    Dead,
}

impl TileState {
    pub fn is_alive(self) -> bool {
        self == TileState::Alive
    }

    pub fn glyph(self) -> &'static str {
        match self {
            TileState::Alive => ALIVE_GLYPH,
            TileState::Dead => DEAD_GLYPH,
        }
    }
}

impl From<bool> for TileState {
    fn from(alive: bool) -> Self {
        if alive {
            TileState::Alive
        } else {
            TileState::Dead
        }
    }
}
