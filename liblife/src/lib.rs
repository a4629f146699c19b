use board::{GameBoard, TileState};
use log::debug;
use pos::Position;
use rule::Fate;

pub mod board;
pub mod error;
pub mod pos;
pub mod rule;

const NEIGHBOR_RELATIVE_POSITIONS: &[[isize; 2]] = &[
    [-1, -1],
    [-1, 0],
    [-1, 1],
    [0, -1],
    [0, 1],
    [1, -1],
    [1, 0],
    [1, 1],
];

/// Counts live cells among the 8 positions around `pos`. Positions off the board
/// are skipped, never wrapped.
pub fn count_live_neighbors<P>(board: &GameBoard, pos: P) -> usize
where
    P: Into<Position>,
{
    let pos = pos.into();

    NEIGHBOR_RELATIVE_POSITIONS
        .iter()
        .filter_map(|&[d_row, d_col]| pos.offset(d_row, d_col))
        .filter(|&neighbor_pos| board.is_alive(neighbor_pos))
        .count()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameConfig {
    /// Log every scheduled birth and death at debug level.
    pub trace_fates: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepSummary {
    pub born: usize,
    pub died: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub board: GameBoard,
    pub config: GameConfig,
    generation: u64,
}

impl Game {
    pub fn new(board: GameBoard, config: GameConfig) -> Self {
        Self {
            board,
            config,
            generation: 0,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn live_neighbors<P>(&self, pos: P) -> usize
    where
        P: Into<Position>,
    {
        count_live_neighbors(&self.board, pos)
    }

    /// Advances the board by one generation.
    ///
    /// Every cell is classified against the unmodified board first, with births and
    /// deaths recorded on scratch boards. Only once classification is complete are
    /// the scheduled changes written back, so no cell ever sees a neighbor's next state.
    pub fn step(&mut self) -> StepSummary {
        let side_len = self.board.side_len();
        let mut births = GameBoard::new(side_len);
        let mut deaths = GameBoard::new(side_len);

        for (tile_pos, &tile) in self.board.enumerate_tiles() {
            let alive_neighbor_count = count_live_neighbors(&self.board, tile_pos);

            let schedule = match rule::classify(tile, alive_neighbor_count) {
                Some(Fate::Dies) => &mut deaths,
                Some(Fate::Born) => &mut births,
                None => continue,
            };

            if self.config.trace_fates {
                let verb = if tile.is_alive() { "die" } else { "be born" };
                debug!("Cell {tile_pos} will {verb} with {alive_neighbor_count} neighbors");
            }

            if let Some(scheduled) = schedule.tile_mut(tile_pos) {
                *scheduled = TileState::Alive;
            }
        }

        let mut summary = StepSummary::default();

        for (tile_pos, tile) in self.board.enumerate_tiles_mut() {
            if deaths.is_alive(tile_pos) {
                *tile = TileState::Dead;
                summary.died += 1;
            }
            if births.is_alive(tile_pos) {
                *tile = TileState::Alive;
                summary.born += 1;
            }
        }

        self.generation += 1;
        summary
    }

    pub fn step_n(&mut self, times: usize) -> StepSummary {
        (0..times).fold(StepSummary::default(), |total, _| {
            let summary = self.step();
            StepSummary {
                born: total.born + summary.born,
                died: total.died + summary.died,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use proptest::prelude::*;

    use super::*;

    fn board_with_alive(side_len: usize, alive: &[[usize; 2]]) -> GameBoard {
        let mut board = GameBoard::new(side_len);
        for &pos in alive {
            board.set(pos, TileState::Alive).unwrap();
        }
        board
    }

    fn alive_positions(board: &GameBoard) -> Vec<[usize; 2]> {
        board
            .enumerate_tiles()
            .filter(|(_, tile)| tile.is_alive())
            .map(|(pos, _)| pos.into())
            .collect()
    }

    fn naive_neighbor_count(rows: &[Vec<bool>], row: usize, col: usize) -> usize {
        let side_len = rows.len() as isize;
        let mut count = 0;

        for d_row in -1..=1isize {
            for d_col in -1..=1isize {
                if d_row == 0 && d_col == 0 {
                    continue;
                }

                let (r, c) = (row as isize + d_row, col as isize + d_col);
                if r < 0 || c < 0 || r >= side_len || c >= side_len {
                    continue;
                }

                if rows[r as usize][c as usize] {
                    count += 1;
                }
            }
        }

        count
    }

    /// Next generation computed from a frozen copy of the rows.
    fn reference_step(rows: &[Vec<bool>]) -> Vec<Vec<bool>> {
        let side_len = rows.len();

        (0..side_len)
            .map(|row| {
                (0..side_len)
                    .map(|col| {
                        let count = naive_neighbor_count(rows, row, col);
                        matches!((rows[row][col], count), (true, 2 | 3) | (false, 3))
                    })
                    .collect()
            })
            .collect()
    }

    fn square_rows() -> impl Strategy<Value = Vec<Vec<bool>>> {
        (0usize..12).prop_flat_map(|side_len| {
            prop::collection::vec(prop::collection::vec(any::<bool>(), side_len), side_len)
        })
    }

    #[test]
    fn lone_cell_dies() {
        let mut game = Game::new(board_with_alive(3, &[[1, 1]]), GameConfig::default());

        for pos in [[0, 0], [0, 1], [1, 0], [2, 2]] {
            assert_eq!(game.live_neighbors(pos), 1);
        }
        assert_eq!(game.live_neighbors([1, 1]), 0);

        let summary = game.step();

        assert_eq!(game.board, GameBoard::new(3));
        assert_eq!(summary, StepSummary { born: 0, died: 1 });
    }

    #[test]
    fn empty_board_stays_empty() {
        let mut game = Game::new(GameBoard::new(6), GameConfig::default());
        game.step_n(5);

        assert_eq!(game.board.alive_count(), 0);
        assert_eq!(game.generation(), 5);
    }

    #[test]
    fn blinker_oscillates_with_period_two() {
        let horizontal = board_with_alive(3, &[[1, 0], [1, 1], [1, 2]]);
        let vertical = board_with_alive(3, &[[0, 1], [1, 1], [2, 1]]);
        let mut game = Game::new(horizontal.clone(), GameConfig::default());

        let summary = game.step();
        assert_eq!(game.board, vertical);
        assert_eq!(summary, StepSummary { born: 2, died: 2 });

        game.step();
        assert_eq!(game.board, horizontal);
    }

    #[test]
    fn block_is_a_still_life() {
        let block = board_with_alive(4, &[[0, 0], [0, 1], [1, 0], [1, 1]]);
        let mut game = Game::new(block.clone(), GameConfig::default());

        let summary = game.step();
        assert_eq!(game.board, block);
        assert_eq!(summary, StepSummary::default());

        let once = game.board.clone();
        game.step();
        assert_eq!(game.board, once);

        game.step_n(10);
        assert_eq!(game.board, block);
    }

    #[test]
    fn glider_translates_diagonally() {
        let glider = [[0, 1], [1, 2], [2, 0], [2, 1], [2, 2]];
        let mut game = Game::new(board_with_alive(8, &glider), GameConfig::default());

        game.step_n(4);

        let shifted = glider.map(|[row, col]| [row + 1, col + 1]);
        assert_eq!(alive_positions(&game.board), shifted.to_vec());
    }

    #[test]
    fn corner_and_edge_counts_are_bounded() {
        let full = GameBoard::from_rows(vec![vec![true; 4]; 4]).unwrap();

        assert_eq!(count_live_neighbors(&full, [0, 0]), 3);
        assert_eq!(count_live_neighbors(&full, [3, 3]), 3);
        assert_eq!(count_live_neighbors(&full, [0, 2]), 5);
        assert_eq!(count_live_neighbors(&full, [2, 3]), 5);
        assert_eq!(count_live_neighbors(&full, [1, 1]), 8);
    }

    #[test]
    fn tracing_does_not_change_the_result() {
        let board = board_with_alive(5, &[[1, 2], [2, 2], [3, 2], [0, 0]]);
        let mut plain = Game::new(board.clone(), GameConfig::default());
        let mut traced = Game::new(board, GameConfig { trace_fates: true });

        plain.step_n(3);
        traced.step_n(3);

        assert_eq!(plain.board, traced.board);
    }

    proptest! {
        #[test]
        fn neighbor_count_matches_enumeration(rows in square_rows()) {
            let board = GameBoard::from_rows(rows.clone()).unwrap();
            let side_len = rows.len();

            for (row, col) in (0..side_len).cartesian_product(0..side_len) {
                let count = count_live_neighbors(&board, [row, col]);

                prop_assert!(count <= 8);
                prop_assert_eq!(count, naive_neighbor_count(&rows, row, col));

                let on_row_edge = row == 0 || row + 1 == side_len;
                let on_col_edge = col == 0 || col + 1 == side_len;
                if on_row_edge && on_col_edge {
                    prop_assert!(count <= 3);
                } else if on_row_edge || on_col_edge {
                    prop_assert!(count <= 5);
                }
            }
        }

        #[test]
        fn step_matches_simultaneous_update(rows in square_rows()) {
            let mut game = Game::new(GameBoard::from_rows(rows.clone()).unwrap(), GameConfig::default());

            game.step();

            prop_assert_eq!(game.board.to_rows(), reference_step(&rows));
        }

        #[test]
        fn summary_accounts_for_population_change(rows in square_rows()) {
            let mut game = Game::new(GameBoard::from_rows(rows).unwrap(), GameConfig::default());
            let before = game.board.alive_count();

            let summary = game.step();

            prop_assert_eq!(before + summary.born - summary.died, game.board.alive_count());
        }
    }
}
