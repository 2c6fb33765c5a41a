//! Board state and move validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

/// Rows, columns and diagonals, as cell indices (row-major, 0-8).
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

const CELLS: usize = 9;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    #[default]
    X,
    O,
}

impl Mark {
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[default]
    InProgress,
    Won {
        mark: Mark,
        line: [usize; 3],
    },
    Draw,
}

/// What happened after a mark was placed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaceOutcome {
    /// Game goes on with `next` to move.
    Continue { next: Mark },
    /// `line` holds the three winning cells.
    Won { mark: Mark, line: [usize; 3] },
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TicTacToeError {
    #[error("cell {index} is off the board")]
    OutOfBounds { index: usize },

    #[error("cell {index} is already taken")]
    Occupied { index: usize },

    #[error("game is over")]
    GameOver,
}

/// A Tic-Tac-Toe game. X always opens.
///
/// ```
/// use r_games::tictactoe::{Mark, PlaceOutcome, TicTacToe};
///
/// let mut game = TicTacToe::new();
/// for index in [0, 3, 1, 4] {
///     game.place(index).unwrap();
/// }
/// assert_eq!(
///     game.place(2),
///     Ok(PlaceOutcome::Won { mark: Mark::X, line: [0, 1, 2] })
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicTacToe {
    cells: [Option<Mark>; CELLS],
    turn: Mark,
    status: Status,
}

impl TicTacToe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place the current player's mark on `index`.
    pub fn place(&mut self, index: usize) -> Result<PlaceOutcome, TicTacToeError> {
        if self.status != Status::InProgress {
            return Err(TicTacToeError::GameOver);
        }
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(TicTacToeError::OutOfBounds { index })?;
        if cell.is_some() {
            return Err(TicTacToeError::Occupied { index });
        }

        let mark = self.turn;
        *cell = Some(mark);
        debug!(%mark, index, "mark placed");

        // Win takes precedence over a full board
        if let Some(line) = self.winning_line_for(mark) {
            self.status = Status::Won { mark, line };
            info!(%mark, ?line, "tic-tac-toe won");
            return Ok(PlaceOutcome::Won { mark, line });
        }
        if self.cells.iter().all(Option::is_some) {
            self.status = Status::Draw;
            info!("tic-tac-toe drawn");
            return Ok(PlaceOutcome::Draw);
        }

        self.turn = mark.other();
        Ok(PlaceOutcome::Continue { next: self.turn })
    }

    /// Mark a click on `index` would place, for hover previews.
    #[must_use]
    pub fn preview(&self, index: usize) -> Option<Mark> {
        let empty = matches!(self.cells.get(index), Some(None));
        (self.status == Status::InProgress && empty).then_some(self.turn)
    }

    /// Clear the board; X moves first again.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn cell(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied().flatten()
    }

    #[must_use]
    pub fn cells(&self) -> &[Option<Mark>; CELLS] {
        &self.cells
    }

    /// Whose move it is. After the game ends, the last player to move.
    #[must_use]
    pub fn current_turn(&self) -> Mark {
        self.turn
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        match self.status {
            Status::Won { line, .. } => Some(line),
            _ => None,
        }
    }

    fn winning_line_for(&self, mark: Mark) -> Option<[usize; 3]> {
        WINNING_LINES
            .iter()
            .copied()
            .find(|line| line.iter().all(|&i| self.cells[i] == Some(mark)))
    }
}
