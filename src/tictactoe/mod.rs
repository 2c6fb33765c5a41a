//! Tic-Tac-Toe for two players sharing one screen.

mod game;

pub use game::{Mark, PlaceOutcome, Status, TicTacToe, TicTacToeError, WINNING_LINES};
