//! Board layout: the snake and ladder shortcut tables plus grid geometry.
//!
//! ## Shortcut tables
//!
//! Two fixed maps from a source square to a destination square. Snakes
//! always lead backward, ladders always forward, and a square is the source
//! of at most one shortcut. Tables are validated once in [`BoardBuilder`];
//! lookups afterwards are total.
//!
//! ## Grid geometry
//!
//! The 10×10 board is numbered boustrophedon style: square 1 sits in the
//! bottom-left corner, the bottom row runs left to right, the next row right
//! to left, and so on up to square 100 in the top-left corner.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Last square on the board. Reaching it exactly wins.
pub const FINAL_SQUARE: u8 = 100;

/// Squares per row.
pub const BOARD_SIDE: u8 = 10;

/// Whether a shortcut sends the player back or forward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShortcutKind {
    Snake,
    Ladder,
}

/// A single redirect on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shortcut {
    pub kind: ShortcutKind,
    pub from: u8,
    pub to: u8,
}

/// Grid cell for a square. Row 0 is the top row, column 0 the left column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub col: u8,
    pub row: u8,
}

/// Rejected board layouts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("shortcut source {square} must be within 2..=99")]
    SourceOutOfRange { square: u8 },

    #[error("shortcut from {from} leads to {to}, outside 1..=100")]
    DestinationOutOfRange { from: u8, to: u8 },

    #[error("snake from {from} to {to} does not lead backward")]
    SnakeNotDescending { from: u8, to: u8 },

    #[error("ladder from {from} to {to} does not lead forward")]
    LadderNotAscending { from: u8, to: u8 },

    #[error("square {square} is the source of more than one shortcut")]
    DuplicateSource { square: u8 },

    #[error("shortcut from {from} lands on square {to}, which is itself a shortcut source")]
    ChainedShortcut { from: u8, to: u8 },
}

/// Validated shortcut tables.
///
/// ```
/// use r_games::ladders::{Board, ShortcutKind};
///
/// let board = Board::classic();
/// let hit = board.lookup(3).unwrap();
/// assert_eq!(hit.kind, ShortcutKind::Ladder);
/// assert_eq!(hit.to, 21);
/// assert!(board.lookup(4).is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    snakes: FxHashMap<u8, u8>,
    ladders: FxHashMap<u8, u8>,
}

impl Board {
    /// Snake heads and tails of the portal's board.
    pub const CLASSIC_SNAKES: [(u8, u8); 10] = [
        (98, 28),
        (95, 24),
        (92, 51),
        (83, 19),
        (73, 1),
        (69, 33),
        (64, 36),
        (59, 17),
        (52, 11),
        (48, 9),
    ];

    /// Ladder bottoms and tops of the portal's board.
    pub const CLASSIC_LADDERS: [(u8, u8); 10] = [
        (3, 21),
        (8, 30),
        (20, 41),
        (28, 53),
        (36, 57),
        (43, 77),
        (54, 88),
        (62, 96),
        (66, 87),
        (74, 92),
    ];

    /// The portal's board.
    ///
    /// Two of its snakes end on ladder bottoms (98→28, 64→36) and ladder
    /// 74→92 ends on a snake head, so it is built with chained destinations
    /// allowed. The engine still applies a
    /// single redirect per move.
    #[must_use]
    pub fn classic() -> Self {
        let mut snakes = FxHashMap::default();
        snakes.extend(Self::CLASSIC_SNAKES);
        let mut ladders = FxHashMap::default();
        ladders.extend(Self::CLASSIC_LADDERS);
        Self { snakes, ladders }
    }

    /// A board with no shortcuts.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            snakes: FxHashMap::default(),
            ladders: FxHashMap::default(),
        }
    }

    /// Find the shortcut starting on `square`, snakes first.
    #[must_use]
    pub fn lookup(&self, square: u8) -> Option<Shortcut> {
        if let Some(&to) = self.snakes.get(&square) {
            return Some(Shortcut {
                kind: ShortcutKind::Snake,
                from: square,
                to,
            });
        }

        self.ladders.get(&square).map(|&to| Shortcut {
            kind: ShortcutKind::Ladder,
            from: square,
            to,
        })
    }

    /// All shortcuts ordered by source square, for renderers.
    #[must_use]
    pub fn shortcuts(&self) -> Vec<Shortcut> {
        let snakes = self.snakes.iter().map(|(&from, &to)| Shortcut {
            kind: ShortcutKind::Snake,
            from,
            to,
        });
        let ladders = self.ladders.iter().map(|(&from, &to)| Shortcut {
            kind: ShortcutKind::Ladder,
            from,
            to,
        });

        let mut all: Vec<_> = snakes.chain(ladders).collect();
        all.sort_by_key(|s| s.from);
        all
    }

    /// Number of snakes.
    #[must_use]
    pub fn snake_count(&self) -> usize {
        self.snakes.len()
    }

    /// Number of ladders.
    #[must_use]
    pub fn ladder_count(&self) -> usize {
        self.ladders.len()
    }

    /// Grid cell of a square. Square 0 (off-board) and squares past 100
    /// have no cell.
    ///
    /// ```
    /// use r_games::ladders::{Board, Cell};
    ///
    /// assert_eq!(Board::cell(1), Some(Cell { col: 0, row: 9 }));
    /// assert_eq!(Board::cell(11), Some(Cell { col: 9, row: 8 }));
    /// assert_eq!(Board::cell(100), Some(Cell { col: 0, row: 0 }));
    /// assert_eq!(Board::cell(0), None);
    /// ```
    #[must_use]
    pub fn cell(square: u8) -> Option<Cell> {
        if square == 0 || square > FINAL_SQUARE {
            return None;
        }

        let offset = square - 1;
        let rows_from_bottom = offset / BOARD_SIDE;
        let mut col = offset % BOARD_SIDE;
        if rows_from_bottom % 2 == 1 {
            col = BOARD_SIDE - 1 - col;
        }

        Some(Cell {
            col,
            row: BOARD_SIDE - 1 - rows_from_bottom,
        })
    }

    /// Export as a serializable config.
    #[must_use]
    pub fn to_config(&self) -> BoardConfig {
        let mut snakes: Vec<_> = self.snakes.iter().map(|(&a, &b)| (a, b)).collect();
        let mut ladders: Vec<_> = self.ladders.iter().map(|(&a, &b)| (a, b)).collect();
        snakes.sort_unstable();
        ladders.sort_unstable();

        let allow_chained_targets = self.has_chained_targets();
        BoardConfig {
            snakes,
            ladders,
            allow_chained_targets,
        }
    }

    fn has_chained_targets(&self) -> bool {
        self.snakes
            .values()
            .chain(self.ladders.values())
            .any(|to| self.snakes.contains_key(to) || self.ladders.contains_key(to))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::classic()
    }
}

/// Serializable board description.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// `(head, tail)` pairs.
    pub snakes: Vec<(u8, u8)>,
    /// `(bottom, top)` pairs.
    pub ladders: Vec<(u8, u8)>,
    /// Permit a shortcut to end on another shortcut's source.
    #[serde(default)]
    pub allow_chained_targets: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            snakes: Board::CLASSIC_SNAKES.to_vec(),
            ladders: Board::CLASSIC_LADDERS.to_vec(),
            allow_chained_targets: true,
        }
    }
}

impl BoardConfig {
    /// Validate into a board.
    pub fn build(&self) -> Result<Board, BoardError> {
        let mut builder = BoardBuilder::new().allow_chained_targets(self.allow_chained_targets);
        for &(from, to) in &self.snakes {
            builder = builder.snake(from, to);
        }
        for &(from, to) in &self.ladders {
            builder = builder.ladder(from, to);
        }
        builder.build()
    }
}

/// Builder for custom boards.
///
/// ```
/// use r_games::ladders::{BoardBuilder, BoardError};
///
/// let board = BoardBuilder::new().snake(40, 5).ladder(7, 60).build().unwrap();
/// assert_eq!(board.snake_count(), 1);
///
/// let err = BoardBuilder::new().ladder(40, 10).build().unwrap_err();
/// assert_eq!(err, BoardError::LadderNotAscending { from: 40, to: 10 });
/// ```
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    entries: Vec<Shortcut>,
    allow_chained_targets: bool,
}

impl BoardBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a snake from `head` down to `tail`.
    pub fn snake(mut self, head: u8, tail: u8) -> Self {
        self.entries.push(Shortcut {
            kind: ShortcutKind::Snake,
            from: head,
            to: tail,
        });
        self
    }

    /// Add a ladder from `bottom` up to `top`.
    pub fn ladder(mut self, bottom: u8, top: u8) -> Self {
        self.entries.push(Shortcut {
            kind: ShortcutKind::Ladder,
            from: bottom,
            to: top,
        });
        self
    }

    /// Permit destinations that are themselves shortcut sources.
    pub fn allow_chained_targets(mut self, allow: bool) -> Self {
        self.allow_chained_targets = allow;
        self
    }

    /// Validate and build the board.
    pub fn build(self) -> Result<Board, BoardError> {
        let mut board = Board::empty();

        for Shortcut { kind, from, to } in self.entries {
            if !(2..FINAL_SQUARE).contains(&from) {
                return Err(BoardError::SourceOutOfRange { square: from });
            }
            if !(1..=FINAL_SQUARE).contains(&to) {
                return Err(BoardError::DestinationOutOfRange { from, to });
            }
            if board.snakes.contains_key(&from) || board.ladders.contains_key(&from) {
                return Err(BoardError::DuplicateSource { square: from });
            }

            match kind {
                ShortcutKind::Snake if to >= from => {
                    return Err(BoardError::SnakeNotDescending { from, to });
                }
                ShortcutKind::Ladder if to <= from => {
                    return Err(BoardError::LadderNotAscending { from, to });
                }
                ShortcutKind::Snake => board.snakes.insert(from, to),
                ShortcutKind::Ladder => board.ladders.insert(from, to),
            };
        }

        if !self.allow_chained_targets {
            if let Some(chain) = board
                .shortcuts()
                .into_iter()
                .find(|s| board.lookup(s.to).is_some())
            {
                return Err(BoardError::ChainedShortcut {
                    from: chain.from,
                    to: chain.to,
                });
            }
        }

        Ok(board)
    }
}
