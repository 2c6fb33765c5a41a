//! Snake game state and tick logic.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use super::config::SnakeConfig;
use crate::core::GameRng;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnakeError {
    #[error("grid of {size} tiles is too small, need at least 4")]
    GridTooSmall { size: u16 },

    #[error("grid of {size} tiles is too large, at most 256 allowed")]
    GridTooLarge { size: u16 },

    #[error("tick interval must shrink from {start}ms to a non-zero minimum, got minimum {min}ms")]
    InvalidInterval { start: u32, min: u32 },

    #[error("speed-up threshold must be non-zero")]
    ZeroSpeedupThreshold,
}

/// Grid coordinate. `(0, 0)` is the top-left tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i16,
    pub y: i16,
}

impl Point {
    #[must_use]
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// `(dx, dy)` with y growing downward.
    #[must_use]
    pub const fn delta(self) -> (i16, i16) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Map a browser `KeyboardEvent.key` value: arrows or WASD.
    ///
    /// ```
    /// use r_games::snake::Direction;
    ///
    /// assert_eq!(Direction::from_key("ArrowUp"), Some(Direction::Up));
    /// assert_eq!(Direction::from_key("D"), Some(Direction::Right));
    /// assert_eq!(Direction::from_key("Enter"), None);
    /// ```
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" | "w" | "W" => Some(Direction::Up),
            "ArrowDown" | "s" | "S" => Some(Direction::Down),
            "ArrowLeft" | "a" | "A" => Some(Direction::Left),
            "ArrowRight" | "d" | "D" => Some(Direction::Right),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SnakePhase {
    /// Waiting for the first `start`.
    #[default]
    Ready,
    Running,
    GameOver,
}

/// What the head ran into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Collision {
    Wall,
    Body,
}

/// Result of a single tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickOutcome {
    /// Not running; nothing happened.
    Idle,
    Moved,
    /// Food eaten. `interval_ms` is the pace from now on.
    Ate { score: u32, interval_ms: u32 },
    GameOver {
        collision: Collision,
        score: u32,
        new_high_score: bool,
    },
}

/// A game of Snake.
///
/// The driver calls [`SnakeGame::tick`] every [`SnakeGame::interval_ms`]
/// and forwards key presses to [`SnakeGame::steer`].
#[derive(Clone, Debug)]
pub struct SnakeGame {
    config: SnakeConfig,
    /// Head first.
    body: VecDeque<Point>,
    /// Direction of the last completed step.
    heading: Direction,
    /// Direction the next step will take.
    queued: Direction,
    food: Option<Point>,
    score: u32,
    high_score: u32,
    interval_ms: u32,
    phase: SnakePhase,
    rng: GameRng,
}

impl SnakeGame {
    /// Create a game in the `Ready` phase.
    pub fn new(config: SnakeConfig, seed: u64) -> Result<Self, SnakeError> {
        config.validate()?;

        let mut game = Self {
            interval_ms: config.start_interval_ms,
            config,
            body: VecDeque::new(),
            heading: Direction::Right,
            queued: Direction::Right,
            food: None,
            score: 0,
            high_score: 0,
            phase: SnakePhase::Ready,
            rng: GameRng::new(seed),
        };
        game.lay_out();
        Ok(game)
    }

    /// Seed the best score from external storage.
    #[must_use]
    pub fn with_high_score(mut self, high_score: u32) -> Self {
        self.high_score = high_score;
        self
    }

    /// Start or restart a run. Keeps the high score.
    pub fn start(&mut self) {
        self.lay_out();
        self.score = 0;
        self.interval_ms = self.config.start_interval_ms;
        self.place_food();
        self.phase = SnakePhase::Running;
        debug!(grid = self.config.grid_size, "snake run started");
    }

    /// Request a turn. Reversing onto the neck is ignored.
    ///
    /// Returns whether the request was accepted.
    pub fn steer(&mut self, direction: Direction) -> bool {
        if self.phase != SnakePhase::Running || direction == self.heading.opposite() {
            return false;
        }
        self.queued = direction;
        true
    }

    /// Advance one step.
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase != SnakePhase::Running {
            return TickOutcome::Idle;
        }
        let Some(&head) = self.body.front() else {
            return TickOutcome::Idle;
        };

        self.heading = self.queued;
        let next = head.step(self.heading);

        if !self.in_bounds(next) {
            return self.game_over(Collision::Wall);
        }
        // Tail has not moved yet, so stepping into it counts
        if self.body.contains(&next) {
            return self.game_over(Collision::Body);
        }

        self.body.push_front(next);

        if self.food == Some(next) {
            self.score += self.config.points_per_food;
            self.place_food();

            if self.score % self.config.speedup_every == 0
                && self.interval_ms > self.config.min_interval_ms
            {
                self.interval_ms = self
                    .interval_ms
                    .saturating_sub(self.config.interval_step_ms)
                    .max(self.config.min_interval_ms);
                debug!(interval_ms = self.interval_ms, "snake speeds up");
            }

            return TickOutcome::Ate {
                score: self.score,
                interval_ms: self.interval_ms,
            };
        }

        self.body.pop_back();
        TickOutcome::Moved
    }

    // === Accessors ===

    #[must_use]
    pub fn phase(&self) -> SnakePhase {
        self.phase
    }

    /// Segments, head first.
    pub fn body(&self) -> impl Iterator<Item = Point> + '_ {
        self.body.iter().copied()
    }

    #[must_use]
    pub fn head(&self) -> Option<Point> {
        self.body.front().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Current food tile. `None` before the first start or once the grid is full.
    #[must_use]
    pub fn food(&self) -> Option<Point> {
        self.food
    }

    #[must_use]
    pub fn heading(&self) -> Direction {
        self.heading
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    #[must_use]
    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    #[must_use]
    pub fn config(&self) -> &SnakeConfig {
        &self.config
    }

    // === Internals ===

    /// Grid side as a coordinate. `validate` caps the size well inside `i16`.
    fn side(&self) -> i16 {
        i16::try_from(self.config.grid_size).unwrap_or(i16::MAX)
    }

    fn lay_out(&mut self) {
        let center = self.side() / 2;
        self.body = (0..3).map(|i| Point::new(center - i, center)).collect();
        self.heading = Direction::Right;
        self.queued = Direction::Right;
        self.food = None;
    }

    fn in_bounds(&self, point: Point) -> bool {
        let size = self.side();
        (0..size).contains(&point.x) && (0..size).contains(&point.y)
    }

    fn place_food(&mut self) {
        let occupied: FxHashSet<Point> = self.body.iter().copied().collect();
        let size = self.side();
        let free: Vec<Point> = (0..size)
            .flat_map(|y| (0..size).map(move |x| Point::new(x, y)))
            .filter(|p| !occupied.contains(p))
            .collect();

        self.food = self.rng.choose(&free).copied();
    }

    fn game_over(&mut self, collision: Collision) -> TickOutcome {
        self.phase = SnakePhase::GameOver;
        let new_high_score = self.score > self.high_score;
        if new_high_score {
            self.high_score = self.score;
        }

        info!(score = self.score, ?collision, new_high_score, "snake run over");
        TickOutcome::GameOver {
            collision,
            score: self.score,
            new_high_score,
        }
    }

    /// Place food on a specific tile.
    #[cfg(test)]
    pub(crate) fn set_food(&mut self, food: Option<Point>) {
        self.food = food;
    }
}
