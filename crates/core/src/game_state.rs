//! Game state module - manages the complete game state
//!
//! This module ties together all core components: board, pieces, RNG, and scoring.
//! It handles gravity timing, piece movement, rotation, locking, line clears,
//! and the session lifecycle (`Falling` / `Paused` / `GameOver`).
//!
//! Illegal intents are not errors. A move or rotation into a wall or into
//! locked cells is simply not applied, and intents that do not belong to the
//! current phase are ignored.

use crate::pieces::{piece_color, spawn_matrix, Matrix};
use crate::scoring::{fall_interval_ms, level_for_score, line_clear_points};
use crate::snapshot::{ActiveSnapshot, GameSnapshot, NextSnapshot};
use crate::types::*;
use crate::{Board, PieceQueue, Randomizer};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    /// Current orientation
    pub matrix: Matrix,
    /// Column of the bounding box's left edge
    pub x: i8,
    /// Row of the bounding box's top edge
    pub y: i8,
}

impl Tetromino {
    /// Create a new tetromino at spawn position, centered horizontally on row 0
    pub fn new(kind: PieceKind) -> Self {
        let matrix = spawn_matrix(kind);
        Self {
            kind,
            matrix,
            x: (GRID_WIDTH / 2) as i8 - (matrix.size() / 2) as i8,
            y: 0,
        }
    }

    pub fn color(&self) -> Rgb {
        piece_color(self.kind)
    }

    /// Absolute (x, y) cells occupied by the piece
    pub fn cells(&self) -> [(i8, i8); 4] {
        let mut out = [(self.x, self.y); 4];
        for (slot, (dx, dy)) in out.iter_mut().zip(self.matrix.filled()) {
            *slot = (self.x + dx, self.y + dy);
        }
        out
    }

    /// Same piece rotated 90° clockwise at the same position
    pub fn rotated(&self) -> Self {
        Self {
            matrix: self.matrix.rotate_cw(),
            ..*self
        }
    }

    /// Same piece shifted by (dx, dy)
    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }
}

/// Check whether `piece`, offset by (dx, dy), fits on `board`.
///
/// Fails if any occupied cell lands outside the columns, at or below the
/// floor, or on a filled cell. Cells above the top row are allowed.
pub fn is_valid_placement(board: &Board, piece: &Tetromino, dx: i8, dy: i8) -> bool {
    piece
        .matrix
        .filled()
        .all(|(cx, cy)| board.is_free(piece.x + cx + dx, piece.y + cy + dy))
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Tetromino,
    next: PieceKind,
    piece_queue: PieceQueue,
    phase: Phase,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
    score: u32,
    level: u32,
    lines: u32,
    fall_interval_ms: u32,
    /// Time since the last successful downward move
    fall_timer_ms: u32,
}

impl GameState {
    /// Create a new game with the given RNG seed and uniform piece selection
    pub fn new(seed: u32) -> Self {
        Self::with_randomizer(seed, Randomizer::Uniform)
    }

    /// Create a new game with an explicit randomizer
    pub fn with_randomizer(seed: u32, randomizer: Randomizer) -> Self {
        let mut piece_queue = PieceQueue::with_randomizer(seed, randomizer);
        let active = Tetromino::new(piece_queue.draw());
        let next = piece_queue.draw();

        Self {
            board: Board::new(),
            active,
            next,
            piece_queue,
            phase: Phase::Falling,
            episode_id: 0,
            last_event: None,
            score: 0,
            level: 1,
            lines: 0,
            fall_interval_ms: fall_interval_ms(1),
            fall_timer_ms: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn fall_interval_ms(&self) -> u32 {
        self.fall_interval_ms
    }

    pub fn randomizer(&self) -> Randomizer {
        self.piece_queue.randomizer()
    }

    /// The falling piece, or `None` once the session is over
    pub fn active(&self) -> Option<Tetromino> {
        match self.phase {
            Phase::GameOver => None,
            _ => Some(self.active),
        }
    }

    pub fn next_kind(&self) -> PieceKind {
        self.next
    }

    /// Preview of the next piece in spawn orientation
    pub fn next_piece(&self) -> Tetromino {
        Tetromino::new(self.next)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);

        out.active = self.active().map(ActiveSnapshot::from);
        out.ghost = self.ghost_cells();
        out.next = NextSnapshot::from(self.next);
        out.phase = self.phase;
        out.episode_id = self.episode_id;
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.fall_interval_ms = self.fall_interval_ms;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Try to move the active piece; applied only if the target placement is valid
    pub(crate) fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        if !is_valid_placement(&self.board, &self.active, dx, dy) {
            return false;
        }

        self.active = self.active.shifted(dx, dy);
        if dy > 0 {
            self.fall_timer_ms = 0;
        }
        true
    }

    /// Try to rotate the active piece clockwise in place (no wall kicks)
    pub(crate) fn try_rotate(&mut self) -> bool {
        let rotated = self.active.rotated();
        if !is_valid_placement(&self.board, &rotated, 0, 0) {
            return false;
        }

        self.active = rotated;
        true
    }

    /// Rows the active piece can fall before it rests
    fn drop_distance(&self) -> i8 {
        let mut distance = 0;
        while is_valid_placement(&self.board, &self.active, 0, distance + 1) {
            distance += 1;
        }
        distance
    }

    /// Row the active piece would land on (for ghost rendering)
    pub fn ghost_y(&self) -> Option<i8> {
        self.active().map(|p| p.y + self.drop_distance())
    }

    fn ghost_cells(&self) -> Option<[(i8, i8); 4]> {
        self.active()
            .map(|p| p.shifted(0, self.drop_distance()).cells())
    }

    /// Move down one row, or lock if the piece is resting
    fn step_down(&mut self) {
        if !self.try_move(0, 1) {
            self.lock_piece();
        }
    }

    /// Lock the active piece onto the board, clear rows, score, and spawn the next piece
    fn lock_piece(&mut self) {
        let piece = self.active;
        if !self.board.lock_cells(piece.cells(), piece.color()) {
            // Unreachable in play: pieces spawn on row 0 and never move up.
            // Kept as a guard so a bad lock ends the session instead of
            // dropping cells.
            self.phase = Phase::GameOver;
            return;
        }

        let lines_cleared = self.board.clear_full_rows().len();
        let points = line_clear_points(lines_cleared, self.level);

        if lines_cleared > 0 {
            self.score = self.score.saturating_add(points);
            self.lines = self.lines.saturating_add(lines_cleared as u32);
            self.level = level_for_score(self.score);
            self.fall_interval_ms = fall_interval_ms(self.level);
        }

        self.last_event = Some(LockEvent {
            lines_cleared: lines_cleared as u32,
            points,
        });

        self.spawn_next();
    }

    /// Promote the preview piece and draw a new one
    fn spawn_next(&mut self) {
        self.active = Tetromino::new(self.next);
        self.next = self.piece_queue.draw();
        self.fall_timer_ms = 0;

        if !is_valid_placement(&self.board, &self.active, 0, 0) {
            self.phase = Phase::GameOver;
        }
    }

    pub fn move_left(&mut self) {
        if self.phase == Phase::Falling {
            self.try_move(-1, 0);
        }
    }

    pub fn move_right(&mut self) {
        if self.phase == Phase::Falling {
            self.try_move(1, 0);
        }
    }

    pub fn rotate(&mut self) {
        if self.phase == Phase::Falling {
            self.try_rotate();
        }
    }

    /// Move down one row; locks the piece if it cannot move
    pub fn soft_drop(&mut self) {
        if self.phase == Phase::Falling {
            self.step_down();
        }
    }

    /// Drop to the lowest valid row and lock immediately
    pub fn hard_drop(&mut self) {
        if self.phase != Phase::Falling {
            return;
        }
        let distance = self.drop_distance();
        self.active = self.active.shifted(0, distance);
        self.lock_piece();
    }

    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            Phase::Falling => Phase::Paused,
            Phase::Paused => Phase::Falling,
            Phase::GameOver => Phase::GameOver,
        };
    }

    /// Start a fresh session; only honored after game over.
    ///
    /// The piece sequence continues from the current RNG state.
    pub fn restart(&mut self) {
        if self.phase != Phase::GameOver {
            return;
        }
        let seed = self.piece_queue.seed();
        let randomizer = self.piece_queue.randomizer();
        let next_episode = self.episode_id.wrapping_add(1);
        *self = Self::with_randomizer(seed, randomizer);
        self.episode_id = next_episode;
    }

    /// Gravity - advance the fall timer and drop one row once it reaches the interval.
    ///
    /// The step runs when the accumulated time equals the interval, one
    /// millisecond earlier than a strict "exceeds" check would.
    /// Returns true if a gravity step ran.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.phase != Phase::Falling {
            return false;
        }

        self.fall_timer_ms = self.fall_timer_ms.saturating_add(elapsed_ms);
        if self.fall_timer_ms < self.fall_interval_ms {
            return false;
        }

        self.fall_timer_ms = 0;
        self.step_down();
        true
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::Rotate => self.rotate(),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::TogglePause => self.toggle_pause(),
            GameAction::Restart => self.restart(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
