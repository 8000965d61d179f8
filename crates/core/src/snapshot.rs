use crate::game_state::Tetromino;
use crate::pieces::{shape_for, Matrix};
use crate::types::{Cell, PieceKind, Phase, Rgb, BASE_FALL_MS, GRID_HEIGHT, GRID_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub x: i8,
    pub y: i8,
    /// Absolute (x, y) grid cells
    pub cells: [(i8, i8); 4],
    pub color: Rgb,
}

impl From<Tetromino> for ActiveSnapshot {
    fn from(value: Tetromino) -> Self {
        Self {
            kind: value.kind,
            x: value.x,
            y: value.y,
            cells: value.cells(),
            color: value.color(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NextSnapshot {
    pub kind: PieceKind,
    pub matrix: Matrix,
    pub color: Rgb,
}

impl From<PieceKind> for NextSnapshot {
    fn from(kind: PieceKind) -> Self {
        let (matrix, color) = shape_for(kind);
        Self {
            kind,
            matrix,
            color,
        }
    }
}

/// Read-only view of a session, everything a renderer needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[Cell; GRID_WIDTH as usize]; GRID_HEIGHT as usize],
    /// `None` once the session is over
    pub active: Option<ActiveSnapshot>,
    /// Cells the active piece would occupy after a hard drop
    pub ghost: Option<[(i8, i8); 4]>,
    pub next: NextSnapshot,
    pub phase: Phase,
    pub episode_id: u32,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub fall_interval_ms: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board = [[None; GRID_WIDTH as usize]; GRID_HEIGHT as usize];
        self.active = None;
        self.ghost = None;
        self.next = NextSnapshot::from(PieceKind::I);
        self.phase = Phase::Falling;
        self.episode_id = 0;
        self.score = 0;
        self.level = 1;
        self.lines = 0;
        self.fall_interval_ms = BASE_FALL_MS;
    }

    pub fn paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn playable(&self) -> bool {
        self.phase == Phase::Falling
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; GRID_WIDTH as usize]; GRID_HEIGHT as usize],
            active: None,
            ghost: None,
            next: NextSnapshot::from(PieceKind::I),
            phase: Phase::Falling,
            episode_id: 0,
            score: 0,
            level: 1,
            lines: 0,
            fall_interval_ms: BASE_FALL_MS,
        }
    }
}
