use arrayvec::ArrayVec;

use crate::pieces::Piece;
use crate::scoring::ScoringState;
use crate::types::{Phase, PieceKind, PREVIEW_LEN};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimersSnapshot {
    pub drop_secs: f64,
    pub lock_secs: f64,
    pub is_locking: bool,
    pub lock_moves: u32,
}

/// Read-only view of everything a host renders besides the grid itself
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub phase: Phase,
    pub active: Option<Piece>,
    pub ghost: Option<Piece>,
    pub hold: Option<PieceKind>,
    pub can_hold: bool,
    pub preview: ArrayVec<PieceKind, PREVIEW_LEN>,
    pub scoring: ScoringState,
    pub last_locked: Option<Piece>,
    pub last_cleared_rows: Vec<usize>,
    pub timers: TimersSnapshot,
    pub episode_id: u32,
    pub piece_id: u32,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        self.phase == Phase::Playing
    }
}
