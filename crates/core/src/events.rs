//! Event feed from the engine to its host
//!
//! The engine is the only producer and the host drains once per frame, so a plain vector
//! is all the queue needs to be.

/// Something the host may want to react to (sound, animation, banner)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A piece was written into the grid
    PieceLocked,
    /// One lock cleared rows and earned `points`
    LinesCleared { count: u32, points: u32 },
    /// Exactly four rows in one lock
    Tetris,
    /// Consecutive clearing locks, emitted from the second one on
    Combo(u32),
    /// The grid is empty after a clear
    PerfectClear,
    LevelUp(u32),
    GameOver,
}

impl GameEvent {
    pub fn name(&self) -> &'static str {
        match self {
            GameEvent::PieceLocked => "pieceLocked",
            GameEvent::LinesCleared { .. } => "linesCleared",
            GameEvent::Tetris => "tetris",
            GameEvent::Combo(_) => "combo",
            GameEvent::PerfectClear => "perfectClear",
            GameEvent::LevelUp(_) => "levelUp",
            GameEvent::GameOver => "gameOver",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    pending: Vec<GameEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: GameEvent) {
        self.pending.push(event);
    }

    /// Take everything queued so far, oldest first
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.pending)
    }

    pub fn pending(&self) -> &[GameEvent] {
        &self.pending
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
