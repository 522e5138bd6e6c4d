//! Game module - the orchestrator
//!
//! This module ties together the grid, shape catalog, kicks, bag and scoring.
//! It owns every piece of mutable game state and exposes the host-facing surface:
//! commands (which return whether they took effect), a per-frame `update(dt)`, an event
//! feed drained with `pop_events`, and read-only queries.
//!
//! While Playing the active piece is either falling (gravity timer running) or locking
//! (lock timer running). Moves and rotations while locking restart the lock timer at most
//! `LOCK_RESET_LIMIT` times per piece.

use arrayvec::ArrayVec;

use crate::config::{ConfigError, GameConfig};
use crate::events::{EventQueue, GameEvent};
use crate::grid::Grid;
use crate::kicks::try_rotate;
use crate::pieces::Piece;
use crate::rng::Bag;
use crate::scoring::{drop_interval, ScoringState};
use crate::snapshot::{GameSnapshot, TimersSnapshot};
use crate::types::{GameAction, Phase, PieceKind, LOCK_DELAY_SECS, LOCK_RESET_LIMIT, PREVIEW_LEN};

#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    phase: Phase,
    grid: Grid,
    active: Option<Piece>,
    hold: Option<PieceKind>,
    can_hold: bool,
    preview: ArrayVec<PieceKind, PREVIEW_LEN>,
    bag: Bag,
    scoring: ScoringState,
    drop_timer: f64,
    lock_timer: f64,
    is_locking: bool,
    lock_moves: u32,
    /// Piece written by the most recent lock (for landing effects)
    last_locked: Option<Piece>,
    /// Rows completed by the most recent lock, captured before they were removed
    last_cleared_rows: Vec<usize>,
    events: EventQueue,
    /// Increments on every restart after the first start.
    episode_id: u32,
    /// Increments on every spawn from the queue (hold swaps excluded).
    piece_id: u32,
    started: bool,
}

impl Game {
    /// Create a game sitting in the menu
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = Grid::new(config.width, config.height)?;

        Ok(Self {
            config,
            phase: Phase::Menu,
            grid,
            active: None,
            hold: None,
            can_hold: true,
            preview: ArrayVec::new(),
            bag: Bag::new(config.seed),
            scoring: ScoringState::new(config.start_level),
            drop_timer: 0.0,
            lock_timer: 0.0,
            is_locking: false,
            lock_moves: 0,
            last_locked: None,
            last_cleared_rows: Vec::new(),
            events: EventQueue::new(),
            episode_id: 0,
            piece_id: 0,
            started: false,
        })
    }

    // ---------------------------------------------------------------- lifecycle

    /// Reset everything and enter Playing with a fresh piece
    ///
    /// Events still queued from the previous game (including its `GameOver`) are
    /// discarded; drain them with `pop_events` before restarting.
    pub fn start_game(&mut self) {
        if self.started {
            self.episode_id = self.episode_id.wrapping_add(1);
        }
        self.started = true;
        self.reset();
        self.phase = Phase::Playing;
        self.spawn_next();
    }

    /// Playing ⇄ Paused; false in any other phase
    pub fn toggle_pause(&mut self) -> bool {
        match self.phase {
            Phase::Playing => {
                self.phase = Phase::Paused;
                true
            }
            Phase::Paused => {
                self.phase = Phase::Playing;
                true
            }
            Phase::Menu | Phase::GameOver => false,
        }
    }

    pub fn resume_game(&mut self) -> bool {
        if self.phase != Phase::Paused {
            return false;
        }
        self.phase = Phase::Playing;
        true
    }

    /// Abandon the current game; undrained events are discarded
    pub fn return_to_menu(&mut self) {
        self.reset();
        self.phase = Phase::Menu;
    }

    fn reset(&mut self) {
        self.grid.clear();
        self.active = None;
        self.hold = None;
        self.can_hold = true;
        self.bag = Bag::new(self.bag.seed());
        self.preview.clear();
        self.fill_preview();
        self.scoring = ScoringState::new(self.config.start_level);
        self.drop_timer = 0.0;
        self.reset_lock_state();
        self.last_locked = None;
        self.last_cleared_rows.clear();
        self.events.clear();
        self.piece_id = 0;
    }

    // ---------------------------------------------------------------- ticking

    /// Advance timers by `dt` seconds
    ///
    /// At most one automatic transition happens per call: a gravity step, or a lock.
    pub fn update(&mut self, dt: f64) {
        if self.phase != Phase::Playing {
            return;
        }
        let Some(active) = self.active else {
            return;
        };

        if self.is_locking {
            self.lock_timer += dt;
            if self.lock_timer >= LOCK_DELAY_SECS {
                self.lock_active();
            }
            return;
        }

        self.drop_timer += dt;
        if self.drop_timer >= self.drop_interval() {
            self.drop_timer = 0.0;
            let down = active.moved(0, -1);
            if self.grid.can_place(&down) {
                self.active = Some(down);
            } else {
                self.is_locking = true;
                self.lock_timer = 0.0;
            }
        }
    }

    /// Current gravity interval in seconds
    pub fn drop_interval(&self) -> f64 {
        drop_interval(self.scoring.level)
    }

    // ---------------------------------------------------------------- commands

    pub fn move_left(&mut self) -> bool {
        self.try_shift(-1)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_shift(1)
    }

    /// Move down one row, 1 point on success
    pub fn soft_drop(&mut self) -> bool {
        let Some(piece) = self.controllable() else {
            return false;
        };
        let down = piece.moved(0, -1);
        if !self.grid.can_place(&down) {
            return false;
        }
        self.active = Some(down);
        self.scoring.award_soft_drop(1);
        true
    }

    /// Drop to the floor, 2 points per row, and lock immediately
    pub fn hard_drop(&mut self) -> bool {
        let Some(piece) = self.controllable() else {
            return false;
        };

        let mut landed = piece;
        let mut cells: u32 = 0;
        loop {
            let next = landed.moved(0, -1);
            if !self.grid.can_place(&next) {
                break;
            }
            landed = next;
            cells += 1;
        }

        self.active = Some(landed);
        self.scoring.award_hard_drop(cells);
        self.lock_active();
        true
    }

    pub fn rotate_clockwise(&mut self) -> bool {
        self.try_rotate(true)
    }

    pub fn rotate_counter_clockwise(&mut self) -> bool {
        self.try_rotate(false)
    }

    /// Stash the active piece, allowed once per lock
    pub fn hold(&mut self) -> bool {
        if !self.can_hold {
            return false;
        }
        let Some(piece) = self.controllable() else {
            return false;
        };

        match self.hold.replace(piece.kind) {
            Some(held) => {
                self.spawn(held);
            }
            None => {
                self.spawn_next();
            }
        }
        self.can_hold = false;
        true
    }

    /// Take all events queued since the last call
    pub fn pop_events(&mut self) -> Vec<GameEvent> {
        self.events.drain()
    }

    /// Route an action to the matching command
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Start => {
                self.start_game();
                true
            }
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::RotateCw => self.rotate_clockwise(),
            GameAction::RotateCcw => self.rotate_counter_clockwise(),
            GameAction::Hold => self.hold(),
            GameAction::TogglePause => self.toggle_pause(),
            GameAction::Resume => self.resume_game(),
            GameAction::Menu => {
                self.return_to_menu();
                true
            }
        }
    }

    // ---------------------------------------------------------------- internals

    /// The active piece, if the phase accepts movement
    fn controllable(&self) -> Option<Piece> {
        if self.phase != Phase::Playing {
            return None;
        }
        self.active
    }

    fn try_shift(&mut self, dx: i32) -> bool {
        let Some(piece) = self.controllable() else {
            return false;
        };
        let moved = piece.moved(dx, 0);
        if !self.grid.can_place(&moved) {
            return false;
        }
        self.active = Some(moved);
        self.on_manipulated();
        true
    }

    fn try_rotate(&mut self, clockwise: bool) -> bool {
        let Some(piece) = self.controllable() else {
            return false;
        };
        match try_rotate(&self.grid, &piece, clockwise) {
            Some(rotated) => {
                self.active = Some(rotated);
                self.on_manipulated();
                true
            }
            None => false,
        }
    }

    /// Lock-delay bookkeeping after a successful move or rotation
    fn on_manipulated(&mut self) {
        if !self.is_locking {
            return;
        }
        if self.lock_moves < LOCK_RESET_LIMIT {
            self.lock_timer = 0.0;
            self.lock_moves += 1;
        }
        // Stepped off a ledge: fall again, but keep the reset budget.
        if !self.is_grounded() {
            self.is_locking = false;
            self.lock_timer = 0.0;
        }
    }

    fn reset_lock_state(&mut self) {
        self.is_locking = false;
        self.lock_timer = 0.0;
        self.lock_moves = 0;
    }

    fn fill_preview(&mut self) {
        while !self.preview.is_full() {
            self.preview.push(self.bag.next());
        }
    }

    /// Spawn the head of the preview queue
    fn spawn_next(&mut self) -> bool {
        let kind = if self.preview.is_empty() {
            self.bag.next()
        } else {
            self.preview.remove(0)
        };
        self.fill_preview();

        let spawned = self.spawn(kind);
        if spawned {
            self.piece_id = self.piece_id.wrapping_add(1);
        }
        spawned
    }

    /// Place a new piece of `kind` at the spawn anchor, or end the game
    fn spawn(&mut self, kind: PieceKind) -> bool {
        let piece = Piece::spawn(kind, self.grid.width(), self.grid.height());
        self.drop_timer = 0.0;
        self.reset_lock_state();

        if !self.grid.can_place(&piece) {
            self.active = None;
            self.phase = Phase::GameOver;
            self.events.push(GameEvent::GameOver);
            return false;
        }

        self.active = Some(piece);
        true
    }

    /// Write the active piece into the grid, clear rows, score, and spawn the next piece
    fn lock_active(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };

        self.last_locked = Some(piece);
        self.grid.lock(&piece);
        self.last_cleared_rows = self.grid.full_rows();
        let cleared = self.grid.clear_rows() as u32;

        let level_before = self.scoring.level;
        let perfect = cleared > 0 && self.grid.is_empty();
        let points = self.scoring.award_line_clear(cleared, perfect);

        self.events.push(GameEvent::PieceLocked);
        if cleared > 0 {
            self.events.push(GameEvent::LinesCleared {
                count: cleared,
                points,
            });
            if cleared == 4 {
                self.events.push(GameEvent::Tetris);
            }
            if self.scoring.combo > 1 {
                self.events.push(GameEvent::Combo(self.scoring.combo));
            }
            if perfect {
                self.events.push(GameEvent::PerfectClear);
            }
        }
        if self.scoring.level > level_before {
            self.events.push(GameEvent::LevelUp(self.scoring.level));
        }

        self.reset_lock_state();
        self.can_hold = true;
        self.spawn_next();
    }

    // ---------------------------------------------------------------- queries

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn hold_piece(&self) -> Option<PieceKind> {
        self.hold
    }

    pub fn can_hold(&self) -> bool {
        self.can_hold
    }

    /// Upcoming pieces, next first
    pub fn preview(&self) -> &[PieceKind] {
        &self.preview
    }

    /// Where the active piece would land if hard-dropped now
    pub fn ghost_piece(&self) -> Option<Piece> {
        let mut ghost = self.active?;
        loop {
            let next = ghost.moved(0, -1);
            if !self.grid.can_place(&next) {
                return Some(ghost);
            }
            ghost = next;
        }
    }

    /// Whether the active piece rests on the floor or a filled cell
    pub fn is_grounded(&self) -> bool {
        match self.active {
            Some(piece) => !self.grid.can_place(&piece.moved(0, -1)),
            None => false,
        }
    }

    pub fn is_locking(&self) -> bool {
        self.is_locking
    }

    pub fn lock_timer(&self) -> f64 {
        self.lock_timer
    }

    pub fn drop_timer(&self) -> f64 {
        self.drop_timer
    }

    pub fn lock_moves(&self) -> u32 {
        self.lock_moves
    }

    pub fn last_locked(&self) -> Option<Piece> {
        self.last_locked
    }

    pub fn last_cleared_rows(&self) -> &[usize] {
        &self.last_cleared_rows
    }

    pub fn scoring(&self) -> &ScoringState {
        &self.scoring
    }

    pub fn score(&self) -> u32 {
        self.scoring.score
    }

    pub fn level(&self) -> u32 {
        self.scoring.level
    }

    pub fn lines(&self) -> u32 {
        self.scoring.total_lines
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    /// Events queued but not yet drained
    pub fn pending_events(&self) -> &[GameEvent] {
        self.events.pending()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            phase: self.phase,
            active: self.active,
            ghost: self.ghost_piece(),
            hold: self.hold,
            can_hold: self.can_hold,
            preview: self.preview.clone(),
            scoring: self.scoring,
            last_locked: self.last_locked,
            last_cleared_rows: self.last_cleared_rows.clone(),
            timers: TimersSnapshot {
                drop_secs: self.drop_timer,
                lock_secs: self.lock_timer,
                is_locking: self.is_locking,
                lock_moves: self.lock_moves,
            },
            episode_id: self.episode_id,
            piece_id: self.piece_id,
        }
    }
}
