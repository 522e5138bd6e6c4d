//! Shared data types and tuning constants
//!
//! Everything in this crate is plain data with no dependencies, so it can be used by the
//! engine core, the headless script driver, and any host that renders or plays sound.
//!
//! # Coordinates
//!
//! The playfield uses a y-up coordinate system:
//!
//! - **x**: column, `0` is the leftmost column
//! - **y**: row, `0` is the bottom row
//!
//! Pieces spawn with their anchor on the top row (`height - 1`); any mino above the top row
//! is legal while the piece is falling and is discarded if the piece locks there.
//!
//! # Timing Constants
//!
//! All timing values are in seconds (`f64`), matching the host's frame `dt`:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `LOCK_DELAY_SECS` | 0.5 | Grace period before a grounded piece locks |
//! | `LOCK_RESET_LIMIT` | 15 | Max lock timer resets per piece |
//! | `BASE_DROP_SECS` | 1.0 | Gravity interval at level 1 |
//! | `MIN_DROP_SECS` | 0.016 | Gravity floor |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{GameAction, PieceKind, Rotation, DEFAULT_HEIGHT, DEFAULT_WIDTH};
//!
//! let piece = PieceKind::from_str("t").unwrap();
//! assert_eq!(piece, PieceKind::T);
//!
//! assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
//! assert_eq!(Rotation::from_index(5), Rotation::East);
//!
//! assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
//!
//! assert_eq!(DEFAULT_WIDTH, 10);
//! assert_eq!(DEFAULT_HEIGHT, 20);
//! ```

/// Default board width in cells
pub const DEFAULT_WIDTH: usize = 10;

/// Default board height in cells
pub const DEFAULT_HEIGHT: usize = 20;

/// Narrowest accepted board (a horizontal I piece needs four columns)
pub const MIN_WIDTH: usize = 4;

/// Shortest accepted board
pub const MIN_HEIGHT: usize = 2;

/// Number of upcoming pieces kept in the preview queue
pub const PREVIEW_LEN: usize = 5;

/// Lock delay for a grounded piece (seconds)
pub const LOCK_DELAY_SECS: f64 = 0.5;

/// Maximum number of lock timer resets per piece
pub const LOCK_RESET_LIMIT: u32 = 15;

/// Gravity interval at level 1 (seconds per row)
pub const BASE_DROP_SECS: f64 = 1.0;

/// Gravity never gets faster than this (seconds per row)
pub const MIN_DROP_SECS: f64 = 0.016;

/// Highest level a game may start at
pub const MAX_START_LEVEL: u32 = 999;

/// Lines needed per level
pub const LINES_PER_LEVEL: u32 = 10;

/// Base points by number of lines cleared, multiplied by the current level
///
/// - 1 line: 100
/// - 2 lines: 300
/// - 3 lines: 500
/// - 4 lines: 800
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Combo bonus per combo step, multiplied by the current level
pub const COMBO_BASE: u32 = 50;

/// Perfect clear bonus, multiplied by the current level
pub const PERFECT_CLEAR_BASE: u32 = 1000;

/// Back-to-back multiplier numerator (3/2 = 1.5x)
pub const B2B_NUMERATOR: u32 = 3;

/// Back-to-back multiplier denominator
pub const B2B_DENOMINATOR: u32 = 2;

/// The seven tetromino piece kinds
///
/// Each piece has a fixed display color:
/// - **I**: Cyan
/// - **O**: Yellow
/// - **T**: Purple
/// - **S**: Green
/// - **Z**: Red
/// - **J**: Blue
/// - **L**: Orange
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds, in bag order before shuffling
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("L"), Some(PieceKind::L));
    /// assert_eq!(PieceKind::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }

    /// Compact cell code for board dumps (0 is reserved for empty)
    pub fn code(&self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::O => 2,
            PieceKind::T => 3,
            PieceKind::S => 4,
            PieceKind::Z => 5,
            PieceKind::J => 6,
            PieceKind::L => 7,
        }
    }
}

/// 24-bit display color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// `#rrggbb` form
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Rotation states (North = spawn orientation)
///
/// The cycle goes North → East → South → West → North; the numeric index
/// (0..=3) is the rotation state used by the kick tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate clockwise (90°)
    ///
    /// ```
    /// use blockfall_types::Rotation;
    ///
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Rotate counter-clockwise (-90°)
    ///
    /// ```
    /// use blockfall_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_ccw(), Rotation::West);
    /// ```
    pub fn rotate_ccw(&self) -> Self {
        match self {
            Rotation::North => Rotation::West,
            Rotation::West => Rotation::South,
            Rotation::South => Rotation::East,
            Rotation::East => Rotation::North,
        }
    }

    /// Rotation state index, 0 (North) to 3 (West)
    pub fn index(&self) -> usize {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    /// Rotation for an index, wrapping modulo 4
    pub fn from_index(index: usize) -> Self {
        match index % 4 {
            0 => Rotation::North,
            1 => Rotation::East,
            2 => Rotation::South,
            _ => Rotation::West,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Rotation::North => "north",
            Rotation::East => "east",
            Rotation::South => "south",
            Rotation::West => "west",
        }
    }
}

/// Top-level game lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Menu,
    Playing,
    Paused,
    GameOver,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Menu => "menu",
            Phase::Playing => "playing",
            Phase::Paused => "paused",
            Phase::GameOver => "gameOver",
        }
    }
}

/// Commands a host can send to the engine
///
/// Every variant maps onto one method of the engine's command surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Reset and enter Playing (also used to restart after game over)
    Start,
    /// Move piece one column left
    MoveLeft,
    /// Move piece one column right
    MoveRight,
    /// Move piece one row down, 1 point per row
    SoftDrop,
    /// Drop piece to the floor and lock it, 2 points per row
    HardDrop,
    /// Rotate 90° clockwise with wall kicks
    RotateCw,
    /// Rotate 90° counter-clockwise with wall kicks
    RotateCcw,
    /// Swap the active piece with the hold slot (once per lock)
    Hold,
    /// Playing ⇄ Paused
    TogglePause,
    /// Paused → Playing
    Resume,
    /// Abandon the current game and go back to the menu
    Menu,
}

impl GameAction {
    /// Parse action from string (case-insensitive, short aliases accepted)
    ///
    /// ```
    /// use blockfall_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("rotateCw"), Some(GameAction::RotateCw));
    /// assert_eq!(GameAction::from_str("ccw"), Some(GameAction::RotateCcw));
    /// assert_eq!(GameAction::from_str("drop"), Some(GameAction::HardDrop));
    /// assert_eq!(GameAction::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "start" | "restart" => Some(GameAction::Start),
            "moveleft" | "left" => Some(GameAction::MoveLeft),
            "moveright" | "right" => Some(GameAction::MoveRight),
            "softdrop" | "down" => Some(GameAction::SoftDrop),
            "harddrop" | "drop" => Some(GameAction::HardDrop),
            "rotatecw" | "cw" => Some(GameAction::RotateCw),
            "rotateccw" | "ccw" => Some(GameAction::RotateCcw),
            "hold" => Some(GameAction::Hold),
            "togglepause" | "pause" => Some(GameAction::TogglePause),
            "resume" => Some(GameAction::Resume),
            "menu" => Some(GameAction::Menu),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Start => "start",
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::RotateCw => "rotateCw",
            GameAction::RotateCcw => "rotateCcw",
            GameAction::Hold => "hold",
            GameAction::TogglePause => "togglePause",
            GameAction::Resume => "resume",
            GameAction::Menu => "menu",
        }
    }
}

/// A cell on the board
///
/// - `None`: empty
/// - `Some(PieceKind)`: filled by a locked piece of that kind
pub type Cell = Option<PieceKind>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scoring_table_defaults() {
        assert_eq!(LINE_SCORES, [0, 100, 300, 500, 800]);
        assert_eq!(COMBO_BASE, 50);
        assert_eq!(PERFECT_CLEAR_BASE, 1000);
        assert_eq!(B2B_NUMERATOR * 800 / B2B_DENOMINATOR, 1200);
    }

    #[test]
    fn timing_defaults() {
        assert_eq!(LOCK_DELAY_SECS, 0.5);
        assert_eq!(LOCK_RESET_LIMIT, 15);
        assert_eq!(MIN_DROP_SECS, 0.016);
    }

    #[test]
    fn rotation_index_wraps() {
        for rotation in [Rotation::North, Rotation::East, Rotation::South, Rotation::West] {
            assert_eq!(Rotation::from_index(rotation.index()), rotation);
            assert_eq!(Rotation::from_index(rotation.index() + 4), rotation);
            assert_eq!(
                Rotation::from_index(rotation.index() + 1),
                rotation.rotate_cw()
            );
        }
    }

    #[test]
    fn piece_kind_string_roundtrip() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_str(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn piece_codes_are_distinct_and_nonzero() {
        let mut codes: Vec<u8> = PieceKind::ALL.iter().map(|k| k.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), 7);
        assert!(!codes.contains(&0));
    }

    #[test]
    fn action_as_str_parses_back() {
        for action in [
            GameAction::Start,
            GameAction::MoveLeft,
            GameAction::MoveRight,
            GameAction::SoftDrop,
            GameAction::HardDrop,
            GameAction::RotateCw,
            GameAction::RotateCcw,
            GameAction::Hold,
            GameAction::TogglePause,
            GameAction::Resume,
            GameAction::Menu,
        ] {
            assert_eq!(GameAction::from_str(action.as_str()), Some(action));
        }
    }

    #[test]
    fn rgb_hex() {
        assert_eq!(Rgb(0, 240, 240).to_hex(), "#00f0f0");
    }
}
