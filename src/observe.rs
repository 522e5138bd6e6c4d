//! JSON-lines observations of a running game
//!
//! One `StepObservation` is written per script step and one `FinalObservation` at the end.
//! Field names are camelCase to match the command names the script accepts.

use serde::Serialize;

use crate::core::{Game, GameEvent, Piece};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PieceObservation {
    pub kind: &'static str,
    pub x: i32,
    pub y: i32,
    pub rotation: &'static str,
    pub color: String,
}

impl From<Piece> for PieceObservation {
    fn from(piece: Piece) -> Self {
        Self {
            kind: piece.kind.as_str(),
            x: piece.x,
            y: piece.y,
            rotation: piece.rotation.as_str(),
            color: piece.color().to_hex(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventObservation {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub combo: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
}

impl From<GameEvent> for EventObservation {
    fn from(event: GameEvent) -> Self {
        let mut out = Self {
            kind: event.name(),
            count: None,
            points: None,
            combo: None,
            level: None,
        };
        match event {
            GameEvent::LinesCleared { count, points } => {
                out.count = Some(count);
                out.points = Some(points);
            }
            GameEvent::Combo(combo) => out.combo = Some(combo),
            GameEvent::LevelUp(level) => out.level = Some(level),
            GameEvent::PieceLocked
            | GameEvent::Tetris
            | GameEvent::PerfectClear
            | GameEvent::GameOver => {}
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepObservation {
    pub step: usize,
    /// 1-based line in the script
    pub line: usize,
    pub command: String,
    pub accepted: bool,
    pub events: Vec<EventObservation>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalObservation {
    pub phase: &'static str,
    pub episode_id: u32,
    pub piece_id: u32,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub combo: u32,
    pub back_to_back: u32,
    pub lines_to_next_level: i64,
    pub active: Option<PieceObservation>,
    pub ghost: Option<PieceObservation>,
    pub hold: Option<&'static str>,
    pub can_hold: bool,
    pub preview: Vec<&'static str>,
    pub last_cleared_rows: Vec<usize>,
    /// Cell codes, top row first (0 = empty, 1..=7 = I O T S Z J L)
    pub board: Vec<Vec<u8>>,
}

impl FinalObservation {
    pub fn from_game(game: &Game) -> Self {
        let snapshot = game.snapshot();
        Self {
            phase: snapshot.phase.as_str(),
            episode_id: snapshot.episode_id,
            piece_id: snapshot.piece_id,
            score: snapshot.scoring.score,
            level: snapshot.scoring.level,
            lines: snapshot.scoring.total_lines,
            combo: snapshot.scoring.combo,
            back_to_back: snapshot.scoring.back_to_back,
            lines_to_next_level: snapshot.scoring.lines_to_next_level(),
            active: snapshot.active.map(PieceObservation::from),
            ghost: snapshot.ghost.map(PieceObservation::from),
            hold: snapshot.hold.map(|kind| kind.as_str()),
            can_hold: snapshot.can_hold,
            preview: snapshot.preview.iter().map(|kind| kind.as_str()).collect(),
            last_cleared_rows: snapshot.last_cleared_rows,
            board: game.grid().to_codes(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;

    #[test]
    fn lines_cleared_event_carries_counts() {
        let json = serde_json::to_string(&EventObservation::from(GameEvent::LinesCleared {
            count: 2,
            points: 300,
        }))
        .unwrap();
        assert_eq!(json, r#"{"type":"linesCleared","count":2,"points":300}"#);
    }

    #[test]
    fn bare_events_have_only_type() {
        let json = serde_json::to_string(&EventObservation::from(GameEvent::Tetris)).unwrap();
        assert_eq!(json, r#"{"type":"tetris"}"#);
    }

    #[test]
    fn menu_observation_has_no_piece() {
        let game = Game::new(GameConfig::default()).unwrap();
        let obs = FinalObservation::from_game(&game);
        assert_eq!(obs.phase, "menu");
        assert!(obs.active.is_none());
        assert_eq!(obs.board.len(), 20);
        assert!(obs.board.iter().all(|row| row.len() == 10));
    }
}
