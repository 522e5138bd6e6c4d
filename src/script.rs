//! Headless command scripts
//!
//! One command per line; blank lines and `#` comments are skipped.
//!
//! ```text
//! start
//! left
//! cw
//! tick 0.016
//! wait 1.5
//! drop
//! ```
//!
//! Any `GameAction` name is accepted (case-insensitive, short aliases included), plus
//! `tick <seconds>` for a single `update` and `wait <seconds>` for a run of 60 Hz frames.

use std::io::Write;

use anyhow::{anyhow, bail, Context, Result};

use crate::core::Game;
use crate::observe::{EventObservation, FinalObservation, StepObservation};
use crate::types::GameAction;

/// Frame length used by `wait`
pub const FRAME_SECS: f64 = 1.0 / 60.0;

/// Longest duration a single `tick` or `wait` may cover (one hour)
pub const MAX_STEP_SECS: f64 = 3600.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScriptStep {
    Action(GameAction),
    /// A single `update(dt)` call
    Tick(f64),
    /// `update(FRAME_SECS)` repeated to cover the duration
    Wait(f64),
}

impl ScriptStep {
    pub fn describe(&self) -> String {
        match self {
            ScriptStep::Action(action) => action.as_str().to_string(),
            ScriptStep::Tick(secs) => format!("tick {}", secs),
            ScriptStep::Wait(secs) => format!("wait {}", secs),
        }
    }
}

/// A step together with the 1-based line it came from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScriptLine {
    pub line: usize,
    pub step: ScriptStep,
}

fn parse_secs(word: &str, arg: Option<&str>) -> Result<f64> {
    let arg = arg.ok_or_else(|| anyhow!("{}: missing duration in seconds", word))?;
    let secs: f64 = arg
        .parse()
        .map_err(|_| anyhow!("{}: invalid duration: {}", word, arg))?;
    if !secs.is_finite() || secs < 0.0 {
        bail!("{}: duration must be a non-negative number: {}", word, arg);
    }
    if secs > MAX_STEP_SECS {
        bail!("{}: duration {} exceeds the limit of {} seconds", word, arg, MAX_STEP_SECS);
    }
    Ok(secs)
}

/// Parse one line; `Ok(None)` for blanks and comments
pub fn parse_line(line: &str) -> Result<Option<ScriptStep>> {
    let line = line.split('#').next().unwrap_or("").trim();
    if line.is_empty() {
        return Ok(None);
    }

    let mut words = line.split_whitespace();
    let Some(word) = words.next() else {
        return Ok(None);
    };
    let arg = words.next();
    if let Some(extra) = words.next() {
        bail!("unexpected argument: {}", extra);
    }

    let step = match word.to_lowercase().as_str() {
        "tick" => ScriptStep::Tick(parse_secs("tick", arg)?),
        "wait" => ScriptStep::Wait(parse_secs("wait", arg)?),
        _ => {
            let action =
                GameAction::from_str(word).ok_or_else(|| anyhow!("unknown command: {}", word))?;
            if let Some(arg) = arg {
                bail!("{} takes no argument, got: {}", action.as_str(), arg);
            }
            ScriptStep::Action(action)
        }
    };
    Ok(Some(step))
}

pub fn parse_script(text: &str) -> Result<Vec<ScriptLine>> {
    let mut steps = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        if let Some(step) = parse_line(raw).with_context(|| format!("line {}: {}", line, raw))? {
            steps.push(ScriptLine { line, step });
        }
    }
    Ok(steps)
}

/// Apply one step; returns whether the engine accepted it
pub fn apply_step(game: &mut Game, step: ScriptStep) -> bool {
    match step {
        ScriptStep::Action(action) => game.apply_action(action),
        ScriptStep::Tick(secs) => {
            game.update(secs);
            true
        }
        ScriptStep::Wait(secs) => {
            let frames = (secs / FRAME_SECS).round() as u64;
            for _ in 0..frames {
                game.update(FRAME_SECS);
            }
            true
        }
    }
}

/// Run every step, writing one JSON line per step and a final observation line
pub fn run_script(game: &mut Game, steps: &[ScriptLine], out: &mut impl Write) -> Result<()> {
    for (idx, line) in steps.iter().enumerate() {
        let accepted = apply_step(game, line.step);
        let observation = StepObservation {
            step: idx + 1,
            line: line.line,
            command: line.step.describe(),
            accepted,
            events: game
                .pop_events()
                .into_iter()
                .map(EventObservation::from)
                .collect(),
        };
        serde_json::to_writer(&mut *out, &observation)?;
        out.write_all(b"\n")?;
    }

    serde_json::to_writer(&mut *out, &FinalObservation::from_game(game))?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}
