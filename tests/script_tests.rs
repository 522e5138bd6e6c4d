//! Headless script driver tests

use blockfall::core::{Game, GameConfig};
use blockfall::script::{parse_script, run_script, ScriptStep};
use blockfall::types::GameAction;
use serde_json::Value;

fn run(seed: u32, text: &str) -> Vec<Value> {
    let mut game = Game::new(GameConfig::default().with_seed(seed)).unwrap();
    let steps = parse_script(text).unwrap();
    let mut out = Vec::new();
    run_script(&mut game, &steps, &mut out).unwrap();
    String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[test]
fn test_parse_aliases() {
    let steps = parse_script("restart\nLEFT\nright\ndown\ncw\nccw\nhold\npause\nresume\ndrop\nmenu\n")
        .unwrap();
    let actions: Vec<ScriptStep> = steps.iter().map(|s| s.step).collect();
    assert_eq!(
        actions,
        vec![
            ScriptStep::Action(GameAction::Start),
            ScriptStep::Action(GameAction::MoveLeft),
            ScriptStep::Action(GameAction::MoveRight),
            ScriptStep::Action(GameAction::SoftDrop),
            ScriptStep::Action(GameAction::RotateCw),
            ScriptStep::Action(GameAction::RotateCcw),
            ScriptStep::Action(GameAction::Hold),
            ScriptStep::Action(GameAction::TogglePause),
            ScriptStep::Action(GameAction::Resume),
            ScriptStep::Action(GameAction::HardDrop),
            ScriptStep::Action(GameAction::Menu),
        ]
    );
}

#[test]
fn test_one_line_per_step_plus_final() {
    let lines = run(7, "start\n# comment\nleft\n\ndrop\n");
    assert_eq!(lines.len(), 4);

    assert_eq!(lines[0]["step"], 1);
    assert_eq!(lines[0]["line"], 1);
    assert_eq!(lines[0]["command"], "start");
    assert_eq!(lines[1]["line"], 3);
    assert_eq!(lines[2]["command"], "hardDrop");
    assert_eq!(lines[2]["accepted"], true);
    assert_eq!(lines[2]["events"][0]["type"], "pieceLocked");

    let last = &lines[3];
    assert_eq!(last["phase"], "playing");
    assert_eq!(last["pieceId"], 2);
    assert_eq!(last["preview"].as_array().unwrap().len(), 5);
    assert_eq!(last["board"].as_array().unwrap().len(), 20);
    assert!(last["score"].as_u64().unwrap() > 0);
}

#[test]
fn test_rejected_commands_are_reported() {
    let lines = run(7, "left\nstart\nhold\nhold\n");
    assert_eq!(lines[0]["accepted"], false);
    assert_eq!(lines[1]["accepted"], true);
    assert_eq!(lines[2]["accepted"], true);
    assert_eq!(lines[3]["accepted"], false);
    assert_eq!(lines[4]["canHold"], false);
    assert!(lines[4]["hold"].is_string());
}

#[test]
fn test_wait_runs_gravity() {
    let lines = run(7, "start\nwait 1.1\n");
    let y = lines[2]["active"]["y"].as_i64().unwrap();
    assert_eq!(y, 18);
}

#[test]
fn test_empty_script_reports_menu() {
    let lines = run(1, "");
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["phase"], "menu");
    assert!(lines[0]["active"].is_null());
}

#[test]
fn test_same_seed_same_output() {
    let script = "start\ncw\nleft\ndrop\nright\ndrop\ntick 0.5\ndrop\n";
    assert_eq!(run(2024, script), run(2024, script));
}
