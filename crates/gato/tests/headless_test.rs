//! Tests for headless replay rendering.

use gato::{GatoConfig, format_view, replay_view};

#[test]
fn test_sequence_scenario_via_replay() {
    let config = GatoConfig::default();

    let view = replay_view(&config, &[0, 1], Some(0), false).unwrap();
    assert_eq!(view.status(), "Next Player: X");
    assert_eq!(view.moves().len(), 3);
    assert!(*view.moves()[0].selected());
    assert!(view.cells().iter().all(|c| c.mark().is_empty()));
}

#[test]
fn test_win_scenario_text() {
    let view = replay_view(&GatoConfig::default(), &[0, 3, 1, 4, 2], None, false).unwrap();
    let text = format_view(&view, false).unwrap();

    assert!(text.contains("Winner: X"));
    assert!(text.contains("X X X\nO O .\n. . .\n"));
    assert!(text.contains("> 5. Go to move #5"));
}

#[test]
fn test_clicks_after_win_change_nothing() {
    let config = GatoConfig::default();
    let won = replay_view(&config, &[0, 3, 1, 4, 2], None, false).unwrap();
    let more = replay_view(&config, &[0, 3, 1, 4, 2, 5, 6, 7], None, false).unwrap();
    assert_eq!(won, more);
}

#[test]
fn test_toggle_json_order() {
    let view = replay_view(&GatoConfig::default(), &[4, 0], None, true).unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&format_view(&view, true).unwrap()).unwrap();

    let steps: Vec<u64> = json["moves"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["step"].as_u64().unwrap())
        .collect();
    assert_eq!(steps, vec![2, 1, 0]);
    assert_eq!(json["status"], "Next Player: X");
    assert_eq!(json["cells"][4]["square"]["Occupied"], "X");
}

#[test]
fn test_configured_descending_order_and_title() {
    let config = GatoConfig::from_toml("title = \"Gato\"\ndescending_moves = true").unwrap();
    let view = replay_view(&config, &[4], None, false).unwrap();

    assert_eq!(view.title(), "Gato");
    assert_eq!(view.moves()[0].label(), "Go to move #1");

    let toggled = replay_view(&config, &[4], None, true).unwrap();
    assert_eq!(toggled.moves()[0].label(), "Go to game start");
}

#[test]
fn test_jump_past_history_is_an_error() {
    let err = replay_view(&GatoConfig::default(), &[4], Some(2), false).unwrap_err();
    assert!(err.to_string().contains("history has 2 entries"));
}
