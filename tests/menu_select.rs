mod common;

use common::{scripted_console, RecordingClock, DOWN, ENTER, UP};
use storyterm::UiError;

#[test]
fn down_down_enter_picks_the_third_option() {
    let mut out = Vec::new();
    let mut clock = RecordingClock::default();
    let mut console = scripted_console(&[DOWN, DOWN, ENTER], &mut out, &mut clock);

    let picked = console.select(&["First", "Second", "Quit"]).unwrap();
    assert_eq!(picked, 2);
}

#[test]
fn enter_alone_confirms_the_first_option() {
    let mut out = Vec::new();
    let mut clock = RecordingClock::default();
    let mut console = scripted_console(&[ENTER], &mut out, &mut clock);

    let picked = console.select(&["First", "Second"]).unwrap();
    assert_eq!(picked, 0);
}

#[test]
fn moving_up_at_the_top_is_clamped() {
    let mut out = Vec::new();
    let mut clock = RecordingClock::default();
    let mut console = scripted_console(&[UP, UP, ENTER], &mut out, &mut clock);

    let picked = console.select(&["First", "Second"]).unwrap();
    assert_eq!(picked, 0);
}

#[test]
fn moving_down_past_the_bottom_is_clamped() {
    let mut out = Vec::new();
    let mut clock = RecordingClock::default();
    let mut console = scripted_console(&[DOWN, DOWN, DOWN, ENTER], &mut out, &mut clock);

    let picked = console.select(&["First", "Second"]).unwrap();
    assert_eq!(picked, 1);
}

#[test]
fn single_option_menu_ignores_arrows_entirely() {
    let mut out = Vec::new();
    let mut clock = RecordingClock::default();
    let mut console = scripted_console(&[UP, DOWN, UP, ENTER], &mut out, &mut clock);

    let picked = console.select(&["Only"]).unwrap();
    assert_eq!(picked, 0);
}

#[test]
fn empty_menu_fails_before_reading_any_key() {
    let mut out = Vec::new();
    let mut clock = RecordingClock::default();
    let mut console = scripted_console(&[], &mut out, &mut clock);

    let options: [&str; 0] = [];
    assert!(matches!(console.select(&options), Err(UiError::EmptyMenu)));
}

#[test]
fn keys_arriving_in_one_burst_still_step_one_at_a_time() {
    let mut out = Vec::new();
    let mut clock = RecordingClock::default();
    let mut console = scripted_console(&[b"\x1b[B\x1b[B\r"], &mut out, &mut clock);

    let picked = console.select(&["First", "Second", "Third"]).unwrap();
    assert_eq!(picked, 2);
}

#[test]
fn scan_code_arrows_drive_the_menu_like_escape_arrows() {
    let mut out = Vec::new();
    let mut clock = RecordingClock::default();
    let mut console = scripted_console(
        &[b"\xe0\x50", b"\xe0\x50", b"\x00\x48", ENTER],
        &mut out,
        &mut clock,
    );

    let picked = console.select(&["First", "Second", "Third"]).unwrap();
    assert_eq!(picked, 1);
}

#[test]
fn every_move_repaints_the_full_frame() {
    let mut out = Vec::new();
    let mut clock = RecordingClock::default();
    {
        let mut console = scripted_console(&[DOWN, UP, DOWN, ENTER], &mut out, &mut clock);
        console.select(&["First", "Second"]).unwrap();
    }

    let output = String::from_utf8(out).unwrap();
    // one initial frame plus one per arrow key
    assert_eq!(common::frame_count(&output), 4);
}

#[test]
fn the_highlight_follows_the_selection_across_frames() {
    let mut out = Vec::new();
    let mut clock = RecordingClock::default();
    {
        let mut console = scripted_console(&[DOWN, ENTER], &mut out, &mut clock);
        console.select(&["First", "Second"]).unwrap();
    }

    let output = String::from_utf8(out).unwrap();
    common::assert_in_order(
        &output,
        &[
            "\x1b[6;30;42m<\u{2022}> First \x1b[0m",
            "\x1b[6;30;42m<\u{2022}> Second \x1b[0m",
        ],
    );
}
