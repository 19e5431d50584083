//! End-to-end tests for the overlay animation engine, driven with
//! scripted input and synthetic frame times.

use keyglow::app::OverlayApp;
use keyglow::config::binding::{InputBinding, InputId};
use keyglow::config::overlay_config::{KeyBindingConfig, OverlayConfig, SizeClass};
use keyglow::overlay::Rgba;
use keyglow::traits::input::{InputSource, ScriptedInput};
use macroquad::prelude::{KeyCode, MouseButton};

fn test_config() -> OverlayConfig {
    let mut config = OverlayConfig::default();
    config.general.bar_speed = 100.0;
    config.general.key_fade_time = 7;
    config.general.counter = true;
    config.keys = vec![
        KeyBindingConfig::new("Z", Rgba::new(255, 0, 0, 255)),
        KeyBindingConfig::new("MouseLeft", Rgba::new(0, 0, 255, 255)),
    ];
    config
}

const Z: InputId = InputId::Key(KeyCode::Z);
const M1: InputId = InputId::Mouse(MouseButton::Left);

/// A held key accumulates exactly one bar whose bottom edge stays
/// anchored at the square top.
#[test]
fn hold_builds_one_anchored_bar() {
    let app = OverlayApp::new(test_config()).unwrap();
    let mut input = ScriptedInput::new();
    input.press(Z);

    let mut list = app.frame(&input, 0.1);
    for _ in 0..9 {
        list = app.frame(&input, 0.1);
    }

    assert_eq!(list.bars.len(), 1);
    let bar = &list.bars[0];
    assert!((bar.h - 100.0).abs() < 1e-3);
    // Bottom edge equals the square top while held.
    let square_top = list.fills[0].y;
    assert!((bar.y + bar.h - square_top).abs() < 1e-3);
}

/// Releasing freezes the bar and lets it scroll off; it disappears
/// only once fully past the window top.
#[test]
fn released_bar_scrolls_off_the_top() {
    let mut config = test_config();
    config.general.height = 200;
    config.general.key_size = 50.0;
    config.general.margin = 10.0;
    let app = OverlayApp::new(config).unwrap();
    let mut input = ScriptedInput::new();

    input.press(Z);
    app.frame(&input, 0.2); // 20 px bar
    input.release_all();

    // Square top sits at 200 - 10 - 50 = 140 px; the frozen bar's
    // bottom starts there and needs 160 px of scroll to clear y=0.
    let mut frames_until_gone = 0;
    for _ in 0..100 {
        let list = app.frame(&input, 0.1); // 10 px per frame
        frames_until_gone += 1;
        if list.bars.is_empty() {
            break;
        }
    }
    assert!((15..=17).contains(&frames_until_gone), "gone after {frames_until_gone} frames");
}

/// Distinct taps leave distinct bars, oldest nearest the window top.
#[test]
fn separate_taps_leave_ordered_bars() {
    let app = OverlayApp::new(test_config()).unwrap();
    let mut input = ScriptedInput::new();

    for _ in 0..3 {
        input.press(Z);
        app.frame(&input, 0.05);
        input.release_all();
        app.frame(&input, 0.05);
    }
    let list = app.frame(&input, 0.0);

    assert_eq!(list.bars.len(), 3);
    for pair in list.bars.windows(2) {
        assert!(pair[0].y < pair[1].y);
    }
}

/// Press and release within a single frame still counts the press and
/// leaves a (zero-growth) segment behind.
#[test]
fn one_frame_tap_is_not_lost() {
    let app = OverlayApp::new(test_config()).unwrap();
    let mut input = ScriptedInput::new();

    input.press(Z);
    app.frame(&input, 0.016);
    input.release_all();
    let list = app.frame(&input, 0.016);

    let counter = list
        .texts
        .iter()
        .find(|t| t.text == "1")
        .expect("press counter should read 1");
    assert_eq!(counter.text, "1");
}

/// Mouse buttons are tracked exactly like keyboard keys.
#[test]
fn mouse_button_tracks_like_a_key() {
    let app = OverlayApp::new(test_config()).unwrap();
    let mut input = ScriptedInput::new();
    input.press(M1);

    let list = app.frame(&input, 0.016);
    assert_eq!(list.fills[1].color, Rgba::new(0, 0, 255, 255));
    assert_eq!(list.fills[0].color, Rgba::BLACK);
    assert_eq!(list.bars.len(), 1);
}

/// After release the fill walks back to the background over
/// key_fade_time frames and stays there.
#[test]
fn fill_fades_to_background_after_release() {
    let app = OverlayApp::new(test_config()).unwrap();
    let mut input = ScriptedInput::new();

    input.press(Z);
    app.frame(&input, 0.016);
    input.release_all();

    let mut reds = Vec::new();
    for _ in 0..10 {
        reds.push(app.frame(&input, 0.016).fills[0].color.r);
    }
    assert_eq!(reds[0], 255); // full fade counter on first released frame
    for pair in reds.windows(2) {
        assert!(pair[1] <= pair[0]);
    }
    assert_eq!(*reds.last().unwrap(), 0);
}

/// Size classes change square geometry but not animation behavior.
#[test]
fn wide_keys_get_wide_bars() {
    let mut config = test_config();
    config.keys[0].size = SizeClass::Large;
    let app = OverlayApp::new(config).unwrap();
    let mut input = ScriptedInput::new();
    input.press(Z);

    let list = app.frame(&input, 0.1);
    assert_eq!(list.bars[0].w, list.fills[0].w);
    assert_eq!(list.fills[0].w, 240.0); // 80 * 3
}

/// Reload under load: a bad config is rejected wholesale, a good one
/// atomically replaces tracked inputs and geometry.
#[test]
fn reload_is_all_or_nothing() {
    let app = OverlayApp::new(test_config()).unwrap();
    let mut input = ScriptedInput::new();
    input.press(Z);
    app.frame(&input, 0.1);

    let mut broken = test_config();
    broken.general.bar_speed = -1.0;
    assert!(app.reload(broken).is_err());

    // Old state intact: the held key still has its bar.
    let list = app.frame(&input, 0.1);
    assert_eq!(list.bars.len(), 1);

    let mut swapped = test_config();
    swapped.keys = vec![KeyBindingConfig::new("Space", Rgba::WHITE)];
    app.reload(swapped).unwrap();

    input.release_all();
    input.press(InputId::Key(KeyCode::Space));
    let list = app.frame(&input, 0.1);
    assert_eq!(list.fills.len(), 1);
    assert_eq!(list.fills[0].color, Rgba::WHITE);
    assert_eq!(list.bars.len(), 1);
}

/// The scripted input double reports exactly what was scripted.
#[test]
fn scripted_input_reports_pressed_ids() {
    let mut input = ScriptedInput::new();
    input.press(Z);
    assert!(input.is_active(Z));
    assert!(!input.is_active(M1));
}

/// Unknown bindings fail app construction instead of being skipped.
#[test]
fn unknown_binding_fails_fast() {
    let mut config = test_config();
    config.keys.push(KeyBindingConfig {
        bind: InputBinding::new("Hyperspace"),
        label: None,
        pressed_color: Rgba::WHITE,
        size: SizeClass::Small,
    });
    let err = OverlayApp::new(config).unwrap_err();
    assert!(err.to_string().contains("Hyperspace"));
}
