use frame_control::controller::VisibilityController;
use frame_control::settings::Settings;
use frame_control::settings_editor::apply_toggle;

use mock_host::{MockHost, MockWindow};

#[test]
fn toggle_applies_and_persists() {
    let dir = tempfile::tempdir().unwrap();
    let win = MockWindow::new();
    let host = MockHost::new(vec![win.clone()]);
    let path = dir.path().join("settings.json");
    let mut controller =
        VisibilityController::new(host, Settings::default(), path.to_string_lossy());

    apply_toggle(&mut controller, true);

    assert!(!win.controls_visible());
    assert!(win.has_marker());
    assert!(Settings::load(path.to_str().unwrap()).controls_hidden);
}

#[test]
fn toggle_swallows_a_failed_save() {
    let dir = tempfile::tempdir().unwrap();
    let win = MockWindow::new();
    let host = MockHost::new(vec![win.clone()]);
    let path = dir.path().join("missing").join("settings.json");
    let mut controller =
        VisibilityController::new(host, Settings::default(), path.to_string_lossy());

    // must not panic; visual state still changes
    apply_toggle(&mut controller, true);

    assert!(!win.controls_visible());
    assert!(controller.controls_hidden());
}
