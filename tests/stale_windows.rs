use frame_control::controller::VisibilityController;
use frame_control::settings::Settings;

use mock_host::{MockHost, MockWindow};

#[test]
fn closed_window_is_skipped_without_error() {
    let dir = tempfile::tempdir().unwrap();
    let first = MockWindow::new();
    let middle = MockWindow::new();
    let last = MockWindow::new();
    let host = MockHost::new(vec![first.clone(), middle.clone(), last.clone()]);
    let path = dir.path().join("settings.json");
    let mut controller =
        VisibilityController::new(host, Settings::default(), path.to_string_lossy());

    middle.close();
    let summary = controller.apply_hidden(true).unwrap();

    assert_eq!(summary.windows, 3);
    for win in [&first, &last] {
        assert!(!win.controls_visible());
        assert!(win.has_marker());
    }
    // the stale handle was left alone
    assert!(middle.controls_visible());
    assert!(!middle.has_marker());
}

#[test]
fn broadcast_persists_even_when_every_window_is_gone() {
    let dir = tempfile::tempdir().unwrap();
    let first = MockWindow::new();
    let second = MockWindow::new();
    let host = MockHost::new(vec![first.clone(), second.clone()]);
    let path = dir.path().join("settings.json");
    let mut controller =
        VisibilityController::new(host, Settings::default(), path.to_string_lossy());

    first.close();
    second.close();
    controller.apply_hidden(true).unwrap();

    assert!(Settings::load(path.to_str().unwrap()).controls_hidden);
}
