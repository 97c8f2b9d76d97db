use crate::host::{DomRegion, HostWindow, WindowError};

/// The single identifier the feature is known by in the DOM: the marker
/// class on the tab header, the root class on the body and the id of
/// the injected style element all use it.
pub const MARKER_CLASS: &str = "frame-control";
pub const STYLE_BLOCK_ID: &str = "frame-control";

/// Outcome of one marker application. `RegionMissing` and
/// `WindowClosed` are expected conditions, not failures; the
/// layout-ready and new-window passes repair the former.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerStatus {
    Applied,
    Unchanged,
    RegionMissing,
    WindowClosed,
}

/// Add or remove the marker class on the window's tab header container.
/// Membership is checked first, so repeated calls with the same value
/// settle after the first one.
pub fn set_marker(win: &dyn HostWindow, present: bool) -> MarkerStatus {
    let current = match win.has_class(DomRegion::TabHeader, MARKER_CLASS) {
        Ok(current) => current,
        Err(WindowError::MissingRegion) => return MarkerStatus::RegionMissing,
        Err(WindowError::StaleWindow) => return MarkerStatus::WindowClosed,
    };
    if current == present {
        return MarkerStatus::Unchanged;
    }
    let result = if present {
        win.add_class(DomRegion::TabHeader, MARKER_CLASS)
    } else {
        win.remove_class(DomRegion::TabHeader, MARKER_CLASS)
    };
    match result {
        Ok(()) => MarkerStatus::Applied,
        Err(WindowError::MissingRegion) => MarkerStatus::RegionMissing,
        Err(WindowError::StaleWindow) => MarkerStatus::WindowClosed,
    }
}

/// Install the style element and body root class the plugin's rules
/// hang off. The element is checked by id first; calling again is a
/// no-op.
pub fn install_style_block(win: &dyn HostWindow) {
    match win.has_style_element(STYLE_BLOCK_ID) {
        Ok(false) => {
            if let Err(err) = win.insert_style_element(STYLE_BLOCK_ID) {
                tracing::debug!(error = %err, "could not install style block");
                return;
            }
        }
        Ok(true) => {}
        Err(err) => {
            tracing::debug!(error = %err, "could not install style block");
            return;
        }
    }
    let _ = win.add_class(DomRegion::Body, MARKER_CLASS);
}

/// Remove the style element and body root class. Safe to call on a
/// window where nothing was installed.
pub fn remove_style_block(win: &dyn HostWindow) {
    let _ = win.remove_style_element(STYLE_BLOCK_ID);
    let _ = win.remove_class(DomRegion::Body, MARKER_CLASS);
}
