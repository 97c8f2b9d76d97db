use std::sync::Arc;

use thiserror::Error;

/// Regions of a window's document the plugin touches. Locating the
/// actual node is the host's job; a region that has not been attached
/// yet surfaces as [`WindowError::MissingRegion`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomRegion {
    /// The tab header container under the top-left workspace split. Its
    /// layout shifts to compensate for hidden or shown native controls.
    TabHeader,
    /// The document body.
    Body,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum WindowError {
    /// The window closed between enumeration and the call. Expected
    /// under concurrent window closes and never escalated.
    #[error("window handle is no longer valid")]
    StaleWindow,
    /// The requested region is not present in the window's document,
    /// e.g. the window is still initialising.
    #[error("region not present in window document")]
    MissingRegion,
}

/// One open top-level window of the host application.
///
/// Every operation is best-effort. The handle may go stale at any
/// moment; callers treat [`WindowError::StaleWindow`] as a skip, not a
/// failure. Class and style-element mutations follow DOM semantics:
/// adding a class that is already present and removing one that is
/// absent are no-ops on the host side.
pub trait HostWindow {
    /// Show or hide the native minimize/maximize/close affordances.
    fn set_control_visibility(&self, visible: bool) -> Result<(), WindowError>;

    fn has_class(&self, region: DomRegion, class: &str) -> Result<bool, WindowError>;
    fn add_class(&self, region: DomRegion, class: &str) -> Result<(), WindowError>;
    fn remove_class(&self, region: DomRegion, class: &str) -> Result<(), WindowError>;

    fn has_style_element(&self, id: &str) -> Result<bool, WindowError>;
    /// Insert an empty, identifiable style element into the document head.
    fn insert_style_element(&self, id: &str) -> Result<(), WindowError>;
    /// Remove the style element with the given id, if present.
    fn remove_style_element(&self, id: &str) -> Result<(), WindowError>;
}

pub type WindowRef = Arc<dyn HostWindow>;

/// Enumerates the host's open top-level windows. The returned list is a
/// snapshot, not a live view: windows may close between enumeration and
/// use, which is why all per-window operations tolerate stale handles.
pub trait WindowSet {
    fn all_windows(&self) -> Vec<WindowRef>;
}
