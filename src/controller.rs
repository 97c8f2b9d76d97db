use std::sync::Arc;

use crate::host::WindowSet;
use crate::marker::{self, MarkerStatus};
use crate::settings::{PersistenceError, Settings};

/// Summary of one broadcast: how many windows the marker pass saw and
/// how many of them did not have the marker region yet. A non-zero
/// `missing_regions` keeps the new-window re-apply loop armed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Broadcast {
    pub windows: usize,
    pub missing_regions: usize,
}

/// Owns the in-memory preference and pushes a desired state out to
/// every open window.
pub struct VisibilityController {
    windows: Arc<dyn WindowSet>,
    settings: Settings,
    settings_path: String,
}

impl VisibilityController {
    pub fn new(
        windows: Arc<dyn WindowSet>,
        settings: Settings,
        settings_path: impl Into<String>,
    ) -> Self {
        Self {
            windows,
            settings,
            settings_path: settings_path.into(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn controls_hidden(&self) -> bool {
        self.settings.controls_hidden
    }

    /// Apply `hidden` to every open window and persist it.
    ///
    /// Three phases, each attempted regardless of what the previous one
    /// managed: native control visibility over a window snapshot, the
    /// marker class over a fresh snapshot (the set may have changed in
    /// between), then the settings write. Windows that closed in the
    /// meantime are skipped. The only error is a failed settings write;
    /// visual state has been applied by then, so callers log it and
    /// carry on.
    pub fn apply_hidden(&mut self, hidden: bool) -> Result<Broadcast, PersistenceError> {
        for win in self.windows.all_windows() {
            if let Err(err) = win.set_control_visibility(!hidden) {
                tracing::debug!(error = %err, "skipping window in visibility pass");
            }
        }

        let mut summary = Broadcast::default();
        for win in self.windows.all_windows() {
            summary.windows += 1;
            match marker::set_marker(win.as_ref(), hidden) {
                MarkerStatus::Applied | MarkerStatus::Unchanged => {}
                MarkerStatus::RegionMissing => summary.missing_regions += 1,
                MarkerStatus::WindowClosed => {
                    tracing::debug!("skipping window in marker pass");
                }
            }
        }

        self.settings.controls_hidden = hidden;
        self.settings.save(&self.settings_path)?;
        Ok(summary)
    }

    /// Re-assert whatever the in-memory preference says. Used on load
    /// and whenever a new window surface appears.
    pub fn apply_current(&mut self) -> Result<Broadcast, PersistenceError> {
        self.apply_hidden(self.settings.controls_hidden)
    }
}
