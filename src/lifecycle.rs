use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::controller::VisibilityController;
use crate::host::{WindowRef, WindowSet};
use crate::marker;
use crate::settings::Settings;

/// Host lifecycle notifications the plugin subscribes to. All of them
/// arrive on the host's single UI-event thread.
pub enum HostEvent {
    /// A new top-level window opened. Its document is usually not built
    /// yet, so the binder arms a bounded re-apply loop instead of
    /// touching it right away.
    WindowOpened(WindowRef),
    /// A window's workspace finished constructing; the tab header
    /// region exists from here on.
    LayoutReady(WindowRef),
    /// The plugin is being unloaded.
    Unload,
}

/// How often the re-apply loop runs after a new window opened. The
/// host gives no readiness signal for the marker region, so this is a
/// timing assumption, not a contract.
pub const REAPPLY_INTERVAL: Duration = Duration::from_millis(500);
/// How long the re-apply loop keeps going before giving up on a window
/// whose marker region never appears.
pub const REAPPLY_TIMEOUT: Duration = Duration::from_secs(5);

struct Reapply {
    next_attempt: Instant,
    deadline: Instant,
}

/// Binds the controller to the host's lifecycle: applies the persisted
/// state on load, chases newly opened windows until they converge, and
/// forces everything back to shown on unload.
pub struct LifecycleBinder {
    windows: Arc<dyn WindowSet>,
    controller: VisibilityController,
    reapply: Option<Reapply>,
}

impl LifecycleBinder {
    /// Load the persisted settings and wire up a controller. `on_load`
    /// does the visible work; construction stays free of side effects.
    pub fn new(windows: Arc<dyn WindowSet>, settings_path: impl Into<String>) -> Self {
        let settings_path = settings_path.into();
        let settings = Settings::load(&settings_path);
        let controller = VisibilityController::new(windows.clone(), settings, settings_path);
        Self {
            windows,
            controller,
            reapply: None,
        }
    }

    pub fn controller(&self) -> &VisibilityController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut VisibilityController {
        &mut self.controller
    }

    /// Called once when the host loads the plugin: set up logging,
    /// install the style block everywhere and re-assert the persisted
    /// state.
    pub fn on_load(&mut self) {
        crate::logging::init(self.controller.settings().debug_logging);
        tracing::info!("loading frame control");
        for win in self.windows.all_windows() {
            marker::install_style_block(win.as_ref());
        }
        if let Err(err) = self.controller.apply_current() {
            tracing::warn!(error = %err, "could not persist settings during load");
        }
    }

    pub fn handle_event(&mut self, event: HostEvent, now: Instant) {
        match event {
            // The handle itself is not used: the whole set gets
            // re-asserted, so windows that raced the event converge too.
            HostEvent::WindowOpened(_) => {
                self.reapply = Some(Reapply {
                    next_attempt: now + REAPPLY_INTERVAL,
                    deadline: now + REAPPLY_TIMEOUT,
                });
            }
            HostEvent::LayoutReady(win) => {
                if self.controller.controls_hidden() {
                    let status = marker::set_marker(win.as_ref(), true);
                    tracing::debug!(?status, "marker re-applied on layout ready");
                }
            }
            HostEvent::Unload => self.on_unload(),
        }
    }

    /// When the host loop should call [`LifecycleBinder::poll`] next.
    /// `None` while no re-apply loop is armed.
    pub fn next_wakeup(&self) -> Option<Instant> {
        self.reapply.as_ref().map(|r| r.next_attempt)
    }

    /// Drive the re-apply loop: run `apply_current` once per interval
    /// until every window has its marker region or the deadline passes.
    pub fn poll(&mut self, now: Instant) {
        let (next_attempt, deadline) = match &self.reapply {
            Some(r) => (r.next_attempt, r.deadline),
            None => return,
        };
        if now < next_attempt {
            return;
        }
        let converged = match self.controller.apply_current() {
            Ok(summary) => summary.missing_regions == 0,
            Err(err) => {
                tracing::warn!(error = %err, "could not persist settings during re-apply");
                false
            }
        };
        if converged {
            self.reapply = None;
        } else if now >= deadline {
            tracing::warn!("giving up on windows without a marker region");
            self.reapply = None;
        } else {
            self.reapply = Some(Reapply {
                next_attempt: now + REAPPLY_INTERVAL,
                deadline,
            });
        }
    }

    /// Forced restore: whatever the preference says, the controls come
    /// back and the style block goes away before the plugin stops
    /// running. Best-effort per window like every other broadcast.
    pub fn on_unload(&mut self) {
        tracing::info!("unloading frame control");
        self.reapply = None;
        if let Err(err) = self.controller.apply_hidden(false) {
            tracing::warn!(error = %err, "could not persist settings during unload");
        }
        for win in self.windows.all_windows() {
            marker::remove_style_block(win.as_ref());
        }
    }
}
