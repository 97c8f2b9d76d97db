use crate::controller::{Broadcast, VisibilityController};
use crate::settings::PersistenceError;

/// User-invocable commands. Only the one that would change the current
/// state is offered at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlsCommand {
    Show,
    Hide,
}

impl ControlsCommand {
    pub fn id(self) -> &'static str {
        match self {
            ControlsCommand::Show => "show-window-controls",
            ControlsCommand::Hide => "hide-window-controls",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ControlsCommand::Show => "Show",
            ControlsCommand::Hide => "Hide",
        }
    }

    /// Whether invoking the command would change anything right now.
    pub fn enabled(self, controls_hidden: bool) -> bool {
        match self {
            ControlsCommand::Show => controls_hidden,
            ControlsCommand::Hide => !controls_hidden,
        }
    }
}

/// The commands the host should currently offer.
pub fn available(controls_hidden: bool) -> Vec<ControlsCommand> {
    [ControlsCommand::Show, ControlsCommand::Hide]
        .into_iter()
        .filter(|cmd| cmd.enabled(controls_hidden))
        .collect()
}

pub fn dispatch(
    cmd: ControlsCommand,
    controller: &mut VisibilityController,
) -> Result<Broadcast, PersistenceError> {
    controller.apply_hidden(matches!(cmd, ControlsCommand::Hide))
}
