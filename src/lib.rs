pub mod settings;
pub mod host;
pub mod marker;
pub mod controller;
pub mod lifecycle;
pub mod commands;
pub mod settings_editor;
pub mod logging;
