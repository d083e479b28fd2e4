//! FLTK widgets and window chrome.

pub mod dialogs;
pub mod editor_host;
pub mod error_banner;
pub mod file_dialogs;
pub mod main_window;
pub mod markdown;
pub mod menu;
pub mod status_bar;
pub mod theme;
