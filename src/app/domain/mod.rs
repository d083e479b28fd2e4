//! Core data structures: the editing session, theme resolution, settings.

pub mod session;
pub mod settings;
pub mod theme;

pub use session::{EditorSession, SaveStatus};
pub use settings::AppSettings;
pub use theme::{EffectiveTheme, ThemeMode};
