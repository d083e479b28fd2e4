//! Application layer.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (EditorSession, ThemeMode, AppSettings)
//! - `services/` - Business operations (document IO, auto-save debounce)
//! - `infrastructure/` - External integrations (FLTK buffer, platform, error)
//! - `state.rs` - Main application coordinator
//! - `messages.rs` - Channel messages driving the dispatch loop

pub mod domain;
pub mod infrastructure;
pub mod messages;
pub mod services;
pub mod state;

// Re-exports for convenient external access
pub use domain::{AppSettings, EditorSession, EffectiveTheme, SaveStatus, ThemeMode};
pub use infrastructure::buffer::buffer_text_no_leak;
pub use infrastructure::error::{AppError, MAX_FILE_SIZE};
pub use infrastructure::file_access::FileAccessGate;
pub use infrastructure::platform::{SystemColorScheme, system_color_scheme};
pub use messages::Message;
