use std::path::{Path, PathBuf};

use crate::app::infrastructure::error::AppError;
use crate::app::services::document::LoadedDocument;

/// State of the debounced write-back.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SaveStatus {
    #[default]
    Idle,
    Saving,
    Error(String),
}

/// The single in-memory editing context: at most one open document.
///
/// All state transitions are plain methods over already-performed IO, so
/// the lifecycle can be driven (and tested) without a file chooser or a
/// running event loop. `AppState` performs the actual dialog/fs work and
/// feeds the results in.
///
/// Invariants:
/// - `file_path` and `file_name` are both present or both absent;
/// - `session_id` increments exactly once per successful open, never on
///   cancellation or failure;
/// - `loading` is cleared again on every open outcome.
#[derive(Debug, Default)]
pub struct EditorSession {
    file_path: Option<PathBuf>,
    file_name: Option<String>,
    content: String,
    session_id: u64,
    loading: bool,
    save_status: SaveStatus,
    error: Option<String>,
}

impl EditorSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn session_id(&self) -> u64 {
        self.session_id
    }

    pub fn is_open(&self) -> bool {
        self.file_path.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn save_status(&self) -> &SaveStatus {
        &self.save_status
    }

    /// The current error, held until explicitly dismissed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    // --- Open lifecycle ---

    /// Start an open. Returns false when one is already in flight, in
    /// which case the caller must not proceed (re-entrant opens are
    /// ignored).
    pub fn begin_open(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        true
    }

    /// A file was picked, validated and read. Replaces the document
    /// atomically and bumps the session id so the editor is remounted.
    pub fn open_succeeded(&mut self, doc: LoadedDocument) {
        self.file_path = Some(doc.path);
        self.file_name = Some(doc.name);
        self.content = doc.content;
        self.session_id += 1;
        self.save_status = SaveStatus::Idle;
        self.error = None;
        self.loading = false;
    }

    /// The user dismissed the chooser. Silent: nothing changes.
    pub fn open_cancelled(&mut self) {
        self.loading = false;
    }

    /// The open failed (gate, size ceiling, decoding, IO). The previous
    /// document, if any, stays as it was.
    pub fn open_failed(&mut self, err: &AppError) {
        self.error = Some(err.to_string());
        self.loading = false;
    }

    // --- Content & save lifecycle ---

    /// Update the in-memory content. Returns true when a write-back
    /// should be scheduled, i.e. when a file is open. Mutations with no
    /// file open never schedule anything.
    pub fn set_content(&mut self, text: String) -> bool {
        self.content = text;
        self.is_open()
    }

    pub fn save_started(&mut self) {
        self.save_status = SaveStatus::Saving;
    }

    pub fn save_succeeded(&mut self) {
        self.save_status = SaveStatus::Idle;
    }

    /// A write failed. In-memory content is untouched; the next edit
    /// schedules a fresh attempt.
    pub fn save_failed(&mut self, message: String) {
        self.save_status = SaveStatus::Error(message);
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}
