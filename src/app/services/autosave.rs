use std::time::Duration;

use tracing::debug;

/// Quiet period between the last edit and the disk write.
pub const AUTOSAVE_DEBOUNCE: Duration = Duration::from_millis(500);

/// Identifies one armed debounce timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveToken(u64);

/// Coalescing debounce gate for the auto-save write-back.
///
/// The scheduler owns no timer itself: the caller arms a real timeout for
/// every token and the token is checked again when it fires. Each new
/// edit issues a fresh token, which silently invalidates every earlier
/// one, so a burst of edits collapses into the single write belonging to
/// the last token. Content is captured by the caller at fire time, never
/// at schedule time, so the write always carries the latest text.
#[derive(Debug, Default)]
pub struct AutoSaveScheduler {
    generation: u64,
    armed: bool,
}

impl AutoSaveScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an edit: invalidates any pending token and hands out the
    /// one the caller should arm a timer for.
    pub fn schedule(&mut self) -> SaveToken {
        self.generation += 1;
        self.armed = true;
        debug!(generation = self.generation, "auto-save scheduled");
        SaveToken(self.generation)
    }

    /// Called when a timer fires. True only for the latest token of an
    /// uncancelled cycle; the write may then proceed. Stale timers get
    /// false and must do nothing.
    pub fn try_fire(&mut self, token: SaveToken) -> bool {
        if self.armed && token.0 == self.generation {
            self.armed = false;
            true
        } else {
            debug!(token = token.0, "stale auto-save timer ignored");
            false
        }
    }

    /// Invalidate whatever is pending. Used when the session switches
    /// files or tears down, so no stale write can land on the wrong file.
    pub fn cancel_pending(&mut self) {
        if self.armed {
            debug!(generation = self.generation, "pending auto-save cancelled");
        }
        self.generation += 1;
        self.armed = false;
    }

    /// Whether a debounce window is currently open.
    pub fn has_pending(&self) -> bool {
        self.armed
    }
}
