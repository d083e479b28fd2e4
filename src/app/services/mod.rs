//! Business operations: document IO and the auto-save debounce.

pub mod autosave;
pub mod document;
