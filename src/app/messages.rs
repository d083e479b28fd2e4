use crate::app::services::autosave::SaveToken;

/// All messages that can be sent through the FLTK channel.
/// Widget callbacks and timers send these; the dispatch loop in `run`
/// hands them to `AppState`.
#[derive(Debug, Clone)]
pub enum Message {
    // File
    FileOpen,
    FileQuit,

    // Editor
    ContentChanged,
    DoRestyle,
    AutoSaveFire(SaveToken),

    // Theme & view
    CycleTheme,
    SystemThemePoll,
    ToggleWordWrap,
    SetFontSize(i32),

    // Errors & help
    DismissError,
    ShowAbout,
}
