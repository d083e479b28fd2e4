//! MarkPad: a single-document markdown notepad.
//!
//! Pick a local markdown file, edit it, and edits are written back to
//! disk after a short quiet period. The application layer (`app`) holds
//! the session state machine, the auto-save debounce and the theme
//! resolution; `ui` holds the FLTK widgets.

pub mod app;
pub mod ui;

use std::cell::RefCell;
use std::rc::Rc;

use fltk::prelude::*;
use tracing::info;

use app::domain::settings::AppSettings;
use app::infrastructure::file_access::FileAccessGate;
use app::infrastructure::platform;
use app::messages::Message;
use app::state::AppState;
use ui::main_window::build_main_window;
use ui::menu::build_menu;

/// Build the UI and run the dispatch loop until the user quits.
pub fn run() {
    let fltk_app = fltk::app::App::default();
    let (sender, receiver) = fltk::app::channel::<Message>();

    let settings = Rc::new(RefCell::new(AppSettings::load()));
    let gate = FileAccessGate::detect();
    let system_scheme = platform::system_color_scheme();
    info!(
        supported = gate.is_supported(),
        ?system_scheme,
        "starting MarkPad"
    );

    let mut widgets = build_main_window(&sender);
    build_menu(&mut widgets.menu, &sender, &settings.borrow());

    let mut state = AppState::new(widgets, sender, settings, gate, system_scheme);

    // Route the window close button through the quit path so a pending
    // auto-save is flushed; ignore the Escape key.
    {
        let s = sender;
        state.window.set_callback(move |_| {
            if fltk::app::event() == fltk::enums::Event::Close {
                s.send(Message::FileQuit);
            }
        });
    }

    state.window.show();
    state.arm_theme_poll();

    while fltk_app.wait() {
        let Some(msg) = receiver.recv() else {
            continue;
        };
        match msg {
            Message::FileOpen => state.file_open(),
            Message::FileQuit => {
                state.flush_pending_save();
                break;
            }

            Message::ContentChanged => state.content_changed(),
            Message::DoRestyle => state.do_pending_restyle(),
            Message::AutoSaveFire(token) => state.auto_save_fire(token),

            Message::CycleTheme => state.cycle_theme(),
            Message::SystemThemePoll => state.system_theme_poll(),
            Message::ToggleWordWrap => state.toggle_word_wrap(),
            Message::SetFontSize(size) => state.set_font_size(size),

            Message::DismissError => state.dismiss_error(),
            Message::ShowAbout => ui::dialogs::show_about(),
        }
    }
}
