use fltk::{
    app::Sender,
    enums::Shortcut,
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use crate::app::domain::settings::AppSettings;
use crate::app::messages::Message;

pub fn build_menu(menu: &mut MenuBar, sender: &Sender<Message>, settings: &AppSettings) {
    let s = sender;

    // File
    menu.add("File/Open...", Shortcut::Ctrl | 'o', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileOpen) });
    menu.add("File/Quit", Shortcut::Ctrl | 'q', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileQuit) });

    // View
    menu.add("View/Cycle Theme", Shortcut::Ctrl | 't', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::CycleTheme) });
    let ww_flag = if settings.word_wrap_enabled { MenuFlag::Toggle | MenuFlag::Value } else { MenuFlag::Toggle };
    menu.add("View/Toggle Word Wrap", Shortcut::None, ww_flag, { let s = *s; move |_| s.send(Message::ToggleWordWrap) });

    // Format
    menu.add("Format/Font Size/Small (12)", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::SetFontSize(12)) });
    menu.add("Format/Font Size/Medium (16)", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::SetFontSize(16)) });
    menu.add("Format/Font Size/Large (20)", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::SetFontSize(20)) });

    // Help
    menu.add("Help/About MarkPad", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ShowAbout) });
}
