use fltk::{enums::{Align, Color, FrameType}, frame::Frame, group::Flex, prelude::*};

use crate::app::domain::session::{EditorSession, SaveStatus};

pub const STATUS_BAR_HEIGHT: i32 = 24;

/// Footer line: open file name plus the auto-save state.
pub struct StatusBar {
    frame: Frame,
}

impl StatusBar {
    pub fn new(flex: &mut Flex) -> Self {
        let mut frame = Frame::default();
        frame.set_frame(FrameType::FlatBox);
        frame.set_align(Align::Left | Align::Inside);
        frame.set_label_size(12);
        flex.fixed(&frame, STATUS_BAR_HEIGHT);

        let mut bar = Self { frame };
        bar.set_text("  No file open");
        bar
    }

    pub fn update(&mut self, session: &EditorSession) {
        let label = match session.file_name() {
            None if session.is_loading() => "  Opening...".to_string(),
            None => "  No file open".to_string(),
            Some(name) => match session.save_status() {
                SaveStatus::Idle => format!("  {name}  |  Saved"),
                SaveStatus::Saving => format!("  {name}  |  Saving..."),
                SaveStatus::Error(msg) => format!("  {name}  |  Save failed: {msg}"),
            },
        };
        self.set_text(&label);
    }

    pub fn apply_theme(&mut self, is_dark: bool) {
        if is_dark {
            self.frame.set_color(Color::from_rgb(35, 35, 35));
            self.frame.set_label_color(Color::from_rgb(180, 180, 180));
        } else {
            self.frame.set_color(Color::from_rgb(235, 235, 235));
            self.frame.set_label_color(Color::from_rgb(60, 60, 60));
        }
        self.frame.redraw();
    }

    fn set_text(&mut self, text: &str) {
        self.frame.set_label(text);
        self.frame.redraw();
    }
}
