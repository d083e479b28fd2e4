use fltk::{
    app::Sender,
    button::Button,
    enums::{Align, Color, FrameType},
    frame::Frame,
    group::Flex,
    prelude::*,
};

use crate::app::messages::Message;

pub const BANNER_HEIGHT: i32 = 30;

/// Dismissible banner for file-operation errors. Hidden until an error
/// is held in the session; stays up until the user dismisses it.
pub struct ErrorBanner {
    row: Flex,
    label: Frame,
    dismiss: Button,
}

impl ErrorBanner {
    pub fn new(parent: &mut Flex, sender: &Sender<Message>) -> Self {
        let mut row = Flex::default().row();
        let mut label = Frame::default();
        label.set_frame(FrameType::FlatBox);
        label.set_align(Align::Left | Align::Inside);
        label.set_label_size(13);

        let mut dismiss = Button::default().with_label("Dismiss");
        dismiss.set_frame(FrameType::FlatBox);
        dismiss.set_label_size(12);
        let s = *sender;
        dismiss.set_callback(move |_| s.send(Message::DismissError));
        row.fixed(&dismiss, 80);
        row.end();

        row.hide();
        parent.fixed(&row, 0);

        Self { row, label, dismiss }
    }

    /// Show the banner with `message`, or collapse it when `None`.
    pub fn update(&mut self, parent: &mut Flex, message: Option<&str>) {
        match message {
            Some(msg) => {
                self.label.set_label(&format!("  {msg}"));
                parent.fixed(&self.row, BANNER_HEIGHT);
                self.row.show();
            }
            None => {
                self.row.hide();
                parent.fixed(&self.row, 0);
            }
        }
    }

    pub fn apply_theme(&mut self, is_dark: bool) {
        if is_dark {
            self.row.set_color(Color::from_rgb(90, 40, 40));
            self.label.set_color(Color::from_rgb(90, 40, 40));
            self.label.set_label_color(Color::White);
            self.dismiss.set_color(Color::from_rgb(70, 30, 30));
            self.dismiss.set_label_color(Color::White);
        } else {
            self.row.set_color(Color::from_rgb(255, 230, 230));
            self.label.set_color(Color::from_rgb(255, 230, 230));
            self.label.set_label_color(Color::from_rgb(120, 20, 20));
            self.dismiss.set_color(Color::from_rgb(240, 200, 200));
            self.dismiss.set_label_color(Color::from_rgb(120, 20, 20));
        }
        self.row.redraw();
    }
}
