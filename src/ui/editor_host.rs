use fltk::{
    app::Sender,
    enums::{Align, Font},
    frame::Frame,
    group::Group,
    prelude::*,
    text::{TextBuffer, TextEditor, WrapMode},
};

use crate::app::domain::theme::EffectiveTheme;
use crate::app::infrastructure::buffer::buffer_text_no_leak;
use crate::app::messages::Message;
use crate::ui::markdown::MarkdownStyler;
use crate::ui::theme::apply_editor_theme;

/// The mounted editing surface: either the empty-state panel or a live
/// editor bound to the open document.
///
/// A host is built for exactly one (session, theme) pairing and is torn
/// down and rebuilt whenever either changes; the embedded highlighting
/// surface has no in-place document or theme swap. Keystrokes surface
/// through the text buffer's modify callback as `Message::ContentChanged`.
pub enum EditorHost {
    Empty {
        frame: Frame,
    },
    Editor {
        editor: TextEditor,
        buffer: TextBuffer,
        style_buffer: TextBuffer,
        styler: MarkdownStyler,
    },
}

impl EditorHost {
    /// Mount the empty-state panel: shown when no file is open, or when
    /// the environment cannot open files at all.
    pub fn mount_empty(area: &mut Group, message: &str) -> Self {
        area.begin();
        let mut frame = Frame::new(area.x(), area.y(), area.w(), area.h(), "");
        frame.set_label(message);
        frame.set_label_size(14);
        frame.set_align(Align::Center | Align::Inside | Align::Wrap);
        area.end();
        area.resizable(&frame);
        area.redraw();

        EditorHost::Empty { frame }
    }

    /// Mount a live editor over `content`.
    ///
    /// The buffer text is set before the modify callback is registered,
    /// so mounting never emits a spurious content-changed message (and
    /// never schedules a save right after an open).
    pub fn mount_document(
        area: &mut Group,
        content: &str,
        extension: Option<&str>,
        theme: EffectiveTheme,
        font_size: i32,
        word_wrap: bool,
        sender: &Sender<Message>,
    ) -> Self {
        let mut styler = MarkdownStyler::new(theme, extension, Font::Courier, font_size);

        let mut buffer = TextBuffer::default();
        buffer.set_text(content);
        let mut style_buffer = TextBuffer::default();
        style_buffer.set_text(&styler.restyle(content));

        area.begin();
        let mut editor = TextEditor::new(area.x(), area.y(), area.w(), area.h(), "");
        area.end();
        area.resizable(&editor);

        editor.set_buffer(buffer.clone());
        editor.set_highlight_data(style_buffer.clone(), styler.style_table());
        editor.set_text_font(Font::Courier);
        editor.set_text_size(font_size);
        editor.wrap_mode(
            if word_wrap { WrapMode::AtBounds } else { WrapMode::None },
            0,
        );
        apply_editor_theme(&mut editor, theme.is_dark());

        // Keep the style buffer length-synced on every edit and notify
        // the dispatch loop; restyling itself is debounced upstream.
        let mut style_buf = style_buffer.clone();
        let s = *sender;
        buffer.add_modify_callback(move |pos, inserted, deleted, _restyled, _deleted_text| {
            if inserted > 0 || deleted > 0 {
                if inserted > 0 {
                    let filler: String = std::iter::repeat_n('A', inserted as usize).collect();
                    style_buf.insert(pos, &filler);
                }
                if deleted > 0 {
                    style_buf.remove(pos, pos + deleted);
                }
                s.send(Message::ContentChanged);
            }
        });

        area.redraw();

        EditorHost::Editor {
            editor,
            buffer,
            style_buffer,
            styler,
        }
    }

    /// Current document text, read straight from the widget buffer.
    pub fn text(&self) -> Option<String> {
        match self {
            EditorHost::Empty { .. } => None,
            EditorHost::Editor { buffer, .. } => Some(buffer_text_no_leak(buffer)),
        }
    }

    /// Recompute highlighting for the current text.
    pub fn restyle(&mut self, text: &str) {
        if let EditorHost::Editor {
            editor,
            style_buffer,
            styler,
            ..
        } = self
        {
            style_buffer.set_text(&styler.restyle(text));
            // The style table may have grown new colors.
            editor.set_highlight_data(style_buffer.clone(), styler.style_table());
            editor.redraw();
        }
    }

    pub fn set_word_wrap(&mut self, enabled: bool) {
        if let EditorHost::Editor { editor, .. } = self {
            editor.wrap_mode(
                if enabled { WrapMode::AtBounds } else { WrapMode::None },
                0,
            );
            editor.redraw();
        }
    }

    pub fn set_font_size(&mut self, size: i32) {
        if let EditorHost::Editor { editor, .. } = self {
            editor.set_text_size(size);
            editor.redraw();
        }
    }

    /// Tear the mounted widgets down. The old host must be destroyed
    /// before a replacement is mounted into the same area.
    pub fn unmount(self) {
        match self {
            EditorHost::Empty { frame } => fltk::app::delete_widget(frame),
            EditorHost::Editor { editor, .. } => fltk::app::delete_widget(editor),
        }
    }
}
