use fltk::dialog;

pub fn show_about() {
    dialog::message_default(&format!(
        "MarkPad {}\n\nA minimalist markdown notepad.\nEdits are saved back to the open file automatically.",
        env!("CARGO_PKG_VERSION")
    ));
}
