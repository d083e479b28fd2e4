use std::path::PathBuf;

use fltk::dialog;

/// Markdown and plain-text filters, one per line, FLTK format
/// ("Description\tPattern"). FLTK adds "All Files" by itself.
fn markdown_filter() -> String {
    ["Markdown Files\t*.{md,markdown}", "Text Files\t*.txt"].join("\n")
}

/// Show the native open dialog, single selection. `None` means the user
/// dismissed the chooser; that is the only way this returns `None`.
pub fn native_open_dialog(dir: Option<&str>) -> Option<PathBuf> {
    dialog::file_chooser("Open File", &markdown_filter(), dir.unwrap_or("."), false)
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_lists_markdown_and_text() {
        let filter = markdown_filter();
        assert!(filter.contains("*.{md,markdown}"));
        assert!(filter.contains("*.txt"));
        assert!(filter.contains('\t'));
        assert!(filter.contains('\n'));
    }
}
