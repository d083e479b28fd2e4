use std::collections::HashMap;

use fltk::enums::{Color, Font};
use fltk::text::StyleTableEntry;
use syntect::easy::HighlightLines;
use syntect::highlighting::{Color as SyntectColor, ThemeSet};
use syntect::parsing::SyntaxSet;

use crate::app::domain::theme::EffectiveTheme;

/// Maps syntect RGB colors to FLTK style characters ('A', 'B', 'C', ...),
/// building the StyleTableEntry table as new colors show up.
struct StyleMap {
    color_to_char: HashMap<(u8, u8, u8), char>,
    entries: Vec<StyleTableEntry>,
    font: Font,
    font_size: i32,
}

impl StyleMap {
    fn new(font: Font, font_size: i32) -> Self {
        let mut map = Self {
            color_to_char: HashMap::new(),
            entries: Vec::new(),
            font,
            font_size,
        };
        // 'A' is the default/fallback style (plain foreground).
        map.entries.push(StyleTableEntry {
            color: Color::Foreground,
            font,
            size: font_size,
        });
        map.color_to_char.insert((0, 0, 0), 'A');
        map
    }

    fn get_or_insert(&mut self, color: SyntectColor) -> char {
        let key = (color.r, color.g, color.b);
        if let Some(&ch) = self.color_to_char.get(&key) {
            return ch;
        }

        let idx = self.entries.len();
        // FLTK style chars run 'A'..'Z'; 26 colors is plenty for one theme.
        if idx >= 26 {
            return (b'A' + 25) as char;
        }
        let ch = (b'A' + idx as u8) as char;
        self.entries.push(StyleTableEntry {
            color: Color::from_rgb(color.r, color.g, color.b),
            font: self.font,
            size: self.font_size,
        });
        self.color_to_char.insert(key, ch);
        ch
    }
}

/// Syntax-highlighting engine behind the editor surface.
///
/// Owns the syntect machinery for one (document, theme) pairing. There
/// is deliberately no way to change the theme or syntax of a live
/// styler; the editor host is recreated instead, which keeps the style
/// table and the style buffer trivially consistent.
pub struct MarkdownStyler {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
    theme_key: &'static str,
    syntax_name: String,
    style_map: StyleMap,
}

impl MarkdownStyler {
    /// `extension` picks the syntax (md/markdown/txt); unknown extensions
    /// fall back to plain text.
    pub fn new(
        theme: EffectiveTheme,
        extension: Option<&str>,
        font: Font,
        font_size: i32,
    ) -> Self {
        let syntax_set = SyntaxSet::load_defaults_newlines();
        let theme_set = ThemeSet::load_defaults();
        let theme_key = theme_key_for(theme);

        let syntax_name = extension
            .and_then(|ext| syntax_set.find_syntax_by_extension(ext))
            .unwrap_or_else(|| syntax_set.find_syntax_plain_text())
            .name
            .clone();

        Self {
            syntax_set,
            theme_set,
            theme_key,
            syntax_name,
            style_map: StyleMap::new(font, font_size),
        }
    }

    /// Style table for FLTK's `set_highlight_data`. Grows as new colors
    /// are encountered, so fetch it again after every restyle.
    pub fn style_table(&self) -> Vec<StyleTableEntry> {
        self.style_map.entries.clone()
    }

    /// Produce the style-char string for the whole document, one char
    /// per byte of `text`.
    pub fn restyle(&mut self, text: &str) -> String {
        let Some(syntax) = self.syntax_set.find_syntax_by_name(&self.syntax_name) else {
            return default_style(text);
        };
        let theme = &self.theme_set.themes[self.theme_key];

        let mut highlighter = HighlightLines::new(syntax, theme);
        let mut style_string = String::with_capacity(text.len());

        for line in LinesWithEndings::new(text) {
            let regions = highlighter
                .highlight_line(line, &self.syntax_set)
                .unwrap_or_default();
            for (style, piece) in regions {
                let ch = self.style_map.get_or_insert(style.foreground);
                // One style char per byte, not per char, for UTF-8 widths.
                for _ in 0..piece.len() {
                    style_string.push(ch);
                }
            }
        }

        // Parse hiccups can leave the style string short; pad with the
        // default so it always covers the text buffer exactly.
        while style_string.len() < text.len() {
            style_string.push('A');
        }
        style_string
    }
}

fn theme_key_for(theme: EffectiveTheme) -> &'static str {
    match theme {
        EffectiveTheme::Dark => "base16-ocean.dark",
        EffectiveTheme::Light => "InspiredGitHub",
    }
}

fn default_style(text: &str) -> String {
    std::iter::repeat_n('A', text.len()).collect()
}

/// Iterator that yields lines including their line endings.
struct LinesWithEndings<'a> {
    text: &'a str,
}

impl<'a> LinesWithEndings<'a> {
    fn new(text: &'a str) -> Self {
        Self { text }
    }
}

impl<'a> Iterator for LinesWithEndings<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.text.is_empty() {
            return None;
        }
        let end = self.text.find('\n').map(|i| i + 1).unwrap_or(self.text.len());
        let line = &self.text[..end];
        self.text = &self.text[end..];
        Some(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn styler(theme: EffectiveTheme) -> MarkdownStyler {
        MarkdownStyler::new(theme, Some("md"), Font::Courier, 16)
    }

    #[test]
    fn test_style_string_covers_every_byte() {
        let mut s = styler(EffectiveTheme::Light);
        let text = "# Heading\n\nSome *emphasis* and `code`.\n";
        let style = s.restyle(text);
        assert_eq!(style.len(), text.len());
    }

    #[test]
    fn test_style_string_covers_multibyte_text() {
        let mut s = styler(EffectiveTheme::Dark);
        let text = "# Überschrift\n\ncafé ☕\n";
        let style = s.restyle(text);
        assert_eq!(style.len(), text.len());
    }

    #[test]
    fn test_empty_text_yields_empty_style() {
        let mut s = styler(EffectiveTheme::Light);
        assert_eq!(s.restyle(""), "");
    }

    #[test]
    fn test_style_table_has_default_entry() {
        let s = styler(EffectiveTheme::Light);
        assert!(!s.style_table().is_empty());
    }

    #[test]
    fn test_style_table_grows_with_highlighting() {
        let mut s = styler(EffectiveTheme::Dark);
        let before = s.style_table().len();
        s.restyle("# Heading\n\n```rust\nfn main() {}\n```\n");
        assert!(s.style_table().len() >= before);
        assert!(s.style_table().len() <= 26);
    }

    #[test]
    fn test_unknown_extension_falls_back_to_plain_text() {
        let mut s = MarkdownStyler::new(EffectiveTheme::Light, Some("xyzzy"), Font::Courier, 16);
        let text = "# Not a heading here\n";
        let style = s.restyle(text);
        assert_eq!(style.len(), text.len());
        // Plain text never introduces extra styles.
        assert!(style.chars().all(|c| c == 'A'));
    }

    #[test]
    fn test_style_chars_stay_in_table_range() {
        let mut s = styler(EffectiveTheme::Dark);
        let style = s.restyle("# H1\n## H2\n> quote\n- item\n`code`\n");
        let table_len = s.style_table().len();
        for ch in style.chars() {
            let idx = (ch as u8 - b'A') as usize;
            assert!(idx < table_len);
        }
    }
}
