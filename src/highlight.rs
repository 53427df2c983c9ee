use inksac::prelude::*;

use crate::sys::EntryKind;

#[derive(Debug, Clone, Copy)]
pub struct OutputStyler {
    color_support: ColorSupport,
}

impl Default for OutputStyler {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputStyler {
    pub fn new() -> Self {
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            color_support: support,
        }
    }

    /// Styler that passes text through unmodified. Used when color output
    /// is unwanted, and by tests asserting on plain strings.
    pub fn plain() -> Self {
        Self {
            color_support: ColorSupport::NoColor,
        }
    }

    /// Style a directory listing entry by its kind: directories in yellow,
    /// regular files in indigo, everything else unstyled white.
    pub fn paint_entry(&self, name: &str, kind: EntryKind) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return name.to_string();
        }

        let style = match kind {
            EntryKind::Directory => Style::builder()
                .foreground(Color::Yellow)
                .bold()
                .build(),
            EntryKind::File => Style::builder()
                .foreground(Color::RGB(75, 0, 130))
                .build(),
            EntryKind::Other => Style::builder().foreground(Color::White).build(),
        };

        name.style(style).to_string()
    }

    pub fn paint_error(&self, message: &str) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return message.to_string();
        }

        let error_style = Style::builder().foreground(Color::Red).bold().build();

        message.style(error_style).to_string()
    }

    pub fn paint_hint(&self, hint: &str) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return hint.to_string();
        }

        let hint_style = Style::builder()
            .foreground(Color::RGB(128, 128, 128))
            .build();

        hint.style(hint_style).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_color_passthrough() {
        let styler = OutputStyler::plain();

        assert_eq!(styler.paint_entry("docs", EntryKind::Directory), "docs");
        assert_eq!(styler.paint_entry("note.txt", EntryKind::File), "note.txt");
        assert_eq!(styler.paint_error("boom"), "boom");
        assert_eq!(styler.paint_hint("hint"), "hint");
    }
}
