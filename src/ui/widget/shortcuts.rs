use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    prelude::{Line, Span, Style, Widget},
};

use crate::theme::theme;

/// Key hints, e.g. ` p pause  q quit `. When the label contains the key,
/// the key is highlighted in place (`pause` with `p`).
#[derive(Debug, Clone, Default)]
pub struct Shortcuts<'a> {
    values: Vec<(&'a str, &'a str)>,
    shortcut_label_style: Style,
    shortcut_key_style: Style,
    alignment: Alignment,
}

impl Shortcuts<'_> {
    pub fn from<'a>(values: Vec<(&'a str, &'a str)>) -> Shortcuts<'a> {
        Shortcuts {
            values,
            shortcut_label_style: theme().shortcut_label,
            shortcut_key_style: theme().shortcut_key,
            alignment: Alignment::Center,
        }
    }

    pub fn as_line(&self) -> Line<'_> {
        let shortcuts = self
            .values
            .iter()
            .flat_map(|(key, label)| match label.find(*key) {
                Some(idx) if !key.is_empty() => self.spans_from_mnemonic(idx, key, label),
                _ => self.spans_from_shortcut(key, label),
            })
            .collect::<Vec<Span>>();

        Line::from(shortcuts).alignment(self.alignment)
    }

    fn spans_from_shortcut<'a>(&self, key: &'a str, label: &'a str) -> Vec<Span<'a>> {
        vec![
            Span::from(" "),
            Span::from(key).style(self.shortcut_key_style),
            Span::from(" "),
            Span::from(label).style(self.shortcut_label_style),
            Span::from(" "),
        ]
    }

    fn spans_from_mnemonic<'a>(&self, idx: usize, key: &'a str, label: &'a str) -> Vec<Span<'a>> {
        let end = idx + key.len();

        vec![
            Span::from(" "),
            Span::from(&label[..idx]).style(self.shortcut_label_style),
            Span::from(&label[idx..end]).style(self.shortcut_key_style),
            Span::from(&label[end..]).style(self.shortcut_label_style),
            Span::from(" "),
        ]
    }
}

impl Widget for Shortcuts<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.as_line().render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_mnemonic_and_plain_shortcuts() {
        let shortcuts = Shortcuts::from(vec![("p", "pause"), ("esc", "quit")]);
        let line = shortcuts.as_line();

        assert_eq!(plain(&line), " pause  esc quit ");
        let key = line.spans.iter().find(|s| s.content == "p").unwrap();
        assert_eq!(key.style, theme().shortcut_key);
    }
}
