use compact_str::CompactString;
use derive_builder::Builder;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget},
};

use crate::{
    countdown::CountdownState,
    locale::Caption,
    theme::theme,
    time::Delta,
    ui::widget::Shortcuts,
};

/// One frame of the countdown: remaining time, run state, the localized
/// end-date caption and the key hints.
#[derive(Debug, Clone, Builder)]
#[builder(pattern = "owned")]
pub struct CountdownView {
    remaining: Delta,
    state: CountdownState,
    #[builder(default, setter(strip_option))]
    caption: Option<Caption>,
    #[builder(default = "CompactString::const_new(\"countdown\")")]
    title: CompactString,
    #[builder(default = "true")]
    show_shortcuts: bool,
}

impl CountdownView {
    pub fn builder() -> CountdownViewBuilder {
        CountdownViewBuilder::default()
    }

    fn remaining_line(&self) -> Line<'static> {
        Line::from(Span::styled(
            self.remaining.to_string(),
            theme().remaining_for(self.state),
        ))
    }

    fn state_line(&self) -> Line<'static> {
        Line::from(Span::styled(self.state.label(), theme().state_label))
    }

    fn caption_line(&self) -> Line<'_> {
        match &self.caption {
            Some(caption) => Line::from(vec![
                Span::styled(caption.labels.ends_on, theme().caption_label),
                Span::raw(" "),
                Span::styled(caption.date.as_str(), theme().caption_value),
                Span::raw(" "),
                Span::styled(caption.labels.at, theme().caption_label),
                Span::raw(" "),
                Span::styled(caption.time.as_str(), theme().caption_value),
            ]),
            None => Line::default(),
        }
    }

    fn shortcuts(&self) -> Shortcuts<'static> {
        match self.state {
            CountdownState::Running => Shortcuts::from(vec![("p", "pause"), ("q", "quit")]),
            CountdownState::Paused => Shortcuts::from(vec![("p", "resume"), ("q", "quit")]),
            CountdownState::TimedOut => Shortcuts::from(vec![("d", "dismiss"), ("q", "quit")]),
        }
    }
}

impl Widget for CountdownView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(theme().border)
            .title(Line::from(format!(" {} ", self.title)).style(theme().border_title))
            .style(theme().background);

        let inner = block.inner(area);
        block.render(area, buf);

        let [_, body, _, hints] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new(vec![self.remaining_line(), self.state_line(), self.caption_line()])
            .alignment(Alignment::Center)
            .render(body, buf);

        if self.show_shortcuts {
            self.shortcuts().render(hints, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::{locale::Locale, ui::widget::buffer_text};

    fn render(view: CountdownView, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| f.render_widget(view, f.area())).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_renders_remaining_time_and_caption() {
        let view = CountdownView::builder()
            .remaining(Delta::new(2, 0, 1))
            .state(CountdownState::Running)
            .caption(Locale::English.caption(1_792_418_700_000, &Utc).unwrap())
            .build()
            .unwrap();

        let screen = render(view, 44, 9);
        assert!(screen.contains("02:00:01"));
        assert!(screen.contains("running"));
        assert!(screen.contains("Ends on 10/19/2026 at 2:05 PM"));
        assert!(screen.contains("countdown"));
        assert!(screen.contains("pause"));
    }

    #[test]
    fn test_renders_paused_german() {
        let view = CountdownView::builder()
            .remaining(Delta::new(0, 5, 9))
            .state(CountdownState::Paused)
            .caption(Locale::German.caption(1_792_418_700_000, &Utc).unwrap())
            .show_shortcuts(false)
            .build()
            .unwrap();

        let screen = render(view, 44, 9);
        assert!(screen.contains("05:09"));
        assert!(screen.contains("paused"));
        assert!(screen.contains("Endet am 19.10.2026 um 14:05"));
        assert!(!screen.contains("resume"));
    }

    #[test]
    fn test_missing_remaining_is_a_build_error() {
        let result = CountdownView::builder().state(CountdownState::Running).build();
        assert!(result.is_err());
    }
}
