use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    prelude::StatefulWidget,
    text::Line,
    widgets::{Clear, Widget},
};

use crate::{
    notice_service::{Notice, NoticeLevel},
    theme::theme,
};

#[derive(Clone, Default)]
pub struct Notification {}

/// The notice currently on screen and how many ticks it has been visible.
#[derive(Debug, Clone)]
pub struct NotificationState {
    pub notice: Notice,
    pub ticks_shown: u32,
}

impl NotificationState {
    pub fn new(notice: Notice) -> Self {
        Self { notice, ticks_shown: 0 }
    }
}

impl Notification {
    pub fn new() -> Self {
        Self {}
    }
}

impl StatefulWidget for Notification {
    type State = NotificationState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let style = match state.notice.level {
            NoticeLevel::Info => theme().notification,
            NoticeLevel::Error => theme().notification_error,
        };

        let text = state.notice.message.text();
        let width = (text.chars().count() as u16 + 4).min(area.width);
        let notice_area = Rect {
            x: area.x + (area.width - width) / 2,
            // last free row above the key hints and the border
            y: area.bottom().saturating_sub(3).max(area.y),
            width,
            height: 1u16.min(area.height),
        };

        Clear.render(notice_area, buf);
        Line::from(format!("  {text}  "))
            .style(style)
            .alignment(Alignment::Center)
            .render(notice_area, buf);
    }
}
