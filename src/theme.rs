use once_cell::sync::Lazy;
use ratatui::style::{Modifier, Style};

use crate::{countdown::CountdownState, gruvbox::Gruvbox};

pub struct Theme {
    pub background: Style,
    pub border: Style,
    pub border_title: Style,
    pub remaining: Style,
    pub remaining_paused: Style,
    pub remaining_timed_out: Style,
    pub state_label: Style,
    pub caption_label: Style,
    pub caption_value: Style,
    pub notification: Style,
    pub notification_error: Style,
    pub shortcut_key: Style,
    pub shortcut_label: Style,
}

impl Theme {
    pub fn new() -> Theme {
        Theme {
            background: Style::default().bg(Gruvbox::Dark0Hard.into()),
            border: Style::default()
                .fg(Gruvbox::Orange.into())
                .bg(Gruvbox::Dark0.into()),
            border_title: Style::default()
                .bg(Gruvbox::Orange.into())
                .fg(Gruvbox::Dark0.into())
                .add_modifier(Modifier::BOLD),
            remaining: Style::default()
                .fg(Gruvbox::OrangeBright.into())
                .add_modifier(Modifier::BOLD),
            remaining_paused: Style::default()
                .fg(Gruvbox::Gray244.into())
                .add_modifier(Modifier::BOLD),
            remaining_timed_out: Style::default()
                .fg(Gruvbox::RedBright.into())
                .add_modifier(Modifier::BOLD),
            state_label: Style::default()
                .fg(Gruvbox::Light4.into())
                .add_modifier(Modifier::ITALIC),
            caption_label: Style::default().fg(Gruvbox::Gray244.into()),
            caption_value: Style::default().fg(Gruvbox::Light2.into()),
            notification: Style::default()
                .bg(Gruvbox::Dark1.into())
                .fg(Gruvbox::GreenBright.into())
                .add_modifier(Modifier::BOLD),
            notification_error: Style::default()
                .bg(Gruvbox::Dark1.into())
                .fg(Gruvbox::YellowBright.into())
                .add_modifier(Modifier::BOLD),
            shortcut_key: Style::default()
                .fg(Gruvbox::Orange.into())
                .add_modifier(Modifier::BOLD),
            shortcut_label: Style::default()
                .fg(Gruvbox::OrangeDim.into())
                .add_modifier(Modifier::BOLD),
        }
    }

    pub fn remaining_for(&self, state: CountdownState) -> Style {
        match state {
            CountdownState::Running => self.remaining,
            CountdownState::Paused => self.remaining_paused,
            CountdownState::TimedOut => self.remaining_timed_out,
        }
    }
}

static THEME: Lazy<Theme> = Lazy::new(Theme::new);
pub(crate) fn theme() -> &'static Theme {
    &THEME
}
