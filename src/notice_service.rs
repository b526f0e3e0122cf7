use std::collections::VecDeque;

use compact_str::{format_compact, CompactString, ToCompactString};

use crate::{
    event::CountdownEvent,
    result::CountdownError,
    time::Timestamp,
};

#[derive(Debug)]
pub struct NoticeService {
    info_notices: VecDeque<Notice>,
    error_notices: VecDeque<Notice>,
    most_recent: Option<Notice>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: NoticeMessage,
}

#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub enum NoticeLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NoticeMessage {
    CountdownFinished(Timestamp),
    GeneralMessage(CompactString),
    TerminalError(CompactString),
}

impl NoticeMessage {
    pub fn text(&self) -> CompactString {
        match self {
            NoticeMessage::CountdownFinished(_) => "Countdown finished".to_compact_string(),
            NoticeMessage::GeneralMessage(s) => s.clone(),
            NoticeMessage::TerminalError(s) => format_compact!("Terminal error: {s}"),
        }
    }
}

impl NoticeService {
    pub fn new() -> Self {
        Self {
            info_notices: VecDeque::new(),
            error_notices: VecDeque::new(),
            most_recent: None,
        }
    }

    pub fn apply(&mut self, event: &CountdownEvent) {
        match event {
            CountdownEvent::AppError(e) => {
                let message = match e {
                    CountdownError::Terminal(s) => NoticeMessage::TerminalError(s.clone()),
                    e => NoticeMessage::GeneralMessage(e.to_compact_string()),
                };
                self.push_notice(NoticeLevel::Error, message)
            },
            CountdownEvent::CountdownTimedOut(target) => {
                self.push_notice(NoticeLevel::Info, NoticeMessage::CountdownFinished(*target))
            },
            _ => {},
        }
    }

    pub fn has_error(&self) -> bool {
        !self.error_notices.is_empty()
    }

    pub fn last_notification(&self) -> Option<&Notice> {
        self.most_recent.as_ref()
    }

    pub fn pop_notice(&mut self) -> Option<Notice> {
        let notice = self
            .error_notices
            .pop_front()
            .or_else(|| self.info_notices.pop_front());

        if notice.is_some() {
            self.most_recent = notice.clone();
        }

        notice
    }

    pub fn push_notice(&mut self, level: NoticeLevel, message: NoticeMessage) {
        let notice = Notice { level, message };

        match level {
            NoticeLevel::Info => self.info_notices.push_back(notice),
            NoticeLevel::Error => self.error_notices.push_back(notice),
        }
    }
}

impl Default for NoticeService {
    fn default() -> Self {
        Self::new()
    }
}
