use crate::{event::CountdownEvent, notice_service::NoticeLevel, ui::widget::NotificationState};

/// Info notices disappear after this many ticks; errors stay until dismissed.
pub const INFO_NOTICE_TICKS: u32 = 5;

/// Widget state that outlives a single frame.
#[derive(Debug, Default)]
pub struct StatefulWidgets {
    pub notice: Option<NotificationState>,
}

impl StatefulWidgets {
    pub fn new() -> Self {
        Self { notice: None }
    }

    pub fn apply(&mut self, event: &CountdownEvent) {
        match event {
            CountdownEvent::AppTick => {
                if let Some(notice) = self.notice.as_mut() {
                    notice.ticks_shown += 1;
                    if notice.notice.level == NoticeLevel::Info && notice.ticks_shown >= INFO_NOTICE_TICKS {
                        self.notice = None;
                    }
                }
            },
            CountdownEvent::NotificationDismiss => self.notice = None,
            _ => (),
        }
    }
}
