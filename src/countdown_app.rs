use std::{io::Write, sync::mpsc::Sender};

use chrono::Local;
use tracing::{info, warn};

use crate::{
    clock::{Clock, SystemClock},
    countdown::{Countdown, CountdownState},
    dispatcher::Dispatcher,
    event::CountdownEvent,
    input::InputProcessor,
    locale::{Caption, Locale},
    notice_service::{Notice, NoticeLevel, NoticeService},
    time::{Delta, Timestamp},
    ui::{widget::NotificationState, StatefulWidgets},
};

/// Behaviour toggles that come from the config file and the command line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AppOptions {
    pub exit_on_timeout: bool,
    pub bell: bool,
}

pub struct CountdownApp<C: Clock = SystemClock> {
    running: bool,
    countdown: Countdown,
    clock: C,
    locale: Locale,
    options: AppOptions,
    exit_countdown: Option<u32>,
    notices: NoticeService,
    input: InputProcessor,
}

impl<C: Clock> CountdownApp<C> {
    pub fn new(
        sender: Sender<CountdownEvent>,
        target: Timestamp,
        clock: C,
        locale: Locale,
        options: AppOptions,
    ) -> Self {
        let countdown = {
            let sender = sender.clone();
            Countdown::new(target)
                .on_timeout(move |target| sender.dispatch(CountdownEvent::CountdownTimedOut(target)))
        };

        Self {
            running: true,
            countdown,
            clock,
            locale,
            options,
            exit_countdown: None,
            notices: NoticeService::new(),
            input: InputProcessor::new(sender),
        }
    }

    pub fn apply(&mut self, event: CountdownEvent, ui: &mut StatefulWidgets) {
        self.input.apply(&event);
        self.notices.apply(&event);

        match event {
            CountdownEvent::AppExit => self.running = false,
            CountdownEvent::AppTick => self.on_tick(),
            CountdownEvent::CountdownToggle => {
                let state = self.countdown.toggle();
                info!(state = state.label(), "countdown state changed");
            },
            CountdownEvent::CountdownTimedOut(target) => self.on_timed_out(target),
            CountdownEvent::AppError(e) => warn!(error = %e, "application error"),
            CountdownEvent::NotificationLast => {
                if let Some(notice) = self.notices.last_notification() {
                    ui.notice = Some(NotificationState::new(notice.clone()));
                }
            },
            _ => {},
        }

        // errors take precedence over whatever info notice is on screen
        if self.notices.has_error() && ui.notice.as_ref().is_some_and(|n| n.notice.level == NoticeLevel::Info) {
            ui.notice = None;
        }

        if ui.notice.is_none() {
            if let Some(notice) = self.pop_notice() {
                ui.notice = Some(NotificationState::new(notice));
            }
        }
    }

    fn on_tick(&mut self) {
        self.countdown.tick_with(&self.clock);

        match self.exit_countdown {
            Some(0) => self.running = false,
            Some(n) => self.exit_countdown = Some(n - 1),
            None => {},
        }
    }

    fn on_timed_out(&mut self, target: Timestamp) {
        info!(target_ms = target, "countdown finished");

        if self.options.bell {
            ring_bell();
        }

        if self.options.exit_on_timeout {
            // leave the notice on screen for one more tick
            self.exit_countdown = Some(0);
        }
    }

    pub fn state(&self) -> CountdownState {
        self.countdown.state()
    }

    pub fn remaining(&self) -> Delta {
        self.countdown.delta(self.clock.now_millis())
    }

    pub fn caption(&self) -> Option<Caption> {
        self.countdown.caption(self.locale, &Local)
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn pop_notice(&mut self) -> Option<Notice> {
        self.notices.pop_notice()
    }
}

fn ring_bell() {
    let mut stdout = std::io::stdout();
    if let Err(e) = stdout.write_all(b"\x07").and_then(|_| stdout.flush()) {
        warn!(error = %e, "failed to ring terminal bell");
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc::{self, Receiver};

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::*;
    use crate::{clock::ManualClock, notice_service::NoticeMessage, ui::INFO_NOTICE_TICKS};

    struct Harness {
        app: CountdownApp<std::rc::Rc<ManualClock>>,
        clock: std::rc::Rc<ManualClock>,
        ui: StatefulWidgets,
        receiver: Receiver<CountdownEvent>,
    }

    impl Harness {
        fn new(target: Timestamp, options: AppOptions) -> Self {
            let (sender, receiver) = mpsc::channel();
            let clock = std::rc::Rc::new(ManualClock::new(0));
            let app = CountdownApp::new(sender, target, clock.clone(), Locale::English, options);
            Self { app, clock, ui: StatefulWidgets::new(), receiver }
        }

        /// Applies `event` and everything it dispatches, like the main loop does.
        fn apply(&mut self, event: CountdownEvent) {
            self.ui.apply(&event);
            self.app.apply(event, &mut self.ui);
            while let Ok(event) = self.receiver.try_recv() {
                self.ui.apply(&event);
                self.app.apply(event, &mut self.ui);
            }
        }

        fn key(&mut self, code: KeyCode) {
            self.apply(CountdownEvent::InputKey(KeyEvent::new(code, KeyModifiers::NONE)));
        }
    }

    #[test]
    fn test_key_toggles_pause() {
        let mut h = Harness::new(10_000, AppOptions::default());
        h.key(KeyCode::Char(' '));
        assert_eq!(h.app.state(), CountdownState::Paused);
        h.key(KeyCode::Char('p'));
        assert_eq!(h.app.state(), CountdownState::Running);
    }

    #[test]
    fn test_timeout_shows_notice_once() {
        let mut h = Harness::new(1_000, AppOptions::default());
        h.apply(CountdownEvent::AppTick);
        assert!(h.ui.notice.is_none());

        h.clock.set(1_001);
        h.apply(CountdownEvent::AppTick);
        assert_eq!(h.app.state(), CountdownState::TimedOut);
        let notice = h.ui.notice.as_ref().unwrap();
        assert_eq!(notice.notice.message, NoticeMessage::CountdownFinished(1_000));

        h.key(KeyCode::Char('d'));
        assert!(h.ui.notice.is_none());

        h.clock.advance(5_000);
        h.apply(CountdownEvent::AppTick);
        assert!(h.ui.notice.is_none());
        assert!(h.app.is_running());
    }

    #[test]
    fn test_finished_notice_expires_after_ticks() {
        let mut h = Harness::new(0, AppOptions::default());
        h.clock.set(1);
        h.apply(CountdownEvent::AppTick);
        assert!(h.ui.notice.is_some());

        for _ in 1..INFO_NOTICE_TICKS {
            h.apply(CountdownEvent::AppTick);
        }
        assert!(h.ui.notice.is_some());

        h.apply(CountdownEvent::AppTick);
        assert!(h.ui.notice.is_none());
        assert!(h.app.is_running());
    }

    #[test]
    fn test_error_notice_outlives_ticks() {
        let mut h = Harness::new(60_000, AppOptions::default());
        h.apply(CountdownEvent::AppError(crate::result::CountdownError::Terminal("lost".into())));

        for _ in 0..INFO_NOTICE_TICKS * 2 {
            h.apply(CountdownEvent::AppTick);
        }
        assert_eq!(h.ui.notice.as_ref().unwrap().notice.level, NoticeLevel::Error);
    }

    #[test]
    fn test_last_key_recalls_dismissed_notice() {
        let mut h = Harness::new(10_000, AppOptions::default());
        h.key(KeyCode::Char('a'));
        assert!(h.ui.notice.is_none());

        h.clock.set(10_001);
        h.apply(CountdownEvent::AppTick);
        h.key(KeyCode::Char('d'));
        assert!(h.ui.notice.is_none());

        h.key(KeyCode::Char('a'));
        let notice = h.ui.notice.as_ref().unwrap();
        assert_eq!(notice.notice.message, NoticeMessage::CountdownFinished(10_000));
        assert_eq!(notice.ticks_shown, 0);
    }

    #[test]
    fn test_toggle_ignored_after_timeout() {
        let mut h = Harness::new(0, AppOptions::default());
        h.clock.set(10);
        h.apply(CountdownEvent::AppTick);
        h.key(KeyCode::Char('p'));
        assert_eq!(h.app.state(), CountdownState::TimedOut);
    }

    #[test]
    fn test_exit_on_timeout_waits_one_tick() {
        let options = AppOptions { exit_on_timeout: true, ..Default::default() };
        let mut h = Harness::new(0, options);
        h.clock.set(10);

        h.apply(CountdownEvent::AppTick);
        assert!(h.app.is_running());
        assert!(h.ui.notice.is_some());

        h.apply(CountdownEvent::AppTick);
        assert!(!h.app.is_running());
    }

    #[test]
    fn test_quit_key() {
        let mut h = Harness::new(10_000, AppOptions::default());
        h.key(KeyCode::Char('q'));
        assert!(!h.app.is_running());
    }

    #[test]
    fn test_remaining_tracks_clock_while_paused() {
        let mut h = Harness::new(10 * 60_000, AppOptions::default());
        h.key(KeyCode::Char('p'));
        assert_eq!(h.app.remaining(), Delta::new(0, 10, 0));

        h.clock.advance(61_000);
        assert_eq!(h.app.remaining(), Delta::new(0, 8, 59));
    }

    #[test]
    fn test_error_replaces_info_notice() {
        let mut h = Harness::new(0, AppOptions::default());
        h.clock.set(1);
        h.apply(CountdownEvent::AppTick);
        assert_eq!(h.ui.notice.as_ref().unwrap().notice.level, NoticeLevel::Info);

        h.apply(CountdownEvent::AppError(crate::result::CountdownError::Terminal("lost".into())));
        assert_eq!(h.ui.notice.as_ref().unwrap().notice.level, NoticeLevel::Error);
    }
}
