//! Countdown state: the target instant, the run state and the timeout hook.

use std::fmt;

use tracing::{debug, info};

use crate::{
    clock::Clock,
    locale::{Caption, Locale},
    time::{remaining_seconds, time_delta, Delta, Timestamp},
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CountdownState {
    #[default]
    Running,
    Paused,
    TimedOut,
}

impl CountdownState {
    pub fn label(&self) -> &'static str {
        match self {
            CountdownState::Running => "running",
            CountdownState::Paused => "paused",
            CountdownState::TimedOut => "timed out",
        }
    }
}

pub type TimeoutCallback = Box<dyn FnMut(Timestamp)>;

pub struct Countdown {
    target: Timestamp,
    state: CountdownState,
    on_timeout: Option<TimeoutCallback>,
}

impl Countdown {
    pub fn new(target: Timestamp) -> Self {
        Self { target, state: CountdownState::default(), on_timeout: None }
    }

    /// Registers the hook invoked on the transition to [`CountdownState::TimedOut`].
    pub fn on_timeout(mut self, callback: impl FnMut(Timestamp) + 'static) -> Self {
        self.on_timeout = Some(Box::new(callback));
        self
    }

    pub fn target(&self) -> Timestamp {
        self.target
    }

    pub fn state(&self) -> CountdownState {
        self.state
    }

    /// Advances the countdown by one timer firing. Only a running countdown
    /// looks at the clock; the timeout hook fires at most once.
    pub fn tick(&mut self, now: Timestamp) -> CountdownState {
        if self.state != CountdownState::Running {
            return self.state;
        }

        if remaining_seconds(now, self.target) < 0 {
            info!(target_ms = self.target, now, "countdown timed out");
            self.state = CountdownState::TimedOut;
            if let Some(callback) = self.on_timeout.as_mut() {
                callback(self.target);
            }
        }

        self.state
    }

    pub fn tick_with(&mut self, clock: &impl Clock) -> CountdownState {
        self.tick(clock.now_millis())
    }

    /// Flips between running and paused; a timed out countdown stays put.
    pub fn toggle(&mut self) -> CountdownState {
        self.state = match self.state {
            CountdownState::Running => CountdownState::Paused,
            CountdownState::Paused => CountdownState::Running,
            CountdownState::TimedOut => CountdownState::TimedOut,
        };

        debug!(state = self.state.label(), "countdown toggled");
        self.state
    }

    pub fn delta(&self, now: Timestamp) -> Delta {
        time_delta(now, self.target)
    }

    pub fn display(&self, clock: &impl Clock) -> String {
        self.delta(clock.now_millis()).to_string()
    }

    pub fn caption<Tz>(&self, locale: Locale, tz: &Tz) -> Option<Caption>
    where
        Tz: chrono::TimeZone,
        Tz::Offset: fmt::Display,
    {
        locale.caption(self.target, tz)
    }
}

impl fmt::Debug for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Countdown")
            .field("target", &self.target)
            .field("state", &self.state)
            .field("on_timeout", &self.on_timeout.is_some())
            .finish()
    }
}
