//! A terminal countdown timer: remaining hours/minutes/seconds until a
//! fixed instant, with pause/resume and a localized end-date caption.

pub mod app_init;
pub mod clock;
pub mod config;
pub mod countdown;
pub mod countdown_app;
pub mod dispatcher;
pub mod event;
mod gruvbox;
pub mod input;
pub mod locale;
pub mod logging;
pub mod notice_service;
pub mod rendering;
pub mod result;
pub mod target;
mod theme;
pub mod time;
pub mod tui;
pub mod ui;

pub use clock::{Clock, ManualClock, SystemClock};
pub use countdown::{Countdown, CountdownState};
pub use locale::Locale;
pub use time::{format_delta, remaining_seconds, time_delta, Delta, Timestamp};
