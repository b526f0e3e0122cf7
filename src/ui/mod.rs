pub mod widget;
mod stateful_widgets;

pub use stateful_widgets::{StatefulWidgets, INFO_NOTICE_TICKS};
