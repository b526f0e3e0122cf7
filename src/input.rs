use std::sync::mpsc::Sender;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{dispatcher::Dispatcher, event::CountdownEvent};

/// Turns key presses into countdown events.
pub struct InputProcessor {
    sender: Sender<CountdownEvent>,
}

impl InputProcessor {
    pub fn new(sender: Sender<CountdownEvent>) -> Self {
        Self { sender }
    }

    pub fn apply(&self, event: &CountdownEvent) {
        if let CountdownEvent::InputKey(e) = event {
            if let Some(e) = Self::process(e) {
                self.dispatch(e)
            }
        }
    }

    fn process(event: &KeyEvent) -> Option<CountdownEvent> {
        match event.code {
            KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(CountdownEvent::AppExit)
            },
            KeyCode::Char(' ') => Some(CountdownEvent::CountdownToggle),
            KeyCode::Char('p') => Some(CountdownEvent::CountdownToggle),
            KeyCode::Char('a') => Some(CountdownEvent::NotificationLast),
            KeyCode::Char('d') => Some(CountdownEvent::NotificationDismiss),
            KeyCode::Char('q') => Some(CountdownEvent::AppExit),
            KeyCode::Esc => Some(CountdownEvent::AppExit),
            _ => None,
        }
    }
}

impl Dispatcher for InputProcessor {
    fn dispatch(&self, event: CountdownEvent) {
        self.sender.dispatch(event)
    }
}
