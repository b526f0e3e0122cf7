use std::sync::mpsc;

use crate::event::CountdownEvent;

pub trait Dispatcher {
    fn dispatch(&self, event: CountdownEvent);
}

impl Dispatcher for mpsc::Sender<CountdownEvent> {
    fn dispatch(&self, event: CountdownEvent) {
        // the receiver only goes away during shutdown
        self.send(event).unwrap_or(());
    }
}
