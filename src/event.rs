use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        mpsc, Arc,
    },
    thread,
    time::{Duration, Instant},
};

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use tracing::{debug, warn};

use crate::{result::CountdownError, time::Timestamp};

#[derive(Debug, Clone)]
pub enum CountdownEvent {
    AppError(CountdownError),
    AppExit,
    AppTick,
    CountdownTimedOut(Timestamp),
    CountdownToggle,
    InputKey(KeyEvent),
    NotificationDismiss,
    NotificationLast,
}

/// Owns the background thread that polls terminal input and emits
/// [`CountdownEvent::AppTick`] at a fixed cadence. The thread runs for
/// as long as the handler is alive; dropping it stops and joins the thread.
#[derive(Debug)]
pub struct EventHandler {
    sender: mpsc::Sender<CountdownEvent>,
    receiver: mpsc::Receiver<CountdownEvent>,
    _ticker: Ticker,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (sender, receiver) = mpsc::channel();
        let ticker = Ticker::spawn(tick_rate, sender.clone(), poll_terminal_input);

        Self { sender, receiver, _ticker: ticker }
    }

    pub fn sender(&self) -> mpsc::Sender<CountdownEvent> {
        self.sender.clone()
    }

    pub fn next(&self) -> Result<CountdownEvent, mpsc::RecvError> {
        self.receiver.recv()
    }

    pub fn try_next(&self) -> Option<CountdownEvent> {
        self.receiver.try_recv().ok()
    }
}

/// Repeating timer running on its own thread. Between ticks the thread
/// hands its remaining wait time to `poll`, which may block up to that long.
#[derive(Debug)]
pub struct Ticker {
    stop: Arc<AtomicBool>,
    handle: Option<thread::JoinHandle<()>>,
}

impl Ticker {
    pub fn spawn<P>(tick_rate: Duration, sender: mpsc::Sender<CountdownEvent>, mut poll: P) -> Self
    where
        P: FnMut(Duration, &mpsc::Sender<CountdownEvent>) + Send + 'static,
    {
        let stop = Arc::new(AtomicBool::new(false));

        let handle = {
            let stop = stop.clone();
            thread::spawn(move || {
                let mut last_tick = Instant::now();
                while !stop.load(Ordering::Relaxed) {
                    let timeout = tick_rate
                        .checked_sub(last_tick.elapsed())
                        .unwrap_or(Duration::ZERO);

                    poll(timeout, &sender);

                    if last_tick.elapsed() >= tick_rate {
                        if sender.send(CountdownEvent::AppTick).is_err() {
                            break;
                        }
                        last_tick = Instant::now();
                    }
                }
                debug!("ticker thread stopped");
            })
        };

        Self { stop, handle: Some(handle) }
    }

    pub fn stop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("ticker thread panicked");
            }
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Waits at most `timeout` for a terminal event and forwards key presses.
fn poll_terminal_input(timeout: Duration, sender: &mpsc::Sender<CountdownEvent>) {
    // crossterm::event::poll is bounded by `timeout`, so the stop flag is
    // observed at least once per tick.
    let event = match event::poll(timeout) {
        Ok(true) => event::read(),
        Ok(false) => return,
        Err(e) => Err(e),
    };

    let result = match event {
        Ok(CrosstermEvent::Key(e)) if e.kind == KeyEventKind::Press => {
            sender.send(CountdownEvent::InputKey(e))
        },
        Ok(_) => Ok(()),
        Err(e) => sender.send(CountdownEvent::AppError(e.into())),
    };

    if result.is_err() {
        debug!("event receiver dropped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sleep_poll(timeout: Duration, _: &mpsc::Sender<CountdownEvent>) {
        thread::sleep(timeout);
    }

    #[test]
    fn test_ticker_emits_ticks() {
        let (sender, receiver) = mpsc::channel();
        let _ticker = Ticker::spawn(Duration::from_millis(10), sender, sleep_poll);

        for _ in 0..3 {
            let event = receiver.recv_timeout(Duration::from_secs(2)).unwrap();
            assert!(matches!(event, CountdownEvent::AppTick));
        }
    }

    #[test]
    fn test_ticker_stops_on_drop() {
        let (sender, receiver) = mpsc::channel();
        let ticker = Ticker::spawn(Duration::from_millis(5), sender, sleep_poll);
        receiver.recv_timeout(Duration::from_secs(2)).unwrap();

        drop(ticker);
        while receiver.try_recv().is_ok() {}

        // the thread held the only other sender; once joined the channel is closed
        assert!(matches!(
            receiver.recv_timeout(Duration::from_millis(50)),
            Err(mpsc::RecvTimeoutError::Disconnected)
        ));
    }

    #[test]
    fn test_ticker_exits_when_receiver_dropped() {
        let (sender, receiver) = mpsc::channel();
        let mut ticker = Ticker::spawn(Duration::from_millis(5), sender, sleep_poll);
        drop(receiver);

        // sends fail once the receiver is gone, which ends the loop
        thread::sleep(Duration::from_millis(20));
        ticker.stop();
        assert!(ticker.handle.is_none());
    }
}
