use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent};

use crate::submission::SubmissionReport;

pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize(u16, u16),
    /// A submission attempt finished, successfully or not.
    SubmissionFinished(SubmissionReport),
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: mpsc::Sender<AppEvent>,
}

impl EventHandler {
    /// Start the input thread. It stops once the handler is dropped.
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::Builder::new()
            .name("input".to_string())
            .spawn(move || {
                let mut last_tick = Instant::now();
                loop {
                    let timeout = tick_rate.saturating_sub(last_tick.elapsed());
                    match event::poll(timeout) {
                        Ok(true) => {
                            let forwarded = match event::read() {
                                Ok(Event::Key(key)) => event_tx.send(AppEvent::Key(key)),
                                Ok(Event::Resize(cols, rows)) => {
                                    event_tx.send(AppEvent::Resize(cols, rows))
                                }
                                Ok(_) => Ok(()),
                                Err(err) => {
                                    tracing::error!(target: "events", "terminal read failed: {err}");
                                    break;
                                }
                            };
                            if forwarded.is_err() {
                                break;
                            }
                        }
                        Ok(false) => {}
                        Err(err) => {
                            tracing::error!(target: "events", "terminal poll failed: {err}");
                            break;
                        }
                    }

                    if last_tick.elapsed() >= tick_rate {
                        if event_tx.send(AppEvent::Tick).is_err() {
                            break;
                        }
                        last_tick = Instant::now();
                    }
                }
            })
            .ok();

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> mpsc::Sender<AppEvent> {
        self.tx.clone()
    }
}
