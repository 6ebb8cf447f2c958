//! The terminal events handler.

use color_eyre::Result;
use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

/// The terminal events the application reacts to.
#[derive(Clone, Copy, Debug)]
pub enum Event {
    /// Emitted every `tick_rate` milliseconds.
    Tick,
    /// A key press.
    Key(KeyEvent),
    /// The terminal has been resized to the given amount of columns and rows.
    Resize(u16, u16),
}

/// Polls the terminal on a background thread and hands the events over through a channel.
///
/// The thread stops as soon as reading the terminal fails or the handler is dropped, after which [`EventHandler::next`]
/// returns an error.
#[derive(Debug)]
pub struct EventHandler {
    receiver: mpsc::Receiver<Event>,
}

impl EventHandler {
    pub fn new(tick_rate: u64) -> Self {
        let tick_rate = Duration::from_millis(tick_rate);
        let (sender, receiver) = mpsc::channel();

        thread::spawn(move || {
            let mut last_tick = Instant::now();

            loop {
                let timeout = tick_rate
                    .checked_sub(last_tick.elapsed())
                    .unwrap_or(tick_rate);

                let Ok(has_event) = event::poll(timeout) else {
                    break;
                };

                if has_event {
                    let event = match event::read() {
                        // only presses count, so that the keys don't double on terminals reporting releases too
                        Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                            Some(Event::Key(key))
                        }
                        Ok(CrosstermEvent::Resize(columns, rows)) => Some(Event::Resize(columns, rows)),
                        Ok(_) => None,
                        Err(_) => break,
                    };

                    if let Some(event) = event {
                        if sender.send(event).is_err() {
                            break;
                        }
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if sender.send(Event::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        EventHandler { receiver }
    }

    /// Blocks until the next event arrives.
    pub fn next(&self) -> Result<Event> {
        Ok(self.receiver.recv()?)
    }
}
