//! Input Actor: dedicated thread for polling terminal events.
//!
//! This actor runs in its own thread and uses crossterm's event polling so
//! the event loop can wait on a channel with a frame timeout. Only resize
//! and close requests are forwarded; input dispatch belongs to the host.

use super::HostEvent;
use crossbeam_channel::Sender;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Background thread turning crossterm events into [`HostEvent`]s.
pub struct InputActor {
    handle: Option<JoinHandle<()>>,
    stop: Arc<AtomicBool>,
}

impl InputActor {
    /// Start polling. `poll_timeout` bounds how long the thread waits for
    /// an event before it checks whether it was asked to stop.
    ///
    /// # Errors
    ///
    /// Returns an error if the thread cannot be spawned.
    pub fn spawn(sender: Sender<HostEvent>, poll_timeout: Duration) -> io::Result<Self> {
        let stop = Arc::new(AtomicBool::new(false));
        let thread_stop = Arc::clone(&stop);

        let handle = thread::Builder::new()
            .name("paneshell-input".to_string())
            .spawn(move || Self::run_loop(&sender, &thread_stop, poll_timeout))?;

        Ok(Self {
            handle: Some(handle),
            stop,
        })
    }

    /// Ask the thread to stop after its current poll.
    pub fn shutdown(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    /// Stop the thread and wait for it.
    pub fn join(mut self) {
        self.shutdown();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::warn!("input thread panicked");
            }
        }
    }

    fn run_loop(sender: &Sender<HostEvent>, stop: &AtomicBool, poll_timeout: Duration) {
        while !stop.load(Ordering::Relaxed) {
            let event = match event::poll(poll_timeout) {
                Ok(true) => match event::read() {
                    Ok(event) => Self::convert_event(&event),
                    Err(e) => Some(HostEvent::Error(e.to_string())),
                },
                Ok(false) => None,
                Err(e) => Some(HostEvent::Error(e.to_string())),
            };
            // A closed channel means the host is gone.
            if event.is_some_and(|event| sender.send(event).is_err()) {
                break;
            }
        }
    }

    /// Convert a crossterm event to a host event.
    fn convert_event(event: &Event) -> Option<HostEvent> {
        match event {
            Event::Resize(width, height) => Some(HostEvent::Resize {
                width: f32::from(*width),
                height: f32::from(*height),
            }),
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let ctrl_c = key.code == KeyCode::Char('c')
                    && key.modifiers.contains(KeyModifiers::CONTROL);
                let close = ctrl_c || matches!(key.code, KeyCode::Esc | KeyCode::Char('q'));
                close.then_some(HostEvent::CloseRequested)
            }
            _ => None,
        }
    }
}

impl Drop for InputActor {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    #[test]
    fn test_convert_resize() {
        assert_eq!(
            InputActor::convert_event(&Event::Resize(120, 40)),
            Some(HostEvent::Resize { width: 120.0, height: 40.0 })
        );
    }

    #[test]
    fn test_convert_close_keys() {
        let esc = Event::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        let plain_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE));

        assert_eq!(InputActor::convert_event(&esc), Some(HostEvent::CloseRequested));
        assert_eq!(InputActor::convert_event(&ctrl_c), Some(HostEvent::CloseRequested));
        assert_eq!(InputActor::convert_event(&plain_c), None);
        assert_eq!(InputActor::convert_event(&Event::FocusGained), None);
    }
}
