//! `HeadlessHost`: a scripted host with no display.

use super::{Host, HostEvent};
use crate::canvas::{Canvas, RecordingCanvas};
use crate::geometry::SizedVector2;
use std::collections::VecDeque;
use std::io;
use std::time::Duration;

/// Host with a fixed screen, a queue of scripted events and a recording
/// canvas. Once the queue is drained it reports `CloseRequested`.
#[derive(Debug)]
pub struct HeadlessHost {
    size: SizedVector2,
    events: VecDeque<HostEvent>,
    canvas: RecordingCanvas,
    frames: u64,
}

impl HeadlessHost {
    /// Create a host with the given screen size.
    pub const fn new(width: f32, height: f32) -> Self {
        Self {
            size: SizedVector2::new(width, height),
            events: VecDeque::new(),
            canvas: RecordingCanvas::new(),
            frames: 0,
        }
    }

    /// Queue an event.
    pub fn push_event(&mut self, event: HostEvent) {
        self.events.push_back(event);
    }

    /// Queue a resize.
    pub fn push_resize(&mut self, width: f32, height: f32) {
        self.push_event(HostEvent::Resize { width, height });
    }

    /// The recorded frame.
    pub const fn recording(&self) -> &RecordingCanvas {
        &self.canvas
    }

    /// Number of presented frames.
    pub const fn frames(&self) -> u64 {
        self.frames
    }
}

impl Host for HeadlessHost {
    fn screen_size(&self) -> io::Result<SizedVector2> {
        Ok(self.size)
    }

    fn next_event(&mut self, _timeout: Option<Duration>) -> Option<HostEvent> {
        let event = self.events.pop_front().unwrap_or(HostEvent::CloseRequested);
        if let HostEvent::Resize { width, height } = event {
            self.size = SizedVector2::new(width, height);
        }
        Some(event)
    }

    fn canvas(&mut self) -> &mut dyn Canvas {
        &mut self.canvas
    }

    fn present(&mut self) -> io::Result<()> {
        self.frames += 1;
        Ok(())
    }
}
