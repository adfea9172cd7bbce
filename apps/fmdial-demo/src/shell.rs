//! Minimal host for the dial: a wall-clock frame source, an input queue and
//! a text surface.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use fmdial_foundation::PointerEvent;
use fmdial_graphics::Size;
use fmdial_ui::{Constraints, FrequencyDial};
use web_time::Instant;

use crate::strip::TextStrip;

/// Target frame interval while a fling is running.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

pub struct DemoShell {
    dial: FrequencyDial,
    surface: TextStrip,
    start_time: Instant,
    frame_requested: Rc<Cell<bool>>,
    frames: u64,
}

impl DemoShell {
    pub fn new(mut dial: FrequencyDial, width: f32) -> Self {
        let size = dial.measure(Constraints::fixed_width(width, f32::INFINITY));
        dial.set_viewport(size);
        log::info!("dial laid out at {}x{}", size.width, size.height);

        let frame_requested = Rc::new(Cell::new(false));
        let flag = frame_requested.clone();
        dial.set_frame_requester(move || flag.set(true));

        Self {
            surface: TextStrip::new(size.width, dial.scale().pixels_per_mark()),
            dial,
            start_time: Instant::now(),
            frame_requested,
            frames: 0,
        }
    }

    pub fn dial(&self) -> &FrequencyDial {
        &self.dial
    }

    pub fn dial_mut(&mut self) -> &mut FrequencyDial {
        &mut self.dial
    }

    pub fn viewport(&self) -> Size {
        self.dial.viewport()
    }

    /// Milliseconds since the shell started; the timebase for pointer events.
    pub fn uptime_ms(&self) -> i64 {
        self.start_time.elapsed().as_millis() as i64
    }

    fn frame_time_nanos(&self) -> u64 {
        Instant::now()
            .checked_duration_since(self.start_time)
            .unwrap_or_default()
            .as_nanos() as u64
    }

    pub fn dispatch(&mut self, event: PointerEvent) {
        self.dial.on_pointer_event(&event);
    }

    /// Runs one frame: ticks the fling if one asked for it, then draws.
    pub fn update(&mut self) -> String {
        if self.frame_requested.replace(false) {
            let now = self.frame_time_nanos();
            self.dial.on_frame(now);
        }
        self.frames += 1;
        self.surface.draw(&self.dial.render())
    }

    /// Pumps frames at the target rate until no fling is running.
    pub fn run_until_idle(&mut self) -> String {
        let mut last = self.update();
        while self.frame_requested.get() {
            std::thread::sleep(FRAME_INTERVAL);
            last = self.update();
        }
        last
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}
