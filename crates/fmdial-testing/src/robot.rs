//! Robot-style driver for the dial.
//!
//! [`DialRobot`] owns a laid-out [`FrequencyDial`] and a virtual clock, so
//! drags and flings replay identically on every run.
//!
//! # Example
//!
//! ```
//! use fmdial_testing::DialRobot;
//!
//! let mut robot = DialRobot::new(300.0, 120.0);
//! robot.fling(250.0, 100.0);
//! robot.run_until_idle();
//! assert!(!robot.dial().is_flinging());
//! ```

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use fmdial_foundation::PointerEvent;
use fmdial_graphics::Size;
use fmdial_ui::{DrawPlan, FrequencyDial};

/// Frame interval of the virtual clock, in milliseconds.
pub const FRAME_INTERVAL_MS: i64 = 16;

/// Upper bound on frames pumped by [`DialRobot::run_until_idle`].
const MAX_IDLE_FRAMES: usize = 10_000;

const POINTER_Y: f32 = 10.0;

pub struct DialRobot {
    dial: FrequencyDial,
    now_ms: i64,
    last_x: f32,
    frame_requests: Rc<Cell<usize>>,
    reported: Rc<RefCell<Vec<f64>>>,
}

impl DialRobot {
    /// An FM dial laid out at `width`×`height`.
    pub fn new(width: f32, height: f32) -> Self {
        Self::with_dial(FrequencyDial::fm(), width, height)
    }

    pub fn with_dial(mut dial: FrequencyDial, width: f32, height: f32) -> Self {
        let frame_requests = Rc::new(Cell::new(0));
        let reported = Rc::new(RefCell::new(Vec::new()));

        let requests = frame_requests.clone();
        dial.set_frame_requester(move || requests.set(requests.get() + 1));
        let sink = reported.clone();
        dial.add_frequency_listener(move |value| sink.borrow_mut().push(value));
        dial.set_viewport(Size::new(width, height));

        Self {
            dial,
            now_ms: 0,
            last_x: 0.0,
            frame_requests,
            reported,
        }
    }

    pub fn dial(&self) -> &FrequencyDial {
        &self.dial
    }

    pub fn dial_mut(&mut self) -> &mut FrequencyDial {
        &mut self.dial
    }

    /// Virtual time in milliseconds.
    pub fn now_ms(&self) -> i64 {
        self.now_ms
    }

    pub fn advance_time(&mut self, millis: i64) {
        self.now_ms += millis.max(0);
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.dial.set_viewport(Size::new(width, height));
    }

    pub fn press(&mut self, x: f32) -> bool {
        self.last_x = x;
        self.dial.on_pointer_event(&PointerEvent::down(x, POINTER_Y, self.now_ms))
    }

    /// Moves the pointer one frame later.
    pub fn move_to(&mut self, x: f32) -> bool {
        self.move_after(x, FRAME_INTERVAL_MS)
    }

    pub fn move_after(&mut self, x: f32, millis: i64) -> bool {
        self.advance_time(millis);
        self.last_x = x;
        self.dial.on_pointer_event(&PointerEvent::moved(x, POINTER_Y, self.now_ms))
    }

    /// Lifts the pointer where it last was.
    pub fn release(&mut self) -> bool {
        self.dial.on_pointer_event(&PointerEvent::up(self.last_x, POINTER_Y, self.now_ms))
    }

    pub fn cancel(&mut self) -> bool {
        self.dial.on_pointer_event(&PointerEvent::cancel(self.now_ms))
    }

    /// Drags slowly and holds still before lifting, so the dial settles
    /// without flinging.
    pub fn drag(&mut self, from_x: f32, to_x: f32) {
        self.press(from_x);
        self.swipe_moves(from_x, to_x, FRAME_INTERVAL_MS);
        self.advance_time(200);
        self.release();
    }

    /// Swipes quickly and lets go mid-motion.
    pub fn fling(&mut self, from_x: f32, to_x: f32) {
        self.press(from_x);
        self.swipe_moves(from_x, to_x, 8);
        self.release();
    }

    fn swipe_moves(&mut self, from_x: f32, to_x: f32, step_ms: i64) {
        let steps = 10;
        for i in 1..=steps {
            let t = i as f32 / steps as f32;
            self.move_after(from_x + (to_x - from_x) * t, step_ms);
        }
    }

    /// Advances the clock one frame and ticks the dial.
    ///
    /// Returns whether the dial wants another frame.
    pub fn advance_frame(&mut self) -> bool {
        self.advance_time(FRAME_INTERVAL_MS);
        let frame_time_nanos = (self.now_ms.max(0) as u64) * 1_000_000;
        self.dial.on_frame(frame_time_nanos)
    }

    /// Pumps frames until the dial stops asking for them. Returns how many
    /// frames kept it busy.
    pub fn run_until_idle(&mut self) -> usize {
        let mut frames = 0;
        while frames < MAX_IDLE_FRAMES && self.advance_frame() {
            frames += 1;
        }
        frames
    }

    pub fn render(&mut self) -> DrawPlan {
        self.dial.render()
    }

    /// Number of times the dial asked for a frame.
    pub fn frame_requests(&self) -> usize {
        self.frame_requests.get()
    }

    /// Values delivered to listeners, one per render.
    pub fn reported_values(&self) -> Vec<f64> {
        self.reported.borrow().clone()
    }
}
