//! Drag gesture state machine.
//!
//! Turns raw pointer events into [`GestureAction`]s. The controller never
//! touches the scroll offset itself; the dial applies each action through the
//! boundary policy.

use fmdial_foundation::{PointerEvent, PointerEventKind, PointerId, VelocityTracker1D};

use crate::config::GestureConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    Idle,
    Dragging,
    Flinging,
}

/// What the dial should do in response to a pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureAction {
    /// Event was ignored.
    None,
    /// A drag started. Any running fling must stop before the next frame.
    Began,
    /// Move the content by this many pixels. Positive reveals higher marks.
    ScrollBy(f32),
    /// Pointer released fast enough to keep moving, in content px/sec.
    Fling { velocity: f32 },
    /// Pointer released slowly. Snap to the nearest mark now.
    Settle,
}

/// State that only exists while a pointer is down.
#[derive(Debug, Clone)]
struct DragSession {
    pointer: PointerId,
    last_x: f32,
    tracker: VelocityTracker1D,
}

#[derive(Debug, Clone)]
pub struct GestureController {
    config: GestureConfig,
    phase: GesturePhase,
    session: Option<DragSession>,
}

impl GestureController {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            phase: GesturePhase::Idle,
            session: None,
        }
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> GestureAction {
        match event.kind {
            PointerEventKind::Down => self.begin(event),
            PointerEventKind::Move => {
                let Some(session) = self.session.as_mut() else {
                    // A move without a preceding down starts the drag here.
                    log::debug!("move without down from pointer {}, starting drag", event.id);
                    return self.begin(event);
                };
                if session.pointer != event.id {
                    return GestureAction::None;
                }
                let x = event.position.x;
                // Content moves against the finger.
                let delta = session.last_x - x;
                session.last_x = x;
                session.tracker.add_position(event.uptime_ms, x);
                GestureAction::ScrollBy(delta)
            }
            PointerEventKind::Up | PointerEventKind::Cancel => {
                let Some(pointer) = self.session.as_ref().map(|session| session.pointer) else {
                    return GestureAction::None;
                };
                // A cancel carries no pointer id and ends whatever drag is active.
                if event.kind == PointerEventKind::Up && pointer != event.id {
                    return GestureAction::None;
                }
                let Some(mut session) = self.session.take() else {
                    return GestureAction::None;
                };
                // Cancel carries no position; the pointer is where it was last seen.
                let x = if event.kind == PointerEventKind::Up {
                    event.position.x
                } else {
                    session.last_x
                };
                session.tracker.add_position(event.uptime_ms, x);
                self.release(&session.tracker)
            }
        }
    }

    /// Called by the dial once a fling has terminated and snapped.
    pub fn fling_finished(&mut self) {
        if self.phase == GesturePhase::Flinging {
            self.phase = GesturePhase::Idle;
        }
    }

    /// Drops any drag session and returns to idle.
    pub fn reset(&mut self) {
        self.session = None;
        self.phase = GesturePhase::Idle;
    }

    fn begin(&mut self, event: &PointerEvent) -> GestureAction {
        if let Some(session) = &self.session {
            if session.pointer != event.id {
                return GestureAction::None;
            }
        }
        let mut tracker = VelocityTracker1D::with_horizon(self.config.velocity_horizon_ms);
        tracker.add_position(event.uptime_ms, event.position.x);
        self.session = Some(DragSession {
            pointer: event.id,
            last_x: event.position.x,
            tracker,
        });
        self.phase = GesturePhase::Dragging;
        GestureAction::Began
    }

    fn release(&mut self, tracker: &VelocityTracker1D) -> GestureAction {
        // Finger velocity; the content travels the other way.
        let velocity = -tracker.velocity_capped(self.config.max_fling_velocity);
        if velocity.abs() > self.config.min_fling_velocity {
            self.phase = GesturePhase::Flinging;
            GestureAction::Fling { velocity }
        } else {
            self.phase = GesturePhase::Idle;
            GestureAction::Settle
        }
    }
}

impl Default for GestureController {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}
