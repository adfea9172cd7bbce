//! The dial itself: a plain stateful model that a host drives with pointer
//! events, frame ticks and render requests.

use fmdial_foundation::{MonospacedTextMeasurer, PointerEvent, TextMeasurer};
use fmdial_graphics::{Color, Size};

use crate::bounds::ScrollBounds;
use crate::config::{DialConfig, DialStyle};
use crate::fling_animation::{FlingAnimation, FlingStatus};
use crate::gesture::{GestureAction, GestureController, GesturePhase};
use crate::layout::{measure, Constraints};
use crate::listeners::{FrequencyListeners, ListenerId};
use crate::renderer::{render, DrawPlan};
use crate::scale::Scale;
use crate::scroll::ScrollState;

/// Asks the host for another frame callback.
pub type FrameRequester = Box<dyn FnMut()>;

/// Horizontal FM frequency dial.
///
/// The host reports the viewport with [`FrequencyDial::set_viewport`], feeds
/// pointer events, calls [`FrequencyDial::on_frame`] whenever it was asked for
/// a frame, and draws the plan returned by [`FrequencyDial::render`].
///
/// ```
/// use fmdial_graphics::Size;
/// use fmdial_ui::FrequencyDial;
///
/// let mut dial = FrequencyDial::fm();
/// dial.set_viewport(Size::new(300.0, 120.0));
/// dial.set_frequency(99.5);
/// assert_eq!(dial.frequency(), 99.5);
/// ```
pub struct FrequencyDial {
    scale: Scale,
    style: DialStyle,
    gestures: GestureController,
    fling: FlingAnimation,
    scroll: ScrollState,
    viewport: Size,
    listeners: FrequencyListeners,
    frame_requester: Option<FrameRequester>,
    measurer: Box<dyn TextMeasurer>,
    /// Width the current scroll bounds were derived from.
    layout_width: Option<f32>,
    /// Value set before the first usable viewport.
    pending_value: Option<f64>,
}

impl FrequencyDial {
    pub fn new(config: DialConfig) -> Self {
        let scale = Scale::new(config.scale, config.density);
        let fling = FlingAnimation::new(&config.gestures, scale.density().factor());
        Self {
            scale,
            style: config.style,
            gestures: GestureController::new(config.gestures),
            fling,
            scroll: ScrollState::new(),
            viewport: Size::ZERO,
            listeners: FrequencyListeners::new(),
            frame_requester: None,
            measurer: Box::new(MonospacedTextMeasurer),
            layout_width: None,
            pending_value: None,
        }
    }

    /// 87.0 to 108.0 MHz in 0.1 steps at baseline density.
    pub fn fm() -> Self {
        Self::new(DialConfig::default())
    }

    pub fn with_text_measurer(mut self, measurer: impl TextMeasurer + 'static) -> Self {
        self.measurer = Box::new(measurer);
        self
    }

    pub fn scale(&self) -> &Scale {
        &self.scale
    }

    pub fn style(&self) -> &DialStyle {
        &self.style
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn offset(&self) -> f32 {
        self.scroll.offset()
    }

    pub fn bounds(&self) -> Option<ScrollBounds> {
        self.scroll.bounds()
    }

    pub fn phase(&self) -> GesturePhase {
        self.gestures.phase()
    }

    pub fn is_flinging(&self) -> bool {
        self.fling.is_running()
    }

    /// Whether the host should keep delivering frames.
    pub fn needs_frame(&self) -> bool {
        self.fling.is_running()
    }

    pub fn measure(&self, constraints: Constraints) -> Size {
        measure(&self.scale, &self.style, constraints)
    }

    /// Reports the size the dial was laid out at.
    ///
    /// A size that cannot be drawn into is recorded but leaves the scroll
    /// state alone. When the width changes, the selected mark is kept.
    pub fn set_viewport(&mut self, viewport: Size) {
        if viewport == self.viewport {
            return;
        }
        self.viewport = viewport;
        if !viewport.is_drawable() {
            log::debug!("viewport {viewport:?} is not drawable; dial inactive");
            let dragging = self.gestures.phase() == GesturePhase::Dragging;
            let stopped = self.stop_fling();
            self.gestures.reset();
            if dragging || stopped {
                self.settle();
            }
            return;
        }

        let kept_mark = self
            .layout_width
            .filter(|width| *width != viewport.width)
            .map(|width| self.scale.mark_from_offset(self.scroll.offset(), width));
        if kept_mark.is_some() {
            self.stop_fling();
        }

        let bounds = ScrollBounds::for_viewport(&self.scale, viewport.width);
        self.scroll.set_bounds(bounds);
        self.layout_width = Some(viewport.width);
        log::debug!(
            "viewport {}x{}: borders [{}, {}]",
            viewport.width,
            viewport.height,
            bounds.left,
            bounds.right
        );

        if let Some(mark) = kept_mark {
            self.scroll.scroll_to(bounds.offset_for_mark(mark));
        }
        if let Some(value) = self.pending_value.take() {
            self.set_frequency(value);
        }
    }

    fn is_active(&self) -> bool {
        self.viewport.is_drawable() && self.scroll.bounds().is_some()
    }

    /// Mark under the pointer.
    ///
    /// While the viewport is unusable this is the pending value if one was
    /// set, otherwise the mark of the last layout.
    pub fn current_mark(&self) -> u32 {
        if let Some(mark) = self
            .pending_value
            .and_then(|value| self.scale.mark_from_value(value))
        {
            return mark;
        }
        match self.layout_width {
            Some(width) => self.scale.mark_from_offset(self.scroll.offset(), width),
            None => 0,
        }
    }

    /// Selected frequency, rounded to the scale's precision.
    pub fn frequency(&self) -> f64 {
        self.scale.round_value(self.scale.value_from_mark(self.current_mark()))
    }

    /// Jumps to `value` without animation. Values outside the scale are ignored.
    pub fn set_frequency(&mut self, value: f64) {
        if !value.is_finite() || !self.scale.contains_value(value) {
            log::debug!("ignoring out-of-range frequency {value}");
            return;
        }
        if !self.is_active() {
            self.pending_value = Some(value);
            return;
        }
        let Some(target) = self.scale.mark_from_value(value) else {
            return;
        };
        if self.stop_fling() {
            self.settle();
        }
        let current = self.current_mark();
        let delta = self.scale.offset_delta_for_mark(target, current);
        self.scroll.dispatch_raw_delta(delta);
        log::debug!("frequency set: mark {current} -> {target}, offset {}", self.scroll.offset());
    }

    /// Feeds one pointer event. Returns whether the dial used it.
    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> bool {
        if !self.is_active() {
            return false;
        }
        match self.gestures.on_pointer_event(event) {
            GestureAction::None => false,
            GestureAction::Began => {
                if self.fling.cancel() {
                    log::debug!("fling interrupted at offset {}", self.scroll.offset());
                }
                true
            }
            GestureAction::ScrollBy(delta) => {
                self.scroll.dispatch_raw_delta(delta);
                true
            }
            GestureAction::Fling { velocity } => {
                self.fling.start(velocity);
                self.request_frame();
                true
            }
            GestureAction::Settle => {
                self.settle();
                true
            }
        }
    }

    /// Advances a running fling to `frame_time_nanos`.
    ///
    /// Returns `true` while more frames are needed.
    pub fn on_frame(&mut self, frame_time_nanos: u64) -> bool {
        if !self.fling.is_running() {
            return false;
        }
        let scroll = &mut self.scroll;
        let status = self
            .fling
            .advance(frame_time_nanos, |delta| scroll.dispatch_raw_delta(delta));
        match status {
            FlingStatus::Running => {
                self.request_frame();
                true
            }
            FlingStatus::Finished | FlingStatus::HitBoundary => {
                self.settle();
                self.gestures.fling_finished();
                false
            }
        }
    }

    /// Builds the frame and notifies listeners with the value it shows.
    pub fn render(&mut self) -> DrawPlan {
        if !self.is_active() {
            return DrawPlan::default();
        }
        let plan = render(
            &self.scale,
            &self.style,
            self.scroll.offset(),
            self.viewport,
            self.measurer.as_ref(),
        );
        if !plan.is_empty() {
            self.listeners.notify(plan.current_value());
        }
        plan
    }

    /// Replaces the single change listener.
    pub fn set_on_frequency_change_listener(&mut self, listener: impl FnMut(f64) + 'static) {
        self.listeners.set_primary(listener);
    }

    pub fn clear_on_frequency_change_listener(&mut self) {
        self.listeners.clear_primary();
    }

    pub fn add_frequency_listener(&mut self, listener: impl FnMut(f64) + 'static) -> ListenerId {
        self.listeners.add(listener)
    }

    pub fn remove_frequency_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    pub fn set_frame_requester(&mut self, requester: impl FnMut() + 'static) {
        self.frame_requester = Some(Box::new(requester));
    }

    pub fn set_mark_color(&mut self, color: Color) {
        self.style.mark_color = color;
    }

    pub fn set_pointer_color(&mut self, color: Color) {
        self.style.pointer_color = color;
    }

    fn request_frame(&mut self) {
        if let Some(requester) = self.frame_requester.as_mut() {
            requester();
        }
    }

    fn stop_fling(&mut self) -> bool {
        let stopped = self.fling.cancel();
        if stopped {
            self.gestures.fling_finished();
        }
        stopped
    }

    /// Aligns the offset onto the nearest mark.
    fn settle(&mut self) {
        let Some(bounds) = self.scroll.bounds() else {
            return;
        };
        let offset = self.scroll.offset();
        let moved = self.scroll.scroll_to(bounds.snapped(offset));
        log::debug!("snapped {offset} by {moved} to mark {}", self.current_mark());
    }
}

impl Default for FrequencyDial {
    fn default() -> Self {
        Self::fm()
    }
}

impl std::fmt::Debug for FrequencyDial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrequencyDial")
            .field("offset", &self.scroll.offset())
            .field("viewport", &self.viewport)
            .field("phase", &self.gestures.phase())
            .field("flinging", &self.fling.is_running())
            .field("listeners", &self.listeners)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "tests/dial_tests.rs"]
mod tests;
