use super::*;
use fmdial_foundation::TextMetrics;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

const FRAME_NANOS: u64 = 16_000_000;

fn laid_out() -> FrequencyDial {
    let mut dial = FrequencyDial::fm();
    dial.set_viewport(Size::new(300.0, 120.0));
    dial
}

fn is_snapped(dial: &FrequencyDial) -> bool {
    let bounds = dial.bounds().expect("bounds");
    let unit = dial.scale().pixels_per_mark();
    ((dial.offset() - bounds.left) / unit).fract().abs() < 1e-4
}

/// Drags from `from` to `to` in ten moves `step_ms` apart, starting at `start_ms`.
fn swipe(dial: &mut FrequencyDial, from: f32, to: f32, start_ms: i64, step_ms: i64) -> i64 {
    dial.on_pointer_event(&PointerEvent::down(from, 60.0, start_ms));
    let mut t = start_ms;
    for i in 1..=10 {
        t = start_ms + i * step_ms;
        let x = from + (to - from) * i as f32 / 10.0;
        dial.on_pointer_event(&PointerEvent::moved(x, 60.0, t));
    }
    dial.on_pointer_event(&PointerEvent::up(to, 60.0, t));
    t
}

fn run_fling(dial: &mut FrequencyDial) -> usize {
    let mut frames = 0;
    let mut now = 1_000_000_000u64;
    while dial.on_frame(now) {
        frames += 1;
        now += FRAME_NANOS;
        assert!(frames < 10_000, "fling never ended");
    }
    frames
}

#[test]
fn starts_at_mark_24_for_a_300px_viewport() {
    let dial = laid_out();
    assert_eq!(dial.offset(), 0.0);
    assert_eq!(dial.current_mark(), 24);
    assert_eq!(dial.frequency(), 89.4);
    let bounds = dial.bounds().expect("bounds");
    assert_eq!((bounds.left, bounds.right), (-144.0, 1116.0));
}

#[test]
fn set_frequency_round_trips() {
    let mut dial = laid_out();
    dial.set_frequency(99.5);
    assert_eq!(dial.offset(), 606.0);
    assert_eq!(dial.frequency(), 99.5);
    assert_eq!(dial.frequency(), dial.frequency());
}

#[test]
fn set_frequency_reaches_both_ends() {
    let mut dial = laid_out();
    dial.set_frequency(108.0);
    assert_eq!(dial.offset(), 1116.0);
    assert_eq!(dial.frequency(), 108.0);
    dial.set_frequency(87.0);
    assert_eq!(dial.offset(), -144.0);
    assert_eq!(dial.frequency(), 87.0);
}

#[test]
fn out_of_range_values_are_ignored() {
    let mut dial = laid_out();
    dial.set_frequency(95.0);
    for value in [120.0, 50.0, 108.2, 86.9, f64::NAN, f64::INFINITY] {
        dial.set_frequency(value);
        assert_eq!(dial.frequency(), 95.0);
    }
}

#[test]
fn drag_is_clamped_at_left_border() {
    let mut dial = laid_out();
    dial.on_pointer_event(&PointerEvent::down(0.0, 60.0, 0));
    for step in 1..=50 {
        dial.on_pointer_event(&PointerEvent::moved(step as f32 * 100.0, 60.0, step * 100));
        assert!(dial.offset() >= -144.0);
    }
    assert_eq!(dial.offset(), -144.0);
    dial.on_pointer_event(&PointerEvent::up(5_000.0, 60.0, 6_000));
    assert_eq!(dial.offset(), -144.0);
    assert_eq!(dial.frequency(), 87.0);
    assert_eq!(dial.phase(), GesturePhase::Idle);
}

#[test]
fn slow_release_snaps_to_nearest_mark() {
    let mut dial = laid_out();
    dial.on_pointer_event(&PointerEvent::down(200.0, 60.0, 0));
    dial.on_pointer_event(&PointerEvent::moved(190.5, 60.0, 16));
    dial.on_pointer_event(&PointerEvent::moved(187.0, 60.0, 32));
    assert_eq!(dial.offset(), 13.0);
    assert_eq!(dial.phase(), GesturePhase::Dragging);

    dial.on_pointer_event(&PointerEvent::up(187.0, 60.0, 400));
    assert_eq!(dial.offset(), 12.0);
    assert!(is_snapped(&dial));
    assert!(!dial.is_flinging());
}

#[test]
fn fling_runs_until_it_settles_on_a_mark() {
    let mut dial = laid_out();
    let requests = Rc::new(Cell::new(0));
    let counter = requests.clone();
    dial.set_frame_requester(move || counter.set(counter.get() + 1));

    swipe(&mut dial, 250.0, 150.0, 0, 8);
    assert!(dial.is_flinging());
    assert!(dial.needs_frame());
    assert_eq!(dial.phase(), GesturePhase::Flinging);
    assert_eq!(requests.get(), 1);
    let released_at = dial.offset();

    let frames = run_fling(&mut dial);
    assert!(frames > 1);
    assert_eq!(requests.get(), 1 + frames);
    assert!(dial.offset() > released_at);
    assert!(is_snapped(&dial));
    assert_eq!(dial.phase(), GesturePhase::Idle);
    assert!(!dial.needs_frame());
}

#[test]
fn fling_stops_at_the_border() {
    let mut dial = laid_out();
    dial.set_frequency(107.0);
    swipe(&mut dial, 290.0, 10.0, 0, 4);
    assert!(dial.is_flinging());
    run_fling(&mut dial);
    assert_eq!(dial.offset(), 1116.0);
    assert_eq!(dial.frequency(), 108.0);
}

#[test]
fn pointer_down_cancels_a_fling() {
    let mut dial = laid_out();
    swipe(&mut dial, 250.0, 150.0, 0, 8);
    let mut now = 1_000_000_000u64;
    for _ in 0..4 {
        assert!(dial.on_frame(now));
        now += FRAME_NANOS;
    }
    let halted_at = dial.offset();

    assert!(dial.on_pointer_event(&PointerEvent::down(100.0, 60.0, 200)));
    assert!(!dial.is_flinging());
    assert_eq!(dial.phase(), GesturePhase::Dragging);
    assert!(!dial.on_frame(now));
    assert_eq!(dial.offset(), halted_at);
}

#[test]
fn set_frequency_cancels_a_fling() {
    let mut dial = laid_out();
    swipe(&mut dial, 250.0, 150.0, 0, 8);
    assert!(dial.is_flinging());
    dial.set_frequency(100.0);
    assert!(!dial.is_flinging());
    assert_eq!(dial.phase(), GesturePhase::Idle);
    assert!(!dial.on_frame(1_000_000_000));
}

#[test]
fn no_frames_requested_while_dragging() {
    let mut dial = laid_out();
    let requests = Rc::new(Cell::new(0));
    let counter = requests.clone();
    dial.set_frame_requester(move || counter.set(counter.get() + 1));

    dial.on_pointer_event(&PointerEvent::down(200.0, 60.0, 0));
    dial.on_pointer_event(&PointerEvent::moved(150.0, 60.0, 16));
    assert!(!dial.needs_frame());
    assert_eq!(requests.get(), 0);
}

#[test]
fn every_render_notifies_with_the_current_value() {
    let mut dial = laid_out();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    dial.set_on_frequency_change_listener(move |value| sink.borrow_mut().push(value));

    dial.render();
    dial.render();
    dial.set_frequency(99.5);
    dial.render();
    assert_eq!(*seen.borrow(), vec![89.4, 89.4, 99.5]);
}

#[test]
fn last_listener_wins_and_observers_can_unsubscribe() {
    let mut dial = laid_out();
    let first = Rc::new(Cell::new(0));
    let second = Rc::new(Cell::new(0));
    let observed = Rc::new(Cell::new(0));

    let sink = first.clone();
    dial.set_on_frequency_change_listener(move |_| sink.set(sink.get() + 1));
    let sink = second.clone();
    dial.set_on_frequency_change_listener(move |_| sink.set(sink.get() + 1));
    let sink = observed.clone();
    let id = dial.add_frequency_listener(move |_| sink.set(sink.get() + 1));

    dial.render();
    assert!(dial.remove_frequency_listener(id));
    dial.clear_on_frequency_change_listener();
    dial.render();

    assert_eq!((first.get(), second.get(), observed.get()), (0, 1, 1));
}

#[test]
fn value_set_before_layout_is_applied_on_first_layout() {
    let mut dial = FrequencyDial::fm();
    dial.set_frequency(99.5);
    assert_eq!(dial.frequency(), 99.5);

    dial.set_viewport(Size::new(300.0, 120.0));
    assert_eq!(dial.offset(), 606.0);
    assert_eq!(dial.frequency(), 99.5);
}

#[test]
fn resize_keeps_the_selected_mark() {
    let mut dial = laid_out();
    dial.set_frequency(99.5);
    dial.set_viewport(Size::new(400.0, 120.0));
    assert_eq!(dial.frequency(), 99.5);
    assert_eq!(dial.offset(), 556.0);

    // Height-only changes leave the offset alone.
    dial.set_viewport(Size::new(400.0, 200.0));
    assert_eq!(dial.offset(), 556.0);
}

#[test]
fn degenerate_viewport_disables_the_dial() {
    let mut dial = FrequencyDial::fm();
    dial.set_viewport(Size::new(0.0, 120.0));
    let notified = Rc::new(Cell::new(false));
    let sink = notified.clone();
    dial.set_on_frequency_change_listener(move |_| sink.set(true));

    assert!(!dial.on_pointer_event(&PointerEvent::down(10.0, 10.0, 0)));
    assert!(dial.render().is_empty());
    assert!(!notified.get());
    assert_eq!(dial.frequency(), 87.0);
}

#[test]
fn losing_the_viewport_keeps_the_selected_value() {
    let mut dial = laid_out();
    dial.set_frequency(99.5);
    dial.set_viewport(Size::new(0.0, 120.0));
    assert_eq!(dial.frequency(), 99.5);
    assert_eq!(dial.offset(), 606.0);

    dial.set_viewport(Size::new(300.0, 120.0));
    assert_eq!(dial.frequency(), 99.5);
    assert_eq!(dial.offset(), 606.0);

    dial.set_viewport(Size::new(0.0, 120.0));
    dial.set_frequency(101.0);
    assert_eq!(dial.frequency(), 101.0);
    dial.set_viewport(Size::new(300.0, 120.0));
    assert_eq!(dial.frequency(), 101.0);
}

#[test]
fn losing_the_viewport_mid_fling_settles_on_a_mark() {
    let mut dial = laid_out();
    swipe(&mut dial, 250.0, 150.0, 0, 8);
    let mut now = 1_000_000_000u64;
    for _ in 0..4 {
        assert!(dial.on_frame(now));
        now += FRAME_NANOS;
    }

    dial.set_viewport(Size::new(0.0, 120.0));
    assert!(!dial.is_flinging());
    assert_eq!(dial.phase(), GesturePhase::Idle);
    assert!(is_snapped(&dial));

    dial.set_viewport(Size::new(300.0, 120.0));
    assert!(is_snapped(&dial));
    assert!(!dial.on_frame(now));
}

#[test]
fn losing_the_viewport_mid_drag_settles_on_a_mark() {
    let mut dial = laid_out();
    dial.on_pointer_event(&PointerEvent::down(200.0, 60.0, 0));
    dial.on_pointer_event(&PointerEvent::moved(187.0, 60.0, 16));
    assert_eq!(dial.offset(), 13.0);

    dial.set_viewport(Size::new(0.0, 120.0));
    assert_eq!(dial.phase(), GesturePhase::Idle);
    assert_eq!(dial.offset(), 12.0);

    dial.set_viewport(Size::new(300.0, 120.0));
    assert!(!dial.on_pointer_event(&PointerEvent::up(187.0, 60.0, 32)));
    assert_eq!(dial.offset(), 12.0);
    assert_eq!(dial.frequency(), 89.6);
}

#[test]
fn render_without_listener_is_fine() {
    let mut dial = laid_out();
    let plan = dial.render();
    assert!(!plan.is_empty());
    assert_eq!(plan.current_value(), 89.4);
}

#[test]
fn colours_are_cosmetic() {
    let mut dial = laid_out();
    let before = dial.offset();
    dial.set_mark_color(Color::WHITE);
    dial.set_pointer_color(Color::BLACK);
    assert_eq!(dial.style().mark_color, Color::WHITE);
    assert_eq!(dial.offset(), before);

    let plan = dial.render();
    let value = plan
        .text_with_role(crate::renderer::TextRole::Value)
        .expect("value label");
    assert_eq!(value.color, Color::BLACK);
}

#[test]
fn host_text_measurer_positions_labels() {
    struct FixedMeasurer;
    impl TextMeasurer for FixedMeasurer {
        fn measure(&self, _text: &str, _font_size: f32) -> TextMetrics {
            TextMetrics {
                width: 40.0,
                height: 20.0,
            }
        }
    }

    let mut dial = FrequencyDial::fm().with_text_measurer(FixedMeasurer);
    dial.set_viewport(Size::new(300.0, 120.0));
    let plan = dial.render();
    let value = plan
        .text_with_role(crate::renderer::TextRole::Value)
        .expect("value label");
    assert_eq!(value.origin.x, 130.0);
    assert_eq!(value.origin.y, 50.0 - 15.0);
}

#[test]
fn measure_uses_intrinsic_height() {
    let dial = FrequencyDial::fm();
    let size = dial.measure(Constraints::loose(300.0, 500.0));
    assert_eq!(size, Size::new(300.0, 120.0));
}
