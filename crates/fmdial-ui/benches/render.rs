use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fmdial_ui::{
    render, Density, DialStyle, FrequencyDial, MonospacedTextMeasurer, PointerEvent, Scale,
    ScaleConfig, Size,
};

const VIEWPORT: Size = Size {
    width: 1080.0,
    height: 360.0,
};
const DENSITY_SAMPLES: &[f32] = &[1.0, 3.0];

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("dial_render");
    for &density in DENSITY_SAMPLES {
        group.bench_with_input(BenchmarkId::new("density", density), &density, |b, &density| {
            let scale = Scale::new(ScaleConfig::fm_broadcast(), Density::new(density));
            let style = DialStyle::default();
            b.iter(|| {
                let plan = render(
                    &scale,
                    &style,
                    black_box(606.0),
                    VIEWPORT,
                    &MonospacedTextMeasurer,
                );
                black_box(plan);
            });
        });
    }
    group.finish();
}

fn bench_drag_and_render(c: &mut Criterion) {
    let mut dial = FrequencyDial::fm();
    dial.set_viewport(VIEWPORT);
    dial.set_on_frequency_change_listener(|value| {
        black_box(value);
    });

    c.bench_function("dial_drag_frame", |b| {
        let mut t = 0i64;
        b.iter(|| {
            dial.on_pointer_event(&PointerEvent::down(500.0, 100.0, t));
            dial.on_pointer_event(&PointerEvent::moved(480.0, 100.0, t + 16));
            dial.on_pointer_event(&PointerEvent::up(480.0, 100.0, t + 200));
            t += 1_000;
            black_box(dial.render());
        });
    });
}

criterion_group!(dial, bench_render, bench_drag_and_render);
criterion_main!(dial);
