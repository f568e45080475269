use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gestura_core::{
    Controller, DragOptions, EdgeBounds, GestureKind, GestureOptions, PointerEvent,
    PointerEventKind, TouchEvent, TouchPhase, TouchPoint, Vec2, WheelEvent,
};
use web_time::{Duration, Instant};

const SAMPLES_PER_STROKE: &[usize] = &[16, 128];
const FRAME: Duration = Duration::from_millis(16);

fn drag_controller() -> Controller {
    let bounds = EdgeBounds::default().left(-200.0).right(200.0);
    let options = GestureOptions::default().drag(
        DragOptions::default()
            .bounds(bounds)
            .rubberband(true)
            .threshold(3.0),
    );
    Controller::new(options).with_handler(GestureKind::Drag, |event| {
        black_box(event.movement);
        None
    })
}

/// One press, `samples` window moves, one release.
fn run_stroke(controller: &mut Controller, samples: usize, start: Instant) {
    let mut time = start;
    let down = PointerEvent::new(PointerEventKind::Down, Vec2::ZERO, time);
    controller.on_pointer_down(&down);
    for i in 0..samples {
        time += FRAME;
        let x = i as f32 * 4.0;
        let event = PointerEvent::new(PointerEventKind::Move, Vec2::new(x, x * 0.5), time);
        black_box(controller.on_window_pointer_move(&event));
    }
    let up = PointerEvent::new(PointerEventKind::Up, Vec2::ZERO, time);
    black_box(controller.on_window_pointer_up(&up));
}

fn bench_drag_stroke(c: &mut Criterion) {
    let mut group = c.benchmark_group("recognizer_drag");
    for &samples in SAMPLES_PER_STROKE {
        group.bench_with_input(BenchmarkId::new("samples", samples), &samples, |b, &samples| {
            let mut controller = drag_controller();
            let start = Instant::now();
            b.iter(|| run_stroke(&mut controller, samples, start));
        });
    }
    group.finish();
}

fn bench_wheel_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("recognizer_wheel");
    for &samples in SAMPLES_PER_STROKE {
        group.bench_with_input(BenchmarkId::new("ticks", samples), &samples, |b, &samples| {
            let mut controller =
                Controller::default().with_handler(GestureKind::Wheel, |event| {
                    black_box(event.offset);
                    None
                });
            let start = Instant::now();
            b.iter(|| {
                let mut time = start;
                for _ in 0..samples {
                    time += FRAME;
                    let tick = WheelEvent::new(Vec2::new(0.0, 12.0), time);
                    black_box(controller.on_wheel(&tick));
                }
                black_box(controller.advance_timers(time + Duration::from_secs(1)));
            });
        });
    }
    group.finish();
}

fn bench_pinch(c: &mut Criterion) {
    c.bench_function("recognizer_pinch_rotate", |b| {
        let mut controller = Controller::default().with_handler(GestureKind::Pinch, |event| {
            black_box(event.values.values());
            None
        });
        let start = Instant::now();
        b.iter(|| {
            let mut time = start;
            let anchor = TouchPoint::new(1, Vec2::ZERO);
            let touches = [anchor, TouchPoint::new(2, Vec2::new(0.0, 100.0))];
            controller.on_touch(&TouchEvent::new(TouchPhase::Start, &touches, time));
            for step in 0..64 {
                time += FRAME;
                let angle = (step as f32 * 12.0).to_radians();
                let radius = 100.0 + step as f32;
                let moving = TouchPoint::new(
                    2,
                    Vec2::new(radius * angle.sin(), radius * angle.cos()),
                );
                let event = TouchEvent::new(TouchPhase::Move, &[anchor, moving], time);
                black_box(controller.on_touch(&event));
            }
            let end = TouchEvent::new(TouchPhase::End, &[anchor], time).with_changed(&[2]);
            black_box(controller.on_touch(&end));
        });
    });
}

criterion_group!(
    recognizer_pipeline,
    bench_drag_stroke,
    bench_wheel_session,
    bench_pinch
);
criterion_main!(recognizer_pipeline);
