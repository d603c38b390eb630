//! Benchmarks for gesture dispatch

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use dragview_ui::{DragConfig, DraggableRegion, GestureEvent, Rect, SimulatedHost, Vec2};

const SCREEN: Rect<f32> = Rect::new(0.0, 0.0, 320.0, 568.0);

fn bench_full_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_drag");

    for ticks in [10, 100, 1000] {
        group.throughput(Throughput::Elements(ticks as u64));

        group.bench_with_input(BenchmarkId::from_parameter(ticks), &ticks, |b, &ticks| {
            let mut region = DraggableRegion::new(DragConfig::new().with_snap_to_edge(true));
            region.attach(SCREEN);
            b.iter(|| {
                let host = SimulatedHost::new(Rect::new(10.0, 200.0, 50.0, 50.0));
                region.handle_gesture(GestureEvent::Begin { origin: Vec2::ZERO }, &host);
                for i in 0..ticks {
                    let t = i as f32;
                    region.handle_gesture(
                        GestureEvent::Change {
                            translation: Vec2::new(t.sin() * 40.0, t.cos() * 40.0),
                        },
                        &host,
                    );
                }
                region.handle_gesture(GestureEvent::End, &host);
                black_box(host.presented_frame())
            });
        });
    }

    group.finish();
}

fn bench_guard_heavy_drag(c: &mut Criterion) {
    let mut region = DraggableRegion::new(DragConfig::new().with_parent_full_screen(true));
    region.attach(SCREEN);

    c.bench_function("guard_heavy_drag", |b| {
        b.iter(|| {
            let host = SimulatedHost::new(Rect::new(300.0, 0.0, 50.0, 50.0));
            region.handle_gesture(GestureEvent::Begin { origin: Vec2::ZERO }, &host);
            for i in 0..100 {
                region.handle_gesture(
                    GestureEvent::Change {
                        translation: Vec2::new(i as f32 * 5.0, -(i as f32)),
                    },
                    &host,
                );
                host.advance(1.0 / 60.0);
            }
            region.handle_gesture(GestureEvent::End, &host);
            black_box(host.frame())
        });
    });
}

criterion_group!(benches, bench_full_drag, bench_guard_heavy_drag);
criterion_main!(benches);
