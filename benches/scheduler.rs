//! Benchmarks for timer scheduling, rate-limited callbacks and notification replacement

#![allow(missing_docs)]

use criterion::{Criterion, criterion_group, criterion_main};
use sitefeedback::notifications::{NotificationSurface, NotificationTimings, Presenter, Severity};
use sitefeedback::timing::{Debouncer, Scheduler, SimulatedScheduler, Throttler};
use std::hint::black_box;
use std::time::Duration;

fn bench_schedule_and_drain(c: &mut Criterion) {
    c.bench_function("schedule_1000_then_drain", |b| {
        b.iter(|| {
            let scheduler = SimulatedScheduler::new();
            for i in 0..1000u64 {
                scheduler.schedule(Duration::from_millis(i % 97), Box::new(|| {}));
            }
            black_box(scheduler.run_until_idle());
        });
    });
}

fn bench_debounce_burst(c: &mut Criterion) {
    c.bench_function("debounce_burst_1000", |b| {
        b.iter(|| {
            let scheduler = SimulatedScheduler::shared();
            let debounced =
                Debouncer::new(scheduler.clone(), Duration::from_millis(50), |n: u32| {
                    black_box(n);
                });
            for n in 0..1000 {
                debounced.call(n);
            }
            black_box(scheduler.run_until_idle());
        });
    });
}

fn bench_throttle_stream(c: &mut Criterion) {
    c.bench_function("throttle_stream_1000", |b| {
        b.iter(|| {
            let scheduler = SimulatedScheduler::shared();
            let throttled =
                Throttler::new(scheduler.clone(), Duration::from_millis(16), |n: u32| {
                    black_box(n);
                });
            for n in 0..1000 {
                scheduler.advance(Duration::from_millis(1));
                black_box(throttled.call(n));
            }
        });
    });
}

fn bench_present_replace(c: &mut Criterion) {
    c.bench_function("present_replace_100", |b| {
        b.iter(|| {
            let scheduler = SimulatedScheduler::shared();
            let presenter = Presenter::new(
                NotificationSurface::shared(),
                scheduler.clone(),
                NotificationTimings::default(),
            );
            for i in 0..100 {
                presenter.present(format!("message {i}"), Severity::Info);
            }
            black_box(scheduler.run_until_idle());
        });
    });
}

criterion_group!(
    benches,
    bench_schedule_and_drain,
    bench_debounce_burst,
    bench_throttle_stream,
    bench_present_replace
);
criterion_main!(benches);
