// Copyright 2026 the Proscenium Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use proscenium_app::app::{ApplicationHooks, ScreenedApp};
use proscenium_app::basic_events::{BasicEvents, Key, KeyEvent, MouseButton, MouseEvent};
use proscenium_screens::{InputEvent, PropagatedEvents, Screen, ScreenStack};

struct Counting {
    flags: PropagatedEvents,
    accepts: bool,
    hits: u64,
}

impl Counting {
    fn new(flags: PropagatedEvents, accepts: bool) -> Box<Self> {
        Box::new(Self {
            flags,
            accepts,
            hits: 0,
        })
    }
}

impl Screen<BasicEvents> for Counting {
    fn propagated_events(&self) -> PropagatedEvents {
        self.flags
    }
    fn draw_event(&mut self) {
        self.hits += 1;
    }
    fn key_press_event(&mut self, event: &mut KeyEvent) {
        self.hits += 1;
        if self.accepts {
            event.accept();
        }
    }
    fn mouse_press_event(&mut self, event: &mut MouseEvent) {
        self.hits += 1;
        if self.accepts {
            event.accept();
        }
    }
}

struct NoHooks;

impl ApplicationHooks<BasicEvents> for NoHooks {
    fn global_draw_event(&mut self) {}
}

fn app_with(n: usize, front_accepts: bool) -> ScreenedApp<BasicEvents, NoHooks> {
    let mut app = ScreenedApp::new(NoHooks);
    let both = PropagatedEvents::DRAW | PropagatedEvents::INPUT;
    app.add_screen(Counting::new(both, front_accepts));
    for _ in 1..n {
        app.add_screen(Counting::new(both, false));
    }
    app
}

fn bench_input(c: &mut Criterion) {
    let sizes = [4usize, 16, 64];

    let mut group = c.benchmark_group("input_fall_through");
    for &n in &sizes {
        group.throughput(Throughput::Elements(n as u64));
        let mut app = app_with(n, false);
        group.bench_function(format!("screens_{n}"), |b| {
            b.iter(|| {
                let mut event = KeyEvent::new(Key::Enter);
                app.key_press_event(black_box(&mut event));
                black_box(event.is_accepted())
            });
        });
    }
    group.finish();

    let mut group = c.benchmark_group("input_accepted_at_front");
    for &n in &sizes {
        group.throughput(Throughput::Elements(1));
        let mut app = app_with(n, true);
        group.bench_function(format!("screens_{n}"), |b| {
            b.iter(|| {
                let mut event = MouseEvent::new(MouseButton::Left, Point::new(10.0, 10.0));
                app.mouse_press_event(black_box(&mut event));
                black_box(event.is_accepted())
            });
        });
    }
    group.finish();
}

fn bench_draw(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw_pass");
    for &n in &[4usize, 16, 64] {
        group.throughput(Throughput::Elements(n as u64));
        let mut app = app_with(n, false);
        group.bench_function(format!("screens_{n}"), |b| {
            b.iter(|| app.draw_event());
        });
    }
    group.finish();
}

fn bench_stack_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("stack_ops");

    group.bench_function("insert_remove_64", |b| {
        b.iter_batched(
            ScreenStack::<BasicEvents>::new,
            |mut stack| {
                let ids: Vec<_> = (0..64)
                    .map(|_| stack.insert_front(Counting::new(PropagatedEvents::empty(), false)))
                    .collect();
                for id in ids {
                    black_box(stack.remove(id));
                }
                stack
            },
            BatchSize::SmallInput,
        );
    });

    let mut stack = ScreenStack::<BasicEvents>::new();
    let ids: Vec<_> = (0..64)
        .map(|_| stack.insert_back(Counting::new(PropagatedEvents::empty(), false)))
        .collect();
    let last = *ids.last().unwrap();
    group.bench_function("move_to_front_64", |b| {
        b.iter(|| {
            // Front then back again, so neither call is a no-op.
            stack.move_to_front(black_box(last));
            stack.move_before(last, None);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_input, bench_draw, bench_stack_ops);
criterion_main!(benches);
