// Copyright 2025 the Roomplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;
use roomplan_layout::{OccupantDrag, OpeningDrag, Room, WallSide};

/// A room with a row of tables along the top wall, each one bed-width apart.
fn furnished_room(width: f64, tables: usize) -> Room {
    let mut room = Room::new(width, 4.0).unwrap();
    for i in 0..tables {
        let x = 0.7 + i as f64 * 1.3;
        room.insert_default_furniture(Point::new(x, 0.4));
    }
    room
}

/// A small room with a table in the middle, so a bed dropped there has to
/// walk most of the ring search before it finds room.
fn crowded_room() -> Room {
    let mut room = Room::new(3.4, 3.0).unwrap();
    room.insert_default_furniture(Point::new(1.7, 1.5));
    room
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for &n in &[4usize, 16, 64] {
        let width = 1.5 + n as f64 * 1.3;
        group.bench_function(format!("default_bed_free_n{}", n), |b| {
            b.iter_batched(
                || furnished_room(width, n),
                |mut room| {
                    let placed = room.insert_default_bed(Point::new(width / 2.0, 2.8));
                    black_box(placed);
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_function(format!("default_bed_on_table_n{}", n), |b| {
            b.iter_batched(
                || furnished_room(width, n),
                |mut room| {
                    let placed = room.insert_default_bed(Point::new(0.7, 0.4));
                    black_box(placed);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.bench_function("default_bed_crowded", |b| {
        b.iter_batched(
            crowded_room,
            |mut room| {
                let placed = room.insert_default_bed(Point::new(1.7, 1.5));
                black_box(placed);
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag");
    group.bench_function("bed_sweep", |b| {
        b.iter_batched(
            || {
                let mut room = furnished_room(8.0, 3);
                let (id, _) = room.insert_default_bed(Point::new(6.0, 2.8));
                (room, id)
            },
            |(mut room, id)| {
                let mut drag = OccupantDrag::bed(&room, &id, Point::new(6.0, 2.8)).unwrap();
                for step in 0..64 {
                    let x = 6.0 - step as f64 * 0.08;
                    let outcome = drag.update(&mut room, Point::new(x, 2.8)).unwrap();
                    black_box(outcome);
                }
            },
            BatchSize::SmallInput,
        )
    });
    group.bench_function("opening_perimeter_lap", |b| {
        b.iter_batched(
            || {
                let mut room = Room::new(6.0, 4.0).unwrap();
                let id = room.insert_window(WallSide::North, 2.0);
                (room, id)
            },
            |(mut room, id)| {
                let mut drag = OpeningDrag::start(&room, &id, Point::new(2.6, 0.0)).unwrap();
                // Push right along the top, then keep following the pointer down the
                // east wall and back along the bottom.
                for step in 0..40 {
                    let p = Point::new(2.6 + step as f64 * 0.1, 0.0);
                    black_box(drag.update(&mut room, p).unwrap());
                }
                for step in 0..40 {
                    let p = Point::new(6.0, step as f64 * 0.1);
                    black_box(drag.update(&mut room, p).unwrap());
                }
                for step in 0..60 {
                    let p = Point::new(6.0 - step as f64 * 0.1, 4.0);
                    black_box(drag.update(&mut room, p).unwrap());
                }
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_hit_test(c: &mut Criterion) {
    let mut group = c.benchmark_group("hit_test");
    for &n in &[16usize, 64] {
        let width = 1.5 + n as f64 * 1.3;
        let room = furnished_room(width, n);
        group.bench_function(format!("grid_probe_n{}", n), |b| {
            b.iter(|| {
                let mut hits = 0_usize;
                for i in 0..32 {
                    let p = Point::new(i as f64 * width / 32.0, 0.4);
                    if room.hit_test(black_box(p)).is_some() {
                        hits += 1;
                    }
                }
                black_box(hits)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_insert, bench_drag, bench_hit_test);
criterion_main!(benches);
