// Copyright 2025 the Roomplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use roomplan_layout::{Nightstands, Room, WallSide};
use roomplan_project::{
    ProjectCatalog, deserialize_room, room_from_json, room_to_json, serialize_room,
};

fn gen_room(beds: usize) -> Room {
    let width = 2.0 + beds as f64 * 2.0;
    let mut room = Room::new(width, 5.0).unwrap();
    room.insert_door(WallSide::West, 0.5);
    for i in 0..beds {
        let x = 1.5 + i as f64 * 2.0;
        room.insert_window(WallSide::North, x - 0.6);
        let (bed, _) = room.insert_default_bed(Point::new(x, 1.2));
        room.set_nightstands(&bed, Nightstands::LEFT).unwrap();
        room.insert_default_furniture(Point::new(x, 4.4));
    }
    room
}

fn bench_room_json(c: &mut Criterion) {
    let mut group = c.benchmark_group("room_json");
    for &n in &[1usize, 8, 32] {
        let room = gen_room(n);
        let json = room_to_json(&room).unwrap();
        group.throughput(Throughput::Bytes(json.len() as u64));

        group.bench_function(format!("encode_n{}", n), |b| {
            b.iter(|| black_box(room_to_json(black_box(&room)).unwrap()))
        });
        group.bench_function(format!("decode_n{}", n), |b| {
            b.iter(|| black_box(room_from_json(black_box(&json)).unwrap()))
        });
        group.bench_function(format!("record_round_trip_n{}", n), |b| {
            b.iter_batched(
                || serialize_room(&room),
                |record| black_box(deserialize_room(&record).unwrap()),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_catalog(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog");
    let room = gen_room(4);
    group.bench_function("save_32_and_encode", |b| {
        b.iter_batched(
            ProjectCatalog::new,
            |mut catalog| {
                for i in 0..32_i64 {
                    catalog.save(&format!("p{i}"), "Bedroom", &room, i);
                }
                black_box(catalog.to_json().unwrap());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_room_json, bench_catalog);
criterion_main!(benches);
