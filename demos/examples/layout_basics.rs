// Copyright 2025 the Roomplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout basics.
//!
//! Furnish a room, watch a bed get pushed clear of a table, rotate it against a
//! wall, and hit-test the result.
//!
//! Run:
//! - `RUST_LOG=roomplan_layout=debug cargo run -p roomplan_demos --example layout_basics`

use kurbo::{Point, Size};
use roomplan_layout::{Hit, Nightstands, Occupant, Room, RoomMetrics, WallSide, fit_scale};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut room = Room::new(5.0, 4.0)?;
    let door = room.insert_door(WallSide::South, 0.4);
    room.set_door_open(&door, 0.5)?;
    room.insert_window(WallSide::North, 1.9);

    // A table in the middle, then a bed dropped right on top of it.
    let (table, _) = room.insert_default_furniture(Point::new(2.5, 2.0));
    let (bed, outcome) = room.insert_default_bed(Point::new(2.5, 2.0));
    println!("bed placement: {outcome:?}");

    room.set_nightstands(&bed, Nightstands::all())?;
    let outcome = room.rotate_bed(&bed)?;
    println!("rotate bed: {outcome:?}");

    for b in room.beds() {
        let fp = b.footprint();
        println!("{} at {:?} covering {:?}", b.id(), b.origin(), fp.rect);
    }
    for f in room.furniture() {
        println!("{} '{}' at {:?}", f.id(), f.label(), f.origin());
    }
    println!("any overlap: {}", room.has_overlap());

    let metrics = RoomMetrics::compute(
        &room,
        fit_scale(&room, Size::new(800.0, 600.0), 40.0),
        Size::new(800.0, 600.0),
    );
    let table_center = room
        .furniture_item(&table)
        .map(|t| metrics.to_canvas(t.center()))
        .unwrap_or_default();
    match room.hit_test(metrics.to_room(table_center)) {
        Some(Hit::Furniture(id)) => println!("click at {table_center:?} hits {id}"),
        other => println!("click at {table_center:?} hits {other:?}"),
    }
    if let Some(leaf) = room.opening(&door).and_then(|d| room.door_leaf(d)) {
        println!("door leaf tip at {:?}", leaf.tip());
    }
    Ok(())
}
