// Copyright 2025 the Roomplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Project round trip.
//!
//! Save a furnished room into a catalog, encode the catalog, read it back, and
//! reopen the room. Also loads a hand-edited document with bad values.
//!
//! Run:
//! - `RUST_LOG=roomplan_project=debug cargo run -p roomplan_demos --example project_roundtrip`

use kurbo::Point;
use roomplan_layout::{Occupant, Room, WallSide};
use roomplan_project::{ProjectCatalog, room_from_json, room_to_json};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut room = Room::new(4.5, 3.5)?;
    room.insert_door(WallSide::East, 0.3);
    let (bed, _) = room.insert_default_bed(Point::new(1.2, 1.5));
    room.rotate_bed(&bed)?;
    let (desk, _) = room.insert_default_furniture(Point::new(3.5, 3.0));
    room.set_furniture_label(&desk, "Desk")?;

    println!("{}", room_to_json(&room)?);

    let mut catalog = ProjectCatalog::new();
    catalog.save("guest", "Guest room", &room, 1_700_000_000_000);
    catalog.save("guest", "Guest room (v2)", &room, 1_700_000_360_000);
    let stored = catalog.to_json()?;

    let reloaded = ProjectCatalog::from_json(&stored)?;
    for p in reloaded.list() {
        println!("{} '{}' created {} updated {}", p.id, p.name, p.created_at, p.updated_at);
    }
    let reopened = reloaded.open("guest")?;
    println!(
        "reopened: {} beds, {} furniture, {} openings",
        reopened.beds().len(),
        reopened.furniture().len(),
        reopened.openings().len()
    );

    // Out-of-range positions are clamped, the missing label becomes "Item",
    // and the entry that is not an object is skipped.
    let edited = r#"{
        "width": 3.0, "height": 3.0,
        "beds": [ { "id": "b", "xM": 9, "yM": -1, "widthM": 1.6, "heightM": 2.0 } ],
        "furniture": [ { "xM": 0, "yM": 0, "widthM": 0.5, "heightM": 0.5 }, 42 ]
    }"#;
    let fixed = room_from_json(edited)?;
    println!("clamped bed origin: {:?}", fixed.beds()[0].origin());
    println!("furniture label: {}", fixed.furniture()[0].label());
    Ok(())
}
