// Copyright 2025 the Roomplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Opening drag.
//!
//! Drag a window along the top wall and past the corner; it carries on down the
//! east wall and round onto the bottom.
//!
//! Run:
//! - `RUST_LOG=roomplan_layout=trace cargo run -p roomplan_demos --example opening_drag`

use kurbo::Point;
use roomplan_layout::{OpeningDrag, Room, WallSide};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut room = Room::new(4.0, 3.0)?;
    let window = room.insert_window(WallSide::North, 1.0);
    let mut drag = OpeningDrag::start(&room, &window, Point::new(1.5, 0.0))?;

    let path = [
        Point::new(2.5, 0.0),
        Point::new(3.5, 0.0),
        Point::new(4.0, 0.8),
        Point::new(4.0, 2.4),
        Point::new(4.0, 3.5),
        Point::new(2.0, 3.0),
    ];
    for pointer in path {
        let pos = drag.update(&mut room, pointer)?;
        println!(
            "pointer {pointer:?} -> wall {} offset {:.2}{}",
            pos.wall.as_str(),
            pos.offset,
            if pos.transferred { " (crossed a corner)" } else { "" }
        );
    }

    if let Some(w) = room.opening(&window) {
        println!(
            "window ends on {} at {:.2} ({:?})",
            w.wall().as_str(),
            w.offset(),
            room.opening_rect(w)
        );
    }
    Ok(())
}
