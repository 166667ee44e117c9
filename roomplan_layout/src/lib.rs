// Copyright 2025 the Roomplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=roomplan_layout --heading-base-level=0

//! Roomplan Layout: the spatial engine behind a 2D room editor.
//!
//! A [`Room`] is a rectangular interior with walls of a given thickness. Windows
//! and doors ([`Opening`]) sit in the walls; beds and furniture sit inside.
//! The engine keeps two promises after every edit:
//!
//! - Containment: every occupant's footprint lies inside the interior, and every
//!   opening lies within its wall's run. This is enforced by clamping and never fails.
//! - Separation: beds and furniture do not overlap each other. Placement tries a
//!   bounded ring search to find a free spot; edits that collide are relocated or
//!   reverted.
//!
//! Rotation is always one of four quarter turns ([`RotationStep`]). An occupant's
//! stored origin is the top-left of its rotated body, so rotating or toggling a
//! nightstand never rewrites the origin; the derived [`Footprint`] carries the
//! swap and the accessory extensions.
//!
//! Coordinates are meters from the interior's top-left corner, y down. Use
//! [`RoomMetrics`] to go to and from canvas pixels.
//!
//! # Example
//!
//! ```rust
//! use kurbo::Point;
//! use roomplan_layout::{EditOutcome, Occupant, Room, WallSide};
//!
//! let mut room = Room::new(6.0, 4.0)?;
//! let (bed, outcome) = room.insert_default_bed(Point::new(3.0, 2.0));
//! assert_eq!(outcome, EditOutcome::Accepted);
//!
//! // A table dropped on the bed is moved clear of it.
//! let (table, outcome) = room.insert_default_furniture(Point::new(3.0, 2.0));
//! assert!(matches!(outcome, EditOutcome::Relocated { .. }));
//! assert!(!room.has_overlap());
//!
//! // Rotating the bed keeps it inside the room.
//! room.rotate_bed(&bed)?;
//! let footprint = room.bed(&bed).unwrap().footprint();
//! assert!(footprint.fits_within(room.interior().size()));
//!
//! let door = room.insert_door(WallSide::South, 0.5);
//! room.set_door_open(&door, 0.5)?;
//! # let _ = table;
//! # Ok::<(), roomplan_layout::LayoutError>(())
//! ```
//!
//! Dragging uses short-lived sessions so each pointer move stays O(1):
//!
//! ```rust
//! use kurbo::Point;
//! use roomplan_layout::{OpeningDrag, Room, WallSide};
//!
//! let mut room = Room::new(6.0, 4.0)?;
//! let window = room.insert_window(WallSide::North, 4.0);
//! let mut drag = OpeningDrag::start(&room, &window, Point::new(4.5, 0.0))?;
//!
//! // Pull it past the north-east corner: it continues down the east wall.
//! let pos = drag.update(&mut room, Point::new(5.8, 0.6))?;
//! assert_eq!(pos.wall, WallSide::East);
//! # Ok::<(), roomplan_layout::LayoutError>(())
//! ```

pub mod config;
pub mod drag;
pub mod edit;
pub mod entity;
pub mod error;
pub mod footprint;
pub mod id;
pub mod opening;
pub mod placement;
pub mod room;
pub mod types;
pub mod view;

pub use config::LayoutConfig;
pub use drag::{
    DragTarget, OccupantDrag, OpeningDrag, WallPosition, slide_along_perimeter, snap_to_walls,
};
pub use entity::{
    Bed, DEFAULT_BED_SIZE, DEFAULT_FURNITURE_LABEL, DEFAULT_FURNITURE_SIZE,
    DEFAULT_NIGHTSTAND_SIZE, Furniture, Nightstands,
};
pub use error::LayoutError;
pub use footprint::{Footprint, Occupant, rotated_size};
pub use id::{EntityId, EntityKind, IdGenerator};
pub use opening::{
    DEFAULT_DOOR_LENGTH, DEFAULT_WINDOW_LENGTH, DoorLeaf, DoorSwing, MAX_DOOR_SWING_DEGREES,
    MirrorAxis, Opening, OpeningKind, WallSide,
};
pub use placement::{EditOutcome, ring_offsets};
pub use room::{DEFAULT_WALL_THICKNESS, Hit, Interior, Room};
pub use types::{EdgeOffsets, RotationStep, TOUCH_TOLERANCE, intersects};
pub use view::{MIN_SCALE, RoomMetrics, fit_scale};

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{Point, Size};

    #[test]
    fn bed_and_table_at_the_same_centre_end_up_apart() {
        let mut room = Room::new(6.0, 4.0).unwrap();
        let (bed, _) = room.insert_default_bed(Point::new(3.0, 2.0));
        let (table, outcome) = room.insert_default_furniture(Point::new(3.0, 2.0));
        assert!(outcome.is_applied());
        let bed = room.bed(&bed).unwrap();
        let table = room.furniture_item(&table).unwrap();
        assert!(!intersects(bed.footprint().rect, table.footprint().rect));
        assert!(bed.footprint().fits_within(room.interior().size()));
        assert!(table.footprint().fits_within(room.interior().size()));
    }

    #[test]
    fn every_rotation_and_nightstand_combination_stays_contained() {
        let sides = [
            Nightstands::empty(),
            Nightstands::LEFT,
            Nightstands::RIGHT,
            Nightstands::all(),
        ];
        for ns in sides {
            for step in RotationStep::ALL {
                let mut room = Room::new(3.0, 3.0).unwrap();
                let bed = Bed::new(
                    EntityId::from("b"),
                    Point::new(2.9, -1.0),
                    Size::new(1.4, 2.0),
                )
                .unwrap()
                .with_nightstands(ns)
                .with_rotation(step);
                let (id, _) = room.place_bed(bed).unwrap();
                for _ in 0..4 {
                    room.rotate_bed(&id).unwrap();
                    let fp = room.bed(&id).unwrap().footprint();
                    assert!(fp.fits_within(room.interior().size()), "{ns:?} {step:?}");
                }
            }
        }
    }

    #[test]
    fn generated_ids_are_unique_across_kinds() {
        let mut room = Room::new(6.0, 4.0).unwrap();
        let a = room.insert_window(WallSide::North, 0.0);
        let b = room.insert_door(WallSide::West, 0.0);
        let (c, _) = room.insert_default_bed(Point::new(1.0, 1.0));
        let (d, _) = room.insert_default_furniture(Point::new(5.0, 3.0));
        assert_eq!(
            [a.as_str(), b.as_str(), c.as_str(), d.as_str()],
            ["window-1", "door-2", "bed-3", "furniture-4"]
        );
        assert!(room.remove_bed(&c).is_some());
        assert!(room.remove_bed(&c).is_none());
        assert_eq!(room.beds().len(), 0);
    }
}
