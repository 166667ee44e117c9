// Copyright 2025 the Roomplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=roomplan_project --heading-base-level=0

//! Roomplan Project: stored rooms and saved projects.
//!
//! - [`serialize_room`] and [`deserialize_room`] convert between a live
//!   [`Room`](roomplan_layout::Room) and the camelCase JSON schema the editor
//!   stores. Loading rebuilds every entity through the room's add-and-clamp path,
//!   so a document edited by hand still yields a contained room.
//! - [`ProjectCatalog`] keeps named projects with creation and update times and
//!   remembers which one is active.
//!
//! Optional fields that are missing or malformed fall back to defaults: booleans
//! to `false`, door opening to closed, positions to the interior's corner, and
//! labels to `"Item"`.
//!
//! # Example
//!
//! ```rust
//! use kurbo::Point;
//! use roomplan_layout::Room;
//! use roomplan_project::{ProjectCatalog, room_from_json, room_to_json};
//!
//! let mut room = Room::new(5.0, 4.0)?;
//! room.insert_default_bed(Point::new(2.5, 2.0));
//!
//! let json = room_to_json(&room)?;
//! let restored = room_from_json(&json)?;
//! assert_eq!(restored.beds().len(), 1);
//!
//! let mut catalog = ProjectCatalog::new();
//! catalog.save("guest-room", "Guest room", &restored, 1_700_000_000_000);
//! assert_eq!(catalog.active_id(), Some("guest-room"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod catalog;
pub mod convert;
pub mod error;
pub mod record;

pub use catalog::{ProjectCatalog, ProjectData};
pub use convert::{deserialize_room, room_from_json, room_to_json, serialize_room};
pub use error::ProjectError;
pub use record::{
    BedRecord, FALLBACK_LABEL, FurnitureRecord, OpeningRecord, OpeningType, RoomRecord,
};
