// Copyright 2025 the Roomplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversion between a live [`Room`] and its stored [`RoomRecord`].

use kurbo::{Point, Size};
use tracing::{debug, warn};

use roomplan_layout::{
    Bed, DEFAULT_DOOR_LENGTH, DEFAULT_NIGHTSTAND_SIZE, DEFAULT_WINDOW_LENGTH, DoorSwing, EntityId,
    Furniture, LayoutError, Nightstands, Occupant, Opening, OpeningKind, Room, RotationStep,
};

use crate::error::ProjectError;
use crate::record::{BedRecord, FurnitureRecord, OpeningRecord, OpeningType, RoomRecord};

/// Capture a room in its stored form.
pub fn serialize_room(room: &Room) -> RoomRecord {
    RoomRecord {
        width: room.width(),
        height: room.height(),
        wall_thickness_m: room.wall_thickness(),
        openings: room.openings().iter().map(opening_record).collect(),
        beds: room.beds().iter().map(bed_record).collect(),
        furniture: room.furniture().iter().map(furniture_record).collect(),
    }
}

/// Rebuild a room from its stored form.
///
/// Every entity goes through the same add-and-clamp path as interactive
/// creation, so the result is contained even if the record was edited by hand.
/// Missing or clashing ids are replaced with generated ones. Stored overlap is
/// kept as is.
pub fn deserialize_room(record: &RoomRecord) -> Result<Room, LayoutError> {
    let mut room = Room::with_wall_thickness(record.width, record.height, record.wall_thickness_m)?;
    for o in &record.openings {
        room.adopt_opening(opening_from_record(o)?);
    }
    for b in &record.beds {
        room.adopt_bed(bed_from_record(b)?);
    }
    for f in &record.furniture {
        room.adopt_furniture(furniture_from_record(f)?);
    }
    debug!(
        openings = room.openings().len(),
        beds = room.beds().len(),
        furniture = room.furniture().len(),
        "room restored"
    );
    Ok(room)
}

/// Encode a room as a JSON document.
pub fn room_to_json(room: &Room) -> Result<String, ProjectError> {
    Ok(serde_json::to_string(&serialize_room(room))?)
}

/// Decode a room from a JSON document.
pub fn room_from_json(json: &str) -> Result<Room, ProjectError> {
    let record: RoomRecord = serde_json::from_str(json)?;
    Ok(deserialize_room(&record)?)
}

fn opening_record(o: &Opening) -> OpeningRecord {
    let (kind, swing) = match o.kind() {
        OpeningKind::Window => (OpeningType::Window, None),
        OpeningKind::Door(swing) => (OpeningType::Door, Some(swing)),
    };
    OpeningRecord {
        id: o.id().to_string(),
        kind,
        wall_side: o.wall(),
        offset_m: Some(o.offset()),
        length_m: Some(o.length()),
        door_open01: Some(swing.map_or(0.0, |s| s.open_fraction)),
        door_hinge_start: swing.is_some_and(|s| s.hinge_at_start),
        door_mirror_h: swing.is_some_and(|s| s.mirror_horizontal),
        door_mirror_v: swing.is_some_and(|s| s.mirror_vertical),
    }
}

fn bed_record(b: &Bed) -> BedRecord {
    let origin = b.origin();
    BedRecord {
        id: b.id().to_string(),
        x_m: Some(origin.x),
        y_m: Some(origin.y),
        width_m: b.size().width,
        height_m: b.size().height,
        rotation_rad: Some(b.rotation().radians()),
        nightstand_left: b.nightstand_left(),
        nightstand_right: b.nightstand_right(),
        nightstand_size_m: Some(b.nightstand_size()),
    }
}

fn furniture_record(f: &Furniture) -> FurnitureRecord {
    let origin = f.origin();
    FurnitureRecord {
        id: f.id().to_string(),
        x_m: Some(origin.x),
        y_m: Some(origin.y),
        width_m: f.size().width,
        height_m: f.size().height,
        rotation_rad: Some(f.rotation().radians()),
        label: f.label().to_owned(),
    }
}

fn opening_from_record(o: &OpeningRecord) -> Result<Opening, LayoutError> {
    let (kind, default_length) = match o.kind {
        OpeningType::Window => (OpeningKind::Window, DEFAULT_WINDOW_LENGTH),
        OpeningType::Door => (
            OpeningKind::Door(DoorSwing {
                open_fraction: o.door_open01.unwrap_or(0.0).clamp(0.0, 1.0),
                hinge_at_start: o.door_hinge_start,
                mirror_horizontal: o.door_mirror_h,
                mirror_vertical: o.door_mirror_v,
            }),
            DEFAULT_DOOR_LENGTH,
        ),
    };
    Opening::new(
        EntityId::new(o.id.as_str()),
        kind,
        o.wall_side,
        o.offset_m.unwrap_or(0.0),
        o.length_m.unwrap_or(default_length),
    )
}

fn bed_from_record(b: &BedRecord) -> Result<Bed, LayoutError> {
    let origin = Point::new(b.x_m.unwrap_or(0.0), b.y_m.unwrap_or(0.0));
    let bed = Bed::new(
        EntityId::new(b.id.as_str()),
        origin,
        Size::new(b.width_m, b.height_m),
    )?
    .with_rotation(RotationStep::from_radians(b.rotation_rad.unwrap_or(0.0)))
    .with_nightstands(Nightstands::from_sides(b.nightstand_left, b.nightstand_right));
    let size = b.nightstand_size_m.unwrap_or(DEFAULT_NIGHTSTAND_SIZE);
    Ok(match bed.clone().with_nightstand_size(size) {
        Ok(bed) => bed,
        Err(err) => {
            warn!(id = %b.id, error = %err, "bad nightstand size replaced with default");
            bed
        }
    })
}

fn furniture_from_record(f: &FurnitureRecord) -> Result<Furniture, LayoutError> {
    let origin = Point::new(f.x_m.unwrap_or(0.0), f.y_m.unwrap_or(0.0));
    Ok(Furniture::new(
        EntityId::new(f.id.as_str()),
        origin,
        Size::new(f.width_m, f.height_m),
        f.label.as_str(),
    )?
    .with_rotation(RotationStep::from_radians(f.rotation_rad.unwrap_or(0.0))))
}
