// Copyright 2025 the Roomplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Editing operations exposed to property panels and key bindings.
//!
//! Occupant edits go through the commit path in [`crate::placement`] and report
//! an [`EditOutcome`]. Opening edits only ever clamp, so they report nothing.

use kurbo::{Point, Size};
use tracing::trace;

use crate::entity::Nightstands;
use crate::error::{LayoutError, at_least, finite, positive};
use crate::footprint::Occupant;
use crate::id::EntityId;
use crate::opening::{MirrorAxis, WallSide};
use crate::placement::EditOutcome;
use crate::room::Room;
use crate::types::RotationStep;

impl Room {
    /// Rotate a bed a quarter turn clockwise about its stored origin.
    pub fn rotate_bed(&mut self, id: &EntityId) -> Result<EditOutcome, LayoutError> {
        self.edit_bed(id, |bed| bed.set_rotation(bed.rotation().next()))
    }

    /// Set a bed's rotation, rounding `radians` to the nearest quarter turn.
    pub fn set_bed_rotation(
        &mut self,
        id: &EntityId,
        radians: f64,
    ) -> Result<EditOutcome, LayoutError> {
        let step = RotationStep::from_radians(radians);
        self.edit_bed(id, |bed| bed.set_rotation(step))
    }

    /// Move a bed's origin.
    pub fn set_bed_position(
        &mut self,
        id: &EntityId,
        origin: Point,
    ) -> Result<EditOutcome, LayoutError> {
        self.edit_bed(id, |bed| bed.set_origin(origin))
    }

    /// Change a bed's local size. Both sides must meet `min_bed_side`.
    pub fn resize_bed(&mut self, id: &EntityId, size: Size) -> Result<EditOutcome, LayoutError> {
        let min = self.config.min_bed_side;
        at_least("bed width", size.width, min)?;
        at_least("bed height", size.height, min)?;
        self.edit_bed(id, |bed| bed.set_size(size))
    }

    /// Set which nightstands a bed has.
    pub fn set_nightstands(
        &mut self,
        id: &EntityId,
        nightstands: Nightstands,
    ) -> Result<EditOutcome, LayoutError> {
        self.edit_bed(id, |bed| bed.set_nightstands(nightstands))
    }

    /// Set a bed's nightstand size. Must meet `min_nightstand_size`.
    pub fn set_nightstand_size(
        &mut self,
        id: &EntityId,
        size: f64,
    ) -> Result<EditOutcome, LayoutError> {
        let size = at_least("nightstand size", size, self.config.min_nightstand_size)?;
        self.edit_bed(id, |bed| bed.set_nightstand_size(size))
    }

    /// Rotate a furniture item a quarter turn clockwise about its stored origin.
    pub fn rotate_furniture(&mut self, id: &EntityId) -> Result<EditOutcome, LayoutError> {
        self.edit_furniture(id, |item| item.set_rotation(item.rotation().next()))
    }

    /// Set a furniture item's rotation, rounding `radians` to the nearest quarter turn.
    pub fn set_furniture_rotation(
        &mut self,
        id: &EntityId,
        radians: f64,
    ) -> Result<EditOutcome, LayoutError> {
        let step = RotationStep::from_radians(radians);
        self.edit_furniture(id, |item| item.set_rotation(step))
    }

    /// Move a furniture item's origin.
    pub fn set_furniture_position(
        &mut self,
        id: &EntityId,
        origin: Point,
    ) -> Result<EditOutcome, LayoutError> {
        self.edit_furniture(id, |item| item.set_origin(origin))
    }

    /// Change a furniture item's local size. Both sides must meet `min_furniture_side`.
    pub fn resize_furniture(
        &mut self,
        id: &EntityId,
        size: Size,
    ) -> Result<EditOutcome, LayoutError> {
        let min = self.config.min_furniture_side;
        at_least("furniture width", size.width, min)?;
        at_least("furniture height", size.height, min)?;
        self.edit_furniture(id, |item| item.set_size(size))
    }

    /// Relabel a furniture item. Labels are display-only.
    pub fn set_furniture_label(
        &mut self,
        id: &EntityId,
        label: impl Into<String>,
    ) -> Result<(), LayoutError> {
        let idx = self.furniture_index(id)?;
        self.furniture[idx].set_label(label.into());
        Ok(())
    }

    /// Change an opening's length and re-clamp its offset.
    pub fn set_opening_length(&mut self, id: &EntityId, length: f64) -> Result<(), LayoutError> {
        let length = positive("opening length", length)?;
        let idx = self.opening_index(id)?;
        let interior = self.interior();
        let opening = &mut self.openings[idx];
        opening.set_length(length);
        interior.clamp_opening(opening);
        Ok(())
    }

    /// Set the distance from the wall's start corner, clamped onto the wall.
    ///
    /// Only non-finite input is an error; negative offsets clamp to zero.
    pub fn set_opening_offset(&mut self, id: &EntityId, offset: f64) -> Result<(), LayoutError> {
        let offset = finite("opening offset", offset)?;
        let idx = self.opening_index(id)?;
        let interior = self.interior();
        let opening = &mut self.openings[idx];
        opening.set_offset(offset);
        interior.clamp_opening(opening);
        Ok(())
    }

    /// Set the gap between the opening's end and the wall's end corner.
    pub fn set_opening_offset_from_end(
        &mut self,
        id: &EntityId,
        distance: f64,
    ) -> Result<(), LayoutError> {
        let distance = finite("distance from end", distance)?.max(0.0);
        let idx = self.opening_index(id)?;
        let interior = self.interior();
        let opening = &mut self.openings[idx];
        let run = interior.wall_length(opening.wall());
        opening.set_offset((run - opening.length() - distance).max(0.0));
        interior.clamp_opening(opening);
        Ok(())
    }

    /// Move an opening to another wall, keeping its offset where it fits.
    pub fn set_opening_wall(&mut self, id: &EntityId, wall: WallSide) -> Result<(), LayoutError> {
        let idx = self.opening_index(id)?;
        let interior = self.interior();
        let opening = &mut self.openings[idx];
        trace!(id = %opening.id(), from = opening.wall().as_str(), to = wall.as_str(), "opening moved to wall");
        opening.set_wall(wall);
        interior.clamp_opening(opening);
        Ok(())
    }

    /// Set how far a door is open, clamped to `[0, 1]`.
    pub fn set_door_open(&mut self, id: &EntityId, fraction: f64) -> Result<(), LayoutError> {
        let idx = self.opening_index(id)?;
        let swing = self.openings[idx].door_swing_mut()?;
        swing.open_fraction = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
        Ok(())
    }

    /// Put a door's hinge at the start or end of its span.
    pub fn set_door_hinge(&mut self, id: &EntityId, at_start: bool) -> Result<(), LayoutError> {
        let idx = self.opening_index(id)?;
        self.openings[idx].door_swing_mut()?.hinge_at_start = at_start;
        Ok(())
    }

    /// Flip a door's swing direction across `axis`.
    pub fn toggle_door_mirror(
        &mut self,
        id: &EntityId,
        axis: MirrorAxis,
    ) -> Result<(), LayoutError> {
        let idx = self.opening_index(id)?;
        let swing = self.openings[idx].door_swing_mut()?;
        match axis {
            MirrorAxis::Horizontal => swing.mirror_horizontal = !swing.mirror_horizontal,
            MirrorAxis::Vertical => swing.mirror_vertical = !swing.mirror_vertical,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Furniture;

    fn near(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn bed_room() -> (Room, EntityId) {
        let mut room = Room::new(6.0, 4.0).unwrap();
        let (id, _) = room.insert_default_bed(Point::new(3.0, 2.0));
        (room, id)
    }

    #[test]
    fn rotation_keeps_origin_and_swaps_extent() {
        let (mut room, id) = bed_room();
        assert_eq!(room.rotate_bed(&id), Ok(EditOutcome::Accepted));
        let bed = room.bed(&id).unwrap();
        assert_eq!(bed.rotation(), RotationStep::R90);
        assert!(near(bed.origin().x, 2.2));
        assert!(near(bed.footprint().rect.width(), 2.0));
    }

    #[test]
    fn rotation_near_a_wall_is_clamped_back_inside() {
        let mut room = Room::new(6.0, 4.0).unwrap();
        let (id, _) = room.insert_default_bed(Point::new(5.0, 2.0));
        room.set_bed_rotation(&id, 100_f64.to_radians()).unwrap();
        let bed = room.bed(&id).unwrap();
        assert_eq!(bed.rotation(), RotationStep::R90);
        assert!(bed.footprint().fits_within(room.interior().size()));
        assert!(near(bed.origin().x, 4.0));
    }

    #[test]
    fn resize_enforces_minimum_side() {
        let (mut room, id) = bed_room();
        let err = room.resize_bed(&id, Size::new(0.3, 2.0)).unwrap_err();
        assert!(matches!(err, LayoutError::BelowMinimum { .. }));
        assert_eq!(room.bed(&id).unwrap().size(), Size::new(1.6, 2.0));
        assert_eq!(
            room.resize_bed(&id, Size::new(1.4, 1.9)),
            Ok(EditOutcome::Accepted)
        );
        assert_eq!(room.bed(&id).unwrap().size(), Size::new(1.4, 1.9));
    }

    #[test]
    fn nightstand_toggle_against_a_wall_stays_inside() {
        let mut room = Room::new(6.0, 4.0).unwrap();
        let (id, _) = room.insert_default_bed(Point::new(0.8, 2.0));
        assert!(near(room.bed(&id).unwrap().origin().x, 0.0));
        room.set_nightstands(&id, Nightstands::LEFT).unwrap();
        let bed = room.bed(&id).unwrap();
        assert!(near(bed.origin().x, 0.45));
        assert!(near(bed.footprint().rect.x0, 0.0));
        assert!(room.set_nightstand_size(&id, 0.1).is_err());
        room.set_nightstand_size(&id, 0.6).unwrap();
        assert!(near(room.bed(&id).unwrap().origin().x, 0.6));
    }

    #[test]
    fn furniture_edits_mirror_bed_edits() {
        let mut room = Room::new(6.0, 4.0).unwrap();
        let (id, _) = room.insert_default_furniture(Point::new(3.0, 2.0));
        room.rotate_furniture(&id).unwrap();
        room.set_furniture_position(&id, Point::new(10.0, 10.0))
            .unwrap();
        let item = room.furniture_item(&id).unwrap();
        assert!(near(item.origin().x, 5.4));
        assert!(near(item.origin().y, 2.8));
        room.set_furniture_label(&id, "Desk").unwrap();
        assert_eq!(room.furniture_item(&id).map(Furniture::label), Some("Desk"));
        assert!(room.resize_furniture(&id, Size::new(0.1, 1.0)).is_err());
    }

    #[test]
    fn opening_edits_stay_on_the_wall() {
        let mut room = Room::new(6.0, 4.0).unwrap();
        let id = room.insert_window(WallSide::North, 1.0);
        room.set_opening_length(&id, 2.0).unwrap();
        room.set_opening_offset(&id, 5.0).unwrap();
        assert!(near(room.opening(&id).unwrap().offset(), 4.0));
        room.set_opening_offset_from_end(&id, 1.0).unwrap();
        assert!(near(room.opening(&id).unwrap().offset(), 3.0));
        room.set_opening_wall(&id, WallSide::East).unwrap();
        let o = room.opening(&id).unwrap();
        assert_eq!(o.wall(), WallSide::East);
        assert!(near(o.offset(), 2.0));
        assert!(room.set_opening_length(&id, 0.0).is_err());
    }

    #[test]
    fn negative_opening_offsets_clamp_to_the_wall_start() {
        let mut room = Room::new(6.0, 4.0).unwrap();
        let id = room.insert_window(WallSide::North, 2.0);
        room.set_opening_offset(&id, -0.3).unwrap();
        assert_eq!(room.opening(&id).unwrap().offset(), 0.0);

        // A negative gap to the end corner reads as flush with it.
        room.set_opening_offset_from_end(&id, -1.0).unwrap();
        assert!(near(room.opening(&id).unwrap().offset(), 4.8));

        assert!(matches!(
            room.set_opening_offset(&id, f64::NAN),
            Err(LayoutError::InvalidDimension { .. })
        ));
        assert!(near(room.opening(&id).unwrap().offset(), 4.8));
    }

    #[test]
    fn door_fields_are_rejected_on_windows() {
        let mut room = Room::new(6.0, 4.0).unwrap();
        let window = room.insert_window(WallSide::South, 0.0);
        assert_eq!(
            room.set_door_open(&window, 0.5),
            Err(LayoutError::NotADoor(window.clone()))
        );
        let door = room.insert_door(WallSide::South, 2.0);
        room.set_door_open(&door, 4.0).unwrap();
        room.set_door_hinge(&door, false).unwrap();
        room.toggle_door_mirror(&door, MirrorAxis::Vertical).unwrap();
        let swing = *room.opening(&door).unwrap().door_swing().unwrap();
        assert_eq!(swing.open_fraction, 1.0);
        assert!(!swing.hinge_at_start);
        assert!(swing.mirror_vertical);
        assert!(!swing.mirror_horizontal);
    }
}
