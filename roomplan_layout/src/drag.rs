// Copyright 2025 the Roomplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Live drag sessions.
//!
//! A drag is started on pointer-down and fed every pointer-move in interior
//! meters (see [`RoomMetrics::to_room`](crate::RoomMetrics::to_room)). Moves
//! cost O(1): occupants that would collide snap back to their last safe
//! position instead of searching for a free one.
//!
//! Openings slide along the perimeter and hand off to the adjacent wall when
//! dragged past a corner, so one gesture can carry a window all the way round.

use kurbo::{Point, Vec2};
use tracing::trace;

use crate::error::LayoutError;
use crate::footprint::Occupant;
use crate::id::EntityId;
use crate::opening::WallSide;
use crate::placement::EditOutcome;
use crate::room::{Interior, Room, collides_with_any};
use crate::types::RotationStep;

/// Which occupant a drag moves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DragTarget {
    /// A bed.
    Bed(EntityId),
    /// A furniture item.
    Furniture(EntityId),
}

/// A drag of a bed or furniture item.
#[derive(Clone, Debug)]
pub struct OccupantDrag {
    target: DragTarget,
    grab: Vec2,
    safe_origin: Point,
    safe_rotation: RotationStep,
}

impl OccupantDrag {
    /// Start dragging a bed grabbed at `pointer`.
    pub fn bed(room: &Room, id: &EntityId, pointer: Point) -> Result<Self, LayoutError> {
        let bed = &room.beds()[room.bed_index(id)?];
        Ok(Self::start(DragTarget::Bed(id.clone()), bed, pointer))
    }

    /// Start dragging a furniture item grabbed at `pointer`.
    pub fn furniture(room: &Room, id: &EntityId, pointer: Point) -> Result<Self, LayoutError> {
        let item = &room.furniture()[room.furniture_index(id)?];
        Ok(Self::start(DragTarget::Furniture(id.clone()), item, pointer))
    }

    fn start<E: Occupant>(target: DragTarget, entity: &E, pointer: Point) -> Self {
        Self {
            target,
            grab: pointer - entity.center(),
            safe_origin: entity.origin(),
            safe_rotation: entity.rotation(),
        }
    }

    /// The entity being dragged.
    pub fn target(&self) -> &DragTarget {
        &self.target
    }

    /// Move the grabbed point to `pointer`.
    ///
    /// The body is re-centred under the pointer, snapped to nearby walls and
    /// clamped. If it then overlaps the other category it returns to the last
    /// accepted position and [`EditOutcome::Reverted`] is reported.
    pub fn update(&mut self, room: &mut Room, pointer: Point) -> Result<EditOutcome, LayoutError> {
        let center = pointer - self.grab;
        let interior = room.interior();
        let snap = room.config.snap_distance;
        let outcome = match &self.target {
            DragTarget::Bed(id) => {
                let idx = room.bed_index(id)?;
                let Room {
                    beds, furniture, ..
                } = room;
                self.step(&mut beds[idx], furniture, interior, snap, center)
            }
            DragTarget::Furniture(id) => {
                let idx = room.furniture_index(id)?;
                let Room {
                    beds, furniture, ..
                } = room;
                self.step(&mut furniture[idx], beds, interior, snap, center)
            }
        };
        Ok(outcome)
    }

    fn step<E: Occupant, O: Occupant>(
        &mut self,
        entity: &mut E,
        others: &[O],
        interior: Interior,
        snap: f64,
        center: Point,
    ) -> EditOutcome {
        let base = entity.footprint().base;
        entity.set_origin(Point::new(
            center.x - base.width / 2.0,
            center.y - base.height / 2.0,
        ));
        snap_to_walls(entity, interior, snap);
        interior.clamp(entity);
        if collides_with_any(entity, others) {
            trace!(id = %entity.id(), "drag step collides; back to last safe position");
            entity.set_origin(self.safe_origin);
            entity.set_rotation(self.safe_rotation);
            return EditOutcome::Reverted;
        }
        self.safe_origin = entity.origin();
        self.safe_rotation = entity.rotation();
        EditOutcome::Accepted
    }
}

/// Pull footprint edges lying within `distance` of a wall flush against it.
///
/// Edges are tested in the order left, top, right, bottom; a later snap on the
/// same axis wins.
pub fn snap_to_walls<E: Occupant>(entity: &mut E, interior: Interior, distance: f64) {
    let fp = entity.footprint();
    let mut origin = entity.origin();
    if fp.rect.x0.abs() < distance {
        origin.x = -fp.offsets.left;
    }
    if fp.rect.y0.abs() < distance {
        origin.y = -fp.offsets.top;
    }
    if (interior.width - fp.rect.x1).abs() < distance {
        origin.x = interior.width - fp.base.width - fp.offsets.right;
    }
    if (interior.height - fp.rect.y1).abs() < distance {
        origin.y = interior.height - fp.base.height - fp.offsets.bottom;
    }
    entity.set_origin(origin);
}

/// Where an opening ends up after a drag step.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WallPosition {
    /// Wall the opening is on.
    pub wall: WallSide,
    /// Offset along that wall.
    pub offset: f64,
    /// Whether the step crossed a corner.
    pub transferred: bool,
}

/// Resolve a raw along-wall position for an opening of `length` on `wall`.
///
/// Positions inside `[0, run - length]` stay on the wall. Running off the start
/// moves the opening to [`WallSide::before_start`], running off the end to
/// [`WallSide::past_end`]; either way the new offset is the overflow, clamped
/// to the new wall's range.
///
/// ```
/// use roomplan_layout::{Interior, WallSide, slide_along_perimeter};
///
/// let room = Interior { width: 6.0, height: 4.0 };
/// let pos = slide_along_perimeter(room, WallSide::North, 5.3, 1.2);
/// assert_eq!(pos.wall, WallSide::East);
/// assert!((pos.offset - 0.5).abs() < 1e-9);
/// ```
pub fn slide_along_perimeter(
    interior: Interior,
    wall: WallSide,
    along: f64,
    length: f64,
) -> WallPosition {
    let limit = interior.max_offset(wall, length);
    let (target, overflow) = if along < 0.0 {
        (wall.before_start(), -along)
    } else if along > limit {
        (wall.past_end(), along - limit)
    } else {
        return WallPosition {
            wall,
            offset: along,
            transferred: false,
        };
    };
    WallPosition {
        wall: target,
        offset: overflow.min(interior.max_offset(target, length)),
        transferred: true,
    }
}

/// A drag of a window or door along the walls.
#[derive(Clone, Debug)]
pub struct OpeningDrag {
    id: EntityId,
    wall: WallSide,
    grab: f64,
}

impl OpeningDrag {
    /// Start dragging an opening grabbed at `pointer`.
    pub fn start(room: &Room, id: &EntityId, pointer: Point) -> Result<Self, LayoutError> {
        let opening = &room.openings()[room.opening_index(id)?];
        let wall = opening.wall();
        Ok(Self {
            id: id.clone(),
            wall,
            grab: wall.along(pointer) - opening.offset(),
        })
    }

    /// The opening being dragged.
    pub fn id(&self) -> &EntityId {
        &self.id
    }

    /// The wall the drag is currently following.
    pub fn wall(&self) -> WallSide {
        self.wall
    }

    /// Slide the opening to follow `pointer`, crossing corners as needed.
    ///
    /// After a transfer the grab is re-anchored on the new wall, so the next
    /// move continues from where the opening landed.
    pub fn update(&mut self, room: &mut Room, pointer: Point) -> Result<WallPosition, LayoutError> {
        let idx = room.opening_index(&self.id)?;
        let interior = room.interior();
        let opening = &mut room.openings[idx];
        let along = self.wall.along(pointer) - self.grab;
        let pos = slide_along_perimeter(interior, self.wall, along, opening.length());
        if pos.transferred {
            trace!(
                id = %self.id,
                from = self.wall.as_str(),
                to = pos.wall.as_str(),
                offset = pos.offset,
                "opening crossed a corner"
            );
            self.wall = pos.wall;
            self.grab = pos.wall.along(pointer) - pos.offset;
        }
        opening.set_wall(pos.wall);
        opening.set_offset(pos.offset);
        Ok(pos)
    }
}
