// Copyright 2025 the Roomplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The room: interior bounds, owned occupants, containment, and overlap checks.

use kurbo::{Point, Rect, Size};
use tracing::warn;

use crate::config::LayoutConfig;
use crate::entity::{Bed, Furniture};
use crate::error::{LayoutError, positive};
use crate::footprint::Occupant;
use crate::id::{EntityId, EntityKind, IdGenerator};
use crate::opening::{DoorLeaf, Opening, WallSide};
use crate::types::{clamp_axis, intersects};

/// Wall thickness used when none is given.
pub const DEFAULT_WALL_THICKNESS: f64 = 0.1;

/// Interior extent of a room, with the containment rules for its occupants.
///
/// This is a small `Copy` view so callers can clamp an entity while it is
/// mutably borrowed out of the room.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Interior {
    /// Interior width (north and south wall run).
    pub width: f64,
    /// Interior height (east and west wall run).
    pub height: f64,
}

impl Interior {
    /// Interior as a `Size`.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Run length of `side`: the width for north and south, the height for east and west.
    pub fn wall_length(&self, side: WallSide) -> f64 {
        if side.is_horizontal() {
            self.width
        } else {
            self.height
        }
    }

    /// Largest offset an opening of `length` can take on `side`.
    pub fn max_offset(&self, side: WallSide, length: f64) -> f64 {
        (self.wall_length(side) - length).max(0.0)
    }

    /// Move an occupant so its whole footprint lies inside the interior.
    ///
    /// When the footprint is larger than the interior along an axis, the occupant
    /// is pinned to the lower bound (its footprint starts at the wall).
    pub fn clamp<E: Occupant>(&self, entity: &mut E) {
        let fp = entity.footprint();
        let origin = entity.origin();
        let min_x = -fp.offsets.left;
        let max_x = self.width - fp.base.width - fp.offsets.right;
        let min_y = -fp.offsets.top;
        let max_y = self.height - fp.base.height - fp.offsets.bottom;
        entity.set_origin(Point::new(
            clamp_axis(origin.x, min_x, max_x),
            clamp_axis(origin.y, min_y, max_y),
        ));
    }

    /// Keep an opening's span within its wall's run.
    pub fn clamp_opening(&self, opening: &mut Opening) {
        let max = self.max_offset(opening.wall(), opening.length());
        opening.set_offset(clamp_axis(opening.offset(), 0.0, max));
    }
}

/// Something picked by [`Room::hit_test`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Hit {
    /// A window or door.
    Opening(EntityId),
    /// A bed.
    Bed(EntityId),
    /// A furniture item.
    Furniture(EntityId),
}

/// A rectangular room and everything in it.
///
/// Coordinates are meters relative to the interior's top-left corner. Walls lie
/// outside the interior. Each collection is kept in insertion order, which is
/// also the drawing order: later entries are on top.
#[derive(Clone, Debug)]
pub struct Room {
    width: f64,
    height: f64,
    wall_thickness: f64,
    pub(crate) openings: Vec<Opening>,
    pub(crate) beds: Vec<Bed>,
    pub(crate) furniture: Vec<Furniture>,
    ids: IdGenerator,
    pub(crate) config: LayoutConfig,
}

impl Room {
    /// Create an empty room with the default wall thickness.
    pub fn new(width: f64, height: f64) -> Result<Self, LayoutError> {
        Self::with_wall_thickness(width, height, DEFAULT_WALL_THICKNESS)
    }

    /// Create an empty room.
    ///
    /// Fails with [`LayoutError::InvalidDimension`] unless all three sizes are positive.
    pub fn with_wall_thickness(
        width: f64,
        height: f64,
        wall_thickness: f64,
    ) -> Result<Self, LayoutError> {
        Ok(Self {
            width: positive("room width", width)?,
            height: positive("room height", height)?,
            wall_thickness: positive("wall thickness", wall_thickness)?,
            openings: Vec::new(),
            beds: Vec::new(),
            furniture: Vec::new(),
            ids: IdGenerator::new(),
            config: LayoutConfig::default(),
        })
    }

    /// Builder: replace the layout configuration.
    #[must_use]
    pub fn with_config(mut self, config: LayoutConfig) -> Self {
        self.config = config;
        self
    }

    /// Interior width in meters.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Interior height in meters.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Wall thickness in meters.
    pub fn wall_thickness(&self) -> f64 {
        self.wall_thickness
    }

    /// Interior bounds and containment rules.
    pub fn interior(&self) -> Interior {
        Interior {
            width: self.width,
            height: self.height,
        }
    }

    /// Active layout configuration.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Openings in insertion order.
    pub fn openings(&self) -> &[Opening] {
        &self.openings
    }

    /// Beds in insertion order.
    pub fn beds(&self) -> &[Bed] {
        &self.beds
    }

    /// Furniture in insertion order.
    pub fn furniture(&self) -> &[Furniture] {
        &self.furniture
    }

    /// Look up an opening.
    pub fn opening(&self, id: &EntityId) -> Option<&Opening> {
        self.openings.iter().find(|o| o.id() == id)
    }

    /// Look up a bed.
    pub fn bed(&self, id: &EntityId) -> Option<&Bed> {
        self.beds.iter().find(|b| b.id() == id)
    }

    /// Look up a furniture item.
    pub fn furniture_item(&self, id: &EntityId) -> Option<&Furniture> {
        self.furniture.iter().find(|f| f.id() == id)
    }

    /// Whether any entity in the room already uses `id`.
    pub fn contains_id(&self, id: &str) -> bool {
        self.openings.iter().any(|o| o.id().as_str() == id)
            || self.beds.iter().any(|b| b.id().as_str() == id)
            || self.furniture.iter().any(|f| f.id().as_str() == id)
    }

    /// A fresh id for an entity of `kind`, unique within this room.
    pub fn next_id(&mut self, kind: EntityKind) -> EntityId {
        let Self {
            ids,
            openings,
            beds,
            furniture,
            ..
        } = self;
        ids.next(kind, |candidate| {
            openings.iter().any(|o| o.id().as_str() == candidate)
                || beds.iter().any(|b| b.id().as_str() == candidate)
                || furniture.iter().any(|f| f.id().as_str() == candidate)
        })
    }

    pub(crate) fn check_new_id(&self, id: &EntityId) -> Result<(), LayoutError> {
        if self.contains_id(id.as_str()) {
            return Err(LayoutError::DuplicateId(id.clone()));
        }
        Ok(())
    }

    /// Add an opening and clamp it onto its wall.
    pub fn add_opening(&mut self, mut opening: Opening) -> Result<EntityId, LayoutError> {
        self.check_new_id(opening.id())?;
        self.interior().clamp_opening(&mut opening);
        let id = opening.id().clone();
        self.openings.push(opening);
        Ok(id)
    }

    /// Add a bed and clamp it into the interior. Overlap is not resolved here;
    /// see [`Room::place_bed`].
    pub fn add_bed(&mut self, mut bed: Bed) -> Result<EntityId, LayoutError> {
        self.check_new_id(bed.id())?;
        self.interior().clamp(&mut bed);
        let id = bed.id().clone();
        self.beds.push(bed);
        Ok(id)
    }

    /// Add a furniture item and clamp it into the interior. Overlap is not
    /// resolved here; see [`Room::place_furniture`].
    pub fn add_furniture(&mut self, mut item: Furniture) -> Result<EntityId, LayoutError> {
        self.check_new_id(item.id())?;
        self.interior().clamp(&mut item);
        let id = item.id().clone();
        self.furniture.push(item);
        Ok(id)
    }

    /// Add an opening, replacing a missing or clashing id with a generated one.
    pub fn adopt_opening(&mut self, mut opening: Opening) -> EntityId {
        if opening.id().is_empty() || self.contains_id(opening.id().as_str()) {
            let fresh = self.next_id(opening.entity_kind());
            warn!(old = %opening.id(), new = %fresh, "missing or duplicate opening id replaced");
            opening.set_id(fresh);
        }
        self.interior().clamp_opening(&mut opening);
        let id = opening.id().clone();
        self.openings.push(opening);
        id
    }

    /// Add a bed, replacing a missing or clashing id with a generated one.
    pub fn adopt_bed(&mut self, mut bed: Bed) -> EntityId {
        if bed.id().is_empty() || self.contains_id(bed.id().as_str()) {
            let fresh = self.next_id(EntityKind::Bed);
            warn!(old = %bed.id(), new = %fresh, "missing or duplicate bed id replaced");
            bed.set_id(fresh);
        }
        self.interior().clamp(&mut bed);
        let id = bed.id().clone();
        self.beds.push(bed);
        id
    }

    /// Add a furniture item, replacing a missing or clashing id with a generated one.
    pub fn adopt_furniture(&mut self, mut item: Furniture) -> EntityId {
        if item.id().is_empty() || self.contains_id(item.id().as_str()) {
            let fresh = self.next_id(EntityKind::Furniture);
            warn!(old = %item.id(), new = %fresh, "missing or duplicate furniture id replaced");
            item.set_id(fresh);
        }
        self.interior().clamp(&mut item);
        let id = item.id().clone();
        self.furniture.push(item);
        id
    }

    /// Remove an opening, returning it.
    pub fn remove_opening(&mut self, id: &EntityId) -> Option<Opening> {
        let idx = self.openings.iter().position(|o| o.id() == id)?;
        Some(self.openings.remove(idx))
    }

    /// Remove a bed, returning it.
    pub fn remove_bed(&mut self, id: &EntityId) -> Option<Bed> {
        let idx = self.beds.iter().position(|b| b.id() == id)?;
        Some(self.beds.remove(idx))
    }

    /// Remove a furniture item, returning it.
    pub fn remove_furniture(&mut self, id: &EntityId) -> Option<Furniture> {
        let idx = self.furniture.iter().position(|f| f.id() == id)?;
        Some(self.furniture.remove(idx))
    }

    /// Whether `bed`'s footprint intersects any furniture item's footprint.
    pub fn bed_intersects_any_furniture(&self, bed: &Bed) -> bool {
        collides_with_any(bed, &self.furniture)
    }

    /// Whether `item`'s footprint intersects any bed's footprint.
    pub fn furniture_intersects_any_bed(&self, item: &Furniture) -> bool {
        collides_with_any(item, &self.beds)
    }

    /// Whether any bed/furniture pair overlaps.
    pub fn has_overlap(&self) -> bool {
        self.beds
            .iter()
            .any(|bed| collides_with_any(bed, &self.furniture))
    }

    /// The opening's rectangle within its wall band, in interior meters.
    ///
    /// North and west walls have negative coordinates; south and east walls lie
    /// beyond the interior's width or height.
    pub fn opening_rect(&self, opening: &Opening) -> Rect {
        let t = self.wall_thickness;
        let (start, end) = (opening.offset(), opening.offset() + opening.length());
        match opening.wall() {
            WallSide::North => Rect::new(start, -t, end, 0.0),
            WallSide::South => Rect::new(start, self.height, end, self.height + t),
            WallSide::West => Rect::new(-t, start, 0.0, end),
            WallSide::East => Rect::new(self.width, start, self.width + t, end),
        }
    }

    /// Door leaf geometry for drawing, or `None` for windows.
    pub fn door_leaf(&self, opening: &Opening) -> Option<DoorLeaf> {
        let swing = opening.door_swing()?;
        let (start, end) = (opening.offset(), opening.offset() + opening.length());
        let (a, b) = match opening.wall() {
            WallSide::North => (Point::new(start, 0.0), Point::new(end, 0.0)),
            WallSide::South => (
                Point::new(start, self.height),
                Point::new(end, self.height),
            ),
            WallSide::West => (Point::new(0.0, start), Point::new(0.0, end)),
            WallSide::East => (Point::new(self.width, start), Point::new(self.width, end)),
        };
        Some(DoorLeaf::new(
            opening.wall(),
            a,
            b,
            opening.length(),
            swing,
        ))
    }

    /// The topmost entity under `point` (interior meters).
    ///
    /// Openings are tested first, then furniture, then beds, each from the most
    /// recently added. Occupants are tested against their body only.
    pub fn hit_test(&self, point: Point) -> Option<Hit> {
        if let Some(o) = self
            .openings
            .iter()
            .rev()
            .find(|o| contains_inclusive(self.opening_rect(o), point))
        {
            return Some(Hit::Opening(o.id().clone()));
        }
        if let Some(f) = self.furniture.iter().rev().find(|f| f.contains_point(point)) {
            return Some(Hit::Furniture(f.id().clone()));
        }
        self.beds
            .iter()
            .rev()
            .find(|b| b.contains_point(point))
            .map(|b| Hit::Bed(b.id().clone()))
    }

    pub(crate) fn opening_index(&self, id: &EntityId) -> Result<usize, LayoutError> {
        self.openings
            .iter()
            .position(|o| o.id() == id)
            .ok_or_else(|| LayoutError::OpeningNotFound(id.clone()))
    }

    pub(crate) fn bed_index(&self, id: &EntityId) -> Result<usize, LayoutError> {
        self.beds
            .iter()
            .position(|b| b.id() == id)
            .ok_or_else(|| LayoutError::NotFound {
                kind: EntityKind::Bed,
                id: id.clone(),
            })
    }

    pub(crate) fn furniture_index(&self, id: &EntityId) -> Result<usize, LayoutError> {
        self.furniture
            .iter()
            .position(|f| f.id() == id)
            .ok_or_else(|| LayoutError::NotFound {
                kind: EntityKind::Furniture,
                id: id.clone(),
            })
    }
}

/// Linear scan for a footprint intersection against another collection.
pub(crate) fn collides_with_any<A: Occupant, B: Occupant>(entity: &A, others: &[B]) -> bool {
    let rect = entity.footprint().rect;
    others
        .iter()
        .any(|other| intersects(rect, other.footprint().rect))
}

fn contains_inclusive(rect: Rect, p: Point) -> bool {
    p.x >= rect.x0 && p.x <= rect.x1 && p.y >= rect.y0 && p.y <= rect.y1
}
