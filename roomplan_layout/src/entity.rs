// Copyright 2025 the Roomplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interior occupants: beds (with optional nightstands) and furniture.

use kurbo::{Point, Rect, Size};

use crate::error::{LayoutError, non_negative, positive};
use crate::footprint::Occupant;
use crate::id::{EntityId, EntityKind};
use crate::types::{EdgeOffsets, RotationStep, transform_rect_bbox};

/// Local size of a newly created bed.
pub const DEFAULT_BED_SIZE: Size = Size::new(1.6, 2.0);
/// Nightstand side length of a newly created bed.
pub const DEFAULT_NIGHTSTAND_SIZE: f64 = 0.45;
/// Local size of a newly created furniture item.
pub const DEFAULT_FURNITURE_SIZE: Size = Size::new(1.2, 0.6);
/// Label of a newly created furniture item.
pub const DEFAULT_FURNITURE_LABEL: &str = "Table";

bitflags::bitflags! {
    /// Which sides of a bed carry a nightstand, in the bed's local frame.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Nightstands: u8 {
        /// Nightstand on the bed's local left.
        const LEFT  = 0b0000_0001;
        /// Nightstand on the bed's local right.
        const RIGHT = 0b0000_0010;
    }
}

impl Nightstands {
    /// Build from the two persisted booleans.
    pub fn from_sides(left: bool, right: bool) -> Self {
        let mut sides = Self::empty();
        sides.set(Self::LEFT, left);
        sides.set(Self::RIGHT, right);
        sides
    }
}

/// A bed.
///
/// Nightstands are square, top-aligned with the bed's head edge, and sit outside
/// the body on the local left and/or right. They widen the footprint but never
/// move the stored origin.
#[derive(Clone, Debug, PartialEq)]
pub struct Bed {
    id: EntityId,
    origin: Point,
    size: Size,
    rotation: RotationStep,
    nightstands: Nightstands,
    nightstand_size: f64,
}

impl Bed {
    /// Create an unrotated bed without nightstands.
    ///
    /// Fails with [`LayoutError::InvalidDimension`] unless both sides are positive.
    pub fn new(id: EntityId, origin: Point, size: Size) -> Result<Self, LayoutError> {
        positive("bed width", size.width)?;
        positive("bed height", size.height)?;
        Ok(Self {
            id,
            origin,
            size,
            rotation: RotationStep::R0,
            nightstands: Nightstands::empty(),
            nightstand_size: DEFAULT_NIGHTSTAND_SIZE,
        })
    }

    /// A default-sized bed whose body is centred on `center`.
    pub fn centered_at(id: EntityId, center: Point) -> Self {
        let size = DEFAULT_BED_SIZE;
        Self {
            id,
            origin: Point::new(center.x - size.width / 2.0, center.y - size.height / 2.0),
            size,
            rotation: RotationStep::R0,
            nightstands: Nightstands::empty(),
            nightstand_size: DEFAULT_NIGHTSTAND_SIZE,
        }
    }

    /// Builder: set the rotation step.
    #[must_use]
    pub fn with_rotation(mut self, rotation: RotationStep) -> Self {
        self.rotation = rotation;
        self
    }

    /// Builder: set which nightstands are present.
    #[must_use]
    pub fn with_nightstands(mut self, nightstands: Nightstands) -> Self {
        self.nightstands = nightstands;
        self
    }

    /// Builder: set the nightstand side length. Zero is allowed.
    pub fn with_nightstand_size(mut self, size: f64) -> Result<Self, LayoutError> {
        self.nightstand_size = non_negative("nightstand size", size)?;
        Ok(self)
    }

    /// Nightstand presence.
    pub fn nightstands(&self) -> Nightstands {
        self.nightstands
    }

    /// Whether the local-left nightstand is present.
    pub fn nightstand_left(&self) -> bool {
        self.nightstands.contains(Nightstands::LEFT)
    }

    /// Whether the local-right nightstand is present.
    pub fn nightstand_right(&self) -> bool {
        self.nightstands.contains(Nightstands::RIGHT)
    }

    /// Nightstand side length in meters.
    pub fn nightstand_size(&self) -> f64 {
        self.nightstand_size
    }

    /// World-space rectangles of the present nightstands, for drawing.
    pub fn nightstand_rects(&self) -> impl Iterator<Item = Rect> + '_ {
        let ns = self.nightstand_size;
        let w = self.size.width;
        let to_world = self.local_to_world();
        [
            (Nightstands::LEFT, Rect::new(-ns, 0.0, 0.0, ns)),
            (Nightstands::RIGHT, Rect::new(w, 0.0, w + ns, ns)),
        ]
        .into_iter()
        .filter(|(side, _)| self.nightstands.contains(*side))
        .map(move |(_, local)| transform_rect_bbox(to_world, local))
    }

    pub(crate) fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    pub(crate) fn set_nightstands(&mut self, nightstands: Nightstands) {
        self.nightstands = nightstands;
    }

    pub(crate) fn set_nightstand_size(&mut self, size: f64) {
        self.nightstand_size = size;
    }

    pub(crate) fn set_id(&mut self, id: EntityId) {
        self.id = id;
    }
}

impl Occupant for Bed {
    const KIND: EntityKind = EntityKind::Bed;

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn origin(&self) -> Point {
        self.origin
    }

    fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    fn size(&self) -> Size {
        self.size
    }

    fn rotation(&self) -> RotationStep {
        self.rotation
    }

    fn set_rotation(&mut self, step: RotationStep) {
        self.rotation = step;
    }

    /// Local left/right nightstands mapped onto world sides.
    ///
    /// | step | local left | local right |
    /// |------|------------|-------------|
    /// | 0°   | left       | right       |
    /// | 90°  | top        | bottom      |
    /// | 180° | right      | left        |
    /// | 270° | bottom     | top         |
    fn edge_offsets(&self) -> EdgeOffsets {
        let ns = self.nightstand_size;
        let left = self.nightstand_left();
        let right = self.nightstand_right();
        let mut off = EdgeOffsets::ZERO;
        match self.rotation {
            RotationStep::R0 => {
                if left {
                    off.left = -ns;
                }
                if right {
                    off.right = ns;
                }
            }
            RotationStep::R90 => {
                if left {
                    off.top = -ns;
                }
                if right {
                    off.bottom = ns;
                }
            }
            RotationStep::R180 => {
                if left {
                    off.right = ns;
                }
                if right {
                    off.left = -ns;
                }
            }
            RotationStep::R270 => {
                if left {
                    off.bottom = ns;
                }
                if right {
                    off.top = -ns;
                }
            }
        }
        off
    }
}

/// A rectangular furniture item with a free-text label.
#[derive(Clone, Debug, PartialEq)]
pub struct Furniture {
    id: EntityId,
    origin: Point,
    size: Size,
    rotation: RotationStep,
    label: String,
}

impl Furniture {
    /// Create an unrotated item.
    ///
    /// Fails with [`LayoutError::InvalidDimension`] unless both sides are positive.
    pub fn new(
        id: EntityId,
        origin: Point,
        size: Size,
        label: impl Into<String>,
    ) -> Result<Self, LayoutError> {
        positive("furniture width", size.width)?;
        positive("furniture height", size.height)?;
        Ok(Self {
            id,
            origin,
            size,
            rotation: RotationStep::R0,
            label: label.into(),
        })
    }

    /// A default-sized table centred on `center`.
    pub fn centered_at(id: EntityId, center: Point) -> Self {
        let size = DEFAULT_FURNITURE_SIZE;
        Self {
            id,
            origin: Point::new(center.x - size.width / 2.0, center.y - size.height / 2.0),
            size,
            rotation: RotationStep::R0,
            label: DEFAULT_FURNITURE_LABEL.into(),
        }
    }

    /// Builder: set the rotation step.
    #[must_use]
    pub fn with_rotation(mut self, rotation: RotationStep) -> Self {
        self.rotation = rotation;
        self
    }

    /// Display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub(crate) fn set_label(&mut self, label: String) {
        self.label = label;
    }

    pub(crate) fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    pub(crate) fn set_id(&mut self, id: EntityId) {
        self.id = id;
    }
}

impl Occupant for Furniture {
    const KIND: EntityKind = EntityKind::Furniture;

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn origin(&self) -> Point {
        self.origin
    }

    fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    fn size(&self) -> Size {
        self.size
    }

    fn rotation(&self) -> RotationStep {
        self.rotation
    }

    fn set_rotation(&mut self, step: RotationStep) {
        self.rotation = step;
    }
}
