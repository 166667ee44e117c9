// Copyright 2025 the Roomplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Windows and doors set into the room's walls.
//!
//! An opening's position is a single scalar: its `offset` along the wall it
//! belongs to. Along-wall coordinates grow left to right on the north and south
//! walls and top to bottom on the east and west walls, in interior space.

use core::f64::consts::{FRAC_PI_2, PI};

use kurbo::{Point, Vec2};

use crate::error::{LayoutError, positive};
use crate::id::{EntityId, EntityKind};

/// Length of a newly created window.
pub const DEFAULT_WINDOW_LENGTH: f64 = 1.2;
/// Length of a newly created door.
pub const DEFAULT_DOOR_LENGTH: f64 = 0.9;
/// Swing of a fully open door, in degrees.
pub const MAX_DOOR_SWING_DEGREES: f64 = 170.0;

/// A side of the room, clockwise from the top.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WallSide {
    /// Top wall.
    #[cfg_attr(feature = "serde", serde(rename = "N"))]
    North,
    /// Right wall.
    #[cfg_attr(feature = "serde", serde(rename = "E"))]
    East,
    /// Bottom wall.
    #[cfg_attr(feature = "serde", serde(rename = "S"))]
    South,
    /// Left wall.
    #[cfg_attr(feature = "serde", serde(rename = "W"))]
    West,
}

impl WallSide {
    /// All sides, clockwise from the top.
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// True for north and south, whose run is the room width.
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::North | Self::South)
    }

    /// Along-wall coordinate of an interior point: `x` for horizontal walls, `y` otherwise.
    pub fn along(self, point: Point) -> f64 {
        if self.is_horizontal() {
            point.x
        } else {
            point.y
        }
    }

    /// Wall reached by running off the start of this wall's run.
    pub const fn before_start(self) -> Self {
        if self.is_horizontal() {
            Self::West
        } else {
            Self::North
        }
    }

    /// Wall reached by running off the end of this wall's run.
    pub const fn past_end(self) -> Self {
        if self.is_horizontal() {
            Self::East
        } else {
            Self::South
        }
    }

    /// One-letter compass name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::North => "N",
            Self::East => "E",
            Self::South => "S",
            Self::West => "W",
        }
    }
}

/// Axis along which a door leaf is mirrored.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MirrorAxis {
    /// Flips the swing on north and south walls.
    Horizontal,
    /// Flips the swing on east and west walls.
    Vertical,
}

/// Door-only state.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct DoorSwing {
    /// 0 is closed, 1 is fully open.
    pub open_fraction: f64,
    /// Hinge at the start of the opening's span (smaller along-wall coordinate).
    pub hinge_at_start: bool,
    /// Flip the swing direction on north and south walls.
    pub mirror_horizontal: bool,
    /// Flip the swing direction on east and west walls.
    pub mirror_vertical: bool,
}

impl DoorSwing {
    /// A closed door hinged at the start.
    pub const CLOSED: Self = Self {
        open_fraction: 0.0,
        hinge_at_start: true,
        mirror_horizontal: false,
        mirror_vertical: false,
    };

    /// Unsigned swing angle in radians.
    pub fn angle(&self) -> f64 {
        self.open_fraction.clamp(0.0, 1.0) * MAX_DOOR_SWING_DEGREES.to_radians()
    }
}

/// Window or door.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum OpeningKind {
    /// A window.
    Window,
    /// A door and its swing state.
    Door(DoorSwing),
}

/// A window or door occupying a span of one wall.
#[derive(Clone, Debug, PartialEq)]
pub struct Opening {
    id: EntityId,
    wall: WallSide,
    offset: f64,
    length: f64,
    kind: OpeningKind,
}

impl Opening {
    /// Create an opening. Negative offsets are raised to zero.
    ///
    /// Fails with [`LayoutError::InvalidDimension`] unless `length` is positive.
    pub fn new(
        id: EntityId,
        kind: OpeningKind,
        wall: WallSide,
        offset: f64,
        length: f64,
    ) -> Result<Self, LayoutError> {
        positive("opening length", length)?;
        Ok(Self {
            id,
            wall,
            offset: offset.max(0.0),
            length,
            kind,
        })
    }

    /// A default-length window.
    pub fn window(id: EntityId, wall: WallSide, offset: f64) -> Self {
        Self {
            id,
            wall,
            offset: offset.max(0.0),
            length: DEFAULT_WINDOW_LENGTH,
            kind: OpeningKind::Window,
        }
    }

    /// A default-length, closed door hinged at the start.
    pub fn door(id: EntityId, wall: WallSide, offset: f64) -> Self {
        Self {
            id,
            wall,
            offset: offset.max(0.0),
            length: DEFAULT_DOOR_LENGTH,
            kind: OpeningKind::Door(DoorSwing::CLOSED),
        }
    }

    /// Stable id.
    pub fn id(&self) -> &EntityId {
        &self.id
    }

    /// Wall the opening sits on.
    pub fn wall(&self) -> WallSide {
        self.wall
    }

    /// Distance from the wall's start corner to the opening's start.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Span along the wall.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Window or door.
    pub fn kind(&self) -> &OpeningKind {
        &self.kind
    }

    /// The id kind: [`EntityKind::Window`] or [`EntityKind::Door`].
    pub fn entity_kind(&self) -> EntityKind {
        match self.kind {
            OpeningKind::Window => EntityKind::Window,
            OpeningKind::Door(_) => EntityKind::Door,
        }
    }

    /// Door state, if this is a door.
    pub fn door_swing(&self) -> Option<&DoorSwing> {
        match &self.kind {
            OpeningKind::Door(swing) => Some(swing),
            OpeningKind::Window => None,
        }
    }

    pub(crate) fn door_swing_mut(&mut self) -> Result<&mut DoorSwing, LayoutError> {
        match &mut self.kind {
            OpeningKind::Door(swing) => Ok(swing),
            OpeningKind::Window => Err(LayoutError::NotADoor(self.id.clone())),
        }
    }

    pub(crate) fn set_wall(&mut self, wall: WallSide) {
        self.wall = wall;
    }

    pub(crate) fn set_offset(&mut self, offset: f64) {
        self.offset = offset;
    }

    pub(crate) fn set_length(&mut self, length: f64) {
        self.length = length;
    }

    pub(crate) fn set_id(&mut self, id: EntityId) {
        self.id = id;
    }
}

/// Door leaf geometry in interior meters, derived for drawing.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DoorLeaf {
    /// Hinge point on the wall's interior face.
    pub hinge: Point,
    /// Leaf length (the opening's length).
    pub length: f64,
    /// Angle of the closed leaf, lying along the wall.
    pub base_angle: f64,
    /// Signed rotation from the closed position; positive is clockwise on screen.
    pub sweep: f64,
}

impl DoorLeaf {
    /// Derive the leaf for a door on `wall` whose span starts at `start` and ends
    /// at `end` on the interior face.
    pub(crate) fn new(
        wall: WallSide,
        start: Point,
        end: Point,
        length: f64,
        swing: &DoorSwing,
    ) -> Self {
        let at_start = swing.hinge_at_start;
        let hinge = if at_start { start } else { end };
        // Closed leaf lies along the wall; positive sign swings clockwise on screen.
        let (base_angle, mut sign) = match (wall, at_start) {
            (WallSide::North, true) => (0.0, 1.0),
            (WallSide::North, false) => (PI, -1.0),
            (WallSide::South, true) => (0.0, -1.0),
            (WallSide::South, false) => (PI, 1.0),
            (WallSide::West, true) => (FRAC_PI_2, -1.0),
            (WallSide::West, false) => (-FRAC_PI_2, 1.0),
            (WallSide::East, true) => (FRAC_PI_2, 1.0),
            (WallSide::East, false) => (-FRAC_PI_2, -1.0),
        };
        let mirrored = if wall.is_horizontal() {
            swing.mirror_horizontal
        } else {
            swing.mirror_vertical
        };
        if mirrored {
            sign = -sign;
        }
        Self {
            hinge,
            length,
            base_angle,
            sweep: sign * swing.angle(),
        }
    }

    /// Angle of the leaf in its current position.
    pub fn angle(&self) -> f64 {
        self.base_angle + self.sweep
    }

    /// Free end of the leaf.
    pub fn tip(&self) -> Point {
        let a = self.angle();
        self.hinge + Vec2::new(a.cos(), a.sin()) * self.length
    }
}
