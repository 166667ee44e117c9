// Copyright 2025 the Roomplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Footprint computation: the world-space box an occupant actually covers.
//!
//! An occupant stores the top-left corner of its body *after* rotation and its
//! local (unrotated) size. The footprint swaps width and height for portrait
//! steps and then widens the box by any accessory offsets. Clamping, overlap
//! checks, drag snapping, and drawing all go through [`Occupant::footprint`],
//! so they always agree on geometry.

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::id::{EntityId, EntityKind};
use crate::types::{EdgeOffsets, RotationStep};

/// Derived geometry of an occupant.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Footprint {
    /// Canonical rotation the footprint was computed for.
    pub step: RotationStep,
    /// Body size after the rotation swap.
    pub base: Size,
    /// Accessory extensions beyond the body, in world directions.
    pub offsets: EdgeOffsets,
    /// The rotated body alone.
    pub body: Rect,
    /// The world AABB: body plus accessory offsets.
    pub rect: Rect,
}

impl Footprint {
    /// Compute the footprint of a body whose rotated top-left corner is `origin`.
    pub fn new(origin: Point, size: Size, step: RotationStep, offsets: EdgeOffsets) -> Self {
        let base = rotated_size(size, step);
        let body = Rect::from_origin_size(origin, base);
        let rect = Rect::new(
            body.x0 + offsets.left,
            body.y0 + offsets.top,
            body.x1 + offsets.right,
            body.y1 + offsets.bottom,
        );
        Self {
            step,
            base,
            offsets,
            body,
            rect,
        }
    }

    /// Whether the whole footprint lies within `[0, interior.width] × [0, interior.height]`.
    pub fn fits_within(&self, interior: Size) -> bool {
        const EPS: f64 = 1e-9;
        self.rect.x0 >= -EPS
            && self.rect.y0 >= -EPS
            && self.rect.x1 <= interior.width + EPS
            && self.rect.y1 <= interior.height + EPS
    }
}

/// Local size as seen in world space for a rotation step.
pub fn rotated_size(size: Size, step: RotationStep) -> Size {
    if step.is_portrait() {
        Size::new(size.height, size.width)
    } else {
        size
    }
}

/// An entity placed in the room interior: beds and furniture.
///
/// Implementors expose raw attributes; footprint, transform, and hit testing
/// are derived from them.
pub trait Occupant: Clone {
    /// Which collection the occupant lives in.
    const KIND: EntityKind;

    /// Stable id.
    fn id(&self) -> &EntityId;

    /// Top-left corner of the rotated body, relative to the interior's top-left.
    fn origin(&self) -> Point;

    /// Move the rotated body's top-left corner.
    fn set_origin(&mut self, origin: Point);

    /// Local size before rotation.
    fn size(&self) -> Size;

    /// Current rotation step.
    fn rotation(&self) -> RotationStep;

    /// Replace the rotation step. The origin is left untouched.
    fn set_rotation(&mut self, step: RotationStep);

    /// Accessory extensions in world directions. Zero unless overridden.
    fn edge_offsets(&self) -> EdgeOffsets {
        EdgeOffsets::ZERO
    }

    /// Derived world footprint.
    fn footprint(&self) -> Footprint {
        Footprint::new(
            self.origin(),
            self.size(),
            self.rotation(),
            self.edge_offsets(),
        )
    }

    /// Centre of the rotated body.
    fn center(&self) -> Point {
        self.footprint().body.center()
    }

    /// Transform from local body space (origin at the unrotated top-left) to interior space.
    fn local_to_world(&self) -> Affine {
        let size = self.size();
        Affine::translate(self.center().to_vec2())
            * Affine::rotate(self.rotation().radians())
            * Affine::translate(Vec2::new(-size.width / 2.0, -size.height / 2.0))
    }

    /// Whether `point` (interior meters) falls on the body, edges inclusive.
    ///
    /// Accessories are not part of the pickable body.
    fn contains_point(&self, point: Point) -> bool {
        const EPS: f64 = 1e-9;
        let local = self.local_to_world().inverse() * point;
        let size = self.size();
        local.x >= -EPS
            && local.y >= -EPS
            && local.x <= size.width + EPS
            && local.y <= size.height + EPS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Crate {
        id: EntityId,
        origin: Point,
        size: Size,
        rotation: RotationStep,
    }

    impl Occupant for Crate {
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

    fn assert_rect_near(a: Rect, b: Rect) {
        let d = (a.x0 - b.x0)
            .abs()
            .max((a.y0 - b.y0).abs())
            .max((a.x1 - b.x1).abs())
            .max((a.y1 - b.y1).abs());
        assert!(d < 1e-9, "{a:?} != {b:?}");
    }

    fn sample(rotation: RotationStep) -> Crate {
        Crate {
            id: EntityId::from("crate"),
            origin: Point::new(1.0, 1.0),
            size: Size::new(1.2, 0.6),
            rotation,
        }
    }

    #[test]
    fn portrait_steps_swap_width_and_height() {
        let fp = sample(RotationStep::R90).footprint();
        assert_eq!(fp.base, Size::new(0.6, 1.2));
        assert_rect_near(fp.rect, Rect::new(1.0, 1.0, 1.6, 2.2));
        let fp = sample(RotationStep::R180).footprint();
        assert_eq!(fp.base, Size::new(1.2, 0.6));
    }

    #[test]
    fn origin_is_rotation_invariant_corner() {
        for step in RotationStep::ALL {
            let fp = sample(step).footprint();
            assert_eq!(fp.rect.origin(), Point::new(1.0, 1.0));
        }
    }

    #[test]
    fn offsets_widen_the_rect_but_not_the_body() {
        let offsets = EdgeOffsets {
            left: -0.5,
            bottom: 0.25,
            ..EdgeOffsets::ZERO
        };
        let fp = Footprint::new(
            Point::new(1.0, 1.0),
            Size::new(2.0, 1.0),
            RotationStep::R0,
            offsets,
        );
        assert_eq!(fp.body, Rect::new(1.0, 1.0, 3.0, 2.0));
        assert_eq!(fp.rect, Rect::new(0.5, 1.0, 3.0, 2.25));
        assert!(fp.fits_within(Size::new(3.0, 3.0)));
        assert!(!fp.fits_within(Size::new(2.9, 3.0)));
    }

    #[test]
    fn hit_test_uses_rotated_body() {
        let c = sample(RotationStep::R90);
        // Rotated body spans x in [1.0, 1.6], y in [1.0, 2.2].
        assert!(c.contains_point(Point::new(1.3, 2.1)));
        assert!(c.contains_point(Point::new(1.6, 1.0)));
        assert!(!c.contains_point(Point::new(2.1, 1.3)));
        let c = sample(RotationStep::R0);
        assert!(c.contains_point(Point::new(2.1, 1.3)));
    }

    #[test]
    fn local_transform_maps_local_corner_to_body_corner() {
        let c = sample(RotationStep::R0);
        let p = c.local_to_world() * Point::ZERO;
        assert!((p - Point::new(1.0, 1.0)).hypot() < 1e-12);
    }
}
