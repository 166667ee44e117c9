// Copyright 2025 the Roomplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry primitives: rotation steps, edge offsets, and box intersection.

use core::f64::consts::{FRAC_PI_2, TAU};

use kurbo::{Affine, Rect};

/// Overlap (in meters) at or below which two boxes are treated as touching.
///
/// Candidates produced by the placement search are often exactly flush with a
/// neighbour, and the sums that produce them carry float error in the last bits.
pub const TOUCH_TOLERANCE: f64 = 1e-9;

/// One of the four canonical 90° orientations.
///
/// Every consumer of rotation (footprints, clamping, overlap checks, drawing)
/// works at this granularity. Arbitrary angles are rounded to the nearest step
/// with [`RotationStep::from_radians`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum RotationStep {
    /// Unrotated.
    #[default]
    R0,
    /// Rotated 90° clockwise (screen coordinates, y down).
    R90,
    /// Rotated 180°.
    R180,
    /// Rotated 270° clockwise.
    R270,
}

impl RotationStep {
    /// All steps in clockwise order.
    pub const ALL: [Self; 4] = [Self::R0, Self::R90, Self::R180, Self::R270];

    /// Round an arbitrary angle to the nearest step.
    ///
    /// The angle is reduced into `[0, 2π)` first, so negative angles and angles
    /// beyond a full turn are accepted. Non-finite input maps to [`RotationStep::R0`].
    pub fn from_radians(angle: f64) -> Self {
        if !angle.is_finite() {
            return Self::R0;
        }
        let reduced = angle.rem_euclid(TAU);
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "The rounded quotient lies in 0..=4 for a reduced angle."
        )]
        let quarter = (reduced / FRAC_PI_2).round() as u8;
        Self::from_index(quarter)
    }

    /// Step for a quarter-turn count, taken modulo 4.
    pub const fn from_index(quarters: u8) -> Self {
        match quarters % 4 {
            0 => Self::R0,
            1 => Self::R90,
            2 => Self::R180,
            _ => Self::R270,
        }
    }

    /// Quarter-turn count in `0..4`.
    pub const fn index(self) -> u8 {
        match self {
            Self::R0 => 0,
            Self::R90 => 1,
            Self::R180 => 2,
            Self::R270 => 3,
        }
    }

    /// Canonical angle of this step in radians.
    pub fn radians(self) -> f64 {
        f64::from(self.index()) * FRAC_PI_2
    }

    /// The next step clockwise.
    #[must_use]
    pub const fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// True for 90° and 270°, where local width and height swap in world space.
    pub const fn is_portrait(self) -> bool {
        self.index() % 2 == 1
    }
}

/// Signed extensions of a footprint beyond its rotated body.
///
/// `left` and `top` are zero or negative; `right` and `bottom` are zero or positive.
/// They are added to the body's edges to produce the world AABB.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct EdgeOffsets {
    /// Offset applied to the left edge.
    pub left: f64,
    /// Offset applied to the right edge.
    pub right: f64,
    /// Offset applied to the top edge.
    pub top: f64,
    /// Offset applied to the bottom edge.
    pub bottom: f64,
}

impl EdgeOffsets {
    /// No extension on any side.
    pub const ZERO: Self = Self {
        left: 0.0,
        right: 0.0,
        top: 0.0,
        bottom: 0.0,
    };
}

/// Open-interval overlap test for two axis-aligned boxes.
///
/// Boxes that merely share an edge or a corner do not intersect.
pub fn intersects(a: Rect, b: Rect) -> bool {
    a.x0 < b.x1 - TOUCH_TOLERANCE
        && b.x0 < a.x1 - TOUCH_TOLERANCE
        && a.y0 < b.y1 - TOUCH_TOLERANCE
        && b.y0 < a.y1 - TOUCH_TOLERANCE
}

/// Clamp `v` into `[min, max]`, settling on `min` when the range is inverted.
pub(crate) fn clamp_axis(v: f64, min: f64, max: f64) -> f64 {
    min.max(v.min(max.max(min)))
}

/// Transform an axis-aligned `Rect` by an `Affine` and return a conservative
/// axis-aligned bounding box.
pub(crate) fn transform_rect_bbox(affine: Affine, rect: Rect) -> Rect {
    let [a, b, c, d, e, f] = affine.as_coeffs();
    let min_x = (a * rect.x0).min(a * rect.x1) + (c * rect.y0).min(c * rect.y1);
    let max_x = (a * rect.x0).max(a * rect.x1) + (c * rect.y0).max(c * rect.y1);
    let min_y = (b * rect.x0).min(b * rect.x1) + (d * rect.y0).min(d * rect.y1);
    let max_y = (b * rect.x0).max(b * rect.x1) + (d * rect.y0).max(d * rect.y1);
    Rect::new(min_x + e, min_y + f, max_x + e, max_y + f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::PI;

    #[test]
    fn rounds_angles_to_nearest_step() {
        assert_eq!(RotationStep::from_radians(0.0), RotationStep::R0);
        assert_eq!(RotationStep::from_radians(FRAC_PI_2), RotationStep::R90);
        assert_eq!(RotationStep::from_radians(PI), RotationStep::R180);
        assert_eq!(RotationStep::from_radians(1.5 * PI), RotationStep::R270);
        // 100° is closer to 90° than 180°.
        assert_eq!(
            RotationStep::from_radians(100_f64.to_radians()),
            RotationStep::R90
        );
        // Just short of a full turn wraps back to zero.
        assert_eq!(RotationStep::from_radians(TAU - 0.01), RotationStep::R0);
    }

    #[test]
    fn accepts_negative_and_large_angles() {
        assert_eq!(RotationStep::from_radians(-FRAC_PI_2), RotationStep::R270);
        assert_eq!(RotationStep::from_radians(-PI), RotationStep::R180);
        assert_eq!(
            RotationStep::from_radians(TAU * 3.0 + FRAC_PI_2),
            RotationStep::R90
        );
        assert_eq!(RotationStep::from_radians(f64::NAN), RotationStep::R0);
    }

    #[test]
    fn radians_round_trip_through_steps() {
        for step in RotationStep::ALL {
            assert_eq!(RotationStep::from_radians(step.radians()), step);
        }
        assert_eq!(RotationStep::R270.next(), RotationStep::R0);
        assert!(RotationStep::R90.is_portrait());
        assert!(!RotationStep::R180.is_portrait());
    }

    #[test]
    fn touching_edges_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 1.0, 1.0);
        assert!(!intersects(a, Rect::new(1.0, 0.0, 2.0, 1.0)));
        assert!(!intersects(a, Rect::new(0.0, 1.0, 1.0, 2.0)));
        assert!(!intersects(a, Rect::new(1.0, 1.0, 2.0, 2.0)));
        assert!(intersects(a, Rect::new(0.5, 0.5, 2.0, 2.0)));
        assert!(intersects(a, Rect::new(0.25, 0.25, 0.75, 0.75)));
    }

    #[test]
    fn clamp_axis_prefers_lower_bound_when_inverted() {
        assert_eq!(clamp_axis(5.0, 0.0, 3.0), 3.0);
        assert_eq!(clamp_axis(-1.0, 0.0, 3.0), 0.0);
        assert_eq!(clamp_axis(2.0, 1.0, -4.0), 1.0);
    }

    #[test]
    fn quarter_turn_bbox_swaps_extent() {
        let r = Rect::new(0.0, 0.0, 2.0, 1.0);
        let bbox = transform_rect_bbox(Affine::rotate(FRAC_PI_2), r);
        assert!((bbox.width() - 1.0).abs() < 1e-12);
        assert!((bbox.height() - 2.0).abs() < 1e-12);
    }
}
