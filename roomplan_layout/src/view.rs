// Copyright 2025 the Roomplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mapping between interior meters and canvas pixels.

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::room::Room;

/// Smallest scale, in pixels per meter, a view will use.
pub const MIN_SCALE: f64 = 5.0;

/// Canvas placement of a room drawn at a given scale.
///
/// The outer box (interior plus walls) is centred on the canvas.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RoomMetrics {
    /// Pixels per meter.
    pub scale: f64,
    /// Wall thickness in pixels, never below one.
    pub wall_px: f64,
    /// Interior size in pixels.
    pub inner: Size,
    /// Outer size (interior plus two walls) in pixels.
    pub outer: Size,
    /// Top-left corner of the outer box on the canvas.
    pub origin: Point,
}

impl RoomMetrics {
    /// Lay out `room` at `scale` on a canvas of `canvas` pixels.
    pub fn compute(room: &Room, scale: f64, canvas: Size) -> Self {
        let scale = scale.max(MIN_SCALE);
        let inner = Size::new(room.width() * scale, room.height() * scale);
        let wall_px = (room.wall_thickness() * scale).max(1.0);
        let outer = Size::new(inner.width + 2.0 * wall_px, inner.height + 2.0 * wall_px);
        let origin = Point::new(
            (canvas.width - outer.width) / 2.0,
            (canvas.height - outer.height) / 2.0,
        );
        Self {
            scale,
            wall_px,
            inner,
            outer,
            origin,
        }
    }

    /// Canvas position of the interior's top-left corner.
    pub fn interior_origin(&self) -> Point {
        self.origin + Vec2::new(self.wall_px, self.wall_px)
    }

    /// Interior rectangle on the canvas.
    pub fn interior_rect(&self) -> Rect {
        Rect::from_origin_size(self.interior_origin(), self.inner)
    }

    /// Transform from interior meters to canvas pixels.
    pub fn room_to_canvas(&self) -> Affine {
        Affine::translate(self.interior_origin().to_vec2()) * Affine::scale(self.scale)
    }

    /// Canvas pixel for an interior point.
    pub fn to_canvas(&self, point: Point) -> Point {
        self.room_to_canvas() * point
    }

    /// Interior point under a canvas pixel.
    pub fn to_room(&self, pixel: Point) -> Point {
        let o = self.interior_origin();
        Point::new((pixel.x - o.x) / self.scale, (pixel.y - o.y) / self.scale)
    }
}

/// Largest whole scale at which the outer room fits inside `canvas` less
/// `padding` on every side, but never below [`MIN_SCALE`].
pub fn fit_scale(room: &Room, canvas: Size, padding: f64) -> f64 {
    let outer_w = room.width() + 2.0 * room.wall_thickness();
    let outer_h = room.height() + 2.0 * room.wall_thickness();
    let sx = (canvas.width - 2.0 * padding) / outer_w;
    let sy = (canvas.height - 2.0 * padding) / outer_h;
    sx.min(sy).max(MIN_SCALE).floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centres_the_outer_box() {
        let room = Room::new(6.0, 4.0).unwrap();
        let m = RoomMetrics::compute(&room, 50.0, Size::new(800.0, 600.0));
        assert_eq!(m.wall_px, 5.0);
        assert_eq!(m.outer, Size::new(310.0, 210.0));
        assert_eq!(m.origin, Point::new(245.0, 195.0));
        assert_eq!(m.interior_origin(), Point::new(250.0, 200.0));
        assert_eq!(m.interior_rect().width(), 300.0);
    }

    #[test]
    fn thin_walls_are_at_least_one_pixel() {
        let room = Room::new(6.0, 4.0).unwrap();
        let m = RoomMetrics::compute(&room, 5.0, Size::new(100.0, 100.0));
        assert_eq!(m.wall_px, 1.0);
    }

    #[test]
    fn pixels_and_meters_invert() {
        let room = Room::new(6.0, 4.0).unwrap();
        let m = RoomMetrics::compute(&room, 50.0, Size::new(800.0, 600.0));
        let p = Point::new(1.5, 2.25);
        let px = m.to_canvas(p);
        assert_eq!(px, Point::new(325.0, 312.5));
        let back = m.to_room(px);
        assert!((back - p).hypot() < 1e-12);
    }

    #[test]
    fn fit_scale_floors_and_respects_minimum() {
        let room = Room::new(6.0, 4.0).unwrap();
        // (800 - 80) / 6.2 = 116.1..., (600 - 80) / 4.2 = 123.8...
        assert_eq!(fit_scale(&room, Size::new(800.0, 600.0), 40.0), 116.0);
        assert_eq!(fit_scale(&room, Size::new(50.0, 50.0), 40.0), MIN_SCALE);
    }
}
