//! The player's ship: a fixed triangle drawn at the player's accumulated offset.

use crate::config::ShipGeometry;
use crate::input::Offset;
use crate::surface::DrawSurface;

const HULL_STROKE: &str = "#49b04f";
const HULL_FILL: &str = "#d2ecd2";
const HULL_LINE_WIDTH: f64 = 5.0;

/// Edges of the ship after applying the offset, used for collision tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShipBounds {
    pub left: i32,
    pub right: i32,
    pub back: i32,
}

pub struct Ship {
    geometry: ShipGeometry,
}

impl Ship {
    pub fn new(geometry: ShipGeometry) -> Self {
        Self { geometry }
    }

    pub fn bounds(&self, offset: Offset) -> ShipBounds {
        ShipBounds {
            left: self.geometry.left + offset.dx,
            right: self.geometry.right + offset.dx,
            back: self.geometry.back + offset.dy,
        }
    }

    pub fn draw(&self, surface: &mut dyn DrawSurface, offset: Offset) {
        let g = &self.geometry;
        let (dx, dy) = (offset.dx as f64, offset.dy as f64);
        surface.begin_path();
        surface.set_stroke_color(HULL_STROKE);
        surface.set_fill_color(HULL_FILL);
        surface.set_line_width(HULL_LINE_WIDTH);
        surface.move_to(g.center as f64 + dx, g.front as f64 + dy);
        surface.line_to(g.left as f64 + dx, g.back as f64 + dy);
        surface.line_to(g.right as f64 + dx, g.back as f64 + dy);
        surface.close_path();
        surface.stroke();
        surface.fill();
    }
}
