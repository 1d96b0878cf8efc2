//! Scrolling canyon generator.
//!
//! The canyon is a column of segments, one per row, each holding the x positions of
//! the left and right wall. Every tick the bottom row scrolls off and a new row is
//! generated at the top by nudging the previous top row left, right or not at all.
//! Walls bounce off the screen edges, and now and then the whole corridor veers one
//! way for a while.

use std::collections::VecDeque;

use crate::config::GameConfig;
use crate::rng::RandomSource;
use crate::surface::DrawSurface;

const WALL_COLOR: &str = "#e58618";
const WALL_WIDTH: f64 = 5.0;

/// One row of the canyon: wall x positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub left: f64,
    pub right: f64,
}

impl Segment {
    pub fn width(&self) -> f64 {
        self.right - self.left
    }
}

/// Forced drift applied to both walls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Veering {
    pub direction: i8, // -1 left, 1 right
    pub remaining: u32,
}

pub struct CanyonTrack {
    /// Top row first.
    segments: VecDeque<Segment>,
    left: f64,
    right: f64,
    left_boundary: f64,
    right_boundary: f64,
    bounce_margin: f64,
    wall_step: f64,
    row_height: f64,
    veer_chance: f64,
    veer_ticks: u32,
    veering: Option<Veering>,
}

impl CanyonTrack {
    /// Builds a full canyon starting from the configured wall positions.
    pub fn new(config: &GameConfig, rng: &mut dyn RandomSource) -> Self {
        let mut track = Self {
            segments: VecDeque::with_capacity(config.segment_count()),
            left: config.initial_left,
            right: config.initial_right,
            left_boundary: 0.0,
            right_boundary: config.width as f64,
            bounce_margin: config.bounce_margin,
            wall_step: config.wall_step,
            row_height: config.row_height as f64,
            veer_chance: config.veer_chance,
            veer_ticks: config.veer_ticks,
            veering: None,
        };
        track.initialize(config.segment_count(), rng);
        track
    }

    fn initialize(&mut self, count: usize, rng: &mut dyn RandomSource) {
        self.segments.clear();
        for _ in 0..count {
            let (dl, dr) = self.vector_for_tick(None, rng);
            self.push_top(dl, dr);
        }
    }

    /// Per-tick wall deltas. With `forced` set both walls move that way; otherwise
    /// each wall independently picks left, straight or right. A wall hugging the
    /// screen edge is bounced back (left wall checked first, at most one bounce).
    pub fn vector_for_tick(&self, forced: Option<i8>, rng: &mut dyn RandomSource) -> (f64, f64) {
        let (mut left_dir, mut right_dir) = match forced {
            Some(dir) => (dir, dir),
            None => (rng.next_direction(), rng.next_direction()),
        };

        if left_dir != 1 && self.left <= self.left_boundary + self.bounce_margin {
            left_dir = 1;
        } else if right_dir != -1 && self.right >= self.right_boundary - self.bounce_margin {
            right_dir = -1;
        }

        (
            left_dir as f64 * self.wall_step,
            right_dir as f64 * self.wall_step,
        )
    }

    /// Scrolls the canyon by one row.
    pub fn advance(&mut self, rng: &mut dyn RandomSource) {
        let forced = self.veering.map(|v| v.direction);
        let (dl, dr) = self.vector_for_tick(forced, rng);
        self.segments.pop_back();
        self.push_top(dl, dr);

        if rng.next_unit() <= self.veer_chance {
            let direction = if rng.next_unit() <= 0.5 { -1 } else { 1 };
            // A new trigger replaces whatever veer is still running.
            log::debug!("canyon veering {direction} for {} ticks", self.veer_ticks);
            self.veering = Some(Veering {
                direction,
                remaining: self.veer_ticks,
            });
        }

        match self.veering {
            Some(Veering { remaining: 0, .. }) => self.veering = None,
            Some(ref mut v) => v.remaining -= 1,
            None => {}
        }
    }

    fn push_top(&mut self, dl: f64, dr: f64) {
        self.left += dl;
        self.right += dr;
        self.segments.push_front(Segment {
            left: self.left,
            right: self.right,
        });
    }

    pub fn segments(&self) -> &VecDeque<Segment> {
        &self.segments
    }

    /// Newest segment (top of the screen).
    pub fn front(&self) -> Option<&Segment> {
        self.segments.front()
    }

    pub fn veering(&self) -> Option<Veering> {
        self.veering
    }

    /// Segment drawn at exactly `y` pixels from the top, if any.
    pub fn segment_at_row_offset(&self, y: i32) -> Option<&Segment> {
        let row = self.row_height as i32;
        if y < 0 || row <= 0 || y % row != 0 {
            return None;
        }
        self.segments.get((y / row) as usize)
    }

    pub fn draw(&self, surface: &mut dyn DrawSurface) {
        surface.set_stroke_color(WALL_COLOR);
        surface.set_line_width(WALL_WIDTH);
        for (i, seg) in self.segments.iter().enumerate() {
            let top = i as f64 * self.row_height;
            for x in [seg.left, seg.right] {
                surface.begin_path();
                surface.move_to(x, top);
                surface.line_to(x, top + self.row_height);
                surface.close_path();
                surface.stroke();
            }
        }
    }

    #[cfg(test)]
    fn set_walls(&mut self, left: f64, right: f64) {
        self.left = left;
        self.right = right;
    }
}
