// Shared helpers for the native integration tests: a scripted random source and a
// surface that records draw calls instead of painting.
#![allow(dead_code)]

use std::collections::VecDeque;

use canyon_runner::{DrawSurface, RandomSource};

/// Replays `draws`, then returns `fallback` forever.
pub struct ScriptedRandom {
    draws: VecDeque<f64>,
    fallback: f64,
}

impl ScriptedRandom {
    pub fn new(draws: &[f64], fallback: f64) -> Self {
        Self {
            draws: draws.iter().copied().collect(),
            fallback,
        }
    }

    /// Straight walls, no veering.
    pub fn calm() -> Self {
        Self::new(&[], 0.5)
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f64 {
        self.draws.pop_front().unwrap_or(self.fallback)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear(f64, f64),
    BeginPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    ClosePath,
    Stroke,
    Fill,
    StrokeColor(String),
    FillColor(String),
    LineWidth(f64),
}

#[derive(Default)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn count(&self, op: &DrawOp) -> usize {
        self.ops.iter().filter(|o| *o == op).count()
    }
}

impl DrawSurface for RecordingSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.ops.push(DrawOp::Clear(width, height));
    }
    fn begin_path(&mut self) {
        self.ops.push(DrawOp::BeginPath);
    }
    fn move_to(&mut self, x: f64, y: f64) {
        self.ops.push(DrawOp::MoveTo(x, y));
    }
    fn line_to(&mut self, x: f64, y: f64) {
        self.ops.push(DrawOp::LineTo(x, y));
    }
    fn close_path(&mut self) {
        self.ops.push(DrawOp::ClosePath);
    }
    fn stroke(&mut self) {
        self.ops.push(DrawOp::Stroke);
    }
    fn fill(&mut self) {
        self.ops.push(DrawOp::Fill);
    }
    fn set_stroke_color(&mut self, color: &str) {
        self.ops.push(DrawOp::StrokeColor(color.to_string()));
    }
    fn set_fill_color(&mut self, color: &str) {
        self.ops.push(DrawOp::FillColor(color.to_string()));
    }
    fn set_line_width(&mut self, width: f64) {
        self.ops.push(DrawOp::LineWidth(width));
    }
}
