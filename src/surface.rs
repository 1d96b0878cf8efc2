//! Minimal immediate-mode drawing interface. The game only ever strokes and fills
//! simple paths, so this is all a backend has to provide.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

pub trait DrawSurface {
    fn clear(&mut self, width: f64, height: f64);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn close_path(&mut self);
    fn stroke(&mut self);
    fn fill(&mut self);
    fn set_stroke_color(&mut self, color: &str);
    fn set_fill_color(&mut self, color: &str);
    fn set_line_width(&mut self, width: f64);
}

impl DrawSurface for CanvasRenderingContext2d {
    fn clear(&mut self, width: f64, height: f64) {
        self.clear_rect(0.0, 0.0, width, height);
    }
    fn begin_path(&mut self) {
        CanvasRenderingContext2d::begin_path(self);
    }
    fn move_to(&mut self, x: f64, y: f64) {
        CanvasRenderingContext2d::move_to(self, x, y);
    }
    fn line_to(&mut self, x: f64, y: f64) {
        CanvasRenderingContext2d::line_to(self, x, y);
    }
    fn close_path(&mut self) {
        CanvasRenderingContext2d::close_path(self);
    }
    fn stroke(&mut self) {
        CanvasRenderingContext2d::stroke(self);
    }
    fn fill(&mut self) {
        CanvasRenderingContext2d::fill(self);
    }
    fn set_stroke_color(&mut self, color: &str) {
        self.set_stroke_style(&JsValue::from_str(color));
    }
    fn set_fill_color(&mut self, color: &str) {
        self.set_fill_style(&JsValue::from_str(color));
    }
    fn set_line_width(&mut self, width: f64) {
        CanvasRenderingContext2d::set_line_width(self, width);
    }
}
