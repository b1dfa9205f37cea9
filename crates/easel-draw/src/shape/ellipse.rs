use std::f32::consts::TAU;

use easel_engine::coords::{Point, VertexList};
use easel_engine::paint::Color;
use easel_engine::scene::DrawList;

use super::Shape;

/// Angular sampling step in radians, shared by fill and outline.
pub const ELLIPSE_STEP: f32 = 0.01;

/// Axis-aligned ellipse given by its full width and height.
///
/// `width` is the full horizontal span, so the radii are `width / 2` and `height / 2`.
#[derive(Debug, Clone, PartialEq)]
pub struct Ellipse {
    width: f32,
    height: f32,
}

impl Ellipse {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Curve samples around `center` for t in [0, 2π), clockwise from the top.
    pub fn samples(&self, center: Point) -> VertexList {
        let (rx, ry) = (self.width / 2.0, self.height / 2.0);
        let count = (TAU / ELLIPSE_STEP).ceil() as usize;
        (0..count)
            .map(|i| i as f32 * ELLIPSE_STEP)
            .map(|t| Point::new(center.x + rx * t.sin(), center.y + ry * t.cos()))
            .collect()
    }
}

impl Shape for Ellipse {
    fn draw(&self, canvas: &mut DrawList, center: Point, color: Color) {
        canvas.push_polygon(self.samples(center), color);
    }

    fn border(&self, canvas: &mut DrawList, center: Point, width: f32, color: Color) {
        canvas.push_outline(self.samples(center), width, color, true);
    }

    fn describe(&self) -> String {
        format!("ellipse {}x{}", self.width, self.height)
    }
}

/// Circle of a given diameter; an ellipse with equal axes.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    ellipse: Ellipse,
}

impl Circle {
    pub fn new(diameter: f32) -> Self {
        Self {
            ellipse: Ellipse::new(diameter, diameter),
        }
    }

    pub fn diameter(&self) -> f32 {
        self.ellipse.width
    }
}

impl Shape for Circle {
    fn draw(&self, canvas: &mut DrawList, center: Point, color: Color) {
        self.ellipse.draw(canvas, center, color);
    }

    fn border(&self, canvas: &mut DrawList, center: Point, width: f32, color: Color) {
        self.ellipse.border(canvas, center, width, color);
    }

    fn describe(&self) -> String {
        format!("circle {}", self.diameter())
    }
}
