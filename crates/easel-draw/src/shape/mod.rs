//! Shape hierarchy.
//!
//! A shape is immutable geometry with no position or color of its own; those
//! are supplied at draw time. Derived shapes (circle, square, equilateral, ...)
//! wrap the shape they are built from and delegate rendering to it.

mod ellipse;
mod polygon;
mod text;

use std::fmt;
use std::rc::Rc;

use easel_engine::coords::{Point, VertexList};
use easel_engine::paint::Color;
use easel_engine::scene::DrawList;

pub use ellipse::{Circle, ELLIPSE_STEP, Ellipse};
pub use polygon::{Diamond, Equilateral, Polygon, Rectangle, Square, Triangle};
pub use text::TextShape;

/// Capabilities every shape variant provides.
pub trait Shape {
    /// Records the filled shape centered on `center`.
    fn draw(&self, canvas: &mut DrawList, center: Point, color: Color);

    /// Records only the outline, `width` pixels wide.
    fn border(&self, canvas: &mut DrawList, center: Point, width: f32, color: Color);

    /// Variant keyword plus defining parameters, for diagnostics.
    fn describe(&self) -> String;
}

/// Closed set of shape variants.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeDef {
    Text(TextShape),
    Ellipse(Ellipse),
    Circle(Circle),
    Polygon(Polygon),
    Rectangle(Rectangle),
    Square(Square),
    Triangle(Triangle),
    Equilateral(Equilateral),
    Diamond(Diamond),
}

/// Shapes are shared between every object drawn from the same definition.
pub type SharedShape = Rc<ShapeDef>;

impl ShapeDef {
    fn inner(&self) -> &dyn Shape {
        match self {
            ShapeDef::Text(s) => s,
            ShapeDef::Ellipse(s) => s,
            ShapeDef::Circle(s) => s,
            ShapeDef::Polygon(s) => s,
            ShapeDef::Rectangle(s) => s,
            ShapeDef::Square(s) => s,
            ShapeDef::Triangle(s) => s,
            ShapeDef::Equilateral(s) => s,
            ShapeDef::Diamond(s) => s,
        }
    }

    /// The factory keyword that builds this variant.
    pub fn kind(&self) -> &'static str {
        match self {
            ShapeDef::Text(_) => "text",
            ShapeDef::Ellipse(_) => "ellipse",
            ShapeDef::Circle(_) => "circle",
            ShapeDef::Polygon(_) => "polygon",
            ShapeDef::Rectangle(_) => "rectangle",
            ShapeDef::Square(_) => "square",
            ShapeDef::Triangle(_) => "triangle",
            ShapeDef::Equilateral(_) => "equilateral",
            ShapeDef::Diamond(_) => "diamond",
        }
    }

    /// Vertices relative to the center, for polygon-based variants.
    pub fn vertices(&self) -> Option<&VertexList> {
        let polygon = match self {
            ShapeDef::Polygon(p) => p,
            ShapeDef::Rectangle(r) => r.polygon(),
            ShapeDef::Square(s) => s.polygon(),
            ShapeDef::Triangle(t) => t.polygon(),
            ShapeDef::Equilateral(e) => e.polygon(),
            ShapeDef::Diamond(d) => d.polygon(),
            ShapeDef::Text(_) | ShapeDef::Ellipse(_) | ShapeDef::Circle(_) => return None,
        };
        Some(polygon.vertices())
    }

    pub fn into_shared(self) -> SharedShape {
        Rc::new(self)
    }
}

impl Shape for ShapeDef {
    fn draw(&self, canvas: &mut DrawList, center: Point, color: Color) {
        self.inner().draw(canvas, center, color);
    }

    fn border(&self, canvas: &mut DrawList, center: Point, width: f32, color: Color) {
        self.inner().border(canvas, center, width, color);
    }

    fn describe(&self) -> String {
        self.inner().describe()
    }
}

impl fmt::Display for ShapeDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

/// Offsets `points` by `center`.
fn translated(points: &[Point], center: Point) -> VertexList {
    points.iter().map(|&p| p + center).collect()
}
