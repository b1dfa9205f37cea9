use easel_engine::coords::{Point, VertexList};
use easel_engine::paint::Color;
use easel_engine::scene::DrawList;

use super::{Shape, translated};

/// Height of an equilateral triangle per unit of side.
const EQUILATERAL_HEIGHT: f32 = 0.8660;

/// Arbitrary polygon; vertices are relative to the draw center.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: VertexList,
}

impl Polygon {
    pub fn new(vertices: VertexList) -> Self {
        Self { vertices }
    }

    pub fn vertices(&self) -> &VertexList {
        &self.vertices
    }

    fn vertex_summary(&self) -> String {
        let parts: Vec<String> = self.vertices.iter().map(Point::to_string).collect();
        format!("[{}]", parts.join(" "))
    }
}

impl Shape for Polygon {
    fn draw(&self, canvas: &mut DrawList, center: Point, color: Color) {
        canvas.push_polygon(translated(&self.vertices, center), color);
    }

    /// Connects consecutive vertices and closes the loop back to the first.
    fn border(&self, canvas: &mut DrawList, center: Point, width: f32, color: Color) {
        canvas.push_outline(translated(&self.vertices, center), width, color, true);
    }

    fn describe(&self) -> String {
        format!("polygon {}", self.vertex_summary())
    }
}

/// Axis-aligned rectangle centered on the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    width: f32,
    height: f32,
    polygon: Polygon,
}

impl Rectangle {
    /// Vertices run counter-clockwise from the bottom-left corner.
    pub fn new(width: f32, height: f32) -> Self {
        let (w, h) = (width / 2.0, height / 2.0);
        let polygon = Polygon::new(vec![
            Point::new(-w, -h),
            Point::new(-w, h),
            Point::new(w, h),
            Point::new(w, -h),
        ]);
        Self {
            width,
            height,
            polygon,
        }
    }

    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }
}

impl Shape for Rectangle {
    fn draw(&self, canvas: &mut DrawList, center: Point, color: Color) {
        self.polygon.draw(canvas, center, color);
    }

    fn border(&self, canvas: &mut DrawList, center: Point, width: f32, color: Color) {
        self.polygon.border(canvas, center, width, color);
    }

    fn describe(&self) -> String {
        format!("rectangle {}x{}", self.width, self.height)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Square {
    side: f32,
    rectangle: Rectangle,
}

impl Square {
    pub fn new(side: f32) -> Self {
        Self {
            side,
            rectangle: Rectangle::new(side, side),
        }
    }

    pub fn polygon(&self) -> &Polygon {
        self.rectangle.polygon()
    }
}

impl Shape for Square {
    fn draw(&self, canvas: &mut DrawList, center: Point, color: Color) {
        self.rectangle.draw(canvas, center, color);
    }

    fn border(&self, canvas: &mut DrawList, center: Point, width: f32, color: Color) {
        self.rectangle.border(canvas, center, width, color);
    }

    fn describe(&self) -> String {
        format!("square {}", self.side)
    }
}

/// Rhombus through the midpoints of a `width`×`height` box.
#[derive(Debug, Clone, PartialEq)]
pub struct Diamond {
    width: f32,
    height: f32,
    polygon: Polygon,
}

impl Diamond {
    /// Vertices in order: top, left, bottom, right.
    pub fn new(width: f32, height: f32) -> Self {
        let (w, h) = (width / 2.0, height / 2.0);
        let polygon = Polygon::new(vec![
            Point::new(0.0, h),
            Point::new(-w, 0.0),
            Point::new(0.0, -h),
            Point::new(w, 0.0),
        ]);
        Self {
            width,
            height,
            polygon,
        }
    }

    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }
}

impl Shape for Diamond {
    fn draw(&self, canvas: &mut DrawList, center: Point, color: Color) {
        self.polygon.draw(canvas, center, color);
    }

    fn border(&self, canvas: &mut DrawList, center: Point, width: f32, color: Color) {
        self.polygon.border(canvas, center, width, color);
    }

    fn describe(&self) -> String {
        format!("diamond {}x{}", self.width, self.height)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    polygon: Polygon,
}

impl Triangle {
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        Self {
            polygon: Polygon::new(vec![a, b, c]),
        }
    }

    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }
}

impl Shape for Triangle {
    fn draw(&self, canvas: &mut DrawList, center: Point, color: Color) {
        self.polygon.draw(canvas, center, color);
    }

    fn border(&self, canvas: &mut DrawList, center: Point, width: f32, color: Color) {
        self.polygon.border(canvas, center, width, color);
    }

    fn describe(&self) -> String {
        format!("triangle {}", self.polygon.vertex_summary())
    }
}

/// Equilateral triangle standing on its base; the base midpoint is the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct Equilateral {
    side: f32,
    triangle: Triangle,
}

impl Equilateral {
    pub fn new(side: f32) -> Self {
        let triangle = Triangle::new(
            Point::new(0.0, EQUILATERAL_HEIGHT * side),
            Point::new(-side / 2.0, 0.0),
            Point::new(side / 2.0, 0.0),
        );
        Self { side, triangle }
    }

    pub fn polygon(&self) -> &Polygon {
        self.triangle.polygon()
    }
}

impl Shape for Equilateral {
    fn draw(&self, canvas: &mut DrawList, center: Point, color: Color) {
        self.triangle.draw(canvas, center, color);
    }

    fn border(&self, canvas: &mut DrawList, center: Point, width: f32, color: Color) {
        self.triangle.border(canvas, center, width, color);
    }

    fn describe(&self) -> String {
        format!("equilateral {}", self.side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use easel_engine::scene::DrawCmd;

    fn p(x: f32, y: f32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn rectangle_vertices_ccw_from_bottom_left() {
        let r = Rectangle::new(30.0, 20.0);
        assert_eq!(
            r.polygon().vertices(),
            &vec![p(-15.0, -10.0), p(-15.0, 10.0), p(15.0, 10.0), p(15.0, -10.0)]
        );
    }

    #[test]
    fn square_equals_rectangle() {
        for s in [0.0, 1.0, 7.5, 100.0] {
            assert_eq!(Square::new(s).polygon(), Rectangle::new(s, s).polygon());
        }
    }

    #[test]
    fn diamond_vertices_top_left_bottom_right() {
        let d = Diamond::new(30.0, 20.0);
        assert_eq!(
            d.polygon().vertices(),
            &vec![p(0.0, 10.0), p(-15.0, 0.0), p(0.0, -10.0), p(15.0, 0.0)]
        );
    }

    #[test]
    fn equilateral_matches_triangle() {
        for s in [1.0, 10.0, 33.3] {
            let expected = Triangle::new(p(0.0, 0.8660 * s), p(-s / 2.0, 0.0), p(s / 2.0, 0.0));
            let got = Equilateral::new(s);
            for (a, b) in got
                .polygon()
                .vertices()
                .iter()
                .zip(expected.polygon().vertices())
            {
                assert!(a.approx_eq(*b, 1e-5), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn draw_offsets_by_center() {
        let mut list = DrawList::new();
        Triangle::new(p(0.0, 0.0), p(10.0, 0.0), p(0.0, 10.0)).draw(
            &mut list,
            p(100.0, 200.0),
            Color::WHITE,
        );
        let [DrawCmd::Polygon(cmd)] = list.items() else {
            panic!("expected one polygon");
        };
        assert_eq!(cmd.points, vec![p(100.0, 200.0), p(110.0, 200.0), p(100.0, 210.0)]);
    }

    #[test]
    fn border_is_closed_outline() {
        let mut list = DrawList::new();
        Square::new(10.0).border(&mut list, p(0.0, 0.0), 2.0, Color::BLACK);
        let [DrawCmd::Outline(cmd)] = list.items() else {
            panic!("expected one outline");
        };
        assert!(cmd.closed);
        assert_eq!(cmd.points.len(), 4);
        assert_eq!(cmd.width, 2.0);
    }

    #[test]
    fn two_vertex_polygon_border() {
        let mut list = DrawList::new();
        let segment = Polygon::new(vec![p(0.0, 0.0), p(10.0, 0.0)]);
        segment.draw(&mut list, p(1.0, 1.0), Color::WHITE);
        segment.border(&mut list, p(1.0, 1.0), 3.0, Color::BLACK);
        let [DrawCmd::Polygon(fill), DrawCmd::Outline(outline)] = list.items() else {
            panic!("expected a polygon then an outline");
        };
        assert_eq!(fill.points.len(), 2);
        assert_eq!(outline.points, vec![p(1.0, 1.0), p(11.0, 1.0)]);
        assert!(outline.closed);
    }

    #[test]
    fn describe() {
        let poly = Polygon::new(vec![p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0)]);
        assert_eq!(poly.describe(), "polygon [(0,0) (10,0) (10,10)]");
        assert_eq!(Rectangle::new(30.0, 20.0).describe(), "rectangle 30x20");
        assert_eq!(Square::new(10.0).describe(), "square 10");
        assert_eq!(Diamond::new(30.0, 20.0).describe(), "diamond 30x20");
        assert_eq!(Equilateral::new(10.0).describe(), "equilateral 10");
        assert_eq!(
            Triangle::new(p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0)).describe(),
            "triangle [(0,0) (1,0) (0,1)]"
        );
    }
}
