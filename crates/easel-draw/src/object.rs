use std::fmt;
use std::str::FromStr;

use easel_engine::coords::Point;
use easel_engine::paint::Color;
use easel_engine::scene::DrawList;

use crate::shape::{Shape, SharedShape};

/// Outline settings of a scene object.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Border {
    pub width: f32,
    pub color: Color,
}

/// Direction of a step move. `Up` is +y.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown direction {0:?}")]
pub struct ParseDirectionError(String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}

impl Direction {
    /// Unit offset for this direction.
    pub fn unit(self) -> Point {
        match self {
            Direction::Up => Point::new(0.0, 1.0),
            Direction::Down => Point::new(0.0, -1.0),
            Direction::Left => Point::new(-1.0, 0.0),
            Direction::Right => Point::new(1.0, 0.0),
        }
    }
}

/// A placed, colored instance of a shared shape.
#[derive(Debug, Clone)]
pub struct SceneObject {
    shape: SharedShape,
    center: Point,
    color: Color,
    border: Option<Border>,
    move_step: f32,
}

impl SceneObject {
    /// New object with no border and a move step of 0.
    pub fn new(shape: SharedShape, center: Point, color: Color) -> Self {
        Self {
            shape,
            center,
            color,
            border: None,
            move_step: 0.0,
        }
    }

    pub fn shape(&self) -> &SharedShape {
        &self.shape
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn border(&self) -> Option<Border> {
        self.border
    }

    pub fn move_step(&self) -> f32 {
        self.move_step
    }

    pub fn move_by(&mut self, dx: f32, dy: f32) {
        self.center += Point::new(dx, dy);
    }

    /// Moves one step (see [`set_move_step`](Self::set_move_step)) in `direction`.
    pub fn move_toward(&mut self, direction: Direction) {
        self.center += direction.unit() * self.move_step;
    }

    pub fn set_move_step(&mut self, step: f32) {
        self.move_step = step;
    }

    /// Sets the border color, and the width when `width > 0`.
    ///
    /// A non-positive width keeps the current width (0 if no border was set).
    pub fn set_border(&mut self, width: f32, color: Color) {
        let width = if width > 0.0 {
            width
        } else {
            self.border.map_or(0.0, |b| b.width)
        };
        self.border = Some(Border { width, color });
    }

    /// Records the fill, then the border when it has a positive width.
    pub fn draw(&self, canvas: &mut DrawList) {
        self.shape.draw(canvas, self.center, self.color);
        if let Some(border) = self.border.filter(|b| b.width > 0.0) {
            self.shape
                .border(canvas, self.center, border.width, border.color);
        }
    }
}

impl fmt::Display for SceneObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {} in {}", self.shape, self.center, self.color)?;
        if let Some(b) = self.border {
            write!(f, ", border {} {}", b.width, b.color)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{Circle, ShapeDef, Square};
    use easel_engine::scene::DrawCmd;

    fn square_at(x: f32, y: f32) -> SceneObject {
        let shape = ShapeDef::Square(Square::new(10.0)).into_shared();
        SceneObject::new(shape, Point::new(x, y), Color::new(255, 0, 0))
    }

    #[test]
    fn defaults() {
        let obj = square_at(1.0, 2.0);
        assert_eq!(obj.center(), Point::new(1.0, 2.0));
        assert_eq!(obj.move_step(), 0.0);
        assert_eq!(obj.border(), None);
    }

    #[test]
    fn move_by_is_absolute_delta() {
        let mut obj = square_at(0.0, 0.0);
        obj.move_by(3.0, -4.0);
        obj.move_by(1.0, 1.0);
        assert_eq!(obj.center(), Point::new(4.0, -3.0));
    }

    #[test]
    fn directional_moves_use_step() {
        let mut obj = square_at(100.0, 100.0);
        obj.move_toward(Direction::Up);
        assert_eq!(obj.center(), Point::new(100.0, 100.0));

        obj.set_move_step(5.0);
        obj.move_toward(Direction::Up);
        obj.move_toward(Direction::Right);
        obj.move_toward(Direction::Right);
        assert_eq!(obj.center(), Point::new(110.0, 105.0));

        obj.move_toward(Direction::Down);
        obj.move_toward(Direction::Left);
        assert_eq!(obj.center(), Point::new(105.0, 100.0));
    }

    #[test]
    fn direction_parses() {
        assert_eq!("up".parse(), Ok(Direction::Up));
        assert_eq!("right".parse(), Ok(Direction::Right));
        assert!("north".parse::<Direction>().is_err());
    }

    #[test]
    fn border_width_sentinel() {
        let blue = Color::new(0, 0, 255);
        let mut obj = square_at(0.0, 0.0);

        obj.set_border(-1.0, blue);
        assert_eq!(obj.border(), Some(Border { width: 0.0, color: blue }));

        obj.set_border(4.0, Color::WHITE);
        obj.set_border(0.0, blue);
        assert_eq!(obj.border(), Some(Border { width: 4.0, color: blue }));

        obj.set_border(-1.0, Color::BLACK);
        assert_eq!(obj.border().map(|b| b.width), Some(4.0));
    }

    #[test]
    fn draw_fill_then_border() {
        let mut obj = square_at(0.0, 0.0);
        let mut list = DrawList::new();
        obj.draw(&mut list);
        assert_eq!(list.len(), 1);

        obj.set_border(0.0, Color::WHITE);
        list.clear();
        obj.draw(&mut list);
        assert_eq!(list.len(), 1, "zero-width border is not drawn");

        obj.set_border(2.0, Color::WHITE);
        list.clear();
        obj.draw(&mut list);
        assert!(matches!(list.items(), [DrawCmd::Polygon(_), DrawCmd::Outline(_)]));
    }

    #[test]
    fn objects_share_their_shape() {
        let shape = ShapeDef::Circle(Circle::new(4.0)).into_shared();
        let a = SceneObject::new(shape.clone(), Point::origin(), Color::WHITE);
        let b = SceneObject::new(shape.clone(), Point::new(9.0, 9.0), Color::BLACK);
        assert_eq!(std::rc::Rc::strong_count(&shape), 3);
        drop((a, b));
        assert_eq!(std::rc::Rc::strong_count(&shape), 1);
    }
}
