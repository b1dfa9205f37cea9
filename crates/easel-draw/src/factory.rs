//! Shape factories: keyword -> constructor over the remaining tokens.

use std::collections::HashMap;

use easel_engine::coords::Point;

use crate::error::CommandError;
use crate::parse;
use crate::shape::{
    Circle, Diamond, Ellipse, Equilateral, Polygon, Rectangle, ShapeDef, SharedShape, Square,
    TextShape, Triangle,
};

/// Builds a shape from the tokens following its keyword.
pub type FactoryFn = fn(&[&str]) -> Result<ShapeDef, CommandError>;

/// Immutable table of shape factories, built once and handed to the interpreter.
#[derive(Debug, Clone)]
pub struct ShapeFactories {
    table: HashMap<&'static str, FactoryFn>,
}

impl ShapeFactories {
    /// An empty table; see [`ShapeFactories::with`].
    pub fn empty() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    /// Every built-in shape keyword.
    pub fn standard() -> Self {
        Self::empty()
            .with("text", make_text)
            .with("ellipse", make_ellipse)
            .with("circle", make_circle)
            .with("polygon", make_polygon)
            .with("rectangle", make_rectangle)
            .with("square", make_square)
            .with("triangle", make_triangle)
            .with("equilateral", make_equilateral)
            .with("diamond", make_diamond)
    }

    /// Adds or replaces the factory for `keyword`.
    pub fn with(mut self, keyword: &'static str, factory: FactoryFn) -> Self {
        self.table.insert(keyword, factory);
        self
    }

    /// Builds a shape of type `kind` from `params`.
    pub fn build(&self, kind: &str, params: &[&str]) -> Result<SharedShape, CommandError> {
        let factory = self
            .table
            .get(kind)
            .ok_or_else(|| CommandError::syntax(format!("unknown shape type {kind:?}")))?;
        factory(params).map(ShapeDef::into_shared)
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.table.contains_key(kind)
    }

    /// Registered keywords, sorted.
    pub fn keywords(&self) -> Vec<&'static str> {
        let mut keys: Vec<_> = self.table.keys().copied().collect();
        keys.sort_unstable();
        keys
    }
}

impl Default for ShapeFactories {
    fn default() -> Self {
        Self::standard()
    }
}

// ── built-in factories ────────────────────────────────────────────────────

fn exact<'a, const N: usize>(
    what: &str,
    params: &[&'a str],
) -> Result<[&'a str; N], CommandError> {
    params.try_into().map_err(|_| {
        let plural = if N == 1 { "" } else { "s" };
        CommandError::arity(what, &format!("{N} parameter{plural}"), params.len())
    })
}

fn make_text(params: &[&str]) -> Result<ShapeDef, CommandError> {
    let [font, words @ ..] = params else {
        return Err(CommandError::arity("text", "a font name", 0));
    };
    Ok(ShapeDef::Text(TextShape::new(font, words.join(" "))?))
}

fn make_ellipse(params: &[&str]) -> Result<ShapeDef, CommandError> {
    let [w, h] = exact::<2>("ellipse", params)?;
    Ok(ShapeDef::Ellipse(Ellipse::new(parse::number(w)?, parse::number(h)?)))
}

fn make_circle(params: &[&str]) -> Result<ShapeDef, CommandError> {
    let [d] = exact::<1>("circle", params)?;
    Ok(ShapeDef::Circle(Circle::new(parse::number(d)?)))
}

fn make_polygon(params: &[&str]) -> Result<ShapeDef, CommandError> {
    if params.is_empty() || params.len() % 2 != 0 {
        return Err(CommandError::arity(
            "polygon",
            "one or more x y pairs",
            params.len(),
        ));
    }
    Ok(ShapeDef::Polygon(Polygon::new(parse::points(params)?)))
}

fn make_rectangle(params: &[&str]) -> Result<ShapeDef, CommandError> {
    let [w, h] = exact::<2>("rectangle", params)?;
    Ok(ShapeDef::Rectangle(Rectangle::new(
        parse::number(w)?,
        parse::number(h)?,
    )))
}

fn make_square(params: &[&str]) -> Result<ShapeDef, CommandError> {
    let [s] = exact::<1>("square", params)?;
    Ok(ShapeDef::Square(Square::new(parse::number(s)?)))
}

fn make_triangle(params: &[&str]) -> Result<ShapeDef, CommandError> {
    let [x1, y1, x2, y2, x3, y3] = exact::<6>("triangle", params)?;
    let point = |x: &str, y: &str| -> Result<Point, CommandError> {
        Ok(Point::new(parse::number(x)?, parse::number(y)?))
    };
    Ok(ShapeDef::Triangle(Triangle::new(
        point(x1, y1)?,
        point(x2, y2)?,
        point(x3, y3)?,
    )))
}

fn make_equilateral(params: &[&str]) -> Result<ShapeDef, CommandError> {
    let [s] = exact::<1>("equilateral", params)?;
    Ok(ShapeDef::Equilateral(Equilateral::new(parse::number(s)?)))
}

fn make_diamond(params: &[&str]) -> Result<ShapeDef, CommandError> {
    let [w, h] = exact::<2>("diamond", params)?;
    Ok(ShapeDef::Diamond(Diamond::new(parse::number(w)?, parse::number(h)?)))
}
