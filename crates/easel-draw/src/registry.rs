use std::collections::HashMap;

use crate::error::CommandError;
use crate::shape::SharedShape;

/// Named shape definitions created by `define`.
///
/// Entries are never removed. Redefining a name replaces the entry; objects
/// already drawn keep the shape they were created with.
#[derive(Debug, Default)]
pub struct ShapeRegistry {
    shapes: HashMap<String, SharedShape>,
}

impl ShapeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `shape`, returning the shape it replaced.
    pub fn define(&mut self, name: impl Into<String>, shape: SharedShape) -> Option<SharedShape> {
        let name = name.into();
        let previous = self.shapes.insert(name.clone(), shape);
        if previous.is_some() {
            log::debug!("shape {name:?} redefined");
        }
        previous
    }

    pub fn get(&self, name: &str) -> Option<&SharedShape> {
        self.shapes.get(name)
    }

    /// Like [`get`](Self::get) but a missing name is a `Name` error.
    pub fn lookup(&self, name: &str) -> Result<SharedShape, CommandError> {
        self.shapes
            .get(name)
            .cloned()
            .ok_or_else(|| CommandError::Name(format!("undefined shape {name:?}")))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.shapes.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Entries ordered by name.
    pub fn iter_sorted(&self) -> Vec<(&str, &SharedShape)> {
        let mut entries: Vec<_> = self
            .shapes
            .iter()
            .map(|(name, shape)| (name.as_str(), shape))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::error::ErrorKind;
    use crate::shape::{Circle, Shape, ShapeDef, Square};

    fn circle(d: f32) -> SharedShape {
        ShapeDef::Circle(Circle::new(d)).into_shared()
    }

    #[test]
    fn define_and_get() {
        let mut reg = ShapeRegistry::new();
        assert!(reg.define("c", circle(20.0)).is_none());
        assert_eq!(reg.get("c").map(|s| s.describe()), Some("circle 20".to_string()));
        assert!(reg.contains("c"));
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn redefine_replaces_and_returns_previous() {
        let mut reg = ShapeRegistry::new();
        reg.define("s", circle(1.0));
        let old = reg.define("s", ShapeDef::Square(Square::new(2.0)).into_shared());
        assert_eq!(old.map(|s| s.describe()), Some("circle 1".to_string()));
        assert_eq!(reg.get("s").map(|s| s.kind()), Some("square"));
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn lookup_missing_is_name_error() {
        let reg = ShapeRegistry::new();
        assert_eq!(reg.lookup("ghost").unwrap_err().kind(), ErrorKind::Name);
    }

    #[test]
    fn lookup_shares_the_definition() {
        let mut reg = ShapeRegistry::new();
        reg.define("c", circle(3.0));
        let a = reg.lookup("c").unwrap();
        let b = reg.lookup("c").unwrap();
        assert!(Rc::ptr_eq(&a, &b));
    }

    #[test]
    fn iter_sorted_by_name() {
        let mut reg = ShapeRegistry::new();
        for name in ["zeta", "alpha", "mid"] {
            reg.define(name, circle(1.0));
        }
        let names: Vec<&str> = reg.iter_sorted().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["alpha", "mid", "zeta"]);
    }
}
