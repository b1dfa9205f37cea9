use easel_engine::scene::DrawList;

use crate::object::SceneObject;

/// Ordered scene objects plus the index of the selected one.
///
/// Objects are only appended. The selection is driven by the input layer;
/// `push` leaves it alone.
#[derive(Debug, Default)]
pub struct Scene {
    objects: Vec<SceneObject>,
    selected: usize,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, object: SceneObject) {
        self.objects.push(object);
    }

    /// The most recently added object.
    pub fn last_mut(&mut self) -> Option<&mut SceneObject> {
        self.objects.last_mut()
    }

    pub fn get(&self, index: usize) -> Option<&SceneObject> {
        self.objects.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects.iter()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn selected_index(&self) -> Option<usize> {
        (self.selected < self.objects.len()).then_some(self.selected)
    }

    pub fn selected_mut(&mut self) -> Option<&mut SceneObject> {
        self.objects.get_mut(self.selected)
    }

    /// Selects `index` if it exists.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.objects.len() {
            self.selected = index;
            true
        } else {
            false
        }
    }

    pub fn select_next(&mut self) {
        if !self.objects.is_empty() {
            self.selected = (self.selected + 1) % self.objects.len();
        }
    }

    pub fn select_prev(&mut self) {
        let n = self.objects.len();
        if n > 0 {
            self.selected = (self.selected.min(n - 1) + n - 1) % n;
        }
    }

    /// Draws every object in insertion order.
    pub fn draw(&self, canvas: &mut DrawList) {
        for object in &self.objects {
            object.draw(canvas);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{ShapeDef, Square};
    use easel_engine::coords::Point;
    use easel_engine::paint::Color;

    fn scene_of(n: usize) -> Scene {
        let shape = ShapeDef::Square(Square::new(4.0)).into_shared();
        let mut scene = Scene::new();
        for i in 0..n {
            scene.push(SceneObject::new(
                shape.clone(),
                Point::new(i as f32, 0.0),
                Color::WHITE,
            ));
        }
        scene
    }

    #[test]
    fn empty_scene_has_no_selection() {
        let mut scene = Scene::new();
        assert_eq!(scene.selected_index(), None);
        assert!(scene.selected_mut().is_none());
        assert!(scene.last_mut().is_none());
        scene.select_next();
        scene.select_prev();
        assert!(!scene.select(0));
    }

    #[test]
    fn first_object_is_selected_by_default() {
        let scene = scene_of(1);
        assert_eq!(scene.selected_index(), Some(0));
    }

    #[test]
    fn next_and_prev_wrap() {
        let mut scene = scene_of(3);
        scene.select_next();
        scene.select_next();
        assert_eq!(scene.selected_index(), Some(2));
        scene.select_next();
        assert_eq!(scene.selected_index(), Some(0));
        scene.select_prev();
        assert_eq!(scene.selected_index(), Some(2));
        scene.select_prev();
        assert_eq!(scene.selected_index(), Some(1));
    }

    #[test]
    fn select_out_of_range_is_ignored() {
        let mut scene = scene_of(2);
        assert!(scene.select(1));
        assert!(!scene.select(2));
        assert_eq!(scene.selected_index(), Some(1));
    }

    #[test]
    fn push_keeps_selection() {
        let mut scene = scene_of(2);
        scene.select(1);
        scene.push(SceneObject::new(
            ShapeDef::Square(Square::new(1.0)).into_shared(),
            Point::origin(),
            Color::BLACK,
        ));
        assert_eq!(scene.selected_index(), Some(1));
        assert_eq!(scene.last_mut().map(|o| o.color()), Some(Color::BLACK));
    }

    #[test]
    fn selected_mut_edits_that_object() {
        let mut scene = scene_of(3);
        scene.select(2);
        if let Some(obj) = scene.selected_mut() {
            obj.move_by(0.0, 7.0);
        }
        assert_eq!(scene.get(2).map(|o| o.center()), Some(Point::new(2.0, 7.0)));
        assert_eq!(scene.get(0).map(|o| o.center()), Some(Point::new(0.0, 0.0)));
    }

    #[test]
    fn draw_visits_objects_in_order() {
        let scene = scene_of(3);
        let mut list = DrawList::new();
        scene.draw(&mut list);
        assert_eq!(list.len(), 3);
    }
}
