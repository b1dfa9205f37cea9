use easel_draw::{CommandCtx, CommandError, Interpreter, Scene, ShapeRegistry};
use easel_engine::scene::DrawList;

/// Editor state shared by script loading and the window.
#[derive(Debug, Default)]
pub struct Session {
    interpreter: Interpreter,
    pub shapes: ShapeRegistry,
    pub scene: Scene,
    /// Receives the immediate render of `draw` commands. The window repaints
    /// the whole scene every frame, so this is cleared after each command.
    scratch: DrawList,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn run_line(&mut self, line: &str) -> Result<(), CommandError> {
        let mut ctx = CommandCtx {
            shapes: &mut self.shapes,
            scene: &mut self.scene,
            canvas: &mut self.scratch,
        };
        let result = self.interpreter.interpret_line(line, &mut ctx);
        self.scratch.clear();
        result
    }

    /// `shapes[name] = <description>` lines in name order.
    pub fn listing(&self) -> Vec<String> {
        self.shapes
            .iter_sorted()
            .into_iter()
            .map(|(name, shape)| format!("shapes[{name}] = {shape}"))
            .collect()
    }

    pub fn print_listing(&self) {
        for line in self.listing() {
            println!("{line}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_is_sorted() {
        let mut s = Session::new();
        s.run_line("define sq square 10").unwrap();
        s.run_line("define c circle 20").unwrap();
        assert_eq!(s.listing(), ["shapes[c] = circle 20", "shapes[sq] = square 10"]);
    }

    #[test]
    fn failed_line_leaves_state() {
        let mut s = Session::new();
        assert!(s.run_line("draw red nothing 1 2").is_err());
        assert!(s.scene.is_empty());
        assert!(s.listing().is_empty());
    }
}
