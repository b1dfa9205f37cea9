//! Command interpreter: `define`, `draw`, `moveby`, `border`.

use std::collections::HashMap;

use easel_engine::coords::Point;
use easel_engine::scene::DrawList;

use crate::error::CommandError;
use crate::factory::ShapeFactories;
use crate::object::SceneObject;
use crate::parse;
use crate::registry::ShapeRegistry;
use crate::scene::Scene;

/// Mutable state a command operates on.
pub struct CommandCtx<'a> {
    pub shapes: &'a mut ShapeRegistry,
    pub scene: &'a mut Scene,
    /// Receives the immediate render of `draw`.
    pub canvas: &'a mut DrawList,
}

type CommandFn = fn(&Interpreter, &[&str], &mut CommandCtx<'_>) -> Result<(), CommandError>;

/// Dispatches tokenized command lines.
///
/// Both tables are fixed at construction. Each handler validates all of its
/// arguments before touching the registry or scene, so a failed command
/// leaves them as they were.
#[derive(Debug, Clone)]
pub struct Interpreter {
    commands: HashMap<&'static str, CommandFn>,
    factories: ShapeFactories,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    pub fn new() -> Self {
        Self::with_factories(ShapeFactories::standard())
    }

    pub fn with_factories(factories: ShapeFactories) -> Self {
        let mut commands: HashMap<&'static str, CommandFn> = HashMap::new();
        commands.insert("define", cmd_define);
        commands.insert("draw", cmd_draw);
        commands.insert("moveby", cmd_moveby);
        commands.insert("border", cmd_border);
        Self {
            commands,
            factories,
        }
    }

    pub fn factories(&self) -> &ShapeFactories {
        &self.factories
    }

    /// Runs one command. `tokens[0]` is the keyword.
    pub fn interpret(&self, tokens: &[&str], ctx: &mut CommandCtx<'_>) -> Result<(), CommandError> {
        let Some((&keyword, params)) = tokens.split_first() else {
            return Err(CommandError::syntax("empty command"));
        };
        let command = self
            .commands
            .get(keyword)
            .ok_or_else(|| CommandError::syntax(format!("unrecognized command {keyword:?}")))?;

        log::debug!("{}", tokens.join(" "));
        command(self, params, ctx)
    }

    /// Tokenizes `line` and runs it. Blank and comment lines do nothing.
    pub fn interpret_line(&self, line: &str, ctx: &mut CommandCtx<'_>) -> Result<(), CommandError> {
        let tokens = parse::tokenize(line);
        if tokens.is_empty() {
            return Ok(());
        }
        self.interpret(&tokens, ctx)
    }
}

fn cmd_define(
    interp: &Interpreter,
    params: &[&str],
    ctx: &mut CommandCtx<'_>,
) -> Result<(), CommandError> {
    let [name, kind, rest @ ..] = params else {
        return Err(CommandError::arity(
            "define",
            "a name and a shape type",
            params.len(),
        ));
    };
    let shape = interp.factories.build(kind, rest)?;
    ctx.shapes.define(*name, shape);
    Ok(())
}

fn cmd_draw(
    _: &Interpreter,
    params: &[&str],
    ctx: &mut CommandCtx<'_>,
) -> Result<(), CommandError> {
    let &[color, name, x, y] = params else {
        return Err(CommandError::arity("draw", "4 parameters", params.len()));
    };
    let color = parse::color(color)?;
    let shape = ctx.shapes.lookup(name)?;
    let center = Point::new(parse::number(x)?, parse::number(y)?);

    let object = SceneObject::new(shape, center, color);
    object.draw(ctx.canvas);
    ctx.scene.push(object);
    Ok(())
}

fn cmd_moveby(
    _: &Interpreter,
    params: &[&str],
    ctx: &mut CommandCtx<'_>,
) -> Result<(), CommandError> {
    let &[step] = params else {
        return Err(CommandError::arity("moveby", "1 parameter", params.len()));
    };
    let step = parse::number(step)?;
    let object = last_object(ctx.scene, "moveby")?;
    object.set_move_step(step);
    Ok(())
}

fn cmd_border(
    _: &Interpreter,
    params: &[&str],
    ctx: &mut CommandCtx<'_>,
) -> Result<(), CommandError> {
    let &[color, width] = params else {
        return Err(CommandError::arity("border", "2 parameters", params.len()));
    };
    let color = parse::color(color)?;
    let width = parse::number(width)?;
    let object = last_object(ctx.scene, "border")?;
    object.set_border(width, color);
    Ok(())
}

fn last_object<'s>(scene: &'s mut Scene, command: &str) -> Result<&'s mut SceneObject, CommandError> {
    scene
        .last_mut()
        .ok_or_else(|| CommandError::Name(format!("{command}: no object has been drawn")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::object::Border;
    use crate::shape::{Shape, ShapeDef};
    use easel_engine::paint::Color;
    use easel_engine::scene::DrawCmd;

    #[derive(Default)]
    struct World {
        shapes: ShapeRegistry,
        scene: Scene,
        canvas: DrawList,
    }

    impl World {
        fn run(&mut self, line: &str) -> Result<(), CommandError> {
            let mut ctx = CommandCtx {
                shapes: &mut self.shapes,
                scene: &mut self.scene,
                canvas: &mut self.canvas,
            };
            Interpreter::new().interpret_line(line, &mut ctx)
        }

        fn kind_of(&mut self, line: &str) -> ErrorKind {
            self.run(line).unwrap_err().kind()
        }
    }

    #[test]
    fn define_then_draw_circle() {
        let mut w = World::default();
        w.run("define c circle 20").unwrap();
        w.run("draw green c 100 100").unwrap();

        assert_eq!(w.scene.len(), 1);
        let obj = w.scene.get(0).unwrap();
        assert_eq!(obj.center(), Point::new(100.0, 100.0));
        assert_eq!(obj.shape().describe(), "circle 20");
        assert_eq!(obj.color(), Color::new(0, 255, 0));
        assert_eq!(obj.border(), None);
        assert_eq!(obj.move_step(), 0.0);
    }

    #[test]
    fn draw_renders_immediately() {
        let mut w = World::default();
        w.run("define s square 10").unwrap();
        w.run("draw red s 5 5").unwrap();
        assert!(matches!(w.canvas.items(), [DrawCmd::Polygon(_)]));
    }

    #[test]
    fn registry_reflects_define() {
        let mut w = World::default();
        w.run("define r rectangle 30 20").unwrap();
        w.run("define t text Helvetica-18 hello   world").unwrap();
        assert_eq!(w.shapes.get("r").map(|s| s.describe()), Some("rectangle 30x20".into()));
        assert_eq!(
            w.shapes.get("t").map(|s| s.describe()),
            Some("text Helvetica-18 \"hello world\"".into())
        );
    }

    #[test]
    fn draw_undefined_name_is_name_error() {
        let mut w = World::default();
        assert_eq!(w.kind_of("draw red circle1 50 60"), ErrorKind::Name);
        assert_eq!(w.scene.len(), 0);
        assert!(w.canvas.is_empty());
    }

    #[test]
    fn draw_arity() {
        let mut w = World::default();
        w.run("define c circle 2").unwrap();
        assert_eq!(w.kind_of("draw red c 1"), ErrorKind::Syntax);
        assert_eq!(w.kind_of("draw red c 1 2 3"), ErrorKind::Syntax);
        assert_eq!(w.scene.len(), 0);
    }

    #[test]
    fn draw_validates_before_mutating() {
        let mut w = World::default();
        w.run("define c circle 2").unwrap();
        assert_eq!(w.kind_of("draw nocolor c 1 2"), ErrorKind::InvalidArgument);
        assert_eq!(w.kind_of("draw red c 1 y"), ErrorKind::Format);
        assert_eq!(w.scene.len(), 0);
        assert!(w.canvas.is_empty());
    }

    #[test]
    fn border_negative_width_keeps_width() {
        let mut w = World::default();
        w.run("define c circle 20").unwrap();
        w.run("draw green c 0 0").unwrap();
        w.run("border red 3").unwrap();
        w.run("border blue -1").unwrap();
        assert_eq!(
            w.scene.get(0).and_then(|o| o.border()),
            Some(Border {
                width: 3.0,
                color: Color::new(0, 0, 255)
            })
        );
    }

    #[test]
    fn border_and_moveby_apply_to_last_object() {
        let mut w = World::default();
        w.run("define c circle 20").unwrap();
        w.run("draw green c 0 0").unwrap();
        w.run("draw green c 50 0").unwrap();
        w.run("moveby 4").unwrap();
        w.run("border white 2").unwrap();

        assert_eq!(w.scene.get(0).map(|o| o.move_step()), Some(0.0));
        assert_eq!(w.scene.get(1).map(|o| o.move_step()), Some(4.0));
        assert!(w.scene.get(0).and_then(|o| o.border()).is_none());
        assert_eq!(w.scene.get(1).and_then(|o| o.border()).map(|b| b.width), Some(2.0));
    }

    #[test]
    fn edits_without_objects_are_name_errors() {
        let mut w = World::default();
        assert_eq!(w.kind_of("moveby 5"), ErrorKind::Name);
        assert_eq!(w.kind_of("border red 2"), ErrorKind::Name);
    }

    #[test]
    fn edit_arity_and_format() {
        let mut w = World::default();
        w.run("define c circle 20").unwrap();
        w.run("draw green c 0 0").unwrap();
        assert_eq!(w.kind_of("moveby"), ErrorKind::Syntax);
        assert_eq!(w.kind_of("moveby 1 2"), ErrorKind::Syntax);
        assert_eq!(w.kind_of("moveby fast"), ErrorKind::Format);
        assert_eq!(w.kind_of("border red"), ErrorKind::Syntax);
        assert_eq!(w.kind_of("border red thick"), ErrorKind::Format);
        assert_eq!(w.scene.get(0).map(|o| o.move_step()), Some(0.0));
        assert!(w.scene.get(0).and_then(|o| o.border()).is_none());
    }

    #[test]
    fn odd_polygon_is_syntax_error_without_mutation() {
        let mut w = World::default();
        let err = w.run("define p polygon 0 0 10 0 10 10 1").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Syntax);
        assert!(w.shapes.is_empty());
    }

    #[test]
    fn short_polygons_define_and_draw() {
        let mut w = World::default();
        w.run("define dot polygon 5 5").unwrap();
        w.run("define seg polygon 0 0 10 0").unwrap();
        w.run("draw red seg 1 1").unwrap();
        w.run("border white 2").unwrap();
        assert_eq!(
            w.shapes.get("seg").map(|s| s.describe()),
            Some("polygon [(0,0) (10,0)]".into())
        );
        assert_eq!(w.scene.len(), 1);
    }

    #[test]
    fn define_failures_leave_registry_alone() {
        let mut w = World::default();
        w.run("define c circle 20").unwrap();
        assert_eq!(w.kind_of("define c blob 1"), ErrorKind::Syntax);
        assert_eq!(w.kind_of("define c circle x"), ErrorKind::Format);
        assert_eq!(w.kind_of("define c text Comic-12 hi"), ErrorKind::InvalidArgument);
        assert_eq!(w.kind_of("define c"), ErrorKind::Syntax);
        assert_eq!(w.shapes.get("c").map(|s| s.describe()), Some("circle 20".into()));
    }

    #[test]
    fn redefine_is_idempotent() {
        let mut w = World::default();
        w.run("define e ellipse 30 20").unwrap();
        let before = w.shapes.get("e").map(|s| s.describe());
        w.run("define e ellipse 30 20").unwrap();
        assert_eq!(w.shapes.get("e").map(|s| s.describe()), before);
        assert_eq!(w.shapes.len(), 1);
    }

    #[test]
    fn redefine_keeps_drawn_objects() {
        let mut w = World::default();
        w.run("define x circle 10").unwrap();
        w.run("draw red x 0 0").unwrap();
        w.run("define x square 10").unwrap();
        assert_eq!(w.scene.get(0).map(|o| o.shape().kind()), Some("circle"));
        assert_eq!(w.shapes.get("x").map(|s| s.kind()), Some("square"));
    }

    #[test]
    fn unknown_and_empty_commands() {
        let mut w = World::default();
        assert_eq!(w.kind_of("paint red c 1 2"), ErrorKind::Syntax);
        let mut ctx = CommandCtx {
            shapes: &mut w.shapes,
            scene: &mut w.scene,
            canvas: &mut w.canvas,
        };
        let err = Interpreter::new().interpret(&[], &mut ctx).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Syntax);
    }

    #[test]
    fn comments_and_blank_lines_are_ignored() {
        let mut w = World::default();
        w.run("").unwrap();
        w.run("   # define c circle 1").unwrap();
        assert!(w.shapes.is_empty());
    }

    #[test]
    fn custom_factory_table() {
        fn dot(params: &[&str]) -> Result<ShapeDef, CommandError> {
            if !params.is_empty() {
                return Err(CommandError::arity("dot", "no parameters", params.len()));
            }
            Ok(ShapeDef::Circle(crate::shape::Circle::new(1.0)))
        }

        let interp = Interpreter::with_factories(ShapeFactories::empty().with("dot", dot));
        let mut w = World::default();
        let mut ctx = CommandCtx {
            shapes: &mut w.shapes,
            scene: &mut w.scene,
            canvas: &mut w.canvas,
        };
        interp.interpret_line("define d dot", &mut ctx).unwrap();
        let err = interp.interpret_line("define c circle 3", &mut ctx).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Syntax);
        assert!(interp.factories().contains("dot"));
        assert_eq!(w.shapes.len(), 1);
    }
}
