use easel_draw::Scene;
use easel_engine::core::{App, AppControl, FrameCtx};
use easel_engine::coords::Point;
use easel_engine::input::{InputState, MouseButton};
use easel_engine::paint::Color;
use easel_engine::render::{SolidRenderer, TextRenderer};
use easel_engine::scene::DrawList;
use easel_engine::text::{BitmapFont, FontSystem};

use crate::keymap::{Action, action_for};
use crate::session::Session;

const BACKGROUND: Color = Color::new(64, 64, 64);
const READOUT_COLOR: Color = Color::new(0, 255, 0);
const READOUT_FONT: BitmapFont = BitmapFont::Helvetica18;
const READOUT_ORIGIN: Point = Point { x: 10.0, y: 10.0 };

/// Window-side editor: draws the scene and routes keys to the selected object.
pub struct StudioApp {
    session: Session,
    fonts: FontSystem,
    draw_list: DrawList,
    solid: SolidRenderer,
    text: TextRenderer,
}

impl StudioApp {
    pub fn new(session: Session) -> Self {
        let mut fonts = FontSystem::new();
        let loaded = fonts.load_system_fonts();
        log::info!("{loaded} font families loaded");

        Self {
            session,
            fonts,
            draw_list: DrawList::new(),
            solid: SolidRenderer::new(),
            text: TextRenderer::new(),
        }
    }

    fn build_frame(&mut self, input: &InputState) {
        self.draw_list.clear();
        self.session.scene.draw(&mut self.draw_list);

        if let Some(pos) = input.pointer_pos {
            let readout = mouse_readout(pos, |b| input.button_down(b));
            self.draw_list
                .push_text(readout, READOUT_FONT, READOUT_COLOR, READOUT_ORIGIN);
        }
    }
}

impl App for StudioApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        for press in ctx.input_frame.key_presses() {
            let action = action_for(press.key);
            if action == Action::Quit {
                ctx.exit();
                return AppControl::Exit;
            }
            apply(&mut self.session.scene, action);
        }

        self.build_frame(ctx.input);

        let draw_list = &self.draw_list;
        let fonts = &self.fonts;
        let solid = &mut self.solid;
        let text = &mut self.text;
        ctx.render(BACKGROUND, |rctx, target| {
            solid.render(rctx, target, draw_list);
            text.render(rctx, target, draw_list, fonts);
        })
    }

    fn on_exit(&mut self) {
        self.session.print_listing();
    }
}

/// Applies a non-quit key action. Keys are ignored on an empty scene.
fn apply(scene: &mut Scene, action: Action) {
    if scene.is_empty() {
        return;
    }
    match action {
        Action::Quit => {}
        Action::Step(dir) => {
            if let Some(obj) = scene.selected_mut() {
                obj.move_toward(dir);
            }
        }
        Action::Nudge(dir) => {
            if let Some(obj) = scene.selected_mut() {
                let d = dir.unit();
                obj.move_by(d.x, d.y);
            }
        }
        Action::SelectNext => scene.select_next(),
        Action::SelectPrev => scene.select_prev(),
        Action::Select(index) => {
            if !scene.select(index) {
                log::debug!("no object {index}");
            }
        }
        Action::Invalid => log::warn!("invalid keystroke"),
    }
}

/// `(x,y)` in whole pixels followed by `L`, `M`, `R` for held buttons.
fn mouse_readout(pos: Point, held: impl Fn(MouseButton) -> bool) -> String {
    let mut s = format!("({},{})", pos.x as i32, pos.y as i32);
    for (button, tag) in [
        (MouseButton::Left, 'L'),
        (MouseButton::Middle, 'M'),
        (MouseButton::Right, 'R'),
    ] {
        if held(button) {
            s.push(tag);
        }
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use easel_draw::Direction;

    fn session(lines: &[&str]) -> Session {
        let mut s = Session::new();
        for line in lines {
            s.run_line(line).unwrap();
        }
        s
    }

    #[test]
    fn readout_format() {
        assert_eq!(mouse_readout(Point::new(12.7, 300.2), |_| false), "(12,300)");
        assert_eq!(
            mouse_readout(Point::new(0.0, 0.0), |b| b != MouseButton::Middle),
            "(0,0)LR"
        );
    }

    #[test]
    fn step_uses_move_step() {
        let mut s = session(&["define c circle 10", "draw red c 50 50", "moveby 10"]);
        apply(&mut s.scene, Action::Step(Direction::Up));
        apply(&mut s.scene, Action::Step(Direction::Left));
        assert_eq!(s.scene.get(0).map(|o| o.center()), Some(Point::new(40.0, 60.0)));
    }

    #[test]
    fn nudge_moves_one_pixel() {
        let mut s = session(&["define c circle 10", "draw red c 50 50"]);
        apply(&mut s.scene, Action::Nudge(Direction::Down));
        assert_eq!(s.scene.get(0).map(|o| o.center()), Some(Point::new(50.0, 49.0)));
    }

    #[test]
    fn selection_actions() {
        let mut s = session(&[
            "define c circle 10",
            "draw red c 0 0",
            "draw red c 1 0",
            "draw red c 2 0",
        ]);
        apply(&mut s.scene, Action::SelectPrev);
        assert_eq!(s.scene.selected_index(), Some(2));
        apply(&mut s.scene, Action::Select(1));
        assert_eq!(s.scene.selected_index(), Some(1));
        apply(&mut s.scene, Action::Select(9));
        assert_eq!(s.scene.selected_index(), Some(1));
        apply(&mut s.scene, Action::SelectNext);
        assert_eq!(s.scene.selected_index(), Some(2));
    }

    #[test]
    fn empty_scene_ignores_keys() {
        let mut scene = Scene::new();
        apply(&mut scene, Action::Step(Direction::Up));
        apply(&mut scene, Action::SelectNext);
        assert_eq!(scene.selected_index(), None);
    }
}
