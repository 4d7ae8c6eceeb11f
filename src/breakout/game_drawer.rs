use egui::epaint::RectShape;
use egui::{Color32, Pos2, Rect, Rounding, Shape, Vec2};

use super::algebra_2d::AaBB;
use super::mechanics::{BreakoutMechanics, MODEL_GRID_LEN_X, MODEL_GRID_LEN_Y};

/// Colors are packed as 0xRRGGBBAA
pub const BACKGROUND_COLOR: u32 = 0x181818FF;
pub const PANEL_COLOR: u32 = 0x275C32FF;
pub const BALL_COLOR: u32 = 0xFFFFFFFF;
pub const TARGET_COLOR: u32 = 0xB0413EFF;

pub fn unpack_color(rgba: u32) -> Color32 {
    let [r, g, b, a] = rgba.to_be_bytes();
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

/// Produces the shapes of one frame: background, panel, alive targets, ball
pub struct GameDrawer<'a> {
    canvas_size: Vec2,
    game_state: &'a BreakoutMechanics,
}

impl<'a> GameDrawer<'a> {
    pub fn new(
        canvas_size: Vec2,
        game_state: &'a BreakoutMechanics,
    ) -> Self {
        Self { canvas_size, game_state }
    }

    /// pos / MODEL_LEN = result / canvas_size
    /// => result = pos * canvas_size / MODEL_LEN
    fn scale(
        &self,
        pos: Pos2,
    ) -> Pos2 {
        Pos2::new(
            pos.x * self.canvas_size.x / MODEL_GRID_LEN_X,
            pos.y * self.canvas_size.y / MODEL_GRID_LEN_Y,
        )
    }

    pub fn shapes(&self) -> Vec<Shape> {
        let mut result = Vec::with_capacity(self.game_state.alive_targets + 3);
        result.push(self.background());
        result.push(self.panel());
        result.extend(self.targets());
        result.push(self.ball());
        result
    }

    fn background(&self) -> Shape {
        self.filled(
            &AaBB::from_origin_size(0.0, 0.0, MODEL_GRID_LEN_X, MODEL_GRID_LEN_Y),
            BACKGROUND_COLOR,
        )
    }

    fn panel(&self) -> Shape { self.filled(&self.game_state.panel.shape(), PANEL_COLOR) }

    fn targets(&self) -> impl Iterator<Item = Shape> + '_ {
        self.game_state.targets.iter()
            .filter(|t| t.alive)
            .map(|t| self.filled(&t.shape, TARGET_COLOR))
    }

    fn ball(&self) -> Shape { self.filled(&self.game_state.ball.shape(), BALL_COLOR) }

    fn filled(
        &self,
        shape: &AaBB,
        color: u32,
    ) -> Shape {
        RectShape::filled(
            Rect::from_two_pos(self.scale(shape.min), self.scale(shape.max)),
            Rounding::none(),
            unpack_color(color),
        )
        .into()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn rect_shape(shape: &Shape) -> &RectShape {
        match shape {
            Shape::Rect(rect) => rect,
            other => panic!("unexpected shape: {other:?}"),
        }
    }

    #[rstest]
    #[case(0x181818FF, Color32::from_rgb(0x18, 0x18, 0x18))]
    #[case(0x275C32FF, Color32::from_rgb(0x27, 0x5C, 0x32))]
    #[case(0xFFFFFFFF, Color32::WHITE)]
    #[case(0x00000000, Color32::TRANSPARENT)]
    fn unpack_packed_color(#[case] rgba: u32, #[case] expected: Color32) {
        assert_eq!(unpack_color(rgba), expected);
    }

    #[test]
    fn draw_order_and_colors() {
        let game_state = BreakoutMechanics::default();
        let shapes = GameDrawer::new(Vec2::new(MODEL_GRID_LEN_X, MODEL_GRID_LEN_Y), &game_state).shapes();
        assert_eq!(shapes.len(), game_state.targets.len() + 3);

        let colors: Vec<Color32> = shapes.iter().map(|s| rect_shape(s).fill).collect();
        assert_eq!(colors[0], unpack_color(BACKGROUND_COLOR));
        assert_eq!(colors[1], unpack_color(PANEL_COLOR));
        assert!(colors[2..colors.len() - 1].iter().all(|c| *c == unpack_color(TARGET_COLOR)));
        assert_eq!(colors[colors.len() - 1], unpack_color(BALL_COLOR));

        let panel = game_state.panel.shape();
        assert_eq!(rect_shape(&shapes[1]).rect, Rect::from_two_pos(panel.min, panel.max));
    }

    #[test]
    fn dead_targets_are_not_drawn() {
        let mut game_state = BreakoutMechanics::default();
        game_state.targets[3].alive = false;
        game_state.targets[7].alive = false;
        game_state.alive_targets -= 2;
        let shapes = GameDrawer::new(Vec2::new(MODEL_GRID_LEN_X, MODEL_GRID_LEN_Y), &game_state).shapes();
        assert_eq!(shapes.len(), game_state.targets.len() - 2 + 3);
        let dead = game_state.targets[3].shape;
        assert!(shapes.iter().all(|s| rect_shape(s).rect != Rect::from_two_pos(dead.min, dead.max)));
    }

    #[test]
    fn shapes_are_scaled_to_canvas() {
        let game_state = BreakoutMechanics::default();
        let shapes = GameDrawer::new(Vec2::new(MODEL_GRID_LEN_X / 2.0, MODEL_GRID_LEN_Y / 2.0), &game_state).shapes();
        let ball = rect_shape(shapes.last().unwrap()).rect;
        let expected = game_state.ball.shape();
        assert_eq!(ball.min, Pos2::new(expected.min.x / 2.0, expected.min.y / 2.0));
        assert_eq!(ball.max, Pos2::new(expected.max.x / 2.0, expected.max.y / 2.0));
    }
}
