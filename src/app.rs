use std::fmt::Display;
use std::time::Instant;

use anyhow::anyhow;
use egui::{Context, Id, LayerId, Order, Painter, Rgba};

use crate::breakout::game_drawer::{unpack_color, GameDrawer, BACKGROUND_COLOR};
use crate::breakout::input::GameInput;
use crate::breakout::mechanics::BreakoutMechanics;
use crate::config::{BreakoutConfig, TIME_GRANULARITY};

/// Runs the game inside the egui event loop.
///
/// Everything happens on the UI thread: sample input, advance the mechanics by one fixed step when
/// the step is due, paint, and ask for the next repaint at the time of the following step.
pub struct BreakoutApp {
    mechanics: BreakoutMechanics,
    /// input collected since the last simulation step
    pending_input: GameInput,
    next_step_time: Instant,
}

impl BreakoutApp {
    pub fn new(config: BreakoutConfig) -> Self {
        Self {
            mechanics: BreakoutMechanics::new(config),
            pending_input: GameInput::none(),
            next_step_time: Instant::now(),
        }
    }

    pub fn mechanics(&self) -> &BreakoutMechanics {
        &self.mechanics
    }

    pub fn exit_requested(&self) -> bool {
        self.pending_input.exit
    }

    /// Advance the mechanics by one step, if that step is due at `now`.
    /// Returns true when a step was taken.
    pub fn proceed(&mut self, now: Instant, input: GameInput) -> bool {
        self.pending_input = self.pending_input.latch(input);
        if now < self.next_step_time {
            return false;
        }
        // after a late frame the following step keeps a full granularity distance
        self.next_step_time = (self.next_step_time + TIME_GRANULARITY).max(now + TIME_GRANULARITY);

        let step_input = std::mem::replace(&mut self.pending_input, GameInput::none());
        self.pending_input.exit = step_input.exit;
        if let Some(result) = self.mechanics.time_step(step_input) {
            log::info!("{result:?}");
        }
        true
    }

    fn draw_game_content(&self, painter: &Painter) {
        let paint_offset = painter.clip_rect().min;
        let canvas_size = painter.clip_rect().size();

        let drawer = GameDrawer::new(canvas_size, &self.mechanics);
        for mut shape in drawer.shapes() {
            shape.translate(paint_offset.to_vec2());
            painter.add(shape);
        }
    }
}

/// Common way out of the game, whether the event loop ran or the window could not be created.
/// Window and renderer are owned by eframe, so only what was really created has been released.
pub fn shutdown<E: Display>(run_result: Result<(), E>) -> anyhow::Result<()> {
    let result = run_result.map_err(|e| {
        log::error!("error creating game window: {e}");
        anyhow!("error creating game window: {e}")
    });
    log::info!("cleaning up...");
    result
}

impl eframe::App for BreakoutApp {
    fn update(
        &mut self,
        ctx: &Context,
        frame: &mut eframe::Frame,
    ) {
        let input = ctx.input(GameInput::read);
        self.proceed(Instant::now(), input);
        if self.exit_requested() {
            log::info!("quit");
            frame.close();
            return;
        }

        let game_painter = ctx.layer_painter(LayerId::new(Order::Background, Id::new("game")));
        self.draw_game_content(&game_painter);

        ctx.request_repaint_after(self.next_step_time.saturating_duration_since(Instant::now()));
    }

    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        Rgba::from(unpack_color(BACKGROUND_COLOR)).to_array()
    }

    fn on_exit(
        &mut self,
        _: Option<&eframe::glow::Context>,
    ) {
        log::info!("window closed");
    }
}
