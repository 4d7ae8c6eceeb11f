use egui::{Pos2, Vec2};

use breakout_game::app::{shutdown, BreakoutApp};
use breakout_game::breakout::mechanics::{MODEL_GRID_LEN_X, MODEL_GRID_LEN_Y};
use breakout_game::config::{BreakoutConfig, FRAMES_PER_SECOND, WINDOW_TITLE};
use breakout_game::util::init_logging;

fn native_options() -> eframe::NativeOptions {
    eframe::NativeOptions {
        decorated: false,
        resizable: false,
        initial_window_pos: Some(Pos2::new(0.0, 0.0)),
        initial_window_size: Some(Vec2::new(MODEL_GRID_LEN_X, MODEL_GRID_LEN_Y)),
        default_theme: eframe::Theme::Dark,
        ..Default::default()
    }
}

fn breakout_user_game(config: BreakoutConfig) -> eframe::Result<()> {
    eframe::run_native(
        WINDOW_TITLE,
        native_options(),
        Box::new(move |_cc| Box::new(BreakoutApp::new(config))),
    )
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let config = BreakoutConfig::default();
    log::info!(
        "starting {WINDOW_TITLE}: {MODEL_GRID_LEN_X}x{MODEL_GRID_LEN_Y} @ {FRAMES_PER_SECOND} fps, {config:?}"
    );

    shutdown(breakout_user_game(config))
}
