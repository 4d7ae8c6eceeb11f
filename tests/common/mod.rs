#![allow(dead_code)]

use egui::Pos2;

use breakout_game::breakout::mechanics::{Ball, BreakoutMechanics, Sign};
use breakout_game::config::BreakoutConfig;

pub fn init_logging() {
    let _ = env_logger::builder()
        .format_timestamp_secs()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

/// mechanics with the panel parked at the left wall, away from the ball's way
pub fn mechanics_without_panel_in_the_way(config: BreakoutConfig) -> BreakoutMechanics {
    let mut mechanics = BreakoutMechanics::new(config);
    mechanics.panel.pos_x = 0.0;
    mechanics
}

pub fn place_ball(mechanics: &mut BreakoutMechanics, pos: Pos2, direction_x: Sign, direction_y: Sign) {
    mechanics.ball = Ball { pos, direction_x, direction_y };
}
