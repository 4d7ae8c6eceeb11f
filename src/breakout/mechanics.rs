use std::ops::Neg;

use egui::{Pos2, Vec2};

use crate::breakout::algebra_2d::AaBB;
use crate::breakout::input::{GameInput, PanelControl};
use crate::config::{BreakoutConfig, DELTA_TIME_SEC};

/// TOP / LEFT corner is 0/0
pub const MODEL_GRID_LEN_X: f32 = 640.0;
pub const MODEL_GRID_LEN_Y: f32 = 640.0;

const CEILING_HEIGHT_Y: f32 = 0.0;

pub const PANEL_LEN_X: f32 = 100.0;
pub const PANEL_LEN_Y: f32 = 30.0;
pub const PANEL_POS_Y: f32 = MODEL_GRID_LEN_Y - PANEL_LEN_Y * 2.0;
const PANEL_SPEED_PER_SEC: f32 = BALL_SPEED_PER_SEC * 1.5;

pub const BALL_SIZE: f32 = 15.0;
pub const BALL_SPEED_PER_SEC: f32 = 350.0;
pub const BALL_SPAWN_POS: Pos2 = Pos2 {
    x: MODEL_GRID_LEN_X / 2.0 - BALL_SIZE / 2.0,
    y: MODEL_GRID_LEN_Y / 2.0 - BALL_SIZE / 2.0,
};

const TARGET_LEN_X: f32 = PANEL_LEN_X;
const TARGET_LEN_Y: f32 = PANEL_LEN_Y;
const TARGETS_SETUP_SPACING: f32 = BALL_SIZE * 2.0;
const TARGETS_SETUP_OFFSET_X: f32 = PANEL_LEN_X;
const TARGETS_SETUP_OFFSET_Y: f32 = PANEL_LEN_Y;
pub const TARGETS_SETUP_ROWS: usize = 4;
pub const TARGETS_SETUP_COLUMNS: usize = 4;
pub const TARGET_COUNT: usize = TARGETS_SETUP_ROWS * TARGETS_SETUP_COLUMNS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    Playing,
    Paused,
    Lost,
    Won,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    Lost,
    Won,
}

#[derive(Clone, Debug)]
pub struct BreakoutMechanics {
    pub config: BreakoutConfig,
    pub targets: [Target; TARGET_COUNT],
    pub alive_targets: usize,
    pub ball: Ball,
    pub panel: Panel,
    pub phase: GamePhase,
}

impl Default for BreakoutMechanics {
    fn default() -> Self {
        Self::new(BreakoutConfig::default())
    }
}

impl BreakoutMechanics {
    pub fn new(config: BreakoutConfig) -> Self {
        Self {
            config,
            targets: BreakoutMechanics::initial_targets(),
            alive_targets: TARGET_COUNT,
            ball: BreakoutMechanics::initial_ball(),
            panel: BreakoutMechanics::initial_panel(),
            phase: GamePhase::Playing,
        }
    }

    pub fn initial_targets() -> [Target; TARGET_COUNT] {
        std::array::from_fn(|idx| {
            let row = idx / TARGETS_SETUP_COLUMNS;
            let column = idx % TARGETS_SETUP_COLUMNS;
            Target {
                shape: AaBB::from_origin_size(
                    TARGETS_SETUP_OFFSET_X + column as f32 * (TARGET_LEN_X + TARGETS_SETUP_SPACING),
                    TARGETS_SETUP_OFFSET_Y + row as f32 * (TARGET_LEN_Y + TARGETS_SETUP_SPACING),
                    TARGET_LEN_X,
                    TARGET_LEN_Y,
                ),
                alive: true,
            }
        })
    }

    pub fn initial_ball() -> Ball {
        Ball {
            pos: BALL_SPAWN_POS,
            direction_x: Sign::Plus,
            direction_y: Sign::Plus,
        }
    }

    pub fn initial_panel() -> Panel {
        Panel {
            pos_x: MODEL_GRID_LEN_X / 2.0 - PANEL_LEN_X / 2.0,
        }
    }

    /// Advance one frame: apply input, move everything by the fixed delta time and evaluate the round.
    ///
    /// Returns the result of the round on exactly the frame it ended. The mechanics are reset
    /// before returning, so a finished round is never visible to a subsequent frame.
    pub fn time_step(&mut self, input: GameInput) -> Option<GameResult> {
        if input.toggle_pause {
            self.toggle_pause();
        }
        if self.phase != GamePhase::Playing {
            return None;
        }

        self.panel.process_input(input.control);
        log::trace!("panel pos_x = {}", self.panel.pos_x);
        self.proceed_ball();
        self.check_game_end_situation();

        let result = match self.phase {
            GamePhase::Lost => Some(GameResult::Lost),
            GamePhase::Won => Some(GameResult::Won),
            GamePhase::Playing | GamePhase::Paused => None,
        };
        if let Some(result) = result {
            log::info!("round finished: {result:?}");
            self.reset();
        }
        result
    }

    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            GamePhase::Playing => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Playing,
            finished @ (GamePhase::Lost | GamePhase::Won) => finished,
        };
        log::info!("{:?}", self.phase);
    }

    /// Start a new round: ball back to spawn, every target alive again.
    /// The panel stays where the player left it.
    pub fn reset(&mut self) {
        self.targets = BreakoutMechanics::initial_targets();
        self.alive_targets = TARGET_COUNT;
        self.ball = BreakoutMechanics::initial_ball();
        self.phase = match self.config.pause_after_reset {
            true => GamePhase::Paused,
            false => GamePhase::Playing,
        };
        log::info!("reset; new round is {:?}", self.phase);
    }

    /// Move the ball one frame and resolve its collisions.
    /// A panel contact takes the whole frame; walls and targets are not checked then.
    pub fn proceed_ball(&mut self) {
        let panel_shape = self.panel.shape();
        if self.ball.shape().overlaps(&panel_shape) {
            self.ball.pos.y = panel_shape.min.y - BALL_SIZE - 1.0;
            self.ball.direction_y = -self.ball.direction_y;
            log::debug!("panel hit at x = {}", self.ball.pos.x);
            return;
        }

        self.proceed_ball_x();
        self.proceed_ball_y();
        self.hit_targets();
    }

    fn proceed_ball_x(&mut self) {
        let ball = &mut self.ball;
        let prospective_x = ball.pos.x + ball.move_vector().x;
        if prospective_x < 0.0 || prospective_x + BALL_SIZE > MODEL_GRID_LEN_X {
            ball.direction_x = -ball.direction_x;
        }
        ball.pos.x += ball.move_vector().x;
    }

    fn proceed_ball_y(&mut self) {
        let prospective_y = self.ball.pos.y + self.ball.move_vector().y;
        if prospective_y + BALL_SIZE > MODEL_GRID_LEN_Y {
            // the ball is let through; losing is detected, not prevented
            self.phase = GamePhase::Lost;
        } else if prospective_y < CEILING_HEIGHT_Y {
            self.ball.direction_y = -self.ball.direction_y;
        }
        self.ball.pos.y += self.ball.move_vector().y;
    }

    /// Every overlapping target counts, each one flips the vertical direction again
    fn hit_targets(&mut self) {
        let ball_shape = self.ball.shape();
        for (idx, target) in self.targets.iter_mut().enumerate() {
            if target.alive && target.shape.overlaps(&ball_shape) {
                target.alive = false;
                self.alive_targets -= 1;
                self.ball.direction_y = -self.ball.direction_y;
                log::debug!("target {idx} hit; {} left", self.alive_targets);
            }
        }
    }

    fn check_game_end_situation(&mut self) {
        if self.phase == GamePhase::Playing && self.alive_targets == 0 {
            self.phase = GamePhase::Won;
        }
    }
}

/// Direction of the ball along one axis
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sign {
    Plus,
    Minus,
}

impl Sign {
    pub fn value(self) -> f32 {
        match self {
            Sign::Plus => 1.0,
            Sign::Minus => -1.0,
        }
    }
}

impl Neg for Sign {
    type Output = Sign;

    fn neg(self) -> Self::Output {
        match self {
            Sign::Plus => Sign::Minus,
            Sign::Minus => Sign::Plus,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Target {
    pub shape: AaBB,
    pub alive: bool,
}

/// A square ball with constant speed. Collisions only flip the direction signs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ball {
    /// top left corner
    pub pos: Pos2,
    pub direction_x: Sign,
    pub direction_y: Sign,
}

impl Ball {
    pub fn shape(&self) -> AaBB {
        AaBB::from_origin_size(self.pos.x, self.pos.y, BALL_SIZE, BALL_SIZE)
    }

    pub fn move_vector(&self) -> Vec2 {
        Vec2::new(self.direction_x.value(), self.direction_y.value()) * BALL_SPEED_PER_SEC * DELTA_TIME_SEC
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Panel {
    pub pos_x: f32,
}

impl Panel {
    pub fn shape(&self) -> AaBB {
        AaBB::from_origin_size(self.pos_x, PANEL_POS_Y, PANEL_LEN_X, PANEL_LEN_Y)
    }

    /// move one time step according to the control; the panel never leaves the screen
    pub fn process_input(&mut self, control: PanelControl) {
        let way = PANEL_SPEED_PER_SEC * DELTA_TIME_SEC;
        let potential_pos_x = match control {
            PanelControl::None => return,
            PanelControl::MoveLeft => self.pos_x - way,
            PanelControl::MoveRight => self.pos_x + way,
        };
        self.pos_x = potential_pos_x.clamp(0.0, MODEL_GRID_LEN_X - PANEL_LEN_X);
    }
}
