pub mod algebra_2d;
pub mod game_drawer;
pub mod input;
pub mod mechanics;
