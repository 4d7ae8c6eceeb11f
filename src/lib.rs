pub mod app;
pub mod breakout;
pub mod config;
pub mod util;
