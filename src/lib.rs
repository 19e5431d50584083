pub mod app;
pub mod config;
pub mod input;
pub mod overlay;
pub mod render;
pub mod traits;
pub mod util;
