mod component;
mod config;
mod render;
pub mod scale;
mod state;

pub use component::ForceGraphCanvas;
pub use config::ForceGraphConfig;
