//! Terminal-facing UI: the render contract, its stderr renderer, and the
//! palette swatch preview.

pub mod render;
pub mod renderer;
pub mod settings;
pub mod swatch;
