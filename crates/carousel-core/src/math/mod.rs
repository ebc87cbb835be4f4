//! Geometry types shared by gesture and zoom handling

mod size;
mod vec2;

pub use size::Size;
pub use vec2::Vec2;
