pub mod banner;
pub mod geometry;
pub mod text;

pub use banner::Banner;
pub use geometry::{Position, TerminalSize};
