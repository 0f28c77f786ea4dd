//! Toroidal Game of Life with a configurable neighbour radius, rendered to
//! animated GIFs.

pub mod enc;
pub mod engine;
pub mod error;
pub mod pos;
pub mod render;
pub mod seed;

pub use enc::RunLengthEncoded;
pub use engine::Grid;
pub use error::Error;
pub use pos::Pos2;
pub use render::GifRecorder;
pub use seed::Seeding;
