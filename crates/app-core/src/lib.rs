pub mod ball;
pub mod classifier;
pub mod constants;
pub mod effects;
pub mod engine;
pub mod hand;
pub mod mapper;
pub mod splat;
pub mod surface;
pub mod velocity;

pub use ball::*;
pub use classifier::*;
pub use constants::*;
pub use engine::*;
pub use hand::*;
pub use mapper::*;
pub use splat::*;
pub use surface::*;
pub use velocity::*;
