mod engine;
mod transition;
mod wall;

pub use engine::*;
pub use transition::*;
pub use wall::*;
