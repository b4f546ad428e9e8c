// Catalog of winning shapes and the matcher that checks 14 tiles against it.
mod card;
mod win;

pub use card::*;
pub use win::*;
