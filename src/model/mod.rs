// American Mah Jong (NMJL-style) data model
mod action;
mod define;
mod state;
mod tile;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use action::*;
pub use define::*;
pub use state::*;
pub use tile::*;
