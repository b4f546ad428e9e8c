pub type Seat = usize; // seat index, counter-clockwise
pub type TileId = u32; // unique per tile instance within one deck

pub const SEAT: usize = 4; // number of seats

pub const HUMAN_SEAT: Seat = 0; // the seat driven by the UI

pub const DECK_SIZE: usize = 152; // 108 suited + 16 winds + 12 dragons + 4 flowers + 4 seasons + 8 jokers
pub const HAND_SIZE: usize = 13; // concealed tiles dealt to each seat
pub const FULL_HAND: usize = 14; // hand size after a draw, and the size every catalog shape sums to

pub const CHARLESTON_TILES: usize = 3; // tiles moved per charleston pass
pub const CHARLESTON_ROUNDS: usize = 3; // left, across, right
