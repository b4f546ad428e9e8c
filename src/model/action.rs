use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimType {
    Pung,
    Kong,
    Mahjong,
}

impl fmt::Display for ClaimType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClaimType::Pung => write!(f, "pung"),
            ClaimType::Kong => write!(f, "kong"),
            ClaimType::Mahjong => write!(f, "mahjong"),
        }
    }
}

// The closed action vocabulary accepted by the transition function. The UI
// and the bots submit actions through the exact same channel; there is no
// privileged back door. Inapplicable actions are silently absorbed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Action {
    // Start a new game. The seed is the only randomness entering the core.
    Deal { seed: u64 },
    // Toggle a tile in the human seat's charleston selection (capped at 3,
    // oldest selection evicted).
    SelectCharleston { tile: TileId },
    // Pass exactly 3 tiles from the current passer to the directional recipient.
    PassCharleston { tiles: Vec<TileId> },
    Draw,
    Discard { tile: TileId },
    Claim { claim: ClaimType },
    SkipClaim,
    // Cosmetic reordering of the human hand; `before: None` moves to the end.
    ReorderHand { tile: TileId, before: Option<TileId> },
}

impl Action {
    #[inline]
    pub fn deal(seed: u64) -> Self {
        Self::Deal { seed }
    }

    #[inline]
    pub fn select_charleston(tile: TileId) -> Self {
        Self::SelectCharleston { tile }
    }

    #[inline]
    pub fn pass_charleston(tiles: Vec<TileId>) -> Self {
        Self::PassCharleston { tiles }
    }

    #[inline]
    pub fn discard(tile: TileId) -> Self {
        Self::Discard { tile }
    }

    #[inline]
    pub fn claim(claim: ClaimType) -> Self {
        Self::Claim { claim }
    }

    #[inline]
    pub fn reorder_hand(tile: TileId, before: Option<TileId>) -> Self {
        Self::ReorderHand { tile, before }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Deal { seed } => write!(f, "Deal(seed={})", seed),
            Action::SelectCharleston { tile } => write!(f, "SelectCharleston({})", tile),
            Action::PassCharleston { tiles } => write!(f, "PassCharleston({:?})", tiles),
            Action::Draw => write!(f, "Draw"),
            Action::Discard { tile } => write!(f, "Discard({})", tile),
            Action::Claim { claim } => write!(f, "Claim({})", claim),
            Action::SkipClaim => write!(f, "SkipClaim"),
            Action::ReorderHand { tile, before } => {
                write!(f, "ReorderHand({}, {:?})", tile, before)
            }
        }
    }
}
