use super::*;
use crate::util::misc::vec_to_string;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Charleston,
    Play,
    GameOver,
}

// Pair appears only in catalog shapes; physical exposures are pung/kong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeldType {
    Pung,
    Kong,
    Pair,
}

// A publicly claimed tile group, removed from concealment for good.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meld {
    pub meld_type: MeldType,
    pub tiles: Vec<Tile>,
    pub from_seat: Seat, // whose discard supplied the capturing tile
}

impl fmt::Display for Meld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?}{}<{}",
            self.meld_type,
            vec_to_string(&self.tiles),
            self.from_seat
        )
    }
}

// Unresolved contest over the single most recent discard. Lives from a
// discard until it is claimed or every eligible claimant has skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingClaim {
    pub seat: Seat,      // the claimant currently allowed to act
    pub discarder: Seat, // who threw the contested tile
    pub claim: ClaimType,
    pub tile: Tile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharlestonDirection {
    Left,
    Across,
    Right,
}

impl CharlestonDirection {
    pub fn from_round(round: usize) -> Self {
        match round {
            0 => Self::Left,
            1 => Self::Across,
            _ => Self::Right,
        }
    }

    // Seat offset of the recipient, consistent with physical table rotation.
    #[inline]
    pub fn offset(&self) -> usize {
        match self {
            Self::Left => 1,
            Self::Across => 2,
            Self::Right => 3,
        }
    }
}

// The aggregate game state. Every transition replaces it wholesale with a
// fully formed snapshot; observers never see partial mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub phase: Phase,
    pub wall: Vec<Tile>,               // face-down draw pile, consumed from the back
    pub hands: [Vec<Tile>; SEAT],      // concealed tiles, order is player-controlled
    pub discards: [Vec<Tile>; SEAT],   // per-seat discard piles
    pub exposures: [Vec<Meld>; SEAT],  // append-only public melds
    pub turn: Seat,                    // turn holder during the play phase
    pub charleston_round: usize,       // 0:left 1:across 2:right, 3 once finished
    pub charleston_seat: Seat,         // seat that passes next
    pub charleston_selected: Vec<TileId>, // human selection scratch, capped at 3
    pub pending_claim: Option<PendingClaim>,
    pub last_drawn: Option<Tile>, // advisory, cleared on discard/claim
    pub winner: Option<Seat>,
}

impl GameState {
    // [Read-only queries for the UI / driver]

    // Seat whose decision the game is waiting on, if any.
    pub fn acting_seat(&self) -> Option<Seat> {
        match self.phase {
            Phase::Charleston => Some(self.charleston_seat),
            Phase::Play => match &self.pending_claim {
                Some(pc) => Some(pc.seat),
                None => Some(self.turn),
            },
            Phase::GameOver => None,
        }
    }

    // Concealed plus exposed tile count. A seat at rest holds 13; a seat
    // that just drew or claimed holds 14 and owes a discard.
    pub fn tile_total(&self, seat: Seat) -> usize {
        let melded: usize = self.exposures[seat].iter().map(|m| m.tiles.len()).sum();
        self.hands[seat].len() + melded
    }

    pub fn needs_draw(&self, seat: Seat) -> bool {
        self.phase == Phase::Play
            && self.pending_claim.is_none()
            && self.turn == seat
            && self.tile_total(seat) == HAND_SIZE
    }

    pub fn needs_discard(&self, seat: Seat) -> bool {
        self.phase == Phase::Play
            && self.pending_claim.is_none()
            && self.turn == seat
            && self.tile_total(seat) == FULL_HAND
    }

    // The claim currently offered, if the given seat is the one eligible.
    pub fn claim_offer(&self, seat: Seat) -> Option<PendingClaim> {
        match self.pending_claim {
            Some(pc) if pc.seat == seat => Some(pc),
            _ => None,
        }
    }

    pub fn find_in_hand(&self, seat: Seat, id: TileId) -> Option<usize> {
        self.hands[seat].iter().position(|t| t.id == id)
    }

    // Every tile id currently tracked anywhere (wall, hands, discards,
    // exposures), sorted. Used to audit the 152-tile conservation invariant.
    pub fn collect_ids(&self) -> Vec<TileId> {
        let mut ids: Vec<TileId> = self.wall.iter().map(|t| t.id).collect();
        for s in 0..SEAT {
            ids.extend(self.hands[s].iter().map(|t| t.id));
            ids.extend(self.discards[s].iter().map(|t| t.id));
            for m in &self.exposures[s] {
                ids.extend(m.tiles.iter().map(|t| t.id));
            }
        }
        ids.sort_unstable();
        ids
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "phase: {:?}, turn: {}, wall: {}, winner: {:?}",
            self.phase,
            self.turn,
            self.wall.len(),
            self.winner,
        )?;
        if self.phase == Phase::Charleston {
            writeln!(
                f,
                "charleston: round {} ({:?}), passer {}",
                self.charleston_round,
                CharlestonDirection::from_round(self.charleston_round),
                self.charleston_seat,
            )?;
        }
        if let Some(pc) = &self.pending_claim {
            writeln!(
                f,
                "pending: {} offered to seat {} (discarded by {})",
                pc.claim, pc.seat, pc.discarder,
            )?;
        }
        for s in 0..SEAT {
            writeln!(
                f,
                "seat {}: hand {} discards {} melds {}",
                s,
                vec_to_string(&self.hands[s]),
                vec_to_string(&self.discards[s]),
                vec_to_string(&self.exposures[s]),
            )?;
        }
        Ok(())
    }
}
