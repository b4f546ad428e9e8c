use super::*;
use crate::hand::{standard_card, validate_hand};

pub struct HeuristicBuilder;

impl ActorBuilder for HeuristicBuilder {
    fn get_default_config(&self) -> Config {
        Config {
            name: "Heuristic".to_string(),
            args: vec![],
        }
    }

    fn create(&self, config: Config) -> Box<dyn Actor> {
        Box::new(Heuristic::from_config(config))
    }
}

// Deterministic frequency bot: keeps the most duplicated kinds, donates
// and discards from the least duplicated ones, and takes every claim it
// actually qualifies for.
#[derive(Clone)]
pub struct Heuristic {
    config: Config,
}

impl Heuristic {
    pub fn from_config(config: Config) -> Self {
        Heuristic { config }
    }
}

impl Actor for Heuristic {
    fn select_action(&mut self, state: &GameState, seat: Seat) -> Option<Action> {
        match state.phase {
            Phase::Charleston => {
                if state.charleston_seat != seat {
                    return None;
                }
                let tiles = charleston_pass(state, seat);
                if tiles.len() == CHARLESTON_TILES {
                    Some(Action::pass_charleston(tiles))
                } else {
                    None
                }
            }
            Phase::Play => {
                if state.claim_offer(seat).is_some() {
                    return Some(match claim_decision(state, seat) {
                        Some(claim) => Action::claim(claim),
                        None => Action::SkipClaim,
                    });
                }
                if state.needs_draw(seat) {
                    return Some(Action::Draw);
                }
                if state.needs_discard(seat) {
                    return discard_choice(state, seat).map(Action::discard);
                }
                None
            }
            Phase::GameOver => None,
        }
    }

    fn get_config(&self) -> &Config {
        &self.config
    }
}

// Donate from the smallest kind groups first. Groups are formed in hand
// order and the sort is stable, so ties also resolve by hand order.
pub fn charleston_pass(state: &GameState, seat: Seat) -> Vec<TileId> {
    let mut groups: Vec<(TileKind, Vec<TileId>)> = vec![];
    for t in &state.hands[seat] {
        match groups.iter_mut().find(|(k, _)| *k == t.key()) {
            Some((_, ids)) => ids.push(t.id),
            None => groups.push((t.key(), vec![t.id])),
        }
    }
    groups.sort_by_key(|(_, ids)| ids.len());
    groups
        .iter()
        .flat_map(|(_, ids)| ids.iter().cloned())
        .take(CHARLESTON_TILES)
        .collect()
}

// Accept a claim offer only when it genuinely holds for the hand.
pub fn claim_decision(state: &GameState, seat: Seat) -> Option<ClaimType> {
    let pc = state.claim_offer(seat)?;
    let hand = &state.hands[seat];
    let matching = hand.iter().filter(|t| t.matches(&pc.tile)).count();
    match pc.claim {
        ClaimType::Mahjong => {
            let mut with_tile = hand.clone();
            with_tile.push(pc.tile);
            if validate_hand(&with_tile, &standard_card()) {
                Some(ClaimType::Mahjong)
            } else {
                None
            }
        }
        ClaimType::Kong if matching >= 3 => Some(ClaimType::Kong),
        ClaimType::Pung if matching >= 2 => Some(ClaimType::Pung),
        _ => None,
    }
}

// Discard the least duplicated tile, earliest in hand order on ties.
pub fn discard_choice(state: &GameState, seat: Seat) -> Option<TileId> {
    let hand = &state.hands[seat];
    let mut best: Option<(usize, TileId)> = None;
    for t in hand {
        let c = hand.iter().filter(|x| x.key() == t.key()).count();
        match best {
            Some((bc, _)) if bc <= c => {}
            _ => best = Some((c, t.id)),
        }
    }
    best.map(|(_, id)| id)
}
