use rand::prelude::*;

use super::*;

pub struct RandomBuilder;

impl ActorBuilder for RandomBuilder {
    fn get_default_config(&self) -> Config {
        Config {
            name: "Random".to_string(),
            args: vec![Arg::int("seed", 0)],
        }
    }

    fn create(&self, config: Config) -> Box<dyn Actor> {
        Box::new(Random::from_config(config))
    }
}

// Baseline bot: random charleston passes and discards, never claims
// anything but a certain mahjong. Useful as an opponent floor in selfplay.
#[derive(Clone)]
pub struct Random {
    config: Config,
    rng: rand::rngs::StdRng,
}

impl Random {
    pub fn from_config(config: Config) -> Self {
        let seed = config.args[0].value.as_int() as u64;
        Random {
            config,
            rng: rand::SeedableRng::seed_from_u64(seed),
        }
    }
}

impl Actor for Random {
    fn select_action(&mut self, state: &GameState, seat: Seat) -> Option<Action> {
        match state.phase {
            Phase::Charleston => {
                if state.charleston_seat != seat {
                    return None;
                }
                let mut ids: Vec<TileId> = state.hands[seat].iter().map(|t| t.id).collect();
                ids.shuffle(&mut self.rng);
                ids.truncate(CHARLESTON_TILES);
                Some(Action::pass_charleston(ids))
            }
            Phase::Play => {
                if let Some(pc) = state.claim_offer(seat) {
                    // mahjong offers are pre-validated by the claim scan
                    return Some(if pc.claim == ClaimType::Mahjong {
                        Action::claim(ClaimType::Mahjong)
                    } else {
                        Action::SkipClaim
                    });
                }
                if state.needs_draw(seat) {
                    return Some(Action::Draw);
                }
                if state.needs_discard(seat) {
                    let hand = &state.hands[seat];
                    let i = self.rng.gen_range(0..hand.len());
                    return Some(Action::discard(hand[i].id));
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
