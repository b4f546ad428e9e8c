use super::wall::create_wall;
use crate::hand::{standard_card, validate_hand, HandDefinition};
use crate::model::*;

// The pure transition function. Every operation consumes one snapshot and
// returns a new, fully formed one; inapplicable actions return the input
// unchanged so stale or racing UI input is silently absorbed instead of
// crashing the game.

// Fresh shuffled deal: 13 tiles to each seat in fixed order, charleston up
// first. The seed is the only randomness entering the core.
pub fn deal(seed: u64) -> GameState {
    let mut wall = create_wall(seed);
    let mut hands: [Vec<Tile>; SEAT] = Default::default();
    for s in 0..SEAT {
        for _ in 0..HAND_SIZE {
            if let Some(t) = wall.pop() {
                hands[s].push(t);
            }
        }
    }
    GameState {
        phase: Phase::Charleston,
        wall,
        hands,
        discards: Default::default(),
        exposures: Default::default(),
        turn: 0,
        charleston_round: 0,
        charleston_seat: 0,
        charleston_selected: vec![],
        pending_claim: None,
        last_drawn: None,
        winner: None,
    }
}

pub fn apply(state: &GameState, action: &Action) -> GameState {
    let card = standard_card();
    match action {
        Action::Deal { seed } => deal(*seed),
        Action::SelectCharleston { tile } => on_select_charleston(state, *tile),
        Action::PassCharleston { tiles } => on_pass_charleston(state, tiles),
        Action::Draw => on_draw(state),
        Action::Discard { tile } => on_discard(state, *tile, &card),
        Action::Claim { claim } => on_claim(state, *claim, &card),
        Action::SkipClaim => on_skip_claim(state),
        Action::ReorderHand { tile, before } => on_reorder_hand(state, *tile, *before),
    }
}

// Toggle a tile in the human selection scratch. Selecting a fourth tile
// evicts the oldest selection.
fn on_select_charleston(state: &GameState, id: TileId) -> GameState {
    if state.phase != Phase::Charleston || state.charleston_seat != HUMAN_SEAT {
        return state.clone();
    }
    let mut next = state.clone();
    if let Some(i) = next.charleston_selected.iter().position(|&x| x == id) {
        next.charleston_selected.remove(i);
    } else {
        next.charleston_selected.push(id);
        while next.charleston_selected.len() > CHARLESTON_TILES {
            next.charleston_selected.remove(0);
        }
    }
    next
}

fn on_pass_charleston(state: &GameState, ids: &[TileId]) -> GameState {
    if state.phase != Phase::Charleston || ids.len() != CHARLESTON_TILES {
        return state.clone();
    }
    let passer = state.charleston_seat;

    // exactly 3 distinct tiles, all present in the passer's hand
    let mut indices = vec![];
    for &id in ids {
        match state.find_in_hand(passer, id) {
            Some(i) if !indices.contains(&i) => indices.push(i),
            _ => return state.clone(),
        }
    }

    let direction = CharlestonDirection::from_round(state.charleston_round);
    let recipient = (passer + direction.offset()) % SEAT;

    let mut next = state.clone();
    indices.sort_unstable();
    for &i in indices.iter().rev() {
        let t = next.hands[passer].remove(i);
        next.hands[recipient].push(t);
    }
    next.charleston_selected.clear();

    next.charleston_seat += 1;
    if next.charleston_seat == SEAT {
        next.charleston_seat = 0;
        next.charleston_round += 1;
    }
    if next.charleston_round == CHARLESTON_ROUNDS {
        // seat 0 enters play holding 13 and still owes the first draw
        next.phase = Phase::Play;
        next.turn = 0;
    }
    next
}

fn on_draw(state: &GameState) -> GameState {
    if state.phase != Phase::Play || state.pending_claim.is_some() || state.wall.is_empty() {
        return state.clone();
    }
    let mut next = state.clone();
    let drawn = match next.wall.pop() {
        Some(t) => t,
        None => return state.clone(),
    };
    next.hands[next.turn].push(drawn);
    next.last_drawn = Some(drawn);
    next
}

fn on_discard(state: &GameState, id: TileId, card: &[HandDefinition]) -> GameState {
    if state.phase != Phase::Play || state.pending_claim.is_some() {
        return state.clone();
    }
    let i = match state.find_in_hand(state.turn, id) {
        Some(i) => i,
        None => return state.clone(), // includes "not your turn"
    };

    let mut next = state.clone();
    let discarder = next.turn;
    let tile = next.hands[discarder].remove(i);
    next.discards[discarder].push(tile);
    next.last_drawn = None;

    next.pending_claim = scan_claims(&next.hands, discarder, tile, card);
    if next.pending_claim.is_none() {
        next.turn = (discarder + 1) % SEAT;
    }
    next
}

// Scan the other three seats, starting from the discarder's left, for the
// best claim the discard could open. Mahjong takes absolute priority over
// pung/kong; among pung/kong the first eligible seat in scan order wins
// (kong checked before pung within a seat).
fn scan_claims(
    hands: &[Vec<Tile>; SEAT],
    discarder: Seat,
    tile: Tile,
    card: &[HandDefinition],
) -> Option<PendingClaim> {
    let order = claim_order(discarder);

    for &s in &order {
        let mut with_tile = hands[s].clone();
        with_tile.push(tile);
        if validate_hand(&with_tile, card) {
            return Some(PendingClaim {
                seat: s,
                discarder,
                claim: ClaimType::Mahjong,
                tile,
            });
        }
    }

    for &s in &order {
        let n = hands[s].iter().filter(|t| t.matches(&tile)).count();
        let claim = if n >= 3 {
            ClaimType::Kong
        } else if n >= 2 {
            ClaimType::Pung
        } else {
            continue;
        };
        return Some(PendingClaim {
            seat: s,
            discarder,
            claim,
            tile,
        });
    }

    None
}

#[inline]
fn claim_order(discarder: Seat) -> [Seat; SEAT - 1] {
    [
        (discarder + 1) % SEAT,
        (discarder + 2) % SEAT,
        (discarder + 3) % SEAT,
    ]
}

// Recheck that the offered claim actually holds against the claimant's
// current hand; the offer was computed when the discard landed.
fn can_claim(state: &GameState, pc: &PendingClaim, card: &[HandDefinition]) -> bool {
    let hand = &state.hands[pc.seat];
    match pc.claim {
        ClaimType::Mahjong => {
            let mut with_tile = hand.clone();
            with_tile.push(pc.tile);
            validate_hand(&with_tile, card)
        }
        ClaimType::Kong => hand.iter().filter(|t| t.matches(&pc.tile)).count() >= 3,
        ClaimType::Pung => hand.iter().filter(|t| t.matches(&pc.tile)).count() >= 2,
    }
}

fn on_claim(state: &GameState, claim: ClaimType, card: &[HandDefinition]) -> GameState {
    let pc = match state.pending_claim {
        Some(pc) => pc,
        None => return state.clone(),
    };
    if claim != pc.claim || !can_claim(state, &pc, card) {
        return state.clone();
    }

    let mut next = state.clone();
    let claimed = match next.discards[pc.discarder].pop() {
        Some(t) => t,
        None => return state.clone(),
    };
    next.pending_claim = None;
    next.last_drawn = None;
    next.turn = pc.seat;

    if claim == ClaimType::Mahjong {
        next.hands[pc.seat].push(claimed);
        next.phase = Phase::GameOver;
        next.winner = Some(pc.seat);
        return next;
    }

    // pung consumes 2 matching tiles from the hand, kong 3; jokers in hand
    // count as matching under the pairwise model
    let needed = if claim == ClaimType::Pung { 2 } else { 3 };
    let mut meld_tiles = vec![];
    let hand = &mut next.hands[pc.seat];
    let mut i = 0;
    while i < hand.len() && meld_tiles.len() < needed {
        if hand[i].matches(&claimed) {
            meld_tiles.push(hand.remove(i));
        } else {
            i += 1;
        }
    }
    meld_tiles.push(claimed);

    let meld_type = if claim == ClaimType::Pung {
        MeldType::Pung
    } else {
        MeldType::Kong
    };
    next.exposures[pc.seat].push(Meld {
        meld_type,
        tiles: meld_tiles,
        from_seat: pc.discarder,
    });
    // the claimant discards next without drawing
    next
}

// Pass the offer to the next seat in priority order; once the last
// claimant declines the claim is abandoned and the turn moves to the seat
// after the discarder. The turn holder is untouched while the offer is
// still circulating.
fn on_skip_claim(state: &GameState) -> GameState {
    let pc = match state.pending_claim {
        Some(pc) => pc,
        None => return state.clone(),
    };
    let order = claim_order(pc.discarder);
    let idx = match order.iter().position(|&s| s == pc.seat) {
        Some(i) => i,
        None => return state.clone(),
    };

    let mut next = state.clone();
    if idx == order.len() - 1 {
        next.pending_claim = None;
        next.turn = order[0];
    } else {
        next.pending_claim = Some(PendingClaim {
            seat: order[idx + 1],
            ..pc
        });
    }
    next
}

// Move one human tile to immediately before the target tile, or to the end
// when no target is given. Affects nothing but hand order.
fn on_reorder_hand(state: &GameState, id: TileId, before: Option<TileId>) -> GameState {
    let from = match state.find_in_hand(HUMAN_SEAT, id) {
        Some(i) => i,
        None => return state.clone(),
    };
    let mut next = state.clone();
    let hand = &mut next.hands[HUMAN_SEAT];
    let tile = hand.remove(from);
    let to = before
        .and_then(|b| hand.iter().position(|t| t.id == b))
        .unwrap_or_else(|| hand.len());
    hand.insert(to, tile);
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_conserved(state: &GameState) {
        let ids = state.collect_ids();
        assert_eq!(ids.len(), DECK_SIZE);
        let mut unique = ids.clone();
        unique.dedup();
        assert_eq!(unique.len(), DECK_SIZE);
    }

    // Play-phase state with crafted hands and wall; ids are disjoint by
    // construction.
    fn play_state(hands_exprs: [&str; SEAT], wall_expr: &str) -> GameState {
        let mut id = 1000;
        let mut mk = |expr: &str| {
            let mut v = vec![];
            for sym in expr.split_whitespace() {
                id += 1;
                v.push(Tile::new(id, TileKind::from_symbol(sym).unwrap()));
            }
            v
        };
        let hands = [
            mk(hands_exprs[0]),
            mk(hands_exprs[1]),
            mk(hands_exprs[2]),
            mk(hands_exprs[3]),
        ];
        let wall = mk(wall_expr);
        GameState {
            phase: Phase::Play,
            wall,
            hands,
            discards: Default::default(),
            exposures: Default::default(),
            turn: 0,
            charleston_round: CHARLESTON_ROUNDS,
            charleston_seat: 0,
            charleston_selected: vec![],
            pending_claim: None,
            last_drawn: None,
            winner: None,
        }
    }

    const JUNK_A: &str = "1d 2d 3d 4d 5d 6d 7d 8d 9d 1b 2b 3b 4b";
    const JUNK_B: &str = "5b 6b 7b 8b 9b 1c 2c 3c 4c 5c 6c 7c 8c";

    #[test]
    fn test_deal() {
        let state = deal(1);
        assert_eq!(state.phase, Phase::Charleston);
        assert_eq!(state.charleston_round, 0);
        assert_eq!(state.charleston_seat, 0);
        for s in 0..SEAT {
            assert_eq!(state.hands[s].len(), HAND_SIZE);
        }
        assert_eq!(state.wall.len(), DECK_SIZE - SEAT * HAND_SIZE);
        assert_conserved(&state);
    }

    #[test]
    fn test_charleston_select_toggle_and_cap() {
        let state = deal(2);
        let ids: Vec<TileId> = state.hands[HUMAN_SEAT].iter().map(|t| t.id).collect();

        let mut s = apply(&state, &Action::select_charleston(ids[0]));
        s = apply(&s, &Action::select_charleston(ids[1]));
        s = apply(&s, &Action::select_charleston(ids[2]));
        assert_eq!(s.charleston_selected, vec![ids[0], ids[1], ids[2]]);

        // fourth selection evicts the oldest
        s = apply(&s, &Action::select_charleston(ids[3]));
        assert_eq!(s.charleston_selected, vec![ids[1], ids[2], ids[3]]);

        // re-toggling removes
        s = apply(&s, &Action::select_charleston(ids[2]));
        assert_eq!(s.charleston_selected, vec![ids[1], ids[3]]);
    }

    #[test]
    fn test_charleston_pass_moves_left_and_conserves() {
        let state = deal(3);
        let passed: Vec<TileId> = state.hands[0][..3].iter().map(|t| t.id).collect();
        let next = apply(&state, &Action::pass_charleston(passed.clone()));

        assert_eq!(next.hands[0].len(), HAND_SIZE - 3);
        assert_eq!(next.hands[1].len(), HAND_SIZE + 3); // round 0 passes left
        for &id in &passed {
            assert!(next.hands[1].iter().any(|t| t.id == id));
        }
        let total: usize = next.hands.iter().map(|h| h.len()).sum();
        assert_eq!(total, SEAT * HAND_SIZE);
        assert_eq!(next.charleston_seat, 1);
        assert_conserved(&next);

        // wrong count and unknown ids are no-ops
        assert_eq!(apply(&next, &Action::pass_charleston(vec![1, 2])), next);
        assert_eq!(
            apply(&next, &Action::pass_charleston(vec![900000, 900001, 900002])),
            next
        );
    }

    #[test]
    fn test_charleston_full_sequence() {
        let mut state = deal(4);
        for pass in 0..SEAT * CHARLESTON_ROUNDS {
            let passer = state.charleston_seat;
            let round = state.charleston_round;
            let ids: Vec<TileId> = state.hands[passer][..3].iter().map(|t| t.id).collect();
            state = apply(&state, &Action::pass_charleston(ids.clone()));

            // direction per round: left, across, right
            let recipient = (passer + CharlestonDirection::from_round(round).offset()) % SEAT;
            for &id in &ids {
                assert!(
                    state.hands[recipient].iter().any(|t| t.id == id),
                    "pass {} went astray",
                    pass
                );
            }
        }
        assert_eq!(state.phase, Phase::Play);
        assert_eq!(state.turn, 0);
        assert_eq!(state.charleston_round, CHARLESTON_ROUNDS);
        for s in 0..SEAT {
            assert_eq!(state.hands[s].len(), HAND_SIZE);
        }
        // the first draw is still owed
        assert!(state.needs_draw(0));
        assert_conserved(&state);
    }

    #[test]
    fn test_draw_then_discard_advances_turn() {
        let state = play_state([JUNK_A, JUNK_B, "we we ws ws ww ww wn wn dr dr dg dg dw", "f1 f2 f3 f4 s1 s2 s3 s4 j 9c 9c 1d 2d"], "5c");
        let drawn_id = state.wall.last().unwrap().id;

        let s = apply(&state, &Action::Draw);
        assert_eq!(s.hands[0].len(), FULL_HAND);
        assert_eq!(s.last_drawn.map(|t| t.id), Some(drawn_id));
        assert!(s.needs_discard(0));

        // 5c matches nothing in the other junk hands except seat 3's joker,
        // which alone is not enough for a pung
        let s2 = apply(&s, &Action::discard(drawn_id));
        assert_eq!(s2.turn, 1);
        assert!(s2.pending_claim.is_none());
        assert_eq!(s2.last_drawn, None);
        assert_eq!(s2.discards[0].last().map(|t| t.id), Some(drawn_id));
        assert_conserved(&s2);
    }

    #[test]
    fn test_mahjong_priority_over_pung() {
        // seat 1 could pung the discarded east wind, seat 2 completes a
        // mahjong with it; the offer must be mahjong to seat 2
        let state = play_state(
            [
                "1d 2d 3d 4d 5d 6d 7d 8d 9d 1b 2b 3b we",
                "we we 5b 6b 7b 8b 9b 1c 2c 3c 4c dg dr",
                "1b 1b 1b 2b 2b 2b 3b 3b 3b 4b 4b 4b we",
                "f1 f2 f3 f4 s1 s2 s3 s4 9c 9c 8c 7c 6c",
            ],
            "",
        );
        let we_id = state.hands[0].last().unwrap().id;
        let s = apply(&state, &Action::discard(we_id));

        let pc = s.pending_claim.expect("claim should open");
        assert_eq!(pc.claim, ClaimType::Mahjong);
        assert_eq!(pc.seat, 2);
        assert_eq!(pc.discarder, 0);
        assert_eq!(pc.tile.id, we_id);
        // turn holder unchanged while the claim is open
        assert_eq!(s.turn, 0);

        let s2 = apply(&s, &Action::claim(ClaimType::Mahjong));
        assert_eq!(s2.phase, Phase::GameOver);
        assert_eq!(s2.winner, Some(2));
        assert_eq!(s2.hands[2].len(), FULL_HAND);
        assert!(s2.discards[0].is_empty());
        assert_conserved(&s2);

        // terminal: gameplay actions are dead, a new deal is not
        assert_eq!(apply(&s2, &Action::Draw), s2);
        assert_eq!(apply(&s2, &Action::discard(we_id)), s2);
        assert_eq!(apply(&s2, &Action::deal(9)).phase, Phase::Charleston);
    }

    #[test]
    fn test_first_eligible_seat_wins_pung_kong_scan() {
        // seat 1 holds two matching (pung), seat 2 holds three (kong);
        // the scan stops at the first eligible seat
        let state = play_state(
            [
                "dr 1d 2d 3d 4d 5d 6d 7d 8d 9d 1b 2b 3b",
                "dr dr 5b 6b 7b 8b 9b 1c 2c 3c 4c f1 f2",
                "dr dr dr 5c 6c 7c 8c 9c s1 s2 s3 s4 f3",
                "we ws ww wn we ws ww wn dg dg dw dw f4",
            ],
            "",
        );
        let dr_id = state.hands[0][0].id;
        let s = apply(&state, &Action::discard(dr_id));
        let pc = s.pending_claim.expect("claim should open");
        assert_eq!(pc.seat, 1);
        assert_eq!(pc.claim, ClaimType::Pung);
    }

    #[test]
    fn test_pung_claim_builds_exposure() {
        let state = play_state(
            [
                "dg 1d 2d 3d 4d 5d 6d 7d 8d 9d 1b 2b 3b",
                "dg dg 5b 6b 7b 8b 9b 1c 2c 3c 4c f1 f2",
                JUNK_B,
                "we ws ww wn we ws ww wn s1 s2 s3 s4 f4",
            ],
            "",
        );
        let dg_id = state.hands[0][0].id;
        let s = apply(&state, &Action::discard(dg_id));
        assert_eq!(s.pending_claim.map(|pc| (pc.seat, pc.claim)), Some((1, ClaimType::Pung)));

        let s2 = apply(&s, &Action::claim(ClaimType::Pung));
        assert!(s2.pending_claim.is_none());
        assert_eq!(s2.turn, 1);
        assert_eq!(s2.hands[1].len(), HAND_SIZE - 2);
        let meld = &s2.exposures[1][0];
        assert_eq!(meld.meld_type, MeldType::Pung);
        assert_eq!(meld.tiles.len(), 3);
        assert_eq!(meld.from_seat, 0);
        assert!(s2.discards[0].is_empty());
        // the claimant owes a discard, not a draw
        assert!(s2.needs_discard(1));
        assert!(!s2.needs_draw(1));
        assert_conserved(&s2);
    }

    #[test]
    fn test_skip_claim_walks_priority_order() {
        let state = play_state(
            [
                "dw 1d 2d 3d 4d 5d 6d 7d 8d 9d 1b 2b 3b",
                "dw dw 5b 6b 7b 8b 9b 1c 2c 3c 4c f1 f2",
                JUNK_B,
                "we ws ww wn we ws ww wn s1 s2 s3 s4 f4",
            ],
            "",
        );
        let dw_id = state.hands[0][0].id;
        let s = apply(&state, &Action::discard(dw_id));
        assert_eq!(s.pending_claim.map(|pc| pc.seat), Some(1));

        // the offer circulates without moving the turn holder
        let s2 = apply(&s, &Action::SkipClaim);
        assert_eq!(s2.pending_claim.map(|pc| pc.seat), Some(2));
        assert_eq!(s2.turn, 0);

        // seat 2 cannot actually pung; the stale offer dies on recheck
        assert_eq!(apply(&s2, &Action::claim(ClaimType::Pung)), s2);

        let s3 = apply(&s2, &Action::SkipClaim);
        assert_eq!(s3.pending_claim.map(|pc| pc.seat), Some(3));
        assert_eq!(s3.turn, 0);

        // last claimant declines: claim abandoned, turn moves past discarder
        let s4 = apply(&s3, &Action::SkipClaim);
        assert!(s4.pending_claim.is_none());
        assert_eq!(s4.turn, 1);
        // the discard stays in the pile
        assert_eq!(s4.discards[0].len(), 1);
    }

    #[test]
    fn test_jokers_satisfy_pairwise_claims() {
        // two jokers are enough for a pung of anything under the pairwise
        // matching model, even a flower
        let state = play_state(
            [
                "f1 1d 2d 3d 4d 5d 6d 7d 8d 9d 1b 2b 3b",
                "j j 5b 6b 7b 8b 9b 1c 2c 3c 4c dg dr",
                JUNK_B,
                "we ws ww wn we ws ww wn s1 s2 s3 s4 f4",
            ],
            "",
        );
        let f1_id = state.hands[0][0].id;
        let s = apply(&state, &Action::discard(f1_id));
        assert_eq!(s.pending_claim.map(|pc| (pc.seat, pc.claim)), Some((1, ClaimType::Pung)));

        let s2 = apply(&s, &Action::claim(ClaimType::Pung));
        let meld = &s2.exposures[1][0];
        assert_eq!(meld.tiles.iter().filter(|t| t.is_joker()).count(), 2);
        assert!(meld.tiles.iter().any(|t| t.id == f1_id));
    }

    #[test]
    fn test_noops_return_input_unchanged() {
        let state = play_state(
            [
                "dw 1d 2d 3d 4d 5d 6d 7d 8d 9d 1b 2b 3b",
                "dw dw 5b 6b 7b 8b 9b 1c 2c 3c 4c f1 f2",
                JUNK_B,
                "we ws ww wn we ws ww wn s1 s2 s3 s4 f4",
            ],
            "5c 6c",
        );
        // discard by a seat that is not the turn holder
        let foreign_id = state.hands[1][0].id;
        assert_eq!(apply(&state, &Action::discard(foreign_id)), state);
        // unknown tile id
        assert_eq!(apply(&state, &Action::discard(424242)), state);
        // claim/skip with nothing pending
        assert_eq!(apply(&state, &Action::claim(ClaimType::Pung)), state);
        assert_eq!(apply(&state, &Action::SkipClaim), state);
        // charleston actions are dead in the play phase
        assert_eq!(apply(&state, &Action::select_charleston(foreign_id)), state);

        // with a claim pending: draw and discard are both frozen
        let dw_id = state.hands[0][0].id;
        let pending = apply(&state, &Action::discard(dw_id));
        assert!(pending.pending_claim.is_some());
        assert_eq!(apply(&pending, &Action::Draw), pending);
        let own_id = pending.hands[0][0].id;
        assert_eq!(apply(&pending, &Action::discard(own_id)), pending);
        // offered pung, claiming kong: type mismatch is absorbed
        assert_eq!(apply(&pending, &Action::claim(ClaimType::Kong)), pending);
    }

    #[test]
    fn test_draw_on_empty_wall_is_noop() {
        let state = play_state([JUNK_A, JUNK_B, "we ws ww wn dr dg dw f1 f2 f3 f4 s1 s2", "9c 9c 1d 2d 3d 4d 5d 6d 7d 8d 9d 1b 2b"], "");
        assert_eq!(apply(&state, &Action::Draw), state);
    }

    #[test]
    fn test_reorder_hand() {
        let state = deal(5);
        let hand: Vec<TileId> = state.hands[HUMAN_SEAT].iter().map(|t| t.id).collect();

        // move the first tile to immediately before the fourth
        let s = apply(&state, &Action::reorder_hand(hand[0], Some(hand[3])));
        let got: Vec<TileId> = s.hands[HUMAN_SEAT].iter().map(|t| t.id).collect();
        assert_eq!(got[..4], [hand[1], hand[2], hand[0], hand[3]]);

        // no target: to the end
        let s2 = apply(&state, &Action::reorder_hand(hand[0], None));
        assert_eq!(s2.hands[HUMAN_SEAT].last().map(|t| t.id), Some(hand[0]));

        // unknown target behaves like "to the end"; unknown tile is a no-op
        let s3 = apply(&state, &Action::reorder_hand(hand[0], Some(999999)));
        assert_eq!(s3.hands[HUMAN_SEAT].last().map(|t| t.id), Some(hand[0]));
        assert_eq!(apply(&state, &Action::reorder_hand(999999, None)), state);

        // nothing but hand order changes
        assert_eq!(s.wall, state.wall);
        assert_eq!(s.phase, state.phase);
    }
}
