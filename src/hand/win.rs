use super::card::HandDefinition;
use crate::model::*;

// [Winning hand judgement]
//
// Exact-cover search: reduce the 14 tiles to per-kind counts plus a joker
// budget, then assign catalog meld slots in order. For each slot every
// distinct kind with tiles left is tried (consuming min(available, needed)
// real tiles, jokers covering the shortfall), plus an all-joker branch.
// A definition matches iff some assignment consumes every real tile and
// every joker exactly.

// True iff the 14 tiles satisfy at least one catalog shape.
pub fn validate_hand(tiles: &[Tile], card: &[HandDefinition]) -> bool {
    if tiles.len() != FULL_HAND {
        return false;
    }
    card.iter().any(|def| match_definition(tiles, def))
}

// Check a single catalog shape. Definitions whose meld counts do not sum
// to 14 can never match.
pub fn match_definition(tiles: &[Tile], def: &HandDefinition) -> bool {
    if tiles.len() != FULL_HAND || def.tile_sum() != FULL_HAND {
        return false;
    }
    let (mut counts, jokers) = count_by_kind(tiles);
    match_melds(&mut counts, jokers, def, 0)
}

fn match_melds(
    counts: &mut Vec<(TileKind, usize)>,
    jokers: usize,
    def: &HandDefinition,
    slot: usize,
) -> bool {
    if slot >= def.melds.len() {
        return jokers == 0 && counts.iter().all(|&(_, c)| c == 0);
    }
    let need = def.melds[slot].count;

    for i in 0..counts.len() {
        let c = counts[i].1;
        if c == 0 {
            continue;
        }
        let used = c.min(need);
        let joker_used = need - used;
        if joker_used > jokers {
            continue;
        }

        // consume, recurse, restore; nothing leaks out of a failed branch
        counts[i].1 -= used;
        let ok = match_melds(counts, jokers - joker_used, def, slot + 1);
        counts[i].1 += used;
        if ok {
            return true;
        }
    }

    // a meld made of nothing but jokers
    if need <= jokers && match_melds(counts, jokers - need, def, slot + 1) {
        return true;
    }

    false
}

// Per-kind counts (hand order preserved) and the joker count.
fn count_by_kind(tiles: &[Tile]) -> (Vec<(TileKind, usize)>, usize) {
    let mut counts: Vec<(TileKind, usize)> = vec![];
    let mut jokers = 0;
    for t in tiles {
        if t.is_joker() {
            jokers += 1;
            continue;
        }
        match counts.iter_mut().find(|(k, _)| *k == t.key()) {
            Some((_, c)) => *c += 1,
            None => counts.push((t.key(), 1)),
        }
    }
    (counts, jokers)
}

#[cfg(test)]
use super::card::{standard_card, MeldSpec};

#[test]
fn test_four_pungs_and_a_pair() {
    let card = standard_card();
    let tiles =
        tiles_from_expr("1d 1d 1d 2d 2d 2d 3d 3d 3d 4d 4d 4d we we").unwrap();
    assert!(validate_hand(&tiles, &card));
}

#[test]
fn test_jokers_fill_meld_shortfalls() {
    let card = standard_card();
    // two real tiles swapped for jokers, in different melds
    let tiles = tiles_from_expr("1d 1d j 2d 2d 2d 3d 3d j 4d 4d 4d we we").unwrap();
    assert!(validate_hand(&tiles, &card));
}

#[test]
fn test_all_joker_meld() {
    let card = standard_card();
    // the fourth pung is made entirely of jokers
    let tiles = tiles_from_expr("1d 1d 1d 2d 2d 2d 3d 3d 3d j j j we we").unwrap();
    assert!(validate_hand(&tiles, &card));
}

#[test]
fn test_kong_shapes() {
    let card = standard_card();
    let tiles = tiles_from_expr("9b 9b 9b 9b dr dr dr dr ww ww ww f1 f1 f1").unwrap();
    assert!(validate_hand(&tiles, &card)); // Two Kongs and Two Pungs
    let tiles = tiles_from_expr("1c 1c 1c 1c 2c 2c 2c 2c 3c 3c 3c 3c dg dg").unwrap();
    assert!(validate_hand(&tiles, &card)); // Three Kongs and a Pair
}

#[test]
fn test_backtracks_past_greedy_dead_end() {
    let card = standard_card();
    // only "One Kong, Two Pungs, and Two Pairs" fits (kong 1d, pungs 3d/we,
    // pairs 2d/dr); the four-pungs shape is explored first and dead-ends
    // after consuming tiles, so a broken restore would poison this hand
    let tiles = tiles_from_expr("1d 1d 1d 1d 2d 2d 3d 3d 3d we we we dr dr").unwrap();
    assert!(validate_hand(&tiles, &card));
}

#[test]
fn test_rejects_ungroupable_tiles() {
    let card = standard_card();
    let tiles = tiles_from_expr("1d 1d 1d 2d 2d 2d 3d 3d 4d 5d 6d 7d we we").unwrap();
    assert!(!validate_hand(&tiles, &card));
}

#[test]
fn test_rejects_wrong_length() {
    let card = standard_card();
    let tiles = tiles_from_expr("1d 1d 1d 2d 2d 2d 3d 3d 3d 4d 4d 4d we").unwrap();
    assert!(!validate_hand(&tiles, &card)); // 13 tiles
    let tiles = tiles_from_expr("1d 1d 1d 2d 2d 2d 3d 3d 3d 4d 4d 4d we we we").unwrap();
    assert!(!validate_hand(&tiles, &card)); // 15 tiles
}

#[test]
fn test_sum_filter_rejects_off_card_definition() {
    // a 13-tile shape can never match a 14-tile hand
    let def = HandDefinition::new(
        "Two Kongs, One Pung, and a Pair",
        vec![
            MeldSpec::kong(),
            MeldSpec::kong(),
            MeldSpec::pung(),
            MeldSpec::pair(),
        ],
    );
    let tiles = tiles_from_expr("1d 1d 1d 1d 2d 2d 2d 2d 3d 3d 3d we we j").unwrap();
    assert!(!match_definition(&tiles, &def));
}

#[test]
fn test_joker_budget_is_per_hand_not_pairwise() {
    let card = standard_card();
    // Pairwise matching (Tile::matches) would happily call every group
    // here completable via the single joker, but the matcher spends the
    // joker once: 1d and 2d both sit at two tiles, only one pung can be
    // filled, so no shape matches.
    let tiles = tiles_from_expr("1d 1d 2d 2d j 3d 3d 3d 4d 4d 4d 5d 5d 5d").unwrap();
    assert!(!validate_hand(&tiles, &card));

    let j = Tile::new(200, TileKind::Joker);
    let one_dot = Tile::new(201, TileKind::from_symbol("1d").unwrap());
    assert!(j.matches(&one_dot)); // the pairwise claim model disagrees here
}
