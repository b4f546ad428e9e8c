use rand::prelude::*;

use crate::model::*;

// Tile id source owned by deck construction. Ids are unique within one
// deck; a fresh generator per deck means independent decks never share
// counter state.
#[derive(Debug, Default)]
pub struct TileIdGen {
    next: TileId,
}

impl TileIdGen {
    pub fn new() -> Self {
        Self::default()
    }

    fn issue(&mut self, kind: TileKind) -> Tile {
        self.next += 1;
        Tile::new(self.next, kind)
    }
}

// The full American set, in deterministic composition order:
// 3 suits x 9 values x 4, 4 winds x 4, 3 dragons x 4, 4 flowers,
// 4 seasons, 8 jokers = 152 tiles.
pub fn build_deck(ids: &mut TileIdGen) -> Vec<Tile> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for &suit in &[Suit::Dots, Suit::Bams, Suit::Cracks] {
        for value in 1..=9 {
            for _ in 0..4 {
                deck.push(ids.issue(TileKind::Suited(suit, value)));
            }
        }
    }
    for &wind in &[Wind::East, Wind::South, Wind::West, Wind::North] {
        for _ in 0..4 {
            deck.push(ids.issue(TileKind::Wind(wind)));
        }
    }
    for &dragon in &[Dragon::Red, Dragon::Green, Dragon::White] {
        for _ in 0..4 {
            deck.push(ids.issue(TileKind::Dragon(dragon)));
        }
    }
    for n in 1..=4 {
        deck.push(ids.issue(TileKind::Flower(n)));
        deck.push(ids.issue(TileKind::Season(n)));
    }
    for _ in 0..8 {
        deck.push(ids.issue(TileKind::Joker));
    }
    deck
}

// Build and shuffle a wall. Fisher-Yates via SliceRandom, so every
// permutation is equally likely under the seeded generator.
pub fn create_wall(seed: u64) -> Vec<Tile> {
    let mut ids = TileIdGen::new();
    let mut wall = build_deck(&mut ids);
    let mut rng: rand::rngs::StdRng = rand::SeedableRng::seed_from_u64(seed);
    wall.shuffle(&mut rng);
    wall
}

#[test]
fn test_deck_composition() {
    let mut ids = TileIdGen::new();
    let deck = build_deck(&mut ids);
    assert_eq!(deck.len(), DECK_SIZE);

    let count = |kind: TileKind| deck.iter().filter(|t| t.kind == kind).count();
    for &suit in &[Suit::Dots, Suit::Bams, Suit::Cracks] {
        for value in 1..=9 {
            assert_eq!(count(TileKind::Suited(suit, value)), 4);
        }
    }
    for &wind in &[Wind::East, Wind::South, Wind::West, Wind::North] {
        assert_eq!(count(TileKind::Wind(wind)), 4);
    }
    for &dragon in &[Dragon::Red, Dragon::Green, Dragon::White] {
        assert_eq!(count(TileKind::Dragon(dragon)), 4);
    }
    for n in 1..=4 {
        assert_eq!(count(TileKind::Flower(n)), 1);
        assert_eq!(count(TileKind::Season(n)), 1);
    }
    assert_eq!(count(TileKind::Joker), 8);
}

#[test]
fn test_deck_ids_unique_and_independent() {
    let mut ids = TileIdGen::new();
    let deck = build_deck(&mut ids);
    let mut seen: Vec<TileId> = deck.iter().map(|t| t.id).collect();
    seen.sort_unstable();
    seen.dedup();
    assert_eq!(seen.len(), DECK_SIZE);

    // a second deck from its own generator reuses the same id range
    let mut ids2 = TileIdGen::new();
    let deck2 = build_deck(&mut ids2);
    assert_eq!(deck[0].id, deck2[0].id);
}

#[test]
fn test_wall_shuffle_is_seed_deterministic() {
    let a = create_wall(7);
    let b = create_wall(7);
    assert_eq!(a, b);
    let c = create_wall(8);
    assert_ne!(a, c);
}
