use serde::{Deserialize, Serialize};

use crate::model::*;

// One meld slot of a catalog shape: the meld flavor and how many tiles it
// consumes. The matcher only looks at the count; the flavor is kept for
// display and for the card to read naturally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeldSpec {
    pub meld_type: MeldType,
    pub count: usize,
}

impl MeldSpec {
    #[inline]
    pub fn pung() -> Self {
        Self {
            meld_type: MeldType::Pung,
            count: 3,
        }
    }

    #[inline]
    pub fn kong() -> Self {
        Self {
            meld_type: MeldType::Kong,
            count: 4,
        }
    }

    #[inline]
    pub fn pair() -> Self {
        Self {
            meld_type: MeldType::Pair,
            count: 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandDefinition {
    pub name: String,
    pub melds: Vec<MeldSpec>,
}

impl HandDefinition {
    pub fn new(name: &str, melds: Vec<MeldSpec>) -> Self {
        Self {
            name: name.to_string(),
            melds,
        }
    }

    pub fn tile_sum(&self) -> usize {
        self.melds.iter().map(|m| m.count).sum()
    }
}

// The shipped card: a small representative subset of an NMJL-style card.
// Every shape sums to exactly 14 tiles.
pub fn standard_card() -> Vec<HandDefinition> {
    vec![
        HandDefinition::new(
            "Four Pungs and a Pair",
            vec![
                MeldSpec::pung(),
                MeldSpec::pung(),
                MeldSpec::pung(),
                MeldSpec::pung(),
                MeldSpec::pair(),
            ],
        ),
        HandDefinition::new(
            "Two Kongs and Two Pungs",
            vec![
                MeldSpec::kong(),
                MeldSpec::kong(),
                MeldSpec::pung(),
                MeldSpec::pung(),
            ],
        ),
        HandDefinition::new(
            "Three Kongs and a Pair",
            vec![
                MeldSpec::kong(),
                MeldSpec::kong(),
                MeldSpec::kong(),
                MeldSpec::pair(),
            ],
        ),
        HandDefinition::new(
            "One Kong, Two Pungs, and Two Pairs",
            vec![
                MeldSpec::kong(),
                MeldSpec::pung(),
                MeldSpec::pung(),
                MeldSpec::pair(),
                MeldSpec::pair(),
            ],
        ),
    ]
}

#[test]
fn test_card_sums() {
    let card = standard_card();
    assert_eq!(card.len(), 4);
    for def in &card {
        assert_eq!(def.tile_sum(), FULL_HAND, "{}", def.name);
    }
}
