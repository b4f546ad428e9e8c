use serde::{de, ser};

use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    Dots,
    Bams,
    Cracks,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Wind {
    East,
    South,
    West,
    North,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Dragon {
    Red,
    Green,
    White,
}

// TileKind doubles as the grouping key for counting: two tiles belong to the
// same equality class iff their kinds are equal, and all jokers share Joker.
// Flowers and seasons are distinct classes even though no catalog shape
// requires matching them.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TileKind {
    Suited(Suit, u8), // value 1..=9
    Wind(Wind),
    Dragon(Dragon),
    Flower(u8), // 1..=4
    Season(u8), // 1..=4
    Joker,
}

impl TileKind {
    pub fn from_symbol(s: &str) -> Result<Self, String> {
        let chars: Vec<char> = s.chars().collect();
        match chars.as_slice() {
            ['j'] => return Ok(TileKind::Joker),
            [c0, c1] => {
                if let Some(v) = c0.to_digit(10) {
                    let suit = match c1 {
                        'd' => Suit::Dots,
                        'b' => Suit::Bams,
                        'c' => Suit::Cracks,
                        _ => return Err(format!("invalid suit symbol: '{}'", s)),
                    };
                    if v == 0 {
                        return Err(format!("invalid suited value: '{}'", s));
                    }
                    return Ok(TileKind::Suited(suit, v as u8));
                }
                match c0 {
                    'w' => {
                        let wind = match c1 {
                            'e' => Wind::East,
                            's' => Wind::South,
                            'w' => Wind::West,
                            'n' => Wind::North,
                            _ => return Err(format!("invalid wind symbol: '{}'", s)),
                        };
                        return Ok(TileKind::Wind(wind));
                    }
                    'd' => {
                        let dragon = match c1 {
                            'r' => Dragon::Red,
                            'g' => Dragon::Green,
                            'w' => Dragon::White,
                            _ => return Err(format!("invalid dragon symbol: '{}'", s)),
                        };
                        return Ok(TileKind::Dragon(dragon));
                    }
                    'f' | 's' => {
                        let n = match c1.to_digit(10) {
                            Some(n) if (1..=4).contains(&n) => n as u8,
                            _ => return Err(format!("invalid flower/season symbol: '{}'", s)),
                        };
                        if *c0 == 'f' {
                            return Ok(TileKind::Flower(n));
                        }
                        return Ok(TileKind::Season(n));
                    }
                    _ => {}
                }
            }
            _ => {}
        }
        Err(format!("invalid tile symbol: '{}'", s))
    }

    #[inline]
    pub fn is_joker(&self) -> bool {
        *self == TileKind::Joker
    }
}

impl fmt::Display for TileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TileKind::Suited(suit, v) => {
                let c = match suit {
                    Suit::Dots => 'd',
                    Suit::Bams => 'b',
                    Suit::Cracks => 'c',
                };
                write!(f, "{}{}", v, c)
            }
            TileKind::Wind(w) => {
                let c = match w {
                    Wind::East => 'e',
                    Wind::South => 's',
                    Wind::West => 'w',
                    Wind::North => 'n',
                };
                write!(f, "w{}", c)
            }
            TileKind::Dragon(d) => {
                let c = match d {
                    Dragon::Red => 'r',
                    Dragon::Green => 'g',
                    Dragon::White => 'w',
                };
                write!(f, "d{}", c)
            }
            TileKind::Flower(n) => write!(f, "f{}", n),
            TileKind::Season(n) => write!(f, "s{}", n),
            TileKind::Joker => write!(f, "j"),
        }
    }
}

impl fmt::Debug for TileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl ser::Serialize for TileKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

struct TileKindVisitor;

impl<'de> de::Visitor<'de> for TileKindVisitor {
    type Value = TileKind;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("tile symbol")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        TileKind::from_symbol(v).map_err(de::Error::custom)
    }
}

impl<'de> de::Deserialize<'de> for TileKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_str(TileKindVisitor)
    }
}

// Immutable once created. The id is the only thing that distinguishes two
// otherwise identical tiles and is never reused within a game.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub id: TileId,
    pub kind: TileKind,
}

impl Tile {
    #[inline]
    pub fn new(id: TileId, kind: TileKind) -> Self {
        Self { id, kind }
    }

    #[inline]
    pub fn is_joker(&self) -> bool {
        self.kind.is_joker()
    }

    // Grouping key for counting purposes.
    #[inline]
    pub fn key(&self) -> TileKind {
        self.kind
    }

    // Pairwise match used for pung/kong detection on a claimed discard.
    // A joker matches anything; this is deliberately looser than the
    // catalog matcher, which budgets jokers per meld slot instead.
    #[inline]
    pub fn matches(&self, other: &Tile) -> bool {
        self.is_joker() || other.is_joker() || self.kind == other.kind
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl fmt::Debug for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.kind, self.id)
    }
}

// Parse a whitespace-separated tile expression, e.g. "1d 1d 1d we we j".
// Ids are assigned in parse order starting from 1.
pub fn tiles_from_expr(exp: &str) -> Result<Vec<Tile>, String> {
    let mut tiles = vec![];
    for (i, sym) in exp.split_whitespace().enumerate() {
        let kind = TileKind::from_symbol(sym)?;
        tiles.push(Tile::new(i as TileId + 1, kind));
    }
    Ok(tiles)
}

#[test]
fn test_symbol_roundtrip() {
    for sym in &[
        "1d", "9d", "5b", "3c", "we", "ws", "ww", "wn", "dr", "dg", "dw", "f1", "f4", "s2", "j",
    ] {
        let kind = TileKind::from_symbol(sym).unwrap();
        assert_eq!(&kind.to_string(), sym);
    }
    assert!(TileKind::from_symbol("0d").is_err());
    assert!(TileKind::from_symbol("wz").is_err());
    assert!(TileKind::from_symbol("f5").is_err());
    assert!(TileKind::from_symbol("").is_err());
}

#[test]
fn test_pairwise_match() {
    let t = |sym: &str| Tile::new(0, TileKind::from_symbol(sym).unwrap());
    assert!(t("5d").matches(&t("5d")));
    assert!(!t("5d").matches(&t("5b")));
    assert!(!t("we").matches(&t("wn")));
    assert!(t("f2").matches(&t("f2")));
    assert!(!t("f2").matches(&t("s2"))); // flowers and seasons are distinct classes
    // a joker matches anything, including another joker
    assert!(t("j").matches(&t("5d")));
    assert!(t("dw").matches(&t("j")));
    assert!(t("j").matches(&t("j")));
}
