use super::error::CardError;

/// One of the four suits, in the order they occupy a [`Hand`](super::hand::Hand) mask.
///
/// Each suit owns a contiguous block of 13 bits: clubs in the lowest
/// block, spades in the highest.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Suit {
    #[default]
    Club = 0,
    Diamond = 1,
    Heart = 2,
    Spade = 3,
}

impl Suit {
    pub const fn all() -> [Self; 4] {
        [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade]
    }
    /// bit offset of this suit's 13-card block
    pub const fn offset(&self) -> u8 {
        *self as u8 * 13
    }
}

/// u8 isomorphism
impl From<u8> for Suit {
    fn from(n: u8) -> Suit {
        match n {
            0 => Suit::Club,
            1 => Suit::Diamond,
            2 => Suit::Heart,
            3 => Suit::Spade,
            _ => unreachable!("suit index out of range: {}", n),
        }
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

/// u64 injection
/// all 13 cards of the suit
/// xxxxxxxxxxxx 0000000000000 0000000000000 1111111111111 0000000000000
impl From<Suit> for u64 {
    fn from(s: Suit) -> u64 {
        0x1FFF << s.offset()
    }
}

/// str isomorphism
impl TryFrom<&str> for Suit {
    type Error = CardError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "c" | "C" => Ok(Suit::Club),
            "d" | "D" => Ok(Suit::Diamond),
            "h" | "H" => Ok(Suit::Heart),
            "s" | "S" => Ok(Suit::Spade),
            _ => Err(CardError::Suit(s.to_string())),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Suit::Club => "c",
                Suit::Diamond => "d",
                Suit::Heart => "h",
                Suit::Spade => "s",
            }
        )
    }
}
