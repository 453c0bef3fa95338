use super::error::CardError;
use super::rank::Rank;
use super::suit::Suit;

/// A playing card encoded as a single byte.
///
/// The 52 cards are bijectively mapped to `0..52` where the encoding is
/// `suit * 13 + rank`. All thirteen cards of a suit are therefore adjacent,
/// which is the layout hand masks are exchanged in.
///
/// # Representations
///
/// - `u8`: position `0..52`
/// - `u64`: single-bit representation for set membership in [`Hand`]
///
/// [`Hand`]: super::hand::Hand
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card(u8);

impl Card {
    pub fn rank(&self) -> Rank {
        Rank::from(self.0 % 13)
    }
    pub fn suit(&self) -> Suit {
        Suit::from(self.0 / 13)
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((r, s): (Rank, Suit)) -> Self {
        Self(s.offset() + u8::from(r))
    }
}

/// u8 isomorphism
/// each card is mapped to its position in a suit-major deck 0-51
/// Ts
/// 47
/// 0b00101111
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        debug_assert!(n < 52);
        Self(n)
    }
}

/// u64 representation
/// each card is just one bit turned on. this is a one-way morphism
/// Ts
/// xxxxxxxxxxxx 0000100000000000000000000000000000000000000000000000
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << u8::from(c)
    }
}

/// str isomorphism
impl TryFrom<&str> for Card {
    type Error = CardError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        match s.chars().count() {
            2 => {
                let (rank, suit) = s.split_at(s.char_indices().nth(1).map_or(1, |(i, _)| i));
                let rank = Rank::try_from(rank)?;
                let suit = Suit::try_from(suit)?;
                Ok(Card::from((rank, suit)))
            }
            _ => Err(CardError::Length(s.to_string())),
        }
    }
}

impl Card {
    /// Parses a string of concatenated card notations into a vector of cards.
    ///
    /// Whitespace is ignored. Each card is two characters: rank then suit.
    pub fn parse(s: &str) -> Result<Vec<Self>, CardError> {
        s.replace(char::is_whitespace, "")
            .chars()
            .collect::<Vec<_>>()
            .chunks(2)
            .map(|pair| pair.iter().collect::<String>())
            .map(|pair| Self::try_from(pair.as_str()))
            .collect::<Result<Vec<Self>, _>>()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}
