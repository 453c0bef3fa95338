use super::bits;
use crate::cards::hand::Hand;

/// One card position whose value is already known.
///
/// `dealt` positions (the board) are set in every candidate; the rest
/// (the hero's hole cards) are clear in every candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub position: u8,
    pub dealt: bool,
}

/// Reserved card positions, ascending, each with its fixed value.
///
/// The free positions left over form a compact space of width
/// [`Reserved::free`]. [`Reserved::expand`] lifts a pattern over that compact
/// space into the full 52-card space by re-inserting every reserved bit at
/// its true position; [`Reserved::compress`] drops them again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reserved(Vec<Slot>);

impl Reserved {
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// width of the compact space
    pub fn free(&self) -> usize {
        52 - self.0.len()
    }
    pub fn slots(&self) -> &[Slot] {
        &self.0
    }

    /// Compact pattern to absolute card mask.
    ///
    /// Reserved positions are inserted in ascending order. Each insertion
    /// shifts everything at or above its location up by one and writes the
    /// fixed bit there, so positions already handled below stay put and the
    /// ones still pending move up in step with the compact encoding.
    pub fn expand(&self, compact: u64) -> u64 {
        debug_assert!(self.fits(compact));
        self.0.iter().fold(compact, |x, slot| {
            let lows = (1u64 << slot.position) - 1;
            let high = !lows;
            let fixed = (slot.dealt as u64) << slot.position;
            ((x & high) << 1) | (x & lows) | fixed
        })
    }

    /// Same as [`Reserved::expand`], rejecting patterns wider than the free space.
    pub fn try_expand(&self, compact: u64) -> Option<u64> {
        match self.fits(compact) {
            true => Some(self.expand(compact)),
            false => None,
        }
    }

    /// Absolute card mask back to the compact pattern.
    ///
    /// Removes reserved positions from the top down, packing the free
    /// positions together in their original relative order.
    pub fn compress(&self, absolute: u64) -> u64 {
        self.0.iter().rev().fold(absolute, |x, slot| {
            let lows = (1u64 << slot.position) - 1;
            ((x >> (slot.position + 1)) << slot.position) | (x & lows)
        })
    }

    fn fits(&self, compact: u64) -> bool {
        compact.checked_shr(self.free() as u32).unwrap_or(0) == 0
    }
}

/// Reserve every card of the hero (clear) and of the board (dealt).
///
/// The scan runs upward through the deck and stops as soon as every
/// known card has been found.
impl From<(Hand, Hand)> for Reserved {
    fn from((hero, board): (Hand, Hand)) -> Self {
        let hero = u64::from(hero);
        let board = u64::from(board);
        let n = bits::count(hero | board) as usize;
        Self(
            (0u8..52)
                .filter_map(|position| {
                    let bit = 1u64 << position;
                    let dealt = board & bit != 0;
                    match (hero | board) & bit != 0 {
                        true => Some(Slot { position, dealt }),
                        false => None,
                    }
                })
                .take(n)
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;
    use crate::enumeration::cursor::Cursor;

    fn slot(position: u8, dealt: bool) -> Slot {
        Slot { position, dealt }
    }

    fn reserve(hero: &str, board: &str) -> Reserved {
        Reserved::from((
            Hand::try_from(hero).unwrap(),
            Hand::try_from(board).unwrap(),
        ))
    }

    #[test]
    fn empty_is_identity() {
        let reserved = Reserved::default();
        assert_eq!(reserved.free(), 52);
        assert_eq!(reserved.expand(0b1011), 0b1011);
        assert_eq!(reserved.compress(0b1011), 0b1011);
    }

    #[test]
    fn ascending_with_values() {
        let reserved = reserve("3c 2d", "2c 4c");
        assert_eq!(
            reserved.slots(),
            &[
                slot(0, true),   // 2c
                slot(1, false),  // 3c
                slot(2, true),   // 4c
                slot(13, false), // 2d
            ]
        );
        assert_eq!(reserved.free(), 48);
    }

    #[test]
    fn inserts_around_reserved_bits() {
        // reserve position 1 dealt, position 3 excluded
        let reserved = Reserved(vec![slot(1, true), slot(3, false)]);
        // compact bits 0,1,2 land on absolute 0,2,4
        assert_eq!(reserved.expand(0b001), 0b00011);
        assert_eq!(reserved.expand(0b010), 0b00110);
        assert_eq!(reserved.expand(0b100), 0b10010);
        assert_eq!(reserved.expand(0b000), 0b00010);
    }

    #[test]
    fn candidates_respect_reserved_values() {
        let hero = Hand::try_from("As Ks").unwrap();
        let board = Hand::try_from("2c 7d Th").unwrap();
        let reserved = Reserved::from((hero, board));
        for compact in Cursor::new(2, reserved.free()) {
            let absolute = reserved.expand(compact);
            assert_eq!(absolute & u64::from(board), u64::from(board));
            assert_eq!(absolute & u64::from(hero), 0);
            assert_eq!(absolute.count_ones(), 5);
            assert_eq!(absolute & !Hand::mask(), 0);
        }
    }

    #[test]
    fn round_trip() {
        for _ in 0..100 {
            let reserved = Reserved::from((Hand::random(), Hand::empty()));
            let compact = rand::random::<u64>() & ((1u64 << reserved.free()) - 1);
            assert_eq!(reserved.compress(reserved.expand(compact)), compact);
        }
    }

    #[test]
    fn rejects_overwide_patterns() {
        let reserved = reserve("As Ks", "2c 7d Th 9s 3h");
        assert_eq!(reserved.free(), 45);
        assert!(reserved.try_expand(1 << 44).is_some());
        assert!(reserved.try_expand(1 << 45).is_none());
    }
}
