/// Lazy iterator over every k-of-n dense bit pattern.
///
/// Yields all C(n, k) words that have exactly k bits set, all within the
/// low n bits, in strictly increasing numeric order. The first pattern is
/// k ones in the low bits.
///
/// Successors come from Gosper's hack, but termination never relies on the
/// pattern overflowing out of the block: the cursor counts down from
/// C(n, k) and stops when the count runs out. Nothing is materialized, so
/// there is no capacity ceiling on n or k.
///
/// # Performance
///
/// - Memory: O(1)
/// - Time per `.next()`: O(1)
#[derive(Debug, Clone)]
pub struct Cursor {
    next: u64,
    block: u64,
    left: u64,
}

impl Cursor {
    /// Patterns of k bits within the low n bits.
    pub fn new(k: usize, n: usize) -> Self {
        assert!(n <= 64, "combination block wider than a word: {}", n);
        Self {
            next: Self::lowest(k.min(n)),
            block: Self::lowest(n),
            left: binomial(n, k),
        }
    }

    fn lowest(k: usize) -> u64 {
        match k {
            0 => 0,
            k => u64::MAX >> (64 - k),
        }
    }

    /// Gosper's hack for next bit permutation with same popcount.
    ///
    /// See: https://graphics.stanford.edu/~seander/bithacks.html#NextBitPermutation
    fn permute(&self) -> u64 {
        let  x = /* 000_110                       */ self.next;
        let  a = /* 000_111 <- 000_110 || 000_101 */ x | x.wrapping_sub(1);
        let  b = /* 001_000 <-                    */ a.wrapping_add(1);
        let  c = /* 111_000 <-                    */ !   a;
        let  d = /* 001_000 <- 111_000 && 001_000 */ c & c.wrapping_neg();
        let  e = /* 000_111 <-                    */ d.wrapping_sub(1);
        let  f = /*         << xxx                */ 1 + x.trailing_zeros();
        let  g = /* 000_001 <-                    */ e.checked_shr(f).unwrap_or(0);
        let  h = /* 001_001 <- 001_000 || 000_001 */ b | g;
        h & self.block
    }
}

impl Iterator for Cursor {
    type Item = u64;
    fn next(&mut self) -> Option<Self::Item> {
        match self.left {
            0 => None,
            _ => {
                let last = self.next;
                self.left -= 1;
                if self.left > 0 {
                    self.next = self.permute();
                }
                Some(last)
            }
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.left as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Cursor {}
impl std::iter::FusedIterator for Cursor {}

/// (k, n) construction, mirroring `Cursor::new`
impl From<(usize, usize)> for Cursor {
    fn from((k, n): (usize, usize)) -> Self {
        Self::new(k, n)
    }
}

/// C(n, k) by the multiplicative formula.
///
/// Every partial product is itself a binomial coefficient, so each
/// division is exact.
pub fn binomial(n: usize, k: usize) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k) as u128;
    let n = n as u128;
    (0..k).fold(1u128, |x, i| x * (n - i) / (i + 1)) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    /// every k-subset of 0..n, as masks, sorted
    fn reference(k: usize, n: usize) -> Vec<u64> {
        let mut masks = (0u64..1 << n)
            .filter(|m| m.count_ones() as usize == k)
            .collect::<Vec<_>>();
        masks.sort();
        masks
    }

    #[test]
    fn five_choose_two() {
        let masks = Cursor::new(2, 5).collect::<Vec<_>>();
        assert_eq!(
            masks,
            vec![
                0b00011, 0b00101, 0b00110, 0b01001, 0b01010, //
                0b01100, 0b10001, 0b10010, 0b10100, 0b11000,
            ]
        );
    }

    #[test]
    fn five_choose_three() {
        let mut iter = Cursor::from((3, 5));
        assert!(iter.next() == Some(0b00111));
        assert!(iter.next() == Some(0b01011));
        assert!(iter.next() == Some(0b01101));
        assert!(iter.next() == Some(0b01110));
        assert!(iter.next() == Some(0b10011));
        assert!(iter.next() == Some(0b10101));
        assert!(iter.next() == Some(0b10110));
        assert!(iter.next() == Some(0b11001));
        assert!(iter.next() == Some(0b11010));
        assert!(iter.next() == Some(0b11100));
        assert!(iter.next() == None);
    }

    #[test]
    fn matches_reference_for_small_blocks() {
        for n in 0..=12 {
            for k in 0..=n {
                let masks = Cursor::new(k, n).collect::<Vec<_>>();
                assert_eq!(masks, reference(k, n), "k={} n={}", k, n);
                assert_eq!(masks.len() as u64, binomial(n, k));
            }
        }
    }

    #[test]
    fn opponent_holdings() {
        for n in [45usize, 46, 47, 50, 52] {
            let masks = Cursor::new(2, n).collect::<Vec<_>>();
            assert_eq!(masks.len() as u64, binomial(n, 2));
            assert!(masks.windows(2).all(|w| w[0] < w[1]));
            assert!(masks.iter().all(|m| m.count_ones() == 2));
            assert!(masks.iter().all(|m| m >> n == 0));
        }
        assert_eq!(Cursor::new(2, 45).len(), 990);
        assert_eq!(Cursor::new(2, 50).len(), 1225);
    }

    #[test]
    fn full_word() {
        let mut iter = Cursor::new(1, 64);
        assert_eq!(iter.len(), 64);
        assert_eq!(iter.by_ref().last(), Some(1 << 63));
        assert_eq!(iter.next(), None);
        assert_eq!(Cursor::new(64, 64).collect::<Vec<_>>(), vec![u64::MAX]);
    }

    #[test]
    fn degenerate_sizes() {
        assert_eq!(Cursor::new(0, 7).collect::<Vec<_>>(), vec![0]);
        assert_eq!(Cursor::new(2, 1).count(), 0);
        assert_eq!(Cursor::new(2, 0).count(), 0);
        assert_eq!(Cursor::new(2, 2).collect::<Vec<_>>(), vec![0b11]);
    }

    #[test]
    fn binomials() {
        assert_eq!(binomial(5, 2), 10);
        assert_eq!(binomial(45, 2), 990);
        assert_eq!(binomial(52, 5), 2_598_960);
        assert_eq!(binomial(64, 32), 1_832_624_140_942_590_534);
        assert_eq!(binomial(3, 4), 0);
    }
}
