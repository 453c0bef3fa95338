const M1: u64 = 0x5555555555555555; // 0101...
const M2: u64 = 0x3333333333333333; // 00110011..
const M4: u64 = 0x0f0f0f0f0f0f0f0f; // 4 zeros, 4 ones ...
const H01: u64 = 0x0101010101010101; // sum of 256^0, 256^1, ...

/// Number of set bits in a 64-bit word.
///
/// Parallel bit summation: 2-bit, then 4-bit, then 8-bit partial counts,
/// then one multiply folds every byte count into the top byte. No branches,
/// so the cost is the same for every card mask in the hot loop.
#[inline]
pub const fn count(mask: u64) -> u32 {
    let mut x = mask;
    x -= (x >> 1) & M1;
    x = (x & M2) + ((x >> 2) & M2);
    x = (x + (x >> 4)) & M4;
    (x.wrapping_mul(H01) >> 56) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges() {
        assert_eq!(count(0), 0);
        assert_eq!(count(1), 1);
        assert_eq!(count(1 << 63), 1);
        assert_eq!(count(u64::MAX), 64);
        assert_eq!(count((1 << 52) - 1), 52);
    }

    #[test]
    fn agrees_with_count_ones() {
        (0..1000)
            .map(|_| rand::random::<u64>())
            .for_each(|x| assert_eq!(count(x), x.count_ones()));
    }
}
