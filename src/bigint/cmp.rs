// Total ordering over signed values

use std::cmp::Ordering;

use super::BigInteger;

/// Compare two canonical magnitudes: cluster count first, then clusters from
/// the most significant end.
pub(crate) fn cmp_magnitude(a: &[u64], b: &[u64]) -> Ordering {
    a.len()
        .cmp(&b.len())
        .then_with(|| a.iter().rev().cmp(b.iter().rev()))
}

impl BigInteger {
    /// Compare absolute values, ignoring sign
    pub fn cmp_abs(&self, other: &Self) -> Ordering {
        cmp_magnitude(&self.clusters, &other.clusters)
    }
}

impl Ord for BigInteger {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => self.cmp_abs(other),
            // Larger magnitude is the smaller negative number
            (true, true) => self.cmp_abs(other).reverse(),
        }
    }
}

impl PartialOrd for BigInteger {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
