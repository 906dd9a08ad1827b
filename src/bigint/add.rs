// Addition and subtraction with cluster carry/borrow

use std::cmp::Ordering;

use num_traits::Zero;

use super::cmp::cmp_magnitude;
use super::{BigInteger, CLUSTER_BASE};

/// Cluster-wise sum of two magnitudes
pub(crate) fn add_magnitudes(a: &[u64], b: &[u64]) -> Vec<u64> {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    let mut sum = Vec::with_capacity(long.len() + 1);
    let mut carry = 0u64;
    for (i, &cluster) in long.iter().enumerate() {
        // At most 2 * (10^18 - 1) + 1, well inside u64
        let mut total = cluster + short.get(i).copied().unwrap_or(0) + carry;
        carry = 0;
        if total >= CLUSTER_BASE {
            total -= CLUSTER_BASE;
            carry = 1;
        }
        sum.push(total);
    }
    if carry > 0 {
        sum.push(carry);
    }

    sum
}

/// Cluster-wise difference `a - b`; requires `|a| >= |b|`
pub(crate) fn sub_magnitudes(a: &[u64], b: &[u64]) -> Vec<u64> {
    let mut difference = Vec::with_capacity(a.len());
    let mut borrow = 0u64;
    for (i, &cluster) in a.iter().enumerate() {
        let taken = b.get(i).copied().unwrap_or(0) + borrow;
        if cluster >= taken {
            difference.push(cluster - taken);
            borrow = 0;
        } else {
            difference.push(cluster + CLUSTER_BASE - taken);
            borrow = 1;
        }
    }
    debug_assert_eq!(borrow, 0, "subtrahend larger than minuend");

    difference
}

/// Signed sum of `(lhs_negative, lhs)` and `(rhs_negative, rhs)`.
///
/// Signs are passed by value so callers can flip one without touching the
/// operand itself.
fn signed_sum(lhs_negative: bool, lhs: &[u64], rhs_negative: bool, rhs: &[u64]) -> BigInteger {
    if lhs_negative == rhs_negative {
        return BigInteger::from_clusters(lhs_negative, add_magnitudes(lhs, rhs));
    }

    match cmp_magnitude(lhs, rhs) {
        Ordering::Equal => BigInteger::zero(),
        Ordering::Greater => BigInteger::from_clusters(lhs_negative, sub_magnitudes(lhs, rhs)),
        Ordering::Less => BigInteger::from_clusters(rhs_negative, sub_magnitudes(rhs, lhs)),
    }
}

impl BigInteger {
    /// `self + other`
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, other: &Self) -> Self {
        signed_sum(self.negative, &self.clusters, other.negative, &other.clusters)
    }

    /// `self - other`
    pub fn subtract(&self, other: &Self) -> Self {
        signed_sum(self.negative, &self.clusters, !other.negative, &other.clusters)
    }
}
