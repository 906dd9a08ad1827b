// Arbitrary Precision Integer
// Signed integers stored as base 10^18 decimal clusters

mod add;
mod cmp;
mod div;
mod error;
mod mul;
mod ops;
mod parse;
mod pow;
mod shift;

pub use error::{Error, ParseError};

use num_traits::{One, Zero};

/// Decimal digits held by a single cluster
pub const CLUSTER_DIGITS: usize = 18;

/// A cluster overflows once it reaches this value (10^18)
pub const CLUSTER_BASE: u64 = 1_000_000_000_000_000_000;

/// Powers of ten that fit in a cluster, indexed by exponent
pub(crate) const POW10: [u64; CLUSTER_DIGITS + 1] = {
    let mut table = [1u64; CLUSTER_DIGITS + 1];
    let mut i = 1;
    while i <= CLUSTER_DIGITS {
        table[i] = table[i - 1] * 10;
        i += 1;
    }
    table
};

/// Arbitrary precision signed integer
///
/// The magnitude is a little-endian sequence of clusters, each holding
/// `0..CLUSTER_BASE`. Values are always canonical: no most-significant zero
/// cluster unless the value is zero, and zero is never negative. Every
/// operation borrows its operands and returns a fresh value, so a
/// `BigInteger` can be shared freely between threads.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigInteger {
    negative: bool,
    clusters: Vec<u64>,
    digits: usize,
}

impl BigInteger {
    /// Build a canonical value from raw clusters (least significant first).
    ///
    /// Trailing zero clusters are dropped and a zero result loses its sign.
    pub(crate) fn from_clusters(negative: bool, mut clusters: Vec<u64>) -> Self {
        debug_assert!(clusters.iter().all(|&c| c < CLUSTER_BASE));

        let significant = clusters.iter().rposition(|&c| c != 0).map_or(1, |i| i + 1);
        clusters.truncate(significant);
        if clusters.is_empty() {
            clusters.push(0);
        }

        let top = clusters[clusters.len() - 1];
        let digits = (clusters.len() - 1) * CLUSTER_DIGITS + cluster_digits(top);
        let is_zero = clusters.len() == 1 && top == 0;

        Self {
            negative: negative && !is_zero,
            clusters,
            digits,
        }
    }

    /// Same magnitude with the given sign (ignored for zero)
    pub(crate) fn with_sign(mut self, negative: bool) -> Self {
        self.negative = negative && !self.is_zero();
        self
    }

    /// True for strictly negative values
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// True for strictly positive values
    pub fn is_positive(&self) -> bool {
        !self.negative && !self.is_zero()
    }

    pub fn is_even(&self) -> bool {
        // 10^18 is even, so parity lives in the lowest cluster
        self.clusters[0] % 2 == 0
    }

    /// Number of decimal digits in the magnitude (zero has one digit)
    pub fn digit_len(&self) -> usize {
        self.digits
    }

    /// Number of clusters in the magnitude
    pub fn cluster_len(&self) -> usize {
        self.clusters.len()
    }

    /// Magnitude clusters, least significant first
    pub fn clusters(&self) -> &[u64] {
        &self.clusters
    }

    /// Absolute value
    pub fn abs(&self) -> Self {
        self.clone().with_sign(false)
    }

    /// Additive inverse
    pub fn negated(&self) -> Self {
        self.clone().with_sign(!self.negative)
    }
}

impl Default for BigInteger {
    fn default() -> Self {
        Self::zero()
    }
}

impl Zero for BigInteger {
    fn zero() -> Self {
        Self {
            negative: false,
            clusters: vec![0],
            digits: 1,
        }
    }

    fn is_zero(&self) -> bool {
        self.clusters.len() == 1 && self.clusters[0] == 0
    }
}

impl One for BigInteger {
    fn one() -> Self {
        Self {
            negative: false,
            clusters: vec![1],
            digits: 1,
        }
    }

    fn is_one(&self) -> bool {
        !self.negative && self.clusters.len() == 1 && self.clusters[0] == 1
    }
}

/// Decimal digits needed to print a single cluster
pub(crate) fn cluster_digits(value: u64) -> usize {
    value.checked_ilog10().map_or(1, |d| d as usize + 1)
}
