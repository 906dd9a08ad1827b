// Karatsuba multiplication
//
// Multi-cluster operands split at a cluster boundary and recurse on three
// half-size products. Single-cluster operands run the same scheme on decimal
// digits, so no elementary multiply ever sees two full 18-digit clusters.

use num_traits::Zero;

use super::add::add_magnitudes;
use super::{cluster_digits, BigInteger, CLUSTER_BASE, CLUSTER_DIGITS, POW10};

const WIDE_BASE: u128 = CLUSTER_BASE as u128;

impl BigInteger {
    /// `self * other`; the sign is the XOR of the operand signs
    pub fn multiply(&self, other: &Self) -> Self {
        karatsuba(&self.clusters, &other.clusters).with_sign(self.negative != other.negative)
    }
}

/// Drop most-significant zero clusters; an empty slice means zero
fn significant(magnitude: &[u64]) -> &[u64] {
    let len = magnitude.iter().rposition(|&c| c != 0).map_or(0, |i| i + 1);
    &magnitude[..len]
}

/// Non-negative product of two magnitudes
fn karatsuba(a: &[u64], b: &[u64]) -> BigInteger {
    let (a, b) = (significant(a), significant(b));

    if a.is_empty() || b.is_empty() {
        return BigInteger::zero();
    }
    if a == [1] {
        return BigInteger::from_clusters(false, b.to_vec());
    }
    if b == [1] {
        return BigInteger::from_clusters(false, a.to_vec());
    }

    if a.len() == 1 && b.len() == 1 {
        let product = multiply_clusters(a[0], b[0]);
        return BigInteger::from_clusters(
            false,
            vec![(product % WIDE_BASE) as u64, (product / WIDE_BASE) as u64],
        );
    }

    let split = a.len().min(b.len()).div_ceil(2);
    let (low_a, high_a) = a.split_at(split);
    let (low_b, high_b) = b.split_at(split);

    let high = karatsuba(high_a, high_b);
    let low = karatsuba(low_a, low_b);
    let middle = karatsuba(&add_magnitudes(high_a, low_a), &add_magnitudes(high_b, low_b))
        .subtract(&high)
        .subtract(&low);

    let places = split * CLUSTER_DIGITS;
    high.shift_left(2 * places)
        .add(&middle.shift_left(places))
        .add(&low)
}

/// Product of two clusters by Karatsuba over their decimal digits.
///
/// Splits at the midpoint of the shorter operand until one side is a single
/// digit, which keeps every native multiply far below `u64::MAX`. The result
/// (below 10^36) is assembled in `u128`.
fn multiply_clusters(a: u64, b: u64) -> u128 {
    if a < 10 || b < 10 {
        return u128::from(a) * u128::from(b);
    }

    let split = cluster_digits(a).min(cluster_digits(b)).div_ceil(2);
    let divisor = POW10[split];
    let (high_a, low_a) = (a / divisor, a % divisor);
    let (high_b, low_b) = (b / divisor, b % divisor);

    let high = multiply_clusters(high_a, high_b);
    let low = multiply_clusters(low_a, low_b);
    let middle = multiply_clusters(high_a + low_a, high_b + low_b) - high - low;

    let scale = u128::from(divisor);
    high * scale * scale + middle * scale + low
}
