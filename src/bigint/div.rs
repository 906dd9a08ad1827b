// Division by doubling search
//
// The quotient is found by dividing by twice the divisor and folding the
// result back: q(a, b) = 2 * q(a, 2b) (+ 1). Only doubling, halving,
// comparison and subtraction are needed, never a digit estimate. The fold runs
// as a loop, so stack use does not grow with the quotient.

use num_traits::{One, Zero};

use super::{BigInteger, Error, CLUSTER_BASE};

impl BigInteger {
    /// Truncated division returning `(quotient, remainder)`.
    ///
    /// The quotient is negative when exactly one operand is; the remainder
    /// carries the dividend's sign (zero is never negative), so
    /// `quotient * divisor + remainder == self` always holds.
    pub fn divide(&self, divisor: &Self) -> Result<(Self, Self), Error> {
        if divisor.is_zero() {
            return Err(Error::DivisionByZero);
        }

        let (quotient, remainder) = doubling_search(&self.abs(), &divisor.abs());
        Ok((
            quotient.with_sign(self.negative != divisor.negative),
            remainder.with_sign(self.negative),
        ))
    }

    /// `self / 2` truncated toward zero, one pass over the clusters
    pub(crate) fn halve(&self) -> Self {
        let mut clusters = vec![0u64; self.clusters.len()];
        let mut carry = 0u64;
        for (slot, &cluster) in clusters.iter_mut().zip(&self.clusters).rev() {
            // carry is 0 or 1, so this stays below 2 * 10^18
            let value = carry * CLUSTER_BASE + cluster;
            *slot = value / 2;
            carry = value % 2;
        }
        Self::from_clusters(self.negative, clusters)
    }
}

/// Quotient and remainder of two non-negative values, `divisor > 0`
fn doubling_search(dividend: &BigInteger, divisor: &BigInteger) -> (BigInteger, BigInteger) {
    if divisor.is_one() {
        return (dividend.clone(), BigInteger::zero());
    }
    if dividend < divisor {
        return (BigInteger::zero(), dividend.clone());
    }

    // Climb to the first doubled divisor above the dividend
    let mut current = divisor.clone();
    let mut doublings = 0usize;
    while current <= *dividend {
        current = current.add(&current);
        doublings += 1;
    }

    // Walk back down; every step halves exactly since current = divisor * 2^k
    let mut quotient = BigInteger::zero();
    let mut rest = dividend.clone();
    for _ in 0..doublings {
        current = current.halve();
        quotient = quotient.add(&quotient);
        if rest >= current {
            quotient = quotient.add(&BigInteger::one());
            rest = rest.subtract(&current);
        }
    }

    (quotient, rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(text: &str) -> BigInteger {
        text.parse().unwrap()
    }

    fn divide(a: &str, b: &str) -> (String, String) {
        let (q, r) = big(a).divide(&big(b)).unwrap();
        (q.to_string(), r.to_string())
    }

    #[test]
    fn test_divide_small() {
        assert_eq!(divide("10", "-2"), ("-5".into(), "0".into()));
        assert_eq!(divide("17", "5"), ("3".into(), "2".into()));
        assert_eq!(divide("4", "7"), ("0".into(), "4".into()));
        assert_eq!(divide("7", "7"), ("1".into(), "0".into()));
        assert_eq!(divide("12345", "1"), ("12345".into(), "0".into()));
    }

    #[test]
    fn test_remainder_takes_dividend_sign() {
        assert_eq!(divide("-17", "5"), ("-3".into(), "-2".into()));
        assert_eq!(divide("17", "-5"), ("-3".into(), "2".into()));
        assert_eq!(divide("-17", "-5"), ("3".into(), "-2".into()));
        assert_eq!(divide("-15", "5"), ("-3".into(), "0".into()));
        assert_eq!(divide("-3", "5"), ("0".into(), "-3".into()));
    }

    #[test]
    fn test_divide_multi_cluster() {
        assert_eq!(
            divide(
                "121932631137021795226185032733622923332237463801111263526907",
                "987654321098765432109876543210"
            ),
            ("123456789012345678901234567890".into(), "7".into())
        );
        assert_eq!(
            divide("1000000000000000000000000000000000000", "999999999999999999"),
            ("1000000000000000001".into(), "1".into())
        );
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(big("5").divide(&BigInteger::zero()), Err(Error::DivisionByZero));
        assert_eq!(BigInteger::zero().divide(&big("-0")), Err(Error::DivisionByZero));
    }

    #[test]
    fn test_zero_dividend() {
        assert_eq!(divide("0", "-9"), ("0".into(), "0".into()));
    }

    #[test]
    fn test_reconstructs_dividend() {
        let pairs = [
            ("98765432109876543210987654321", "1234567"),
            ("-98765432109876543210987654321", "1234567890123456789012"),
            ("5", "98765432109876543210987654321"),
        ];
        for (a, b) in pairs {
            let (a, b) = (big(a), big(b));
            let (q, r) = a.divide(&b).unwrap();
            assert_eq!(q.multiply(&b).add(&r), a);
            assert_eq!(r.cmp_abs(&b), std::cmp::Ordering::Less);
        }
    }

    #[test]
    fn test_halve() {
        assert_eq!(big("10").halve(), big("5"));
        assert_eq!(big("7").halve(), big("3"));
        assert_eq!(big("-7").halve(), big("-3"));
        assert!(big("1").halve().is_zero());
        assert_eq!(
            big("1000000000000000000000000000000000001").halve().to_string(),
            "500000000000000000000000000000000000"
        );
    }

    #[test]
    fn test_long_quotient() {
        // 10^9100 / 3 has a quotient of about 30000 bits
        let dividend = big(&format!("1{}", "0".repeat(9100)));
        let (q, r) = dividend.divide(&big("3")).unwrap();
        assert_eq!(q.to_string(), "3".repeat(9100));
        assert_eq!(r, big("1"));
    }
}
