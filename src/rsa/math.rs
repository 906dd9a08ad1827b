// RSA Number Theory
// Euclid, modular inverses and primality testing on BigInteger

use log::trace;
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::Rng;

use crate::bigint::{BigInteger, CLUSTER_BASE};

/// Extended Euclidean Algorithm
/// Returns (gcd, x, y) such that a*x + b*y = gcd = gcd(a, b)
pub fn extended_gcd(a: &BigInteger, b: &BigInteger) -> (BigInteger, BigInteger, BigInteger) {
    if b.is_zero() {
        return (a.clone(), BigInteger::one(), BigInteger::zero());
    }

    let (quotient, remainder) = a.div_rem(b);
    let (gcd, x1, y1) = extended_gcd(b, &remainder);
    let y = &x1 - &quotient * &y1;

    (gcd, y1, y)
}

/// Compute modular inverse: a^(-1) mod m, in `0..m`
/// Returns None if inverse doesn't exist
pub fn mod_inverse(a: &BigInteger, m: &BigInteger) -> Option<BigInteger> {
    if !m.is_positive() {
        return None;
    }

    let (gcd, x, _) = extended_gcd(a, m);
    if !gcd.abs().is_one() {
        return None;
    }

    // gcd may come out as -1 for negative inputs
    let x = if gcd.is_negative() { -x } else { x };
    Some(x.mod_floor(m))
}

/// Uniform random value in `0..bound`, or None when `bound` is not positive
pub fn random_below<R: Rng + ?Sized>(bound: &BigInteger, rng: &mut R) -> Option<BigInteger> {
    if !bound.is_positive() {
        return None;
    }

    let limbs = bound.clusters();
    let top = limbs[limbs.len() - 1];
    loop {
        let mut clusters: Vec<u64> = (0..limbs.len() - 1)
            .map(|_| rng.gen_range(0..CLUSTER_BASE))
            .collect();
        clusters.push(rng.gen_range(0..=top));

        let candidate = BigInteger::from_clusters(false, clusters);
        if candidate < *bound {
            return Some(candidate);
        }
    }
}

/// Uniform random value with exactly `digits` decimal digits, None for zero digits
pub fn random_with_digits<R: Rng + ?Sized>(digits: usize, rng: &mut R) -> Option<BigInteger> {
    let lower = BigInteger::one().shift_left(digits.checked_sub(1)?);
    let span = &lower.shift_left(1) - &lower;
    random_below(&span, rng).map(|offset| &lower + &offset)
}

/// Miller-Rabin primality test
/// Returns true if n is probably prime
pub fn is_probable_prime<R: Rng + ?Sized>(n: &BigInteger, rounds: u32, rng: &mut R) -> bool {
    let one = BigInteger::one();
    let two = BigInteger::from(2u64);
    let three = BigInteger::from(3u64);

    if *n < two {
        return false;
    }
    if *n == two || *n == three {
        return true;
    }
    if n.is_even() {
        return false;
    }

    // Write n-1 as d * 2^s with d odd
    let n_minus_one = n - &one;
    let mut d = n_minus_one.clone();
    let mut s = 0u32;
    while d.is_even() {
        d = &d / &two;
        s += 1;
    }

    // Witnesses come from [2, n-2]
    let witness_span = n - &three;
    'witness: for _ in 0..rounds {
        let Some(offset) = random_below(&witness_span, rng) else {
            return false;
        };
        let a = &offset + &two;

        let mut x = match a.mod_pow(&d, n) {
            Ok(x) => x,
            Err(_) => return false,
        };
        if x == one || x == n_minus_one {
            continue;
        }

        for _ in 1..s {
            x = &(&x * &x) % n;
            if x == n_minus_one {
                continue 'witness;
            }
        }

        trace!("{} rejected by witness {}", n, a);
        return false;
    }

    // Probably prime
    true
}
