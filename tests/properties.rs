use std::cmp::Ordering;

use num_bigint::{BigInt, BigUint, RandBigInt};
use num_traits::{One, Zero};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use cluster_rsa::bigint::BigInteger;
use cluster_rsa::rsa::{self, AsciiEncoder, Encoder};

/// Bit sizes covering one, two, three and several clusters
const SIZES: [u64; 5] = [20, 59, 110, 170, 400];

fn big(text: &str) -> BigInteger {
    text.parse().unwrap()
}

fn ours(value: &BigInt) -> BigInteger {
    value.to_string().parse().unwrap()
}

fn random_pair(rng: &mut StdRng) -> (BigInt, BigInt) {
    let a_bits = SIZES[rng.gen_range(0..SIZES.len())];
    let b_bits = SIZES[rng.gen_range(0..SIZES.len())];
    (rng.gen_bigint(a_bits), rng.gen_bigint(b_bits))
}

#[test]
fn format_matches_oracle_and_round_trips() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..100 {
        let (a, _) = random_pair(&mut rng);
        let value = ours(&a);
        assert_eq!(value.to_string(), a.to_string());
        assert_eq!(big(&value.to_string()), value);
    }
}

#[test]
fn arithmetic_matches_oracle() {
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..200 {
        let (a, b) = random_pair(&mut rng);
        let (x, y) = (ours(&a), ours(&b));

        assert_eq!(x.add(&y), ours(&(&a + &b)), "{a} + {b}");
        assert_eq!(x.subtract(&y), ours(&(&a - &b)), "{a} - {b}");
        assert_eq!(x.multiply(&y), ours(&(&a * &b)), "{a} * {b}");
        assert_eq!(x.cmp(&y), a.cmp(&b), "{a} <=> {b}");

        if !b.is_zero() {
            let (q, r) = x.divide(&y).unwrap();
            assert_eq!(q, ours(&(&a / &b)), "{a} / {b}");
            assert_eq!(r, ours(&(&a % &b)), "{a} % {b}");
        }
    }
}

#[test]
fn shifts_match_powers_of_ten() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..50 {
        let (a, _) = random_pair(&mut rng);
        let places: usize = rng.gen_range(0..60);
        let scale = BigInt::from(10u32).pow(places as u32);

        assert_eq!(ours(&a).shift_left(places), ours(&(&a * &scale)));
        assert_eq!(ours(&a).shift_right(places), ours(&(&a / &scale)));
    }
}

#[test]
fn addition_laws() {
    let mut rng = StdRng::seed_from_u64(4);
    for _ in 0..50 {
        let (a, b) = random_pair(&mut rng);
        let (c, _) = random_pair(&mut rng);
        let (x, y, z) = (ours(&a), ours(&b), ours(&c));

        assert_eq!(x.add(&BigInteger::zero()), x);
        assert_eq!(x.add(&y), y.add(&x));
        assert_eq!(x.add(&y).add(&z), x.add(&y.add(&z)));
        assert_eq!(x.add(&y).subtract(&y), x);
    }
}

#[test]
fn multiplication_laws() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..50 {
        let (a, b) = random_pair(&mut rng);
        let (c, _) = random_pair(&mut rng);
        let (x, y, z) = (ours(&a), ours(&b), ours(&c));

        assert_eq!(x.multiply(&BigInteger::one()), x);
        assert!(x.multiply(&BigInteger::zero()).is_zero());
        assert_eq!(x.multiply(&y), y.multiply(&x));
        assert_eq!(x.multiply(&y.add(&z)), x.multiply(&y).add(&x.multiply(&z)));
    }
}

#[test]
fn division_reconstructs_dividend() {
    let mut rng = StdRng::seed_from_u64(6);
    for _ in 0..100 {
        let (a, b) = random_pair(&mut rng);
        if b.is_zero() {
            continue;
        }
        let (x, y) = (ours(&a), ours(&b));
        let (q, r) = x.divide(&y).unwrap();

        assert_eq!(q.multiply(&y).add(&r), x);
        assert_eq!(r.cmp_abs(&y), Ordering::Less);
        assert!(r.is_zero() || r.is_negative() == x.is_negative());
    }
}

#[test]
fn mod_pow_matches_oracle() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..5 {
        let base = rng.gen_biguint(200);
        let exponent = rng.gen_biguint(64);
        let modulus = rng.gen_biguint(180) + 2u32;

        let expected = base.modpow(&exponent, &modulus);
        let actual = big(&base.to_string())
            .mod_pow(&big(&exponent.to_string()), &big(&modulus.to_string()))
            .unwrap();
        assert_eq!(actual.to_string(), expected.to_string());
    }
}

#[test]
fn mod_pow_at_rsa_size_on_a_worker_thread() {
    let mut rng = StdRng::seed_from_u64(8);
    let modulus = rng.gen_biguint(2048) | BigUint::one();
    let exponent = (BigUint::one() << 2047u32) + 1u32;
    let base = rng.gen_biguint(2040);
    let expected = base.modpow(&exponent, &modulus).to_string();

    let (base, exponent, modulus) = (
        big(&base.to_string()),
        big(&exponent.to_string()),
        big(&modulus.to_string()),
    );
    let actual = std::thread::spawn(move || base.mod_pow(&exponent, &modulus))
        .join()
        .unwrap()
        .unwrap();
    assert_eq!(actual.to_string(), expected);
}

#[test]
fn operands_shared_across_threads() {
    let a = big("123456789012345678901234567890123456789012345678901234567890");
    let b = big("-987654321098765432109876543210");
    let expected_product = a.multiply(&b);
    let expected_quotient = a.divide(&b).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(|| {
                    let product = a.multiply(&b);
                    let quotient = a.divide(&b).unwrap();
                    let sum = a.add(&b).subtract(&b);
                    (product, quotient, sum)
                })
            })
            .collect();

        for handle in handles {
            let (product, quotient, sum) = handle.join().unwrap();
            assert_eq!(product, expected_product);
            assert_eq!(quotient, expected_quotient);
            assert_eq!(sum, a);
        }
    });

    assert_eq!(b.to_string(), "-987654321098765432109876543210");
}

#[test]
fn scenario_cluster_overflow_carry() {
    assert_eq!(
        big("999999999999999999").add(&big("1")).to_string(),
        "1000000000000000000"
    );
}

#[test]
fn scenario_negative_subtraction() {
    assert_eq!(big("-500").subtract(&big("12")).to_string(), "-512");
}

#[test]
fn scenario_single_cluster_multiply() {
    assert_eq!(
        big("123456789").multiply(&big("987654321")).to_string(),
        "121932631112635269"
    );
}

#[test]
fn scenario_divide_by_negative() {
    let (q, r) = big("10").divide(&big("-2")).unwrap();
    assert_eq!(q.to_string(), "-5");
    assert_eq!(r.to_string(), "0");
}

#[test]
fn scenario_rsa_round_trip() {
    let n = big("3658315382137043");
    let e = big("17");
    let d = big("3012726845747393");
    let m = big("123456");

    let c = rsa::encrypt(&n, &e, &m).unwrap();
    assert_eq!(rsa::decrypt(&n, &d, &c).unwrap(), m);
}

#[test]
fn rsa_text_with_large_key() {
    let n = big("47594980475625417724408267823112764463863576918685226363032787239910118740004860624166859668486833021538759738968887527");
    let e = big("17");
    let d = big("22397637870882549517368596622641300924171095020557753582603446902846197377658196974714575577237681892436409853219169457");

    let message = big(&AsciiEncoder.encode("Zero Based").unwrap());
    let c = rsa::encrypt(&n, &e, &message).unwrap();
    assert_eq!(
        c.to_string(),
        "31312948014556042611160686406620009807261662197978652868099518762269081613834260741776220805223546622281858520526259794"
    );

    let decrypted = rsa::decrypt(&n, &d, &c).unwrap();
    assert_eq!(AsciiEncoder.decode(&decrypted.to_string()).unwrap(), "Zero Based");
}
