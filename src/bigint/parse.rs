// Decimal text conversion
// Splits digit strings into 18-digit clusters and renders them back

use std::fmt;
use std::str::FromStr;

use super::{BigInteger, ParseError, CLUSTER_BASE, CLUSTER_DIGITS};

impl FromStr for BigInteger {
    type Err = ParseError;

    /// Parse an optionally `-`-prefixed run of decimal digits.
    ///
    /// Leading zeros are accepted and dropped; `-0` parses as zero.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let (negative, body) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };

        if body.is_empty() {
            return Err(ParseError::Empty);
        }

        if let Some((index, found)) = body.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
            return Err(ParseError::InvalidDigit {
                position: index + usize::from(negative),
                found,
            });
        }

        // Fixed-width clusters from the least significant end; the last one
        // takes whatever 1..=18 digits remain
        let digits = body.as_bytes();
        let mut clusters = Vec::with_capacity(digits.len() / CLUSTER_DIGITS + 1);
        let mut end = digits.len();
        while end > 0 {
            let start = end.saturating_sub(CLUSTER_DIGITS);
            let cluster = digits[start..end]
                .iter()
                .fold(0u64, |acc, &d| acc * 10 + u64::from(d - b'0'));
            clusters.push(cluster);
            end = start;
        }

        Ok(Self::from_clusters(negative, clusters))
    }
}

impl fmt::Display for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut clusters = self.clusters.iter().rev();
        let mut magnitude = String::with_capacity(self.digits);

        if let Some(leading) = clusters.next() {
            magnitude.push_str(&leading.to_string());
        }
        for cluster in clusters {
            magnitude.push_str(&format!("{:0width$}", cluster, width = CLUSTER_DIGITS));
        }

        f.pad_integral(!self.negative, "", &magnitude)
    }
}

impl From<u64> for BigInteger {
    fn from(value: u64) -> Self {
        Self::from_clusters(false, vec![value % CLUSTER_BASE, value / CLUSTER_BASE])
    }
}

impl From<u32> for BigInteger {
    fn from(value: u32) -> Self {
        Self::from(u64::from(value))
    }
}

impl From<i64> for BigInteger {
    fn from(value: i64) -> Self {
        Self::from(value.unsigned_abs()).with_sign(value < 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::Zero;

    fn parse(text: &str) -> BigInteger {
        text.parse().unwrap()
    }

    #[test]
    fn test_parse_single_cluster() {
        let value = parse("123456789");
        assert_eq!(value.clusters(), &[123456789]);
        assert_eq!(value.digit_len(), 9);
        assert!(!value.is_negative());
    }

    #[test]
    fn test_parse_splits_from_least_significant_end() {
        let value = parse("1234567890123456789012");
        assert_eq!(value.clusters(), &[567890123456789012, 1234]);
        assert_eq!(value.digit_len(), 22);

        let exact = parse("999999999999999999");
        assert_eq!(exact.cluster_len(), 1);

        let boundary = parse("1000000000000000000");
        assert_eq!(boundary.clusters(), &[0, 1]);
    }

    #[test]
    fn test_parse_sign_and_leading_zeros() {
        let value = parse("-000042");
        assert!(value.is_negative());
        assert_eq!(value.clusters(), &[42]);
        assert_eq!(value.digit_len(), 2);

        let zero = parse("-0000");
        assert!(zero.is_zero());
        assert!(!zero.is_negative());
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<BigInteger>(), Err(ParseError::Empty));
        assert_eq!("-".parse::<BigInteger>(), Err(ParseError::Empty));
        assert_eq!(
            "12a4".parse::<BigInteger>(),
            Err(ParseError::InvalidDigit { position: 2, found: 'a' })
        );
        assert_eq!(
            "-1-2".parse::<BigInteger>(),
            Err(ParseError::InvalidDigit { position: 2, found: '-' })
        );
        assert_eq!(
            "+5".parse::<BigInteger>(),
            Err(ParseError::InvalidDigit { position: 0, found: '+' })
        );
        assert_eq!(
            " 5".parse::<BigInteger>(),
            Err(ParseError::InvalidDigit { position: 0, found: ' ' })
        );
    }

    #[test]
    fn test_display_pads_inner_clusters() {
        let value = BigInteger::from_clusters(false, vec![7, 0, 3]);
        assert_eq!(value.to_string(), "3000000000000000000000000000000000007");

        let negative = BigInteger::from_clusters(true, vec![5, 1]);
        assert_eq!(negative.to_string(), "-1000000000000000005");

        assert_eq!(BigInteger::zero().to_string(), "0");
    }

    #[test]
    fn test_display_honours_width() {
        assert_eq!(format!("{:>6}", parse("-42")), "   -42");
        assert_eq!(format!("{:06}", parse("-42")), "-00042");
        assert_eq!(format!("{:+}", parse("42")), "+42");
    }

    #[test]
    fn test_round_trip() {
        for text in [
            "0",
            "7",
            "-7",
            "999999999999999999",
            "1000000000000000000",
            "-123456789012345678901234567890123456789",
            "100000000000000000000000000000000000000000000000000000",
        ] {
            assert_eq!(parse(text).to_string(), text);
            assert_eq!(parse(&parse(text).to_string()), parse(text));
        }
    }

    #[test]
    fn test_from_primitives() {
        assert_eq!(BigInteger::from(u64::MAX).to_string(), u64::MAX.to_string());
        assert_eq!(BigInteger::from(i64::MIN).to_string(), i64::MIN.to_string());
        assert_eq!(BigInteger::from(0i64), BigInteger::zero());
        assert_eq!(BigInteger::from(17u32), parse("17"));
    }
}
