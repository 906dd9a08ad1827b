// Operator and numeric trait implementations
//
// `/` and `%` panic on a zero divisor, like the primitive integers; use
// `BigInteger::divide` for the checked form.

use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

use num_integer::Integer;
use num_traits::{Num, One, Signed, Zero};

use super::{BigInteger, ParseError};

fn quotient(a: &BigInteger, b: &BigInteger) -> BigInteger {
    match a.divide(b) {
        Ok((quotient, _)) => quotient,
        Err(e) => panic!("attempt to divide {a} by {b}: {e}"),
    }
}

fn remainder(a: &BigInteger, b: &BigInteger) -> BigInteger {
    match a.divide(b) {
        Ok((_, remainder)) => remainder,
        Err(e) => panic!("attempt to calculate the remainder of {a} by {b}: {e}"),
    }
}

macro_rules! forward_binop {
    ($imp:ident, $method:ident, $func:path) => {
        impl $imp<&BigInteger> for &BigInteger {
            type Output = BigInteger;

            fn $method(self, rhs: &BigInteger) -> BigInteger {
                $func(self, rhs)
            }
        }

        impl $imp<BigInteger> for &BigInteger {
            type Output = BigInteger;

            fn $method(self, rhs: BigInteger) -> BigInteger {
                $func(self, &rhs)
            }
        }

        impl $imp<&BigInteger> for BigInteger {
            type Output = BigInteger;

            fn $method(self, rhs: &BigInteger) -> BigInteger {
                $func(&self, rhs)
            }
        }

        impl $imp<BigInteger> for BigInteger {
            type Output = BigInteger;

            fn $method(self, rhs: BigInteger) -> BigInteger {
                $func(&self, &rhs)
            }
        }
    };
}

forward_binop!(Add, add, BigInteger::add);
forward_binop!(Sub, sub, BigInteger::subtract);
forward_binop!(Mul, mul, BigInteger::multiply);
forward_binop!(Div, div, quotient);
forward_binop!(Rem, rem, remainder);

impl Neg for BigInteger {
    type Output = BigInteger;

    fn neg(self) -> BigInteger {
        let negative = !self.negative;
        self.with_sign(negative)
    }
}

impl Neg for &BigInteger {
    type Output = BigInteger;

    fn neg(self) -> BigInteger {
        self.negated()
    }
}

impl Num for BigInteger {
    type FromStrRadixErr = ParseError;

    fn from_str_radix(text: &str, radix: u32) -> Result<Self, ParseError> {
        if radix != 10 {
            return Err(ParseError::UnsupportedRadix(radix));
        }
        text.parse()
    }
}

impl Signed for BigInteger {
    fn abs(&self) -> Self {
        BigInteger::abs(self)
    }

    fn abs_sub(&self, other: &Self) -> Self {
        if self <= other {
            Self::zero()
        } else {
            self.subtract(other)
        }
    }

    fn signum(&self) -> Self {
        if self.is_zero() {
            Self::zero()
        } else if self.negative {
            -Self::one()
        } else {
            Self::one()
        }
    }

    fn is_positive(&self) -> bool {
        BigInteger::is_positive(self)
    }

    fn is_negative(&self) -> bool {
        BigInteger::is_negative(self)
    }
}

impl Integer for BigInteger {
    fn div_floor(&self, other: &Self) -> Self {
        let (quotient, remainder) = Integer::div_rem(self, other);
        if !remainder.is_zero() && remainder.negative != other.negative {
            quotient - Self::one()
        } else {
            quotient
        }
    }

    fn mod_floor(&self, other: &Self) -> Self {
        let remainder = self % other;
        if !remainder.is_zero() && remainder.negative != other.negative {
            remainder + other
        } else {
            remainder
        }
    }

    /// Euclid's algorithm; the result is never negative
    fn gcd(&self, other: &Self) -> Self {
        let mut a = BigInteger::abs(self);
        let mut b = BigInteger::abs(other);
        while !b.is_zero() {
            let r = &a % &b;
            a = b;
            b = r;
        }
        a
    }

    fn lcm(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        (self * other).abs() / self.gcd(other)
    }

    fn is_multiple_of(&self, other: &Self) -> bool {
        if other.is_zero() {
            return self.is_zero();
        }
        (self % other).is_zero()
    }

    fn is_even(&self) -> bool {
        BigInteger::is_even(self)
    }

    fn is_odd(&self) -> bool {
        !BigInteger::is_even(self)
    }

    fn div_rem(&self, other: &Self) -> (Self, Self) {
        match self.divide(other) {
            Ok(pair) => pair,
            Err(e) => panic!("attempt to divide {self} by {other}: {e}"),
        }
    }
}
