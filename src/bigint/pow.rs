// Modular exponentiation by square-and-multiply

use num_traits::{One, Zero};

use super::{BigInteger, Error};

impl BigInteger {
    /// `self^exponent mod modulus`
    ///
    /// Halves even exponents and peels one factor off odd ones, reducing every
    /// intermediate product with the division remainder. Returns
    /// `Error::DivisionByZero` for a zero modulus and `Error::NegativeExponent`
    /// for a negative exponent.
    pub fn mod_pow(&self, exponent: &Self, modulus: &Self) -> Result<Self, Error> {
        if modulus.is_zero() {
            return Err(Error::DivisionByZero);
        }
        if exponent.is_negative() {
            return Err(Error::NegativeExponent);
        }

        square_and_multiply(self, exponent, modulus)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    Square,
    Multiply,
}

/// Reduction steps from `exponent` down to zero, largest exponent first
fn exponent_chain(exponent: &BigInteger) -> Vec<Step> {
    let one = BigInteger::one();
    let mut steps = Vec::new();
    let mut rest = exponent.clone();

    while !rest.is_zero() {
        if rest.is_even() {
            steps.push(Step::Square);
            rest = rest.halve();
        } else {
            steps.push(Step::Multiply);
            rest = rest.subtract(&one);
        }
    }
    steps
}

fn square_and_multiply(
    base: &BigInteger,
    exponent: &BigInteger,
    modulus: &BigInteger,
) -> Result<BigInteger, Error> {
    // 1 mod 1 is 0
    let (_, mut result) = BigInteger::one().divide(modulus)?;

    // Replay the chain from exponent zero upward
    for step in exponent_chain(exponent).into_iter().rev() {
        let product = match step {
            Step::Square => result.multiply(&result),
            Step::Multiply => base.multiply(&result),
        };
        let (_, reduced) = product.divide(modulus)?;
        result = reduced;
    }
    Ok(result)
}
