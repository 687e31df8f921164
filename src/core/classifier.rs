//! Pure numeric predicates.
//!
//! Negative inputs: parity uses the Euclidean remainder, so `-3` is odd.
//! Digit-based properties look at the magnitude only. A negative number is
//! never prime, perfect or Armstrong, so negative inputs classify normally
//! instead of being rejected.

use crate::domain::model::Property;

pub fn is_odd(n: i64) -> bool {
    n.rem_euclid(2) == 1
}

/// Trial division up to the integer square root.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }

    let mut i: i64 = 2;
    // i <= n / i 等同 i * i <= n，但不會溢位
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}

/// Sums every proper divisor in `[1, n-1]`.
///
/// Linear in `n`; fine for the small numbers this API sees, not for large ones.
pub fn is_perfect(n: i64) -> bool {
    if n <= 0 {
        return false;
    }

    let divisor_sum: i128 = (1..n).filter(|i| n % i == 0).map(i128::from).sum();
    divisor_sum == i128::from(n)
}

pub fn is_armstrong(n: i64) -> bool {
    if n < 0 {
        return false;
    }

    let digits = digits(n);
    let power = digits.len() as u32;
    let total: u128 = digits.iter().map(|&d| u128::from(d).pow(power)).sum();
    total == n as u128
}

pub fn digit_sum(n: i64) -> u32 {
    digits(n).iter().sum()
}

/// Decimal digits of `|n|`, most significant first.
fn digits(n: i64) -> Vec<u32> {
    n.unsigned_abs()
        .to_string()
        .chars()
        .filter_map(|c| c.to_digit(10))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberProfile {
    pub number: i64,
    pub is_odd: bool,
    pub is_prime: bool,
    pub is_perfect: bool,
    pub is_armstrong: bool,
    pub digit_sum: u32,
}

impl NumberProfile {
    /// Parity tag first, then prime / perfect / armstrong in that order.
    pub fn properties(&self) -> Vec<Property> {
        let mut properties = Vec::with_capacity(4);

        properties.push(if self.is_odd {
            Property::Odd
        } else {
            Property::Even
        });

        if self.is_prime {
            properties.push(Property::Prime);
        }
        if self.is_perfect {
            properties.push(Property::Perfect);
        }
        if self.is_armstrong {
            properties.push(Property::Armstrong);
        }

        properties
    }
}

pub fn classify(n: i64) -> NumberProfile {
    NumberProfile {
        number: n,
        is_odd: is_odd(n),
        is_prime: is_prime(n),
        is_perfect: is_perfect(n),
        is_armstrong: is_armstrong(n),
        digit_sum: digit_sum(n),
    }
}
