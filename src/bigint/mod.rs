// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Arbitrary-precision signed integer.
//!
//! The magnitude is a sequence of 31-bit digits packed in `u32` limbs,
//! least significant first; the sign is carried separately. Invariants:
//! the most significant limb is non-zero, every limb is `< 2^31`, and the
//! sign is [`Sign::Zero`] exactly when there are no limbs. Limb-level
//! arithmetic stays unsigned; signs are handled by case split.

mod arith;
mod fmt;

use std::cmp::Ordering;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use self::arith::{add_mag, cmp_mag, div_rem_mag, mul_mag, sub_mag, MASK, SHIFT};

pub use self::fmt::ParseBigIntError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sign {
    Negative,
    Zero,
    Positive,
}

impl Sign {
    fn flip(self) -> Self {
        match self {
            Sign::Negative => Sign::Positive,
            Sign::Zero => Sign::Zero,
            Sign::Positive => Sign::Negative,
        }
    }

    fn product(self, other: Self) -> Self {
        match (self, other) {
            (Sign::Zero, _) | (_, Sign::Zero) => Sign::Zero,
            (a, b) if a == b => Sign::Positive,
            _ => Sign::Negative,
        }
    }
}

/// Representation defect reported by [`BigInt::check`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BigIntDefect {
    #[error("sign does not match the limb count")]
    InvalidSize,
    #[error("a limb exceeds 31 bits")]
    InvalidDigits,
    #[error("most significant limb is zero")]
    LeadingZeros,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("big integer is out of the i64 range")]
pub struct TryFromBigIntError;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BigInt {
    sign: Sign,
    limbs: Vec<u32>,
}

impl BigInt {
    pub fn sign(&self) -> Sign {
        self.sign
    }

    pub fn is_zero(&self) -> bool {
        self.sign == Sign::Zero
    }

    /// Diagnoses representation defects. Values built through the public
    /// API always pass; the checker exists so that debugging tools can
    /// validate a suspect value.
    pub fn check(&self) -> Result<(), BigIntDefect> {
        let empty = self.limbs.is_empty();
        if (self.sign == Sign::Zero) != empty {
            return Err(BigIntDefect::InvalidSize);
        }
        if self.limbs.iter().any(|&limb| limb > MASK) {
            return Err(BigIntDefect::InvalidDigits);
        }
        if self.limbs.last() == Some(&0) {
            return Err(BigIntDefect::LeadingZeros);
        }
        Ok(())
    }

    /// Truncating division; `None` on a zero divisor.
    pub fn checked_div(&self, divisor: &BigInt) -> Option<BigInt> {
        self.div_rem(divisor).map(|(quotient, _)| quotient)
    }

    /// Remainder of the truncating division (same sign as the dividend);
    /// `None` on a zero divisor.
    pub fn checked_rem(&self, divisor: &BigInt) -> Option<BigInt> {
        self.div_rem(divisor).map(|(_, remainder)| remainder)
    }

    fn div_rem(&self, divisor: &BigInt) -> Option<(BigInt, BigInt)> {
        if divisor.is_zero() {
            return None;
        }
        if self.is_zero() {
            return Some((BigInt::zero(), BigInt::zero()));
        }
        let (q_mag, r_mag) = div_rem_mag(&self.limbs, &divisor.limbs);
        Some((
            BigInt::from_sign_mag(self.sign.product(divisor.sign), q_mag),
            BigInt::from_sign_mag(self.sign, r_mag),
        ))
    }

    fn zero() -> Self {
        BigInt {
            sign: Sign::Zero,
            limbs: Vec::new(),
        }
    }

    fn from_sign_mag(sign: Sign, limbs: Vec<u32>) -> Self {
        if limbs.is_empty() {
            BigInt::zero()
        } else {
            BigInt { sign, limbs }
        }
    }

    #[cfg(test)]
    pub(crate) fn from_raw_parts(sign: Sign, limbs: Vec<u32>) -> Self {
        BigInt { sign, limbs }
    }
}

impl From<i64> for BigInt {
    fn from(value: i64) -> Self {
        let (sign, mut magnitude) = match value.cmp(&0) {
            Ordering::Equal => return BigInt::zero(),
            Ordering::Greater => (Sign::Positive, value as u64),
            // Two's-complement negation; also maps i64::MIN to 2^63
            // without overflowing a signed intermediate.
            Ordering::Less => (Sign::Negative, (value as u64).wrapping_neg()),
        };
        let mut limbs = Vec::new();
        while magnitude != 0 {
            limbs.push((magnitude as u32) & MASK);
            magnitude >>= SHIFT;
        }
        BigInt { sign, limbs }
    }
}

impl TryFrom<&BigInt> for i64 {
    type Error = TryFromBigIntError;

    fn try_from(value: &BigInt) -> Result<i64, TryFromBigIntError> {
        let mut magnitude: u128 = 0;
        for &limb in value.limbs.iter().rev() {
            magnitude = (magnitude << SHIFT) | u128::from(limb);
            if magnitude > u128::from(u64::MAX) {
                return Err(TryFromBigIntError);
            }
        }
        match value.sign {
            Sign::Zero => Ok(0),
            Sign::Positive => {
                if magnitude <= i64::MAX as u128 {
                    Ok(magnitude as i64)
                } else {
                    Err(TryFromBigIntError)
                }
            }
            Sign::Negative => {
                if magnitude < 1 << 63 {
                    Ok(-(magnitude as i64))
                } else if magnitude == 1 << 63 {
                    Ok(i64::MIN)
                } else {
                    Err(TryFromBigIntError)
                }
            }
        }
    }
}

impl TryFrom<BigInt> for i64 {
    type Error = TryFromBigIntError;

    fn try_from(value: BigInt) -> Result<i64, TryFromBigIntError> {
        i64::try_from(&value)
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.sign.cmp(&other.sign) {
            Ordering::Equal => match self.sign {
                Sign::Zero => Ordering::Equal,
                Sign::Positive => cmp_mag(&self.limbs, &other.limbs),
                Sign::Negative => cmp_mag(&other.limbs, &self.limbs),
            },
            unequal => unequal,
        }
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(mut self) -> BigInt {
        self.sign = self.sign.flip();
        self
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        -self.clone()
    }
}

fn add_signed(a: &BigInt, b: &BigInt) -> BigInt {
    match (a.sign, b.sign) {
        (Sign::Zero, _) => b.clone(),
        (_, Sign::Zero) => a.clone(),
        (x, y) if x == y => BigInt::from_sign_mag(x, add_mag(&a.limbs, &b.limbs)),
        _ => match cmp_mag(&a.limbs, &b.limbs) {
            Ordering::Equal => BigInt::zero(),
            Ordering::Greater => BigInt::from_sign_mag(a.sign, sub_mag(&a.limbs, &b.limbs)),
            Ordering::Less => BigInt::from_sign_mag(b.sign, sub_mag(&b.limbs, &a.limbs)),
        },
    }
}

impl Add<&BigInt> for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: &BigInt) -> BigInt {
        add_signed(self, rhs)
    }
}

impl Add for BigInt {
    type Output = BigInt;

    fn add(self, rhs: BigInt) -> BigInt {
        add_signed(&self, &rhs)
    }
}

impl Sub<&BigInt> for &BigInt {
    type Output = BigInt;

    fn sub(self, rhs: &BigInt) -> BigInt {
        let negated = BigInt {
            sign: rhs.sign.flip(),
            limbs: rhs.limbs.clone(),
        };
        add_signed(self, &negated)
    }
}

impl Sub for BigInt {
    type Output = BigInt;

    fn sub(self, rhs: BigInt) -> BigInt {
        &self - &rhs
    }
}

impl Mul<&BigInt> for &BigInt {
    type Output = BigInt;

    fn mul(self, rhs: &BigInt) -> BigInt {
        BigInt::from_sign_mag(
            self.sign.product(rhs.sign),
            mul_mag(&self.limbs, &rhs.limbs),
        )
    }
}

impl Mul for BigInt {
    type Output = BigInt;

    fn mul(self, rhs: BigInt) -> BigInt {
        &self * &rhs
    }
}

impl Div<&BigInt> for &BigInt {
    type Output = BigInt;

    fn div(self, rhs: &BigInt) -> BigInt {
        self.checked_div(rhs).expect("division by zero")
    }
}

impl Div for BigInt {
    type Output = BigInt;

    fn div(self, rhs: BigInt) -> BigInt {
        &self / &rhs
    }
}

impl Rem<&BigInt> for &BigInt {
    type Output = BigInt;

    fn rem(self, rhs: &BigInt) -> BigInt {
        self.checked_rem(rhs).expect("division by zero")
    }
}

impl Rem for BigInt {
    type Output = BigInt;

    fn rem(self, rhs: BigInt) -> BigInt {
        &self % &rhs
    }
}
