//! Decimal formatting and parsing.
//!
//! The text form is plain decimal with an optional leading `-`; the
//! formatter never emits leading zeros (other than the single digit `0`).
//! Conversion in both directions goes through nine-digit chunks, which
//! keep every intermediate below `2^31`.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::arith::{add_small, divmod_small, mul_small};
use super::{BigInt, Sign};

const CHUNK_DIGITS: usize = 9;
const CHUNK_BASE: u32 = 1_000_000_000;

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sign == Sign::Zero {
            return f.write_str("0");
        }
        let mut chunks: Vec<u32> = Vec::new();
        let mut magnitude = self.limbs.clone();
        while !magnitude.is_empty() {
            let (rest, chunk) = divmod_small(&magnitude, CHUNK_BASE);
            chunks.push(chunk);
            magnitude = rest;
        }
        if self.sign == Sign::Negative {
            f.write_str("-")?;
        }
        let mut chunks = chunks.into_iter().rev();
        write!(f, "{}", chunks.next().unwrap())?;
        for chunk in chunks {
            write!(f, "{:09}", chunk)?;
        }
        Ok(())
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParseBigIntError {
    #[error("empty input")]
    Empty,
    #[error("invalid decimal digit")]
    InvalidDigit,
}

impl FromStr for BigInt {
    type Err = ParseBigIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        if digits.is_empty() {
            return Err(ParseBigIntError::Empty);
        }
        if !digits.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(ParseBigIntError::InvalidDigit);
        }
        let mut limbs: Vec<u32> = Vec::new();
        let mut pos = 0;
        let mut end = match digits.len() % CHUNK_DIGITS {
            0 => CHUNK_DIGITS.min(digits.len()),
            first => first,
        };
        while pos < digits.len() {
            let chunk: u32 = digits[pos..end].parse().unwrap();
            limbs = mul_small(&limbs, 10u32.pow((end - pos) as u32));
            limbs = add_small(&limbs, chunk);
            pos = end;
            end = (pos + CHUNK_DIGITS).min(digits.len());
        }
        let sign = match (limbs.is_empty(), negative) {
            (true, _) => Sign::Zero,
            (false, true) => Sign::Negative,
            (false, false) => Sign::Positive,
        };
        Ok(BigInt { sign, limbs })
    }
}
