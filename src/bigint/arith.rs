// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Unsigned magnitude routines over 31-bit limbs.
//!
//! Every limb is `< 2^31`, so two limbs and a carry always fit in `u32`
//! and products fit comfortably in `u64`. All inputs and outputs are
//! canonical: no leading (most significant) zero limbs.

use std::cmp::Ordering;

pub(super) const SHIFT: u32 = 31;
pub(super) const MASK: u32 = 0x7FFF_FFFF;

pub(super) fn trim(limbs: &mut Vec<u32>) {
    while limbs.last() == Some(&0) {
        limbs.pop();
    }
}

pub(super) fn cmp_mag(a: &[u32], b: &[u32]) -> Ordering {
    if a.len() != b.len() {
        return a.len().cmp(&b.len());
    }
    for (x, y) in a.iter().rev().zip(b.iter().rev()) {
        match x.cmp(y) {
            Ordering::Equal => {}
            other => return other,
        }
    }
    Ordering::Equal
}

pub(super) fn add_mag(a: &[u32], b: &[u32]) -> Vec<u32> {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut out = Vec::with_capacity(long.len() + 1);
    let mut carry = 0u32;
    for (i, &limb) in long.iter().enumerate() {
        // limb + limb + carry <= 2^32 - 1: the spare bit absorbs the carry.
        let sum = limb + short.get(i).copied().unwrap_or(0) + carry;
        out.push(sum & MASK);
        carry = sum >> SHIFT;
    }
    if carry != 0 {
        out.push(carry);
    }
    out
}

/// Requires `a >= b`.
pub(super) fn sub_mag(a: &[u32], b: &[u32]) -> Vec<u32> {
    let mut out = Vec::with_capacity(a.len());
    let mut borrow = 0u32;
    for (i, &limb) in a.iter().enumerate() {
        let rhs = b.get(i).copied().unwrap_or(0) + borrow;
        if limb >= rhs {
            borrow = 0;
            out.push(limb - rhs);
        } else {
            borrow = 1;
            out.push(limb + (1 << SHIFT) - rhs);
        }
    }
    trim(&mut out);
    out
}

pub(super) fn mul_mag(a: &[u32], b: &[u32]) -> Vec<u32> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let mut out = vec![0u32; a.len() + b.len()];
    for (i, &ai) in a.iter().enumerate() {
        let mut carry: u64 = 0;
        for (j, &bj) in b.iter().enumerate() {
            let cur = u64::from(out[i + j]) + u64::from(ai) * u64::from(bj) + carry;
            out[i + j] = (cur & u64::from(MASK)) as u32;
            carry = cur >> SHIFT;
        }
        let mut k = i + b.len();
        while carry != 0 {
            let cur = u64::from(out[k]) + carry;
            out[k] = (cur & u64::from(MASK)) as u32;
            carry = cur >> SHIFT;
            k += 1;
        }
    }
    trim(&mut out);
    out
}

/// Binary long division of magnitudes. Requires a non-empty divisor.
pub(super) fn div_rem_mag(a: &[u32], b: &[u32]) -> (Vec<u32>, Vec<u32>) {
    if cmp_mag(a, b) == Ordering::Less {
        return (Vec::new(), a.to_vec());
    }
    let mut quotient = vec![0u32; a.len()];
    let mut remainder: Vec<u32> = Vec::new();
    for bit in (0..a.len() * SHIFT as usize).rev() {
        shl1(&mut remainder);
        if (a[bit / SHIFT as usize] >> (bit % SHIFT as usize)) & 1 == 1 {
            match remainder.first_mut() {
                Some(low) => *low |= 1,
                None => remainder.push(1),
            }
        }
        if cmp_mag(&remainder, b) != Ordering::Less {
            remainder = sub_mag(&remainder, b);
            quotient[bit / SHIFT as usize] |= 1 << (bit % SHIFT as usize);
        }
    }
    trim(&mut quotient);
    (quotient, remainder)
}

pub(super) fn divmod_small(a: &[u32], divisor: u32) -> (Vec<u32>, u32) {
    let mut out = vec![0u32; a.len()];
    let mut rem: u64 = 0;
    for i in (0..a.len()).rev() {
        let cur = (rem << SHIFT) | u64::from(a[i]);
        out[i] = (cur / u64::from(divisor)) as u32;
        rem = cur % u64::from(divisor);
    }
    trim(&mut out);
    (out, rem as u32)
}

pub(super) fn mul_small(a: &[u32], multiplier: u32) -> Vec<u32> {
    let mut out = Vec::with_capacity(a.len() + 2);
    let mut carry: u64 = 0;
    for &limb in a {
        let cur = u64::from(limb) * u64::from(multiplier) + carry;
        out.push((cur & u64::from(MASK)) as u32);
        carry = cur >> SHIFT;
    }
    while carry != 0 {
        out.push((carry & u64::from(MASK)) as u32);
        carry >>= SHIFT;
    }
    trim(&mut out);
    out
}

pub(super) fn add_small(a: &[u32], addend: u32) -> Vec<u32> {
    if addend == 0 {
        return a.to_vec();
    }
    add_mag(a, &[addend])
}

fn shl1(limbs: &mut Vec<u32>) {
    let mut carry = 0u32;
    for limb in limbs.iter_mut() {
        let doubled = (*limb << 1) | carry;
        *limb = doubled & MASK;
        carry = doubled >> SHIFT;
    }
    if carry != 0 {
        limbs.push(carry);
    }
}
