//! Periodicity analysis for sets of wheel moduli.
//!
//! Independent wheels stepping together revisit a joint position only after
//! the least common multiple of their moduli. When the moduli are pairwise
//! coprime that is their full product, the longest period possible for the
//! given table sizes.
//!
//! The production wheels are far too long to walk, so [`count_joint_states`]
//! and [`joint_return_steps`] exist to check the property on scaled-down
//! models such as `[14, 15, 23, 29]`.

use std::collections::HashSet;

use crate::wheel::WHEEL_SIZES;
use crate::wraparound::successor_table;

/// Greatest common divisor of `a` and `b`.
pub const fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Returns `true` if no two entries of `moduli` share a factor.
///
/// # Examples
///
/// ```
/// use rotorcrypt::period::pairwise_coprime;
///
/// assert!(pairwise_coprime(&[14, 15, 23, 29]));
/// assert!(!pairwise_coprime(&[14, 21]));
/// ```
pub const fn pairwise_coprime(moduli: &[u16]) -> bool {
    let mut i = 0;
    while i < moduli.len() {
        let mut j = i + 1;
        while j < moduli.len() {
            if gcd(moduli[i] as u128, moduli[j] as u128) != 1 {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

/// Number of steps before a set of wheels returns to its joint start.
///
/// This is the least common multiple of `moduli`; an empty set has period 1.
///
/// # Returns
/// `None` if any modulus is 0 or the period does not fit in a `u128`.
///
/// # Examples
///
/// ```
/// use rotorcrypt::period::combined_period;
///
/// assert_eq!(combined_period(&[4, 6]), Some(12));
/// assert_eq!(combined_period(&[3, 0]), None);
/// ```
pub const fn combined_period(moduli: &[u16]) -> Option<u128> {
    let mut period: u128 = 1;
    let mut i = 0;
    while i < moduli.len() {
        let m = moduli[i] as u128;
        if m == 0 {
            return None;
        }
        period = match (period / gcd(period, m)).checked_mul(m) {
            Some(p) => p,
            None => return None,
        };
        i += 1;
    }
    Some(period)
}

/// Period of a single cipher state: 256*253*251*249*247*245*241*239.
pub const WHEEL_PERIOD: u128 = match combined_period(&WHEEL_SIZES) {
    Some(period) => period,
    None => panic!("wheel period overflows u128"),
};

const _: () = assert!(pairwise_coprime(&WHEEL_SIZES));

/// Period of `moduli` as a walkable step count.
fn walk_length(moduli: &[u16]) -> Option<u64> {
    combined_period(moduli).and_then(|period| u64::try_from(period).ok())
}

/// Steps a joint counter over `moduli` through one full [`combined_period`]
/// and counts the distinct position combinations it visits.
///
/// For pairwise-coprime moduli the result equals the product of the moduli:
/// every combination is reached exactly once. Intended for small models; the
/// walk is linear in the period.
///
/// # Returns
/// `None` if any modulus is 0 or the period does not fit in a `u64`.
pub fn count_joint_states(moduli: &[u16]) -> Option<u64> {
    let period = walk_length(moduli)?;
    let tables: Vec<Vec<u16>> = moduli.iter().map(|&m| successor_table(m)).collect();
    let mut positions = vec![0u16; moduli.len()];
    let mut seen = HashSet::new();

    for _ in 0..period {
        seen.insert(positions.clone());
        step(&tables, &mut positions);
    }
    Some(seen.len() as u64)
}

/// Returns the first step count (at least 1) after which every wheel over
/// `moduli` is back at position 0.
///
/// # Returns
/// `None` if any modulus is 0 or the period does not fit in a `u64`.
///
/// # Examples
///
/// ```
/// use rotorcrypt::period::joint_return_steps;
///
/// assert_eq!(joint_return_steps(&[4, 6]), Some(12));
/// assert_eq!(joint_return_steps(&[5, 7]), Some(35));
/// assert_eq!(joint_return_steps(&[3, 0]), None);
/// ```
pub fn joint_return_steps(moduli: &[u16]) -> Option<u64> {
    walk_length(moduli)?;
    let tables: Vec<Vec<u16>> = moduli.iter().map(|&m| successor_table(m)).collect();
    let mut positions = vec![0u16; moduli.len()];
    let mut steps = 0u64;
    loop {
        step(&tables, &mut positions);
        steps += 1;
        if positions.iter().all(|&p| p == 0) {
            return Some(steps);
        }
    }
}

fn step(tables: &[Vec<u16>], positions: &mut [u16]) {
    for (pos, table) in positions.iter_mut().zip(tables) {
        *pos = table[*pos as usize];
    }
}
