//! Successor tables for division-free wheel advance.
//!
//! For a wheel of modulus `m`, entry `i` of its successor table holds
//! `(i + 1) mod m`, so stepping a wheel is a single lookup. The 256 wheel
//! needs no table: an 8-bit counter wraps on overflow.

/// Builds the successor table of a wheel with modulus `M` (2..=256).
const fn successors<const M: usize>() -> [u8; M] {
    let mut table = [0u8; M];
    let mut i = 0;
    while i + 1 < M {
        table[i] = (i + 1) as u8;
        i += 1;
    }
    table
}

/// Returns `true` if `table` maps every index to the next one and its last
/// index back to 0, i.e. it walks a single cycle through every position.
const fn is_single_cycle(table: &[u8]) -> bool {
    let n = table.len();
    if n == 0 {
        return false;
    }
    let mut i = 0;
    while i < n {
        let expected = if i + 1 == n { 0 } else { i + 1 };
        if table[i] as usize != expected {
            return false;
        }
        i += 1;
    }
    true
}

/// Successor tables for every wheel except the 256 wheel.
pub(crate) struct WraparoundTable {
    pub(crate) w253: [u8; 253],
    pub(crate) w251: [u8; 251],
    pub(crate) w249: [u8; 249],
    pub(crate) w247: [u8; 247],
    pub(crate) w245: [u8; 245],
    pub(crate) w241: [u8; 241],
    pub(crate) w239: [u8; 239],
}

impl WraparoundTable {
    const fn new() -> Self {
        WraparoundTable {
            w253: successors::<253>(),
            w251: successors::<251>(),
            w249: successors::<249>(),
            w247: successors::<247>(),
            w245: successors::<245>(),
            w241: successors::<241>(),
            w239: successors::<239>(),
        }
    }

    const fn is_valid(&self) -> bool {
        is_single_cycle(&self.w253)
            && is_single_cycle(&self.w251)
            && is_single_cycle(&self.w249)
            && is_single_cycle(&self.w247)
            && is_single_cycle(&self.w245)
            && is_single_cycle(&self.w241)
            && is_single_cycle(&self.w239)
    }
}

const _: () = assert!(WraparoundTable::new().is_valid());

/// Shared successor tables, read by every [`CipherState`](crate::CipherState).
pub(crate) static SUCCESSORS: WraparoundTable = WraparoundTable::new();

/// Builds a successor table for an arbitrary modulus.
///
/// Used by the scaled-down models in [`crate::period`]; the production wheels
/// read the compile-time tables instead.
///
/// # Examples
///
/// ```
/// use rotorcrypt::successor_table;
///
/// assert_eq!(successor_table(4), vec![1, 2, 3, 0]);
/// ```
pub fn successor_table(modulus: u16) -> Vec<u16> {
    (0..modulus)
        .map(|i| if i + 1 == modulus { 0 } else { i + 1 })
        .collect()
}
