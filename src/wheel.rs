//! WheelTableSet: the eight byte tables that the wheels read from.
//!
//! Each wheel is a cyclic counter over a table of pseudo-random bytes. The
//! moduli are pairwise coprime so the joint position of all wheels repeats
//! only after their product (see [`crate::period`]).
//!
//! Filling the tables is the caller's job. The set is immutable once built and
//! can be shared by any number of cipher states, across threads.

use log::{debug, warn};
use rand_core::RngCore;
use zeroize::Zeroize;

use crate::error::RotorCryptError;

/// Number of wheels in a cipher state.
pub const WHEEL_COUNT: usize = 8;

/// Modulus (table length) of each wheel, largest first.
///
/// 256 = 2^8, 253 = 11x23, 251 prime, 249 = 3x83, 247 = 13x19,
/// 245 = 5x7x7, 241 prime, 239 prime.
pub const WHEEL_SIZES: [u16; WHEEL_COUNT] = [256, 253, 251, 249, 247, 245, 241, 239];

/// Immutable set of eight wheel tables, one per entry of [`WHEEL_SIZES`].
///
/// Stored as one fixed-size array per wheel so that the keystream fold can
/// index each table without bounds arithmetic on a shared buffer.
///
/// # Examples
///
/// ```
/// use rotorcrypt::{WheelTableSet, WHEEL_SIZES};
///
/// let wheels = WheelTableSet::zeroed();
/// assert_eq!(wheels.table(7).map(<[u8]>::len), Some(WHEEL_SIZES[7] as usize));
/// assert!(wheels.table(8).is_none());
/// ```
#[derive(Clone)]
pub struct WheelTableSet {
    pub(crate) w256: [u8; 256],
    pub(crate) w253: [u8; 253],
    pub(crate) w251: [u8; 251],
    pub(crate) w249: [u8; 249],
    pub(crate) w247: [u8; 247],
    pub(crate) w245: [u8; 245],
    pub(crate) w241: [u8; 241],
    pub(crate) w239: [u8; 239],
}

impl WheelTableSet {
    /// Creates a set whose tables are all zero.
    ///
    /// Every keystream byte drawn from these wheels is 0, so the resulting
    /// cipher is the identity: ciphertext equals plaintext.
    pub fn zeroed() -> Self {
        WheelTableSet {
            w256: [0; 256],
            w253: [0; 253],
            w251: [0; 251],
            w249: [0; 249],
            w247: [0; 247],
            w245: [0; 245],
            w241: [0; 241],
            w239: [0; 239],
        }
    }

    /// Builds a set by copying eight caller-supplied tables.
    ///
    /// # Parameters
    /// - `tables`: One slice per wheel, in the order of [`WHEEL_SIZES`].
    ///
    /// # Errors
    /// Returns [`RotorCryptError::WheelTableLength`] for the first table whose
    /// length differs from its wheel modulus.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::{WheelTableSet, WHEEL_SIZES};
    ///
    /// let owned: Vec<Vec<u8>> = WHEEL_SIZES.iter().map(|&m| vec![0x5A; m as usize]).collect();
    /// let slices: [&[u8]; 8] = std::array::from_fn(|i| owned[i].as_slice());
    /// assert!(WheelTableSet::from_tables(slices).is_ok());
    ///
    /// let mut short = slices;
    /// short[2] = &owned[2][..10];
    /// assert!(WheelTableSet::from_tables(short).is_err());
    /// ```
    pub fn from_tables(tables: [&[u8]; WHEEL_COUNT]) -> Result<Self, RotorCryptError> {
        for (wheel, table) in tables.iter().enumerate() {
            let expected = WHEEL_SIZES[wheel] as usize;
            if table.len() != expected {
                warn!(
                    "rejecting wheel table {}: {} bytes, expected {}",
                    wheel,
                    table.len(),
                    expected
                );
                return Err(RotorCryptError::WheelTableLength {
                    wheel,
                    expected,
                    found: table.len(),
                });
            }
        }

        let mut set = Self::zeroed();
        for (dest, table) in set.tables_mut().into_iter().zip(tables) {
            dest.copy_from_slice(table);
        }
        debug!("wheel table set built from {} caller tables", WHEEL_COUNT);
        Ok(set)
    }

    /// Builds a set by filling every table from `rng`.
    ///
    /// The tables are filled in wheel order, so a deterministic generator with
    /// a fixed seed always yields the same set.
    pub fn from_rng<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        let mut set = Self::zeroed();
        for table in set.tables_mut() {
            rng.fill_bytes(table);
        }
        debug!("wheel table set filled from caller rng");
        set
    }

    /// Returns the table of wheel `wheel`, or `None` if `wheel >= WHEEL_COUNT`.
    pub fn table(&self, wheel: usize) -> Option<&[u8]> {
        match wheel {
            0 => Some(&self.w256),
            1 => Some(&self.w253),
            2 => Some(&self.w251),
            3 => Some(&self.w249),
            4 => Some(&self.w247),
            5 => Some(&self.w245),
            6 => Some(&self.w241),
            7 => Some(&self.w239),
            _ => None,
        }
    }

    fn tables_mut(&mut self) -> [&mut [u8]; WHEEL_COUNT] {
        [
            &mut self.w256,
            &mut self.w253,
            &mut self.w251,
            &mut self.w249,
            &mut self.w247,
            &mut self.w245,
            &mut self.w241,
            &mut self.w239,
        ]
    }
}

impl Default for WheelTableSet {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl Drop for WheelTableSet {
    fn drop(&mut self) {
        self.w256.zeroize();
        self.w253.zeroize();
        self.w251.zeroize();
        self.w249.zeroize();
        self.w247.zeroize();
        self.w245.zeroize();
        self.w241.zeroize();
        self.w239.zeroize();
    }
}
