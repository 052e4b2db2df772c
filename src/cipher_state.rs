//! CipherState: eight wheel positions over a borrowed [`WheelTableSet`].
//!
//! The atomic keystream unit. Reading the current byte folds the eight table
//! entries under the wheel positions with XOR; advancing steps every wheel
//! once through the successor tables.

use zeroize::Zeroize;

use crate::error::RotorCryptError;
use crate::key_schedule::{initial_positions, Key};
use crate::period::WHEEL_PERIOD;
use crate::stream_xor::{self, KeystreamSource};
use crate::wheel::{WheelTableSet, WHEEL_COUNT};
use crate::wraparound::SUCCESSORS;

/// Outcome of a single [`CipherState::advance`].
///
/// Reports whether the first (256) wheel wrapped back to position 0, which
/// drives the carry between cascade stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Carry {
    /// The first wheel wrapped to 0 on this step.
    Wrapped,
    /// The first wheel moved without wrapping.
    Held,
}

impl Carry {
    /// Returns `true` for [`Carry::Wrapped`].
    pub fn is_wrapped(self) -> bool {
        self == Carry::Wrapped
    }
}

/// One set of eight wheel positions bound to a shared table set.
///
/// Positions always satisfy `position[i] < WHEEL_SIZES[i]`: they are set by
/// the key schedule and only ever moved through the successor tables.
///
/// # Examples
///
/// ```
/// use rotorcrypt::{CipherState, Key, WheelTableSet};
///
/// let wheels = WheelTableSet::zeroed();
/// let key = Key::new([255, 252, 250, 248, 246, 244, 240, 238]);
/// let mut state = CipherState::new(&wheels, &key);
///
/// assert!(state.advance().is_wrapped());
/// assert_eq!(state.positions(), [0; 8]);
/// ```
pub struct CipherState<'a> {
    positions: [u8; WHEEL_COUNT],
    wheels: &'a WheelTableSet,
}

impl<'a> CipherState<'a> {
    /// Number of steps after which the joint wheel position repeats.
    pub const PERIOD: u128 = WHEEL_PERIOD;

    /// Creates a state over `wheels` positioned by `key`.
    pub fn new(wheels: &'a WheelTableSet, key: &Key) -> Self {
        CipherState {
            positions: initial_positions(key),
            wheels,
        }
    }

    /// Resets the wheel positions from `key`, discarding any advance progress.
    pub fn rekey(&mut self, key: &Key) {
        self.positions = initial_positions(key);
    }

    /// Returns the current wheel positions, first wheel first.
    pub fn positions(&self) -> [u8; WHEEL_COUNT] {
        self.positions
    }

    /// Returns the table set this state reads from.
    pub fn wheels(&self) -> &'a WheelTableSet {
        self.wheels
    }

    /// Steps every wheel forward by one position.
    ///
    /// The 256 wheel relies on byte overflow; every other wheel looks up its
    /// own position in its own successor table.
    ///
    /// # Returns
    /// [`Carry::Wrapped`] if the first wheel is now at position 0.
    pub fn advance(&mut self) -> Carry {
        let p = &mut self.positions;
        p[0] = p[0].wrapping_add(1);
        p[1] = SUCCESSORS.w253[p[1] as usize];
        p[2] = SUCCESSORS.w251[p[2] as usize];
        p[3] = SUCCESSORS.w249[p[3] as usize];
        p[4] = SUCCESSORS.w247[p[4] as usize];
        p[5] = SUCCESSORS.w245[p[5] as usize];
        p[6] = SUCCESSORS.w241[p[6] as usize];
        p[7] = SUCCESSORS.w239[p[7] as usize];

        if p[0] == 0 {
            Carry::Wrapped
        } else {
            Carry::Held
        }
    }

    /// Returns the keystream byte under the current positions.
    ///
    /// Does not move the wheels; repeated calls return the same byte.
    pub fn keystream_byte(&self) -> u8 {
        let p = &self.positions;
        let w = self.wheels;
        w.w256[p[0] as usize]
            ^ w.w253[p[1] as usize]
            ^ w.w251[p[2] as usize]
            ^ w.w249[p[3] as usize]
            ^ w.w247[p[4] as usize]
            ^ w.w245[p[5] as usize]
            ^ w.w241[p[6] as usize]
            ^ w.w239[p[7] as usize]
    }

    /// Encrypts or decrypts `input` into `output`.
    ///
    /// # Errors
    /// Returns [`RotorCryptError::BufferLengthMismatch`] if the buffers differ
    /// in length; no wheel moves in that case.
    pub fn process(&mut self, input: &[u8], output: &mut [u8]) -> Result<(), RotorCryptError> {
        stream_xor::apply(self, input, output)
    }

    /// Encrypts or decrypts `buf` in place.
    pub fn process_in_place(&mut self, buf: &mut [u8]) {
        stream_xor::apply_in_place(self, buf);
    }
}

impl KeystreamSource for CipherState<'_> {
    fn keystream_byte(&self) -> u8 {
        CipherState::keystream_byte(self)
    }

    fn step(&mut self) {
        let _ = self.advance();
    }
}

impl Drop for CipherState<'_> {
    fn drop(&mut self) {
        self.positions.zeroize();
    }
}
