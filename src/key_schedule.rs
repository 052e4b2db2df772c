//! KeySchedule: maps an 8-byte key onto the starting wheel positions.

use zeroize::Zeroize;

use crate::wheel::{WHEEL_COUNT, WHEEL_SIZES};

/// Key length in bytes, one byte per wheel.
pub const KEY_SIZE: usize = WHEEL_COUNT;

/// An 8-byte cipher key. Byte `i` selects the starting position of wheel `i`.
///
/// The bytes are wiped when the key is dropped.
///
/// # Examples
///
/// ```
/// use rotorcrypt::Key;
///
/// let key = Key::new([255, 252, 250, 248, 246, 244, 240, 238]);
/// assert_eq!(key.as_bytes()[0], 255);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Key([u8; KEY_SIZE]);

impl Key {
    /// Wraps raw key bytes.
    pub fn new(bytes: [u8; KEY_SIZE]) -> Self {
        Key(bytes)
    }

    /// Returns the raw key bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }
}

impl From<[u8; KEY_SIZE]> for Key {
    fn from(bytes: [u8; KEY_SIZE]) -> Self {
        Key(bytes)
    }
}

impl Drop for Key {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// Derives the starting position of every wheel from `key`.
///
/// The first wheel spans the whole byte range and takes `key[0]` as is; every
/// other byte is reduced modulo its wheel size, so any key yields positions
/// that are valid table indices.
///
/// # Examples
///
/// ```
/// use rotorcrypt::{initial_positions, Key};
///
/// let positions = initial_positions(&Key::new([255; 8]));
/// assert_eq!(positions, [255, 2, 4, 6, 8, 10, 14, 16]);
/// ```
pub fn initial_positions(key: &Key) -> [u8; WHEEL_COUNT] {
    let bytes = key.as_bytes();
    let mut positions = [0u8; WHEEL_COUNT];
    positions[0] = bytes[0];
    let reduced = positions.iter_mut().zip(bytes).zip(&WHEEL_SIZES).skip(1);
    for ((pos, &byte), &size) in reduced {
        *pos = (byte as u16 % size) as u8;
    }
    positions
}
