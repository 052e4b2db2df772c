//! StreamXor: combines a keystream with data by exclusive-or.
//!
//! Encryption and decryption are the same call. Running an identically keyed
//! source over the output again restores the input.

use crate::error::RotorCryptError;

/// A generator of keystream bytes.
///
/// Implementors expose the byte under the current state and a way to move to
/// the next state. Both [`CipherState`](crate::CipherState) and
/// [`Cascade`](crate::Cascade) implement it.
pub trait KeystreamSource {
    /// Returns the keystream byte for the current state without moving it.
    fn keystream_byte(&self) -> u8;

    /// Moves to the state for the next byte.
    fn step(&mut self);

    /// Returns the current keystream byte and then steps.
    fn next_keystream_byte(&mut self) -> u8 {
        let value = self.keystream_byte();
        self.step();
        value
    }
}

/// Endless iterator over the bytes of a [`KeystreamSource`].
///
/// Created by [`keystream`].
pub struct Keystream<'s, S: KeystreamSource + ?Sized> {
    source: &'s mut S,
}

impl<S: KeystreamSource + ?Sized> Iterator for Keystream<'_, S> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        Some(self.source.next_keystream_byte())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// Borrows `source` as an iterator of keystream bytes.
///
/// # Examples
///
/// ```
/// use rotorcrypt::{keystream, CipherState, Key, WheelTableSet};
///
/// let wheels = WheelTableSet::zeroed();
/// let mut state = CipherState::new(&wheels, &Key::new([0; 8]));
/// let bytes: Vec<u8> = keystream(&mut state).take(4).collect();
/// assert_eq!(bytes, vec![0, 0, 0, 0]);
/// assert_eq!(state.positions()[0], 4);
/// ```
pub fn keystream<S: KeystreamSource + ?Sized>(source: &mut S) -> Keystream<'_, S> {
    Keystream { source }
}

/// XORs `input` with keystream bytes from `source` into `output`.
///
/// # Errors
/// Returns [`RotorCryptError::BufferLengthMismatch`] if `input` and `output`
/// differ in length. The source is left untouched in that case.
pub fn apply<S: KeystreamSource + ?Sized>(
    source: &mut S,
    input: &[u8],
    output: &mut [u8],
) -> Result<(), RotorCryptError> {
    if input.len() != output.len() {
        return Err(RotorCryptError::BufferLengthMismatch {
            input: input.len(),
            output: output.len(),
        });
    }
    for (out, &byte) in output.iter_mut().zip(input) {
        *out = byte ^ source.next_keystream_byte();
    }
    Ok(())
}

/// XORs `buf` with keystream bytes from `source` in place.
pub fn apply_in_place<S: KeystreamSource + ?Sized>(source: &mut S, buf: &mut [u8]) {
    for byte in buf.iter_mut() {
        *byte ^= source.next_keystream_byte();
    }
}
