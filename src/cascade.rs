//! Cascade: N cipher states chained by first-wheel carry.
//!
//! The output byte is the XOR of every stage's keystream byte. Stage 0
//! advances on every byte; stage `k + 1` advances only on a byte where stage
//! `k` advanced and its first wheel wrapped to 0, like the digits of a
//! mixed-radix counter.

use log::{debug, warn};

use crate::cipher_state::{Carry, CipherState};
use crate::error::RotorCryptError;
use crate::key_schedule::Key;
use crate::stream_xor::{self, KeystreamSource};
use crate::wheel::WheelTableSet;

/// Ordered chain of independently keyed [`CipherState`]s.
///
/// # Examples
///
/// ```
/// use rotorcrypt::{Cascade, Key, WheelTableSet};
///
/// let wheels = WheelTableSet::zeroed();
/// let keys = [Key::new([1; 8]), Key::new([2; 8])];
/// let mut cascade = Cascade::from_keys(&wheels, &keys).unwrap();
///
/// let mut buf = *b"zero wheels";
/// cascade.process_in_place(&mut buf);
/// assert_eq!(&buf, b"zero wheels");
/// ```
///
/// ```
/// use rotorcrypt::Cascade;
///
/// assert!(Cascade::new(Vec::new()).is_err());
/// ```
pub struct Cascade<'a> {
    stages: Vec<CipherState<'a>>,
}

impl<'a> Cascade<'a> {
    /// Chains `stages` in the given order.
    ///
    /// # Errors
    /// Returns [`RotorCryptError::EmptyCascade`] if `stages` is empty.
    pub fn new(stages: Vec<CipherState<'a>>) -> Result<Self, RotorCryptError> {
        if stages.is_empty() {
            warn!("rejecting cascade with no stages");
            return Err(RotorCryptError::EmptyCascade);
        }
        debug!("cascade built with {} stages", stages.len());
        Ok(Cascade { stages })
    }

    /// Builds one stage per key, all reading from `wheels`.
    ///
    /// # Errors
    /// Returns [`RotorCryptError::EmptyCascade`] if `keys` is empty.
    pub fn from_keys(wheels: &'a WheelTableSet, keys: &[Key]) -> Result<Self, RotorCryptError> {
        let stages = keys.iter().map(|key| CipherState::new(wheels, key)).collect();
        Self::new(stages)
    }

    /// Re-keys every stage, in order, discarding all advance progress.
    ///
    /// # Errors
    /// Returns [`RotorCryptError::KeyCountMismatch`] if `keys.len()` differs
    /// from the number of stages; no stage is touched in that case.
    pub fn rekey(&mut self, keys: &[Key]) -> Result<(), RotorCryptError> {
        if keys.len() != self.stages.len() {
            warn!(
                "rejecting rekey: {} keys for {} stages",
                keys.len(),
                self.stages.len()
            );
            return Err(RotorCryptError::KeyCountMismatch {
                expected: self.stages.len(),
                found: keys.len(),
            });
        }
        for (stage, key) in self.stages.iter_mut().zip(keys) {
            stage.rekey(key);
        }
        Ok(())
    }

    /// Returns the number of stages (always at least 1).
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Always `false`; a cascade cannot be built empty.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Returns stage `index`, or `None` if out of range.
    pub fn stage(&self, index: usize) -> Option<&CipherState<'a>> {
        self.stages.get(index)
    }

    /// Returns the XOR of every stage's current keystream byte.
    pub fn keystream_byte(&self) -> u8 {
        self.stages
            .iter()
            .fold(0u8, |acc, stage| acc ^ stage.keystream_byte())
    }

    /// Advances the chain by one output byte.
    ///
    /// # Returns
    /// The number of stages that moved (1 up to `len()`).
    pub fn advance(&mut self) -> usize {
        let mut moved = 0;
        for stage in self.stages.iter_mut() {
            moved += 1;
            if stage.advance() == Carry::Held {
                break;
            }
        }
        moved
    }

    /// Encrypts or decrypts `input` into `output`.
    ///
    /// # Errors
    /// Returns [`RotorCryptError::BufferLengthMismatch`] if the buffers differ
    /// in length; no stage moves in that case.
    pub fn process(&mut self, input: &[u8], output: &mut [u8]) -> Result<(), RotorCryptError> {
        stream_xor::apply(self, input, output)
    }

    /// Encrypts or decrypts `buf` in place.
    pub fn process_in_place(&mut self, buf: &mut [u8]) {
        stream_xor::apply_in_place(self, buf);
    }
}

impl KeystreamSource for Cascade<'_> {
    fn keystream_byte(&self) -> u8 {
        Cascade::keystream_byte(self)
    }

    fn step(&mut self) {
        self.advance();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterned_wheels() -> WheelTableSet {
        let mut set = WheelTableSet::zeroed();
        for (i, b) in set.w256.iter_mut().enumerate() {
            *b = (i as u8).wrapping_mul(37).wrapping_add(11);
        }
        for (i, b) in set.w245.iter_mut().enumerate() {
            *b = (i as u8).rotate_left(3) ^ 0xA5;
        }
        set
    }

    #[test]
    fn test_empty_cascade_rejected() {
        assert!(matches!(
            Cascade::new(Vec::new()),
            Err(RotorCryptError::EmptyCascade)
        ));
        let wheels = WheelTableSet::zeroed();
        assert!(matches!(
            Cascade::from_keys(&wheels, &[]),
            Err(RotorCryptError::EmptyCascade)
        ));
    }

    #[test]
    fn test_single_stage_matches_plain_state() {
        let wheels = patterned_wheels();
        let key = Key::new([3, 1, 4, 1, 5, 9, 2, 6]);
        let mut state = CipherState::new(&wheels, &key);
        let mut cascade = Cascade::from_keys(&wheels, std::slice::from_ref(&key)).unwrap();

        for _ in 0..600 {
            assert_eq!(cascade.keystream_byte(), state.keystream_byte());
            let _ = state.advance();
            cascade.advance();
        }
    }

    #[test]
    fn test_second_stage_moves_only_on_wrap() {
        let wheels = WheelTableSet::zeroed();
        let keys = [Key::new([254, 0, 0, 0, 0, 0, 0, 0]), Key::new([0; 8])];
        let mut cascade = Cascade::from_keys(&wheels, &keys).unwrap();

        assert_eq!(cascade.advance(), 1);
        assert_eq!(cascade.stage(1).unwrap().positions(), [0; 8]);

        // First wheel of stage 0 goes 255 -> 0.
        assert_eq!(cascade.advance(), 2);
        assert_eq!(cascade.stage(1).unwrap().positions(), [1; 8]);

        for _ in 0..255 {
            assert_eq!(cascade.advance(), 1);
        }
        assert_eq!(cascade.stage(1).unwrap().positions(), [1; 8]);
        assert_eq!(cascade.advance(), 2);
        assert_eq!(cascade.stage(1).unwrap().positions(), [2; 8]);
    }

    #[test]
    fn test_carry_ripples_through_all_stages() {
        let wheels = WheelTableSet::zeroed();
        let keys = [
            Key::new([255, 0, 0, 0, 0, 0, 0, 0]),
            Key::new([255, 0, 0, 0, 0, 0, 0, 0]),
            Key::new([100, 0, 0, 0, 0, 0, 0, 0]),
        ];
        let mut cascade = Cascade::from_keys(&wheels, &keys).unwrap();
        assert_eq!(cascade.advance(), 3);
        assert_eq!(cascade.stage(2).unwrap().positions()[0], 101);
        assert_eq!(cascade.advance(), 1);
    }

    #[test]
    fn test_idle_stage_does_not_carry() {
        let wheels = WheelTableSet::zeroed();
        // Stage 1 starts one step from wrapping but only moves on stage 0's wrap.
        let keys = [
            Key::new([10, 0, 0, 0, 0, 0, 0, 0]),
            Key::new([255, 0, 0, 0, 0, 0, 0, 0]),
            Key::new([0; 8]),
        ];
        let mut cascade = Cascade::from_keys(&wheels, &keys).unwrap();
        for _ in 0..245 {
            assert_eq!(cascade.advance(), 1);
        }
        assert_eq!(cascade.stage(2).unwrap().positions(), [0; 8]);
        assert_eq!(cascade.advance(), 3);
        assert_eq!(cascade.stage(2).unwrap().positions(), [1; 8]);
    }

    #[test]
    fn test_keystream_is_xor_of_stages() {
        let wheels = patterned_wheels();
        let keys = [Key::new([7; 8]), Key::new([99; 8])];
        let cascade = Cascade::from_keys(&wheels, &keys).unwrap();
        let expected = CipherState::new(&wheels, &keys[0]).keystream_byte()
            ^ CipherState::new(&wheels, &keys[1]).keystream_byte();
        assert_eq!(cascade.keystream_byte(), expected);
    }

    #[test]
    fn test_rekey_restores_keystream() {
        let wheels = patterned_wheels();
        let keys = [Key::new([5; 8]), Key::new([6; 8])];
        let mut cascade = Cascade::from_keys(&wheels, &keys).unwrap();
        let first: Vec<u8> = crate::stream_xor::keystream(&mut cascade).take(700).collect();

        cascade.rekey(&keys).unwrap();
        let again: Vec<u8> = crate::stream_xor::keystream(&mut cascade).take(700).collect();
        assert_eq!(first, again);
    }

    #[test]
    fn test_rekey_rejects_wrong_key_count() {
        let wheels = WheelTableSet::zeroed();
        let mut cascade = Cascade::from_keys(&wheels, &[Key::new([1; 8])]).unwrap();
        cascade.advance();
        assert_eq!(
            cascade.rekey(&[Key::new([0; 8]), Key::new([0; 8])]),
            Err(RotorCryptError::KeyCountMismatch {
                expected: 1,
                found: 2
            })
        );
        assert_eq!(cascade.stage(0).unwrap().positions(), [2; 8]);
    }

    #[test]
    fn test_len_and_stage_access() {
        let wheels = WheelTableSet::zeroed();
        let keys = [Key::new([0; 8]), Key::new([1; 8]), Key::new([2; 8])];
        let cascade = Cascade::from_keys(&wheels, &keys).unwrap();
        assert_eq!(cascade.len(), 3);
        assert!(!cascade.is_empty());
        assert!(cascade.stage(2).is_some());
        assert!(cascade.stage(3).is_none());
    }

    #[test]
    fn test_process_roundtrip() {
        let wheels = patterned_wheels();
        let keys = [Key::new([11; 8]), Key::new([22; 8]), Key::new([33; 8])];
        let plain: Vec<u8> = (0..1024u32).map(|i| (i * 7) as u8).collect();
        let mut cipher = vec![0u8; plain.len()];
        let mut recovered = vec![0u8; plain.len()];

        Cascade::from_keys(&wheels, &keys)
            .unwrap()
            .process(&plain, &mut cipher)
            .unwrap();
        assert_ne!(cipher, plain);
        Cascade::from_keys(&wheels, &keys)
            .unwrap()
            .process(&cipher, &mut recovered)
            .unwrap();
        assert_eq!(recovered, plain);
    }
}
