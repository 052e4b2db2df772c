//! RotorCrypt keystream cipher engine.
//!
//! RotorCrypt models a mechanical rotor machine: eight independent wheels,
//! each a cyclic counter over its own table of pseudo-random bytes, step
//! together once per byte. The bytes under the eight wheels are folded with
//! XOR into one keystream byte, which is XORed with the data. Encryption and
//! decryption are the same operation.
//!
//! The wheel moduli {256, 253, 251, 249, 247, 245, 241, 239} are pairwise
//! coprime, so a single state repeats only after their product (about
//! 2^63.6) bytes. Chaining several states in a [`Cascade`] extends that
//! period further.
//!
//! This is a rotor analogy built for simplicity and speed. It makes no
//! claim of cryptographic strength.
//!
//! # Architecture
//!
//! ```text
//! WheelTableSet  (8 caller-filled byte tables, shared read-only)
//!     ↓ borrowed by
//! CipherState    (8 positions set by KeySchedule, stepped via successor tables)
//!     ↕ N stages chained by first-wheel carry
//! Cascade        (XOR of all stage bytes per output byte)
//!     ↓ KeystreamSource
//! StreamXor      (input ^ keystream → output)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt with a single state:
//!
//! ```
//! use rand_chacha::ChaCha20Rng;
//! use rand_core::SeedableRng;
//! use rotorcrypt::{CipherState, Key, WheelTableSet};
//!
//! let wheels = WheelTableSet::from_rng(&mut ChaCha20Rng::seed_from_u64(1234));
//! let key = Key::new([255, 252, 250, 248, 246, 244, 240, 238]);
//!
//! let plain = *b"Hello world!\0\0\0\0";
//! let mut cipher = [0u8; 16];
//! CipherState::new(&wheels, &key).process(&plain, &mut cipher).unwrap();
//!
//! let mut recovered = [0u8; 16];
//! CipherState::new(&wheels, &key).process(&cipher, &mut recovered).unwrap();
//! assert_eq!(recovered, plain);
//! ```
//!
//! Chain two states for a longer period:
//!
//! ```
//! use rotorcrypt::{Cascade, Key, WheelTableSet};
//!
//! let wheels = WheelTableSet::zeroed();
//! let keys = [Key::new([1; 8]), Key::new([2; 8])];
//! let mut cascade = Cascade::from_keys(&wheels, &keys).unwrap();
//!
//! let mut buf = *b"identity wheels";
//! cascade.process_in_place(&mut buf);
//! assert_eq!(&buf, b"identity wheels");
//! ```

#![deny(clippy::all)]

pub mod error;
pub mod period;

mod cascade;
mod cipher_state;
mod key_schedule;
mod stream_xor;
mod wheel;
mod wraparound;

pub use cascade::Cascade;
pub use cipher_state::{Carry, CipherState};
pub use error::{ErrorKind, RotorCryptError};
pub use key_schedule::{initial_positions, Key, KEY_SIZE};
pub use stream_xor::{apply, apply_in_place, keystream, Keystream, KeystreamSource};
pub use wheel::{WheelTableSet, WHEEL_COUNT, WHEEL_SIZES};
pub use wraparound::successor_table;
