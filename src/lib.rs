//!
//! **Spritz is an evolution of RC4 and, like RC4, is rather slow.
//! Standard primitives like AES and SHA-3 are faster and have been more carefully analyzed.**
//!
//! This crate implements Spritz, the sponge-like function from
//! "Spritz — a spongy RC4-like stream cipher and hash function"
//! by Ronald L. Rivest and Jacob C. N. Schuldt ([RS14]).
//!
//! # Overview
//!
//! Everything is built on a single state machine, the [`Spritz`] sponge.
//! It supports four operations:
//!
//! - [`Spritz::absorb`], adding input to the state (nibble by nibble, low nibble first);
//! - [`Spritz::absorb_stop`], adding a separator that no input byte can produce;
//! - [`Spritz::squeeze`] and [`Spritz::drip`], extracting pseudorandom bytes;
//! - [`Spritz::xor_keystream`], XORing squeezed bytes into a message.
//!
//! ```
//! use spritz::Spritz;
//!
//! let mut sponge = Spritz::new();
//! sponge.absorb(b"ABC");
//! let output = sponge.squeeze_array::<8>();
//! assert_eq!(output, [0x77, 0x9a, 0x8e, 0x01, 0xf9, 0xe9, 0xcb, 0xc0]);
//! ```
//!
//! Splitting input or output across calls does not change the result:
//!
//! ```text
//! absorb(x); absorb(y) = absorb(x || y);
//! squeeze(1); squeeze(1); squeeze(1) = squeeze(3);
//! ```
//!
//! # Hashing
//!
//! [`SpritzHash`] absorbs the message, a stop symbol and the digest length before squeezing.
//! It implements the [`digest`] traits for variable-size hashes.
//! Taking a digest does not consume the hasher.
//!
//! ```
//! use spritz::SpritzHash;
//!
//! let mut hasher = SpritzHash::new(32);
//! hasher.update(b"ABC");
//! let digest = hasher.sum();
//! assert_eq!(digest[..8], [0x02, 0x8f, 0xa2, 0xb4, 0x8b, 0x93, 0x4a, 0x18]);
//! assert_eq!(hasher.sum(), digest);
//! ```
//!
//! # Encryption
//!
//! [`SpritzCipher`] absorbs a key and XORs the keystream into messages.
//!
//! ```
//! use spritz::SpritzCipher;
//!
//! let mut message = *b"attack at dawn";
//! SpritzCipher::new(b"secret").apply_keystream(&mut message);
//! assert_ne!(&message, b"attack at dawn");
//! SpritzCipher::new(b"secret").apply_keystream(&mut message);
//! assert_eq!(&message, b"attack at dawn");
//! ```
//!
//! # Caveats
//!
//! The crush step compares state bytes with a data-dependent branch
//! and is therefore not constant time.
//!
//! [RS14]: https://people.csail.mit.edu/rivest/pubs/RS14.pdf

/// The Spritz cipher.
mod cipher;
/// Built-in errors.
mod errors;
/// The Spritz hash function.
pub mod hash;
/// Random number generation.
mod rng;
/// The core sponge.
mod sponge;

pub use cipher::SpritzCipher;
pub use errors::{SpritzError, SpritzResult};
pub use hash::{hash, SpritzHash};
pub use rng::SpritzRng;
pub use sponge::{Spritz, N};
