use crate::errors::SpritzResult;
use crate::sponge::Spritz;

/// Spritz as a stream cipher: the key is absorbed into a fresh sponge,
/// then every message byte is XORed with one squeezed byte.
///
/// Encryption and decryption are the same operation.
/// No stop symbol is ever absorbed.
#[derive(Clone)]
pub struct SpritzCipher {
    sponge: Spritz,
}

impl SpritzCipher {
    /// Creates a cipher keyed with `key`.
    pub fn new(key: &[u8]) -> Self {
        log::debug!("spritz: new cipher with a {}-byte key", key.len());
        let mut sponge = Spritz::new();
        sponge.absorb(key);
        Self { sponge }
    }

    /// Writes `src` XOR keystream into `dst`.
    ///
    /// # Panics
    ///
    /// Panics if `dst` is shorter than `src`.
    pub fn xor_keystream(&mut self, dst: &mut [u8], src: &[u8]) {
        self.sponge.xor_keystream(dst, src)
    }

    /// Writes `src` XOR keystream into `dst`, failing if `dst` is shorter than `src`.
    pub fn try_xor_keystream(&mut self, dst: &mut [u8], src: &[u8]) -> SpritzResult<()> {
        self.sponge.try_xor_keystream(dst, src)
    }

    /// Encrypts (or decrypts) `buf` in place.
    pub fn apply_keystream(&mut self, buf: &mut [u8]) {
        self.sponge.apply_keystream(buf)
    }
}

impl core::fmt::Debug for SpritzCipher {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SpritzCipher").finish_non_exhaustive()
    }
}
