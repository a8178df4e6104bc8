//! Spritz as a hash function.
//!
//! The digest of `M` with size `r` is
//!
//! ```text
//! absorb(M); absorb_stop(); absorb(r); squeeze(r)
//! ```
//!
//! where `r` is absorbed as a big-endian integer without leading zero bytes.
//! Finalization runs on a copy of the sponge, so the hasher can keep absorbing
//! after a digest has been taken.

use digest::core_api::BlockSizeUser;
use digest::typenum::U256;
use digest::{
    HashMarker, InvalidBufferSize, InvalidOutputSize, Reset, Update, VariableOutput,
    VariableOutputReset,
};

use crate::sponge::{Spritz, N};

/// Hashes `data` into a digest of `digest_size` bytes.
///
/// A negative size yields an empty digest.
pub fn hash(data: &[u8], digest_size: isize) -> Vec<u8> {
    let mut hasher = SpritzHash::new(digest_size);
    hasher.update(data);
    hasher.sum()
}

/// An incremental Spritz hasher with a digest size fixed at construction.
#[derive(Clone)]
pub struct SpritzHash {
    sponge: Spritz,
    digest_size: isize,
}

impl SpritzHash {
    /// Creates a hasher producing `digest_size` bytes.
    /// A negative size is allowed and produces empty digests.
    pub fn new(digest_size: isize) -> Self {
        Self {
            sponge: Spritz::new(),
            digest_size,
        }
    }

    /// The digest size given at construction.
    pub fn digest_size(&self) -> isize {
        self.digest_size
    }

    /// The number of bytes absorbed between two shuffles of the sponge.
    pub fn block_size(&self) -> usize {
        N
    }

    /// Absorbs more data.
    pub fn update(&mut self, data: &[u8]) {
        self.sponge.absorb(data);
    }

    /// Forgets all data absorbed so far.
    pub fn reset(&mut self) {
        self.sponge.reset();
    }

    /// Returns the digest of the data absorbed so far.
    pub fn sum(&self) -> Vec<u8> {
        let mut digest = Vec::new();
        self.sum_into(&mut digest);
        digest
    }

    /// Appends the digest of the data absorbed so far to `out`.
    pub fn sum_into(&self, out: &mut Vec<u8>) {
        let len = out.len();
        out.resize(len + self.output_len(), 0);
        self.finalize_into(&mut out[len..]);
    }

    fn output_len(&self) -> usize {
        usize::try_from(self.digest_size).unwrap_or(0)
    }

    /// `out` must be exactly `output_len()` bytes long.
    fn finalize_into(&self, out: &mut [u8]) {
        if self.digest_size < 0 {
            return;
        }
        log::trace!("spritz: finalizing a {}-byte digest", self.digest_size);
        let mut sponge = self.sponge.clone();
        sponge.absorb_stop();
        absorb_length(&mut sponge, self.digest_size as u64);
        sponge.squeeze(out);
    }
}

/// Absorbs `len` in base `N`, high-order byte first, with no leading zeros.
fn absorb_length(sponge: &mut Spritz, len: u64) {
    let bytes = len.to_be_bytes();
    let zeros = bytes.iter().take_while(|&&b| b == 0).count();
    sponge.absorb(&bytes[zeros..]);
}

impl core::fmt::Debug for SpritzHash {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SpritzHash")
            .field("digest_size", &self.digest_size)
            .finish_non_exhaustive()
    }
}

impl HashMarker for SpritzHash {}

impl BlockSizeUser for SpritzHash {
    type BlockSize = U256;
}

impl Update for SpritzHash {
    fn update(&mut self, data: &[u8]) {
        self.sponge.absorb(data);
    }
}

impl Reset for SpritzHash {
    fn reset(&mut self) {
        self.sponge.reset();
    }
}

impl VariableOutput for SpritzHash {
    const MAX_OUTPUT_SIZE: usize = isize::MAX as usize;

    fn new(output_size: usize) -> Result<Self, InvalidOutputSize> {
        isize::try_from(output_size)
            .map(SpritzHash::new)
            .map_err(|_| InvalidOutputSize)
    }

    fn output_size(&self) -> usize {
        self.output_len()
    }

    fn finalize_variable(self, out: &mut [u8]) -> Result<(), InvalidBufferSize> {
        if out.len() != self.output_len() {
            return Err(InvalidBufferSize);
        }
        self.finalize_into(out);
        Ok(())
    }
}

impl VariableOutputReset for SpritzHash {
    fn finalize_variable_reset(&mut self, out: &mut [u8]) -> Result<(), InvalidBufferSize> {
        if out.len() != self.output_len() {
            return Err(InvalidBufferSize);
        }
        self.finalize_into(out);
        self.sponge.reset();
        Ok(())
    }
}
