use rand::{CryptoRng, RngCore, SeedableRng};

use crate::sponge::Spritz;

/// A deterministic random number generator squeezing a Spritz sponge.
///
/// The generator is seeded by absorbing the seed; more entropy can be mixed in
/// at any time with [`SpritzRng::absorb_entropy`].
/// Two generators fed the same seed and entropy produce the same stream.
#[derive(Clone)]
pub struct SpritzRng {
    sponge: Spritz,
}

impl SpritzRng {
    /// Absorbs additional entropy into the generator.
    /// It is mixed in before the next output byte.
    pub fn absorb_entropy(&mut self, entropy: &[u8]) {
        self.sponge.absorb(entropy);
    }
}

impl SeedableRng for SpritzRng {
    type Seed = [u8; 32];

    fn from_seed(seed: Self::Seed) -> Self {
        log::debug!("spritz: seeding rng with {} bytes", seed.len());
        let mut sponge = Spritz::new();
        sponge.absorb(&seed);
        Self { sponge }
    }
}

impl RngCore for SpritzRng {
    fn next_u32(&mut self) -> u32 {
        u32::from_le_bytes(self.sponge.squeeze_array())
    }

    fn next_u64(&mut self) -> u64 {
        u64::from_le_bytes(self.sponge.squeeze_array())
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.sponge.squeeze(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.sponge.squeeze(dest);
        Ok(())
    }
}

impl CryptoRng for SpritzRng {}

impl core::fmt::Debug for SpritzRng {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SpritzRng").finish_non_exhaustive()
    }
}
