//! The Spritz sponge.
//!
//! The whole state is a permutation `s` of the bytes `0..N`, three pointers
//! `i`, `j`, `k`, an odd stride `w`, the last output byte `z`, and the number
//! `a` of nibbles absorbed since the last shuffle.
//! Pointer arithmetic is `u8` wrapping arithmetic, i.e. modulo `N`.
//!
//! ```text
//! absorb(x); absorb(y) = absorb(x || y);
//! squeeze(1); squeeze(1); squeeze(1) = squeeze(3);
//! ```
use std::io;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::errors::{SpritzError, SpritzResult};

/// Number of elements in the permutation.
pub const N: usize = 256;

/// Half of the state, which is also the value of the stop symbol.
const HALF: usize = N / 2;

/// The Spritz sponge-like function.
///
/// A [`Spritz`] is owned by whoever created it and is not meant to be shared
/// across threads without external synchronization;
/// independent instances share nothing.
///
/// The state is wiped on drop. A sponge wiped by hand via [`Zeroize`]
/// must be [`Spritz::reset`] before it is used again.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Spritz {
    s: [u8; N],
    i: u8,
    j: u8,
    k: u8,
    w: u8,
    z: u8,
    /// Nibbles absorbed since the last shuffle, in `[0, N/2]`.
    a: usize,
}

impl Spritz {
    /// Creates a sponge in its initial state.
    pub fn new() -> Self {
        let mut sponge = Self {
            s: [0u8; N],
            i: 0,
            j: 0,
            k: 0,
            w: 1,
            z: 0,
            a: 0,
        };
        sponge.reset();
        sponge
    }

    /// Sets the sponge back to its initial state,
    /// forgetting everything absorbed or squeezed so far.
    pub fn reset(&mut self) {
        self.s
            .iter_mut()
            .enumerate()
            .for_each(|(v, x)| *x = v as u8);
        self.i = 0;
        self.j = 0;
        self.k = 0;
        self.w = 1;
        self.z = 0;
        self.a = 0;
    }

    /// Absorbs `input` into the sponge, low nibble first for every byte.
    pub fn absorb(&mut self, input: &[u8]) -> &mut Self {
        for &b in input {
            self.absorb_nibble(b % 16);
            self.absorb_nibble(b / 16);
        }
        self
    }

    /// Absorbs the stop symbol, separating what was absorbed before from
    /// what will be absorbed after.
    pub fn absorb_stop(&mut self) -> &mut Self {
        if self.a == HALF {
            self.shuffle();
        }
        self.a += 1;
        self
    }

    fn absorb_nibble(&mut self, v: u8) {
        if self.a == HALF {
            self.shuffle();
        }
        self.s.swap(self.a, HALF + v as usize);
        self.a += 1;
    }

    fn shuffle(&mut self) {
        log::trace!("spritz: shuffle after {} absorbed nibbles", self.a);
        self.whip();
        self.crush();
        self.whip();
        self.crush();
        self.whip();
        self.a = 0;
    }

    fn shuffle_if_pending(&mut self) {
        if self.a > 0 {
            self.shuffle();
        }
    }

    fn whip(&mut self) {
        for _ in 0..2 * N {
            self.update();
        }
        self.w = self.w.wrapping_add(2);
    }

    fn crush(&mut self) {
        for v in 0..HALF {
            // not constant time
            if self.s[v] > self.s[N - 1 - v] {
                self.s.swap(v, N - 1 - v);
            }
        }
    }

    /// The RC4-like update step, shared by whip and every output byte.
    #[inline(always)]
    fn update(&mut self) {
        self.i = self.i.wrapping_add(self.w);
        let t = self.s[self.j.wrapping_add(self.s[self.i as usize]) as usize];
        self.j = self.k.wrapping_add(t);
        self.k = self
            .i
            .wrapping_add(self.k)
            .wrapping_add(self.s[self.j as usize]);
        self.s.swap(self.i as usize, self.j as usize);
    }

    #[inline(always)]
    fn output(&mut self) -> u8 {
        let t = self.s[self.z.wrapping_add(self.k) as usize];
        let t = self.s[self.i.wrapping_add(t) as usize];
        self.z = self.s[self.j.wrapping_add(t) as usize];
        self.z
    }

    #[inline(always)]
    fn next_byte(&mut self) -> u8 {
        self.update();
        self.output()
    }

    /// Squeezes a single byte out of the sponge.
    pub fn drip(&mut self) -> u8 {
        self.shuffle_if_pending();
        self.next_byte()
    }

    /// Fills `output` with pseudorandom bytes.
    ///
    /// Pending absorbed input is mixed in first, even if `output` is empty.
    pub fn squeeze(&mut self, output: &mut [u8]) -> &mut Self {
        self.shuffle_if_pending();
        output.iter_mut().for_each(|x| *x = self.next_byte());
        self
    }

    /// Squeezes out `M` bytes.
    #[inline(always)]
    pub fn squeeze_array<const M: usize>(&mut self) -> [u8; M] {
        let mut output = [0u8; M];
        self.squeeze(&mut output);
        output
    }

    /// Writes into `dst` the bytes of `src` XORed with the keystream.
    ///
    /// # Panics
    ///
    /// Panics if `dst` is shorter than `src`.
    /// See [`Spritz::try_xor_keystream`] for a non-panicking variant.
    pub fn xor_keystream(&mut self, dst: &mut [u8], src: &[u8]) {
        assert!(
            dst.len() >= src.len(),
            "spritz: destination buffer too small"
        );
        self.shuffle_if_pending();
        for (d, &s) in dst.iter_mut().zip(src) {
            *d = s ^ self.next_byte();
        }
    }

    /// Like [`Spritz::xor_keystream`], but reports a short destination as an error.
    ///
    /// On error the sponge state is left untouched.
    pub fn try_xor_keystream(&mut self, dst: &mut [u8], src: &[u8]) -> SpritzResult<()> {
        if dst.len() < src.len() {
            return Err(SpritzError::DestinationTooShort {
                dst: dst.len(),
                src: src.len(),
            });
        }
        self.xor_keystream(dst, src);
        Ok(())
    }

    /// XORs the keystream into `buf` in place.
    pub fn apply_keystream(&mut self, buf: &mut [u8]) {
        self.shuffle_if_pending();
        buf.iter_mut().for_each(|x| *x ^= self.next_byte());
    }
}

impl Default for Spritz {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for Spritz {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Spritz").finish_non_exhaustive()
    }
}

/// Absorbs everything written. Never fails.
impl io::Write for Spritz {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.absorb(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Reads squeeze the sponge. Never fails.
impl io::Read for Spritz {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.squeeze(buf);
        Ok(buf.len())
    }
}
