//! The sponge engine: absorbs input through [`KeccakF1600`] and squeezes output from it.
//!
//! A [`KeccakState`] owns one permutation state and one rate-sized buffer.
//! While absorbing, the buffer holds input bytes that do not yet fill a block.
//! While squeezing, it holds the bytes of the current output block that were not handed out yet.
//! Between calls the buffer always holds strictly less than one rate of bytes,
//! which is what makes the whole engine capturable by a [`Checkpoint`][crate::Checkpoint].
use alloc::vec::Vec;
use core::fmt::Debug;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{
    instantiations::{SpongeConfig, MAX_RATE},
    permutation::{KeccakF1600, LANES},
};

/// Whether a sponge is still taking input or has started producing output.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Input is accepted; no output was squeezed yet.
    #[default]
    Absorbing,
    /// The input was padded and output is being read.
    Squeezing,
}

/// A Keccak sponge hashing a stream of bytes.
///
/// Configured once at construction with a [`SpongeConfig`], which fixes
/// rate, domain separation and output length.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct KeccakState {
    permutation: KeccakF1600,
    buffer: [u8; MAX_RATE],
    buffered: usize,
    #[zeroize(skip)]
    config: SpongeConfig,
    #[zeroize(skip)]
    direction: Direction,
}

impl KeccakState {
    /// A sponge in the all-zero absorbing state.
    pub fn new(config: SpongeConfig) -> Self {
        Self {
            permutation: KeccakF1600::new(),
            buffer: [0u8; MAX_RATE],
            buffered: 0,
            config,
            direction: Direction::Absorbing,
        }
    }

    /// Reassemble a sponge from captured parts.
    ///
    /// Callers are responsible for `buffered.len() < config.rate()`.
    pub(crate) fn from_parts(
        config: SpongeConfig,
        lanes: [u64; LANES],
        buffered: &[u8],
        direction: Direction,
    ) -> Self {
        assert!(buffered.len() < config.rate());
        let mut state = Self::new(config);
        state.permutation = KeccakF1600::from_lanes(lanes);
        state.buffer[..buffered.len()].copy_from_slice(buffered);
        state.buffered = buffered.len();
        state.direction = direction;
        state
    }

    /// The configuration fixed at construction.
    pub fn config(&self) -> &SpongeConfig {
        &self.config
    }

    /// Whether the sponge is still absorbing or already squeezing.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Length in bytes of the output of [`sum`][Self::sum].
    pub fn output_size(&self) -> usize {
        self.config.digest_size()
    }

    /// The rate, in bytes.
    pub fn block_size(&self) -> usize {
        self.config.rate()
    }

    pub(crate) fn lanes(&self) -> [u64; LANES] {
        self.permutation.lanes()
    }

    /// The pending bytes: unabsorbed input, or unread output.
    pub(crate) fn buffered_bytes(&self) -> &[u8] {
        &self.buffer[..self.buffered]
    }

    /// Absorb `input`.
    ///
    /// Calls are associative: absorbing `a` then `b` is the same as absorbing `a || b`.
    ///
    /// # Panics
    ///
    /// If output was already squeezed with [`squeeze`][Self::squeeze];
    /// the stream must be [`reset`][Self::reset] first.
    pub fn update(&mut self, mut input: &[u8]) {
        assert!(
            self.direction == Direction::Absorbing,
            "update after squeeze: reset the state first"
        );
        let rate = self.config.rate();

        if self.buffered > 0 {
            let chunk_len = usize::min(input.len(), rate - self.buffered);
            let (chunk, rest) = input.split_at(chunk_len);
            self.buffer[self.buffered..self.buffered + chunk_len].copy_from_slice(chunk);
            self.buffered += chunk_len;
            input = rest;

            if self.buffered < rate {
                return;
            }
            self.permutation.xor_in(&self.buffer[..rate]);
            self.permutation.permute();
            self.buffered = 0;
        }

        // Full blocks skip the buffer.
        let mut blocks = input.chunks_exact(rate);
        for block in &mut blocks {
            self.permutation.xor_in(block);
            self.permutation.permute();
        }
        let rest = blocks.remainder();
        self.buffer[..rest.len()].copy_from_slice(rest);
        self.buffered = rest.len();
    }

    /// Pad the absorbed input with pad10*1 and switch to squeezing.
    fn pad_and_permute(&mut self) {
        let rate = self.config.rate();

        self.buffer[self.buffered..rate].fill(0);
        // If only one byte is left in the block, both bits land in it.
        self.buffer[self.buffered] ^= self.config.dsbyte();
        self.buffer[rate - 1] ^= 0x80;
        self.permutation.xor_in(&self.buffer[..rate]);
        self.permutation.permute();

        self.buffer[..rate].copy_from_slice(&self.permutation.as_ref()[..rate]);
        self.buffered = rate;
        self.direction = Direction::Squeezing;
    }

    /// Fill `output` with the next bytes of the output stream.
    ///
    /// Calls are associative: squeezing `n` then `m` bytes yields the same bytes as squeezing `n + m`.
    /// The first non-empty call finalizes the input; empty calls do nothing.
    pub fn squeeze(&mut self, mut output: &mut [u8]) {
        if output.is_empty() {
            return;
        }
        if self.direction == Direction::Absorbing {
            self.pad_and_permute();
        }
        let rate = self.config.rate();

        while !output.is_empty() {
            if self.buffered == 0 {
                self.permutation.permute();
                self.buffer[..rate].copy_from_slice(&self.permutation.as_ref()[..rate]);
                self.buffered = rate;
            }

            let chunk_len = usize::min(output.len(), self.buffered);
            let (chunk, rest) = core::mem::take(&mut output).split_at_mut(chunk_len);
            chunk.copy_from_slice(&self.buffer[..chunk_len]);
            self.buffer.copy_within(chunk_len..self.buffered, 0);
            self.buffered -= chunk_len;
            output = rest;
        }
        debug_assert!(self.buffered < rate);
    }

    /// Append the digest of everything absorbed so far to `dst`.
    ///
    /// Works on a duplicate of the sponge: the stream can keep going afterwards
    /// as if this was never called.
    pub fn sum_into(&self, dst: &mut Vec<u8>) {
        let mut duplicate = self.clone();
        let start = dst.len();
        dst.resize(start + self.output_size(), 0);
        duplicate.squeeze(&mut dst[start..]);
    }

    /// The digest of everything absorbed so far. See [`sum_into`][Self::sum_into].
    pub fn sum(&self) -> Vec<u8> {
        let mut digest = Vec::with_capacity(self.output_size());
        self.sum_into(&mut digest);
        digest
    }

    /// Go back to the empty absorbing state, keeping the configuration.
    pub fn reset(&mut self) {
        *self = Self::new(self.config);
    }
}

impl Default for KeccakState {
    fn default() -> Self {
        Self::new(SpongeConfig::default())
    }
}

/// Censored version of Debug
impl Debug for KeccakState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KeccakState")
            .field("config", &self.config)
            .field("direction", &self.direction)
            .field("state", &"<redacted>")
            .finish()
    }
}

/// Panics like [`KeccakState::update`] once output was squeezed.
impl digest::Update for KeccakState {
    fn update(&mut self, data: &[u8]) {
        KeccakState::update(self, data);
    }
}

impl digest::Reset for KeccakState {
    fn reset(&mut self) {
        KeccakState::reset(self);
    }
}

/// Writing to a sponge that already squeezed output, including one imported
/// from a squeezing checkpoint, fails with [`std::io::ErrorKind::Unsupported`].
#[cfg(feature = "std")]
impl std::io::Write for KeccakState {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        if self.direction == Direction::Squeezing {
            return Err(std::io::Error::new(
                std::io::ErrorKind::Unsupported,
                "write after squeeze: reset the state first",
            ));
        }
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
