//! The two capability sets exposed by every hash of this crate.
//!
//! [`SpongeHash`] is what a generic caller feeding bytes and collecting a digest needs.
//! [`Checkpointable`] extends it with capture and restore of the running state.
//! Callers ask for the capability they need in their bounds,
//! e.g. `impl Checkpointable` or `&mut dyn SpongeHash`.
use alloc::vec::Vec;

use crate::{Checkpoint, ImportError, KeccakState};

/// A streaming hash function.
pub trait SpongeHash {
    /// Absorb more input.
    fn update(&mut self, input: &[u8]);

    /// Append the digest of the input so far to `dst`, without finalizing the stream.
    fn sum_into(&self, dst: &mut Vec<u8>);

    /// The digest of the input so far, without finalizing the stream.
    fn sum(&self) -> Vec<u8> {
        let mut digest = Vec::with_capacity(self.output_size());
        self.sum_into(&mut digest);
        digest
    }

    /// Forget all input.
    fn reset(&mut self);

    /// Size of the digest, in bytes.
    fn output_size(&self) -> usize;

    /// Size of the blocks the input is processed in, in bytes.
    fn block_size(&self) -> usize;
}

/// A [`SpongeHash`] whose running state can be exported and resumed.
pub trait Checkpointable: SpongeHash {
    /// Snapshot the running state. Never fails.
    fn export_state(&self) -> Checkpoint;

    /// Continue from `checkpoint`. On error the receiver is unchanged.
    fn import_state(&mut self, checkpoint: &Checkpoint) -> Result<(), ImportError>;
}

impl SpongeHash for KeccakState {
    fn update(&mut self, input: &[u8]) {
        KeccakState::update(self, input);
    }

    fn sum_into(&self, dst: &mut Vec<u8>) {
        KeccakState::sum_into(self, dst);
    }

    fn reset(&mut self) {
        KeccakState::reset(self);
    }

    fn output_size(&self) -> usize {
        KeccakState::output_size(self)
    }

    fn block_size(&self) -> usize {
        KeccakState::block_size(self)
    }
}

impl Checkpointable for KeccakState {
    fn export_state(&self) -> Checkpoint {
        KeccakState::export_state(self)
    }

    fn import_state(&mut self, checkpoint: &Checkpoint) -> Result<(), ImportError> {
        KeccakState::import_state(self, checkpoint)
    }
}
