//! Capture and restore of a [`KeccakState`] in the middle of a stream.
//!
//! A [`Checkpoint`] is a self-contained, versioned byte string.
//! All integers are little-endian:
//!
//! | offset     | size   | field                                             |
//! |------------|--------|---------------------------------------------------|
//! | 0          | 4      | format tag `b"KCKP"`                              |
//! | 4          | 1      | format version                                    |
//! | 5          | 200    | the 25 permutation lanes, `u64` each              |
//! | 205        | 1      | rate, in bytes                                    |
//! | 206        | 1      | domain separation byte                            |
//! | 207        | 2      | output length in bytes, `0` for unbounded         |
//! | 209        | 1      | number of buffered bytes                          |
//! | 210        | rate   | buffer; only the first buffered bytes are meaningful |
//! | 210 + rate | 1      | direction: `0` absorbing, `1` squeezing           |
//!
//! Exporting copies everything out of the live state: a checkpoint never changes
//! when the hash it came from keeps going.
use alloc::{boxed::Box, vec::Vec};
use core::fmt::Debug;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{
    instantiations::{OutputLength, SpongeConfig},
    permutation::LANES,
    sponge::Direction,
    ImportError, KeccakState,
};

/// Format tag opening every checkpoint.
pub const MAGIC: [u8; 4] = *b"KCKP";

/// Current layout version.
pub const VERSION: u8 = 1;

/// Bytes preceding the buffer storage.
const HEADER_LEN: usize = MAGIC.len() + 1 + 8 * LANES + 1 + 1 + 2 + 1;

/// Encoded length of a checkpoint of a sponge with the given rate.
pub const fn encoded_len(rate: usize) -> usize {
    HEADER_LEN + rate + 1
}

const ABSORBING: u8 = 0;
const SQUEEZING: u8 = 1;

/// A serialized snapshot of a [`KeccakState`].
///
/// Produced by [`KeccakState::export_state`] and consumed by
/// [`KeccakState::import_state`] or [`KeccakState::try_from`].
/// Wrapping arbitrary bytes into a checkpoint is always possible,
/// they are validated only when imported.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Checkpoint(Box<[u8]>);

impl Checkpoint {
    /// The encoded checkpoint.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Take the encoded checkpoint out, e.g. to store or send it.
    pub fn into_bytes(mut self) -> Vec<u8> {
        core::mem::take(&mut self.0).into_vec()
    }

    /// Length of the encoded checkpoint, in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for Checkpoint {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes.into_boxed_slice())
    }
}

impl From<&[u8]> for Checkpoint {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.into())
    }
}

impl AsRef<[u8]> for Checkpoint {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Censored version of Debug
impl Debug for Checkpoint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Checkpoint")
            .field("len", &self.0.len())
            .finish_non_exhaustive()
    }
}

impl KeccakState {
    /// Snapshot the full state of the sponge.
    ///
    /// Never fails, and does not affect `self`.
    #[must_use]
    pub fn export_state(&self) -> Checkpoint {
        let config = self.config();
        let rate = config.rate();
        let pending = self.buffered_bytes();

        let mut blob = Vec::with_capacity(encoded_len(rate));
        blob.extend_from_slice(&MAGIC);
        blob.push(VERSION);
        for lane in self.lanes() {
            blob.extend_from_slice(&lane.to_le_bytes());
        }
        // Supported rates and buffer counts are below 256, and output lengths below 2^16.
        blob.push(rate as u8);
        blob.push(config.dsbyte());
        let output_len = match config.output_len() {
            OutputLength::Fixed(len) => len as u16,
            OutputLength::Unbounded => 0,
        };
        blob.extend_from_slice(&output_len.to_le_bytes());
        blob.push(pending.len() as u8);
        blob.extend_from_slice(pending);
        blob.resize(HEADER_LEN + rate, 0);
        blob.push(match self.direction() {
            Direction::Absorbing => ABSORBING,
            Direction::Squeezing => SQUEEZING,
        });
        debug_assert_eq!(blob.len(), encoded_len(rate));

        tracing::trace!(rate, buffered = pending.len(), "exported sponge state");
        Checkpoint(blob.into_boxed_slice())
    }

    /// Replace `self` with the state captured in `checkpoint`, configuration included.
    ///
    /// On error `self` is left untouched.
    pub fn import_state(&mut self, checkpoint: &Checkpoint) -> Result<(), ImportError> {
        *self = Self::try_from(checkpoint)?;
        Ok(())
    }
}

impl TryFrom<&Checkpoint> for KeccakState {
    type Error = ImportError;

    fn try_from(checkpoint: &Checkpoint) -> Result<Self, Self::Error> {
        decode(checkpoint.as_bytes())
            .inspect(|state| {
                tracing::trace!(
                    rate = state.block_size(),
                    direction = ?state.direction(),
                    "imported sponge state"
                )
            })
            .inspect_err(|err| tracing::debug!(%err, "rejected checkpoint"))
    }
}

fn take<'a, const N: usize>(buf: &mut &'a [u8]) -> Option<&'a [u8; N]> {
    let (head, tail) = buf.split_first_chunk::<N>()?;
    *buf = tail;
    Some(head)
}

fn decode(blob: &[u8]) -> Result<KeccakState, ImportError> {
    let truncated = || ImportError::Truncated {
        expected: HEADER_LEN,
        actual: blob.len(),
    };
    if blob.len() < HEADER_LEN {
        return Err(truncated());
    }
    let mut buf = blob;

    if *take::<4>(&mut buf).ok_or_else(truncated)? != MAGIC {
        return Err(ImportError::UnknownFormat);
    }
    let [version] = *take::<1>(&mut buf).ok_or_else(truncated)?;
    if version != VERSION {
        return Err(ImportError::UnsupportedVersion(version));
    }

    let mut lanes = [0u64; LANES];
    for lane in lanes.iter_mut() {
        *lane = u64::from_le_bytes(*take::<8>(&mut buf).ok_or_else(truncated)?);
    }

    let [rate, dsbyte] = *take::<2>(&mut buf).ok_or_else(truncated)?;
    let rate = usize::from(rate);
    let output_len = usize::from(u16::from_le_bytes(*take::<2>(&mut buf).ok_or_else(truncated)?));
    let config = SpongeConfig::find(
        rate,
        dsbyte,
        match output_len {
            0 => OutputLength::Unbounded,
            len => OutputLength::Fixed(len),
        },
    )
    .ok_or(ImportError::UnsupportedConfiguration {
        rate,
        dsbyte,
        output_len,
    })?;

    let expected = encoded_len(rate);
    if blob.len() < expected {
        return Err(ImportError::Truncated {
            expected,
            actual: blob.len(),
        });
    }
    if blob.len() > expected {
        return Err(ImportError::Oversized {
            expected,
            actual: blob.len(),
        });
    }

    // `buf` is now exactly `count || storage || direction`.
    let count = usize::from(buf[0]);
    if count >= rate {
        return Err(ImportError::BufferOverflow { count, rate });
    }
    let storage = &buf[1..=rate];

    let direction = match buf[1 + rate] {
        ABSORBING => Direction::Absorbing,
        SQUEEZING => Direction::Squeezing,
        other => return Err(ImportError::InvalidDirection(other)),
    };

    Ok(KeccakState::from_parts(config, lanes, &storage[..count], direction))
}
