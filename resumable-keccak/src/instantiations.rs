//! Supported sponge configurations and the constructors built on them.
//!
//! Every configuration runs the same [`KeccakF1600`][crate::permutation::KeccakF1600]
//! permutation. They differ in
//!
//! 1. the rate, i.e. how many bytes of the 200-byte state are exchanged per permutation call;
//! 2. the domain separation byte appended at finalization: `0x01` for the legacy
//!    [Keccak] submission, `0x06` for [FIPS 202] SHA-3, `0x1f` for SHAKE;
//! 3. the output length, fixed for hashes and unbounded for extendable-output functions.
//!
//! [Keccak]: https://keccak.team/keccak_specs_summary.html
//! [FIPS 202]: https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.202.pdf
use crate::{checkpoint::Checkpoint, permutation::WIDTH, ImportError, KeccakState};

/// Domain separation byte of the original Keccak submission.
pub const DSBYTE_KECCAK: u8 = 0x01;
/// Domain separation byte of FIPS 202 SHA-3.
pub const DSBYTE_SHA3: u8 = 0x06;
/// Domain separation byte of FIPS 202 SHAKE.
pub const DSBYTE_SHAKE: u8 = 0x1f;

/// Largest rate among the supported configurations (SHAKE128).
pub const MAX_RATE: usize = 168;

/// How many bytes a configuration outputs on [`KeccakState::sum`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum OutputLength {
    /// A hash with a fixed digest size, in bytes.
    Fixed(usize),
    /// An extendable-output function: output is squeezed until the caller has enough.
    Unbounded,
}

/// The parameters fixed for the whole life of a [`KeccakState`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SpongeConfig {
    rate: usize,
    dsbyte: u8,
    output_len: OutputLength,
}

impl SpongeConfig {
    /// Legacy Keccak-256, as used by Ethereum.
    pub const KECCAK_256: Self = Self::new(136, DSBYTE_KECCAK, OutputLength::Fixed(32));
    /// Legacy Keccak-512.
    pub const KECCAK_512: Self = Self::new(72, DSBYTE_KECCAK, OutputLength::Fixed(64));
    /// FIPS 202 SHA3-224.
    pub const SHA3_224: Self = Self::new(144, DSBYTE_SHA3, OutputLength::Fixed(28));
    /// FIPS 202 SHA3-256.
    pub const SHA3_256: Self = Self::new(136, DSBYTE_SHA3, OutputLength::Fixed(32));
    /// FIPS 202 SHA3-384.
    pub const SHA3_384: Self = Self::new(104, DSBYTE_SHA3, OutputLength::Fixed(48));
    /// FIPS 202 SHA3-512.
    pub const SHA3_512: Self = Self::new(72, DSBYTE_SHA3, OutputLength::Fixed(64));
    pub const SHAKE_128: Self = Self::new(168, DSBYTE_SHAKE, OutputLength::Unbounded);
    pub const SHAKE_256: Self = Self::new(136, DSBYTE_SHAKE, OutputLength::Unbounded);

    /// All configurations a [`Checkpoint`] may describe.
    pub const SUPPORTED: [Self; 8] = [
        Self::KECCAK_256,
        Self::KECCAK_512,
        Self::SHA3_224,
        Self::SHA3_256,
        Self::SHA3_384,
        Self::SHA3_512,
        Self::SHAKE_128,
        Self::SHAKE_256,
    ];

    const fn new(rate: usize, dsbyte: u8, output_len: OutputLength) -> Self {
        assert!(rate > 0 && rate <= MAX_RATE);
        assert!(rate < WIDTH, "Capacity of the sponge should be > 0.");
        Self {
            rate,
            dsbyte,
            output_len,
        }
    }

    /// Look up the supported configuration matching all three parameters.
    pub fn find(rate: usize, dsbyte: u8, output_len: OutputLength) -> Option<Self> {
        Self::SUPPORTED.into_iter().find(|config| {
            config.rate == rate && config.dsbyte == dsbyte && config.output_len == output_len
        })
    }

    /// Bytes absorbed or squeezed per permutation call.
    pub const fn rate(&self) -> usize {
        self.rate
    }

    /// Bytes of the state never touched by input or output.
    pub const fn capacity(&self) -> usize {
        WIDTH - self.rate
    }

    /// Domain separation byte appended before padding.
    pub const fn dsbyte(&self) -> u8 {
        self.dsbyte
    }

    /// Fixed digest length, or unbounded for extendable-output functions.
    pub const fn output_len(&self) -> OutputLength {
        self.output_len
    }

    /// Length of the output of [`KeccakState::sum`].
    ///
    /// Extendable-output functions default to their capacity in bytes,
    /// i.e. twice their security level.
    pub const fn digest_size(&self) -> usize {
        match self.output_len {
            OutputLength::Fixed(len) => len,
            OutputLength::Unbounded => self.capacity(),
        }
    }
}

impl Default for SpongeConfig {
    fn default() -> Self {
        Self::KECCAK_256
    }
}

/// A fresh legacy Keccak-256 hash. This is the default configuration.
pub fn new_legacy_keccak256() -> KeccakState {
    KeccakState::new(SpongeConfig::KECCAK_256)
}

/// A legacy Keccak-256 hash, resumed from `checkpoint` when one is given.
///
/// Without a checkpoint this is [`new_legacy_keccak256`].
/// With one, the checkpoint is validated and the returned hash continues exactly
/// where the exported one stood; an invalid checkpoint is reported, never patched over.
pub fn new_legacy_keccak256_with_state(
    checkpoint: Option<&Checkpoint>,
) -> Result<KeccakState, ImportError> {
    match checkpoint {
        None => Ok(new_legacy_keccak256()),
        Some(checkpoint) => KeccakState::try_from(checkpoint),
    }
}

/// A fresh legacy Keccak-512 hash.
pub fn new_legacy_keccak512() -> KeccakState {
    KeccakState::new(SpongeConfig::KECCAK_512)
}

/// A fresh SHA3-224 hash.
pub fn new_sha3_224() -> KeccakState {
    KeccakState::new(SpongeConfig::SHA3_224)
}

/// A fresh SHA3-256 hash.
pub fn new_sha3_256() -> KeccakState {
    KeccakState::new(SpongeConfig::SHA3_256)
}

/// A fresh SHA3-384 hash.
pub fn new_sha3_384() -> KeccakState {
    KeccakState::new(SpongeConfig::SHA3_384)
}

/// A fresh SHA3-512 hash.
pub fn new_sha3_512() -> KeccakState {
    KeccakState::new(SpongeConfig::SHA3_512)
}

/// A fresh SHAKE128 extendable-output function.
pub fn new_shake128() -> KeccakState {
    KeccakState::new(SpongeConfig::SHAKE_128)
}

/// A fresh SHAKE256 extendable-output function.
pub fn new_shake256() -> KeccakState {
    KeccakState::new(SpongeConfig::SHAKE_256)
}
