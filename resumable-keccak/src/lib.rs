//! Keccak and SHA-3 hashing with resumable state.
//!
//! A [`KeccakState`] hashes a stream of bytes with the sponge construction over
//! the [Keccak-f] permutation. At any point of the stream its exact internal state can be
//! exported into a [`Checkpoint`], moved elsewhere, and imported into a new hash that
//! finishes the computation with a digest bit-identical to an uninterrupted run.
//!
//! # Examples
//!
//! ```
//! use resumable_keccak::{new_legacy_keccak256, new_legacy_keccak256_with_state};
//!
//! let mut hash = new_legacy_keccak256();
//! hash.update(b"hello ");
//! let checkpoint = hash.export_state();
//!
//! // ... possibly in another process, from the checkpoint bytes ...
//! let mut resumed = new_legacy_keccak256_with_state(Some(&checkpoint)).unwrap();
//! resumed.update(b"world");
//!
//! let mut uninterrupted = new_legacy_keccak256();
//! uninterrupted.update(b"hello world");
//! assert_eq!(resumed.sum(), uninterrupted.sum());
//! ```
//!
//! # Supported hash functions
//!
//! All of them are listed in [`SpongeConfig::SUPPORTED`]:
//!
//! 1. legacy Keccak-256 (the default) and Keccak-512, with domain separation byte `0x01`;
//! 2. SHA3-224, SHA3-256, SHA3-384, SHA3-512 from [FIPS 202];
//! 3. the extendable-output functions SHAKE128 and SHAKE256 from [FIPS 202],
//!    read incrementally through [`KeccakState::squeeze`].
//!
//! # Capabilities
//!
//! [`SpongeHash`] is the plain streaming hash interface;
//! [`Checkpointable`] adds [`export_state`][Checkpointable::export_state] and
//! [`import_state`][Checkpointable::import_state]. [`KeccakState`] implements both.
//! With the `std` feature (enabled by default) it is also an [`std::io::Write`],
//! and it implements [`digest::Update`] for code written against the RustCrypto traits.
//!
//! [Keccak-f]: https://keccak.team/keccak_specs_summary.html
//! [FIPS 202]: https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.202.pdf

#![cfg_attr(not(any(feature = "std", test)), no_std)]
extern crate alloc;

#[cfg(target_endian = "big")]
compile_error!(
    r#"
This crate doesn't support big-endian targets.
"#
);

/// The Keccak-f\[1600\] permutation.
pub mod permutation;

/// The sponge engine [`KeccakState`].
pub mod sponge;

/// Serialization of a running [`KeccakState`] into a [`Checkpoint`].
pub mod checkpoint;

/// Supported configurations and constructors.
pub mod instantiations;

/// The [`SpongeHash`] and [`Checkpointable`] capabilities.
pub mod traits;

/// Defines [`ImportError`].
mod error;

/// Unit-tests.
#[cfg(test)]
mod tests;

pub use checkpoint::Checkpoint;
pub use error::ImportError;
pub use instantiations::{
    new_legacy_keccak256, new_legacy_keccak256_with_state, new_legacy_keccak512, new_sha3_224,
    new_sha3_256, new_sha3_384, new_sha3_512, new_shake128, new_shake256, OutputLength,
    SpongeConfig,
};
pub use sponge::{Direction, KeccakState};
pub use traits::{Checkpointable, SpongeHash};
