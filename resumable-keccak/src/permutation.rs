//! The Keccak-f\[1600\] permutation.
//!
//! The state is 25 lanes of 64 bits, laid out as a 5×5 grid where lane
//! `(x, y)` lives at index `x + 5 * y`. Each of the 24 rounds applies
//! θ (column parity), ρ (lane rotation), π (lane transposition),
//! χ (the only non-linear step) and ι (round constant), in that order.
//!
//! The byte view of the state ([`AsRef<[u8]>`]) is the little-endian encoding of the
//! lanes, which is the order in which the sponge XORs its rate in and reads it out.
use core::fmt::Debug;

use zerocopy::IntoBytes;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Number of rounds of Keccak-f\[1600\].
pub const ROUNDS: usize = 24;

/// Width of the permutation, in bytes.
pub const WIDTH: usize = 200;

/// Number of 64-bit lanes in the state.
pub const LANES: usize = 25;

/// Round constants injected into lane `(0, 0)` by the ι step.
const ROUND_CONSTANTS: [u64; ROUNDS] = [
    0x0000_0000_0000_0001,
    0x0000_0000_0000_8082,
    0x8000_0000_0000_808a,
    0x8000_0000_8000_8000,
    0x0000_0000_0000_808b,
    0x0000_0000_8000_0001,
    0x8000_0000_8000_8081,
    0x8000_0000_0000_8009,
    0x0000_0000_0000_008a,
    0x0000_0000_0000_0088,
    0x0000_0000_8000_8009,
    0x0000_0000_8000_000a,
    0x0000_0000_8000_808b,
    0x8000_0000_0000_008b,
    0x8000_0000_0000_8089,
    0x8000_0000_0000_8003,
    0x8000_0000_0000_8002,
    0x8000_0000_0000_0080,
    0x0000_0000_0000_800a,
    0x8000_0000_8000_000a,
    0x8000_0000_8000_8081,
    0x8000_0000_0000_8080,
    0x0000_0000_8000_0001,
    0x8000_0000_8000_8008,
];

/// ρ offsets, indexed by lane position `x + 5 * y`.
const RHO: [u32; LANES] = [
    0, 1, 62, 28, 27, //
    36, 44, 6, 55, 20, //
    3, 10, 43, 25, 39, //
    41, 45, 15, 21, 8, //
    18, 2, 61, 56, 14,
];

/// Apply the full 24-round Keccak-f\[1600\] permutation to `lanes` in place.
pub fn keccak_f1600(lanes: &mut [u64; LANES]) {
    for round_constant in ROUND_CONSTANTS {
        round(lanes, round_constant);
    }
}

#[inline(always)]
fn round(a: &mut [u64; LANES], round_constant: u64) {
    // θ
    let mut c = [0u64; 5];
    for x in 0..5 {
        c[x] = a[x] ^ a[x + 5] ^ a[x + 10] ^ a[x + 15] ^ a[x + 20];
    }
    for x in 0..5 {
        let d = c[(x + 4) % 5] ^ c[(x + 1) % 5].rotate_left(1);
        for y in 0..5 {
            a[x + 5 * y] ^= d;
        }
    }

    // ρ and π: B[y, 2x + 3y] = rot(A[x, y], r[x, y])
    let mut b = [0u64; LANES];
    for x in 0..5 {
        for y in 0..5 {
            let src = x + 5 * y;
            let dst = y + 5 * ((2 * x + 3 * y) % 5);
            b[dst] = a[src].rotate_left(RHO[src]);
        }
    }

    // χ
    for y in 0..5 {
        let row = 5 * y;
        for x in 0..5 {
            a[row + x] = b[row + x] ^ (!b[row + (x + 1) % 5] & b[row + (x + 2) % 5]);
        }
    }

    // ι
    a[0] ^= round_constant;
}

/// Keccak permutation internal state: 25 64-bit words,
/// or equivalently 200 bytes in little-endian order.
#[derive(Clone, PartialEq, Eq, Default, Zeroize, ZeroizeOnDrop)]
pub struct KeccakF1600([u64; LANES]);

impl KeccakF1600 {
    /// The all-zero state every sponge starts from.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a state from its lanes.
    pub fn from_lanes(lanes: [u64; LANES]) -> Self {
        Self(lanes)
    }

    /// A copy of the 25 lanes.
    pub fn lanes(&self) -> [u64; LANES] {
        self.0
    }

    /// Permute the state.
    pub fn permute(&mut self) {
        keccak_f1600(&mut self.0);
    }

    /// XOR `block` into the leading bytes of the state.
    pub(crate) fn xor_in(&mut self, block: &[u8]) {
        debug_assert!(block.len() <= WIDTH);
        self.as_mut()
            .iter_mut()
            .zip(block)
            .for_each(|(state, input)| *state ^= input);
    }
}

impl AsRef<[u8]> for KeccakF1600 {
    fn as_ref(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl AsMut<[u8]> for KeccakF1600 {
    fn as_mut(&mut self) -> &mut [u8] {
        self.0.as_mut_bytes()
    }
}

/// Censored version of Debug
impl Debug for KeccakF1600 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("KeccakF1600").field(&"<redacted>").finish()
    }
}
