//! Hash a message in two sessions that only share a hex-encoded checkpoint.
//!
//! Run with `cargo run --example split_hashing`.
use resumable_keccak::{new_legacy_keccak256, new_legacy_keccak256_with_state, Checkpoint};

/// First session: absorb a prefix and hand over the checkpoint.
fn first_session(prefix: &[u8]) -> String {
    let mut hash = new_legacy_keccak256();
    hash.update(prefix);
    hex::encode(hash.export_state().as_bytes())
}

/// Second session: resume from the checkpoint and finish.
fn second_session(checkpoint: &str, suffix: &[u8]) -> Vec<u8> {
    let bytes = hex::decode(checkpoint).expect("checkpoint is valid hex");
    let mut hash = new_legacy_keccak256_with_state(Some(&Checkpoint::from(bytes)))
        .expect("checkpoint is well formed");
    hash.update(suffix);
    hash.sum()
}

fn main() {
    let message = b"a long stream whose hashing is split across two processes";
    let (prefix, suffix) = message.split_at(20);

    let checkpoint = first_session(prefix);
    println!("checkpoint ({} bytes): {checkpoint}", checkpoint.len() / 2);

    let digest = second_session(&checkpoint, suffix);
    println!("keccak256: {}", hex::encode(&digest));

    let mut uninterrupted = new_legacy_keccak256();
    uninterrupted.update(message);
    assert_eq!(digest, uninterrupted.sum());
}
