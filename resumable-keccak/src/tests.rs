use proptest::prelude::*;
use sha3::Digest;

use crate::{
    new_legacy_keccak256, new_legacy_keccak256_with_state, Checkpoint, Checkpointable,
    ImportError, KeccakState, SpongeConfig,
};

/// Output of the RustCrypto implementation of `config` on `input`.
fn reference(config: SpongeConfig, input: &[u8], len: usize) -> Vec<u8> {
    fn xof<H: Default + sha3::digest::Update + sha3::digest::ExtendableOutput>(
        input: &[u8],
        len: usize,
    ) -> Vec<u8> {
        let mut hasher = H::default();
        sha3::digest::Update::update(&mut hasher, input);
        let mut output = vec![0u8; len];
        H::finalize_xof_into(hasher, &mut output);
        output
    }

    match config {
        SpongeConfig::KECCAK_256 => sha3::Keccak256::digest(input).to_vec(),
        SpongeConfig::KECCAK_512 => sha3::Keccak512::digest(input).to_vec(),
        SpongeConfig::SHA3_224 => sha3::Sha3_224::digest(input).to_vec(),
        SpongeConfig::SHA3_256 => sha3::Sha3_256::digest(input).to_vec(),
        SpongeConfig::SHA3_384 => sha3::Sha3_384::digest(input).to_vec(),
        SpongeConfig::SHA3_512 => sha3::Sha3_512::digest(input).to_vec(),
        SpongeConfig::SHAKE_128 => xof::<sha3::Shake128>(input, len),
        SpongeConfig::SHAKE_256 => xof::<sha3::Shake256>(input, len),
        _ => panic!("no reference for {config:?}"),
    }
}

fn digest_of(config: SpongeConfig, input: &[u8]) -> Vec<u8> {
    let mut state = KeccakState::new(config);
    state.update(input);
    state.sum()
}

#[test]
fn test_keccak256_known_answers() {
    let vectors: [(&[u8], &str); 3] = [
        (
            b"",
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470",
        ),
        (
            b"abc",
            "4e03657aea45a94fc7d47ba826c8d667c0d1e6e33a64a036ec44f58fa12d6c45",
        ),
        (
            b"The quick brown fox jumps over the lazy dog",
            "4d741b6f1eb29cb2a9b9911c82f56fa8d73b04959d3d9d222895df6c0b28aa15",
        ),
    ];
    for (input, expected) in vectors {
        let mut hash = new_legacy_keccak256();
        hash.update(input);
        assert_eq!(hex::encode(hash.sum()), expected);
    }
}

#[test]
fn test_fips202_known_answers() {
    assert_eq!(
        hex::encode(digest_of(SpongeConfig::SHA3_256, b"")),
        "a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a"
    );
    assert_eq!(
        hex::encode(digest_of(SpongeConfig::SHAKE_128, b"")),
        "7f9c2ba4e88f827d616045507605853ed73b8093f6efbc88eb1a6eacfa66ef26"
    );
}

#[test]
fn test_all_configurations_match_reference() {
    let inputs: [Vec<u8>; 5] = [
        vec![],
        b"abc".to_vec(),
        vec![0x61; 71],
        vec![0x61; 143],
        (0..1000).map(|i| (i * 7) as u8).collect(),
    ];
    for config in SpongeConfig::SUPPORTED {
        for input in &inputs {
            assert_eq!(
                digest_of(config, input),
                reference(config, input, config.digest_size()),
                "{config:?} on {} bytes",
                input.len()
            );
        }
    }
}

#[test]
fn test_long_output_squeeze() {
    for config in [SpongeConfig::SHAKE_128, SpongeConfig::SHAKE_256] {
        let mut state = KeccakState::new(config);
        state.update(b"more output than one block holds");
        let mut output = vec![0u8; 1000];
        state.squeeze(&mut output);
        assert_eq!(
            output,
            reference(config, b"more output than one block holds", 1000)
        );
    }
}

#[test]
fn test_export_import_then_continue() {
    let mut h1 = new_legacy_keccak256();
    h1.update(b"test data for state export/import");

    let mut h2 = new_legacy_keccak256_with_state(Some(&h1.export_state())).unwrap();
    assert_eq!(h1.sum(), h2.sum());

    let additional = b"additional data after state export/import";
    h1.update(additional);
    h2.update(additional);
    assert_eq!(h1.sum(), h2.sum());
}

#[test]
fn test_import_into_existing_instance() {
    let mut h1 = new_legacy_keccak256_with_state(None).unwrap();
    h1.update(b"interface test data");

    let mut h2 = new_legacy_keccak256_with_state(None).unwrap();
    Checkpointable::import_state(&mut h2, &Checkpointable::export_state(&h1)).unwrap();
    assert_eq!(h1.sum(), h2.sum());
}

#[test]
fn test_rejected_checkpoint_yields_no_instance() {
    let mut blob = new_legacy_keccak256().export_state().into_bytes();
    blob.truncate(100);
    let result = new_legacy_keccak256_with_state(Some(&Checkpoint::from(blob)));
    assert!(matches!(result, Err(ImportError::Truncated { .. })));
}

#[test]
fn test_checkpoint_shared_across_threads() {
    let mut hash = new_legacy_keccak256();
    hash.update(b"shared prefix");
    let checkpoint = hash.export_state();

    let digests: Vec<Vec<u8>> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4u8)
            .map(|i| {
                let checkpoint = &checkpoint;
                scope.spawn(move || {
                    let mut resumed = KeccakState::try_from(checkpoint).unwrap();
                    resumed.update(&[i]);
                    resumed.sum()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for (i, digest) in digests.iter().enumerate() {
        let mut expected = hash.clone();
        expected.update(&[i as u8]);
        assert_eq!(*digest, expected.sum());
    }
}

#[cfg(feature = "std")]
#[test]
fn test_write_to_imported_squeezing_state_is_refused() {
    use std::io::{ErrorKind, Write};

    let mut source = new_legacy_keccak256();
    source.update(b"abc");
    source.squeeze(&mut [0u8; 1]);

    let mut resumed = new_legacy_keccak256_with_state(Some(&source.export_state())).unwrap();
    assert_eq!(resumed.direction(), crate::Direction::Squeezing);

    let err = resumed.write(b"x").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unsupported);
    // The refused write left the output stream where it was.
    assert_eq!(resumed.export_state(), source.export_state());

    resumed.reset();
    assert_eq!(resumed.write(b"abc").unwrap(), 3);
    assert_eq!(resumed.sum(), sha3::Keccak256::digest(b"abc").to_vec());
}

fn any_config() -> impl Strategy<Value = SpongeConfig> {
    prop::sample::select(SpongeConfig::SUPPORTED.to_vec())
}

proptest! {
    #[test]
    fn prop_chunking_invariance(
        input in prop::collection::vec(any::<u8>(), 0..600),
        cuts in prop::collection::vec(any::<prop::sample::Index>(), 0..8),
    ) {
        let mut points: Vec<usize> = cuts.iter().map(|cut| cut.index(input.len() + 1)).collect();
        points.sort_unstable();

        let mut chunked = new_legacy_keccak256();
        let mut start = 0;
        for point in points {
            chunked.update(&input[start..point]);
            start = point;
        }
        chunked.update(&input[start..]);

        prop_assert_eq!(chunked.sum(), sha3::Keccak256::digest(&input).to_vec());
    }

    #[test]
    fn prop_checkpoint_transparency(
        config in any_config(),
        input in prop::collection::vec(any::<u8>(), 0..600),
        split in any::<prop::sample::Index>(),
    ) {
        let (head, tail) = input.split_at(split.index(input.len() + 1));

        let mut original = KeccakState::new(config);
        original.update(head);
        let mut resumed = KeccakState::try_from(&original.export_state()).unwrap();
        resumed.update(tail);

        prop_assert_eq!(resumed.sum(), digest_of(config, &input));
    }

    #[test]
    fn prop_sum_is_non_destructive(
        config in any_config(),
        head in prop::collection::vec(any::<u8>(), 0..300),
        tail in prop::collection::vec(any::<u8>(), 0..300),
    ) {
        let mut state = KeccakState::new(config);
        state.update(&head);
        let first = state.sum();
        prop_assert_eq!(state.sum(), first);

        state.update(&tail);
        prop_assert_eq!(state.sum(), digest_of(config, &[head, tail].concat()));
    }

    #[test]
    fn prop_round_trip_identity(
        config in any_config(),
        head in prop::collection::vec(any::<u8>(), 0..400),
        tail in prop::collection::vec(any::<u8>(), 0..400),
    ) {
        let mut original = KeccakState::new(config);
        original.update(&head);
        let mut resumed = KeccakState::new(SpongeConfig::default());
        resumed.import_state(&original.export_state()).unwrap();

        prop_assert_eq!(resumed.export_state(), original.export_state());
        original.update(&tail);
        resumed.update(&tail);
        prop_assert_eq!(resumed.sum(), original.sum());
    }

    #[test]
    fn prop_default_equivalence(input in prop::collection::vec(any::<u8>(), 0..400)) {
        let mut default = new_legacy_keccak256();
        let mut absent = new_legacy_keccak256_with_state(None).unwrap();
        default.update(&input);
        absent.update(&input);
        prop_assert_eq!(absent.sum(), default.sum());
    }
}
