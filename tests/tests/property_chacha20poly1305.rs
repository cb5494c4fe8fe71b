//! Property-based tests for the ChaCha20-Poly1305 cipher handle

use chap_algorithms::types::Nonce;
use chap_algorithms::ChaCha20;
use chap_symmetric::{Aead, ChaCha20Poly1305Cipher, SymmetricCipher};
use proptest::prelude::*;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

fn message() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=600)
}

fn aad() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=80)
}

proptest! {
    #[test]
    fn seal_open_roundtrip(
        key in any::<[u8; 32]>(),
        nonce in any::<[u8; 12]>(),
        plaintext in message(),
        aad in aad()
    ) {
        let cipher = ChaCha20Poly1305Cipher::new(&key).unwrap();
        let sealed = cipher.seal(&nonce, &plaintext, &aad).unwrap();
        let opened = cipher.open(&nonce, &sealed, &aad).unwrap();

        prop_assert_eq!(opened, plaintext);
    }

    #[test]
    fn seal_is_deterministic(
        key in any::<[u8; 32]>(),
        nonce in any::<[u8; 12]>(),
        plaintext in message(),
        aad in aad()
    ) {
        let a = ChaCha20Poly1305Cipher::new(&key).unwrap();
        let b = a.clone();

        prop_assert_eq!(
            a.seal(&nonce, &plaintext, &aad).unwrap(),
            b.seal(&nonce, &plaintext, &aad).unwrap()
        );
    }

    #[test]
    fn overhead_is_constant(
        key in any::<[u8; 32]>(),
        nonce in any::<[u8; 12]>(),
        plaintext in message(),
        aad in aad()
    ) {
        let cipher = ChaCha20Poly1305Cipher::new(&key).unwrap();
        let sealed = cipher.seal(&nonce, &plaintext, &aad).unwrap();

        prop_assert_eq!(cipher.overhead(), 16);
        prop_assert_eq!(sealed.len(), plaintext.len() + cipher.overhead());
    }

    #[test]
    fn single_bit_flip_is_rejected(
        key in any::<[u8; 32]>(),
        nonce in any::<[u8; 12]>(),
        plaintext in message(),
        aad in aad(),
        pick in any::<prop::sample::Index>(),
        bit in 0u8..8
    ) {
        let cipher = ChaCha20Poly1305Cipher::new(&key).unwrap();
        let mut sealed = cipher.seal(&nonce, &plaintext, &aad).unwrap();

        let at = pick.index(sealed.len());
        sealed[at] ^= 1 << bit;

        let err = cipher.open(&nonce, &sealed, &aad).unwrap_err();
        prop_assert!(err.is_authentication_failure());
    }

    #[test]
    fn ciphertext_is_plaintext_xor_keystream(
        key in any::<[u8; 32]>(),
        nonce in any::<[u8; 12]>(),
        plaintext in message()
    ) {
        let cipher = ChaCha20Poly1305Cipher::new(&key).unwrap();
        let sealed = cipher.seal(&nonce, &plaintext, &[]).unwrap();

        let mut keystream = vec![0u8; plaintext.len()];
        ChaCha20::with_counter(&key, &Nonce::<12>::new(nonce), 1)
            .keystream(&mut keystream)
            .unwrap();

        for (i, p) in plaintext.iter().enumerate() {
            prop_assert_eq!(sealed[i], p ^ keystream[i]);
        }
    }
}

#[test]
fn distinct_nonces_give_distinct_ciphertexts() {
    let mut rng = ChaCha20Rng::seed_from_u64(0x5eed);
    let mut key = [0u8; 32];
    rng.fill_bytes(&mut key);
    let cipher = ChaCha20Poly1305Cipher::new(&key).unwrap();

    let plaintext = [0u8; 64];
    let mut seen = std::collections::HashSet::new();
    for _ in 0..64 {
        let mut nonce = [0u8; 12];
        rng.fill_bytes(&mut nonce);
        assert!(seen.insert(cipher.seal(&nonce, &plaintext, &[]).unwrap()));
    }
}
