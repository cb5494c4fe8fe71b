//! Every single-bit flip of ciphertext, tag, AAD or nonce must be rejected

use chap_api::Error;
use chap_symmetric::{Aead, ChaCha20Poly1305Cipher, SymmetricCipher};
use chap_tests::aead_vectors;

fn assert_rejected(result: chap_api::Result<Vec<u8>>, what: &str, bit: usize) {
    match result {
        Err(Error::AuthenticationFailed { context }) => assert_eq!(context, "ChaCha20Poly1305"),
        Err(other) => panic!("{} bit {}: unexpected error {:?}", what, bit, other),
        Ok(_) => panic!("{} bit {}: tampered input was accepted", what, bit),
    }
}

#[test]
fn every_ciphertext_and_tag_bit_is_authenticated() {
    for v in aead_vectors() {
        let d = v.decode().unwrap();
        let cipher = ChaCha20Poly1305Cipher::new(&d.key).unwrap();
        let sealed = d.sealed();

        for bit in 0..sealed.len() * 8 {
            let mut tampered = sealed.clone();
            tampered[bit / 8] ^= 1 << (bit % 8);
            assert_rejected(cipher.open(&d.nonce, &tampered, &d.aad), "input", bit);
        }
    }
}

#[test]
fn every_aad_bit_is_authenticated() {
    for v in aead_vectors() {
        let d = v.decode().unwrap();
        let cipher = ChaCha20Poly1305Cipher::new(&d.key).unwrap();
        let sealed = d.sealed();

        for bit in 0..d.aad.len() * 8 {
            let mut aad = d.aad.clone();
            aad[bit / 8] ^= 1 << (bit % 8);
            assert_rejected(cipher.open(&d.nonce, &sealed, &aad), "aad", bit);
        }

        // Dropping or extending the AAD changes the authenticated lengths
        assert_rejected(cipher.open(&d.nonce, &sealed, &[]), "empty aad", 0);
        let mut longer = d.aad.clone();
        longer.push(0);
        assert_rejected(cipher.open(&d.nonce, &sealed, &longer), "extended aad", 0);
    }
}

#[test]
fn every_nonce_bit_is_bound() {
    let d = aead_vectors()[0].decode().unwrap();
    let cipher = ChaCha20Poly1305Cipher::new(&d.key).unwrap();
    let sealed = d.sealed();

    for bit in 0..d.nonce.len() * 8 {
        let mut nonce = d.nonce.clone();
        nonce[bit / 8] ^= 1 << (bit % 8);
        assert_rejected(cipher.open(&nonce, &sealed, &d.aad), "nonce", bit);
    }
}

#[test]
fn wrong_key_is_rejected() {
    let d = aead_vectors()[1].decode().unwrap();
    let mut key = d.key.clone();
    key[31] ^= 0x80;

    let cipher = ChaCha20Poly1305Cipher::new(&key).unwrap();
    assert_rejected(cipher.open(&d.nonce, &d.sealed(), &d.aad), "key", 255);
}

#[test]
fn truncated_input_is_rejected() {
    let d = aead_vectors()[0].decode().unwrap();
    let cipher = ChaCha20Poly1305Cipher::new(&d.key).unwrap();
    let sealed = d.sealed();

    // Still at least a tag long: authentication fails
    assert_rejected(cipher.open(&d.nonce, &sealed[..sealed.len() - 1], &d.aad), "truncate", 0);
    assert_rejected(cipher.open(&d.nonce, &sealed[..16], &d.aad), "tag only", 0);

    // Shorter than a tag: a length error
    assert!(matches!(
        cipher.open(&d.nonce, &sealed[..15], &d.aad),
        Err(Error::InvalidLength { expected: 16, actual: 15, .. })
    ));
}

#[test]
fn failed_open_releases_nothing_into_dst() {
    let d = aead_vectors()[1].decode().unwrap();
    let cipher = ChaCha20Poly1305Cipher::new(&d.key).unwrap();

    let mut sealed = d.sealed();
    sealed[0] ^= 0x01;

    let mut dst = vec![0xAA; 4];
    assert!(cipher.open_into(&mut dst, &d.nonce, &sealed, &d.aad).is_err());
    assert_eq!(dst, vec![0xAA; 4]);
}
