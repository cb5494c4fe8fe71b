//! RFC 8439 known-answer tests across the primitive and handle layers

use chap_algorithms::types::Nonce;
use chap_algorithms::{ChaCha20, ChaCha20Poly1305, Poly1305};
use chap_symmetric::{Aead, ChaCha20Poly1305Cipher, SymmetricCipher};
use chap_tests::{aead_vectors, chacha20_vectors, poly1305_vectors};

fn array<const N: usize>(bytes: &[u8]) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(bytes);
    out
}

#[test]
fn chacha20_known_answers() {
    for v in chacha20_vectors() {
        let (key, nonce, plaintext, ciphertext) = v.decode().unwrap();
        let nonce = Nonce::<12>::from_slice(&nonce).unwrap();

        let mut data = plaintext.clone();
        ChaCha20::with_counter(&array(&key), &nonce, v.counter)
            .process(&mut data)
            .unwrap();
        assert_eq!(data, ciphertext, "{}", v.description);
    }
}

#[test]
fn poly1305_known_answers() {
    for v in poly1305_vectors() {
        let (key, message, tag) = v.decode().unwrap();
        let key = array(&key);

        assert_eq!(
            &Poly1305::mac(&key, &message)[..],
            &tag[..],
            "{}",
            v.description
        );
        assert!(Poly1305::verify(&key, &message, &tag).is_ok(), "{}", v.description);
    }
}

#[test]
fn aead_seal_known_answers() {
    for v in aead_vectors() {
        let d = v.decode().unwrap();

        let cipher = ChaCha20Poly1305Cipher::new(&d.key).unwrap();
        let sealed = cipher.seal(&d.nonce, &d.plaintext, &d.aad).unwrap();

        assert!(sealed.len() >= cipher.overhead());
        let (ciphertext, tag) = sealed.split_at(sealed.len() - cipher.overhead());
        assert_eq!(ciphertext, &d.ciphertext[..], "{}", v.description);
        assert_eq!(tag, &d.tag[..], "{}", v.description);
    }
}

#[test]
fn aead_open_known_answers() {
    for v in aead_vectors() {
        let d = v.decode().unwrap();

        let cipher = ChaCha20Poly1305Cipher::new(&d.key).unwrap();
        let opened = cipher.open(&d.nonce, &d.sealed(), &d.aad).unwrap();
        assert_eq!(opened, d.plaintext, "{}", v.description);
    }
}

#[test]
fn composer_and_handle_agree() {
    for v in aead_vectors() {
        let d = v.decode().unwrap();
        let nonce = Nonce::<12>::from_slice(&d.nonce).unwrap();

        let composer = ChaCha20Poly1305::new(&array(&d.key));
        let from_composer = composer.encrypt(&nonce, &d.plaintext, Some(&d.aad[..])).unwrap();

        let handle = ChaCha20Poly1305Cipher::new(&d.key).unwrap();
        let from_handle = handle.seal(&d.nonce, &d.plaintext, &d.aad).unwrap();

        assert_eq!(from_composer, from_handle, "{}", v.description);
        assert_eq!(from_handle, d.sealed(), "{}", v.description);
    }
}

#[test]
fn empty_plaintext_and_aad() {
    let cipher = ChaCha20Poly1305Cipher::new(&[0x5a; 32]).unwrap();
    let nonce = [0u8; 12];

    let sealed = cipher.seal(&nonce, &[], &[]).unwrap();
    assert_eq!(sealed.len(), 16);

    let opened = cipher.open(&nonce, &sealed, &[]).unwrap();
    assert!(opened.is_empty());
}

#[test]
fn poly1305_zero_key_empty_message() {
    assert_eq!(Poly1305::mac(&[0u8; 32], &[]).into_bytes(), [0u8; 16]);
}
