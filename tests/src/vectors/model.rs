//! Pure data model for the hex-encoded vector files.

use serde::Deserialize;

use super::VectorError;

/// Top-level layout of a vector file
#[derive(Debug, Deserialize)]
pub struct VectorFile {
    #[serde(default)]
    pub chacha20: Vec<ChaCha20Vector>,
    #[serde(default)]
    pub poly1305: Vec<Poly1305Vector>,
    #[serde(default)]
    pub aead: Vec<AeadVector>,
}

/// ChaCha20 applied from `counter` over `plaintext`
#[derive(Debug, Deserialize)]
pub struct ChaCha20Vector {
    pub description: String,
    pub key: String,
    pub nonce: String,
    pub counter: u32,
    pub plaintext: String,
    pub ciphertext: String,
}

/// Poly1305 tag over `message` under a one-time `key`
#[derive(Debug, Deserialize)]
pub struct Poly1305Vector {
    pub description: String,
    pub key: String,
    pub message: String,
    pub tag: String,
}

/// Full AEAD case; `ciphertext` excludes the tag
#[derive(Debug, Deserialize)]
pub struct AeadVector {
    pub description: String,
    pub key: String,
    pub nonce: String,
    pub plaintext: String,
    pub aad: String,
    pub ciphertext: String,
    pub tag: String,
}

/// Decoded bytes of an [`AeadVector`]
#[derive(Debug, Clone)]
pub struct DecodedAead {
    pub key: Vec<u8>,
    pub nonce: Vec<u8>,
    pub plaintext: Vec<u8>,
    pub aad: Vec<u8>,
    pub ciphertext: Vec<u8>,
    pub tag: Vec<u8>,
}

impl DecodedAead {
    /// `ciphertext ‖ tag`, the input Open expects
    pub fn sealed(&self) -> Vec<u8> {
        let mut out = self.ciphertext.clone();
        out.extend_from_slice(&self.tag);
        out
    }
}

fn decode(description: &str, field: &'static str, value: &str) -> Result<Vec<u8>, VectorError> {
    hex::decode(value).map_err(|source| VectorError::Hex {
        description: description.to_string(),
        field,
        source,
    })
}

impl AeadVector {
    pub fn decode(&self) -> Result<DecodedAead, VectorError> {
        let d = &self.description;
        Ok(DecodedAead {
            key: decode(d, "key", &self.key)?,
            nonce: decode(d, "nonce", &self.nonce)?,
            plaintext: decode(d, "plaintext", &self.plaintext)?,
            aad: decode(d, "aad", &self.aad)?,
            ciphertext: decode(d, "ciphertext", &self.ciphertext)?,
            tag: decode(d, "tag", &self.tag)?,
        })
    }
}

impl ChaCha20Vector {
    /// Returns `(key, nonce, plaintext, ciphertext)`
    #[allow(clippy::type_complexity)]
    pub fn decode(&self) -> Result<(Vec<u8>, Vec<u8>, Vec<u8>, Vec<u8>), VectorError> {
        let d = &self.description;
        Ok((
            decode(d, "key", &self.key)?,
            decode(d, "nonce", &self.nonce)?,
            decode(d, "plaintext", &self.plaintext)?,
            decode(d, "ciphertext", &self.ciphertext)?,
        ))
    }
}

impl Poly1305Vector {
    /// Returns `(key, message, tag)`
    pub fn decode(&self) -> Result<(Vec<u8>, Vec<u8>, Vec<u8>), VectorError> {
        let d = &self.description;
        Ok((
            decode(d, "key", &self.key)?,
            decode(d, "message", &self.message)?,
            decode(d, "tag", &self.tag)?,
        ))
    }
}
