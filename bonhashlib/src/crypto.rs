use aes::Aes256;
use cipher::{generic_array::GenericArray, BlockEncrypt, KeyInit};

/// Size in bytes of one ciphertext chunk (and of the digest text plaintext)
pub const CHUNK_SIZE: usize = 32;

/// Type for encrypting one pair's digest text. This is plain AES256-ECB with
/// no padding: the 32-byte key is the two selected key bytes repeated 16
/// times, and the two 16-byte plaintext blocks are encrypted independently.
pub struct PairCipher(Aes256);

impl PairCipher {
    /// Create a new cipher instance from the two selected key bytes.
    pub fn new(key1: u8, key2: u8) -> Self {
        let mut key = [0u8; CHUNK_SIZE];
        for pair in key.chunks_exact_mut(2) {
            pair[0] = key1;
            pair[1] = key2;
        }

        Self(Aes256::new(GenericArray::from_slice(&key)))
    }

    /// Encrypt the 32-byte digest text, producing 32 ciphertext bytes.
    pub fn encrypt_digest(&self, mut block: [u8; CHUNK_SIZE]) -> [u8; CHUNK_SIZE] {
        for chunk in block.chunks_exact_mut(16) {
            self.0.encrypt_block(GenericArray::from_mut_slice(chunk));
        }

        block
    }
}
