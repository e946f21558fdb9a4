use std::fmt;

use log::debug;
use thiserror::Error;

use crate::{
    constants::{FIB_OFFSET, MIN_DATA_SIZE},
    crypto::{PairCipher, CHUNK_SIZE},
    fib::FibSequence,
    key::HashKey,
};

#[derive(Debug, Error)]
pub enum HashError {
    #[error("Input is smaller than 191 bytes ({0} bytes)")]
    InputTooSmall(usize),
}

/// The bonhash scanner. Walks a cursor over the input two bytes at a time,
/// using Fibonacci values (modulo the buffer lengths) to pick which data and
/// key bytes each step actually consumes, and emits one 64-hex-character
/// chunk per pair.
pub struct BonHasher {
    key: HashKey,
    data: Vec<u8>,
    fib: FibSequence,
}

impl BonHasher {
    /// Create a new scanner over `data`. The Fibonacci table is fully
    /// materialized here; its length is derived from the key and data sizes
    /// plus the fixed offset, so every index the scan can reach is covered.
    /// [`HashError::InputTooSmall`] is returned before any work is done if
    /// `data` is shorter than 191 bytes.
    pub fn new(key: HashKey, data: Vec<u8>) -> Result<Self, HashError> {
        if data.len() < MIN_DATA_SIZE {
            return Err(HashError::InputTooSmall(data.len()));
        }

        let table_len = key.as_slice().len() + data.len() + FIB_OFFSET;
        debug!("Materializing Fibonacci table with {} entries", table_len);

        Ok(Self {
            key,
            data,
            fib: FibSequence::new(table_len),
        })
    }

    /// Number of pair iterations the scan performs: `ceil(data_len / 2)`.
    ///
    /// The loop condition is `cursor < data_len` and every iteration consumes
    /// two cursor positions, so an odd-length input still gets a final full
    /// iteration. Its second selection runs with the cursor one past the end,
    /// which is safe because every lookup index is reduced modulo the buffer
    /// length; the selection simply wraps. This matches the reference
    /// implementation, which relies on the same modulo wrap.
    pub fn num_chunks(&self) -> usize {
        (self.data.len() + 1) / 2
    }

    /// Select the data byte and key byte consumed at cursor position `i`.
    fn select_at(&self, i: usize) -> (u8, u8) {
        let key = self.key.as_slice();

        let data_index = self.fib.index_mod(i, self.data.len());
        let key_index = (i + self.fib.index_mod(FIB_OFFSET + i, key.len())) % key.len();

        (self.data[data_index], key[key_index])
    }

    /// Compute the 64-hex-character chunk for the pair starting at cursor
    /// `i`. This is a pure function of the key, the data, and `i`: the two
    /// selected data bytes are MD5-hashed, the digest's lowercase hex text
    /// (32 ASCII bytes, not the raw 16 digest bytes) is encrypted with a
    /// cipher keyed by the two selected key bytes, and the ciphertext is
    /// hex-encoded.
    pub fn chunk_at(&self, i: usize) -> String {
        let (data1, key1) = self.select_at(i);
        let (data2, key2) = self.select_at(i + 1);

        let digest = format!("{:x}", md5::compute([data1, data2]));
        // Cannot panic: an MD5 hex digest is always exactly 32 bytes
        let plaintext: [u8; CHUNK_SIZE] = digest.as_bytes().try_into().unwrap();

        let ciphertext = PairCipher::new(key1, key2).encrypt_digest(plaintext);

        hex::encode(ciphertext)
    }

    /// Run the full scan and return the concatenated hex output. The result
    /// is `64 * ceil(data_len / 2)` characters and depends only on the key
    /// and data bytes.
    pub fn digest(&self) -> String {
        debug!("Scanning {} byte pairs", self.num_chunks());

        let mut output = String::with_capacity(self.num_chunks() * CHUNK_SIZE * 2);
        let mut i = 0;

        while i < self.data.len() {
            output.push_str(&self.chunk_at(i));
            i += 2;
        }

        output
    }
}

impl fmt::Debug for BonHasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // HashKey's Debug already redacts the key bytes
        f.debug_struct("BonHasher")
            .field("key", &self.key)
            .field("data_len", &self.data.len())
            .field("fib_len", &self.fib.len())
            .finish()
    }
}
