//! Implementation of the bonhash transformation: a keyed, deterministic
//! encoding that maps an input file to a hex string via Fibonacci-indexed
//! byte selection, MD5, and AES256-ECB. This is a puzzle artifact, not a
//! cryptographic primitive.

pub mod constants;
pub mod crypto;
pub mod fib;
pub mod hash;
pub mod key;
