/// Required size of the secret key in bytes
pub const KEY_SIZE: usize = 42;

/// Minimum accepted input size in bytes
pub const MIN_DATA_SIZE: usize = 191;

/// Offset into the Fibonacci table where key index derivation begins
pub const FIB_OFFSET: usize = 4919;
