use num_bigint::BigUint;
use num_traits::ToPrimitive;

/// A fully materialized Fibonacci table. The scanner indexes into the table
/// out of order relative to generation order, so the whole thing is computed
/// up front rather than streamed. Values are arbitrary precision: `F[94]`
/// already exceeds `u64::MAX`, and realistic runs need indexes past 5000.
pub struct FibSequence {
    values: Vec<BigUint>,
}

impl FibSequence {
    /// Generate the first `n` Fibonacci numbers, starting from
    /// `F[0] = 0, F[1] = 1`.
    pub fn new(n: usize) -> Self {
        let mut values = Vec::with_capacity(n);

        if n > 0 {
            values.push(BigUint::from(0u8));
        }
        if n > 1 {
            values.push(BigUint::from(1u8));
        }
        for i in 2..n {
            let next = &values[i - 1] + &values[i - 2];
            values.push(next);
        }

        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get the Fibonacci value at index `i`.
    pub fn get(&self, i: usize) -> &BigUint {
        &self.values[i]
    }

    /// Get the Fibonacci value at index `i` reduced modulo `len`. This is the
    /// only arithmetic the scanner performs on the table.
    pub fn index_mod(&self, i: usize, len: usize) -> usize {
        debug_assert!(len > 0);

        // Cannot panic: the remainder is always less than a usize modulus
        (&self.values[i] % BigUint::from(len)).to_usize().unwrap()
    }
}
