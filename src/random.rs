//! Seeded, reproducible randomness for maze carving.
//!
//! Maze layouts are only reproducible if every random choice comes from a generator whose whole
//! output stream is fixed by its seed, so carving never touches `thread_rng`.

use std::time::{SystemTime, UNIX_EPOCH};

use error_chain::bail;
use rand::{Error as RandError, RngCore, SeedableRng};

use crate::errors::*;

const STATE_INCREMENT: u32 = 0x6D2B_79F5;
const TWO_POW_32: f64 = 4_294_967_296.0;

/// The mulberry32 generator: 32 bits of state advanced by a fixed odd constant each call, the output
/// mixed by two xorshift-multiply rounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    pub fn new(seed: u32) -> Mulberry32 {
        Mulberry32 { state: seed }
    }

    /// A generator seeded from the wall clock. The layout it produces cannot be reproduced
    /// unless the seed is recorded, see `time_seed`.
    pub fn from_time() -> Mulberry32 {
        Mulberry32::new(time_seed())
    }

    /// Next value in [0, 1).
    #[inline]
    pub fn next_float(&mut self) -> f64 {
        f64::from(self.next_u32()) / TWO_POW_32
    }
}

impl RngCore for Mulberry32 {
    fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(STATE_INCREMENT);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    fn next_u64(&mut self) -> u64 {
        let low = u64::from(self.next_u32());
        let high = u64::from(self.next_u32());
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> ::std::result::Result<(), RandError> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Mulberry32 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Mulberry32 {
        Mulberry32::new(u32::from_le_bytes(seed))
    }
}

/// Milliseconds since the unix epoch truncated to 32 bits.
pub fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u32)
        .unwrap_or(0)
}

/// Uniform integer in [0, bound). An empty range has nothing to choose from.
pub fn random_int(rng: &mut Mulberry32, bound: usize) -> Result<usize> {
    if bound == 0 {
        bail!(ErrorKind::EmptyInput);
    }
    let scaled = (rng.next_float() * bound as f64).floor() as usize;
    // Float rounding can land exactly on the bound for very large ranges.
    Ok(scaled.min(bound - 1))
}

/// Uniformly chosen element of a non-empty slice.
pub fn sample_one<'a, T>(rng: &mut Mulberry32, items: &'a [T]) -> Result<&'a T> {
    if items.is_empty() {
        bail!(ErrorKind::EmptyInput);
    }
    let index = random_int(rng, items.len())?;
    Ok(&items[index])
}
