pub const N: usize = 624;
const M: usize = 397;
const A: u32 = 0x9908b0df;
pub const B: u32 = 0x9d2c5680;
pub const C: u32 = 0xefc60000;
pub const U: u32 = 11;
pub const S: u32 = 7;
pub const T: u32 = 15;
pub const L: u32 = 18;
const SEED_MULTIPLIER: u32 = 69069;
const UPPER_MASK: u32 = 0x80000000;
const LOWER_MASK: u32 = 0x7fffffff;

use super::auto_seed::{auto_seed, Clock, SeedHasher, SeedSource, SystemClock, GLOBAL_HASHER};
use super::Prng;
use std::fmt;
use utils::errors::{Error, Result};

/// Twister seeded through a 69069 LCG instead of the usual Knuth recurrence.
///
/// Output is bit-compatible with the legacy `cRZRandomSuper` generator.
#[derive(Clone, PartialEq, Eq)]
pub struct RandomSuper {
    state: [u32; N],
    cursor: usize,
    remaining: i32,
}

impl Prng for RandomSuper {
    /// `AUTO_SEED` seeds from the system clock, anything else seeds explicitly.
    fn new(seed: u32) -> RandomSuper {
        RandomSuper::with_source(SeedSource::from(seed))
    }

    fn random_uint32_uniform(&mut self) -> u32 {
        self.remaining -= 1;
        if self.remaining < 0 {
            self.reload();
            self.remaining -= 1;
        }

        let mut y = self.state[self.cursor];
        self.cursor += 1;

        y ^= y >> U;
        y ^= (y << S) & B;
        y ^= (y << T) & C;
        y ^= y >> L;

        y
    }
}

impl RandomSuper {
    pub fn with_source(source: SeedSource) -> RandomSuper {
        let mut rng = RandomSuper {
            state: [0; N],
            cursor: 0,
            remaining: 0,
        };
        rng.seed_with_source(source);
        rng
    }

    /// Reseeds in place. `AUTO_SEED` reads the system clock.
    pub fn seed(&mut self, seed: u32) {
        self.seed_with_source(SeedSource::from(seed));
    }

    pub fn seed_with_source(&mut self, source: SeedSource) {
        match source {
            SeedSource::Explicit(seed) => self.seed_explicit(seed),
            SeedSource::Auto => self.seed_from_clock(&SystemClock, &GLOBAL_HASHER),
        }
    }

    pub fn seed_from_clock<C: Clock>(&mut self, clock: &C, hasher: &SeedHasher) {
        let seed = auto_seed(clock, hasher);
        self.seed_explicit(seed);
    }

    fn seed_explicit(&mut self, seed: u32) {
        let mut x = seed | 1;

        for word in self.state.iter_mut() {
            *word = (x.wrapping_mul(SEED_MULTIPLIER) >> 16) | (x & 0xffff0000);
            x = x
                .wrapping_mul(SEED_MULTIPLIER)
                .wrapping_add(1)
                .wrapping_mul(SEED_MULTIPLIER)
                .wrapping_add(1);
        }

        self.reload();
    }

    fn reload(&mut self) {
        for kk in 0..(N - M) {
            self.state[kk] = twist(self.state[kk], self.state[kk + 1], self.state[kk + M]);
        }

        for kk in (N - M)..(N - 1) {
            self.state[kk] = twist(self.state[kk], self.state[kk + 1], self.state[kk - (N - M)]);
        }

        self.state[N - 1] = twist(self.state[N - 1], self.state[0], self.state[M - 1]);

        self.remaining = N as i32;
        self.cursor = 0;
    }

    pub fn get_state(&self) -> &[u32] {
        &self.state[..]
    }

    pub fn get_state_val(&self, i: usize) -> u32 {
        self.state[i]
    }

    /// Position of the next word to be tempered. `N` means the next draw reloads.
    pub fn get_index(&self) -> usize {
        self.cursor
    }

    /// Restores a snapshot taken with `get_state` and `get_index`.
    pub fn set_state(&mut self, new_state: &[u32], new_index: usize) -> Result<()> {
        if new_state.len() != N {
            return Err(Error::StateLength {
                expected: N,
                found: new_state.len(),
            });
        }
        if new_index > N {
            return Err(Error::CursorOutOfRange {
                cursor: new_index,
                max: N,
            });
        }

        self.state.copy_from_slice(new_state);
        self.cursor = new_index;
        self.remaining = (N - new_index) as i32;

        Ok(())
    }
}

impl fmt::Debug for RandomSuper {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("RandomSuper")
            .field("cursor", &self.cursor)
            .field("remaining", &self.remaining)
            .field("head", &&self.state[..4])
            .finish()
    }
}

// Takes the top bit of `hi` and the low 31 bits of `lo`. The low bit is
// smeared across the word to select the matrix constant without a branch.
#[inline]
fn twist(hi: u32, lo: u32, far: u32) -> u32 {
    let y = (hi & UPPER_MASK) | (lo & LOWER_MASK);
    let mag = ((((y << 31) as i32) >> 31) as u32) & A;
    far ^ (y >> 1) ^ mag
}
